use serde::Deserialize;

/// Payload for the reservation confirmation email.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationConfirmationModel {
    pub email: String,
    pub name: String,
    pub amount: f64,
    pub delivery_date: String,
    pub machinery_name: String,
    pub machinery_details: String,
    pub rental_days: i64,
}

impl ReservationConfirmationModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.email.trim().is_empty()
            || self.name.trim().is_empty()
            || self.delivery_date.trim().is_empty()
            || self.machinery_name.trim().is_empty()
            || self.machinery_details.trim().is_empty()
        {
            return Err("Faltan datos en la solicitud".to_string());
        }
        if self.amount <= 0.0 || self.rental_days <= 0 {
            return Err("Faltan datos en la solicitud".to_string());
        }
        Ok(())
    }
}
