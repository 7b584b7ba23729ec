use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    #[serde(rename = "pendiente")]
    Pendiente,
    #[serde(rename = "pagado")]
    Pagado,
    #[serde(rename = "rechazado")]
    Rechazado,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pendiente => "pendiente",
            PaymentStatus::Pagado => "pagado",
            PaymentStatus::Rechazado => "rechazado",
        }
    }
}

impl Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for PaymentStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pendiente" => Ok(PaymentStatus::Pendiente),
            "pagado" => Ok(PaymentStatus::Pagado),
            "rechazado" => Ok(PaymentStatus::Rechazado),
            _ => Err(anyhow::anyhow!("unknown payment status: {}", value)),
        }
    }
}
