use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryStatus {
    #[serde(rename = "pendiente")]
    Pendiente,
    #[serde(rename = "en camino")]
    EnCamino,
    #[serde(rename = "entregado")]
    Entregado,
    #[serde(rename = "cancelado")]
    Cancelado,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pendiente => "pendiente",
            DeliveryStatus::EnCamino => "en camino",
            DeliveryStatus::Entregado => "entregado",
            DeliveryStatus::Cancelado => "cancelado",
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DeliveryStatus {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pendiente" => Ok(DeliveryStatus::Pendiente),
            "en camino" => Ok(DeliveryStatus::EnCamino),
            "entregado" => Ok(DeliveryStatus::Entregado),
            "cancelado" => Ok(DeliveryStatus::Cancelado),
            _ => Err(anyhow::anyhow!("unknown delivery status: {}", value)),
        }
    }
}
