use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    repositories::payment_gateway::PaymentGateway, value_objects::payments::GatewayPayment,
};

/// Minimal Mercado Pago client built on reqwest.
pub struct MercadoPagoClient {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
    public_base_url: String,
}

#[derive(Debug, Deserialize)]
struct MercadoPagoErrorEnvelope {
    message: Option<String>,
    error: Option<String>,
    status: Option<i64>,
}

impl MercadoPagoClient {
    pub fn new(access_token: String, base_url: String, public_base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if let Ok(envelope) = serde_json::from_str::<MercadoPagoErrorEnvelope>(&body) {
            error!(
                context,
                http_status = status.as_u16(),
                gateway_status = envelope.status,
                message = envelope.message.as_deref().or(envelope.error.as_deref()),
                "mercado pago request failed"
            );
        } else {
            error!(context, http_status = status.as_u16(), body, "mercado pago request failed");
        }

        anyhow::bail!("mercado pago {} failed with status {}", context, status)
    }

    fn preference_body(&self, amount: f64, reservation_id: Option<Uuid>) -> serde_json::Value {
        let mut body = json!({
            "items": [{
                "title": "Renta de Equipo",
                "quantity": 1,
                "unit_price": amount,
                "currency_id": "MXN",
            }],
            "back_urls": {
                "success": format!("{}/api/pagos/success", self.public_base_url),
                "failure": format!("{}/api/pagos/failure", self.public_base_url),
                "pending": format!("{}/api/pagos/pending", self.public_base_url),
            },
            "notification_url": format!("{}/api/pagos/webhook", self.public_base_url),
            "auto_return": "approved",
        });

        if let Some(reservation_id) = reservation_id {
            body["external_reference"] = json!(reservation_id.to_string());
        }

        body
    }
}

#[async_trait]
impl PaymentGateway for MercadoPagoClient {
    async fn create_preference(
        &self,
        amount: f64,
        reservation_id: Option<Uuid>,
    ) -> Result<serde_json::Value> {
        // https://www.mercadopago.com.mx/developers/es/reference/preferences/_checkout_preferences/post
        let resp = self
            .http
            .post(format!("{}/checkout/preferences", self.base_url))
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .json(&self.preference_body(amount, reservation_id))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create preference").await?;

        Ok(resp.json().await?)
    }

    async fn get_payment(&self, payment_id: String) -> Result<GatewayPayment> {
        // https://www.mercadopago.com.mx/developers/es/reference/payments/_payments_id/get
        let resp = self
            .http
            .get(format!("{}/v1/payments/{}", self.base_url, payment_id))
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "get payment").await?;

        let payment: GatewayPayment = resp.json().await?;
        Ok(payment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MercadoPagoClient {
        MercadoPagoClient::new(
            "TEST-TOKEN".to_string(),
            "https://api.mercadopago.com".to_string(),
            "https://rentek.onrender.com/".to_string(),
        )
    }

    #[test]
    fn preference_body_carries_back_urls_and_amount() {
        let body = client().preference_body(150.0, None);
        assert_eq!(body["items"][0]["unit_price"], 150.0);
        assert_eq!(body["items"][0]["currency_id"], "MXN");
        assert_eq!(
            body["back_urls"]["success"],
            "https://rentek.onrender.com/api/pagos/success"
        );
        assert_eq!(
            body["notification_url"],
            "https://rentek.onrender.com/api/pagos/webhook"
        );
        assert!(body.get("external_reference").is_none());
    }

    #[test]
    fn preference_body_sets_external_reference() {
        let reservation_id = Uuid::new_v4();
        let body = client().preference_body(99.5, Some(reservation_id));
        assert_eq!(body["external_reference"], reservation_id.to_string());
    }
}
