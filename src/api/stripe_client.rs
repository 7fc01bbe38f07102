// src/api/stripe_client.rs
//
// Minimal client for the Stripe PaymentIntents API (https://api.stripe.com)
// Authorization: Bearer <secret key>, form-encoded bodies.

use serde::Deserialize;
use std::fmt;

const STRIPE_API_BASE: &str = "https://api.stripe.com";

fn api_base() -> String {
    std::env::var("STRIPE_API_BASE_URL").unwrap_or_else(|_| STRIPE_API_BASE.to_string())
}

#[derive(Debug)]
pub enum StripeError {
    Http(reqwest::Error),
    Api { status: u16, body: String },
    InvalidResponse(String),
}

impl fmt::Display for StripeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripeError::Http(e) => write!(f, "http error: {e}"),
            StripeError::Api { status, body } => {
                write!(f, "stripe api error status={status} body={body}")
            }
            StripeError::InvalidResponse(e) => write!(f, "invalid response: {e}"),
        }
    }
}

impl From<reqwest::Error> for StripeError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

#[derive(Debug, Deserialize)]
pub struct PaymentIntentResponse {
    pub id: String,
    pub client_secret: String,
}

/// Creates a payment intent for `amount` minor units and returns the client
/// secret the browser needs to confirm the payment.
pub async fn create_payment_intent(
    secret_key: &str,
    amount: i64,
    currency: &str,
) -> Result<PaymentIntentResponse, StripeError> {
    let client = reqwest::Client::new();

    let params = [
        ("amount", amount.to_string()),
        ("currency", currency.to_string()),
        ("payment_method_types[]", "card".to_string()),
    ];

    let resp = client
        .post(format!("{}/v1/payment_intents", api_base()))
        .bearer_auth(secret_key)
        .form(&params)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(StripeError::Api {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str::<PaymentIntentResponse>(&body)
        .map_err(|e| StripeError::InvalidResponse(format!("{e}; body={body}")))
}
