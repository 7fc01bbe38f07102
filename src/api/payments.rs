// src/api/payments.rs

use actix_web::{HttpResponse, get, patch, post, web};
use chrono::Utc;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::AppState;
use crate::api::stripe_client;
use crate::error::ApiError;
use crate::models::Payment;
use crate::store::{insert_echo, parse_object_id, update_echo};

const PAYMENT_CURRENCY: &str = "usd";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateIntentRequest {
    pub price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SeatDecrementRequest {
    pub available_seats: i64,
}

/// Major-unit price to minor units, rounded half away from zero:
/// 19.99 maps to exactly 1999.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

#[utoipa::path(
    request_body = CreateIntentRequest,
    responses((status = 200, description = "Client secret for the new intent")),
    tag = "payments"
)]
#[post("/student/selected-course/create-payment-intent")]
pub async fn create_payment_intent(
    state: web::Data<AppState>,
    payload: web::Json<CreateIntentRequest>,
) -> Result<HttpResponse, ApiError> {
    let price = payload.price;
    if !price.is_finite() || price <= 0.0 {
        return Err(ApiError::Validation("price must be a positive number".to_string()));
    }

    let amount = to_minor_units(price);
    log::info!("creating payment intent amount={amount} currency={PAYMENT_CURRENCY}");
    let intent =
        stripe_client::create_payment_intent(&state.stripe_secret_key, amount, PAYMENT_CURRENCY)
            .await?;

    Ok(HttpResponse::Ok().json(json!({ "clientSecret": intent.client_secret })))
}

/// Records a confirmed payment. Replays of the same transaction id return
/// the earlier acknowledgement instead of inserting twice; the surrounding
/// checkout steps (seat decrement, selection delete) are separate calls.
#[utoipa::path(
    request_body = Payment,
    responses((status = 200, description = "Insert result")),
    tag = "payments"
)]
#[post("/student/selected-course/payment-info")]
pub async fn payment_info(
    state: web::Data<AppState>,
    payload: web::Json<Payment>,
) -> Result<HttpResponse, ApiError> {
    let mut payment = payload.into_inner();
    if payment.transaction_id.trim().is_empty() {
        return Err(ApiError::Validation("transaction_id is required".to_string()));
    }
    if payment.user_email.trim().is_empty() {
        return Err(ApiError::Validation("user_email is required".to_string()));
    }

    let payments = state.store.payments();
    if payments
        .find_one(doc! { "transaction_id": &payment.transaction_id })
        .await?
        .is_some()
    {
        return Ok(HttpResponse::Ok().json(json!({
            "message": "payment already recorded",
            "transactionId": payment.transaction_id,
        })));
    }

    if payment.date.is_none() {
        payment.date = Some(Utc::now().to_rfc3339());
    }

    let result = payments.insert_one(&payment).await?;
    Ok(HttpResponse::Ok().json(insert_echo(&result)))
}

/// The new seat count is derived from the count supplied in the body, not
/// re-read from the store. Concurrent checkouts can race; kept as-is.
#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    request_body = SeatDecrementRequest,
    responses((status = 200, description = "Update result")),
    tag = "payments"
)]
#[patch("/student/course/available-seat-decrement/{id}")]
pub async fn available_seat_decrement(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<SeatDecrementRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let seats = payload.available_seats;
    if seats <= 0 {
        return Err(ApiError::Validation(
            "available_seats must be positive to decrement".to_string(),
        ));
    }

    let result = state
        .store
        .courses()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "available_seats": seats - 1 } },
        )
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, description = "The student's payments")),
    tag = "payments"
)]
#[get("/student/enrolled-course/{email}")]
pub async fn enrolled_courses(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let payments: Vec<Payment> = state
        .store
        .payments()
        .find(doc! { "user_email": &email })
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(payments))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, description = "The student's payments, newest first")),
    tag = "payments"
)]
#[get("/student/payment-history/{email}")]
pub async fn payment_history(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let payments: Vec<Payment> = state
        .store
        .payments()
        .find(doc! { "user_email": &email })
        .sort(doc! { "date": -1 })
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(payments))
}
