//! HTTP handlers
//!
//! Axum request handlers for the JSON endpoint and the HTML form.

use axum::{
    Form, Json,
    extract::rejection::{FormRejection, JsonRejection},
    response::Html,
};
use serde::Serialize;
use serde_json::Value;
use tax_core::RawTaxInput;
use tracing::info;

use crate::error::ApiError;
use crate::form::{CalcTaxForm, FormField, SEVERANCE_PAY_ERROR, YEARS_OF_SERVICE_ERROR};
use crate::pages::CalculatorPage;

#[derive(Debug, Serialize)]
pub struct CalcTaxResponse {
    pub tax: u64,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /calc-tax`
///
/// Accepts `{ yearsOfService, isDisability, isBoardMember, severancePay }`
/// and returns `{ tax }`. Anything else is rejected with 400.
pub async fn calc_tax(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CalcTaxResponse>, ApiError> {
    let Json(body) = payload?;
    if !body.is_object() {
        tracing::debug!("request body is not a JSON object");
        return Err(ApiError::InvalidParameter);
    }

    let raw: RawTaxInput = serde_json::from_value(body)?;
    let result = tax_core::calculate(raw)?;

    info!(tax = result.withholding_tax, "calc-tax");
    Ok(Json(CalcTaxResponse {
        tax: result.withholding_tax,
    }))
}

/// `GET /` renders the empty calculator form.
pub async fn show_form() -> Html<String> {
    Html(CalculatorPage::default().render())
}

/// `POST /` validates the submitted form and renders the result or the
/// field errors. A body that cannot be decoded at all re-renders the default
/// form with both fields flagged.
pub async fn submit_form(payload: Result<Form<CalcTaxForm>, FormRejection>) -> Html<String> {
    let form = match payload {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected form body");
            let page = CalculatorPage {
                form: CalcTaxForm::default(),
                errors: vec![
                    (FormField::YearsOfService, YEARS_OF_SERVICE_ERROR),
                    (FormField::SeverancePay, SEVERANCE_PAY_ERROR),
                ],
                result: None,
            };
            return Html(page.render());
        }
    };

    let page = match form.validate() {
        Ok(input) => CalculatorPage {
            result: Some(tax_core::calculations::breakdown(&input)),
            form,
            errors: Vec::new(),
        },
        Err(errors) => {
            tracing::debug!(count = errors.len(), "form rejected");
            CalculatorPage {
                form,
                errors,
                result: None,
            }
        }
    };

    Html(page.render())
}
