//! Application submission endpoint.
//!
//! Each POST drives one `FormController` through a full submit attempt:
//! multipart fields feed the draft, the portfolio part (if any) is buffered,
//! and the controller runs validation, the optional upload, and the single
//! atomic insert. Outcomes map onto HTTP: rejection is a 400 with the
//! flagged field keys, a collaborator failure is a 500, and completion is a
//! 303 redirect to the confirmation view.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use recruit_core::models::{FieldKey, PortfolioFile};
use recruit_core::{AppError, FormController, SubmissionStatus, SubmitOutcome};

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::StoragePortfolioUploader;
use crate::state::AppState;

/// POST /api/applications
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = "applications",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Application recorded; redirect to the confirmation view"),
        (status = 400, description = "Required fields missing", body = ErrorResponse),
        (status = 500, description = "Upload or insert failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn submit_application(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let mut controller = FormController::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match FieldKey::parse(&name) {
            Some(FieldKey::Portfolio) => {
                let file_name = field.file_name().unwrap_or("portfolio").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let data = field.bytes().await?;

                if data.len() > state.storage.max_portfolio_size_bytes {
                    return Err(AppError::PayloadTooLarge(format!(
                        "Portfolio exceeds the maximum size of {} bytes",
                        state.storage.max_portfolio_size_bytes
                    ))
                    .into());
                }

                // An empty part means the file input was left blank.
                if !data.is_empty() {
                    controller.attach_portfolio(Some(PortfolioFile {
                        file_name,
                        content_type,
                        data,
                    }));
                }
            }
            Some(key) => {
                let value = field.text().await?;
                controller.update_field(key, value);
            }
            None => {
                tracing::debug!(field = %name, "Ignoring unknown form field");
            }
        }
    }

    let uploader = StoragePortfolioUploader::new(state.storage.storage.clone());

    match controller
        .submit(&uploader, &state.db.applications)
        .await
    {
        SubmitOutcome::Completed => {
            tracing::info!("Application recorded");
            Ok(Redirect::to("/thank-you").into_response())
        }
        SubmitOutcome::Rejected => {
            let fields: Vec<String> = controller
                .validation()
                .flagged()
                .map(|key| key.as_str().to_string())
                .collect();
            let message = status_message(controller.status(), "Invalid submission");
            Ok((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::with_fields(message, fields)),
            )
                .into_response())
        }
        SubmitOutcome::Failed => {
            let message = status_message(controller.status(), "Something went wrong.");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            )
                .into_response())
        }
    }
}

fn status_message(status: &SubmissionStatus, default: &str) -> String {
    match status {
        SubmissionStatus::Error(message) => message.clone(),
        _ => default.to_string(),
    }
}
