use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        // field_errors() iterates a HashMap
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::ValidationError(field_errors)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => AppError::NotFound("File not found".into()),
            _ => AppError::InternalError(format!("IO error: {}", err)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<CarrouselError> for AppError {
    fn from(err: CarrouselError) -> Self {
        match err {
            CarrouselError::EmptyMedia => AppError::NotFound("No media to display".into()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// Raised when a carrousel is built against an empty media list.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CarrouselError {
    #[display("Carrousel requires at least one media item")]
    EmptyMedia,
}

impl std::error::Error for CarrouselError {}

/// Errors raised while loading `photographers.json`.
#[derive(Debug, Display)]
pub enum CatalogError {
    #[display("Failed to read catalog {_0}: {_1}")]
    Read(String, std::io::Error),

    #[display("Malformed catalog: {_0}")]
    Malformed(serde_json::Error),

    #[display("Duplicate photographer id {_0}")]
    DuplicatePhotographer(u64),

    #[display("Duplicate media id {_0}")]
    DuplicateMedia(u64),

    #[display("Media {media_id} references unknown photographer {photographer_id}")]
    UnknownPhotographer { media_id: u64, photographer_id: u64 },
}

impl std::error::Error for CatalogError {}

/// A media record that does not carry exactly one source file.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum MediaRecordError {
    #[display("media {_0} has both an image and a video")]
    BothSources(u64),

    #[display("media {_0} has neither an image nor a video")]
    NoSource(u64),
}

impl std::error::Error for MediaRecordError {}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
