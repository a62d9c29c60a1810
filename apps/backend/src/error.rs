use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::trace_ctx;

/// RFC 7807 problem details body carried by every error response.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: &'static str, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: &'static str, detail: String },
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("Forbidden")]
    Forbidden,
    #[error("Forbidden: User not found")]
    ForbiddenUserNotFound,
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
    #[error("Payments unavailable: {detail}")]
    PaymentsUnavailable { detail: String },
    #[error("Upstream payment provider error: {detail}")]
    UpstreamPayments { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code carried in the problem body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => code,
            AppError::BadRequest { code, .. } => code,
            AppError::NotFound { code, .. } => code,
            AppError::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            AppError::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            AppError::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            AppError::Forbidden => "FORBIDDEN",
            AppError::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            AppError::Db { .. } => "DB_ERROR",
            AppError::DbUnavailable { .. } => "DB_UNAVAILABLE",
            AppError::PaymentsUnavailable { .. } => "PAYMENTS_UNAVAILABLE",
            AppError::UpstreamPayments { .. } => "UPSTREAM_PAYMENTS",
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// Human-readable detail for the problem body.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Db { detail }
            | AppError::DbUnavailable { detail }
            | AppError::PaymentsUnavailable { detail }
            | AppError::UpstreamPayments { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail.clone(),
            AppError::UnauthorizedMissingBearer => {
                "Missing or malformed Authorization header".to_string()
            }
            AppError::UnauthorizedInvalidJwt => "Invalid authentication token".to_string(),
            AppError::UnauthorizedExpiredJwt => "Authentication token has expired".to_string(),
            AppError::Forbidden => "Access denied".to_string(),
            AppError::ForbiddenUserNotFound => "Access denied: user not found".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnauthorizedMissingBearer
            | AppError::UnauthorizedInvalidJwt
            | AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::Forbidden | AppError::ForbiddenUserNotFound => StatusCode::FORBIDDEN,
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DbUnavailable { .. } | AppError::PaymentsUnavailable { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::UpstreamPayments { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn validation(code: &'static str, detail: impl Into<String>) -> Self {
        AppError::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: &'static str, detail: impl Into<String>) -> Self {
        AppError::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: &'static str, detail: impl Into<String>) -> Self {
        AppError::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        AppError::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        AppError::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        AppError::UnauthorizedExpiredJwt
    }

    pub fn forbidden() -> Self {
        AppError::Forbidden
    }

    pub fn forbidden_user_not_found() -> Self {
        AppError::ForbiddenUserNotFound
    }

    pub fn db(detail: impl Into<String>) -> Self {
        AppError::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        AppError::DbUnavailable {
            detail: detail.into(),
        }
    }

    pub fn payments_unavailable(detail: impl Into<String>) -> Self {
        AppError::PaymentsUnavailable {
            detail: detail.into(),
        }
    }

    pub fn upstream_payments(detail: impl Into<String>) -> Self {
        AppError::UpstreamPayments {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        AppError::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal {
            detail: detail.into(),
        }
    }
}

/// Turns `SOME_ERROR_CODE` into `Some Error Code` for the problem title.
fn humanize_code(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        match &err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                AppError::db_unavailable(err.to_string())
            }
            _ => AppError::db(err.to_string()),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::config(format!("environment variable error: {err}"))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::upstream_payments(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.code();
        let status = self.status();
        let trace_id = trace_ctx::trace_id();

        let problem = ProblemDetails {
            type_: format!("https://bistro.app/errors/{}", code.to_uppercase()),
            title: humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
        };

        let mut builder = HttpResponse::build(status);
        builder.content_type("application/problem+json");
        builder.insert_header(("x-trace-id", trace_id));
        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header(("WWW-Authenticate", "Bearer"));
        }
        if status == StatusCode::SERVICE_UNAVAILABLE {
            builder.insert_header(("Retry-After", "1"));
        }
        builder.json(problem)
    }
}
