use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use super::current_user::CurrentUser;
use crate::entities::users::UserRole;
use crate::error::AppError;
use crate::infra::db::require_db;
use crate::services::users;
use crate::state::app_state::AppState;

/// Verified caller whose user record carries the admin role.
///
/// Extraction chains the credential check, then looks the caller up by
/// email. A missing record and a non-admin role both deny with 403,
/// distinguished only by error code; absence of a row never grants access.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // CurrentUser never touches the body, so extract() is safe here
            // and the payload stays available for Json extractors.
            let current = CurrentUser::extract(&req).await?;

            let app_state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::internal("AppState not available"))?;
            let db = require_db(app_state)?;

            let user = users::find_by_email(db, &current.email).await?;
            let user = user.ok_or_else(AppError::forbidden_user_not_found)?;

            if user.role != UserRole::Admin {
                return Err(AppError::forbidden());
            }

            Ok(AdminUser {
                email: current.email,
            })
        })
    }
}
