use std::time::SystemTime;

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::mint_access_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Sign-in payload. Clients post their whole profile object; only the
/// email becomes a claim, everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct IssueTokenRequest {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct IssueTokenResponse {
    pub token: String,
}

/// Issue a signed access token for the client's sign-in payload.
/// The token only asserts the email; role checks always go to the store.
async fn issue_token(
    req: web::Json<IssueTokenRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }

    let token = mint_access_token(&req.email, SystemTime::now(), app_state.security())?;

    Ok(HttpResponse::Ok().json(IssueTokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/jwt").route(web::post().to(issue_token)));
}
