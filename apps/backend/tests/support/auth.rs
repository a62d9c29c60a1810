//! Token-minting helpers for tests.

use std::time::SystemTime;

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

/// Mint a token for the given email, valid from now.
pub fn mint_test_token(email: &str, sec: &SecurityConfig) -> String {
    mint_access_token(email, SystemTime::now(), sec).expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(email, sec))
}

/// Token minted two hours in the past, well beyond the 1h TTL plus leeway.
pub fn mint_expired_token(email: &str, sec: &SecurityConfig) -> String {
    let past_time = SystemTime::now()
        .checked_sub(std::time::Duration::from_secs(7200))
        .unwrap();
    mint_access_token(email, past_time, sec).expect("should mint expired token successfully")
}
