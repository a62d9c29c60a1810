use jsonwebtoken::Algorithm;

/// Signing configuration for issued credentials.
///
/// The secret comes from `BACKEND_JWT_SECRET` in production; the `Default`
/// impl exists only so tests can build state without touching the
/// environment.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm; HS256 everywhere today
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"bistro-test-signing-secret".to_vec())
    }
}
