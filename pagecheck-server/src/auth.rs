// Identity attribution seam. Verdicts never depend on who is asking; an
// identity only attributes the stored row. Real token verification lives
// behind the trait so deployments can plug their own verifier in.

use crate::error::{ApiError, ApiResult};
use async_trait::async_trait;

/// Who made the request, as far as the verifier can tell.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Turns an opaque bearer credential into an optional identity.
///
/// `Ok(None)` means anonymous (no credential presented), which is always
/// acceptable. An error means a credential was presented and rejected.
#[async_trait]
pub trait AuthVerifier: Send + Sync {
    async fn verify(&self, bearer: Option<&str>) -> ApiResult<Option<Identity>>;
}

/// Treats every request as anonymous, credential or not.
pub struct NoAuth;

#[async_trait]
impl AuthVerifier for NoAuth {
    async fn verify(&self, _bearer: Option<&str>) -> ApiResult<Option<Identity>> {
        Ok(None)
    }
}

/// Single shared-token verifier for small deployments: the configured token
/// maps to one fixed identity, anything else is rejected.
pub struct StaticTokenAuth {
    token: String,
    identity: Identity,
}

impl StaticTokenAuth {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            identity: Identity {
                id: user_id.into(),
                email: None,
                role: Some("service".to_string()),
            },
        }
    }
}

#[async_trait]
impl AuthVerifier for StaticTokenAuth {
    async fn verify(&self, bearer: Option<&str>) -> ApiResult<Option<Identity>> {
        match bearer {
            None => Ok(None),
            Some(token) if token == self.token => Ok(Some(self.identity.clone())),
            Some(_) => Err(ApiError::Authentication("invalid token".to_string())),
        }
    }
}
