//! HTTP boundary for pagecheck: a small axum app exposing the check
//! pipeline at `POST /api/check` with an identity-attribution seam and
//! best-effort persistence.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use auth::{AuthVerifier, Identity, NoAuth, StaticTokenAuth};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::{build_router, serve};
pub use state::AppState;
