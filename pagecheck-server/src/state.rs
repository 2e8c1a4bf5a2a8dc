use crate::auth::AuthVerifier;
use pagecheck_core::data::Database;
use pagecheck_pipeline::Pipeline;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Shared application state, cloned per request.
///
/// The database sits behind a blocking mutex; inserts run on the blocking
/// pool and are best-effort, so contention never shows up on the request
/// path as anything but a short spawn_blocking hop.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub database: Option<Arc<Mutex<Database>>>,
    pub auth: Arc<dyn AuthVerifier>,
    pub started: Instant,
}

impl AppState {
    pub fn new(pipeline: Pipeline, database: Option<Database>, auth: Arc<dyn AuthVerifier>) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            database: database.map(|db| Arc::new(Mutex::new(db))),
            auth,
            started: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
