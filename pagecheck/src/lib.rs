// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    classifier_from_env,
    config_dir_from,
    database_path,
    load_reputation,
    reputation_csv_path,
};
