//! Cafe Server - server-rendered directory of cafes
//!
//! # Module structure
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── db/            # SQLite pool and cafe repository
//! ├── forms/         # form parsing and validation
//! ├── api/           # HTTP routes and handlers
//! ├── views/         # askama page templates
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod forms;
pub mod utils;
pub mod views;

// Re-export public types
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read the configuration and install the logger
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_dir.as_deref())?;
    Ok(config)
}
