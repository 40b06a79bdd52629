//! # Configuration Module
//!
//! Settings are layered from built-in defaults, `config/default.toml`,
//! `config/{RUN_ENV}.toml`, `APP__` prefixed environment variables and a
//! `.env` file (via dotenvy). `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`
//! override everything else.
//!
//! Leaving `database.url` unset runs the server on the in-memory store.
//!
//! ```rust,ignore
//! use skillswap_server::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Listening on {}", settings.server_addr());
//! ```

mod settings;

pub use settings::*;
