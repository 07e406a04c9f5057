//! Command Line Interface
//!
//! The terminal counterpart of the page-based web client: every page is a
//! route that renders plain text, and every record list supports the same
//! add / edit / list / delete flow with a confirmation before deletion.
//!
//! # Architecture
//!
//! - **Config**: defaults, optional `cloudbook.toml`, `CLOUDBOOK_*` env vars
//! - **Routes**: page table and index redirects
//! - **Render**: report and list layouts
//! - **App**: command execution against a key/value store
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{App, config::AppConfig};
//!
//! let config = AppConfig::load(None)?;
//! let store = Arc::new(FileStore::new(&config.data_dir));
//! let app = App::new(store, &config)?;
//! print!("{}", app.open("/reports").await?);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod routes;

pub use app::{App, Confirm};
pub use cli::{Cli, Command};
pub use config::AppConfig;
pub use error::CliError;
pub use routes::{resolve, Route};
