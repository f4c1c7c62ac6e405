pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod key_expr;
pub mod models;
pub mod service;

pub use client::LookupClient;
pub use config::Config;
pub use error::{LookupError, Result};
pub use key_expr::lookup_term;
pub use service::Lookup;
