pub mod config;
pub mod error;
pub mod params;
pub mod server;
pub mod telemetry;

pub use config::{load_dotenv, normalize_base_url, ServerConfig};
pub use error::{Result, RuntimeError};
pub use params::{required_param, MissingParam};
pub use server::{health, serve, serve_on, shutdown_signal};
pub use telemetry::init_tracing;
