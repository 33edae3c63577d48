mod config;
mod http_layers;
pub mod metrics;
#[allow(clippy::module_inception)]
mod server;
mod state;

pub use config::ServerConfig;
pub use http_layers::*;
pub use server::{make_app, run_server};
pub use state::ServerState;
