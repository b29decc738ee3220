pub mod auth;
pub mod config;
pub mod datetime;
pub mod encoding;
pub mod error;
pub mod http;
pub mod naming;
pub mod rpc;
pub mod server;
pub mod status;

pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use server::DashboardServer;
