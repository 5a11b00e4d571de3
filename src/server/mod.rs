//! HTTP surface of the alert service
//!
//! actix-web server, shared handler state, and the route modules for
//! alerts and health.

pub mod builder;
pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
