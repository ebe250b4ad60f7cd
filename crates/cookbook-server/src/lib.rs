//! HTTP server for the cookbook.
//!
//! Thin transport over the cookbook crates:
//!
//! - `POST /parse` — normalize a handwritten name
//! - `POST /entry` — admit an ingredient or recipe through the gate
//! - `GET /summary?name=` — flatten a recipe into ingredient totals
//! - `GET /health`
//!
//! Every failure is answered with `400 Bad Request` and an empty body; the
//! precise reason is logged.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::{ParseRequest, ParseResponse, SummaryQuery};
pub use router::build_router;
pub use server::CookbookServer;
pub use state::AppState;
