//! Word service and HTTP API for Wordbank.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing, fetching (by id or at random), and
//!   creating word records
//! - **Static file fallback** for a bundled front-end, when configured
//!
//! # Architecture
//!
//! ```text
//! request
//!   -> assign_request_id   (fresh correlation id in the request extensions)
//!   -> access_log          (one log line per request, after completion)
//!   -> handlers            (parse path/body, map errors to JSON envelopes)
//!   -> WordService         (log with correlation id, shape records)
//!   -> WordStore           (in-memory or PostgreSQL)
//! ```
//!
//! The store is constructed once at process start and shared through
//! [`AppState`]; there is no global instance.

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;
pub mod service;
pub mod state;

// Re-export primary types for convenience.
pub use crate::config::{AppConfig, DatabaseKind};
pub use context::{RequestContext, RequestId};
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use service::WordService;
pub use state::AppState;
