//! Tiffin API - Restaurant supply ordering backend
//!
//! REST backend for a restaurant supply ordering app: inventory catalog,
//! per-user carts, VAT-priced orders with stock decrements, and kitchen
//! waste tracking. Built on Axum and SeaORM with clean architecture,
//! following DDD, SOLID, and DRY principles.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and logic
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (database, unit of work)
//! - **session**: Per-user session context (current user, live cart)
//! - **api**: HTTP handlers, extractors, and routes
//! - **types**: Shared types (responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod session;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Cart, CartLine, Order, User, WasteRecord};
pub use errors::{AppError, AppResult};
