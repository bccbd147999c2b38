//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - JWT and mock session validators
//! - `http` - axum REST surface
//! - `memory` - In-memory stores for tests and local runs
//! - `postgres` - sqlx-backed stores

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
