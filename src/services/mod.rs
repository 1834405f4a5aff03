//! Request-scoped services over the shared store.
//!
//! Each operation acquires the connection, acts, and completes within a
//! single call; no state is held between requests.

pub mod inclusions;
pub mod packages;
pub mod reviews;
