//! Test utilities for HTTP-level and use case testing.
//!
//! This module provides:
//! - Stub repositories that fail on every call, for exercising error paths
//! - A builder that wires an `AppState` around an in-memory store

mod app_state_builder;
mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
