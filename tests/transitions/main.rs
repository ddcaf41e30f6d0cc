//! Transition Classification Integration Tests
//!
//! End-to-end tests for classification through the facade and through
//! caller-supplied stores.

#[path = "../common/mod.rs"]
mod common;

mod outcomes;
mod room_visibility;
