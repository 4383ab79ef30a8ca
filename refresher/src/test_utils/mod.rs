//! Test utilities
//!
//! Hand-written mocks and page fixtures for unit testing.
//!
//! The feed mock is scripted rather than generated with mockall so tests
//! can hold a response back and release it later, which is how response
//! ordering gets exercised.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
