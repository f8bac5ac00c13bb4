//! # Repository Layer
//!
//! This module contains the repository implementation that encapsulates
//! SeaORM operations for the signup entity, behind a narrow store trait so
//! the endpoint logic is testable with in-memory fakes.

pub mod signup;

pub use signup::{NewSignup, SignupRepository, SignupStore};
