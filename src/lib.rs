//! # Prelaunch Signup Service Library
//!
//! This library provides the core functionality for the prelaunch signup
//! service: the signup endpoint, the form client, and the confirmation
//! email helper.

pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod notify;
pub mod repositories;
pub mod server;
pub use migration;
