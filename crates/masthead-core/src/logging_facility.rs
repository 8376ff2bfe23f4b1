//! Structured logging facility for Masthead
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - `log_ignored!` for assignments that are dropped without an error
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use masthead_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::from_env());
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile, UnknownProfile, PROFILE_ENV_VAR};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
