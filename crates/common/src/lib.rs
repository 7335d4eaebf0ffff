//! Common utilities and constants used across the atlas codebase.
//!
//! This crate provides shared functionality for the atlas workspace, including
//! HTTP helpers, filesystem helpers and default settings.

/// Constants used throughout the atlas codebase.
pub mod constants;

/// General utility functions and types for common tasks.
pub mod utils;
