/// HTTP request and response handling utilities.
pub mod http;

/// Input/output utilities for file manipulation.
pub mod io;
