//! Error types: domain exception carriers and download-path classification.

use std::fmt;
use thiserror::Error;

fn render_code_msg(code: &str, msg: &str) -> String {
    if msg.is_empty() {
        code.to_string()
    } else {
        format!("{}: {}", code, msg)
    }
}

/// Generic domain exception carrying a stable error-code token and an optional
/// human-readable message (e.g. `FILE_DELETE_ERROR`).
#[derive(Debug, Clone, Error)]
#[error("{}", render_code_msg(.code, .msg))]
pub struct Exception {
    pub code: String,
    pub msg: String,
}

impl Exception {
    pub fn new(code: impl Into<String>) -> Self {
        Exception {
            code: code.into(),
            msg: String::new(),
        }
    }

    pub fn with_msg(code: impl Into<String>, msg: impl Into<String>) -> Self {
        Exception {
            code: code.into(),
            msg: msg.into(),
        }
    }
}

/// Like [`Exception`] but tied to an HTTP response status.
#[derive(Debug, Clone, Error)]
#[error("HTTP {status} {}", render_code_msg(.code, .msg))]
pub struct HttpException {
    pub status: u16,
    pub code: String,
    pub msg: String,
}

impl HttpException {
    pub fn new(status: u16, code: impl Into<String>) -> Self {
        HttpException {
            status,
            code: code.into(),
            msg: String::new(),
        }
    }

    pub fn with_msg(status: u16, code: impl Into<String>, msg: impl Into<String>) -> Self {
        HttpException {
            status,
            code: code.into(),
            msg: msg.into(),
        }
    }
}

/// Error returned by the download path (curl failure, HTTP error, cancellation,
/// or destination write failure). Classified here so callers can tell
/// "too slow" apart from "failed" before the error is converted to anyhow.
#[derive(Debug)]
pub enum FetchError {
    /// Curl reported an error (DNS, connection refused, TLS, read error, etc.).
    Transport(curl::Error),
    /// Response completed with a non-2xx status.
    Http(u32),
    /// The cancellation token fired before the response completed.
    Cancelled,
    /// Writing the body to the destination path failed. Not retried.
    Write(std::io::Error),
}

impl FetchError {
    /// True when the failure was a timeout/cancellation rather than a transport
    /// or filesystem problem.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Cancelled => write!(f, "download cancelled"),
            FetchError::Write(e) => write!(f, "write: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Write(e) => Some(e),
            FetchError::Http(_) | FetchError::Cancelled => None,
        }
    }
}
