pub mod config;
pub mod logging;

// Core modules
pub mod array;
pub mod cancel;
pub mod check;
pub mod download;
pub mod error;
pub mod fs_util;
pub mod seq;
pub mod string;
pub mod transport;
pub mod url_name;
