mod get;
mod remove;
mod size;

pub use get::run_get;
pub use remove::run_remove;
pub use size::run_size;
