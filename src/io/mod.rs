pub mod progress;
pub mod sanitize;
