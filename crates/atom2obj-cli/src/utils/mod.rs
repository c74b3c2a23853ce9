pub mod converter;
pub mod naming;
pub mod progress;
