pub mod telegram;
pub mod tracing;
