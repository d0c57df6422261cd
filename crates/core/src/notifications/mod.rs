pub mod hub;
pub mod recorder;
pub mod traits;
pub mod tracing_sink;
