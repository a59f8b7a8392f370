#[cfg(feature = "transport-http")]
pub mod http;
pub mod in_memory;
