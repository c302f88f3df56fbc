//! Data models
//!
//! The device record and its two tagged configuration blocks. Exactly one
//! connection block and one device-type block per device, selected by the
//! record's `connection_type`/`type` tags; the unions make any other shape
//! unrepresentable.

pub mod connection;
pub mod device;
pub mod device_config;

// Re-exports
pub use connection::*;
pub use device::*;
pub use device_config::*;
