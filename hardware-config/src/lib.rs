//! # hardware-config
//!
//! Device configuration model for the POS back office - the rules that
//! decide which connection transport and which device-type configuration
//! are legal together, how to derive sane defaults, and how to validate a
//! record before it is submitted.
//!
//! ## Scope
//!
//! This crate decides WHAT a valid device record looks like:
//! - taxonomy: device types, transports, and the compatibility map
//! - schema: the tagged-union device record
//! - defaults: the starting blocks for a freshly created device
//! - validation: the pure submission gate with per-field reports
//!
//! Talking to actual hardware and moving records around stays with the
//! callers:
//! - sending jobs to printers → printing library
//! - persistence and the REST surface → back-office server
//!
//! ## Example
//!
//! ```
//! use hardware_config::{ConnectionType, DeviceType, HardwareDevice};
//!
//! let device = HardwareDevice::new("D1", DeviceType::Printer, ConnectionType::Network)
//!     .expect("printers support network connections")
//!     .with_name("Kitchen printer");
//!
//! // Fresh defaults are a starting point, not a submittable record:
//! // the operator still has to fill in the IP address.
//! assert!(!device.is_valid());
//! let report = device.validate();
//! assert!(report.errors().contains_key("network_config.ip_address"));
//! ```

pub mod error;
pub mod format;
pub mod models;
pub mod options;
pub mod taxonomy;
pub mod validate;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use models::connection::{BluetoothConfig, ConnectionConfig, NetworkConfig, UsbConfig};
pub use models::device::{DeviceCreate, DeviceUpdate, HardwareDevice};
pub use models::device_config::{
    DeviceTypeConfig, DisplayConfig, DrawerConfig, PaymentConfig, PrinterConfig, ScaleConfig,
    ScannerConfig,
};
pub use taxonomy::{ConnectionType, DeviceType, PaperSize, PrinterMode, WeightUnit};
pub use validate::{ValidationIssue, ValidationReport};
