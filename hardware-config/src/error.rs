//! Error types for the device configuration model

use crate::taxonomy::{ConnectionType, DeviceType};
use thiserror::Error;

/// Hard configuration errors
///
/// Raised only for programmer/config misuse where no partial device can be
/// built. Field-level problems with an otherwise well-formed record are
/// reported through [`crate::validate::ValidationReport`] instead, so the
/// form can highlight the exact offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Requested device/connection pairing is not in the compatibility map
    #[error("{device_type} devices do not support {connection_type} connections")]
    UnsupportedCombination {
        device_type: DeviceType,
        connection_type: ConnectionType,
    },

    /// An update carried a configuration block for a different tag than the
    /// device's fixed `type`/`connection_type`
    #[error("expected a {expected} block, got {found}")]
    MismatchedBlock {
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type for device configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnsupportedCombination {
            device_type: DeviceType::Scanner,
            connection_type: ConnectionType::Network,
        };
        assert_eq!(
            err.to_string(),
            "scanner devices do not support network connections"
        );

        let err = ConfigError::MismatchedBlock {
            expected: "network_config",
            found: "usb_config",
        };
        assert_eq!(err.to_string(), "expected a network_config block, got usb_config");
    }
}
