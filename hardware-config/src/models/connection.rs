//! Connection configuration blocks
//!
//! One transport-specific block per device, selected by the record's
//! `connection_type` tag. The union makes "no block" and "two blocks"
//! unrepresentable.

use crate::taxonomy::ConnectionType;
use serde::{Deserialize, Serialize};

/// Bluetooth SPP service UUID, the usual profile for serial-style
/// peripherals (printers, scanners)
pub const BLUETOOTH_SPP_UUID: &str = "00001101-0000-1000-8000-00805F9B34FB";

/// Raw-printing TCP port most network peripherals listen on
pub const DEFAULT_NETWORK_PORT: u32 = 9100;

fn default_port() -> u32 {
    DEFAULT_NETWORK_PORT
}

/// Network (TCP/IP) connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// IPv4 dotted-quad address
    pub ip_address: String,
    #[serde(default = "default_port")]
    pub port: u32,
}

/// Bluetooth connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BluetoothConfig {
    /// Six hex byte pairs, colon- or dash-separated
    pub mac_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_uuid: Option<String>,
}

/// USB connection settings
///
/// `vendor_id`/`product_id` travel as decimal integers; hex rendering is a
/// form concern, see [`crate::format`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsbConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usb_path: Option<String>,
}

/// Transport-specific configuration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConnectionConfig {
    Network(NetworkConfig),
    Bluetooth(BluetoothConfig),
    Usb(UsbConfig),
}

impl ConnectionConfig {
    /// Transport this block configures
    pub fn connection_type(&self) -> ConnectionType {
        match self {
            ConnectionConfig::Network(_) => ConnectionType::Network,
            ConnectionConfig::Bluetooth(_) => ConnectionType::Bluetooth,
            ConnectionConfig::Usb(_) => ConnectionType::Usb,
        }
    }

    /// Field-path prefix used in validation reports
    pub fn field_prefix(&self) -> &'static str {
        Self::prefix_for(self.connection_type())
    }

    /// Field-path prefix for the block a transport demands
    pub fn prefix_for(connection_type: ConnectionType) -> &'static str {
        match connection_type {
            ConnectionType::Network => "network_config",
            ConnectionType::Bluetooth => "bluetooth_config",
            ConnectionType::Usb => "usb_config",
        }
    }

    /// Starting block for a newly created device
    ///
    /// Defaults are sane form starting points, not submittable values: the
    /// empty `ip_address`/`mac_address` and zero USB ids fail validation
    /// until the operator fills them in.
    pub fn default_for(connection_type: ConnectionType) -> Self {
        match connection_type {
            ConnectionType::Network => ConnectionConfig::Network(NetworkConfig {
                ip_address: String::new(),
                port: DEFAULT_NETWORK_PORT,
            }),
            ConnectionType::Bluetooth => ConnectionConfig::Bluetooth(BluetoothConfig {
                mac_address: String::new(),
                device_name: Some(String::new()),
                service_uuid: Some(BLUETOOTH_SPP_UUID.to_string()),
            }),
            ConnectionType::Usb => ConnectionConfig::Usb(UsbConfig {
                vendor_id: 0,
                product_id: 0,
                usb_path: Some(String::new()),
            }),
        }
    }
}
