//! Hardware Device Model
//!
//! The device aggregate plus its create/update payloads. `type` and
//! `connection_type` are fixed at creation: each selects the single
//! configuration block the record carries, so changing either means
//! recreating the device with fresh default blocks.

use crate::error::{ConfigError, ConfigResult};
use crate::models::connection::ConnectionConfig;
use crate::models::device_config::DeviceTypeConfig;
use crate::taxonomy::{ConnectionType, DeviceType, PrinterMode};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

fn default_true() -> bool {
    true
}

/// Hardware device entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareDevice {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub connection_type: ConnectionType,
    /// Terminal this device is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub connection_config: ConnectionConfig,
    pub device_config: DeviceTypeConfig,
    /// Unix millis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl HardwareDevice {
    /// Create a device with the default configuration blocks for the pair
    ///
    /// Fails when the device type does not support the transport; the
    /// pairing is never silently repaired.
    pub fn new(
        id: impl Into<String>,
        device_type: DeviceType,
        connection_type: ConnectionType,
    ) -> ConfigResult<Self> {
        if !device_type.supports(connection_type) {
            warn!(%device_type, %connection_type, "rejected unsupported device/connection pairing");
            return Err(ConfigError::UnsupportedCombination {
                device_type,
                connection_type,
            });
        }

        let id = id.into();
        debug!(id = %id, %device_type, %connection_type, "creating device with default blocks");

        Ok(Self {
            id,
            name: None,
            device_type,
            connection_type,
            terminal_id: None,
            enabled: true,
            connection_config: ConnectionConfig::default_for(connection_type),
            device_config: DeviceTypeConfig::default_for(device_type),
            created_at: None,
            updated_at: None,
        })
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Build a device from a create payload
    ///
    /// Generates a v4 UUID when the payload carries no id, honors the
    /// requested printer mode, and stamps `created_at`.
    pub fn from_create(payload: DeviceCreate) -> ConfigResult<Self> {
        let id = payload.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut device = Self::new(id, payload.device_type, payload.connection_type)?;

        device.name = payload.name;
        device.terminal_id = payload.terminal_id;
        device.enabled = payload.enabled;
        if let Some(mode) = payload.printer_mode
            && payload.device_type == DeviceType::Printer
        {
            device.device_config = DeviceTypeConfig::default_printer(mode);
        }
        device.created_at = Some(Utc::now().timestamp_millis());

        Ok(device)
    }

    /// The populated connection block
    pub fn connection_config(&self) -> &ConnectionConfig {
        &self.connection_config
    }

    /// The populated device-type block
    pub fn device_config(&self) -> &DeviceTypeConfig {
        &self.device_config
    }

    /// Apply an update payload
    ///
    /// Replacement blocks must match the device's fixed tags; `type` and
    /// `connection_type` themselves are never mutated in place. Stamps
    /// `updated_at` on success.
    pub fn apply(&mut self, update: DeviceUpdate) -> ConfigResult<()> {
        if let Some(block) = &update.connection_config
            && block.connection_type() != self.connection_type
        {
            return Err(ConfigError::MismatchedBlock {
                expected: ConnectionConfig::prefix_for(self.connection_type),
                found: block.field_prefix(),
            });
        }
        if let Some(block) = &update.device_config
            && block.device_type() != self.device_type
        {
            return Err(ConfigError::MismatchedBlock {
                expected: DeviceTypeConfig::prefix_for(self.device_type),
                found: block.field_prefix(),
            });
        }

        if let Some(name) = update.name {
            self.name = Some(name);
        }
        if let Some(terminal_id) = update.terminal_id {
            self.terminal_id = Some(terminal_id);
        }
        if let Some(enabled) = update.enabled {
            self.enabled = enabled;
        }
        if let Some(block) = update.connection_config {
            self.connection_config = block;
        }
        if let Some(block) = update.device_config {
            self.device_config = block;
        }
        self.updated_at = Some(Utc::now().timestamp_millis());
        debug!(id = %self.id, "device updated");

        Ok(())
    }
}

/// Create device payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceCreate {
    /// Server generates one when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub connection_type: ConnectionType,
    pub terminal_id: Option<String>,
    /// Printer devices only; thermal when absent
    #[serde(default)]
    pub printer_mode: Option<PrinterMode>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Update device payload
///
/// `type`/`connection_type` are deliberately absent: changing them is a
/// recreate, not an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceUpdate {
    pub name: Option<String>,
    pub terminal_id: Option<String>,
    pub enabled: Option<bool>,
    pub connection_config: Option<ConnectionConfig>,
    pub device_config: Option<DeviceTypeConfig>,
}
