//! Device record validation
//!
//! Field-level failures are returned as a [`ValidationReport`] value so a
//! form can highlight the exact offending inputs. Nothing here mutates the
//! record: the same record always produces the same report, so the gate can
//! run on every keystroke or once before submission.

use crate::models::connection::{BluetoothConfig, ConnectionConfig, NetworkConfig, UsbConfig};
use crate::models::device::HardwareDevice;
use crate::models::device_config::{
    DeviceTypeConfig, DisplayConfig, PaymentConfig, PrinterConfig, ScaleConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::net::Ipv4Addr;

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// The block the device's tag demands is not the one present
    MissingBlock(String),
    /// A populated field fails a range/format/enum check
    InvalidField(String),
    /// The device/connection pairing is not in the compatibility map
    UnsupportedCombination(String),
}

impl ValidationIssue {
    pub fn reason(&self) -> &str {
        match self {
            ValidationIssue::MissingBlock(reason)
            | ValidationIssue::InvalidField(reason)
            | ValidationIssue::UnsupportedCombination(reason) => reason,
        }
    }
}

/// Field-path → issue map for one validation pass
///
/// Paths follow the wire layout, e.g. `network_config.port`. Ordered so
/// reports render deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, ValidationIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no issues were recorded
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<String, ValidationIssue> {
        &self.errors
    }

    pub fn invalid_field(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.errors
            .insert(path.into(), ValidationIssue::InvalidField(reason.into()));
    }

    pub fn missing_block(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.errors
            .insert(path.into(), ValidationIssue::MissingBlock(reason.into()));
    }

    pub fn unsupported_combination(&mut self, path: impl Into<String>, reason: impl Into<String>) {
        self.errors.insert(
            path.into(),
            ValidationIssue::UnsupportedCombination(reason.into()),
        );
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "valid");
        }
        let mut first = true;
        for (path, issue) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", path, issue.reason())?;
            first = false;
        }
        Ok(())
    }
}

impl HardwareDevice {
    /// Check the connection block against its own field constraints
    ///
    /// Reports a missing block when the populated variant disagrees with
    /// the device's `connection_type` tag.
    pub fn validate_connection(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.connection_config.connection_type() != self.connection_type {
            report.missing_block(
                ConnectionConfig::prefix_for(self.connection_type),
                format!(
                    "device uses a {} connection but carries a {} block",
                    self.connection_type,
                    self.connection_config.field_prefix()
                ),
            );
            return report;
        }

        match &self.connection_config {
            ConnectionConfig::Network(config) => validate_network(config, &mut report),
            ConnectionConfig::Bluetooth(config) => validate_bluetooth(config, &mut report),
            ConnectionConfig::Usb(config) => validate_usb(config, &mut report),
        }
        report
    }

    /// Check the device-type block against its own field constraints
    pub fn validate_device_config(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.device_config.device_type() != self.device_type {
            report.missing_block(
                DeviceTypeConfig::prefix_for(self.device_type),
                format!(
                    "device is a {} but carries a {} block",
                    self.device_type,
                    self.device_config.field_prefix()
                ),
            );
            return report;
        }

        match &self.device_config {
            DeviceTypeConfig::Printer(config) => validate_printer(config, &mut report),
            DeviceTypeConfig::PaymentTerminal(config) => validate_payment(config, &mut report),
            DeviceTypeConfig::Scale(config) => validate_scale(config, &mut report),
            DeviceTypeConfig::Display(config) => validate_display(config, &mut report),
            // Presence of the block is all these require
            DeviceTypeConfig::Scanner(_) | DeviceTypeConfig::CashDrawer(_) => {}
        }
        report
    }

    /// Full submission gate
    ///
    /// Compatibility membership plus both block checks, merged into one
    /// report. Pure and idempotent; this is the one entry point a form or
    /// import job needs before accepting a record.
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if !self.device_type.supports(self.connection_type) {
            report.unsupported_combination(
                "connection_type",
                format!(
                    "{} devices do not support {} connections",
                    self.device_type, self.connection_type
                ),
            );
        }
        report.merge(self.validate_connection());
        report.merge(self.validate_device_config());
        report
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn validate_network(config: &NetworkConfig, report: &mut ValidationReport) {
    if config.ip_address.is_empty() {
        report.invalid_field("network_config.ip_address", "IP address is required");
    } else if config.ip_address.parse::<Ipv4Addr>().is_err() {
        report.invalid_field(
            "network_config.ip_address",
            format!("not a valid IPv4 address: {}", config.ip_address),
        );
    }
    if !(1..=65535).contains(&config.port) {
        report.invalid_field(
            "network_config.port",
            format!("port must be between 1 and 65535, got {}", config.port),
        );
    }
}

fn validate_bluetooth(config: &BluetoothConfig, report: &mut ValidationReport) {
    if config.mac_address.is_empty() {
        report.invalid_field("bluetooth_config.mac_address", "MAC address is required");
    } else if !is_mac_address(&config.mac_address) {
        report.invalid_field(
            "bluetooth_config.mac_address",
            format!(
                "expected six colon- or dash-separated hex pairs, got {}",
                config.mac_address
            ),
        );
    }
}

fn validate_usb(config: &UsbConfig, report: &mut ValidationReport) {
    if config.vendor_id == 0 {
        report.invalid_field("usb_config.vendor_id", "vendor id must be non-zero");
    }
    if config.product_id == 0 {
        report.invalid_field("usb_config.product_id", "product id must be non-zero");
    }
}

fn validate_printer(config: &PrinterConfig, report: &mut ValidationReport) {
    if let Some(paper) = config.paper
        && !config.mode.paper_sizes().contains(&paper)
    {
        report.invalid_field(
            "printer_config.paper",
            format!(
                "{} paper is not available in {} mode",
                paper, config.mode
            ),
        );
    }
    if let Some(copies) = config.copies
        && copies < 1
    {
        report.invalid_field(
            "printer_config.copies",
            format!("copies must be at least 1, got {}", copies),
        );
    }
}

fn validate_payment(config: &PaymentConfig, report: &mut ValidationReport) {
    if config.provider.is_empty() {
        report.invalid_field("payment_config.provider", "provider is required");
    }
}

fn validate_scale(config: &ScaleConfig, report: &mut ValidationReport) {
    if let Some(decimal_places) = config.decimal_places
        && !(0..=4).contains(&decimal_places)
    {
        report.invalid_field(
            "scale_config.decimal_places",
            format!("decimal places must be between 0 and 4, got {}", decimal_places),
        );
    }
}

fn validate_display(config: &DisplayConfig, report: &mut ValidationReport) {
    if let Some(line_count) = config.line_count
        && !(1..=20).contains(&line_count)
    {
        report.invalid_field(
            "display_config.line_count",
            format!("line count must be between 1 and 20, got {}", line_count),
        );
    }
    if let Some(chars_per_line) = config.chars_per_line
        && !(10..=80).contains(&chars_per_line)
    {
        report.invalid_field(
            "display_config.chars_per_line",
            format!(
                "chars per line must be between 10 and 80, got {}",
                chars_per_line
            ),
        );
    }
}

/// Six hex byte pairs, colon- or dash-separated
fn is_mac_address(s: &str) -> bool {
    let parts: Vec<&str> = s.split(|c| c == ':' || c == '-').collect();
    parts.len() == 6
        && parts
            .iter()
            .all(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_hexdigit()))
}
