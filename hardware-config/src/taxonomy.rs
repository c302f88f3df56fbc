//! Device and connection taxonomy
//!
//! Closed enumerations behind the hardware forms, plus the compatibility
//! map between device types and connection transports. Pure reference
//! lookups; the enums being closed means an unrecognized type is a
//! deserialization failure, not a runtime fallback.

use serde::{Deserialize, Serialize};

/// Functional category of a hardware peripheral
///
/// Fixed at device creation: it selects which device-type configuration
/// block the record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Printer,
    Scanner,
    CashDrawer,
    Scale,
    PaymentTerminal,
    Display,
}

impl DeviceType {
    /// All device types, in form display order
    pub const ALL: [DeviceType; 6] = [
        DeviceType::Printer,
        DeviceType::Scanner,
        DeviceType::CashDrawer,
        DeviceType::Scale,
        DeviceType::PaymentTerminal,
        DeviceType::Display,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Printer => "printer",
            DeviceType::Scanner => "scanner",
            DeviceType::CashDrawer => "cash_drawer",
            DeviceType::Scale => "scale",
            DeviceType::PaymentTerminal => "payment_terminal",
            DeviceType::Display => "display",
        }
    }

    /// Connection transports a device of this type can use
    pub fn allowed_connection_types(&self) -> &'static [ConnectionType] {
        match self {
            DeviceType::Printer | DeviceType::PaymentTerminal => &[
                ConnectionType::Usb,
                ConnectionType::Network,
                ConnectionType::Bluetooth,
            ],
            DeviceType::Scanner => &[ConnectionType::Usb, ConnectionType::Bluetooth],
            DeviceType::CashDrawer | DeviceType::Scale | DeviceType::Display => {
                &[ConnectionType::Usb, ConnectionType::Network]
            }
        }
    }

    /// Whether `connection_type` is a legal transport for this device type
    pub fn supports(&self, connection_type: ConnectionType) -> bool {
        self.allowed_connection_types().contains(&connection_type)
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transport used to reach a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionType {
    Usb,
    Network,
    Bluetooth,
}

impl ConnectionType {
    /// All transports, in form display order
    pub const ALL: [ConnectionType; 3] = [
        ConnectionType::Usb,
        ConnectionType::Network,
        ConnectionType::Bluetooth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::Usb => "usb",
            ConnectionType::Network => "network",
            ConnectionType::Bluetooth => "bluetooth",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Printer output mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrinterMode {
    /// Receipt printing (ESC/POS)
    #[default]
    Thermal,
    /// Label printing (TSPL/ZPL)
    Label,
    /// Full-page document printing
    Document,
}

impl PrinterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrinterMode::Thermal => "thermal",
            PrinterMode::Label => "label",
            PrinterMode::Document => "document",
        }
    }

    /// Paper sizes available in this mode
    pub fn paper_sizes(&self) -> &'static [PaperSize] {
        match self {
            PrinterMode::Thermal => &[PaperSize::Mm80, PaperSize::Mm58],
            PrinterMode::Label => &[PaperSize::Label4x6],
            PrinterMode::Document => &[PaperSize::A4, PaperSize::A5, PaperSize::Letter],
        }
    }
}

impl std::fmt::Display for PrinterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Paper size
///
/// Wire names are the printable forms (`"80mm"`, `"4x6"`, ...), which are
/// not legal identifiers, hence the explicit renames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperSize {
    /// 80mm receipt roll
    #[serde(rename = "80mm")]
    Mm80,
    /// 58mm receipt roll
    #[serde(rename = "58mm")]
    Mm58,
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "a5")]
    A5,
    #[serde(rename = "letter")]
    Letter,
    /// 4x6 inch label stock
    #[serde(rename = "4x6")]
    Label4x6,
}

impl PaperSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::Mm80 => "80mm",
            PaperSize::Mm58 => "58mm",
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
            PaperSize::Letter => "letter",
            PaperSize::Label4x6 => "4x6",
        }
    }
}

impl std::fmt::Display for PaperSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Weight unit reported by a scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
    G,
}

impl WeightUnit {
    /// All units, in form display order
    pub const ALL: [WeightUnit; 3] = [WeightUnit::Kg, WeightUnit::Lb, WeightUnit::G];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
            WeightUnit::G => "g",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
