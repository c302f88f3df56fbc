//! Device-type configuration blocks
//!
//! One type-specific block per device, selected by the record's `type`
//! tag. Each block carries only the settings its device category
//! understands; `default_for` produces the starting values a fresh device
//! gets in the edit form.

use crate::taxonomy::{DeviceType, PaperSize, PrinterMode, WeightUnit};
use serde::{Deserialize, Serialize};

/// Receipt/label/document printer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrinterConfig {
    pub mode: PrinterMode,
    /// Must belong to the size set of `mode`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper: Option<PaperSize>,
    /// Custom stock width in mm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Custom stock height in mm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    /// Print automatically when a job arrives
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copies: Option<i32>,
    /// Text encoding: "utf8" | "gbk" | "latin1"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Cut after each job
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cut: Option<bool>,
    /// Kick the cash drawer after printing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawer: Option<bool>,
    /// Kitchen destinations this printer serves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kitchens: Option<Vec<String>>,
    /// Emit ZPL instead of TSPL in label mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zpl: Option<bool>,
}

/// Barcode scanner settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Prepended to every scan
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Appended to every scan, usually CR LF
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beep_on_scan: Option<bool>,
}

/// Payment terminal settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Provider key, see [`crate::options::PAYMENT_PROVIDERS`]
    pub provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_mode: Option<bool>,
}

/// Weighing scale settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    pub unit: WeightUnit,
    /// 0..=4
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<i32>,
}

/// Standalone cash drawer settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawerConfig {
    /// Kick command sent to open the drawer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_command: Option<String>,
}

/// Customer-facing line display settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// 1..=20
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<i32>,
    /// 10..=80
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chars_per_line: Option<i32>,
}

/// Type-specific configuration block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeviceTypeConfig {
    Printer(PrinterConfig),
    Scanner(ScannerConfig),
    PaymentTerminal(PaymentConfig),
    Scale(ScaleConfig),
    CashDrawer(DrawerConfig),
    Display(DisplayConfig),
}

impl DeviceTypeConfig {
    /// Device category this block configures
    pub fn device_type(&self) -> DeviceType {
        match self {
            DeviceTypeConfig::Printer(_) => DeviceType::Printer,
            DeviceTypeConfig::Scanner(_) => DeviceType::Scanner,
            DeviceTypeConfig::PaymentTerminal(_) => DeviceType::PaymentTerminal,
            DeviceTypeConfig::Scale(_) => DeviceType::Scale,
            DeviceTypeConfig::CashDrawer(_) => DeviceType::CashDrawer,
            DeviceTypeConfig::Display(_) => DeviceType::Display,
        }
    }

    /// Field-path prefix used in validation reports
    pub fn field_prefix(&self) -> &'static str {
        Self::prefix_for(self.device_type())
    }

    /// Field-path prefix for the block a device type demands
    pub fn prefix_for(device_type: DeviceType) -> &'static str {
        match device_type {
            DeviceType::Printer => "printer_config",
            DeviceType::Scanner => "scanner_config",
            DeviceType::PaymentTerminal => "payment_config",
            DeviceType::Scale => "scale_config",
            DeviceType::CashDrawer => "drawer_config",
            DeviceType::Display => "display_config",
        }
    }

    /// Starting block for a newly created device
    ///
    /// Printers default to thermal mode; use [`Self::default_printer`] for
    /// the other modes.
    pub fn default_for(device_type: DeviceType) -> Self {
        match device_type {
            DeviceType::Printer => Self::default_printer(PrinterMode::Thermal),
            DeviceType::Scanner => DeviceTypeConfig::Scanner(ScannerConfig {
                prefix: Some(String::new()),
                suffix: Some("\r\n".to_string()),
                beep_on_scan: Some(true),
            }),
            DeviceType::PaymentTerminal => DeviceTypeConfig::PaymentTerminal(PaymentConfig {
                provider: "stripe".to_string(),
                sandbox_mode: Some(false),
            }),
            DeviceType::Scale => DeviceTypeConfig::Scale(ScaleConfig {
                unit: WeightUnit::Kg,
                decimal_places: Some(2),
            }),
            DeviceType::CashDrawer => DeviceTypeConfig::CashDrawer(DrawerConfig {
                open_command: Some("ESC p 0 50 250".to_string()),
            }),
            DeviceType::Display => DeviceTypeConfig::Display(DisplayConfig {
                line_count: Some(2),
                chars_per_line: Some(20),
            }),
        }
    }

    /// Starting printer block for a given mode
    pub fn default_printer(mode: PrinterMode) -> Self {
        let config = match mode {
            PrinterMode::Thermal => PrinterConfig {
                mode,
                paper: Some(PaperSize::Mm80),
                auto: Some(true),
                copies: Some(1),
                encoding: Some("utf8".to_string()),
                cut: Some(true),
                drawer: Some(false),
                ..Default::default()
            },
            PrinterMode::Label => PrinterConfig {
                mode,
                paper: Some(PaperSize::Label4x6),
                zpl: Some(true),
                ..Default::default()
            },
            PrinterMode::Document => PrinterConfig {
                mode,
                paper: Some(PaperSize::A4),
                copies: Some(1),
                ..Default::default()
            },
        };
        DeviceTypeConfig::Printer(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_for_each_type() {
        let DeviceTypeConfig::Scale(scale) = DeviceTypeConfig::default_for(DeviceType::Scale)
        else {
            panic!("expected a scale block");
        };
        assert_eq!(scale.unit, WeightUnit::Kg);
        assert_eq!(scale.decimal_places, Some(2));

        let DeviceTypeConfig::Scanner(scanner) = DeviceTypeConfig::default_for(DeviceType::Scanner)
        else {
            panic!("expected a scanner block");
        };
        assert_eq!(scanner.suffix.as_deref(), Some("\r\n"));
        assert_eq!(scanner.beep_on_scan, Some(true));

        let DeviceTypeConfig::PaymentTerminal(payment) =
            DeviceTypeConfig::default_for(DeviceType::PaymentTerminal)
        else {
            panic!("expected a payment block");
        };
        assert_eq!(payment.provider, "stripe");
        assert_eq!(payment.sandbox_mode, Some(false));

        let DeviceTypeConfig::CashDrawer(drawer) =
            DeviceTypeConfig::default_for(DeviceType::CashDrawer)
        else {
            panic!("expected a drawer block");
        };
        assert_eq!(drawer.open_command.as_deref(), Some("ESC p 0 50 250"));

        let DeviceTypeConfig::Display(display) = DeviceTypeConfig::default_for(DeviceType::Display)
        else {
            panic!("expected a display block");
        };
        assert_eq!(display.line_count, Some(2));
        assert_eq!(display.chars_per_line, Some(20));
    }

    #[test]
    fn test_default_printer_per_mode() {
        let DeviceTypeConfig::Printer(thermal) = DeviceTypeConfig::default_for(DeviceType::Printer)
        else {
            panic!("expected a printer block");
        };
        assert_eq!(thermal.mode, PrinterMode::Thermal);
        assert_eq!(thermal.paper, Some(PaperSize::Mm80));
        assert_eq!(thermal.auto, Some(true));
        assert_eq!(thermal.copies, Some(1));
        assert_eq!(thermal.cut, Some(true));
        assert_eq!(thermal.drawer, Some(false));
        assert_eq!(thermal.encoding.as_deref(), Some("utf8"));

        let DeviceTypeConfig::Printer(label) =
            DeviceTypeConfig::default_printer(PrinterMode::Label)
        else {
            panic!("expected a printer block");
        };
        assert_eq!(label.paper, Some(PaperSize::Label4x6));
        assert_eq!(label.zpl, Some(true));
        assert_eq!(label.copies, None);

        let DeviceTypeConfig::Printer(document) =
            DeviceTypeConfig::default_printer(PrinterMode::Document)
        else {
            panic!("expected a printer block");
        };
        assert_eq!(document.paper, Some(PaperSize::A4));
        assert_eq!(document.copies, Some(1));
        assert_eq!(document.zpl, None);
    }

    #[test]
    fn test_tag_accessor_matches_variant() {
        for device_type in DeviceType::ALL {
            let config = DeviceTypeConfig::default_for(device_type);
            assert_eq!(config.device_type(), device_type);
        }
    }

    #[test]
    fn test_serialize_internally_tagged() {
        let config = DeviceTypeConfig::Scale(ScaleConfig {
            unit: WeightUnit::Kg,
            decimal_places: Some(2),
        });
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({"type": "scale", "unit": "kg", "decimal_places": 2})
        );
    }

    #[test]
    fn test_optional_fields_omitted_on_the_wire() {
        let value =
            serde_json::to_value(DeviceTypeConfig::default_printer(PrinterMode::Label)).unwrap();
        assert_eq!(value["type"], json!("printer"));
        assert_eq!(value["paper"], json!("4x6"));
        assert!(value.get("copies").is_none());
        assert!(value.get("kitchens").is_none());
    }
}
