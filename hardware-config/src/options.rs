//! Static option lists for the hardware forms
//!
//! Pure presentation data for dropdowns. Membership here carries no
//! validation weight; the validated sets live in [`crate::taxonomy`].

use crate::taxonomy::DeviceType;

/// Payment providers offered by the payment-terminal form.
///
/// The first entry is the default for new terminals.
pub const PAYMENT_PROVIDERS: &[&str] = &["stripe", "square", "sumup", "adyen", "worldpay"];

/// Text encodings offered for receipt printers
pub const ENCODINGS: &[&str] = &["utf8", "gbk", "latin1"];

/// Known device models per type, for the model dropdown
pub fn device_models(device_type: DeviceType) -> &'static [&'static str] {
    match device_type {
        DeviceType::Printer => &[
            "Epson TM-T88VI",
            "Epson TM-T20III",
            "Star TSP143III",
            "Star TSP654II",
            "Bixolon SRP-350III",
        ],
        DeviceType::Scanner => &[
            "Honeywell Voyager 1200g",
            "Zebra DS2208",
            "Datalogic QuickScan QD2430",
        ],
        DeviceType::CashDrawer => &[
            "APG Vasario 1616",
            "Star CD3-1616",
            "M-S Cash Drawer EP-125",
        ],
        DeviceType::Scale => &["CAS PD-II", "Mettler Toledo Ariva-S", "Avery Berkel 6712"],
        DeviceType::PaymentTerminal => &[
            "Verifone P400",
            "Ingenico Lane 3000",
            "PAX A920",
            "BBPOS WisePOS E",
        ],
        DeviceType::Display => &["Epson DM-D110", "Bixolon BCD-1100", "Partner Tech CD-7220"],
    }
}
