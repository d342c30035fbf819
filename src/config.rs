//! Event configuration
//!
//! Static values the pages consume read-only: ticket pricing, site and
//! event details, payment instructions, and the gallery image list.

use jiff::civil::Date;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;

use crate::pricing::TicketPrices;

/// Ticket pricing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Adult ticket price in minor units.
    pub adult_ticket: i64,

    /// Child ticket price in minor units.
    pub child_ticket: i64,

    /// ISO alpha code of the event currency.
    pub currency: String,
}

impl PricingConfig {
    /// Unit prices in the shape the calculators take.
    pub fn prices(&self) -> TicketPrices {
        TicketPrices {
            adult: self.adult_ticket,
            child: self.child_ticket,
        }
    }

    /// Resolved event currency.
    ///
    /// Configuration is static trusted data, so an unknown code falls back
    /// to USD rather than erroring.
    pub fn currency(&self) -> &'static Currency {
        iso::find(&self.currency).unwrap_or(iso::USD)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adult_ticket: 500_000,
            child_ticket: 250_000,
            currency: "JMD".to_owned(),
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name of the event site.
    pub name: String,

    /// Address support enquiries go to.
    pub support_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Stella Maris Family Day".to_owned(),
            support_email: "stellamarisfamilyday@gmail.com".to_owned(),
        }
    }
}

/// Event schedule details.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventInfo {
    /// Human-readable date and time line shown on every page.
    pub date: String,

    /// Last day orders are accepted.
    pub cutoff_date: Date,
}

impl Default for EventInfo {
    fn default() -> Self {
        Self {
            date: "Sunday, December 7, 2025 | 12:00 PM \u{2013} 6:00 PM".to_owned(),
            cutoff_date: Date::constant(2025, 11, 29),
        }
    }
}

/// Labels and instruction copy for the accepted payment methods.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Label for the cash/cheque method.
    pub cash_label: String,

    /// Label for the bank-transfer method.
    pub bank_transfer_label: String,

    /// Instruction HTML for cash/cheque payments.
    pub cash_instructions: String,

    /// Instruction HTML for bank-transfer payments.
    pub bank_transfer_instructions: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            cash_label: "Cash/Cheque".to_owned(),
            bank_transfer_label: "Bank Transfer".to_owned(),
            cash_instructions: "Cash should be paid at the Stella Maris Church office \
                (a receipt will be provided) and Cheques should be made payable to \
                <strong>STELLA MARIS CHURCH</strong>."
                .to_owned(),
            bank_transfer_instructions: "Bank transfer to the Stella Maris CIBC account. \
                Please use the following details:<br>\
                <ul>\
                <li><strong>Bank Name:</strong> CIBC</li>\
                <li><strong>Account Name:</strong> Stella Maris Church</li>\
                <li><strong>Account Number:</strong> 1002355932 (Savings)</li>\
                <li><strong>Branch:</strong> Manor Park</li>\
                <li><strong>Reference:</strong> Your full name or order number</li>\
                </ul>"
                .to_owned(),
        }
    }
}

/// Complete static configuration surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Ticket pricing.
    pub pricing: PricingConfig,

    /// Site identity.
    pub site: SiteConfig,

    /// Event schedule details.
    pub event: EventInfo,

    /// Payment method labels and instructions.
    pub payment: PaymentConfig,

    /// Directory the gallery images live under.
    pub images_dir: String,

    /// Gallery image file names.
    pub images: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            site: SiteConfig::default(),
            event: EventInfo::default(),
            payment: PaymentConfig::default(),
            images_dir: "images/".to_owned(),
            images: [
                "funday1.jpg",
                "funday2.jpg",
                "funday3.jpg",
                "funday4.jpeg",
                "funday5.jpeg",
                "funday6.jpg",
                "funday7.jpg",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}
