//! Pricing
//!
//! Ticket totals and outstanding balances, derived on demand from ticket
//! counts and recorded payment transactions. Everything here is a pure,
//! total function over minor units; display rounding belongs to
//! [`format_currency`] alone.

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Unit prices for the two ticket kinds, in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketPrices {
    /// Price of one adult ticket.
    pub adult: i64,

    /// Price of one child ticket.
    pub child: i64,
}

/// A payment recorded against an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    /// Amount paid, in minor units. A missing amount counts as zero.
    pub amount: Option<i64>,
}

impl Transaction {
    /// A transaction for the given amount.
    pub fn of(amount: i64) -> Self {
        Self {
            amount: Some(amount),
        }
    }
}

/// Total ticket price for the given counts.
pub fn ticket_total(adult_count: u32, child_count: u32, prices: &TicketPrices) -> i64 {
    i64::from(adult_count) * prices.adult + i64::from(child_count) * prices.child
}

/// Sum of all transaction amounts, treating a missing amount as zero.
pub fn total_paid(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(|t| t.amount.unwrap_or(0)).sum()
}

/// Outstanding balance: the total minus everything paid so far.
///
/// Negative when the order is overpaid.
pub fn outstanding(total: i64, transactions: &[Transaction]) -> i64 {
    total - total_paid(transactions)
}

/// Formats a minor-unit amount for display with the currency's symbol,
/// thousands separators and two decimal places, e.g. `$5,000.00`.
pub fn format_currency(minor: i64, currency: &'static Currency) -> String {
    Money::from_minor(minor, currency).to_string()
}
