//! Fete prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    collection::{
        NoopObserver, OrderTotals, TicketCollection, TicketCounts, TicketObserver, UnknownTicket,
    },
    config::EventConfig,
    contact::{
        MaskedPhone, clean_phone_number, format_phone_number, format_phone_number_with_cursor,
        validate_email, validate_phone_number,
    },
    food::{FoodStation, NO_FOOD_SELECTION, NO_FOOD_SELECTIONS, food_label, parse_food_selection},
    orders::{generate_order_number, unique_order_number},
    pricing::{TicketPrices, Transaction, format_currency, outstanding, ticket_total, total_paid},
    store::{BackendStore, DonationRow, RestConfig, RestStore, StoreError},
    summary::{SavedTicket, build_ticket_html, customer_name, format_ticket_number},
    thermometer::{
        DonationTotals, Frame, Phase, ThermometerAnimation, load_donation_totals,
    },
    tickets::{
        Attendance, DONATE_NOTICE, PickupSlot, TicketDraft, TicketId, TicketKind, TicketType,
    },
};
