//! Fete
//!
//! Fete is the browser-side core of an event-ticketing front end: ticket
//! draft management, pricing and balance arithmetic, lenient parsing of
//! stored food selections, order summaries, and the donation-thermometer
//! model, with a thin read-only client for the hosted backend.

pub mod collection;
pub mod config;
pub mod contact;
pub mod food;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod store;
pub mod summary;
pub mod thermometer;
pub mod tickets;
