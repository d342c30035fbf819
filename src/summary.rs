//! Order summaries
//!
//! Read-only HTML fragments describing a finalized order's tickets, shared
//! by the confirmation view and the confirmation email.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    food,
    tickets::{Attendance, TicketKind, TicketType},
};

/// A persisted ticket row as the confirmation views receive it.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedTicket {
    /// Backend row id; rendering order follows it.
    pub id: i64,

    /// Sequential number printed on the physical ticket.
    pub ticket_number: i64,

    /// Persisted ticket type.
    pub ticket_type: TicketType,

    /// Attendance choice at save time.
    #[serde(default)]
    pub attendance_type: Attendance,

    /// Stored food selection, in whatever shape the backend has it.
    #[serde(default)]
    pub food_option: Value,

    /// Stored pickup slot, if any.
    #[serde(default)]
    pub pickup_time: Option<String>,
}

/// Builds the HTML summary of an order's tickets.
///
/// Tickets render in id order (creation order), grouped into adult, child,
/// donated adult and donated child sections. Regular tickets list their
/// food and pickup details; donated groups render a header with the count
/// only.
pub fn build_ticket_html(tickets: &[SavedTicket]) -> String {
    let mut sorted: Vec<&SavedTicket> = tickets.iter().collect();
    sorted.sort_by_key(|ticket| ticket.id);

    let of_type = |ty: TicketType| -> Vec<&SavedTicket> {
        sorted
            .iter()
            .filter(|ticket| ticket.ticket_type == ty)
            .copied()
            .collect()
    };

    let mut html = String::new();

    render_group(&mut html, "Adult", &of_type(TicketType::Adult));
    render_group(&mut html, "Child", &of_type(TicketType::Child));

    let donated_adults = of_type(TicketType::AdultDonated);
    if !donated_adults.is_empty() {
        html.push_str(&format!(
            "<p><strong>Donated Adult Tickets ({})</strong></p>",
            donated_adults.len()
        ));
    }

    let donated_children = of_type(TicketType::ChildDonated);
    if !donated_children.is_empty() {
        html.push_str(&format!(
            "<p><strong>Donated Child Tickets ({})</strong></p>",
            donated_children.len()
        ));
    }

    html
}

fn render_group(html: &mut String, label: &str, tickets: &[&SavedTicket]) {
    if tickets.is_empty() {
        return;
    }

    html.push_str(&format!(
        "<p><strong>{label} Tickets ({}):</strong></p><ul>",
        tickets.len()
    ));

    for (index, ticket) in tickets.iter().enumerate() {
        let mut info = format!("{label} #{}", index + 1);

        if ticket.attendance_type == Attendance::Takeaway {
            let labels = food::parse_food_selection(&ticket.food_option);
            let pickup = ticket.pickup_time.as_deref().unwrap_or_default();
            info.push_str(&format!(
                " \u{2014} {labels} | Taking Away - Pickup: {pickup} PM"
            ));
        } else {
            info.push_str(" | Attending Event");
        }

        html.push_str(&format!("<li>{info}</li>"));
    }

    html.push_str("</ul>");
}

/// Zero-pads a printed ticket number: four digits for adult variants,
/// three for child.
pub fn format_ticket_number(ticket: &SavedTicket) -> String {
    match ticket.ticket_type.kind() {
        TicketKind::Adult => format!("{:04}", ticket.ticket_number),
        TicketKind::Child => format!("{:03}", ticket.ticket_number),
    }
}

/// Joins a customer's first and last name, trimming when either side is
/// missing.
pub fn customer_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}").trim().to_owned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn ticket(id: i64, ticket_type: TicketType) -> SavedTicket {
        SavedTicket {
            id,
            ticket_number: id,
            ticket_type,
            attendance_type: Attendance::Attending,
            food_option: Value::Null,
            pickup_time: None,
        }
    }

    #[test]
    fn groups_render_in_id_order_with_counts() {
        let tickets = [
            ticket(3, TicketType::Child),
            ticket(1, TicketType::Adult),
            ticket(2, TicketType::Adult),
        ];

        let html = build_ticket_html(&tickets);

        assert!(html.contains("<p><strong>Adult Tickets (2):</strong></p>"));
        assert!(html.contains("<li>Adult #1 | Attending Event</li>"));
        assert!(html.contains("<li>Adult #2 | Attending Event</li>"));
        assert!(html.contains("<p><strong>Child Tickets (1):</strong></p>"));
    }

    #[test]
    fn takeaway_tickets_list_food_and_pickup() {
        let mut takeaway = ticket(1, TicketType::Adult);
        takeaway.attendance_type = Attendance::Takeaway;
        takeaway.food_option = json!(["station1"]);
        takeaway.pickup_time = Some("2:00".to_owned());

        let html = build_ticket_html(&[takeaway]);

        assert!(html.contains(
            "Adult #1 \u{2014} Curry goat, rice & roti | Taking Away - Pickup: 2:00 PM"
        ));
    }

    #[test]
    fn takeaway_without_food_shows_the_sentinel() {
        let mut takeaway = ticket(1, TicketType::Child);
        takeaway.attendance_type = Attendance::Takeaway;
        takeaway.pickup_time = Some("12:30".to_owned());

        let html = build_ticket_html(&[takeaway]);

        assert!(html.contains("No food selections"));
    }

    #[test]
    fn donated_groups_render_header_only() {
        let tickets = [
            ticket(1, TicketType::AdultDonated),
            ticket(2, TicketType::AdultDonated),
            ticket(3, TicketType::ChildDonated),
        ];

        let html = build_ticket_html(&tickets);

        assert!(html.contains("<p><strong>Donated Adult Tickets (2)</strong></p>"));
        assert!(html.contains("<p><strong>Donated Child Tickets (1)</strong></p>"));
        assert!(!html.contains("<li>"), "donated tickets have no line items");
    }

    #[test]
    fn empty_order_renders_nothing() {
        assert_eq!(build_ticket_html(&[]), "");
    }

    #[test]
    fn ticket_numbers_pad_by_kind() {
        assert_eq!(format_ticket_number(&ticket(7, TicketType::Adult)), "0007");
        assert_eq!(
            format_ticket_number(&ticket(7, TicketType::AdultDonated)),
            "0007"
        );
        assert_eq!(format_ticket_number(&ticket(7, TicketType::Child)), "007");
        assert_eq!(
            format_ticket_number(&ticket(1234, TicketType::Child)),
            "1234",
            "padding never truncates"
        );
    }

    #[test]
    fn customer_name_trims_missing_parts() {
        assert_eq!(customer_name("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(customer_name("Ada", ""), "Ada");
        assert_eq!(customer_name("", "Lovelace"), "Lovelace");
        assert_eq!(customer_name("", ""), "");
    }
}
