//! Tickets
//!
//! The draft model for one admission unit being configured before
//! purchase. A draft's kind is an explicit field carried alongside its
//! identifier; nothing is ever inferred from identifier text.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::food::FoodStation;

/// Informational notice shown when a ticket's holder chooses to donate it.
pub const DONATE_NOTICE: &str = "The Men\u{2019}s Executive Committee will identify a charity \
    for the donation and we will advise in due course of our selection";

/// The two admission kinds sold for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketKind {
    /// Adult admission.
    Adult,

    /// Child admission (six and under).
    Child,
}

impl TicketKind {
    /// Persisted type for a regular ticket of this kind.
    pub fn regular(self) -> TicketType {
        match self {
            Self::Adult => TicketType::Adult,
            Self::Child => TicketType::Child,
        }
    }

    /// Persisted type for a donated ticket of this kind.
    pub fn donated(self) -> TicketType {
        match self {
            Self::Adult => TicketType::AdultDonated,
            Self::Child => TicketType::ChildDonated,
        }
    }
}

/// Persisted ticket type, donated variants included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    /// Regular adult ticket.
    Adult,

    /// Regular child ticket.
    Child,

    /// Adult ticket converted to a donation.
    AdultDonated,

    /// Child ticket converted to a donation.
    ChildDonated,
}

impl TicketType {
    /// The admission kind behind this type.
    pub fn kind(self) -> TicketKind {
        match self {
            Self::Adult | Self::AdultDonated => TicketKind::Adult,
            Self::Child | Self::ChildDonated => TicketKind::Child,
        }
    }

    /// Whether this is a donated variant.
    pub fn is_donated(self) -> bool {
        matches!(self, Self::AdultDonated | Self::ChildDonated)
    }

    /// Wire value, e.g. `adult_donated`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::AdultDonated => "adult_donated",
            Self::ChildDonated => "child_donated",
        }
    }
}

/// How the ticket's holder will use it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Attending the event in person.
    #[default]
    Attending,

    /// Collecting food at a pickup slot instead of attending.
    Takeaway,

    /// Forgoing the ticket and converting it to a donation.
    Donate,
}

/// The three fixed pickup slots offered for takeaway tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupSlot {
    /// 12:30 PM.
    #[serde(rename = "12:30")]
    HalfPastNoon,

    /// 2:00 PM.
    #[serde(rename = "2:00")]
    TwoOClock,

    /// 3:30 PM.
    #[serde(rename = "3:30")]
    HalfPastThree,
}

impl PickupSlot {
    /// Every slot, earliest first.
    pub const ALL: [PickupSlot; 3] = [
        PickupSlot::HalfPastNoon,
        PickupSlot::TwoOClock,
        PickupSlot::HalfPastThree,
    ];

    /// Wire value as stored by the backend (12-hour clock).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HalfPastNoon => "12:30",
            Self::TwoOClock => "2:00",
            Self::HalfPastThree => "3:30",
        }
    }

    /// Lenient parse of a stored slot value.
    pub fn from_value(raw: &str) -> Option<Self> {
        match raw.trim() {
            "12:30" => Some(Self::HalfPastNoon),
            "2:00" => Some(Self::TwoOClock),
            "3:30" => Some(Self::HalfPastThree),
            _ => None,
        }
    }
}

impl fmt::Display for PickupSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for a ticket draft.
///
/// A draft starts life under a transient placeholder; the external save
/// step swaps it for the backend row identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TicketId {
    /// In-memory placeholder issued by the collection.
    Temp(u64),

    /// Backend row identifier of an already-persisted ticket.
    Saved(String),
}

impl TicketId {
    /// True until the external save step has persisted the ticket.
    pub fn is_temp(&self) -> bool {
        matches!(self, Self::Temp(_))
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temp(n) => write!(f, "temp_{n}"),
            Self::Saved(id) => f.write_str(id),
        }
    }
}

/// One admission unit being configured before purchase.
///
/// Food selections and a pickup slot only exist while the attendance
/// choice is [`Attendance::Takeaway`]; every mutation path maintains that
/// invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketDraft {
    id: TicketId,
    kind: TicketKind,
    attendance: Attendance,
    food: SmallVec<[FoodStation; 4]>,
    pickup: Option<PickupSlot>,
}

impl TicketDraft {
    /// A fresh draft in the default attending state.
    pub fn new(id: TicketId, kind: TicketKind) -> Self {
        Self {
            id,
            kind,
            attendance: Attendance::default(),
            food: SmallVec::new(),
            pickup: None,
        }
    }

    /// Rebuilds a draft from persisted fields.
    ///
    /// Food and pickup values saved under a non-takeaway attendance are
    /// dropped rather than trusted.
    pub fn from_saved(
        id: String,
        kind: TicketKind,
        attendance: Attendance,
        food: SmallVec<[FoodStation; 4]>,
        pickup: Option<PickupSlot>,
    ) -> Self {
        let mut draft = Self {
            id: TicketId::Saved(id),
            kind,
            attendance,
            food,
            pickup,
        };

        if attendance != Attendance::Takeaway {
            draft.food.clear();
            draft.pickup = None;
        }

        draft
    }

    /// The draft's identifier.
    pub fn id(&self) -> &TicketId {
        &self.id
    }

    /// The admission kind, fixed at creation.
    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    /// Current attendance choice.
    pub fn attendance(&self) -> Attendance {
        self.attendance
    }

    /// Selected food stations. Empty unless takeaway.
    pub fn food(&self) -> &[FoodStation] {
        &self.food
    }

    /// Chosen pickup slot. `None` unless takeaway.
    pub fn pickup(&self) -> Option<PickupSlot> {
        self.pickup
    }

    /// Persisted type, folding the donate choice into the kind.
    pub fn effective_type(&self) -> TicketType {
        if self.attendance == Attendance::Donate {
            self.kind.donated()
        } else {
            self.kind.regular()
        }
    }

    /// Switches the attendance choice, clearing food and pickup whenever
    /// the takeaway sub-sections go away.
    pub(crate) fn set_attendance(&mut self, attendance: Attendance) {
        self.attendance = attendance;

        if attendance != Attendance::Takeaway {
            self.food.clear();
            self.pickup = None;
        }
    }

    /// Adds or removes one station. Returns whether the change applied;
    /// outside takeaway the controls are not shown, so this is a no-op.
    pub(crate) fn set_station(&mut self, station: FoodStation, selected: bool) -> bool {
        if self.attendance != Attendance::Takeaway {
            return false;
        }

        if selected {
            if !self.food.contains(&station) {
                self.food.push(station);
            }
        } else {
            self.food.retain(|s| *s != station);
        }

        true
    }

    /// Sets or clears the pickup slot. Same visibility rule as
    /// [`TicketDraft::set_station`].
    pub(crate) fn set_pickup(&mut self, pickup: Option<PickupSlot>) -> bool {
        if self.attendance != Attendance::Takeaway {
            return false;
        }

        self.pickup = pickup;
        true
    }
}
