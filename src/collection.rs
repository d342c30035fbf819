//! Ticket collection
//!
//! The controller behind the ticket-editing view. The draft list owned
//! here is the source of truth: counts are a pure fold over it, so they
//! can never drift from what is on screen or dip below zero, and totals
//! need no rendering environment to compute.
//!
//! All session state the page needs — the placeholder-id counter and the
//! pending-deletion list — lives on the collection, constructed once per
//! page load and dropped with it.

use std::fmt;

use thiserror::Error;

use crate::{
    food::FoodStation,
    pricing::{TicketPrices, outstanding, ticket_total, total_paid},
    store::{BackendStore, StoreError},
    tickets::{Attendance, PickupSlot, TicketDraft, TicketId, TicketKind},
};

/// An operation named a ticket the collection does not hold.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no ticket with id {0}")]
pub struct UnknownTicket(pub TicketId);

/// Receives notifications about noteworthy ticket interactions.
///
/// The browser original dispatched a `donateTicketSelected` DOM event for
/// analytics-style listeners; implement this instead.
pub trait TicketObserver {
    /// A ticket's holder chose to donate it.
    fn donate_selected(&self, id: &TicketId, kind: TicketKind);
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl TicketObserver for NoopObserver {
    fn donate_selected(&self, _id: &TicketId, _kind: TicketKind) {}
}

/// Tallies of drafts by kind and donate choice — the four hidden counter
/// fields of the original form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    /// Regular adult drafts.
    pub adult: u32,

    /// Regular child drafts.
    pub child: u32,

    /// Adult drafts marked for donation.
    pub adult_donated: u32,

    /// Child drafts marked for donation.
    pub child_donated: u32,
}

impl TicketCounts {
    /// Adult drafts including donated ones.
    pub fn adults(self) -> u32 {
        self.adult + self.adult_donated
    }

    /// Child drafts including donated ones.
    pub fn children(self) -> u32 {
        self.child + self.child_donated
    }

    /// Every draft counted.
    pub fn total(self) -> u32 {
        self.adults() + self.children()
    }
}

/// Recomputed money figures for the order being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    /// Full ticket price for the current draft list, donated tickets
    /// included.
    pub total: i64,

    /// Sum of recorded payment transactions.
    pub paid: i64,

    /// `total - paid`; negative when overpaid.
    pub outstanding: i64,
}

/// The editable set of ticket drafts for one order.
pub struct TicketCollection {
    drafts: Vec<TicketDraft>,
    next_temp_id: u64,
    pending_deletions: Vec<String>,
    observer: Box<dyn TicketObserver>,
}

impl TicketCollection {
    /// An empty collection with no observer.
    pub fn new() -> Self {
        Self::with_observer(Box::new(NoopObserver))
    }

    /// An empty collection notifying the given observer.
    pub fn with_observer(observer: Box<dyn TicketObserver>) -> Self {
        Self {
            drafts: Vec::new(),
            next_temp_id: 0,
            pending_deletions: Vec::new(),
            observer,
        }
    }

    /// Replaces the draft list with persisted tickets, e.g. when opening
    /// an existing order for editing. Placeholder ids and pending
    /// deletions are untouched.
    pub fn load(&mut self, drafts: impl IntoIterator<Item = TicketDraft>) {
        self.drafts = drafts.into_iter().collect();
    }

    /// Adds a fresh draft of the given kind and returns its placeholder
    /// id. Placeholder ids increase monotonically for the life of the
    /// collection and are never reused, removals included.
    pub fn add(&mut self, kind: TicketKind) -> TicketId {
        let id = TicketId::Temp(self.next_temp_id);
        self.next_temp_id += 1;

        self.drafts.push(TicketDraft::new(id.clone(), kind));

        id
    }

    /// Switches a draft's attendance choice, maintaining the draft
    /// invariant. Choosing donate notifies the observer.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTicket`] if no draft has this id.
    pub fn set_attendance(
        &mut self,
        id: &TicketId,
        attendance: Attendance,
    ) -> Result<(), UnknownTicket> {
        let draft = self.draft_mut(id)?;
        draft.set_attendance(attendance);
        let kind = draft.kind();

        if attendance == Attendance::Donate {
            self.observer.donate_selected(id, kind);
        }

        Ok(())
    }

    /// Adds or removes one food station on a draft. Returns whether the
    /// change applied; outside takeaway the food controls are not shown,
    /// so the call is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTicket`] if no draft has this id.
    pub fn set_station(
        &mut self,
        id: &TicketId,
        station: FoodStation,
        selected: bool,
    ) -> Result<bool, UnknownTicket> {
        Ok(self.draft_mut(id)?.set_station(station, selected))
    }

    /// Sets or clears a draft's pickup slot, under the same visibility
    /// rule as [`TicketCollection::set_station`].
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTicket`] if no draft has this id.
    pub fn set_pickup(
        &mut self,
        id: &TicketId,
        pickup: Option<PickupSlot>,
    ) -> Result<bool, UnknownTicket> {
        Ok(self.draft_mut(id)?.set_pickup(pickup))
    }

    /// Removes a draft. Returns whether a draft was removed.
    ///
    /// An already-persisted ticket is remembered for the external save
    /// step to delete; repeat removals record the id only once.
    pub fn remove(&mut self, id: &TicketId) -> bool {
        let Some(index) = self.drafts.iter().position(|draft| draft.id() == id) else {
            return false;
        };

        self.drafts.remove(index);

        if let TicketId::Saved(saved) = id {
            if !self.pending_deletions.iter().any(|pending| pending == saved) {
                self.pending_deletions.push(saved.clone());
            }
        }

        true
    }

    /// Tallies the draft list by kind and donate choice.
    pub fn counts(&self) -> TicketCounts {
        self.drafts
            .iter()
            .fold(TicketCounts::default(), |mut counts, draft| {
                match (draft.kind(), draft.attendance() == Attendance::Donate) {
                    (TicketKind::Adult, false) => counts.adult += 1,
                    (TicketKind::Adult, true) => counts.adult_donated += 1,
                    (TicketKind::Child, false) => counts.child += 1,
                    (TicketKind::Child, true) => counts.child_donated += 1,
                }
                counts
            })
    }

    /// Ticket price across every draft. Donated tickets are still paid
    /// for, so they price the same as regular ones.
    pub fn total(&self, prices: &TicketPrices) -> i64 {
        let counts = self.counts();
        ticket_total(counts.adults(), counts.children(), prices)
    }

    /// Recomputes the money figures, pulling recorded payments from the
    /// backend. The fetch is awaited sequentially; a stalled call simply
    /// delays the refresh.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] from the transaction fetch.
    pub async fn refresh_totals(
        &self,
        store: &dyn BackendStore,
        order_ref: &str,
        prices: &TicketPrices,
    ) -> Result<OrderTotals, StoreError> {
        let total = self.total(prices);
        let transactions = store.payment_transactions(order_ref).await?;

        Ok(OrderTotals {
            total,
            paid: total_paid(&transactions),
            outstanding: outstanding(total, &transactions),
        })
    }

    /// A remove control is shown exactly while its kind has drafts left.
    pub fn remove_control_visible(&self, kind: TicketKind) -> bool {
        let counts = self.counts();

        match kind {
            TicketKind::Adult => counts.adults() > 0,
            TicketKind::Child => counts.children() > 0,
        }
    }

    /// The current draft list, in creation order.
    pub fn drafts(&self) -> &[TicketDraft] {
        &self.drafts
    }

    /// One draft by id.
    pub fn draft(&self, id: &TicketId) -> Option<&TicketDraft> {
        self.drafts.iter().find(|draft| draft.id() == id)
    }

    /// Identifiers of persisted tickets awaiting deletion by the external
    /// save step.
    pub fn pending_deletions(&self) -> &[String] {
        &self.pending_deletions
    }

    fn draft_mut(&mut self, id: &TicketId) -> Result<&mut TicketDraft, UnknownTicket> {
        self.drafts
            .iter_mut()
            .find(|draft| draft.id() == id)
            .ok_or_else(|| UnknownTicket(id.clone()))
    }
}

impl Default for TicketCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TicketCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TicketCollection")
            .field("drafts", &self.drafts)
            .field("next_temp_id", &self.next_temp_id)
            .field("pending_deletions", &self.pending_deletions)
            .finish_non_exhaustive()
    }
}
