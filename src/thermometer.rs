//! Donation thermometer
//!
//! Aggregates pledge rows into the two stacked layers of the donation
//! progress visualization, and plans its reveal animation as a pure
//! function of elapsed time so any scheduler (interval timer, frame
//! callback, test harness) can drive it.

use std::time::Duration;

use tracing::warn;

use crate::store::{BackendStore, DonationRow};

/// Fundraising goal the thermometer is drawn against, in minor units.
pub const DONATION_GOAL: i64 = 100_000_000;

/// Timer cadence the original visualization ticked at. Advisory only; the
/// animation math takes elapsed time directly.
pub const TICK: Duration = Duration::from_millis(16);

/// Combined animation budget shared by the two phases.
const TOTAL_BUDGET_MS: i128 = 3000;

/// Minimum running time of any phase that runs at all.
const PHASE_FLOOR_MS: i128 = 1500;

/// The two stacked layers of the donation thermometer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DonationTotals {
    /// Sum of settled pledge payments.
    pub received: i64,

    /// Pledged but not yet received.
    pub pledged_outstanding: i64,
}

impl DonationTotals {
    /// Folds raw donation rows into the two layers: received is the sum of
    /// settled payments, and the remainder of all pledges is outstanding.
    pub fn from_rows(rows: &[DonationRow]) -> Self {
        let received: i64 = rows
            .iter()
            .filter(|row| row.paid)
            .map(|row| row.amount_paid.unwrap_or(0))
            .sum();

        let pledged: i64 = rows.iter().map(|row| row.pledge_amount).sum();

        Self {
            received,
            pledged_outstanding: pledged - received,
        }
    }

    /// Received plus still-outstanding pledges.
    pub fn combined(self) -> i64 {
        self.received + self.pledged_outstanding
    }
}

/// Loads donation totals for an event.
///
/// The thermometer is cosmetic, so a backend failure is logged and
/// rendered as nothing raised yet rather than surfaced to the caller.
pub async fn load_donation_totals(store: &dyn BackendStore, event_ref: &str) -> DonationTotals {
    match store.donations(event_ref).await {
        Ok(rows) => DonationTotals::from_rows(&rows),
        Err(error) => {
            warn!(%error, event_ref, "failed to load donation totals");
            DonationTotals::default()
        }
    }
}

/// Phases of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing animating; final values are on display.
    Idle,

    /// Counting up the received layer.
    Received,

    /// Counting up the pledged layer.
    Pledged,
}

/// Displayed values at one instant of the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Phase in effect at this instant.
    pub phase: Phase,

    /// Displayed received amount.
    pub received: i64,

    /// Displayed pledged-outstanding amount.
    pub pledged_outstanding: i64,
}

/// Precomputed timeline for one reveal of the thermometer.
///
/// Each phase gets a share of the total budget proportional to its amount,
/// floored at 1.5 seconds; a phase with nothing to show is skipped
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThermometerAnimation {
    totals: DonationTotals,
    received_duration: Duration,
    pledged_duration: Duration,
}

impl ThermometerAnimation {
    /// Plans the reveal for the given totals.
    pub fn new(totals: DonationTotals) -> Self {
        let combined = totals.combined();

        Self {
            totals,
            received_duration: phase_duration(totals.received, combined),
            pledged_duration: phase_duration(totals.pledged_outstanding, combined),
        }
    }

    /// Displayed values after `elapsed` time.
    ///
    /// Interpolation is linear within each phase and lands exactly on the
    /// phase target; the clamp is direction-aware, so a range that runs
    /// downward also terminates.
    pub fn frame_at(&self, elapsed: Duration) -> Frame {
        if elapsed < self.received_duration {
            return Frame {
                phase: Phase::Received,
                received: interpolate(0, self.totals.received, elapsed, self.received_duration),
                pledged_outstanding: 0,
            };
        }

        let into_pledged = elapsed.saturating_sub(self.received_duration);
        if into_pledged < self.pledged_duration {
            return Frame {
                phase: Phase::Pledged,
                received: self.totals.received,
                pledged_outstanding: interpolate(
                    0,
                    self.totals.pledged_outstanding,
                    into_pledged,
                    self.pledged_duration,
                ),
            };
        }

        Frame {
            phase: Phase::Idle,
            received: self.totals.received,
            pledged_outstanding: self.totals.pledged_outstanding,
        }
    }

    /// Total running time of the reveal.
    pub fn duration(&self) -> Duration {
        self.received_duration + self.pledged_duration
    }

    /// Whether the reveal has landed on its final values.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}

fn phase_duration(amount: i64, combined: i64) -> Duration {
    if amount <= 0 || combined <= 0 {
        return Duration::ZERO;
    }

    let share = TOTAL_BUDGET_MS * i128::from(amount) / i128::from(combined);
    let ms = u64::try_from(share.max(PHASE_FLOOR_MS)).unwrap_or(u64::MAX);

    Duration::from_millis(ms)
}

fn interpolate(start: i64, target: i64, elapsed: Duration, duration: Duration) -> i64 {
    if duration.is_zero() {
        return target;
    }

    let elapsed_ms = i128::try_from(elapsed.as_millis()).unwrap_or(i128::MAX);
    let duration_ms = i128::try_from(duration.as_millis()).unwrap_or(i128::MAX);
    let span = i128::from(target) - i128::from(start);

    let raw = i128::from(start) + span * elapsed_ms.min(duration_ms) / duration_ms;

    // Direction-aware clamp: never overshoot the target from either side.
    let clamped = if target >= start {
        raw.clamp(i128::from(start), i128::from(target))
    } else {
        raw.clamp(i128::from(target), i128::from(start))
    };

    i64::try_from(clamped).unwrap_or(target)
}
