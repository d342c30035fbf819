//! Integration test for the donation thermometer.
//!
//! Loads pledge rows through the (mocked) backend, folds them into the
//! two stacked layers, and drives the reveal animation across its whole
//! timeline at the original 16 ms cadence.

use std::time::Duration;

use testresult::TestResult;

use fete::prelude::*;
use fete::store::MockBackendStore;
use fete::thermometer::TICK;

#[tokio::test]
async fn pledges_load_animate_and_land_on_exact_totals() -> TestResult {
    let mut store = MockBackendStore::new();
    store.expect_donations().returning(|_| {
        Ok(vec![
            DonationRow {
                pledge_amount: 1000,
                amount_paid: Some(1000),
                paid: true,
            },
            DonationRow {
                pledge_amount: 2000,
                amount_paid: None,
                paid: false,
            },
        ])
    });

    let totals = load_donation_totals(&store, "family-day").await;
    assert_eq!(totals.received, 1000);
    assert_eq!(totals.pledged_outstanding, 2000);
    assert_eq!(totals.combined(), 3000);

    let animation = ThermometerAnimation::new(totals);
    let mut elapsed = Duration::ZERO;
    let mut seen_received_phase = false;
    let mut seen_pledged_phase = false;

    loop {
        let frame = animation.frame_at(elapsed);

        match frame.phase {
            Phase::Received => {
                assert!(
                    !seen_pledged_phase,
                    "received phase must run before the pledged phase"
                );
                seen_received_phase = true;
            }
            Phase::Pledged => {
                assert_eq!(frame.received, 1000, "received layer must be complete");
                seen_pledged_phase = true;
            }
            Phase::Idle => break,
        }

        elapsed += TICK;
    }

    assert!(seen_received_phase);
    assert!(seen_pledged_phase);

    let last = animation.frame_at(elapsed);
    assert_eq!(last.received, 1000);
    assert_eq!(last.pledged_outstanding, 2000);

    Ok(())
}

#[tokio::test]
async fn backend_failure_renders_as_nothing_raised() {
    let mut store = MockBackendStore::new();
    store.expect_donations().returning(|_| {
        Err(StoreError::UnexpectedResponse("service unavailable".to_owned()))
    });

    let totals = load_donation_totals(&store, "family-day").await;

    assert_eq!(totals, DonationTotals::default());

    let animation = ThermometerAnimation::new(totals);
    assert!(animation.is_finished(Duration::ZERO));
}
