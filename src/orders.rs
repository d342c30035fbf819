//! Order numbers
//!
//! Random numeric order numbers, checked against the backend for
//! uniqueness before use.

use rand::Rng;

use crate::store::{BackendStore, StoreError};

/// Digits in a standard order number.
pub const ORDER_NUMBER_LEN: usize = 6;

/// Collisions are vanishingly rare at six digits; if this many candidates
/// in a row already exist, something else is wrong.
const MAX_ATTEMPTS: usize = 100;

/// Generates `len` random decimal digits.
pub fn generate_order_number(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10))).collect()
}

/// Generates an order number no existing order uses.
///
/// # Errors
///
/// Backend failures propagate immediately; exhausting the attempt cap
/// surfaces as [`StoreError::UnexpectedResponse`].
pub async fn unique_order_number(
    store: &dyn BackendStore,
    rng: &mut (impl Rng + Send),
) -> Result<String, StoreError> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = generate_order_number(rng, ORDER_NUMBER_LEN);

        if !store.order_number_exists(&candidate).await? {
            return Ok(candidate);
        }
    }

    Err(StoreError::UnexpectedResponse(
        "could not find an unused order number".to_owned(),
    ))
}
