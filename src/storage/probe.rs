//! Durable storage availability check.

use super::KeyValueStore;

/// Sentinel key written and removed by [`probe_durable`].
pub const PROBE_KEY: &str = "__storage_test__";

/// Check whether a durable store accepts a write/delete round trip.
///
/// Any failure counts as "unavailable". The failure is logged and never
/// propagated; callers fall back to session-only storage.
pub fn probe_durable(store: &mut dyn KeyValueStore) -> bool {
    let round_trip = store
        .set_item(PROBE_KEY, PROBE_KEY)
        .and_then(|_| store.remove_item(PROBE_KEY));

    match round_trip {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Durable storage unavailable, using session storage: {}", e);
            false
        }
    }
}
