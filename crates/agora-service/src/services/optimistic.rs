//! Optimistic command engine
//!
//! One code path owns the optimistic-update contract for every mutation:
//! write the computed next state immediately, dispatch the remote effect,
//! then settle - replace local state with the authoritative result on
//! success, restore the pre-click state on failure. Every write carries the
//! command's sequence ticket; the store discards writes whose ticket lost
//! to a newer command on the same target, so out-of-order responses (rapid
//! double-toggles) can never resurrect stale state. A failed effect is
//! never retried.

use std::future::Future;

use agora_core::GatewayResult;
use tracing::debug;

use super::error::ServiceResult;

/// Run one optimistic command to completion
///
/// - `next` / `rollback`: the post-click and pre-click local states
/// - `apply`: sequence-checked store write; returns `false` on a stale
///   ticket (the write was discarded)
/// - `effect`: the remote call
/// - `reconcile`: maps the effect's response to the authoritative state to
///   write back, or `None` to keep the optimistic state
pub(crate) async fn execute<S, R, A, Fut, Rec>(
    label: &'static str,
    seq: u64,
    next: S,
    rollback: S,
    apply: A,
    effect: Fut,
    reconcile: Rec,
) -> ServiceResult<R>
where
    S: Copy,
    A: Fn(S, u64) -> bool,
    Fut: Future<Output = GatewayResult<R>>,
    Rec: FnOnce(&R) -> Option<S>,
{
    if !apply(next, seq) {
        debug!(label, seq, "optimistic write discarded as stale");
    }

    match effect.await {
        Ok(response) => {
            if let Some(authoritative) = reconcile(&response) {
                if !apply(authoritative, seq) {
                    debug!(label, seq, "stale reconciliation discarded");
                }
            }
            Ok(response)
        }
        Err(err) => {
            debug!(label, seq, error = %err, "effect failed, rolling back");
            if !apply(rollback, seq) {
                debug!(label, seq, "stale rollback discarded");
            }
            Err(err.into())
        }
    }
}
