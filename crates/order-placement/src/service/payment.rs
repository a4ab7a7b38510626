//! The stand-in for a payment provider.

use rand::Rng;
use std::fmt::Debug;
use std::sync::Arc;

/// Decides whether a payment goes through.
///
/// Wraps a shared `Fn() -> bool` so tests can force either outcome while the running system
/// flips a weighted coin.
#[derive(Clone)]
pub struct PaymentDecision {
    decide: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl PaymentDecision {
    pub fn from_fn(decide: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            decide: Arc::new(decide),
        }
    }

    /// Approves with probability `success_rate`, clamped to `[0, 1]`.
    pub fn random(success_rate: f64) -> Self {
        let rate = if success_rate.is_nan() {
            0.0
        } else {
            success_rate.clamp(0.0, 1.0)
        };
        Self::from_fn(move || rand::thread_rng().gen_bool(rate))
    }

    pub fn always_approve() -> Self {
        Self::from_fn(|| true)
    }

    pub fn always_decline() -> Self {
        Self::from_fn(|| false)
    }

    pub fn approve(&self) -> bool {
        (self.decide)()
    }
}

impl Debug for PaymentDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentDecision").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fixed_outcomes() {
        assert!(PaymentDecision::always_approve().approve());
        assert!(!PaymentDecision::always_decline().approve());
    }

    #[test]
    fn test_random_edges_are_deterministic() {
        let never = PaymentDecision::random(0.0);
        let always = PaymentDecision::random(1.0);
        let clamped = PaymentDecision::random(7.5);
        for _ in 0..100 {
            assert!(!never.approve());
            assert!(always.approve());
            assert!(clamped.approve());
        }
    }

    #[test]
    fn test_from_fn_is_shared_across_clones() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let decision = PaymentDecision::from_fn(move || counter.fetch_add(1, Ordering::SeqCst) % 2 == 0);
        let copy = decision.clone();

        assert!(decision.approve());
        assert!(!copy.approve());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
