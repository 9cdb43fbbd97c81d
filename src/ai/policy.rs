//! Opponent policies.
//!
//! A policy looks at the AI's hand and picks the cards to play. Policies are
//! read-only: the engine applies whatever they return through the normal
//! play path.

use smallvec::smallvec;
use tracing::debug;

use crate::cards::{Card, Hand};
use crate::core::{GameRng, PolicyKind};

/// Chooses the AI's play from its hand.
pub trait OpponentPolicy: Send + Sync {
    /// Pick cards from `hand`. Returns an empty set only for an empty hand.
    fn choose(&self, hand: &[Card], rng: &mut GameRng) -> Hand;
}

/// Greedy single-card heuristic.
///
/// Sorts the hand by the fixed rank priority (`7, BJ, SJ, 5, 2, 3, A, K, Q,
/// J, 10, 9, 8, 6, 4`, suit ♠ ♥ ♣ ♦ as tie-break) and plays the first
/// scoring card (5, 10 or K) if there is one, otherwise the first card.
#[derive(Clone, Debug, Default)]
pub struct GreedyPolicy;

impl OpponentPolicy for GreedyPolicy {
    fn choose(&self, hand: &[Card], _rng: &mut GameRng) -> Hand {
        let mut sorted: Hand = hand.iter().copied().collect();
        sorted.sort();

        let pick = sorted
            .iter()
            .find(|c| c.is_scoring())
            .or_else(|| sorted.first())
            .copied();

        debug!(hand = ?sorted.as_slice(), pick = ?pick, "greedy policy choice");
        pick.map_or_else(Hand::new, |card| smallvec![card])
    }
}

/// Uniform random opponent policy. Plays one card chosen uniformly.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl OpponentPolicy for RandomPolicy {
    fn choose(&self, hand: &[Card], rng: &mut GameRng) -> Hand {
        rng.choose(hand).map_or_else(Hand::new, |card| smallvec![*card])
    }
}

/// Instantiate the policy a config names.
#[must_use]
pub fn policy_for(kind: PolicyKind) -> Box<dyn OpponentPolicy> {
    match kind {
        PolicyKind::Greedy => Box::new(GreedyPolicy),
        PolicyKind::Random => Box::new(RandomPolicy),
    }
}
