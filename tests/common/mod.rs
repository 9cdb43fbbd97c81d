//! Shared helpers for integration tests.
//!
//! Log level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.

#![allow(dead_code)]

use five_ten_king::{GameEngine, Seat};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test-friendly tracing subscriber once per test binary.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Play the game out with the player always leading its first card.
/// Returns the number of plays made.
pub fn play_to_end(engine: &mut GameEngine) -> usize {
    let mut plays = 0;
    while !engine.is_game_end() {
        let seat = engine.current_seat();
        let cards: Vec<_> = engine.hand(seat).iter().take(1).copied().collect();
        engine
            .play_cards(seat, &cards)
            .expect("plays from the current hand are legal");
        plays += 1;
        assert!(plays <= 200, "game did not terminate");
    }
    plays
}

/// Total of every pile; 54 for a full deck.
pub fn total_cards(engine: &GameEngine) -> usize {
    let state = engine.state();
    state.deck.len()
        + state.hands[Seat::Player].len()
        + state.hands[Seat::Ai].len()
        + state.score_piles[Seat::Player].len()
        + state.score_piles[Seat::Ai].len()
        + state.discard.len()
}
