//! The game state machine.
//!
//! `GameEngine` owns one game: config, state, RNG and the AI policy. All
//! operations are synchronous and mutate in place; a rejected play leaves
//! the state exactly as it was.

use tracing::{debug, info, warn};

use crate::ai::{policy_for, OpponentPolicy};
use crate::cards::{Card, Deck, Hand};
use crate::core::{GameConfig, GameRng, RefillOrder, Seat};
use crate::error::{GameError, Result};
use crate::rules::{scoring_cards, Outcome};

use super::state::{GamePhase, GameState, PlayType, RoundState};

/// One game of 5-10-K between the player and the AI.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    policy: Box<dyn OpponentPolicy>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("seed", &self.rng.seed())
            .finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Start a new game: shuffle a full deck and deal both hands.
    ///
    /// Panics on an invalid config; use [`GameEngine::try_new`] for configs
    /// that did not come through the builders.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let deck = Self::create_deck(&mut rng);
        let mut engine = Self::assemble(config, GameState::new(deck), rng);
        engine.deal();

        info!(seed = engine.rng.seed(), deck = engine.state.deck.len(), "game started");
        engine
    }

    /// Like [`GameEngine::new`], but rejects an invalid config.
    pub fn try_new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Start a game from a pre-ordered deck (last card dealt first).
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut engine = Self::assemble(config, GameState::new(deck), rng);
        engine.deal();
        engine
    }

    /// Resume from an arbitrary state. Nothing is dealt.
    #[must_use]
    pub fn from_state(config: GameConfig, state: GameState) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::assemble(config, state, rng)
    }

    pub(crate) fn assemble(config: GameConfig, state: GameState, rng: GameRng) -> Self {
        assert!(config.hand_size > 0, "Hand size must be at least 1");
        let policy = policy_for(config.policy);
        Self {
            config,
            state,
            rng,
            policy,
        }
    }

    /// All 54 cards, shuffled.
    #[must_use]
    pub fn create_deck(rng: &mut GameRng) -> Deck {
        Deck::shuffled(rng)
    }

    /// Deal `hand_size` cards to each seat, one at a time, player first.
    ///
    /// Stops early when the deck runs out. `new` already calls this.
    pub fn deal(&mut self) {
        for _ in 0..self.config.hand_size {
            for seat in Seat::ALL {
                if let Some(card) = self.state.deck.draw() {
                    self.state.hands[seat].push(card);
                }
            }
        }
    }

    /// Top both hands back up to `hand_size` from the deck.
    pub fn refill_hands(&mut self) {
        let hand_size = self.config.hand_size;
        let state = &mut self.state;

        match self.config.refill_order {
            RefillOrder::PlayerFirst => {
                for seat in Seat::ALL {
                    while state.hands[seat].len() < hand_size {
                        let Some(card) = state.deck.draw() else { break };
                        state.hands[seat].push(card);
                    }
                }
            }
            RefillOrder::Alternating => loop {
                let mut drew = false;
                for seat in Seat::ALL {
                    if state.hands[seat].len() < hand_size {
                        if let Some(card) = state.deck.draw() {
                            state.hands[seat].push(card);
                            drew = true;
                        }
                    }
                }
                if !drew {
                    break;
                }
            },
        }

        debug!(
            player = state.hands[Seat::Player].len(),
            ai = state.hands[Seat::Ai].len(),
            deck = state.deck.len(),
            "hands refilled"
        );
    }

    /// Play `cards` from `seat`'s hand, score them, refill and pass the turn.
    ///
    /// With `enforce_rules` this fails on a finished game, an out-of-turn
    /// seat, or a card that is not held (counting duplicates). Otherwise
    /// missing cards are skipped and only the cards actually removed count.
    pub fn play_cards(&mut self, seat: Seat, cards: &[Card]) -> Result<RoundState> {
        if self.config.enforce_rules {
            if let Err(err) = self.check_play(seat, cards) {
                warn!(%seat, error = %err, "play rejected");
                return Err(err);
            }
        }

        let hand = &mut self.state.hands[seat];
        let mut played = Hand::new();
        for card in cards {
            match hand.iter().position(|c| c == card) {
                Some(i) => {
                    hand.remove(i);
                    played.push(*card);
                }
                None => debug!(%seat, %card, "card not in hand, skipped"),
            }
        }

        let scored: Hand = scoring_cards(&played).collect();
        self.state.score_piles[seat].extend(scored.iter().copied());
        self.state
            .discard
            .extend(played.iter().copied().filter(|c| !c.is_scoring()));

        self.refill_hands();
        self.state.current = seat.other();

        let round = RoundState {
            turn: self.state.history.len() as u32 + 1,
            seat,
            play_type: PlayType::Single,
            cards: played,
            scored,
        };
        self.state.last_play = Some(round.clone());
        self.state.history.push_back(round.clone());

        debug!(
            %seat,
            turn = round.turn,
            cards = ?round.cards.as_slice(),
            scored = ?round.scored.as_slice(),
            "cards played"
        );

        if let Some(outcome) = self.outcome() {
            info!(
                player_score = self.score(Seat::Player),
                ai_score = self.score(Seat::Ai),
                ?outcome,
                "game ended"
            );
        }

        Ok(round)
    }

    fn check_play(&self, seat: Seat, cards: &[Card]) -> Result<()> {
        if self.is_game_end() {
            return Err(GameError::GameAlreadyEnded);
        }
        if seat != self.state.current {
            return Err(GameError::NotYourTurn {
                expected: self.state.current,
                actual: seat,
            });
        }

        let mut remaining = self.state.hands[seat].clone();
        for card in cards {
            let i = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(GameError::CardNotInHand(*card))?;
            remaining.remove(i);
        }
        Ok(())
    }

    /// Ask the opponent policy what the AI would play now.
    ///
    /// Works on a copy of the RNG, so the preview is exactly what the AI
    /// plays on its next turn.
    #[must_use]
    pub fn choose_ai_cards(&self) -> Hand {
        self.policy.choose(&self.state.hands[Seat::Ai], &mut self.rng.clone())
    }

    /// The AI's choice for the turn being played; advances the RNG.
    pub(super) fn decide_ai_cards(&mut self) -> Hand {
        self.policy.choose(&self.state.hands[Seat::Ai], &mut self.rng)
    }

    /// Deck and both hands are empty.
    #[must_use]
    pub fn is_game_end(&self) -> bool {
        self.state.is_game_end()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Winner, once the game has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    #[must_use]
    pub fn score(&self, seat: Seat) -> u32 {
        self.state.score(seat)
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.state.hands[seat]
    }

    /// Seat to act next.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.state.current
    }

    #[must_use]
    pub fn last_play(&self) -> Option<&RoundState> {
        self.state.last_play.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn rng(&self) -> &GameRng {
        &self.rng
    }
}
