// Minimal game engine API boundary. This trait exposes the trainer's
// intents and read-only projections so UIs (TUI, GUI, auto-play agents) can
// drive a round without depending on table internals. It is implemented for
// the core `Game` type.

use crate::cards::Card;
use crate::hand::Hand;
use crate::payout::Settlement;
use crate::round::{ActionError, Mode, Phase};
use crate::shoe::DeckCount;
use crate::strategy::Advice;

pub trait GameEngine {
    // Hand lifecycle
    fn new_hand(&mut self) -> Result<(), ActionError>;
    fn dealer_step(&mut self) -> Result<bool, ActionError>;

    // Player actions
    fn action_hit(&mut self) -> Result<(), ActionError>;
    fn action_stand(&mut self) -> Result<(), ActionError>;
    fn action_double(&mut self) -> Result<(), ActionError>;
    fn action_split(&mut self) -> Result<(), ActionError>;

    // Configuration intents
    fn set_bet(&mut self, bet: u32);
    fn set_mode(&mut self, mode: Mode);
    fn set_deck_count(&mut self, decks: DeckCount);
    fn reset_game(&mut self);

    // Queries
    fn phase(&self) -> Phase;
    fn mode(&self) -> Mode;
    fn player(&self) -> &Hand;
    fn dealer(&self) -> &Hand;
    fn dealer_upcard(&self) -> Option<Card>;
    fn bet(&self) -> u32;
    fn effective_bet(&self) -> u32;
    fn balance(&self) -> f64;
    fn can_double(&self) -> bool;
    fn can_split(&self) -> bool;
    fn last_result(&self) -> Option<Settlement>;
    fn running_count(&self) -> i32;
    fn true_count(&self) -> i32;
    fn decks_remaining(&self) -> f64;
    fn advice(&self) -> Option<Advice>;
}

impl GameEngine for crate::round::Game {
    fn new_hand(&mut self) -> Result<(), ActionError> {
        self.deal()
    }

    fn dealer_step(&mut self) -> Result<bool, ActionError> {
        self.dealer_step()
    }

    fn action_hit(&mut self) -> Result<(), ActionError> {
        self.hit()
    }
    fn action_stand(&mut self) -> Result<(), ActionError> {
        self.stand()
    }
    fn action_double(&mut self) -> Result<(), ActionError> {
        self.double_down()
    }
    fn action_split(&mut self) -> Result<(), ActionError> {
        self.split()
    }

    fn set_bet(&mut self, bet: u32) {
        self.set_bet(bet);
    }
    fn set_mode(&mut self, mode: Mode) {
        self.set_mode(mode);
    }
    fn set_deck_count(&mut self, decks: DeckCount) {
        self.set_deck_count(decks);
    }
    fn reset_game(&mut self) {
        self.reset();
    }

    fn phase(&self) -> Phase {
        self.phase()
    }
    fn mode(&self) -> Mode {
        self.mode()
    }
    fn player(&self) -> &Hand {
        self.player()
    }
    fn dealer(&self) -> &Hand {
        self.dealer()
    }
    fn dealer_upcard(&self) -> Option<Card> {
        self.dealer_upcard()
    }
    fn bet(&self) -> u32 {
        self.bet()
    }
    fn effective_bet(&self) -> u32 {
        self.effective_bet()
    }
    fn balance(&self) -> f64 {
        self.balance()
    }
    fn can_double(&self) -> bool {
        self.can_double()
    }
    fn can_split(&self) -> bool {
        self.can_split()
    }
    fn last_result(&self) -> Option<Settlement> {
        self.last_result()
    }
    fn running_count(&self) -> i32 {
        self.counter().running_count()
    }
    fn true_count(&self) -> i32 {
        self.counter().true_count()
    }
    fn decks_remaining(&self) -> f64 {
        self.counter().decks_remaining()
    }
    fn advice(&self) -> Option<Advice> {
        self.advice()
    }
}
