use crate::cards::{Card, Rank};
use crate::shoe::DeckCount;

/// Hi-Lo tag for a rank: 2-6 count +1, 7-9 count 0, tens and aces count -1.
pub const fn hi_lo(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Running/true count state for the active shoe.
///
/// Owned by whichever engine owns the shoe; both are reset together on a
/// reshuffle. When disabled (basic-strategy mode) dealt cards pass through
/// without touching the count.
#[derive(Debug, Clone)]
pub struct CountTracker {
    decks: DeckCount,
    running: i32,
    dealt: u32,
    enabled: bool,
}

impl CountTracker {
    pub fn new(decks: DeckCount) -> Self {
        Self { decks, running: 0, dealt: 0, enabled: true }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Fold one dealt card into the count. No-op while disabled.
    pub fn on_card(&mut self, card: Card) {
        if !self.enabled {
            return;
        }
        self.running += hi_lo(card.rank());
        self.dealt += 1;
    }

    pub fn running_count(&self) -> i32 {
        self.running
    }

    pub fn cards_dealt(&self) -> u32 {
        self.dealt
    }

    pub fn decks_remaining(&self) -> f64 {
        (self.decks.cards() as f64 - f64::from(self.dealt)) / 52.0
    }

    /// Running count normalized by decks remaining, rounded with ties away
    /// from zero.
    pub fn true_count(&self) -> i32 {
        let remaining = self.decks_remaining();
        if remaining <= 0.0 {
            return self.running;
        }
        (f64::from(self.running) / remaining).round() as i32
    }

    /// Zero the count; invoked on every reshuffle or full game reset.
    pub fn reset(&mut self) {
        self.running = 0;
        self.dealt = 0;
    }

    /// Switch shoe size. The count always restarts with the new shoe.
    pub fn set_decks(&mut self, decks: DeckCount) {
        self.decks = decks;
        self.reset();
    }
}
