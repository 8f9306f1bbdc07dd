use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Table play reshuffles before a deal once fewer cards than this remain.
pub const TABLE_RESHUFFLE_THRESHOLD: usize = 20;
/// Counting drills reshuffle below this (a drill run needs up to 12 cards).
pub const DRILL_RESHUFFLE_THRESHOLD: usize = 15;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShoeError {
    #[error("shoe is empty")]
    Empty,
}

/// Allowed shoe sizes. Restricting the type to the enumerated set means an
/// out-of-set deck count is unrepresentable rather than checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DeckCount {
    One,
    Two,
    Four,
    Six,
    Eight,
}

impl DeckCount {
    pub const ALL: [DeckCount; 5] =
        [DeckCount::One, DeckCount::Two, DeckCount::Four, DeckCount::Six, DeckCount::Eight];

    pub const fn decks(self) -> usize {
        match self {
            DeckCount::One => 1,
            DeckCount::Two => 2,
            DeckCount::Four => 4,
            DeckCount::Six => 6,
            DeckCount::Eight => 8,
        }
    }

    /// Total cards in a full shoe of this size.
    pub const fn cards(self) -> usize {
        self.decks() * 52
    }

    /// Map a raw deck count to the enumerated set; out-of-set values are
    /// rejected with `None` and left for the caller to ignore.
    pub const fn from_decks(n: usize) -> Option<Self> {
        match n {
            1 => Some(DeckCount::One),
            2 => Some(DeckCount::Two),
            4 => Some(DeckCount::Four),
            6 => Some(DeckCount::Six),
            8 => Some(DeckCount::Eight),
            _ => None,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            DeckCount::One => DeckCount::Two,
            DeckCount::Two => DeckCount::Four,
            DeckCount::Four => DeckCount::Six,
            DeckCount::Six => DeckCount::Eight,
            DeckCount::Eight => DeckCount::One,
        }
    }

    pub const fn prev(self) -> Self {
        match self {
            DeckCount::One => DeckCount::Eight,
            DeckCount::Two => DeckCount::One,
            DeckCount::Four => DeckCount::Two,
            DeckCount::Six => DeckCount::Four,
            DeckCount::Eight => DeckCount::Six,
        }
    }
}

impl Default for DeckCount {
    fn default() -> Self {
        DeckCount::Six
    }
}

/// A card paired with its shoe-unique identity. Two copies of the same rank
/// and suit drawn from different decks compare unequal by `id`, which is
/// what lets conservation checks treat every physical card as distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShoeCard {
    card: Card,
    id: u16,
}

impl ShoeCard {
    pub const fn card(self) -> Card {
        self.card
    }

    pub const fn id(self) -> u16 {
        self.id
    }
}

/// A multi-deck dealing shoe.
///
/// Cards are drawn from the top (end of the internal vector); the order is a
/// uniform random permutation, so build order is immaterial.
///
/// ```
/// use blackjack_rs::shoe::{DeckCount, Shoe};
///
/// let shoe = Shoe::new(DeckCount::Six);
/// assert_eq!(shoe.remaining(), 312);
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: DeckCount,
    cards: Vec<ShoeCard>,
}

impl Shoe {
    /// Build a full shoe and shuffle it with a fresh random seed.
    pub fn new(decks: DeckCount) -> Self {
        let mut shoe = Self { decks, cards: Self::build(decks) };
        let seed: u64 = rand::rng().random();
        shoe.shuffle_seeded(seed);
        shoe
    }

    fn build(decks: DeckCount) -> Vec<ShoeCard> {
        let mut cards = Vec::with_capacity(decks.cards());
        let mut id: u16 = 0;
        for _ in 0..decks.decks() {
            for &s in &Suit::ALL {
                for &r in &Rank::ALL {
                    cards.push(ShoeCard { card: Card::new(r, s), id });
                    id += 1;
                }
            }
        }
        cards
    }

    pub fn decks(&self) -> DeckCount {
        self.decks
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Size of this shoe when full.
    pub fn full_size(&self) -> usize {
        self.decks.cards()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<ShoeCard, ShoeError> {
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// True once the remainder has fallen below `threshold`.
    pub fn needs_reshuffle(&self, threshold: usize) -> bool {
        self.cards.len() < threshold
    }

    /// Discard the remainder and rebuild to full size with fresh identities.
    /// The caller is responsible for resetting any count that tracked the
    /// old shoe.
    pub fn rebuild(&mut self) {
        self.cards = Self::build(self.decks);
        let seed: u64 = rand::rng().random();
        self.shuffle_seeded(seed);
    }
}
