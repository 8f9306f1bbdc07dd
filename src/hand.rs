use crate::cards::{parse_cards, Card, CardParseError, Rank};
use std::fmt;
use std::str::FromStr;

/// An ordered blackjack hand (player's or dealer's).
///
/// The total is always derived from the current cards, never cached: every
/// query re-runs the soft-ace adjustment so a hand can't go stale.
///
/// ```
/// use blackjack_rs::hand::Hand;
///
/// let hand: Hand = "Ah 6d".parse().unwrap();
/// assert_eq!(hand.value(), 17);
/// assert!(hand.is_soft());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Total and the number of aces still counted as 11 after adjustment.
    fn value_and_high_aces(&self) -> (u8, u8) {
        let mut total: u16 = 0;
        let mut high_aces: u8 = 0;
        for card in &self.cards {
            if card.rank().is_ace() {
                high_aces += 1;
            }
            total += u16::from(card.rank().base_value());
        }
        while total > 21 && high_aces > 0 {
            total -= 10;
            high_aces -= 1;
        }
        (total as u8, high_aces)
    }

    /// Sum of base values with each ace demoted from 11 to 1 while the
    /// total exceeds 21.
    pub fn value(&self) -> u8 {
        self.value_and_high_aces().0
    }

    /// True iff an ace is still counted as 11 after adjustment.
    pub fn is_soft(&self) -> bool {
        self.value_and_high_aces().1 > 0
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// An un-hit two-card 21. Callers must separately exclude doubled or
    /// split hands when applying the 3:2 blackjack payout.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Exactly two cards of equal rank, with 10/J/Q/K treated as one class.
    pub fn is_pair(&self) -> bool {
        match self.cards.as_slice() {
            [a, b] => {
                a.rank() == b.rank() || (a.rank().is_ten_value() && b.rank().is_ten_value())
            }
            _ => false,
        }
    }

    /// Rank of the non-ace companion in a two-card soft hand, if any.
    pub fn soft_companion(&self) -> Option<Rank> {
        if self.cards.len() != 2 || !self.is_soft() {
            return None;
        }
        self.cards.iter().map(|c| c.rank()).find(|r| !r.is_ace())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = CardParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_cards(parse_cards(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn simple_totals() {
        assert_eq!(hand("2h 3s").value(), 5);
        assert_eq!(hand("Kh Qs").value(), 20);
        assert_eq!(hand("Ah Ks").value(), 21);
    }

    #[test]
    fn value_is_idempotent() {
        let h = hand("Ah 6d 10c");
        assert_eq!(h.value(), 17);
        assert_eq!(h.value(), 17);
    }

    #[test]
    fn soft_ace_demotes_instead_of_busting() {
        let mut h = hand("Ah 6d");
        assert_eq!(h.value(), 17);
        assert!(h.is_soft());

        h.push("10c".parse().unwrap());
        assert_eq!(h.value(), 17);
        assert!(!h.is_soft());
        assert!(!h.is_bust());
    }

    #[test]
    fn multiple_aces_demote_one_at_a_time() {
        assert_eq!(hand("Ah As").value(), 12);
        assert_eq!(hand("Ah As 9c").value(), 21);
        assert_eq!(hand("Ah As 9c 5d").value(), 16);
    }

    #[test]
    fn bust_detection() {
        assert!(hand("Kh Qs 5c").is_bust());
        assert!(!hand("Kh Qs").is_bust());
    }

    #[test]
    fn natural_is_exactly_two_cards_totaling_21() {
        assert!(hand("Ah Ks").is_natural());
        assert!(!hand("7h 7s 7c").is_natural());
        assert!(!hand("Kh Qs").is_natural());
    }

    #[test]
    fn pairs_use_the_ten_class() {
        assert!(hand("8h 8s").is_pair());
        assert!(hand("Kh Qs").is_pair());
        assert!(hand("10h Js").is_pair());
        assert!(hand("Ah As").is_pair());
        assert!(!hand("8h 9s").is_pair());
        assert!(!hand("8h 8s 2c").is_pair());
    }

    #[test]
    fn soft_companion_skips_the_ace() {
        assert_eq!(hand("Ah 7d").soft_companion(), Some(Rank::Seven));
        assert_eq!(hand("7d Ah").soft_companion(), Some(Rank::Seven));
        assert_eq!(hand("Ah 6d 2c").soft_companion(), None);
        assert_eq!(hand("9h 7d").soft_companion(), None);
    }
}
