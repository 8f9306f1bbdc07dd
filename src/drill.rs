use crate::cards::Card;
use crate::counting::CountTracker;
use crate::shoe::{DeckCount, Shoe, ShoeError, DRILL_RESHUFFLE_THRESHOLD};
use rand::Rng;

/// Bounds for one practice run of dealt cards.
pub const MIN_RUN: usize = 5;
pub const MAX_RUN: usize = 12;

/// Tally of scored guesses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub total: u32,
}

impl Score {
    /// Accuracy in percent, `None` before any guess.
    pub fn accuracy(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(f64::from(self.correct) / f64::from(self.total) * 100.0)
        }
    }
}

/// Count-estimation practice: deal a short run of cards face up, have the
/// user name the running count, score the answer.
///
/// The drill owns its own shoe and tracker; it never touches table hands.
#[derive(Debug)]
pub struct Drill {
    shoe: Shoe,
    counter: CountTracker,
    displayed: Vec<Card>,
    score: Score,
    revealed: bool,
}

impl Drill {
    pub fn new(decks: DeckCount) -> Self {
        Self {
            shoe: Shoe::new(decks),
            counter: CountTracker::new(decks),
            displayed: Vec::new(),
            score: Score::default(),
            revealed: false,
        }
    }

    /// Cards of the current run, in dealt order.
    pub fn displayed(&self) -> &[Card] {
        &self.displayed
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Whether the current run's answer has been revealed.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn counter(&self) -> &CountTracker {
        &self.counter
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn deck_count(&self) -> DeckCount {
        self.shoe.decks()
    }

    /// Deal a fresh run of 5..=12 cards, reshuffling (and restarting the
    /// count) first when the shoe has run low.
    pub fn deal_run(&mut self) -> Result<(), ShoeError> {
        self.deal_run_with(&mut rand::rng())
    }

    /// RNG-generic variant for reproducible runs.
    pub fn deal_run_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ShoeError> {
        if self.shoe.needs_reshuffle(DRILL_RESHUFFLE_THRESHOLD) {
            self.shoe.rebuild();
            self.counter.reset();
        }
        self.displayed.clear();
        self.revealed = false;
        let n = rng.random_range(MIN_RUN..=MAX_RUN);
        for _ in 0..n {
            let drawn = self.shoe.draw()?;
            let card = drawn.card();
            self.counter.on_card(card);
            self.displayed.push(card);
        }
        Ok(())
    }

    /// Score a guess against the running count and reveal the answer.
    /// Returns `None` when there is nothing to score (no run dealt, or the
    /// run was already answered).
    pub fn submit(&mut self, guess: i32) -> Option<bool> {
        if self.displayed.is_empty() || self.revealed {
            return None;
        }
        let correct = guess == self.counter.running_count();
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        self.revealed = true;
        Some(correct)
    }

    /// Rebuild the shoe and zero both the count and the score tally.
    pub fn reset(&mut self) {
        self.shoe.rebuild();
        self.counter.reset();
        self.displayed.clear();
        self.score = Score::default();
        self.revealed = false;
    }

    pub fn set_deck_count(&mut self, decks: DeckCount) {
        self.shoe = Shoe::new(decks);
        self.counter.set_decks(decks);
        self.displayed.clear();
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counting::hi_lo;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn runs_are_between_5_and_12_cards() {
        let mut drill = Drill::new(DeckCount::Six);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            drill.deal_run_with(&mut rng).unwrap();
            let n = drill.displayed().len();
            assert!((MIN_RUN..=MAX_RUN).contains(&n), "run of {n} cards");
        }
    }

    #[test]
    fn running_count_matches_the_displayed_cards() {
        let mut drill = Drill::new(DeckCount::Six);
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        drill.deal_run_with(&mut rng).unwrap();
        let expected: i32 = drill.displayed().iter().map(|c| hi_lo(c.rank())).sum();
        assert_eq!(drill.counter().running_count(), expected);
    }

    #[test]
    fn correct_and_incorrect_guesses_are_tallied() {
        let mut drill = Drill::new(DeckCount::Six);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        drill.deal_run_with(&mut rng).unwrap();
        let answer = drill.counter().running_count();
        assert_eq!(drill.submit(answer), Some(true));
        assert_eq!(drill.score(), Score { correct: 1, total: 1 });

        drill.deal_run_with(&mut rng).unwrap();
        let answer = drill.counter().running_count();
        assert_eq!(drill.submit(answer + 1), Some(false));
        assert_eq!(drill.score(), Score { correct: 1, total: 2 });
        assert_eq!(drill.score().accuracy(), Some(50.0));
    }

    #[test]
    fn a_run_can_only_be_scored_once() {
        let mut drill = Drill::new(DeckCount::Six);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(drill.submit(0), None, "nothing dealt yet");
        drill.deal_run_with(&mut rng).unwrap();
        let answer = drill.counter().running_count();
        assert!(drill.submit(answer).is_some());
        assert_eq!(drill.submit(answer), None);
        assert_eq!(drill.score().total, 1);
    }

    #[test]
    fn low_shoe_reshuffles_and_restarts_the_count() {
        let mut drill = Drill::new(DeckCount::One);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        while drill.shoe_remaining() >= DRILL_RESHUFFLE_THRESHOLD {
            drill.deal_run_with(&mut rng).unwrap();
        }
        let before = drill.shoe_remaining();
        drill.deal_run_with(&mut rng).unwrap();
        // Rebuilt to 52 before dealing, so more cards remain than before.
        assert!(drill.shoe_remaining() > before);
        assert_eq!(
            drill.counter().cards_dealt() as usize,
            drill.displayed().len(),
            "count restarted with the new shoe"
        );
    }

    #[test]
    fn reset_clears_score_count_and_shoe() {
        let mut drill = Drill::new(DeckCount::Two);
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        drill.deal_run_with(&mut rng).unwrap();
        drill.submit(0);
        drill.reset();
        assert_eq!(drill.score(), Score::default());
        assert_eq!(drill.counter().running_count(), 0);
        assert_eq!(drill.shoe_remaining(), 104);
        assert!(drill.displayed().is_empty());
    }
}
