use crate::cards::Card;
use crate::counting::CountTracker;
use crate::hand::Hand;
use crate::payout::{settle, Settlement};
use crate::shoe::{DeckCount, Shoe, ShoeError, TABLE_RESHUFFLE_THRESHOLD};
use crate::strategy::{self, Advice};

pub const MIN_BET: u32 = 1;
pub const MAX_BET: u32 = 500;
pub const STARTING_BALANCE: f64 = 1000.0;
/// Dealer draws below this total and stands at or above it, soft or hard.
pub const DEALER_STANDS_AT: u8 = 17;

/// Lifecycle of a single hand. `Finished` only exits through an explicit
/// new deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Betting,
    Playing,
    DealerPlaying,
    Finished,
}

/// Training mode. Counting modes feed the tracker; pure counting plays no
/// blackjack hands at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Mode {
    Basic,
    Counting,
    PureCounting,
}

impl Mode {
    pub const fn counting_enabled(self) -> bool {
        matches!(self, Mode::Counting | Mode::PureCounting)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Mode::Basic => "Basic Strategy",
            Mode::Counting => "Blackjack + Counting",
            Mode::PureCounting => "Pure Counting Practice",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand in progress")]
    NotPlaying,
    #[error("hand already in progress")]
    HandInProgress,
    #[error("double is only available as the first action")]
    DoubleNotAllowed,
    #[error("split is not available for this hand")]
    SplitNotAllowed,
    #[error("dealer is not playing")]
    DealerNotPlaying,
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// A single player-vs-dealer blackjack table.
///
/// Owns the shoe, the count, both hands and the bankroll. Every mutation
/// happens inside one `&mut self` intent method, so a card draw, its count
/// update and the hand push are never observable half-applied.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) shoe: Shoe,
    pub(crate) counter: CountTracker,
    pub(crate) player: Hand,
    pub(crate) dealer: Hand,
    pub(crate) phase: Phase,
    pub(crate) mode: Mode,
    pub(crate) bet: u32,
    pub(crate) balance: f64,
    pub(crate) doubled: bool,
    pub(crate) split_used: bool,
    pub(crate) can_double: bool,
    pub(crate) can_split: bool,
    pub(crate) last: Option<Settlement>,
    history: Vec<Settlement>,
}

impl Game {
    pub fn new(decks: DeckCount) -> Self {
        let mut counter = CountTracker::new(decks);
        let mode = Mode::Basic;
        counter.set_enabled(mode.counting_enabled());
        Self {
            shoe: Shoe::new(decks),
            counter,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: Phase::Betting,
            mode,
            bet: 10,
            balance: STARTING_BALANCE,
            doubled: false,
            split_used: false,
            can_double: false,
            can_split: false,
            last: None,
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// The dealer's face-up card, once dealt.
    pub fn dealer_upcard(&self) -> Option<Card> {
        self.dealer.cards().first().copied()
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// The bet at stake this round, doubling included.
    pub fn effective_bet(&self) -> u32 {
        if self.doubled {
            self.bet * 2
        } else {
            self.bet
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn doubled(&self) -> bool {
        self.doubled
    }

    pub fn split_used(&self) -> bool {
        self.split_used
    }

    pub fn can_double(&self) -> bool {
        self.can_double && matches!(self.phase, Phase::Playing)
    }

    pub fn can_split(&self) -> bool {
        self.can_split && matches!(self.phase, Phase::Playing)
    }

    pub fn last_result(&self) -> Option<Settlement> {
        self.last
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

    /// Strategy recommendation for the current player hand, if one applies.
    /// Deviations are only consulted in counting mode.
    pub fn advice(&self) -> Option<Advice> {
        if !matches!(self.phase, Phase::Playing) {
            return None;
        }
        let upcard = self.dealer_upcard()?;
        strategy::recommend(
            &self.player,
            upcard.rank(),
            self.counter.true_count(),
            matches!(self.mode, Mode::Counting),
        )
    }

    pub fn history_recent(&self, n: usize) -> &[Settlement] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Draw one card, routing it through the count before it lands anywhere.
    fn draw(&mut self) -> Result<Card, ActionError> {
        let drawn = self.shoe.draw()?;
        let card = drawn.card();
        self.counter.on_card(card);
        Ok(card)
    }

    /// Start a new hand. Reshuffles (and resets the count) first if the shoe
    /// has run low, so no card of the new hand comes from the stale remainder.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Betting | Phase::Finished) {
            return Err(ActionError::HandInProgress);
        }
        if self.shoe.needs_reshuffle(TABLE_RESHUFFLE_THRESHOLD) {
            self.shoe.rebuild();
            self.counter.reset();
        }
        self.player.clear();
        self.dealer.clear();
        self.last = None;
        self.doubled = false;
        self.split_used = false;

        // Same order the table deals: player, dealer upcard, player.
        let first = self.draw()?;
        self.player.push(first);
        let up = self.draw()?;
        self.dealer.push(up);
        let second = self.draw()?;
        self.player.push(second);

        self.can_double = true;
        self.can_split = self.player.is_pair();
        self.phase = Phase::Playing;
        Ok(())
    }

    pub fn hit(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Playing) {
            return Err(ActionError::NotPlaying);
        }
        // First-action-only rule: any hit ends double and split eligibility.
        self.can_double = false;
        self.can_split = false;
        let card = self.draw()?;
        self.player.push(card);
        if self.player.is_bust() {
            self.settle_round();
        }
        Ok(())
    }

    /// Stand: reveal the dealer's hole card and hand control to the dealer
    /// sequence.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Playing) {
            return Err(ActionError::NotPlaying);
        }
        self.can_double = false;
        self.can_split = false;
        let hole = self.draw()?;
        self.dealer.push(hole);
        self.phase = Phase::DealerPlaying;
        Ok(())
    }

    /// Double the bet for exactly one more card, then stand (or settle the
    /// bust immediately).
    pub fn double_down(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Playing) {
            return Err(ActionError::NotPlaying);
        }
        if !self.can_double {
            return Err(ActionError::DoubleNotAllowed);
        }
        self.doubled = true;
        self.can_double = false;
        self.can_split = false;
        let card = self.draw()?;
        self.player.push(card);
        if self.player.is_bust() {
            self.settle_round();
            return Ok(());
        }
        self.stand()
    }

    /// Simplified split: the second card is discarded and replaced, and the
    /// round continues as a single hand with doubling re-enabled. True
    /// multi-hand split play is out of scope.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Playing) {
            return Err(ActionError::NotPlaying);
        }
        if !self.can_split {
            return Err(ActionError::SplitNotAllowed);
        }
        let kept = self.player.cards()[0];
        self.player = Hand::from_cards(vec![kept]);
        let replacement = self.draw()?;
        self.player.push(replacement);
        self.split_used = true;
        self.can_split = false;
        self.can_double = true;
        Ok(())
    }

    /// Advance the dealer by one step: one draw while the dealer's total is
    /// below [`DEALER_STANDS_AT`], otherwise settle. Returns `true` once the
    /// round is finished. Callers pace this externally (a TUI tick, a test
    /// loop); the outcome depends only on the draw order, never on timing.
    pub fn dealer_step(&mut self) -> Result<bool, ActionError> {
        if !matches!(self.phase, Phase::DealerPlaying) {
            return Err(ActionError::DealerNotPlaying);
        }
        if self.dealer.value() < DEALER_STANDS_AT {
            let card = self.draw()?;
            self.dealer.push(card);
            return Ok(false);
        }
        self.settle_round();
        Ok(true)
    }

    /// Drain the dealer sequence to completion.
    pub fn run_dealer(&mut self) -> Result<(), ActionError> {
        while matches!(self.phase, Phase::DealerPlaying) {
            self.dealer_step()?;
        }
        Ok(())
    }

    fn settle_round(&mut self) {
        let settlement = settle(&self.player, &self.dealer, self.bet, self.doubled);
        self.balance += settlement.amount;
        self.last = Some(settlement);
        self.history.push(settlement);
        self.phase = Phase::Finished;
    }

    /// Bets clamp to the table limits instead of erroring.
    pub fn set_bet(&mut self, bet: u32) {
        self.bet = bet.clamp(MIN_BET, MAX_BET);
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.counter.set_enabled(mode.counting_enabled());
    }

    /// Switch shoe size: rebuilds the shoe, restarts the count and abandons
    /// any hand in progress.
    pub fn set_deck_count(&mut self, decks: DeckCount) {
        self.shoe = Shoe::new(decks);
        self.counter.set_decks(decks);
        self.abandon_hand();
    }

    /// Full reset: fresh shoe, zeroed count, starting balance.
    pub fn reset(&mut self) {
        self.shoe.rebuild();
        self.counter.reset();
        self.balance = STARTING_BALANCE;
        self.history.clear();
        self.abandon_hand();
    }

    fn abandon_hand(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.phase = Phase::Betting;
        self.last = None;
        self.doubled = false;
        self.split_used = false;
        self.can_double = false;
        self.can_split = false;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DeckCount::default())
    }
}
