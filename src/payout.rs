use crate::hand::Hand;
use std::fmt;

/// Outcome of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundResult {
    PlayerBust,
    PlayerWin,
    Blackjack,
    DealerBlackjack,
    DealerWin,
    Push,
}

impl RoundResult {
    pub const fn label(self) -> &'static str {
        match self {
            RoundResult::PlayerBust => "Player Busts! Dealer Wins",
            RoundResult::PlayerWin => "Player Wins!",
            RoundResult::Blackjack => "Blackjack! Player Wins",
            RoundResult::DealerBlackjack => "Dealer Blackjack! Dealer Wins",
            RoundResult::DealerWin => "Dealer Wins",
            RoundResult::Push => "Push (Tie)",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Result plus the signed amount applied to the balance. Amounts are `f64`
/// because the 3:2 blackjack payout pays half-units on odd bets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settlement {
    pub result: RoundResult,
    pub amount: f64,
}

/// Settle a finished round against the bet.
///
/// `effective = doubled ? 2 x bet : bet`. A natural (two-card, un-doubled)
/// blackjack pays 3:2 on the base bet; every other win or loss moves the
/// effective bet. Pure: applying the amount to a balance is the caller's
/// side effect.
pub fn settle(player: &Hand, dealer: &Hand, bet: u32, doubled: bool) -> Settlement {
    let base = f64::from(bet);
    let effective = if doubled { base * 2.0 } else { base };
    let player_natural = player.is_natural() && !doubled;
    let dealer_natural = dealer.is_natural();

    if player.is_bust() {
        return Settlement { result: RoundResult::PlayerBust, amount: -effective };
    }
    if dealer.is_bust() {
        let amount = if player_natural { base * 1.5 } else { effective };
        return Settlement { result: RoundResult::PlayerWin, amount };
    }
    if player_natural && !dealer_natural {
        return Settlement { result: RoundResult::Blackjack, amount: base * 1.5 };
    }
    if dealer_natural && !player_natural {
        return Settlement { result: RoundResult::DealerBlackjack, amount: -effective };
    }

    let player_value = player.value();
    let dealer_value = dealer.value();
    if player_value > dealer_value {
        Settlement { result: RoundResult::PlayerWin, amount: effective }
    } else if dealer_value > player_value {
        Settlement { result: RoundResult::DealerWin, amount: -effective }
    } else {
        Settlement { result: RoundResult::Push, amount: 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    #[test]
    fn natural_blackjack_pays_three_to_two() {
        let settlement = settle(&hand("Ah Ks"), &hand("9h 9s"), 10, false);
        assert_eq!(settlement.result, RoundResult::Blackjack);
        assert_eq!(settlement.amount, 15.0);
    }

    #[test]
    fn doubled_21_is_not_a_natural() {
        // Three cards after a double; wins at the doubled bet, not 3:2.
        let settlement = settle(&hand("7h 7s 7c"), &hand("10h 9s"), 10, true);
        assert_eq!(settlement.result, RoundResult::PlayerWin);
        assert_eq!(settlement.amount, 20.0);
    }

    #[test]
    fn bust_loses_the_effective_bet() {
        let player = hand("10h 9s 5c");
        assert_eq!(settle(&player, &hand("6h 10s"), 10, false).amount, -10.0);
        let doubled = settle(&player, &hand("6h 10s"), 10, true);
        assert_eq!(doubled.result, RoundResult::PlayerBust);
        assert_eq!(doubled.amount, -20.0);
    }

    #[test]
    fn dealer_bust_pays_the_effective_bet() {
        let dealer = hand("10h 6s 9c");
        let settlement = settle(&hand("10h 8s"), &dealer, 25, false);
        assert_eq!(settlement.result, RoundResult::PlayerWin);
        assert_eq!(settlement.amount, 25.0);

        assert_eq!(settle(&hand("5h 6s 10c"), &dealer, 25, true).amount, 50.0);
    }

    #[test]
    fn dealer_bust_against_a_natural_still_pays_three_to_two() {
        let settlement = settle(&hand("Ah Ks"), &hand("10h 6s 9c"), 10, false);
        assert_eq!(settlement.result, RoundResult::PlayerWin);
        assert_eq!(settlement.amount, 15.0);
    }

    #[test]
    fn dealer_natural_beats_a_plain_21() {
        let settlement = settle(&hand("7h 7s 7c"), &hand("Ah Kd"), 10, false);
        assert_eq!(settlement.result, RoundResult::DealerBlackjack);
        assert_eq!(settlement.amount, -10.0);
    }

    #[test]
    fn two_naturals_push() {
        let settlement = settle(&hand("Ah Ks"), &hand("Ad Qc"), 10, false);
        assert_eq!(settlement.result, RoundResult::Push);
        assert_eq!(settlement.amount, 0.0);
    }

    #[test]
    fn higher_total_wins_and_ties_push() {
        assert_eq!(settle(&hand("10h 9s"), &hand("10d 8c"), 10, false).amount, 10.0);
        assert_eq!(
            settle(&hand("10h 7s"), &hand("10d 8c"), 10, false).result,
            RoundResult::DealerWin
        );
        assert_eq!(settle(&hand("10h 8s"), &hand("10d 8c"), 10, false).amount, 0.0);
    }

    #[test]
    fn odd_bets_pay_half_units_on_blackjack() {
        let settlement = settle(&hand("Ah Ks"), &hand("9h 8s"), 5, false);
        assert_eq!(settlement.amount, 7.5);
    }
}
