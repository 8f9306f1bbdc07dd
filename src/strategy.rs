//! Basic-strategy lookup with Hi-Lo count deviations.
//!
//! Tables are fixed at compile time and indexed by enumerated keys (hand
//! category x total-or-rank x dealer upcard column), so every lookup is a
//! bounds-checked array access rather than a string match.

use crate::cards::Rank;
use crate::hand::Hand;
use std::fmt;

/// A recommended play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
}

impl Action {
    /// Chart shorthand used by the trainer UI.
    pub const fn code(self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::Double => "D",
            Action::Split => "SP",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Action::Hit => "Hit",
            Action::Stand => "Stand",
            Action::Double => "Double Down",
            Action::Split => "Split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which rule produced a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Source {
    PairTable,
    SoftTable,
    BasicTable,
    /// Count deviation with the true-count threshold that triggered it.
    Deviation(i32),
}

/// A recommendation plus its provenance, rendered for the trainer as e.g.
/// `"SP (Pair Strategy)"` or `"S (Count Deviation: +4)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub action: Action,
    pub source: Source,
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            Source::PairTable => write!(f, "{} (Pair Strategy)", self.action),
            Source::SoftTable => write!(f, "{} (Soft Strategy)", self.action),
            Source::BasicTable => write!(f, "{} (Basic Strategy)", self.action),
            Source::Deviation(threshold) => {
                write!(f, "{} (Count Deviation: +{threshold})", self.action)
            }
        }
    }
}

/// Dealer upcard column: Ace maps to 0, the ten class to 9, the rest to
/// rank - 2.
pub const fn upcard_column(rank: Rank) -> usize {
    if rank.is_ace() {
        0
    } else if rank.is_ten_value() {
        9
    } else {
        rank as usize - 2
    }
}

const H: Action = Action::Hit;
const S: Action = Action::Stand;
const D: Action = Action::Double;
const SP: Action = Action::Split;

/// Hard totals 5..=21, one row per total.
const HARD: [[Action; 10]; 17] = [
    [H, H, H, H, H, H, H, H, H, H], // 5
    [H, H, H, H, H, H, H, H, H, H], // 6
    [H, H, H, H, H, H, H, H, H, H], // 7
    [H, H, H, H, H, H, H, H, H, H], // 8
    [H, D, D, D, D, H, H, H, H, H], // 9
    [D, D, D, D, D, D, D, D, H, H], // 10
    [D, D, D, D, D, D, D, D, D, H], // 11
    [H, H, S, S, S, H, H, H, H, H], // 12
    [S, S, S, S, S, H, H, H, H, H], // 13
    [S, S, S, S, S, H, H, H, H, H], // 14
    [S, S, S, S, S, H, H, H, H, H], // 15
    [S, S, S, S, S, H, H, H, H, H], // 16
    [S, S, S, S, S, S, S, S, S, S], // 17
    [S, S, S, S, S, S, S, S, S, S], // 18
    [S, S, S, S, S, S, S, S, S, S], // 19
    [S, S, S, S, S, S, S, S, S, S], // 20
    [S, S, S, S, S, S, S, S, S, S], // 21
];

/// Two-card soft hands A2..=A9, one row per non-ace companion.
const SOFT: [[Action; 10]; 8] = [
    [H, H, H, D, D, H, H, H, H, H], // A2
    [H, H, H, D, D, H, H, H, H, H], // A3
    [H, H, D, D, D, H, H, H, H, H], // A4
    [H, H, D, D, D, H, H, H, H, H], // A5
    [H, D, D, D, D, H, H, H, H, H], // A6
    [S, D, D, D, D, S, S, H, H, H], // A7
    [S, S, S, S, S, S, S, S, S, S], // A8
    [S, S, S, S, S, S, S, S, S, S], // A9
];

const PAIR_AA: [Action; 10] = [SP, SP, SP, SP, SP, SP, SP, SP, SP, SP];
const PAIR_TT: [Action; 10] = [S, S, S, S, S, S, S, S, S, S];
const PAIR_99: [Action; 10] = [SP, SP, SP, SP, SP, S, SP, SP, S, S];
const PAIR_88: [Action; 10] = [SP, SP, SP, SP, SP, SP, SP, SP, SP, SP];
const PAIR_77: [Action; 10] = [SP, SP, SP, SP, SP, SP, H, H, H, H];
const PAIR_66: [Action; 10] = [SP, SP, SP, SP, SP, H, H, H, H, H];
const PAIR_55: [Action; 10] = [D, D, D, D, D, D, D, D, H, H];
const PAIR_44: [Action; 10] = [H, H, H, SP, SP, H, H, H, H, H];
const PAIR_33: [Action; 10] = [SP, SP, SP, SP, SP, SP, H, H, H, H];
const PAIR_22: [Action; 10] = [SP, SP, SP, SP, SP, SP, H, H, H, H];

const fn pair_row(rank: Rank) -> &'static [Action; 10] {
    if rank.is_ace() {
        &PAIR_AA
    } else if rank.is_ten_value() {
        &PAIR_TT
    } else {
        match rank {
            Rank::Nine => &PAIR_99,
            Rank::Eight => &PAIR_88,
            Rank::Seven => &PAIR_77,
            Rank::Six => &PAIR_66,
            Rank::Five => &PAIR_55,
            Rank::Four => &PAIR_44,
            Rank::Three => &PAIR_33,
            _ => &PAIR_22,
        }
    }
}

struct HardDeviation {
    total: u8,
    /// Ten-class upcards match as one column; everything else by rank.
    upcard: Rank,
    threshold: i32,
    action: Action,
}

/// Count-triggered overrides of the hard table.
const DEVIATIONS: [HardDeviation; 3] = [
    HardDeviation { total: 16, upcard: Rank::Ten, threshold: 4, action: S },
    HardDeviation { total: 15, upcard: Rank::Ten, threshold: 4, action: S },
    HardDeviation { total: 12, upcard: Rank::Three, threshold: 3, action: S },
];

fn upcard_matches(wanted: Rank, actual: Rank) -> bool {
    if wanted.is_ten_value() {
        actual.is_ten_value()
    } else {
        wanted == actual
    }
}

/// Look up the recommended action for a player hand against a dealer
/// upcard. Pure and stateless: the same inputs always produce the same
/// advice. Returns `None` for a busted hand.
///
/// Evaluation order is pairs, then two-card soft hands, then the hard
/// table; count deviations (enabled only in counting mode) override the
/// hard-table action once the true count crosses their threshold.
pub fn recommend(player: &Hand, dealer_up: Rank, true_count: i32, counting: bool) -> Option<Advice> {
    if player.is_bust() {
        return None;
    }
    let col = upcard_column(dealer_up);

    if player.is_pair() {
        let rank = player.cards()[0].rank();
        return Some(Advice { action: pair_row(rank)[col], source: Source::PairTable });
    }

    if let Some(companion) = player.soft_companion() {
        // A+ten is 21 and has no soft row; it falls through to hard 21.
        if !companion.is_ten_value() {
            let row = companion as usize - 2;
            return Some(Advice { action: SOFT[row][col], source: Source::SoftTable });
        }
    }

    let total = player.value();
    if counting {
        for dev in &DEVIATIONS {
            if dev.total == total && upcard_matches(dev.upcard, dealer_up) && true_count >= dev.threshold
            {
                return Some(Advice {
                    action: dev.action,
                    source: Source::Deviation(dev.threshold),
                });
            }
        }
    }

    let action = match total {
        5..=21 => HARD[total as usize - 5][col],
        _ => Action::Hit,
    };
    Some(Advice { action, source: Source::BasicTable })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    fn advise(player: &str, up: Rank) -> Advice {
        recommend(&hand(player), up, 0, false).expect("advice")
    }

    #[test]
    fn upcard_columns() {
        assert_eq!(upcard_column(Rank::Ace), 0);
        assert_eq!(upcard_column(Rank::Two), 0);
        assert_eq!(upcard_column(Rank::Seven), 5);
        assert_eq!(upcard_column(Rank::Ten), 9);
        assert_eq!(upcard_column(Rank::King), 9);
    }

    #[test]
    fn eights_split_against_a_five() {
        let advice = advise("8h 8s", Rank::Five);
        assert_eq!(advice.action, Action::Split);
        assert_eq!(advice.source, Source::PairTable);
        assert_eq!(advice.to_string(), "SP (Pair Strategy)");
    }

    #[test]
    fn ten_class_pairs_stand() {
        assert_eq!(advise("Kh Qs", Rank::Six).action, Action::Stand);
        assert_eq!(advise("10h Js", Rank::Ace).action, Action::Stand);
    }

    #[test]
    fn aces_always_split() {
        for up in Rank::ALL {
            assert_eq!(advise("Ah As", up).action, Action::Split);
        }
    }

    #[test]
    fn soft_hands_use_the_soft_table() {
        let advice = advise("Ah 7d", Rank::Three);
        assert_eq!(advice.action, Action::Double);
        assert_eq!(advice.source, Source::SoftTable);

        assert_eq!(advise("Ah 7d", Rank::Nine).action, Action::Hit);
        assert_eq!(advise("Ah 8d", Rank::Six).action, Action::Stand);
    }

    #[test]
    fn ace_ten_is_hard_21_not_a_soft_lookup() {
        let advice = advise("Ah Kd", Rank::Six);
        assert_eq!(advice.action, Action::Stand);
        assert_eq!(advice.source, Source::BasicTable);
    }

    #[test]
    fn soft_hands_of_three_cards_fall_to_the_hard_table() {
        // A,3,3 is soft 17 but not a two-card soft hand.
        let advice = advise("Ah 3d 3c", Rank::Six);
        assert_eq!(advice.source, Source::BasicTable);
        assert_eq!(advice.action, Action::Stand);
    }

    #[test]
    fn hard_doubles() {
        assert_eq!(advise("6h 5s", Rank::Six).action, Action::Double); // 11
        assert_eq!(advise("6h 4s", Rank::Ten).action, Action::Hit); // 10 vs ten
        assert_eq!(advise("5h 4s", Rank::Three).action, Action::Double); // 9
    }

    #[test]
    fn hard_16_hits_a_ten_without_the_count() {
        let advice = recommend(&hand("10h 6s"), Rank::King, 3, true).unwrap();
        assert_eq!(advice.action, Action::Hit);
        assert_eq!(advice.source, Source::BasicTable);
    }

    #[test]
    fn deviations_trigger_at_their_thresholds() {
        let sixteen = hand("10h 6s");
        let advice = recommend(&sixteen, Rank::King, 4, true).unwrap();
        assert_eq!(advice.action, Action::Stand);
        assert_eq!(advice.source, Source::Deviation(4));
        assert_eq!(advice.to_string(), "S (Count Deviation: +4)");

        let fifteen = hand("10h 5s");
        assert_eq!(recommend(&fifteen, Rank::Ten, 4, true).unwrap().action, Action::Stand);

        let twelve = hand("9h 3s");
        let advice = recommend(&twelve, Rank::Three, 3, true).unwrap();
        assert_eq!(advice.source, Source::Deviation(3));
    }

    #[test]
    fn deviations_need_counting_mode() {
        let sixteen = hand("10h 6s");
        let advice = recommend(&sixteen, Rank::King, 4, false).unwrap();
        assert_eq!(advice.action, Action::Hit);
        assert_eq!(advice.source, Source::BasicTable);
    }

    #[test]
    fn busted_hands_get_no_advice() {
        assert!(recommend(&hand("Kh Qs 5c"), Rank::Six, 0, false).is_none());
    }

    #[test]
    fn every_non_bust_two_card_hand_has_advice() {
        use crate::cards::{Card, Suit};
        for a in Rank::ALL {
            for b in Rank::ALL {
                for up in Rank::ALL {
                    let hand = Hand::from_cards(vec![
                        Card::new(a, Suit::Hearts),
                        Card::new(b, Suit::Spades),
                    ]);
                    assert!(recommend(&hand, up, 0, true).is_some(), "{a}{b} vs {up}");
                }
            }
        }
    }
}
