use blackjack_rs::hand::Hand;
use blackjack_rs::payout::{settle, RoundResult};

fn hand(s: &str) -> Hand {
    s.parse().expect("valid hand")
}

struct Case {
    player: &'static str,
    dealer: &'static str,
    bet: u32,
    doubled: bool,
    result: RoundResult,
    amount: f64,
}

#[test]
fn settlement_table() {
    let cases = [
        Case {
            player: "Ah Ks",
            dealer: "9h 9s",
            bet: 10,
            doubled: false,
            result: RoundResult::Blackjack,
            amount: 15.0,
        },
        Case {
            player: "10h 9s 5c",
            dealer: "6h 10s",
            bet: 10,
            doubled: true,
            result: RoundResult::PlayerBust,
            amount: -20.0,
        },
        Case {
            player: "10h 9s",
            dealer: "10d 6c 9s",
            bet: 10,
            doubled: false,
            result: RoundResult::PlayerWin,
            amount: 10.0,
        },
        Case {
            player: "10h 9s",
            dealer: "10d 6c 9s",
            bet: 10,
            doubled: true,
            result: RoundResult::PlayerWin,
            amount: 20.0,
        },
        Case {
            player: "Ah Ks",
            dealer: "10d 6c 9s",
            bet: 10,
            doubled: false,
            result: RoundResult::PlayerWin,
            amount: 15.0,
        },
        Case {
            player: "7h 7s 7c",
            dealer: "Ad Kc",
            bet: 10,
            doubled: false,
            result: RoundResult::DealerBlackjack,
            amount: -10.0,
        },
        Case {
            player: "Ah Ks",
            dealer: "Ad Kc",
            bet: 10,
            doubled: false,
            result: RoundResult::Push,
            amount: 0.0,
        },
        Case {
            player: "10h 9s",
            dealer: "10d 8c",
            bet: 25,
            doubled: false,
            result: RoundResult::PlayerWin,
            amount: 25.0,
        },
        Case {
            player: "10h 7s",
            dealer: "10d 8c",
            bet: 25,
            doubled: false,
            result: RoundResult::DealerWin,
            amount: -25.0,
        },
        Case {
            player: "10h 8s",
            dealer: "9d 9c",
            bet: 25,
            doubled: false,
            result: RoundResult::Push,
            amount: 0.0,
        },
        Case {
            player: "Ah Ks",
            dealer: "9h 8s",
            bet: 7,
            doubled: false,
            result: RoundResult::Blackjack,
            amount: 10.5,
        },
    ];

    for case in cases {
        let settlement = settle(&hand(case.player), &hand(case.dealer), case.bet, case.doubled);
        assert_eq!(
            settlement.result, case.result,
            "{} vs {} (doubled: {})",
            case.player, case.dealer, case.doubled
        );
        assert_eq!(
            settlement.amount, case.amount,
            "{} vs {} (doubled: {})",
            case.player, case.dealer, case.doubled
        );
    }
}

#[test]
fn player_bust_loses_even_if_the_dealer_would_bust_too() {
    let settlement = settle(&hand("10h 9s 5c"), &hand("10d 9c 5s"), 10, false);
    assert_eq!(settlement.result, RoundResult::PlayerBust);
    assert_eq!(settlement.amount, -10.0);
}

#[test]
fn result_labels_match_the_trainer_strings() {
    assert_eq!(RoundResult::PlayerBust.label(), "Player Busts! Dealer Wins");
    assert_eq!(RoundResult::PlayerWin.label(), "Player Wins!");
    assert_eq!(RoundResult::Blackjack.label(), "Blackjack! Player Wins");
    assert_eq!(RoundResult::DealerBlackjack.label(), "Dealer Blackjack! Dealer Wins");
    assert_eq!(RoundResult::DealerWin.label(), "Dealer Wins");
    assert_eq!(RoundResult::Push.label(), "Push (Tie)");
}

#[test]
fn settlement_is_pure() {
    let player = hand("10h 9s");
    let dealer = hand("10d 8c");
    let a = settle(&player, &dealer, 10, false);
    let b = settle(&player, &dealer, 10, false);
    assert_eq!(a, b);
}
