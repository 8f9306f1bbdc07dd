//! blackjack-rs: blackjack basic-strategy and Hi-Lo counting trainer
//!
//! Goals:
//! - Deterministic round engine: every outcome depends only on the ordered
//!   sequence of draws, never on wall-clock timing
//! - Small, well-documented public API behind the `GameEngine` trait
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: ask the strategy engine for a play
//! ```
//! use blackjack_rs::cards::Rank;
//! use blackjack_rs::hand::Hand;
//! use blackjack_rs::strategy::{recommend, Action};
//!
//! let pair: Hand = "8h 8s".parse().unwrap();
//! let advice = recommend(&pair, Rank::Five, 0, false).unwrap();
//! assert_eq!(advice.action, Action::Split);
//! assert_eq!(advice.to_string(), "SP (Pair Strategy)");
//! ```
//!
//! ## Play a round
//! ```
//! use blackjack_rs::round::{Game, Phase};
//! use blackjack_rs::shoe::DeckCount;
//!
//! let mut game = Game::new(DeckCount::Six);
//! game.deal().unwrap();
//! game.stand().unwrap();
//! game.run_dealer().unwrap();
//! assert_eq!(game.phase(), Phase::Finished);
//! assert!(game.last_result().is_some());
//! ```
//!
//! ## TUI
//! Run the interactive trainer with:
//! ```sh
//! cargo run --bin blackjack-rs
//! ```

pub mod agents;
pub mod cards;
pub mod counting;
pub mod drill;
pub mod engine;
pub mod hand;
pub mod payout;
pub mod round;
pub mod shoe;
pub mod strategy;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
