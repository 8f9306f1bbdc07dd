use blackjack_rs::agents::{PlayerAgent, StrategyAgent};
use blackjack_rs::engine::GameEngine;
use blackjack_rs::round::{Game, Mode, Phase};
use blackjack_rs::shoe::DeckCount;

fn play_hand(agent: &mut StrategyAgent, game: &mut Game) {
    game.deal().unwrap();
    for _ in 0..24 {
        if !matches!(game.phase(), Phase::Playing) {
            break;
        }
        agent.on_tick(game).unwrap();
    }
    assert!(!matches!(game.phase(), Phase::Playing), "agent failed to finish its turn");
    game.run_dealer().unwrap();
}

#[test]
fn agent_is_idle_between_hands() {
    let mut game = Game::new(DeckCount::Six);
    let mut agent = StrategyAgent::new();
    assert!(!agent.on_tick(&mut game).unwrap());
    assert_eq!(game.phase(), Phase::Betting);
}

#[test]
fn agent_never_issues_an_illegal_action() {
    let mut game = Game::new(DeckCount::Six);
    let mut agent = StrategyAgent::new();
    for _ in 0..100 {
        play_hand(&mut agent, &mut game);
        assert_eq!(game.phase(), Phase::Finished);
        assert!(game.last_result().is_some());
    }
    assert_eq!(game.history_len(), 100);
}

#[test]
fn agent_follows_the_count_in_counting_mode() {
    let mut game = Game::new(DeckCount::Two);
    game.set_mode(Mode::Counting);
    let mut agent = StrategyAgent::new();
    for _ in 0..50 {
        play_hand(&mut agent, &mut game);
    }
    // The tracker saw exactly the cards on the final table plus every
    // earlier hand since the last reshuffle.
    let since_shuffle = game.counter().cards_dealt() as usize;
    assert!(since_shuffle >= game.player().len() + game.dealer().len());
}

#[test]
fn agent_works_through_the_engine_trait() {
    let mut game = Game::new(DeckCount::Six);
    let mut agent = StrategyAgent::new();
    game.deal().unwrap();
    let engine: &mut dyn GameEngine = &mut game;
    // Driving through the trait object exercises the same boundary the TUI
    // uses.
    for _ in 0..24 {
        if !matches!(engine.phase(), Phase::Playing) {
            break;
        }
        agent.on_tick(engine).unwrap();
    }
    while matches!(engine.phase(), Phase::DealerPlaying) {
        engine.dealer_step().unwrap();
    }
    assert_eq!(engine.phase(), Phase::Finished);
    assert!(engine.last_result().is_some());
}

#[test]
fn engine_projections_stay_consistent() {
    let mut game = Game::new(DeckCount::Six);
    game.set_mode(Mode::Counting);
    game.deal().unwrap();
    let engine: &dyn GameEngine = &game;
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.player().len(), 2);
    assert!(engine.dealer_upcard().is_some());
    assert_eq!(engine.running_count(), game.counter().running_count());
    assert_eq!(engine.true_count(), game.counter().true_count());
    assert!(engine.advice().is_some());
}
