use crate::agents::{PlayerAgent, StrategyAgent};
use crate::drill::Drill;
use crate::round::{ActionError, Game, Mode, Phase};
use crate::shoe::DeckCount;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
    Drill,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    NewHand,
    Hit,
    Stand,
    Double,
    Split,
    ToggleAutoPlay,
    ResetGame,
    BetOpen,
    BetDigit(u8),
    BetBackspace,
    BetSubmit,
    BetCancel,
    DrillDeal,
    GuessDigit(u8),
    GuessBackspace,
    GuessToggleSign,
    GuessSubmit,
    ResetDrill,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core engines
    pub game: Game,
    pub drill: Drill,
    pub auto_play: bool,
    agent: StrategyAgent,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_mode: Mode,
    pub cfg_decks: DeckCount,
    pub cfg_bet: u32,
    // Drill guess buffer (always visible in the drill scene)
    guess: String,
    last_guess: Option<i32>,
    help_open: bool,
    history_open: bool,
    bet_entry: Option<String>,
    bet_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let game = Game::default();
        let decks = game.deck_count();
        let cfg_mode = game.mode();
        let cfg_bet = game.bet();
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game,
            drill: Drill::new(decks),
            auto_play: false,
            agent: StrategyAgent::new(),
            menu_index: 0,
            cfg_mode,
            cfg_decks: decks,
            cfg_bet,
            guess: String::new(),
            last_guess: None,
            help_open: false,
            history_open: false,
            bet_entry: None,
            bet_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);
    const GUESS_MAX_DIGITS: usize = 4;

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn bet_entry_active(&self) -> bool {
        self.bet_entry.is_some()
    }

    pub fn bet_entry_text(&self) -> Option<&str> {
        self.bet_entry.as_deref()
    }

    pub fn bet_entry_error(&self) -> Option<&str> {
        self.bet_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn guess_text(&self) -> &str {
        &self.guess
    }

    pub fn last_guess(&self) -> Option<i32> {
        self.last_guess
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn report(&mut self, err: ActionError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    /// Run a table intent, surfacing any rejection in the status bar.
    fn table_action(
        &mut self,
        f: impl FnOnce(&mut Game) -> Result<(), ActionError>,
    ) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        match f(&mut self.game) {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.report(err);
                false
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene != Scene::Menu {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewHand => self.table_action(Game::deal),
            InputAction::Hit => self.table_action(Game::hit),
            InputAction::Stand => self.table_action(Game::stand),
            InputAction::Double => self.table_action(Game::double_down),
            InputAction::Split => self.table_action(Game::split),
            InputAction::ToggleAutoPlay => {
                if self.scene == Scene::Table {
                    self.auto_play = !self.auto_play;
                }
                false
            }
            InputAction::ResetGame => {
                if self.scene == Scene::Table {
                    self.game.reset();
                    self.auto_play = false;
                    self.clear_action_error();
                }
                false
            }
            InputAction::BetOpen => self.open_bet_entry(),
            InputAction::BetDigit(d) => {
                self.bet_entry_push_digit(d);
                false
            }
            InputAction::BetBackspace => {
                self.bet_entry_backspace();
                false
            }
            InputAction::BetSubmit => self.bet_entry_submit(),
            InputAction::BetCancel => {
                self.bet_entry = None;
                self.bet_entry_error = None;
                false
            }
            InputAction::DrillDeal => self.drill_deal(),
            InputAction::GuessDigit(d) => {
                self.guess_push_digit(d);
                false
            }
            InputAction::GuessBackspace => {
                self.guess.pop();
                false
            }
            InputAction::GuessToggleSign => {
                self.guess_toggle_sign();
                false
            }
            InputAction::GuessSubmit => self.guess_submit(),
            InputAction::ResetDrill => {
                if self.scene == Scene::Drill {
                    self.drill.reset();
                    self.guess.clear();
                    self.last_guess = None;
                }
                false
            }
        }
    }

    fn open_bet_entry(&mut self) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        self.bet_entry = Some(self.game.bet().to_string());
        self.bet_entry_error = None;
        true
    }

    fn bet_entry_push_digit(&mut self, digit: u8) {
        if let Some(buf) = self.bet_entry.as_mut() {
            if buf.len() >= 4 {
                return;
            }
            buf.push(char::from(b'0' + digit));
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_backspace(&mut self) {
        if let Some(buf) = self.bet_entry.as_mut() {
            buf.pop();
        }
        self.bet_entry_error = None;
    }

    fn bet_entry_submit(&mut self) -> bool {
        let Some(buf) = self.bet_entry.as_ref() else {
            return false;
        };
        let amount = match buf.parse::<u32>() {
            Ok(v) => v,
            Err(_) => {
                self.bet_entry_error = Some("Invalid amount".to_string());
                return false;
            }
        };
        // Out-of-range bets clamp rather than error.
        self.game.set_bet(amount);
        self.cfg_bet = self.game.bet();
        self.bet_entry = None;
        self.bet_entry_error = None;
        true
    }

    fn drill_deal(&mut self) -> bool {
        if self.scene != Scene::Drill {
            return false;
        }
        self.guess.clear();
        self.last_guess = None;
        match self.drill.deal_run() {
            Ok(()) => {
                self.clear_action_error();
                true
            }
            Err(err) => {
                self.report(err.into());
                false
            }
        }
    }

    fn guess_push_digit(&mut self, digit: u8) {
        let digits = self.guess.chars().filter(|c| c.is_ascii_digit()).count();
        if digits >= Self::GUESS_MAX_DIGITS {
            return;
        }
        self.guess.push(char::from(b'0' + digit));
    }

    fn guess_toggle_sign(&mut self) {
        if let Some(rest) = self.guess.strip_prefix('-') {
            self.guess = rest.to_string();
        } else {
            self.guess.insert(0, '-');
        }
    }

    fn guess_submit(&mut self) -> bool {
        if self.scene != Scene::Drill {
            return false;
        }
        // Non-numeric input scores as 0 rather than being rejected.
        let guess = self.guess.trim().parse::<i32>().unwrap_or(0);
        if self.drill.submit(guess).is_some() {
            self.last_guess = Some(guess);
            return true;
        }
        false
    }

    /// One cooperative step: expire stale errors, advance the dealer, let
    /// auto-play act. Called from the controller's tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table {
            return;
        }
        match self.game.phase() {
            Phase::DealerPlaying => {
                // One draw per tick; the pacing is cosmetic and the outcome
                // depends only on the draw order.
                if let Err(err) = self.game.dealer_step() {
                    self.report(err);
                }
            }
            Phase::Playing if self.auto_play => {
                if let Err(err) = self.agent.on_tick(&mut self.game) {
                    self.report(err);
                }
            }
            Phase::Betting | Phase::Finished if self.auto_play => {
                if let Err(err) = self.game.deal() {
                    self.report(err);
                }
            }
            _ => {}
        }
    }
}
