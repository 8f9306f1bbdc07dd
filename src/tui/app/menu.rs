use crate::round::{Mode, MAX_BET, MIN_BET};

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    TrainingMode,
    Decks,
    Bet,
    AutoPlay,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::TrainingMode, MenuItem::Decks, MenuItem::Bet, MenuItem::AutoPlay];

const BET_STEP: u32 = 5;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::TrainingMode => format!("Training Mode: {}", app.cfg_mode.label()),
            MenuItem::Decks => format!("Decks: {}", app.cfg_decks.decks()),
            MenuItem::Bet => format!("Bet: ${}", app.cfg_bet),
            MenuItem::AutoPlay => {
                format!("Auto Play: {}", if app.auto_play { "On" } else { "Off" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::TrainingMode => {
                app.cfg_mode = match app.cfg_mode {
                    Mode::Basic => Mode::Counting,
                    Mode::Counting => Mode::PureCounting,
                    Mode::PureCounting => Mode::Basic,
                };
            }
            MenuItem::Decks => app.cfg_decks = app.cfg_decks.next(),
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_add(BET_STEP).min(MAX_BET);
            }
            MenuItem::AutoPlay => app.auto_play = !app.auto_play,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::TrainingMode => {
                app.cfg_mode = match app.cfg_mode {
                    Mode::Basic => Mode::PureCounting,
                    Mode::Counting => Mode::Basic,
                    Mode::PureCounting => Mode::Counting,
                };
            }
            MenuItem::Decks => app.cfg_decks = app.cfg_decks.prev(),
            MenuItem::Bet => {
                app.cfg_bet = app.cfg_bet.saturating_sub(BET_STEP).max(MIN_BET);
            }
            MenuItem::AutoPlay => app.auto_play = !app.auto_play,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => self.play_scene(),
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    /// The scene the active mode plays in.
    fn play_scene(&self) -> Scene {
        if matches!(self.game.mode(), Mode::PureCounting) {
            Scene::Drill
        } else {
            Scene::Table
        }
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_mode = self.game.mode();
        self.cfg_decks = self.game.deck_count();
        self.cfg_bet = self.game.bet();
        self.scene = Scene::Menu;
    }

    pub fn apply_menu(&mut self) {
        self.game.set_mode(self.cfg_mode);
        if self.cfg_decks != self.game.deck_count() {
            self.game.set_deck_count(self.cfg_decks);
        }
        if self.cfg_decks != self.drill.deck_count() {
            self.drill.set_deck_count(self.cfg_decks);
        }
        self.game.set_bet(self.cfg_bet);
        self.cfg_bet = self.game.bet();
        if matches!(self.cfg_mode, Mode::PureCounting) {
            self.auto_play = false;
        }
        self.scene = self.play_scene();
    }

    pub fn cancel_menu(&mut self) {
        self.scene = self.play_scene();
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
