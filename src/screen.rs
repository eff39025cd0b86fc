//! Screen state machine
//!
//! `Game` is the context every screen runs against. Each frame the platform
//! layer hands it a `FrameInput`; the active screen handles it and names the
//! screen for the next frame.

use glam::IVec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::{HighScores, SavedScore, ScoreStore};
use crate::sim::{GameEvent, PlayState, TickInput, TickOutcome, tick};
use crate::ui::{BACK_BUTTON, PLAY_BUTTON, QUIT_BUTTON, SCORES_BUTTON};

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Play,
    Scores,
    /// Terminal: the window should close
    Quit,
}

/// Platform-neutral input snapshot for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Pointer position in canvas pixels, None when outside the canvas
    pub mouse_pos: Option<IVec2>,
    /// Left mouse button went down since the previous frame
    pub mouse_pressed: bool,
    /// Arrow keys currently held
    pub left: bool,
    pub right: bool,
    /// Escape went down since the previous frame
    pub escape_pressed: bool,
    /// Window close was requested
    pub close_requested: bool,
}

/// Game context: active screen, play state and score store
#[derive(Debug)]
pub struct Game {
    screen: Screen,
    play: Option<PlayState>,
    store: ScoreStore,
    /// Leaderboard as last read or written
    high_scores: HighScores,
    mouse_pos: Option<IVec2>,
    /// Hands out a fresh seed per game
    rng: Pcg32,
}

impl Game {
    pub fn new(store: ScoreStore, seed: u64) -> Self {
        Self {
            screen: Screen::Menu,
            play: None,
            store,
            high_scores: HighScores::new(),
            mouse_pos: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn play(&self) -> Option<&PlayState> {
        self.play.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn play_mut(&mut self) -> Option<&mut PlayState> {
        self.play.as_mut()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &ScoreStore {
        &self.store
    }

    /// Pointer position seen on the latest frame (for hover highlighting)
    pub fn mouse_pos(&self) -> Option<IVec2> {
        self.mouse_pos
    }

    /// Run one frame of the active screen and switch to whatever it returns
    pub fn update(&mut self, input: &FrameInput) -> Screen {
        self.mouse_pos = input.mouse_pos;

        let next = match self.screen {
            Screen::Menu => self.menu_frame(input),
            Screen::Play => self.play_frame(input),
            Screen::Scores => self.scores_frame(input),
            Screen::Quit => Screen::Quit,
        };

        if next != self.screen {
            self.enter(next);
        }
        next
    }

    fn enter(&mut self, next: Screen) {
        log::info!("Screen {:?} -> {:?}", self.screen, next);
        match next {
            Screen::Play => {
                let seed = self.rng.next_u64();
                log::info!("New game with seed: {}", seed);
                self.play = Some(PlayState::new(seed));
            }
            Screen::Scores => self.refresh_high_scores(),
            Screen::Menu | Screen::Quit => {}
        }
        self.screen = next;
    }

    fn menu_frame(&mut self, input: &FrameInput) -> Screen {
        if input.close_requested {
            return Screen::Quit;
        }

        let (mouse, pressed) = (input.mouse_pos, input.mouse_pressed);
        if PLAY_BUTTON.clicked(mouse, pressed) {
            Screen::Play
        } else if SCORES_BUTTON.clicked(mouse, pressed) {
            Screen::Scores
        } else if QUIT_BUTTON.clicked(mouse, pressed) {
            Screen::Quit
        } else {
            Screen::Menu
        }
    }

    fn scores_frame(&mut self, input: &FrameInput) -> Screen {
        if input.close_requested {
            return Screen::Quit;
        }
        if input.escape_pressed || BACK_BUTTON.clicked(input.mouse_pos, input.mouse_pressed) {
            return Screen::Menu;
        }
        Screen::Scores
    }

    fn play_frame(&mut self, input: &FrameInput) -> Screen {
        if input.close_requested {
            self.end_game();
            return Screen::Quit;
        }
        if input.escape_pressed {
            self.end_game();
            return Screen::Menu;
        }

        let Some(state) = self.play.as_mut() else {
            return Screen::Menu;
        };

        let tick_input = TickInput {
            left: input.left,
            right: input.right,
        };
        match tick(state, &tick_input) {
            TickOutcome::Running => Screen::Play,
            TickOutcome::BallLost => {
                if let Some(GameEvent::BallLost { score }) = state.events.last() {
                    log::info!("Game over at level {} with score {}", state.level, score);
                }
                self.end_game();
                Screen::Menu
            }
        }
    }

    /// Persist the running score, then drop the play state
    fn end_game(&mut self) {
        if let Some(state) = self.play.as_ref() {
            self.persist_score(state.score);
        }
        self.play = None;
    }

    fn persist_score(&mut self, score: u64) {
        match self.store.save(score) {
            Ok(SavedScore { board, rank }) => {
                match rank {
                    Some(rank) => log::info!("Score {} placed #{} on the leaderboard", score, rank),
                    None => log::info!("Score {} did not make the leaderboard", score),
                }
                self.high_scores = board;
            }
            Err(err) => log::error!("Could not save score {}: {}", score, err),
        }
    }

    fn refresh_high_scores(&mut self) {
        match self.store.leaderboard() {
            Ok(board) => self.high_scores = board,
            Err(err) => {
                log::warn!("Could not load high scores: {}", err);
                self.high_scores = HighScores::new();
            }
        }
    }
}
