//! Game state machine
//!
//! `Title -> Playing -> Ended(Lost | Won)`. The host feeds key events and
//! drives `tick` on a fixed interval; `Ended` is terminal.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::GameError;
use crate::highscores::BestScore;
use crate::persistence::KeyValueStore;
use crate::platform::input::{Key, KeyEvent};
use crate::sim::{self, Ending, GamePhase, GameSession, TickInput};
use crate::tuning::Tuning;

/// Phase change caused by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Title screen left, session created; the host should start ticking
    Started,
}

/// Result of one driver tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing changed
    Idle,
    /// Tick completed, keep going
    Running,
    /// This tick ended the session; the host must stop ticking
    Ended(Ending),
}

/// Game instance holding all state
pub struct Game<S: KeyValueStore> {
    tuning: Tuning,
    store: S,
    rng: Pcg32,
    phase: GamePhase,
    /// Held-key flags, tracked in every phase
    input: TickInput,
    session: Option<GameSession>,
}

impl<S: KeyValueStore> Game<S> {
    pub fn new(store: S, tuning: Tuning, seed: u64) -> Self {
        Self {
            tuning,
            store,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Title,
            input: TickInput::default(),
            session: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn input(&self) -> TickInput {
        self.input
    }

    /// Current session (None until the game has started)
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut GameSession> {
        self.session.as_mut()
    }

    /// Apply a key event: arrows update held flags, space starts the game
    pub fn handle_key(&mut self, event: KeyEvent) -> Result<Option<Transition>, GameError> {
        match event {
            KeyEvent::Down(Key::Space) => {
                return Ok(self.start()?.then_some(Transition::Started));
            }
            KeyEvent::Down(Key::ArrowLeft) => self.input.left = true,
            KeyEvent::Down(Key::ArrowRight) => self.input.right = true,
            KeyEvent::Down(Key::Idle) => {
                self.input.idle = !self.input.idle;
                log::info!("Idle mode: {}", self.input.idle);
            }
            KeyEvent::Up(Key::ArrowLeft) => self.input.left = false,
            KeyEvent::Up(Key::ArrowRight) => self.input.right = false,
            KeyEvent::Up(_) => {}
        }
        Ok(None)
    }

    /// Set the autopilot flag directly (native demo)
    pub fn set_idle(&mut self, idle: bool) {
        self.input.idle = idle;
    }

    /// Leave the title screen. Returns false (and does nothing) in any other phase.
    pub fn start(&mut self) -> Result<bool, GameError> {
        if self.phase != GamePhase::Title {
            return Ok(false);
        }

        let best = BestScore::load(&self.store)?;
        self.session = Some(GameSession::new(&self.tuning, &mut self.rng, best.0));
        self.phase = GamePhase::Playing;
        log::info!(
            "Game started: {} bricks, best score {}",
            self.tuning.brick_total(),
            best.0
        );
        Ok(true)
    }

    /// Run one simulation tick
    pub fn tick(&mut self) -> Result<TickOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(TickOutcome::Idle);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(TickOutcome::Idle);
        };

        match sim::tick(session, &self.input, &self.tuning) {
            None => Ok(TickOutcome::Running),
            Some(ending) => {
                self.finish(ending)?;
                Ok(TickOutcome::Ended(ending))
            }
        }
    }

    /// Enter the terminal phase and persist the best score
    ///
    /// The phase is `Ended` even when the store write fails.
    fn finish(&mut self, ending: Ending) -> Result<(), GameError> {
        self.phase = GamePhase::Ended(ending);
        let (score, ticks, speed) = self
            .session
            .as_ref()
            .map(|s| (s.score, s.time_ticks, sim::ball_speed(s)))
            .unwrap_or_default();
        log::info!(
            "Game ended: {:?} with score {} after {} ticks (ball speed {:.2})",
            ending,
            score,
            ticks,
            speed
        );
        BestScore::record(&mut self.store, score)?;
        Ok(())
    }
}
