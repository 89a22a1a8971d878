//! Game driver: owns the current round and reacts to player input.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wumpus_core::{Direction, Point};
use wumpus_paths::MoveSelector;

use crate::config::{ConfigError, GameConfig};
use crate::placement::place_round;
use crate::state::GameState;
use crate::status::{Outcome, StatusLog};

/// Shown before the first action of a round.
pub const NEW_ROUND_MESSAGE: &str = "Find the gold, or shoot the Wumpus before it finds you!";

/// A game session: the current round plus everything needed to start the
/// next one.
///
/// A presentation layer forwards cell clicks to [`attempt_move`](Self::attempt_move),
/// shot buttons to [`shoot`](Self::shoot) and the reset button to
/// [`initialize_round`](Self::initialize_round), then redraws from
/// [`state`](Self::state) and [`status`](Self::status).
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: GameState,
    selector: MoveSelector,
    rng: StdRng,
    log: StatusLog,
    last: Option<Outcome>,
    turn: u32,
    round: u32,
}

impl Game {
    /// Start a game with a randomly seeded generator.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let seed: u64 = rand::rng().random();
        Self::with_seed(config, seed)
    }

    /// Start a game whose rounds are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = place_round(&mut rng, &config)?;
        let mut game = Self::assemble(config, state, rng);
        game.begin_round();
        Ok(game)
    }

    /// Resume play from a prepared round layout. Later rounds are placed
    /// randomly according to `config`, so the layout must use the same
    /// board and obstacle count.
    pub fn from_state(config: GameConfig, state: GameState) -> Result<Self, ConfigError> {
        config.validate()?;
        if state.board().bounds() != config.bounds() {
            return Err(ConfigError::BoardMismatch {
                config: config.bounds(),
                state: state.board().bounds(),
            });
        }
        if state.obstacles().len() != config.obstacle_count {
            return Err(ConfigError::ObstacleMismatch {
                config: config.obstacle_count,
                state: state.obstacles().len(),
            });
        }
        let seed: u64 = rand::rng().random();
        let mut game = Self::assemble(config, state, StdRng::seed_from_u64(seed));
        game.begin_round();
        Ok(game)
    }

    fn assemble(config: GameConfig, state: GameState, rng: StdRng) -> Self {
        Self {
            selector: MoveSelector::new(config.search_depth),
            config,
            state,
            rng,
            log: StatusLog::new(),
            last: None,
            turn: 0,
            round: 0,
        }
    }

    fn begin_round(&mut self) {
        self.round += 1;
        self.turn = 0;
        self.last = None;
        self.log.new_round();
        log::info!(
            "round {}: player {}, monster {}, {} obstacles",
            self.round,
            self.state.player(),
            self.state.monster(),
            self.state.obstacles().len()
        );
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of the current round.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Outcome of the most recent action this round, if any.
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last
    }

    /// Status line describing the most recent action.
    pub fn status(&self) -> &'static str {
        self.last.map_or(NEW_ROUND_MESSAGE, Outcome::message)
    }

    /// Status history across rounds.
    pub fn log(&self) -> &StatusLog {
        &self.log
    }

    /// Accepted player moves this round.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Rounds started so far, counting the current one.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether `p` holds an obstacle.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.state.is_blocked(p)
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Throw away the current round and lay out a new one.
    pub fn initialize_round(&mut self) -> Result<(), ConfigError> {
        self.state = place_round(&mut self.rng, &self.config)?;
        self.begin_round();
        Ok(())
    }

    /// Move the player to `target`; the monster answers if the round goes on.
    pub fn attempt_move(&mut self, target: Point) -> Outcome {
        let monster = self.state.monster();
        let outcome = self.state.attempt_move(target, &mut self.selector);
        if !outcome.is_rejected() {
            self.turn += 1;
            log::debug!(
                "turn {}: player to {}, monster {} -> {} ({} nodes)",
                self.turn,
                target,
                monster,
                self.state.monster(),
                self.selector.visited()
            );
        }
        self.record(outcome)
    }

    /// Shoot the arrow in direction `dir`.
    pub fn shoot(&mut self, dir: Direction) -> Outcome {
        let outcome = self.state.shoot(dir);
        if !outcome.is_rejected() {
            log::debug!(
                "shot {} from {}: {:?}",
                dir,
                self.state.player(),
                outcome
            );
        }
        self.record(outcome)
    }

    fn record(&mut self, outcome: Outcome) -> Outcome {
        // Input on a finished round is ignored; the final status stays.
        if outcome == Outcome::Inactive {
            return outcome;
        }
        if outcome.ends_round() {
            log::info!("round {} over after {} turns: {:?}", self.round, self.turn, outcome);
        }
        self.log.push(outcome);
        self.last = Some(outcome);
        outcome
    }
}
