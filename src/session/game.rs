//! The game session: grid, turn state machine, score, lives, and levels.

use std::io::ErrorKind;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::events::UpdateEvents;
use super::turn::{Selection, TurnState};
use crate::cards::{Card, PairKey};
use crate::core::{GameRng, GameRngState, SessionConfig};
use crate::error::{LayoutError, StoreError};
use crate::grid::{self, Direction, GridSize, Position};
use crate::persistence::{FileHighScoreStore, HighScoreStore};
use crate::scoring::{self, Combo};

/// First level of every session.
pub const STARTING_LEVEL: u32 = 1;

/// One play session.
///
/// The host drives it from a single loop: input maps to [`move_cursor`] and
/// [`flip_card`], every frame calls [`update`], and the renderer reads the
/// accessors between calls. Timed transitions compare deadlines against the
/// `now` the host passes in; nothing here reads a clock or blocks.
///
/// Only the high score outlives the session, through the store `S`.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use mindflip::{Direction, GameSession, MemoryHighScoreStore, PairKey, SessionConfig, TurnState};
/// use mindflip::grid::GridSize;
///
/// let mut session = GameSession::new(SessionConfig::default(), MemoryHighScoreStore::new(), 42);
/// let layout: Vec<PairKey> = [1, 2, 1, 2].into_iter().map(PairKey::new).collect();
/// session.deal_layout(GridSize::new(2, 2), &layout).unwrap();
///
/// assert!(session.flip_card(Duration::ZERO));
/// session.move_cursor(Direction::Down);
/// assert!(session.flip_card(Duration::ZERO));
///
/// assert_eq!(session.turn_state(), TurnState::Delay);
/// assert_eq!(session.score(), 10);
///
/// let events = session.update(Duration::from_millis(1100));
/// assert!(events.matched);
/// assert_eq!(session.turn_state(), TurnState::FirstCard);
/// ```
///
/// [`move_cursor`]: GameSession::move_cursor
/// [`flip_card`]: GameSession::flip_card
/// [`update`]: GameSession::update
#[derive(Clone, Debug)]
pub struct GameSession<S: HighScoreStore> {
    config: SessionConfig,
    store: S,
    rng: GameRng,

    level: u32,
    score: u32,
    lives: u32,
    high_score: u32,
    points_earned_this_level: u32,
    last_match_points: u32,

    grid_size: GridSize,
    cards: Vec<Card>,
    cursor: Position,
    selection: Selection,
    turn_state: TurnState,
    combo: Combo,

    /// When the second card of the current turn was flipped.
    reveal_started: Duration,
    /// When the board was cleared.
    level_completed_at: Duration,

    game_over: bool,
    level_complete: bool,
    debug_mode: bool,
}

impl GameSession<FileHighScoreStore> {
    /// Session persisting to the configured `high_score_path`.
    #[must_use]
    pub fn with_file_store(config: SessionConfig, seed: u64) -> Self {
        let store = FileHighScoreStore::from_config(&config);
        Self::new(config, store, seed)
    }
}

impl<S: HighScoreStore> GameSession<S> {
    /// Start a session at level 1 with a reproducible shuffle.
    ///
    /// Reads the high score from `store`; an unreadable store counts as 0.
    #[must_use]
    pub fn new(config: SessionConfig, store: S, seed: u64) -> Self {
        Self::with_rng(config, store, GameRng::new(seed))
    }

    /// Start a session with an OS-seeded shuffle.
    #[must_use]
    pub fn with_entropy(config: SessionConfig, store: S) -> Self {
        Self::with_rng(config, store, GameRng::from_entropy())
    }

    /// Start a session dealing from `rng`.
    ///
    /// Pair with [`GameRng::from_state`] and [`rng_state`](Self::rng_state)
    /// to continue a recorded deal sequence.
    #[must_use]
    pub fn with_rng(config: SessionConfig, store: S, rng: GameRng) -> Self {
        let initial_lives = config.initial_lives;
        let debug_mode = config.debug_mode;
        let grid_size = GridSize::for_level(STARTING_LEVEL);

        let mut session = Self {
            config,
            store,
            rng,
            level: STARTING_LEVEL,
            score: 0,
            lives: initial_lives,
            high_score: 0,
            points_earned_this_level: 0,
            last_match_points: 0,
            grid_size,
            cards: Vec::new(),
            cursor: Position::default(),
            selection: Selection::new(),
            turn_state: TurnState::FirstCard,
            combo: Combo::new(),
            reveal_started: Duration::ZERO,
            level_completed_at: Duration::ZERO,
            game_over: false,
            level_complete: false,
            debug_mode,
        };
        session.setup_level();
        session.load_high_score();
        session
    }

    // === Read access ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give up the session, keeping its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Match points plus level bonus earned on the current level.
    #[must_use]
    pub fn points_earned_this_level(&self) -> u32 {
        self.points_earned_this_level
    }

    /// Points awarded by the most recent match, 0 before any.
    #[must_use]
    pub fn last_match_points(&self) -> u32 {
        self.last_match_points
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// All cards of the level, row-major.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card_at(&self, pos: Position) -> Option<&Card> {
        self.cards.get(self.grid_size.index_of(pos)?)
    }

    #[must_use]
    pub fn card_at_cursor(&self) -> Option<&Card> {
        self.card_at(self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Card indices chosen this turn, in order.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn first_selected(&self) -> Option<&Card> {
        self.cards.get(self.selection.first()?)
    }

    #[must_use]
    pub fn second_selected(&self) -> Option<&Card> {
        self.cards.get(self.selection.second()?)
    }

    #[must_use]
    pub fn turn_state(&self) -> TurnState {
        self.turn_state
    }

    #[must_use]
    pub fn combo_count(&self) -> u32 {
        self.combo.count()
    }

    /// Timestamp of the last match, if any.
    #[must_use]
    pub fn last_match_time(&self) -> Option<Duration> {
        self.combo.last_match()
    }

    /// Multiplier the current combo applies to match points.
    #[must_use]
    pub fn combo_multiplier(&self) -> f64 {
        self.combo.multiplier(
            self.config.combo_bonus_multiplier,
            self.config.max_combo_multiplier,
        )
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// In the pause between clearing the board and the next deal.
    #[must_use]
    pub fn is_level_complete(&self) -> bool {
        self.level_complete
    }

    /// Every card on the board is matched.
    #[must_use]
    pub fn is_level_cleared(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    #[must_use]
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// RNG position, for reproducing the remaining deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Input ===

    /// Move the cursor one cell, wrapping at the grid edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.step(direction, self.grid_size);
    }

    /// Flip the card under the cursor.
    ///
    /// Returns `false` and changes nothing when the session is over, between
    /// levels, inside a reveal window, or when the card is already face up.
    ///
    /// The second flip of a turn settles the outcome immediately: score,
    /// combo, lives and matched flags change now. Turning a mismatch back
    /// face down waits for [`update`](GameSession::update).
    #[instrument(level = "debug", skip(self), fields(cursor = %self.cursor))]
    pub fn flip_card(&mut self, now: Duration) -> bool {
        if self.game_over || self.level_complete || !self.turn_state.accepts_flip() {
            return false;
        }

        let Some(index) = self.grid_size.index_of(self.cursor) else {
            return false;
        };
        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        if card.is_matched() || card.is_flipped() {
            return false;
        }
        card.flip();

        if self.turn_state == TurnState::FirstCard {
            self.selection.clear();
            self.selection.push(index);
            self.turn_state = TurnState::SecondCard;
        } else {
            self.selection.push(index);
            self.turn_state = TurnState::Delay;
            self.reveal_started = now;
            self.resolve_turn(now);
        }
        true
    }

    /// Apply the permanent outcome of a two-card turn.
    fn resolve_turn(&mut self, now: Duration) {
        let Some((first, second)) = self.selection.pair() else {
            return;
        };

        if self.cards[first].matches(&self.cards[second]) {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();

            let combo = self.combo.record_match(now);
            let points = scoring::match_points(self.config.match_points, self.combo_multiplier());
            self.award(points);
            self.last_match_points = points;
            debug!(combo, points, score = self.score, "pair matched");

            if self.is_level_cleared() {
                self.complete_level(now);
            }
        } else {
            self.lives = self.lives.saturating_sub(1);
            self.combo.break_combo();
            debug!(lives = self.lives, "pair mismatched");

            if self.lives == 0 {
                self.game_over = true;
                info!(score = self.score, level = self.level, "game over");
                if !self.debug_mode {
                    self.save_high_score();
                }
            }
        }
    }

    fn complete_level(&mut self, now: Duration) {
        self.level_complete = true;
        self.level_completed_at = now;
        self.turn_state = TurnState::LevelComplete;

        let bonus = scoring::level_bonus(self.config.level_bonus, self.level);
        self.award(bonus);

        if scoring::grants_extra_life(self.level, self.config.lives_increment_levels) {
            self.lives = self.lives.saturating_add(1);
        }
        info!(level = self.level, bonus, lives = self.lives, "level cleared");
    }

    fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.points_earned_this_level = self.points_earned_this_level.saturating_add(points);
    }

    // === Clock ===

    /// Run the time-gated transitions that are due at `now`.
    ///
    /// - An idle combo older than `combo_timeout` drops to zero.
    /// - A turn whose reveal window (`mismatch_delay`) has passed ends:
    ///   matched pairs stay up, mismatched pairs turn face down.
    /// - A cleared level whose transition window (`level_transition_delay`)
    ///   has passed advances to the next level and deals it.
    ///
    /// Call it every frame. Deadlines are exclusive: a window of 1s is over
    /// only once strictly more than 1s has elapsed.
    pub fn update(&mut self, now: Duration) -> UpdateEvents {
        let mut events = UpdateEvents::none();

        if self.combo.expire(now, self.config.combo_timeout) {
            debug!("combo expired");
        }

        match self.turn_state {
            TurnState::Delay if elapsed(now, self.reveal_started) > self.config.mismatch_delay => {
                if let Some((first, second)) = self.selection.pair() {
                    if self.cards[first].is_matched() {
                        events.matched = true;
                    } else {
                        self.cards[first].flip();
                        self.cards[second].flip();
                        events.mismatched = true;
                    }
                }
                self.selection.clear();
                self.turn_state = TurnState::FirstCard;
            }
            TurnState::LevelComplete
                if elapsed(now, self.level_completed_at) > self.config.level_transition_delay =>
            {
                events.level_complete = true;
                self.level = self.level.saturating_add(1);
                // The life itself was granted when the board was cleared.
                events.extra_life =
                    scoring::grants_extra_life(self.level - 1, self.config.lives_increment_levels);
                self.setup_level();
            }
            _ => {}
        }

        events.game_over = self.game_over;
        events
    }

    // === Lifecycle ===

    /// Start over at level 1 with full lives. The high score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.level = STARTING_LEVEL;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.combo = Combo::new();
        self.last_match_points = 0;
        self.reveal_started = Duration::ZERO;
        self.level_completed_at = Duration::ZERO;
        self.game_over = false;
        self.setup_level();
    }

    /// Deal the grid for the current level.
    fn setup_level(&mut self) {
        let size = GridSize::for_level(self.level);
        let cards = grid::deal(size, &mut self.rng);
        self.install_grid(size, cards);
        debug!(level = self.level, %size, "level ready");
    }

    /// Replace the current level's grid with a fixed row-major layout.
    ///
    /// Used for scripted levels and reproducible play-throughs. Rejects
    /// layouts that do not fill `size` or that leave a key unpaired; on
    /// rejection the session is untouched.
    #[instrument(skip(self, values), fields(cells = values.len()))]
    pub fn deal_layout(&mut self, size: GridSize, values: &[PairKey]) -> Result<(), LayoutError> {
        let cards = grid::deal_layout(size, values)?;
        self.install_grid(size, cards);
        Ok(())
    }

    fn install_grid(&mut self, size: GridSize, cards: Vec<Card>) {
        self.grid_size = size;
        self.cards = cards;
        self.cursor = Position::default();
        self.selection.clear();
        self.turn_state = TurnState::FirstCard;
        self.level_complete = false;
        self.points_earned_this_level = 0;
    }

    /// Flip debug mode. Returns the new setting.
    ///
    /// Sessions in debug mode never persist a high score.
    pub fn toggle_debug_mode(&mut self) -> bool {
        self.debug_mode = !self.debug_mode;
        info!(debug_mode = self.debug_mode, "debug mode toggled");
        self.debug_mode
    }

    // === Persistence ===

    /// Re-read the high score from the store. Failures count as 0.
    pub fn load_high_score(&mut self) {
        self.high_score = match self.store.load() {
            Ok(score) => score,
            Err(StoreError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("no stored high score");
                0
            }
            Err(StoreError::Unavailable) => {
                debug!("high score store unavailable");
                0
            }
            Err(err) => {
                warn!(%err, "ignoring unreadable high score");
                0
            }
        };
    }

    /// Record the current score as the high score if it beats it.
    ///
    /// The in-memory value updates first; a failed write is logged and
    /// dropped. Returns `true` if the score was a new high.
    pub fn save_high_score(&mut self) -> bool {
        if self.score <= self.high_score {
            return false;
        }
        self.high_score = self.score;
        info!(high_score = self.high_score, "new high score");

        if let Err(err) = self.store.save(self.high_score) {
            warn!(%err, "failed to persist high score");
        }
        true
    }
}

fn elapsed(now: Duration, since: Duration) -> Duration {
    now.saturating_sub(since)
}
