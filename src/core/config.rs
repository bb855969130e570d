//! Session configuration.
//!
//! Every tuning value the session consults lives in [`SessionConfig`]:
//! point values, timing windows, combo tuning, starting lives and the
//! high-score location. Sessions receive it at construction and never
//! read ambient globals.
//!
//! Configs can be built in code with the `with_*` methods or loaded from
//! JSON, where every field is optional:
//!
//! ```
//! use mindflip::core::SessionConfig;
//!
//! let config = SessionConfig::from_json(r#"{ "initial_lives": 5, "mismatch_delay": 0.5 }"#).unwrap();
//! assert_eq!(config.initial_lives, 5);
//! assert_eq!(config.match_points, 10);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default location of the high-score file, relative to the working directory.
pub const DEFAULT_HIGH_SCORE_PATH: &str = "data/high_score.txt";

/// Immutable tuning for a [`GameSession`](crate::session::GameSession).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lives at the start of a session (and after `reset`).
    pub initial_lives: u32,

    /// Base points for a matched pair, before the combo multiplier.
    pub match_points: u32,

    /// Bonus per level number when a level is cleared.
    pub level_bonus: u32,

    /// Clearing a level whose number is a multiple of this grants a life.
    pub lives_increment_levels: u32,

    /// Multiplier gained per consecutive match.
    pub combo_bonus_multiplier: f64,

    /// Upper bound on the combo multiplier.
    pub max_combo_multiplier: f64,

    /// Idle time after the last match before the combo decays to zero.
    #[serde(with = "duration_secs")]
    pub combo_timeout: Duration,

    /// How long a resolved pair stays face up before the turn ends.
    #[serde(with = "duration_secs")]
    pub mismatch_delay: Duration,

    /// Pause between clearing a level and dealing the next one.
    #[serde(with = "duration_secs")]
    pub level_transition_delay: Duration,

    /// Start sessions in debug mode (high scores are not persisted).
    pub debug_mode: bool,

    /// Where [`FileHighScoreStore`](crate::persistence::FileHighScoreStore) keeps the score.
    pub high_score_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_lives: 3,
            match_points: 10,
            level_bonus: 20,
            lives_increment_levels: 2,
            combo_bonus_multiplier: 0.05,
            max_combo_multiplier: 1.5,
            combo_timeout: Duration::from_secs(10),
            mismatch_delay: Duration::from_secs(1),
            level_transition_delay: Duration::from_secs(2),
            debug_mode: false,
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
        }
    }
}

impl SessionConfig {
    /// Create a configuration with the standard tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document and validate it.
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the tuning for values the session cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_lives == 0 {
            return Err(ConfigError::NoInitialLives);
        }
        if self.lives_increment_levels == 0 {
            return Err(ConfigError::ZeroLivesIncrement);
        }
        if !self.combo_bonus_multiplier.is_finite() || self.combo_bonus_multiplier < 0.0 {
            return Err(ConfigError::InvalidComboBonus(self.combo_bonus_multiplier));
        }
        if self.max_combo_multiplier.is_nan() || self.max_combo_multiplier < 1.0 {
            return Err(ConfigError::ComboCapBelowOne(self.max_combo_multiplier));
        }
        Ok(())
    }

    /// Set starting lives.
    #[must_use]
    pub fn with_initial_lives(mut self, lives: u32) -> Self {
        self.initial_lives = lives;
        self
    }

    /// Set base points per match.
    #[must_use]
    pub fn with_match_points(mut self, points: u32) -> Self {
        self.match_points = points;
        self
    }

    /// Set the per-level clear bonus.
    #[must_use]
    pub fn with_level_bonus(mut self, bonus: u32) -> Self {
        self.level_bonus = bonus;
        self
    }

    /// Set how many levels apart extra lives are granted.
    #[must_use]
    pub fn with_lives_increment_levels(mut self, levels: u32) -> Self {
        self.lives_increment_levels = levels;
        self
    }

    /// Set combo growth per match and its cap.
    #[must_use]
    pub fn with_combo(mut self, bonus_per_match: f64, max_multiplier: f64) -> Self {
        self.combo_bonus_multiplier = bonus_per_match;
        self.max_combo_multiplier = max_multiplier;
        self
    }

    /// Set the combo decay timeout.
    #[must_use]
    pub fn with_combo_timeout(mut self, timeout: Duration) -> Self {
        self.combo_timeout = timeout;
        self
    }

    /// Set both timed-transition windows.
    #[must_use]
    pub fn with_delays(mut self, mismatch: Duration, level_transition: Duration) -> Self {
        self.mismatch_delay = mismatch;
        self.level_transition_delay = level_transition;
        self
    }

    /// Start in debug mode.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug_mode = true;
        self
    }

    /// Set the high-score file location.
    #[must_use]
    pub fn with_high_score_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.high_score_path = path.into();
        self
    }
}

/// Durations as fractional seconds, the unit config files are written in.
mod duration_secs {
    use std::time::Duration;

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(de::Error::custom)
    }
}
