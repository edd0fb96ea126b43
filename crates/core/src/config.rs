//! Game configuration.
//!
//! Defaults match [`crate::types`]; every field can be overridden from the
//! environment via [`GameConfig::from_env`]:
//!
//! - `MATCH3_COLUMNS`: grid width (default: 8)
//! - `MATCH3_ROWS`: grid height (default: 8)
//! - `MATCH3_PIECE_TYPES`: number of distinct kinds (default: 6)
//! - `MATCH3_MATCH_SCORE`: points per removed piece (default: 10)
//! - `MATCH3_MAX_RESHUFFLES`: reshuffle attempts before a board is degenerate (default: 10)
//! - `MATCH3_SEED`: RNG seed (default: derived from the clock)

use std::collections::HashSet;
use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::types::{
    PieceType, DEFAULT_COLUMNS, DEFAULT_MATCH_SCORE, DEFAULT_PIECE_TYPES, DEFAULT_ROWS,
    MAX_RESHUFFLE_ATTEMPTS, MIN_PIECE_TYPES,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: u8,
    pub rows: u8,
    pub piece_types: Vec<PieceType>,
    pub match_score_value: u32,
    pub max_reshuffle_attempts: u32,
    /// `None` lets the caller pick (the binaries derive one from the clock).
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            piece_types: PieceType::palette(DEFAULT_PIECE_TYPES),
            match_score_value: DEFAULT_MATCH_SCORE,
            max_reshuffle_attempts: MAX_RESHUFFLE_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(columns: u8, rows: u8, piece_types: Vec<PieceType>) -> Self {
        Self {
            columns,
            rows,
            piece_types,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_match_score_value(mut self, value: u32) -> Self {
        self.match_score_value = value;
        self
    }

    pub fn with_max_reshuffle_attempts(mut self, attempts: u32) -> Self {
        self.max_reshuffle_attempts = attempts;
        self
    }

    /// Reject configurations that cannot produce a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }

        let mut seen = HashSet::new();
        for kind in &self.piece_types {
            if !seen.insert(*kind) {
                return Err(ConfigError::DuplicatePieceType(kind.id()));
            }
        }

        if self.piece_types.len() < MIN_PIECE_TYPES {
            return Err(ConfigError::TooFewPieceTypes {
                got: self.piece_types.len(),
                min: MIN_PIECE_TYPES,
            });
        }

        Ok(())
    }

    /// Build a configuration from `MATCH3_*` environment variables, falling back to
    /// defaults for unset ones. The result is validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let columns = parse_var(&lookup, "MATCH3_COLUMNS")?.unwrap_or(defaults.columns);
        let rows = parse_var(&lookup, "MATCH3_ROWS")?.unwrap_or(defaults.rows);
        let kinds: u8 =
            parse_var(&lookup, "MATCH3_PIECE_TYPES")?.unwrap_or(DEFAULT_PIECE_TYPES);
        let match_score_value =
            parse_var(&lookup, "MATCH3_MATCH_SCORE")?.unwrap_or(defaults.match_score_value);
        let max_reshuffle_attempts = parse_var(&lookup, "MATCH3_MAX_RESHUFFLES")?
            .unwrap_or(defaults.max_reshuffle_attempts);
        let seed = parse_var(&lookup, "MATCH3_SEED")?;

        let config = Self {
            columns,
            rows,
            piece_types: PieceType::palette(kinds),
            match_score_value,
            max_reshuffle_attempts,
            seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_score_value, 10);
        assert_eq!(config.piece_types.len(), 6);
    }

    #[test]
    fn rejects_too_few_piece_types() {
        let config = GameConfig::new(4, 4, PieceType::palette(2));
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewPieceTypes { got: 2, min: 3 })
        );
    }

    #[test]
    fn rejects_duplicate_piece_types() {
        let config = GameConfig::new(4, 4, vec![PieceType(0), PieceType(1), PieceType(1)]);
        assert_eq!(config.validate(), Err(ConfigError::DuplicatePieceType(1)));
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = GameConfig::new(0, 4, PieceType::palette(3));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { columns: 0, rows: 4 })
        ));
    }

    #[test]
    fn env_overrides_defaults() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MATCH3_COLUMNS", "5"),
            ("MATCH3_ROWS", " 6 "),
            ("MATCH3_PIECE_TYPES", "4"),
            ("MATCH3_SEED", "77"),
        ]))
        .unwrap();
        assert_eq!(config.columns, 5);
        assert_eq!(config.rows, 6);
        assert_eq!(config.piece_types, PieceType::palette(4));
        assert_eq!(config.seed, Some(77));
        assert_eq!(config.match_score_value, 10);
    }

    #[test]
    fn env_rejects_garbage() {
        let err = GameConfig::from_lookup(lookup_from(&[("MATCH3_COLUMNS", "wide")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "MATCH3_COLUMNS",
                value: "wide".to_string()
            }
        );

        let err = GameConfig::from_lookup(lookup_from(&[("MATCH3_PIECE_TYPES", "2")])).unwrap_err();
        assert!(matches!(err, ConfigError::TooFewPieceTypes { .. }));
    }
}
