//! Tunable knobs for the engine.
//!
//! This module provides configuration options controlling the constants the
//! specification leaves as named parameters: the Elo K-factor, the two
//! debounce windows, and the vote acceptance cooldown.
//!
//! Configuration can be created programmatically using [`Configuration::new()`]
//! or by reading environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! The following environment variables can be used to override configuration
//! values. All are optional; an unparsable or absent value falls back to the
//! default.
//!
//! - `TOURNAMENT_K_FACTOR` — Elo K-factor (default: `32`)
//! - `TOURNAMENT_SESSION_DEBOUNCE_MS` — SessionStore write debounce, in
//!   milliseconds (default: `1000`)
//! - `TOURNAMENT_SELECTION_DEBOUNCE_MS` — SelectionManager write debounce, in
//!   milliseconds (default: `800`)
//! - `TOURNAMENT_VOTE_COOLDOWN_MS` — minimum time between accepted votes, in
//!   milliseconds (default: `300`)

/// Tunable constants for one engine instance.
///
/// Defaults: K-factor 32, session debounce 1000 ms, selection debounce
/// 800 ms, vote cooldown 300 ms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub(crate) k_factor: f64,
    pub(crate) session_debounce_ms: u64,
    pub(crate) selection_debounce_ms: u64,
    pub(crate) vote_cooldown_ms: u64,
}

impl Configuration {
    /// Create a new configuration with the default constants.
    pub fn new() -> Self {
        Self {
            k_factor: 32.0,
            session_debounce_ms: 1000,
            selection_debounce_ms: 800,
            vote_cooldown_ms: 300,
        }
    }

    /// Create configuration from environment variables, falling back to
    /// [`Configuration::new`]'s defaults for anything unset or unparsable.
    ///
    /// Recognizes `TOURNAMENT_K_FACTOR`, `TOURNAMENT_SESSION_DEBOUNCE_MS`,
    /// `TOURNAMENT_SELECTION_DEBOUNCE_MS`, and `TOURNAMENT_VOTE_COOLDOWN_MS`.
    pub fn from_env() -> Self {
        fn get_env<T: std::str::FromStr>(var: &str, default: T) -> T {
            std::env::var(var)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        let defaults = Self::new();
        Self {
            k_factor: get_env("TOURNAMENT_K_FACTOR", defaults.k_factor),
            session_debounce_ms: get_env(
                "TOURNAMENT_SESSION_DEBOUNCE_MS",
                defaults.session_debounce_ms,
            ),
            selection_debounce_ms: get_env(
                "TOURNAMENT_SELECTION_DEBOUNCE_MS",
                defaults.selection_debounce_ms,
            ),
            vote_cooldown_ms: get_env("TOURNAMENT_VOTE_COOLDOWN_MS", defaults.vote_cooldown_ms),
        }
    }

    /// Override the Elo K-factor.
    pub fn with_k_factor(mut self, value: f64) -> Self {
        self.k_factor = value;
        self
    }

    /// Override the SessionStore write debounce window, in milliseconds.
    pub fn with_session_debounce_ms(mut self, value: u64) -> Self {
        self.session_debounce_ms = value;
        self
    }

    /// Override the SelectionManager write debounce window, in milliseconds.
    pub fn with_selection_debounce_ms(mut self, value: u64) -> Self {
        self.selection_debounce_ms = value;
        self
    }

    /// Override the minimum time between accepted votes, in milliseconds.
    pub fn with_vote_cooldown_ms(mut self, value: u64) -> Self {
        self.vote_cooldown_ms = value;
        self
    }

    /// The configured Elo K-factor.
    pub fn k_factor(&self) -> f64 {
        self.k_factor
    }

    /// The configured SessionStore write debounce window, in milliseconds.
    pub fn session_debounce_ms(&self) -> u64 {
        self.session_debounce_ms
    }

    /// The configured SelectionManager write debounce window, in milliseconds.
    pub fn selection_debounce_ms(&self) -> u64 {
        self.selection_debounce_ms
    }

    /// The configured minimum time between accepted votes, in milliseconds.
    pub fn vote_cooldown_ms(&self) -> u64 {
        self.vote_cooldown_ms
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_specification_constants() {
        let config = Configuration::new();
        assert_eq!(config.k_factor, 32.0);
        assert_eq!(config.session_debounce_ms, 1000);
        assert_eq!(config.selection_debounce_ms, 800);
        assert_eq!(config.vote_cooldown_ms, 300);
    }

    #[test]
    fn builder_overrides_apply() {
        let config = Configuration::new()
            .with_k_factor(16.0)
            .with_session_debounce_ms(2000);
        assert_eq!(config.k_factor, 16.0);
        assert_eq!(config.session_debounce_ms, 2000);
        assert_eq!(config.selection_debounce_ms, 800);
    }
}
