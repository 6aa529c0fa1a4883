use crate::resolver::{is_supported_link, ResolveError, ResolvedMedia, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    About,
    Privacy,
    Terms,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    Hi,
    Pt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Top-level UI state, owned by the controller and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppState {
    pub page: Page,
    pub language: Language,
    pub theme: Theme,
}

impl AppState {
    #[allow(dead_code)]
    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Resolving,
}

/// Per-request resolution state: current input, loading phase, and the last
/// result or error.
///
/// Every submission gets a monotonically increasing sequence number and only
/// the outcome matching the latest issued number is applied, so overlapping
/// requests cannot let a stale response overwrite a newer one.
#[derive(Debug, Default)]
pub struct Session {
    input: String,
    phase: Phase,
    latest_seq: u64,
    result: Option<ResolvedMedia>,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the input and, if it passes, issues a sequence number for
    /// the resolution attempt. Invalid input surfaces immediately as an
    /// error with no sequence number issued (no network call is warranted).
    pub fn submit(&mut self, input: &str) -> Option<u64> {
        self.input = input.to_string();
        self.result = None;
        self.error = None;

        if !is_supported_link(input) {
            self.error = Some(ResolveError::InvalidInput.to_string());
            self.phase = Phase::Idle;
            return None;
        }

        self.latest_seq += 1;
        self.phase = Phase::Resolving;
        Some(self.latest_seq)
    }

    /// Applies a resolution outcome. Returns false and leaves the state
    /// untouched when `seq` is stale, i.e. a newer submission was issued
    /// after this one.
    pub fn finish(&mut self, seq: u64, outcome: Result<ResolvedMedia>) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.phase = Phase::Idle;
        match outcome {
            Ok(media) => self.result = Some(media),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }

    /// Resets input, result and error, as the UI clear action does.
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
        self.phase = Phase::Idle;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[allow(dead_code)]
    pub fn is_resolving(&self) -> bool {
        self.phase == Phase::Resolving
    }

    pub fn result(&self) -> Option<&ResolvedMedia> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
