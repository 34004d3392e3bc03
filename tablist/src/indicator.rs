use std::time::{Duration, Instant};

/// How long the indicator stays fully visible after a selection.
pub const FADE_DELAY: Duration = Duration::from_millis(500);

/// Transient "N of M" position readout.
///
/// Re-shown on every selection; a new selection restarts the fade cycle.
/// Fading is a cosmetic deferral: nothing is scheduled, the elapsed time is
/// simply consulted whenever the view is assembled.
#[derive(Debug, Default)]
pub struct PositionIndicator {
    text: String,
    shown_at: Option<Instant>,
}

impl PositionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the readout for a fresh selection and restart the fade.
    pub fn show(&mut self, position: usize, total: usize) {
        self.text = format!("{position} of {total}");
        self.shown_at = Some(Instant::now());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Never selected yet; nothing to display.
    pub fn is_blank(&self) -> bool {
        self.shown_at.is_none()
    }

    pub fn is_faded(&self) -> bool {
        self.faded_at(Instant::now())
    }

    /// Whether the fade delay had elapsed at the given instant.
    pub fn faded_at(&self, now: Instant) -> bool {
        match self.shown_at {
            Some(shown) => now.duration_since(shown) >= FADE_DELAY,
            None => true,
        }
    }
}
