use crate::error::ColorError;
use crate::math::checker::{derive_report, ContrastInput, ContrastReport};
use crate::math::hex::Color;
use crate::math::suggest::suggest_colors;

/// Interactive checker state: the two picked colors plus an optional selected suggestion.
///
/// Only inputs are stored. Every derived value comes from [`CheckerSession::report`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckerSession {
    input: ContrastInput,
    selected: Option<Color>,
}

impl CheckerSession {
    pub fn new(input: ContrastInput) -> Self {
        Self { input, selected: None }
    }

    pub fn input(&self) -> ContrastInput {
        self.input
    }

    pub fn selected(&self) -> Option<Color> {
        self.selected
    }

    pub fn set_background(&mut self, background: Color) {
        log::debug!("session: background {} -> {}", self.input.background, background);
        self.input.background = background;
        self.drop_stale_selection();
    }

    pub fn set_foreground(&mut self, foreground: Color) {
        log::debug!("session: foreground {} -> {}", self.input.foreground, foreground);
        self.input.foreground = foreground;
        self.drop_stale_selection();
    }

    /// Select `color`, or clear the selection if it is already selected.
    /// Returns the selection now in effect.
    pub fn toggle_suggestion(&mut self, color: Color) -> Result<Option<Color>, ColorError> {
        if self.selected == Some(color) {
            log::debug!("session: cleared selection {}", color);
            self.selected = None;
            return Ok(None);
        }

        if !self.current_suggestions().contains(&color) {
            return Err(ColorError::NotASuggestion {
                color: color.to_hex(),
            });
        }

        log::debug!("session: selected {}", color);
        self.selected = Some(color);
        Ok(self.selected)
    }

    pub fn report(&self) -> ContrastReport {
        derive_report(&self.input, self.selected)
    }

    fn current_suggestions(&self) -> Vec<Color> {
        suggest_colors(self.input.background, self.input.foreground)
    }

    fn drop_stale_selection(&mut self) {
        if let Some(color) = self.selected {
            if !self.current_suggestions().contains(&color) {
                log::debug!("session: {} no longer suggested, clearing selection", color);
                self.selected = None;
            }
        }
    }
}
