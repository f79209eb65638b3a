use serde::{Deserialize, Serialize};

use super::hex::Color;
use super::suggest::suggest_colors;
use super::wcag::{contrast_ratio, evaluate_compliance, format_ratio, Compliance};

/// The two colors under test. Suggestions are searched around the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContrastInput {
    pub background: Color,
    pub foreground: Color,
}

impl ContrastInput {
    pub fn new(background: Color, foreground: Color) -> Self {
        Self { background, foreground }
    }
}

impl Default for ContrastInput {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::BLACK)
    }
}

/// Ratio and compliance for a selected suggestion standing in for the background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionOverride {
    pub background: Color,
    pub ratio: f64,
    pub compliance: Compliance,
}

/// Everything the checker displays for one input, derived in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    pub input: ContrastInput,
    /// Unrounded; see [`ContrastReport::display_ratio`].
    pub ratio: f64,
    pub compliance: Compliance,
    pub suggestions: Vec<Color>,
    pub selected: Option<SuggestionOverride>,
}

impl ContrastReport {
    pub fn effective_ratio(&self) -> f64 {
        self.selected.map_or(self.ratio, |s| s.ratio)
    }

    pub fn effective_compliance(&self) -> Compliance {
        self.selected.map_or(self.compliance, |s| s.compliance)
    }

    pub fn effective_background(&self) -> Color {
        self.selected.map_or(self.input.background, |s| s.background)
    }

    pub fn display_ratio(&self) -> String {
        format_ratio(self.effective_ratio())
    }
}

/// Derive the full report for `input`, optionally layering a selected background on top.
///
/// Suggestions always come from the unselected background so the swatch list
/// stays put while a selection is toggled.
pub fn derive_report(input: &ContrastInput, selected: Option<Color>) -> ContrastReport {
    let ratio = contrast_ratio(input.background, input.foreground);
    let compliance = evaluate_compliance(ratio);
    let suggestions = suggest_colors(input.background, input.foreground);

    let selected = selected.map(|background| {
        let ratio = contrast_ratio(background, input.foreground);
        SuggestionOverride {
            background,
            ratio,
            compliance: evaluate_compliance(ratio),
        }
    });

    ContrastReport {
        input: *input,
        ratio,
        compliance,
        suggestions,
        selected,
    }
}
