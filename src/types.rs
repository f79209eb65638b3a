use crate::engine::{PairInput, PairResult};
use crate::math::checker::ContrastReport;
use crate::math::hex::Rgb;
use crate::math::wcag::Compliance;

/// JS view of [`Rgb`]. Channels arrive as plain numbers and are range-checked on the way in.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsRgb {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

/// JS view of [`Compliance`], keyed the way the page reads it.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsCompliance {
    #[napi(js_name = "smallTextAA")]
    pub small_text_aa: bool,
    #[napi(js_name = "smallTextAAA")]
    pub small_text_aaa: bool,
    #[napi(js_name = "largeTextAA")]
    pub large_text_aa: bool,
    #[napi(js_name = "largeTextAAA")]
    pub large_text_aaa: bool,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsSuggestionOverride {
    pub background: String,
    pub ratio: f64,
    pub compliance: JsCompliance,
}

/// Flattened [`ContrastReport`] for the page. Ratios are unrounded; `display_ratio` is formatted.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsContrastReport {
    pub background: String,
    pub foreground: String,
    pub ratio: f64,
    pub display_ratio: String,
    pub compliance: JsCompliance,
    pub suggestions: Vec<String>,
    pub selected: Option<JsSuggestionOverride>,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsPairInput {
    pub background: String,
    pub foreground: String,
}

#[napi(object)]
#[derive(Debug, Clone)]
pub struct JsPairResult {
    pub background: String,
    pub foreground: String,
    pub ratio: Option<f64>,
    pub compliance: Option<JsCompliance>,
    pub suggestions: Vec<String>,
    pub error: Option<String>,
}

impl From<Rgb> for JsRgb {
    fn from(rgb: Rgb) -> Self {
        JsRgb {
            r: rgb.r as u32,
            g: rgb.g as u32,
            b: rgb.b as u32,
        }
    }
}

impl TryFrom<JsRgb> for Rgb {
    type Error = std::num::TryFromIntError;

    fn try_from(js: JsRgb) -> Result<Self, Self::Error> {
        Ok(Rgb::new(
            u8::try_from(js.r)?,
            u8::try_from(js.g)?,
            u8::try_from(js.b)?,
        ))
    }
}

impl From<Compliance> for JsCompliance {
    fn from(c: Compliance) -> Self {
        JsCompliance {
            small_text_aa: c.small_text_aa,
            small_text_aaa: c.small_text_aaa,
            large_text_aa: c.large_text_aa,
            large_text_aaa: c.large_text_aaa,
        }
    }
}

impl From<ContrastReport> for JsContrastReport {
    fn from(report: ContrastReport) -> Self {
        JsContrastReport {
            background: report.input.background.to_hex(),
            foreground: report.input.foreground.to_hex(),
            ratio: report.ratio,
            display_ratio: report.display_ratio(),
            compliance: report.compliance.into(),
            suggestions: report.suggestions.iter().map(|c| c.to_hex()).collect(),
            selected: report.selected.map(|s| JsSuggestionOverride {
                background: s.background.to_hex(),
                ratio: s.ratio,
                compliance: s.compliance.into(),
            }),
        }
    }
}

impl From<JsPairInput> for PairInput {
    fn from(js: JsPairInput) -> Self {
        PairInput {
            background: js.background,
            foreground: js.foreground,
        }
    }
}

impl From<PairResult> for JsPairResult {
    fn from(result: PairResult) -> Self {
        JsPairResult {
            background: result.background,
            foreground: result.foreground,
            ratio: result.ratio,
            compliance: result.compliance.map(Into::into),
            suggestions: result.suggestions.iter().map(|c| c.to_hex()).collect(),
            error: result.error,
        }
    }
}
