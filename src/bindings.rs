use napi::{Error, Result, Status};

use crate::engine;
use crate::error::ColorError;
use crate::math::{checker, hex, suggest, wcag};
use crate::types::{JsCompliance, JsContrastReport, JsPairInput, JsPairResult, JsRgb};

impl From<ColorError> for Error {
    fn from(e: ColorError) -> Self {
        Error::new(Status::InvalidArg, e.to_string())
    }
}

fn parse(value: &str) -> Result<hex::Color> {
    Ok(value.parse::<hex::Color>()?)
}

#[napi]
pub fn health_check() -> String {
    "wcag-contrast ok".to_string()
}

/// Accepts `#rrggbb` in any case and also the `#rgb` shorthand (`#f0a` reads as `#ff00aa`).
/// Anything else throws `InvalidArg`.
#[napi]
pub fn to_rgb(hex: String) -> Result<JsRgb> {
    Ok(hex::to_rgb(&hex)?.into())
}

#[napi]
pub fn relative_luminance(rgb: JsRgb) -> Result<f64> {
    let rgb = hex::Rgb::try_from(rgb)
        .map_err(|_| Error::new(Status::InvalidArg, "channels must be in 0-255".to_string()))?;
    Ok(wcag::relative_luminance(rgb))
}

#[napi]
pub fn contrast_ratio(hex_a: String, hex_b: String) -> Result<f64> {
    Ok(wcag::contrast_ratio_hex(&hex_a, &hex_b)?)
}

#[napi]
pub fn evaluate_compliance(ratio: f64) -> JsCompliance {
    wcag::evaluate_compliance(ratio).into()
}

#[napi]
pub fn suggest_colors(base_hex: String, partner_hex: String) -> Result<Vec<String>> {
    let found = suggest::suggest_colors(parse(&base_hex)?, parse(&partner_hex)?);
    Ok(found.iter().map(|c| c.to_hex()).collect())
}

/// Full report for the page. `selected` is the suggestion currently toggled on, if any.
#[napi]
pub fn derive_report(
    background: String,
    foreground: String,
    selected: Option<String>,
) -> Result<JsContrastReport> {
    let input = checker::ContrastInput::new(parse(&background)?, parse(&foreground)?);
    let selected = selected.as_deref().map(parse).transpose()?;
    Ok(checker::derive_report(&input, selected).into())
}

#[napi]
pub fn check_pairs(pairs: Vec<JsPairInput>) -> Vec<JsPairResult> {
    let pairs: Vec<engine::PairInput> = pairs.into_iter().map(Into::into).collect();
    engine::check_pairs(&pairs).into_iter().map(Into::into).collect()
}
