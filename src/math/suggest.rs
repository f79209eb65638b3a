use super::hex::Color;
use super::wcag::{contrast_ratio, AA_SMALL};
use crate::error::ColorError;

/// Largest number of suggestions a search returns.
pub const MAX_SUGGESTIONS: usize = 10;

/// Per-channel perturbations, swept low to high.
pub const CHANNEL_OFFSETS: [i16; 5] = [-20, -10, 0, 10, 20];

/// Search the neighborhood of `base` for colors that reach AA (4.5:1) against `partner`.
///
/// The base itself is tried first, then every offset combination in red-major,
/// green, blue order. Clamping can map several offsets onto the same color; only
/// the first occurrence is kept. Stops once [`MAX_SUGGESTIONS`] colors are found.
pub fn suggest_colors(base: Color, partner: Color) -> Vec<Color> {
    let rgb = base.rgb();
    let mut found: Vec<Color> = Vec::with_capacity(MAX_SUGGESTIONS);

    let candidates = std::iter::once(base).chain(CHANNEL_OFFSETS.iter().flat_map(move |&dr| {
        CHANNEL_OFFSETS.iter().flat_map(move |&dg| {
            CHANNEL_OFFSETS
                .iter()
                .map(move |&db| Color::from_rgb(rgb.offset(dr, dg, db)))
        })
    }));

    for candidate in candidates {
        if found.contains(&candidate) {
            continue;
        }
        let ratio = contrast_ratio(candidate, partner);
        if ratio >= AA_SMALL {
            log::trace!("suggest: {} passes at {:.2} against {}", candidate, ratio, partner);
            found.push(candidate);
            if found.len() >= MAX_SUGGESTIONS {
                break;
            }
        }
    }

    log::debug!("suggest: {} candidates for {} against {}", found.len(), base, partner);
    found
}

/// String-facing form of [`suggest_colors`], returning canonical hex.
pub fn suggest_colors_hex(base: &str, partner: &str) -> Result<Vec<String>, ColorError> {
    let found = suggest_colors(base.parse()?, partner.parse()?);
    Ok(found.into_iter().map(Color::to_hex).collect())
}
