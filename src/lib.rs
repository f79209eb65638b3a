#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod session;

#[cfg(feature = "node")]
pub mod bindings;
#[cfg(feature = "node")]
pub mod types;

pub use error::ColorError;
pub use math::checker::{derive_report, ContrastInput, ContrastReport, SuggestionOverride};
pub use math::hex::{normalize_hex, to_hex, to_rgb, Color, Rgb};
pub use math::suggest::{suggest_colors, suggest_colors_hex};
pub use math::wcag::{
    contrast_ratio, contrast_ratio_hex, evaluate_compliance, format_ratio, relative_luminance,
    round_ratio, Compliance, Level, TextSize,
};
pub use session::CheckerSession;
