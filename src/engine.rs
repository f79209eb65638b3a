use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::math::checker::{derive_report, ContrastInput};
use crate::math::hex::Color;
use crate::math::wcag::{round_ratio, Compliance};

/// One color pair as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairInput {
    pub background: String,
    pub foreground: String,
}

/// Outcome for a single pair. Malformed colors set `error` instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairResult {
    pub background: String,
    pub foreground: String,
    /// Rounded to 2 decimals. Compliance was computed before rounding.
    pub ratio: Option<f64>,
    pub compliance: Option<Compliance>,
    pub suggestions: Vec<Color>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub passing_aa: usize,
    pub failing_aa: usize,
    pub invalid: usize,
}

fn parse_pair(pair: &PairInput) -> Result<ContrastInput, ColorError> {
    Ok(ContrastInput::new(pair.background.parse()?, pair.foreground.parse()?))
}

fn check_pair(pair: &PairInput) -> PairResult {
    match parse_pair(pair) {
        Ok(input) => {
            let report = derive_report(&input, None);
            PairResult {
                background: input.background.to_hex(),
                foreground: input.foreground.to_hex(),
                ratio: Some(round_ratio(report.ratio)),
                compliance: Some(report.compliance),
                suggestions: report.suggestions,
                error: None,
            }
        }
        Err(e) => {
            log::debug!("batch: skipping {:?}/{:?}: {}", pair.background, pair.foreground, e);
            PairResult {
                background: pair.background.clone(),
                foreground: pair.foreground.clone(),
                ratio: None,
                compliance: None,
                suggestions: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Evaluate many pairs in parallel. Output order matches input order.
///
/// Every pair is independent and pure, so Rayon's `par_iter()` needs no
/// coordination beyond the final ordered collect.
pub fn check_pairs(pairs: &[PairInput]) -> Vec<PairResult> {
    log::debug!("batch: checking {} pairs", pairs.len());
    pairs.par_iter().map(check_pair).collect()
}

pub fn summarize(results: &[PairResult]) -> BatchSummary {
    results.iter().fold(
        BatchSummary {
            total: results.len(),
            ..BatchSummary::default()
        },
        |mut summary, result| {
            match result.compliance {
                Some(c) if c.small_text_aa => summary.passing_aa += 1,
                Some(_) => summary.failing_aa += 1,
                None => summary.invalid += 1,
            }
            summary
        },
    )
}
