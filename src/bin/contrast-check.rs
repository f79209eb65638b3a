// Command-line front end for the WCAG contrast checker

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use wcag_contrast::config::{log_filter, CliArgs, Command, Config, OutputFormat};
use wcag_contrast::engine::{check_pairs, summarize, PairInput, PairResult};
use wcag_contrast::{
    derive_report, format_ratio, suggest_colors, CheckerSession, Color, Compliance, ContrastInput,
    ContrastReport,
};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(args.verbose))).init();

    let config = Config::load(&args)?;

    match args.command {
        Command::Check {
            background,
            foreground,
            select,
        } => {
            let input = ContrastInput::new(
                background.unwrap_or(config.default_background),
                foreground.unwrap_or(config.default_foreground),
            );
            let report = match select {
                Some(color) => {
                    let mut session = CheckerSession::new(input);
                    session.toggle_suggestion(color)?;
                    session.report()
                }
                None => derive_report(&input, None),
            };
            emit(config.format, &report, print_report)
        }
        Command::Suggest { base, partner } => {
            let found = suggest_colors(base, partner);
            log::info!("{} suggestions for {} against {}", found.len(), base, partner);
            emit(config.format, &found, |found| {
                if found.is_empty() {
                    println!("No nearby color reaches 4.5:1 against {partner}");
                }
                for color in found {
                    println!("{color}");
                }
            })
        }
        Command::Batch { file } => {
            let pairs = read_pairs(&file)?;
            let results = check_pairs(&pairs);
            let summary = summarize(&results);
            log::info!(
                "batch: {} pairs, {} pass AA, {} fail AA, {} invalid",
                summary.total,
                summary.passing_aa,
                summary.failing_aa,
                summary.invalid
            );
            emit(config.format, &results[..], print_batch)
        }
    }
}

fn read_pairs(path: &Path) -> Result<Vec<PairInput>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse batch file {}", path.display()))
}

fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T, text: impl Fn(&T)) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
        OutputFormat::Text => text(value),
    }
    Ok(())
}

fn mark(pass: bool) -> &'static str {
    if pass {
        "pass"
    } else {
        "FAIL"
    }
}

fn print_compliance(c: &Compliance) {
    println!("  Small text  AA  4.5:1  {}", mark(c.small_text_aa));
    println!("  Small text  AAA 7:1    {}", mark(c.small_text_aaa));
    println!("  Large text  AA  3:1    {}", mark(c.large_text_aa));
    println!("  Large text  AAA 4.5:1  {}", mark(c.large_text_aaa));
}

fn print_report(report: &ContrastReport) {
    println!(
        "Background {}  Text {}",
        report.input.background, report.input.foreground
    );
    println!("Contrast ratio {}", format_ratio(report.ratio));
    print_compliance(&report.compliance);

    if let Some(selected) = &report.selected {
        println!();
        println!("Selected background {}", selected.background);
        println!("Contrast ratio {}", format_ratio(selected.ratio));
        print_compliance(&selected.compliance);
    }

    println!();
    if report.suggestions.is_empty() {
        println!("No suggested backgrounds within reach");
    } else {
        let list: Vec<String> = report.suggestions.iter().map(Color::to_string).collect();
        println!("Suggested backgrounds: {}", list.join(" "));
    }
}

fn print_batch(results: &[PairResult]) {
    for result in results {
        match (&result.error, result.ratio, result.compliance) {
            (Some(error), _, _) => println!("{} on {}  error: {}", result.foreground, result.background, error),
            (None, Some(ratio), Some(c)) => println!(
                "{} on {}  {:.2}:1  AA {}  AAA {}",
                result.foreground,
                result.background,
                ratio,
                mark(c.small_text_aa),
                mark(c.small_text_aaa)
            ),
            _ => {}
        }
    }
    let summary = summarize(results);
    println!(
        "{} pairs: {} pass AA, {} fail AA, {} invalid",
        summary.total, summary.passing_aa, summary.failing_aa, summary.invalid
    );
}
