use std::path::PathBuf;

use clap::Args;
use tracing::{debug, info};

use crate::cli::{OutputFormat, WeightArgs};
use crate::lexicon::store::Lexicon;
use crate::matching::engine::{
    MatchResult, MatchingConfig, MatchingEngine, DEFAULT_MAX_RESULTS, DEFAULT_THRESHOLD,
};
use crate::store::records::{RecordStore, DEFAULT_STORE_FILE};
use crate::utils::validation::{validate_max_results, validate_threshold};

#[derive(Args)]
pub struct MatchArgs {
    /// The new query to look up
    #[arg(required = true)]
    pub query: String,

    /// Path to the pinned record store (JSON array)
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Minimum similarity (0.0-1.0) for a record to be returned
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Maximum number of matches to return
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the match command
///
/// # Errors
///
/// Returns an error if an argument is out of range or the results cannot be
/// serialized. An unavailable store is not an error.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, lexicon: &Lexicon) -> anyhow::Result<()> {
    let config = MatchingConfig {
        threshold: validate_threshold(args.threshold)?,
        max_results: validate_max_results(args.max_results)?,
        scoring_weights: args.weights.to_weights()?,
    };

    info!(
        "Matching with threshold {:.2}, up to {} results",
        config.threshold, config.max_results
    );
    debug!("Scoring weights: {:?}", config.scoring_weights);

    let store = RecordStore::load(&args.store);
    info!("Loaded {} pinned records", store.len());

    let engine = MatchingEngine::with_config(lexicon, config);
    let matches = engine.find_matches(&args.query, &store.records);
    info!("Found {} matches", matches.len());

    match format {
        OutputFormat::Json => print_json_results(&matches)?,
        OutputFormat::Text => print_text_results(&args.query, &matches),
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_json_results(matches: &[MatchResult]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(matches)?);
    Ok(())
}

fn print_text_results(query: &str, matches: &[MatchResult]) {
    if matches.is_empty() {
        println!("No similar pinned queries found for \"{query}\".");
        return;
    }

    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({:.1}%)",
            i + 1,
            result.query,
            result.similarity * 100.0
        );
        println!("   ID: {}", result.id);
        if !result.pinned_at.is_empty() {
            println!("   Pinned: {}", result.pinned_at);
        }
        println!(
            "   Signals: {:.0}% overlap, {:.0}% words, {:.0}% content, {:.0}% intent",
            result.score.synonym_jaccard * 100.0,
            result.score.word_match * 100.0,
            result.score.important_words * 100.0,
            result.score.intent_bonus * 100.0,
        );
        println!(
            "   Normalized: \"{}\" vs \"{}\"",
            result.debug.cleaned_input, result.debug.cleaned_saved
        );
        println!("\n   {}", result.answer.replace('\n', "\n   "));
    }
    println!();
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("rank\tid\tsimilarity\tquery\tanswer\tpinned_at\tcleaned_input\tcleaned_saved");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{:.3}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            tsv_field(&m.id),
            m.similarity,
            tsv_field(&m.query),
            tsv_field(&m.answer),
            tsv_field(&m.pinned_at),
            m.debug.cleaned_input,
            m.debug.cleaned_saved,
        );
    }
}

/// Replace tabs and line breaks so a value stays in one TSV cell
pub(crate) fn tsv_field(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
