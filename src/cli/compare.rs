use clap::Args;

use crate::cli::{OutputFormat, WeightArgs};
use crate::core::query::NormalizedQuery;
use crate::lexicon::store::Lexicon;
use crate::matching::engine::ScoringWeights;
use crate::matching::scoring::SimilarityScore;
use crate::parsing::normalize::normalize;

#[derive(Args)]
pub struct CompareArgs {
    /// First query
    #[arg(required = true)]
    pub query_a: String,

    /// Second query
    #[arg(required = true)]
    pub query_b: String,

    #[command(flatten)]
    pub weights: WeightArgs,
}

/// Execute the compare command
///
/// # Errors
///
/// Returns an error if the weights are invalid or output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, lexicon: &Lexicon) -> anyhow::Result<()> {
    let weights = args.weights.to_weights()?;

    let cleaned_a = normalize(&args.query_a);
    let cleaned_b = normalize(&args.query_b);
    let score = SimilarityScore::calculate_with_weights(&cleaned_a, &cleaned_b, lexicon, &weights);

    match format {
        OutputFormat::Text => print_text_comparison(&args, &cleaned_a, &cleaned_b, &score, &weights),
        OutputFormat::Json => {
            print_json_comparison(&args, &cleaned_a, &cleaned_b, &score, &weights)?;
        }
        OutputFormat::Tsv => print_tsv_comparison(&score),
    }

    Ok(())
}

fn print_text_comparison(
    args: &CompareArgs,
    cleaned_a: &NormalizedQuery,
    cleaned_b: &NormalizedQuery,
    score: &SimilarityScore,
    weights: &ScoringWeights,
) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nQuery A: {}", args.query_a);
    println!("  Normalized: \"{cleaned_a}\" ({} tokens)", cleaned_a.len());
    println!("  Question: {}", cleaned_a.is_question());

    println!("\nQuery B: {}", args.query_b);
    println!("  Normalized: \"{cleaned_b}\" ({} tokens)", cleaned_b.len());
    println!("  Question: {}", cleaned_b.is_question());

    println!("\nSimilarity Signals:");
    println!(
        "  Synonym Jaccard: {:.2}% (weight {:.0}%)",
        score.synonym_jaccard * 100.0,
        weights.synonym_jaccard * 100.0
    );
    println!(
        "  Word Match: {:.2}% (weight {:.0}%)",
        score.word_match * 100.0,
        weights.word_match * 100.0
    );
    println!(
        "  Content Words: {:.2}% (weight {:.0}%)",
        score.important_words * 100.0,
        weights.important_words * 100.0
    );
    println!(
        "  Intent Bonus: {:.2}% (weight {:.0}%)",
        score.intent_bonus * 100.0,
        weights.intent * 100.0
    );
    println!("  Composite Score: {:.2}%", score.composite * 100.0);
}

fn print_json_comparison(
    args: &CompareArgs,
    cleaned_a: &NormalizedQuery,
    cleaned_b: &NormalizedQuery,
    score: &SimilarityScore,
    weights: &ScoringWeights,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query_a": {
            "text": args.query_a,
            "normalized": cleaned_a.to_string(),
            "tokens": cleaned_a,
            "is_question": cleaned_a.is_question(),
        },
        "query_b": {
            "text": args.query_b,
            "normalized": cleaned_b.to_string(),
            "tokens": cleaned_b,
            "is_question": cleaned_b.is_question(),
        },
        "score": score,
        "weights": weights,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(score: &SimilarityScore) {
    println!("synonym_jaccard\tword_match\timportant_words\tintent_bonus\tcomposite");
    println!(
        "{:.4}\t{:.4}\t{:.4}\t{:.4}\t{:.4}",
        score.synonym_jaccard,
        score.word_match,
        score.important_words,
        score.intent_bonus,
        score.composite,
    );
}
