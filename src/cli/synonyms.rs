use clap::Args;

use crate::cli::OutputFormat;
use crate::lexicon::store::Lexicon;

#[derive(Args)]
pub struct SynonymsArgs {
    /// Word to look up
    #[arg(required = true)]
    pub word: String,
}

/// Execute the synonyms command
///
/// # Errors
///
/// Returns an error if output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SynonymsArgs, format: OutputFormat, lexicon: &Lexicon) -> anyhow::Result<()> {
    let word = args.word.trim().to_lowercase();
    let synonyms = lexicon.synonyms_of(&word);

    let mut related: Vec<&str> = lexicon.related_via(&word).into_iter().collect();
    related.sort_unstable();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "word": word,
                "synonyms": synonyms,
                "related": related,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("Word: {word}");
            if synonyms.is_empty() {
                println!("  Synonyms: (none)");
            } else {
                println!("  Synonyms: {}", synonyms.join(", "));
            }
            if related.is_empty() {
                println!("  Related: (none)");
            } else {
                println!("  Related: {}", related.join(", "));
            }
        }
        OutputFormat::Tsv => {
            println!("word\tkind\tsynonym");
            for s in synonyms {
                println!("{word}\tforward\t{s}");
            }
            for r in &related {
                println!("{word}\treverse\t{r}");
            }
        }
    }

    Ok(())
}
