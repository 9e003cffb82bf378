use std::path::PathBuf;

use clap::Args;

use crate::cli::match_query::tsv_field;
use crate::cli::OutputFormat;
use crate::core::record::StoredRecord;
use crate::store::records::{RecordStore, DEFAULT_STORE_FILE};

#[derive(Args)]
pub struct ListArgs {
    /// Path to the pinned record store (JSON array)
    #[arg(long, default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if output cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ListArgs, format: OutputFormat) -> anyhow::Result<()> {
    let store = RecordStore::load(&args.store);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "total": store.len(),
                "queries": store.records,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_text_list(&store),
        OutputFormat::Tsv => {
            println!("id\tquery\tanswer\tpinned_at");
            for r in &store.records {
                println!(
                    "{}\t{}\t{}\t{}",
                    tsv_field(&r.id),
                    tsv_field(&r.query),
                    tsv_field(&r.answer),
                    tsv_field(&r.pinned_at)
                );
            }
        }
    }

    Ok(())
}

fn print_text_list(store: &RecordStore) {
    println!("Pinned queries ({}):", store.len());

    for record in &store.records {
        println!("\n  [{}] {}", record.id, record.query);
        println!("    Pinned: {}", pinned_label(record));
    }
}

fn pinned_label(record: &StoredRecord) -> String {
    match record.pinned_at_time() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None if record.pinned_at.is_empty() => "unknown".to_string(),
        None => record.pinned_at.clone(),
    }
}
