//! Search command implementation

use anyhow::{bail, Result};
use bookscout_core::{Catalog, SearchMode, SearchOutcome};

/// Search the catalog and print the outcome
pub async fn search(catalog: &Catalog, text: &str, mode: SearchMode, json: bool) -> Result<()> {
    tracing::debug!("Searching by {} for {:?}", mode, text);

    let outcome = catalog.search(text, mode).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, text.trim(), mode);
    }

    if let SearchOutcome::Error { message } = outcome {
        bail!(message);
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, text: &str, mode: SearchMode) {
    match outcome {
        SearchOutcome::Results { books } => {
            let noun = if books.len() == 1 { "book" } else { "books" };
            println!("Found {} {} for {} \"{}\":", books.len(), noun, mode, text);
            for (i, book) in books.iter().enumerate() {
                println!();
                println!("{:>3}. {}", i + 1, book.title);
                println!("     Authors:   {}", book.authors);
                println!("     Publisher: {}", book.publisher);
                println!("     Key:       {}", book.id);
                println!("     Cover:     {}", book.cover_url);
            }
        }
        // Errors go to stderr through the returned error
        SearchOutcome::Error { .. } => {}
        other => {
            if let Some(notice) = other.notice() {
                println!("{}", notice);
            }
        }
    }
}
