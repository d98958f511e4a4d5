//! Details command implementation

use anyhow::{Context, Result};
use bookscout_core::{BookDetailRecord, Catalog, CoverSize};

/// Look up one book by ISBN and print its details
pub async fn details(catalog: &Catalog, isbn: &str, json: bool) -> Result<()> {
    let record = catalog
        .resolve(isbn)
        .await
        .with_context(|| format!("Failed to fetch book details for ISBN {}", isbn.trim()))?
        .with_context(|| format!("No details found for ISBN {}", isbn.trim()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print_record(&record);
    }

    Ok(())
}

fn print_record(record: &BookDetailRecord) {
    println!("Title:       {}", record.title().unwrap_or("(untitled)"));
    if let Some(subtitle) = record.subtitle() {
        println!("Subtitle:    {}", subtitle);
    }

    let authors = record.authors();
    if !authors.is_empty() {
        println!("Authors:     {}", authors.join(", "));
    }

    let publishers = record.publishers();
    if !publishers.is_empty() {
        println!("Publishers:  {}", publishers.join(", "));
    }

    if let Some(date) = record.publish_date() {
        println!("Published:   {}", date);
    }
    if let Some(pages) = record.number_of_pages() {
        println!("Pages:       {}", pages);
    }
    if let Some(cover) = record.cover_url(CoverSize::Medium) {
        println!("Cover:       {}", cover);
    }
    if let Some(url) = record.url() {
        println!("URL:         {}", url);
    }
}
