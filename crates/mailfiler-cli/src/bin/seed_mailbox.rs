//! Seeds the demo folder with test messages from a CSV
//!
//! Each row becomes one message created directly in the folder with
//! isDraft false, so it displays as received. Row failures are counted
//! and logged but never stop the batch.

use anyhow::bail;
use mailfiler_cli::config;
use mailfiler_core::{read_seed_rows, tally_seed_outcomes};
use mailfiler_graph::GraphMailClient;
use std::path::Path;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mailfiler_cli::init_tracing();

    println!("Starting test email creation...\n");

    // Fail on a missing CSV before any network activity
    let csv_path = Path::new(config::CSV_FILE);
    if !csv_path.is_file() {
        bail!("CSV file '{}' not found", csv_path.display());
    }

    let token = mailfiler_cli::auth_provider().acquire().await?;
    let client = GraphMailClient::new(token);

    let folder_id = match client.find_folder_id(config::DEMO_FOLDER_NAME).await? {
        Some(id) => id,
        None => bail!(
            "Folder '{}' not found. Please create this folder in your mailbox first.",
            config::DEMO_FOLDER_NAME
        ),
    };

    println!("Found folder: {}", config::DEMO_FOLDER_NAME);
    println!("Reading CSV: {}\n", csv_path.display());

    let rows = read_seed_rows(csv_path)?;

    let mut outcomes = Vec::with_capacity(rows.len());

    for row in &rows {
        let preview: String = row.subject.chars().take(50).collect();
        println!("Creating: {}...", preview);

        let result = client.create_message(&folder_id, &row.to_message()).await;
        match &result {
            Ok(_) => println!("  ✓ Created successfully"),
            Err(e) => {
                warn!("Failed to create '{}': {}", row.subject, e);
                println!("  ✗ Failed");
            }
        }
        outcomes.push(result);
    }

    let report = tally_seed_outcomes(outcomes);

    println!("\n{}", "=".repeat(50));
    println!("COMPLETE!");
    println!("  Created: {} emails", report.created);
    println!("  Failed:  {} emails", report.failed);
    println!("{}", "=".repeat(50));

    Ok(())
}
