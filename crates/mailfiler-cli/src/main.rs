//! Mailfiler dashboard demo
//!
//! Signs in with a device code, pulls messages from the demo folder,
//! classifies them, and renders the Tailwind dashboard from the template.

use anyhow::Context;
use chrono::Utc;
use mailfiler_cli::config;
use mailfiler_core::{classify, format_received, read_template, render_dashboard, ReportRow};
use mailfiler_graph::GraphMailClient;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mailfiler_cli::init_tracing();

    println!("Starting Microsoft Graph email filer demo...");

    // A missing template must fail before any network activity
    let template = read_template(Path::new(config::TEMPLATE_FILE))?;

    let token = mailfiler_cli::auth_provider().acquire().await?;
    let client = GraphMailClient::new(token);

    let me = client.get_me().await?;
    println!("Signed in as: {}", me.display_identity());

    let folder_id = client
        .find_folder_id(config::DEMO_FOLDER_NAME)
        .await?
        .with_context(|| {
            format!(
                "Folder '{}' not found in your mailbox",
                config::DEMO_FOLDER_NAME
            )
        })?;

    let messages = client.list_messages(&folder_id, config::TOP).await?;
    println!("Fetched {} message(s).", messages.len());

    let rows: Vec<ReportRow> = messages
        .iter()
        .map(|m| ReportRow {
            status: classify(m.subject.as_deref(), m.has_attachments),
            subject: m.subject.clone().unwrap_or_default(),
            filed_dir: config::DEMO_FOLDER_NAME.to_string(),
            timestamp: format_received(m.received_date_time.as_deref().unwrap_or("")),
        })
        .collect();

    let run_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let html = render_dashboard(&template, &rows, &run_time);

    fs::write(config::OUT_FILE, html)?;
    open::that(config::OUT_FILE)?;
    println!("Dashboard saved to: {}", config::OUT_FILE);

    Ok(())
}
