// Application flow: config checks, read + validate the CSV, upload it,
// print the server's verdict. This is the sequence the binary runs once
// per invocation; `main` only maps its result to an exit code.

use crate::api::ApiClient;
use crate::cli::Cli;
use crate::import::{self, ImportResult};
use crate::report::Reporter;
use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn run(cli: &Cli, reporter: &Reporter) -> Result<()> {
    reporter.info("CSV import tool starting");
    reporter.debug(&format!("options: {:?}", cli));

    // Config checks come before any processing: a missing file or a bad
    // address should fail fast with a message naming the input.
    if !cli.csv.exists() {
        bail!("CSV file not found: {}", cli.csv.display());
    }
    reporter.info(&format!("using CSV file: {}", cli.csv.display()));

    let api = ApiClient::new(&cli.api)?;
    reporter.info(&format!("using API address: {}", cli.api));

    reporter.info("reading CSV file...");
    let result = import::read_file(&cli.csv)?;
    reporter.success(&format!(
        "CSV read complete, {} valid line items",
        result.items.len()
    ));
    report_read_summary(reporter, &result);

    reporter.info("uploading CSV file to API...");
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Uploading...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    let response = api.post_csv_file(&cli.csv, cli.supplier.as_deref());
    spinner.finish_and_clear();
    let response = response?;

    if !response.success {
        if let Some(detail) = &response.error {
            reporter.error(&format!("error detail: {}", detail));
        }
        if let Some(errors) = &response.errors {
            reporter.error("error list:");
            for error in errors {
                reporter.error(&format!("  {}", error));
            }
        }
        bail!("CSV file upload failed: {}", response.msg);
    }

    reporter.success("CSV file uploaded");
    reporter.divider();
    reporter.info("API response summary:");
    reporter.info(&format!("- message: {}", response.msg));
    if let Some(order) = &response.shipping_order {
        reporter.info(&format!("- order id: {}", plain(&order.soid)));
        reporter.info(&format!("- supplier: {}", order.supplier));
        reporter.info(&format!("- item count: {}", order.item_count));
        reporter.info(&format!(
            "- total amount: {}",
            order
                .total_amount
                .as_ref()
                .map(plain)
                .unwrap_or_else(|| "not provided".into())
        ));
        reporter.info(&format!("- created at: {}", order.created_at));
    }
    reporter.divider();
    if let Some(summary) = &response.summary {
        reporter.info("import summary:");
        reporter.info(&format!("- total items: {}", summary.total_items));
        reporter.info(&format!("- succeeded: {}", summary.success_count));
        reporter.info(&format!("- failed: {}", summary.fail_count));
        if let Some(errors) = &summary.errors {
            reporter.warn("errors occurred during import:");
            for error in errors {
                reporter.warn(&format!("  {}", error));
            }
        }
    }

    reporter.success("done");
    Ok(())
}

fn report_read_summary(reporter: &Reporter, result: &ImportResult) {
    reporter.debug("CSV data summary:");
    reporter.debug(&format!("- total rows: {}", result.total_rows));
    reporter.debug(&format!("- valid items: {}", result.items.len()));
    reporter.debug(&format!("- invalid rows: {}", result.errors.len()));

    if !result.errors.is_empty() {
        reporter.warn("CSV file contains invalid rows:");
        for error in &result.errors {
            reporter.warn(&format!("  row {}: {}", error.row_number, error.reason));
        }
    }
}

// JSON string values print with quotes through Display; strip them for the
// console summary.
fn plain(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
