// API client module: a small blocking HTTP client that submits the shipment
// CSV to the pharmacy-pos endpoint as a multipart form and hands back the
// server's structured verdict. It is intentionally synchronous: one file,
// one request, one response.

use anyhow::{Context, Result};
use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

/// Holds a reqwest blocking client and the upload endpoint. The endpoint is
/// the full URL of the import route, not a base to be joined against.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
}

/// Server verdict for an upload. The payload is opaque to this program:
/// beyond the `success` flag it is only routed to the console. Every section
/// the backend may omit is optional so a terse response still parses.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub msg: String,
    pub shipping_order: Option<ShippingOrder>,
    pub summary: Option<UploadSummary>,
    pub error: Option<String>,
    pub errors: Option<Vec<String>>,
}

/// The shipping order the server created from the uploaded line items.
/// `soid` and `totalAmount` are kept as `serde_json::Value` because the
/// backend does not pin down whether they arrive as numbers or strings.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOrder {
    pub soid: serde_json::Value,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub item_count: u64,
    pub total_amount: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
}

/// Per-item accounting of the import on the server side.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UploadSummary {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub success_count: u64,
    #[serde(default)]
    pub fail_count: u64,
    pub errors: Option<Vec<String>>,
}

impl ApiClient {
    /// Create an ApiClient for the given endpoint. The address must start
    /// with "http"; anything else is a configuration error, caught here
    /// before any file processing happens.
    pub fn new(endpoint: &str) -> Result<Self> {
        if !endpoint.starts_with("http") {
            anyhow::bail!("invalid API address: {}", endpoint);
        }
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// POST the CSV file as multipart/form-data. The file content goes out
    /// as the "file" field; when a default supplier id is given it is added
    /// exactly once as the "defaultSupplierId" text field.
    ///
    /// Any response with a parseable JSON body is returned as-is. A
    /// `success: false` verdict is the server's answer, not a fault of this
    /// program. Only a request that could not be sent, or a body that is not
    /// the expected JSON, becomes an error.
    pub fn post_csv_file(
        &self,
        csv_path: &Path,
        default_supplier_id: Option<&str>,
    ) -> Result<UploadResponse> {
        let file = File::open(csv_path)
            .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
        let length = file
            .metadata()
            .with_context(|| format!("Failed to stat CSV file: {}", csv_path.display()))?
            .len();
        let file_name = csv_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.csv");

        // Sized part so reqwest can set Content-Length for the whole form.
        let part = multipart::Part::reader_with_length(file, length)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .unwrap();
        let mut form = multipart::Form::new().part("file", part);
        if let Some(id) = default_supplier_id {
            form = form.text("defaultSupplierId", id.to_string());
        }

        let res = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .context("No response from API")?;

        let status = res.status();
        let body: UploadResponse = res
            .json()
            .with_context(|| format!("Parsing API response (status {})", status))?;
        Ok(body)
    }
}
