// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules into the read-validate-upload pipeline.
//
// Module responsibilities:
// - `cli`: Command-line flags (clap derive).
// - `import`: The core: row validation and result aggregation over the
//   shipment CSV.
// - `api`: Encapsulates the multipart HTTP upload and the server's
//   response payload.
// - `report`: Leveled colored console output.
// - `app`: The run sequence tying the above together.
//
// Keeping this separation means the validation core and the API client can
// be tested without going through the terminal front end.
pub mod api;
pub mod app;
pub mod cli;
pub mod import;
pub mod report;
