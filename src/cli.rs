use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csvpost",
    version,
    about = "Read a pharmacy shipment CSV and POST it to the pharmacy-pos API"
)]
pub struct Cli {
    #[arg(long, value_name = "FILE", help = "Path to the shipment CSV file")]
    pub csv: PathBuf,
    #[arg(long, value_name = "URL", help = "API endpoint address")]
    pub api: String,
    #[arg(
        long,
        value_name = "ID",
        help = "Default supplier id for line items without their own"
    )]
    pub supplier: Option<String>,
    #[arg(long, help = "Show debug output")]
    pub verbose: bool,
}
