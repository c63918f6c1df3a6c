use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "rrastats.json";
pub const DEFAULT_RAW_OUT_PATH: &str = "eis_auto_out.json";

#[derive(Parser, Debug)]
#[command(
    name = "rrastats",
    version,
    about = "Aggregate statistics over RRA records served by EIS"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        default_value = DEFAULT_CONFIG_PATH,
        help = "Hjson configuration file providing host, apikey and x509cert"
    )]
    pub config: PathBuf,
    #[arg(
        long,
        default_value = DEFAULT_RAW_OUT_PATH,
        help = "Where the raw EIS response body is written"
    )]
    pub raw_out: PathBuf,
    #[arg(
        long,
        help = "Aggregate a previously saved EIS response instead of fetching"
    )]
    pub input: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = false,
        help = "Start every counter at -1 like the legacy rrastats script"
    )]
    pub legacy_count: bool,
}
