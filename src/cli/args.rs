use clap::Parser;
use std::path::PathBuf;

use autocrop::core::params::DEFAULT_PADDING;

#[derive(Parser)]
#[command(name = "autocrop", version, about = "AUTOCROP CLI")]
pub struct CliArgs {
    /// Image file to crop in place (the file is overwritten)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Padding kept around the detected content, in pixels
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
