use std::path::PathBuf;

use clap::Parser;

/// Generate Catppuccin color schemes for the ranger file manager.
#[derive(Parser, Debug)]
#[command(name = "ranger-themer", version, about)]
pub struct Args {
    /// Path to the base configuration template
    #[arg(short, long, default_value = "templates/base_config.py")]
    pub template: PathBuf,

    /// Directory where generated schemes are written (created if absent)
    #[arg(short, long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Generate only these flavors (by key, e.g. `latte`); all if omitted
    #[arg(short, long)]
    pub flavor: Vec<String>,

    /// Print a colored terminal preview of each quantized palette
    #[arg(long)]
    pub preview: bool,
}
