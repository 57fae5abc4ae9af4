use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[cfg(feature = "png")]
mod gradient;
#[cfg(feature = "png")]
mod icon_gen;
#[cfg(feature = "png")]
mod manifest;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-icons",
    about = "Generate placeholder gradient icons for a browser extension"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    pub output: PathBuf,

    /// Icon sizes to generate, as used by the manifest "icons" key.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = vec![16, 48, 128]
    )]
    pub sizes: Vec<u32>,

    /// Gradient color at the top row (CSS color format).
    #[clap(long, value_name = "COLOR", default_value = "#667eea")]
    pub from: String,

    /// Gradient color approached at the bottom row (CSS color format).
    #[clap(long, value_name = "COLOR", default_value = "#764ba2")]
    pub to: String,

    /// Also write <DIR>/icons.json, an "icons" snippet for manifest.json.
    #[clap(long)]
    pub manifest: bool,
}

/// Printed instead of generating anything when the build carries no PNG
/// encoder (compiled with --no-default-features).
#[cfg(any(not(feature = "png"), test))]
const NO_PNG_HELP: &str = "\
PNG support is not compiled into this build. Rebuild with: cargo build --features png

Alternatively, you can:
1. Use the icon.svg file with an online converter
2. Create simple colored squares as placeholders
3. Skip icons for now (extension will work but show a warning)
";

fn main() -> Result<()> {
    let args = Args::parse();

    run(args)
}

#[cfg(feature = "png")]
fn run(args: Args) -> Result<()> {
    icon_gen::generate_icons(&args)
}

#[cfg(not(feature = "png"))]
fn run(_args: Args) -> Result<()> {
    print!("{NO_PNG_HELP}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_png_help_lists_three_alternatives() {
        for n in ["1.", "2.", "3."] {
            assert!(NO_PNG_HELP.contains(n), "missing alternative {n}");
        }
    }
}
