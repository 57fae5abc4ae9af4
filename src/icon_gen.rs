use crate::{gradient, manifest, Args};
use anyhow::{Context, Result};
use image::{ImageOutputFormat, Rgb};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
};

pub fn generate_icons(args: &Args) -> Result<()> {
    let from = gradient::parse_color(&args.from, gradient::DEFAULT_FROM);
    let to = gradient::parse_color(&args.to, gradient::DEFAULT_TO);

    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    println!("Generating placeholder icons...");
    for &size in &args.sizes {
        let path = args.output.join(format!("icon{size}.png"));
        write_icon(size, from, to, &path)?;
        println!("  ✓ Generated {}", path.display());
    }

    if args.manifest {
        let path = manifest::write_icons_json(&args.output, &args.sizes)?;
        println!("  ✓ Generated {}", path.display());
    }

    println!();
    println!("All icons created successfully!");
    println!("You can replace these with custom designs later.");

    Ok(())
}

fn write_icon(size: u32, from: Rgb<u8>, to: Rgb<u8>, path: &Path) -> Result<()> {
    if size == 0 {
        anyhow::bail!("Icon size must be a positive integer");
    }

    let icon = gradient::render(size, from, to);
    let mut out_file = BufWriter::new(
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    icon.write_to(&mut out_file, ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    out_file.flush()?;

    Ok(())
}
