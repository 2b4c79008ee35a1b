//! Main entry point for the vsixread CLI application.
//!
//! This binary reads a VSIX package, validates its manifests, and prints
//! the extension's metadata.

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use vsixread::{Cli, VsixPackage, read_vsix_package};

/// Application entry point.
///
/// Parses command-line arguments, reads the package, and prints either a
/// human-readable summary or the validated manifest as JSON.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let package = read_vsix_package(Path::new(&cli.file)).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&package.manifest)?);
        return Ok(());
    }

    print_summary(&package, &cli);

    if cli.xml {
        print_xml_details(&package);
    }

    Ok(())
}

/// Print the extension's metadata summary.
fn print_summary(package: &VsixPackage, cli: &Cli) {
    let manifest = &package.manifest;

    if cli.quiet {
        println!("{} {}", manifest.id(), manifest.version);
        return;
    }

    println!("{:>12}  {}", "Extension", manifest.id());
    println!("{:>12}  {}", "Version", manifest.version);
    println!("{:>12}  {}", "Publisher", manifest.publisher);
    println!("{:>12}  {}", "Engine", manifest.engine);

    if let Some(display_name) = &manifest.display_name {
        println!("{:>12}  {}", "Name", display_name);
    }
    if let Some(description) = &manifest.description {
        println!("{:>12}  {}", "Description", description);
    }
    if !manifest.categories.is_empty() {
        println!("{:>12}  {}", "Categories", manifest.categories.join(", "));
    }
}

/// Print identity and asset details from the XML packaging manifest.
fn print_xml_details(package: &VsixPackage) {
    let xml = &package.xml_manifest;
    let identity = &xml.metadata.identity;

    println!();
    println!("{:>12}  {}", "Identity", identity.id);
    println!("{:>12}  {}", "XML version", identity.version);

    if let Some(target_platform) = &identity.target_platform {
        println!("{:>12}  {}", "Platform", target_platform);
    }

    if let Some(assets) = &xml.assets {
        println!("{:>12}", "Assets");
        for asset in &assets.asset {
            println!("              {} -> {}", asset.asset_type, asset.path);
        }
    }
}
