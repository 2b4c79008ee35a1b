//! # vsixread
//!
//! Read and validate extension metadata from VSIX packages.
//!
//! A VSIX package is a zip archive. This library pulls exactly two entries
//! out of it — the JSON extension manifest at `extension/package.json` and
//! the XML packaging manifest at `extension.vsixmanifest` — parses both,
//! runs packaging validation on the JSON manifest, and returns the pair.
//! The archive is scanned lazily, entry by entry, so only the two manifest
//! entries are ever decompressed.
//!
//! ## Features
//!
//! - Streaming zip-entry extraction with case-insensitive name matching
//! - Packaging validation of the extension manifest (identity fields,
//!   semver version, engine compatibility)
//! - Typed model of the XML packaging manifest
//! - All-or-nothing error semantics: a single failure aborts the read
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use vsixread::read_vsix_package;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let package = read_vsix_package(Path::new("extension.vsix")).await?;
//!
//!     println!("{} v{}", package.manifest.id(), package.manifest.version);
//!     println!("publisher: {}", package.xml_manifest.metadata.identity.publisher);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod manifest;
pub mod vsix;

pub use cli::Cli;
pub use manifest::{ExtensionManifest, PackageManifest, UnverifiedManifest};
pub use vsix::{VsixPackage, read_vsix_package, read_zip, vsix_entry_path};
