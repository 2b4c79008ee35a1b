//! VSIX package reading.
//!
//! A VSIX package is a zip archive carrying two metadata documents that
//! must both be present for the package to be usable:
//!
//! - `extension/package.json`: the JSON extension manifest
//! - `extension.vsixmanifest`: the XML packaging manifest
//!
//! ## Architecture
//!
//! The module is organized into two components:
//!
//! - [`archive`]: streaming extraction of selected entries from the zip
//! - [`reader`]: entry lookup, parsing, and cross-validation of the two
//!   manifests
//!
//! The archive scan is sequential and lazy: entries are visited one at a
//! time and only the two manifest entries are ever decompressed, so
//! reading the metadata of a large package stays cheap.

mod archive;
mod reader;

pub use archive::read_zip;
pub use reader::{VsixPackage, read_vsix_package, vsix_entry_path};
