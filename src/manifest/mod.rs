//! Extension manifest models and packaging validation.
//!
//! A VSIX package carries two metadata documents:
//!
//! - [`package`]: the JSON `package.json` manifest and the packaging
//!   rules that promote an [`UnverifiedManifest`] to an
//!   [`ExtensionManifest`]
//! - [`xml`]: the typed model of the XML `extension.vsixmanifest`
//!   document

mod package;
mod xml;

pub use package::{ExtensionManifest, UnverifiedManifest, validate_manifest_for_packaging};
pub use xml::{
    Asset, Assets, Dependencies, Dependency, Identity, Installation, InstallationTarget, Metadata,
    PackageManifest, Properties, Property, parse_xml_manifest,
};
