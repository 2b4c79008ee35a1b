//! High-level VSIX package reading.

use std::path::Path;

use anyhow::{Result, anyhow, bail};

use super::archive::read_zip;
use crate::manifest::{ExtensionManifest, PackageManifest, UnverifiedManifest};
use crate::manifest::{parse_xml_manifest, validate_manifest_for_packaging};

/// Name of the XML packaging manifest at the root of every VSIX.
const VSIX_MANIFEST_ENTRY: &str = "extension.vsixmanifest";

/// The two manifests carried by a VSIX package.
#[derive(Debug, Clone)]
pub struct VsixPackage {
    /// The validated JSON extension manifest (`extension/package.json`).
    pub manifest: ExtensionManifest,
    /// The parsed XML packaging manifest (`extension.vsixmanifest`).
    pub xml_manifest: PackageManifest,
}

/// Map a logical extension file name to its path inside the package.
///
/// Extension files live under the `extension/` root of the archive,
/// e.g. `package.json` maps to `extension/package.json`.
pub fn vsix_entry_path(name: &str) -> String {
    format!("extension/{name}")
}

/// Read a VSIX package and return its parsed-and-validated manifests.
///
/// Exactly two entries are extracted from the archive (matched
/// case-insensitively): the JSON extension manifest at
/// `extension/package.json` and the XML packaging manifest at
/// `extension.vsixmanifest`.
///
/// # Errors
///
/// * "Manifest not found" when the package has no JSON manifest entry.
/// * "VSIX manifest not found" when the package has no XML manifest entry.
/// * JSON syntax errors and XML parse errors propagate as produced.
/// * A packaging-validation failure is reported as
///   "Invalid extension VSIX manifest: {original message}".
/// * Archive open and entry decode failures propagate from [`read_zip`].
pub async fn read_vsix_package(path: &Path) -> Result<VsixPackage> {
    let manifest_entry = vsix_entry_path("package.json");

    let map = read_zip(path, |name| {
        name == manifest_entry || name == VSIX_MANIFEST_ENTRY
    })
    .await?;

    let Some(raw_manifest) = map.get(&manifest_entry) else {
        bail!("Manifest not found");
    };

    let Some(raw_xml_manifest) = map.get(VSIX_MANIFEST_ENTRY) else {
        bail!("VSIX manifest not found");
    };

    let manifest: UnverifiedManifest = serde_json::from_slice(raw_manifest)?;

    let manifest = validate_manifest_for_packaging(manifest)
        .map_err(|err| anyhow!("Invalid extension VSIX manifest: {err}"))?;

    let xml_manifest = parse_xml_manifest(std::str::from_utf8(raw_xml_manifest)?)?;

    Ok(VsixPackage { manifest, xml_manifest })
}

#[cfg(test)]
mod tests {
    use super::vsix_entry_path;

    #[test]
    fn entry_paths_are_rooted_under_extension() {
        assert_eq!(vsix_entry_path("package.json"), "extension/package.json");
        assert_eq!(vsix_entry_path("readme.md"), "extension/readme.md");
    }
}
