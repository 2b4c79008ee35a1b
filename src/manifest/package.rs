//! JSON extension manifest model and packaging validation.

use std::collections::HashMap;

use anyhow::{Result, bail};
use semver::Version;
use serde::{Deserialize, Serialize};

/// The raw parsed `package.json`, before any packaging rule has run.
///
/// Every field is optional here; nothing about the shape is guaranteed
/// until the manifest passes [`validate_manifest_for_packaging`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnverifiedManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub engines: HashMap<String, String>,
    pub display_name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub icon: Option<String>,
    pub license: Option<String>,
}

/// An extension manifest that has passed packaging validation.
///
/// The identity fields are guaranteed present and well-formed: `name`
/// and `publisher` are valid identifiers, `version` is a full semver
/// version, and `engine` is the non-empty `engines.vscode` entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionManifest {
    pub name: String,
    pub publisher: String,
    pub version: Version,
    /// The `engines.vscode` compatibility range, e.g. `^1.80.0`.
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl ExtensionManifest {
    /// The fully-qualified extension identifier, `publisher.name`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.publisher, self.name)
    }
}

/// Check a raw manifest against the packaging rules and promote it to an
/// [`ExtensionManifest`].
///
/// Rules:
/// - `name` and `publisher` are required identifiers: an ASCII letter or
///   digit followed by letters, digits, or hyphens.
/// - `version` is required and must be a full semver version.
/// - `engines.vscode` is required and must be non-empty.
///
/// # Errors
///
/// Fails with a message naming the missing or malformed field.
pub fn validate_manifest_for_packaging(manifest: UnverifiedManifest) -> Result<ExtensionManifest> {
    let Some(name) = manifest.name else {
        bail!("Manifest missing field: name");
    };
    if !is_valid_identifier(&name) {
        bail!("Invalid extension name '{name}'");
    }

    let Some(publisher) = manifest.publisher else {
        bail!("Manifest missing field: publisher");
    };
    if !is_valid_identifier(&publisher) {
        bail!("Invalid publisher name '{publisher}'");
    }

    let Some(raw_version) = manifest.version else {
        bail!("Manifest missing field: version");
    };
    let Ok(version) = Version::parse(&raw_version) else {
        bail!("Invalid extension version '{raw_version}'");
    };

    let engine = match manifest.engines.get("vscode") {
        Some(engine) if !engine.is_empty() => engine.clone(),
        _ => bail!("Manifest missing field: engines.vscode"),
    };

    Ok(ExtensionManifest {
        name,
        publisher,
        version,
        engine,
        display_name: manifest.display_name,
        description: manifest.description,
        categories: manifest.categories,
        keywords: manifest.keywords,
        icon: manifest.icon,
        license: manifest.license,
    })
}

/// Extension and publisher names: an ASCII letter or digit followed by
/// letters, digits, or hyphens.
fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}
