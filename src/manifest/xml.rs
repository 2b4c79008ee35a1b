//! XML packaging manifest (`extension.vsixmanifest`) model.
//!
//! The document follows the VSX schema: a `PackageManifest` root with a
//! `Metadata` block (identity and gallery information), installation
//! targets, dependencies, and asset declarations. Only the elements this
//! crate consumes are modeled; unknown elements and attributes are
//! ignored by the deserializer.

use anyhow::Result;
use serde::Deserialize;

/// The root `PackageManifest` element of a VSIX packaging manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageManifest {
    /// Schema version of the manifest document, e.g. `2.0.0`.
    #[serde(rename = "@Version")]
    pub version: String,
    #[serde(rename = "Metadata")]
    pub metadata: Metadata,
    #[serde(rename = "Installation")]
    pub installation: Option<Installation>,
    #[serde(rename = "Dependencies")]
    pub dependencies: Option<Dependencies>,
    #[serde(rename = "Assets")]
    pub assets: Option<Assets>,
}

/// Package identity and gallery metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    #[serde(rename = "Identity")]
    pub identity: Identity,
    #[serde(rename = "DisplayName")]
    pub display_name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Tags")]
    pub tags: Option<String>,
    #[serde(rename = "Categories")]
    pub categories: Option<String>,
    #[serde(rename = "GalleryFlags")]
    pub gallery_flags: Option<String>,
    #[serde(rename = "License")]
    pub license: Option<String>,
    #[serde(rename = "Icon")]
    pub icon: Option<String>,
    #[serde(rename = "Properties")]
    pub properties: Option<Properties>,
}

/// The `Identity` element naming the packaged extension.
#[derive(Debug, Clone, Deserialize)]
pub struct Identity {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Version")]
    pub version: String,
    #[serde(rename = "@Publisher")]
    pub publisher: String,
    #[serde(rename = "@Language")]
    pub language: Option<String>,
    #[serde(rename = "@TargetPlatform")]
    pub target_platform: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(rename = "Property", default)]
    pub property: Vec<Property>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Value")]
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Installation {
    #[serde(rename = "InstallationTarget", default)]
    pub installation_target: Vec<InstallationTarget>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstallationTarget {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dependencies {
    #[serde(rename = "Dependency", default)]
    pub dependency: Vec<Dependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Dependency {
    #[serde(rename = "@Id")]
    pub id: String,
    #[serde(rename = "@Version")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Assets {
    #[serde(rename = "Asset", default)]
    pub asset: Vec<Asset>,
}

/// One `Asset` declaration mapping an asset type to a path in the package.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    #[serde(rename = "@Type")]
    pub asset_type: String,
    #[serde(rename = "@Path")]
    pub path: String,
    #[serde(rename = "@Addressable")]
    pub addressable: Option<String>,
}

/// Parse the text of an `extension.vsixmanifest` document.
///
/// # Errors
///
/// Fails with the deserializer's error when the document is not well-formed
/// XML or is missing a required element such as `Metadata` or `Identity`.
pub fn parse_xml_manifest(text: &str) -> Result<PackageManifest> {
    Ok(quick_xml::de::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::parse_xml_manifest;

    const MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<PackageManifest Version="2.0.0" xmlns="http://schemas.microsoft.com/developer/vsx-schema/2011">
  <Metadata>
    <Identity Id="hello-world" Version="1.2.3" Publisher="acme" Language="en-US" />
    <DisplayName>Hello World</DisplayName>
    <Description>Says hello.</Description>
    <Tags>hello,demo</Tags>
    <Categories>Other</Categories>
    <GalleryFlags>Public</GalleryFlags>
    <Properties>
      <Property Id="Microsoft.VisualStudio.Code.Engine" Value="^1.80.0" />
    </Properties>
  </Metadata>
  <Installation>
    <InstallationTarget Id="Microsoft.VisualStudio.Code" />
  </Installation>
  <Dependencies />
  <Assets>
    <Asset Type="Microsoft.VisualStudio.Code.Manifest" Path="extension/package.json" Addressable="true" />
  </Assets>
</PackageManifest>"#;

    #[test]
    fn parses_a_full_manifest() {
        let manifest = parse_xml_manifest(MANIFEST).unwrap();
        assert_eq!(manifest.version, "2.0.0");

        let identity = &manifest.metadata.identity;
        assert_eq!(identity.id, "hello-world");
        assert_eq!(identity.version, "1.2.3");
        assert_eq!(identity.publisher, "acme");
        assert_eq!(identity.target_platform, None);

        assert_eq!(manifest.metadata.display_name.as_deref(), Some("Hello World"));

        let properties = manifest.metadata.properties.unwrap();
        assert_eq!(properties.property[0].id, "Microsoft.VisualStudio.Code.Engine");

        let assets = manifest.assets.unwrap();
        assert_eq!(assets.asset.len(), 1);
        assert_eq!(assets.asset[0].path, "extension/package.json");
    }

    #[test]
    fn parses_a_minimal_manifest() {
        let manifest = parse_xml_manifest(
            r#"<PackageManifest Version="2.0.0">
                 <Metadata>
                   <Identity Id="x" Version="0.0.1" Publisher="p" />
                 </Metadata>
               </PackageManifest>"#,
        )
        .unwrap();
        assert!(manifest.installation.is_none());
        assert!(manifest.assets.is_none());
    }

    #[test]
    fn rejects_malformed_xml() {
        assert!(parse_xml_manifest("<PackageManifest").is_err());
    }

    #[test]
    fn rejects_a_manifest_without_identity() {
        let result = parse_xml_manifest(
            r#"<PackageManifest Version="2.0.0"><Metadata /></PackageManifest>"#,
        );
        assert!(result.is_err());
    }
}
