use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// The five dependency names singled out in the tech-stack section.
pub const KEY_DEPENDENCIES: [&str; 5] = [
    "react-native-image-picker",
    "react-native-image-resizer",
    "react-native-fs",
    "react-native-share",
    "react-native-slider",
];

/// Parsed `package.json` metadata. All fields are optional in the source
/// document; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Application name.
    pub name: Option<String>,

    /// Application version string.
    pub version: Option<String>,

    /// Dependency name to version-string mapping.
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
}

impl Manifest {
    /// Loads the manifest at `path`.
    ///
    /// A missing file is not an error: it returns `Ok(None)` and the caller
    /// skips manifest-derived output. Any other read failure, or a file that
    /// exists but is not valid JSON, is fatal.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no manifest file");
                return Ok(None);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read manifest: {}", path.display()));
            }
        };

        let manifest = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        Ok(Some(manifest))
    }

    /// Looks up the version string recorded for `name`.
    #[must_use]
    pub fn dependency_version(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }
}
