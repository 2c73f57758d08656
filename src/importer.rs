// modport/src/importer.rs
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ImportError;

/// Name of the manifest file [`ManifestImporter`] looks for inside a
/// package directory.
pub const MANIFEST_FILE: &str = "package.json";

/// Loads a resolved target and hands back its export.
///
/// The resolver passes bare candidate names for local attempts and
/// absolute paths (global root joined with the candidate) for global
/// attempts. Implementations decide what "loading" means: reading a
/// manifest, dlopening a shared object, looking up a registry entry.
/// They must report a missing target as [`ImportError::NotFound`] and
/// every other failure as [`ImportError::Other`].
#[allow(async_fn_in_trait)]
pub trait ModuleImporter {
    type Export;

    async fn import(&self, target: &Path) -> Result<Self::Export, ImportError>;
}

/// Manifest of a plugin package, the npm `package.json` shape. Unknown
/// fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Entry point the host should load, relative to the package dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// [`ModuleImporter`] that treats a module as a package directory and
/// its export as the parsed [`PluginManifest`] inside it.
///
/// Relative targets resolve against the configured local packages
/// directory; absolute targets are used as given. A missing package
/// directory or manifest file is `NotFound`; an unreadable or
/// unparsable manifest is fatal, since the package exists but is
/// broken.
#[derive(Debug, Clone)]
pub struct ManifestImporter {
    packages_dir: PathBuf,
}

impl ManifestImporter {
    pub fn new(packages_dir: impl Into<PathBuf>) -> Self {
        Self {
            packages_dir: packages_dir.into(),
        }
    }

    fn package_dir(&self, target: &Path) -> PathBuf {
        if target.is_absolute() {
            target.to_path_buf()
        } else {
            self.packages_dir.join(target)
        }
    }
}

impl ModuleImporter for ManifestImporter {
    type Export = PluginManifest;

    async fn import(&self, target: &Path) -> Result<PluginManifest, ImportError> {
        let manifest_path = self.package_dir(target).join(MANIFEST_FILE);
        debug!("Reading plugin manifest: {}", manifest_path.display());

        let bytes = match tokio::fs::read(&manifest_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ImportError::NotFound(target.display().to_string()));
            }
            Err(e) => return Err(ImportError::other(e)),
        };

        serde_json::from_slice(&bytes).map_err(ImportError::other)
    }
}
