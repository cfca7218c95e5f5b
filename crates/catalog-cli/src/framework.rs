//! Host project framework detection.
//!
//! Catalog adapts its defaults to the project it lives in. The framework is
//! read from the project's `package.json`: a `react-scripts` dependency means
//! Create React App, a `next` dependency means next.js.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::ResolveError;

/// Maximum allowed size for package.json files (10MB)
const MAX_PACKAGE_JSON_SIZE: u64 = 10 * 1024 * 1024;

/// Frameworks Catalog knows how to integrate with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameworkKind {
    /// Project bootstrapped with `react-scripts`
    CreateReactApp,
    /// next.js project
    Next,
    /// Anything else, including projects without a `package.json`
    Unknown,
}

impl FrameworkKind {
    /// Identifier as it appears in serialized output, e.g. `CREATE_REACT_APP`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateReactApp => "CREATE_REACT_APP",
            Self::Next => "NEXT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable name for status output. Empty for [`FrameworkKind::Unknown`].
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CreateReactApp => "Create React App",
            Self::Next => "next.js (support is experimental)",
            Self::Unknown => "",
        }
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for FrameworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The parts of `package.json` that framework detection looks at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    /// Production dependencies
    #[serde(default)]
    pub dependencies: HashMap<String, String>,
    /// Development dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    /// Classify the project by its dependencies.
    ///
    /// `react-scripts` wins over `next` when both are present.
    pub fn framework(&self) -> FrameworkKind {
        if self.depends_on("react-scripts") {
            FrameworkKind::CreateReactApp
        } else if self.depends_on("next") {
            FrameworkKind::Next
        } else {
            FrameworkKind::Unknown
        }
    }
}

/// Detect the framework of the project rooted at `root`.
///
/// A missing `package.json` is not an error and yields
/// [`FrameworkKind::Unknown`].
///
/// # Errors
///
/// Returns [`ResolveError::PackageJson`] when the file exists but cannot be
/// read, is too large or is not valid JSON.
pub async fn detect_framework(root: &Path) -> Result<FrameworkKind, ResolveError> {
    let path = root.join("package.json");
    let to_error = |message: String| ResolveError::PackageJson {
        path: path.clone(),
        message,
    };

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no package.json, framework unknown");
            return Ok(FrameworkKind::Unknown);
        }
        Err(e) => return Err(to_error(e.to_string())),
    };

    if metadata.len() > MAX_PACKAGE_JSON_SIZE {
        return Err(to_error(format!(
            "file exceeds maximum size of {}MB",
            MAX_PACKAGE_JSON_SIZE / 1024 / 1024
        )));
    }

    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| to_error(e.to_string()))?;
    let manifest: PackageManifest =
        serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))?;

    let framework = manifest.framework();
    tracing::debug!(%framework, "detected framework");
    Ok(framework)
}
