//! Project layout configuration
//!
//! A `modforge.toml` in the project root overrides where modules are placed
//! and which file lists the registered providers. Every key is optional:
//!
//! ```toml
//! backend_root = "app/Modules"
//! frontend_root = "resources/js/modules"
//! registration_file = "bootstrap/providers.php"
//! namespace = "App\\Modules"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::naming::Identifiers;

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "modforge.toml";

/// Where generated modules live, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Parent directory of per-module backend roots
    pub backend_root: PathBuf,
    /// Parent directory of per-module frontend roots
    pub frontend_root: PathBuf,
    /// Central provider list patched by the registration step
    pub registration_file: PathBuf,
    /// Namespace prefix of generated backend classes
    pub namespace: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            backend_root: PathBuf::from("app/Modules"),
            frontend_root: PathBuf::from("resources/js/modules"),
            registration_file: PathBuf::from("bootstrap/providers.php"),
            namespace: "App\\Modules".to_string(),
        }
    }
}

/// A config bound to a project directory; turns identifiers into paths
#[derive(Debug, Clone)]
pub struct Layout {
    project_root: PathBuf,
    config: ScaffoldConfig,
}

impl Layout {
    pub fn new(project_root: impl Into<PathBuf>, config: ScaffoldConfig) -> Self {
        Self {
            project_root: project_root.into(),
            config,
        }
    }

    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    #[must_use]
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// `<project>/app/Modules/<Pascal>`
    #[must_use]
    pub fn backend_root(&self, ids: &Identifiers) -> PathBuf {
        self.project_root
            .join(&self.config.backend_root)
            .join(&ids.pascal)
    }

    /// `<project>/resources/js/modules/<kebab>`
    #[must_use]
    pub fn frontend_root(&self, ids: &Identifiers) -> PathBuf {
        self.project_root
            .join(&self.config.frontend_root)
            .join(&ids.kebab)
    }

    #[must_use]
    pub fn registration_file(&self) -> PathBuf {
        self.project_root.join(&self.config.registration_file)
    }

    /// `App\Modules\<Pascal>`
    #[must_use]
    pub fn module_namespace(&self, ids: &Identifiers) -> String {
        format!("{}\\{}", self.config.namespace.trim_end_matches('\\'), ids.pascal)
    }

    /// Fully-qualified reference written into the registration list
    #[must_use]
    pub fn provider_reference(&self, ids: &Identifiers) -> String {
        format!(
            "{}\\Providers\\{}ServiceProvider::class",
            self.module_namespace(ids),
            ids.pascal
        )
    }
}

/// Load a layout config from a TOML file
///
/// Returns `Ok(None)` if the file does not exist, `Err` if it exists but
/// cannot be read or parsed.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<ScaffoldConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

    let config: ScaffoldConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;

    Ok(Some(config))
}

/// Resolve which config file to use
///
/// Priority:
/// 1. Explicitly provided path (via CLI), if it exists
/// 2. `modforge.toml` in the project root
/// 3. None (defaults apply)
pub fn resolve_config_path(explicit_path: Option<&Path>, project_root: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    let detected = project_root.join(CONFIG_FILE_NAME);
    detected.exists().then_some(detected)
}

/// Resolve and load the config for a project, falling back to defaults
pub fn load_layout(explicit_path: Option<&Path>, project_root: &Path) -> anyhow::Result<Layout> {
    let config = match resolve_config_path(explicit_path, project_root) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading scaffold config");
            load_config(&path)?.unwrap_or_default()
        }
        None => ScaffoldConfig::default(),
    };
    Ok(Layout::new(project_root, config))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::naming::normalize;
    use std::fs;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join(CONFIG_FILE_NAME))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "backend_root = \"src/Modules\"\n").unwrap();
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.backend_root, PathBuf::from("src/Modules"));
        assert_eq!(config.frontend_root, PathBuf::from("resources/js/modules"));
        assert_eq!(config.namespace, "App\\Modules");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "backend_root = [").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_config_path(Some(&explicit), dir.path()),
            Some(explicit.clone())
        );
        assert_eq!(
            resolve_config_path(Some(&dir.path().join("nope.toml")), dir.path()),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_layout_paths() {
        let layout = Layout::new("/srv/app", ScaffoldConfig::default());
        let ids = normalize("CRMSystem").unwrap();
        assert_eq!(
            layout.backend_root(&ids),
            PathBuf::from("/srv/app/app/Modules/CRMSystem")
        );
        assert_eq!(
            layout.frontend_root(&ids),
            PathBuf::from("/srv/app/resources/js/modules/crm-system")
        );
        assert_eq!(
            layout.provider_reference(&ids),
            "App\\Modules\\CRMSystem\\Providers\\CRMSystemServiceProvider::class"
        );
    }
}
