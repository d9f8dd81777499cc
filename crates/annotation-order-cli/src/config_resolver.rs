//! Configuration file resolution with global fallback.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `annotation-order.toml`, then `.annotation-order.toml`, in the working directory
//! 3. `config.toml` in the global directory
//!    (`$ANNOTATION_ORDER_CONFIG_DIR`, else `~/.annotation-order/`)
//! 4. Nothing found: builtin conventions

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`.
    Explicit(PathBuf),
    /// Found next to the project.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config came from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_CONFIG_NAMES: [&str; 2] = ["annotation-order.toml", ".annotation-order.toml"];
const GLOBAL_CONFIG_NAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "ANNOTATION_ORDER_CONFIG_DIR";

/// Resolves configuration for one project directory.
struct Resolver<'a> {
    project_dir: &'a Path,
    global_dir: Option<PathBuf>,
}

impl Resolver<'_> {
    fn resolve(&self, explicit: Option<&Path>) -> ConfigSource {
        if let Some(p) = explicit {
            return ConfigSource::Explicit(p.to_path_buf());
        }

        let project = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| self.project_dir.join(name))
            .find(|candidate| candidate.is_file());
        if let Some(candidate) = project {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }

        let global = self
            .global_dir
            .as_ref()
            .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
            .filter(|candidate| candidate.is_file());
        if let Some(candidate) = global {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }

        ConfigSource::Default
    }
}

/// Resolves the configuration file for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    Resolver {
        project_dir,
        global_dir: global_config_dir(),
    }
    .resolve(explicit)
}

/// Returns the global config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".annotation-order"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn resolver<'a>(project: &'a Path, global: Option<&Path>) -> Resolver<'a> {
        Resolver {
            project_dir: project,
            global_dir: global.map(Path::to_path_buf),
        }
    }

    #[test]
    fn explicit_wins_without_existence_check() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("annotation-order.toml"), "").unwrap();

        let explicit = Path::new("/nonexistent/custom.toml");
        let result = resolver(project.path(), None).resolve(Some(explicit));
        assert_eq!(result, ConfigSource::Explicit(explicit.to_path_buf()));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".annotation-order.toml"), "").unwrap();
        assert_eq!(
            resolver(project.path(), None).resolve(None),
            ConfigSource::Project(project.path().join(".annotation-order.toml"))
        );

        fs::write(project.path().join("annotation-order.toml"), "").unwrap();
        assert_eq!(
            resolver(project.path(), None).resolve(None),
            ConfigSource::Project(project.path().join("annotation-order.toml"))
        );
    }

    #[test]
    fn project_config_shadows_global() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(project.path().join("annotation-order.toml"), "").unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolver(project.path(), Some(global.path())).resolve(None);
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolver(project.path(), Some(global.path())).resolve(None);
        assert!(result.is_global());
        assert_eq!(result.path(), Some(global.path().join("config.toml").as_path()));
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("annotation-order.toml")).unwrap();
        assert_eq!(
            resolver(project.path(), None).resolve(None),
            ConfigSource::Default
        );
    }

    #[test]
    fn nothing_found_is_default() {
        let project = TempDir::new().unwrap();
        let empty_global = TempDir::new().unwrap();
        let result = resolver(project.path(), Some(empty_global.path())).resolve(None);
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
        assert!(!result.is_global());
    }
}
