//! Inputs shared by every hook command of one invocation

use crate::choices::{License, YesNo};
use crate::error::{HookError, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

/// Values the template engine substituted for this project
///
/// Every field is kept as raw text so that odd values (numbers, booleans,
/// unexpected spellings) still load and are resolved leniently later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TemplateValues {
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_slug: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub package_name: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub command_line_interface: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub license_type: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub install_pre_commit_hooks: String,
}

impl TemplateValues {
    /// Parse values from a YAML document
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| HookError::ContextParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load values from a YAML context file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| HookError::ContextRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content, path)
    }

    pub fn command_line_interface(&self) -> YesNo {
        YesNo::unless_no(&self.command_line_interface)
    }

    pub fn license_type(&self) -> License {
        License::resolve(&self.license_type)
    }

    pub fn install_pre_commit_hooks(&self) -> YesNo {
        YesNo::only_if_yes(&self.install_pre_commit_hooks)
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::String(s) => s,
        other => serde_yaml::to_string(&other)
            .unwrap_or_default()
            .trim()
            .to_string(),
    })
}

/// Values given explicitly on the command line, taking precedence over
/// `TemplateValues`
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub project_root: Option<PathBuf>,
    pub project_slug: Option<String>,
    pub package_name: Option<String>,
    pub command_line_interface: Option<YesNo>,
    pub license_type: Option<License>,
    pub install_pre_commit_hooks: Option<YesNo>,
}

/// Validated, immutable inputs for one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationContext {
    project_root: PathBuf,
    package_name: String,
    project_slug: String,
    command_line_interface: YesNo,
    license_type: License,
    install_pre_commit_hooks: YesNo,
}

impl GenerationContext {
    /// Build a context, checking that `project_root` is an existing directory.
    ///
    /// The stored root is absolute.
    pub fn new(
        project_root: impl AsRef<Path>,
        package_name: impl Into<String>,
        project_slug: impl Into<String>,
        command_line_interface: YesNo,
        license_type: License,
        install_pre_commit_hooks: YesNo,
    ) -> Result<Self> {
        let project_root = project_root.as_ref();
        let canonical = fs::canonicalize(project_root).map_err(|source| HookError::ProjectRoot {
            path: project_root.to_path_buf(),
            source,
        })?;
        if !canonical.is_dir() {
            return Err(HookError::NotADirectory { path: canonical });
        }

        Ok(Self {
            project_root: canonical,
            package_name: package_name.into(),
            project_slug: project_slug.into(),
            command_line_interface,
            license_type,
            install_pre_commit_hooks,
        })
    }

    /// Merge explicit overrides over template values.
    ///
    /// A missing project root means the current directory.
    pub fn resolve(values: &TemplateValues, overrides: Overrides) -> Result<Self> {
        let project_root = match overrides.project_root {
            Some(root) => root,
            None => std::env::current_dir().map_err(|source| HookError::ProjectRoot {
                path: PathBuf::from("."),
                source,
            })?,
        };

        Self::new(
            project_root,
            overrides
                .package_name
                .unwrap_or_else(|| values.package_name.clone()),
            overrides
                .project_slug
                .unwrap_or_else(|| values.project_slug.clone()),
            overrides
                .command_line_interface
                .unwrap_or_else(|| values.command_line_interface()),
            overrides
                .license_type
                .unwrap_or_else(|| values.license_type()),
            overrides
                .install_pre_commit_hooks
                .unwrap_or_else(|| values.install_pre_commit_hooks()),
        )
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn project_slug(&self) -> &str {
        &self.project_slug
    }

    pub fn command_line_interface(&self) -> YesNo {
        self.command_line_interface
    }

    pub fn license_type(&self) -> License {
        self.license_type
    }

    pub fn install_pre_commit_hooks(&self) -> YesNo {
        self.install_pre_commit_hooks
    }

    /// Directory of the generated package inside the project
    pub fn package_dir(&self) -> PathBuf {
        self.project_root.join(&self.package_name)
    }
}
