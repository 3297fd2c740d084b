//! Pre-generation checks on template input

use crate::error::{HookError, Result};
use regex::Regex;
use std::sync::LazyLock;

// A letter or underscore, then at least one more word character
static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[_a-zA-Z][_a-zA-Z0-9]+$").unwrap());

/// Check that `name` can be used as a Python package/module name
pub fn validate_package_name(name: &str) -> Result<()> {
    if PACKAGE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(HookError::InvalidPackageName {
            name: name.to_string(),
        })
    }
}
