//! Canonical values for the template's user choices
//!
//! Template values arrive as already-substituted free text. Resolution into
//! these enums never fails: unrecognized text degrades to a fixed default so
//! that a malformed upstream value cannot abort hooks after files exist.

use clap::ValueEnum;
use std::fmt;

/// A Yes/No template choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum YesNo {
    #[value(name = "Yes")]
    Yes,
    #[value(name = "No")]
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    /// `No` only when the raw text is exactly "No", `Yes` for anything else.
    ///
    /// Gate used for `command_line_interface`.
    pub fn unless_no(raw: &str) -> YesNo {
        if raw == YesNo::No.as_str() {
            YesNo::No
        } else {
            YesNo::Yes
        }
    }

    /// `Yes` only when the raw text is exactly "Yes", `No` for anything else.
    ///
    /// Gate used for `install_pre_commit_hooks`.
    pub fn only_if_yes(raw: &str) -> YesNo {
        if raw == YesNo::Yes.as_str() {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// License offered by the template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum License {
    #[value(name = "MIT")]
    Mit,
    #[value(name = "BSD-3-Clause")]
    Bsd3Clause,
    #[value(name = "ISC")]
    Isc,
    #[value(name = "Apache-2.0")]
    Apache20,
    #[value(name = "GPL-3.0-only")]
    Gpl30Only,
    #[value(name = "No-license")]
    NoLicense,
}

impl License {
    pub const ALL: [License; 6] = [
        License::Mit,
        License::Bsd3Clause,
        License::Isc,
        License::Apache20,
        License::Gpl30Only,
        License::NoLicense,
    ];

    /// SPDX-style identifier written into generated files
    pub fn as_str(&self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Bsd3Clause => "BSD-3-Clause",
            License::Isc => "ISC",
            License::Apache20 => "Apache-2.0",
            License::Gpl30Only => "GPL-3.0-only",
            License::NoLicense => "No-license",
        }
    }

    /// Resolve free text into a license, falling back to `NoLicense`.
    ///
    /// Matching is case-insensitive and treats `.`, `-` and space as the
    /// same separator, so "apache-2.0", "Apache.2.0" and "APACHE 2 0" all
    /// resolve to `Apache20`. The dotless spellings ("APACHE_20",
    /// "GPL-30-only") are accepted as well.
    pub fn resolve(text: &str) -> License {
        match normalize(text).as_str() {
            "MIT" => License::Mit,
            "BSD_3_CLAUSE" => License::Bsd3Clause,
            "ISC" => License::Isc,
            "APACHE_2_0" | "APACHE_20" => License::Apache20,
            "GPL_3_0_ONLY" | "GPL_30_ONLY" => License::Gpl30Only,
            _ => License::NoLicense,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, License::NoLicense)
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(text: &str) -> String {
    text.trim()
        .chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
