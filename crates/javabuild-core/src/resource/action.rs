//! Include/exclude mode of a resource file list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Whether the file entries of a resource set name files to include or
/// files to exclude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceAction {
    /// Only the listed entries are packaged.
    #[default]
    Include,
    /// Everything except the listed entries is packaged.
    Exclude,
}

impl ResourceAction {
    /// Convert a legacy integer tag (`0` = include, `1` = exclude).
    ///
    /// # Examples
    ///
    /// ```
    /// use javabuild_core::ResourceAction;
    ///
    /// assert_eq!(ResourceAction::from_tag(1).unwrap(), ResourceAction::Exclude);
    /// assert!(ResourceAction::from_tag(2).is_err());
    /// ```
    pub fn from_tag(tag: i64) -> Result<Self> {
        match tag {
            0 => Ok(ResourceAction::Include),
            1 => Ok(ResourceAction::Exclude),
            other => Err(Error::InvalidAction(other.to_string())),
        }
    }

    /// The legacy integer tag for this action.
    pub fn tag(self) -> u8 {
        match self {
            ResourceAction::Include => 0,
            ResourceAction::Exclude => 1,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceAction::Include => "include",
            ResourceAction::Exclude => "exclude",
        }
    }
}

impl fmt::Display for ResourceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "include" | "0" => Ok(ResourceAction::Include),
            "exclude" | "1" => Ok(ResourceAction::Exclude),
            _ => Err(Error::InvalidAction(trimmed.to_string())),
        }
    }
}
