use crate::artifacts::branch::{DEFAULT_BRANCH_NAME, INVALID_BRANCH_NAME_REGEX};
use crate::errors::GitletError;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a user-supplied branch name
    ///
    /// Names follow the usual ref rules: no leading dot or slash, no `..`, no
    /// trailing `.lock`, no whitespace or glob characters.
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            return Err(GitletError::InvalidBranchName(name).into());
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            Err(GitletError::InvalidBranchName(name).into())
        } else {
            Ok(Self(name))
        }
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH_NAME.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
