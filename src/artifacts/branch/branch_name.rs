use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::errors::RepositoryError;
use anyhow::Context;
use derive_new::new;

pub const REF_PREFIX: &str = "refs/heads/";

/// Target of a symbolic reference, e.g. `refs/heads/master`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord, new)]
pub struct SymRefName(String);

impl SymRefName {
    pub fn for_branch(branch_name: &BranchName) -> Self {
        SymRefName(format!("{}{}", REF_PREFIX, branch_name))
    }

    pub fn as_ref_path(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    /// Validate a branch name with git's ref-format rules
    ///
    /// Hierarchical names such as `origin/master` are accepted.
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() || invalid_name_regex()?.is_match(&name) {
            return Err(RepositoryError::InvalidBranchName(name).into());
        }

        Ok(Self(name))
    }

    pub fn try_parse_sym_ref_name(sym_ref_name: &SymRefName) -> anyhow::Result<Self> {
        let name = sym_ref_name
            .0
            .strip_prefix(REF_PREFIX)
            .with_context(|| {
                format!(
                    "symbolic ref name must start with '{}', got '{}'",
                    REF_PREFIX, sym_ref_name.0
                )
            })?;

        Self::try_parse(name.to_string())
    }

    pub fn default_branch() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }

    /// Local branch tracking `branch` of the remote `remote`
    pub fn tracking(remote: &RemoteName, branch: &BranchName) -> anyhow::Result<Self> {
        Self::try_parse(format!("{}/{}", remote, branch))
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

/// Name under which a remote repository is registered
///
/// Follows the branch name rules, minus hierarchy: a remote name is the first
/// component of its tracking branches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemoteName(String);

impl RemoteName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() || name.contains('/') || invalid_name_regex()?.is_match(&name) {
            return Err(RepositoryError::InvalidRemoteName(name).into());
        }

        Ok(Self(name))
    }
}

impl AsRef<str> for RemoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RemoteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn invalid_name_regex() -> anyhow::Result<regex::Regex> {
    regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
        .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))
}
