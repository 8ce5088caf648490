//! User-facing errors
//!
//! Operations return `anyhow::Result`. Expected, recoverable failures (a missing
//! branch, nothing to commit, a diverged remote) are raised as a
//! [`RepositoryError`] wrapped in `anyhow::Error`; the binary recognises them with
//! `downcast_ref`, prints the message and exits successfully. Anything else that
//! bubbles up (a missing object, a corrupt index, an I/O failure) is an invariant
//! violation and is fatal.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("A version-control system already exists in the current directory.")]
    AlreadyInitialized,
    #[error("Not in an initialized repository.")]
    NotInitialized,
    #[error("File does not exist.")]
    FileNotFound(PathBuf),
    #[error("File name cannot be tracked: it must be UTF-8 without line breaks.")]
    UnrecordableFileName(PathBuf),
    #[error("Please enter a commit message.")]
    EmptyMessage,
    #[error("No changes added to the commit.")]
    NothingToCommit,
    #[error("No reason to remove the file.")]
    NoReasonToRemove(PathBuf),
    #[error("Found no commit with that message.")]
    NoCommitWithMessage,
    #[error("No commit with that id exists.")]
    NoSuchCommit(String),
    #[error("Commit id prefix is ambiguous.")]
    AmbiguousCommitId(String),
    #[error("File does not exist in that commit.")]
    FileNotInCommit(PathBuf),
    /// Raised by `checkout` when the target branch is unknown
    #[error("No such branch exists.")]
    NoSuchCheckoutBranch(String),
    /// Raised by `rm-branch` and `merge` when the named branch is unknown
    #[error("A branch with that name does not exist.")]
    NoSuchBranch(String),
    #[error("No need to checkout the current branch.")]
    AlreadyCurrent,
    #[error("A branch with that name already exists.")]
    BranchExists(String),
    /// The name nests under an existing branch, or existing branches nest under it
    #[error("Branch name {0} clashes with an existing branch.")]
    BranchNameClash(String),
    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),
    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,
    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict(Vec<PathBuf>),
    #[error("You have uncommitted changes.")]
    UncommittedChanges,
    #[error("Cannot merge a branch with itself.")]
    SelfMerge,
    #[error("Invalid remote name: {0}")]
    InvalidRemoteName(String),
    #[error("A remote with that name already exists.")]
    RemoteExists(String),
    #[error("A remote with that name does not exist.")]
    NoSuchRemote(String),
    #[error("Remote directory not found.")]
    RemoteNotFound(PathBuf),
    #[error("That remote does not have that branch.")]
    RemoteBranchNotFound(String),
    #[error("Please pull down remote changes before pushing.")]
    RemoteDiverged,
}

/// Returns the user error carried by `error`, if it is one
pub fn as_user_error(error: &anyhow::Error) -> Option<&RepositoryError> {
    error.downcast_ref::<RepositoryError>()
}
