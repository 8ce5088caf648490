use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::WorkspaceChangeType;
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

pub type ChangeSet = BTreeMap<PathBuf, WorkspaceChangeType>;
pub type FileSet = BTreeSet<PathBuf>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub(crate) current_branch: BranchName,
    pub(crate) branches: Vec<BranchName>,
    pub(crate) staged_files: FileSet,
    pub(crate) removed_files: FileSet,
    pub(crate) workspace_changeset: ChangeSet,
    pub(crate) untracked_files: FileSet,
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl<'r> Status<'r> {
    pub fn initialize(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let (_, head) = self.repository.head_commit()?;
        let workspace_files = self
            .repository
            .workspace()
            .list_files()?
            .into_iter()
            .collect::<FileSet>();

        let mut workspace_changeset = ChangeSet::new();
        let mut untracked_files = FileSet::new();

        for path in &workspace_files {
            let expected = match index.staged_blob(path) {
                Some(staged) => Some(staged),
                None if index.is_removed(path) => None,
                None => head.blob_for(path),
            };

            match expected {
                Some(expected) => {
                    if &self.current_blob_id(path)? != expected {
                        workspace_changeset.insert(path.clone(), WorkspaceChangeType::Modified);
                    }
                }
                None => {
                    untracked_files.insert(path.clone());
                }
            }
        }

        let expected_files = index
            .added()
            .keys()
            .chain(head.files().keys().filter(|path| !index.is_removed(path)));
        for path in expected_files {
            if !workspace_files.contains(path) {
                workspace_changeset.insert(path.clone(), WorkspaceChangeType::Deleted);
            }
        }

        Ok(StatusInfo {
            current_branch: self.repository.refs().current_branch()?,
            branches: self.repository.refs().list_branches()?,
            staged_files: index.added().keys().cloned().collect(),
            removed_files: index.removed().clone(),
            workspace_changeset,
            untracked_files,
        })
    }

    fn current_blob_id(&self, path: &Path) -> anyhow::Result<ObjectId> {
        self.repository.workspace().parse_blob(path)?.object_id()
    }
}
