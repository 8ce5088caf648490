use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::checkout::conflict::untracked_in_the_way;
use crate::artifacts::merge::bca_finder::BCAFinder;
use crate::artifacts::merge::resolution::{FileResolution, render_conflict, resolve_file};
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What a merge ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The given branch was already part of the current history
    AlreadyUpToDate,
    /// The current branch moved forward to the given commit
    FastForward(ObjectId),
    /// A two-parent commit was created
    Merged {
        commit: ObjectId,
        conflicts: Vec<PathBuf>,
    },
}

impl Repository {
    pub fn merge(&self, branch_name: &str) -> anyhow::Result<MergeOutcome> {
        let mut index = self.index();
        index.rehydrate()?;

        if !index.is_empty() {
            return Err(RepositoryError::UncommittedChanges.into());
        }

        let given_branch = BranchName::try_parse(branch_name.to_string())
            .map_err(|_| RepositoryError::NoSuchBranch(branch_name.to_string()))?;
        let given_oid = self
            .refs()
            .read_branch(&given_branch)?
            .ok_or_else(|| RepositoryError::NoSuchBranch(branch_name.to_string()))?;

        let current_branch = self.refs().current_branch()?;
        if current_branch == given_branch {
            return Err(RepositoryError::SelfMerge.into());
        }

        let (head_oid, head) = self.head_commit()?;
        let given = self.database().parse_object_as_commit(&given_oid)?;

        let in_the_way = untracked_in_the_way(self.workspace(), head.files(), given.files())?;
        if !in_the_way.is_empty() {
            return Err(RepositoryError::UntrackedFileConflict(in_the_way).into());
        }

        let database = self.database();
        let split_oid = BCAFinder::new(|oid: &ObjectId| database.load_slim_commit(oid))
            .find_best_common_ancestor(&head_oid, &given_oid)?
            .ok_or_else(|| {
                anyhow::anyhow!("no common ancestor between {} and {}", head_oid, given_oid)
            })?;
        tracing::debug!(current = %head_oid, given = %given_oid, split = %split_oid, "merging");

        if split_oid == given_oid {
            writeln!(
                self.writer(),
                "Given branch is an ancestor of the current branch."
            )?;
            return Ok(MergeOutcome::AlreadyUpToDate);
        }

        if split_oid == head_oid {
            self.switch_tree(&mut index, &given_oid)?;
            self.refs().update_head(&given_oid)?;
            writeln!(self.writer(), "Current branch fast-forwarded.")?;
            return Ok(MergeOutcome::FastForward(given_oid));
        }

        let split = self.database().parse_object_as_commit(&split_oid)?;
        let conflicts = self.merge_files(&mut index, &split, &head, &given)?;

        let message = format!("Merged {} into {}.", given_branch, current_branch);
        let commit = self.write_commit(&mut index, &message, Some(given_oid))?;

        if !conflicts.is_empty() {
            writeln!(self.writer(), "Encountered a merge conflict.")?;
        }

        Ok(MergeOutcome::Merged { commit, conflicts })
    }

    /// Apply the per-file decisions to the working tree and the staging area,
    /// returning the conflicted paths
    fn merge_files(
        &self,
        index: &mut Index,
        split: &Commit,
        current: &Commit,
        given: &Commit,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let paths = split
            .files()
            .keys()
            .chain(current.files().keys())
            .chain(given.files().keys())
            .cloned()
            .collect::<BTreeSet<_>>();

        let (removals, updates): (Vec<_>, Vec<_>) = paths
            .into_iter()
            .map(|path| {
                let resolution = resolve_file(
                    split.blob_for(&path),
                    current.blob_for(&path),
                    given.blob_for(&path),
                );
                tracing::trace!(?path, ?resolution, "merge decision");

                (path, resolution)
            })
            .partition(|(_, resolution)| matches!(resolution, FileResolution::Remove));

        // Removals first: a written file may replace a removed directory.
        for (path, _) in removals {
            self.workspace().remove_file(&path)?;
            index.mark_removed(path);
        }

        let mut conflicts = Vec::new();

        for (path, resolution) in updates {
            match resolution {
                FileResolution::Keep | FileResolution::Remove => {}
                FileResolution::TakeGiven(blob_id) => {
                    let blob = self.database().parse_object_as_blob(&blob_id)?;
                    self.workspace().write_file(&path, blob.content())?;
                    index.stage(path, blob_id);
                }
                FileResolution::Conflict { current, given } => {
                    let content = render_conflict(
                        &self.blob_content(current.as_ref())?,
                        &self.blob_content(given.as_ref())?,
                    );
                    let blob_id = self.store_conflict(&path, content)?;
                    index.stage(path.clone(), blob_id);
                    conflicts.push(path);
                }
            }
        }

        Ok(conflicts)
    }

    fn blob_content(&self, blob_id: Option<&ObjectId>) -> anyhow::Result<Bytes> {
        match blob_id {
            Some(blob_id) => Ok(self.database().parse_object_as_blob(blob_id)?.content().clone()),
            None => Ok(Bytes::new()),
        }
    }

    fn store_conflict(&self, path: &Path, content: Vec<u8>) -> anyhow::Result<ObjectId> {
        self.workspace().write_file(path, &content)?;
        let blob = Blob::new(path.to_path_buf(), Bytes::from(content));

        self.database().store(&blob)
    }
}
