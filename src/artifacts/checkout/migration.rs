//! Working tree migration between two snapshots
//!
//! Checking out another commit means:
//!
//! 1. Refusing to run if untracked content sits where the target needs a file
//!    or one of its parent directories
//! 2. Deleting every file the current commit tracks and the target does not
//! 3. Writing every file the target tracks
//!
//! Files the current commit does not track are left alone unless the target
//! needs their place, in which case step 1 has already refused.

use crate::areas::repository::Repository;
use crate::artifacts::checkout::conflict::untracked_in_the_way;
use crate::artifacts::objects::commit::FileMap;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryError;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;

/// Type of file system action required for checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    /// File tracked only by the target
    Add,
    /// File tracked only by the current commit
    Delete,
    /// File tracked by both
    Modify,
}

/// Set of planned actions grouped by type
pub type ActionsSet = HashMap<ActionType, Vec<(PathBuf, Option<ObjectId>)>>;

pub struct Migration<'r> {
    repository: &'r Repository,
    current: &'r FileMap,
    target: &'r FileMap,
    actions: ActionsSet,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, current: &'r FileMap, target: &'r FileMap) -> Self {
        let actions = HashMap::from([
            (ActionType::Add, Vec::new()),
            (ActionType::Delete, Vec::new()),
            (ActionType::Modify, Vec::new()),
        ]);

        Self {
            repository,
            current,
            target,
            actions,
        }
    }

    pub fn actions_of(&self, action: ActionType) -> &[(PathBuf, Option<ObjectId>)] {
        self.actions
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fail with `UntrackedFileConflict` if the target would clobber an
    /// untracked file; nothing is written in that case
    pub fn check_for_conflicts(&self) -> anyhow::Result<()> {
        let conflicts =
            untracked_in_the_way(self.repository.workspace(), self.current, self.target)?;

        if !conflicts.is_empty() {
            tracing::debug!(?conflicts, "untracked files in the way");
            return Err(RepositoryError::UntrackedFileConflict(conflicts).into());
        }

        Ok(())
    }

    pub fn apply_changes(&mut self) -> anyhow::Result<()> {
        self.check_for_conflicts()?;
        self.plan_changes();
        self.repository.workspace().apply_migration(self)
    }

    fn plan_changes(&mut self) {
        for (path, oid) in self.target {
            let action = if self.current.contains_key(path) {
                ActionType::Modify
            } else {
                ActionType::Add
            };

            self.actions
                .entry(action)
                .or_default()
                .push((path.clone(), Some(oid.clone())));
        }

        for path in self.current.keys() {
            if !self.target.contains_key(path) {
                self.actions
                    .entry(ActionType::Delete)
                    .or_default()
                    .push((path.clone(), None));
            }
        }

        tracing::debug!(
            added = self.actions_of(ActionType::Add).len(),
            modified = self.actions_of(ActionType::Modify).len(),
            deleted = self.actions_of(ActionType::Delete).len(),
            "planned checkout"
        );
    }

    pub fn load_blob_data(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let blob = self.repository.database().parse_object_as_blob(object_id)?;

        Ok(blob.content().clone())
    }
}
