use crate::areas::database::Database;
use crate::artifacts::log::ancestry::parents_first;
use crate::artifacts::objects::object_id::ObjectId;

/// Counts of objects a transfer had to copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    pub commits: usize,
    pub blobs: usize,
}

/// Copy every ancestor of `tip` (itself included) that `target` lacks
///
/// Every commit's blobs land before any commit does, and each commit lands
/// after its parents, so a reader of `target` never finds a commit whose
/// content or history is missing. Branches are not touched.
pub fn transfer_history(
    source: &Database,
    target: &Database,
    tip: &ObjectId,
) -> anyhow::Result<TransferStats> {
    let missing = parents_first(tip, |oid: &ObjectId| source.load_slim_commit(oid))?
        .into_iter()
        .filter(|oid| !target.contains(oid))
        .collect::<Vec<_>>();

    let mut stats = TransferStats::default();

    for commit_id in &missing {
        let commit = source.parse_object_as_commit(commit_id)?;
        for blob_id in commit.files().values() {
            if source.copy_object_to(target, blob_id)? {
                stats.blobs += 1;
            }
        }
    }

    for commit_id in &missing {
        if source.copy_object_to(target, commit_id)? {
            stats.commits += 1;
        }
    }
    tracing::debug!(commits = stats.commits, blobs = stats.blobs, %tip, "transferred history");

    Ok(stats)
}
