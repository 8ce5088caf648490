use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit::FileMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Working tree paths the target snapshot would clobber without them ever
/// having been committed
///
/// For each path the target tracks, these are in the way unless the current
/// commit tracks them:
///
/// - a file at that path
/// - every file below a directory at that path
/// - a file where the target needs one of its parent directories
pub fn untracked_in_the_way(
    workspace: &Workspace,
    current: &FileMap,
    target: &FileMap,
) -> anyhow::Result<Vec<PathBuf>> {
    let untracked = |path: &Path| !current.contains_key(path);
    let mut in_the_way = BTreeSet::new();

    for path in target.keys() {
        if workspace.file_exists(path) && untracked(path) {
            in_the_way.insert(path.clone());
        }

        if workspace.dir_exists(path) {
            in_the_way.extend(
                workspace
                    .list_files_in(path)?
                    .into_iter()
                    .filter(|file| untracked(file)),
            );
        }

        for parent in path.ancestors().skip(1) {
            if !parent.as_os_str().is_empty() && workspace.file_exists(parent) && untracked(parent)
            {
                in_the_way.insert(parent.to_path_buf());
            }
        }
    }

    Ok(in_the_way.into_iter().collect())
}
