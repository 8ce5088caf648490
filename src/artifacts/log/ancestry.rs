use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashMap, HashSet, VecDeque};

/// Every ancestor of `start`, itself included, with its breadth-first distance
///
/// Both parents of merge commits are followed.
pub fn ancestors<CommitLoaderFn>(
    start: &ObjectId,
    commit_loader: CommitLoaderFn,
) -> anyhow::Result<HashMap<ObjectId, usize>>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    let mut distances = HashMap::from([(start.clone(), 0)]);
    let mut queue = VecDeque::from([(start.clone(), 0)]);

    while let Some((commit_id, distance)) = queue.pop_front() {
        for parent_id in commit_loader(&commit_id)?.parents {
            if !distances.contains_key(&parent_id) {
                distances.insert(parent_id.clone(), distance + 1);
                queue.push_back((parent_id, distance + 1));
            }
        }
    }

    Ok(distances)
}

/// Whether `ancestor` is reachable from `descendant` (a commit is its own ancestor)
pub fn is_ancestor<CommitLoaderFn>(
    ancestor: &ObjectId,
    descendant: &ObjectId,
    commit_loader: CommitLoaderFn,
) -> anyhow::Result<bool>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    Ok(ancestors(descendant, commit_loader)?.contains_key(ancestor))
}

/// Every ancestor of `start`, itself included, each listed after all of its
/// parents
pub fn parents_first<CommitLoaderFn>(
    start: &ObjectId,
    commit_loader: CommitLoaderFn,
) -> anyhow::Result<Vec<ObjectId>>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    let mut order = Vec::new();
    let mut expanded = HashSet::new();
    let mut stack = vec![(start.clone(), false)];

    while let Some((commit_id, parents_done)) = stack.pop() {
        if parents_done {
            order.push(commit_id);
            continue;
        }
        if !expanded.insert(commit_id.clone()) {
            continue;
        }

        let parents = commit_loader(&commit_id)?.parents;
        stack.push((commit_id, true));
        for parent_id in parents.into_iter().rev() {
            if !expanded.contains(&parent_id) {
                stack.push((parent_id, false));
            }
        }
    }

    Ok(order)
}
