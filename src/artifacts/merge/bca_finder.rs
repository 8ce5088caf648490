//! Split point finder for merges
//!
//! The split point of two commits is their best common ancestor:
//!
//! > A best common ancestor of commits X and Y is any common ancestor of X and Y
//! > that is not an ancestor of any other common ancestor.
//!
//! ## Algorithm
//!
//! A bidirectional breadth-first traversal expands both commits level by level
//! from a single work queue:
//! - Each visited commit is tagged with the side(s) that reached it, and with its
//!   distance from each side
//! - A commit reached from both sides is a common ancestor (`RESULT`)
//! - Every ancestor of a common ancestor is itself common, so a common ancestor
//!   is redundant (`STALE`) exactly when it is a parent of another common ancestor
//!
//! Several best common ancestors can remain in criss-cross histories. The one
//! nearest to the source commit wins; ties are broken by the distance from the
//! target, then by digest, so the result never depends on traversal order.
//!
//! ## Debug Logging
//!
//! Building with the `debug_merge` feature emits a per-step trace of the
//! traversal at `debug` level.

use crate::artifacts::objects::commit::SlimCommit;
use crate::artifacts::objects::object_id::ObjectId;
use bitflags::bitflags;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Trace a traversal step when built with the `debug_merge` feature
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_merge")]
        {
            tracing::debug!($($arg)*);
        }
    };
}

bitflags! {
    #[derive(Clone, Copy, PartialEq, Eq, Hash)]
    struct VisitState: u8 {
        const NONE = 0b00;
        const VISITED_FROM_SOURCE = 0b01;
        const VISITED_FROM_TARGET = 0b10;
        const VISITED_FROM_BOTH = Self::VISITED_FROM_SOURCE.bits() | Self::VISITED_FROM_TARGET.bits();
        const STALE = 0b100; // common ancestor that is an ancestor of another one
        const RESULT = 0b1000; // common ancestor
    }
}

impl fmt::Debug for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut flags = Vec::new();
        if self.contains(VisitState::VISITED_FROM_SOURCE) {
            flags.push("SOURCE");
        }
        if self.contains(VisitState::VISITED_FROM_TARGET) {
            flags.push("TARGET");
        }
        if self.contains(VisitState::STALE) {
            flags.push("STALE");
        }
        if self.contains(VisitState::RESULT) {
            flags.push("RESULT");
        }
        if flags.is_empty() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", flags.join("|"))
        }
    }
}

impl fmt::Display for VisitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Per-commit traversal record
#[derive(Debug, Clone)]
struct Visit {
    state: VisitState,
    source_distance: usize,
    target_distance: usize,
    parents: Vec<ObjectId>,
}

impl Visit {
    fn new(parents: Vec<ObjectId>) -> Self {
        Visit {
            state: VisitState::NONE,
            source_distance: usize::MAX,
            target_distance: usize::MAX,
            parents,
        }
    }
}

/// Best common ancestor finder
///
/// Generic over the function loading a commit's parent links, so it runs the
/// same against the object store and against in-memory graphs.
pub struct BCAFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> BCAFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Traverse both histories, tagging every reachable commit
    fn visit_both_sides(
        &self,
        source_commit_id: &ObjectId,
        target_commit_id: &ObjectId,
    ) -> anyhow::Result<HashMap<ObjectId, Visit>> {
        let mut visits = HashMap::<ObjectId, Visit>::new();
        let mut queue = VecDeque::from([
            (source_commit_id.clone(), VisitState::VISITED_FROM_SOURCE, 0),
            (target_commit_id.clone(), VisitState::VISITED_FROM_TARGET, 0),
        ]);

        // Both sides start at distance 0 and every push adds 1, so the queue
        // is ordered by distance and the first visit per side is the shortest.
        while let Some((commit_id, side, distance)) = queue.pop_front() {
            if !visits.contains_key(&commit_id) {
                let commit = (self.commit_loader)(&commit_id)?;
                visits.insert(commit_id.clone(), Visit::new(commit.parents));
            }
            let Some(visit) = visits.get_mut(&commit_id) else {
                continue;
            };

            if visit.state.contains(side) {
                continue;
            }
            visit.state |= side;
            if side == VisitState::VISITED_FROM_SOURCE {
                visit.source_distance = distance;
            } else {
                visit.target_distance = distance;
            }
            if visit.state.contains(VisitState::VISITED_FROM_BOTH) {
                visit.state |= VisitState::RESULT;
            }

            debug_log!(
                "Processing commit {} at distance {}: state={}",
                commit_id,
                distance,
                visit.state
            );

            for parent_id in &visit.parents {
                queue.push_back((parent_id.clone(), side, distance + 1));
            }
        }

        Ok(visits)
    }

    /// Finds the split point of two commits
    ///
    /// Returns `None` only when the histories share no commit at all.
    ///
    /// ```rust,ignore
    /// // Criss-cross:
    /// //     A
    /// //    / \
    /// //   B   C
    /// //   |\ /|
    /// //   | X |
    /// //   |/ \|
    /// //   D   E
    /// let bca = finder.find_best_common_ancestor(&d, &e)?;
    /// // B and C are both best; the one nearest to D wins, then the smaller digest
    /// ```
    pub fn find_best_common_ancestor(
        &self,
        source_commit_id: &ObjectId,
        target_commit_id: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut visits = self.visit_both_sides(source_commit_id, target_commit_id)?;

        let common_ancestors = visits
            .iter()
            .filter(|(_, visit)| visit.state.contains(VisitState::RESULT))
            .map(|(oid, _)| oid.clone())
            .collect::<HashSet<_>>();

        let redundant_ancestors = common_ancestors
            .iter()
            .filter_map(|oid| visits.get(oid))
            .flat_map(|visit| visit.parents.iter().cloned())
            .collect::<HashSet<_>>();
        for oid in &redundant_ancestors {
            if let Some(visit) = visits.get_mut(oid) {
                visit.state |= VisitState::STALE;
            }
        }

        debug_log!(
            "Common ancestors: {}, redundant: {}",
            common_ancestors.len(),
            redundant_ancestors.len()
        );

        let best_common_ancestor = visits
            .iter()
            .filter(|(_, visit)| {
                visit.state.contains(VisitState::RESULT) && !visit.state.contains(VisitState::STALE)
            })
            .min_by(|(left_oid, left), (right_oid, right)| {
                (left.source_distance, left.target_distance, *left_oid).cmp(&(
                    right.source_distance,
                    right.target_distance,
                    *right_oid,
                ))
            })
            .map(|(oid, _)| oid.clone());

        tracing::debug!(
            source = %source_commit_id,
            target = %target_commit_id,
            split_point = ?best_common_ancestor.as_ref().map(ObjectId::to_short_oid),
            "found split point"
        );

        Ok(best_common_ancestor)
    }
}
