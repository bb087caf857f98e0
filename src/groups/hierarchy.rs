//! How a group's own membership combines with its parent's.

use serde::{Deserialize, Serialize};

use crate::model::Record;

/// Composition rule for nested groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupHierarchyType {
    /// Own membership only.
    #[default]
    Independent,
    /// Own membership OR the parent's.
    Including,
    /// Own membership AND the parent's.
    Refining,
}

impl GroupHierarchyType {
    pub fn combine(self, own: bool, parent: bool) -> bool {
        match self {
            GroupHierarchyType::Independent => own,
            GroupHierarchyType::Including => own || parent,
            GroupHierarchyType::Refining => own && parent,
        }
    }
}

/// Combine two membership tests under `hierarchy`.
///
/// The parent test is only evaluated when the rule needs it.
pub fn compose<'a, O, P>(
    hierarchy: GroupHierarchyType,
    own: O,
    parent: P,
) -> impl Fn(&Record) -> bool + 'a
where
    O: Fn(&Record) -> bool + 'a,
    P: Fn(&Record) -> bool + 'a,
{
    move |record| match hierarchy {
        GroupHierarchyType::Independent => own(record),
        GroupHierarchyType::Including => own(record) || parent(record),
        GroupHierarchyType::Refining => own(record) && parent(record),
    }
}
