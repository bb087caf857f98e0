//! Entry groups: named membership tests over records.
//!
//! Nested groups are composed through `GroupHierarchyType` and `compose`,
//! which take the parent's result as input; groups hold no parent links.

mod group;
mod hierarchy;

pub use group::Group;
pub use hierarchy::{compose, GroupHierarchyType};
