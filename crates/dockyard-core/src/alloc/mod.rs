//! Collection types shared across Dockyard.
//!
//! This module provides:
//! - Re-exports of AHash-backed hash collections
//! - `SparseSet`, a generational arena handing out `IndexSlot` handles

pub mod sparse_set;

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};

#[cfg(test)]
mod tests {
    use super::sparse_set::SparseSet;
    use super::*;

    #[test]
    fn slots_work_as_map_keys() {
        let mut set = SparseSet::new();
        let a = set.push("a");
        let b = set.push("b");
        let mut names = HashMap::new();
        names.insert(a, 1);
        names.insert(b, 2);
        assert_eq!(names[&b], 2);
        assert_eq!(HashSet::from_iter([a, b, a]).len(), 2);
    }
}
