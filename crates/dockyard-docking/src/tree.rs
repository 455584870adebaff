//! The live layout tree of a dock area.
//!
//! A tree is built from three node kinds: a leaf [`DockWidget::Container`],
//! a [`DockSplitter`] dividing space among two or more children along one
//! axis, and a [`DockTabs`] group showing two or more containers as tabs.
//! Nodes are addressed by [`NodePath`], the child indices from the root.
//!
//! The mutation functions in [`layout_handling`](crate::layout_handling)
//! keep the no-singleton invariant; the types here only offer the
//! primitives they need.

use crate::types::{ContainerId, Orientation, TabPosition};

/// Child indices leading from the root to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Index of this node within its parent, `None` for the root.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn parent(&self) -> Option<NodePath> {
        let (_, head) = self.0.split_last()?;
        Some(NodePath(head.to_vec()))
    }

    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        NodePath(indices)
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DockWidget {
    Container(ContainerId),
    Splitter(DockSplitter),
    Tabs(DockTabs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockSplitter {
    orientation: Orientation,
    children: Vec<DockWidget>,
    /// Relative child sizes; zero marks a size the splitter has not been
    /// given yet.
    sizes: Vec<i32>,
}

impl DockSplitter {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            children: Vec::new(),
            sizes: Vec::new(),
        }
    }

    /// Build a splitter holding `first` then `second`, merging either one if
    /// it is a splitter of the same orientation.
    pub fn from_pair(orientation: Orientation, first: DockWidget, second: DockWidget) -> Self {
        let mut splitter = Self::new(orientation);
        splitter.push_child(first);
        splitter.push_child(second);
        splitter
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> &[DockWidget] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut DockWidget> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn sizes(&self) -> &[i32] {
        &self.sizes
    }

    /// Apply sizes if enough are given; extra entries are ignored.
    pub fn set_sizes(&mut self, sizes: &[i32]) -> bool {
        if sizes.len() < self.children.len() {
            return false;
        }
        self.sizes = sizes[..self.children.len()].iter().map(|s| (*s).max(0)).collect();
        true
    }

    pub fn push_child(&mut self, widget: DockWidget) {
        self.insert_child(self.children.len(), widget);
    }

    /// Insert a child at `index` (clamped). A splitter of the same
    /// orientation is spliced in rather than nested.
    pub fn insert_child(&mut self, index: usize, widget: DockWidget) {
        let index = index.min(self.children.len());
        match widget {
            DockWidget::Splitter(inner) if inner.orientation == self.orientation => {
                let DockSplitter { children, sizes, .. } = inner;
                let count = children.len();
                self.children.splice(index..index, children);
                self.sizes.splice(index..index, sizes.into_iter().take(count));
            }
            widget => {
                self.children.insert(index, widget);
                self.sizes.insert(index, 0);
            }
        }
    }

    pub fn remove_child(&mut self, index: usize) -> DockWidget {
        self.sizes.remove(index);
        self.children.remove(index)
    }

    /// Sizes with unassigned entries filled in with the mean of the assigned
    /// ones, or all equal when none are assigned.
    pub fn effective_sizes(&self) -> Vec<i32> {
        let assigned: Vec<i32> = self.sizes.iter().copied().filter(|s| *s > 0).collect();
        let fill = if assigned.is_empty() {
            1
        } else {
            (assigned.iter().sum::<i32>() / assigned.len() as i32).max(1)
        };
        self.sizes
            .iter()
            .map(|s| if *s > 0 { *s } else { fill })
            .collect()
    }

    /// Distribute `total` pixels among the children proportionally to their
    /// effective sizes. The last child absorbs rounding.
    pub fn resolve_sizes(&self, total: i32) -> Vec<i32> {
        let total = total.max(0);
        let weights = self.effective_sizes();
        let weight_sum: i64 = weights.iter().map(|w| *w as i64).sum();
        let mut out = Vec::with_capacity(weights.len());
        let mut used = 0;
        for (i, weight) in weights.iter().enumerate() {
            let size = if i + 1 == weights.len() {
                total - used
            } else if weight_sum == 0 {
                0
            } else {
                ((total as i64 * *weight as i64) / weight_sum) as i32
            };
            used += size;
            out.push(size);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockTabs {
    tab_position: TabPosition,
    movable: bool,
    children: Vec<ContainerId>,
    current: usize,
}

impl DockTabs {
    pub fn new(tab_position: TabPosition, children: Vec<ContainerId>) -> Self {
        Self {
            tab_position,
            movable: true,
            children,
            current: 0,
        }
    }

    pub fn tab_position(&self) -> TabPosition {
        self.tab_position
    }

    pub fn set_tab_position(&mut self, position: TabPosition) {
        self.tab_position = position;
    }

    pub fn is_movable(&self) -> bool {
        self.movable
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    pub fn children(&self) -> &[ContainerId] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<ContainerId> {
        self.children.get(self.current).copied()
    }

    pub fn index_of(&self, id: ContainerId) -> Option<usize> {
        self.children.iter().position(|c| *c == id)
    }

    /// Select a tab; out of range indices are clamped.
    pub fn set_current_index(&mut self, index: usize) {
        self.current = index.min(self.children.len().saturating_sub(1));
    }

    /// Append a tab and return its index.
    pub fn push(&mut self, id: ContainerId) -> usize {
        self.children.push(id);
        self.children.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> ContainerId {
        let id = self.children.remove(index);
        if index < self.current {
            self.current -= 1;
        }
        self.set_current_index(self.current);
        id
    }

    /// Move a tab, keeping the same container current.
    pub fn move_tab(&mut self, from: usize, to: usize) {
        if from >= self.children.len() {
            return;
        }
        let current = self.current();
        let id = self.children.remove(from);
        let to = to.min(self.children.len());
        self.children.insert(to, id);
        if let Some(current) = current.and_then(|c| self.index_of(c)) {
            self.current = current;
        }
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Where a container sits in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSlot {
    /// Path of the container node, or of the tab group holding it.
    pub path: NodePath,
    /// Tab index when the container is tabbed.
    pub tab: Option<usize>,
}

impl DockWidget {
    pub fn node_at(&self, path: &NodePath) -> Option<&DockWidget> {
        let mut node = self;
        for index in path.indices() {
            match node {
                DockWidget::Splitter(splitter) => node = splitter.children.get(*index)?,
                _ => return None,
            }
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut DockWidget> {
        let mut node = self;
        for index in path.indices() {
            match node {
                DockWidget::Splitter(splitter) => node = splitter.children.get_mut(*index)?,
                _ => return None,
            }
        }
        Some(node)
    }

    pub fn find_container(&self, id: ContainerId) -> Option<ContainerSlot> {
        fn walk(node: &DockWidget, id: ContainerId, path: NodePath) -> Option<ContainerSlot> {
            match node {
                DockWidget::Container(c) => (*c == id).then_some(ContainerSlot { path, tab: None }),
                DockWidget::Tabs(tabs) => tabs.index_of(id).map(|tab| ContainerSlot {
                    path,
                    tab: Some(tab),
                }),
                DockWidget::Splitter(splitter) => splitter
                    .children
                    .iter()
                    .enumerate()
                    .find_map(|(i, child)| walk(child, id, path.child(i))),
            }
        }
        walk(self, id, NodePath::root())
    }

    pub fn contains_container(&self, id: ContainerId) -> bool {
        self.find_container(id).is_some()
    }

    /// Every container in the tree, in left-to-right order.
    pub fn containers(&self) -> Vec<ContainerId> {
        let mut out = Vec::new();
        self.collect_containers(&mut out);
        out
    }

    fn collect_containers(&self, out: &mut Vec<ContainerId>) {
        match self {
            DockWidget::Container(id) => out.push(*id),
            DockWidget::Tabs(tabs) => out.extend_from_slice(&tabs.children),
            DockWidget::Splitter(splitter) => {
                for child in &splitter.children {
                    child.collect_containers(out);
                }
            }
        }
    }

    /// Paths of every tab group in the tree.
    pub fn tab_groups(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        self.visit(&NodePath::root(), &mut |path, node| {
            if matches!(node, DockWidget::Tabs(_)) {
                out.push(path.clone());
            }
        });
        out
    }

    /// Pre-order walk with paths.
    pub fn visit(&self, path: &NodePath, f: &mut dyn FnMut(&NodePath, &DockWidget)) {
        f(path, self);
        if let DockWidget::Splitter(splitter) = self {
            for (i, child) in splitter.children.iter().enumerate() {
                child.visit(&path.child(i), f);
            }
        }
    }

    /// Check the no-singleton invariant over the whole tree.
    pub fn is_normalized(&self) -> bool {
        match self {
            DockWidget::Container(_) => true,
            DockWidget::Tabs(tabs) => tabs.len() >= 2 && tabs.current < tabs.len(),
            DockWidget::Splitter(splitter) => {
                splitter.len() >= 2
                    && splitter.sizes.len() == splitter.len()
                    && splitter.children.iter().all(DockWidget::is_normalized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockyard_core::alloc::sparse_set::IndexSlot;

    fn cid(n: u32) -> ContainerId {
        ContainerId(IndexSlot::new(0, n))
    }

    fn leaf(n: u32) -> DockWidget {
        DockWidget::Container(cid(n))
    }

    #[test]
    fn same_orientation_splitters_merge_on_insert() {
        let inner = DockSplitter::from_pair(Orientation::Horizontal, leaf(1), leaf(2));
        let mut outer = DockSplitter::from_pair(Orientation::Horizontal, leaf(0), leaf(3));
        outer.insert_child(1, DockWidget::Splitter(inner));
        assert_eq!(outer.children(), &[leaf(0), leaf(1), leaf(2), leaf(3)]);
        assert_eq!(outer.sizes().len(), 4);
    }

    #[test]
    fn perpendicular_splitters_nest() {
        let inner = DockSplitter::from_pair(Orientation::Vertical, leaf(1), leaf(2));
        let mut outer = DockSplitter::from_pair(Orientation::Horizontal, leaf(0), leaf(3));
        outer.push_child(DockWidget::Splitter(inner));
        assert_eq!(outer.len(), 3);
        assert!(DockWidget::Splitter(outer).is_normalized());
    }

    #[test]
    fn resolve_sizes_is_proportional_and_exact() {
        let mut splitter = DockSplitter::from_pair(Orientation::Horizontal, leaf(0), leaf(1));
        splitter.push_child(leaf(2));
        assert!(splitter.set_sizes(&[100, 200, 100]));
        assert_eq!(splitter.resolve_sizes(800), vec![200, 400, 200]);
        assert_eq!(splitter.resolve_sizes(801).iter().sum::<i32>(), 801);
    }

    #[test]
    fn unassigned_sizes_take_the_mean() {
        let mut splitter = DockSplitter::from_pair(Orientation::Horizontal, leaf(0), leaf(1));
        splitter.set_sizes(&[300, 100]);
        splitter.push_child(leaf(2));
        assert_eq!(splitter.effective_sizes(), vec![300, 100, 200]);
    }

    #[test]
    fn short_size_lists_are_ignored() {
        let mut splitter = DockSplitter::from_pair(Orientation::Vertical, leaf(0), leaf(1));
        assert!(!splitter.set_sizes(&[10]));
        assert_eq!(splitter.sizes(), &[0, 0]);
    }

    #[test]
    fn removing_tabs_keeps_current_stable() {
        let mut tabs = DockTabs::new(TabPosition::Top, vec![cid(0), cid(1), cid(2)]);
        tabs.set_current_index(2);
        tabs.remove(0);
        assert_eq!(tabs.current(), Some(cid(2)));
        tabs.remove(1);
        assert_eq!(tabs.current(), Some(cid(1)));
    }

    #[test]
    fn move_tab_follows_current() {
        let mut tabs = DockTabs::new(TabPosition::Top, vec![cid(0), cid(1), cid(2)]);
        tabs.set_current_index(0);
        tabs.move_tab(0, 2);
        assert_eq!(tabs.children(), &[cid(1), cid(2), cid(0)]);
        assert_eq!(tabs.current_index(), 2);
    }

    #[test]
    fn find_container_reports_tab_slot() {
        let tabs = DockWidget::Tabs(DockTabs::new(TabPosition::Top, vec![cid(1), cid(2)]));
        let root = DockWidget::Splitter(DockSplitter::from_pair(Orientation::Horizontal, leaf(0), tabs));
        let slot = root.find_container(cid(2)).expect("tabbed container");
        assert_eq!(slot.path, NodePath::from(vec![1]));
        assert_eq!(slot.tab, Some(1));
        assert_eq!(root.containers(), vec![cid(0), cid(1), cid(2)]);
        assert_eq!(root.tab_groups(), vec![NodePath::from(vec![1])]);
        assert!(root.find_container(cid(9)).is_none());
    }
}
