//! Links between nearby floating frames.
//!
//! Floating frames whose link flag is set and whose edges touch form an
//! undirected graph. A linked drag moves a frame's whole connected
//! component together.

use crate::types::FrameId;
use dockyard_core::geometry::Rect;
use indexmap::{IndexMap, IndexSet};

/// Read access to the frame state the graph needs.
pub trait FrameLookup {
    /// Global geometry of a floating frame.
    fn frame_geometry(&self, frame: FrameId) -> Option<Rect>;
    /// Whether the frame's link flag is set.
    fn frame_linked(&self, frame: FrameId) -> bool;
}

#[derive(Debug, Default, Clone)]
pub struct ProximityHandler {
    nodes: IndexMap<FrameId, IndexSet<FrameId>>,
}

impl ProximityHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_frame(&mut self, frame: FrameId) {
        self.nodes.entry(frame).or_default();
    }

    pub fn remove_frame(&mut self, frame: FrameId) {
        self.unlink(frame);
        self.nodes.shift_remove(&frame);
    }

    pub fn contains(&self, frame: FrameId) -> bool {
        self.nodes.contains_key(&frame)
    }

    /// Tracked frames in insertion order.
    pub fn frames(&self) -> impl Iterator<Item = FrameId> + '_ {
        self.nodes.keys().copied()
    }

    /// Connect two tracked frames. Linking a frame to itself does nothing.
    pub fn link(&mut self, a: FrameId, b: FrameId) {
        if a == b || !self.contains(a) || !self.contains(b) {
            return;
        }
        if let Some(edges) = self.nodes.get_mut(&a) {
            edges.insert(b);
        }
        if let Some(edges) = self.nodes.get_mut(&b) {
            edges.insert(a);
        }
    }

    /// Drop every edge touching `frame`.
    pub fn unlink(&mut self, frame: FrameId) {
        let Some(edges) = self.nodes.get_mut(&frame) else {
            return;
        };
        let neighbours = std::mem::take(edges);
        for other in neighbours {
            if let Some(edges) = self.nodes.get_mut(&other) {
                edges.shift_remove(&frame);
            }
        }
    }

    pub fn is_linked_to(&self, a: FrameId, b: FrameId) -> bool {
        self.nodes.get(&a).is_some_and(|edges| edges.contains(&b))
    }

    pub fn has_linked_frames(&self, frame: FrameId) -> bool {
        self.nodes.get(&frame).is_some_and(|edges| !edges.is_empty())
    }

    /// Every other frame in `frame`'s connected component.
    pub fn linked_frames(&self, frame: FrameId) -> Vec<FrameId> {
        let mut seen = IndexSet::new();
        seen.insert(frame);
        let mut stack: Vec<FrameId> = self
            .nodes
            .get(&frame)
            .map(|edges| edges.iter().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            if !seen.insert(next) {
                continue;
            }
            if let Some(edges) = self.nodes.get(&next) {
                stack.extend(edges.iter().copied());
            }
        }
        seen.shift_remove(&frame);
        seen.into_iter().collect()
    }

    /// Tracked frames whose geometry, grown by `distance`, touches `rect`.
    pub fn proximal_frames(&self, rect: Rect, distance: i32, lookup: &dyn FrameLookup) -> Vec<FrameId> {
        let d = distance.max(0);
        self.frames()
            .filter(|frame| {
                lookup
                    .frame_geometry(*frame)
                    .is_some_and(|geo| rect.intersects(&geo.adjusted(-d, -d, d, d)))
            })
            .collect()
    }

    /// Recompute the edges of one frame from its current geometry and link
    /// flag.
    pub fn update_links(&mut self, frame: FrameId, lookup: &dyn FrameLookup) {
        if !self.contains(frame) {
            return;
        }
        self.unlink(frame);
        if !lookup.frame_linked(frame) {
            return;
        }
        let Some(rect) = lookup.frame_geometry(frame) else {
            return;
        };
        for other in self.proximal_frames(rect, 1, lookup) {
            if other != frame && lookup.frame_linked(other) {
                self.link(frame, other);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContainerId;
    use dockyard_core::alloc::HashMap;
    use dockyard_core::alloc::sparse_set::IndexSlot;

    #[derive(Default)]
    struct Frames(HashMap<FrameId, (Rect, bool)>);

    impl FrameLookup for Frames {
        fn frame_geometry(&self, frame: FrameId) -> Option<Rect> {
            self.0.get(&frame).map(|(rect, _)| *rect)
        }

        fn frame_linked(&self, frame: FrameId) -> bool {
            self.0.get(&frame).is_some_and(|(_, linked)| *linked)
        }
    }

    fn frame(n: u32) -> FrameId {
        FrameId::Container(ContainerId(IndexSlot::new(0, n)))
    }

    #[test]
    fn links_are_symmetric() {
        let mut graph = ProximityHandler::new();
        graph.add_frame(frame(0));
        graph.add_frame(frame(1));
        graph.link(frame(0), frame(1));
        assert!(graph.is_linked_to(frame(1), frame(0)));
        graph.link(frame(0), frame(0));
        assert!(!graph.is_linked_to(frame(0), frame(0)));
        graph.unlink(frame(1));
        assert!(!graph.has_linked_frames(frame(0)));
    }

    #[test]
    fn linked_frames_walks_the_component() {
        let mut graph = ProximityHandler::new();
        for n in 0..4 {
            graph.add_frame(frame(n));
        }
        graph.link(frame(0), frame(1));
        graph.link(frame(1), frame(2));
        let mut component = graph.linked_frames(frame(0));
        component.sort();
        assert_eq!(component, vec![frame(1), frame(2)]);
        assert!(graph.linked_frames(frame(3)).is_empty());
    }

    #[test]
    fn update_links_only_joins_touching_linked_frames() {
        let mut frames = Frames::default();
        frames.0.insert(frame(0), (Rect::new(0, 0, 100, 100), true));
        frames.0.insert(frame(1), (Rect::new(100, 0, 100, 100), true));
        frames.0.insert(frame(2), (Rect::new(0, 100, 100, 100), false));
        frames.0.insert(frame(3), (Rect::new(500, 500, 10, 10), true));
        let mut graph = ProximityHandler::new();
        for n in 0..4 {
            graph.add_frame(frame(n));
        }
        graph.update_links(frame(0), &frames);
        assert!(graph.is_linked_to(frame(0), frame(1)));
        assert!(!graph.is_linked_to(frame(0), frame(2)));
        assert!(!graph.is_linked_to(frame(0), frame(3)));

        frames.0.insert(frame(0), (Rect::new(0, 0, 100, 100), false));
        graph.update_links(frame(0), &frames);
        assert!(!graph.has_linked_frames(frame(1)));
    }

    #[test]
    fn removing_a_frame_drops_its_edges() {
        let mut graph = ProximityHandler::new();
        graph.add_frame(frame(0));
        graph.add_frame(frame(1));
        graph.link(frame(0), frame(1));
        graph.remove_frame(frame(1));
        assert!(!graph.contains(frame(1)));
        assert!(!graph.has_linked_frames(frame(0)));
    }
}
