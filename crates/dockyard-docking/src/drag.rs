//! Press-drag-release tracking for frame moves.

use crate::types::FrameId;
use dockyard_core::math::{IVec2, manhattan_length};

/// State of a frame move started by a title bar press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameDrag {
    pub frame: FrameId,
    /// Global pointer position at press time.
    pub press_pos: IVec2,
    /// Pointer position relative to the frame origin at press time.
    pub grab_offset: IVec2,
    /// Last reported pointer position.
    pub current_pos: IVec2,
    /// Set once the pointer has travelled past the drag threshold.
    pub is_active: bool,
}

impl FrameDrag {
    pub fn delta(&self) -> IVec2 {
        self.current_pos - self.press_pos
    }

    /// Where the frame origin goes for the current pointer position.
    pub fn target_origin(&self) -> IVec2 {
        self.current_pos - self.grab_offset
    }
}

/// Tracks at most one frame drag at a time.
#[derive(Debug, Default)]
pub struct DragManager {
    drag: Option<FrameDrag>,
    threshold: i32,
}

impl DragManager {
    pub fn new(threshold: i32) -> Self {
        Self {
            drag: None,
            threshold,
        }
    }

    /// Record a press on a frame's title bar. The drag stays pending until
    /// the threshold is crossed.
    pub fn start(&mut self, frame: FrameId, press_pos: IVec2, grab_offset: IVec2) {
        self.drag = Some(FrameDrag {
            frame,
            press_pos,
            grab_offset,
            current_pos: press_pos,
            is_active: false,
        });
    }

    /// Update the pointer position. Returns `true` on the move that turns a
    /// pending drag into an active one.
    pub fn update(&mut self, pos: IVec2) -> bool {
        let threshold = self.threshold;
        let Some(drag) = &mut self.drag else {
            return false;
        };
        drag.current_pos = pos;
        if !drag.is_active && Self::exceeds_threshold(drag.press_pos, pos, threshold) {
            drag.is_active = true;
            return true;
        }
        false
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.as_ref().is_some_and(|d| d.is_active)
    }

    /// A press was recorded but the pointer has not moved far enough yet.
    pub fn has_pending_drag(&self) -> bool {
        self.drag.as_ref().is_some_and(|d| !d.is_active)
    }

    pub fn drag_state(&self) -> Option<&FrameDrag> {
        self.drag.as_ref()
    }

    pub fn dragged_frame(&self) -> Option<FrameId> {
        self.drag.as_ref().map(|d| d.frame)
    }

    /// Re-point the drag at another frame, e.g. after a docked container is
    /// torn out into a floating frame.
    pub(crate) fn retarget(&mut self, frame: FrameId, grab_offset: IVec2) {
        if let Some(drag) = &mut self.drag {
            drag.frame = frame;
            drag.grab_offset = grab_offset;
        }
    }

    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn end(&mut self) -> Option<FrameDrag> {
        self.drag.take()
    }

    /// Manhattan distance strictly greater than the threshold.
    pub fn exceeds_threshold(start: IVec2, current: IVec2, threshold: i32) -> bool {
        manhattan_length(current - start) > threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContainerId;
    use dockyard_core::alloc::sparse_set::IndexSlot;

    fn frame() -> FrameId {
        FrameId::Container(ContainerId(IndexSlot::new(0, 0)))
    }

    #[test]
    fn drag_activates_past_the_threshold() {
        let mut drags = DragManager::new(10);
        drags.start(frame(), IVec2::new(100, 100), IVec2::new(5, 5));
        assert!(drags.has_pending_drag());

        assert!(!drags.update(IVec2::new(105, 105)));
        assert!(!drags.is_dragging());

        assert!(drags.update(IVec2::new(106, 105)));
        assert!(drags.is_dragging());
        assert!(!drags.update(IVec2::new(200, 200)));

        let state = drags.drag_state().expect("drag in progress");
        assert_eq!(state.delta(), IVec2::new(100, 100));
        assert_eq!(state.target_origin(), IVec2::new(195, 195));
    }

    #[test]
    fn end_and_cancel_clear_the_drag() {
        let mut drags = DragManager::new(10);
        assert!(!drags.update(IVec2::ZERO));
        drags.start(frame(), IVec2::ZERO, IVec2::ZERO);
        drags.cancel();
        assert!(drags.drag_state().is_none());

        drags.start(frame(), IVec2::ZERO, IVec2::ZERO);
        let ended = drags.end().expect("pending drag");
        assert!(!ended.is_active);
        assert!(drags.dragged_frame().is_none());
    }
}
