//! Dock bars: auto-hide strips along the edges of an area.
//!
//! A container pinned to a dock bar is hidden until the user extends it,
//! at which point it slides out over the area's central pane. At most one
//! container per area is extended at a time; extending another retracts the
//! current one.

use crate::animation::Tween;
use crate::types::{ContainerId, DockBarPosition};
use dockyard_core::geometry::{Rect, Size};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Out,
    In,
}

#[derive(Debug, Clone)]
pub struct SlideAnimation {
    pub container: ContainerId,
    pub position: DockBarPosition,
    pub kind: SlideKind,
    tween: Tween<Rect>,
    geometry: Rect,
}

impl SlideAnimation {
    pub fn geometry(&self) -> Rect {
        self.geometry
    }
}

/// A slide that completed during [`DockBarManager::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideFinished {
    pub container: ContainerId,
    pub kind: SlideKind,
}

/// Start and end geometry of a slide-out for a container of size `hint`
/// over `pane`. A slide-in runs the same path backwards.
pub fn slide_geometry(position: DockBarPosition, pane: Rect, hint: Size) -> (Rect, Rect) {
    let (start, end, size) = match position {
        DockBarPosition::Top => (
            (0, -hint.height),
            (0, 0),
            Size::new(pane.width, hint.height),
        ),
        DockBarPosition::Right => (
            (pane.width, 0),
            (pane.width - hint.width, 0),
            Size::new(hint.width, pane.height),
        ),
        DockBarPosition::Bottom => (
            (0, pane.height),
            (0, pane.height - hint.height),
            Size::new(pane.width, hint.height),
        ),
        DockBarPosition::Left => (
            (-hint.width, 0),
            (0, 0),
            Size::new(hint.width, pane.height),
        ),
    };
    let at = |(x, y): (i32, i32)| Rect::new(pane.x + x, pane.y + y, size.width, size.height);
    (at(start), at(end))
}

#[derive(Debug, Default)]
pub struct DockBarManager {
    bars: [Vec<ContainerId>; 4],
    extended: Option<ContainerId>,
    slides: Vec<SlideAnimation>,
}

impl DockBarManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bar(&self, position: DockBarPosition) -> &[ContainerId] {
        &self.bars[position.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.bars.iter().all(Vec::is_empty)
    }

    /// Every pinned container with its bar, bars in top, right, bottom, left
    /// order.
    pub fn containers(&self) -> Vec<(ContainerId, DockBarPosition)> {
        DockBarPosition::ALL
            .iter()
            .flat_map(|pos| self.bar(*pos).iter().map(move |id| (*id, *pos)))
            .collect()
    }

    pub fn position_of(&self, id: ContainerId) -> Option<(DockBarPosition, usize)> {
        DockBarPosition::ALL.iter().find_map(|pos| {
            self.bar(*pos)
                .iter()
                .position(|c| *c == id)
                .map(|index| (*pos, index))
        })
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.position_of(id).is_some()
    }

    pub fn extended(&self) -> Option<ContainerId> {
        self.extended
    }

    /// Pin a container, moving it if it is already on a bar. `index` past the
    /// end (or `None`) appends.
    pub fn add_container(&mut self, id: ContainerId, position: DockBarPosition, index: Option<usize>) {
        self.remove_container(id);
        let bar = &mut self.bars[position.index()];
        let index = index.unwrap_or(bar.len()).min(bar.len());
        bar.insert(index, id);
    }

    pub fn remove_container(&mut self, id: ContainerId) -> Option<DockBarPosition> {
        let (position, index) = self.position_of(id)?;
        self.bars[position.index()].remove(index);
        if self.extended == Some(id) {
            self.extended = None;
        }
        self.slides.retain(|s| s.container != id);
        Some(position)
    }

    /// Remove everything, returning what was pinned.
    pub fn take_all(&mut self) -> Vec<(ContainerId, DockBarPosition)> {
        let all = self.containers();
        *self = Self::default();
        all
    }

    /// Slide a pinned container out. Returns the container that had to be
    /// retracted to make room, if any.
    pub fn extend(
        &mut self,
        id: ContainerId,
        pane: Rect,
        hint: Size,
        duration: Duration,
    ) -> Option<Option<ContainerId>> {
        let (position, _) = self.position_of(id)?;
        let previous = self.extended.filter(|other| *other != id);
        if let Some(other) = previous {
            self.retract(other, pane, hint, duration);
        }
        self.extended = Some(id);
        let (start, end) = slide_geometry(position, pane, hint);
        let start = self.current_geometry(id).unwrap_or(start);
        self.start_slide(id, position, SlideKind::Out, start, end, duration);
        Some(previous)
    }

    /// Slide an extended container back in. Returns `false` if it was not
    /// extended.
    pub fn retract(&mut self, id: ContainerId, pane: Rect, hint: Size, duration: Duration) -> bool {
        let Some((position, _)) = self.position_of(id) else {
            return false;
        };
        let sliding_out = self
            .slides
            .iter()
            .any(|s| s.container == id && s.kind == SlideKind::Out);
        if self.extended != Some(id) && !sliding_out {
            return false;
        }
        if self.extended == Some(id) {
            self.extended = None;
        }
        let (hidden, shown) = slide_geometry(position, pane, hint);
        let start = self.current_geometry(id).unwrap_or(shown);
        self.start_slide(id, position, SlideKind::In, start, hidden, duration);
        true
    }

    fn start_slide(
        &mut self,
        container: ContainerId,
        position: DockBarPosition,
        kind: SlideKind,
        start: Rect,
        end: Rect,
        duration: Duration,
    ) {
        self.slides.retain(|s| s.container != container);
        self.slides.push(SlideAnimation {
            container,
            position,
            kind,
            tween: Tween::new(start, end, duration),
            geometry: start,
        });
    }

    /// Geometry of a container that is sliding or has finished sliding out.
    pub fn current_geometry(&self, id: ContainerId) -> Option<Rect> {
        self.slides
            .iter()
            .find(|s| s.container == id)
            .map(SlideAnimation::geometry)
    }

    pub fn slides(&self) -> &[SlideAnimation] {
        &self.slides
    }

    pub fn is_animating(&self) -> bool {
        self.slides.iter().any(|s| s.tween.is_running())
    }

    /// Advance slide animations. Finished slide-ins are dropped; finished
    /// slide-outs keep their final geometry while the container stays out.
    pub fn update(&mut self, dt: Duration) -> Vec<SlideFinished> {
        let mut finished = Vec::new();
        for slide in &mut self.slides {
            if !slide.tween.is_running() {
                continue;
            }
            slide.geometry = slide.tween.update(dt);
            if !slide.tween.is_running() {
                finished.push(SlideFinished {
                    container: slide.container,
                    kind: slide.kind,
                });
            }
        }
        self.slides
            .retain(|s| s.kind == SlideKind::Out || s.tween.is_running());
        finished
    }
}
