//! Geometry of a laid out tree and drop-target hit testing.
//!
//! The tree itself only stores relative splitter sizes. Given the rect of a
//! dock area, [`LayoutGeometry::compute`] assigns a rect to every visible
//! container, tab group and splitter handle, which is what hit testing and
//! the overlay work against.

use crate::config::DockConfig;
use crate::tree::{DockWidget, NodePath};
use crate::types::{ContainerId, GuideMode, Orientation, TabPosition};
use dockyard_core::geometry::Rect;
use dockyard_core::math::{IVec2, manhattan_length};
use dockyard_core::profiling::profile_function;

/// Sizes used when laying out a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub handle_width: i32,
    pub handle_tolerance: i32,
    pub tab_bar_height: i32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from(&DockConfig::default())
    }
}

impl From<&DockConfig> for LayoutMetrics {
    fn from(config: &DockConfig) -> Self {
        Self {
            handle_width: config.handle_width,
            handle_tolerance: config.handle_tolerance,
            tab_bar_height: config.tab_bar_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContainerGeometry {
    pub id: ContainerId,
    pub path: NodePath,
    pub rect: Rect,
    /// False for the non-current tabs of a tab group.
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabsGeometry {
    pub path: NodePath,
    pub rect: Rect,
    pub tab_position: TabPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandleGeometry {
    pub splitter: NodePath,
    /// Index of the child following the handle.
    pub index: usize,
    pub orientation: Orientation,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitterGeometry {
    pub path: NodePath,
    pub rect: Rect,
    /// Pixel size of each child along the splitter axis.
    pub sizes: Vec<i32>,
}

/// The widget a drop would land on.
#[derive(Debug, Clone, PartialEq)]
pub enum HitTarget {
    Container {
        id: ContainerId,
        path: NodePath,
        rect: Rect,
    },
    Tabs {
        path: NodePath,
        rect: Rect,
        tab_position: TabPosition,
    },
    SplitHandle {
        splitter: NodePath,
        index: usize,
        orientation: Orientation,
        rect: Rect,
    },
}

impl HitTarget {
    pub fn rect(&self) -> Rect {
        match self {
            HitTarget::Container { rect, .. }
            | HitTarget::Tabs { rect, .. }
            | HitTarget::SplitHandle { rect, .. } => *rect,
        }
    }

    /// The guide group shown over this kind of target.
    pub fn guide_mode(&self) -> GuideMode {
        match self {
            HitTarget::Container { .. } => GuideMode::COMPASS_EX,
            HitTarget::Tabs { .. } => GuideMode::COMPASS,
            HitTarget::SplitHandle {
                orientation: Orientation::Horizontal,
                ..
            } => GuideMode::SPLIT_HORIZONTAL,
            HitTarget::SplitHandle {
                orientation: Orientation::Vertical,
                ..
            } => GuideMode::SPLIT_VERTICAL,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutGeometry {
    pub containers: Vec<ContainerGeometry>,
    pub tabs: Vec<TabsGeometry>,
    pub handles: Vec<HandleGeometry>,
    pub splitters: Vec<SplitterGeometry>,
}

impl LayoutGeometry {
    pub fn compute(root: Option<&DockWidget>, rect: Rect, metrics: &LayoutMetrics) -> Self {
        profile_function!();
        let mut geometry = Self::default();
        if let Some(root) = root {
            geometry.place(root, NodePath::root(), rect, metrics);
        }
        geometry
    }

    fn place(&mut self, node: &DockWidget, path: NodePath, rect: Rect, metrics: &LayoutMetrics) {
        match node {
            DockWidget::Container(id) => self.containers.push(ContainerGeometry {
                id: *id,
                path,
                rect,
                visible: true,
            }),
            DockWidget::Tabs(tabs) => {
                let content = tab_content_rect(rect, tabs.tab_position(), metrics.tab_bar_height);
                for (index, id) in tabs.children().iter().enumerate() {
                    self.containers.push(ContainerGeometry {
                        id: *id,
                        path: path.clone(),
                        rect: content,
                        visible: index == tabs.current_index(),
                    });
                }
                self.tabs.push(TabsGeometry {
                    path,
                    rect,
                    tab_position: tabs.tab_position(),
                });
            }
            DockWidget::Splitter(splitter) => {
                let orientation = splitter.orientation();
                let count = splitter.len() as i32;
                let axis = match orientation {
                    Orientation::Horizontal => rect.width,
                    Orientation::Vertical => rect.height,
                };
                let available = axis - metrics.handle_width * (count - 1).max(0);
                let sizes = splitter.resolve_sizes(available);
                let mut offset = 0;
                for (index, (child, size)) in splitter.children().iter().zip(&sizes).enumerate() {
                    if index > 0 {
                        self.handles.push(HandleGeometry {
                            splitter: path.clone(),
                            index,
                            orientation,
                            rect: axis_rect(rect, orientation, offset, metrics.handle_width),
                        });
                        offset += metrics.handle_width;
                    }
                    let child_rect = axis_rect(rect, orientation, offset, *size);
                    self.place(child, path.child(index), child_rect, metrics);
                    offset += size;
                }
                self.splitters.push(SplitterGeometry { path, rect, sizes });
            }
        }
    }

    pub fn container_rect(&self, id: ContainerId) -> Option<Rect> {
        self.containers.iter().find(|c| c.id == id).map(|c| c.rect)
    }

    pub fn splitter_sizes(&self, path: &NodePath) -> Option<&[i32]> {
        self.splitters
            .iter()
            .find(|s| &s.path == path)
            .map(|s| s.sizes.as_slice())
    }

    /// Find the drop target under `pos`.
    ///
    /// Splitter handles win over everything else, and among several handles
    /// in reach the one with the closest center wins. Tab groups come next,
    /// visible containers last.
    pub fn hit_test(&self, pos: IVec2, metrics: &LayoutMetrics) -> Option<HitTarget> {
        profile_function!();
        let tol = metrics.handle_tolerance;
        let handle = self
            .handles
            .iter()
            .filter_map(|handle| {
                let reach = handle.rect.adjusted(-tol, -tol, tol, tol);
                reach
                    .contains(pos)
                    .then(|| (manhattan_length(reach.center() - pos), handle))
            })
            .min_by_key(|(dist, _)| *dist);
        if let Some((_, handle)) = handle {
            return Some(HitTarget::SplitHandle {
                splitter: handle.splitter.clone(),
                index: handle.index,
                orientation: handle.orientation,
                rect: handle.rect,
            });
        }

        if let Some(tabs) = self.tabs.iter().find(|t| t.rect.contains(pos)) {
            return Some(HitTarget::Tabs {
                path: tabs.path.clone(),
                rect: tabs.rect,
                tab_position: tabs.tab_position,
            });
        }

        self.containers
            .iter()
            .find(|c| c.visible && c.rect.contains(pos))
            .map(|c| HitTarget::Container {
                id: c.id,
                path: c.path.clone(),
                rect: c.rect,
            })
    }
}

fn axis_rect(rect: Rect, orientation: Orientation, offset: i32, extent: i32) -> Rect {
    match orientation {
        Orientation::Horizontal => Rect::new(rect.x + offset, rect.y, extent, rect.height),
        Orientation::Vertical => Rect::new(rect.x, rect.y + offset, rect.width, extent),
    }
}

fn tab_content_rect(rect: Rect, position: TabPosition, bar: i32) -> Rect {
    match position {
        TabPosition::Top => rect.adjusted(0, bar, 0, 0),
        TabPosition::Bottom => rect.adjusted(0, 0, 0, -bar),
        TabPosition::Left => rect.adjusted(bar, 0, 0, 0),
        TabPosition::Right => rect.adjusted(0, 0, -bar, 0),
    }
}
