//! Core value types shared by the docking modules.

use bitflags::bitflags;
use dockyard_core::alloc::sparse_set::IndexSlot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle to a [`DockContainer`](crate::container::DockContainer) owned by
/// the dock manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerId(pub(crate) IndexSlot);

/// Handle to a floating [`DockWindow`](crate::window::DockWindow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub(crate) IndexSlot);

/// A dockable frame: either a single container or a floating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrameId {
    Container(ContainerId),
    Window(WindowId),
}

impl From<ContainerId> for FrameId {
    fn from(id: ContainerId) -> Self {
        FrameId::Container(id)
    }
}

impl From<WindowId> for FrameId {
    fn from(id: WindowId) -> Self {
        FrameId::Window(id)
    }
}

/// Identifies a dock area: the manager's primary area or the nested area of
/// a floating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaId {
    Primary,
    Window(WindowId),
}

/// Splitter axis. A horizontal splitter lays children out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Side of a tab group its tab bar sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TabPosition {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

/// Edge of an area a dock bar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DockBarPosition {
    Top,
    Right,
    Bottom,
    Left,
}

impl DockBarPosition {
    pub const ALL: [DockBarPosition; 4] = [
        DockBarPosition::Top,
        DockBarPosition::Right,
        DockBarPosition::Bottom,
        DockBarPosition::Left,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Where an item goes relative to a target when inserted by a layout
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InsertPosition {
    Top,
    Right,
    Bottom,
    #[default]
    Left,
}

/// A drop target location on the guide rose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Guide {
    #[default]
    NoGuide = 0,

    BorderNorth = 1,
    BorderEast = 2,
    BorderSouth = 3,
    BorderWest = 4,

    CompassNorth = 5,
    CompassEast = 6,
    CompassSouth = 7,
    CompassWest = 8,
    CompassCenter = 9,

    CompassExNorth = 10,
    CompassExEast = 11,
    CompassExSouth = 12,
    CompassExWest = 13,

    SplitVertical = 14,
    SplitHorizontal = 15,

    AreaCenter = 16,

    BorderExNorth = 17,
    BorderExEast = 18,
    BorderExSouth = 19,
    BorderExWest = 20,
}

impl Guide {
    pub fn is_border(self) -> bool {
        matches!(
            self,
            Guide::BorderNorth | Guide::BorderEast | Guide::BorderSouth | Guide::BorderWest
        )
    }

    pub fn is_border_ex(self) -> bool {
        matches!(
            self,
            Guide::BorderExNorth | Guide::BorderExEast | Guide::BorderExSouth | Guide::BorderExWest
        )
    }

    /// Guides whose band is fitted to the whole area rather than the widget
    /// under the pointer.
    pub fn targets_area(self) -> bool {
        self.is_border() || self.is_border_ex()
    }

    /// The dock bar an extended border guide drops into.
    pub fn dock_bar_position(self) -> Option<DockBarPosition> {
        match self {
            Guide::BorderExNorth => Some(DockBarPosition::Top),
            Guide::BorderExEast => Some(DockBarPosition::Right),
            Guide::BorderExSouth => Some(DockBarPosition::Bottom),
            Guide::BorderExWest => Some(DockBarPosition::Left),
            _ => None,
        }
    }
}

bitflags! {
    /// Which guide groups the rose currently shows.
    ///
    /// Border guides combine with at most one centerpiece group.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GuideMode: u8 {
        const NONE             = 0;
        const BORDER           = 0x01;
        const COMPASS          = 0x02;
        const COMPASS_EX       = 0x04;
        const SPLIT_HORIZONTAL = 0x08;
        const SPLIT_VERTICAL   = 0x10;
        const AREA_CENTER      = 0x20;
    }
}
