//! Notifications surfaced to the embedding application.

/// A change in a dock item's docking state.
///
/// Events are queued by the manager only while dock events are enabled and
/// are collected with [`DockManager::drain_events`](crate::DockManager::drain_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockEvent {
    /// The item was plugged into a dock area's layout.
    Docked { name: String },
    /// The item was torn out of a layout and is now floating.
    Undocked { name: String },
    /// The item slid out of its dock bar.
    Extended { name: String },
    /// The item slid back into its dock bar.
    Retracted { name: String },
    /// The item became visible.
    Shown { name: String },
    /// The item was hidden.
    Hidden { name: String },
    /// The item was closed.
    Closed { name: String },
    /// A tab group switched its current tab.
    TabSelected { current: String, previous: String },
}

impl DockEvent {
    /// The item the event is about. For tab selection this is the newly
    /// selected item.
    pub fn name(&self) -> &str {
        match self {
            DockEvent::Docked { name }
            | DockEvent::Undocked { name }
            | DockEvent::Extended { name }
            | DockEvent::Retracted { name }
            | DockEvent::Shown { name }
            | DockEvent::Hidden { name }
            | DockEvent::Closed { name } => name,
            DockEvent::TabSelected { current, .. } => current,
        }
    }
}

/// FIFO of pending events with an enable switch.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    enabled: bool,
    pending: Vec<DockEvent>,
}

impl EventQueue {
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn push(&mut self, event: DockEvent) {
        if self.enabled {
            tracing::trace!(?event, "dock event");
            self.pending.push(event);
        }
    }

    pub fn drain(&mut self) -> Vec<DockEvent> {
        std::mem::take(&mut self.pending)
    }
}
