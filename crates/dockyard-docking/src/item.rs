//! The application-facing content unit.

/// Content that can be docked, tabbed, floated and pinned to a dock bar.
///
/// The engine only needs identity and presentation metadata; the actual
/// content widget stays with the embedding application.
pub trait DockItem {
    /// Unique name used to reference the item from layouts.
    fn name(&self) -> &str;

    fn title(&self) -> &str {
        self.name()
    }

    fn icon(&self) -> Option<&str> {
        None
    }

    fn closable(&self) -> bool {
        true
    }

    /// Called when the user asks to close the item. Returning `false` vetoes
    /// the close.
    fn request_close(&mut self) -> bool {
        true
    }
}

/// A plain named item with no content, useful for scripted sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    name: String,
    title: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl DockItem for NamedItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }
}
