//! Static window descriptors.
//!
//! A [`WindowDescriptor`] is the immutable metadata of one portfolio
//! application: its titles, default geometry, launcher presentation and the
//! content component rendered inside the window.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::geometry::{Point, Size};
use crate::shell::WindowContent;

/// Identifier of a portfolio application.
///
/// Window instances share the identifier of their descriptor, so an `AppId`
/// names both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(String);

impl AppId {
    /// Create an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AppId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AppId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AppId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for AppId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AppId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Preferred size of a window.
///
/// A missing height means the content decides its own height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultSize {
    pub width: f32,
    pub height: Option<f32>,
}

impl DefaultSize {
    /// A fixed width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }

    /// A fixed width with automatic height.
    pub const fn auto_height(width: f32) -> Self {
        Self { width, height: None }
    }

    /// Resolve to a concrete size, substituting `fallback_height` for an
    /// automatic height.
    pub fn resolve(&self, fallback_height: f32) -> Size {
        Size::new(self.width, self.height.unwrap_or(fallback_height))
    }
}

/// Where an application's launcher appears in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LauncherPlacement {
    /// An icon on the desktop surface.
    Desktop,
    /// An item in the dock.
    #[default]
    Dock,
    /// No launcher; the window is only reachable from other content.
    Hidden,
}

/// Static metadata for a portfolio application.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use folio_desk::shell::StaticContent;
/// use folio_desk::window::{DefaultSize, LauncherPlacement, WindowDescriptor};
///
/// let descriptor = WindowDescriptor::new("skills", "Skills", Arc::new(StaticContent::new("SkillsWindow")))
///     .with_subtitle("What I work with")
///     .with_default_size(DefaultSize::new(360.0, 280.0))
///     .with_placement(LauncherPlacement::Dock);
///
/// assert_eq!(descriptor.id().as_str(), "skills");
/// assert_eq!(descriptor.label(), "Skills");
/// ```
#[derive(Debug, Clone)]
pub struct WindowDescriptor {
    id: AppId,
    title: String,
    subtitle: String,
    default_size: DefaultSize,
    initial_position: Option<Point>,
    content: Arc<dyn WindowContent>,
    label: Option<String>,
    description: String,
    accent: Option<String>,
    placement: LauncherPlacement,
    external_link: Option<Url>,
}

impl WindowDescriptor {
    /// Create a descriptor with a 480x400 default size, placed in the dock.
    pub fn new(
        id: impl Into<AppId>,
        title: impl Into<String>,
        content: Arc<dyn WindowContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            default_size: DefaultSize::new(480.0, 400.0),
            initial_position: None,
            content,
            label: None,
            description: String::new(),
            accent: None,
            placement: LauncherPlacement::default(),
            external_link: None,
        }
    }

    // =========================================================================
    // Builder Pattern Methods
    // =========================================================================

    /// Set the subtitle shown under the title.
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the preferred size.
    pub fn with_default_size(mut self, size: DefaultSize) -> Self {
        self.default_size = size;
        self
    }

    /// Set the position used when the viewport cannot be measured.
    pub fn with_initial_position(mut self, x: f32, y: f32) -> Self {
        self.initial_position = Some(Point::new(x, y));
        self
    }

    /// Set the launcher label. Defaults to the title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the launcher description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the accent color as a hex string such as `"#3b82f6"`.
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.accent = Some(accent.into());
        self
    }

    /// Set where the launcher appears.
    pub fn with_placement(mut self, placement: LauncherPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Open this link instead of a window when activated from the desktop.
    pub fn with_external_link(mut self, link: Url) -> Self {
        self.external_link = Some(link);
        self
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &AppId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn default_size(&self) -> DefaultSize {
        self.default_size
    }

    pub fn initial_position(&self) -> Option<Point> {
        self.initial_position
    }

    /// The content component rendered inside the window.
    pub fn content(&self) -> &Arc<dyn WindowContent> {
        &self.content
    }

    /// The launcher label, falling back to the title.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.title)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn accent(&self) -> Option<&str> {
        self.accent.as_deref()
    }

    pub fn placement(&self) -> LauncherPlacement {
        self.placement
    }

    pub fn external_link(&self) -> Option<&Url> {
        self.external_link.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::StaticContent;

    fn content() -> Arc<dyn WindowContent> {
        Arc::new(StaticContent::new("Test"))
    }

    #[test]
    fn test_defaults() {
        let descriptor = WindowDescriptor::new("about", "About", content());
        assert_eq!(descriptor.id(), &AppId::from("about"));
        assert_eq!(descriptor.label(), "About");
        assert_eq!(descriptor.placement(), LauncherPlacement::Dock);
        assert_eq!(descriptor.default_size(), DefaultSize::new(480.0, 400.0));
        assert!(descriptor.initial_position().is_none());
        assert!(descriptor.external_link().is_none());
    }

    #[test]
    fn test_auto_height_resolves_to_fallback() {
        let size = DefaultSize::auto_height(520.0);
        assert_eq!(size.resolve(420.0), Size::new(520.0, 420.0));
        assert_eq!(DefaultSize::new(300.0, 200.0).resolve(420.0), Size::new(300.0, 200.0));
    }

    #[test]
    fn test_app_id_comparisons() {
        let id = AppId::new("finder");
        assert_eq!(id, "finder");
        assert_eq!(id.to_string(), "finder");
        let borrowed: &str = id.borrow();
        assert_eq!(borrowed, "finder");
    }
}
