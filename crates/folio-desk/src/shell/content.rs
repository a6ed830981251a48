//! Window content components.
//!
//! Content is opaque to the window manager: a component renders inside the
//! frame it is given and talks back only by asking a [`Launcher`] to open
//! other windows or external links.

use std::fmt;

use url::Url;

use crate::window::AppId;

/// A request made by content when one of its items is activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchRequest {
    /// Open (or raise) another window.
    Open(AppId),
    /// Open a link outside the shell.
    OpenExternal(Url),
}

/// Collects launch requests from content during one activation.
#[derive(Debug, Default)]
pub struct Launcher {
    requests: Vec<LaunchRequest>,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the shell to open a window.
    pub fn open(&mut self, id: impl Into<AppId>) {
        self.requests.push(LaunchRequest::Open(id.into()));
    }

    /// Ask the shell to open an external link.
    pub fn open_external(&mut self, url: Url) {
        self.requests.push(LaunchRequest::OpenExternal(url));
    }

    pub fn requests(&self) -> &[LaunchRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<LaunchRequest> {
        self.requests
    }
}

/// Something rendered inside a window.
pub trait WindowContent: fmt::Debug + Send + Sync {
    /// Name of the component the host renders for this content.
    fn component(&self) -> &str;

    /// Activate `item` (for example, double-click a file). Returns whether
    /// the item was recognized.
    fn activate(&self, item: &str, launcher: &mut Launcher) -> bool {
        let _ = (item, launcher);
        false
    }
}

/// Content with no interactive items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContent {
    component: String,
}

impl StaticContent {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }
}

impl WindowContent for StaticContent {
    fn component(&self) -> &str {
        &self.component
    }
}

/// What a Finder entry does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderTarget {
    /// A folder; activating it only navigates inside the Finder.
    Folder,
    /// Opens a portfolio window.
    App(AppId),
    /// Opens an external link.
    External(Url),
}

/// One file or folder shown by the Finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderEntry {
    pub name: String,
    /// Absolute path such as `/Desktop/resume`.
    pub path: String,
    /// Folder the entry is listed in.
    pub folder: String,
    pub target: FinderTarget,
}

impl FinderEntry {
    /// Create an entry listed in the parent folder of `path`.
    pub fn new(name: impl Into<String>, path: impl Into<String>, target: FinderTarget) -> Self {
        let path = path.into();
        let folder = match path.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(index) => path[..index].to_string(),
        };
        Self {
            name: name.into(),
            path,
            folder,
            target,
        }
    }

    /// List the entry in `folder` instead of its parent.
    pub fn shown_in(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

/// A file browser that cross-launches other windows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderContent {
    entries: Vec<FinderEntry>,
}

impl FinderContent {
    pub fn new(entries: Vec<FinderEntry>) -> Self {
        Self { entries }
    }

    /// Every entry, in display order.
    pub fn entries(&self) -> &[FinderEntry] {
        &self.entries
    }

    /// The entries directly inside `folder`.
    pub fn list(&self, folder: &str) -> impl Iterator<Item = &FinderEntry> {
        let folder = normalize(folder);
        self.entries
            .iter()
            .filter(move |entry| entry.folder == folder)
    }

    /// Look up an entry by path.
    pub fn entry(&self, path: &str) -> Option<&FinderEntry> {
        let path = normalize(path);
        self.entries.iter().find(|entry| entry.path == path)
    }
}

impl WindowContent for FinderContent {
    fn component(&self) -> &str {
        "finder"
    }

    fn activate(&self, item: &str, launcher: &mut Launcher) -> bool {
        let Some(entry) = self.entry(item) else {
            return false;
        };
        match &entry.target {
            FinderTarget::Folder => {}
            FinderTarget::App(id) => launcher.open(id.clone()),
            FinderTarget::External(url) => launcher.open_external(url.clone()),
        }
        true
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder() -> FinderContent {
        FinderContent::new(vec![
            FinderEntry::new("Desktop", "/Desktop", FinderTarget::Folder),
            FinderEntry::new("Articles", "/Articles", FinderTarget::App("articles".into())),
            FinderEntry::new("Skills", "/Applications/skills", FinderTarget::App("skills".into()))
                .shown_in("/"),
            FinderEntry::new("Resume", "/Desktop/resume", FinderTarget::App("resume".into())),
            FinderEntry::new(
                "Recapy",
                "/Desktop/recapy",
                FinderTarget::External(Url::parse("https://recapy.framer.ai").unwrap()),
            ),
        ])
    }

    #[test]
    fn test_listing() {
        let finder = finder();
        let root: Vec<_> = finder.list("/").map(|e| e.name.as_str()).collect();
        assert_eq!(root, ["Desktop", "Articles", "Skills"]);
        let desktop: Vec<_> = finder.list("/Desktop/").map(|e| e.name.as_str()).collect();
        assert_eq!(desktop, ["Resume", "Recapy"]);
    }

    #[test]
    fn test_activate_requests_launches() {
        let finder = finder();
        let mut launcher = Launcher::new();

        assert!(finder.activate("/Desktop/resume", &mut launcher));
        assert!(finder.activate("/Desktop/recapy", &mut launcher));
        assert!(finder.activate("/Desktop", &mut launcher));
        assert!(finder.activate("/Applications/skills/", &mut launcher));
        assert!(!finder.activate("/Nope", &mut launcher));

        assert_eq!(
            launcher.into_requests(),
            vec![
                LaunchRequest::Open("resume".into()),
                LaunchRequest::OpenExternal(Url::parse("https://recapy.framer.ai").unwrap()),
                LaunchRequest::Open("skills".into()),
            ]
        );
    }

    #[test]
    fn test_static_content_ignores_activation() {
        let content = StaticContent::new("skills");
        let mut launcher = Launcher::new();
        assert_eq!(content.component(), "skills");
        assert!(!content.activate("anything", &mut launcher));
        assert!(launcher.requests().is_empty());
    }
}
