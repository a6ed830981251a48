//! The portfolio's window catalog.

use std::sync::Arc;

use url::Url;

use super::content::{FinderContent, FinderEntry, FinderTarget, StaticContent, WindowContent};
use crate::error::{Error, Result};
use crate::window::{DefaultSize, LauncherPlacement, WindowDescriptor, WindowRegistry};

/// Id of the window opened when the shell starts.
pub const STARTUP_WINDOW: &str = "finder";

const RECAPY_URL: &str = "https://recapy.framer.ai";
const TWITTER_URL: &str = "https://x.com/Nicolo_Tognoni";

/// Desktop icons listed in the Finder's Desktop folder.
const DESKTOP_FOLDER: [&str; 4] = ["projects", "resume", "recapy", "bending-spoon-cover-letter"];

/// Build the portfolio registry.
pub fn portfolio_registry() -> Result<WindowRegistry> {
    WindowRegistry::new(portfolio_descriptors()?)
}

/// Every portfolio descriptor, Finder first.
pub fn portfolio_descriptors() -> Result<Vec<WindowDescriptor>> {
    let apps = vec![
        app("education", "Education", "education")
            .with_subtitle("Academic path in analytics and business")
            .with_default_size(DefaultSize::new(480.0, 400.0))
            .with_initial_position(200.0, 180.0)
            .with_description("Academic background and certifications.")
            .with_accent("#34d399"),
        app("experience", "Work Experience", "experience")
            .with_label("Experience")
            .with_subtitle("Professional roles and career milestones")
            .with_default_size(DefaultSize::new(480.0, 400.0))
            .with_initial_position(300.0, 260.0)
            .with_description("Work history in analytics and engineering.")
            .with_accent("#38bdf8"),
        app("skills", "Skills & Tooling", "skills")
            .with_label("Skills")
            .with_subtitle("Technical toolkit for analytics work")
            .with_default_size(DefaultSize::new(360.0, 280.0))
            .with_initial_position(540.0, 200.0)
            .with_description("Core programming and data tools.")
            .with_accent("#f472b6"),
        app("contact", "Get in touch", "contact")
            .with_subtitle("Reach out about analytics or engineering projects")
            .with_default_size(DefaultSize::new(400.0, 300.0))
            .with_initial_position(780.0, 160.0)
            .with_description("Let's collaborate.")
            .with_accent("#a78bfa"),
        app("projects", "Selected Projects", "projects")
            .with_label("Projects")
            .with_subtitle("Analytics initiatives and published research")
            .with_default_size(DefaultSize::new(520.0, 450.0))
            .with_initial_position(360.0, 110.0)
            .with_description("Projects, articles, and experiments.")
            .with_accent("#f79d3c")
            .with_placement(LauncherPlacement::Desktop),
        app("articles", "Articles", "articles")
            .with_subtitle("Technical articles and publications")
            .with_default_size(DefaultSize::new(520.0, 450.0))
            .with_initial_position(400.0, 150.0)
            .with_description("Published articles and technical writing.")
            .with_accent("#8b5cf6")
            .with_placement(LauncherPlacement::Hidden),
        app("resume", "Resume & Press", "document")
            .with_label("Resume")
            .with_subtitle("Download the latest curriculum")
            .with_default_size(DefaultSize::new(800.0, 600.0))
            .with_initial_position(640.0, 360.0)
            .with_description("Downloadable CV & press kit.")
            .with_accent("#34d399")
            .with_placement(LauncherPlacement::Desktop),
        app("recapy", "Recapy", "recapy")
            .with_subtitle("AI-powered video summaries")
            .with_default_size(DefaultSize::new(300.0, 200.0))
            .with_initial_position(500.0, 300.0)
            .with_description("Video Knowledge, Instantly Captured.")
            .with_accent("#6366f1")
            .with_placement(LauncherPlacement::Desktop)
            .with_external_link(link("recapy", RECAPY_URL)?),
        app("photo-booth", "Photo Booth", "photo-booth")
            .with_subtitle("Take photos with effects")
            .with_default_size(DefaultSize::new(640.0, 480.0))
            .with_initial_position(200.0, 100.0)
            .with_description("Take photos with your camera and apply fun effects.")
            .with_accent("#f59e0b"),
        app("bending-spoon-cover-letter", "Cover Letter", "document")
            .with_subtitle("PDF Document")
            .with_default_size(DefaultSize::new(800.0, 600.0))
            .with_initial_position(300.0, 200.0)
            .with_description("Cover letter for BendingSpoon position.")
            .with_accent("#dc2626")
            .with_placement(LauncherPlacement::Desktop),
    ];

    let finder = WindowDescriptor::new(
        STARTUP_WINDOW,
        "Macintosh HD",
        Arc::new(finder_content(&apps)?),
    )
    .with_label("Finder")
    .with_subtitle("Finder")
    .with_default_size(DefaultSize::new(600.0, 500.0))
    .with_initial_position(120.0, 140.0)
    .with_description("My details and information.")
    .with_accent("#4da3ff");

    let mut descriptors = Vec::with_capacity(apps.len() + 1);
    descriptors.push(finder);
    descriptors.extend(apps);
    Ok(descriptors)
}

/// Lay out the Finder over the other applications.
///
/// The root lists the Desktop folder, the Articles window, the Trash and
/// every dock application; the Desktop folder lists the desktop icons.
fn finder_content(apps: &[WindowDescriptor]) -> Result<FinderContent> {
    let mut entries = vec![
        FinderEntry::new("Desktop", "/Desktop", FinderTarget::Folder),
        FinderEntry::new("Articles", "/Articles", FinderTarget::App("articles".into())),
        FinderEntry::new("Trash", "/Trash", FinderTarget::Folder),
    ];

    entries.extend(
        apps.iter()
            .filter(|app| app.placement() == LauncherPlacement::Dock)
            .map(|app| {
                FinderEntry::new(
                    app.label(),
                    format!("/Applications/{}", app.id()),
                    target(app),
                )
                .shown_in("/")
            }),
    );
    entries.push(
        FinderEntry::new(
            "Twitter",
            "/Applications/twitter",
            FinderTarget::External(link("twitter", TWITTER_URL)?),
        )
        .shown_in("/"),
    );

    for id in DESKTOP_FOLDER {
        if let Some(app) = apps.iter().find(|app| app.id() == id) {
            entries.push(FinderEntry::new(
                app.label(),
                format!("/Desktop/{id}"),
                target(app),
            ));
        }
    }

    Ok(FinderContent::new(entries))
}

fn target(app: &WindowDescriptor) -> FinderTarget {
    match app.external_link() {
        Some(url) => FinderTarget::External(url.clone()),
        None => FinderTarget::App(app.id().clone()),
    }
}

fn app(id: &str, title: &str, component: &str) -> WindowDescriptor {
    let content: Arc<dyn WindowContent> = Arc::new(StaticContent::new(component));
    WindowDescriptor::new(id, title, content)
}

fn link(id: &str, url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| Error::invalid_link(id, source))
}
