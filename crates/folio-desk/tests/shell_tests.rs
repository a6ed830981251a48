//! Integration tests for the desktop shell and its scene.

use chrono::{FixedOffset, TimeZone};
use url::Url;

use folio_desk::config::ShellConfig;
use folio_desk::shell::{DesktopShell, ShellEffect, ShellEvent, TrafficLight, catalog};
use folio_desk::window::{AppId, DisplayEnvironment, LayoutMode, WindowManager};

fn start(width: f32, height: f32) -> DesktopShell {
    let manager = WindowManager::new(
        catalog::portfolio_registry().unwrap(),
        ShellConfig::default(),
        DisplayEnvironment::new(width, height),
    );
    DesktopShell::start(manager)
}

fn clock() -> chrono::DateTime<FixedOffset> {
    FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2025, 6, 13, 9, 30, 0)
        .unwrap()
}

#[test]
fn test_startup_scene() {
    let shell = start(1440.0, 900.0);
    let scene = shell.scene(clock());

    assert_eq!(scene.layout, LayoutMode::Desktop);
    assert_eq!(scene.menu_bar.clock, "Fri 09:30");
    assert_eq!(
        scene.menu_bar.menus,
        ["File", "Edit", "View", "Go", "Window", "Help"]
    );

    let icons: Vec<_> = scene.desktop_icons.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(icons, ["Projects", "Resume", "Recapy", "Cover Letter"]);

    let dock: Vec<_> = scene.dock.iter().map(|i| (i.label.as_str(), i.active)).collect();
    assert_eq!(
        dock,
        [
            ("Finder", true),
            ("Education", false),
            ("Experience", false),
            ("Skills", false),
            ("Get in touch", false),
            ("Photo Booth", false),
        ]
    );

    assert_eq!(scene.windows.len(), 1);
    let finder = &scene.windows[0];
    assert_eq!(finder.title, "Macintosh HD");
    assert_eq!(finder.component, "finder");
    assert!(finder.is_focused);
}

#[test]
fn test_dock_click_opens_and_raises() {
    let mut shell = start(1440.0, 900.0);
    shell.handle(ShellEvent::DockClicked("education".into()));
    shell.handle(ShellEvent::DockClicked("finder".into()));

    let scene = shell.scene(clock());
    let order: Vec<_> = scene.windows.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(order, ["education", "finder"]);
}

#[test]
fn test_minimized_window_keeps_dock_marker() {
    let mut shell = start(1440.0, 900.0);
    shell.handle(ShellEvent::TrafficLight {
        id: "finder".into(),
        button: TrafficLight::Minimize,
    });

    let scene = shell.scene(clock());
    assert!(scene.windows.is_empty());
    assert!(scene.dock.iter().any(|item| item.id == "finder" && item.active));

    shell.handle(ShellEvent::DockClicked("finder".into()));
    assert_eq!(shell.scene(clock()).windows.len(), 1);
}

#[test]
fn test_desktop_icon_double_click_opens_window() {
    let mut shell = start(1440.0, 900.0);
    shell.handle(ShellEvent::IconSelected("projects".into()));
    assert!(shell.scene(clock()).desktop_icons[0].selected);

    let effects = shell.handle(ShellEvent::IconActivated("projects".into()));
    assert!(effects.is_empty());
    assert!(shell.manager().is_open("projects"));

    shell.handle(ShellEvent::DesktopClicked);
    assert!(shell.scene(clock()).desktop_icons.iter().all(|icon| !icon.selected));
}

#[test]
fn test_recapy_icon_opens_link() {
    let mut shell = start(1440.0, 900.0);
    let effects = shell.handle(ShellEvent::IconActivated("recapy".into()));
    assert_eq!(
        effects,
        [ShellEffect::OpenExternal(
            Url::parse("https://recapy.framer.ai").unwrap()
        )]
    );
    assert_eq!(shell.manager().count(), 1);
}

#[test]
fn test_finder_launches_other_windows() {
    let mut shell = start(1440.0, 900.0);

    let effects = shell.handle(ShellEvent::ContentActivated {
        id: "finder".into(),
        item: "/Articles".into(),
    });
    assert!(effects.is_empty());
    assert!(shell.manager().is_open("articles"));

    shell.handle(ShellEvent::ContentActivated {
        id: "finder".into(),
        item: "/Desktop/bending-spoon-cover-letter".into(),
    });
    let front = shell.scene(clock()).windows.last().cloned().unwrap();
    assert_eq!(front.id, "bending-spoon-cover-letter");
    assert_eq!(front.component, "document");

    let effects = shell.handle(ShellEvent::ContentActivated {
        id: "finder".into(),
        item: "/Applications/twitter".into(),
    });
    assert!(matches!(
        effects.as_slice(),
        [ShellEffect::OpenExternal(url)] if url.host_str() == Some("x.com")
    ));

    // Folders only navigate.
    let before = shell.manager().count();
    shell.handle(ShellEvent::ContentActivated {
        id: "finder".into(),
        item: "/Desktop".into(),
    });
    assert_eq!(shell.manager().count(), before);
}

#[test]
fn test_window_press_focuses() {
    let mut shell = start(1440.0, 900.0);
    shell.handle(ShellEvent::DockClicked("skills".into()));
    shell.handle(ShellEvent::WindowPressed("finder".into()));

    let scene = shell.scene(clock());
    assert!(scene.window("finder").unwrap().is_focused);
    assert!(!scene.window("skills").unwrap().is_focused);
}

#[test]
fn test_zoom_and_phone_viewport() {
    let mut shell = start(1440.0, 900.0);
    shell.handle(ShellEvent::TrafficLight {
        id: "finder".into(),
        button: TrafficLight::Zoom,
    });
    assert!(shell.scene(clock()).windows[0].is_maximized);

    shell
        .manager()
        .update_environment(DisplayEnvironment::new(390.0, 844.0));
    let scene = shell.scene(clock());
    assert_eq!(scene.layout, LayoutMode::Mobile);
    assert_eq!(scene.menu_bar.height, 24.0);
    assert!(scene.menu_bar.menus.is_empty());
    assert!(!scene.windows[0].is_maximized);
    assert_eq!(scene.windows[0].frame.width(), 390.0);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut shell = start(1440.0, 900.0);
    let before = shell.manager().snapshot();

    assert!(shell.handle(ShellEvent::IconActivated("nope".into())).is_empty());
    shell.handle(ShellEvent::DockClicked("nope".into()));
    shell.handle(ShellEvent::WindowPressed(AppId::from("skills")));
    shell.handle(ShellEvent::ContentActivated {
        id: "nope".into(),
        item: "/Desktop".into(),
    });

    assert!(std::sync::Arc::ptr_eq(&before, &shell.manager().snapshot()));
}
