//! Integration tests for the window manager.

use std::sync::{Arc, Mutex};

use folio_desk::config::ShellConfig;
use folio_desk::geometry::{Point, Size};
use folio_desk::shell::catalog;
use folio_desk::window::{
    AppId, DisplayEnvironment, LayoutMode, RestoreState, WindowEvent, WindowManager,
};

fn desktop() -> WindowManager {
    manager(DisplayEnvironment::new(1440.0, 900.0))
}

fn manager(environment: DisplayEnvironment) -> WindowManager {
    WindowManager::new(
        catalog::portfolio_registry().unwrap(),
        ShellConfig::default(),
        environment,
    )
}

fn visible_ids(manager: &WindowManager) -> Vec<String> {
    manager
        .windows()
        .iter()
        .map(|entry| entry.instance.id.to_string())
        .collect()
}

fn record_events(manager: &WindowManager) -> Arc<Mutex<Vec<WindowEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    manager.window_event().connect(move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    events
}

// ============================================================================
// Open / Focus
// ============================================================================

#[test]
fn test_open_twice_keeps_single_instance() {
    let manager = desktop();
    manager.open("finder");
    let first = manager.instance("finder").unwrap();
    manager.minimize("finder");

    manager.open("finder");
    let second = manager.instance("finder").unwrap();

    assert_eq!(manager.count(), 1);
    assert_eq!(second.position, first.position);
    assert_eq!(second.size_override, first.size_override);
    assert!(!second.is_minimized);
    assert!(second.z_index > first.z_index);
}

#[test]
fn test_focused_window_is_strictly_frontmost() {
    let manager = desktop();
    let script = [
        ("open", "finder"),
        ("open", "resume"),
        ("open", "skills"),
        ("focus", "finder"),
        ("open", "resume"),
        ("focus", "skills"),
        ("focus", "skills"),
    ];

    for (op, id) in script {
        match op {
            "open" => manager.open(id),
            _ => manager.focus(id),
        }
        let top = manager.instance(id).unwrap().z_index;
        for entry in manager.all_windows() {
            if entry.instance.id != id {
                assert!(top > entry.instance.z_index, "{id} not above {}", entry.instance.id);
            }
        }
    }
}

#[test]
fn test_finder_resume_focus_scenario() {
    let manager = desktop();
    manager.open("finder");
    manager.open("resume");
    manager.focus("finder");

    assert_eq!(visible_ids(&manager), ["resume", "finder"]);
    let finder = manager.instance("finder").unwrap();
    let resume = manager.instance("resume").unwrap();
    assert!(resume.z_index < finder.z_index);
    assert!(!finder.is_minimized);
    assert!(!resume.is_minimized);
}

#[test]
fn test_focus_unminimizes() {
    let manager = desktop();
    manager.open("skills");
    manager.minimize("skills");
    assert!(visible_ids(&manager).is_empty());

    manager.focus("skills");
    assert_eq!(visible_ids(&manager), ["skills"]);
}

#[test]
fn test_desktop_open_centers_with_cascade() {
    let manager = desktop();
    manager.open("finder");
    manager.open("skills");
    manager.open("contact");

    // 600x500 centered, no cascade.
    assert_eq!(manager.instance("finder").unwrap().position, Point::new(420.0, 200.0));
    // 360x280 centered plus one cascade step.
    assert_eq!(manager.instance("skills").unwrap().position, Point::new(560.0, 330.0));
    // 400x300 centered plus two cascade steps.
    assert_eq!(manager.instance("contact").unwrap().position, Point::new(560.0, 340.0));
    assert!(manager.instance("finder").unwrap().size_override.is_none());
}

#[test]
fn test_open_without_viewport_uses_catalog_position() {
    let manager = manager(DisplayEnvironment::unmeasured());
    manager.open("skills");
    let skills = manager.instance("skills").unwrap();
    assert_eq!(skills.position, Point::new(540.0, 200.0));
    assert!(skills.size_override.is_none());
}

#[test]
fn test_mobile_open_fills_width() {
    let manager = manager(DisplayEnvironment::new(390.0, 844.0));
    manager.open("resume");

    let resume = manager.instance("resume").unwrap();
    assert_eq!(resume.position, Point::new(0.0, 24.0));
    let size = resume.size_override.unwrap();
    assert_eq!(size.width, 390.0);
    assert!((size.height - 548.6).abs() < 0.01);
}

#[test]
fn test_mobile_agent_forces_mobile_layout() {
    let manager = manager(DisplayEnvironment::new(1024.0, 1366.0).with_mobile_agent(true));
    assert_eq!(manager.layout_mode(), LayoutMode::Mobile);
}

// ============================================================================
// Minimize / Close
// ============================================================================

#[test]
fn test_minimized_window_stays_open() {
    let manager = desktop();
    manager.open("finder");
    manager.open("skills");
    manager.minimize("skills");

    assert_eq!(visible_ids(&manager), ["finder"]);
    assert!(manager.open_ids().contains(&AppId::from("skills")));
    assert!(manager.is_open("skills"));
}

#[test]
fn test_close_is_final() {
    let manager = desktop();
    manager.open("finder");
    manager.open("skills");
    manager.close("skills");

    assert_eq!(visible_ids(&manager), ["finder"]);
    assert!(!manager.open_ids().contains(&AppId::from("skills")));

    let before = manager.snapshot();
    manager.focus("skills");
    manager.move_window("skills", Point::new(10.0, 40.0));
    manager.resize("skills", Size::new(300.0, 300.0));
    manager.minimize("skills");
    manager.toggle_maximize("skills");
    assert!(Arc::ptr_eq(&before, &manager.snapshot()));
}

#[test]
fn test_reopen_after_close_starts_fresh() {
    let manager = desktop();
    manager.open("skills");
    manager.resize("skills", Size::new(500.0, 400.0));
    manager.close("skills");
    manager.open("skills");
    assert!(manager.instance("skills").unwrap().size_override.is_none());
}

// ============================================================================
// Maximize / Restore
// ============================================================================

#[test]
fn test_maximize_round_trip_restores_geometry() {
    let manager = desktop();
    manager.open("resume");
    manager.move_window("resume", Point::new(120.0, 90.0));
    manager.resize("resume", Size::new(700.0, 500.0));

    manager.toggle_maximize("resume");
    let maximized = manager.instance("resume").unwrap();
    assert!(maximized.is_maximized);
    assert_eq!(maximized.position, Point::new(16.0, 22.0));
    assert_eq!(maximized.size_override, Some(Size::new(1408.0, 878.0)));
    assert_eq!(
        maximized.restore_state,
        Some(RestoreState {
            position: Point::new(120.0, 90.0),
            size_override: Some(Size::new(700.0, 500.0)),
        })
    );

    manager.toggle_maximize("resume");
    let restored = manager.instance("resume").unwrap();
    assert!(!restored.is_maximized);
    assert!(restored.restore_state.is_none());
    assert_eq!(restored.position, Point::new(120.0, 90.0));
    assert_eq!(restored.size_override, Some(Size::new(700.0, 500.0)));
}

#[test]
fn test_maximize_round_trip_keeps_default_size() {
    let manager = desktop();
    manager.open("skills");
    let before = manager.instance("skills").unwrap();

    manager.toggle_maximize("skills");
    manager.toggle_maximize("skills");
    let after = manager.instance("skills").unwrap();
    assert_eq!(after.position, before.position);
    assert_eq!(after.size_override, None);
}

#[test]
fn test_maximize_keeps_preferred_height() {
    let manager = manager(DisplayEnvironment::new(1280.0, 500.0));
    manager.open("resume");
    manager.toggle_maximize("resume");

    // The workspace is 478 tall but the resume prefers 600.
    let size = manager.instance("resume").unwrap().size_override.unwrap();
    assert_eq!(size, Size::new(1248.0, 600.0));
}

#[test]
fn test_maximize_without_viewport_is_ignored() {
    let manager = manager(DisplayEnvironment::unmeasured());
    manager.open("resume");
    manager.toggle_maximize("resume");
    assert!(!manager.instance("resume").unwrap().is_maximized);
}

#[test]
fn test_move_escapes_maximize() {
    let manager = desktop();
    manager.open("resume");
    manager.toggle_maximize("resume");
    manager.move_window("resume", Point::new(50.0, 80.0));

    let resume = manager.instance("resume").unwrap();
    assert!(!resume.is_maximized);
    assert!(resume.restore_state.is_none());
    assert_eq!(resume.position, Point::new(50.0, 80.0));
}

#[test]
fn test_resize_escapes_maximize() {
    let manager = desktop();
    manager.open("resume");
    manager.toggle_maximize("resume");
    manager.resize("resume", Size::new(900.0, 700.0));

    let resume = manager.instance("resume").unwrap();
    assert!(!resume.is_maximized);
    assert!(resume.restore_state.is_none());
    assert_eq!(resume.position, Point::new(16.0, 22.0));
    assert_eq!(resume.size_override, Some(Size::new(900.0, 700.0)));

    // Nothing left to restore to: the next toggle maximizes again.
    manager.toggle_maximize("resume");
    assert!(manager.instance("resume").unwrap().is_maximized);
}

#[test]
fn test_restore_works_after_viewport_is_lost() {
    let manager = manager(DisplayEnvironment::new(1440.0, 900.0));
    manager.open("resume");
    manager.toggle_maximize("resume");
    manager.update_environment(DisplayEnvironment::unmeasured());

    // Still maximized without a viewport; restoring works.
    let before = manager.instance("resume").unwrap();
    manager.toggle_maximize("resume");
    let after = manager.instance("resume").unwrap();
    assert!(!after.is_maximized);
    assert_eq!(after.position, before.restore_state.unwrap().position);
}

// ============================================================================
// Layout Changes
// ============================================================================

#[test]
fn test_entering_mobile_reflows_every_window() {
    let manager = desktop();
    let events = record_events(&manager);
    manager.open("finder");
    manager.open("resume");
    manager.toggle_maximize("resume");
    events.lock().unwrap().clear();

    manager.update_environment(DisplayEnvironment::new(390.0, 844.0));

    assert_eq!(manager.layout_mode(), LayoutMode::Mobile);
    for entry in manager.all_windows() {
        assert_eq!(entry.instance.position, Point::new(0.0, 24.0));
        assert_eq!(entry.instance.size_override.unwrap().width, 390.0);
        assert!(!entry.instance.is_maximized);
        assert!(entry.instance.restore_state.is_none());
    }

    let events = events.lock().unwrap();
    assert_eq!(
        events[0],
        WindowEvent::LayoutChanged {
            from: LayoutMode::Desktop,
            to: LayoutMode::Mobile,
        }
    );
    assert_eq!(events.len(), 3);
}

#[test]
fn test_leaving_mobile_keeps_geometry() {
    let manager = manager(DisplayEnvironment::new(390.0, 844.0));
    manager.open("finder");
    let mobile = manager.instance("finder").unwrap();

    manager.update_environment(DisplayEnvironment::new(1440.0, 900.0));
    assert_eq!(manager.layout_mode(), LayoutMode::Desktop);
    assert_eq!(manager.instance("finder").unwrap(), mobile);
}

#[test]
fn test_mobile_agent_reflows_when_viewport_is_measured() {
    let manager = manager(DisplayEnvironment::unmeasured().with_mobile_agent(true));
    assert_eq!(manager.layout_mode(), LayoutMode::Mobile);
    manager.open("resume");
    assert_eq!(manager.instance("resume").unwrap().position, Point::new(640.0, 360.0));

    manager.update_environment(DisplayEnvironment::new(390.0, 844.0).with_mobile_agent(true));

    let resume = manager.instance("resume").unwrap();
    assert_eq!(resume.position, Point::new(0.0, 24.0));
    let frame = manager.frame("resume").unwrap();
    assert_eq!(frame.width(), 390.0);
    assert!(frame.right() <= 390.0);
}

#[test]
fn test_resize_within_layout_does_not_reflow() {
    let manager = desktop();
    let layouts = Arc::new(Mutex::new(Vec::new()));
    let sink = layouts.clone();
    manager.layout_changed().connect(move |mode| sink.lock().unwrap().push(*mode));

    manager.open("finder");
    let before = manager.instance("finder").unwrap();
    manager.update_environment(DisplayEnvironment::new(1280.0, 720.0));

    assert_eq!(manager.instance("finder").unwrap(), before);
    assert_eq!(manager.environment().viewport, Some(Size::new(1280.0, 720.0)));
    assert!(layouts.lock().unwrap().is_empty());

    manager.update_environment(DisplayEnvironment::new(600.0, 720.0));
    assert_eq!(*layouts.lock().unwrap(), [LayoutMode::Mobile]);
}

// ============================================================================
// Signals
// ============================================================================

#[test]
fn test_lifecycle_signals() {
    let manager = desktop();
    let log = Arc::new(Mutex::new(Vec::new()));

    let sink = log.clone();
    manager
        .window_opened()
        .connect(move |id| sink.lock().unwrap().push(format!("opened {id}")));
    let sink = log.clone();
    manager
        .window_focused()
        .connect(move |id| sink.lock().unwrap().push(format!("focused {id}")));
    let sink = log.clone();
    manager
        .window_closed()
        .connect(move |id| sink.lock().unwrap().push(format!("closed {id}")));

    manager.open("finder");
    manager.open("skills");
    manager.focus("finder");
    manager.close("skills");

    assert_eq!(
        *log.lock().unwrap(),
        [
            "opened finder",
            "focused finder",
            "opened skills",
            "focused skills",
            "focused finder",
            "closed skills",
        ]
    );
}

#[test]
fn test_dispatch_returns_applied_events() {
    let manager = desktop();
    let events = manager.dispatch(folio_desk::window::WindowAction::Open("finder".into()));
    assert_eq!(events, [WindowEvent::Opened { id: "finder".into() }]);

    let events = manager.dispatch(folio_desk::window::WindowAction::Close("missing".into()));
    assert!(events.is_empty());
}
