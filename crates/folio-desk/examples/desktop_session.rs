//! folio-desk Desktop Session Example
//!
//! Drives a scripted session against the portfolio catalog and prints the
//! desktop scene after each step:
//! - Start-up (Finder open)
//! - Opening windows from the dock and from the Finder
//! - Dragging and resizing through the pointer controller
//! - Maximize, then crossing into the mobile layout
//!
//! Run with: RUST_LOG=folio_desk=debug cargo run -p folio-desk --example desktop_session

use cursor_icon::CursorIcon;
use tracing_subscriber::EnvFilter;

use folio_desk::interaction::{PointerController, PointerEvent, PointerHost, PointerId};
use folio_desk::prelude::*;
use folio_desk::shell::{DesktopScene, TrafficLight};

/// A host that only logs what it is asked to do.
#[derive(Default)]
struct ConsoleHost {
    previews: usize,
}

impl PointerHost for ConsoleHost {
    fn capture_pointer(&mut self, pointer_id: PointerId) {
        println!("  capture pointer {}", pointer_id.0);
    }

    fn release_pointer(&mut self, pointer_id: PointerId) {
        println!("  release pointer {}", pointer_id.0);
    }

    fn attach_listeners(&mut self, _pointer_id: PointerId) {}

    fn detach_listeners(&mut self, _pointer_id: PointerId) {}

    fn apply_preview(&mut self, window: &AppId, frame: Rect) {
        self.previews += 1;
        println!(
            "  preview {window}: {:.0},{:.0} {:.0}x{:.0}",
            frame.left(),
            frame.top(),
            frame.width(),
            frame.height()
        );
    }

    fn clear_preview(&mut self, _window: &AppId) {}

    fn set_cursor(&mut self, cursor: CursorIcon) {
        println!("  cursor {}", cursor.name());
    }
}

fn print_scene(step: &str, scene: &DesktopScene) {
    println!("\n== {step} ({:?}, {})", scene.layout, scene.menu_bar.clock);
    for view in &scene.windows {
        println!(
            "  {:<28} z={:<2} {:>6.0},{:<6.0} {:>5.0}x{:<5.0}{}{}",
            view.title,
            view.z_index,
            view.frame.left(),
            view.frame.top(),
            view.frame.width(),
            view.frame.height(),
            if view.is_maximized { " maximized" } else { "" },
            if view.is_focused { " *" } else { "" },
        );
    }
    let active: Vec<_> = scene
        .dock
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label.as_str())
        .collect();
    println!("  dock active: {}", active.join(", "));
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let manager = WindowManager::new(
        catalog::portfolio_registry()?,
        ShellConfig::default(),
        DisplayEnvironment::new(1440.0, 900.0),
    );
    manager.window_event().connect(|event| {
        tracing::info!(?event, "window event");
    });

    let mut shell = DesktopShell::start(manager);
    print_scene("start", &shell.scene(chrono::Local::now()));

    shell.handle(ShellEvent::DockClicked("skills".into()));
    shell.handle(ShellEvent::ContentActivated {
        id: "finder".into(),
        item: "/Desktop/resume".into(),
    });
    for effect in shell.handle(ShellEvent::IconActivated("recapy".into())) {
        let ShellEffect::OpenExternal(url) = effect;
        println!("\n  open external {url}");
    }
    print_scene("opened", &shell.scene(chrono::Local::now()));

    let mut controller = PointerController::new(ConsoleHost::default());
    let title_bar = shell
        .manager()
        .frame("skills")
        .map(|frame| Point::new(frame.left() + 100.0, frame.top() + 12.0))
        .unwrap_or_default();

    println!("\n== drag skills by its title bar");
    let press = PointerEvent::mouse(1, title_bar.x, title_bar.y);
    controller.pointer_down(shell.manager(), "skills", ChromeRegion::TitleBar, press);
    for step in 1..=4 {
        let offset = step as f32 * 40.0;
        controller.pointer_move(press.moved_to(title_bar.x + offset, title_bar.y + offset / 2.0));
        controller.frame_tick();
    }
    controller.pointer_up(shell.manager(), press.moved_to(title_bar.x + 160.0, title_bar.y + 80.0));

    println!("\n== resize skills from its bottom-right corner");
    if let Some(frame) = shell.manager().frame("skills") {
        let corner = PointerEvent::mouse(2, frame.right() - 2.0, frame.bottom() - 2.0);
        controller.pointer_down(shell.manager(), "skills", ChromeRegion::Body, corner);
        controller.pointer_move(corner.moved_to(frame.right() + 120.0, frame.bottom() + 90.0));
        controller.frame_tick();
        controller.pointer_up(
            shell.manager(),
            corner.moved_to(frame.right() + 120.0, frame.bottom() + 90.0),
        );
    }
    println!("  {} previews shown", controller.host().previews);
    print_scene("after gestures", &shell.scene(chrono::Local::now()));

    shell.handle(ShellEvent::TrafficLight {
        id: "resume".into(),
        button: TrafficLight::Zoom,
    });
    print_scene("resume maximized", &shell.scene(chrono::Local::now()));

    shell
        .manager()
        .update_environment(DisplayEnvironment::new(390.0, 844.0));
    print_scene("phone viewport", &shell.scene(chrono::Local::now()));

    Ok(())
}
