use std::time::{Duration, Instant};

use panel_wm::Desktop;
use panel_wm::constants::{CLOSE_DELAY, Z_INDEX_BASELINE};
use panel_wm::document::{DocumentBuilder, Transition, WindowSpec};
use panel_wm::tabs::TabButtonRef;
use panel_wm::theme::{DARK_CLASS, LIGHT_CLASS, Theme};
use panel_wm::window::{Point, Size};

fn desktop() -> Desktop {
    let doc = DocumentBuilder::new(Size::new(1200.0, 800.0))
        .theme(Theme::Light)
        .theme_label()
        .window(
            WindowSpec::new("about", "About")
                .size(400.0, 300.0)
                .tab("bio", "Bio", "bio text")
                .tab("skills", "Skills", "skills text"),
        )
        .window(
            WindowSpec::new("projects", "Projects")
                .size(300.0, 200.0)
                .tab("bio", "Bio", "projects bio")
                .tab("list", "List", "projects list"),
        )
        .window(WindowSpec::new("contact", "Contact").size(320.0, 240.0))
        .build()
        .expect("document");
    Desktop::new(doc)
}

fn origin(d: &Desktop, id: &str) -> Point {
    d.document().window(id).expect("window").rect().origin()
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut d = desktop();
    assert!(!d.open_window("nope"));
    assert!(!d.close_window("nope"));
    assert!(!d.document().overlay().is_active());
    assert_eq!(d.lifecycle().z_order().highest(), Z_INDEX_BASELINE);
    assert!(d.document().windows().iter().all(|w| !w.is_displayed()));
}

#[test]
fn first_open_centers_in_viewport() {
    let mut d = desktop();
    assert!(d.open_modal("about"));
    assert_eq!(origin(&d, "about"), Point::new(400.0, 250.0));
    assert!(d.is_open("about"));
    assert!(d.document().overlay().is_active());
}

#[test]
fn close_then_reopen_restores_position() {
    let mut d = desktop();
    let t0 = Instant::now();
    d.open_window("about");
    d.pointer_down(Point::new(410.0, 255.0));
    d.pointer_move(Point::new(110.0, 105.0));
    d.pointer_up();
    for i in 0..60 {
        d.frame(t0 + Duration::from_millis(i));
    }
    assert_eq!(origin(&d, "about"), Point::new(100.0, 100.0));

    d.close_window_at("about", t0);
    d.frame(t0 + CLOSE_DELAY);
    assert!(!d.is_open("about"));

    d.open_window("about");
    assert_eq!(origin(&d, "about"), Point::new(100.0, 100.0));
}

#[test]
fn opening_an_open_window_reapplies_recorded_position() {
    let mut d = desktop();
    let t0 = Instant::now();
    d.open_window("about");
    d.close_window_at("about", t0);
    d.frame(t0 + CLOSE_DELAY);
    d.open_window("about");

    d.pointer_down(Point::new(410.0, 255.0));
    d.pointer_move(Point::new(110.0, 105.0));
    d.pointer_up();
    for i in 0..60 {
        d.frame(t0 + CLOSE_DELAY + Duration::from_millis(i));
    }
    assert_eq!(origin(&d, "about"), Point::new(100.0, 100.0));

    d.open_window("about");
    assert_eq!(origin(&d, "about"), Point::new(400.0, 250.0));
    let about = d.document().window("about").expect("window");
    assert_eq!(about.z_index(), Some(Z_INDEX_BASELINE + 4));
    assert_eq!(d.topmost_open(), Some("about"));
}

#[test]
fn stacking_counter_tracks_promotions() {
    let mut d = desktop();
    for id in ["about", "projects", "contact", "about"] {
        d.open_window(id);
    }
    assert_eq!(d.lifecycle().z_order().highest(), Z_INDEX_BASELINE + 4);
    assert_eq!(d.topmost_open(), Some("about"));
    let ranks: Vec<u32> = d
        .document()
        .stacking_order()
        .iter()
        .filter_map(|w| w.z_index())
        .collect();
    assert_eq!(ranks, vec![12, 13, 14]);
}

#[test]
fn drag_eases_monotonically_to_target() {
    let mut d = desktop();
    let now = Instant::now();
    d.open_window("about");
    d.pointer_down(Point::new(410.0, 255.0));
    d.pointer_move(Point::new(460.0, 275.0));
    let target = Point::new(450.0, 270.0);
    assert_eq!(d.drag().active().map(|a| a.target()), Some(target));

    let mut last = origin(&d, "about").distance_to(target);
    for _ in 0..20 {
        d.frame(now);
        let dist = origin(&d, "about").distance_to(target);
        assert!(dist < last || dist < 0.5, "{dist} after {last}");
        last = dist;
    }
    assert!(last < 0.5);
}

#[test]
fn drag_target_stays_clamped() {
    let mut d = desktop();
    d.open_window("about");
    d.pointer_down(Point::new(410.0, 255.0));
    for p in [
        Point::new(-5000.0, -5000.0),
        Point::new(5000.0, 5000.0),
        Point::new(600.0, -30.0),
        Point::new(-30.0, 790.0),
    ] {
        d.pointer_move(p);
        let t = d.drag().active().expect("active").target();
        assert!((8.0..=792.0).contains(&t.x), "{t:?}");
        assert!((8.0..=740.0).contains(&t.y), "{t:?}");
    }
}

#[test]
fn resize_stops_at_minimum_size() {
    let mut d = desktop();
    d.open_window("about");
    // Corner handle of a 400x300 window at (400, 250).
    d.pointer_down(Point::new(795.0, 545.0));
    assert!(d.drag().active().is_none());
    d.pointer_move(Point::new(0.0, 0.0));
    let size = d.document().window("about").expect("window").rect().size();
    assert_eq!(size, Size::new(320.0, 220.0));
    d.pointer_up();
    assert!(!d.resize().any_active());
}

#[test]
fn switch_tab_is_scoped_to_its_window() {
    let mut d = desktop();
    d.switch_tab("about", "skills", TabButtonRef(1));
    let about = d.document().window("about").expect("window");
    let projects = d.document().window("projects").expect("window");
    assert_eq!(about.tab_buttons().iter().filter(|b| b.is_active()).count(), 1);
    assert_eq!(about.tab_panels().iter().filter(|p| p.is_active()).count(), 1);
    assert_eq!(about.visible_content(), Some("skills text"));
    assert_eq!(projects.visible_content(), Some("projects bio"));
}

#[test]
fn toggle_theme_twice_is_identity() {
    let mut d = desktop();
    let before = d.document().root_classes().clone();
    assert_eq!(d.toggle_theme(), Theme::Dark);
    assert!(d.document().root_classes().contains(DARK_CLASS));
    assert!(!d.document().root_classes().contains(LIGHT_CLASS));
    assert_eq!(d.document().theme_label(), Some("Light"));
    d.toggle_theme();
    assert_eq!(d.document().root_classes(), &before);
    assert_eq!(d.document().theme_label(), Some("Dark"));
}

#[test]
fn reopen_during_close_delay_keeps_window() {
    let mut d = desktop();
    let t0 = Instant::now();
    d.open_window("contact");
    d.close_window_at("contact", t0);
    assert_eq!(
        d.document().window("contact").and_then(|w| w.transition()),
        Some(Transition::Closing)
    );
    d.open_window("contact");
    d.frame(t0 + CLOSE_DELAY * 3);
    assert!(d.is_open("contact"));
    assert!(d.document().overlay().is_active());
}

#[test]
fn overlay_clears_after_last_hide() {
    let mut d = desktop();
    let t0 = Instant::now();
    d.open_window("about");
    d.open_window("contact");
    d.close_window_at("about", t0);
    d.frame(t0 + CLOSE_DELAY);
    assert!(d.document().overlay().is_active());
    d.close_window_at("contact", t0 + CLOSE_DELAY);
    d.frame(t0 + CLOSE_DELAY + Duration::from_millis(199));
    assert!(d.document().overlay().is_active());
    d.frame(t0 + CLOSE_DELAY * 2);
    assert!(!d.document().overlay().is_active());
}
