//! Page behavior constants and the pure pieces of the DOM wiring

/// Elements that fade in when scrolled into view
pub const REVEAL_SELECTOR: &str = "section, .glow-card, .stat-item, .pipeline-step, .trust-bar, .booking-container, .process-step, .timeline-signal";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FADE_CLASS: &str = "fade-in-section";
pub const VISIBLE_CLASS: &str = "is-visible";

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const MOBILE_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_ANCHORS_SELECTOR: &str = ".nav-links a";
pub const NAV_OPEN_CLASS: &str = "nav-active";
pub const BUTTON_OPEN_CLASS: &str = "active-toggle";

pub const SPLASH_ID: &str = "splash-screen";
pub const SPLASH_HIDDEN_CLASS: &str = "splash-hidden";
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_ACTIVE_CLASS: &str = "hero-active";
pub const SPLASH_HOLD_MS: i32 = 1800;

pub const CLOCK_ID: &str = "footer-time";
pub const CLOCK_PERIOD_MS: i32 = 1000;

pub const HERO_CANVAS_ID: &str = "hero-canvas";

/// Siblings in card grids are staggered in groups of three.
const STAGGER_GROUP: usize = 3;
const STAGGER_STEP_S: f64 = 0.1;

/// True for elements whose entrance is staggered by sibling position.
pub fn is_staggered(classes: &[&str]) -> bool {
    classes.iter().any(|c| *c == "glow-card" || *c == "stat-item")
}

/// Process steps carry their own CSS stagger and skip the generic fade.
pub fn uses_generic_fade(classes: &[&str]) -> bool {
    !classes.contains(&"process-step")
}

/// Delay in seconds for the `sibling_index`-th child of a card grid.
pub fn stagger_delay(sibling_index: usize) -> f64 {
    (sibling_index % STAGGER_GROUP) as f64 * STAGGER_STEP_S
}

/// `transition-delay` value, e.g. `0.2s`.
pub fn stagger_delay_css(sibling_index: usize) -> String {
    format!("{}s", stagger_delay(sibling_index))
}

/// Classes to add once an observed element first intersects the viewport.
pub fn classes_on_reveal(classes: &[&str]) -> Vec<&'static str> {
    let mut out = vec![VISIBLE_CLASS];
    if classes.contains(&"process-step") {
        out.push("visible");
    }
    if classes.contains(&"timeline-signal") {
        out.push("active");
    }
    out
}

/// Footer clock text from an ISO-8601 UTC timestamp
/// (`2026-10-19T08:05:03.123Z` -> `2026-10-19 08:05:03 UTC`).
pub fn footer_clock_text(iso: &str) -> String {
    let stamp: String = iso.replacen('T', " ", 1).chars().take(19).collect();
    format!("{stamp} UTC")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_cycles_every_three_siblings() {
        assert_eq!(stagger_delay_css(0), "0s");
        assert_eq!(stagger_delay_css(1), "0.1s");
        assert_eq!(stagger_delay_css(2), "0.2s");
        assert_eq!(stagger_delay_css(3), "0s");
        assert_eq!(stagger_delay(7), stagger_delay(1));
    }

    #[test]
    fn reveal_classes_depend_on_element_kind() {
        assert_eq!(classes_on_reveal(&["section"]), vec!["is-visible"]);
        assert_eq!(
            classes_on_reveal(&["process-step", "fade"]),
            vec!["is-visible", "visible"]
        );
        assert_eq!(
            classes_on_reveal(&["timeline-signal"]),
            vec!["is-visible", "active"]
        );
    }

    #[test]
    fn process_steps_skip_generic_fade() {
        assert!(uses_generic_fade(&["glow-card"]));
        assert!(!uses_generic_fade(&["process-step"]));
        assert!(is_staggered(&["card", "stat-item"]));
        assert!(!is_staggered(&["process-step"]));
    }

    #[test]
    fn clock_text_drops_millis_and_marks_utc() {
        assert_eq!(
            footer_clock_text("2026-10-19T08:05:03.123Z"),
            "2026-10-19 08:05:03 UTC"
        );
    }
}
