/// Scroll depth after which the nav bar gets its solid background.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
/// How far below the top edge a section counts as the current one.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
/// Room left for the fixed nav bar when scrolling to a section.
pub const NAV_HEIGHT_OFFSET: f64 = 80.0;
/// Minimum gap between active-section updates while scrolling.
pub const ACTIVE_SECTION_THROTTLE_MS: f64 = 100.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// The section under the scroll position. `sections` pairs ids with their
/// document offsets, in page order.
pub fn current_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64, offset: f64) -> Option<&'a str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= position)
        .or_else(|| sections.first())
        .map(|(id, _)| *id)
}

/// Window scroll position that puts an element `offset` pixels below the top.
/// `element_top` is relative to the viewport.
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    element_top + scroll_y - offset
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

pub fn is_in_viewport(rect: Rect, width: f64, height: f64, threshold: f64) -> bool {
    rect.top >= -threshold
        && rect.left >= -threshold
        && rect.bottom <= height + threshold
        && rect.right <= width + threshold
}

/// Lets a call through at most once per `limit_ms`. Calls dropped inside the
/// window are owed a trailing call once it closes.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    limit_ms: f64,
    last: Option<f64>,
    pending: bool,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last: None,
            pending: false,
        }
    }

    pub fn should_fire(&mut self, now_ms: f64) -> bool {
        match self.last {
            Some(last) if now_ms - last < self.limit_ms => {
                self.pending = true;
                false
            }
            _ => {
                self.last = Some(now_ms);
                self.pending = false;
                true
            }
        }
    }

    /// True when a dropped call is owed and the window has closed.
    pub fn trailing_due(&mut self, now_ms: f64) -> bool {
        let closed = self.last.is_none_or(|last| now_ms - last >= self.limit_ms);
        if self.pending && closed {
            self.last = Some(now_ms);
            self.pending = false;
            return true;
        }
        false
    }
}

#[cfg(feature = "hydrate")]
pub fn scroll_to_section(section_id: &str, offset: f64) {
    use leptos::prelude::{document, window};
    use web_sys::{ScrollBehavior, ScrollToOptions};

    let Some(element) = document().get_element_by_id(section_id) else {
        log::warn!("Element with id \"{section_id}\" not found");
        return;
    };
    let window = window();
    let scroll_y = window.scroll_y().unwrap_or_default();
    let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y, offset);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Document offsets of the given section ids, skipping any not on the page.
#[cfg(feature = "hydrate")]
pub fn section_offsets<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    use leptos::prelude::document;
    use wasm_bindgen::JsCast;

    let document = document();
    ids.iter()
        .filter_map(|id| {
            let el = document.get_element_by_id(id)?;
            let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some((*id, el.offset_top() as f64))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [(&str, f64); 4] = [
        ("home", 0.0),
        ("services", 800.0),
        ("projects", 1600.0),
        ("contact", 3000.0),
    ];

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_current_section() {
        assert_eq!(current_section(&SECTIONS, 0.0, 100.0), Some("home"));
        assert_eq!(current_section(&SECTIONS, 699.0, 100.0), Some("home"));
        assert_eq!(current_section(&SECTIONS, 700.0, 100.0), Some("services"));
        assert_eq!(current_section(&SECTIONS, 2000.0, 100.0), Some("projects"));
        assert_eq!(current_section(&SECTIONS, 9000.0, 100.0), Some("contact"));
    }

    #[test]
    fn test_current_section_falls_back_to_first() {
        let sections = [("about", 500.0), ("faq", 900.0)];
        assert_eq!(current_section(&sections, 0.0, 100.0), Some("about"));
        assert_eq!(current_section(&[], 0.0, 100.0), None);
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(300.0, 1000.0, 80.0), 1220.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 0.0), 800.0);
    }

    #[test]
    fn test_is_in_viewport() {
        let inside = Rect {
            top: 10.0,
            left: 0.0,
            bottom: 400.0,
            right: 300.0,
        };
        assert!(is_in_viewport(inside, 1024.0, 768.0, 0.0));

        let below = Rect {
            top: 700.0,
            left: 0.0,
            bottom: 900.0,
            right: 300.0,
        };
        assert!(!is_in_viewport(below, 1024.0, 768.0, 0.0));
        // A threshold lets partially clipped elements count
        assert!(is_in_viewport(below, 1024.0, 768.0, 200.0));
    }

    #[test]
    fn test_throttle() {
        let mut t = Throttle::new(100.0);
        assert!(t.should_fire(0.0));
        assert!(!t.should_fire(50.0));
        assert!(!t.should_fire(99.0));
        assert!(t.should_fire(100.0));
        assert!(!t.should_fire(150.0));
        assert!(t.should_fire(250.0));
    }

    #[test]
    fn test_throttle_trailing_call() {
        let mut t = Throttle::new(100.0);
        assert!(!t.trailing_due(500.0));
        assert!(t.should_fire(0.0));
        assert!(!t.should_fire(40.0));
        assert!(!t.trailing_due(80.0));
        assert!(t.trailing_due(100.0));
        // Owed only once
        assert!(!t.trailing_due(300.0));
    }

    #[test]
    fn test_throttled_scroll_settles_on_final_section() {
        let mut t = Throttle::new(ACTIVE_SECTION_THROTTLE_MS);
        let mut active = None;
        let mut y = 0.0;
        let mut now = 0.0;
        while y < 1700.0 {
            y = f64::min(y + 50.0, 1700.0);
            now += 16.0;
            if t.should_fire(now) {
                active = current_section(&SECTIONS, y, ACTIVE_SECTION_OFFSET);
            }
        }
        // The last leading-edge update landed mid-page
        assert_eq!(active, Some("services"));
        if t.trailing_due(now + ACTIVE_SECTION_THROTTLE_MS) {
            active = current_section(&SECTIONS, y, ACTIVE_SECTION_OFFSET);
        }
        assert_eq!(active, Some("projects"));
    }
}
