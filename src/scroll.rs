//! Scroll bookkeeping and the page's two navigation side effects: smooth
//! in-page scrolling and opening external links in a new tab.

use log::{info, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config;

/// Current vertical scroll offset, or 0.0 when the host can't report one
/// (both derived flags then read false).
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.page_y_offset().ok())
        .unwrap_or(0.0)
}

/// Whether the navbar should render its scrolled (solid) style.
pub fn nav_scrolled(offset: f64) -> bool {
    offset > config::NAV_SCROLL_THRESHOLD_PX
}

/// Whether the back-to-top button should be visible.
pub fn show_back_to_top(offset: f64) -> bool {
    offset > config::BACK_TO_TOP_THRESHOLD_PX
}

/// Document-relative offset to scroll to for a section whose bounding rect
/// starts at `rect_top` in viewport coordinates. The navbar is fixed, so the
/// target is pulled up by its height.
pub fn scroll_target(rect_top: f64, page_offset: f64) -> f64 {
    rect_top + page_offset - config::NAV_HEIGHT_PX
}

/// Smooth-scrolls the viewport so the section with the given anchor id lands
/// just below the navbar. Unknown ids are a no-op.
pub fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y());
            smooth_scroll_to(top);
        }
        None => warn!("no section with anchor '{id}', ignoring scroll request"),
    }
}

/// Smooth-scrolls back to the top of the page.
pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Opens `url` in a new tab without handing it an opener or referrer. The
/// return value is ignored; a blocked popup is the user's browser's call.
pub fn open_external(url: &str) {
    info!("opening external link {url}");
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_flag_flips_past_4px() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(4.0));
        assert!(nav_scrolled(5.0));
    }

    #[test]
    fn back_to_top_flag_flips_past_600px() {
        assert!(!show_back_to_top(0.0));
        assert!(!show_back_to_top(600.0));
        assert!(show_back_to_top(601.0));
    }

    #[test]
    fn scroll_target_clears_the_navbar() {
        assert_eq!(scroll_target(500.0, 0.0), 428.0);
        assert_eq!(scroll_target(-300.0, 800.0), 428.0);
    }

    #[test]
    fn scroll_target_is_independent_of_current_offset() {
        // Same document-relative top seen from different scroll positions.
        let document_top = 1_250.0;
        for offset in [0.0, 72.0, 600.0, 1_250.0, 4_000.0] {
            let rect_top = document_top - offset;
            assert_eq!(scroll_target(rect_top, offset), document_top - 72.0);
        }
    }
}
