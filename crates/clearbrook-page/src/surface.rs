//! Page micro-behaviors over an abstract surface.
//!
//! [`PageSurface`] is the narrow slice of page effects these behaviors
//! need; the page binding implements it, tests fake it.

/// The page effects the micro-behaviors touch.
pub trait PageSurface {
    /// Whether an element with this anchor id exists.
    fn has_anchor(&self, id: &str) -> bool;

    /// Animate scrolling until the element's top edge meets the viewport.
    fn scroll_to(&mut self, id: &str);

    fn menu_active(&self) -> bool;

    fn set_menu_active(&mut self, active: bool);
}

/// Handle a click on an anchor link. Same-page hrefs (`#target`) with an
/// existing target are scrolled to smoothly; anything else — external
/// hrefs, a bare `#`, a missing target — is left to default navigation.
/// Returns whether the click was handled.
pub fn smooth_scroll_to(surface: &mut dyn PageSurface, href: &str) -> bool {
    let Some(id) = href.strip_prefix('#') else {
        return false;
    };
    if id.is_empty() || !surface.has_anchor(id) {
        return false;
    }
    surface.scroll_to(id);
    true
}

/// Flip the mobile nav menu's active state. Returns the new state.
pub fn toggle_mobile_menu(surface: &mut dyn PageSurface) -> bool {
    let active = !surface.menu_active();
    surface.set_menu_active(active);
    active
}
