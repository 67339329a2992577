use std::collections::HashSet;

use clearbrook_page::integrations::{
    CheckoutProvider, LoggingCheckout, LoggingScheduler, SchedulingProvider,
};
use clearbrook_page::surface::{PageSurface, smooth_scroll_to, toggle_mobile_menu};

#[derive(Default)]
struct FakePage {
    anchors: HashSet<String>,
    scrolled_to: Vec<String>,
    menu_active: bool,
}

impl PageSurface for FakePage {
    fn has_anchor(&self, id: &str) -> bool {
        self.anchors.contains(id)
    }

    fn scroll_to(&mut self, id: &str) {
        self.scrolled_to.push(id.to_string());
    }

    fn menu_active(&self) -> bool {
        self.menu_active
    }

    fn set_menu_active(&mut self, active: bool) {
        self.menu_active = active;
    }
}

#[test]
fn anchor_click_scrolls_to_target() {
    let mut page = FakePage::default();
    page.anchors.insert("services".to_string());

    assert!(smooth_scroll_to(&mut page, "#services"));
    assert_eq!(page.scrolled_to, vec!["services"]);
}

#[test]
fn external_hrefs_are_left_alone() {
    let mut page = FakePage::default();
    assert!(!smooth_scroll_to(&mut page, "https://example.com/pricing"));
    assert!(!smooth_scroll_to(&mut page, "/about"));
    assert!(page.scrolled_to.is_empty());
}

#[test]
fn bare_hash_and_missing_targets_do_nothing() {
    let mut page = FakePage::default();
    assert!(!smooth_scroll_to(&mut page, "#"));
    assert!(!smooth_scroll_to(&mut page, "#no-such-section"));
    assert!(page.scrolled_to.is_empty());
}

#[test]
fn menu_toggle_flips_each_call() {
    let mut page = FakePage::default();

    assert!(toggle_mobile_menu(&mut page));
    assert!(page.menu_active);
    assert!(!toggle_mobile_menu(&mut page));
    assert!(!page.menu_active);
}

#[test]
fn placeholder_integrations_succeed() {
    assert!(LoggingCheckout.initialize().is_ok());
    assert!(LoggingScheduler.open("initial-consult").is_ok());
}
