/// Mobile navigation drawer. While it is open the page must not scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn active_class(self) -> &'static str {
        if self.open { "active" } else { "" }
    }

    pub fn overflow(self) -> &'static str {
        if self.open { "hidden" } else { "auto" }
    }
}

/// Section id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_locks_and_unlocks_scroll() {
        let mut nav = MobileNav::default();
        assert_eq!(nav.overflow(), "auto");
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.overflow(), "hidden");
        assert_eq!(nav.active_class(), "active");
        nav.close();
        assert_eq!(nav.overflow(), "auto");
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#features"), Some("features"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/chat/"), None);
    }
}
