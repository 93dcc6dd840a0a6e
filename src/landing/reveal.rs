/// Share of the viewport an element's top must rise above to be shown.
pub const REVEAL_THRESHOLD: f64 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    FadeIn,
    SlideIn,
}

impl RevealKind {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "animate-fade-in",
            RevealKind::SlideIn => "animate-slide-in",
        }
    }

    fn hidden_transform(self) -> &'static str {
        match self {
            RevealKind::FadeIn => "translateY(20px)",
            RevealKind::SlideIn => "translateX(30px)",
        }
    }

    pub fn style(self, visible: bool) -> String {
        if visible {
            "opacity: 1; transform: translateY(0) translateX(0);".to_string()
        } else {
            format!("opacity: 0; transform: {};", self.hidden_transform())
        }
    }
}

pub fn in_view(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * REVEAL_THRESHOLD
}
