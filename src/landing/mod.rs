//! Behavior behind the marketing page: navigation, stat counters, the demo
//! chat, scroll reveals and the contact form.

pub mod contact;
pub mod counter;
pub mod demo;
pub mod nav;
pub mod reveal;

pub use contact::{ContactFields, ContactForm, ContactStatus};
pub use counter::{STAT_COUNTERS, StatCounter};
pub use demo::{DEMO_SCRIPT, DemoChat, DemoStep};
pub use nav::{MobileNav, anchor_target};
pub use reveal::{RevealKind, in_view};
