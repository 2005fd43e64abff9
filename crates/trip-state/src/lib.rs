//! Trip Page State
//!
//! Pure presentation state for the itinerary page:
//! - nav: mobile menu and active section link
//! - itinerary: per-day expansion
//! - checklist: packing progress and completion banner
//! - effects: scroll-driven visual arithmetic
//! - state: the aggregate record and its transitions
//!
//! Nothing here touches the DOM.

pub mod checklist;
pub mod config;
pub mod content;
pub mod effects;
pub mod itinerary;
pub mod keyboard;
pub mod nav;
pub mod state;

pub use checklist::{ChecklistState, Progress};
pub use content::{ContentError, ContentResult, SiteContent};
pub use itinerary::ItineraryState;
pub use keyboard::{key_command, KeyCommand};
pub use nav::{MenuIcon, NavState, SectionBounds};
pub use state::{Action, Effect, PageState};
