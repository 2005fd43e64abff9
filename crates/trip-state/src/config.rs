//! Fixed tuning constants
//!
//! Thresholds, delays and offsets used by the page. None of these are
//! configurable at runtime.

use std::ops::RangeInclusive;

// ========================
// Navigation
// ========================

/// Scroll distance after which the navbar turns (almost) opaque
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 50.0;
pub const NAVBAR_ALPHA_SOLID: f64 = 0.95;
pub const NAVBAR_ALPHA_TRANSLUCENT: f64 = 0.9;

/// A section becomes "current" this far before its top reaches the viewport top
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

/// Fixed navbar height subtracted from smooth-scroll targets
pub const NAV_SCROLL_OFFSET_PX: f64 = 80.0;

// ========================
// Scroll effects
// ========================

pub const PARALLAX_FACTOR: f64 = 0.3;
pub const PARALLAX_DEBOUNCE_MS: u32 = 10;

pub const SCROLL_TOP_THRESHOLD_PX: f64 = 500.0;

/// Per-card transition delay, multiplied by the card's page index
pub const REVEAL_STAGGER_SECS: f64 = 0.1;
pub const REVEAL_DURATION_SECS: f64 = 0.6;
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ========================
// Transient animations
// ========================

pub const CHECK_PULSE_MS: u32 = 200;
pub const CARD_PRESS_MS: u32 = 150;
pub const RIPPLE_MS: u32 = 600;
pub const WELCOME_DELAY_MS: u32 = 500;

// ========================
// Itinerary & checklist
// ========================

/// Keys that toggle itinerary days from anywhere on the page
pub const DAY_SHORTCUT_KEYS: RangeInclusive<char> = '1'..='5';

/// Day expanded when the page starts
pub const STARTUP_EXPANDED_DAY: u8 = 1;

pub const CHECKED_LABEL_OPACITY: f64 = 0.6;
