//! Scroll and Visual Effects
//!
//! Arithmetic behind the cosmetic effects: navbar opacity, hero parallax,
//! staggered card reveal, button ripples.

use std::collections::HashSet;

use crate::config::*;

/// Navbar background alpha for a scroll position
pub fn navbar_alpha(scroll_y: f64) -> f64 {
    if scroll_y > NAVBAR_SOLID_THRESHOLD_PX {
        NAVBAR_ALPHA_SOLID
    } else {
        NAVBAR_ALPHA_TRANSLUCENT
    }
}

/// CSS background for the navbar, given the `r, g, b` triple of the theme colour
pub fn navbar_background(rgb: &str, scroll_y: f64) -> String {
    format!("rgba({}, {})", rgb.trim(), navbar_alpha(scroll_y))
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", parallax_offset(scroll_y))
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD_PX
}

/// Transition for the card at `index` in page order
pub fn reveal_transition(index: usize) -> String {
    let delay = index as f64 * REVEAL_STAGGER_SECS;
    // keep 0.1 * 3 from printing as 0.30000000000000004
    let delay = (delay * 1000.0).round() / 1000.0;
    format!(
        "opacity {d}s ease {delay}s, transform {d}s ease {delay}s",
        d = REVEAL_DURATION_SECS,
        delay = delay,
    )
}

/// Inline style for a card before and after it has been revealed
pub fn reveal_style(index: usize, revealed: bool) -> String {
    let (opacity, offset) = if revealed { (1, 0.0) } else { (0, REVEAL_OFFSET_PX) };
    format!(
        "opacity: {}; transform: translateY({}px); transition: {};",
        opacity,
        offset,
        reveal_transition(index)
    )
}

/// Cards that have scrolled into view at least once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealState {
    revealed: HashSet<usize>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a card as intersecting. True only the first time.
    pub fn reveal(&mut self, index: usize) -> bool {
        self.revealed.insert(index)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }
}

/// Size and position of a click ripple, relative to the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

impl Ripple {
    /// Ripple centred on the click point, large enough to cover the button
    pub fn at(rect_left: f64, rect_top: f64, width: f64, height: f64, client_x: f64, client_y: f64) -> Self {
        let size = width.max(height);
        Self {
            size,
            x: client_x - rect_left - size / 2.0,
            y: client_y - rect_top - size / 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position: absolute; width: {s}px; height: {s}px; left: {x}px; top: {y}px; \
             background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
             animation: rippleEffect 0.6s ease; pointer-events: none;",
            s = self.size,
            x = self.x,
            y = self.y,
        )
    }
}

/// Load state of a fading image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Loaded,
    Failed,
}

impl ImageStatus {
    pub fn opacity(self) -> f64 {
        match self {
            ImageStatus::Loading => 0.0,
            ImageStatus::Loaded => 1.0,
            ImageStatus::Failed => 0.5,
        }
    }

    /// Alt text to show, replacing the original once loading failed
    pub fn alt_text(self, alt: &str) -> &str {
        match self {
            ImageStatus::Failed => "Image not available",
            _ => alt,
        }
    }
}

pub fn day_card_transform(hovered: bool) -> &'static str {
    if hovered { "translateY(-2px) rotate(0.5deg)" } else { "translateY(0) rotate(0deg)" }
}
