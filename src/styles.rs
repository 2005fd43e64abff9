//! Injected Style Rules
//!
//! Keyframes and rules added to `<head>` at runtime, each under a fixed
//! element id so it is injected at most once.

pub const INTERACTIVE_ID: &str = "trip-interactive-styles";
pub const INTERACTIVE_CSS: &str = r#"
@keyframes rippleEffect {
    to {
        transform: scale(2);
        opacity: 0;
    }
}

.nav-link.active {
    color: var(--color-teal-300) !important;
}

.nav-link.active::after {
    content: '';
    position: absolute;
    bottom: -2px;
    left: 0;
    right: 0;
    height: 2px;
    background: var(--color-teal-300);
}

.nav-link {
    position: relative;
}
"#;

pub const SLIDE_IN_ID: &str = "trip-slide-in";
pub const SLIDE_IN_CSS: &str = r#"
@keyframes slideIn {
    from {
        opacity: 0;
        transform: translateY(-10px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
"#;

pub const BOUNCE_IN_ID: &str = "trip-bounce-in";
pub const BOUNCE_IN_CSS: &str = r#"
@keyframes bounceIn {
    0% { opacity: 0; transform: scale(0.3); }
    50% { transform: scale(1.05); }
    70% { transform: scale(0.9); }
    100% { opacity: 1; transform: scale(1); }
}
"#;

pub const COMPLETION_BANNER: &str = "margin-top: 16px; padding: 12px 16px; \
    background: rgba(33, 128, 141, 0.1); color: var(--color-success); \
    border-radius: var(--radius-base); display: flex; align-items: center; gap: 8px; \
    font-size: var(--font-size-sm); font-weight: var(--font-weight-medium); \
    animation: slideIn 0.3s ease;";

pub const SCROLL_TOP_BUTTON: &str = "position: fixed; bottom: 30px; right: 30px; \
    width: 50px; height: 50px; color: var(--color-btn-primary-text); border: none; \
    border-radius: 50%; cursor: pointer; transition: all 0.3s ease; z-index: 1000; \
    box-shadow: var(--shadow-lg);";

/// Theme colour behind the navbar, as an `r, g, b` triple
pub const NAVBAR_RGB_PROPERTY: &str = "--color-slate-900-rgb";
/// Used when the stylesheet does not define `NAVBAR_RGB_PROPERTY`
pub const NAVBAR_RGB_FALLBACK: &str = "19, 52, 59";
