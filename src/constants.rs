// Markup contract shared with the static pages.

// Selectors
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const TILT_CONTENT_SELECTOR: &str = "[data-tilt-content]";
pub const NAVBAR_SELECTOR: &str = "[data-navbar]";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";

// Attributes
pub const ATTR_REVEAL_DIRECTION: &str = "data-reveal-direction";
pub const ATTR_REVEAL_DELAY: &str = "data-reveal-delay";
pub const ATTR_REVEAL_WIDTH: &str = "data-reveal-width";
pub const ATTR_PARALLAX: &str = "data-parallax";

// Classes
pub const NAV_SCROLLED_CLASS: &str = "is-scrolled";
pub const CURSOR_ROOT_ID: &str = "studio-cursor";

// Inline styles for generated elements
pub const CURSOR_ROOT_STYLE: &str =
    "position:fixed;inset:0;pointer-events:none;z-index:9999;";
pub const CURSOR_DOT_STYLE: &str = "position:absolute;left:0;top:0;width:16px;height:16px;border-radius:9999px;background:#fff;mix-blend-mode:difference;opacity:0;transition:opacity 0.3s;will-change:transform;";
pub const CURSOR_RING_STYLE: &str = "position:absolute;left:0;top:0;width:40px;height:40px;border-radius:9999px;border:1px solid rgba(255,255,255,0.2);opacity:0;transition:opacity 0.3s;will-change:transform;";
pub const SPOTLIGHT_STYLE: &str = "position:absolute;inset:0;border-radius:inherit;pointer-events:none;opacity:0;transition:opacity 0.5s;";
