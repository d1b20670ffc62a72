// DOM hooks and web-only tuning. Timing that the models own lives in
// `folio_core::constants`.

// Sphere
pub const SPHERE_CONTAINER_ID: &str = "container";
pub const SPHERE_VIDEO_ID: &str = "videoSfondo";
pub const SPHERE_MODE_ATTR: &str = "data-sphere"; // "responsive" (default) | "desktop" | "loading"
pub const SPHERE_TEXTURE_SIZE: u32 = 256; // px, fallback texture edge
pub const SPHERE_RINGS: u32 = 64;
pub const LOADING_REDIRECT_ATTR: &str = "data-redirect";
pub const LOADING_REDIRECT_DEFAULT: &str = "home.html";
pub const LOADING_REDIRECT_MS: i32 = 5000;

// Cursor
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const CURSOR_INTERACTIVE_SELECTOR: &str = "a, button, .clickable, .project-wrapper";
pub const CURSOR_TRANSITION_SELECTOR: &str = ".link-wrapper";
pub const CURSOR_ANCHOR_SELECTOR: &str = ".damiano_zangrilli"; // initial position hint
pub const CURSOR_MOBILE_STYLE_ID: &str = "mobile-cursor-fix";

// Particles
pub const PARTICLE_CANVAS_ID: &str = "hero-canvas";
pub const PARTICLE_COLOR: &str = "#ffffff";

// Scroll reveal
pub const REVEAL_CLASS: &str = "reveal";
pub const REVEAL_SELECTORS: &[&str] = &[
    ".section-mission .section-container",
    ".section-trajectory .section-container",
    ".section-assets .section-container",
    ".problem-statement",
    ".challenges-grid",
    ".process-block",
    ".visual-module",
    ".stats-card",
    ".stat-card",
    ".section-footer .section-container",
    ".mission-brief-panel",
    ".brief-item",
    ".hud-element",
    ".scroll-indicator",
];
pub const REVEAL_STAGGER_GRIDS: &str = ".challenges-grid, .modules-grid, .brief-items, .stats-grid";
pub const REVEAL_FADE_SELECTOR: &str = ".tool-module, .system-module, .bio-section";
pub const REVEAL_FADE_OFFSET_PX: f32 = 20.0;
pub const REVEAL_FADE_THRESHOLD: f32 = 0.2;
pub const REVEAL_GAUGE_SELECTOR: &str = ".proficiency-fill";
pub const REVEAL_GAUGE_THRESHOLD: f32 = 0.5;
pub const REVEAL_GAUGE_DELAY_MS: f64 = 200.0;
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

// Shutter
pub const SHUTTER_CLASS: &str = "page-shutter";
pub const SHUTTER_DOWN_CLASS: &str = "down";
pub const SHUTTER_LINK_SELECTOR: &str = "nav a";
pub const SHUTTER_FOOTER_HOME_SELECTOR: &str = "footer .home";

// Overlay menu
pub const MENU_OVERLAY_ID: &str = "overlayMenu";
pub const MENU_CLOSE_ID: &str = "closeMenuBtn";
pub const MENU_OPEN_SELECTORS: &[&str] = &[".text_under-decoration", ".menu"];
pub const MENU_LINK_SELECTOR: &str = ".overlay-link";
pub const MENU_OPEN_CLASS: &str = "is-open";
pub const MENU_INSTANT_CLASS: &str = "instant-setup";
pub const MENU_INACTIVE_CLASS: &str = "perc_opacity";
pub const MENU_HTML_TRANSITION_CLASS: &str = "menu-transition-active";

// Scramble
pub const DECODE_SELECTOR: &str = ".meta-value";
pub const DECODE_MARKER: &str = "DZ-";
pub const DECODE_DURATION_MS: f64 = 1000.0;
pub const GLITCH_SELECTOR: &str = ".system-name";
pub const SCRAMBLE_CARD_SELECTOR: &str = ".mission-card";
pub const SCRAMBLE_TITLE_SELECTOR: &str = ".mission-name";
pub const GLITCHING_CLASS: &str = "glitching";
pub const IS_DIGIT_CLASS: &str = "is-digit";

// Theme
pub const THEME_TOGGLE_ID: &str = "input";
pub const THEME_POLICY_ATTR: &str = "data-theme-policy"; // on <body>: "persist" | "force-dark"

// Page chrome
pub const NAV_SELECTOR: &str = ".Navigation";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const PROGRESS_SELECTOR: &str = ".progress-bar";
pub const UPTIME_ID: &str = "uptime";

// Flip coin
pub const COIN_WRAPPER_ID: &str = "flipCoinWrapper";
pub const COIN_ID: &str = "flipCoin";
pub const COIN_VISIBLE_CLASS: &str = "visible";
pub const COIN_FLIPPING_CLASS: &str = "flipping";
pub const COIN_SETTLING_CLASS: &str = "settling";

// Decoration, hooks on <body>
pub const INTRO_ATTR: &str = "data-intro"; // "project" | "work"
pub const SCAN_LINE_ATTR: &str = "data-scan-line"; // "work" | "about"
pub const SCAN_LINE_CLASS: &str = "dynamic-scan-line";
pub const COARSE_POINTER_QUERY: &str = "(pointer: coarse)";
pub const PARALLAX_DECORATION_SELECTOR: &str = ".code-decoration";
pub const PARALLAX_TRANSITION: &str = "transform 0.3s ease-out";
pub const PARALLAX_HERO_SELECTOR: &str = ".section-hero";
pub const PARALLAX_HERO_LAYERS: &str = ".mascot-container, .mission-title, .hero-subtitle";
