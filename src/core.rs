//! Page contract: the element anchors, storage keys and timings the
//! components are wired to. Missing anchors disable the owning feature.

pub(crate) const THEME_TOGGLE_ID: &str = "themeToggle";
pub(crate) const THEME_ATTR: &str = "data-theme";
pub(crate) const THEME_STORAGE_KEY: &str = "theme";
pub(crate) const THEME_COOKIE: &str = "theme";
pub(crate) const THEME_COOKIE_DAYS: f64 = 30.0;

pub(crate) const PARTICLES_SELECTOR: &str = ".background-particles";
/// Entrance styles land one tick after insertion so the transition runs.
pub(crate) const ENTRANCE_KICK_MS: u32 = 50;

pub(crate) const CAROUSEL_TRACK_ID: &str = "carouselTrack";
pub(crate) const INDICATORS_ID: &str = "indicators";
pub(crate) const PREV_BTN_ID: &str = "prevBtn";
pub(crate) const NEXT_BTN_ID: &str = "nextBtn";
pub(crate) const SELECT_BTN_ID: &str = "selectBtn";
pub(crate) const AUTO_SLIDE_MS: u32 = 5000;

pub(crate) const EDL_SELECT_ID: &str = "edlType";
pub(crate) const HEADER_DESCRIPTION_ID: &str = "headerDescription";
pub(crate) const INFO_PANEL_ID: &str = "infoPanel";
pub(crate) const INFO_PANEL_TITLE_ID: &str = "infoPanelTitle";
pub(crate) const INFO_PANEL_CONTENT_ID: &str = "infoPanelContent";
pub(crate) const CONTENT_SECTION_SELECTOR: &str = ".edl-content";
pub(crate) const ACTIVE_SECTION_SELECTOR: &str = ".edl-content:not(.hidden)";
pub(crate) const ACTIVE_CARDS_SELECTOR: &str = ".edl-content:not(.hidden) .card";
pub(crate) const VISUAL_ITEM_SELECTOR: &str = ".edl-visual-item";

pub(crate) const SEARCH_ACTION_FRAGMENT: &str = "/buscar";

pub(crate) const FORM_RESET_MS: u32 = 10_000;
pub(crate) const RIPPLE_MS: u32 = 600;
