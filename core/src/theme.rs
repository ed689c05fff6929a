/// Visual mode of the page. Stored as a bare token (`"light"` / `"dark"`)
/// across up to three storage tiers; see [`Theme::resolve_saved`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Theme> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Conflict rule for the redundantly stored preference: the durable
    /// store wins, then the cookie, then the in-memory fallback,
    /// defaulting to light. Never fails.
    pub fn resolve_saved(
        durable: Option<Theme>,
        cookie: Option<Theme>,
        memory: Option<Theme>,
    ) -> Theme {
        durable.or(cookie).or(memory).unwrap_or_default()
    }
}
