/// Accent colors shared with the page stylesheet.
pub const COLOR_NEXT: &str = "#667eea";
pub const COLOR_TAIL: &str = "#f093fb";
pub const COLOR_PREV: &str = "#764ba2";

/// Entrance animation is skipped at or above this many rows.
pub const ENTRANCE_MAX_ROWS: usize = 100;
/// Cumulative entrance delay never exceeds this, however long the table.
pub const ENTRANCE_DELAY_CAP_MS: u32 = 2000;

/// Which list-variant page is active, detected from the URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    SimpleList,
    DoubleList,
    CircularList,
}

impl PageKind {
    pub fn from_path(path: &str) -> Option<PageKind> {
        if path.contains("lista-simple") {
            return Some(PageKind::SimpleList);
        }
        if path.contains("lista-doble") {
            return Some(PageKind::DoubleList);
        }
        if path.contains("lista-circular") {
            return Some(PageKind::CircularList);
        }
        None
    }

    pub const fn entrance_step_ms(self) -> u32 {
        match self {
            PageKind::SimpleList => 50,
            PageKind::DoubleList => 75,
            PageKind::CircularList => 100,
        }
    }

    pub fn entrance_delay_ms(self, index: usize) -> u32 {
        let step = self.entrance_step_ms() as u64;
        (index as u64 * step).min(ENTRANCE_DELAY_CAP_MS as u64) as u32
    }

    /// Transform a row starts from before sliding into place. The double
    /// list alternates sides by row parity; the circular list spins in.
    pub const fn entrance_hidden_transform(self, index: usize) -> &'static str {
        match self {
            PageKind::SimpleList => "translateX(-20px)",
            PageKind::DoubleList => {
                if index % 2 == 0 {
                    "translateX(-20px)"
                } else {
                    "translateX(20px)"
                }
            }
            PageKind::CircularList => "scale(0.8) rotate(-10deg)",
        }
    }

    pub const fn entrance_visible_transform(self) -> &'static str {
        match self {
            PageKind::SimpleList | PageKind::DoubleList => "translateX(0)",
            PageKind::CircularList => "scale(1) rotate(0deg)",
        }
    }

    pub const fn entrance_transition(self) -> &'static str {
        match self {
            PageKind::SimpleList => "all 0.3s ease",
            PageKind::DoubleList => "all 0.4s ease",
            PageKind::CircularList => "all 0.5s cubic-bezier(0.68, -0.55, 0.265, 1.55)",
        }
    }

    /// Static border markers and tooltip encoding the row's structural
    /// role in the list variant.
    pub fn decoration(self, index: usize, len: usize) -> RowDecoration {
        let last = index + 1 == len;
        match self {
            PageKind::SimpleList => {
                if last {
                    RowDecoration {
                        border_right: Some(COLOR_TAIL),
                        tooltip: "Último elemento (apunta a NULL)",
                        ..RowDecoration::default()
                    }
                } else {
                    RowDecoration {
                        border_right: Some(COLOR_NEXT),
                        tooltip: "Este elemento apunta al siguiente",
                        ..RowDecoration::default()
                    }
                }
            }
            PageKind::DoubleList => RowDecoration {
                border_left: if index > 0 { Some(COLOR_PREV) } else { None },
                border_right: if last { None } else { Some(COLOR_NEXT) },
                tooltip: "Elemento con navegación bidireccional",
                ..RowDecoration::default()
            },
            PageKind::CircularList => RowDecoration {
                border_left: if index == 0 { Some(COLOR_TAIL) } else { None },
                border_top: if index == 0 { Some(COLOR_TAIL) } else { None },
                border_right: if last { Some(COLOR_NEXT) } else { None },
                border_bottom: if last { Some(COLOR_NEXT) } else { None },
                rounded: true,
                tooltip: "Parte de la estructura circular",
            },
        }
    }
}

/// Border accents for one table row; `None` leaves the stylesheet value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowDecoration {
    pub border_left: Option<&'static str>,
    pub border_right: Option<&'static str>,
    pub border_top: Option<&'static str>,
    pub border_bottom: Option<&'static str>,
    pub rounded: bool,
    pub tooltip: &'static str,
}

impl Default for RowDecoration {
    fn default() -> Self {
        Self {
            border_left: None,
            border_right: None,
            border_top: None,
            border_bottom: None,
            rounded: false,
            tooltip: "",
        }
    }
}
