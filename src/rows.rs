use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{select_all_in, set_style};
use enlace_core::rows::{PageKind, RowDecoration, ENTRANCE_MAX_ROWS};

/// Structure-specific row decoration for the list-variant pages: border
/// markers encoding pointer semantics, tooltips, and a staggered
/// entrance for tables small enough to animate.
pub(crate) fn mount(document: &Document) {
    let Some(kind) = page_kind() else {
        return;
    };
    let Ok(Some(table)) = document.query_selector("table") else {
        return;
    };
    let rows = select_all_in(&table, "tbody tr");
    let len = rows.len();
    let animate = len < ENTRANCE_MAX_ROWS;
    for (index, row) in rows.into_iter().enumerate() {
        decorate(&row, kind.decoration(index, len));
        if animate {
            animate_entrance(&row, kind, index);
        }
    }
}

fn page_kind() -> Option<PageKind> {
    let path = web_sys::window()?.location().pathname().ok()?;
    PageKind::from_path(&path)
}

fn decorate(row: &Element, decoration: RowDecoration) {
    if let Some(color) = decoration.border_left {
        set_style(row, "border-left", &format!("3px solid {color}"));
    }
    if let Some(color) = decoration.border_right {
        set_style(row, "border-right", &format!("3px solid {color}"));
    }
    if let Some(color) = decoration.border_top {
        set_style(row, "border-top", &format!("3px solid {color}"));
    }
    if let Some(color) = decoration.border_bottom {
        set_style(row, "border-bottom", &format!("3px solid {color}"));
    }
    if decoration.rounded {
        set_style(row, "border-radius", "8px");
    }
    if !decoration.tooltip.is_empty() {
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            row.set_title(decoration.tooltip);
        }
    }
}

fn animate_entrance(row: &Element, kind: PageKind, index: usize) {
    set_style(row, "opacity", "0");
    set_style(row, "transform", kind.entrance_hidden_transform(index));
    let row = row.clone();
    Timeout::new(kind.entrance_delay_ms(index), move || {
        set_style(&row, "transition", kind.entrance_transition());
        set_style(&row, "opacity", "1");
        set_style(&row, "transform", kind.entrance_visible_transform());
    })
    .forget();
}
