use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::dom::{select_all_in, set_style};
use enlace_core::batch::{batch_bounds, BatchPlan, SETTLE_MS};

/// Progressive reveal for large table bodies. Small tables are left
/// untouched; oversized ones are condensed instead of animated.
pub(crate) fn mount(document: &Document) {
    let Ok(Some(table)) = document.query_selector("table") else {
        return;
    };
    let rows = select_all_in(&table, "tbody tr");
    match BatchPlan::for_row_count(rows.len()) {
        BatchPlan::AsIs => {}
        BatchPlan::Condensed { head, tail } => condense_table(document, &table, &rows, head, tail),
        BatchPlan::Staggered { batch_size, .. } => {
            set_style(&table, "visibility", "hidden");
            set_style(&table, "opacity", "0");
            BatchRun::start(table, rows, batch_size);
        }
    }
}

/// Replaces the table with a preview: header, first rows, a gap marker,
/// last rows. The original table stays in the document, hidden.
fn condense_table(
    document: &Document,
    table: &Element,
    rows: &[Element],
    head: usize,
    tail: usize,
) {
    let Ok(preview) = document.create_element("table") else {
        return;
    };
    preview.set_class_name("condensed-table");
    if let Ok(Some(thead)) = table.query_selector("thead") {
        if let Ok(clone) = thead.clone_node_with_deep(true) {
            let _ = preview.append_child(&clone);
        }
    }
    let Ok(body) = document.create_element("tbody") else {
        return;
    };
    for row in &rows[..head.min(rows.len())] {
        if let Ok(clone) = row.clone_node_with_deep(true) {
            let _ = body.append_child(&clone);
        }
    }
    let columns = rows
        .first()
        .map(|row| select_all_in(row, "td").len())
        .unwrap_or(1)
        .max(1);
    if let Ok(gap) = document.create_element("tr") {
        gap.set_class_name("condensed-gap");
        if let Ok(cell) = document.create_element("td") {
            let _ = cell.set_attribute("colspan", &columns.to_string());
            cell.set_text_content(Some("⋯"));
            let _ = gap.append_child(&cell);
        }
        let _ = body.append_child(&gap);
    }
    if rows.len() > tail {
        for row in &rows[rows.len() - tail..] {
            if let Ok(clone) = row.clone_node_with_deep(true) {
                let _ = body.append_child(&clone);
            }
        }
    }
    let _ = preview.append_child(&body);
    let Some(parent) = table.parent_node() else {
        return;
    };
    let _ = parent.insert_before(&preview, table.next_sibling().as_ref());
    set_style(table, "display", "none");
}

/// One in-flight reveal: a group of rows per animation frame, each row
/// staggered into a slide-up. There is no cancellation; callbacks on a
/// removed table are no-ops on detached elements.
struct BatchRun {
    table: Element,
    rows: Vec<Element>,
    batch_size: usize,
    group: Cell<usize>,
    started_at: f64,
    frame: RefCell<Option<AnimationFrame>>,
}

impl BatchRun {
    fn start(table: Element, rows: Vec<Element>, batch_size: usize) {
        let run = Rc::new(Self {
            table,
            rows,
            batch_size,
            group: Cell::new(0),
            started_at: js_sys::Date::now(),
            frame: RefCell::new(None),
        });
        run.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let run = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            run.frame.borrow_mut().take();
            run.reveal_next_group();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn reveal_next_group(self: &Rc<Self>) {
        let group = self.group.get();
        let (start, end) = batch_bounds(group, self.batch_size, self.rows.len());
        for (offset, row) in self.rows[start..end].iter().enumerate() {
            set_style(row, "opacity", "0");
            set_style(row, "transform", "translateY(10px)");
            let row = row.clone();
            Timeout::new(BatchPlan::row_delay_ms(offset), move || {
                set_style(&row, "transition", "all 0.3s ease");
                set_style(&row, "opacity", "1");
                set_style(&row, "transform", "translateY(0)");
            })
            .forget();
        }
        self.group.set(group + 1);
        if end < self.rows.len() {
            self.schedule();
        } else {
            self.finish();
        }
    }

    fn finish(&self) {
        let table = self.table.clone();
        let started_at = self.started_at;
        Timeout::new(SETTLE_MS, move || {
            set_style(&table, "transition", "opacity 0.5s ease, visibility 0.5s ease");
            set_style(&table, "visibility", "visible");
            set_style(&table, "opacity", "1");
            let elapsed = js_sys::Date::now() - started_at;
            console::log!("table revealed in", elapsed, "ms");
        })
        .forget();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn build_table(document: &Document, rows: usize) -> Element {
        let table = document.create_element("table").expect("create table");
        let thead = document.create_element("thead").expect("create thead");
        thead.set_inner_html("<tr><th>Valor</th></tr>");
        let tbody = document.create_element("tbody").expect("create tbody");
        for index in 0..rows {
            let row = document.create_element("tr").expect("create row");
            row.set_inner_html(&format!("<td>{index}</td>"));
            let _ = tbody.append_child(&row);
        }
        let _ = table.append_child(&thead);
        let _ = table.append_child(&tbody);
        let body = document.body().expect("body available");
        let _ = body.append_child(&table);
        table
    }

    #[wasm_bindgen_test]
    fn oversized_table_gets_a_condensed_preview() {
        let document = crate::dom::document().expect("document available");
        let table = build_table(&document, 120);
        mount(&document);

        let preview = document
            .query_selector(".condensed-table")
            .expect("query ok")
            .expect("preview exists");
        let preview_rows = select_all_in(&preview, "tbody tr");
        // first 5 + gap marker + last 5
        assert_eq!(preview_rows.len(), 11);
        assert!(preview
            .query_selector(".condensed-gap")
            .expect("query ok")
            .is_some());
        let hidden = table
            .dyn_ref::<web_sys::HtmlElement>()
            .expect("html element")
            .style()
            .get_property_value("display")
            .unwrap_or_default();
        assert_eq!(hidden, "none");
        let first = preview_rows.first().expect("first row");
        assert_eq!(first.text_content().as_deref(), Some("0"));
        let last = preview_rows.last().expect("last row");
        assert_eq!(last.text_content().as_deref(), Some("119"));

        preview.remove();
        table.remove();
    }

    #[wasm_bindgen_test]
    fn small_table_is_left_untouched() {
        let document = crate::dom::document().expect("document available");
        let table = build_table(&document, 4);
        mount(&document);
        let rows = select_all_in(&table, "tbody tr");
        let first = rows.first().expect("row");
        assert_eq!(first.get_attribute("style"), None);
        table.remove();
    }
}
