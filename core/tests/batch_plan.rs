use enlace_core::batch::{batch_bounds, BatchPlan, CONDENSED_EDGE_ROWS};

#[test]
fn tiny_tables_render_as_is() {
    for rows in 0..10 {
        assert_eq!(BatchPlan::for_row_count(rows), BatchPlan::AsIs, "rows={rows}");
    }
}

#[test]
fn oversized_tables_condense_instead_of_animating() {
    for rows in [101, 500, 10_000] {
        assert_eq!(
            BatchPlan::for_row_count(rows),
            BatchPlan::Condensed {
                head: CONDENSED_EDGE_ROWS,
                tail: CONDENSED_EDGE_ROWS,
            },
            "rows={rows}"
        );
    }
}

#[test]
fn staggered_batch_size_is_a_tenth_rounded_up() {
    let cases = [
        (10usize, 1usize, 10usize),
        (20, 2, 10),
        (50, 5, 10),
        (95, 10, 10),
        (100, 10, 10),
    ];
    for (rows, expected_batch, expected_groups) in cases {
        match BatchPlan::for_row_count(rows) {
            BatchPlan::Staggered {
                batch_size,
                group_count,
            } => {
                assert_eq!(batch_size, expected_batch, "rows={rows}");
                assert_eq!(group_count, expected_groups, "rows={rows}");
            }
            other => panic!("rows={rows}: expected staggered plan, got {other:?}"),
        }
    }
}

#[test]
fn groups_cover_every_row_exactly_once() {
    for rows in 10..=100 {
        let BatchPlan::Staggered {
            batch_size,
            group_count,
        } = BatchPlan::for_row_count(rows)
        else {
            panic!("rows={rows}: expected staggered plan");
        };
        let mut covered = 0;
        for group in 0..group_count {
            let (start, end) = batch_bounds(group, batch_size, rows);
            assert_eq!(start, covered, "rows={rows} group={group}");
            assert!(end > start, "rows={rows} group={group} is empty");
            assert!(end - start <= batch_size);
            covered = end;
        }
        assert_eq!(covered, rows);
    }
}

#[test]
fn row_delay_grows_with_batch_offset() {
    assert_eq!(BatchPlan::row_delay_ms(0), 0);
    assert_eq!(BatchPlan::row_delay_ms(1), 25);
    assert_eq!(BatchPlan::row_delay_ms(19), 475);
}
