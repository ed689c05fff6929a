/// Tables under this many rows render as-is; they are cheap enough to
/// paint in one pass.
pub const MIN_ANIMATED_ROWS: usize = 10;
/// Hard ceiling: above this the table is condensed instead of animated so
/// pathological row counts never schedule thousands of transitions.
pub const CONDENSE_THRESHOLD: usize = 100;
/// Rows kept at each end of a condensed table.
pub const CONDENSED_EDGE_ROWS: usize = 5;
pub const MAX_BATCH_SIZE: usize = 20;
/// Per-row delay inside a batch, so rows slide in staggered.
pub const ROW_STAGGER_MS: u32 = 25;
/// Pause between the last batch and the container fade-in.
pub const SETTLE_MS: u32 = 100;

/// How a table body of a given size should be revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchPlan {
    /// Small table, already visible; nothing to schedule.
    AsIs,
    /// Oversized table: show a preview of the first and last rows only.
    Condensed { head: usize, tail: usize },
    /// Reveal in groups, one group per animation frame.
    Staggered {
        batch_size: usize,
        group_count: usize,
    },
}

impl BatchPlan {
    pub fn for_row_count(rows: usize) -> BatchPlan {
        if rows < MIN_ANIMATED_ROWS {
            return BatchPlan::AsIs;
        }
        if rows > CONDENSE_THRESHOLD {
            return BatchPlan::Condensed {
                head: CONDENSED_EDGE_ROWS,
                tail: CONDENSED_EDGE_ROWS,
            };
        }
        let batch_size = MAX_BATCH_SIZE.min(div_ceil(rows, 10));
        BatchPlan::Staggered {
            batch_size,
            group_count: div_ceil(rows, batch_size),
        }
    }

    /// Delay before a row starts its slide-up, relative to its batch.
    pub fn row_delay_ms(offset_in_batch: usize) -> u32 {
        offset_in_batch as u32 * ROW_STAGGER_MS
    }
}

/// Half-open row range covered by one batch.
pub fn batch_bounds(group: usize, batch_size: usize, total: usize) -> (usize, usize) {
    let start = group * batch_size;
    (start.min(total), (start + batch_size).min(total))
}

fn div_ceil(value: usize, divisor: usize) -> usize {
    (value + divisor - 1) / divisor
}
