//! Metrics boundary for the catalog engine.
//!
//! Engine logic MUST NOT touch counter state directly; all instrumentation
//! flows through [`MetricsEvent`] and [`record`]. Counters are
//! thread-local: one engine session runs on one thread, and tests read
//! their own snapshot without cross-test interference.

use std::cell::RefCell;

thread_local! {
    static STATE: RefCell<MetricsState> = RefCell::new(MetricsState::default());
}

///
/// WindowMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WindowMode {
    Offset,
    Cursor,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent {
    PageServed { mode: WindowMode, rows: u64 },
    CursorHit,
    CursorMiss,
    ScopeReset,
}

///
/// MetricsState
///
/// Counter snapshot for pages served, cursor reuse, and scope resets.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MetricsState {
    pub pages_offset: u64,
    pub pages_cursor: u64,
    pub rows_served: u64,
    pub cursor_hits: u64,
    pub cursor_misses: u64,
    pub scope_resets: u64,
}

pub(crate) fn record(event: MetricsEvent) {
    STATE.with_borrow_mut(|state| match event {
        MetricsEvent::PageServed { mode, rows } => {
            match mode {
                WindowMode::Offset => {
                    state.pages_offset = state.pages_offset.saturating_add(1);
                }
                WindowMode::Cursor => {
                    state.pages_cursor = state.pages_cursor.saturating_add(1);
                }
            }
            state.rows_served = state.rows_served.saturating_add(rows);
        }
        MetricsEvent::CursorHit => {
            state.cursor_hits = state.cursor_hits.saturating_add(1);
        }
        MetricsEvent::CursorMiss => {
            state.cursor_misses = state.cursor_misses.saturating_add(1);
        }
        MetricsEvent::ScopeReset => {
            state.scope_resets = state.scope_resets.saturating_add(1);
        }
    });
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn snapshot() -> MetricsState {
    STATE.with_borrow(|state| *state)
}

/// Reset the current thread's counters.
pub fn reset_all() {
    STATE.with_borrow_mut(|state| *state = MetricsState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_accumulate_into_the_snapshot() {
        reset_all();

        record(MetricsEvent::PageServed {
            mode: WindowMode::Offset,
            rows: 12,
        });
        record(MetricsEvent::PageServed {
            mode: WindowMode::Cursor,
            rows: 7,
        });
        record(MetricsEvent::CursorHit);
        record(MetricsEvent::CursorMiss);
        record(MetricsEvent::ScopeReset);

        let state = snapshot();
        assert_eq!(state.pages_offset, 1);
        assert_eq!(state.pages_cursor, 1);
        assert_eq!(state.rows_served, 19);
        assert_eq!(state.cursor_hits, 1);
        assert_eq!(state.cursor_misses, 1);
        assert_eq!(state.scope_resets, 1);

        reset_all();
        assert_eq!(snapshot(), MetricsState::default());
    }
}
