//! Scripted pointer timeline for headless runs.

use blossom_core::{BlossomError, Result};
use blossom_widget::PointerEvent;

/// Time-stamped pointer events, sorted by time and drained as the
/// simulated clock passes them.
pub struct PointerScript {
    events: Vec<(f64, PointerEvent)>,
    cursor: usize,
}

impl PointerScript {
    /// Builds a script from click instants and hover spans. Each span
    /// expands to an `Entered`/`Left` pair. The sort is stable with
    /// hover toggles pushed first, so a click at the exact edge of a
    /// span runs with the hover state already applied.
    pub fn build(clicks: &[f64], hovers: &[(f64, f64)]) -> Self {
        let mut events = Vec::with_capacity(clicks.len() + hovers.len() * 2);
        for &(start, end) in hovers {
            events.push((start, PointerEvent::Entered));
            events.push((end, PointerEvent::Left));
        }
        for &at in clicks {
            events.push((at, PointerEvent::Clicked));
        }
        events.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { events, cursor: 0 }
    }

    /// Events due at or before `now`, in order. Each event is handed
    /// out exactly once across calls.
    pub fn drain_due(&mut self, now: f64) -> &[(f64, PointerEvent)] {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].0 <= now {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }

    /// Events not yet drained.
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }
}

/// Parses a hover span given as `start..end` in seconds, e.g. `0.5..2.0`.
pub fn parse_hover_span(raw: &str) -> Result<(f64, f64)> {
    let (start, end) = raw.split_once("..").ok_or_else(|| {
        BlossomError::ConfigError(format!("hover span `{raw}` must look like `start..end`"))
    })?;
    let start: f64 = start
        .trim()
        .parse()
        .map_err(|_| BlossomError::ConfigError(format!("bad hover start in `{raw}`")))?;
    let end: f64 = end
        .trim()
        .parse()
        .map_err(|_| BlossomError::ConfigError(format!("bad hover end in `{raw}`")))?;
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(BlossomError::ConfigError(format!(
            "hover span `{raw}` is reversed or not finite"
        )));
    }
    Ok((start, end))
}
