//! The routing policies — the only step in which the three models differ.
//!
//! All three policies share one tick loop; the engine is generic over
//! [`RoutingPolicy`] and consults it for (a) how many lines to allocate,
//! (b) which line each arrival joins, and (c) which line a freed station
//! pulls from.

use ck_core::{LineId, SimRng, StationId};

use crate::WaitQueue;

/// Pluggable arrival-routing rule.
///
/// Implementations must be deterministic given the RNG stream: the only one
/// that consumes randomness is [`RandomLine`].
pub trait RoutingPolicy {
    /// Stable label used by reports and logs.
    fn name(&self) -> &'static str;

    /// How many lines this policy operates over.
    ///
    /// Per-station policies return one line per station; every policy
    /// returns at least one line so arrivals always have somewhere to stand,
    /// even in the degenerate zero-station configuration.
    fn line_count(&self, station_count: u32) -> usize;

    /// The line a newly arrived customer joins.
    ///
    /// `lines` is never empty (see [`line_count`][Self::line_count]).
    fn route(&self, lines: &[WaitQueue], rng: &mut SimRng) -> LineId;

    /// The line a freed station pulls its next customer from.
    fn line_for_station(&self, station: StationId) -> LineId;
}

// ── SingleLine ────────────────────────────────────────────────────────────────

/// One shared line feeds every station.  Stations pull from it in ascending
/// index order, so the lowest-numbered free station claims the next
/// customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLine;

impl RoutingPolicy for SingleLine {
    fn name(&self) -> &'static str {
        "single-line"
    }

    fn line_count(&self, _station_count: u32) -> usize {
        1
    }

    fn route(&self, _lines: &[WaitQueue], _rng: &mut SimRng) -> LineId {
        LineId(0)
    }

    fn line_for_station(&self, _station: StationId) -> LineId {
        LineId(0)
    }
}

// ── LeastCustomers ────────────────────────────────────────────────────────────

/// One line per station; each arrival joins the currently shortest line.
///
/// Ties resolve to the lowest line index (the first minimum found scanning
/// lines in index order).  The tie-break is observable in per-line final
/// lengths, so it is fixed rather than left to iteration-order accident.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastCustomers;

impl RoutingPolicy for LeastCustomers {
    fn name(&self) -> &'static str {
        "least-customers"
    }

    fn line_count(&self, station_count: u32) -> usize {
        station_count.max(1) as usize
    }

    fn route(&self, lines: &[WaitQueue], _rng: &mut SimRng) -> LineId {
        // min_by_key keeps the first minimum → lowest index wins ties.
        let shortest = lines
            .iter()
            .enumerate()
            .min_by_key(|(_, line)| line.len())
            .map(|(i, _)| i)
            .unwrap_or(0);
        LineId(shortest as u32)
    }

    fn line_for_station(&self, station: StationId) -> LineId {
        LineId(station.0)
    }
}

// ── RandomLine ────────────────────────────────────────────────────────────────

/// One line per station; each arrival joins a line chosen uniformly at
/// random, regardless of current lengths.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLine;

impl RoutingPolicy for RandomLine {
    fn name(&self) -> &'static str {
        "random-line"
    }

    fn line_count(&self, station_count: u32) -> usize {
        station_count.max(1) as usize
    }

    fn route(&self, lines: &[WaitQueue], rng: &mut SimRng) -> LineId {
        LineId(rng.gen_range(0..lines.len() as u32))
    }

    fn line_for_station(&self, station: StationId) -> LineId {
        LineId(station.0)
    }
}
