//! Result container (spec §4.2).
//!
//! `AlignResult` holds everything a kernel can produce: the scalar summary,
//! the optional score table / last-row-column, and optional alignment
//! statistics. Fields are populated according to which flag bits are set,
//! matching spec §4.2's `new_empty` / `new_table` / `new_rowcol` /
//! `new_stats_table` constructors — here expressed as builder methods on a
//! single Rust struct rather than four distinct allocation paths, since
//! Rust's `Option<Vec<_>>` already encodes "maybe present" without the
//! C library's separate struct layouts.

use crate::flags;
use parasail_types::Score;

/// Per-cell alignment statistics (spec §3, "Statistics tuple").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub matches: i64,
    pub similar: i64,
    pub length: i64,
}

#[derive(Debug, Clone, Default)]
pub struct AlignResult {
    pub score: Score,
    pub end_query: usize,
    pub end_ref: usize,

    /// `score_table[i * s2_len + j]`, present iff `flag & TABLE`.
    pub score_table: Option<Vec<Score>>,
    pub stats_table: Option<Vec<Stats>>,

    /// Last row/column of `H`, present iff `flag & ROWCOL`.
    pub score_row: Option<Vec<Score>>,
    pub score_col: Option<Vec<Score>>,
    pub stats_row: Option<Vec<Stats>>,
    pub stats_col: Option<Vec<Stats>>,

    /// Aggregate statistics at `(end_query, end_ref)`, present iff the
    /// kernel was asked to emit stats.
    pub stats: Option<Stats>,

    pub flag: u32,
}

impl AlignResult {
    pub fn new_empty(flag: u32) -> Self {
        AlignResult { flag, ..Default::default() }
    }

    pub fn new_table(flag: u32, rows: usize, cols: usize) -> Self {
        AlignResult {
            flag: flag | flags::TABLE,
            score_table: Some(vec![0; rows * cols]),
            ..Default::default()
        }
    }

    pub fn new_rowcol(flag: u32, rows: usize, cols: usize) -> Self {
        AlignResult {
            flag: flag | flags::ROWCOL,
            score_row: Some(vec![0; cols]),
            score_col: Some(vec![0; rows]),
            ..Default::default()
        }
    }

    pub fn new_stats_table(flag: u32, rows: usize, cols: usize) -> Self {
        AlignResult {
            flag: flag | flags::TABLE | flags::STATS,
            score_table: Some(vec![0; rows * cols]),
            stats_table: Some(vec![Stats::default(); rows * cols]),
            stats: Some(Stats::default()),
            ..Default::default()
        }
    }

    /// A saturated kernel clears `score`/`end_query`/`end_ref` and sets the
    /// flag; no partial table/rowcol/stats data is retained (spec §4.4.5,
    /// "No partial results are emitted on saturation").
    pub fn saturated(flag: u32) -> Self {
        AlignResult { flag: flag | flags::SATURATED, ..Default::default() }
    }

    pub fn is_saturated(&self) -> bool {
        self.flag & flags::SATURATED != 0
    }
}
