//! Public entry point for vectorized pairwise sequence alignment (spec §1).
//!
//! Two surfaces are exposed from the same underlying `parasail-core` kernel
//! family: a safe Rust API (`nw`/`sg`/`sw`, [`AlignerBuilder`]) for callers
//! writing Rust, and a `parasail_*` C-ABI surface (the [`capi`] module) for
//! callers linking this crate as a shared library, matching the naming
//! grammar of spec §6.

pub mod capi;

pub use parasail_core::{AlignResult, Stats};
pub use parasail_matrices::Matrix;
pub use parasail_types::{GapParams, ParasailError, Recurrence, Scheme};

use log::trace;

/// Map both sequences through `matrix`'s symbol mapper, rejecting empty
/// inputs and unmapped bytes up front (spec §7: these are the only two
/// input-domain error kinds; everything else is handled transparently by
/// dispatch/escalation).
fn map_inputs(s1: &[u8], s2: &[u8], matrix: &Matrix) -> Result<(Vec<u8>, Vec<u8>), ParasailError> {
    if s1.is_empty() {
        return Err(ParasailError::EmptyQuery);
    }
    if s2.is_empty() {
        return Err(ParasailError::EmptyReference);
    }
    let m1 = matrix.map_sequence(s1).map_err(|i| ParasailError::UnmappedSymbol(s1[i]))?;
    let m2 = matrix.map_sequence(s2).map_err(|i| ParasailError::UnmappedSymbol(s2[i]))?;
    Ok((m1, m2))
}

/// Global alignment (Needleman-Wunsch): both ends gap-penalized.
pub fn nw(s1: &[u8], s2: &[u8], gap: GapParams, matrix: &Matrix) -> Result<AlignResult, ParasailError> {
    AlignerBuilder::new(Recurrence::Nw, gap).align(s1, s2, matrix)
}

/// Semi-global alignment: end gaps are free on one of query/reference,
/// whichever contributes the higher score at that end (spec §4.4.1, Sg).
pub fn sg(s1: &[u8], s2: &[u8], gap: GapParams, matrix: &Matrix) -> Result<AlignResult, ParasailError> {
    AlignerBuilder::new(Recurrence::Sg, gap).align(s1, s2, matrix)
}

/// Local alignment (Smith-Waterman): `H` clamped to zero.
pub fn sw(s1: &[u8], s2: &[u8], gap: GapParams, matrix: &Matrix) -> Result<AlignResult, ParasailError> {
    AlignerBuilder::new(Recurrence::Sw, gap).align(s1, s2, matrix)
}

/// Builder for requesting optional outputs (table/rowcol/stats) and a
/// specific vectorization scheme before running an alignment, mirroring the
/// `{plain, table, rowcol, stats}` options matrix of spec §2, component 4.
///
/// The scheme choice only affects which of the three equivalent kernels
/// computes the result (spec §8, invariant 1); dispatch and saturation
/// escalation (§4.5, §4.6) always run underneath regardless of scheme.
#[derive(Debug, Clone, Copy)]
pub struct AlignerBuilder {
    recurrence: Recurrence,
    gap: GapParams,
    scheme: Scheme,
    table: bool,
    rowcol: bool,
    stats: bool,
}

impl AlignerBuilder {
    pub fn new(recurrence: Recurrence, gap: GapParams) -> Self {
        AlignerBuilder { recurrence, gap, scheme: Scheme::Striped, table: false, rowcol: false, stats: false }
    }

    pub fn scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn table(mut self) -> Self {
        self.table = true;
        self
    }

    pub fn rowcol(mut self) -> Self {
        self.rowcol = true;
        self
    }

    pub fn stats(mut self) -> Self {
        self.stats = true;
        self
    }

    /// Run the alignment. `s1` is the query (rows), `s2` the reference
    /// (columns); both are mapped through `matrix` before dispatch.
    pub fn align(&self, s1: &[u8], s2: &[u8], matrix: &Matrix) -> Result<AlignResult, ParasailError> {
        let (m1, m2) = map_inputs(s1, s2, matrix)?;
        trace!(
            "aligning {} query symbols against {} reference symbols, recurrence {:?}, scheme {:?}",
            m1.len(),
            m2.len(),
            self.recurrence,
            self.scheme
        );
        Ok(parasail_core::align(
            self.recurrence,
            &m1,
            &m2,
            self.gap,
            matrix,
            self.scheme,
            self.table,
            self.rowcol,
            self.stats,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parasail_matrices::blosum62;

    #[test]
    fn nw_rejects_empty_query() {
        let matrix = blosum62();
        let gap = GapParams::new(10, 1);
        let err = nw(b"", b"ACGT", gap, &matrix).unwrap_err();
        assert_eq!(err, ParasailError::EmptyQuery);
    }

    #[test]
    fn nw_rejects_empty_reference() {
        let matrix = blosum62();
        let gap = GapParams::new(10, 1);
        let err = nw(b"ACGT", b"", gap, &matrix).unwrap_err();
        assert_eq!(err, ParasailError::EmptyReference);
    }

    #[test]
    fn nw_rejects_unmapped_symbol() {
        let matrix = blosum62();
        let gap = GapParams::new(10, 1);
        let err = nw(b"HEAG1WGHEE", b"PAWHEAE", gap, &matrix).unwrap_err();
        assert_eq!(err, ParasailError::UnmappedSymbol(b'1'));
    }

    #[test]
    fn sw_scores_textbook_example() {
        let matrix = blosum62();
        let gap = GapParams::new(10, 1);
        let result = sw(b"HEAGAWGHEE", b"PAWHEAE", gap, &matrix).unwrap();
        assert_eq!(result.score, 28);
    }

    #[test]
    fn builder_table_matches_free_function_score() {
        let matrix = blosum62();
        let gap = GapParams::new(10, 1);
        let plain = nw(b"HEAGAWGHEE", b"PAWHEAE", gap, &matrix).unwrap();
        let tabled = AlignerBuilder::new(Recurrence::Nw, gap)
            .table()
            .align(b"HEAGAWGHEE", b"PAWHEAE", &matrix)
            .unwrap();
        assert_eq!(plain.score, tabled.score);
        assert!(tabled.score_table.is_some());
    }
}
