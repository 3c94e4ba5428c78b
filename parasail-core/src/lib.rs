//! Vectorized alignment kernel family (spec §2, component 4 — the bulk of
//! this library), its CPU dispatch and saturation-escalation wrappers
//! (§4.5, §4.6), the result container (§4.2), and the scalar reference
//! implementations that double as both fallback and test oracle (§4.7).

#![allow(incomplete_features)]
#![feature(portable_simd)]

pub mod boundary;
pub mod dispatch;
pub mod escalate;
pub mod flags;
pub mod kernel;
pub mod recurrence;
pub mod result;
pub mod saturation;
pub mod scalar;
mod simd_util;

pub use recurrence::{Nw, RecurrenceKind, Sg, Sw};
pub use result::{AlignResult, Stats};

use parasail_matrices::Matrix;
use parasail_types::{GapParams, Recurrence, Scheme};

/// Top-level entry point used by the `parasail` facade crate: resolve
/// `recurrence` to its marker type at runtime, then run the full
/// dispatch → escalation pipeline (spec §2, "Data flow: caller → dispatch
/// → (profile-builder → kernel) | (scalar fallback) → result").
#[allow(clippy::too_many_arguments)]
pub fn align(
    recurrence: Recurrence,
    s1: &[u8],
    s2: &[u8],
    gap: GapParams,
    matrix: &Matrix,
    scheme: Scheme,
    emit_table: bool,
    emit_rowcol: bool,
    emit_stats: bool,
) -> AlignResult {
    match recurrence {
        Recurrence::Nw => {
            escalate::align::<Nw>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats)
        }
        Recurrence::Sg => {
            escalate::align::<Sg>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats)
        }
        Recurrence::Sw => {
            escalate::align::<Sw>(s1, s2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parasail_matrices::blosum62;

    fn mapped(matrix: &Matrix, s: &str) -> Vec<u8> {
        matrix.map_sequence(s.as_bytes()).unwrap()
    }

    #[test]
    fn all_three_schemes_agree_with_scalar_oracle_sw() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "HEAGAWGHEE");
        let s2 = mapped(&matrix, "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let oracle = scalar::align::<Sw>(&s1, &s2, gap, &matrix, false, false);

        for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
            let got = align(Recurrence::Sw, &s1, &s2, gap, &matrix, scheme, false, false, false);
            assert_eq!(got.score, oracle.score, "scheme {scheme:?} disagreed with scalar oracle");
        }
    }

    #[test]
    fn all_three_schemes_agree_with_scalar_oracle_nw() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "HEAGAWGHEE");
        let s2 = mapped(&matrix, "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let oracle = scalar::align::<Nw>(&s1, &s2, gap, &matrix, false, false);

        for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
            let got = align(Recurrence::Nw, &s1, &s2, gap, &matrix, scheme, false, false, false);
            assert_eq!(got.score, oracle.score, "scheme {scheme:?} disagreed with scalar oracle");
        }
    }

    #[test]
    fn all_three_schemes_agree_with_scalar_oracle_sg() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "HEAGAWGHEE");
        let s2 = mapped(&matrix, "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let oracle = scalar::align::<Sg>(&s1, &s2, gap, &matrix, false, false);

        for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
            let got = align(Recurrence::Sg, &s1, &s2, gap, &matrix, scheme, false, false, false);
            assert_eq!(got.score, oracle.score, "scheme {scheme:?} disagreed with scalar oracle");
        }
    }

    #[test]
    fn striped_table_matches_scalar_table() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "HEAGAWGHEE");
        let s2 = mapped(&matrix, "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let oracle = scalar::align::<Nw>(&s1, &s2, gap, &matrix, true, false);
        let got = align(Recurrence::Nw, &s1, &s2, gap, &matrix, Scheme::Striped, true, false, false);
        assert_eq!(got.score_table, oracle.score_table);
    }

    #[test]
    fn stats_agree_across_schemes() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "AAAA");
        let s2 = mapped(&matrix, "AAAA");
        let gap = GapParams::new(10, 1);
        let oracle = scalar::align::<Nw>(&s1, &s2, gap, &matrix, false, true);
        let oracle_stats = oracle.stats.expect("oracle computed with emit_stats=true");
        assert_eq!((oracle_stats.matches, oracle_stats.length), (4, 4));

        for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
            let got = align(Recurrence::Nw, &s1, &s2, gap, &matrix, scheme, false, false, true);
            let stats = got.stats.unwrap_or_else(|| panic!("scheme {scheme:?} returned no stats"));
            assert_eq!(
                (stats.matches, stats.similar, stats.length),
                (oracle_stats.matches, oracle_stats.similar, oracle_stats.length),
                "scheme {scheme:?} disagreed with scalar oracle stats"
            );
        }
    }

    #[test]
    fn rowcol_matches_table_last_row_and_col() {
        let matrix = blosum62();
        let s1 = mapped(&matrix, "HEAGAWGHEE");
        let s2 = mapped(&matrix, "PAWHEAE");
        let gap = GapParams::new(10, 1);
        let m = s1.len();
        let n = s2.len();

        for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
            let tabled = align(Recurrence::Sw, &s1, &s2, gap, &matrix, scheme, true, false, false);
            let rowcol = align(Recurrence::Sw, &s1, &s2, gap, &matrix, scheme, false, true, true);

            let table = tabled.score_table.as_ref().unwrap();
            let score_row = rowcol.score_row.unwrap_or_else(|| panic!("scheme {scheme:?} missing score_row"));
            let score_col = rowcol.score_col.unwrap_or_else(|| panic!("scheme {scheme:?} missing score_col"));
            let stats_row = rowcol.stats_row.unwrap_or_else(|| panic!("scheme {scheme:?} missing stats_row"));
            let stats_col = rowcol.stats_col.unwrap_or_else(|| panic!("scheme {scheme:?} missing stats_col"));

            for j in 0..n {
                assert_eq!(score_row[j], table[(m - 1) * n + j], "scheme {scheme:?} score_row[{j}]");
            }
            for i in 0..m {
                assert_eq!(score_col[i], table[i * n + (n - 1)], "scheme {scheme:?} score_col[{i}]");
            }
            assert_eq!(stats_row.len(), n, "scheme {scheme:?} stats_row length");
            assert_eq!(stats_col.len(), m, "scheme {scheme:?} stats_col length");
        }
    }
}
