//! Substitution-matrix registry (spec §4.1).
//!
//! Matrices are compiled-in constants addressed by name, plus a custom
//! builder for caller-supplied score tables. Every `Matrix` caches its
//! `min`/`max` entries, used by kernels (§4.4) to bound saturation checks.

mod data;

use log::debug;

/// A symbol-to-index mapper plus an `N x N` score table.
///
/// `min`/`max` are precomputed over the full table (not just the diagonal):
/// kernels use them to decide whether an intermediate `H`/`E`/`F` value is
/// still representable at a given lane width (spec §4.4, Failure mode).
#[derive(Debug, Clone)]
pub struct Matrix {
    pub name: &'static str,
    /// Row-major `n * n` score table.
    scores: Vec<i32>,
    /// Dense 256-entry mapper: `mapper[byte] = index`, or `-1` if `byte` has
    /// no entry in this matrix's alphabet.
    mapper: [i8; 256],
    pub n: usize,
    pub min: i32,
    pub max: i32,
}

impl Matrix {
    fn build(name: &'static str, alphabet: &[u8], rows: &[&[i32]]) -> Matrix {
        let n = alphabet.len();
        assert!(rows.len() == n && rows.iter().all(|r| r.len() == n));
        let mut mapper = [-1i8; 256];
        for (idx, &b) in alphabet.iter().enumerate() {
            mapper[b as usize] = idx as i8;
            mapper[b.to_ascii_lowercase() as usize] = idx as i8;
        }
        let mut scores = Vec::with_capacity(n * n);
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        for row in rows {
            for &v in *row {
                min = min.min(v);
                max = max.max(v);
                scores.push(v);
            }
        }
        Matrix { name, scores, mapper, n, min, max }
    }

    /// Build a custom matrix from a caller-supplied `N x N` score block and
    /// alphabet mapper (spec §4.1, "A custom-matrix builder is also
    /// provided").
    pub fn from_scores(name: &'static str, alphabet: &[u8], rows: &[&[i32]]) -> Matrix {
        debug!("building custom matrix '{name}' with {} symbols", alphabet.len());
        Matrix::build(name, alphabet, rows)
    }

    /// Score for substituting symbol `a` with symbol `b`. Symmetry
    /// (`M[i][j] == M[j][i]`) holds for every compiled-in matrix but is
    /// never assumed here: lookups always index `[a][b]` explicitly
    /// (spec §3, "symmetry is not assumed by the kernel").
    #[inline]
    pub fn score(&self, a: u8, b: u8) -> Option<i32> {
        let ia = self.mapper[a as usize];
        let ib = self.mapper[b as usize];
        if ia < 0 || ib < 0 {
            return None;
        }
        Some(self.scores[ia as usize * self.n + ib as usize])
    }

    /// Score by already-resolved matrix indices, used by the kernel family's
    /// hot loops once sequences have been mapped once up front.
    #[inline]
    pub fn score_idx(&self, i: usize, j: usize) -> i32 {
        self.scores[i * self.n + j]
    }

    #[inline]
    pub fn map(&self, byte: u8) -> Option<u8> {
        let idx = self.mapper[byte as usize];
        (idx >= 0).then_some(idx as u8)
    }

    /// Map a whole sequence to matrix indices, returning `None` at the first
    /// unmapped byte's position.
    pub fn map_sequence(&self, seq: &[u8]) -> Result<Vec<u8>, usize> {
        seq.iter()
            .enumerate()
            .map(|(i, &b)| self.map(b).ok_or(i))
            .collect()
    }

    /// Row of raw scores for matrix index `i`, used by the diagonal scheme
    /// (§4.4.3) which gathers matrix rows directly instead of going through
    /// a query profile.
    #[inline]
    pub fn row(&self, i: usize) -> &[i32] {
        &self.scores[i * self.n..(i + 1) * self.n]
    }
}

/// Look up a compiled-in named matrix. Returns `None` rather than a null
/// pointer (idiomatic substitution for the C library's NULL-returning
/// lookup, spec §4.1).
pub fn lookup(name: &str) -> Option<Matrix> {
    match name {
        "blosum62" => Some(blosum62()),
        "pam80" => Some(pam80()),
        "pam440" => Some(pam440()),
        "dnafull" => Some(dnafull()),
        _ => None,
    }
}

pub fn blosum62() -> Matrix {
    let rows: Vec<&[i32]> = data::BLOSUM62.iter().map(|r| r.as_slice()).collect();
    Matrix::build("blosum62", data::PROTEIN_ALPHABET, &rows)
}

pub fn pam80() -> Matrix {
    let rows: Vec<&[i32]> = data::PAM80.iter().map(|r| r.as_slice()).collect();
    Matrix::build("pam80", data::PROTEIN_ALPHABET, &rows)
}

pub fn pam440() -> Matrix {
    let rows: Vec<&[i32]> = data::PAM440.iter().map(|r| r.as_slice()).collect();
    Matrix::build("pam440", data::PROTEIN_ALPHABET, &rows)
}

pub fn dnafull() -> Matrix {
    let rows: Vec<&[i32]> = data::DNAFULL.iter().map(|r| r.as_slice()).collect();
    Matrix::build("dnafull", data::DNA_ALPHABET, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blosum62_self_scores() {
        let m = blosum62();
        assert_eq!(m.score(b'A', b'A'), Some(4));
        assert_eq!(m.score(b'W', b'W'), Some(11));
        assert_eq!(m.min, -4);
        assert_eq!(m.max, 11);
    }

    #[test]
    fn blosum62_case_insensitive() {
        let m = blosum62();
        assert_eq!(m.score(b'a', b'a'), m.score(b'A', b'A'));
    }

    #[test]
    fn unmapped_symbol_is_none() {
        let m = blosum62();
        assert_eq!(m.score(b'1', b'A'), None);
    }

    #[test]
    fn lookup_unknown_name() {
        assert!(lookup("not-a-matrix").is_none());
    }

    #[test]
    fn custom_matrix_roundtrip() {
        let alphabet = b"AB";
        let rows: &[&[i32]] = &[&[1, -1], &[-1, 1]];
        let m = Matrix::from_scores("toy", alphabet, rows);
        assert_eq!(m.score(b'A', b'A'), Some(1));
        assert_eq!(m.score(b'A', b'B'), Some(-1));
    }

    #[test]
    fn pam_matrices_symmetric_and_bounded() {
        for m in [pam80(), pam440(), blosum62()] {
            for i in 0..m.n {
                for j in 0..m.n {
                    assert_eq!(m.row(i)[j], m.score_idx(i, j));
                }
            }
        }
    }
}
