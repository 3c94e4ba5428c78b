//! Query profile builder (spec §4.3).
//!
//! Precomputes, for each alphabet symbol, the per-segment score vectors laid
//! out in the striping order the striped/scan kernels consume (spec §3,
//! "Striped layout" / "Query profile"). The diagonal scheme (§4.4.3) does
//! not use a profile; it indexes the matrix directly.

use itertools::Itertools;
use parasail_matrices::Matrix;
use parasail_types::LaneElement;

/// `N x segLen x L` flattened profile, plus the parallel is-match/is-similar
/// masks used by stats kernels (spec §3, "Statistics tuple").
#[derive(Debug, Clone)]
pub struct Profile<T: LaneElement, const L: usize> {
    /// `segWidth * segLen >= m` (spec §3 invariant); `L` here is `segWidth`.
    pub seg_len: usize,
    pub n_symbols: usize,
    /// Layout `[symbol][segment][lane]`, length `n_symbols * seg_len * L`.
    pub scores: Vec<T>,
    /// Same layout: `1` where the reference symbol `k` equals the query
    /// residue at that lane/segment, else `0`.
    pub is_match: Vec<u8>,
    /// Same layout: `1` where `M[k][query_residue] > 0`.
    pub is_similar: Vec<u8>,
}

impl<T: LaneElement, const L: usize> Profile<T, L> {
    /// Build a profile for `query` (already mapped to matrix indices, see
    /// `Matrix::map_sequence`) against `matrix`.
    ///
    /// Trailing query positions beyond `query.len()` are padded with the
    /// neutral score `0` per spec §3 ("padded with neutral score 0").
    pub fn build(query: &[u8], matrix: &Matrix) -> Self {
        assert!(L > 0);
        let m = query.len();
        let seg_len = m.div_ceil(L).max(1);
        let n = matrix.n;

        let mut scores = Vec::with_capacity(n * seg_len * L);
        let mut is_match = Vec::with_capacity(n * seg_len * L);
        let mut is_similar = Vec::with_capacity(n * seg_len * L);

        for k in 0..n {
            for segment in 0..seg_len {
                for lane in 0..L {
                    let query_pos = lane * seg_len + segment;
                    if query_pos < m {
                        let q = query[query_pos] as usize;
                        let s = matrix.score_idx(k, q);
                        scores.push(T::from_score_saturating(s as i64));
                        is_match.push((k == q) as u8);
                        is_similar.push((s > 0) as u8);
                    } else {
                        scores.push(T::ZERO);
                        is_match.push(0);
                        is_similar.push(0);
                    }
                }
            }
        }

        Profile { seg_len, n_symbols: n, scores, is_match, is_similar }
    }

    /// The `seg_len`-long slice of per-lane scores for reference symbol
    /// `symbol_idx` at `segment`, i.e. one SIMD vector's worth of data.
    #[inline]
    pub fn segment(&self, symbol_idx: usize, segment: usize) -> &[T] {
        let base = (symbol_idx * self.seg_len + segment) * L;
        &self.scores[base..base + L]
    }

    #[inline]
    pub fn match_segment(&self, symbol_idx: usize, segment: usize) -> &[u8] {
        let base = (symbol_idx * self.seg_len + segment) * L;
        &self.is_match[base..base + L]
    }

    #[inline]
    pub fn similar_segment(&self, symbol_idx: usize, segment: usize) -> &[u8] {
        let base = (symbol_idx * self.seg_len + segment) * L;
        &self.is_similar[base..base + L]
    }

    /// Every segment's vector for a given reference symbol, in segment
    /// order — the exact sequence the striped inner loop consumes.
    pub fn symbol_segments(&self, symbol_idx: usize) -> impl Iterator<Item = &[T]> {
        (0..self.seg_len).map(move |seg| self.segment(symbol_idx, seg))
    }
}

/// Convenience: chunk a flat `[symbol][segment][lane]` buffer back into
/// `seg_len` chunks of width `L`, used by tests and by the scan kernel's
/// column loop which walks segments in the profile's own order.
pub fn segments<T: Copy>(flat: &[T], seg_len: usize, l: usize) -> impl Iterator<Item = &[T]> {
    assert_eq!(flat.len(), seg_len * l);
    flat.chunks_exact(l).take(seg_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parasail_matrices::blosum62;

    #[test]
    fn profile_layout_matches_invariant() {
        let matrix = blosum62();
        let query = matrix.map_sequence(b"HEAGAWGHEE").unwrap();
        let profile = Profile::<i16, 4>::build(&query, &matrix);
        assert_eq!(profile.seg_len, query.len().div_ceil(4));
        assert_eq!(profile.scores.len(), matrix.n * profile.seg_len * 4);
    }

    #[test]
    fn profile_scores_match_direct_lookup() {
        let matrix = blosum62();
        let query = matrix.map_sequence(b"HEAGAWGHEE").unwrap();
        let seg_len = query.len().div_ceil(4);
        let profile = Profile::<i32, 4>::build(&query, &matrix);

        for k in 0..matrix.n {
            for segment in 0..seg_len {
                for lane in 0..4 {
                    let query_pos = lane * seg_len + segment;
                    let expected = if query_pos < query.len() {
                        matrix.score_idx(k, query[query_pos] as usize) as i32
                    } else {
                        0
                    };
                    assert_eq!(profile.segment(k, segment)[lane], expected);
                }
            }
        }
    }

    #[test]
    fn is_match_flags_self_alignment() {
        let matrix = blosum62();
        let query = matrix.map_sequence(b"AAAA").unwrap();
        let profile = Profile::<i8, 2>::build(&query, &matrix);
        let a_idx = matrix.map(b'A').unwrap() as usize;
        for segment in 0..profile.seg_len {
            let m = profile.match_segment(a_idx, segment);
            assert!(m.iter().all(|&x| x == 1));
        }
    }

    #[test]
    fn segments_helper_roundtrips() {
        let flat: Vec<i32> = (0..12).collect();
        let chunks: Vec<&[i32]> = segments(&flat, 3, 4).collect_vec();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], &[0, 1, 2, 3]);
        assert_eq!(chunks[2], &[8, 9, 10, 11]);
    }
}
