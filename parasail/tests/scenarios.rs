//! End-to-end scenarios (spec §8): concrete alignments plus the cross-scheme
//! and scalar-oracle invariants, driven through the public `parasail` API
//! rather than `parasail-core` internals.

use parasail::{nw, sg, sw, AlignerBuilder, GapParams, Recurrence, Scheme};
use parasail_matrices::blosum62;

fn gap() -> GapParams {
    GapParams::new(10, 1)
}

#[test]
fn scenario_1_sw_heagawghee_pawhaea() {
    let matrix = blosum62();
    let result = sw(b"HEAGAWGHEE", b"PAWHEAE", gap(), &matrix).unwrap();
    assert_eq!(result.score, 28);
    assert_eq!(result.end_query, 8);
    assert_eq!(result.end_ref, 6);
}

#[test]
fn scenario_2_nw_heagawghee_pawhaea() {
    let matrix = blosum62();
    let result = nw(b"HEAGAWGHEE", b"PAWHEAE", gap(), &matrix).unwrap();
    assert_eq!(result.score, 19);
    assert_eq!(result.end_query, 9);
    assert_eq!(result.end_ref, 6);
}

#[test]
fn scenario_3_sg_heagawghee_pawhaea() {
    let matrix = blosum62();
    let result = sg(b"HEAGAWGHEE", b"PAWHEAE", gap(), &matrix).unwrap();
    assert_eq!(result.score, 22);
}

#[test]
fn scenario_4_identical_poly_a_all_schemes() {
    let matrix = blosum62();
    let expected = 4 * matrix.score(b'A', b'A').unwrap() as i64;
    for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
        let result = AlignerBuilder::new(Recurrence::Nw, gap())
            .scheme(scheme)
            .align(b"AAAA", b"AAAA", &matrix)
            .unwrap();
        assert_eq!(result.score, expected, "scheme {scheme:?}");
    }
}

#[test]
fn scenario_5_long_poly_a_escalates_past_int8_without_saturating() {
    // 200 matching residues overflows an int8 lane (score 800 for
    // BLOSUM62's A-A=4) well before int8's [-128, 127] range; dispatch +
    // escalation (spec §4.5/§4.6) must transparently widen past this and
    // return the correct unsaturated score, never surfacing SATURATED to
    // the caller of the safe API.
    let matrix = blosum62();
    let s = vec![b'A'; 200];
    let result = sw(&s, &s, gap(), &matrix).unwrap();
    let expected = 200 * matrix.score(b'A', b'A').unwrap() as i64;
    assert_eq!(result.score, expected);
    assert_eq!(result.flag & parasail_core::flags::SATURATED, 0);
}

#[test]
fn scenario_6_random_corpus_agrees_with_scalar_oracle() {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const AA: &[u8] = b"ARNDCQEGHILKMFPSTWYV";
    let mut rng = ChaCha8Rng::seed_from_u64(2718281828);
    let matrix = blosum62();
    let gap = gap();

    for _ in 0..10 {
        let s1: Vec<u8> = (0..100).map(|_| AA[rng.gen_range(0..AA.len())]).collect();
        let s2: Vec<u8> = (0..100).map(|_| AA[rng.gen_range(0..AA.len())]).collect();
        let m1 = matrix.map_sequence(&s1).unwrap();
        let m2 = matrix.map_sequence(&s2).unwrap();

        for recurrence in [Recurrence::Nw, Recurrence::Sg, Recurrence::Sw] {
            let oracle = match recurrence {
                Recurrence::Nw => parasail_core::scalar::align::<parasail_core::Nw>(&m1, &m2, gap, &matrix, false, true),
                Recurrence::Sg => parasail_core::scalar::align::<parasail_core::Sg>(&m1, &m2, gap, &matrix, false, true),
                Recurrence::Sw => parasail_core::scalar::align::<parasail_core::Sw>(&m1, &m2, gap, &matrix, false, true),
            };

            for scheme in [Scheme::Striped, Scheme::Scan, Scheme::Diag] {
                let got = parasail_core::align(recurrence, &m1, &m2, gap, &matrix, scheme, false, false, true);
                assert_eq!(got.score, oracle.score, "{recurrence:?}/{scheme:?} score mismatch");
                assert_eq!(
                    got.stats.map(|s| (s.matches, s.similar, s.length)),
                    oracle.stats.map(|s| (s.matches, s.similar, s.length)),
                    "{recurrence:?}/{scheme:?} stats mismatch"
                );
            }
        }
    }
}

#[test]
fn scenario_sw_table_all_entries_non_negative_and_max_is_score() {
    let matrix = blosum62();
    let result = AlignerBuilder::new(Recurrence::Sw, gap())
        .table()
        .align(b"HEAGAWGHEE", b"PAWHEAE", &matrix)
        .unwrap();
    let table = result.score_table.unwrap();
    assert!(table.iter().all(|&v| v >= 0));
    assert_eq!(*table.iter().max().unwrap(), result.score);
}

#[test]
fn scenario_nw_corner_matches_table_last_cell() {
    let matrix = blosum62();
    let result = AlignerBuilder::new(Recurrence::Nw, gap())
        .table()
        .align(b"HEAGAWGHEE", b"PAWHEAE", &matrix)
        .unwrap();
    let table = result.score_table.unwrap();
    let m = 10;
    let n = 7;
    assert_eq!(table[(m - 1) * n + (n - 1)], result.score);
}

#[test]
fn scenario_matrix_symmetry_swaps_end_positions() {
    let matrix = blosum62();
    let forward = sw(b"HEAGAWGHEE", b"PAWHEAE", gap(), &matrix).unwrap();
    let reversed = sw(b"PAWHEAE", b"HEAGAWGHEE", gap(), &matrix).unwrap();
    assert_eq!(forward.score, reversed.score);
    assert_eq!(forward.end_query, reversed.end_ref);
    assert_eq!(forward.end_ref, reversed.end_query);
}
