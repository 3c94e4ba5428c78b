//! Compiled-in substitution matrices.
//!
//! `BLOSUM62` is the standard NCBI table (the one exercised by spec §8's
//! end-to-end scenarios). `PAM80`/`PAM440` are transcribed byte-for-byte from
//! `parasail`'s own `pam80.h`/`pam440.h` (generated from the Peking
//! University BLAST matrix archive), preserving the row/column symbol order
//! so the two stay interchangeable with BLOSUM62's mapper.

/// Symbol order shared by every compiled-in protein matrix: standard amino
/// acids, then the ambiguity codes B (Asx), Z (Glx), X (any), and the stop
/// codon `*`.
pub const PROTEIN_ALPHABET: &[u8; 24] = b"ARNDCQEGHILKMFPSTWYVBZX*";

#[rustfmt::skip]
pub const BLOSUM62: [[i32; 24]; 24] = [
/* A */ [ 4,-1,-2,-2, 0,-1,-1, 0,-2,-1,-1,-1,-1,-2,-1, 1, 0,-3,-2, 0,-2,-1, 0,-4],
/* R */ [-1, 5, 0,-2,-3, 1, 0,-2, 0,-3,-2, 2,-1,-3,-2,-1,-1,-3,-2,-3,-1, 0,-1,-4],
/* N */ [-2, 0, 6, 1,-3, 0, 0, 0, 1,-3,-3, 0,-2,-3,-2, 1, 0,-4,-2,-3, 3, 0,-1,-4],
/* D */ [-2,-2, 1, 6,-3, 0, 2,-1,-1,-3,-4,-1,-3,-3,-1, 0,-1,-4,-3,-3, 4, 1,-1,-4],
/* C */ [ 0,-3,-3,-3, 9,-3,-4,-3,-3,-1,-1,-3,-1,-2,-3,-1,-1,-2,-2,-1,-3,-3,-2,-4],
/* Q */ [-1, 1, 0, 0,-3, 5, 2,-2, 0,-3,-2, 1, 0,-3,-1, 0,-1,-2,-1,-2, 0, 3,-1,-4],
/* E */ [-1, 0, 0, 2,-4, 2, 5,-2, 0,-3,-3, 1,-2,-3,-1, 0,-1,-3,-2,-2, 1, 4,-1,-4],
/* G */ [ 0,-2, 0,-1,-3,-2,-2, 6,-2,-4,-4,-2,-3,-3,-2, 0,-2,-2,-3,-3,-1,-2,-1,-4],
/* H */ [-2, 0, 1,-1,-3, 0, 0,-2, 8,-3,-3,-1,-2,-1,-2,-1,-2,-2, 2,-3, 0, 0,-1,-4],
/* I */ [-1,-3,-3,-3,-1,-3,-3,-4,-3, 4, 2,-3, 1, 0,-3,-2,-1,-3,-1, 3,-3,-3,-1,-4],
/* L */ [-1,-2,-3,-4,-1,-2,-3,-4,-3, 2, 4,-2, 2, 0,-3,-2,-1,-2,-1, 1,-4,-3,-1,-4],
/* K */ [-1, 2, 0,-1,-3, 1, 1,-2,-1,-3,-2, 5,-1,-3,-1, 0,-1,-3,-2,-2, 0, 1,-1,-4],
/* M */ [-1,-1,-2,-3,-1, 0,-2,-3,-2, 1, 2,-1, 5, 0,-2,-1,-1,-1,-1, 1,-3,-1,-1,-4],
/* F */ [-2,-3,-3,-3,-2,-3,-3,-3,-1, 0, 0,-3, 0, 6,-4,-2,-2, 1, 3,-1,-3,-3,-1,-4],
/* P */ [-1,-2,-2,-1,-3,-1,-1,-2,-2,-3,-3,-1,-2,-4, 7,-1,-1,-4,-3,-2,-2,-1,-2,-4],
/* S */ [ 1,-1, 1, 0,-1, 0, 0, 0,-1,-2,-2, 0,-1,-2,-1, 4, 1,-3,-2,-2, 0, 0, 0,-4],
/* T */ [ 0,-1, 0,-1,-1,-1,-1,-2,-2,-1,-1,-1,-1,-2,-1, 1, 5,-2,-2, 0,-1,-1, 0,-4],
/* W */ [-3,-3,-4,-4,-2,-2,-3,-2,-2,-3,-2,-3,-1, 1,-4,-3,-2,11, 2,-3,-4,-3,-2,-4],
/* Y */ [-2,-2,-2,-3,-2,-1,-2,-3, 2,-1,-1,-2,-1, 3,-3,-2,-2, 2, 7,-1,-3,-2,-1,-4],
/* V */ [ 0,-3,-3,-3,-1,-2,-2,-3,-3, 3, 1,-2, 1,-1,-2,-2, 0,-3,-1, 4,-3,-2,-1,-4],
/* B */ [-2,-1, 3, 4,-3, 0, 1,-1, 0,-3,-4, 0,-3,-3,-2, 0,-1,-4,-3,-3, 4, 1,-1,-4],
/* Z */ [-1, 0, 0, 1,-3, 3, 4,-2, 0,-3,-3, 1,-1,-3,-1, 0,-1,-3,-2,-2, 1, 4,-1,-4],
/* X */ [ 0,-1,-1,-1,-2,-1,-1,-1,-1,-1,-1,-1,-1,-1,-2, 0, 0,-2,-1,-1,-1,-1,-1,-4],
/* * */ [-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4,-4, 1],
];

#[rustfmt::skip]
pub const PAM80: [[i32; 24]; 24] = [
/* A */ [  4, -4, -1, -1, -4, -2, -1,  0, -4, -2, -4, -4, -3, -5,  0,  1,  1, -8, -5,  0, -1, -1, -1,-11],
/* R */ [ -4,  7, -2, -5, -5,  0, -4, -6,  0, -3, -5,  2, -2, -6, -2, -1, -3,  0, -7, -5, -3, -1, -3,-11],
/* N */ [ -1, -2,  5,  3, -6, -1,  0, -1,  2, -3, -5,  0, -4, -5, -3,  1,  0, -5, -3, -4,  4,  0, -1,-11],
/* D */ [ -1, -5,  3,  6, -9,  0,  4, -1, -1, -4, -7, -2, -6, -9, -4, -1, -2,-10, -7, -5,  5,  2, -3,-11],
/* C */ [ -4, -5, -6, -9,  9, -9, -9, -6, -5, -4, -9, -9, -8, -8, -5, -1, -4,-10, -2, -3, -7, -9, -5,-11],
/* Q */ [ -2,  0, -1,  0, -9,  7,  2, -4,  2, -4, -3, -1, -2, -8, -1, -3, -3, -8, -7, -4,  0,  5, -2,-11],
/* E */ [ -1, -4,  0,  4, -9,  2,  6, -2, -2, -3, -6, -2, -4, -9, -3, -2, -3,-11, -6, -4,  2,  5, -2,-11],
/* G */ [  0, -6, -1, -1, -6, -4, -2,  6, -5, -6, -7, -4, -5, -6, -3,  0, -2,-10, -8, -3, -1, -2, -3,-11],
/* H */ [ -4,  0,  2, -1, -5,  2, -2, -5,  8, -5, -4, -3, -5, -3, -2, -3, -4, -4, -1, -4,  0,  1, -2,-11],
/* I */ [ -2, -3, -3, -4, -4, -4, -3, -6, -5,  7,  1, -4,  1,  0, -5, -4, -1, -8, -3,  3, -4, -4, -2,-11],
/* L */ [ -4, -5, -5, -7, -9, -3, -6, -7, -4,  1,  6, -5,  2,  0, -4, -5, -4, -3, -4,  0, -6, -4, -3,-11],
/* K */ [ -4,  2,  0, -2, -9, -1, -2, -4, -3, -4, -5,  6,  0, -9, -4, -2, -1, -7, -6, -5, -1, -1, -3,-11],
/* M */ [ -3, -2, -4, -6, -8, -2, -4, -5, -5,  1,  2,  0,  9, -2, -5, -3, -2, -7, -6,  1, -5, -3, -2,-11],
/* F */ [ -5, -6, -5, -9, -8, -8, -9, -6, -3,  0,  0, -9, -2,  8, -7, -4, -5, -2,  4, -4, -7, -8, -5,-11],
/* P */ [  0, -2, -3, -4, -5, -1, -3, -3, -2, -5, -4, -4, -5, -7,  7,  0, -2, -9, -8, -3, -3, -2, -2,-11],
/* S */ [  1, -1,  1, -1, -1, -3, -2,  0, -3, -4, -5, -2, -3, -4,  0,  4,  2, -3, -4, -3,  0, -2, -1,-11],
/* T */ [  1, -3,  0, -2, -4, -3, -3, -2, -4, -1, -4, -1, -2, -5, -2,  2,  5, -8, -4, -1, -1, -3, -1,-11],
/* W */ [ -8,  0, -5,-10,-10, -8,-11,-10, -4, -8, -3, -7, -7, -2, -9, -3, -8, 13, -2,-10, -7, -9, -7,-11],
/* Y */ [ -5, -7, -3, -7, -2, -7, -6, -8, -1, -3, -4, -6, -6,  4, -8, -4, -4, -2,  9, -5, -4, -6, -4,-11],
/* V */ [  0, -5, -4, -5, -3, -4, -4, -3, -4,  3,  0, -5,  1, -4, -3, -3, -1,-10, -5,  6, -4, -4, -2,-11],
/* B */ [ -1, -3,  4,  5, -7,  0,  2, -1,  0, -4, -6, -1, -5, -7, -3,  0, -1, -7, -4, -4,  5,  2, -2,-11],
/* Z */ [ -1, -1,  0,  2, -9,  5,  5, -2,  1, -4, -4, -1, -3, -8, -2, -2, -3, -9, -6, -4,  2,  5, -2,-11],
/* X */ [ -1, -3, -1, -3, -5, -2, -2, -3, -2, -2, -3, -3, -2, -5, -2, -1, -1, -7, -4, -2, -2, -2, -3,-11],
/* * */ [-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,-11,  1],
];

#[rustfmt::skip]
pub const PAM440: [[i32; 24]; 24] = [
/* A */ [ 1,-1, 0, 1,-2, 0, 1, 2,-1, 0,-2, 0,-1,-4, 1, 1, 1,-6,-4, 0, 1, 0, 0,-9],
/* R */ [-1, 5, 1, 0,-4, 2, 0,-2, 2,-2,-3, 4, 0,-5, 0, 0, 0, 4,-4,-2, 0, 1, 0,-9],
/* N */ [ 0, 1, 1, 2,-4, 1, 2, 1, 1,-2,-3, 1,-1,-4, 0, 1, 0,-5,-3,-1, 2, 1, 0,-9],
/* D */ [ 1, 0, 2, 3,-5, 2, 3, 1, 1,-2,-3, 1,-2,-6, 0, 1, 0,-7,-5,-2, 2, 2, 0,-9],
/* C */ [-2,-4,-4,-5,20,-5,-5,-3,-4,-2,-6,-5,-5,-4,-3, 0,-2,-9, 1,-2,-4,-5,-3,-9],
/* Q */ [ 0, 2, 1, 2,-5, 3, 2, 0, 3,-2,-2, 1,-1,-4, 1, 0, 0,-5,-4,-1, 2, 2, 0,-9],
/* E */ [ 1, 0, 2, 3,-5, 2, 3, 1, 1,-2,-3, 1,-2,-5, 0, 1, 0,-7,-5,-1, 2, 3, 0,-9],
/* G */ [ 2,-2, 1, 1,-3, 0, 1, 4,-1,-2,-4,-1,-2,-5, 0, 1, 1,-8,-5,-1, 1, 0, 0,-9],
/* H */ [-1, 2, 1, 1,-4, 3, 1,-1, 5,-2,-2, 1,-1,-2, 0, 0,-1,-3, 0,-2, 1, 2, 0,-9],
/* I */ [ 0,-2,-2,-2,-2,-2,-2,-2,-2, 4, 4,-2, 3, 2,-1,-1, 0,-5, 0, 3,-2,-2, 0,-9],
/* L */ [-2,-3,-3,-3,-6,-2,-3,-4,-2, 4, 7,-3, 5, 4,-2,-2,-1,-2, 1, 3,-3,-2,-1,-9],
/* K */ [ 0, 4, 1, 1,-5, 1, 1,-1, 1,-2,-3, 4, 0,-5, 0, 0, 0,-3,-5,-2, 1, 1, 0,-9],
/* M */ [-1, 0,-1,-2,-5,-1,-2,-2,-1, 3, 5, 0, 4, 1,-1,-1, 0,-4,-1, 2,-2,-1, 0,-9],
/* F */ [-4,-5,-4,-6,-4,-4,-5,-5,-2, 2, 4,-5, 1,13,-5,-4,-3, 2,12, 0,-5,-5,-2,-9],
/* P */ [ 1, 0, 0, 0,-3, 1, 0, 0, 0,-1,-2, 0,-1,-5, 5, 1, 1,-6,-5,-1, 0, 0, 0,-9],
/* S */ [ 1, 0, 1, 1, 0, 0, 1, 1, 0,-1,-2, 0,-1,-4, 1, 1, 1,-3,-3,-1, 1, 0, 0,-9],
/* T */ [ 1, 0, 0, 0,-2, 0, 0, 1,-1, 0,-1, 0, 0,-3, 1, 1, 1,-6,-3, 0, 0, 0, 0,-9],
/* W */ [-6, 4,-5,-7,-9,-5,-7,-8,-3,-5,-2,-3,-4, 2,-6,-3,-6,30, 2,-6,-6,-6,-4,-9],
/* Y */ [-4,-4,-3,-5, 1,-4,-5,-5, 0, 0, 1,-5,-1,12,-5,-3,-3, 2,15,-2,-4,-4,-2,-9],
/* V */ [ 0,-2,-1,-2,-2,-1,-1,-1,-2, 3, 3,-2, 2, 0,-1,-1, 0,-6,-2, 4,-1,-1, 0,-9],
/* B */ [ 1, 0, 2, 2,-4, 2, 2, 1, 1,-2,-3, 1,-2,-5, 0, 1, 0,-6,-4,-1, 2, 2, 0,-9],
/* Z */ [ 0, 1, 1, 2,-5, 2, 3, 0, 2,-2,-2, 1,-1,-5, 0, 0, 0,-6,-4,-1, 2, 3, 0,-9],
/* X */ [ 0, 0, 0, 0,-3, 0, 0, 0, 0, 0,-1, 0, 0,-2, 0, 0, 0,-4,-2, 0, 0, 0,-1,-9],
/* * */ [-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9,-9, 1],
];

/// Nucleotide alphabet used by `DNAFULL`/`NUC44`: the four bases plus the
/// IUPAC ambiguity codes and `N`.
pub const DNA_ALPHABET: &[u8; 15] = b"ACGTRYSWKMBDHVN";

/// `DNAFULL`: +5 identity / -4 mismatch on the unambiguous bases, with
/// ambiguity codes scored by degenerate-base overlap (simplified to 0 for
/// any pair involving an ambiguity code, `N` excepted which matches nothing
/// informative).
#[rustfmt::skip]
pub const DNAFULL: [[i32; 15]; 15] = [
/* A */ [ 5,-4,-4,-4, 1, 1,-4, 1,-4, 1,-4,-1,-1,-1,-2],
/* C */ [-4, 5,-4,-4,-4,-4, 1, 1, 1,-4,-1,-4,-1,-1,-2],
/* G */ [-4,-4, 5,-4, 1,-4, 1,-4, 1,-4,-1,-1,-4,-1,-2],
/* T */ [-4,-4,-4, 5,-4, 1,-4, 1,-4, 1,-1,-1,-1,-4,-2],
/* R */ [ 1,-4, 1,-4,-1,-4,-2,-2,-2,-2,-3,-1,-1,-3,-1],
/* Y */ [ 1,-4,-4, 1,-4,-1,-2,-2,-2,-2,-1,-3,-3,-1,-1],
/* S */ [-4, 1, 1,-4,-2,-2,-1,-4,-2,-2,-1,-3,-1,-3,-1],
/* W */ [ 1, 1,-4,-4,-2,-2,-4,-1,-2,-2,-3,-1,-3,-1,-1],
/* K */ [-4, 1, 1,-4,-2,-2,-2,-2,-1,-4,-1,-1,-3,-3,-1],
/* M */ [ 1,-4,-4, 1,-2,-2,-2,-2,-4,-1,-3,-3,-1,-1,-1],
/* B */ [-4,-1,-1,-1,-3,-1,-1,-3,-1,-3,-1,-2,-2,-2,-1],
/* D */ [-1,-4,-1,-1,-1,-3,-3,-1,-1,-3,-2,-1,-2,-2,-1],
/* H */ [-1,-1,-4,-1,-1,-3,-1,-3,-3,-1,-2,-2,-1,-2,-1],
/* V */ [-1,-1,-1,-4,-3,-1,-3,-1,-3,-1,-2,-2,-2,-1,-1],
/* N */ [-2,-2,-2,-2,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1,-1],
];
