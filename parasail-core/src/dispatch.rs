//! Runtime CPU dispatch (spec §4.5).
//!
//! A `OnceLock<Isa>` plays the role of the C library's self-overwriting
//! function pointer: the first call pays for `is_x86_feature_detected!`/
//! `is_aarch64_feature_detected!`, every call after reads a cached enum.
//! Rust has no stable "overwrite my own call site" trick, so the pointer
//! indirection becomes a plain cached value instead — same idempotent,
//! benign-race-safe contract (spec §5, "a tolerable worst case is multiple
//! threads each dispatching once"), expressed with `OnceLock` instead of an
//! atomic pointer store.

use crate::kernel::{diag, scan, striped};
use crate::recurrence::RecurrenceKind;
use crate::result::AlignResult;
use crate::scalar;
use parasail_matrices::Matrix;
use parasail_types::{GapParams, LaneElement, Scheme};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isa {
    Avx2,
    Sse41,
    Sse2,
    Neon,
    Scalar,
}

impl Isa {
    /// Widest vector register this ISA offers, in bits. Fallback order per
    /// spec §4.5: AVX2-256 → SSE4.1-128 → SSE2-128 → scalar; NEON-128 is
    /// coequal with SSE4.1.
    fn vector_bits(self) -> u32 {
        match self {
            Isa::Avx2 => 256,
            Isa::Sse41 | Isa::Sse2 | Isa::Neon => 128,
            Isa::Scalar => 0,
        }
    }
}

static DISPATCH: OnceLock<Isa> = OnceLock::new();

fn detect() -> Isa {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return Isa::Avx2;
        }
        if is_x86_feature_detected!("sse4.1") {
            return Isa::Sse41;
        }
        if is_x86_feature_detected!("sse2") {
            return Isa::Sse2;
        }
        return Isa::Scalar;
    }
    #[cfg(target_arch = "aarch64")]
    {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return Isa::Neon;
        }
        return Isa::Scalar;
    }
    #[allow(unreachable_code)]
    Isa::Scalar
}

/// Cached best ISA for this process. Safe under concurrent first-call:
/// `OnceLock::get_or_init` runs `detect` on exactly one racing thread and
/// every other caller blocks until that result is published.
pub fn best_isa() -> Isa {
    *DISPATCH.get_or_init(detect)
}

/// Run `(recurrence R, scheme, options)` against `s1`/`s2` at lane width
/// `T`, vectorized as widely as the detected ISA and `T`'s bit width allow.
///
/// `s1`/`s2` must already be mapped through `matrix`'s symbol mapper.
pub fn align<T, R>(
    s1: &[u8],
    s2: &[u8],
    gap: GapParams,
    matrix: &Matrix,
    scheme: Scheme,
    emit_table: bool,
    emit_rowcol: bool,
    emit_stats: bool,
) -> AlignResult
where
    T: LaneElement + std::simd::SimdElement,
    R: RecurrenceKind,
{
    let vector_bits = best_isa().vector_bits();
    let lanes = if vector_bits == 0 { 1 } else { (vector_bits / T::BITS).max(1) as usize };

    macro_rules! run {
        ($lanes:expr) => {{
            match scheme {
                Scheme::Striped => striped::align::<T, $lanes, R>(
                    s1,
                    s2,
                    gap,
                    matrix,
                    &striped::Options { emit_table, emit_rowcol, emit_stats },
                ),
                Scheme::Scan => scan::align::<T, $lanes, R>(
                    s1,
                    s2,
                    gap,
                    matrix,
                    &scan::Options { emit_table, emit_rowcol, emit_stats },
                ),
                Scheme::Diag => diag::align::<T, $lanes, R>(
                    s1,
                    s2,
                    gap,
                    matrix,
                    &diag::Options { emit_table, emit_rowcol, emit_stats },
                ),
            }
        }};
    }

    match lanes {
        32 => run!(32),
        16 => run!(16),
        8 => run!(8),
        4 => run!(4),
        2 => run!(2),
        _ => scalar::align::<R>(s1, s2, gap, matrix, emit_table, emit_stats),
    }
}
