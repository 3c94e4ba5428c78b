//! C-ABI surface (spec §6).
//!
//! Mirrors the naming grammar `parasail_{recurrence}[_stats][_table|_rowcol]_{scheme}`
//! and the stable result-flag bits exactly. Every alignment entry point here
//! auto-dispatches to the best available ISA and auto-escalates lane width on
//! saturation (spec §4.5, §4.6) — this crate has no separate fixed-ISA or
//! fixed-width symbols, since Rust has no preprocessor to generate the C
//! library's per-ISA translation units at build time and `OnceLock`-based
//! dispatch already picks the right kernel instantiation once per process
//! (see DESIGN.md).
//!
//! Every function here is `unsafe extern "C"`: callers on the other side of
//! the ABI boundary are responsible for passing valid, non-dangling
//! pointers of the documented length.

use log::warn;
use parasail_core::{flags, AlignResult};
use parasail_matrices::Matrix;
use parasail_types::{GapParams, Recurrence, Scheme};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int};

/// Build a sequence slice from a raw C string buffer. Returns `None` for a
/// null pointer or non-positive length rather than panicking across the ABI
/// boundary.
unsafe fn slice_from_raw(ptr: *const c_char, len: c_int) -> Option<&'static [u8]> {
    if ptr.is_null() || len <= 0 {
        return None;
    }
    Some(std::slice::from_raw_parts(ptr as *const u8, len as usize))
}

fn run(
    recurrence: Recurrence,
    scheme: Scheme,
    s1: &[u8],
    s2: &[u8],
    open: i32,
    extend: i32,
    matrix: &Matrix,
    emit_table: bool,
    emit_rowcol: bool,
    emit_stats: bool,
) -> *mut AlignResult {
    if s1.is_empty() || s2.is_empty() {
        warn!("parasail capi: rejecting empty sequence (query {} bytes, reference {} bytes)", s1.len(), s2.len());
        return std::ptr::null_mut();
    }
    let m1 = match matrix.map_sequence(s1) {
        Ok(m) => m,
        Err(i) => {
            warn!("parasail capi: unmapped query symbol {:#x} at offset {i}", s1[i]);
            return std::ptr::null_mut();
        }
    };
    let m2 = match matrix.map_sequence(s2) {
        Ok(m) => m,
        Err(i) => {
            warn!("parasail capi: unmapped reference symbol {:#x} at offset {i}", s2[i]);
            return std::ptr::null_mut();
        }
    };
    let gap = GapParams::new(open.max(0) as u32, extend.max(0) as u32);
    let result = parasail_core::align(recurrence, &m1, &m2, gap, matrix, scheme, emit_table, emit_rowcol, emit_stats);
    Box::into_raw(Box::new(result))
}

/// One `#[no_mangle]` C-ABI entry point per `(recurrence, scheme, stats,
/// table|rowcol)` combination, named exactly per the grammar in spec §6.
macro_rules! capi_fn {
    ($name:ident, $recurrence:ident, $scheme:ident, $stats:expr, $table:expr, $rowcol:expr) => {
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            s1: *const c_char,
            s1_len: c_int,
            s2: *const c_char,
            s2_len: c_int,
            open: c_int,
            extend: c_int,
            matrix: *const Matrix,
        ) -> *mut AlignResult {
            let (Some(s1), Some(s2)) = (slice_from_raw(s1, s1_len), slice_from_raw(s2, s2_len)) else {
                warn!(concat!(stringify!($name), ": null or non-positive-length sequence pointer"));
                return std::ptr::null_mut();
            };
            if matrix.is_null() {
                warn!(concat!(stringify!($name), ": null matrix pointer"));
                return std::ptr::null_mut();
            }
            run(Recurrence::$recurrence, Scheme::$scheme, s1, s2, open, extend, &*matrix, $table, $rowcol, $stats)
        }
    };
}

capi_fn!(parasail_nw_striped, Nw, Striped, false, false, false);
capi_fn!(parasail_nw_scan, Nw, Scan, false, false, false);
capi_fn!(parasail_nw_diag, Nw, Diag, false, false, false);
capi_fn!(parasail_nw_table_striped, Nw, Striped, false, true, false);
capi_fn!(parasail_nw_table_scan, Nw, Scan, false, true, false);
capi_fn!(parasail_nw_table_diag, Nw, Diag, false, true, false);
capi_fn!(parasail_nw_rowcol_striped, Nw, Striped, false, false, true);
capi_fn!(parasail_nw_rowcol_scan, Nw, Scan, false, false, true);
capi_fn!(parasail_nw_rowcol_diag, Nw, Diag, false, false, true);
capi_fn!(parasail_nw_stats_striped, Nw, Striped, true, false, false);
capi_fn!(parasail_nw_stats_scan, Nw, Scan, true, false, false);
capi_fn!(parasail_nw_stats_diag, Nw, Diag, true, false, false);
capi_fn!(parasail_nw_stats_table_striped, Nw, Striped, true, true, false);
capi_fn!(parasail_nw_stats_table_scan, Nw, Scan, true, true, false);
capi_fn!(parasail_nw_stats_table_diag, Nw, Diag, true, true, false);
capi_fn!(parasail_nw_stats_rowcol_striped, Nw, Striped, true, false, true);
capi_fn!(parasail_nw_stats_rowcol_scan, Nw, Scan, true, false, true);
capi_fn!(parasail_nw_stats_rowcol_diag, Nw, Diag, true, false, true);
capi_fn!(parasail_sg_striped, Sg, Striped, false, false, false);
capi_fn!(parasail_sg_scan, Sg, Scan, false, false, false);
capi_fn!(parasail_sg_diag, Sg, Diag, false, false, false);
capi_fn!(parasail_sg_table_striped, Sg, Striped, false, true, false);
capi_fn!(parasail_sg_table_scan, Sg, Scan, false, true, false);
capi_fn!(parasail_sg_table_diag, Sg, Diag, false, true, false);
capi_fn!(parasail_sg_rowcol_striped, Sg, Striped, false, false, true);
capi_fn!(parasail_sg_rowcol_scan, Sg, Scan, false, false, true);
capi_fn!(parasail_sg_rowcol_diag, Sg, Diag, false, false, true);
capi_fn!(parasail_sg_stats_striped, Sg, Striped, true, false, false);
capi_fn!(parasail_sg_stats_scan, Sg, Scan, true, false, false);
capi_fn!(parasail_sg_stats_diag, Sg, Diag, true, false, false);
capi_fn!(parasail_sg_stats_table_striped, Sg, Striped, true, true, false);
capi_fn!(parasail_sg_stats_table_scan, Sg, Scan, true, true, false);
capi_fn!(parasail_sg_stats_table_diag, Sg, Diag, true, true, false);
capi_fn!(parasail_sg_stats_rowcol_striped, Sg, Striped, true, false, true);
capi_fn!(parasail_sg_stats_rowcol_scan, Sg, Scan, true, false, true);
capi_fn!(parasail_sg_stats_rowcol_diag, Sg, Diag, true, false, true);
capi_fn!(parasail_sw_striped, Sw, Striped, false, false, false);
capi_fn!(parasail_sw_scan, Sw, Scan, false, false, false);
capi_fn!(parasail_sw_diag, Sw, Diag, false, false, false);
capi_fn!(parasail_sw_table_striped, Sw, Striped, false, true, false);
capi_fn!(parasail_sw_table_scan, Sw, Scan, false, true, false);
capi_fn!(parasail_sw_table_diag, Sw, Diag, false, true, false);
capi_fn!(parasail_sw_rowcol_striped, Sw, Striped, false, false, true);
capi_fn!(parasail_sw_rowcol_scan, Sw, Scan, false, false, true);
capi_fn!(parasail_sw_rowcol_diag, Sw, Diag, false, false, true);
capi_fn!(parasail_sw_stats_striped, Sw, Striped, true, false, false);
capi_fn!(parasail_sw_stats_scan, Sw, Scan, true, false, false);
capi_fn!(parasail_sw_stats_diag, Sw, Diag, true, false, false);
capi_fn!(parasail_sw_stats_table_striped, Sw, Striped, true, true, false);
capi_fn!(parasail_sw_stats_table_scan, Sw, Scan, true, true, false);
capi_fn!(parasail_sw_stats_table_diag, Sw, Diag, true, true, false);
capi_fn!(parasail_sw_stats_rowcol_striped, Sw, Striped, true, false, true);
capi_fn!(parasail_sw_stats_rowcol_scan, Sw, Scan, true, false, true);
capi_fn!(parasail_sw_stats_rowcol_diag, Sw, Diag, true, false, true);

#[no_mangle]
pub unsafe extern "C" fn parasail_result_free(result: *mut AlignResult) {
    if !result.is_null() {
        drop(Box::from_raw(result));
    }
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_score(result: *const AlignResult) -> i64 {
    (*result).score
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_end_query(result: *const AlignResult) -> i64 {
    (*result).end_query as i64
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_end_ref(result: *const AlignResult) -> i64 {
    (*result).end_ref as i64
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_matches(result: *const AlignResult) -> i64 {
    (*result).stats.map(|s| s.matches).unwrap_or(0)
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_similar(result: *const AlignResult) -> i64 {
    (*result).stats.map(|s| s.similar).unwrap_or(0)
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_get_length(result: *const AlignResult) -> i64 {
    (*result).stats.map(|s| s.length).unwrap_or(0)
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_saturated(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::SATURATED != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_nw(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::NW != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_sg(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::SG != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_sw(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::SW != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_striped(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::STRIPED != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_scan(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::SCAN != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_diag(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::DIAG != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_table(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::TABLE != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_rowcol(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::ROWCOL != 0) as c_int
}

#[no_mangle]
pub unsafe extern "C" fn parasail_result_is_stats(result: *const AlignResult) -> c_int {
    ((*result).flag & flags::STATS != 0) as c_int
}

/// Look up a compiled-in named matrix (spec §4.1). Returns a null pointer for
/// an unknown name rather than aborting, matching the C library's
/// NULL-returning lookup.
#[no_mangle]
pub unsafe extern "C" fn parasail_matrix_lookup(name: *const c_char) -> *mut Matrix {
    if name.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(name) = CStr::from_ptr(name).to_str() else {
        return std::ptr::null_mut();
    };
    match parasail_matrices::lookup(name) {
        Some(matrix) => Box::into_raw(Box::new(matrix)),
        None => std::ptr::null_mut(),
    }
}

/// Build a match/mismatch matrix over `alphabet` (spec §4.1, custom-matrix
/// builder): `match_score` on the diagonal, `mismatch_score` everywhere else.
#[no_mangle]
pub unsafe extern "C" fn parasail_matrix_create(
    alphabet: *const c_char,
    match_score: c_int,
    mismatch_score: c_int,
) -> *mut Matrix {
    if alphabet.is_null() {
        return std::ptr::null_mut();
    }
    let Ok(alphabet) = CStr::from_ptr(alphabet).to_str() else {
        return std::ptr::null_mut();
    };
    let symbols: Vec<u8> = alphabet.bytes().collect();
    let n = symbols.len();
    let mut flat = vec![mismatch_score; n * n];
    for i in 0..n {
        flat[i * n + i] = match_score;
    }
    let rows: Vec<&[i32]> = flat.chunks(n).collect();
    let matrix = Matrix::from_scores("custom", &symbols, &rows);
    Box::into_raw(Box::new(matrix))
}

#[no_mangle]
pub unsafe extern "C" fn parasail_matrix_free(matrix: *mut Matrix) {
    if !matrix.is_null() {
        drop(Box::from_raw(matrix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_capi_matches_safe_api() {
        unsafe {
            let name = std::ffi::CString::new("blosum62").unwrap();
            let matrix = parasail_matrix_lookup(name.as_ptr());
            assert!(!matrix.is_null());

            let s1 = b"HEAGAWGHEE";
            let s2 = b"PAWHEAE";
            let result = parasail_sw_striped(
                s1.as_ptr() as *const c_char,
                s1.len() as c_int,
                s2.as_ptr() as *const c_char,
                s2.len() as c_int,
                10,
                1,
                matrix,
            );
            assert!(!result.is_null());
            assert_eq!(parasail_result_get_score(result), 28);
            assert_eq!(parasail_result_is_sw(result), 1);
            assert_eq!(parasail_result_is_saturated(result), 0);

            parasail_result_free(result);
            parasail_matrix_free(matrix);
        }
    }

    #[test]
    fn null_matrix_returns_null_result() {
        unsafe {
            let s1 = b"ACGT";
            let result = parasail_nw_striped(
                s1.as_ptr() as *const c_char,
                s1.len() as c_int,
                s1.as_ptr() as *const c_char,
                s1.len() as c_int,
                10,
                1,
                std::ptr::null(),
            );
            assert!(result.is_null());
        }
    }

    #[test]
    fn unknown_matrix_name_returns_null() {
        unsafe {
            let name = std::ffi::CString::new("not-a-real-matrix").unwrap();
            let matrix = parasail_matrix_lookup(name.as_ptr());
            assert!(matrix.is_null());
        }
    }
}
