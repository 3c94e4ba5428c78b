//! The three interchangeable vectorization schemes (spec §2, component 4;
//! §4.4). Each submodule exports an `align::<T, L, R>` function and an
//! `Options` struct with the same shape; `dispatch`/`escalate` pick among
//! them at runtime, `lib.rs` picks among them at the safe-API layer.

pub mod diag;
pub mod scan;
pub mod striped;
