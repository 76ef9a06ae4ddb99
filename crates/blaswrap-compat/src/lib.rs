//! Symbol conventions for dispatching to vendor BLAS/LAPACK builds.
//!
//! This crate provides:
//! - helpers for the legacy `F_FUNC`/Fortran symbol spellings
//! - the exception sets and per-routine overrides that decide which routines
//!   get a generated wrapper and which symbol it forwards to

mod symbols;
mod table;

pub use symbols::{BlasSymbol, SymbolScheme, f_func_symbol, fortran_symbol};
pub use table::{
    BLAS_MACRO, Exclusion, F_FUNC_MACRO, HAND_WRAPPED, LEGACY_ACCELERATE, SymbolTable,
};
