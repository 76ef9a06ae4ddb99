use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::symbols::{BlasSymbol, SymbolScheme, fortran_symbol};

/// Complex-valued routines whose g77-ABI wrappers are maintained by hand.
pub const HAND_WRAPPED: [&str; 6] = ["cdotc", "cdotu", "zdotc", "zdotu", "cladiv", "zladiv"];

/// Routines the old Accelerate symbols already provide.
pub const LEGACY_ACCELERATE: [&str; 2] = ["lsame", "dcabs1"];

pub const BLAS_MACRO: &str = "BLAS_FUNC";
pub const F_FUNC_MACRO: &str = "F_FUNC";

/// Why a routine gets no generated wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    HandWrapped,
    LegacyAccelerate,
}

/// Exception sets and per-routine symbol overrides.
///
/// The default reproduces the table for Apple's Accelerate distribution; a
/// replacement can be loaded from JSON for other vendor builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolTable {
    #[serde(default)]
    pub hand_wrapped: BTreeSet<String>,
    #[serde(default)]
    pub legacy_accelerate: BTreeSet<String>,
    #[serde(default)]
    pub accelerate_overrides: BTreeMap<String, BlasSymbol>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        let mut accelerate_overrides = BTreeMap::new();
        accelerate_overrides.insert(
            "xerbla_array".to_string(),
            BlasSymbol::bare("xerbla_array__"),
        );
        Self {
            hand_wrapped: HAND_WRAPPED.iter().map(|s| s.to_string()).collect(),
            legacy_accelerate: LEGACY_ACCELERATE.iter().map(|s| s.to_string()).collect(),
            accelerate_overrides,
        }
    }
}

impl SymbolTable {
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    pub fn exclusion(&self, name: &str, scheme: SymbolScheme) -> Option<Exclusion> {
        if self.hand_wrapped.contains(name) {
            return Some(Exclusion::HandWrapped);
        }
        if scheme.is_new_accelerate() && self.legacy_accelerate.contains(name) {
            return Some(Exclusion::LegacyAccelerate);
        }
        None
    }

    /// Macro and symbol the wrapper for `name` forwards to.
    pub fn blas_macro_and_name(&self, name: &str, scheme: SymbolScheme) -> BlasSymbol {
        if scheme.is_new_accelerate() {
            if self.legacy_accelerate.contains(name) {
                return BlasSymbol::bare(fortran_symbol(name));
            }
            if let Some(over) = self.accelerate_overrides.get(name) {
                return over.clone();
            }
        }
        if self.hand_wrapped.contains(name) {
            let wrapped = format!("{name}wrp");
            return BlasSymbol::with_macro(
                F_FUNC_MACRO,
                format!("{wrapped},{}", wrapped.to_ascii_uppercase()),
            );
        }
        BlasSymbol::with_macro(BLAS_MACRO, name)
    }
}
