use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use blaswrap_compat::{SymbolScheme, SymbolTable};
use blaswrap_sig::Signature;

use crate::render::render_decl_wrapper;

pub const C_PREAMBLE: &str = r#"
#include "npy_cblas.h"
#include "fortran_defs.h"
"#;

pub const LAPACK_DECLS: &str = "
typedef int (*_cselect1)(npy_complex64*);
typedef int (*_cselect2)(npy_complex64*, npy_complex64*);
typedef int (*_dselect2)(double*, double*);
typedef int (*_dselect3)(double*, double*, double*);
typedef int (*_sselect2)(float*, float*);
typedef int (*_sselect3)(float*, float*, float*);
typedef int (*_zselect1)(npy_complex128*);
typedef int (*_zselect2)(npy_complex128*, npy_complex128*);
";

pub const CPP_GUARD_BEGIN: &str = r#"
#ifdef __cplusplus
extern "C" {
#endif

"#;

pub const CPP_GUARD_END: &str = "
#ifdef __cplusplus
}
#endif
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Library {
    Blas,
    Lapack,
}

impl Library {
    pub fn as_str(self) -> &'static str {
        match self {
            Library::Blas => "BLAS",
            Library::Lapack => "LAPACK",
        }
    }

    fn preamble(self, generator: &str) -> String {
        let mut out = c_comment(generator);
        out.push_str(C_PREAMBLE);
        if self == Library::Lapack {
            out.push_str(LAPACK_DECLS);
        }
        out.push_str(CPP_GUARD_BEGIN);
        out
    }
}

pub fn c_comment(generator: &str) -> String {
    format!("/*\nThis file was generated by {generator}.\nDo not edit this file directly.\n*/\n\n")
}

pub fn wrapper_path(outdir: &Path, name: &str) -> PathBuf {
    outdir.join(format!("{name}.c"))
}

/// Map every signature of `lib` to the full text of its wrapper file.
///
/// Excluded routines still get a file holding only the preamble and guards,
/// so the build always finds one source per routine.
pub fn generate_file_wrapper(
    sigs: &[Signature],
    lib: Library,
    scheme: SymbolScheme,
    table: &SymbolTable,
    outdir: &Path,
    generator: &str,
) -> BTreeMap<PathBuf, String> {
    let preamble = lib.preamble(generator);
    sigs.iter()
        .map(|sig| {
            let mut content = preamble.clone();
            content.push_str(&render_decl_wrapper(sig, scheme, table));
            content.push_str(CPP_GUARD_END);
            (wrapper_path(outdir, &sig.name), content)
        })
        .collect()
}
