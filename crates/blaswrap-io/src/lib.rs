//! Generation of per-routine BLAS/LAPACK dispatch wrappers.
//!
//! This crate provides:
//! - **rendering** of one `F_FUNC` forwarding wrapper per catalog signature
//! - **file assembly** with the C preamble, LAPACK callback typedefs and
//!   C++ guards
//! - **staleness check and writer** that regenerates everything or nothing

mod assemble;
pub mod error;
mod generate;
mod render;

pub use assemble::{
    C_PREAMBLE, CPP_GUARD_BEGIN, CPP_GUARD_END, LAPACK_DECLS, Library, c_comment,
    generate_file_wrapper, wrapper_path,
};
pub use error::{GenError, Result};
pub use generate::{
    DEFAULT_GENERATOR_NAME, GenerateOptions, Outcome, all_newer, make_all, read_signatures,
    write_files,
};
pub use render::render_decl_wrapper;
