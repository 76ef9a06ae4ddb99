//! Generate wrappers that dispatch BLAS/LAPACK calls to the properly
//! prefixed/suffixed vendor symbols.
//!
//! Usage: `blaswrap-cli [-o DIR] [-a] [--blas-signatures FILE] [--lapack-signatures FILE]`

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blaswrap_compat::SymbolScheme;
use blaswrap_io::{GenerateOptions, Outcome, Result, make_all};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "blaswrap-cli")]
#[command(about = "Generate per-routine C wrappers for BLAS/LAPACK symbol dispatch")]
struct Args {
    /// Path to the output directory (default: directory of this executable)
    #[arg(short = 'o', long = "outdir")]
    outdir: Option<PathBuf>,

    /// Whether to use new Accelerate (macOS 13.3+)
    #[arg(short = 'a', long = "accelerate")]
    accelerate: bool,

    /// BLAS signature catalog
    #[arg(long = "blas-signatures", default_value = "linalg/cython_blas_signatures.txt")]
    blas_signatures: PathBuf,

    /// LAPACK signature catalog
    #[arg(long = "lapack-signatures", default_value = "linalg/cython_lapack_signatures.txt")]
    lapack_signatures: PathBuf,

    /// JSON file replacing the built-in exception sets and symbol overrides
    #[arg(long = "symbol-table")]
    symbol_table: Option<PathBuf>,
}

/// Use `RUST_LOG` to override the default `info` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}

/// Explicit `--outdir`, else the directory holding the executable.
fn resolve_outdir(outdir: Option<PathBuf>, exe: Option<&Path>) -> Option<PathBuf> {
    outdir.or_else(|| exe.and_then(Path::parent).map(Path::to_path_buf))
}

fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(Outcome::UpToDate) => 0,
        Ok(Outcome::Regenerated { empty, .. }) => {
            info!("{empty} routines left to hand-written or legacy symbols");
            0
        }
        Err(err) => {
            error!("{err}");
            1
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let exe = std::env::current_exe().ok();
    let Some(outdir) = resolve_outdir(args.outdir, exe.as_deref()) else {
        error!("cannot locate the executable directory; pass --outdir");
        return ExitCode::from(1);
    };

    let mut opts = GenerateOptions::new(outdir, args.blas_signatures, args.lapack_signatures);
    opts.scheme = SymbolScheme::from_accelerate_flag(args.accelerate);
    opts.symbol_table = args.symbol_table;
    opts.generator = exe;
    debug!("options: {opts:?}");

    ExitCode::from(exit_status(&make_all(&opts)))
}
