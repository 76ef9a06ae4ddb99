use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use blaswrap_compat::{SymbolScheme, SymbolTable};
use blaswrap_sig::Signature;
use tracing::{debug, info};

use crate::assemble::{Library, generate_file_wrapper, wrapper_path};
use crate::error::{GenError, Result};

pub const DEFAULT_GENERATOR_NAME: &str = "blaswrap-cli";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub outdir: PathBuf,
    pub blas_signatures: PathBuf,
    pub lapack_signatures: PathBuf,
    pub scheme: SymbolScheme,
    /// JSON replacement for the built-in symbol table.
    pub symbol_table: Option<PathBuf>,
    /// Generator executable; its mtime counts as an input.
    pub generator: Option<PathBuf>,
    /// Name written into the header comment of every file.
    pub generator_name: String,
}

impl GenerateOptions {
    pub fn new(
        outdir: impl Into<PathBuf>,
        blas_signatures: impl Into<PathBuf>,
        lapack_signatures: impl Into<PathBuf>,
    ) -> Self {
        Self {
            outdir: outdir.into(),
            blas_signatures: blas_signatures.into(),
            lapack_signatures: lapack_signatures.into(),
            scheme: SymbolScheme::Standard,
            symbol_table: None,
            generator: None,
            generator_name: DEFAULT_GENERATOR_NAME.to_string(),
        }
    }

    fn source_files(&self) -> Vec<PathBuf> {
        let mut src = Vec::with_capacity(4);
        src.extend(self.generator.iter().cloned());
        src.push(self.blas_signatures.clone());
        src.push(self.lapack_signatures.clone());
        src.extend(self.symbol_table.iter().cloned());
        src
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    UpToDate,
    Regenerated {
        written: usize,
        wrappers: usize,
        empty: usize,
    },
}

/// Read both catalogs and write one wrapper file per routine into
/// `opts.outdir`, unless every output is already newer than every input.
pub fn make_all(opts: &GenerateOptions) -> Result<Outcome> {
    let blas_sigs = read_signatures(&opts.blas_signatures)?;
    let lapack_sigs = read_signatures(&opts.lapack_signatures)?;
    let table = match &opts.symbol_table {
        Some(path) => SymbolTable::load(path).map_err(|source| GenError::SymbolTable {
            path: path.clone(),
            source,
        })?,
        None => SymbolTable::default(),
    };

    let catalogs = [
        (blas_sigs.as_slice(), opts.blas_signatures.as_path()),
        (lapack_sigs.as_slice(), opts.lapack_signatures.as_path()),
    ];
    let dst_files = unique_wrapper_paths(&catalogs, &opts.outdir)?;
    if all_newer(&dst_files, &opts.source_files())? {
        info!("{}: all files up-to-date", opts.generator_name);
        return Ok(Outcome::UpToDate);
    }

    let mut to_write = BTreeMap::new();
    let mut wrappers = 0usize;
    let mut empty = 0usize;
    for (sigs, lib) in [(&blas_sigs, Library::Blas), (&lapack_sigs, Library::Lapack)] {
        let excluded = sigs
            .iter()
            .filter(|sig| table.exclusion(&sig.name, opts.scheme).is_some())
            .count();
        debug!(
            "{}: {} routines, {} without generated wrapper",
            lib.as_str(),
            sigs.len(),
            excluded
        );
        wrappers += sigs.len() - excluded;
        empty += excluded;
        to_write.extend(generate_file_wrapper(
            sigs,
            lib,
            opts.scheme,
            &table,
            &opts.outdir,
            &opts.generator_name,
        ));
    }

    fs::create_dir_all(&opts.outdir).map_err(|source| GenError::CreateDir {
        path: opts.outdir.clone(),
        source,
    })?;
    let written = write_files(&to_write)?;
    info!(
        "wrote {written} wrapper files to {} ({wrappers} wrappers, scheme {:?})",
        opts.outdir.display(),
        opts.scheme
    );

    Ok(Outcome::Regenerated {
        written,
        wrappers,
        empty,
    })
}

pub fn read_signatures(path: &Path) -> Result<Vec<Signature>> {
    let raw = fs::read_to_string(path).map_err(|source| GenError::ReadSignatures {
        path: path.to_path_buf(),
        source,
    })?;
    blaswrap_sig::parse_str(&raw).map_err(|source| GenError::Signatures {
        path: path.to_path_buf(),
        source,
    })
}

/// Output path of every routine, in catalog order. A routine name that occurs
/// twice, in one catalog or across both, is an error.
fn unique_wrapper_paths(catalogs: &[(&[Signature], &Path)], outdir: &Path) -> Result<Vec<PathBuf>> {
    let mut seen: BTreeMap<&str, &Path> = BTreeMap::new();
    let mut paths = Vec::new();
    for (sigs, catalog) in catalogs {
        for sig in *sigs {
            if let Some(first) = seen.insert(&sig.name, catalog) {
                return Err(GenError::DuplicateRoutine {
                    name: sig.name.clone(),
                    first: first.to_path_buf(),
                    second: catalog.to_path_buf(),
                    path: wrapper_path(outdir, &sig.name),
                });
            }
            paths.push(wrapper_path(outdir, &sig.name));
        }
    }
    Ok(paths)
}

/// True if every destination exists and is strictly newer than every source.
pub fn all_newer(dst_files: &[PathBuf], src_files: &[PathBuf]) -> Result<bool> {
    let mut newest_src: Option<SystemTime> = None;
    for src in src_files {
        let mtime = modified(src)?;
        newest_src = Some(newest_src.map_or(mtime, |t| t.max(mtime)));
    }

    for dst in dst_files {
        let mtime = match modified(dst) {
            Ok(mtime) => mtime,
            Err(GenError::Metadata { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        if newest_src.is_some_and(|src| mtime <= src) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write each file verbatim, overwriting whatever is there.
pub fn write_files(files: &BTreeMap<PathBuf, String>) -> Result<usize> {
    for (path, content) in files {
        fs::write(path, content).map_err(|source| GenError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("wrote {}", path.display());
    }
    Ok(files.len())
}

fn modified(path: &Path) -> Result<SystemTime> {
    fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|source| GenError::Metadata {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::time::Duration;

    fn touch(path: &Path, mtime: SystemTime) {
        fs::write(path, "x").expect("write file");
        File::options()
            .write(true)
            .open(path)
            .and_then(|f| f.set_modified(mtime))
            .expect("set mtime");
    }

    #[test]
    fn all_newer_requires_existing_destinations() {
        let dir = tempfile::tempdir().expect("temp dir");
        let src = dir.path().join("src.txt");
        touch(&src, SystemTime::UNIX_EPOCH + Duration::from_secs(1_000));
        let dst = dir.path().join("missing.c");
        assert!(!all_newer(&[dst], &[src]).expect("check should succeed"));
    }

    #[test]
    fn all_newer_compares_against_newest_source() {
        let dir = tempfile::tempdir().expect("temp dir");
        let base = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        let old_src = dir.path().join("old.txt");
        let new_src = dir.path().join("new.txt");
        let dst = dir.path().join("out.c");
        touch(&old_src, base);
        touch(&new_src, base + Duration::from_secs(20));
        touch(&dst, base + Duration::from_secs(10));

        let srcs = [old_src.clone(), new_src];
        assert!(!all_newer(&[dst.clone()], &srcs).expect("check should succeed"));
        assert!(all_newer(&[dst], &[old_src]).expect("check should succeed"));
    }

    #[test]
    fn equal_mtime_is_not_newer() {
        let dir = tempfile::tempdir().expect("temp dir");
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(5_000);
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.c");
        touch(&src, t);
        touch(&dst, t);
        assert!(!all_newer(&[dst], &[src]).expect("check should succeed"));
    }

    #[test]
    fn duplicate_routine_names_are_rejected() {
        let blas = blaswrap_sig::parse_str("d dlamch(char *cmach)\nd dasum(int *n, d *dx, int *incx)")
            .expect("blas catalog");
        let lapack = blaswrap_sig::parse_str("s dlamch(char *cmach)").expect("lapack catalog");
        let catalogs = [
            (blas.as_slice(), Path::new("blas.txt")),
            (lapack.as_slice(), Path::new("lapack.txt")),
        ];
        let err = unique_wrapper_paths(&catalogs, Path::new("out")).expect_err("dlamch is listed twice");
        match err {
            GenError::DuplicateRoutine { name, first, second, path } => {
                assert_eq!(name, "dlamch");
                assert_eq!(first, Path::new("blas.txt"));
                assert_eq!(second, Path::new("lapack.txt"));
                assert_eq!(path, Path::new("out").join("dlamch.c"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let single = [(blas.as_slice(), Path::new("blas.txt"))];
        let paths = unique_wrapper_paths(&single, Path::new("out")).expect("names are unique");
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = all_newer(&[], &[dir.path().join("gone.txt")]).expect_err("should fail");
        assert!(matches!(err, GenError::Metadata { .. }));
    }

    #[test]
    fn write_files_reports_failing_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("no_such_dir").join("dgemm.c");
        let mut files = BTreeMap::new();
        files.insert(path.clone(), "int x;\n".to_string());
        let err = write_files(&files).expect_err("parent is missing");
        assert!(err.to_string().contains("dgemm.c"));
    }
}
