//! Reader for the `cython_{blas,lapack}_signatures.txt` routine catalogs.
//!
//! Each non-blank, non-comment line describes one routine:
//! `<ret> <name>(<type> *<arg>, <type> *<arg>, ...)`.

mod ctype;

use std::fmt::{Display, Formatter};

pub use ctype::CType;

/// Argument names that get a trailing underscore.
const RESERVED_ARGNAMES: [&str; 2] = ["lambda", "in"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub return_type: CType,
    pub argnames: Vec<String>,
    pub argtypes: Vec<CType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

impl Signature {
    pub fn parse_line(raw: &str, line: usize) -> Result<Self, ParseError> {
        let err = |message: String| ParseError { line, message };

        let trimmed = raw.trim();
        let body = trimmed
            .strip_suffix(')')
            .ok_or_else(|| err("expected line to end with ')'".to_string()))?;
        let (head, args) = body
            .split_once('(')
            .ok_or_else(|| err("missing '(' after routine name".to_string()))?;
        if args.contains('(') {
            return Err(err("unexpected '(' in argument list".to_string()));
        }

        let (ret_token, name) = head
            .split_once(' ')
            .ok_or_else(|| err(format!("expected '<type> <name>', got '{head}'")))?;
        let name = name.trim();
        if name.is_empty() || !is_identifier(name) {
            return Err(err(format!("invalid routine name '{name}'")));
        }
        let return_type = ret_token.parse::<CType>().map_err(err)?;

        let mut argtypes = Vec::new();
        let mut argnames = Vec::new();
        if !args.trim().is_empty() {
            for arg in args.split(", ") {
                let (ty, argname) = arg
                    .split_once(" *")
                    .ok_or_else(|| err(format!("expected '<type> *<name>', got '{arg}'")))?;
                if !is_identifier(argname) {
                    return Err(err(format!("invalid argument name '{argname}'")));
                }
                argtypes.push(ty.trim().parse::<CType>().map_err(err)?);
                argnames.push(argname.to_string());
            }
        }

        let argnames = argnames
            .into_iter()
            .map(|n| {
                if n == ret_token || RESERVED_ARGNAMES.contains(&n.as_str()) {
                    format!("{n}_")
                } else {
                    n
                }
            })
            .collect();

        Ok(Signature {
            name: name.to_string(),
            return_type,
            argnames,
            argtypes,
        })
    }

    pub fn arity(&self) -> usize {
        self.argnames.len()
    }
}

pub fn parse_str(raw: &str) -> Result<Vec<Signature>, ParseError> {
    let mut sigs = Vec::new();
    for (i, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || is_comment(trimmed) {
            continue;
        }
        sigs.push(Signature::parse_line(trimmed, i + 1)?);
    }
    Ok(sigs)
}

fn is_comment(line: &str) -> bool {
    line.starts_with('#')
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blas_catalog_lines() {
        let src = r#"
# Signatures for BLAS
d dasum(int *n, d *dx, int *incx)
void dgemm(char *transa, char *transb, int *m, int *n, int *k, d *alpha, d *a, int *lda, d *b, int *ldb, d *beta, d *c, int *ldc)

void xerbla_array(char *srname, int *srname_len, int *info)
"#;

        let sigs = parse_str(src).expect("parser should succeed");
        assert_eq!(sigs.len(), 3);
        assert_eq!(sigs[0].name, "dasum");
        assert_eq!(sigs[0].return_type, CType::Double);
        assert_eq!(sigs[0].argnames, vec!["n", "dx", "incx"]);
        assert_eq!(sigs[0].argtypes, vec![CType::Int, CType::Double, CType::Int]);
        assert_eq!(sigs[1].name, "dgemm");
        assert_eq!(sigs[1].arity(), 13);
        assert!(sigs[1].return_type.is_void());
    }

    #[test]
    fn renames_argument_clashing_with_return_token() {
        let sig = Signature::parse_line("d dlapy2(d *x, d *d)", 1).expect("should parse");
        assert_eq!(sig.argnames, vec!["x", "d_"]);
    }

    #[test]
    fn renames_reserved_argument_names() {
        let sig = Signature::parse_line(
            "void dlagts(int *job, int *n, d *a, d *b, d *c, d *d, int *in, d *y, d *tol, int *info)",
            1,
        )
        .expect("should parse");
        assert_eq!(sig.argnames[6], "in_");
        // `d` only clashes when the return token is `d`.
        assert_eq!(sig.argnames[5], "d");

        let sig = Signature::parse_line("void slarrk(int *n, s *lambda)", 1).expect("should parse");
        assert_eq!(sig.argnames[1], "lambda_");
    }

    #[test]
    fn accepts_empty_argument_list() {
        let sig = Signature::parse_line("d dsecnd()", 1).expect("should parse");
        assert!(sig.argnames.is_empty());
        assert!(sig.argtypes.is_empty());
    }

    #[test]
    fn reports_line_of_malformed_entry() {
        let src = "d dasum(int *n, d *dx, int *incx)\n\nvoid broken(int n)\n";
        let err = parse_str(src).expect_err("should fail");
        assert_eq!(err.line, 3);
        assert!(err.message.contains("int n"));
    }

    #[test]
    fn rejects_unknown_type_and_missing_paren() {
        let err = Signature::parse_line("q qfoo(int *n)", 7).expect_err("unknown return type");
        assert_eq!(err.line, 7);
        assert!(Signature::parse_line("d dasum(int *n", 1).is_err());
        assert!(Signature::parse_line("dasum(int *n)", 1).is_err());
    }
}
