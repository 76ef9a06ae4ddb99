/// Symbol scheme of the BLAS/LAPACK build being linked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolScheme {
    /// Plain `BLAS_FUNC(name)` symbols.
    #[default]
    Standard,
    /// macOS 13.3+ Accelerate, whose LAPACK 3.9 symbols carry `$NEWLAPACK`.
    NewAccelerate,
}

impl SymbolScheme {
    pub fn from_accelerate_flag(accelerate: bool) -> Self {
        if accelerate {
            SymbolScheme::NewAccelerate
        } else {
            SymbolScheme::Standard
        }
    }

    pub fn is_new_accelerate(self) -> bool {
        self == SymbolScheme::NewAccelerate
    }
}

/// Callee of a generated wrapper: `MACRO(symbol)` or a bare `(symbol)`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BlasSymbol {
    pub macro_name: Option<String>,
    pub symbol: String,
}

impl BlasSymbol {
    pub fn with_macro(macro_name: &str, symbol: impl Into<String>) -> Self {
        Self {
            macro_name: Some(macro_name.to_string()),
            symbol: symbol.into(),
        }
    }

    pub fn bare(symbol: impl Into<String>) -> Self {
        Self {
            macro_name: None,
            symbol: symbol.into(),
        }
    }

    pub fn callee(&self) -> String {
        format!("{}({})", self.macro_name.as_deref().unwrap_or(""), self.symbol)
    }
}

/// Legacy g77-ABI symbol under which a wrapper is exported.
pub fn f_func_symbol(name: &str) -> String {
    let sanitized = sanitize_symbol(name);
    format!(
        "F_FUNC({},{})",
        sanitized.to_ascii_lowercase(),
        sanitized.to_ascii_uppercase()
    )
}

pub fn fortran_symbol(name: &str) -> String {
    let sanitized = sanitize_symbol(name).to_ascii_lowercase();
    format!("{sanitized}_")
}

fn sanitize_symbol(name: &str) -> String {
    name.trim()
        .trim_end_matches('\0')
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}
