use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Type tokens used by the BLAS/LAPACK signature catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CType {
    Int,
    Complex64,
    Double,
    Float,
    Complex128,
    Char,
    Bint,
    Void,
    CSelect1,
    CSelect2,
    DSelect2,
    DSelect3,
    SSelect2,
    SSelect3,
    ZSelect1,
    ZSelect2,
}

impl CType {
    /// Token as it appears in the catalog.
    pub fn token(self) -> &'static str {
        match self {
            CType::Int => "int",
            CType::Complex64 => "c",
            CType::Double => "d",
            CType::Float => "s",
            CType::Complex128 => "z",
            CType::Char => "char",
            CType::Bint => "bint",
            CType::Void => "void",
            CType::CSelect1 => "cselect1",
            CType::CSelect2 => "cselect2",
            CType::DSelect2 => "dselect2",
            CType::DSelect3 => "dselect3",
            CType::SSelect2 => "sselect2",
            CType::SSelect3 => "sselect3",
            CType::ZSelect1 => "zselect1",
            CType::ZSelect2 => "zselect2",
        }
    }

    /// C spelling used in generated declarations. The select callbacks refer
    /// to typedefs emitted in the LAPACK preamble.
    pub fn c_name(self) -> &'static str {
        match self {
            CType::Int | CType::Bint => "int",
            CType::Complex64 => "npy_complex64",
            CType::Double => "double",
            CType::Float => "float",
            CType::Complex128 => "npy_complex128",
            CType::Char => "char",
            CType::Void => "void",
            CType::CSelect1 => "_cselect1",
            CType::CSelect2 => "_cselect2",
            CType::DSelect2 => "_dselect2",
            CType::DSelect3 => "_dselect3",
            CType::SSelect2 => "_sselect2",
            CType::SSelect3 => "_sselect3",
            CType::ZSelect1 => "_zselect1",
            CType::ZSelect2 => "_zselect2",
        }
    }

    pub fn is_void(self) -> bool {
        self == CType::Void
    }
}

impl FromStr for CType {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let ty = match token {
            "int" => CType::Int,
            "c" => CType::Complex64,
            "d" => CType::Double,
            "s" => CType::Float,
            "z" => CType::Complex128,
            "char" => CType::Char,
            "bint" => CType::Bint,
            "void" => CType::Void,
            "cselect1" => CType::CSelect1,
            "cselect2" => CType::CSelect2,
            "dselect2" => CType::DSelect2,
            "dselect3" => CType::DSelect3,
            "sselect2" => CType::SSelect2,
            "sselect3" => CType::SSelect3,
            "zselect1" => CType::ZSelect1,
            "zselect2" => CType::ZSelect2,
            other => return Err(format!("unknown type token '{other}'")),
        };
        Ok(ty)
    }
}

impl Display for CType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}
