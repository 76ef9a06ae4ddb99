use blaswrap_compat::{SymbolScheme, SymbolTable, f_func_symbol};
use blaswrap_sig::Signature;

/// Render the extern declaration and forwarding definition for one routine.
///
/// The wrapper is exported as `F_FUNC(name,NAME)` and forwards to the symbol
/// chosen by [`SymbolTable::blas_macro_and_name`]. Returns an empty string for
/// routines excluded under `scheme`.
pub fn render_decl_wrapper(sig: &Signature, scheme: SymbolScheme, table: &SymbolTable) -> String {
    if table.exclusion(&sig.name, scheme).is_some() {
        return String::new();
    }

    let c_return_type = sig.return_type.c_name();
    let param_list = sig
        .argtypes
        .iter()
        .zip(&sig.argnames)
        .map(|(ty, name)| format!("{} *{name}", ty.c_name()))
        .collect::<Vec<_>>()
        .join(", ");
    let argnames = sig.argnames.join(", ");
    let callee = table.blas_macro_and_name(&sig.name, scheme).callee();
    let wrapper = f_func_symbol(&sig.name);

    let call = format!("{callee}({argnames})");
    let body = if sig.return_type.is_void() {
        format!("    {call};")
    } else {
        format!("    return {call};")
    };

    format!(
        "\n{c_return_type} {callee}({param_list});\n\
         {c_return_type} {wrapper}({param_list}){{\n\
         {body}\n\
         }}\n"
    )
}
