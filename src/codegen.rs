use crate::syntax::Expression;

/// A named address made visible to compiled code.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ExternSymbol<'a> {
    pub name: &'a str,
    pub addr: *const u8,
}

/// Compiles an expression into native code written to `out`, resolving free
/// names against `externs`. Declared as the boundary towards a JIT backend;
/// nothing calls it yet.
pub(crate) fn jit_compile_expression(
    expr: &Expression,
    externs: &[ExternSymbol],
    out: &mut Vec<u8>,
) {
    todo!("Actually generate code :)");
}
