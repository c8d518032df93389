use pest_derive::Parser;

/// Pest parser for SIMP assembly source.
#[derive(Parser)]
#[grammar = "sasm.pest"]
pub struct SasmParser;
