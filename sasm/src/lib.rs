//! Assembler for the [simp](../simp/index.html) processor.
//!
//! The main entry point is [`assemble`](fn.assemble.html), which accepts
//! SIMP assembly source and produces a [`Program`](struct.Program.html):
//! the 48-bit instruction image plus the initial data image the simulator
//! loads into data memory.
//!
//! Parsing is implemented with [pest], and the crate's
//! [`Error`](type.Error.html) is a type alias of `pest::error::Error`, so
//! every diagnostic, whether a syntax error or a semantic one such as an
//! undefined label, points at the offending span of the source and
//! pretty-prints through pest.
//!
//! # Assembly language
//!
//! The source is line oriented. A `#` starts a comment running to the end
//! of the line. A line may carry a label, an instruction, a `.word`
//! directive, or nothing:
//!
//! ```text
//! loop: add $t0, $t0, $imm1, $zero, 1, 0   # $t0 += 1
//!       blt $zero, $t0, $s0, $imm2, 0, loop
//!       halt
//! .word 256 0xABCD
//! ```
//!
//! ## Instructions
//!
//! Every instruction is written `mnemonic rd, rs, rt, rm, imm1, imm2`.
//! Commas between operands are optional and trailing operands may be
//! omitted; missing registers default to `$zero` and missing immediates to
//! `0`. Mnemonics and register names are matched case insensitively.
//!
//! ## Registers
//!
//! Register    | Purpose
//! ------------|---------
//! `$zero`     | Always contains zero. Writes have no effect.
//! `$imm1`     | The current instruction's first immediate.
//! `$imm2`     | The current instruction's second immediate.
//! `$v0`       | "Value". General purpose, used for returning results.
//! `$a0`-`$a2` | "Argument". General purpose, used for passing arguments.
//! `$t0`-`$t2` | "Temporary". General purpose, caller saved.
//! `$s0`-`$s2` | "Saved". General purpose, callee saved.
//! `$gp`       | Global pointer.
//! `$sp`       | Stack pointer.
//! `$ra`       | Return address, written by `jal`.
//!
//! The numeric forms `$0` through `$15` name the same slots.
//!
//! ## Immediates
//!
//! An immediate operand is a signed decimal or `0x` hexadecimal literal, a
//! label name, or a register (which encodes its slot number). Values are
//! encoded in 12-bit two's complement.
//!
//! ## Labels and `.word`
//!
//! `name:` records the address of the next instruction; the instruction
//! may follow on the same line. `.word ADDR VAL` stores `VAL` at data
//! memory address `ADDR` and occupies no instruction address, so labels
//! resolve identically whether or not `.word` lines sit between them.
//!
//! [pest]: https://docs.rs/pest/

mod data;
mod instructions;
mod int_util;
mod labels;
mod parser;


pub use crate::data::DataImage;

use crate::instructions::{finalize_instructions, process_instruction, ParsedInstruction};
use crate::labels::{define_label, LabelMap};
use crate::parser::{Rule, SasmParser};
use pest::iterators::Pair;
use pest::{Parser, Span};
use simp::{constants, InstrWord};

pub type Error = pest::error::Error<Rule>;

pub type Result<T> = std::result::Result<T, Error>;

/// An assembled program: the instruction image and the initial data image.
#[derive(Debug, PartialEq)]
pub struct Program {
    instructions: Vec<InstrWord>,
    data: DataImage,
}

impl Program {
    pub fn instructions(&self) -> &[InstrWord] {
        &self.instructions
    }

    pub fn data(&self) -> &DataImage {
        &self.data
    }
}

fn new_parser_error(span: Span, message: String) -> Error {
    Error::new_from_span(pest::error::ErrorVariant::CustomError { message }, span)
}

fn parse(input: &str) -> Result<Pair<Rule>> {
    Ok(SasmParser::parse(Rule::program, input)?.next().unwrap())
}

/// Assembles SIMP source text into a [`Program`](struct.Program.html).
///
/// The walk over the parsed source doubles as pass one: labels are
/// recorded against a counter that only instructions advance, while
/// `.word` directives go straight into the data image. Pass two happens in
/// the finalize step, once every label is known.
pub fn assemble(input: &str) -> Result<Program> {
    let program = parse(input)?;

    let mut labels = LabelMap::new();
    let mut parsed: Vec<ParsedInstruction> = Vec::new();
    let mut data = DataImage::new();

    for line in program.into_inner() {
        if line.as_rule() != Rule::line {
            continue;
        }
        for item in line.into_inner() {
            match item.as_rule() {
                Rule::label => define_label(&mut labels, item, parsed.len() as u32)?,
                Rule::word_directive => data::process_word_directive(item, &mut data)?,
                Rule::instruction => {
                    if parsed.len() >= constants::IMEM_SIZE {
                        return Err(new_parser_error(
                            item.as_span(),
                            format!("program exceeds {} instructions", constants::IMEM_SIZE),
                        ));
                    }
                    parsed.push(process_instruction(item)?);
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(Program {
        instructions: finalize_instructions(&parsed, &labels)?,
        data,
    })
}
