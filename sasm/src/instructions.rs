use crate::int_util::parse_int;
use crate::labels::LabelMap;
use crate::parser::Rule;
use crate::{new_parser_error, Result};
use matches::debug_assert_matches;
use num_traits::FromPrimitive;
use pest::iterators::Pair;
use pest::Span;
use simp::{constants, encode_fields, enum_to_u32, InstrWord, Opcode, RegisterId};

/// An immediate slot: either an already-encoded 12-bit value or a label
/// reference resolved once all labels are known.
#[derive(Debug, PartialEq)]
pub enum ImmediateOperand<'i> {
    Value(u32),
    Label(Span<'i>),
}

/// One source instruction after the first walk.
///
/// Instructions without label operands encode eagerly; the rest keep their
/// operand spans so the finalize pass can point diagnostics at the exact
/// token.
#[derive(Debug, PartialEq)]
pub enum ParsedInstruction<'i> {
    Complete(InstrWord),
    Pending {
        opcode: Opcode,
        rd: RegisterId,
        rs: RegisterId,
        rt: RegisterId,
        rm: RegisterId,
        imm1: ImmediateOperand<'i>,
        imm2: ImmediateOperand<'i>,
    },
}

fn parse_register(pair: Pair<Rule>) -> Result<RegisterId> {
    debug_assert_matches!(pair.as_rule(), Rule::register);
    let span = pair.as_span();
    let name = pair.into_inner().next().unwrap().as_str();

    if name.bytes().all(|b| b.is_ascii_digit()) {
        let index: u32 = name.parse().map_err(|err| {
            new_parser_error(span.clone(), format!("parsing register number failed: {}", err))
        })?;
        RegisterId::from_u32(index)
            .ok_or_else(|| new_parser_error(span, format!("no register ${}", index)))
    } else {
        name.to_uppercase()
            .parse()
            .map_err(|err| new_parser_error(span, format!("{}", err)))
    }
}

fn expect_register(pair: Pair<Rule>) -> Result<RegisterId> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let span = pair.as_span();
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        Rule::register => parse_register(inner),
        _ => Err(new_parser_error(span, "expected a register".to_owned())),
    }
}

fn next_register<'i, I>(operands: &mut I) -> Result<RegisterId>
where
    I: Iterator<Item = Pair<'i, Rule>>,
{
    match operands.next() {
        Some(pair) => expect_register(pair),
        None => Ok(RegisterId::ZERO),
    }
}

fn process_immediate<'i>(pair: Pair<'i, Rule>) -> Result<ImmediateOperand<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::operand);
    let inner = pair.into_inner().next().unwrap();
    match inner.as_rule() {
        // A register in an immediate slot encodes its slot number.
        Rule::register => Ok(ImmediateOperand::Value(
            enum_to_u32(parse_register(inner)?) & constants::IMMEDIATE_MASK,
        )),
        Rule::int => Ok(ImmediateOperand::Value(
            parse_int(inner)? as u32 & constants::IMMEDIATE_MASK,
        )),
        Rule::identifier => Ok(ImmediateOperand::Label(inner.as_span())),
        _ => unreachable!(),
    }
}

fn next_immediate<'i, I>(operands: &mut I) -> Result<ImmediateOperand<'i>>
where
    I: Iterator<Item = Pair<'i, Rule>>,
{
    match operands.next() {
        Some(pair) => process_immediate(pair),
        None => Ok(ImmediateOperand::Value(0)),
    }
}

fn encode(
    opcode: Opcode,
    rd: RegisterId,
    rs: RegisterId,
    rt: RegisterId,
    rm: RegisterId,
    imm1: u32,
    imm2: u32,
) -> InstrWord {
    encode_fields(
        enum_to_u32(opcode),
        enum_to_u32(rd),
        enum_to_u32(rs),
        enum_to_u32(rt),
        enum_to_u32(rm),
        imm1,
        imm2,
    )
}

/// Turns one parsed instruction into a [`ParsedInstruction`], checking the
/// mnemonic, the operand kinds and the operand count.
pub fn process_instruction<'i>(pair: Pair<'i, Rule>) -> Result<ParsedInstruction<'i>> {
    debug_assert_matches!(pair.as_rule(), Rule::instruction);
    let mut pairs = pair.into_inner();

    let mnemonic = pairs.next().unwrap();
    let opcode: Opcode = mnemonic
        .as_str()
        .to_uppercase()
        .parse()
        .map_err(|err| new_parser_error(mnemonic.as_span(), format!("{}", err)))?;

    let operands: Vec<_> = pairs.collect();
    if operands.len() > 6 {
        return Err(new_parser_error(
            operands[6].as_span(),
            "instruction takes at most six operands".to_owned(),
        ));
    }

    let mut operands = operands.into_iter();
    let rd = next_register(&mut operands)?;
    let rs = next_register(&mut operands)?;
    let rt = next_register(&mut operands)?;
    let rm = next_register(&mut operands)?;
    let imm1 = next_immediate(&mut operands)?;
    let imm2 = next_immediate(&mut operands)?;

    Ok(match (imm1, imm2) {
        (ImmediateOperand::Value(imm1), ImmediateOperand::Value(imm2)) => {
            ParsedInstruction::Complete(encode(opcode, rd, rs, rt, rm, imm1, imm2))
        }
        (imm1, imm2) => ParsedInstruction::Pending {
            opcode,
            rd,
            rs,
            rt,
            rm,
            imm1,
            imm2,
        },
    })
}

fn resolve_immediate(labels: &LabelMap, immediate: &ImmediateOperand) -> Result<u32> {
    match immediate {
        ImmediateOperand::Value(value) => Ok(*value),
        ImmediateOperand::Label(span) => labels
            .get(span.as_str())
            .copied()
            .map(|address| address & constants::IMMEDIATE_MASK)
            .ok_or_else(|| {
                new_parser_error(span.clone(), format!("undefined label {}", span.as_str()))
            }),
    }
}

fn finalize_instruction(labels: &LabelMap, instruction: &ParsedInstruction) -> Result<InstrWord> {
    Ok(match instruction {
        ParsedInstruction::Complete(word) => *word,
        ParsedInstruction::Pending {
            opcode,
            rd,
            rs,
            rt,
            rm,
            imm1,
            imm2,
        } => encode(
            *opcode,
            *rd,
            *rs,
            *rt,
            *rm,
            resolve_immediate(labels, imm1)?,
            resolve_immediate(labels, imm2)?,
        ),
    })
}

/// Pass two: resolves every pending label reference and produces the final
/// instruction words.
pub fn finalize_instructions(
    parsed: &[ParsedInstruction],
    labels: &LabelMap,
) -> Result<Vec<InstrWord>> {
    parsed
        .iter()
        .map(|instruction| finalize_instruction(labels, instruction))
        .collect()
}
