use crate::{constants, InstrWord, Word};
use num::ToPrimitive;
use num_derive::{FromPrimitive, ToPrimitive};
use util::{EnumFromStr, ParseEnumError};

/// Processor instruction set.
///
/// Instruction layout (48 bits, most significant bit first):
///
/// | Bits 47-40 | Bits 39-36 | Bits 35-32 | Bits 31-28 | Bits 27-24 | Bits 23-12 | Bits 11-0 |
/// |------------|------------|------------|------------|------------|------------|-----------|
/// | opcode     | rd         | rs         | rt         | rm         | imm1       | imm2      |
///
/// Both immediates are 12-bit two's complement values and are sign extended
/// when the word is decoded. During execution they appear in register slots
/// 1 (`$imm1`) and 2 (`$imm2`), so every opcode below reads its operands
/// uniformly from the register file.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum Opcode {
    /// Add. Sets `rd` to `rs + rt + rm`.
    ADD,
    /// Subtract. Sets `rd` to `rs - rt - rm`.
    SUB,
    /// Multiply-accumulate. Sets `rd` to `rs * rt + rm`.
    MAC,
    /// Bitwise and of `rs`, `rt` and `rm`.
    AND,
    /// Bitwise or of `rs`, `rt` and `rm`.
    OR,
    /// Bitwise exclusive-or of `rs`, `rt` and `rm`.
    XOR,
    /// Shift left logical. Sets `rd` to `rs << rt`.
    SLL,
    /// Shift right arithmetic. Sets `rd` to `rs >> rt` (inserting the sign bit).
    SRA,
    /// Shift right logical. Sets `rd` to `rs >> rt` (inserting zeros).
    SRL,
    /// Branch if equal. If `rs == rt`, sets the program counter to `rm`.
    BEQ,
    /// Branch if not equal.
    BNE,
    /// Branch if less than (signed).
    BLT,
    /// Branch if greater than (signed).
    BGT,
    /// Branch if less or equal (signed).
    BLE,
    /// Branch if greater or equal (signed).
    BGE,
    /// Jump and link. Sets `rd` to the next instruction's address and the
    /// program counter to `rm`.
    JAL,
    /// Load word. Sets `rd` to `DMEM[rs + rt] + rm`.
    LW,
    /// Store word. Sets `DMEM[rs + rt]` to `rd + rm`.
    SW,
    /// Return from interrupt. Restores the program counter from `irqreturn`
    /// and leaves interrupt mode.
    RETI,
    /// Read an IO register. Sets `rd` to `IO[rs + rt]`.
    IN,
    /// Write an IO register. Sets `IO[rs + rt]` to `rm`.
    OUT,
    /// Stop the processor.
    HALT,
}

/// List of available registers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive, ToPrimitive)]
pub enum RegisterId {
    /// Always zero; writes are discarded.
    ZERO,
    /// Current instruction's first immediate.
    IMM1,
    /// Current instruction's second immediate.
    IMM2,
    /// Value.
    V0,
    /// Argument 0.
    A0,
    /// Argument 1.
    A1,
    /// Argument 2.
    A2,
    /// Temporary 0.
    T0,
    /// Temporary 1.
    T1,
    /// Temporary 2.
    T2,
    /// Saved 0.
    S0,
    /// Saved 1.
    S1,
    /// Saved 2.
    S2,
    /// Global pointer.
    GP,
    /// Stack pointer.
    SP,
    /// Return address.
    RA,
}

#[inline]
pub fn enum_to_u32<T: ToPrimitive + Copy>(val: T) -> u32 {
    val.to_u32().unwrap()
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl std::fmt::Display for $e {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

macro_rules! impl_enum_from_str {
    ($e:ty { $( $variant:ident ),+ $(,)? }) => {
        impl EnumFromStr for $e {
            fn from_str(s: &str) -> Result<Self, ParseEnumError> {
                match s {
                    $( stringify!($variant) => Ok(<$e>::$variant), )+
                    _ => Err(ParseEnumError {
                        value: s.to_string(),
                        enum_name: stringify!($e),
                    }),
                }
            }
        }

        impl std::str::FromStr for $e {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, ParseEnumError> {
                EnumFromStr::from_str(s)
            }
        }
    };
}

impl_enum_display!(Opcode);
impl_enum_display!(RegisterId);

impl_enum_from_str!(Opcode {
    ADD, SUB, MAC, AND, OR, XOR, SLL, SRA, SRL, BEQ, BNE, BLT, BGT, BLE, BGE,
    JAL, LW, SW, RETI, IN, OUT, HALT,
});

impl_enum_from_str!(RegisterId {
    ZERO, IMM1, IMM2, V0, A0, A1, A2, T0, T1, T2, S0, S1, S2, GP, SP, RA,
});

#[inline]
pub fn register_index(id: RegisterId) -> usize {
    enum_to_u32(id) as usize
}

/// Sign extends a raw 12-bit immediate to a full word.
#[inline]
pub fn sign_extend_immediate(raw: Word) -> Word {
    if raw & constants::IMMEDIATE_SIGN_BIT != 0 {
        raw | !constants::IMMEDIATE_MASK
    } else {
        raw & constants::IMMEDIATE_MASK
    }
}

/// A decoded instruction word.
///
/// The register fields are kept as raw indices because any 4-bit pattern
/// names a valid register slot; the opcode stays raw so that unrecognized
/// patterns can be executed as no-ops.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub opcode: u32,
    pub rd: usize,
    pub rs: usize,
    pub rt: usize,
    pub rm: usize,
    pub imm1: Word,
    pub imm2: Word,
}

impl Instruction {
    /// Splits a 48-bit word into its seven fields, sign extending both
    /// immediates.
    pub fn decode(word: InstrWord) -> Instruction {
        Instruction {
            opcode: ((word & constants::OPCODE_MASK) >> constants::OPCODE_OFFSET) as u32,
            rd: ((word & constants::RD_MASK) >> constants::RD_OFFSET) as usize,
            rs: ((word & constants::RS_MASK) >> constants::RS_OFFSET) as usize,
            rt: ((word & constants::RT_MASK) >> constants::RT_OFFSET) as usize,
            rm: ((word & constants::RM_MASK) >> constants::RM_OFFSET) as usize,
            imm1: sign_extend_immediate(
                ((word & constants::IMM1_MASK) >> constants::IMM1_OFFSET) as Word,
            ),
            imm2: sign_extend_immediate((word & constants::IMM2_MASK) as Word),
        }
    }
}

/// Packs raw field values into a 48-bit instruction word.
///
/// Every field is masked to its width, so out-of-range values are truncated
/// rather than bleeding into neighboring fields.
#[inline]
pub fn encode_fields(
    opcode: u32,
    rd: u32,
    rs: u32,
    rt: u32,
    rm: u32,
    imm1: u32,
    imm2: u32,
) -> InstrWord {
    (InstrWord::from(opcode) << constants::OPCODE_OFFSET) & constants::OPCODE_MASK
        | (InstrWord::from(rd) << constants::RD_OFFSET) & constants::RD_MASK
        | (InstrWord::from(rs) << constants::RS_OFFSET) & constants::RS_MASK
        | (InstrWord::from(rt) << constants::RT_OFFSET) & constants::RT_MASK
        | (InstrWord::from(rm) << constants::RM_OFFSET) & constants::RM_MASK
        | (InstrWord::from(imm1) << constants::IMM1_OFFSET) & constants::IMM1_MASK
        | InstrWord::from(imm2) & constants::IMM2_MASK
}

/// Constructs an instruction word from typed operands.
#[inline]
pub fn make_instruction(
    oc: Opcode,
    rd: RegisterId,
    rs: RegisterId,
    rt: RegisterId,
    rm: RegisterId,
    imm1: i32,
    imm2: i32,
) -> InstrWord {
    encode_fields(
        enum_to_u32(oc),
        enum_to_u32(rd),
        enum_to_u32(rs),
        enum_to_u32(rt),
        enum_to_u32(rm),
        imm1 as u32 & constants::IMMEDIATE_MASK,
        imm2 as u32 & constants::IMMEDIATE_MASK,
    )
}

/// Constructs an instruction word.
#[macro_export]
macro_rules! instr {
    ($opcode:ident, $rd:ident, $rs:ident, $rt:ident, $rm:ident, $imm1:expr, $imm2:expr) => {
        $crate::make_instruction(
            $crate::Opcode::$opcode,
            $crate::RegisterId::$rd,
            $crate::RegisterId::$rs,
            $crate::RegisterId::$rt,
            $crate::RegisterId::$rm,
            $imm1,
            $imm2,
        )
    };
}

/// Constructs a [`Opcode::HALT`](enum.Opcode.html#variant.HALT) instruction.
#[macro_export]
macro_rules! halt {
    () => {
        $crate::instr!(HALT, ZERO, ZERO, ZERO, ZERO, 0, 0)
    };
}
