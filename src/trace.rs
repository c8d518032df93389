use crate::io::IoRegister;
use crate::{InstrWord, Word};
use std::io::{self, Write};

/// Observer for the per-cycle artifacts of a run.
///
/// The machine reports each event at the exact point in the cycle where the
/// corresponding file line must be produced: the instruction callback fires
/// after the immediate registers are refreshed but before execution, the IO
/// callbacks fire as the `in`/`out` instruction touches the port, and the
/// LED/display callbacks fire only on the cycle the value changes.
///
/// All methods default to no-ops, so partial observers stay small.
pub trait Tracer {
    fn instruction(&mut self, pc: Word, word: InstrWord, registers: &[Word]) -> io::Result<()> {
        let _ = (pc, word, registers);
        Ok(())
    }

    fn io_read(&mut self, cycle: u32, register: IoRegister, value: Word) -> io::Result<()> {
        let _ = (cycle, register, value);
        Ok(())
    }

    fn io_write(&mut self, cycle: u32, register: IoRegister, value: Word) -> io::Result<()> {
        let _ = (cycle, register, value);
        Ok(())
    }

    fn leds(&mut self, cycle: u32, value: Word) -> io::Result<()> {
        let _ = (cycle, value);
        Ok(())
    }

    fn display(&mut self, cycle: u32, value: Word) -> io::Result<()> {
        let _ = (cycle, value);
        Ok(())
    }
}

/// Tracer that discards every event.
pub struct NullTracer;

impl Tracer for NullTracer {}

/// Writes one instruction trace line: the program counter as three hex
/// digits, the 48-bit word as twelve, then all sixteen registers as eight,
/// upper case and space separated.
pub fn write_instruction_line<W: Write>(
    writer: &mut W,
    pc: Word,
    word: InstrWord,
    registers: &[Word],
) -> io::Result<()> {
    write!(writer, "{:03X} {:012X}", pc, word)?;
    for value in registers {
        write!(writer, " {:08X}", value)?;
    }
    writeln!(writer)
}

/// Writes one hardware register trace line: decimal cycle, READ or WRITE,
/// the port name and the value as eight hex digits.
pub fn write_hwreg_line<W: Write>(
    writer: &mut W,
    cycle: u32,
    action: &str,
    register: IoRegister,
    value: Word,
) -> io::Result<()> {
    writeln!(writer, "{} {} {} {:08X}", cycle, action, register.name(), value)
}

/// Writes one LED or seven-segment log line: decimal cycle and the new
/// value as eight hex digits.
pub fn write_change_line<W: Write>(writer: &mut W, cycle: u32, value: Word) -> io::Result<()> {
    writeln!(writer, "{} {:08X}", cycle, value)
}
