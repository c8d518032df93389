use simp::trace::{self, Tracer};
use simp::{InstrWord, IoRegister, Word};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Tracer backed by the four per-cycle output files.
pub struct FileTracer {
    trace: BufWriter<File>,
    hwregtrace: BufWriter<File>,
    leds: BufWriter<File>,
    display7seg: BufWriter<File>,
}

impl FileTracer {
    pub fn create(
        trace: &Path,
        hwregtrace: &Path,
        leds: &Path,
        display7seg: &Path,
    ) -> io::Result<FileTracer> {
        Ok(FileTracer {
            trace: BufWriter::new(File::create(trace)?),
            hwregtrace: BufWriter::new(File::create(hwregtrace)?),
            leds: BufWriter::new(File::create(leds)?),
            display7seg: BufWriter::new(File::create(display7seg)?),
        })
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.trace.flush()?;
        self.hwregtrace.flush()?;
        self.leds.flush()?;
        self.display7seg.flush()
    }
}

impl Tracer for FileTracer {
    fn instruction(&mut self, pc: Word, word: InstrWord, registers: &[Word]) -> io::Result<()> {
        trace::write_instruction_line(&mut self.trace, pc, word, registers)
    }

    fn io_read(&mut self, cycle: u32, register: IoRegister, value: Word) -> io::Result<()> {
        trace::write_hwreg_line(&mut self.hwregtrace, cycle, "READ", register, value)
    }

    fn io_write(&mut self, cycle: u32, register: IoRegister, value: Word) -> io::Result<()> {
        trace::write_hwreg_line(&mut self.hwregtrace, cycle, "WRITE", register, value)
    }

    fn leds(&mut self, cycle: u32, value: Word) -> io::Result<()> {
        trace::write_change_line(&mut self.leds, cycle, value)
    }

    fn display(&mut self, cycle: u32, value: Word) -> io::Result<()> {
        trace::write_change_line(&mut self.display7seg, cycle, value)
    }
}
