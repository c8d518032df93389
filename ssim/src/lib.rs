//! Runner for the SIMP simulator.
//!
//! Ties the pieces together the way the command line contract demands:
//! load the instruction, data and disk images plus the external interrupt
//! schedule, drive the [`Machine`](../simp/struct.Machine.html) to `halt`
//! while streaming the four per-cycle artifacts, then dump the final state
//! of memory, registers, disk and monitor.

mod tracer;


pub use crate::tracer::FileTracer;

use simp::{constants, Machine};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The fourteen file paths of a simulator invocation, in command line
/// order.
#[derive(Debug)]
pub struct Args {
    pub imemin: PathBuf,
    pub dmemin: PathBuf,
    pub diskin: PathBuf,
    pub irq2in: PathBuf,
    pub dmemout: PathBuf,
    pub regout: PathBuf,
    pub trace: PathBuf,
    pub hwregtrace: PathBuf,
    pub cycles: PathBuf,
    pub leds: PathBuf,
    pub display7seg: PathBuf,
    pub diskout: PathBuf,
    pub monitor_txt: PathBuf,
    pub monitor_yuv: PathBuf,
}

#[derive(Debug)]
pub enum Error {
    /// File access failure tagged with the path it concerned.
    Io(io::Error, PathBuf),
    /// Failure while streaming one of the trace files.
    Trace(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "File \"{}\": {}", path.display(), err),
            Error::Trace(err) => write!(f, "Writing trace output failed: {}", err),
        }
    }
}

fn file_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |err| Error::Io(err, path.to_owned())
}

/// Loads the input images, runs the machine to `halt` and writes every
/// output artifact. Returns the executed cycle count.
pub fn run(args: &Args) -> Result<u32, Error> {
    let imem = simpfile::read_instructions_file(&args.imemin, constants::IMEM_SIZE)
        .map_err(file_error(&args.imemin))?;
    let dmem = simpfile::read_words_file(&args.dmemin, constants::DMEM_SIZE)
        .map_err(file_error(&args.dmemin))?;
    let disk = simpfile::read_words_file(&args.diskin, constants::DISK_SIZE)
        .map_err(file_error(&args.diskin))?;
    let irq2 =
        simpfile::read_cycle_schedule_file(&args.irq2in).map_err(file_error(&args.irq2in))?;

    let mut machine = Machine::new(&imem, &dmem, &disk, irq2);
    let mut tracer =
        FileTracer::create(&args.trace, &args.hwregtrace, &args.leds, &args.display7seg)
            .map_err(Error::Trace)?;

    let cycles = machine.run(&mut tracer).map_err(Error::Trace)?;
    tracer.flush().map_err(Error::Trace)?;

    simpfile::write_words_file(&args.dmemout, machine.dmem().words())
        .map_err(file_error(&args.dmemout))?;
    simpfile::write_words_file(&args.regout, &machine.registers()[3..])
        .map_err(file_error(&args.regout))?;
    simpfile::write_cycles_file(&args.cycles, cycles).map_err(file_error(&args.cycles))?;
    simpfile::write_words_file(&args.diskout, machine.disk().words())
        .map_err(file_error(&args.diskout))?;
    simpfile::write_monitor_txt_file(&args.monitor_txt, machine.framebuffer().pixels())
        .map_err(file_error(&args.monitor_txt))?;
    simpfile::write_monitor_yuv_file(&args.monitor_yuv, machine.framebuffer().pixels())
        .map_err(file_error(&args.monitor_yuv))?;

    Ok(cycles)
}
