//! Text file formats of the SIMP toolchain.
//!
//! Every memory image the assembler and simulator exchange is ASCII with
//! one record per line: 12 upper-case hex digits for a 48-bit instruction
//! word, 8 for a 32-bit data word, a decimal cycle number for the external
//! interrupt schedule. Blank lines are ignored on input; short images are
//! zero padded to the requested size.
//!
//! Readers and writers are generic over [`BufRead`]/[`Write`]; the `_file`
//! variants wrap a buffered file handle around them.
//!
//! [`BufRead`]: https://doc.rust-lang.org/std/io/trait.BufRead.html
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

fn invalid_record(kind: &str, line: &str, err: std::num::ParseIntError) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid {} \"{}\": {}", kind, line, err),
    )
}

/// Reads a 32-bit word image: one 8-hex-digit value per line, zero padded
/// to `size` words. Lines beyond `size` are ignored.
pub fn read_words<R: BufRead>(reader: R, size: usize) -> io::Result<Vec<u32>> {
    let mut words = vec![0u32; size];
    let mut address = 0;

    for line in reader.lines() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        if address >= size {
            break;
        }
        words[address] =
            u32::from_str_radix(record, 16).map_err(|err| invalid_record("data word", record, err))?;
        address += 1;
    }

    Ok(words)
}

/// Reads a 48-bit instruction image: one 12-hex-digit value per line, zero
/// padded to `size` words.
pub fn read_instructions<R: BufRead>(reader: R, size: usize) -> io::Result<Vec<u64>> {
    let mut words = vec![0u64; size];
    let mut address = 0;

    for line in reader.lines() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        if address >= size {
            break;
        }
        words[address] = u64::from_str_radix(record, 16)
            .map_err(|err| invalid_record("instruction word", record, err))?;
        address += 1;
    }

    Ok(words)
}

/// Reads the external interrupt schedule: decimal cycle numbers, one per
/// line.
pub fn read_cycle_schedule<R: BufRead>(reader: R) -> io::Result<Vec<u32>> {
    let mut schedule = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let record = line.trim();
        if record.is_empty() {
            continue;
        }
        schedule.push(
            record
                .parse()
                .map_err(|err| invalid_record("cycle number", record, err))?,
        );
    }

    Ok(schedule)
}

/// Writes a 32-bit word image, 8 upper-case hex digits per line.
pub fn write_words<W: Write>(mut writer: W, words: &[u32]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{:08X}", word)?;
    }
    Ok(())
}

/// Writes a 48-bit instruction image, 12 upper-case hex digits per line.
pub fn write_instructions<W: Write>(mut writer: W, words: &[u64]) -> io::Result<()> {
    for word in words {
        writeln!(writer, "{:012X}", word)?;
    }
    Ok(())
}

/// Writes the cycle count: a bare decimal number without a trailing
/// newline.
pub fn write_cycles<W: Write>(mut writer: W, cycles: u32) -> io::Result<()> {
    write!(writer, "{}", cycles)
}

/// Writes the monitor dump: one pixel per line as 2 upper-case hex digits.
pub fn write_monitor_txt<W: Write>(mut writer: W, pixels: &[u8]) -> io::Result<()> {
    for pixel in pixels {
        writeln!(writer, "{:02X}", pixel)?;
    }
    Ok(())
}

/// Writes the raw YUV frame: the luma plane as-is followed by two chroma
/// planes of constant 0x80, giving a neutral grayscale image.
pub fn write_monitor_yuv<W: Write>(mut writer: W, pixels: &[u8]) -> io::Result<()> {
    writer.write_all(pixels)?;
    writer.write_all(&vec![0x80u8; pixels.len() * 2])
}

pub fn read_words_file<P: AsRef<Path>>(path: P, size: usize) -> io::Result<Vec<u32>> {
    read_words(BufReader::new(File::open(path)?), size)
}

pub fn read_instructions_file<P: AsRef<Path>>(path: P, size: usize) -> io::Result<Vec<u64>> {
    read_instructions(BufReader::new(File::open(path)?), size)
}

pub fn read_cycle_schedule_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<u32>> {
    read_cycle_schedule(BufReader::new(File::open(path)?))
}

pub fn write_words_file<P: AsRef<Path>>(path: P, words: &[u32]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_words(&mut writer, words)?;
    writer.flush()
}

pub fn write_instructions_file<P: AsRef<Path>>(path: P, words: &[u64]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_instructions(&mut writer, words)?;
    writer.flush()
}

pub fn write_cycles_file<P: AsRef<Path>>(path: P, cycles: u32) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_cycles(&mut writer, cycles)?;
    writer.flush()
}

pub fn write_monitor_txt_file<P: AsRef<Path>>(path: P, pixels: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_monitor_txt(&mut writer, pixels)?;
    writer.flush()
}

pub fn write_monitor_yuv_file<P: AsRef<Path>>(path: P, pixels: &[u8]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_monitor_yuv(&mut writer, pixels)?;
    writer.flush()
}
