#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug)]
enum IoContext {
    ReadSource,
    WriteInstructionImage,
    WriteDataImage,
}

#[derive(Debug)]
enum Error {
    Assemble(sasm::Error),
    Io(std::io::Error, IoContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} \"{}\" failed: {}",
                match context {
                    IoContext::ReadSource => "Reading source file",
                    IoContext::WriteInstructionImage => "Writing instruction image",
                    IoContext::WriteDataImage => "Writing data image",
                },
                path.display(),
                err
            ),
            Error::Assemble(err) => {
                writeln!(f, "Assembling failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Assembly source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("IMEM")
                .help("Instruction image output file")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("DMEM")
                .help("Data image output file")
                .required(true)
                .index(3),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let imem = matches.value_of("IMEM").unwrap();
    let dmem = matches.value_of("DMEM").unwrap();

    if let Err(err) = assemble_files(input, imem, dmem) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn assemble_files(input: &str, imem: &str, dmem: &str) -> Result<(), Error> {
    let input_path = Path::new(input);

    let source_file = File::open(input_path)
        .map_err(|err| Error::Io(err, IoContext::ReadSource, input_path.to_owned()))?;
    let mut source = String::new();
    BufReader::new(source_file)
        .read_to_string(&mut source)
        .map_err(|err| Error::Io(err, IoContext::ReadSource, input_path.to_owned()))?;

    let program = sasm::assemble(&source).map_err(|err| {
        Error::Assemble(match input_path.to_str() {
            Some(path_str) => err.with_path(path_str),
            None => err,
        })
    })?;

    simpfile::write_instructions_file(imem, program.instructions())
        .map_err(|err| Error::Io(err, IoContext::WriteInstructionImage, PathBuf::from(imem)))?;
    simpfile::write_words_file(dmem, program.data().words())
        .map_err(|err| Error::Io(err, IoContext::WriteDataImage, PathBuf::from(dmem)))?;

    Ok(())
}
