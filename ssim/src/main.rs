#[macro_use]
extern crate clap;

use clap::Arg;
use ssim::Args;
use std::path::PathBuf;
use std::process;

const ARG_NAMES: [&str; 14] = [
    "IMEMIN",
    "DMEMIN",
    "DISKIN",
    "IRQ2IN",
    "DMEMOUT",
    "REGOUT",
    "TRACE",
    "HWREGTRACE",
    "CYCLES",
    "LEDS",
    "DISPLAY7SEG",
    "DISKOUT",
    "MONITOR_TXT",
    "MONITOR_YUV",
];

fn main() {
    let mut app = app_from_crate!();
    for (index, name) in ARG_NAMES.iter().enumerate() {
        app = app.arg(Arg::with_name(name).required(true).index(index as u64 + 1));
    }
    let matches = app.get_matches();

    let mut paths = ARG_NAMES
        .iter()
        .map(|name| PathBuf::from(matches.value_of(name).unwrap()));
    let args = Args {
        imemin: paths.next().unwrap(),
        dmemin: paths.next().unwrap(),
        diskin: paths.next().unwrap(),
        irq2in: paths.next().unwrap(),
        dmemout: paths.next().unwrap(),
        regout: paths.next().unwrap(),
        trace: paths.next().unwrap(),
        hwregtrace: paths.next().unwrap(),
        cycles: paths.next().unwrap(),
        leds: paths.next().unwrap(),
        display7seg: paths.next().unwrap(),
        diskout: paths.next().unwrap(),
        monitor_txt: paths.next().unwrap(),
        monitor_yuv: paths.next().unwrap(),
    };

    if let Err(err) = ssim::run(&args) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
