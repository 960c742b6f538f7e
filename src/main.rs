//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs;
use std::io;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use rlehuff::codec::decode::decode;
use rlehuff::codec::encode::encode;
use rlehuff::tools::cli::{rhopts_init, Mode, RhOpts};

/// File suffix given to compressed output.
const SUFFIX: &str = ".rlh";

fn main() -> Result<(), io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let options = rhopts_init();
    if options.files.is_empty() {
        error!("No input files given.");
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "no input files"));
    }

    //----- Figure out what we need to do and go do it, file by file
    for file in &options.files {
        match options.op_mode {
            Mode::Zip => zip(file, &options)?,
            Mode::Unzip => unzip(file, &options)?,
            Mode::Test => test(file)?,
        }
    }

    info!("Done.\n");
    Ok(())
}

/// Compress one file, writing its frame to file.rlh.
fn zip(file: &str, opts: &RhOpts) -> io::Result<()> {
    let data = fs::read(file)?;
    let frame = encode(&data)?;

    let fname = format!("{}{}", file, SUFFIX);
    if !opts.force_overwrite && fs::metadata(&fname).is_ok() {
        error!("Output file {} exists. Use --force to overwrite.", fname);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "output file exists",
        ));
    }
    fs::write(&fname, &frame)?;
    info!(
        "Compressed {} ({} bytes) to {} ({} bytes).",
        file,
        data.len(),
        fname,
        frame.len()
    );

    if !opts.keep_input_files {
        fs::remove_file(file)?;
    }
    Ok(())
}

/// Decompress one .rlh file, restoring the original name.
fn unzip(file: &str, opts: &RhOpts) -> io::Result<()> {
    let frame = fs::read(file)?;
    let data = decode(&frame)?;

    let fname = match file.strip_suffix(SUFFIX) {
        Some(stem) => stem.to_string(),
        None => format!("{}.out", file),
    };
    if !opts.force_overwrite && fs::metadata(&fname).is_ok() {
        error!("Output file {} exists. Use --force to overwrite.", fname);
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "output file exists",
        ));
    }
    fs::write(&fname, &data)?;
    info!(
        "Decompressed {} ({} bytes) to {} ({} bytes).",
        file,
        frame.len(),
        fname,
        data.len()
    );

    if !opts.keep_input_files {
        fs::remove_file(file)?;
    }
    Ok(())
}

/// Round-trip one file in memory and compare against the original. Nothing
/// is written.
fn test(file: &str) -> io::Result<()> {
    let data = fs::read(file)?;
    let frame = encode(&data)?;
    let restored = decode(&frame)?;

    if restored != data {
        error!("Round trip failed for {}.", file);
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "round trip mismatch",
        ));
    }
    info!(
        "{} round-tripped cleanly through a {} byte frame ({:.1}% of the original).",
        file,
        frame.len(),
        frame.len() as f64 * 100.0 / data.len() as f64
    );
    Ok(())
}
