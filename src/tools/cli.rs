use std::fmt::{Display, Formatter};

use clap::Parser;
use log::{warn, LevelFilter};

/// Zip, Unzip, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "A byte-stream compressor pairing run-length encoding with a Huffman prefix code.",
    long_about = "
    Compresses files by tokenizing runs of repeated bytes and packing the
    tokens with a Huffman code derived from the whole input. The output is a
    single self-describing frame; decompression needs nothing beyond the
    frame itself."
)]
pub struct Args {
    /// Files to process, in order
    #[clap()]
    pub files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Round-trip the input files in memory without writing output
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Be verbose. Repeat for more detail (-vvv is chatty)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,
}

/// User settable options controlling program behavior.
#[derive(Debug)]
pub struct RhOpts {
    /// Names of files to read for input
    pub files: Vec<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
}

/// Read the command line into our options struct and set the log level.
pub fn rhopts_init() -> RhOpts {
    let args = Args::parse();

    if args.compress && args.decompress {
        warn!("Both -z and -d were given. Compressing.");
    }
    let op_mode = if args.compress || !(args.decompress || args.test) {
        Mode::Zip
    } else if args.decompress {
        Mode::Unzip
    } else {
        Mode::Test
    };

    match args.verbose {
        0 => log::set_max_level(LevelFilter::Warn),
        1 => log::set_max_level(LevelFilter::Info),
        2 => log::set_max_level(LevelFilter::Debug),
        _ => log::set_max_level(LevelFilter::Trace),
    };

    RhOpts {
        files: args.files,
        op_mode,
        keep_input_files: args.keep,
        force_overwrite: args.force,
    }
}

#[cfg(test)]
mod test {
    use super::{Args, Mode};
    use clap::Parser;

    #[test]
    fn mode_display_test() {
        assert_eq!(Mode::Unzip.to_string(), "Unzip");
    }

    #[test]
    fn parse_test() {
        let args = Args::try_parse_from(["rlehuff", "-d", "-k", "data.rlh"]).unwrap();
        assert!(args.decompress);
        assert!(args.keep);
        assert_eq!(args.files, vec!["data.rlh".to_string()]);
    }

    #[test]
    fn verbosity_count_test() {
        let args = Args::try_parse_from(["rlehuff", "-vvv", "x"]).unwrap();
        assert_eq!(args.verbose, 3);
    }
}
