use clap::Parser;
use env_logger::Env;
use mgi_readid_convert::{
    Converter, Job, MetadataBuilder, ReaderOptions, SeparatorPolicy, WriterOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert MGI read IDs to Illumina read IDs to ensure compatibility with pipelines.
#[derive(Parser, Debug)]
#[command(name = "convert-readid", version, about)]
struct Args {
    /// Input FASTQ (R1 in paired mode), plain or .gz
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// R2 input FASTQ; switches to paired mode
    #[arg(short = 'I', long)]
    input2: Option<PathBuf>,

    /// Output file (single mode) or prefix for `<prefix>_C_R{1,2}.fastq.gz` (paired mode)
    #[arg(short = 'o', long)]
    output: PathBuf,

    /// i5 barcode of the sample [default: random 12-mer]
    #[arg(long = "i5", alias = "i5-barcode")]
    i5: Option<String>,

    /// i7 barcode of the sample [default: random 12-mer]
    #[arg(long = "i7", alias = "i7-barcode")]
    i7: Option<String>,

    /// Run ID [default: current time as YYYYMMDDHHMMSS]
    #[arg(short = 'r', long)]
    run_id: Option<String>,

    /// Instrument ID [default: R followed by 12 random digits]
    #[arg(short = 'x', long)]
    instrument_id: Option<String>,

    /// gzip level of the output
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: u32,

    /// Require the third line of every record to start with '+'
    #[arg(long)]
    strict_separator: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let meta = MetadataBuilder {
        instrument_id: args.instrument_id,
        run_id: args.run_id,
        i5: args.i5,
        i7: args.i7,
    }
    .resolve();
    log::info!(
        "instrument {} run {} barcodes {}+{}",
        meta.instrument_id,
        meta.run_id,
        meta.i5,
        meta.i7
    );

    let job = match args.input2 {
        Some(r2) => Job::Paired {
            r1: args.input,
            r2,
            prefix: args.output,
        },
        None => Job::Single {
            input: args.input,
            output: args.output,
        },
    };

    let separator = if args.strict_separator {
        SeparatorPolicy::Require
    } else {
        SeparatorPolicy::Ignore
    };
    let converter = Converter::new(meta)
        .reader_options(ReaderOptions { separator })
        .writer_options(WriterOptions { level: args.level });

    match converter.run(&job) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            // still visible with logging filtered off
            eprintln!("convert-readid: {e}");
            ExitCode::FAILURE
        }
    }
}
