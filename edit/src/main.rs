//! A CLI tool for rewriting attribute values of DICOM files.
use clap::Parser;
use dcmedit::{anonymize_edits, modify_file, modify_tree, parse_edit_args};
use dcmedit_dictionary_std::uids;
use dcmedit_object::{OddLength, OpenFileOptions};
use snafu::{whatever, Report, ResultExt, Whatever};
use std::path::PathBuf;
use tracing::{error, info, warn, Level};

/// Rewrite attribute values of DICOM files
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM file to read (a directory with --recursive)
    input: PathBuf,
    /// Where to write the edited file (a directory with --recursive),
    /// may be the same as the input
    output: PathBuf,
    /// Attribute edits as TAG=VALUE,
    /// where TAG is 8 hexadecimal digits (e.g. 00100010=DOE^JOHN)
    edits: Vec<String>,
    /// Replace patient and study identifying attributes,
    /// before any other edits
    #[clap(long = "anonymize")]
    anonymize: bool,
    /// Edit every DICOM file under the input directory
    #[clap(short = 'r', long = "recursive")]
    recursive: bool,
    /// Read data sets without preamble and file meta group
    #[clap(long = "headerless")]
    headerless: bool,
    /// The transfer syntax of headerless data sets
    /// (default is implicit VR little endian)
    #[clap(long = "transfer-syntax", requires = "headerless")]
    transfer_syntax: Option<String>,
    /// Accept primitive values of odd length
    #[clap(long = "accept-odd-lengths")]
    accept_odd_lengths: bool,
    /// Verbose mode
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    run().unwrap_or_else(|e| {
        error!("{}", Report::from_error(e));
        std::process::exit(-2);
    });
}

fn run() -> Result<(), Whatever> {
    let App {
        input,
        output,
        edits,
        anonymize,
        recursive,
        headerless,
        transfer_syntax,
        accept_odd_lengths,
        verbose,
    } = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let list = parse_edit_args(&edits);
    let mut all_edits = if anonymize {
        anonymize_edits()
    } else {
        Vec::new()
    };
    all_edits.extend(list.edits);
    if all_edits.is_empty() {
        warn!("No edits given, the output will be a plain rewrite of the input");
    }

    let mut options = OpenFileOptions::new();
    if headerless {
        options = options.headerless(
            transfer_syntax.unwrap_or_else(|| uids::IMPLICIT_VR_LITTLE_ENDIAN.to_string()),
        );
    }
    if accept_odd_lengths {
        options = options.odd_length(OddLength::Accept);
    }

    if recursive {
        let report = modify_tree(&input, &output, &all_edits, &options);
        info!(
            "{} files edited, {} skipped, {} failed",
            report.edited.len(),
            report.skipped.len(),
            report.failed.len()
        );
        if !report.is_success() {
            let failed = report.failed.len();
            for (path, e) in report.failed {
                error!("{}: {}", path.display(), Report::from_error(e));
            }
            whatever!("{} files could not be edited", failed);
        }
    } else {
        let report = modify_file(&input, &output, &all_edits, &options)
            .whatever_context("Could not edit file")?;
        info!(
            "{}: {} attributes changed, written to {}",
            input.display(),
            report.len(),
            output.display()
        );
    }

    Ok(())
}
