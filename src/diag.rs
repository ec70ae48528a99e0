use log::info;

use name_reconcile::{MatchRules, Reconciler};
use snafu::{prelude::*, Snafu};

use std::fs;

use text_diff::print_diff;

use crate::args::Args;
use crate::diag::io_geojson::read_reference_names;
use crate::diag::io_votes::read_vote_table;
use crate::diag::report::{diagnostic_csv_string, render_table};
use crate::diag::summary::summarize;

pub mod io_geojson;
pub mod io_votes;
pub mod report;
pub mod summary;

#[derive(Debug, Snafu)]
pub enum DiagError {
    #[snafu(display("Error opening vote table {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error parsing vote table line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("The vote table does not have a {column:?} column"))]
    MissingColumn { column: String },
    #[snafu(display("Invalid vote count {value:?} at line {lineno}"))]
    BadVoteCount { value: String, lineno: usize },
    #[snafu(display("Error opening {path}"))]
    OpeningFile {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display(""))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("The boundary dataset does not have the expected GeoJSON shape: {message}"))]
    GeoJsonShape { message: String },
    #[snafu(display("Error serializing the diagnostic"))]
    CsvWrite { source: csv::Error },
    #[snafu(display("Error writing {path}"))]
    IoWrite {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display(""))]
    Reconcile {
        source: name_reconcile::ReconcileErrors,
    },
    #[snafu(display("The produced diagnostic differs from the reference file {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type DiagResult<T> = Result<T, DiagError>;

pub fn run_diagnostic(args: &Args) -> DiagResult<()> {
    let records = read_vote_table(&args.votes, args.delimiter)?;
    info!(
        "run_diagnostic: {:?} vote records read from {:?}",
        records.len(),
        args.votes
    );

    let reference_names = read_reference_names(&args.geojson)?;
    info!(
        "run_diagnostic: {:?} reference names read from {:?}",
        reference_names.len(),
        args.geojson
    );

    let rules = MatchRules {
        similarity_threshold: args.threshold,
    };
    let reconciler = Reconciler::new(&reference_names, &rules).context(ReconcileSnafu {})?;

    let candidates: Vec<String> = records.iter().map(|r| r.cidade.clone()).collect();
    let results = reconciler.run(&candidates).context(ReconcileSnafu {})?;
    info!(
        "run_diagnostic: {:?} municipality names need attention",
        results.len()
    );

    println!("{}", render_table(&results));

    let summary = summarize(
        &records,
        args.inspetoria.as_deref(),
        args.cidade.as_deref(),
        args.top,
    );
    println!("{}", summary.render());

    let diag_csv = diagnostic_csv_string(&results)?;
    if let Some(out) = &args.out {
        if out == "stdout" {
            println!("{}", diag_csv);
        } else {
            fs::write(out, &diag_csv).context(IoWriteSnafu { path: out.clone() })?;
            info!("run_diagnostic: diagnostic written to {:?}", out);
        }
    }

    // The reference diagnostic, if provided for comparison
    if let Some(reference_p) = &args.reference {
        let expected = fs::read_to_string(reference_p).context(OpeningFileSnafu {
            path: reference_p.clone(),
        })?;
        if expected != diag_csv {
            log::warn!("Found differences with the reference diagnostic");
            print_diff(expected.as_str(), diag_csv.as_str(), "\n");
            return ReferenceMismatchSnafu {
                path: reference_p.clone(),
            }
            .fail();
        }
    }

    Ok(())
}
