//! # echr-cases
//!
//! Filters and formats the ECHR cases information of a build folder,
//! and generates the datasets used to train outcome classifiers.
//!
//! ## Getting started
//!
//! ```sh
//! echr-cases 0.1.0
//! ECHR cases information tool.
//!
//! USAGE:
//!     echr-cases <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     conclusion    Parse a conclusion and print its elements
//!     filter        Filter and format ECHR cases information
//!     help          Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=info`).
use echr_cases::conclusion;
use echr_cases::error::Error;
use echr_cases::pipelines::{CasesInfo, Pipeline};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::EchrCases::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::EchrCases::Filter(f) => {
            let p = CasesInfo::new(f.build, f.data, f.force);
            let summary = p.run()?;
            info!(
                "{} cases, {} outcome-consistent, {} articles, {} multilabel, {} multiclass",
                summary.cases,
                summary.consistent,
                summary.articles.len(),
                summary.multilabel,
                summary.multiclass
            );
        }

        cli::EchrCases::Conclusion(c) => {
            let elements = conclusion::parse(&c.conclusion);
            println!("{}", serde_json::to_string_pretty(&elements)?);
        }
    };
    Ok(())
}
