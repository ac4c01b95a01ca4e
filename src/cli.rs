//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "echr-cases", about = "ECHR cases information tool.")]
/// Holds every command that is callable by the `echr-cases` command.
pub enum EchrCases {
    #[structopt(about = "Filter and format ECHR cases information")]
    Filter(Filter),
    #[structopt(about = "Parse a conclusion and print its elements")]
    Conclusion(Conclusion),
}

#[derive(Debug, StructOpt)]
/// Filter command and parameters.
///
/// ```sh
/// echr-cases-filter 0.1.0
/// Filter and format ECHR cases information
///
/// USAGE:
///     echr-cases filter [FLAGS] [OPTIONS]
///
/// FLAGS:
///     -f, --force      clear the output folder first
///     -h, --help       Prints help information
///     -V, --version    Prints version information
///
/// OPTIONS:
///         --build <build>    build folder [default: ./build/echr_database/]
///         --data <data>      folder holding countries.json and originatingbody.json [default: data]
/// ```
pub struct Filter {
    #[structopt(
        parse(from_os_str),
        long = "build",
        help = "build folder",
        default_value = "./build/echr_database/"
    )]
    pub build: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "data",
        help = "folder holding countries.json and originatingbody.json",
        default_value = "data"
    )]
    pub data: PathBuf,
    #[structopt(short = "f", long = "force", help = "clear the output folder first")]
    pub force: bool,
}

#[derive(Debug, StructOpt)]
/// Conclusion command and parameters.
pub struct Conclusion {
    #[structopt(help = "conclusion narrative, e.g. \"Violation of Article 3;No violation of Article 13\"")]
    pub conclusion: String,
}
