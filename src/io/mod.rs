/*! Reading and writing of case files.

- [reader] gets raw cases from exported index files,
- [writer] writes cases, datasets and statistics as pretty JSON,
- [folder] prepares build folders.
!*/
pub mod folder;
pub mod reader;
pub mod writer;

pub use folder::prepare_folder;
pub use reader::{read_index, read_raw_cases};
pub use writer::write_json;
