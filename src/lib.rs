pub mod cases;
pub mod conclusion;
pub mod datasets;
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipelines;
