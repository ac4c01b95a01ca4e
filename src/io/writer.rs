//! JSON writer.
//!
//! Values are written with sorted keys and a 4-space indentation.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Error;

/// Serialize `value` into `writer`.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<(), Error> {
    // going through Value sorts object keys
    let value = serde_json::to_value(value)?;
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut ser)?;
    Ok(())
}

/// Write `value` into a new file at `path`.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    debug!("writing {:?}", path);
    let mut writer = BufWriter::new(File::create(path)?);
    to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
