// Serializacja wyników do JSON w historycznym formacie wyjścia:
// separatory ", " i ": ", znaki spoza ASCII zapisywane dosłownie.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;

use crate::error::Result;

/// Komunikat zwracany, gdy nie podano słowa.
pub const NO_WORD_PROVIDED: &str = "No word provided";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorPayload { error: error.into() }
    }

    pub fn no_word_provided() -> Self {
        Self::new(NO_WORD_PROVIDED)
    }
}

/// Formatter w stylu kompaktowym, ale ze spacją po przecinku i dwukropku.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Zapisuje wartość jako JSON do `writer`.
pub fn write_json<W: io::Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    let mut ser = serde_json::Serializer::with_formatter(writer, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(())
}
