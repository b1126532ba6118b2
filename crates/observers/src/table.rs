use std::io::{self, Write};

/// Width of every column, including the first one's leading `#` in the header.
const WIDTH: usize = 20;

/// Digits after the decimal point.
const PRECISION: usize = 10;

/// Writes rows of numbers as a fixed-width, right-aligned text table.
///
/// The header is a `#` followed by the column names, and every value is
/// printed in scientific notation with ten digits after the point and a
/// signed exponent of at least two digits, the layout gnuplot and most
/// plotting tools read directly:
///
/// ```text
/// #               Time                Prey            Predator
///     0.0000000000e+00    1.0999978000e+02    1.2000012000e+01
/// ```
#[derive(Debug)]
pub struct TableWriter<W: Write, const N: usize> {
    writer: W,
    rows: usize,
}

impl<W: Write, const N: usize> TableWriter<W, N> {
    /// Creates a table and writes its header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(mut writer: W, names: [&str; N]) -> io::Result<Self> {
        write!(writer, "#")?;
        for (i, name) in names.iter().enumerate() {
            let width = if i == 0 { WIDTH - 1 } else { WIDTH };
            write!(writer, "{name:>width$}")?;
        }
        writeln!(writer)?;

        Ok(Self { writer, rows: 0 })
    }

    /// Writes one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn row(&mut self, values: [f64; N]) -> io::Result<()> {
        for value in values {
            write!(self.writer, "{:>WIDTH$}", scientific(value))?;
        }
        writeln!(self.writer)?;
        self.rows += 1;
        Ok(())
    }

    /// Returns the number of rows written, not counting the header.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes the table and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Formats a value as `d.dddddddddde±XX`.
///
/// Non-finite values are written as `nan`, `inf`, and `-inf`.
#[must_use]
pub fn scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let formatted = format!("{value:.PRECISION$e}");
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };

    format!("{mantissa}e{sign}{digits:0>2}")
}
