//! Aligned `name: value (description)` report lines
//!
//! Every decoded field is printed as one line. Names are padded to a fixed
//! column so values line up; names longer than the column push the value to
//! the right and the value column shrinks to compensate.

use std::fmt;
use std::io::{self, Write};

use crate::lookup::{self, LookupTable};

/// Width of the name column, including the colon
pub const NAME_WIDTH: usize = 47;

/// Width the value is right-aligned to
pub const VALUE_WIDTH: usize = 10;

/// Numeric base used to render a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// Unsigned decimal
    Decimal,
    /// Hexadecimal with `0x` prefix
    Hex,
}

impl Radix {
    /// Radix chosen by "hex" fields: single digit values stay decimal
    pub fn auto(value: u32) -> Self {
        if value >= 10 {
            Self::Hex
        } else {
            Self::Decimal
        }
    }
}

/// Render `value` without any padding
pub fn render_value(value: u32, radix: Radix) -> String {
    match radix {
        Radix::Decimal => value.to_string(),
        // Alternate hex form prints zero without a prefix
        Radix::Hex if value == 0 => "0".into(),
        Radix::Hex => format!("{:#x}", value),
    }
}

/// Compute `(padding after the colon, value field width)`
///
/// `rendered_len` is the length of the unpadded value and only matters when
/// the name overflows the name column.
pub fn column_widths(name_len: usize, rendered_len: usize) -> (usize, usize) {
    let indent = NAME_WIDTH as isize - name_len as isize;
    if indent >= 1 {
        return (indent as usize, VALUE_WIDTH);
    }

    let width = VALUE_WIDTH as isize + rendered_len as isize + indent - 2;
    (1, width.max(0) as usize)
}

/// Format one report line, without the trailing newline
pub fn format_field(name: &str, value: u32, description: Option<&str>, radix: Radix) -> String {
    let rendered = render_value(value, radix);
    let (indent, width) = column_widths(name.len(), rendered.len());

    let mut line = format!("{}:{:indent$}{:>width$}", name, "", rendered);
    if let Some(description) = description {
        line.push_str(" (");
        line.push_str(description);
        line.push(')');
    }
    line
}

/// Writes report lines to an output stream
pub struct FieldWriter<'a> {
    out: &'a mut dyn Write,
    lines: usize,
}

impl<'a> FieldWriter<'a> {
    /// Wrap an output stream
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out, lines: 0 }
    }

    /// Number of field lines written so far
    pub fn field_count(&self) -> usize {
        self.lines
    }

    /// Write a field with an explicit radix
    pub fn field(
        &mut self,
        value: u32,
        name: &str,
        description: Option<&str>,
        radix: Radix,
    ) -> io::Result<()> {
        let line = format_field(name, value, description, radix);
        log::trace!("field {:?} = {:#x}", name, value);
        self.lines += 1;
        writeln!(self.out, "{}", line)
    }

    /// Write a decimal field
    pub fn dec(&mut self, value: u32, name: &str, description: Option<&str>) -> io::Result<()> {
        self.field(value, name, description, Radix::Decimal)
    }

    /// Write a field in hex, or decimal when the value is a single digit
    pub fn hex(&mut self, value: u32, name: &str, description: Option<&str>) -> io::Result<()> {
        self.field(value, name, description, Radix::auto(value))
    }

    /// Write a field whose description comes from a lookup table
    pub fn lookup(&mut self, value: u32, name: &str, table: LookupTable) -> io::Result<()> {
        self.hex(value, name, Some(lookup::describe(table, value)))
    }

    /// Write free-form text that is not a field line
    pub fn raw(&mut self, args: fmt::Arguments<'_>) -> io::Result<()> {
        self.out.write_fmt(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_alignment() {
        let line = format_field("Major", 1, None, Radix::Decimal);
        assert_eq!(line, format!("Major:{}{:>10}", " ".repeat(42), 1));
        assert_eq!(line.len(), NAME_WIDTH + 1 + VALUE_WIDTH);
    }

    #[test]
    fn test_hex_and_description() {
        let line = format_field(
            "Signature",
            0x5044_4653,
            Some("Must be 0x50444653 ('S', 'F', 'D', 'P')"),
            Radix::Hex,
        );
        assert!(line.starts_with("Signature:"));
        assert!(line.ends_with("0x50444653 (Must be 0x50444653 ('S', 'F', 'D', 'P'))"));
        assert_eq!(line.find("0x5").unwrap(), NAME_WIDTH + 1);
    }

    #[test]
    fn test_no_description_has_no_suffix() {
        let line = format_field("Offset", 16, None, Radix::Decimal);
        assert!(line.ends_with("16"));
        assert!(!line.contains('('));
    }

    #[test]
    fn test_auto_radix() {
        assert_eq!(Radix::auto(0), Radix::Decimal);
        assert_eq!(Radix::auto(9), Radix::Decimal);
        assert_eq!(Radix::auto(10), Radix::Hex);
        assert_eq!(render_value(9, Radix::auto(9)), "9");
        assert_eq!(render_value(10, Radix::auto(10)), "0xa");
        assert_eq!(render_value(0, Radix::Hex), "0");
    }

    #[test]
    fn test_long_name_collapses_padding() {
        // 64 characters, 17 over the name column
        let name = "Write Enable Instruction for Writing to Volatile Status Register";
        assert_eq!(column_widths(name.len(), 1), (1, 0));

        let line = format_field(name, 1, Some("06h"), Radix::Decimal);
        assert_eq!(line, format!("{}: 1 (06h)", name));
    }

    #[test]
    fn test_name_at_column_edge() {
        // Exactly NAME_WIDTH - 1 characters still gets one space of padding
        assert_eq!(column_widths(NAME_WIDTH - 1, 3), (1, VALUE_WIDTH));
        // One more and the value column narrows: 10 + 3 + 0 - 2
        assert_eq!(column_widths(NAME_WIDTH, 3), (1, 11));
        assert_eq!(column_widths(NAME_WIDTH + 5, 3), (1, 6));
        assert_eq!(column_widths(NAME_WIDTH + 100, 3), (1, 0));
    }

    #[test]
    fn test_writer_counts_fields() {
        let mut out: Vec<u8> = Vec::new();
        let mut w = FieldWriter::new(&mut out);
        w.raw(format_args!("\nheading\n")).unwrap();
        w.dec(5, "A", None).unwrap();
        w.hex(255, "B", Some("x")).unwrap();
        assert_eq!(w.field_count(), 2);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[3].ends_with("0xff (x)"));
    }
}
