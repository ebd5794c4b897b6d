use std::io::{self, Write};

/// Formatting context of a nested construct.
///
/// It is passed by value: a construct changing it only affects what it renders itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub wrap: bool,
    pub tab: bool,
    /// Column line breaks return to when tabbing is enabled
    pub indent: usize,
}

impl Layout {
    /// Axioms are rendered as single line frames.
    pub fn single_line(self) -> Self {
        Self {
            wrap: false,
            tab: false,
            ..self
        }
    }

    pub fn indented(self, by: usize) -> Self {
        Self {
            indent: self.indent + by,
            ..self
        }
    }

    pub fn at(self, indent: usize) -> Self {
        Self { indent, ..self }
    }
}

/// A [`Write`] wrapper tracking the column of the next character.
pub(crate) struct ColumnWriter<W: Write> {
    inner: W,
    column: usize,
}

impl<W: Write> ColumnWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, column: 0 }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())?;
        match s.rfind('\n') {
            Some(position) => self.column = s[position + 1..].chars().count(),
            None => self.column += s.chars().count(),
        }
        Ok(())
    }

    pub fn write_char(&mut self, c: char) -> io::Result<()> {
        self.write_str(c.encode_utf8(&mut [0; 4]))
    }

    /// Starts a new line, indented when tabbing is enabled.
    pub fn new_line(&mut self, layout: Layout) -> io::Result<()> {
        self.write_str("\n")?;
        if layout.tab {
            for _ in 0..layout.indent {
                self.write_char(' ')?;
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}
