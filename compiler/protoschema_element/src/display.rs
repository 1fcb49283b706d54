//! Contains the [`IndentDisplay`] trait used to render the elements back to
//! their canonical source text.

use std::fmt::{Formatter, Result, Write};

/// The string written once per indentation level.
pub const INDENT: &str = "  ";

/// Similar to [`std::fmt::Display`] but nested at a given indentation level.
///
/// Every line the implementation writes, including the lines of its nested
/// elements, starts at the given level. Inline values (such as an option's
/// value) don't indent their first line but indent their continuation lines.
pub trait IndentDisplay {
    /// Formats the value at the given indentation level.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn indent_fmt(&self, f: &mut Formatter<'_>, indent: usize) -> Result;
}

pub(crate) fn write_indent(f: &mut Formatter<'_>, indent: usize) -> Result {
    for _ in 0..indent {
        f.write_str(INDENT)?;
    }

    Ok(())
}

/// Writes the documentation as one `//` comment line per documentation line.
pub(crate) fn write_documentation(
    f: &mut Formatter<'_>,
    documentation: &str,
    indent: usize,
) -> Result {
    for line in documentation.lines() {
        write_indent(f, indent)?;

        if line.is_empty() {
            f.write_str("//\n")?;
        } else {
            writeln!(f, "// {line}")?;
        }
    }

    Ok(())
}

/// Writes `items` one per line at `indent`, separated by commas.
pub(crate) fn write_separated_lines<T>(
    f: &mut Formatter<'_>,
    items: &[T],
    indent: usize,
    mut write_item: impl FnMut(&mut Formatter<'_>, &T) -> Result,
) -> Result {
    for (index, item) in items.iter().enumerate() {
        write_indent(f, indent)?;
        write_item(f, item)?;

        if index + 1 < items.len() {
            f.write_char(',')?;
        }

        f.write_char('\n')?;
    }

    Ok(())
}

/// Writes the closing brace of a declaration block opened at `indent`.
///
/// An empty block closes on the same line as its opening brace.
pub(crate) fn write_block_end(
    f: &mut Formatter<'_>,
    indent: usize,
    is_empty: bool,
) -> Result {
    if !is_empty {
        write_indent(f, indent)?;
    }

    f.write_str("}\n")
}
