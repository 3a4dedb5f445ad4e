//! CLI command implementations
//!
//! Each submodule implements a specific CLI command and writes its result
//! to the supplied writer in the configured [`OutputFormat`].

pub mod analyse;
pub mod path;
pub mod stats;

use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// Writes `value` as pretty JSON followed by a newline.
fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes a two-column box table.
fn write_table<W: Write>(out: &mut W, title: &str, rows: &[(&str, String)]) -> Result<()> {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0).max(8);
    let value_width = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0)
        .max(title.chars().count().saturating_sub(key_width + 3));

    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            mid,
            "─".repeat(value_width + 2),
            right
        )
    };

    writeln!(out, "{}", title)?;
    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    for (key, value) in rows {
        writeln!(out, "│ {:<kw$} │ {:>vw$} │", key, value, kw = key_width, vw = value_width)?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

/// Formats a float for table output.
fn fmt_f64(x: f64) -> String {
    format!("{:.4}", x)
}

/// Formats `[up, neutral, down]` percentages.
fn fmt_percentages(up: u32, neutral: u32, down: u32) -> String {
    format!("{}% / {}% / {}%", up, neutral, down)
}

/// Dispatches on the output format.
fn emit<W, T, F>(out: &mut W, format: OutputFormat, value: &T, table: F) -> Result<()>
where
    W: Write,
    T: Serialize,
    F: FnOnce(&mut W) -> Result<()>,
{
    match format {
        OutputFormat::Json => write_json(out, value),
        OutputFormat::Table => table(out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let mut buffer = Vec::new();
        write_table(
            &mut buffer,
            "Title",
            &[("alpha", "1".to_string()), ("b", "22.5".to_string())],
        )
        .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title");
        assert_eq!(lines.len(), 5);
        assert!(lines[2].contains("alpha"));
        assert!(lines[3].ends_with("22.5 │"));
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
    }
}
