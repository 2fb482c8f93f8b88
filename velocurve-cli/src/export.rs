//! Plot data export
//!
//! Two whitespace-separated columns with a `#` title line, the layout
//! gnuplot reads with `plot '<file>' with linespoints`.

use std::io::{self, Write};

use velocurve_core::motion::RampSequencer;
use velocurve_core::RampCurve;

use crate::config::OutputFormat;

/// Write `curve` as plot data
///
/// Every line of `title` becomes its own `#` comment line. Timeline rows
/// are produced by sequencing the curve, one row per tick. Returns the
/// number of data rows written.
pub fn write_plot_data<W: Write>(
    out: &mut W,
    curve: &RampCurve,
    title: &str,
    format: OutputFormat,
    tick_us: u32,
) -> io::Result<usize> {
    write_title(out, title)?;

    match format {
        OutputFormat::Index => {
            for (i, value) in curve.iter().enumerate() {
                writeln!(out, "{} {}", i, value)?;
            }
            Ok(curve.len())
        }
        OutputFormat::Timeline => {
            let mut sequencer = RampSequencer::new(curve.clone());
            sequencer.start();

            let mut rows = 0;
            while let Some(value) = sequencer.next_setpoint() {
                let elapsed_us = rows as u64 * tick_us as u64;
                writeln!(out, "{} {}", elapsed_us, value)?;
                rows += 1;
            }
            Ok(rows)
        }
    }
}

/// Write `title` as comment lines, never as data
fn write_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let mut lines = title.lines().peekable();
    if lines.peek().is_none() {
        return writeln!(out, "#");
    }
    for line in lines {
        writeln!(out, "# {}", line.replace('\r', " "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use velocurve_core::generate;

    fn render(curve: &RampCurve, format: OutputFormat, tick_us: u32) -> (usize, Vec<String>) {
        render_titled(curve, "Ramp", format, tick_us)
    }

    fn render_titled(
        curve: &RampCurve,
        title: &str,
        format: OutputFormat,
        tick_us: u32,
    ) -> (usize, Vec<String>) {
        let mut buf = Vec::new();
        let rows = write_plot_data(&mut buf, curve, title, format, tick_us).unwrap();
        let text = String::from_utf8(buf).unwrap();
        (rows, text.lines().map(str::to_string).collect())
    }

    #[test]
    fn writes_index_rows() {
        let curve = generate(0.0, -30.0, 10).unwrap();
        let (rows, lines) = render(&curve, OutputFormat::Index, 1100);

        assert_eq!(rows, 11);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "# Ramp");
        assert_eq!(lines[1], "0 0");
        assert!(lines[11].starts_with("10 -28.92"));
    }

    #[test]
    fn writes_timeline_rows() {
        let curve = generate(5.0, 5.0, 3).unwrap();
        let (rows, lines) = render(&curve, OutputFormat::Timeline, 1100);

        assert_eq!(rows, 4);
        assert_eq!(lines[1..], ["0 5", "1100 5", "2200 5", "3300 5"]);
    }

    #[test]
    fn values_round_trip_through_text() {
        let curve = generate(1.0, 2.0, 5).unwrap();
        let (_, lines) = render(&curve, OutputFormat::Index, 1);

        for (line, expected) in lines[1..].iter().zip(curve.iter()) {
            let value: f64 = line.split_whitespace().nth(1).unwrap().parse().unwrap();
            assert_eq!(value, *expected);
        }
    }

    fn data_rows(lines: &[String]) -> Vec<&String> {
        lines.iter().filter(|l| !l.starts_with('#')).collect()
    }

    #[test]
    fn multiline_title_stays_in_header() {
        let curve = generate(0.0, -30.0, 2).unwrap();
        let (rows, lines) = render_titled(&curve, "Ramp\n99 1234", OutputFormat::Index, 1);

        assert_eq!(rows, 3);
        assert_eq!(lines[0], "# Ramp");
        assert_eq!(lines[1], "# 99 1234");

        let data = data_rows(&lines);
        assert_eq!(data.len(), curve.len());
        assert_eq!(data[0], "0 0");
    }

    #[test]
    fn carriage_returns_stay_in_header() {
        let curve = generate(1.0, 2.0, 1).unwrap();
        let (_, lines) = render_titled(&curve, "a\r\nb\rc", OutputFormat::Timeline, 10);

        assert_eq!(lines[0], "# a");
        assert_eq!(lines[1], "# b c");
        assert_eq!(data_rows(&lines).len(), curve.len());
    }

    #[test]
    fn empty_title_writes_bare_comment() {
        let curve = generate(1.0, 2.0, 1).unwrap();
        let (_, lines) = render_titled(&curve, "", OutputFormat::Index, 1);

        assert_eq!(lines[0], "#");
        assert_eq!(data_rows(&lines).len(), curve.len());
    }
}
