//! CSV export of path reports.

use std::io::{self, Write};

use super::report::PathReport;

pub const CSV_HEADER: &str = "Path,Total Latency (s),Total Noise (W),SNR (dB)";

/// Write one CSV row per report, preceded by the header.
///
/// Floats use Rust's shortest round-trip formatting; an infinite SNR is
/// written as `inf`.
pub fn write_csv<W: Write>(reports: &[PathReport], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for report in reports {
        writeln!(
            writer,
            "{},{},{},{}",
            escape_field(&report.path_label()),
            report.latency,
            report.noise,
            format_snr(report.snr_db)
        )?;
    }
    writer.flush()
}

pub(crate) fn format_snr(snr_db: f64) -> String {
    if snr_db.is_infinite() && snr_db > 0.0 {
        "inf".to_string()
    } else {
        snr_db.to_string()
    }
}

/// Quote a field containing a separator, quote or line break.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(path: &[&str], latency: f64, noise: f64, snr_db: f64) -> PathReport {
        PathReport {
            path: path.iter().map(|s| s.to_string()).collect(),
            latency,
            noise,
            snr_db,
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let reports = vec![report(&["A", "B"], 1.5e-8, 3e-12, 85.0), report(&["A", "C", "B"], 4.5e-8, 9e-12, 80.5)];
        let mut out = Vec::new();
        write_csv(&reports, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "A->B,0.000000015,0.000000000003,85");
        assert_eq!(lines[2], "A->C->B,0.000000045,0.000000000009,80.5");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn infinite_snr_renders_as_inf() {
        assert_eq!(format_snr(f64::INFINITY), "inf");
        assert_eq!(format_snr(12.25), "12.25");
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        assert_eq!(escape_field("A,B"), "\"A,B\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("A->B"), "A->B");
    }
}
