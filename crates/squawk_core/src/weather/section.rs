//! Slicing combined briefings into per-kind sections.

use super::ReportKind;

fn contains_any(line: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| line.contains(marker))
}

/// Lines of `full_text` that belong to `kind`, joined with newlines.
///
/// METAR lines are filtered individually: every line mentioning `METAR` or
/// `SPECI` is kept wherever it appears. TAF and ATIS are captured as a block
/// starting at the first line carrying the kind's marker and ending before the
/// next line carrying another kind's marker. Returns an empty string when the
/// marker never appears.
pub fn extract_section(full_text: &str, kind: ReportKind) -> String {
    match kind {
        ReportKind::Metar => full_text
            .lines()
            .filter(|line| contains_any(line, kind.markers()))
            .collect::<Vec<_>>()
            .join("\n"),
        ReportKind::Taf | ReportKind::Atis => capture_block(full_text, kind),
    }
}

fn capture_block(full_text: &str, kind: ReportKind) -> String {
    let foreign: Vec<&str> = ReportKind::ALL
        .into_iter()
        .filter(|other| *other != kind)
        .flat_map(|other| other.markers().iter().copied())
        .collect();

    let mut captured = Vec::new();
    let mut capturing = false;

    for line in full_text.lines() {
        if capturing {
            if contains_any(line, &foreign) {
                break;
            }
            captured.push(line);
        } else if contains_any(line, kind.markers()) {
            capturing = true;
            captured.push(line);
        }
    }

    captured.join("\n")
}
