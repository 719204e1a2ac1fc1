use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{ConvergenceData, Record, METHOD_COUNT};

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// A malformed line in a results file.
///
/// Fatal to the load: no dataset is built from a file containing one, and
/// there is no partial-result mode.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected at least 5 fields, found {found}")]
    MissingFields { line: usize, found: usize },

    #[error("line {line}: column {column} value '{token}' is not a number")]
    BadNumber {
        line: usize,
        column: usize,
        token: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a results file.
///
/// Format: one record per line, `<N> <mc1> <mc2> <mc4> <mc5>`,
/// whitespace-separated. The leading token is kept as an opaque label; the
/// four following tokens must parse as floats.
pub fn load_file(path: &Path) -> Result<ConvergenceData> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let data = parse_results(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(data)
}

/// Parse the full text of a results file into a dataset.
///
/// Blank lines are skipped. An empty (or all-blank) file is accepted and
/// yields an empty dataset.
pub fn parse_results(text: &str) -> Result<ConvergenceData, ParseError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, idx + 1)?);
    }
    Ok(ConvergenceData::from_records(records))
}

/// Parse one non-blank line into a [`Record`].
///
/// The first token is the sample-size label, the next four the per-method
/// values. Tokens past the fifth are ignored.
fn parse_line(line: &str, line_no: usize) -> Result<Record, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < METHOD_COUNT + 1 {
        return Err(ParseError::MissingFields {
            line: line_no,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; METHOD_COUNT];
    for (col, slot) in values.iter_mut().enumerate() {
        let token = tokens[col + 1];
        *slot = token.parse::<f64>().map_err(|_| ParseError::BadNumber {
            line: line_no,
            column: col + 1,
            token: token.to_string(),
        })?;
    }

    Ok(Record {
        label: tokens[0].to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::METHOD_LABELS;

    #[test]
    fn parses_records_in_file_order() {
        let data = parse_results("10 0.1 0.2 0.3 0.4\n20 0.5 0.6 0.7 0.8\n").unwrap();

        assert_eq!(data.labels, vec!["10", "20"]);
        assert_eq!(data.series[0].values, vec![0.1, 0.5]);
        assert_eq!(data.series[1].values, vec![0.2, 0.6]);
        assert_eq!(data.series[2].values, vec![0.3, 0.7]);
        assert_eq!(data.series[3].values, vec![0.4, 0.8]);
        for (series, label) in data.series.iter().zip(METHOD_LABELS) {
            assert_eq!(series.name, label);
        }
    }

    #[test]
    fn series_lengths_match_line_count() {
        let text = "1000 1 2 3 4\n5000 5 6 7 8\n10000 9 10 11 12\n";
        let data = parse_results(text).unwrap();

        assert_eq!(data.len(), 3);
        for series in &data.series {
            assert_eq!(series.values.len(), 3);
        }
    }

    #[test]
    fn too_few_fields_is_fatal() {
        let err = parse_results("10 0.1 0.2 0.3 0.4\n20 0.5 0.6\n").unwrap_err();
        assert_eq!(err, ParseError::MissingFields { line: 2, found: 3 });
    }

    #[test]
    fn non_numeric_value_is_fatal() {
        let err = parse_results("10 0.1 oops 0.3 0.4\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::BadNumber {
                line: 1,
                column: 2,
                token: "oops".into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "line 1: column 2 value 'oops' is not a number"
        );
    }

    #[test]
    fn empty_file_yields_empty_dataset() {
        let data = parse_results("").unwrap();

        assert!(data.is_empty());
        for series in &data.series {
            assert!(series.values.is_empty());
        }
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = parse_results("\n10 0.1 0.2 0.3 0.4\n\n   \n20 0.5 0.6 0.7 0.8\n").unwrap();
        assert_eq!(data.labels, vec!["10", "20"]);
    }

    #[test]
    fn tokens_past_the_fifth_are_ignored() {
        let data = parse_results("10 0.1 0.2 0.3 0.4 trailing junk\n").unwrap();
        assert_eq!(data.series[3].values, vec![0.4]);
    }

    #[test]
    fn scientific_notation_parses() {
        let data = parse_results("1000 2.4E-4 1.5E-4 6.0E-5 4.5E-5\n").unwrap();
        assert_eq!(data.series[0].values, vec![2.4e-4]);
        assert_eq!(data.series[3].values, vec![4.5e-5]);
    }

    #[test]
    fn tabs_and_repeated_spaces_split() {
        let data = parse_results("10\t0.1  0.2\t\t0.3 0.4\n").unwrap();
        assert_eq!(data.labels, vec!["10"]);
        assert_eq!(data.series[2].values, vec![0.3]);
    }

    #[test]
    fn diagnostic_points_at_the_offending_line() {
        let err = parse_results("10 0.1 0.2 0.3 0.4\n\n30 0.5 0.6 0.7\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: expected at least 5 fields, found 4"
        );
    }
}
