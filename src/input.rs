//! Reads the prediction records.

use std::io::BufRead;

use crate::instance::Record;
use crate::prelude::*;

/// Parses JSON lines into records, skipping blank lines.
pub fn read_records(reader: impl BufRead) -> impl Iterator<Item = Result<Record>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let line_number = index + 1;
            match line {
                Ok(line) if line.trim().is_empty() => None,
                Ok(line) => Some(
                    serde_json::from_str(&line)
                        .with_context(|| format!("malformed record on line {line_number}")),
                ),
                Err(error) => Some(Err(
                    anyhow::Error::new(error).context(format!("failed to read line {line_number}")),
                )),
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_records_ok() -> Result {
        let input = "{\"predicted\": 2.0, \"actual\": 1.0}\n\n{\"actual\": 3.0}\n";
        let records = read_records(input.as_bytes()).collect::<Result<Vec<_>>>()?;
        assert_eq!(
            records,
            [
                Record {
                    predicted: Some(2.0),
                    actual: Some(1.0),
                },
                Record {
                    predicted: None,
                    actual: Some(3.0),
                },
            ],
        );
        Ok(())
    }

    #[test]
    fn malformed_record_reports_line() {
        let input = "{\"predicted\": 2.0}\nnot json\n";
        let error = read_records(input.as_bytes())
            .collect::<Result<Vec<_>>>()
            .unwrap_err();
        assert_eq!(error.to_string(), "malformed record on line 2");
    }
}
