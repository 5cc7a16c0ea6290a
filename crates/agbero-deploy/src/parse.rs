//! Parsers for CLI output the pipeline depends on.
//!
//! These are the only places where structured data is scraped from text, and
//! each has an explicit failure mode.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("label '{label}' not found in deploy output")]
    LabelNotFound { label: String },
    #[error("label '{label}' is not followed by a program id")]
    EmptyProgramId { label: String },
    #[error("cannot read a SOL balance from {output:?}")]
    Balance { output: String },
}

/// Extract the program id printed after `label`.
///
/// The first line containing the label wins. The id is the text between the
/// label and any repeated label on the same line, trimmed.
pub fn parse_program_id(output: &str, label: &str) -> Result<String, ParseError> {
    let line = output
        .lines()
        .find(|line| line.contains(label))
        .ok_or_else(|| ParseError::LabelNotFound {
            label: label.to_string(),
        })?;

    let id = line.split(label).nth(1).unwrap_or_default().trim();
    if id.is_empty() {
        return Err(ParseError::EmptyProgramId {
            label: label.to_string(),
        });
    }
    Ok(id.to_string())
}

/// Read the leading number of `solana balance` output (`"1.5 SOL"`).
pub fn parse_balance(output: &str) -> Result<f64, ParseError> {
    output
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .filter(|balance| balance.is_finite())
        .ok_or_else(|| ParseError::Balance {
            output: output.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const LABEL: &str = "Program Id:";

    #[rstest]
    #[case("Program Id: Abc123\n", "Abc123")]
    #[case("Deploying...\nProgram Id:    Abc123   \nDeploy success\n", "Abc123")]
    #[case("Program Id:Abc123", "Abc123")]
    #[case("  Program Id: Abc123\r\n", "Abc123")]
    #[case("Program Id: First\nProgram Id: Second\n", "First")]
    #[case("Program Id: A Program Id: B\n", "A")]
    fn extracts_text_after_label(#[case] output: &str, #[case] expected: &str) {
        assert_eq!(parse_program_id(output, LABEL).unwrap(), expected);
    }

    #[test]
    fn missing_label_is_an_error() {
        let err = parse_program_id("Deploy success\n", LABEL).unwrap_err();
        assert_eq!(
            err,
            ParseError::LabelNotFound {
                label: LABEL.to_string()
            }
        );
    }

    #[test]
    fn label_is_case_sensitive() {
        assert!(parse_program_id("Program ID: Abc\n", LABEL).is_err());
    }

    #[test]
    fn label_without_value_is_an_error() {
        let err = parse_program_id("Program Id:   \n", LABEL).unwrap_err();
        assert!(matches!(err, ParseError::EmptyProgramId { .. }));
    }

    #[rstest]
    #[case("2.5 SOL\n", 2.5)]
    #[case("0 SOL", 0.0)]
    #[case("  10 SOL  ", 10.0)]
    #[case("1.999999999 SOL", 1.999_999_999)]
    fn reads_leading_balance(#[case] output: &str, #[case] expected: f64) {
        assert!((parse_balance(output).unwrap() - expected).abs() < 1e-12);
    }

    #[rstest]
    #[case("")]
    #[case("Error: connection refused")]
    #[case("NaN SOL")]
    fn rejects_unreadable_balance(#[case] output: &str) {
        assert!(matches!(
            parse_balance(output),
            Err(ParseError::Balance { .. })
        ));
    }
}
