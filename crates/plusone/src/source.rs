use plusone_core::transform_with;
use thiserror::Error;

use crate::config::{Config, Separator};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: invalid integer `{token}`")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: unbalanced `[` or `]`")]
    UnbalancedBracket { line: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bracket {
    None,
    Open,
    Closed,
}

/// Parse a list of `i64` values.
///
/// Values are separated by whitespace and/or commas. The whole list may be
/// wrapped in one pair of square brackets, and `#` comments out the rest of
/// a line.
pub fn parse_integers(source: &str) -> Result<Vec<i64>, ParseError> {
    let mut values = Vec::new();
    let mut bracket = Bracket::None;
    let mut last_line = 1;

    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let code = line.split_once('#').map_or(line, |(code, _)| code);

        let tokens = code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());

        for token in tokens {
            let mut rest = token;

            if let Some(after) = rest.strip_prefix('[') {
                if bracket != Bracket::None || !values.is_empty() {
                    return Err(ParseError::UnbalancedBracket { line: line_no });
                }
                bracket = Bracket::Open;
                rest = after;
            }

            let closes = rest.ends_with(']');
            if closes {
                rest = &rest[..rest.len() - 1];
            }

            if bracket == Bracket::Closed {
                return Err(ParseError::InvalidToken {
                    line: line_no,
                    token: token.to_string(),
                });
            }

            if !rest.is_empty() {
                let value = rest.parse::<i64>().map_err(|_| ParseError::InvalidToken {
                    line: line_no,
                    token: token.to_string(),
                })?;
                values.push(value);
            }

            if closes {
                if bracket != Bracket::Open {
                    return Err(ParseError::UnbalancedBracket { line: line_no });
                }
                bracket = Bracket::Closed;
            }
        }
    }

    if bracket == Bracket::Open {
        return Err(ParseError::UnbalancedBracket { line: last_line });
    }

    Ok(values)
}

/// The result of transforming one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kept: Vec<i64>,
    /// Number of values read from the input
    pub total: usize,
}

impl Outcome {
    /// Renders the kept values, or `kept/total` when `count` is set.
    pub fn render(&self, separator: Separator, count: bool) -> String {
        if count {
            return format!("{}/{}\n", self.kept.len(), self.total);
        }
        if self.kept.is_empty() {
            return String::new();
        }
        let joined = self
            .kept
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        format!("{joined}\n")
    }
}

/// Parse `source` and transform it with the configured overflow policy.
pub fn process_source(source: &str, config: &Config) -> crate::Result<Outcome> {
    let values = parse_integers(source)?;
    let kept = transform_with(&values, config.overflow)?;
    Ok(Outcome {
        kept,
        total: values.len(),
    })
}
