use std::num::ParseFloatError;

/// Reason a text token could not become a number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TokenError {
    #[display("{_0}")]
    Malformed(ParseFloatError),
    #[display("value is not finite")]
    NonFinite,
}

/// A token dropped from a row, with its position among the row's fields.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invalid number {token:?} in column {column}: {error}")]
pub struct RejectedToken {
    /// 0-based position of the token in its row.
    pub column: usize,
    pub token: String,
    pub error: TokenError,
}

/// Outcome of parsing one row of tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedRow {
    /// Successfully parsed values, in their original order.
    pub values: Vec<f64>,
    /// Tokens that were dropped, in their original order.
    pub rejected: Vec<RejectedToken>,
}

/// Parses a single token as a finite decimal floating-point number.
///
/// Accepts an optional sign, an optional fractional part and an optional
/// exponent. The token is not trimmed. Literals that parse to an infinite or
/// NaN value (`inf`, `NaN`, `1e400`) are rejected.
///
/// ```
/// # use rowstat_analysis::numeric::{parse_number, TokenError};
/// assert_eq!(parse_number("-1.5e2"), Ok(-150.0));
/// assert_eq!(parse_number("inf"), Err(TokenError::NonFinite));
/// assert!(matches!(parse_number(" 1"), Err(TokenError::Malformed(_))));
/// ```
pub fn parse_number(token: &str) -> Result<f64, TokenError> {
    let value = token.parse::<f64>().map_err(TokenError::Malformed)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TokenError::NonFinite)
    }
}

/// Parses a row of tokens, keeping the valid numbers and recording the rest.
///
/// The values are a subsequence of the input by position; every other token
/// appears in [`ParsedRow::rejected`].
///
/// ```
/// # use rowstat_analysis::numeric::parse_tokens;
/// let parsed = parse_tokens(["1", "x", "3"]);
/// assert_eq!(parsed.values, [1.0, 3.0]);
/// assert_eq!(parsed.rejected.len(), 1);
/// assert_eq!(parsed.rejected[0].column, 1);
/// ```
#[must_use]
pub fn parse_tokens<I, S>(tokens: I) -> ParsedRow
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = ParsedRow::default();
    for (column, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();
        match parse_number(token) {
            Ok(value) => parsed.values.push(value),
            Err(error) => parsed.rejected.push(RejectedToken {
                column,
                token: token.to_owned(),
                error,
            }),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_decimal_literal_forms() {
        for (token, expected) in [
            ("42", 42.0),
            ("-7", -7.0),
            ("+3.25", 3.25),
            (".5", 0.5),
            ("2.", 2.0),
            ("1e3", 1000.0),
            ("-2.5E-1", -0.25),
        ] {
            assert_eq!(parse_number(token), Ok(expected), "token {token:?}");
        }
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in ["", "x", "1,5", "1.2.3", " 4", "4 ", "0x10", "--1"] {
            assert!(
                matches!(parse_number(token), Err(TokenError::Malformed(_))),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_rejects_non_finite_values() {
        for token in ["inf", "-infinity", "NaN", "1e400"] {
            assert_eq!(
                parse_number(token),
                Err(TokenError::NonFinite),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn test_drops_invalid_token_and_keeps_order() {
        let parsed = parse_tokens(["1", "x", "3"]);
        assert_eq!(parsed.values, [1.0, 3.0]);
        assert_eq!(parsed.rejected.len(), 1);

        let rejected = &parsed.rejected[0];
        assert_eq!(rejected.column, 1);
        assert_eq!(rejected.token, "x");
        assert!(matches!(rejected.error, TokenError::Malformed(_)));
    }

    #[test]
    fn test_all_tokens_invalid_gives_empty_values() {
        let parsed = parse_tokens(["a", "b"]);
        assert!(parsed.values.is_empty());
        assert_eq!(
            parsed
                .rejected
                .iter()
                .map(|r| r.column)
                .collect::<Vec<_>>(),
            [0, 1]
        );
    }

    #[test]
    fn test_no_tokens() {
        let parsed = parse_tokens(Vec::<String>::new());
        assert_eq!(parsed, ParsedRow::default());
    }

    #[test]
    fn test_rejected_token_message() {
        let parsed = parse_tokens(["1", "nan"]);
        assert_eq!(
            parsed.rejected[0].to_string(),
            "invalid number \"nan\" in column 1: value is not finite"
        );
    }
}
