//! Portfolio composition labels.
//!
//! Tickers are cosmetic: they label the portfolio for display and have no
//! effect on the simulated distribution, which always uses the single
//! aggregate mean/volatility in [`crate::risk::var::VaRParameters`].
//! Wiring per-ticker statistics into the simulation would be a deliberate
//! modeling extension, not a parsing change here.

/// Parses a comma-separated ticker list into clean symbols.
///
/// Whitespace around each entry is trimmed and empty entries are dropped.
/// No further validation is applied; the symbols are labels only.
///
/// # Example
///
/// ```rust
/// use tailrisk_analytics::portfolio::parse_ticker_list;
///
/// let tickers = parse_ticker_list(" SPY, BND ,,GLD ");
/// assert_eq!(tickers, ["SPY", "BND", "GLD"]);
/// ```
#[must_use]
pub fn parse_ticker_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(
            parse_ticker_list("SPY,BND,GLD,QQQ,VTI"),
            ["SPY", "BND", "GLD", "QQQ", "VTI"]
        );
    }

    #[test]
    fn test_parse_trims_and_drops_empties() {
        assert_eq!(parse_ticker_list("  SPY , ,BND,, "), ["SPY", "BND"]);
        assert!(parse_ticker_list("").is_empty());
        assert!(parse_ticker_list(" , ,, ").is_empty());
    }
}
