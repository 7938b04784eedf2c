//! Language byte counts turned into display percentages.

use std::collections::BTreeMap;

use serde::Serialize;

/// One bar segment of the language breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    /// Language name as reported by GitHub.
    pub name: String,
    /// Bytes of source in this language.
    pub bytes: u64,
    /// Share of all bytes, in percent.
    pub percentage: f64,
}

/// Computes `bytes / total * 100` per language, largest first.
///
/// Ties are broken by name. An empty map or a zero total yields no shares.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "percentages are display values; byte counts far below 2^52 are exact"
)]
#[must_use]
pub fn language_breakdown(language_bytes: &BTreeMap<String, u64>) -> Vec<LanguageShare> {
    let total: u64 = language_bytes.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<LanguageShare> = language_bytes
        .iter()
        .map(|(name, bytes)| LanguageShare {
            name: name.clone(),
            bytes: *bytes,
            percentage: (*bytes as f64 / total as f64) * 100.0,
        })
        .collect();

    shares.sort_by(|left, right| {
        right
            .bytes
            .cmp(&left.bytes)
            .then_with(|| left.name.cmp(&right.name))
    });
    shares
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rstest::rstest;

    use super::language_breakdown;

    fn languages(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs
            .iter()
            .map(|(name, bytes)| ((*name).to_owned(), *bytes))
            .collect()
    }

    #[rstest]
    fn splits_bytes_into_percentages() {
        let shares = language_breakdown(&languages(&[("TypeScript", 300), ("JavaScript", 100)]));

        let names: Vec<&str> = shares.iter().map(|share| share.name.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "JavaScript"]);

        let percentages: Vec<f64> = shares.iter().map(|share| share.percentage).collect();
        assert!((percentages.first().copied().unwrap_or_default() - 75.0).abs() < 1e-9);
        assert!((percentages.last().copied().unwrap_or_default() - 25.0).abs() < 1e-9);
        assert!((percentages.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[rstest]
    fn single_language_is_whole_bar() {
        let shares = language_breakdown(&languages(&[("Ruby", 1000)]));
        assert_eq!(shares.len(), 1);
        assert!(shares.iter().all(|share| (share.percentage - 100.0).abs() < 1e-9));
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::all_zero(&[("Shell", 0), ("Makefile", 0)])]
    fn no_bytes_means_no_shares(#[case] pairs: &[(&str, u64)]) {
        assert!(language_breakdown(&languages(pairs)).is_empty());
    }

    #[rstest]
    fn ties_are_ordered_by_name() {
        let shares = language_breakdown(&languages(&[("Go", 50), ("C", 50)]));
        let names: Vec<&str> = shares.iter().map(|share| share.name.as_str()).collect();
        assert_eq!(names, vec!["C", "Go"]);
    }
}
