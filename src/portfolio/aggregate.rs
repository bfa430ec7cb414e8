//! # Portfolio Aggregation
//!
//! $$
//! w_s \leftarrow w_s + \Delta w
//! $$
//!
//! Symbol-keyed weight accumulation with additive merging of repeated
//! entries.

use std::collections::BTreeMap;

/// Accumulates `(symbol, weight)` entries, merging repeated symbols
/// additively instead of overwriting them.
#[derive(Clone, Debug, Default)]
pub struct PortfolioAggregator {
  holdings: BTreeMap<String, f64>,
}

impl PortfolioAggregator {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add `weight` to `symbol`, inserting the symbol if absent.
  ///
  /// Symbols are case-folded to uppercase here, at the aggregation boundary.
  /// Zero-weight rejection is the caller's responsibility.
  pub fn add(&mut self, symbol: &str, weight: f64) {
    *self
      .holdings
      .entry(symbol.to_ascii_uppercase())
      .or_insert(0.0) += weight;
  }

  /// Accumulated weight for `symbol`, if present.
  pub fn weight(&self, symbol: &str) -> Option<f64> {
    self.holdings.get(&symbol.to_ascii_uppercase()).copied()
  }

  pub fn len(&self) -> usize {
    self.holdings.len()
  }

  pub fn is_empty(&self) -> bool {
    self.holdings.is_empty()
  }

  /// Freeze into parallel `(symbols, weights)` sequences with symbols in
  /// ascending lexicographic order. Idempotent; the aggregator is unchanged.
  pub fn finalize(&self) -> (Vec<String>, Vec<f64>) {
    let symbols = self.holdings.keys().cloned().collect();
    let weights = self.holdings.values().copied().collect();
    (symbols, weights)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn repeated_entries_are_additive() {
    let mut aggregator = PortfolioAggregator::new();
    aggregator.add("AAPL", 0.1);
    aggregator.add("AAPL", 0.2);

    let mut single = PortfolioAggregator::new();
    single.add("AAPL", 0.3);

    assert_eq!(aggregator.len(), 1);
    assert_relative_eq!(
      aggregator.weight("AAPL").unwrap(),
      single.weight("AAPL").unwrap()
    );
  }

  #[test]
  fn symbols_are_upper_cased_at_the_boundary() {
    let mut aggregator = PortfolioAggregator::new();
    aggregator.add("aapl", 0.1);
    aggregator.add("AaPl", 0.1);

    assert_eq!(aggregator.len(), 1);
    assert_relative_eq!(aggregator.weight("AAPL").unwrap(), 0.2);
  }

  #[test]
  fn finalize_is_sorted_without_duplicates_and_idempotent() {
    let mut aggregator = PortfolioAggregator::new();
    aggregator.add("MSFT", 0.3);
    aggregator.add("AAPL", 0.5);
    aggregator.add("GOOG", 0.2);
    aggregator.add("AAPL", 0.1);

    let (symbols, weights) = aggregator.finalize();
    assert_eq!(symbols, vec!["AAPL", "GOOG", "MSFT"]);
    assert_relative_eq!(weights[0], 0.6);
    assert_relative_eq!(weights[1], 0.2);
    assert_relative_eq!(weights[2], 0.3);

    let mut sorted = symbols.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(symbols, sorted);

    assert_eq!(aggregator.finalize(), (symbols, weights));
  }
}
