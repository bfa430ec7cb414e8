//! # Market Data
//!
//! $$
//! \text{symbols} \mapsto \text{dates} \times \text{symbols price table}
//! $$
//!
//! Seam to the external price-history provider.

use anyhow::Result;
use chrono::NaiveDate;
use impl_new_derive::ImplNew;
use ndarray::Array2;

use crate::portfolio::data::returns_from_prices;

#[cfg(feature = "yahoo")]
pub mod yahoo;

/// Adjusted close prices on dates common to every requested symbol.
#[derive(ImplNew, Clone, Debug)]
pub struct PriceTable {
  /// Trading dates, ascending.
  pub dates: Vec<NaiveDate>,
  /// Symbols, one per column.
  pub symbols: Vec<String>,
  /// dates × symbols adjusted closes.
  pub closes: Array2<f64>,
}

impl PriceTable {
  /// Derive daily simple returns; the first observation row carries no
  /// return and is dropped.
  pub fn to_returns(&self) -> ReturnTable {
    ReturnTable::new(
      self.dates.get(1..).unwrap_or_default().to_vec(),
      self.symbols.clone(),
      returns_from_prices(&self.closes),
    )
  }
}

/// Daily simple returns aligned with the price dates minus the first.
#[derive(ImplNew, Clone, Debug)]
pub struct ReturnTable {
  /// Trading dates, ascending.
  pub dates: Vec<NaiveDate>,
  /// Symbols, one per column.
  pub symbols: Vec<String>,
  /// dates × symbols daily simple returns.
  pub returns: Array2<f64>,
}

/// Pre-aggregation symbol check against the provider's history.
pub trait SymbolValidator {
  /// Whether the provider has any price history at all for `symbol`.
  fn has_history(&self, symbol: &str) -> Result<bool>;
}

/// Price-history provider consumed by the statistics stage.
pub trait MarketData: SymbolValidator {
  /// Adjusted closes for every symbol from `from`, dates aligned by
  /// intersection.
  fn fetch_price_table(&self, symbols: &[String], from: NaiveDate) -> Result<PriceTable>;

  /// Daily simple returns derived from [`MarketData::fetch_price_table`].
  fn fetch_return_table(&self, symbols: &[String], from: NaiveDate) -> Result<ReturnTable> {
    Ok(self.fetch_price_table(symbols, from)?.to_returns())
  }
}

/// Validator that treats every symbol as known, for offline sessions.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl SymbolValidator for AcceptAll {
  fn has_history(&self, _symbol: &str) -> Result<bool> {
    Ok(true)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use ndarray::array;

  use super::*;

  fn dates(days: &[u32]) -> Vec<NaiveDate> {
    days
      .iter()
      .map(|&d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap())
      .collect()
  }

  #[test]
  fn price_table_derives_returns() {
    let table = PriceTable::new(
      dates(&[2, 3, 4]),
      vec!["AAPL".to_string(), "MSFT".to_string()],
      array![[100.0, 200.0], [110.0, 190.0], [121.0, 209.0]],
    );

    let returns = table.to_returns();
    assert_eq!(returns.dates, dates(&[3, 4]));
    assert_eq!(returns.symbols, table.symbols);
    assert_relative_eq!(returns.returns[[0, 0]], 0.1, epsilon = 1e-12);
    assert_relative_eq!(returns.returns[[0, 1]], -0.05, epsilon = 1e-12);
    assert_relative_eq!(returns.returns[[1, 0]], 0.1, epsilon = 1e-12);
    assert_relative_eq!(returns.returns[[1, 1]], 0.1, epsilon = 1e-12);
  }

  #[test]
  fn accept_all_knows_everything() {
    assert!(AcceptAll.has_history("ZZZZ").unwrap());
  }

  /// Provider serving a fixed in-memory table, to exercise the trait seam.
  struct FixedPrices(PriceTable);

  impl SymbolValidator for FixedPrices {
    fn has_history(&self, symbol: &str) -> Result<bool> {
      Ok(self.0.symbols.iter().any(|s| s == symbol))
    }
  }

  impl MarketData for FixedPrices {
    fn fetch_price_table(&self, _symbols: &[String], _from: NaiveDate) -> Result<PriceTable> {
      Ok(self.0.clone())
    }
  }

  #[test]
  fn fetch_return_table_derives_from_prices() {
    let provider = FixedPrices(PriceTable::new(
      dates(&[2, 3]),
      vec!["AAPL".to_string()],
      array![[100.0], [101.0]],
    ));

    let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let returns = provider
      .fetch_return_table(&["AAPL".to_string()], from)
      .unwrap();

    assert_eq!(returns.dates, dates(&[3]));
    assert_relative_eq!(returns.returns[[0, 0]], 0.01, epsilon = 1e-12);
    assert!(provider.has_history("AAPL").unwrap());
    assert!(!provider.has_history("MSFT").unwrap());
  }
}
