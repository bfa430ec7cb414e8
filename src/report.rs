//! # Console Reporting
//!
//! $$
//! (\text{symbols}, \mathbf{w}, \Sigma) \mapsto \text{tables}
//! $$
//!
//! Pretty-printed weight, covariance and summary tables.

use ndarray::Array2;
use prettytable::Row;
use prettytable::Table;
use prettytable::row;

use crate::portfolio::PortfolioStatistics;

/// Normalized weight per symbol.
pub fn weights_table(symbols: &[String], weights: &[f64]) -> Table {
  let mut table = Table::new();
  table.set_titles(row!["Symbol", "Weight"]);
  for (symbol, weight) in symbols.iter().zip(weights) {
    table.add_row(row![symbol, format!("{weight:.4}")]);
  }
  table
}

/// Sample covariance matrix of the per-symbol daily returns.
pub fn covariance_table(symbols: &[String], covariance: &Array2<f64>) -> Table {
  let mut table = Table::new();

  let mut header = vec![String::new()];
  header.extend(symbols.iter().cloned());
  table.set_titles(Row::from(header));

  for (i, symbol) in symbols.iter().enumerate() {
    let mut cells = vec![symbol.clone()];
    for j in 0..symbols.len() {
      cells.push(format!("{:.6}", covariance[[i, j]]));
    }
    table.add_row(Row::from(cells));
  }

  table
}

/// Headline figures, rounded the way the console report prints them.
pub fn summary_table(stats: &PortfolioStatistics) -> Table {
  let mut table = Table::new();
  table.set_titles(row!["Measure", "Value"]);
  table.add_row(row![
    "Average daily return",
    format!("{:.4}%", stats.mean_daily_return * 100.0)
  ]);
  table.add_row(row![
    "Average annualized return",
    format!("{:.4}%", stats.annualized_return * 100.0)
  ]);
  table.add_row(row![
    "Portfolio volatility (daily)",
    format!("{:.4}", stats.volatility)
  ]);
  table
}
