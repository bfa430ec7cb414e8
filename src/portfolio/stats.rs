//! # Return Statistics
//!
//! $$
//! \sigma_p = \sqrt{\mathbf{w}^\top \Sigma \mathbf{w}}
//! $$
//!
//! Portfolio return and risk measures over a daily return matrix.

use anyhow::Result;
use anyhow::bail;
use ndarray::Array1;
use ndarray::Array2;
use ndarray_stats::CorrelationExt;

/// Trading-day convention used to annualize daily returns.
pub const TRADING_DAYS_PER_YEAR: i32 = 252;

/// Risk and return measures derived from a daily return matrix.
#[derive(Clone, Debug)]
pub struct PortfolioStatistics {
  /// Portfolio daily simple returns, one per date row.
  pub daily_returns: Array1<f64>,
  /// Cumulative portfolio return per date, in percent.
  pub cumulative_returns_pct: Array1<f64>,
  /// Mean of the daily portfolio returns.
  pub mean_daily_return: f64,
  /// `(1 + mean)^252 - 1`.
  pub annualized_return: f64,
  /// Daily portfolio standard deviation `sqrt(wᵀ Σ w)`, not annualized.
  pub volatility: f64,
  /// Sample covariance matrix of the per-symbol return columns.
  pub covariance: Array2<f64>,
}

/// Compute portfolio statistics from a dates × symbols return matrix and a
/// normalized weight vector in the same symbol order.
///
/// The column set is assumed to match the portfolio's symbol ordering; a
/// dimension mismatch or fewer than two observation rows is a contract
/// violation of the data collaborator.
pub fn compute_statistics(
  returns: &Array2<f64>,
  weights: &Array1<f64>,
) -> Result<PortfolioStatistics> {
  if returns.ncols() != weights.len() {
    bail!(
      "return matrix has {} columns but {} weights were supplied",
      returns.ncols(),
      weights.len()
    );
  }
  if returns.nrows() < 2 {
    bail!(
      "need at least two return observations, got {}",
      returns.nrows()
    );
  }

  let daily_returns = returns.dot(weights);

  let mut cumulative_returns_pct = Array1::<f64>::zeros(daily_returns.len());
  let mut growth = 1.0;
  for (i, r) in daily_returns.iter().enumerate() {
    growth *= 1.0 + r;
    cumulative_returns_pct[i] = (growth - 1.0) * 100.0;
  }

  let mean_daily_return = daily_returns.mean().unwrap_or(0.0);
  let annualized_return = (1.0 + mean_daily_return).powi(TRADING_DAYS_PER_YEAR) - 1.0;

  // `cov` wants variables in rows, observations in columns.
  let covariance = returns.t().cov(1.0)?;
  let variance = weights.dot(&covariance.dot(weights));
  let volatility = variance.max(0.0).sqrt();

  Ok(PortfolioStatistics {
    daily_returns,
    cumulative_returns_pct,
    mean_daily_return,
    annualized_return,
    volatility,
    covariance,
  })
}
