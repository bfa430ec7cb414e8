//! # Return Preprocessing
//!
//! $$
//! r_t = \frac{p_t}{p_{t-1}} - 1
//! $$
//!
//! Helpers for turning adjusted close prices into daily simple returns.

use ndarray::Array2;

/// Convert a close-price series to daily simple returns.
pub fn simple_returns_series(closes: &[f64]) -> Vec<f64> {
  let mut out = Vec::with_capacity(closes.len().saturating_sub(1));
  for i in 1..closes.len() {
    if closes[i - 1] > 0.0 && closes[i] > 0.0 {
      out.push(closes[i] / closes[i - 1] - 1.0);
    }
  }
  out
}

/// Column-wise simple returns of a dates × symbols price matrix.
///
/// The first price observation contributes no return and is dropped, so the
/// result has one row fewer than the input.
pub fn returns_from_prices(prices: &Array2<f64>) -> Array2<f64> {
  let rows = prices.nrows().saturating_sub(1);
  let mut returns = Array2::<f64>::zeros((rows, prices.ncols()));

  for t in 1..prices.nrows() {
    for col in 0..prices.ncols() {
      returns[[t - 1, col]] = prices[[t, col]] / prices[[t - 1, col]] - 1.0;
    }
  }

  returns
}
