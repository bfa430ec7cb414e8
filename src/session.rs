//! # Interactive Session
//!
//! $$
//! \text{lines} \mapsto (\text{symbols}, \mathbf{w})
//! $$
//!
//! Line-by-line portfolio construction driven by an outer prompt loop. The
//! session owns the single mutable portfolio of a console run; all user
//! messaging stays with the caller.

use anyhow::Result;
use anyhow::bail;
use tracing::debug;
use tracing::info;

use crate::market::SymbolValidator;
use crate::parse::parse_line;
use crate::portfolio::PortfolioAggregator;
use crate::portfolio::normalize;

/// Runtime configuration for [`PortfolioSession`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
  /// Literal line that ends input, matched verbatim and case-sensitive.
  pub sentinel: String,
  /// Check symbols against the provider before aggregating.
  pub validate_symbols: bool,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      sentinel: "Done".to_string(),
      validate_symbols: true,
    }
  }
}

/// Outcome of feeding one raw line into the session.
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
  /// The sentinel was read; input is complete.
  Done,
  /// The entry was aggregated; `total_weight` is the accumulated value.
  Added { symbol: String, total_weight: f64 },
  /// Valid parse with zero weight; nothing was aggregated.
  ZeroWeight { symbol: String },
  /// A symbol-phase or weight-phase format rule was violated.
  InvalidFormat { partial: String },
  /// The provider has no history for the symbol; nothing was aggregated.
  UnknownSymbol { symbol: String },
}

#[derive(Debug, Default)]
pub struct PortfolioSession {
  config: SessionConfig,
  aggregator: PortfolioAggregator,
}

impl PortfolioSession {
  pub fn new(config: SessionConfig) -> Self {
    Self {
      config,
      aggregator: PortfolioAggregator::new(),
    }
  }

  pub fn config(&self) -> &SessionConfig {
    &self.config
  }

  pub fn is_empty(&self) -> bool {
    self.aggregator.is_empty()
  }

  /// Feed one raw input line through parsing, validation and aggregation.
  ///
  /// Malformed input and unknown symbols are recoverable outcomes, not
  /// errors; only provider failures propagate as `Err`.
  pub fn accept_line<V: SymbolValidator>(
    &mut self,
    line: &str,
    validator: &V,
  ) -> Result<LineOutcome> {
    if line == self.config.sentinel {
      return Ok(LineOutcome::Done);
    }

    let parsed = parse_line(line);
    if !parsed.valid {
      debug!(line, "rejected malformed input");
      return Ok(LineOutcome::InvalidFormat {
        partial: parsed.symbol,
      });
    }

    let symbol = parsed.symbol.to_ascii_uppercase();
    if self.config.validate_symbols && !validator.has_history(&symbol)? {
      debug!(symbol = %symbol, "provider has no history");
      return Ok(LineOutcome::UnknownSymbol { symbol });
    }
    if parsed.weight == 0.0 {
      debug!(symbol = %symbol, "zero weight, entry skipped");
      return Ok(LineOutcome::ZeroWeight { symbol });
    }

    self.aggregator.add(&symbol, parsed.weight);
    let total_weight = self.aggregator.weight(&symbol).unwrap_or(parsed.weight);
    info!(symbol = %symbol, weight = parsed.weight, total_weight, "entry aggregated");

    Ok(LineOutcome::Added {
      symbol,
      total_weight,
    })
  }

  /// Freeze the portfolio into sorted symbols and normalized weights.
  ///
  /// Bails on an empty portfolio; callers must refuse to proceed to the
  /// statistics stage in that case.
  pub fn finalize(&self) -> Result<(Vec<String>, Vec<f64>)> {
    if self.aggregator.is_empty() {
      bail!("portfolio is empty, nothing to normalize");
    }

    let (symbols, weights) = self.aggregator.finalize();
    Ok((symbols, normalize(&weights)?))
  }
}
