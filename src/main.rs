use std::io;
use std::io::BufRead;

use anyhow::Result;
use portfolio_rs::report::weights_table;
use portfolio_rs::session::LineOutcome;
use portfolio_rs::session::PortfolioSession;
use portfolio_rs::session::SessionConfig;

fn main() -> Result<()> {
  println!(
    "Please enter the stock symbol followed by its weight in the portfolio. \
     Enter \"Done\" when your portfolio is complete."
  );

  #[cfg(feature = "yahoo")]
  let validator = portfolio_rs::market::yahoo::YahooProvider::new()?;
  #[cfg(not(feature = "yahoo"))]
  let validator = portfolio_rs::market::AcceptAll;

  let mut session = PortfolioSession::new(SessionConfig::default());
  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  loop {
    println!("Enter new ticker:");
    let Some(line) = lines.next() else {
      break;
    };

    match session.accept_line(&line?, &validator)? {
      LineOutcome::Done => break,
      LineOutcome::Added {
        symbol,
        total_weight,
      } => println!("{symbol} has been added (total weight {total_weight})"),
      LineOutcome::ZeroWeight { symbol } => {
        println!("The weight provided for {symbol} is zero, so the ticker was not added.")
      }
      LineOutcome::InvalidFormat { .. } => println!("Your input is invalid..."),
      LineOutcome::UnknownSymbol { .. } => println!("The ticker you entered is not valid..."),
    }
  }

  if session.is_empty() {
    println!("No entries were provided, nothing to analyze.");
    return Ok(());
  }

  let (symbols, weights) = session.finalize()?;
  weights_table(&symbols, &weights).printstd();

  analyze(&symbols, &weights)
}

#[cfg(feature = "yahoo")]
fn analyze(symbols: &[String], weights: &[f64]) -> Result<()> {
  use chrono::NaiveDate;
  use ndarray::Array1;
  use portfolio_rs::market::MarketData;
  use portfolio_rs::market::yahoo::YahooProvider;
  use portfolio_rs::portfolio::compute_statistics;
  use portfolio_rs::report::covariance_table;
  use portfolio_rs::report::summary_table;
  use portfolio_rs::visualization::cumulative_return_chart;
  use portfolio_rs::visualization::price_chart;

  let from = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date");
  let provider = YahooProvider::new()?;
  let prices = provider.fetch_price_table(symbols, from)?;
  let returns = prices.to_returns();

  let weights = Array1::from_vec(weights.to_vec());
  let stats = compute_statistics(&returns.returns, &weights)?;

  covariance_table(symbols, &stats.covariance).printstd();
  summary_table(&stats).printstd();

  price_chart(&prices.dates, symbols, &prices.closes).show();
  cumulative_return_chart(&returns.dates, &stats.cumulative_returns_pct).show();

  Ok(())
}

#[cfg(not(feature = "yahoo"))]
fn analyze(_symbols: &[String], _weights: &[f64]) -> Result<()> {
  println!("Rebuild with --features yahoo to fetch price history and compute statistics.");
  Ok(())
}
