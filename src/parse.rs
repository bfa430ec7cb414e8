//! # Line Parsing
//!
//! $$
//! \text{raw line} \mapsto (\text{valid},\ \text{symbol},\ w)
//! $$
//!
//! Character-scanning extraction of a ticker symbol and a portfolio weight
//! from one unstructured input line.

/// Result of scanning a single input line.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLine {
  /// False when a symbol-phase or weight-phase format rule was violated.
  pub valid: bool,
  /// Letters accumulated before the weight, case-preserving.
  pub symbol: String,
  /// Parsed weight; a trailing `%` divides the numeric literal by 100.
  pub weight: f64,
}

impl ParsedLine {
  fn invalid(symbol: String) -> Self {
    Self {
      valid: false,
      symbol,
      weight: 0.0,
    }
  }
}

/// Extract a `(symbol, weight)` pair from a free-form line.
///
/// Two-phase left-to-right scan. The symbol phase skips leading spaces and
/// accumulates a maximal run of ASCII letters; a digit ends it normally, any
/// other character is a format error. The weight phase accumulates digits
/// around at most one `.`; a second `.` closes the numeric literal, a `%`
/// sets a divisor of 100 and ends the scan, and anything else ends the scan
/// once at least one digit has been seen. Trailing garbage is ignored.
/// Malformed input degrades to `valid = false`, never an error.
pub fn parse_line(line: &str) -> ParsedLine {
  let bytes = line.as_bytes();
  let mut symbol = String::new();
  let mut index = 0;

  while index < bytes.len() {
    let c = bytes[index] as char;
    if c.is_ascii_alphabetic() {
      symbol.push(c);
    } else if c == ' ' {
      if !symbol.is_empty() {
        break;
      }
    } else if c.is_ascii_digit() {
      break;
    } else {
      return ParsedLine::invalid(symbol);
    }
    index += 1;
  }

  if symbol.is_empty() {
    return ParsedLine::invalid(symbol);
  }

  let mut weight_str = String::from("0");
  let mut divisor = 1.0;
  let mut literal_closed = false;

  for &b in &bytes[index..] {
    let c = b as char;
    if c == ' ' {
      continue;
    } else if c == '%' {
      divisor = 100.0;
      break;
    } else if c.is_ascii_digit() {
      if !literal_closed {
        weight_str.push(c);
      }
    } else if c == '.' {
      if weight_str.contains('.') {
        literal_closed = true;
      } else {
        weight_str.push(c);
      }
    } else if weight_str == "0" && !literal_closed {
      return ParsedLine::invalid(symbol);
    } else {
      break;
    }
  }

  // weight_str is ASCII digits around at most one dot, so this cannot fail.
  let weight = weight_str.parse::<f64>().unwrap_or(0.0) / divisor;

  ParsedLine {
    valid: true,
    symbol,
    weight,
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::*;

  #[test]
  fn percent_weight() {
    let parsed = parse_line("AAPL 10%");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "AAPL");
    assert_relative_eq!(parsed.weight, 0.10);
  }

  #[test]
  fn fractional_weight_preserves_case() {
    let parsed = parse_line("msft 0.5");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "msft");
    assert_relative_eq!(parsed.weight, 0.5);
  }

  #[test]
  fn leading_digit_without_letters_is_invalid() {
    assert_eq!(parse_line("5%"), ParsedLine::invalid(String::new()));
  }

  #[test]
  fn symbol_without_weight_is_valid_with_zero() {
    let parsed = parse_line("AAPL");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "AAPL");
    assert_eq!(parsed.weight, 0.0);
  }

  #[test]
  fn second_dot_closes_literal_but_percent_still_applies() {
    let parsed = parse_line("AAPL10.5.5%");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "AAPL");
    assert_relative_eq!(parsed.weight, 0.105);
  }

  #[test]
  fn trailing_garbage_after_number_is_ignored() {
    let parsed = parse_line("  IBM  25 to the moon");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "IBM");
    assert_relative_eq!(parsed.weight, 25.0);
  }

  #[test]
  fn everything_after_percent_is_ignored() {
    let parsed = parse_line("GOOG 12.5% of my savings");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "GOOG");
    assert_relative_eq!(parsed.weight, 0.125);
  }

  #[test]
  fn punctuation_in_symbol_phase_is_a_format_error() {
    let parsed = parse_line("AA_PL 10");
    assert!(!parsed.valid);
    assert_eq!(parsed.symbol, "AA");
    assert_eq!(parsed.weight, 0.0);
  }

  #[test]
  fn punctuation_before_any_digit_is_a_format_error() {
    let parsed = parse_line("AAPL -5");
    assert!(!parsed.valid);
    assert_eq!(parsed.symbol, "AAPL");
    assert_eq!(parsed.weight, 0.0);
  }

  #[test]
  fn blank_lines_are_invalid() {
    assert!(!parse_line("").valid);
    assert!(!parse_line("   ").valid);
  }

  #[test]
  fn digit_terminates_the_symbol_run() {
    let parsed = parse_line("BRK4BERKSHIRE");
    assert!(parsed.valid);
    assert_eq!(parsed.symbol, "BRK");
    assert_relative_eq!(parsed.weight, 4.0);
  }

  #[test]
  fn accepted_symbols_are_ascii_letters_only() {
    for line in ["AAPL 10%", "msft 0.5", "IBM", "v 1"] {
      let parsed = parse_line(line);
      assert!(parsed.valid);
      assert!(parsed.symbol.chars().all(|c| c.is_ascii_alphabetic()));
      assert!(parsed.weight >= 0.0);
    }
  }
}
