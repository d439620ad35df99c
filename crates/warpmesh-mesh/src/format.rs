//! Float formatting matching C++ iostream defaults.
//!
//! Mesh consumers expect numbers the way `std::cout << double` writes them:
//! six significant digits, no trailing zeros, and exponent notation for very
//! large or very small magnitudes.

use std::fmt;

/// Significant digits written for each value.
const PRECISION: i32 = 6;

/// Displays an `f64` like C's `%g` with precision 6.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct General(pub f64);

impl fmt::Display for General {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            return f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" });
        }
        if v.is_infinite() {
            return f.write_str(if v < 0.0 { "-inf" } else { "inf" });
        }
        if v == 0.0 {
            return f.write_str(if v.is_sign_negative() { "-0" } else { "0" });
        }

        // The exponent after rounding to PRECISION digits picks the notation.
        let sci = format!("{:.*e}", (PRECISION - 1) as usize, v);
        let Some((mantissa, exponent)) = sci.split_once('e') else {
            return f.write_str(&sci);
        };
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= PRECISION {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION - 1 - exponent) as usize;
            let fixed = format!("{v:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Drop trailing zeros after the decimal point, and the point itself if bare.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
