//! NumPy-style textual rendering.
//!
//! Elements are aligned on the decimal point: the integer part is padded on
//! the left, the fraction on the right, and integral values keep a trailing
//! dot (`16.`). Values are rounded to [`PRECISION`] fractional digits with
//! trailing zeros dropped. The whole array switches to scientific notation
//! when its non-zero magnitudes span too wide a range to line up; mantissas
//! are then zero-padded to a common number of digits.

use std::fmt;

use num_traits::Float;

use super::Array;

/// Maximum fractional digits printed per element.
pub const PRECISION: usize = 8;

enum Token {
    Finite {
        int: String,
        frac: String,
        exp: Option<(char, String)>,
    },
    NonFinite(&'static str),
}

fn non_finite(x: f64) -> &'static str {
    if x.is_nan() {
        "nan"
    } else if x.is_sign_negative() {
        "-inf"
    } else {
        "inf"
    }
}

fn split_point(s: &str) -> (String, String) {
    match s.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.trim_end_matches('0').to_string()),
        None => (s.to_string(), String::new()),
    }
}

fn positional(x: f64) -> Token {
    let shortest = x.to_string();
    let text = match shortest.split_once('.') {
        Some((_, frac)) if frac.len() > PRECISION => format!("{:.*}", PRECISION, x),
        _ => shortest,
    };
    let (int, frac) = split_point(&text);
    Token::Finite {
        int,
        frac,
        exp: None,
    }
}

fn scientific(x: f64) -> Token {
    let shortest = format!("{:e}", x);
    let text = match shortest.split_once('e') {
        Some((mantissa, _)) if mantissa.split_once('.').map_or(0, |(_, f)| f.len()) > PRECISION => {
            format!("{:.*e}", PRECISION, x)
        }
        _ => shortest,
    };
    let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
    let (int, frac) = split_point(mantissa);
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    Token::Finite {
        int,
        frac,
        exp: Some((sign, digits.to_string())),
    }
}

/// Whether the finite non-zero magnitudes call for scientific notation.
fn wants_scientific(values: &[f64]) -> bool {
    let mut magnitudes = values
        .iter()
        .filter(|x| x.is_finite() && **x != 0.0)
        .map(|x| x.abs());
    let Some(first) = magnitudes.next() else {
        return false;
    };
    let (min, max) = magnitudes.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));
    max >= 1e8 || min < 1e-4 || max / min > 1e3
}

struct Layout {
    tokens: Vec<Token>,
    pad_left: usize,
    pad_right: usize,
    /// Exponent digits, zero when printing positionally.
    exp_digits: usize,
}

impl Layout {
    fn new(values: &[f64]) -> Self {
        let exp_mode = wants_scientific(values);
        let tokens: Vec<Token> = values
            .iter()
            .map(|&x| match x {
                x if !x.is_finite() => Token::NonFinite(non_finite(x)),
                x if exp_mode => scientific(x),
                x => positional(x),
            })
            .collect();

        let (mut pad_left, mut pad_right, mut exp_digits) = (0, 0, 0);
        for token in &tokens {
            if let Token::Finite { int, frac, exp } = token {
                pad_left = pad_left.max(int.len());
                pad_right = pad_right.max(frac.len());
                if let Some((_, digits)) = exp {
                    exp_digits = exp_digits.max(digits.len()).max(2);
                }
            }
        }
        // nan/inf are right-aligned to the width of the mantissa column.
        for token in &tokens {
            if let Token::NonFinite(word) = token {
                pad_left = pad_left.max(word.len().saturating_sub(pad_right + 1));
            }
        }

        Layout {
            tokens,
            pad_left,
            pad_right,
            exp_digits,
        }
    }

    fn write_token(&self, f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
        match &self.tokens[index] {
            Token::Finite {
                int,
                frac,
                exp: None,
            } => write!(
                f,
                "{:>pl$}.{:<pr$}",
                int,
                frac,
                pl = self.pad_left,
                pr = self.pad_right
            ),
            Token::Finite {
                int,
                frac,
                exp: Some((sign, digits)),
            } => write!(
                f,
                "{:>pl$}.{:0<pr$}e{}{:0>ed$}",
                int,
                frac,
                sign,
                digits,
                pl = self.pad_left,
                pr = self.pad_right,
                ed = self.exp_digits
            ),
            Token::NonFinite(word) => {
                write!(f, "{:>w$}", word, w = self.pad_left + 1 + self.pad_right)
            }
        }
    }

    fn write_block(
        &self,
        f: &mut fmt::Formatter<'_>,
        shape: &[usize],
        strides: &[usize],
        depth: usize,
        offset: usize,
    ) -> fmt::Result {
        let Some((&len, rest)) = shape.split_first() else {
            return self.write_token(f, offset);
        };
        f.write_str("[")?;
        for i in 0..len {
            if i > 0 {
                if rest.is_empty() {
                    f.write_str(" ")?;
                } else {
                    f.write_str(&"\n".repeat(rest.len()))?;
                    f.write_str(&" ".repeat(depth + 1))?;
                }
            }
            self.write_block(f, rest, &strides[1..], depth + 1, offset + i * strides[0])?;
        }
        f.write_str("]")
    }
}

impl<T: Float> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("[]");
        }
        let values: Vec<f64> = self
            .as_slice()
            .iter()
            .map(|x| x.to_f64().unwrap_or(f64::NAN))
            .collect();
        Layout::new(&values).write_block(f, self.shape(), self.strides(), 0, 0)
    }
}
