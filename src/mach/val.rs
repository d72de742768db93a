use std::rc::Rc;

/// ## Run-time values
///
/// Rendering follows the conversions a JVM `println` applies: strings are
/// written raw, doubles always show a fractional digit, and very large or
/// very small doubles switch to scientific notation with an upper-case `E`.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    String(Rc<str>),
    Integer(i32),
    Double(f64),
    Boolean(bool),
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            String(s) => write!(f, "{}", s),
            Integer(n) => write!(f, "{}", n),
            Double(n) => write!(f, "{}", format_double(*n)),
            Boolean(b) => write!(f, "{}", b),
        }
    }
}

fn format_double(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    let abs = n.abs();
    if abs == 0.0 || (1e-3..1e7).contains(&abs) {
        let s = format!("{}", n);
        if s.contains('.') {
            s
        } else {
            format!("{}.0", s)
        }
    } else {
        let s = format!("{:e}", n);
        match s.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                format!("{}E{}", mantissa, exponent)
            }
            Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
            None => s,
        }
    }
}
