//! Field coercion for loosely-typed upstream scalars.
//!
//! The upstream feed mixes numeric strings, bare numbers and `null` in the
//! same slots. Everything is funnelled through here before it reaches a
//! [`Vehicle`](crate::Vehicle), so the rest of the crate only sees strict
//! `f64` and `String` values.

use crate::Scalar;

// ---

/// Coerce an optional scalar to a finite number.
///
/// Returns `None` (the "not-a-number" sentinel) when the value is absent, is
/// not a string or number, or does not parse to a finite value. Strings are
/// trimmed first; `"NaN"`, `"inf"` and empty strings all yield `None`.
pub fn to_finite(value: Option<&Scalar>) -> Option<f64> {
    // ---
    let number = match value? {
        Scalar::Number(n) => n.as_f64()?,
        Scalar::Text(s) => s.trim().parse::<f64>().ok()?,
        Scalar::Bool(_) => return None,
    };

    number.is_finite().then_some(number)
}

/// String form of a scalar, as used for identifiers and display text.
///
/// Integers keep their exact digits; floats use the shortest round-trip form,
/// so `3.0` renders as `"3"` and `1.5` as `"1.5"`.
pub fn label(value: &Scalar) -> String {
    // ---
    match value {
        Scalar::Text(s) => s.clone(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
            }
        }
    }
}
