use std::fmt;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub enum FieldValue {
    I32(i32),
    U32Hex(u32),
    F32(f32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I32(v) => write!(f, "{v}"),
            Self::U32Hex(v) => write!(f, "{v:#X}"),
            Self::F32(v) => f.write_str(&format_f32(*v)),
        }
    }
}

/// Lossy two-step float rendering inherited from the format's original
/// consumer: format to exactly four decimal places, reparse that string at
/// double precision, then render the reparsed value minimally (keeping a
/// trailing `.0` on whole values, except that zero renders as the bare
/// string `"0"`). Existing derived CSV files depend on these exact strings,
/// so both steps stay explicit. The reparse must be f64: a large-magnitude
/// value can have a shorter decimal form at single precision than the digits
/// the original tool emitted.
fn format_f32(v: f32) -> String {
    let fixed = format!("{v:.4}");
    let reparsed: f64 = fixed.parse().expect("fixed-precision floats reparse");
    let mut out = reparsed.to_string();
    if reparsed.is_finite() && !out.contains('.') {
        out.push_str(".0");
    }
    if out == "0.0" {
        out = String::from("0");
    }
    out
}
