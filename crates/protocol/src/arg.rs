//! Command arguments and flattening.

use std::fmt::{self, Write as _};

use arrayvec::ArrayString;
use mcpi_link_types::{EntityId, Vec3};

/// One command argument.
///
/// `Seq` nests arbitrarily; it is expanded in place when the command is
/// encoded. `Text` is always a single scalar, never split into characters.
/// There is no boolean variant: callers send `0`/`1`.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Float(f64),
    Text(String),
    Seq(Vec<Arg>),
}

/// A flattened argument, borrowed from the `Arg` tree it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Int(i64),
    Float(f64),
    Text(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write_float(f, *v),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// Shortest round-trip form with a fractional part (`1.0`, `0.5`).
///
/// Below 1e-4 and from 1e16 up the exponent form is used, spelled with a
/// sign and at least two digits (`1e+16`, `2.5e-05`). Non-finite values are
/// `nan`, `inf` and `-inf`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }

    // `{:?}` switches to exponent form at the same thresholds.
    let mut buf = ArrayString::<32>::new();
    write!(buf, "{:?}", v)?;
    match buf.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => f.write_str(&buf),
    }
}

impl Arg {
    /// Visit every scalar depth-first, left to right.
    pub fn for_each_scalar<'a>(&'a self, f: &mut impl FnMut(Scalar<'a>)) {
        match self {
            Arg::Int(v) => f(Scalar::Int(*v)),
            Arg::Float(v) => f(Scalar::Float(*v)),
            Arg::Text(s) => f(Scalar::Text(s)),
            Arg::Seq(items) => {
                for item in items {
                    item.for_each_scalar(f);
                }
            }
        }
    }

    /// An empty sequence; flattens to nothing.
    pub fn none() -> Self {
        Arg::Seq(Vec::new())
    }
}

/// Flatten `args` into one ordered list of scalars.
///
/// # Examples
///
/// ```
/// use mcpi_link_protocol::{args, flatten, Arg, Scalar};
///
/// let nested = args![Arg::from([1, 2]), Arg::Seq(vec![Arg::from(3), Arg::from([4, 5])])];
/// let flat: Vec<Scalar> = flatten(&nested);
/// assert_eq!(flat, [1, 2, 3, 4, 5].map(Scalar::Int));
///
/// let mixed = args!["ab", [1, 2]];
/// assert_eq!(flatten(&mixed), vec![Scalar::Text("ab"), Scalar::Int(1), Scalar::Int(2)]);
/// ```
pub fn flatten(args: &[Arg]) -> Vec<Scalar<'_>> {
    let mut out = Vec::with_capacity(args.len());
    for arg in args {
        arg.for_each_scalar(&mut |s| out.push(s));
    }
    out
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(v: $t) -> Self {
                    Arg::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Arg {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Text(s.clone())
    }
}

impl From<&EntityId> for Arg {
    fn from(id: &EntityId) -> Self {
        Arg::Text(id.as_str().to_string())
    }
}

impl From<EntityId> for Arg {
    fn from(id: EntityId) -> Self {
        Arg::Text(id.into_string())
    }
}

impl<T: Into<Arg>> From<Vec3<T>> for Arg {
    fn from(v: Vec3<T>) -> Self {
        Arg::Seq(vec![v.x.into(), v.y.into(), v.z.into()])
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(items: [T; N]) -> Self {
        Arg::Seq(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Arg> + Clone> From<&[T]> for Arg {
    fn from(items: &[T]) -> Self {
        Arg::Seq(items.iter().cloned().map(Into::into).collect())
    }
}

/// `None` contributes no argument; used for optional trailing arguments.
impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Arg::none(),
        }
    }
}

/// Build a `[Arg; N]` from heterogeneous values.
///
/// ```
/// use mcpi_link_protocol::{args, Arg};
///
/// let a = args![0, 1.5, "stone"];
/// assert_eq!(a[2], Arg::Text("stone".to_string()));
/// let empty = args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Arg; 0] = [];
        empty
    }};
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Arg::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn ints(v: &[i64]) -> Vec<Scalar<'static>> {
        v.iter().map(|&i| Scalar::Int(i)).collect()
    }

    #[test]
    fn flatten_expands_nested_sequences_depth_first() {
        let nested = args![
            Arg::from([1, 2]),
            Arg::Seq(vec![Arg::from(3), Arg::from([4, 5])])
        ];
        assert_eq!(flatten(&nested), ints(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn flatten_keeps_text_atomic() {
        let a = args!["ab", [1, 2]];
        assert_eq!(
            flatten(&a),
            vec![Scalar::Text("ab"), Scalar::Int(1), Scalar::Int(2)]
        );
    }

    #[test]
    fn flatten_matches_manual_preflattening() {
        let deep = args![Arg::Seq(vec![Arg::Seq(vec![Arg::Seq(vec![Arg::from(7)])])]), 8];
        let manual = args![7, 8];
        assert_eq!(flatten(&deep), flatten(&manual));
    }

    #[test]
    fn empty_sequences_and_none_vanish() {
        let a = args![1, Arg::none(), Option::<i32>::None, 2];
        assert_eq!(flatten(&a), ints(&[1, 2]));
    }

    #[test]
    fn vec3_flattens_to_three_scalars() {
        let a = args![Vec3::new(1, 2, 3), "stone"];
        assert_eq!(flatten(&a).len(), 4);
    }

    #[test]
    fn scalar_rendering() {
        assert_eq!(Scalar::Int(-42).to_string(), "-42");
        assert_eq!(Scalar::Float(1.0).to_string(), "1.0");
        assert_eq!(Scalar::Float(0.5).to_string(), "0.5");
        assert_eq!(Scalar::Float(-2.25).to_string(), "-2.25");
        assert_eq!(Scalar::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Scalar::Float(0.0001).to_string(), "0.0001");
        assert_eq!(Scalar::Text("a b").to_string(), "a b");
    }

    #[test]
    fn float_exponent_form() {
        assert_eq!(Scalar::Float(1e16).to_string(), "1e+16");
        assert_eq!(Scalar::Float(1.5e16).to_string(), "1.5e+16");
        assert_eq!(Scalar::Float(1e-5).to_string(), "1e-05");
        assert_eq!(Scalar::Float(-2.5e-7).to_string(), "-2.5e-07");
        assert_eq!(Scalar::Float(1e300).to_string(), "1e+300");
    }

    #[test]
    fn float_non_finite() {
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
