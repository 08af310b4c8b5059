//! # Argument Rendering
//!
//! Call logging prints the arguments and the return value of a wrapped
//! function. Each value picks the best textual form it has, in this order:
//!
//! 1. **Text** values (`str`, `String`, `char`, paths) are quoted: `"abc"`
//! 2. Values with a **display** form use it: `42`, `true`
//! 3. Values with only a **debug** form use that, via [`Debugged`]
//! 4. Anything else renders as `<TypeName> unrepresentable object`, via
//!    [`Opaque`]
//!
//! The first two tiers come from implementing [`Displayable`], which is
//! provided for the common standard types. Types outside the crate opt in
//! by implementing it, or are wrapped in [`Debugged`] or [`Opaque`] at the
//! call site.
//!
//! ## Positional and keyword arguments
//!
//! A wrapped function takes its arguments as one tuple. Plain elements are
//! positional; elements wrapped in [`Keyword`] are reported by name:
//!
//! ```rust
//! use levelog::args::{CallArguments, Keyword};
//!
//! let call = (3, "abc", Keyword::new("scale", 1.5)).call_args();
//! assert_eq!(call.positional(), r#"3, "abc""#);
//! assert_eq!(call.keywords(), "scale: 1.5");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// The rendered form of one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// Textual value, quoted when listed as an argument
    Text(String),
    /// Display or debug form, shown verbatim
    Display(String),
    /// A value with no textual form; holds its short type name
    Opaque(String),
}

impl ArgValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Self::Display(value.to_string())
    }

    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Self::Display(format!("{:?}", value))
    }

    /// The fallback form for a value of type `T`
    pub fn opaque<T: ?Sized>() -> Self {
        Self::Opaque(short_type_name(std::any::type_name::<T>()))
    }

    /// The unquoted form, as used for return values
    pub fn plain(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) | Self::Display(s) => Cow::Borrowed(s),
            Self::Opaque(_) => Cow::Owned(self.to_string()),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "\"{}\"", s),
            Self::Display(s) => f.write_str(s),
            Self::Opaque(name) => write!(f, "{} unrepresentable object", name),
        }
    }
}

/// Strip module paths from a type name, keeping generic arguments:
/// `alloc::vec::Vec<my::Item>` becomes `Vec<Item>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            c => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}

/// Values that know their best textual form for call logging.
pub trait Displayable {
    fn to_arg_value(&self) -> ArgValue;
}

macro_rules! impl_displayable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Displayable for $ty {
                fn to_arg_value(&self) -> ArgValue {
                    ArgValue::display(self)
                }
            }
        )*
    };
}

impl_displayable_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

// Floats use the debug form, which keeps the fractional part of whole
// values: `2.0`, not `2`.
impl Displayable for f32 {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::debug(self)
    }
}

impl Displayable for f64 {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::debug(self)
    }
}

impl Displayable for str {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::text(self)
    }
}

impl Displayable for String {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::text(self.as_str())
    }
}

impl Displayable for char {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::text(self.to_string())
    }
}

impl Displayable for Cow<'_, str> {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::text(self.as_ref())
    }
}

impl Displayable for Path {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::text(self.display().to_string())
    }
}

impl Displayable for PathBuf {
    fn to_arg_value(&self) -> ArgValue {
        self.as_path().to_arg_value()
    }
}

impl Displayable for () {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::Display("()".to_string())
    }
}

impl<T: Displayable + ?Sized> Displayable for &T {
    fn to_arg_value(&self) -> ArgValue {
        (**self).to_arg_value()
    }
}

impl<T: Displayable + ?Sized> Displayable for Box<T> {
    fn to_arg_value(&self) -> ArgValue {
        (**self).to_arg_value()
    }
}

impl<T: Displayable> Displayable for Option<T> {
    fn to_arg_value(&self) -> ArgValue {
        match self {
            Some(value) => ArgValue::Display(format!("Some({})", value.to_arg_value())),
            None => ArgValue::Display("None".to_string()),
        }
    }
}

impl<T: Displayable, E: fmt::Display> Displayable for Result<T, E> {
    fn to_arg_value(&self) -> ArgValue {
        match self {
            Ok(value) => ArgValue::Display(format!("Ok({})", value.to_arg_value())),
            Err(err) => ArgValue::Display(format!("Err({})", err)),
        }
    }
}

impl<T: Displayable> Displayable for [T] {
    fn to_arg_value(&self) -> ArgValue {
        let items: Vec<String> = self.iter().map(|v| v.to_arg_value().to_string()).collect();
        ArgValue::Display(format!("[{}]", items.join(", ")))
    }
}

impl<T: Displayable> Displayable for Vec<T> {
    fn to_arg_value(&self) -> ArgValue {
        self.as_slice().to_arg_value()
    }
}

impl<T: Displayable, const N: usize> Displayable for [T; N] {
    fn to_arg_value(&self) -> ArgValue {
        self.as_slice().to_arg_value()
    }
}

/// Renders the wrapped value with its `Debug` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Debugged<T>(pub T);

impl<T: fmt::Debug> Displayable for Debugged<T> {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::debug(&self.0)
    }
}

impl<T> Deref for Debugged<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// Renders the wrapped value as `<TypeName> unrepresentable object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Opaque<T>(pub T);

impl<T> Displayable for Opaque<T> {
    fn to_arg_value(&self) -> ArgValue {
        ArgValue::opaque::<T>()
    }
}

impl<T> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

/// A named argument. Dereferences to the wrapped value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keyword<T> {
    pub name: &'static str,
    pub value: T,
}

impl<T> Keyword<T> {
    pub fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Keyword<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

/// Rendered arguments of one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    args: Vec<ArgValue>,
    kwargs: Vec<(&'static str, ArgValue)>,
}

impl CallArgs {
    pub fn push_positional(&mut self, value: ArgValue) {
        self.args.push(value);
    }

    pub fn push_keyword(&mut self, name: &'static str, value: ArgValue) {
        self.kwargs.push((name, value));
    }

    /// Positional arguments, comma separated
    pub fn positional(&self) -> String {
        self.args
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Keyword arguments as `name: value`, comma separated
    pub fn keywords(&self) -> String {
        self.kwargs
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One element of an argument tuple.
pub trait Argument {
    fn record(&self, call: &mut CallArgs);
}

impl<T: Displayable + ?Sized> Argument for T {
    fn record(&self, call: &mut CallArgs) {
        call.push_positional(self.to_arg_value());
    }
}

impl<T: Displayable> Argument for Keyword<T> {
    fn record(&self, call: &mut CallArgs) {
        call.push_keyword(self.name, self.value.to_arg_value());
    }
}

/// Argument lists a call-logging wrapper can describe.
///
/// Implemented for `()` and for tuples of up to eight [`Argument`]s.
pub trait CallArguments {
    fn call_args(&self) -> CallArgs;
}

impl CallArguments for () {
    fn call_args(&self) -> CallArgs {
        CallArgs::default()
    }
}

macro_rules! impl_call_arguments {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Argument),+> CallArguments for ($($ty,)+) {
            fn call_args(&self) -> CallArgs {
                let ($($var,)+) = self;
                let mut call = CallArgs::default();
                $($var.record(&mut call);)+
                call
            }
        }
    };
}

impl_call_arguments!(A a);
impl_call_arguments!(A a, B b);
impl_call_arguments!(A a, B b, C c);
impl_call_arguments!(A a, B b, C c, D d);
impl_call_arguments!(A a, B b, C c, D d, E e);
impl_call_arguments!(A a, B b, C c, D d, E e, F f);
impl_call_arguments!(A a, B b, C c, D d, E e, F f, G g);
impl_call_arguments!(A a, B b, C c, D d, E e, F f, G g, H h);

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
    }

    #[derive(Debug)]
    struct Pair(u8, u8);

    #[test]
    fn test_value_tiers() {
        assert_eq!("abc".to_arg_value().to_string(), "\"abc\"");
        assert_eq!(String::from("abc").to_arg_value().plain(), "abc");
        assert_eq!(42u32.to_arg_value().to_string(), "42");
        assert_eq!(2.0f64.to_arg_value().to_string(), "2.0");
        assert_eq!(0.25f32.to_arg_value().to_string(), "0.25");
        assert_eq!(vec![2.0f64, 5.5].to_arg_value().to_string(), "[2.0, 5.5]");
        assert_eq!(Debugged(Pair(1, 2)).to_arg_value().to_string(), "Pair(1, 2)");
        assert_eq!(
            Opaque(Point { x: 1 }).to_arg_value().to_string(),
            "Point unrepresentable object"
        );
        assert_eq!(Opaque(Point { x: 7 }).x, 7);
    }

    #[test]
    fn test_containers() {
        assert_eq!(vec![1, 2, 3].to_arg_value().to_string(), "[1, 2, 3]");
        assert_eq!(["a", "b"].to_arg_value().to_string(), r#"["a", "b"]"#);
        assert_eq!(Some("x").to_arg_value().to_string(), r#"Some("x")"#);
        assert_eq!(None::<i32>.to_arg_value().to_string(), "None");
        assert_eq!(
            Ok::<_, String>(5).to_arg_value().to_string(),
            "Ok(5)"
        );
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("alloc::vec::Vec<my::Item>"), "Vec<Item>");
        assert_eq!(
            short_type_name("std::collections::HashMap<u8, a::B>"),
            "HashMap<u8, B>"
        );
        assert_eq!(short_type_name("Plain"), "Plain");
    }

    #[test]
    fn test_call_args_from_tuples() {
        assert_eq!(().call_args(), CallArgs::default());

        let call = (1, "two", Keyword::new("three", 3.5), Keyword::new("four", 'x')).call_args();
        assert_eq!(call.positional(), r#"1, "two""#);
        assert_eq!(call.keywords(), r#"three: 3.5, four: "x""#);
    }

    #[test]
    fn test_keyword_deref() {
        let kw = Keyword::new("n", 10);
        assert_eq!(*kw + 1, 11);
        assert_eq!(kw.into_inner(), 10);
    }
}
