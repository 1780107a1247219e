use crate::predicate::Value;
use crate::Object;
use core::fmt::{self, Display};

/// Ordered arguments of an atom or components of a tuple.
///
/// Empty arguments are rendered as nothing, so that
/// an atom without arguments is rendered as its bare name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Args<T>(Vec<T>);

impl<T> Args<T> {
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl Args<Value> {
    /// Return the objects among the arguments.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.0.iter().filter_map(|v| match v {
            Value::Object(o) => Some(o),
            Value::Set(_) => None,
        })
    }

    /// Replace every object argument equal to `var` by `by`.
    pub fn subst(&self, var: &Object, by: &Object) -> Self {
        let subst = |v: &Value| match v {
            Value::Object(o) if o == var => Value::Object(by.clone()),
            v => v.clone(),
        };
        self.0.iter().map(subst).collect()
    }
}

impl<T: Display> Display for Args<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, arg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?
            }
            write!(f, "{}", arg)?
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for Args<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> core::ops::Deref for Args<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[test]
fn display() {
    assert_eq!(Args::<u8>::new().to_string(), "");
    assert_eq!(Args::from_iter([1, 2, 3]).to_string(), "(1, 2, 3)");
}
