//! Number sets, numeric literals and ordering relations.
//!
//! Numbers are objects whose names are numeric literals, such as
//! `3` (natural), `-1/2` (rational) or `1.56` (real).
//! Literals are read as exact rationals, so
//! comparisons and arithmetic are exact.

use crate::error::Result;
use crate::set::{Objects, Set, SetKind};
use crate::Object;
use core::cell::RefCell;
use core::cmp::Ordering;
use core::fmt::{self, Display};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

/// The number sets, from the smallest to the largest.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberKind {
    Naturals,
    Rationals,
    Reals,
}

impl NumberKind {
    /// Return true if the name is a literal of this kind.
    pub fn is_literal(self, name: &str) -> bool {
        match self {
            Self::Naturals => !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()),
            Self::Rationals => !name.contains('.') && rational(name).is_some(),
            Self::Reals => rational(name).is_some(),
        }
    }
}

pub(crate) struct NumberSet {
    kind: NumberKind,
    members: RefCell<Vec<Object>>,
    /// the next smaller number set, whose elements are all contained in this set
    smaller: Option<Set>,
}

impl NumberSet {
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn smaller(&self) -> Option<&Set> {
        self.smaller.as_ref()
    }

    pub fn members(&self) -> &RefCell<Vec<Object>> {
        &self.members
    }

    pub fn contains(&self, this: &Set, x: &Object) -> bool {
        let owned = x.set().map_or(false, |s| {
            s.ptr_eq(this) || s.number_kind().map_or(false, |k| k <= self.kind)
        });
        self.kind.is_literal(x.name())
            || owned
            || self.members.borrow().contains(x)
            || self.smaller.as_ref().map_or(false, |s| s.contains(x))
    }

    /// Enumerate the naturals, starting from 1.
    pub fn iter(&self, this: &Set) -> Option<Objects> {
        match self.kind {
            NumberKind::Naturals => {
                let this = this.clone();
                Some(Box::new((1_u64..).map(move |i| Object::in_set(i.to_string(), &this))))
            }
            NumberKind::Rationals | NumberKind::Reals => None,
        }
    }
}

/// The naturals, the rationals containing them, and the reals containing those.
#[derive(Clone, Debug)]
pub struct Numbers {
    pub naturals: Set,
    pub rationals: Set,
    pub reals: Set,
}

impl Default for Numbers {
    fn default() -> Self {
        Self::new()
    }
}

impl Numbers {
    pub fn new() -> Self {
        let naturals = number_set("N", NumberKind::Naturals, None);
        let rationals = number_set("Q", NumberKind::Rationals, Some(naturals.clone()));
        let reals = number_set("R", NumberKind::Reals, Some(rationals.clone()));
        Self {
            naturals,
            rationals,
            reals,
        }
    }

    /// Return a number owned by the smallest set having it as literal.
    ///
    /// ~~~
    /// # use natded::{numbers::Numbers, Object};
    /// let nums = Numbers::new();
    /// let half = nums.literal("1/2").unwrap();
    /// assert!(half.set().unwrap().ptr_eq(&nums.rationals));
    /// assert!(nums.literal("x").is_none());
    /// ~~~
    pub fn literal(&self, name: &str) -> Option<Object> {
        [&self.naturals, &self.rationals, &self.reals]
            .into_iter()
            .find(|s| s.number_kind().map_or(false, |k| k.is_literal(name)))
            .map(|s| Object::in_set(name, s))
    }
}

fn number_set(name: &str, kind: NumberKind, smaller: Option<Set>) -> Set {
    let members = RefCell::new(Vec::new());
    let set = NumberSet {
        kind,
        members,
        smaller,
    };
    Set::from_kind(name, SetKind::Number(set))
}

/// Read a numeric literal as exact rational.
///
/// ~~~
/// # use natded::numbers::rational;
/// assert_eq!(rational("1.5"), rational("3/2"));
/// assert_eq!(rational("-.25"), rational("-1/4"));
/// assert!(rational("1/0").is_none());
/// assert!(rational("eps").is_none());
/// ~~~
pub fn rational(name: &str) -> Option<BigRational> {
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    match name.split_once('.') {
        Some((int, frac)) => {
            let unsigned = int.strip_prefix('-').unwrap_or(int);
            if !digits(unsigned) || !digits(frac) || unsigned.len() + frac.len() == 0 {
                return None;
            }
            let numer: BigInt = format!("{}{}", int, frac).parse().ok()?;
            let denom = num_traits::pow(BigInt::from(10), frac.len());
            Some(BigRational::new(numer, denom))
        }
        None => name.parse().ok(),
    }
}

/// Ordering relation between two objects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Relation {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl Relation {
    /// Return true if the relation holds for the given comparison result.
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Self::Lt => ord.is_lt(),
            Self::Le => ord.is_le(),
            Self::Gt => ord.is_gt(),
            Self::Ge => ord.is_ge(),
            Self::Eq => ord.is_eq(),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lt => write!(f, "<"),
            Self::Le => write!(f, "≤"),
            Self::Gt => write!(f, ">"),
            Self::Ge => write!(f, "≥"),
            Self::Eq => write!(f, "="),
        }
    }
}

/// Evaluate a relation between two numbers.
///
/// Return `None` if one of the objects is not a numeric literal.
pub fn evaluate(x: &Object, rel: Relation, y: &Object) -> Option<bool> {
    let (x, y) = (rational(x.name())?, rational(y.name())?);
    Some(rel.holds(x.cmp(&y)))
}

type BinOp = fn(BigRational, BigRational) -> BigRational;

fn arith(set: &Set, x: &Object, y: &Object, op: char, f: BinOp) -> Result<Object> {
    let name = match (rational(x.name()), rational(y.name())) {
        (Some(a), Some(b)) => {
            let r = f(a, b);
            if r.denom().is_one() {
                r.numer().to_string()
            } else {
                r.to_string()
            }
        }
        _ => format!("{} {} {}", x, op, y),
    };
    // naturals are not closed under subtraction
    let leaves = set.number_kind() == Some(NumberKind::Naturals)
        && rational(&name).is_some()
        && !NumberKind::Naturals.is_literal(&name);
    Ok(if leaves {
        Object::new(name)
    } else {
        Object::in_set(name, set)
    })
}

pub(crate) fn add(set: &Set, x: &Object, y: &Object) -> Result<Object> {
    arith(set, x, y, '+', |a, b| a + b)
}

pub(crate) fn sub(set: &Set, x: &Object, y: &Object) -> Result<Object> {
    arith(set, x, y, '-', |a, b| a - b)
}

#[test]
fn literals() {
    use NumberKind::*;
    assert!(Naturals.is_literal("42"));
    assert!(!Naturals.is_literal("-1"));
    assert!(Rationals.is_literal("-1/3"));
    assert!(!Rationals.is_literal("1.5"));
    assert!(Reals.is_literal("1.5"));
    assert!(!Reals.is_literal("1.5.2"));
}
