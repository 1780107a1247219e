//! Sets of objects.
//!
//! A set is a reference-counted handle.
//! State such as the members of a plain set or
//! the memoised images of a function set is owned by the handle,
//! so two sets never share state, even if they have the same name.

use crate::error::{Error, Result};
use crate::numbers::{NumberKind, NumberSet};
use crate::Object;
use core::cell::RefCell;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use hashbrown::HashMap;
use log::trace;
use std::rc::{Rc, Weak};

/// A possibly infinite sequence of objects.
pub type Objects = Box<dyn Iterator<Item = Object>>;

/// Closed-form definition of a function set.
pub type Definition = Rc<dyn Fn(&Object) -> Result<Object>>;

#[derive(Clone)]
pub struct Set(Rc<SetCell>);

/// Back reference from an object to its owning set.
#[derive(Clone)]
pub(crate) struct WeakSet(Weak<SetCell>);

pub(crate) struct SetCell {
    name: String,
    kind: SetKind,
}

pub(crate) enum SetKind {
    Plain(PlainSet),
    Product(ProductSet),
    Function(FunctionSet),
    Number(NumberSet),
}

pub(crate) struct PlainSet {
    members: RefCell<Vec<Object>>,
}

pub(crate) struct ProductSet {
    factors: Vec<Set>,
}

/// Total onto function from a domain to a range.
pub(crate) struct FunctionSet {
    domain: Set,
    range: Set,
    /// images of inputs, indexed by input identity
    memo: RefCell<HashMap<usize, Object>>,
    definition: Option<Definition>,
}

impl WeakSet {
    pub fn upgrade(&self) -> Option<Set> {
        self.0.upgrade().map(Set)
    }
}

impl Set {
    pub(crate) fn from_kind(name: impl Into<String>, kind: SetKind) -> Self {
        let name = name.into();
        Self(Rc::new(SetCell { name, kind }))
    }

    /// Create an empty set with explicit members.
    pub fn plain(name: impl Into<String>) -> Self {
        let members = RefCell::new(Vec::new());
        Self::from_kind(name, SetKind::Plain(PlainSet { members }))
    }

    /// Create the Cartesian product of the given sets.
    pub fn product(name: impl Into<String>, factors: Vec<Set>) -> Self {
        Self::from_kind(name, SetKind::Product(ProductSet { factors }))
    }

    /// Create a function set whose images are created on demand.
    pub fn function(name: impl Into<String>, domain: &Set, range: &Set) -> Self {
        Self::function_set(name, domain, range, None)
    }

    /// Create a function set with a closed-form definition.
    ///
    /// The definition takes precedence over memoisation and
    /// is evaluated for any input, also outside of the domain.
    pub fn defined(
        name: impl Into<String>,
        domain: &Set,
        range: &Set,
        definition: impl Fn(&Object) -> Result<Object> + 'static,
    ) -> Self {
        Self::function_set(name, domain, range, Some(Rc::new(definition)))
    }

    fn function_set(
        name: impl Into<String>,
        domain: &Set,
        range: &Set,
        definition: Option<Definition>,
    ) -> Self {
        let fun = FunctionSet {
            domain: domain.clone(),
            range: range.clone(),
            memo: Default::default(),
            definition,
        };
        Self::from_kind(name, SetKind::Function(fun))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub(crate) fn kind(&self) -> &SetKind {
        &self.0.kind
    }

    pub(crate) fn downgrade(&self) -> WeakSet {
        WeakSet(Rc::downgrade(&self.0))
    }

    /// Return true if both sets share identity (and thus state).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Return true if every element of `other` is known to be an element of `self`.
    ///
    /// This holds for identical sets and for a number set
    /// that extends `other`, such as the reals with respect to the naturals.
    pub fn includes(&self, other: &Set) -> bool {
        self.ptr_eq(other)
            || match self.kind() {
                SetKind::Number(n) => n.smaller().map_or(false, |s| s.includes(other)),
                _ => false,
            }
    }

    pub fn number_kind(&self) -> Option<NumberKind> {
        match self.kind() {
            SetKind::Number(n) => Some(n.kind()),
            _ => None,
        }
    }

    /// Return true if the object is an element of the set.
    pub fn contains(&self, x: &Object) -> bool {
        match self.kind() {
            SetKind::Plain(p) => p.members.borrow().contains(x),
            SetKind::Product(p) => {
                let cs = x.components();
                x.is_tuple()
                    && cs.len() == p.factors.len()
                    && p.factors.iter().zip(cs).all(|(s, c)| s.contains(c))
            }
            SetKind::Function(_) => false,
            SetKind::Number(n) => n.contains(self, x),
        }
    }

    /// Return true if iterating over the set terminates.
    pub fn is_finite(&self) -> bool {
        match self.kind() {
            SetKind::Plain(_) => true,
            SetKind::Product(p) => p.factors.iter().all(|s| s.is_finite()),
            SetKind::Function(_) | SetKind::Number(_) => false,
        }
    }

    /// Return true if objects can be added to the set.
    pub fn is_extensible(&self) -> bool {
        matches!(self.kind(), SetKind::Plain(_) | SetKind::Number(_))
    }

    /// Add an object to the members of the set.
    ///
    /// Adding an object that is already a member has no effect.
    pub fn insert(&self, x: &Object) -> Result<()> {
        let members = match self.kind() {
            SetKind::Plain(p) => &p.members,
            SetKind::Number(n) => n.members(),
            _ => {
                return Err(Error::NotExtensible {
                    set: self.to_string(),
                })
            }
        };
        let mut members = members.borrow_mut();
        if !members.contains(x) {
            trace!("insert {} into {}", x, self);
            members.push(x.clone())
        }
        Ok(())
    }

    /// Enumerate the elements of the set.
    ///
    /// The product of sets is enumerated lazily,
    /// where only the first factor may be infinite.
    pub fn iter(&self) -> Result<Objects> {
        let not_iterable = || Error::NotIterable {
            set: self.to_string(),
        };
        match self.kind() {
            SetKind::Plain(p) => Ok(Box::new(p.members.borrow().clone().into_iter())),
            SetKind::Product(p) => {
                let (first, rest) = p.factors.split_first().ok_or_else(not_iterable)?;
                if !rest.iter().all(|s| s.is_finite()) {
                    return Err(not_iterable());
                }
                let rest = rest
                    .iter()
                    .map(|s| s.iter().map(|xs| xs.collect()))
                    .collect::<Result<Vec<Vec<_>>>>()?;
                let tails = Rc::new(cartesian(&rest));
                Ok(Box::new(first.iter()?.flat_map(move |head| {
                    let tails = tails.clone();
                    (0..tails.len()).map(move |i| {
                        let tuple = core::iter::once(head.clone()).chain(tails[i].iter().cloned());
                        Object::tuple(tuple.collect())
                    })
                })))
            }
            SetKind::Function(_) => Err(not_iterable()),
            SetKind::Number(n) => n.iter(self).ok_or_else(not_iterable),
        }
    }

    /// Apply a function set to an object.
    ///
    /// Without definition, the same input object always yields the same image,
    /// and a new image is inserted into the range if that is extensible.
    pub fn apply(&self, x: &Object) -> Result<Object> {
        let fun = match self.kind() {
            SetKind::Function(fun) => fun,
            _ => {
                return Err(Error::NotAFunction {
                    set: self.to_string(),
                })
            }
        };
        if let Some(def) = &fun.definition {
            return def(x);
        }
        if !fun.domain.contains(x) {
            return Err(Error::NotAMember {
                element: x.to_string(),
                set: fun.domain.to_string(),
            });
        }
        if let Some(y) = fun.memo.borrow().get(&x.id()) {
            return Ok(y.clone());
        }
        let y = Object::in_set(format!("{}({})", self, x), &fun.range);
        trace!("new image {} in {}", y, fun.range);
        fun.memo.borrow_mut().insert(x.id(), y.clone());
        if fun.range.is_extensible() {
            fun.range.insert(&y)?
        }
        Ok(y)
    }

    /// Return the name of the set together with its construction.
    ///
    /// ~~~
    /// # use natded::Set;
    /// let (n, r) = (Set::plain("N"), Set::plain("R"));
    /// assert_eq!(Set::product("NxR", vec![n.clone(), r.clone()]).signature(), "NxR:N×R");
    /// assert_eq!(Set::function("f", &n, &r).signature(), "f:N->R");
    /// ~~~
    pub fn signature(&self) -> String {
        match self.kind() {
            SetKind::Product(p) => {
                let factors: Vec<_> = p.factors.iter().map(|s| s.name()).collect();
                format!("{}:{}", self, factors.join("×"))
            }
            SetKind::Function(f) => format!("{}:{}->{}", self, f.domain, f.range),
            SetKind::Plain(_) | SetKind::Number(_) => self.to_string(),
        }
    }
}

/// Cartesian product of finitely many finite sequences.
fn cartesian(seqs: &[Vec<Object>]) -> Vec<Vec<Object>> {
    let mut acc = Vec::from([Vec::new()]);
    for seq in seqs {
        let mut next = Vec::with_capacity(acc.len() * seq.len());
        for pre in &acc {
            for x in seq {
                let mut tuple: Vec<Object> = pre.clone();
                tuple.push(x.clone());
                next.push(tuple)
            }
        }
        acc = next
    }
    acc
}

impl PartialEq for Set {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Set {}

impl Hash for Set {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state)
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Debug for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Set({})", self.signature())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Set {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[test]
fn cartesian_order() {
    let names = |v: &Vec<Object>| v.iter().map(|o| o.to_string()).collect::<Vec<_>>().join("");
    let ab = Vec::from([Object::new("a"), Object::new("b")]);
    let xy = Vec::from([Object::new("x"), Object::new("y")]);
    let prod: Vec<_> = cartesian(&[ab, xy]).iter().map(names).collect();
    assert_eq!(prod, ["ax", "ay", "bx", "by"]);
    assert_eq!(cartesian(&[]), Vec::from([Vec::new()]));
}
