use crate::error::{Error, Result};
use crate::set::{Set, WeakSet};
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicUsize, Ordering};
use std::rc::Rc;

static OBJECTS: AtomicUsize = AtomicUsize::new(0);

/// Element of the domain of discourse.
///
/// Objects are cheap to clone; clones share identity.
/// Two objects are equal iff their canonical texts are equal,
/// that is, iff they have the same name,
/// or they are both unnamed and share identity.
#[derive(Clone)]
pub struct Object(Rc<ObjectCell>);

struct ObjectCell {
    id: usize,
    name: String,
    /// set that knows how to add and subtract this object;
    /// this is a back reference, not ownership
    set: Option<WeakSet>,
    /// components of a tuple object
    components: Vec<Object>,
}

impl Object {
    fn make(name: String, set: Option<WeakSet>, components: Vec<Object>) -> Self {
        let id = OBJECTS.fetch_add(1, Ordering::Relaxed) + 1;
        Self(Rc::new(ObjectCell {
            id,
            name,
            set,
            components,
        }))
    }

    /// Create a named object without owning set.
    pub fn new(name: impl Into<String>) -> Self {
        Self::make(name.into(), None, Vec::new())
    }

    /// Create a named object owned by the given set.
    ///
    /// The object is not inserted into the set,
    /// but number sets consider objects they own as members.
    pub fn in_set(name: impl Into<String>, set: &Set) -> Self {
        Self::make(name.into(), Some(set.downgrade()), Vec::new())
    }

    /// Create an unnamed object, rendered by its identity.
    pub fn fresh() -> Self {
        Self::new("")
    }

    pub(crate) fn fresh_in(set: Option<Set>) -> Self {
        Self::make(String::new(), set.map(|s| s.downgrade()), Vec::new())
    }

    /// Create an unnamed object restricted to the same set as `self`.
    pub(crate) fn renamed(&self) -> Self {
        Self::make(String::new(), self.0.set.clone(), Vec::new())
    }

    /// Create a tuple object from its components.
    ///
    /// ~~~
    /// # use natded::Object;
    /// let t = Object::tuple(vec![Object::new("1"), Object::new("x")]);
    /// assert_eq!(t.to_string(), "(1, x)");
    /// ~~~
    pub fn tuple(components: Vec<Object>) -> Self {
        let name = crate::Args::from_iter(components.iter()).to_string();
        let name = if name.is_empty() { "()".to_string() } else { name };
        Self::make(name, None, components)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    /// Return the owning set, if it is still alive.
    pub fn set(&self) -> Option<Set> {
        self.0.set.as_ref().and_then(|s| s.upgrade())
    }

    /// Return the set restricting this object when it is a bound variable.
    ///
    /// Fails if the object was created in a set that no longer exists,
    /// because membership in it can then not be decided.
    pub(crate) fn domain(&self) -> Result<Option<Set>> {
        match &self.0.set {
            None => Ok(None),
            Some(weak) => weak.upgrade().map(Some).ok_or_else(|| Error::DroppedDomain {
                object: self.to_string(),
            }),
        }
    }

    /// Return the components of a tuple object, or nothing for other objects.
    pub fn components(&self) -> &[Object] {
        &self.0.components
    }

    pub fn is_tuple(&self) -> bool {
        !self.0.components.is_empty()
    }

    /// Return true if both objects share identity.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn arithmetic(&self) -> Result<Set> {
        let no_arith = || Error::NoArithmetic {
            object: self.to_string(),
        };
        let set = self.set().ok_or_else(no_arith)?;
        if set.number_kind().is_some() {
            Ok(set)
        } else {
            Err(no_arith())
        }
    }

    /// Add two objects, dispatching on the owning set of `self`.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        crate::numbers::add(&self.arithmetic()?, self, other)
    }

    /// Subtract two objects, dispatching on the owning set of `self`.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        crate::numbers::sub(&self.arithmetic()?, self, other)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self.name(), other.name()) {
            ("", "") => self.id() == other.id(),
            (l, r) => l == r,
        }
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.name() {
            "" => self.id().hash(state),
            name => name.hash(state),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "" => write!(f, "Obj(e_{})", self.id()),
            name => f.write_str(name),
        }
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self)
    }
}

impl core::ops::Add for &Object {
    type Output = Result<Object>;
    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl core::ops::Sub for &Object {
    type Output = Result<Object>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Object {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[test]
fn unnamed_objects_differ() {
    let (a, b) = (Object::fresh(), Object::fresh());
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert_eq!(Object::new("x"), Object::new("x"));
    assert!(a.to_string().starts_with("Obj(e_"));
}
