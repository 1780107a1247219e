//! Predicates, that is, propositions with parameters.
//!
//! A predicate is applied to values one parameter at a time.
//! Once all its parameters are bound, it reduces to a proposition.
//!
//! ~~~
//! # use natded::{Bindings, Object, Predicate, Set};
//! let s = Set::plain("S");
//! let mem = Predicate::membership("p");
//! let partial = mem.apply(Bindings::new().bind("x", Object::new("a")), false)?;
//! assert_eq!(partial.to_string(), "a ∈ _");
//! let prop = partial.apply(Bindings::new().bind("set_", s), false)?;
//! assert_eq!(prop.to_string(), "a ∈ S");
//! # Ok::<(), natded::Error>(())
//! ~~~

use crate::error::{Error, Result};
use crate::numbers::Relation;
use crate::proof::{certify, Rule};
use crate::prop::{Op, Quantifier};
use crate::{Object, Proof, Prop, Set};
use core::fmt::{self, Display};
use log::{debug, trace};

/// Value that can be bound to a parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    Object(Object),
    Set(Set),
}

/// Kind of values that a parameter accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Object,
    Set,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Object(_) => Kind::Object,
            Self::Set(_) => Kind::Set,
        }
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Self::Object(o)
    }
}

impl From<Set> for Value {
    fn from(s: Set) -> Self {
        Self::Set(s)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(o) => o.fmt(f),
            Self::Set(s) => s.fmt(f),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Set => write!(f, "set"),
        }
    }
}

/// Parameter values, bound in the given order.
///
/// Parameters without value are ignored on application.
#[derive(Clone, Debug, Default)]
pub struct Bindings(Vec<(String, Option<Value>)>);

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a parameter to a value.
    pub fn bind(mut self, param: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((param.into(), Some(value.into())));
        self
    }

    /// Mention a parameter without binding it.
    pub fn absent(mut self, param: impl Into<String>) -> Self {
        self.0.push((param.into(), None));
        self
    }

    fn present(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0
            .iter()
            .filter_map(|(p, v)| v.as_ref().map(|v| (p.as_str(), v)))
    }
}

impl<S: Into<String>> FromIterator<(S, Option<Value>)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, Option<Value>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(p, v)| (p.into(), v)).collect())
    }
}

/// Proposition template with parameters, some of which may be bound.
#[derive(Clone, Debug)]
pub struct Predicate {
    name: String,
    /// declared parameters
    params: Vec<(String, Kind)>,
    /// `values[i]` is the value bound to `params[i]`, if any
    values: Vec<Option<Value>>,
    shape: Shape,
}

#[derive(Clone, Debug)]
enum Shape {
    /// reduces to an atom with the bound values as arguments
    Atom,
    /// `x ∈ set_`
    Membership,
    /// `x rel y`
    Ordering(Relation),
    /// composite, whose parameters are those of its parts
    Bin(Box<Node>, Op, Box<Node>),
    /// quantification over the first parameter
    Quant(Quantifier, Box<Node>),
    /// `∀x, x ∈ A ⇒ x ∈ B`
    Subset,
}

/// Part of a composite predicate.
#[derive(Clone, Debug)]
pub enum Node {
    Open(Predicate),
    Closed(Prop),
}

impl From<Predicate> for Node {
    fn from(p: Predicate) -> Self {
        Self::Open(p)
    }
}

impl From<Prop> for Node {
    fn from(p: Prop) -> Self {
        Self::Closed(p)
    }
}

impl From<Reduction> for Node {
    fn from(r: Reduction) -> Self {
        match r {
            Reduction::Partial(p) => Self::Open(p),
            Reduction::Complete(p) => Self::Closed(p),
            Reduction::Axiom(p) => Self::Closed(p.prop().clone()),
        }
    }
}

impl Node {
    /// Bind a parameter if the node still declares it.
    fn bind(&mut self, param: &str, value: &Value) -> Result<()> {
        if let Node::Open(p) = self {
            if p.position(param).is_some() {
                p.bind(param, value.clone())?;
                if p.arity() == 0 {
                    let prop = p.reduce_prop()?;
                    *self = Node::Closed(prop)
                }
            }
        }
        Ok(())
    }

    fn remaining(&self) -> Vec<(String, Kind)> {
        match self {
            Node::Open(p) => p.remaining().map(|(n, k)| (n.to_string(), k)).collect(),
            Node::Closed(_) => Vec::new(),
        }
    }

    fn closed(&self) -> Result<Prop> {
        match self {
            Node::Closed(p) => Ok(p.clone()),
            Node::Open(p) if p.arity() == 0 => p.reduce_prop(),
            Node::Open(p) => Err(p.mismatch("_", "parameters remain unbound")),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Open(p) => p.fmt(f),
            Node::Closed(p) => p.fmt(f),
        }
    }
}

/// Result of applying values to a predicate.
#[derive(Clone, Debug)]
pub enum Reduction {
    /// some parameters remain unbound
    Partial(Predicate),
    /// all parameters are bound
    Complete(Prop),
    /// all parameters are bound, and the proposition was asserted
    Axiom(Proof),
}

impl Reduction {
    /// Continue applying values to a partially applied predicate.
    ///
    /// A reduced proposition accepts only absent values.
    pub fn apply(self, bindings: Bindings, axiom: bool) -> Result<Self> {
        match self {
            Self::Partial(p) => p.apply(bindings, axiom),
            done => match bindings.present().next() {
                None => Ok(done),
                Some((param, _)) => Err(Error::KindMismatch {
                    predicate: done.to_string(),
                    param: param.to_string(),
                    reason: "proposition takes no arguments".to_string(),
                }),
            },
        }
    }

    /// Return the proof of an asserted proposition.
    pub fn into_proof(self) -> Result<Proof> {
        match self {
            Self::Axiom(proof) => Ok(proof),
            other => Err(Error::NotAnAxiom {
                prop: other.to_string(),
            }),
        }
    }

    /// Return the proposition, if all parameters are bound.
    pub fn into_prop(self) -> Option<Prop> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(prop) => Some(prop),
            Self::Axiom(proof) => Some(proof.prop().clone()),
        }
    }

    pub fn into_predicate(self) -> Option<Predicate> {
        match self {
            Self::Partial(p) => Some(p),
            _ => None,
        }
    }
}

impl Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(p) => p.fmt(f),
            Self::Complete(p) => p.fmt(f),
            Self::Axiom(p) => p.prop().fmt(f),
        }
    }
}

fn params<S: Into<String>>(ps: impl IntoIterator<Item = (S, Kind)>) -> Vec<(String, Kind)> {
    ps.into_iter().map(|(n, k)| (n.into(), k)).collect()
}

/// Append parameters that are not yet declared.
fn declare(params: &mut Vec<(String, Kind)>, new: Vec<(String, Kind)>) {
    for (n, k) in new {
        if params.iter().all(|(m, _)| *m != n) {
            params.push((n, k))
        }
    }
}

impl Predicate {
    fn with_shape(name: impl Into<String>, params: Vec<(String, Kind)>, shape: Shape) -> Self {
        let values = params.iter().map(|_| None).collect();
        let name = name.into();
        Self {
            name,
            params,
            values,
            shape,
        }
    }

    /// Create a predicate that reduces to an atom with its arguments.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        params: impl IntoIterator<Item = (S, Kind)>,
    ) -> Self {
        Self::with_shape(name, self::params(params), Shape::Atom)
    }

    /// Create a predicate without parameters, reducing to an atom.
    pub fn nullary(name: impl Into<String>) -> Self {
        Self::new::<&str>(name, [])
    }

    /// Create the predicate `x ∈ set_`.
    pub fn membership(name: impl Into<String>) -> Self {
        let ps = params([("x", Kind::Object), ("set_", Kind::Set)]);
        Self::with_shape(name, ps, Shape::Membership)
    }

    /// Create the predicate `x rel y`.
    pub fn ordering(name: impl Into<String>, rel: Relation) -> Self {
        let ps = params([("x", Kind::Object), ("y", Kind::Object)]);
        Self::with_shape(name, ps, Shape::Ordering(rel))
    }

    pub fn less_than(name: impl Into<String>) -> Self {
        Self::ordering(name, Relation::Lt)
    }

    pub fn greater_than(name: impl Into<String>) -> Self {
        Self::ordering(name, Relation::Gt)
    }

    pub fn less_or_eq(name: impl Into<String>) -> Self {
        Self::ordering(name, Relation::Le)
    }

    pub fn greater_or_eq(name: impl Into<String>) -> Self {
        Self::ordering(name, Relation::Ge)
    }

    pub fn equal(name: impl Into<String>) -> Self {
        Self::ordering(name, Relation::Eq)
    }

    /// Create a composite predicate from two parts.
    ///
    /// The composite declares the parameters of both parts,
    /// where a parameter declared by both parts is declared only once.
    pub fn bin(name: impl Into<String>, l: impl Into<Node>, op: Op, r: impl Into<Node>) -> Self {
        let (l, r) = (l.into(), r.into());
        let mut ps = l.remaining();
        declare(&mut ps, r.remaining());
        Self::with_shape(name, ps, Shape::Bin(Box::new(l), op, Box::new(r)))
    }

    pub fn implies(name: impl Into<String>, l: impl Into<Node>, r: impl Into<Node>) -> Self {
        Self::bin(name, l, Op::Impl, r)
    }

    pub fn and(name: impl Into<String>, l: impl Into<Node>, r: impl Into<Node>) -> Self {
        Self::bin(name, l, Op::Conj, r)
    }

    pub fn or(name: impl Into<String>, l: impl Into<Node>, r: impl Into<Node>) -> Self {
        Self::bin(name, l, Op::Disj, r)
    }

    /// Quantify over the parameter `var`.
    ///
    /// Binding `var` also binds the parameter `var` of the inner predicate.
    pub fn quantified(
        name: impl Into<String>,
        q: Quantifier,
        var: impl Into<String>,
        inner: impl Into<Node>,
    ) -> Self {
        let inner = inner.into();
        let var: String = var.into();
        let mut ps = Vec::from([(var, Kind::Object)]);
        declare(&mut ps, inner.remaining());
        Self::with_shape(name, ps, Shape::Quant(q, Box::new(inner)))
    }

    /// Create the predicate `∀x(inner)`.
    pub fn forall(name: impl Into<String>, inner: impl Into<Node>) -> Self {
        Self::quantified(name, Quantifier::Forall, "x", inner)
    }

    /// Create the predicate `∃x(inner)`.
    pub fn exists(name: impl Into<String>, inner: impl Into<Node>) -> Self {
        Self::quantified(name, Quantifier::Exists, "x", inner)
    }

    /// Create the predicate `A ⊆ B`, meaning `∀x, x ∈ A ⇒ x ∈ B`.
    ///
    /// The parameter `x` can only be bound after `A` and `B`.
    pub fn subset(name: impl Into<String>) -> Self {
        let ps = params([("x", Kind::Object), ("A", Kind::Set), ("B", Kind::Set)]);
        Self::with_shape(name, ps, Shape::Subset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the number of unbound parameters.
    pub fn arity(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Return the unbound parameters in declaration order.
    pub fn remaining(&self) -> impl Iterator<Item = (&str, Kind)> {
        let params = self.params.iter().zip(&self.values);
        params.filter_map(|((n, k), v)| v.is_none().then_some((n.as_str(), *k)))
    }

    /// Return the bound parameters and their values in declaration order.
    pub fn bound(&self) -> impl Iterator<Item = (&str, &Value)> {
        let params = self.params.iter().zip(&self.values);
        params.filter_map(|((n, _), v)| v.as_ref().map(|v| (n.as_str(), v)))
    }

    /// Return the value bound to a parameter.
    pub fn value(&self, param: &str) -> Option<&Value> {
        self.bound().find(|(n, _)| *n == param).map(|(_, v)| v)
    }

    /// Apply values to the predicate.
    ///
    /// Values are bound one at a time, in the given order.
    /// If no parameter remains unbound, the predicate reduces to a proposition,
    /// which is asserted if `axiom` is set.
    /// The receiver is never modified.
    pub fn apply(&self, bindings: Bindings, axiom: bool) -> Result<Reduction> {
        let mut pred = self.clone();
        for (param, value) in bindings.present() {
            pred.bind(param, value.clone())?;
        }
        if pred.arity() == 0 {
            pred.reduce(axiom)
        } else {
            Ok(Reduction::Partial(pred))
        }
    }

    /// Apply values that bind all remaining parameters.
    pub fn instantiate(&self, bindings: Bindings) -> Result<Prop> {
        match self.apply(bindings, false)? {
            Reduction::Partial(p) => {
                let param = p.remaining().next().map_or("_", |(n, _)| n);
                Err(p.mismatch(param, "parameter remains unbound"))
            }
            Reduction::Complete(prop) => Ok(prop),
            Reduction::Axiom(proof) => Ok(proof.prop().clone()),
        }
    }

    /// Apply values and assert the resulting proposition.
    pub fn assume(&self, bindings: Bindings) -> Result<Proof> {
        self.apply(bindings, true)?.into_proof()
    }

    fn position(&self, param: &str) -> Option<usize> {
        let mut params = self.params.iter().zip(&self.values);
        params.position(|((n, _), v)| n == param && v.is_none())
    }

    fn mismatch(&self, param: &str, reason: impl Into<String>) -> Error {
        Error::KindMismatch {
            predicate: self.to_string(),
            param: param.to_string(),
            reason: reason.into(),
        }
    }

    fn bind(&mut self, param: &str, value: Value) -> Result<()> {
        let i = match self.position(param) {
            Some(i) => i,
            None => return Err(self.mismatch(param, "not a remaining parameter")),
        };
        let kind = self.params[i].1;
        if value.kind() != kind {
            let reason = format!("expected {}, found {} {}", kind, value.kind(), value);
            return Err(self.mismatch(param, reason));
        }
        if matches!(self.shape, Shape::Subset) && i == 0 && self.arity() != 1 {
            return Err(Error::OutOfOrderBinding {
                predicate: self.to_string(),
                param: param.to_string(),
                remaining: self.arity(),
            });
        }
        trace!("{}: bind {} to {}", self, param, value);
        match &mut self.shape {
            Shape::Bin(l, _, r) => {
                l.bind(param, &value)?;
                r.bind(param, &value)?
            }
            Shape::Quant(_, inner) => inner.bind(param, &value)?,
            Shape::Atom | Shape::Membership | Shape::Ordering(_) | Shape::Subset => (),
        }
        self.values[i] = Some(value);
        Ok(())
    }

    fn object(&self, i: usize) -> Result<Object> {
        match &self.values[i] {
            Some(Value::Object(o)) => Ok(o.clone()),
            _ => Err(self.mismatch(&self.params[i].0, "object expected")),
        }
    }

    fn set(&self, i: usize) -> Result<Set> {
        match &self.values[i] {
            Some(Value::Set(s)) => Ok(s.clone()),
            _ => Err(self.mismatch(&self.params[i].0, "set expected")),
        }
    }

    fn reduce_prop(&self) -> Result<Prop> {
        Ok(match &self.shape {
            Shape::Atom => {
                let args = self.values.iter().flatten().cloned();
                Prop::Atom(self.name.clone(), args.collect())
            }
            Shape::Membership => Prop::mem(self.object(0)?, self.set(1)?),
            Shape::Ordering(rel) => Prop::ord(self.object(0)?, *rel, self.object(1)?),
            Shape::Bin(l, op, r) => Prop::bin(l.closed()?, *op, r.closed()?),
            Shape::Quant(q, inner) => Prop::quant(*q, self.object(0)?, inner.closed()?),
            Shape::Subset => {
                let x = self.object(0)?;
                let (a, b) = (self.set(1)?, self.set(2)?);
                let imp = Prop::imp(Prop::mem(x.clone(), a), Prop::mem(x.clone(), b));
                Prop::forall(x, imp)
            }
        })
    }

    /// Reduce a predicate without unbound parameters.
    ///
    /// Asserting a universal quantification also asserts its body,
    /// whereas asserting an existential quantification does not.
    fn reduce(&self, axiom: bool) -> Result<Reduction> {
        let prop = self.reduce_prop()?;
        debug!("reduce {} to {}", self, prop);
        if !axiom {
            return Ok(Reduction::Complete(prop));
        }
        let premises = match prop.as_quant() {
            Some((Quantifier::Forall, _, body)) => {
                Vec::from([certify(body.clone(), Rule::Axiom, Vec::new())])
            }
            _ => Vec::new(),
        };
        Ok(Reduction::Axiom(certify(prop, Rule::Axiom, premises)))
    }

    fn shown(&self, i: usize) -> String {
        match &self.values[i] {
            Some(v) => v.to_string(),
            None => "_".to_string(),
        }
    }
}

impl Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shape {
            Shape::Atom => {
                write!(f, "{}(", self.name)?;
                let mut bound = self.bound().peekable();
                if bound.peek().is_none() {
                    write!(f, "_")?
                }
                bound.try_for_each(|(n, v)| write!(f, "{}={},", n, v))?;
                write!(f, ")")
            }
            Shape::Membership => write!(f, "{} ∈ {}", self.shown(0), self.shown(1)),
            Shape::Ordering(rel) => write!(f, "{} {} {}", self.shown(0), rel, self.shown(1)),
            Shape::Bin(l, Op::Impl, r) => write!(f, "[{}=>{}]", l, r),
            Shape::Bin(l, Op::Conj, r) => write!(f, "{}∧{}", l, r),
            Shape::Bin(l, Op::Disj, r) => write!(f, "{}∨{}", l, r),
            Shape::Bin(l, Op::EqFm, r) => write!(f, "[{}<=>{}]", l, r),
            Shape::Quant(q, inner) => write!(f, "{}{}({})", q, self.shown(0), inner),
            Shape::Subset => write!(f, "{} ⊆ {}", self.shown(1), self.shown(2)),
        }
    }
}
