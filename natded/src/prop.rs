//! Propositions, that is, descriptions of logical statements.
//!
//! A proposition is not a claim that the statement holds;
//! for that, see [`Proof`](crate::Proof).

use crate::numbers::Relation;
use crate::predicate::Value;
use crate::{Args, Object, Set};
use core::fmt::{self, Display};

/// Logical statement.
///
/// Two propositions are equal iff they have the same structure,
/// where objects and sets are compared by their canonical texts.
/// Consequently, equal propositions have equal canonical texts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Prop {
    /// statement without structure, possibly with the arguments it was built from
    Atom(String, Args<Value>),
    /// the contradiction
    False,
    /// binary connective
    Bin(Box<Prop>, Op, Box<Prop>),
    Quant(Quantifier, Object, Box<Prop>),
    /// membership of an object in a set
    Mem(Object, Set),
    /// ordering between two objects
    Ord(Object, Relation, Object),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Op {
    Impl,
    Conj,
    Disj,
    EqFm,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Quantifier {
    Forall,
    Exists,
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Forall => write!(f, "∀"),
            Quantifier::Exists => write!(f, "∃"),
        }
    }
}

impl Display for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Prop::*;
        match self {
            Atom(p, args) => write!(f, "{}{}", p, args),
            False => write!(f, "⊥"),
            Bin(l, Op::Impl, r) if **r == False => write!(f, "¬{}", l),
            Bin(l, o, r) => {
                let name = match o {
                    Op::Impl => "Implies",
                    Op::Conj => "And",
                    Op::Disj => "Or",
                    Op::EqFm => "Equiv",
                };
                write!(f, "{}({}, {})", name, l, r)
            }
            Quant(q, v, p) => write!(f, "{}{}, {}", q, v, p),
            Mem(x, s) => write!(f, "{} ∈ {}", x, s),
            Ord(x, r, y) => write!(f, "{} {} {}", x, r, y),
        }
    }
}

impl core::ops::Neg for Prop {
    type Output = Self;
    fn neg(self) -> Self {
        Self::not(self)
    }
}

impl core::ops::BitAnd for Prop {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl core::ops::BitOr for Prop {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

impl Prop {
    /// Create an atom without arguments.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into(), Args::new())
    }

    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    pub fn equiv(l: Self, r: Self) -> Self {
        Self::bin(l, Op::EqFm, r)
    }

    /// Negate a proposition.
    ///
    /// Negation is implication of the contradiction,
    /// and negating a negation yields the negated proposition.
    ///
    /// ~~~
    /// # use natded::Prop;
    /// let a = Prop::atom("A");
    /// assert_eq!(Prop::not(a.clone()), Prop::imp(a.clone(), Prop::False));
    /// assert_eq!(Prop::not(Prop::not(a.clone())), a);
    /// assert_eq!((-a).to_string(), "¬A");
    /// ~~~
    pub fn not(p: Self) -> Self {
        match p {
            Self::Bin(l, Op::Impl, r) if *r == Self::False => *l,
            p => Self::imp(p, Self::False),
        }
    }

    pub fn quant(q: Quantifier, v: Object, p: Self) -> Self {
        Self::Quant(q, v, Box::new(p))
    }

    pub fn forall(v: Object, p: Self) -> Self {
        Self::quant(Quantifier::Forall, v, p)
    }

    pub fn exists(v: Object, p: Self) -> Self {
        Self::quant(Quantifier::Exists, v, p)
    }

    pub fn mem(x: Object, s: Set) -> Self {
        Self::Mem(x, s)
    }

    pub fn ord(x: Object, r: Relation, y: Object) -> Self {
        Self::Ord(x, r, y)
    }

    /// Return the operands of a binary connective.
    pub fn as_bin(&self, op: Op) -> Option<(&Self, &Self)> {
        match self {
            Self::Bin(l, o, r) if *o == op => Some((&**l, &**r)),
            _ => None,
        }
    }

    /// Return the antecedent and the consequent of an implication.
    pub fn as_imp(&self) -> Option<(&Self, &Self)> {
        self.as_bin(Op::Impl)
    }

    /// Return `p` if the proposition is `¬p`.
    pub fn negated(&self) -> Option<&Self> {
        self.as_imp().and_then(|(l, r)| (*r == Self::False).then_some(l))
    }

    /// Return the quantifier, the bound variable and the body of a quantified proposition.
    pub fn as_quant(&self) -> Option<(Quantifier, &Object, &Self)> {
        match self {
            Self::Quant(q, v, p) => Some((*q, v, &**p)),
            _ => None,
        }
    }

    /// Replace all free occurrences of `var` by `by`.
    ///
    /// Occurrences bound by a quantifier over `var` are left untouched.
    /// A quantifier binding `by` is renamed to a fresh variable of the same set,
    /// so that `by` is not captured.
    pub fn subst(&self, var: &Object, by: &Object) -> Self {
        use Prop::*;
        let obj = |o: &Object| if o == var { by.clone() } else { o.clone() };
        match self {
            Atom(p, args) => Atom(p.clone(), args.subst(var, by)),
            False => False,
            Bin(l, o, r) => Self::bin(l.subst(var, by), *o, r.subst(var, by)),
            Quant(_, v, _) if v == var => self.clone(),
            Quant(q, v, p) if v == by && p.occurs(var) => {
                let fresh = v.renamed();
                Self::quant(*q, fresh.clone(), p.subst(v, &fresh).subst(var, by))
            }
            Quant(q, v, p) => Self::quant(*q, v.clone(), p.subst(var, by)),
            Mem(x, s) => Mem(obj(x), s.clone()),
            Ord(x, r, y) => Ord(obj(x), *r, obj(y)),
        }
    }

    /// Return true if `var` occurs free in the proposition.
    pub fn occurs(&self, var: &Object) -> bool {
        use Prop::*;
        match self {
            Atom(_, args) => args.objects().any(|o| o == var),
            False => false,
            Bin(l, _, r) => l.occurs(var) || r.occurs(var),
            Quant(_, v, p) => v != var && p.occurs(var),
            Mem(x, _) => x == var,
            Ord(x, _, y) => x == var || y == var,
        }
    }
}
