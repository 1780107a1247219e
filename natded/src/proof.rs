//! Proofs, the capabilities certifying that a proposition is derivable.
//!
//! This module is the trusted part of the kernel:
//! the only way to obtain a proof is [`certify`],
//! which is visible only inside the crate and
//! is called only after a rule has checked its precondition.

use crate::Prop;
use core::fmt::{self, Display};
use log::debug;
use std::rc::Rc;

/// Certificate that a proposition is derivable.
///
/// A proof cannot be constructed outside of this crate.
/// Cloning a proof yields a proof of the same proposition.
#[derive(Clone, Debug)]
pub struct Proof(Rc<ProofCell>);

#[derive(Debug)]
struct ProofCell {
    prop: Prop,
    rule: Rule,
    premises: Vec<Proof>,
}

/// Rule that produced a proof.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rule {
    /// assertion of a proposition at predicate reduction
    Axiom,
    ModusPonens,
    HypotheticalSyllogism,
    ModusTollens,
    Contradiction,
    Conjunction,
    AndLeft,
    AndRight,
    CommuteAnd,
    CommuteOr,
    Disjunction,
    EquivIntro,
    EquivElim,
    ImplicationToOr,
    OrToImplication,
    Explosion,
    ExcludedMiddle,
    NonContradiction,
    Trivial,
    UniversalResolve,
    ExistentialResolve,
    ExistentialProof,
    ForAllModusPonens,
    /// decided set membership
    Membership,
    /// decided numeric ordering
    Ordering,
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Create a proof of a proposition.
///
/// Callers must have checked that `prop` follows from `premises` by `rule`.
pub(crate) fn certify(prop: Prop, rule: Rule, premises: Vec<Proof>) -> Proof {
    debug!("{}: {}", rule, prop);
    Proof(Rc::new(ProofCell {
        prop,
        rule,
        premises,
    }))
}

impl Proof {
    /// Return the proposition that is proved.
    pub fn prop(&self) -> &Prop {
        &self.0.prop
    }

    pub fn rule(&self) -> Rule {
        self.0.rule
    }

    /// Return the proofs from which this proof was derived.
    pub fn premises(&self) -> &[Proof] {
        &self.0.premises
    }

    /// Return the number of rule applications in the derivation.
    pub fn size(&self) -> usize {
        1 + self.premises().iter().map(|p| p.size()).sum::<usize>()
    }

    /// Return true if both proofs share identity.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Render the derivation as an indented tree, conclusion first.
    pub fn display(&self) -> Disp<'_> {
        let depth = 0;
        let proof = self;
        Disp { depth, proof }
    }
}

/// Proofs are equal iff they prove the same proposition.
impl PartialEq for Proof {
    fn eq(&self, other: &Self) -> bool {
        self.prop() == other.prop()
    }
}

impl Eq for Proof {}

impl Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proof({})", self.prop())
    }
}

/// A proof together with the depth at which it is displayed.
pub struct Disp<'p> {
    depth: usize,
    proof: &'p Proof,
}

impl<'p> Display for Disp<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{: <1$}", "", self.depth * 2)?;
        writeln!(f, "{} [{}]", self.proof.prop(), self.proof.rule())?;
        let depth = self.depth + 1;
        for proof in self.proof.premises() {
            Self { depth, proof }.fmt(f)?
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Proof {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Proof", 4)?;
        s.serialize_field("text", &self.prop().to_string())?;
        s.serialize_field("prop", self.prop())?;
        s.serialize_field("rule", &self.rule())?;
        s.serialize_field("premises", self.premises())?;
        s.end()
    }
}

#[test]
fn independent_certificates() {
    let a = Prop::atom("A");
    let p1 = certify(a.clone(), Rule::Axiom, Vec::new());
    let p2 = certify(a, Rule::Axiom, Vec::new());
    assert_eq!(p1, p2);
    assert!(!p1.ptr_eq(&p2));
}
