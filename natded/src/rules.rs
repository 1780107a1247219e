//! Inference rules.
//!
//! Every rule checks its precondition and
//! only then certifies its conclusion, recording the proofs it used.
//!
//! ~~~
//! # use natded::{rules, Bindings, Predicate};
//! let a = Predicate::nullary("A").assume(Bindings::new())?;
//! let b = Predicate::nullary("B").instantiate(Bindings::new())?;
//! let ab = Predicate::implies("A=>B", a.prop().clone(), b.clone());
//! let ab = ab.assume(Bindings::new())?;
//! assert_eq!(rules::modus_ponens(&ab, &a)?.prop(), &b);
//! assert!(rules::modus_ponens(&ab, &ab).is_err());
//! # Ok::<(), natded::Error>(())
//! ~~~

use crate::error::{Error, Result};
use crate::proof::{certify, Rule};
use crate::prop::{Op, Quantifier};
use crate::{Object, Proof, Prop};

fn bin(rule: Rule, p: &Proof, op: Op) -> Result<(&Prop, &Prop)> {
    let shape = match op {
        Op::Impl => "Implies(_, _)",
        Op::Conj => "And(_, _)",
        Op::Disj => "Or(_, _)",
        Op::EqFm => "Equiv(_, _)",
    };
    p.prop()
        .as_bin(op)
        .ok_or_else(|| Error::precondition(rule, shape, p.prop()))
}

fn quant(rule: Rule, p: &Proof, q: Quantifier) -> Result<(&Object, &Prop)> {
    match p.prop().as_quant() {
        Some((q_, v, body)) if q_ == q => Ok((v, body)),
        _ => Err(Error::precondition(rule, format!("{}x, _", q), p.prop())),
    }
}

/// From `A ⇒ B` and `A`, conclude `B`.
pub fn modus_ponens(ab: &Proof, a: &Proof) -> Result<Proof> {
    let rule = Rule::ModusPonens;
    let (l, r) = bin(rule, ab, Op::Impl)?;
    if l != a.prop() {
        return Err(Error::precondition(rule, l, a.prop()));
    }
    Ok(certify(r.clone(), rule, Vec::from([ab.clone(), a.clone()])))
}

/// From `A ⇒ B` and `B ⇒ C`, conclude `A ⇒ C`.
pub fn hypothetical_syllogism(ab: &Proof, bc: &Proof) -> Result<Proof> {
    let rule = Rule::HypotheticalSyllogism;
    let (a, b1) = bin(rule, ab, Op::Impl)?;
    let (b2, c) = bin(rule, bc, Op::Impl)?;
    if b1 != b2 {
        return Err(Error::precondition(rule, b1, b2));
    }
    let ac = Prop::imp(a.clone(), c.clone());
    Ok(certify(ac, rule, Vec::from([ab.clone(), bc.clone()])))
}

/// From `A ⇒ B` and `¬B`, conclude `¬A`.
///
/// As for [`contradiction`], `¬B` may be given either as `Prop::not(B)`
/// or as `Implies(B, ⊥)`.
pub fn modus_tollens(ab: &Proof, not_b: &Proof) -> Result<Proof> {
    let rule = Rule::ModusTollens;
    let (a, b) = bin(rule, ab, Op::Impl)?;
    let neg = Prop::not(b.clone());
    if *not_b.prop() != neg && not_b.prop().negated() != Some(b) {
        return Err(Error::precondition(rule, neg, not_b.prop()));
    }
    let not_a = Prop::not(a.clone());
    Ok(certify(not_a, rule, Vec::from([ab.clone(), not_b.clone()])))
}

/// From `A` and `¬A`, conclude `⊥`.
pub fn contradiction(a: &Proof, not_a: &Proof) -> Result<Proof> {
    let rule = Rule::Contradiction;
    let neg = Prop::not(a.prop().clone());
    if *not_a.prop() != neg && not_a.prop().negated() != Some(a.prop()) {
        return Err(Error::precondition(rule, neg, not_a.prop()));
    }
    Ok(certify(Prop::False, rule, Vec::from([a.clone(), not_a.clone()])))
}

/// From `A` and `B`, conclude `A ∧ B`.
pub fn conjunction(a: &Proof, b: &Proof) -> Proof {
    let ab = a.prop().clone() & b.prop().clone();
    certify(ab, Rule::Conjunction, Vec::from([a.clone(), b.clone()]))
}

/// From `A ∧ B`, conclude `A`.
pub fn and_left(ab: &Proof) -> Result<Proof> {
    let (a, _) = bin(Rule::AndLeft, ab, Op::Conj)?;
    Ok(certify(a.clone(), Rule::AndLeft, Vec::from([ab.clone()])))
}

/// From `A ∧ B`, conclude `B`.
pub fn and_right(ab: &Proof) -> Result<Proof> {
    let (_, b) = bin(Rule::AndRight, ab, Op::Conj)?;
    Ok(certify(b.clone(), Rule::AndRight, Vec::from([ab.clone()])))
}

pub fn commute_and(ab: &Proof) -> Result<Proof> {
    let (a, b) = bin(Rule::CommuteAnd, ab, Op::Conj)?;
    let ba = b.clone() & a.clone();
    Ok(certify(ba, Rule::CommuteAnd, Vec::from([ab.clone()])))
}

pub fn commute_or(ab: &Proof) -> Result<Proof> {
    let (a, b) = bin(Rule::CommuteOr, ab, Op::Disj)?;
    let ba = b.clone() | a.clone();
    Ok(certify(ba, Rule::CommuteOr, Vec::from([ab.clone()])))
}

/// From `A`, conclude `A ∨ B` for any `B`.
pub fn disjunction(a: &Proof, b: Prop) -> Proof {
    let ab = a.prop().clone() | b;
    certify(ab, Rule::Disjunction, Vec::from([a.clone()]))
}

/// From `A ⇒ B` and `B ⇒ A`, conclude `A ⇔ B`.
pub fn equiv_intro(ab: &Proof, ba: &Proof) -> Result<Proof> {
    let rule = Rule::EquivIntro;
    let (a1, b1) = bin(rule, ab, Op::Impl)?;
    let (b2, a2) = bin(rule, ba, Op::Impl)?;
    if a1 != a2 || b1 != b2 {
        let expected = Prop::imp(b1.clone(), a1.clone());
        return Err(Error::precondition(rule, expected, ba.prop()));
    }
    let eq = Prop::equiv(a1.clone(), b1.clone());
    Ok(certify(eq, rule, Vec::from([ab.clone(), ba.clone()])))
}

/// From `A ⇔ B`, conclude `A ⇒ B` and `B ⇒ A`.
pub fn equiv_elim(eq: &Proof) -> Result<(Proof, Proof)> {
    let rule = Rule::EquivElim;
    let (a, b) = bin(rule, eq, Op::EqFm)?;
    let ab = Prop::imp(a.clone(), b.clone());
    let ba = Prop::imp(b.clone(), a.clone());
    let premises = Vec::from([eq.clone()]);
    Ok((certify(ab, rule, premises.clone()), certify(ba, rule, premises)))
}

/// From `A ⇒ B`, conclude `¬A ∨ B`.
pub fn implication_to_or(ab: &Proof) -> Result<Proof> {
    let (a, b) = bin(Rule::ImplicationToOr, ab, Op::Impl)?;
    let or = Prop::not(a.clone()) | b.clone();
    Ok(certify(or, Rule::ImplicationToOr, Vec::from([ab.clone()])))
}

/// From `A ∨ B`, conclude `¬A ⇒ B`.
pub fn or_to_implication(ab: &Proof) -> Result<Proof> {
    let (a, b) = bin(Rule::OrToImplication, ab, Op::Disj)?;
    let imp = Prop::imp(Prop::not(a.clone()), b.clone());
    Ok(certify(imp, Rule::OrToImplication, Vec::from([ab.clone()])))
}

/// From `⊥`, conclude anything.
pub fn explosion(bot: &Proof, a: Prop) -> Result<Proof> {
    if *bot.prop() != Prop::False {
        return Err(Error::precondition(Rule::Explosion, Prop::False, bot.prop()));
    }
    Ok(certify(a, Rule::Explosion, Vec::from([bot.clone()])))
}

/// `A ∨ ¬A`
pub fn excluded_middle(a: Prop) -> Proof {
    let or = a.clone() | Prop::not(a);
    certify(or, Rule::ExcludedMiddle, Vec::new())
}

/// `¬(A ∧ ¬A)`
pub fn non_contradiction(a: Prop) -> Proof {
    let and = a.clone() & Prop::not(a);
    certify(Prop::not(and), Rule::NonContradiction, Vec::new())
}

/// `A ⇒ A`
pub fn trivial(a: Prop) -> Proof {
    certify(Prop::imp(a.clone(), a), Rule::Trivial, Vec::new())
}

/// From `∀x, P(x)`, conclude `P(y)`.
///
/// If `x` belongs to a set, then `y` must be an element of that set.
pub fn universal_resolve(all: &Proof, y: &Object) -> Result<Proof> {
    let rule = Rule::UniversalResolve;
    let (x, body) = quant(rule, all, Quantifier::Forall)?;
    if let Some(set) = x.domain()? {
        if !set.contains(y) {
            return Err(Error::NotAMember {
                element: y.to_string(),
                set: set.to_string(),
            });
        }
    }
    Ok(certify(body.subst(x, y), rule, Vec::from([all.clone()])))
}

/// From `∃x, P(x)`, obtain a fresh witness `y` and conclude `P(y)`.
///
/// The witness belongs to the same set as `x`.
pub fn existential_resolve(ex: &Proof) -> Result<(Object, Proof)> {
    let rule = Rule::ExistentialResolve;
    let (x, body) = quant(rule, ex, Quantifier::Exists)?;
    let y = Object::fresh_in(x.domain()?);
    let proof = certify(body.subst(x, &y), rule, Vec::from([ex.clone()]));
    Ok((y, proof))
}

/// From `P(y)`, conclude `∃x, P(x)`.
///
/// The variable `x` must not occur free in `P(y)`, unless it is `y` itself.
pub fn existential_proof(py: &Proof, y: &Object, x: &Object) -> Result<Proof> {
    let rule = Rule::ExistentialProof;
    if x != y && py.prop().occurs(x) {
        let expected = format!("proposition without free {}", x);
        return Err(Error::precondition(rule, expected, py.prop()));
    }
    let ex = Prop::exists(x.clone(), py.prop().subst(y, x));
    Ok(certify(ex, rule, Vec::from([py.clone()])))
}

/// From `∀x, A(x) ⇒ B(x)` and `Qy, A(y)`, conclude `Qy, B(y)`,
/// where `Q` is either `∀` or `∃`.
///
/// If `x` is restricted to a set, then `y` must be restricted to
/// the same set or to a set it includes.
/// The variable `y` must not occur free in the first proposition, unless it is `x`.
pub fn forall_modus_ponens(all_ab: &Proof, qa: &Proof) -> Result<Proof> {
    let rule = Rule::ForAllModusPonens;
    let (x, imp) = quant(rule, all_ab, Quantifier::Forall)?;
    let (q, y, a) = qa
        .prop()
        .as_quant()
        .ok_or_else(|| Error::precondition(rule, "∀x, _ or ∃x, _", qa.prop()))?;
    if y != x && all_ab.prop().occurs(y) {
        let expected = format!("proposition without free {}", y);
        return Err(Error::precondition(rule, expected, all_ab.prop()));
    }
    if let Some(sx) = x.domain()? {
        match y.domain()? {
            Some(sy) if sx.includes(&sy) => (),
            _ => return Err(Error::precondition(rule, format!("variable in {}", sx), y)),
        }
    }
    let imp = imp.subst(x, y);
    let (ante, cons) = imp
        .as_imp()
        .ok_or_else(|| Error::precondition(rule, "∀x, Implies(_, _)", all_ab.prop()))?;
    if ante != a {
        return Err(Error::precondition(rule, ante, a));
    }
    let qb = Prop::quant(q, y.clone(), cons.clone());
    Ok(certify(qb, rule, Vec::from([all_ab.clone(), qa.clone()])))
}
