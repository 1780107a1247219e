//! Decidable judgments on membership and ordering.

use crate::error::{Error, Result};
use crate::numbers::{self, Relation};
use crate::proof::{certify, Rule};
use crate::{Object, Proof, Prop, Set};

/// Return true if the object is an element of the set.
pub fn is_member(x: &Object, set: &Set) -> bool {
    set.contains(x)
}

/// Return true if both objects are numbers and the relation holds between them.
pub fn compare(x: &Object, y: &Object, rel: Relation) -> bool {
    numbers::evaluate(x, rel, y).unwrap_or(false)
}

/// Prove `x ∈ S` if `S` contains `x`.
///
/// ~~~
/// # use natded::{judge, numbers::Numbers, Object, Prop};
/// let nums = Numbers::new();
/// let three = Object::new("3");
/// assert!(judge::membership_proof(&Prop::mem(three.clone(), nums.rationals)).is_ok());
/// assert!(judge::membership_proof(&Prop::mem(Object::new("pi"), nums.naturals)).is_err());
/// ~~~
pub fn membership_proof(prop: &Prop) -> Result<Proof> {
    match prop {
        Prop::Mem(x, set) if set.contains(x) => {
            Ok(certify(prop.clone(), Rule::Membership, Vec::new()))
        }
        Prop::Mem(x, set) => Err(Error::NotAMember {
            element: x.to_string(),
            set: set.to_string(),
        }),
        _ => Err(Error::precondition(Rule::Membership, "x ∈ S", prop)),
    }
}

/// Prove `x rel y` if `x` and `y` are numbers for which the relation holds.
pub fn ordering_proof(prop: &Prop) -> Result<Proof> {
    let (x, rel, y) = match prop {
        Prop::Ord(x, rel, y) => (x, *rel, y),
        _ => return Err(Error::precondition(Rule::Ordering, "x rel y", prop)),
    };
    match numbers::evaluate(x, rel, y) {
        None => Err(Error::NotComparable {
            left: x.to_string(),
            right: y.to_string(),
        }),
        Some(false) => Err(Error::RelationFalse {
            prop: prop.to_string(),
        }),
        Some(true) => Ok(certify(prop.clone(), Rule::Ordering, Vec::new())),
    }
}
