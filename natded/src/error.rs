//! Errors raised by predicate application, inference rules and judgments.
//!
//! Every error carries the canonical text of the offending values,
//! so that a failed derivation can be diagnosed without the values themselves.

use crate::proof::Rule;
use thiserror::Error;

/// Result type of all fallible kernel operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A predicate parameter was bound to a value of the wrong kind,
    /// or the parameter is not among the remaining ones.
    #[error("predicate `{predicate}`: cannot bind `{param}`: {reason}")]
    KindMismatch {
        predicate: String,
        param: String,
        reason: String,
    },

    /// A parameter was bound before the parameters it depends on.
    #[error("predicate `{predicate}`: `{param}` can only be bound last ({remaining} parameters remain)")]
    OutOfOrderBinding {
        predicate: String,
        param: String,
        remaining: usize,
    },

    /// An inference rule was applied to proofs of the wrong shape.
    #[error("{rule}: expected {expected}, found {found}")]
    PreconditionFailed {
        rule: Rule,
        expected: String,
        found: String,
    },

    /// An object was required to be an element of a set that does not contain it.
    #[error("{element} is not an element of {set}")]
    NotAMember { element: String, set: String },

    /// An ordering was judged between objects that are not numbers.
    #[error("cannot compare {left} and {right}: not numeric literals")]
    NotComparable { left: String, right: String },

    /// An ordering was judged between numbers for which it is false.
    #[error("{prop} does not hold")]
    RelationFalse { prop: String },

    /// A bound variable is restricted to a set that no longer exists.
    #[error("the set restricting {object} no longer exists")]
    DroppedDomain { object: String },

    /// A proposition was used as a proof without being asserted as an axiom.
    #[error("{prop} is not an axiom")]
    NotAnAxiom { prop: String },

    /// An infinite or function set was enumerated.
    #[error("set {set} cannot be iterated")]
    NotIterable { set: String },

    #[error("set {set} is not a function")]
    NotAFunction { set: String },

    #[error("cannot add elements to set {set}")]
    NotExtensible { set: String },

    /// Addition or subtraction on an object not owned by a number set.
    #[error("no arithmetic known for {object}")]
    NoArithmetic { object: String },
}

impl Error {
    pub(crate) fn precondition(rule: Rule, expected: impl ToString, found: impl ToString) -> Self {
        Self::PreconditionFailed {
            rule,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
