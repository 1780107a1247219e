//! Minimal natural-deduction proof kernel.
//!
//! Propositions are plain values that anybody can build.
//! A [`Proof`] of a proposition, however, can only be obtained from
//! an inference rule in [`rules`], a decidable judgment in [`judge`],
//! or by asserting a proposition as axiom when reducing a [`Predicate`].
//!
//! ~~~
//! use natded::{rules, Bindings, Kind, Object, Predicate};
//!
//! let socrates = Object::new("Socrates");
//! let human = Predicate::new("Human", [("x", Kind::Object)]);
//! let mortal = Predicate::new("Mortal", [("x", Kind::Object)]);
//! let all = Predicate::forall("all", Predicate::implies("h=>m", human.clone(), mortal));
//!
//! let all = all.assume(Bindings::new().bind("x", Object::new("y")))?;
//! let imp = rules::universal_resolve(&all, &socrates)?;
//! let human = human.assume(Bindings::new().bind("x", socrates))?;
//! let mortal = rules::modus_ponens(&imp, &human)?;
//! assert_eq!(mortal.prop().to_string(), "Mortal(Socrates)");
//! # Ok::<(), natded::Error>(())
//! ~~~
#![forbid(unsafe_code)]

mod args;
pub mod error;
pub mod judge;
pub mod numbers;
mod object;
pub mod predicate;
mod proof;
pub mod prop;
pub mod rules;
pub mod set;

pub use args::Args;
pub use error::{Error, Result};
pub use numbers::{Numbers, Relation};
pub use object::Object;
pub use predicate::{Bindings, Kind, Node, Predicate, Reduction, Value};
pub use proof::{Disp, Proof, Rule};
pub use prop::{Op, Prop, Quantifier};
pub use set::Set;
