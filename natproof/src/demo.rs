//! Sample derivations.

use natded::{judge, rules, Bindings, Kind, Numbers, Object};
use natded::{Predicate, Proof, Prop, Result, Set};

pub struct Demo {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Result<Proof>,
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "syllogism",
        description: "derive a contradiction from A, A ⇒ B, B ⇒ X and ¬X",
        build: syllogism,
    },
    Demo {
        name: "socrates",
        description: "all humans are mortal, Socrates is human",
        build: socrates,
    },
    Demo {
        name: "tollens",
        description: "modus tollens, then implication as disjunction",
        build: tollens,
    },
    Demo {
        name: "equivalence",
        description: "introduce and eliminate an equivalence",
        build: equivalence,
    },
    Demo {
        name: "subset",
        description: "3 ∈ R from N ⊆ Q and Q ⊆ R",
        build: subset,
    },
    Demo {
        name: "ordering",
        description: "decide orderings between numeric literals",
        build: ordering,
    },
    Demo {
        name: "existential",
        description: "universal modus ponens over an existential",
        build: existential,
    },
    Demo {
        name: "continuity",
        description: "assume continuity of a real function",
        build: continuity,
    },
];

/// Return the demonstration with the given name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|d| d.name == name)
}

fn axiom(name: &str) -> Result<Proof> {
    Predicate::nullary(name).assume(Bindings::new())
}

fn prop(name: &str) -> Prop {
    Prop::atom(name)
}

/// Assert an implication between two atoms.
fn implies(l: &str, r: &str) -> Result<Proof> {
    Predicate::implies(format!("{}=>{}", l, r), prop(l), prop(r)).assume(Bindings::new())
}

fn unary(name: &str) -> Predicate {
    Predicate::new(name, [("x", Kind::Object)])
}

fn syllogism() -> Result<Proof> {
    let a = axiom("A")?;
    let ab = implies("A", "B")?;
    let bx = implies("B", "X")?;
    let not_x = Predicate::implies("¬X", prop("X"), Prop::False).assume(Bindings::new())?;
    let ax = rules::hypothetical_syllogism(&ab, &bx)?;
    let not_a = rules::hypothetical_syllogism(&ax, &not_x)?;
    let a_and_not_a = rules::conjunction(&a, &not_a);
    let nc = rules::non_contradiction(prop("A"));
    rules::modus_ponens(&nc, &a_and_not_a)
}

fn socrates() -> Result<Proof> {
    let socrates = Object::new("Socrates");
    let human = unary("Human");
    let mortal = Predicate::implies("human=>mortal", human.clone(), unary("Mortal"));
    let all = Predicate::forall("all", mortal);
    let all = all.assume(Bindings::new().bind("x", Object::new("x")))?;
    let imp = rules::universal_resolve(&all, &socrates)?;
    let human = human.assume(Bindings::new().bind("x", socrates))?;
    rules::modus_ponens(&imp, &human)
}

fn tollens() -> Result<Proof> {
    let rain_wet = implies("Rain", "Wet")?;
    let dry = Predicate::implies("¬Wet", prop("Wet"), Prop::False).assume(Bindings::new())?;
    let no_rain = rules::modus_tollens(&rain_wet, &dry)?;
    let or = rules::implication_to_or(&rain_wet)?;
    let imp = rules::or_to_implication(&or)?;
    let back = rules::modus_tollens(&imp, &dry)?;
    Ok(rules::conjunction(&no_rain, &back))
}

fn equivalence() -> Result<Proof> {
    let ab = implies("A", "B")?;
    let ba = implies("B", "A")?;
    let eq = rules::equiv_intro(&ab, &ba)?;
    let (_, ba) = rules::equiv_elim(&eq)?;
    let b = axiom("B")?;
    rules::modus_ponens(&ba, &b)
}

fn subset() -> Result<Proof> {
    let nums = Numbers::new();
    let sub = Predicate::subset("subset");
    let subset = |a: &Set, b: &Set, x: &str| {
        let ab = sub.apply(Bindings::new().bind("A", a.clone()).bind("B", b.clone()), false)?;
        ab.apply(Bindings::new().bind("x", Object::new(x)), true)?.into_proof()
    };
    let q_r = subset(&nums.rationals, &nums.reals, "x")?;
    let n_q = subset(&nums.naturals, &nums.rationals, "y")?;

    let three = Object::new("3");
    let in_n = judge::membership_proof(&Prop::mem(three.clone(), nums.naturals.clone()))?;
    let in_q = rules::modus_ponens(&rules::universal_resolve(&n_q, &three)?, &in_n)?;
    rules::modus_ponens(&rules::universal_resolve(&q_r, &three)?, &in_q)
}

fn ordering() -> Result<Proof> {
    let b = Bindings::new().bind("x", Object::new("1/2")).bind("y", Object::new("3/4"));
    let lt = Predicate::less_than("lt").instantiate(b)?;
    let b = Bindings::new().bind("y", Object::new("1")).bind("x", Object::new("0.5"));
    let le = Predicate::less_or_eq("le").instantiate(b)?;
    let lt = judge::ordering_proof(&lt)?;
    let le = judge::ordering_proof(&le)?;
    Ok(rules::conjunction(&lt, &le))
}

fn existential() -> Result<Proof> {
    let s = Set::plain("People");
    let x = Object::in_set("x", &s);
    let wise = unary("Wise");
    let happy = Predicate::implies("wise=>happy", wise.clone(), unary("Happy"));
    let all = Predicate::forall("all", happy).assume(Bindings::new().bind("x", x.clone()))?;
    let some = Predicate::exists("some", wise).assume(Bindings::new().bind("x", x))?;
    let some_happy = rules::forall_modus_ponens(&all, &some)?;
    let (w, happy_w) = rules::existential_resolve(&some_happy)?;
    rules::existential_proof(&happy_w, &w, &Object::new("y"))
}

fn continuity() -> Result<Proof> {
    let nums = Numbers::new();
    let r = &nums.reals;
    let zero = Object::in_set("0", r);
    let (eps, delta) = (Object::in_set("eps", r), Object::in_set("del", r));
    let (c, x) = (Object::in_set("c", r), Object::in_set("x", r));
    let f = Set::function("f", r, r);

    let lt = Predicate::less_than("lt");
    let gt = Predicate::greater_than("gt");
    let xy = |x: &Object, y: &Object| Bindings::new().bind("x", x.clone()).bind("y", y.clone());

    let dist = lt.instantiate(xy(&(&x - &c)?, &delta))?;
    let fdist = lt.instantiate(xy(&(&f.apply(&x)? - &f.apply(&c)?)?, &eps))?;
    let del_pos = gt.instantiate(xy(&delta, &zero))?;
    let exists_del = Predicate::exists("exists_del", del_pos & Prop::imp(dist, fdist));
    let exists_del = exists_del.instantiate(Bindings::new().bind("x", delta))?;

    let eps_pos = gt.apply(Bindings::new().bind("y", zero), false)?;
    let imp = Predicate::implies("eps_imp", eps_pos, exists_del);
    let all_eps = Predicate::forall("all_eps", imp).instantiate(Bindings::new().bind("x", eps))?;
    Predicate::forall("all_x", all_eps).assume(Bindings::new().bind("x", x))
}

#[test]
fn conclusions() {
    let run = |name| find(name).map(|d| (d.build)().map(|p| p.prop().to_string()));
    let proved = |name| run(name).unwrap().unwrap();
    assert_eq!(proved("syllogism"), "⊥");
    assert_eq!(proved("socrates"), "Mortal(Socrates)");
    assert_eq!(proved("tollens"), "And(¬Rain, ¬Rain)");
    assert_eq!(proved("equivalence"), "A");
    assert_eq!(proved("subset"), "3 ∈ R");
    assert_eq!(proved("ordering"), "And(1/2 < 3/4, 0.5 ≤ 1)");
    assert_eq!(proved("existential"), "∃y, Happy(y)");
    let cont = "∀x, ∀eps, Implies(eps > 0, ∃del, And(del > 0, Implies(x - c < del, f(x) - f(c) < eps)))";
    assert_eq!(proved("continuity"), cont);
    assert!(find("unknown").is_none());
}
