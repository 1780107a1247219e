use natded::{rules, Bindings, Error, Kind, Numbers, Object, Predicate, Proof, Prop, Quantifier};
use natded::{Relation, Rule, Set, Value};

fn at(name: &str) -> Prop {
    Prop::atom(name)
}

/// Atom applied to objects.
fn app(name: &str, args: &[&Object]) -> Prop {
    let args = args.iter().map(|o| Value::from((*o).clone()));
    Prop::Atom(name.into(), args.collect())
}

/// Assert a closed proposition as axiom.
fn assume(p: Prop) -> Proof {
    Predicate::and("hyp", p.clone(), p)
        .assume(Bindings::new())
        .and_then(|conj| rules::and_left(&conj))
        .unwrap()
}

fn failed(r: Result<Proof, Error>, rule: Rule) -> bool {
    matches!(r, Err(Error::PreconditionFailed { rule: found, .. }) if found == rule)
}

#[test]
fn modus_ponens() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let a = assume(at("A"));
    let b = rules::modus_ponens(&ab, &a).unwrap();
    assert_eq!(b.prop(), &at("B"));
    assert_eq!(b.rule(), Rule::ModusPonens);
    assert_eq!(b.premises().len(), 2);

    let c = assume(at("C"));
    let r = rules::modus_ponens(&ab, &c);
    assert!(failed(r.clone(), Rule::ModusPonens));
    let msg = r.unwrap_err().to_string();
    assert!(msg.contains('A') && msg.contains('C'));

    assert!(failed(rules::modus_ponens(&a, &a), Rule::ModusPonens));
}

#[test]
fn syllogism() {
    // all humans are mortal, Socrates is human, so Socrates is mortal
    let socrates = Object::new("Socrates");
    let human = Predicate::new("Human", [("x", Kind::Object)]);
    let mortal = Predicate::new("Mortal", [("x", Kind::Object)]);
    let imp = Predicate::implies("human=>mortal", human.clone(), mortal.clone());
    let all = Predicate::forall("all", imp);

    let all = all.assume(Bindings::new().bind("x", Object::new("x"))).unwrap();
    assert_eq!(all.prop().to_string(), "∀x, Implies(Human(x), Mortal(x))");
    assert_eq!(all.premises().len(), 1);

    let imp = rules::universal_resolve(&all, &socrates).unwrap();
    assert_eq!(imp.prop().to_string(), "Implies(Human(Socrates), Mortal(Socrates))");
    let h = human.assume(Bindings::new().bind("x", socrates.clone())).unwrap();
    let m = rules::modus_ponens(&imp, &h).unwrap();
    let expected = mortal.apply(Bindings::new().bind("x", socrates), false).unwrap();
    assert_eq!(Some(m.prop().clone()), expected.into_prop());
    assert_eq!(m.size(), 5);
}

#[test]
fn hypothetical_syllogism() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let bc = assume(Prop::imp(at("B"), at("C")));
    let ac = rules::hypothetical_syllogism(&ab, &bc).unwrap();
    assert_eq!(ac.prop(), &Prop::imp(at("A"), at("C")));
    let r = rules::hypothetical_syllogism(&bc, &ab);
    assert!(failed(r, Rule::HypotheticalSyllogism));
}

#[test]
fn tollens_and_contradiction() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let nb = assume(-at("B"));
    let na = rules::modus_tollens(&ab, &nb).unwrap();
    assert_eq!(na.prop(), &-at("A"));
    assert!(failed(rules::modus_tollens(&ab, &ab), Rule::ModusTollens));

    let a = assume(at("A"));
    let bot = rules::contradiction(&a, &na).unwrap();
    assert_eq!(bot.prop(), &Prop::False);
    assert!(failed(rules::contradiction(&a, &nb), Rule::Contradiction));

    let c = rules::explosion(&bot, at("C")).unwrap();
    assert_eq!(c.prop(), &at("C"));
    assert!(failed(rules::explosion(&a, at("C")), Rule::Explosion));
}

#[test]
fn tollens_with_negated_consequent() {
    // from A ⇒ ¬C and ¬¬C, that is C, conclude ¬A
    let anc = assume(Prop::imp(at("A"), -at("C")));
    let c = assume(at("C"));
    let na = rules::modus_tollens(&anc, &c).unwrap();
    assert_eq!(na.prop(), &-at("A"));
    assert_eq!(na.premises(), [anc.clone(), c]);

    let nc = assume(-at("C"));
    assert!(failed(rules::modus_tollens(&anc, &nc), Rule::ModusTollens));
}

#[test]
fn connectives() {
    let (a, b) = (assume(at("A")), assume(at("B")));
    let ab = rules::conjunction(&a, &b);
    assert_eq!(ab.prop(), &(at("A") & at("B")));
    assert_eq!(rules::commute_and(&ab).unwrap().prop(), &(at("B") & at("A")));
    assert_eq!(rules::and_left(&ab).unwrap(), a);
    assert_eq!(rules::and_right(&ab).unwrap(), b);
    assert!(failed(rules::commute_or(&ab), Rule::CommuteOr));

    let aorc = rules::disjunction(&a, at("C"));
    assert_eq!(aorc.prop(), &(at("A") | at("C")));
    let cora = rules::commute_or(&aorc).unwrap();
    assert_eq!(cora.prop(), &(at("C") | at("A")));
    assert!(failed(rules::commute_and(&aorc), Rule::CommuteAnd));
}

#[test]
fn equivalence() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let ba = assume(Prop::imp(at("B"), at("A")));
    let eq = rules::equiv_intro(&ab, &ba).unwrap();
    assert_eq!(eq.prop().to_string(), "Equiv(A, B)");
    assert_eq!(eq.premises(), [ab.clone(), ba.clone()]);
    let (ab2, ba2) = rules::equiv_elim(&eq).unwrap();
    assert_eq!((ab2, ba2), (ab.clone(), ba));

    let ca = assume(Prop::imp(at("C"), at("A")));
    assert!(failed(rules::equiv_intro(&ab, &ca), Rule::EquivIntro));
}

#[test]
fn implication_or_roundtrip() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let or = rules::implication_to_or(&ab).unwrap();
    assert_eq!(or.prop(), &(-at("A") | at("B")));
    let back = rules::or_to_implication(&or).unwrap();
    assert_eq!(back.prop(), ab.prop());

    // double negation collapses
    let nab = assume(Prop::imp(-at("A"), at("B")));
    let or = rules::implication_to_or(&nab).unwrap();
    assert_eq!(or.prop(), &(at("A") | at("B")));
    let back = rules::or_to_implication(&or).unwrap();
    assert_eq!(back.prop(), nab.prop());
}

#[test]
fn schemas() {
    let a = at("A");
    assert_eq!(rules::excluded_middle(a.clone()).prop().to_string(), "Or(A, ¬A)");
    let nc = rules::non_contradiction(a.clone());
    assert_eq!(nc.prop().to_string(), "¬And(A, ¬A)");
    assert_eq!(rules::trivial(a.clone()).prop(), &Prop::imp(a.clone(), a));
}

#[test]
fn universal_domain() {
    let s = Set::plain("S");
    let (a, b) = (Object::new("a"), Object::new("b"));
    s.insert(&a).unwrap();
    let x = Object::in_set("x", &s);
    let p = Predicate::new("P", [("x", Kind::Object)]);
    let all = Predicate::forall("all", p).assume(Bindings::new().bind("x", x)).unwrap();

    assert_eq!(rules::universal_resolve(&all, &a).unwrap().prop().to_string(), "P(a)");
    let r = rules::universal_resolve(&all, &b);
    assert!(matches!(r, Err(Error::NotAMember { .. })));
}

#[test]
fn existentials() {
    let s = Set::plain("S");
    let x = Object::in_set("x", &s);
    let p = Predicate::new("P", [("x", Kind::Object)]);
    let ex = Predicate::exists("ex", p.clone());
    let ex = ex.assume(Bindings::new().bind("x", x.clone())).unwrap();
    assert!(ex.premises().is_empty());

    let (w, pw) = rules::existential_resolve(&ex).unwrap();
    assert!(w.set().unwrap().ptr_eq(&s));
    assert!(w.name().is_empty());
    assert_eq!(pw.prop().to_string(), format!("P({})", w));

    let back = rules::existential_proof(&pw, &w, &x).unwrap();
    assert_eq!(back.prop(), ex.prop());

    let (w2, _) = rules::existential_resolve(&ex).unwrap();
    assert_ne!(w, w2);

    // the variable must not occur free
    let a = Object::new("a");
    let pa = p.assume(Bindings::new().bind("x", a.clone())).unwrap();
    let r = rules::existential_proof(&pa, &x, &a);
    assert!(failed(r, Rule::ExistentialProof));
    let r = rules::existential_resolve(&pa);
    assert!(failed(r.map(|(_, p)| p), Rule::ExistentialResolve));
}

#[test]
fn forall_modus_ponens() {
    let a = Predicate::new("A", [("x", Kind::Object)]);
    let b = Predicate::new("B", [("x", Kind::Object)]);
    let ab = Predicate::forall("ab", Predicate::implies("a=>b", a.clone(), b));
    let all_ab = ab.assume(Bindings::new().bind("x", Object::new("x"))).unwrap();

    let y = Object::new("y");
    let ex_a = Predicate::exists("ex", a.clone()).assume(Bindings::new().bind("x", y.clone()));
    let ex_b = rules::forall_modus_ponens(&all_ab, &ex_a.unwrap()).unwrap();
    assert_eq!(ex_b.prop().to_string(), "∃y, B(y)");

    let all_a = Predicate::forall("all", a).assume(Bindings::new().bind("x", y));
    let all_b = rules::forall_modus_ponens(&all_ab, &all_a.unwrap()).unwrap();
    assert_eq!(all_b.prop().to_string(), "∀y, B(y)");

    // the first proof must be universal
    let ex = rules::existential_proof(&ex_b, &Object::new("z"), &Object::new("w")).unwrap();
    assert!(failed(rules::forall_modus_ponens(&ex, &all_b), Rule::ForAllModusPonens));
    let c = Predicate::new("C", [("x", Kind::Object)]);
    let all_c = Predicate::forall("c", c).assume(Bindings::new().bind("x", Object::new("x")));
    let r = rules::forall_modus_ponens(&all_ab, &all_c.unwrap());
    assert!(failed(r, Rule::ForAllModusPonens));
}

#[test]
fn resolve_avoids_capture() {
    // ∀a, ∃b, a < b instantiated with b must not yield ∃b, b < b
    let (a, b) = (Object::new("a"), Object::new("b"));
    let lt = Prop::ord(a.clone(), Relation::Lt, b.clone());
    let all = assume(Prop::forall(a.clone(), Prop::exists(b.clone(), lt)));

    let ex = rules::universal_resolve(&all, &b).unwrap();
    let (q, v, body) = ex.prop().as_quant().unwrap();
    assert_eq!(q, Quantifier::Exists);
    assert_ne!(v, &b);
    assert_eq!(body, &Prop::ord(b.clone(), Relation::Lt, v.clone()));

    let (w, bw) = rules::existential_resolve(&ex).unwrap();
    assert_ne!(w, b);
    assert_eq!(bw.prop(), &Prop::ord(b, Relation::Lt, w));
}

#[test]
fn generalisation_avoids_capture() {
    // from ∀x, R(x, y) conclude ∃x, ∀v, R(v, x), not ∃x, ∀x, R(x, x)
    let (x, y) = (Object::new("x"), Object::new("y"));
    let all = assume(Prop::forall(x.clone(), app("R", &[&x, &y])));
    let ex = rules::existential_proof(&all, &y, &x).unwrap();

    let (q, v, body) = ex.prop().as_quant().unwrap();
    assert_eq!((q, v), (Quantifier::Exists, &x));
    let (q, w, body) = body.as_quant().unwrap();
    assert_eq!(q, Quantifier::Forall);
    assert_ne!(w, &x);
    assert_eq!(body, &app("R", &[w, &x]));
}

#[test]
fn forall_modus_ponens_domains() {
    let nums = Numbers::new();
    let x = Object::in_set("x", &nums.rationals);
    let all_ab = assume(Prop::forall(x.clone(), Prop::imp(app("A", &[&x]), app("B", &[&x]))));

    // naturals are rationals
    let n = Object::in_set("n", &nums.naturals);
    let all_a = assume(Prop::forall(n.clone(), app("A", &[&n])));
    let all_b = rules::forall_modus_ponens(&all_ab, &all_a).unwrap();
    assert_eq!(all_b.prop(), &Prop::forall(n.clone(), app("B", &[&n])));

    // reals and unrestricted objects are not
    let r = Object::in_set("r", &nums.reals);
    let ex_a = assume(Prop::exists(r.clone(), app("A", &[&r])));
    assert!(failed(rules::forall_modus_ponens(&all_ab, &ex_a), Rule::ForAllModusPonens));
    let u = Object::new("u");
    let ex_a = assume(Prop::exists(u.clone(), app("A", &[&u])));
    assert!(failed(rules::forall_modus_ponens(&all_ab, &ex_a), Rule::ForAllModusPonens));

    // a plain set only includes itself
    let s = Set::plain("S");
    let t = Set::plain("S");
    let (xs, yt) = (Object::in_set("x", &s), Object::in_set("y", &t));
    let all_ab = assume(Prop::forall(xs.clone(), Prop::imp(app("A", &[&xs]), app("B", &[&xs]))));
    let all_a = assume(Prop::forall(yt.clone(), app("A", &[&yt])));
    assert!(failed(rules::forall_modus_ponens(&all_ab, &all_a), Rule::ForAllModusPonens));
}

#[test]
fn forall_modus_ponens_free_variable() {
    // ∀x, A(x) ⇒ B(x, y) and ∀y, A(y) do not give ∀y, B(y, y)
    let (x, y) = (Object::new("x"), Object::new("y"));
    let imp = Prop::imp(app("A", &[&x]), app("B", &[&x, &y]));
    let all_ab = assume(Prop::forall(x, imp));
    let all_a = assume(Prop::forall(y.clone(), app("A", &[&y])));
    assert!(failed(rules::forall_modus_ponens(&all_ab, &all_a), Rule::ForAllModusPonens));

    let z = Object::new("z");
    let all_a = assume(Prop::forall(z.clone(), app("A", &[&z])));
    let all_b = rules::forall_modus_ponens(&all_ab, &all_a).unwrap();
    assert_eq!(all_b.prop(), &Prop::forall(z.clone(), app("B", &[&z, &y])));
}

#[test]
fn dropped_domain() {
    let s = Set::plain("S");
    let x = Object::in_set("x", &s);
    let all = assume(Prop::forall(x.clone(), app("P", &[&x])));
    let ex = assume(Prop::exists(x.clone(), app("P", &[&x])));
    let all_a = assume(Prop::forall(x.clone(), app("A", &[&x])));
    let imp = Prop::imp(app("A", &[&x]), app("B", &[&x]));
    let all_ab = assume(Prop::forall(x.clone(), imp));
    drop(s);

    let dropped = |r: Result<Proof, Error>| matches!(r, Err(Error::DroppedDomain { .. }));
    assert!(dropped(rules::universal_resolve(&all, &Object::new("a"))));
    assert!(dropped(rules::existential_resolve(&ex).map(|(_, p)| p)));
    assert!(dropped(rules::forall_modus_ponens(&all_ab, &all_a)));
}

#[test]
fn tree() {
    let ab = assume(Prop::imp(at("A"), at("B")));
    let a = assume(at("A"));
    let b = rules::modus_ponens(&ab, &a).unwrap();
    let lines: Vec<_> = b.display().to_string().lines().map(String::from).collect();
    assert_eq!(lines[0], "B [ModusPonens]");
    assert_eq!(lines[1], "  Implies(A, B) [AndLeft]");
}
