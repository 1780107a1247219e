use natded::{Numbers, Object, Prop, Quantifier, Relation, Set};

fn at(name: &str) -> Prop {
    Prop::atom(name)
}

#[test]
fn structural_equality() {
    // two independently built implications are the same proposition
    let ab1 = Prop::imp(at("A"), at("B"));
    let ab2 = Prop::imp(at("A"), at("B"));
    assert_eq!(ab1, ab2);
    assert_ne!(ab1, Prop::imp(at("B"), at("A")));

    // objects and sets compare by their names
    let s1 = Set::plain("S");
    let s2 = Set::plain("S");
    let m1 = Prop::mem(Object::new("x"), s1);
    let m2 = Prop::mem(Object::new("x"), s2);
    assert_eq!(m1, m2);
}

#[test]
fn negation() {
    let a = at("A");
    assert_eq!(-a.clone(), Prop::imp(a.clone(), Prop::False));
    assert_eq!(-(-a.clone()), a);
    assert_eq!((-a.clone()).negated(), Some(&a));
    assert_eq!(a.negated(), None);
}

#[test]
fn text() {
    let (a, b) = (at("A"), at("B"));
    assert_eq!(Prop::imp(a.clone(), b.clone()).to_string(), "Implies(A, B)");
    assert_eq!((a.clone() & b.clone()).to_string(), "And(A, B)");
    assert_eq!((a.clone() | b.clone()).to_string(), "Or(A, B)");
    assert_eq!(Prop::equiv(a.clone(), b).to_string(), "Equiv(A, B)");
    assert_eq!((-a.clone()).to_string(), "¬A");
    assert_eq!(Prop::False.to_string(), "⊥");

    let nums = Numbers::new();
    let x = Object::new("x");
    let mem = Prop::mem(x.clone(), nums.naturals);
    assert_eq!(mem.to_string(), "x ∈ N");
    assert_eq!(Prop::forall(x.clone(), mem).to_string(), "∀x, x ∈ N");
    let one = Object::new("1");
    let ord = Prop::ord(x.clone(), Relation::Le, one);
    assert_eq!(Prop::exists(x, ord).to_string(), "∃x, x ≤ 1");
}

#[test]
fn substitution() {
    let (x, y) = (Object::new("x"), Object::new("y"));
    let s = Set::plain("S");
    let body = Prop::mem(x.clone(), s.clone());
    assert_eq!(body.subst(&x, &y), Prop::mem(y.clone(), s.clone()));

    // bound occurrences are not replaced
    let all = Prop::forall(x.clone(), body.clone());
    assert_eq!(all.subst(&x, &y), all);
    assert!(!all.occurs(&x));
    assert!(body.occurs(&x));

    let inner = all.as_quant().map(|(q, v, _)| (q, v.clone()));
    assert_eq!(inner, Some((Quantifier::Forall, x)));
}

#[test]
fn substitution_renames_bound_variables() {
    let (x, y) = (Object::new("x"), Object::new("y"));
    let s = Set::plain("S");
    let v = Object::in_set("v", &s);

    // ∃v, x < v with x := v must not become ∃v, v < v
    let ex = Prop::exists(v.clone(), Prop::ord(x.clone(), Relation::Lt, v.clone()));
    let sub = ex.subst(&x, &v);
    let (q, w, body) = sub.as_quant().unwrap();
    assert_eq!(q, Quantifier::Exists);
    assert_ne!(w, &v);
    assert!(w.set().unwrap().ptr_eq(&s));
    assert_eq!(body, &Prop::ord(v.clone(), Relation::Lt, w.clone()));
    assert!(sub.occurs(&v));

    // without a free occurrence to replace, nothing is renamed
    let ey = Prop::exists(v.clone(), Prop::ord(y.clone(), Relation::Lt, v.clone()));
    assert_eq!(ey.subst(&x, &v), ey);
}
