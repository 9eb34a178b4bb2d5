use vectorfield_core::stmt::{Connector, Vector, VectorNode, Weight, VQ};
use vectorfield_core::vq;

#[test]
fn or_with_or_flattens() {
    let a = VQ::new(["name", "description"]);
    let b = VQ::new(["category__label"]);

    let combined = a | b;
    assert_eq!(combined.connector(), Connector::Or);
    assert_eq!(combined.len(), 3);
    assert!(combined
        .children()
        .iter()
        .all(|child| matches!(child, VectorNode::Vector(_))));
}

#[test]
fn or_with_multi_child_and_nests() {
    let a = VQ::new(["name"]);
    let b = VQ::new(["description"]) & VQ::new(["category__label"]);
    assert_eq!(b.connector(), Connector::And);
    assert_eq!(b.len(), 2);

    let combined = a | b;
    assert_eq!(combined.len(), 2);
    assert_eq!(
        combined.to_string(),
        "(||: name:D, (&&: description:D, category__label:D))"
    );
}

#[test]
fn single_child_operand_is_spliced() {
    let multi = VQ::new(["name", "description"]);
    let combined = VQ::new(["a"]) & multi.clone();

    // `a` has one child and is spliced, the Or pair is nested
    assert_eq!(combined.to_string(), "(&&: a:D, (||: name:D, description:D))");
}

#[test]
fn empty_operand_returns_other_side() {
    let a = VQ::new(["name"]);

    assert_eq!((VQ::default() | a.clone()).to_string(), a.to_string());
    assert_eq!((a.clone() & VQ::default()).to_string(), a.to_string());
}

#[test]
fn combinators_do_not_alias_operands() {
    let a = VQ::new(["name"]);
    let b = VQ::weighted([("description", Weight::B)]);

    let combined = a.clone() | b.clone();
    let negated = !combined.clone();

    assert_eq!(a.to_string(), "(||: name:D)");
    assert_eq!(b.to_string(), "(||: description:B)");
    assert_eq!(combined.to_string(), "(||: name:D, description:B)");
    assert_eq!(negated.to_string(), "!! (||: name:D, description:B)");
    assert!(!combined.is_negated());
}

#[test]
fn double_negation_restores() {
    let a = VQ::new(["name"]);
    assert!(!(!!a).is_negated());
}

#[test]
fn negated_operands_are_never_flattened() {
    let a = VQ::new(["name"]);
    let b = !VQ::new(["description", "category__label"]);

    let combined = a | b;
    assert_eq!(
        combined.to_string(),
        "(||: name:D, !! (||: description:D, category__label:D))"
    );
}

#[test]
fn macro_mixes_positional_and_weighted() {
    let content = vq!("name", "category__label", description = B);

    let rendered: Vec<_> = content
        .vectors()
        .iter()
        .map(|vector| vector.to_string())
        .collect();
    assert_eq!(rendered, ["name:D", "category__label:D", "description:B"]);
}

#[test]
fn macro_keyword_paths_use_double_underscore() {
    let content = vq!(category__label = A);
    assert_eq!(
        content.vectors()[0].lookup.segments(),
        ["category", "label"]
    );
}

#[test]
fn from_vectors_keeps_leaf_config() {
    let content = VQ::from_vectors([
        Vector::new("name").config("simple"),
        Vector::with_weight("description", Weight::C),
    ]);

    let leaves = content.vectors();
    assert_eq!(
        leaves[0].config.as_ref().and_then(|config| config.as_name()),
        Some("simple")
    );
    assert!(leaves[1].config.is_none());
}

#[test]
fn weight_parsing() {
    assert_eq!("A".parse::<Weight>().unwrap(), Weight::A);
    assert!(Weight::try_from('c').is_err());
    assert!("Z".parse::<Weight>().unwrap_err().is_invalid_weight());
}
