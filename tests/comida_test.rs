//! Tests for construction, merge, quantity, scaling, deletion and equality.

use rstest::{fixture, rstest};

use comida::domain::samples;
use comida::domain::DomainError;
use comida::util::testing::init_test_setup;
use comida::{Comida, Items};

#[fixture]
fn massa() -> Comida {
    init_test_setup();
    samples::massa()
}

// ============================================================
// Construction & merge
// ============================================================

#[test]
fn given_new_node_when_created_then_is_leaf_with_quantity_one() {
    let sal = Comida::new("sal");
    assert_eq!(sal.name(), "sal");
    assert_eq!(sal.quantity(), 1.0);
    assert!(sal.is_leaf());
}

#[test]
fn given_same_name_twice_when_merging_then_one_child_with_quantity_two() {
    let mut recipe = Comida::new("r");
    recipe.add_into("a");
    recipe.add_into("a");

    assert_eq!(recipe.children().len(), 1);
    assert_eq!(recipe.children()[0].quantity(), 2.0);
}

#[rstest]
fn given_massa_when_built_from_repeated_names_then_counts_are_merged(massa: Comida) {
    let names: Vec<&str> = massa.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["farinha", "ovo", "sal"]);
    assert_eq!(massa.get_child_by_name("ovo").map(|c| c.quantity()), Some(2.0));
    assert_eq!(massa.get_child_by_name("sal").map(|c| c.quantity()), Some(4.0));
}

#[test]
fn given_nodes_with_same_name_when_merging_then_both_are_appended() {
    let recipe = Comida::with_items("r", [Comida::new("a"), Comida::new("a")]);
    assert_eq!(recipe.children().len(), 2);
    assert!(recipe.children().iter().all(|c| c.quantity() == 1.0));
}

#[test]
fn given_duplicate_nodes_when_merging_bare_name_then_first_match_is_bumped() {
    let mut recipe = Comida::with_items("r", [Comida::new("a"), Comida::new("a")]);
    recipe.add_into("a");
    let quantities: Vec<f64> = recipe.children().iter().map(|c| c.quantity()).collect();
    assert_eq!(quantities, vec![2.0, 1.0]);
}

#[test]
fn given_group_when_merging_its_name_then_subtree_follows_new_quantity() {
    let mut recipe = Comida::with_items("r", Comida::with_items("g", "x"));
    recipe.add_into("g");

    let group = recipe.get_child_by_name("g").expect("group present");
    assert_eq!(group.quantity(), 2.0);
    assert_eq!(group.children()[0].quantity(), 2.0);
}

#[test]
fn given_mixed_items_when_merging_then_order_is_preserved() {
    let items = Items::new().push("sal").push(Comida::new("massa")).push(String::from("queijo"));
    let recipe = Comida::with_items("pizza", items);
    let names: Vec<&str> = recipe.children().iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["sal", "massa", "queijo"]);
}

// ============================================================
// Quantity
// ============================================================

#[rstest]
#[case(0.0)]
#[case(-1.0)]
#[case(f64::NAN)]
fn given_non_positive_value_when_setting_quantity_then_write_is_ignored(#[case] value: f64) {
    let mut molho = samples::molho();
    molho.set_quantity(value);
    assert_eq!(molho, samples::molho());
}

#[test]
fn given_positive_value_when_setting_quantity_then_subtree_is_rescaled() {
    let mut molho = samples::molho();
    molho.set_quantity(6.0);

    assert_eq!(molho.quantity(), 6.0);
    assert_eq!(molho.get_child_by_name("tomate").map(|c| c.quantity()), Some(12.0));
    assert_eq!(molho.get_child_by_name("alho").map(|c| c.quantity()), Some(6.0));
}

#[test]
fn given_strict_setter_when_value_is_zero_then_returns_error_and_keeps_quantity() {
    let mut sal = Comida::new("sal");
    let err = sal.try_set_quantity(0.0).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidQuantity {
            name: "sal".into(),
            value: 0.0
        }
    );
    assert_eq!(sal.quantity(), 1.0);
}

// ============================================================
// Scaling
// ============================================================

#[rstest]
fn given_recipe_when_scaling_in_place_then_every_descendant_scales(massa: Comida) {
    let mut doubled = massa.clone();
    doubled.scale_into(2.0);

    assert_eq!(doubled.quantity(), 2.0);
    for (original, scaled) in massa.children().iter().zip(doubled.children()) {
        assert_eq!(scaled.quantity(), original.quantity() * 2.0);
    }
}

#[rstest]
fn given_recipe_when_dividing_in_place_then_scales_by_reciprocal(massa: Comida) {
    let mut halved = massa.clone();
    halved.divide_into(4.0);
    assert_eq!(halved.quantity(), 0.25);
    assert_eq!(halved.get_child_by_name("sal").map(|c| c.quantity()), Some(1.0));
}

/// Permissive scaling does not validate its factor.
#[test]
fn given_zero_factor_when_scaling_permissively_then_quantities_become_zero() {
    let mut sal = Comida::new("sal");
    sal.scale_into(0.0);
    assert_eq!(sal.quantity(), 0.0);
}

#[rstest]
#[case(0.0)]
#[case(-2.0)]
#[case(f64::INFINITY)]
fn given_invalid_factor_when_scaling_strictly_then_error_and_unchanged(#[case] factor: f64) {
    let mut molho = samples::molho();
    assert!(matches!(
        molho.try_scale_into(factor),
        Err(DomainError::InvalidFactor(_))
    ));
    assert!(matches!(
        molho.try_divide_into(factor),
        Err(DomainError::InvalidFactor(_))
    ));
    assert_eq!(molho, samples::molho());
}

// ============================================================
// Lookup & deletion
// ============================================================

#[rstest]
fn given_massa_when_removing_sal_then_no_sal_is_left(mut massa: Comida) {
    assert_eq!(massa.get_child_by_name("sal").map(|c| c.quantity()), Some(4.0));

    massa.remove_by_name("sal");

    assert!(massa.get_child_by_name("sal").is_none());
    assert!(massa.locate("sal", true, false).is_empty());
    assert_eq!(massa.children().len(), 2);
}

#[rstest]
fn given_unknown_name_when_removing_then_noop(mut massa: Comida) {
    massa.remove_by_name("chocolate");
    assert_eq!(massa, samples::massa());
}

#[test]
fn given_nested_name_when_indexing_then_lookup_is_not_recursive() {
    let pizza = samples::pizza();
    assert!(pizza.get_child_by_name("tomate").is_none());
    assert!(pizza.contains("tomate"));
    assert!(!pizza.contains("chocolate"));
}

// ============================================================
// Decrement or remove
// ============================================================

#[test]
fn given_quantity_one_when_decrementing_then_child_is_removed() {
    let mut recipe = Comida::with_items("r", ["a", "b", "b"]);
    recipe.decrement_or_remove("a");
    assert!(recipe.get_child_by_name("a").is_none());
}

#[test]
fn given_quantity_two_when_decrementing_then_child_keeps_quantity_one() {
    let mut recipe = Comida::with_items("r", ["a", "b", "b"]);
    recipe.decrement_or_remove("b");
    assert_eq!(recipe.get_child_by_name("b").map(|c| c.quantity()), Some(1.0));
}

#[test]
fn given_fractional_quantity_when_decrementing_then_child_is_removed() {
    let mut recipe = Comida::with_items("r", Comida::new("a") * 1.5);
    recipe.decrement_or_remove("a");
    assert_eq!(recipe.get_child_by_name("a").map(|c| c.quantity()), Some(0.5));
    recipe.decrement_or_remove("a");
    assert!(recipe.is_leaf());
}

#[test]
fn given_node_target_when_decrementing_then_equal_child_is_resolved() {
    let mut pizza = samples::pizza();
    let massa = pizza.get_child_by_name("massa").cloned().expect("massa present");

    pizza.decrement_or_remove(&massa);

    assert!(pizza.get_child_by_name("massa").is_none());
    assert_eq!(pizza.children().len(), 2);
}

#[test]
fn given_unknown_target_when_decrementing_then_noop() {
    let mut pizza = samples::pizza();
    pizza.decrement_or_remove("chocolate");
    pizza.decrement_or_remove(&Comida::new("massa"));
    assert_eq!(pizza, samples::pizza());
}

// ============================================================
// Clone & equality
// ============================================================

#[test]
fn given_clone_when_mutated_then_original_is_unchanged() {
    let pizza = samples::pizza();
    let mut copy = pizza.clone();
    assert_eq!(copy, pizza);

    copy.scale_into(2.0);
    copy.add_into("azeitona");
    copy.remove_by_name("massa");
    if let Some(molho) = copy.get_child_by_name_mut("molho") {
        molho.remove_by_name("sal");
    }

    assert_ne!(copy, pizza);
    assert_eq!(pizza, samples::pizza());
    assert_eq!(pizza.total_quantity("sal"), 3.0);
}

#[test]
fn given_children_in_different_order_when_comparing_then_equal() {
    assert_eq!(
        Comida::with_items("r", ["a", "b"]),
        Comida::with_items("r", ["b", "a"])
    );
}

#[rstest]
#[case(Comida::with_items("s", ["a", "b"]))]
#[case(Comida::with_items("r", ["a", "b", "b"]))]
#[case(Comida::with_items("r", ["a"]))]
#[case(Comida::with_items("r", ["a", "c"]))]
#[case(Comida::with_items("r", ["a", "b"]) * 2.0)]
fn given_structural_difference_when_comparing_then_not_equal(#[case] other: Comida) {
    assert_ne!(Comida::with_items("r", ["a", "b"]), other);
}

#[test]
fn given_nested_difference_when_comparing_then_not_equal() {
    let left = Comida::with_items("r", Comida::with_items("g", ["x", "y"]));
    let right = Comida::with_items("r", Comida::with_items("g", ["x", "z"]));
    assert_ne!(left, right);
}
