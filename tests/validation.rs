//! Tests for the pre-flight validator and its error collection contract.
mod common;
use common::*;
use keisan::prelude::*;

#[test]
fn non_numeric_field_type_is_rejected() {
    let catalog = price_catalog();
    let data = form(&[("notes", "hello")]);

    let ops = vec![op(
        "op-1",
        Operator::Add,
        Operand::input("notes"),
        Operand::number("1"),
    )];
    let validation = validate_operations(&ops, &catalog, &data);
    assert!(!validation.is_valid());

    let Validation::Invalid { errors } = validation else {
        panic!("expected invalid");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "notes");
    assert_eq!(errors[0].message, "Field must be of type number");
}

#[test]
fn all_errors_are_collected_in_one_pass() {
    let catalog = price_catalog();
    let data = form(&[("price", "not-a-number")]);

    let ops = vec![
        op("op-1", Operator::Add, Operand::number("abc"), Operand::input("ghost")),
        op("op-2", Operator::Multiply, Operand::input("price"), Operand::input("notes")),
    ];
    let Validation::Invalid { errors } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected invalid");
    };

    let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Invalid number value",
            "Field not found",
            "Invalid field value",
            "Field must be of type number",
        ]
    );
    // Literal problems are addressed to the owning operation.
    assert_eq!(errors[0].field, "op-1");
    assert_eq!(errors[1].field, "ghost");
}

#[test]
fn unset_operand_reports_field_not_found() {
    let catalog = price_catalog();
    let data = form(&[]);

    let ops = vec![op("op-1", Operator::Add, Operand::unset(), Operand::number("1"))];
    let Validation::Invalid { errors } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected invalid");
    };
    assert_eq!(errors[0].field, "op-1");
    assert_eq!(errors[0].message, "Field not found");
}

#[test]
fn non_finite_values_are_invalid() {
    // "NaN" and "inf" parse as floats in Rust but are not admissible
    // numbers: the literal and the submitted value must both be rejected.
    let catalog = price_catalog();
    let data = form(&[("price", "NaN")]);

    let ops = vec![op(
        "op-1",
        Operator::Add,
        Operand::number("NaN"),
        Operand::input("price"),
    )];
    let Validation::Invalid { errors } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected invalid");
    };
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, "op-1");
    assert_eq!(errors[0].message, "Invalid number value");
    assert_eq!(errors[1].field, "price");
    assert_eq!(errors[1].message, "Invalid field value");

    let ops = vec![op("op-1", Operator::Add, Operand::number("inf"), Operand::number("1"))];
    assert!(!validate_operations(&ops, &catalog, &data).is_valid());
}

#[test]
fn valid_chain_normalizes_to_resolved_numbers() {
    let catalog = price_catalog();
    let data = form(&[("price", "20000"), ("shipping", "1500")]);

    let ops = vec![
        op("op-1", Operator::Add, Operand::input("price"), Operand::input("shipping")),
        op("op-2", Operator::Percentage, Operand::input("price"), Operand::number("10")),
    ];
    let Validation::Valid { operations } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected valid");
    };
    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].value1, 20000.0);
    assert_eq!(operations[0].value2, 1500.0);
    assert_eq!(operations[1].operator, Operator::Percentage);
    assert_eq!(operations[1].value2, 10.0);
}

#[test]
fn logic_operand_resolves_through_the_engine() {
    let duty = Calculation::Simple {
        id: "calc-duty".to_string(),
        logic_id: "duty".to_string(),
        operations: vec![op(
            "op-1",
            Operator::Percentage,
            Operand::input("price"),
            Operand::number("20"),
        )],
    };
    let catalog = price_catalog()
        .with_logic_field(LogicField::new("duty", "Import duty"))
        .with_calculation(duty);
    let data = form(&[("price", "1000")]);

    let ops = vec![op("op-1", Operator::Add, Operand::logic("duty"), Operand::number("0"))];
    let Validation::Valid { operations } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected valid");
    };
    assert_eq!(operations[0].value1, 200.0);

    let ops = vec![op("op-1", Operator::Add, Operand::logic("ghost"), Operand::number("0"))];
    let Validation::Invalid { errors } = validate_operations(&ops, &catalog, &data) else {
        panic!("expected invalid");
    };
    assert_eq!(errors[0].message, "Field not found");
}

#[test]
fn conditional_calculation_validates_both_branches() {
    let calc = Calculation::Conditional {
        id: "calc-1".to_string(),
        logic_id: "band".to_string(),
        compared_values: ComparedValues {
            value1: Operand::unset(),
            value2: Operand::unset(),
        },
        conditions: vec![condition(
            "c1",
            "age",
            Comparison::GreaterThan,
            "18",
            None,
            LogicalOperator::And,
        )],
        branches: Branches {
            then_ops: vec![op("op-t", Operator::Add, Operand::input("ghost"), Operand::number("1"))],
            else_ops: vec![op("op-e", Operator::Add, Operand::number("bad"), Operand::number("1"))],
        },
    };
    let catalog = price_catalog();
    let data = form(&[("age", "30")]);

    let Validation::Invalid { errors } = validate_calculation(&calc, &catalog, &data) else {
        panic!("expected invalid");
    };
    // One problem per branch, both reported at once.
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Field not found");
    assert_eq!(errors[1].message, "Invalid number value");
}

#[test]
fn cyclic_condition_reference_surfaces_as_an_issue() {
    // Two logic fields referencing each other; a condition reading one of
    // them cannot be evaluated, and validation must say so rather than
    // silently picking a branch.
    let a = Calculation::Simple {
        id: "calc-a".to_string(),
        logic_id: "a".to_string(),
        operations: vec![op("op-1", Operator::Add, Operand::logic("b"), Operand::number("1"))],
    };
    let b = Calculation::Simple {
        id: "calc-b".to_string(),
        logic_id: "b".to_string(),
        operations: vec![op("op-1", Operator::Add, Operand::logic("a"), Operand::number("1"))],
    };
    let calc = Calculation::Conditional {
        id: "calc-1".to_string(),
        logic_id: "band".to_string(),
        compared_values: ComparedValues {
            value1: Operand::unset(),
            value2: Operand::unset(),
        },
        conditions: vec![Condition {
            id: "c1".to_string(),
            field: "a".to_string(),
            target: ConditionTarget::Logic,
            comparison: Comparison::GreaterThan,
            value: "0".to_string(),
            value2: None,
            logical_operator: LogicalOperator::And,
        }],
        branches: Branches {
            then_ops: vec![op("op-t", Operator::Add, Operand::number("1"), Operand::number("0"))],
            else_ops: vec![op("op-e", Operator::Add, Operand::number("2"), Operand::number("0"))],
        },
    };
    let catalog = price_catalog()
        .with_logic_field(LogicField::new("a", "A"))
        .with_logic_field(LogicField::new("b", "B"))
        .with_calculation(a)
        .with_calculation(b);
    let data = form(&[]);

    let Validation::Invalid { errors } = validate_calculation(&calc, &catalog, &data) else {
        panic!("expected invalid");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Cyclic field reference");
    assert!(errors[0].field == "a" || errors[0].field == "b");
}

#[test]
fn validation_summary_is_joinable() {
    let catalog = price_catalog();
    let data = form(&[]);

    let ops = vec![op("op-1", Operator::Add, Operand::number("abc"), Operand::number("def"))];
    let validation = validate_operations(&ops, &catalog, &data);
    let summary = validation.summary();
    assert!(summary.contains("Invalid number value"));
    assert!(summary.contains("; "));
}
