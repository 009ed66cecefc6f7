//! Snapshot tests for builder plans built from a class model file.

use std::str::FromStr;

use fluentbuilder_codegen::BuilderPlan;
use fluentbuilder_model::Model;

const MODEL: &str = r#"
[[class]]
name = "de.bluecarat.samples.Order"
builder = "de.bluecarat.samples.builder.OrderBuilder"

[[class.constructors]]
modifiers = ["public"]
parameters = [
    { name = "id", type = "long" },
    { name = "customer", type = "de.bluecarat.customers.Customer" },
    { name = "express", type = "boolean" },
]

[[class.constructors]]
modifiers = ["public"]
parameters = [
    { name = "priority", type = "short" },
    { name = "marker", type = "char" },
]

[[class.constructors]]
modifiers = ["private"]

[[class.fields]]
name = "SERIAL_VERSION"
type = "long"
modifiers = ["private", "static", "final"]

[[class.fields]]
name = "customer"
type = "de.bluecarat.customers.Customer"
modifiers = ["private"]

[[class.fields]]
name = "items"
type = "java.util.ArrayList<de.bluecarat.samples.Item>"
modifiers = ["private"]

[[class.fields]]
name = "labels"
type = "java.util.Set<java.lang.String>"
modifiers = ["private"]
"#;

fn order_plan() -> BuilderPlan {
    let model = Model::from_str(MODEL).expect("Failed to parse model");
    let class = model.class("Order").unwrap().expect("Order not found");
    BuilderPlan::new(class)
}

#[test]
fn test_order_imports() {
    let plan = order_plan();
    insta::assert_snapshot!(plan.imports.to_statements().join("\n"), @r"
    import de.bluecarat.samples.Order;
    import de.bluecarat.customers.Customer;
    import java.util.ArrayList;
    import java.util.List;
    import de.bluecarat.samples.Item;
    import java.util.Set;
    ");
}

#[test]
fn test_order_setters() {
    let plan = order_plan();
    let setters: Vec<String> = plan
        .setters
        .iter()
        .map(|s| format!("{} {:?} {}", s.name, s.kind, s.type_name))
        .collect();
    insta::assert_snapshot!(setters.join("\n"), @r"
    customer Value de.bluecarat.customers.Customer
    items Value java.util.ArrayList<de.bluecarat.samples.Item>
    labels Set java.util.Set<java.lang.String>
    ");
}

#[test]
fn test_order_blank_instance() {
    let plan = order_plan();
    assert_eq!(plan.builder_name, "de.bluecarat.samples.builder.OrderBuilder");
    insta::assert_snapshot!(
        plan.blank_instance_expression().unwrap(),
        @r"new Order((short) 0, '\u0000')"
    );
}
