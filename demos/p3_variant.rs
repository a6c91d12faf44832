//! Pattern 3: Closed-Set Variants and Visitors
//! Example: Exhaustive dispatch over Variant
//!
//! Run with: cargo run --example p3_variant

use value_dispatch::{apply_visitor, process, Variant, Visitor};

// Visitor producing a label instead of a number
struct Labeler;

impl Visitor for Labeler {
    type Output = String;

    fn visit_int(&mut self, value: i32) -> String {
        format!("integer {}", value)
    }

    fn visit_text(&mut self, value: &str) -> String {
        format!("text of {} chars", value.chars().count())
    }
}

fn main() {
    println!("=== Length Visitor ===");
    let mut var = Variant::from(42);
    println!("  {:?} -> {}", var, process(&var));
    assert_eq!(process(&var), 42);

    var = "Boost".into();
    println!("  {:?} -> {}", var, process(&var));
    assert_eq!(process(&var), 5);

    println!("\n=== Custom Visitor ===");
    for v in [Variant::Int(-3), Variant::from("héllo")] {
        println!("  {:?} -> {}", v, apply_visitor(&mut Labeler, &v));
    }

    println!("\n=== Why Exhaustiveness Matters ===");
    println!("Add a Variant alternative and every Visitor stops compiling");
    println!("until it handles the new case.");
}
