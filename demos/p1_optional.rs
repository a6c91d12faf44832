//! Pattern 1: Nullable Values
//! Example: Value-or-default dispatch over Option<i32>
//!
//! Run with: cargo run --example p1_optional

use value_dispatch::{process, process_optional_or, DispatchConfig, Dispatcher};

fn main() {
    println!("=== Option<i32> with a Default ===");
    let mut a = Some(10);
    println!("  {:?} -> {}", a, process(&a));
    assert_eq!(process(&a), 10);

    a = None;
    println!("  {:?} -> {}", a, process(&a));
    assert_eq!(process(&a), 0);

    println!("\n=== Caller-Supplied Default ===");
    println!("  None with default 99 -> {}", process_optional_or(None, 99));

    println!("\n=== Configured Dispatcher ===");
    let dispatcher = Dispatcher::new(DispatchConfig {
        default_value: -1,
        ..DispatchConfig::default()
    });
    println!("  None -> {}", dispatcher.optional(None));

    println!("\n=== Key Points ===");
    println!("1. Absence is a normal case, handled with unwrap_or");
    println!("2. Some(0) and None stay distinct until the default is applied");
}
