//! Pattern 2: Type Erasure with Any
//! Example: Runtime type inspection and safe downcasting
//!
//! Run with: cargo run --example p2_erased

use value_dispatch::{describe, DispatchError, ErasedValue};

fn main() {
    println!("=== Dispatch by Runtime Type ===");
    let mut val = ErasedValue::from(10);
    println!("  {:?} -> {:?}", val, describe(&val));

    val.set(String::from("hello"));
    println!("  {:?} -> {:?}", val, describe(&val));

    val.set(5.5f64);
    match describe(&val) {
        Ok(text) => println!("  unexpected: {}", text),
        Err(DispatchError::UnsupportedType { type_name }) => {
            println!("  {:?} -> unsupported type {}", val, type_name)
        }
        Err(err) => println!("  other error: {}", err),
    }

    println!("\n=== Safe Downcasting ===");
    let number = ErasedValue::from(7);
    match number.downcast_ref::<i32>() {
        Ok(n) => println!("  as i32: {}", n),
        Err(err) => println!("  error: {}", err),
    }
    match number.downcast_ref::<String>() {
        Ok(s) => println!("  as String: {}", s),
        Err(err) => println!("  as String: {}", err),
    }

    println!("\n=== Caution ===");
    println!("An unsupported type and a bad cast are different errors.");
    println!("Prefer a closed enum when the set of types is known up front.");
}
