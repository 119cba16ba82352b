//! Pattern 3: Numeric Challenges
//! Example: Sums, Filters, Extremes, and Phone Numbers
//!
//! Run with: cargo run --example p3_numeric_challenges

use array_text_utils::arrays::make_string_from_array;
use array_text_utils::numbers::{
    find_min_max, get_absolute_sum, get_tel_no, remove_strings, Value,
};

fn main() {
    println!("=== Numeric Challenges ===\n");

    // Absolute sums
    println!("=== Absolute Sums ===\n");

    let signed = vec![-1.0, 2.0, -3.0];
    println!("Input: {:?}", signed);
    println!("Absolute sum: {}", get_absolute_sum(&signed));
    println!("Absolute sum of []: {}", get_absolute_sum(&[]));

    // Filtering mixed sequences
    println!("\n=== Filtering Mixed Sequences ===\n");

    let mixed = vec![
        Value::Number(1.0),
        Value::Text("a".to_string()),
        Value::Number(2.0),
        Value::Text("b".to_string()),
        Value::Bool(true),
    ];
    println!("Mixed: {:?}", mixed);
    println!("Without text: {:?}", remove_strings(&mixed));
    println!("Joined through Display: {}", make_string_from_array(&mixed));

    // Extremes
    println!("\n=== Extremes ===\n");

    println!("min/max of [3, 1, 2]: {:?}", find_min_max(&[3.0, 1.0, 2.0]));
    println!("min/max of [4.5]: {:?}", find_min_max(&[4.5]));
    println!("min/max of []: {:?}", find_min_max(&[]));

    // Phone formatting
    println!("\n=== Phone Formatting ===\n");

    let digits = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
    println!("Digits: {:?}", digits);
    println!("Formatted: {}", get_tel_no(&digits));
    println!("Two digits only: '{}'", get_tel_no(&[1, 2]));

    println!("\n=== Key Points ===");
    println!("1. Empty inputs fold to 0.0 or None, never an error");
    println!("2. Value models mixed-type sequences; filtering drops Text");
    println!("3. min/max comes back as one Option pair in a single pass");
    println!("4. Phone formatting inserts marks at fixed, clamped positions");
}
