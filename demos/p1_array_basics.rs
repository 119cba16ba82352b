//! Pattern 1: Array Basics
//! Example: Building, Copying, and Searching Sequences
//!
//! Run with: cargo run --example p1_array_basics

use array_text_utils::arrays::{
    change_element_at_index, create_first_five_primes, create_shallow_copy, create_sized_array,
    find_element_at_index, find_element_by_value, get_first_value, make_array,
    make_string_from_array, modify_array_by_adding, modify_array_by_deleting,
};

fn main() {
    println!("=== Array Basics ===\n");

    // Element access
    println!("=== Element Access ===\n");

    let primes = create_first_five_primes();
    println!("First five primes: {:?}", primes);
    println!("First value: {:?}", get_first_value(&primes));
    println!("Element at 3: {:?}", find_element_at_index(&primes, 3));
    println!("Element at 99: {:?}", find_element_at_index(&primes, 99));

    let empty: Vec<u32> = Vec::new();
    println!("First value of empty: {:?}", get_first_value(&empty));

    // Construction
    println!("\n=== Construction ===\n");

    let letters = make_array("a", "b", "c", "d");
    println!("make_array(a, b, c, d): {:?}", letters);
    println!("Sized array (5): {:?}", create_sized_array(5));
    println!("Sized array (0): {:?}", create_sized_array(0));

    // Copy-and-modify
    println!("\n=== Copy-and-Modify ===\n");

    let base = vec![5, 6, 7];
    let wrapped = modify_array_by_adding(&base);
    println!("Original: {:?}", base);
    println!("Wrapped in ones: {:?}", wrapped);
    println!("Ends stripped again: {:?}", modify_array_by_deleting(&wrapped));
    println!("Stripping a singleton: {:?}", modify_array_by_deleting(&[42]));

    // Search
    println!("\n=== Search ===\n");

    let haystack = vec![3, 7, 7, 9];
    println!("Haystack: {:?}", haystack);
    println!("Index of 7: {:?}", find_element_by_value(&haystack, &7));
    println!("Index of 8: {:?}", find_element_by_value(&haystack, &8));

    // In-place replacement
    println!("\n=== In-Place Replacement ===\n");

    let mut scores = vec![10, 20, 30];
    println!("Before: {:?}", scores);
    change_element_at_index(&mut scores, 1, 99);
    println!("After replacing index 1 with 99: {:?}", scores);

    // Joining and copying
    println!("\n=== Joining and Copying ===\n");

    println!("Joined primes: {}", make_string_from_array(&primes));

    let copy = create_shallow_copy(&primes);
    println!("Shallow copy: {:?}", copy);
    println!(
        "Fresh storage: {}",
        copy.as_ptr() != primes.as_ptr()
    );

    println!("\n=== Key Points ===");
    println!("1. Access returns Option: None is the out-of-range sentinel");
    println!("2. Add/delete helpers work on fresh copies, input untouched");
    println!("3. change_element_at_index is the one in-place mutation");
    println!("4. Joining concatenates Display forms with no separator");
}
