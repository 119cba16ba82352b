//! Pattern 2: String Methods
//! Example: Characters, Slices, Splits, and Case
//!
//! Run with: cargo run --example p2_string_methods

use array_text_utils::text::{
    find_the_character_at_index, make_all_lower_case, make_all_upper_case,
    make_sentence_title_case, make_word_title_case, replace_the_string, slice_the_string,
    split_the_string,
};

fn main() {
    println!("=== String Methods ===\n");

    // Character access
    println!("=== Character Access ===\n");

    let greeting = "hello world";
    println!("Text: '{}'", greeting);
    println!("Character at 1: '{}'", find_the_character_at_index(greeting, 1));
    println!("Character at 99: '{}'", find_the_character_at_index(greeting, 99));

    // Slicing
    println!("\n=== Slicing ===\n");

    println!("slice(0, 5): '{}'", slice_the_string(greeting, 0, 5));
    println!("slice(6, 11): '{}'", slice_the_string(greeting, 6, 11));
    println!("slice(-5, -1): '{}'", slice_the_string(greeting, -5, -1));
    println!("slice(3, 1): '{}'", slice_the_string(greeting, 3, 1));

    // Splitting
    println!("\n=== Splitting ===\n");

    println!("split('a,b,,c', ','): {:?}", split_the_string("a,b,,c", ","));
    println!("split('abc', ''): {:?}", split_the_string("abc", ""));
    println!("split('', ','): {:?}", split_the_string("", ","));

    // Case conversion
    println!("\n=== Case Conversion ===\n");

    let mixed = "Hello, World!";
    println!("upper('{}'): '{}'", mixed, make_all_upper_case(mixed));
    println!("lower('{}'): '{}'", mixed, make_all_lower_case(mixed));
    println!("title('hELLO'): '{}'", make_word_title_case("hELLO"));
    println!("title(''): '{}'", make_word_title_case(""));

    // Replacement
    println!("\n=== Replacement ===\n");

    println!(
        "replace('one two two', 'two', '2'): '{}'",
        replace_the_string("one two two", "two", "2")
    );
    println!(
        "replace('abc', '', '-'): '{}'",
        replace_the_string("abc", "", "-")
    );

    // Sentence title case
    println!("\n=== Sentence Title Case ===\n");

    println!(
        "'hello WORLD' -> '{}'",
        make_sentence_title_case("hello WORLD")
    );
    println!("'a  b' -> '{}'", make_sentence_title_case("a  b"));

    println!("\n=== Key Points ===");
    println!("1. Positions index grapheme clusters, never raw bytes");
    println!("2. Slicing clamps like JS slice: negatives count from the end");
    println!("3. Empty separator means split into individual characters");
    println!("4. Replacement is split-then-join, so empty patterns interleave");
}
