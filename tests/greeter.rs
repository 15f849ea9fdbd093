extern crate coursework;

use coursework::console::Console;
use coursework::greeting::*;
use googletest::prelude::*;

fn transcript(input: &str) -> String {
    let mut output = Vec::new();
    Greeter::new(Console::new(input.as_bytes(), &mut output))
        .run()
        .expect("greeter should finish");
    String::from_utf8(output).expect("output should be utf8")
}

#[test]
fn run_all_four_parts_in_order() {
    let output = transcript("Ann\nBob\n30\nCarol\n41.5\n");

    assert_that!(
        output,
        eq("Initial Project part 1\n\
            Hello, World!\n\
            Initial Project part 2\n\
            What is your name? Hello, Ann!\n\
            Initial Project Extras\n\
            What is your name? What is your age? Hello, Bob! You are 30 years old.\n\
            Initial Project Extras (Error Correction)\n\
            What is your name? What is your age? Hello, Carol! You are 41.5 years old.\n")
    );
}

#[test]
fn validated_age_is_rendered_as_a_number() {
    let output = transcript("Ann\nBob\n30\nCarol\n30\n");

    assert_that!(output, ends_with("Hello, Carol! You are 30.0 years old.\n"));
}

#[test]
fn invalid_answers_are_asked_again() {
    let output = transcript("Ann\nBob\n30\n \nCarol\nabc\n0\n7\n");

    assert_that!(output, contains_substring("What is your name? Please enter a name.\n"));
    assert_that!(
        output,
        contains_substring("What is your age? That's not a valid age. Please enter a number.\n")
    );
    assert_that!(output, contains_substring("What is your age? Age must be a positive number.\n"));
    assert_that!(output, ends_with("Hello, Carol! You are 7.0 years old.\n"));
}

#[test]
fn running_out_of_input_interrupts_last_part() {
    let output = transcript("Ann\nBob\n30\nCarol\n");

    assert_that!(output, ends_with("What is your age? \nProgram interrupted by user.\n"));
}
