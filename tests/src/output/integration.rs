#![cfg(test)]
use std::str::FromStr;

use salute_common::config::Config;
use salute_common::person::Person;
use salute_core::greeting::GreetingPrinter;
use salute_core::{greeter, lookup};

fn capture<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> salute_common::error::Result<()>,
{
    let mut out: Vec<u8> = Vec::new();
    let result = f(&mut out);
    assert!(result.is_ok(), "Printer failed: {:?}", result.err());
    String::from_utf8(out).expect("printers only write UTF-8")
}

/// The default configuration reproduces the five uppercased iterations
/// and nothing else.
#[test]
fn default_config_prints_five_iterations() {
    let cfg: Config = Config::default();
    let text = capture(|out| GreetingPrinter::from(&cfg).print(out));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5, "Unexpected output: {text:?}");
    for (idx, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("Iteration {}: HELLO, WORLD!", idx + 1));
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn greeting_output_is_byte_identical_across_runs() {
    let printer = GreetingPrinter::default();
    let first = capture(|out| printer.print(out));
    let second = capture(|out| printer.print(out));
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn parsed_people_greet_verbatim() {
    let cases = [
        ("Ada:30", "Hello, my name is Ada and I'm 30 years old\n"),
        (":0", "Hello, my name is  and I'm 0 years old\n"),
        ("Bob:-5", "Hello, my name is Bob and I'm -5 years old\n"),
    ];

    for (input, expected) in cases {
        let person = Person::from_str(input).expect("valid NAME:AGE");
        let text = capture(|out| greeter::greet(&person, out));
        assert_eq!(text, expected, "Wrong greeting for {input:?}");
    }
}

#[test]
fn printers_share_one_sink_in_order() {
    let text = capture(|out| {
        GreetingPrinter::new("hi", 1).print(out)?;
        greeter::greet(&Person::new("Ada", 30), out)
    });
    assert_eq!(
        text,
        "Iteration 1: HI\nHello, my name is Ada and I'm 30 years old\n"
    );
}

#[test]
fn lookup_demo_prints_eleven_lines() {
    let text = capture(|out| lookup::print(out));
    let expected: String = std::iter::once("Value: 42".to_string())
        .chain((0..10).map(|i| format!("Number: {i}")))
        .map(|line| line + "\n")
        .collect();
    assert_eq!(text, expected);
}
