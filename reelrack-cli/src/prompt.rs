//! Line-reading and validation-loop helpers for the interactive menu.
//!
//! The validators in `reelrack-core` never coerce input; these loops
//! re-prompt until a value passes or (for optional bounds) blank input
//! selects the default.

use std::io::{BufRead, Write};

use reelrack_core::{parse_bounded, parse_bounded_int_or_default, parse_bounded_or_default};

/// Print a prompt and read one trimmed line from stdin.
///
/// A closed stdin means no further input can ever arrive, so EOF exits
/// the program instead of handing an empty line back to a prompt loop.
pub(crate) fn read_line(prompt: &str) -> String {
    print!("{prompt}");
    std::io::stdout().flush().unwrap();

    match read_trimmed(&mut std::io::stdin().lock()) {
        Some(line) => line,
        None => {
            println!("Bye!");
            std::process::exit(0);
        }
    }
}

/// Read one line, trimmed. Returns `None` on EOF.
fn read_trimmed(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    let bytes = reader.read_line(&mut input).unwrap();
    if bytes == 0 {
        return None;
    }
    Some(input.trim().to_string())
}

/// "Press enter to continue" pause after each action, as the menu
/// redraws immediately afterwards.
pub(crate) fn pause() {
    read_line("\nPress enter to continue ");
}

/// Prompt for a numeric value within `[min, max]`, looping until valid.
pub(crate) fn prompt_bounded(prompt: &str, min: f64, max: f64) -> f64 {
    loop {
        let input = read_line(prompt);
        match parse_bounded(&input, min, max) {
            Ok(value) => return value,
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt for an optional numeric bound; blank input returns `default`.
pub(crate) fn prompt_bounded_or_default(prompt: &str, min: f64, max: f64, default: f64) -> f64 {
    loop {
        let input = read_line(prompt);
        match parse_bounded_or_default(&input, min, max, default) {
            Ok(value) => return value,
            Err(e) => println!("{e}"),
        }
    }
}

/// Prompt for an optional whole-number bound; blank input returns
/// `default`, fractional input is rejected.
pub(crate) fn prompt_bounded_int_or_default(
    prompt: &str,
    min: i32,
    max: i32,
    default: i32,
) -> i32 {
    loop {
        let input = read_line(prompt);
        match parse_bounded_int_or_default(&input, min, max, default) {
            Ok(value) => return value,
            Err(e) => println!("{e}"),
        }
    }
}

/// Y/N prompt, looping until one of the two (case-insensitive) is given.
pub(crate) fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let input = read_line(prompt);
        if input.eq_ignore_ascii_case("y") {
            return true;
        }
        if input.eq_ignore_ascii_case("n") {
            return false;
        }
        println!("Please enter \"Y\" or \"N\"");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::read_trimmed;

    #[test]
    fn read_trimmed_strips_whitespace() {
        let mut input = Cursor::new("  Troy  \n");
        assert_eq!(read_trimmed(&mut input).as_deref(), Some("Troy"));
    }

    #[test]
    fn read_trimmed_returns_none_on_eof() {
        let mut input = Cursor::new("");
        assert_eq!(read_trimmed(&mut input), None);
    }

    #[test]
    fn read_trimmed_keeps_blank_lines_distinct_from_eof() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_trimmed(&mut input).as_deref(), Some(""));
    }
}
