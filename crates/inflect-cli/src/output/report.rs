//! Plain and JSON result printing shared by the commands.

use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON output for a resolved call.
#[derive(Serialize)]
pub struct CallResult<'a> {
    pub function: &'a str,
    pub args: &'a [String],
    pub result: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("JSON serialization should not fail")
    );
}

/// Print a resolved string, or a dimmed marker if it is empty.
pub fn print_result(result: &str) {
    if result.is_empty() {
        println!("{}", "(no match)".dimmed());
    } else {
        println!("{}", result);
    }
}

/// Print an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}
