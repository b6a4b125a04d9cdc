//! Display formatting: thousands grouping over expression strings.
//!
//! These are pure functions. The display buffer stores the grouped form and
//! strips it back out before evaluation, so everything here must satisfy
//! `format_expression(strip_grouping(format_expression(x))) ==
//! format_expression(x)`.

/// Grouping separator inserted into integer digit runs
pub const GROUP_SEPARATOR: char = ',';

/// Returns true for the characters that delimit numeric runs when formatting
#[must_use]
pub fn is_operator(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '%')
}

/// Removes grouping separators from a display string
#[must_use]
pub fn strip_grouping(text: &str) -> String {
    text.chars().filter(|&c| c != GROUP_SEPARATOR).collect()
}

/// Groups a plain digit run in threes from the right: `1234567` -> `1,234,567`
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Formats a single numeric run. The fractional portion, including a
/// trailing bare decimal point, is reattached ungrouped. Runs containing
/// anything besides digits and a dot (the error sentinel, for instance)
/// pass through untouched.
fn format_number_run(run: &str) -> String {
    if !run.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return run.to_string();
    }
    match run.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_digits(int_part), frac_part),
        None => group_digits(run),
    }
}

/// Formats a raw (separator-free) expression string for display.
///
/// The string is split into alternating numeric-run / operator tokens;
/// numeric runs get their integer portion grouped, operators pass through,
/// and the pieces are concatenated in their original order.
#[must_use]
pub fn format_expression(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    let mut run = String::new();

    for ch in raw.chars() {
        if is_operator(ch) {
            if !run.is_empty() {
                out.push_str(&format_number_run(&run));
                run.clear();
            }
            out.push(ch);
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        out.push_str(&format_number_run(&run));
    }

    out
}

/// Formats an evaluation result for display: up to 10 fractional digits,
/// trailing zeros dropped, integer portion grouped.
#[must_use]
pub fn format_result(value: f64) -> String {
    let rendered = if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let fixed = format!("{value:.10}");
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    match rendered.strip_prefix('-') {
        Some(unsigned) => format!("-{}", format_number_run(unsigned)),
        None => format_number_run(&rendered),
    }
}
