// Numeric-aware ordering for version labels

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Split a label into alternating runs of ASCII digits and everything else
fn runs(label: &str) -> Vec<Run<'_>> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;

    for (idx, ch) in label.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(current) if current != is_digit => {
                result.push(make_run(&label[start..idx], current));
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }

    if let Some(current) = in_digits {
        result.push(make_run(&label[start..], current));
    }

    result
}

fn make_run(text: &str, digits: bool) -> Run<'_> {
    if digits { Run::Digits(text) } else { Run::Text(text) }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');

    // Arbitrary length numbers: fewer significant digits means smaller
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
        .then_with(|| a.len().cmp(&b.len()))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn compare_runs(a: Run<'_>, b: Run<'_>) -> Ordering {
    match (a, b) {
        (Run::Digits(x), Run::Digits(y)) => compare_digits(x, y),
        (Run::Text(x), Run::Text(y)) => compare_text(x, y),
        (Run::Digits(_), Run::Text(_)) => Ordering::Less,
        (Run::Text(_), Run::Digits(_)) => Ordering::Greater,
    }
}

/// Compare two version labels so that digit runs compare by value.
///
/// `"1.10.0"` sorts after `"1.9.0"`; a label that is a prefix of another sorts first.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a_runs = runs(a);
    let b_runs = runs(b);

    for (x, y) in a_runs.iter().zip(b_runs.iter()) {
        let ord = compare_runs(*x, *y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    a_runs.len().cmp(&b_runs.len())
}
