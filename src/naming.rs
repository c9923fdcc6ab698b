//! Sibling-entry ordering for directory listings.
//!
//! Entries at one directory level sort by a numeric-aware, case-insensitive
//! name comparison: digit runs compare by numeric value (`page2` before
//! `page10`), letters compare ASCII case-insensitively, and names equal up to
//! letter case fall back to lowercase-first. This ordering decides the final
//! navigation order of the generated site, so it is part of the converter's
//! contract rather than a cosmetic detail.
//!
//! Digit runs are compared by magnitude (stripped-zero length, then digits),
//! never parsed into an integer, so arbitrarily long runs cannot overflow.

use std::cmp::Ordering;

/// Compare two entry names with numeric awareness.
///
/// Handles these patterns:
/// - `"page2"` vs `"page10"` → `Less` (2 < 10, not lexicographic)
/// - `"alpha"` vs `"Bravo"` → `Less` (case-insensitive at primary strength)
/// - `"a"` vs `"A"` → `Less` (lowercase first when otherwise equal)
/// - `"1-intro"` vs `"about"` → `Less` (digits order before letters)
pub fn compare_names(a: &str, b: &str) -> Ordering {
    match compare_primary(a, b) {
        Ordering::Equal => compare_tiebreak(a, b),
        ord => ord,
    }
}

/// Case-insensitive, numeric-aware pass. Digit runs on both sides are
/// consumed together and compared as numbers; everything else compares
/// character by character on the ASCII-folded value.
fn compare_primary(a: &str, b: &str) -> Ordering {
    let mut ra = a;
    let mut rb = b;
    loop {
        match (ra.chars().next(), rb.chars().next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let (run_a, rest_a) = split_digit_run(ra);
                    let (run_b, rest_b) = split_digit_run(rb);
                    let ord = compare_digit_runs(run_a, run_b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                    ra = rest_a;
                    rb = rest_b;
                } else {
                    let fx = x.to_ascii_lowercase();
                    let fy = y.to_ascii_lowercase();
                    if fx != fy {
                        return fx.cmp(&fy);
                    }
                    ra = &ra[x.len_utf8()..];
                    rb = &rb[y.len_utf8()..];
                }
            }
        }
    }
}

/// Tiebreak for names equal at primary strength: first divergent character
/// decides, with lowercase ordering before uppercase on a pure case
/// difference. Leading-zero differences inside digit runs land here too.
fn compare_tiebreak(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        if x.to_ascii_lowercase() == y.to_ascii_lowercase() {
            return if x.is_ascii_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        return x.cmp(&y);
    }
    a.len().cmp(&b.len())
}

/// Split off the leading ASCII digit run. Callers guarantee the first
/// character is a digit, so the run is never empty.
fn split_digit_run(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Compare two digit runs numerically: after stripping leading zeros, a
/// longer run is a larger number, and equal lengths compare digit-wise.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let sa = a.trim_start_matches('0');
    let sb = b.trim_start_matches('0');
    sa.len().cmp(&sb.len()).then_with(|| sa.cmp(sb))
}
