//! Shell glob patterns over `/`-separated keys.
//!
//! Pattern syntax:
//!
//! - `*` matches any run of characters other than `/`
//! - `?` matches one character other than `/`
//! - `[...]` matches one character from a class of characters and `lo-hi`
//!   ranges; `[^...]` negates the class. Classes never match `/`.
//! - `\c` matches the character `c` literally, inside or outside a class
//!
//! Patterns are rewritten into `glob` crate syntax and compiled into a
//! [`glob::Pattern`]. Runs of `*` behave as a single `*`, so `**` never
//! matches across `/`.

use glob::{MatchOptions, Pattern};

use crate::error::{Error, Result};

/// Options for matching keys against a compiled pattern.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

const ERR_TRAILING_ESCAPE: &str = "pattern ends with a lone '\\'";
const ERR_UNTERMINATED_CLASS: &str = "unterminated character class";
const ERR_CLASS_SYNTAX: &str = "unescaped ']' or '-' in character class";

/// Characters that must be placed at a fixed spot inside a `glob` class,
/// each with its neighbours in code point order.
const CLASS_SPECIALS: [(char, char, char); 3] = [
    (' ', '!', '"'),
    (',', '-', '.'),
    ('\\', ']', '^'),
];

/// Compile a shell glob pattern
pub fn compile(pattern: &str) -> Result<Pattern> {
    let translated = translate(pattern)?;
    Ok(Pattern::new(&translated)?)
}

fn invalid(pos: usize, msg: &'static str) -> Error {
    Error::InvalidPattern { pos, msg }
}

/// Rewrite a shell glob pattern into `glob` crate syntax.
///
/// Positions in errors are character offsets into `pattern`.
fn translate(pattern: &str) -> Result<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                while chars.get(i) == Some(&'*') {
                    i += 1;
                }
                out.push('*');
            }
            '?' => {
                out.push('?');
                i += 1;
            }
            '[' => i = translate_class(&chars, i, &mut out)?,
            '\\' => {
                let c = *chars
                    .get(i + 1)
                    .ok_or_else(|| invalid(i, ERR_TRAILING_ESCAPE))?;
                push_literal(&mut out, c);
                i += 2;
            }
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    match c {
        '*' | '?' | '[' => {
            out.push('[');
            out.push(c);
            out.push(']');
        }
        _ => out.push(c),
    }
}

/// Translate the class opening at `start`, returning the index just past
/// its closing `]`.
fn translate_class(chars: &[char], start: usize, out: &mut String) -> Result<usize> {
    let mut i = start + 1;
    let negated = chars.get(i) == Some(&'^');
    if negated {
        i += 1;
    }

    let mut ranges = Vec::new();
    loop {
        match chars.get(i) {
            None => return Err(invalid(start, ERR_UNTERMINATED_CLASS)),
            Some(']') if !ranges.is_empty() => break,
            _ => {}
        }

        let (lo, next) = class_char(chars, i, start)?;
        i = next;
        let mut hi = lo;
        if chars.get(i) == Some(&'-') {
            let (c, next) = class_char(chars, i + 1, start)?;
            hi = c;
            i = next;
        }
        ranges.push((lo, hi));
    }

    emit_class(&ranges, negated, out);
    Ok(i + 1)
}

fn class_char(chars: &[char], i: usize, start: usize) -> Result<(char, usize)> {
    match chars.get(i) {
        None => Err(invalid(start, ERR_UNTERMINATED_CLASS)),
        Some(']' | '-') => Err(invalid(i, ERR_CLASS_SYNTAX)),
        Some('\\') => match chars.get(i + 1) {
            Some(&c) => Ok((c, i + 2)),
            None => Err(invalid(i, ERR_TRAILING_ESCAPE)),
        },
        Some(&c) => Ok((c, i + 1)),
    }
}

/// Write a class in `glob` syntax.
///
/// `glob` reads a leading `!` as negation, ends the class at the first `]`
/// after the first member and treats `-` between two members as a range,
/// so `]` goes first, `!` and `-` go last and no range may start or end on
/// one of them.
fn emit_class(ranges: &[(char, char)], negated: bool, out: &mut String) {
    let mut has = [false; 3];
    let mut spans = Vec::new();

    for &(lo, hi) in ranges {
        let mut from = lo;
        for (n, &(before, special, after)) in CLASS_SPECIALS.iter().enumerate() {
            if from <= special && special <= hi {
                if from < special {
                    spans.push((from, before));
                }
                has[n] = true;
                from = after;
            }
        }
        if from <= hi {
            spans.push((from, hi));
        }
    }
    let [bang, dash, bracket] = has;

    if spans.is_empty() && !bracket {
        match (negated, bang, dash) {
            // Empty range, matches nothing.
            (false, false, false) => out.push_str("[b-a]"),
            (false, true, false) => out.push('!'),
            (false, false, true) => out.push('-'),
            (false, true, true) => out.push_str("[-!]"),
            (true, false, false) => out.push('?'),
            (true, _, _) => {
                out.push_str("[!");
                if bang {
                    out.push('!');
                }
                if dash {
                    out.push('-');
                }
                out.push(']');
            }
        }
        return;
    }

    out.push('[');
    if negated {
        out.push('!');
    }
    if bracket {
        out.push(']');
    }
    for (lo, hi) in spans {
        out.push(lo);
        if lo != hi {
            out.push('-');
            out.push(hi);
        }
    }
    if bang {
        out.push('!');
    }
    if dash {
        out.push('-');
    }
    out.push(']');
}
