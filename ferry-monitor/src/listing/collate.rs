//! Locale-aware ordering of listing paths
//!
//! Approximates the root collation of Unicode CLDR, which is what a browser's
//! `localeCompare` applies without a specific locale. Strings are compared in
//! canonical decomposition, level by level:
//!
//! 1. base characters: whitespace, punctuation in collation order, other
//!    symbols, digits, then letters compared case-insensitively
//! 2. accents: the combining marks attached to each base character
//! 3. case: lowercase before uppercase
//!
//! Code points break any remaining tie, so the order is total and deterministic.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation in root collation order
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// A base character and the combining marks that follow it
struct Unit {
    base: char,
    marks: Vec<char>,
}

fn units(s: &str) -> Vec<Unit> {
    let mut units: Vec<Unit> = Vec::new();
    for c in s.nfd() {
        match units.last_mut() {
            Some(unit) if is_combining_mark(c) => unit.marks.push(c),
            _ => units.push(Unit {
                base: c,
                marks: Vec::new(),
            }),
        }
    }
    units
}

fn primary(c: char) -> (u8, u32) {
    if c.is_whitespace() {
        (0, c as u32)
    } else if let Some(position) = PUNCTUATION.find(c) {
        (1, position as u32)
    } else if let Some(digit) = c.to_digit(10) {
        (3, digit)
    } else if c.is_alphabetic() {
        (4, c.to_lowercase().next().unwrap_or(c) as u32)
    } else {
        (2, c as u32)
    }
}

fn tertiary(c: char) -> u8 {
    u8::from(c.is_uppercase())
}

/// Compares two paths for display ordering
pub fn collate(a: &str, b: &str) -> Ordering {
    let (left, right) = (units(a), units(b));

    left.iter()
        .map(|u| primary(u.base))
        .cmp(right.iter().map(|u| primary(u.base)))
        .then_with(|| left.iter().map(|u| &u.marks).cmp(right.iter().map(|u| &u.marks)))
        .then_with(|| {
            left.iter()
                .map(|u| tertiary(u.base))
                .cmp(right.iter().map(|u| tertiary(u.base)))
        })
        .then_with(|| a.cmp(b))
}
