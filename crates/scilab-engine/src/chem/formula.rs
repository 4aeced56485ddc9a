//! Canonical molecular formula strings.
//!
//! A modified Hill order: carbon first, hydrogen second, then the remaining
//! metals, then the remaining nonmetals, each run sorted by symbol string.
//! Counts of 1 are omitted. The output depends only on the multiset of
//! elements, never on positions, ids or insertion order.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::chem::atom::PlacedAtom;
use crate::chem::element::{periodic_table, Element};

/// Compute the canonical formula of the placed atoms. Empty input gives "".
pub fn compute_formula(atoms: &[PlacedAtom]) -> String {
    formula_of(atoms.iter().map(|a| a.element))
}

/// Canonical formula of any collection of elements.
pub fn formula_of<'a>(elements: impl IntoIterator<Item = &'a Element>) -> String {
    let mut counts: BTreeMap<&str, (&Element, u32)> = BTreeMap::new();
    for element in elements {
        counts.entry(element.symbol.as_str()).or_insert((element, 0)).1 += 1;
    }

    let mut entries: Vec<(&Element, u32)> = counts.into_values().collect();
    entries.sort_by(|(a, _), (b, _)| hill_cmp(a, b));

    let mut result = String::new();
    for (element, count) in entries {
        append_element(&mut result, &element.symbol, count);
    }
    result
}

fn hill_rank(element: &Element) -> u8 {
    match element.symbol.as_str() {
        "C" => 0,
        "H" => 1,
        _ if element.is_metal => 2,
        _ => 3,
    }
}

/// Ordering used for formula output.
pub fn hill_cmp(a: &Element, b: &Element) -> Ordering {
    hill_rank(a)
        .cmp(&hill_rank(b))
        .then_with(|| a.symbol.cmp(&b.symbol))
}

fn append_element(out: &mut String, symbol: &str, count: u32) {
    out.push_str(symbol);
    if count > 1 {
        let _ = write!(out, "{count}");
    }
}

/// Split a formula like "Fe2O3" into `[("Fe", 2), ("O", 3)]`.
///
/// Symbols may repeat ("CH3CH3" gives two C and two H entries). Returns
/// `None` for anything that is not a run of capitalised symbols with
/// optional counts.
pub fn parse_formula(formula: &str) -> Option<Vec<(String, u32)>> {
    let mut parts = Vec::new();
    let mut chars = formula.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            return None;
        }
        let mut symbol = c.to_string();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_lowercase() {
                break;
            }
            symbol.push(next);
            chars.next();
        }

        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if !next.is_ascii_digit() {
                break;
            }
            digits.push(next);
            chars.next();
        }
        let count = if digits.is_empty() { 1 } else { digits.parse().ok()? };
        if count == 0 {
            return None;
        }
        parts.push((symbol, count));
    }

    Some(parts)
}

/// Rewrite a hand-written formula ("NH3") in canonical form ("H3N").
///
/// Returns `None` if it does not parse or names an unknown element.
pub fn canonicalize(formula: &str) -> Option<String> {
    let table = periodic_table();
    let mut elements = Vec::new();
    for (symbol, count) in parse_formula(formula)? {
        let element = table.lookup(&symbol)?;
        elements.extend(std::iter::repeat(element).take(count as usize));
    }
    Some(formula_of(elements))
}
