//! Identifier sanitization: raw spreadsheet cells in, clean deduplicated
//! CNPJs out.
use std::collections::HashSet;

use crate::types::Cnpj;

/// Sanitize raw cell values into unique CNPJs.
///
/// Cells whose digit characters do not total 14 are dropped. Duplicates
/// collapse to a single entry, keeping the order of first occurrence.
pub fn collect_unique<I, S>(cells: I) -> Vec<Cnpj>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for cell in cells {
        if let Some(cnpj) = Cnpj::parse(cell.as_ref()) {
            if seen.insert(cnpj.clone()) {
                out.push(cnpj);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_invalid_lengths() {
        let cnpjs = collect_unique(["123", "12345678000195", "not a cnpj"]);
        assert_eq!(cnpjs.len(), 1);
        assert_eq!(cnpjs[0].as_str(), "12345678000195");
    }

    #[test]
    fn formatted_and_plain_collapse() {
        let cnpjs = collect_unique(["12.345.678/0001-95", "12345678000195"]);
        assert_eq!(cnpjs.len(), 1);
    }

    #[test]
    fn first_occurrence_order_is_kept() {
        let cnpjs = collect_unique([
            "11444777000161",
            "12345678000195",
            "11444777000161",
            "60701190000104",
        ]);
        let as_strings: Vec<&str> = cnpjs.iter().map(Cnpj::as_str).collect();
        assert_eq!(
            as_strings,
            ["11444777000161", "12345678000195", "60701190000104"]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let cnpjs = collect_unique(Vec::<String>::new());
        assert!(cnpjs.is_empty());
    }
}
