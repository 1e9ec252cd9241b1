// Case mapping of lowercase templates onto an original word

use crate::character::simple_lower;

/// Copy the casing of `original` onto a lowercase syllable template.
///
/// Template characters are walked in order against the original. Where the
/// two agree case-insensitively the original character is kept, otherwise
/// the template character is used. Template characters past the end of the
/// original are copied as-is.
///
/// `map_case_onto("PEOPLE", &["peo", "ple"])` gives `["PEO", "PLE"]`.
pub fn map_case_onto(original: &str, template: &[&str]) -> Vec<String> {
    let original: Vec<char> = original.chars().collect();
    let mut index = 0;

    template
        .iter()
        .map(|part| {
            let mut mapped = String::with_capacity(part.len());
            for t in part.chars() {
                match original.get(index) {
                    Some(&o) => {
                        if simple_lower(o) == simple_lower(t) {
                            mapped.push(o);
                        } else {
                            mapped.push(t);
                        }
                        index += 1;
                    }
                    None => mapped.push(t),
                }
            }
            mapped
        })
        .collect()
}
