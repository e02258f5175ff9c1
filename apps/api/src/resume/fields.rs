//! Fallback key lookup over the language-keyed résumé JSON.
//!
//! Every field of the document can appear under one of several synonymous
//! keys depending on the language the file was authored in (Portuguese is the
//! primary spelling; English, Spanish and French follow, plus a couple of
//! historical German spellings that shipped data still uses). The tables here
//! are the on-disk contract, do not "clean them up".

use serde_json::{Map, Value};

/// Keys that may hold the top-level sections container.
pub const SECTIONS_KEYS: [&str; 4] = ["secoes", "sections", "secciones", "sektionen"];

/// Keys that may hold a section's display title.
pub const TITLE_KEYS: [&str; 4] = ["titulo", "title", "titre", "titel"];

/// Keys that may hold a section's free-text content.
pub const CONTENT_KEYS: [&str; 4] = ["conteudo", "content", "contenido", "inhalt"];

/// Keys that may hold a section's plain item list.
pub const LIST_KEYS: [&str; 3] = ["lista", "list", "liste"];

/// Keys that may hold the job entries of the experience section.
pub const JOBS_KEYS: [&str; 4] = ["empregos", "jobs", "empleos", "emplois"];

/// Returns the first value present under any of the given keys.
pub fn first_of<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| map.get(*k))
}

/// Looks up `primary`, then `fallback`, then each of `additional` in order.
///
/// Mirrors the lookup used for scalar fields (name, phone, output file name)
/// where the caller names the language-specific spellings explicitly.
pub fn get_field<'a>(
    map: &'a Map<String, Value>,
    primary: &str,
    fallback: Option<&str>,
    additional: &[&str],
) -> Option<&'a Value> {
    if let Some(v) = map.get(primary) {
        return Some(v);
    }
    if let Some(fb) = fallback {
        if let Some(v) = map.get(fb) {
            return Some(v);
        }
    }
    additional.iter().find_map(|k| map.get(*k))
}

/// String variant of [`get_field`]; non-string values are ignored.
pub fn get_str_field<'a>(
    map: &'a Map<String, Value>,
    primary: &str,
    fallback: Option<&str>,
    additional: &[&str],
) -> Option<&'a str> {
    get_field(map, primary, fallback, additional).and_then(Value::as_str)
}

/// Section title under any known spelling, `"N/A"` when absent.
pub fn section_title(section: &Map<String, Value>) -> String {
    first_of(section, &TITLE_KEYS)
        .and_then(Value::as_str)
        .unwrap_or("N/A")
        .to_string()
}

/// Section free-text content under any known spelling, empty when absent.
pub fn section_content(section: &Map<String, Value>) -> String {
    first_of(section, &CONTENT_KEYS)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Plain string items of a section (certifications, languages, ...).
///
/// Non-string entries are stringified rather than dropped; shipped data
/// occasionally carries numbers in these lists.
pub fn section_list(section: &Map<String, Value>) -> Vec<String> {
    values_as_strings(first_of(section, &LIST_KEYS))
}

/// Raw job objects of an experience section.
pub fn section_jobs<'a>(section: &'a Map<String, Value>) -> Vec<&'a Map<String, Value>> {
    first_of(section, &JOBS_KEYS)
        .and_then(Value::as_array)
        .map(|jobs| jobs.iter().filter_map(Value::as_object).collect())
        .unwrap_or_default()
}

/// Converts an optional JSON array into owned display strings.
pub fn values_as_strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}
