use std::collections::BTreeSet;

use gamelink_model::RawRecord;

/// Drop records whose natural key was already seen; the first occurrence wins.
///
/// The key is the trimmed values of `key_fields` joined with `|`. Records
/// with an entirely blank key are always kept.
pub fn dedupe_by_key<'a>(
    records: &'a [RawRecord],
    key_fields: &[&str],
) -> (Vec<&'a RawRecord>, usize) {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        let mut composite = String::new();
        for (pos, field) in key_fields.iter().enumerate() {
            if pos > 0 {
                composite.push('|');
            }
            composite.push_str(record.get(field).unwrap_or_default().trim());
        }
        if composite.replace('|', "").trim().is_empty() {
            kept.push(record);
            continue;
        }
        if seen.insert(composite) {
            kept.push(record);
        } else {
            dropped += 1;
        }
    }
    (kept, dropped)
}
