//! Id-based merging of record lists.

use std::collections::HashMap;

use serde_json::Value;

/// Merge `imported` into `existing`, de-duplicating on each record's `id`.
///
/// The result is `existing` followed by `imported`. When two records share an
/// id, the record keeps the position of the first occurrence and the content
/// of the last one. Records without an id collapse only with records that
/// are identical to them.
pub fn merge_by_id(existing: &[Value], imported: &[Value]) -> Vec<Value> {
    let mut merged: Vec<Value> = Vec::with_capacity(existing.len() + imported.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for record in existing.iter().chain(imported.iter()) {
        let key = dedup_key(record);
        match positions.get(&key) {
            Some(&index) => merged[index] = record.clone(),
            None => {
                positions.insert(key, merged.len());
                merged.push(record.clone());
            }
        }
    }

    merged
}

fn dedup_key(record: &Value) -> String {
    match record.get("id") {
        Some(id) if !id.is_null() => format!("id:{}", id),
        _ => format!("value:{}", record),
    }
}
