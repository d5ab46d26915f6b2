use lazy_static::*;
use std::collections::HashMap;

/// Id given to any class label missing from the table
pub const UNKNOWN_CLASS_ID: u32 = 0;

lazy_static! {
    static ref CLASS_TO_ID: HashMap<&'static str, u32> = {
        let mut table = HashMap::new();
        table.insert("Adult", 1);
        table.insert("DJ", 2);
        table.insert("J", 3);
        table
    };
}

/// Translates a class label to its id. Labels are matched exactly and
/// anything not in the table maps to [`UNKNOWN_CLASS_ID`].
pub fn class_id(label: &str) -> u32 {
    CLASS_TO_ID
        .get(label)
        .copied()
        .unwrap_or(UNKNOWN_CLASS_ID)
}

pub fn class_name(id: u32) -> Option<&'static str> {
    CLASS_TO_ID
        .iter()
        .find(|(_, class_id)| **class_id == id)
        .map(|(name, _)| *name)
}

/// Every known (label, id) pair, ordered by id
pub fn known_classes() -> Vec<(&'static str, u32)> {
    let mut classes: Vec<_> = CLASS_TO_ID.iter().map(|(name, id)| (*name, *id)).collect();
    classes.sort_by_key(|(_, id)| *id);
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(class_id("Adult"), 1);
        assert_eq!(class_id("DJ"), 2);
        assert_eq!(class_id("J"), 3);
    }

    #[test]
    fn unknown_labels_map_to_zero() {
        for label in &["Unknown", "", "adult", " J", "Juvenile"] {
            assert_eq!(class_id(label), UNKNOWN_CLASS_ID, "label {:?}", label);
        }
    }

    #[test]
    fn reverse_lookup() {
        assert_eq!(class_name(2), Some("DJ"));
        assert_eq!(class_name(UNKNOWN_CLASS_ID), None);
        assert_eq!(class_name(42), None);
    }

    #[test]
    fn table_is_ordered_by_id() {
        assert_eq!(known_classes(), vec![("Adult", 1), ("DJ", 2), ("J", 3)]);
    }
}
