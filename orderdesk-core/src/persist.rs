//! YAML persistence of an order.
//!
//! Document shape:
//!
//! ```yaml
//! order:
//! - item: door
//!   type: front
//!   side: right
//!   qty: 1
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};
use tracing::{info, warn};

use crate::error::{OrderError, Result};
use crate::field::FieldValue;
use crate::form::{ItemRecord, Order};
use crate::schema::ItemKind;

/// Key naming the item type of each entry
pub const ITEM_KEY: &str = "item";

/// Top-level key of the document
pub const ORDER_KEY: &str = "order";

/// Flag names that the engine schema stores under `type`.
/// Checked in this order.
const FLAG_NAMES: [&str; 2] = ["gas", "diesel"];

#[derive(Debug, Serialize)]
struct OrderDocument {
    order: Vec<Mapping>,
}

fn value_to_yaml(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Integer(n) => Value::Number((*n).into()),
        FieldValue::Flag(b) => Value::Bool(*b),
    }
}

fn record_to_mapping(record: &ItemRecord) -> Mapping {
    let mut mapping = Mapping::new();
    mapping.insert(
        Value::String(ITEM_KEY.to_string()),
        Value::String(record.kind.as_str().to_string()),
    );
    for (key, value) in &record.fields {
        mapping.insert(Value::String(key.clone()), value_to_yaml(value));
    }
    mapping
}

/// Serialize an order to YAML text
pub fn to_yaml_string(order: &Order) -> std::result::Result<String, serde_yaml::Error> {
    let document = OrderDocument {
        order: order.iter().map(record_to_mapping).collect(),
    };
    serde_yaml::to_string(&document)
}

fn yaml_to_value(path: &Path, key: &str, value: &Value) -> Result<FieldValue> {
    match value {
        Value::String(s) => Ok(FieldValue::Text(s.clone())),
        Value::Bool(b) => Ok(FieldValue::Flag(*b)),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => Ok(FieldValue::Integer(i)),
            // Unquoted capacities such as 1.6 come back as floats
            (None, Some(f)) => Ok(FieldValue::Text(f.to_string())),
            (None, None) => Err(OrderError::format(
                path,
                format!("unsupported number for key '{}'", key),
            )),
        },
        _ => Err(OrderError::format(
            path,
            format!("key '{}' must hold a scalar value", key),
        )),
    }
}

fn mapping_to_record(path: &Path, index: usize, mapping: &Mapping) -> Result<ItemRecord> {
    let item = mapping
        .get(ITEM_KEY)
        .ok_or_else(|| OrderError::format(path, format!("entry {} has no '{}' key", index, ITEM_KEY)))?;
    let name = item.as_str().ok_or_else(|| {
        OrderError::format(path, format!("entry {}: '{}' must be a string", index, ITEM_KEY))
    })?;
    let kind: ItemKind = name.parse()?;

    let mut record = ItemRecord::new(kind);
    for (key, value) in mapping {
        let key = key.as_str().ok_or_else(|| {
            OrderError::format(path, format!("entry {} has a non-string key", index))
        })?;
        if key == ITEM_KEY {
            continue;
        }
        record.insert(key, yaml_to_value(path, key, value)?);
    }
    Ok(record)
}

/// Parse YAML text into an order. `path` only labels errors.
pub fn from_yaml_str(path: &Path, text: &str) -> Result<Order> {
    let root: Value = serde_yaml::from_str(text).map_err(|e| OrderError::yaml(path, e))?;

    let root = root
        .as_mapping()
        .ok_or_else(|| OrderError::format(path, "document is not a mapping"))?;
    let entries = root
        .get(ORDER_KEY)
        .ok_or_else(|| OrderError::format(path, format!("missing '{}' key", ORDER_KEY)))?
        .as_sequence()
        .ok_or_else(|| OrderError::format(path, format!("'{}' must be a sequence", ORDER_KEY)))?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let mapping = entry.as_mapping().ok_or_else(|| {
                OrderError::format(path, format!("entry {} is not a mapping", index))
            })?;
            mapping_to_record(path, index, mapping)
        })
        .collect()
}

/// Write `order` to `path`, creating parent directories as needed
pub fn save(path: impl AsRef<Path>, order: &Order) -> Result<()> {
    let path = path.as_ref();
    let text = to_yaml_string(order).map_err(|e| OrderError::yaml(path, e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OrderError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| OrderError::io(path, e))?;

    info!(path = %path.display(), items = order.len(), "saved order");
    Ok(())
}

/// Read an order back from `path`
pub fn load(path: impl AsRef<Path>) -> Result<Order> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| OrderError::io(path, e))?;

    match from_yaml_str(path, &text) {
        Ok(order) => {
            info!(path = %path.display(), items = order.len(), "loaded order");
            Ok(order)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "rejected order file");
            Err(err)
        }
    }
}

/// Lay a record's values back out on its schema.
///
/// A record stores one `type` for the whole flag group, and one `capacity`.
/// When a value equals a flag name, the name is repeated right after its
/// first occurrence. Then the value that is now second-to-last is inserted
/// two places after it, filling the second flag and the extra capacity slot.
pub fn expand_defaults(record: &ItemRecord) -> Vec<FieldValue> {
    let mut defaults: Vec<FieldValue> = record.values().cloned().collect();

    let flag = FLAG_NAMES.iter().find_map(|name| {
        defaults
            .iter()
            .position(|v| v.as_text() == Some(*name))
            .map(|pos| (*name, pos))
    });

    if let Some((name, pos)) = flag {
        defaults.insert(pos + 1, FieldValue::from(name));
        let filler = defaults[defaults.len() - 2].clone();
        defaults.insert(pos + 2, filler);
    }

    defaults
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("order.yml")
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    fn engine_record(kind: &str, capacity: &str, qty: i64) -> ItemRecord {
        let mut record = ItemRecord::new(ItemKind::Engine);
        record.insert("type", text(kind));
        record.insert("capacity", text(capacity));
        record.insert("qty", FieldValue::Integer(qty));
        record
    }

    #[test]
    fn test_yaml_shape() {
        let mut door = ItemRecord::new(ItemKind::Door);
        door.insert("type", text("front"));
        door.insert("side", text("right"));
        door.insert("qty", FieldValue::Integer(1));

        let yaml = to_yaml_string(&vec![door]).unwrap();
        assert!(yaml.starts_with("order:"));
        assert!(yaml.contains("item: door"));
        assert!(yaml.contains("side: right"));
        assert!(yaml.contains("qty: 1"));

        // Keys keep record order with item first
        let item_at = yaml.find("item:").unwrap();
        let type_at = yaml.find("type:").unwrap();
        let qty_at = yaml.find("qty:").unwrap();
        assert!(item_at < type_at && type_at < qty_at);
    }

    #[test]
    fn test_parse_indented_document() {
        let yaml = "order:\n  - item: engine\n    type: diesel\n    capacity: '1.6'\n    qty: 3\n";
        let order = from_yaml_str(&path(), yaml).unwrap();
        assert_eq!(order, vec![engine_record("diesel", "1.6", 3)]);
    }

    #[test]
    fn test_unquoted_float_becomes_text() {
        let yaml = "order:\n- item: engine\n  type: gas\n  capacity: 1.6\n  qty: 2\n";
        let order = from_yaml_str(&path(), yaml).unwrap();
        assert_eq!(order[0].get("capacity"), Some(&text("1.6")));
    }

    #[test]
    fn test_item_key_need_not_be_first() {
        let yaml = "order:\n- qty: 4\n  item: headlight\n  type: left\n";
        let order = from_yaml_str(&path(), yaml).unwrap();
        assert_eq!(order[0].kind, ItemKind::Headlight);
        assert_eq!(
            order[0].fields,
            vec![
                ("qty".to_string(), FieldValue::Integer(4)),
                ("type".to_string(), text("left")),
            ]
        );
    }

    #[test]
    fn test_empty_order() {
        let order = from_yaml_str(&path(), "order: []\n").unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn test_format_errors() {
        let cases = vec![
            "",
            "- item: door\n",
            "orders: []\n",
            "order: door\n",
            "order:\n- door\n",
            "order:\n- type: front\n",
            "order:\n- item: 5\n",
            "order:\n- item: door\n  type: [a, b]\n",
            "order:\n- item: door\n  1: front\n",
            "order: [\n",
        ];

        for yaml in cases {
            let err = from_yaml_str(&path(), yaml).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "input: {:?}", yaml);
        }
    }

    #[test]
    fn test_unknown_item_is_lookup_error() {
        let err = from_yaml_str(&path(), "order:\n- item: wheel\n  qty: 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_expand_defaults_gas() {
        let defaults = expand_defaults(&engine_record("gas", "1.4", 2));
        assert_eq!(
            defaults,
            vec![text("gas"), text("gas"), text("1.4"), text("1.4"), FieldValue::Integer(2)]
        );
    }

    #[test]
    fn test_expand_defaults_diesel() {
        let defaults = expand_defaults(&engine_record("diesel", "1.6", 3));
        assert_eq!(
            defaults,
            vec![
                text("diesel"),
                text("diesel"),
                text("1.6"),
                text("1.6"),
                FieldValue::Integer(3)
            ]
        );
    }

    #[test]
    fn test_expand_defaults_plain_item() {
        let mut door = ItemRecord::new(ItemKind::Door);
        door.insert("type", text("back"));
        door.insert("side", text("left"));
        door.insert("qty", FieldValue::Integer(9));

        assert_eq!(
            expand_defaults(&door),
            vec![text("back"), text("left"), FieldValue::Integer(9)]
        );
    }

    #[test]
    fn test_save_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file
        let err = save(dir.path(), &Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.yml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("order.yml");
        let order = vec![engine_record("gas", "1.2", 1)];

        save(&target, &order).unwrap();
        assert_eq!(load(&target).unwrap(), order);
    }
}
