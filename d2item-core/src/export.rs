//! The two JSON shapes attributes are exchanged in.
//!
//! `simple` is for people: a rendered description plus one key per field.
//! `serialized` mirrors the in-memory record and can be read back with
//! [`from_serialized`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::properties::{MagicalAttribute, OpValue};
use crate::stats::{FieldKind, StatDefinition, StatTable};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("expected a JSON object")]
    NotAnObject,

    #[error("missing or malformed '{field}'")]
    BadField { field: &'static str },

    #[error("stat {id} cannot appear in a property list")]
    UnknownStat { id: u64 },
}

/// Which shape [`crate::DecoderSettings`] asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonDialect {
    #[default]
    Simple,
    Serialized,
}

const DAMAGE_STATS: [u16; 5] = [48, 50, 52, 54, 57];

fn field_key(name: &str) -> String {
    name.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Whether a zero secondary value is dropped from the simple form.
fn omits_zero_secondary(def: &StatDefinition) -> bool {
    def.next_in_chain.is_some() || DAMAGE_STATS.contains(&def.id)
}

pub fn simple(attribute: &MagicalAttribute, catalog: &Catalog) -> Value {
    let def = catalog.stats().get(attribute.id);
    let mut out = Map::new();
    out.insert("Stat".into(), json!(attribute.name));
    out.insert("Description".into(), json!(attribute.render(catalog.skills())));

    let keys: Vec<String> = if def.next_in_chain.is_some() && attribute.values.len() == 2 {
        vec!["Min".to_string(), "Max".to_string()]
    } else {
        def.fields.iter().map(|f| field_key(f.name)).collect()
    };
    let drop_zero = omits_zero_secondary(def);
    for (index, (key, value)) in keys.iter().zip(&attribute.values).enumerate() {
        if drop_zero && index > 0 && *value == 0 {
            continue;
        }
        out.insert(key.clone(), json!(value));
    }

    if let Some(op) = &attribute.op {
        out.insert("OpValue".into(), json!(op.value));
    }
    if !attribute.visible {
        out.insert("Hidden".into(), json!(true));
    }
    Value::Object(out)
}

fn skill_key(field: &str, kind: FieldKind, value_index: &mut usize) -> &'static str {
    match (field, kind) {
        ("skill", FieldKind::Param) => "SkillId",
        ("level", FieldKind::Param) => "SkillLevel",
        _ => {
            *value_index += 1;
            if *value_index == 1 {
                "Value"
            } else {
                "MaxValue"
            }
        }
    }
}

fn is_skill_stat(def: &StatDefinition) -> bool {
    def.fields
        .iter()
        .any(|f| f.kind == FieldKind::Param && f.name == "skill")
}

pub fn serialized(attribute: &MagicalAttribute, stats: &StatTable) -> Value {
    let def = stats.get(attribute.id);
    let mut out = Map::new();
    out.insert("Id".into(), json!(attribute.id));
    out.insert("Stat".into(), json!(attribute.name));

    if is_skill_stat(def) && attribute.values.len() == def.fields.len() {
        let mut value_index = 0;
        for (field, value) in def.fields.iter().zip(&attribute.values) {
            let key = skill_key(field.name, field.kind, &mut value_index);
            out.insert(key.into(), json!(value));
        }
    } else if attribute.values.len() == 1 {
        out.insert("Value".into(), json!(attribute.values[0]));
    } else {
        out.insert("Values".into(), json!(attribute.values));
    }

    if let Some(op) = &attribute.op {
        out.insert(
            "OpValue".into(),
            json!({ "Op": op.op, "Base": op.base, "Value": op.value }),
        );
    }
    Value::Object(out)
}

fn int(object: &Map<String, Value>, field: &'static str) -> Result<i64, ExportError> {
    object
        .get(field)
        .and_then(Value::as_i64)
        .ok_or(ExportError::BadField { field })
}

/// Read back an attribute written by [`serialized`].
pub fn from_serialized(value: &Value, stats: &StatTable) -> Result<MagicalAttribute, ExportError> {
    let object = value.as_object().ok_or(ExportError::NotAnObject)?;
    let raw_id = object
        .get("Id")
        .and_then(Value::as_u64)
        .ok_or(ExportError::BadField { field: "Id" })?;
    let def = u16::try_from(raw_id)
        .ok()
        .and_then(|id| stats.try_get(id))
        .filter(|def| def.is_saved())
        .ok_or(ExportError::UnknownStat { id: raw_id })?;

    let values = if let Some(list) = object.get("Values") {
        list.as_array()
            .ok_or(ExportError::BadField { field: "Values" })?
            .iter()
            .map(|v| v.as_i64().ok_or(ExportError::BadField { field: "Values" }))
            .collect::<Result<Vec<_>, _>>()?
    } else if is_skill_stat(def) && object.contains_key("SkillId") {
        let mut value_index = 0;
        def.fields
            .iter()
            .map(|f| int(object, skill_key(f.name, f.kind, &mut value_index)))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        vec![int(object, "Value")?]
    };

    let op = match object.get("OpValue") {
        Some(Value::Object(op)) => Some(OpValue {
            op: int(op, "Op")? as u8,
            base: op
                .get("Base")
                .and_then(Value::as_str)
                .ok_or(ExportError::BadField { field: "Base" })?
                .to_string(),
            value: int(op, "Value")?,
        }),
        Some(_) => return Err(ExportError::BadField { field: "OpValue" }),
        None => None,
    };

    let mut attribute = MagicalAttribute::new(def, values);
    if def.next_in_chain.is_some() && attribute.values.len() == 2 {
        attribute.description = def.chain_template.to_string();
    }
    attribute.op = op;
    Ok(attribute)
}

/// Render a list in the requested dialect.
pub fn to_json(attributes: &[MagicalAttribute], dialect: JsonDialect, catalog: &Catalog) -> Value {
    Value::Array(
        attributes
            .iter()
            .map(|attribute| match dialect {
                JsonDialect::Simple => simple(attribute, catalog),
                JsonDialect::Serialized => serialized(attribute, catalog.stats()),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(catalog: &Catalog, id: u16, values: Vec<i64>) -> MagicalAttribute {
        catalog
            .property_codec()
            .with_character_level(20)
            .attribute(catalog.stats().get(id), values)
    }

    #[test]
    fn serialized_shapes() {
        let catalog = Catalog::new();
        let stats = catalog.stats();

        let single = serialized(&attribute(&catalog, 39, vec![30]), stats);
        assert_eq!(single, json!({"Id": 39, "Stat": "fireresist", "Value": 30}));

        let multi = serialized(&attribute(&catalog, 48, vec![3, 9]), stats);
        assert_eq!(multi, json!({"Id": 48, "Stat": "firemindam", "Values": [3, 9]}));

        let charged = serialized(&attribute(&catalog, 204, vec![3, 54, 10, 20]), stats);
        assert_eq!(
            charged,
            json!({
                "Id": 204,
                "Stat": "item_charged_skill",
                "SkillLevel": 3,
                "SkillId": 54,
                "Value": 10,
                "MaxValue": 20
            })
        );

        let on_hit = serialized(&attribute(&catalog, 198, vec![5, 36, 10]), stats);
        assert_eq!(on_hit["SkillId"], 36);
        assert_eq!(on_hit["SkillLevel"], 5);
        assert_eq!(on_hit["Value"], 10);

        let per_level = serialized(&attribute(&catalog, 216, vec![8]), stats);
        assert_eq!(
            per_level["OpValue"],
            json!({"Op": 2, "Base": "level", "Value": 20})
        );
    }

    #[test]
    fn serialized_reads_back() {
        let catalog = Catalog::new();
        let stats = catalog.stats();
        let cases = [
            attribute(&catalog, 39, vec![30]),
            attribute(&catalog, 54, vec![2, 8, 50]),
            attribute(&catalog, 21, vec![2, 7]),
            attribute(&catalog, 204, vec![3, 54, 10, 20]),
            attribute(&catalog, 97, vec![54, 2]),
            attribute(&catalog, 216, vec![8]),
        ];
        for mut expected in cases {
            if expected.values.len() == 2 && expected.id == 21 {
                expected.description = stats.get(21).chain_template.to_string();
            }
            let json = serialized(&expected, stats);
            assert_eq!(from_serialized(&json, stats).unwrap(), expected);
        }
    }

    #[test]
    fn rejects_bad_json() {
        let stats = StatTable::new();
        assert_eq!(from_serialized(&json!([1]), &stats), Err(ExportError::NotAnObject));
        assert_eq!(
            from_serialized(&json!({"Id": 4, "Value": 1}), &stats),
            Err(ExportError::UnknownStat { id: 4 })
        );
        assert_eq!(
            from_serialized(&json!({"Id": 39}), &stats),
            Err(ExportError::BadField { field: "Value" })
        );
    }

    #[test]
    fn simple_omits_zero_secondary_damage() {
        let catalog = Catalog::new();
        let fire = simple(&attribute(&catalog, 48, vec![5, 0]), &catalog);
        assert_eq!(fire["Min"], 5);
        assert!(fire.get("Max").is_none());

        let chained = simple(&attribute(&catalog, 21, vec![3, 0]), &catalog);
        assert_eq!(chained["Min"], 3);
        assert!(chained.get("Max").is_none());

        let plain = simple(&attribute(&catalog, 39, vec![0]), &catalog);
        assert_eq!(plain["Value"], 0);
        assert_eq!(plain["Description"], "Fire Resist +0%");
    }

    #[test]
    fn simple_names_fields() {
        let catalog = Catalog::new();
        let charged = simple(&attribute(&catalog, 204, vec![3, 54, 10, 20]), &catalog);
        assert_eq!(charged["Stat"], "item_charged_skill");
        assert_eq!(charged["Description"], "Level 3 Teleport (10/20 Charges)");
        assert_eq!(charged["Skill"], 54);
        assert_eq!(charged["MaxCharges"], 20);

        let list = to_json(
            &[attribute(&catalog, 216, vec![8])],
            JsonDialect::Simple,
            &catalog,
        );
        assert_eq!(list[0]["OpValue"], 20);
    }
}
