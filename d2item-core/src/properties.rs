use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bits::{BitError, BitReader, BitWriter};
use crate::skills::{class_name, skill_tab_name, SkillTable};
use crate::stats::{StatDefinition, StatTable, STAT_ID_BITS, STAT_TERMINATOR};

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error(transparent)]
    Bits(#[from] BitError),

    #[error("stat {id} at bit offset {offset} cannot appear in a property list")]
    UnknownStat {
        id: u16,
        offset: usize,
        /// Attributes decoded before the bad id.
        partial: Vec<MagicalAttribute>,
    },

    #[error("stat {id} field '{field}' value {value} is outside {min}..={max}")]
    ValueOutOfRange {
        id: u16,
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("stat {id} takes {expected} values, got {got}")]
    ValueCount { id: u16, expected: usize, got: usize },

    #[error("property list ran out before its terminator ({} attributes read)", .partial.len())]
    Truncated { partial: Vec<MagicalAttribute> },
}

/// Level dependent magnitude attached to an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpValue {
    pub op: u8,
    pub base: String,
    pub value: i64,
}

/// One decoded modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagicalAttribute {
    pub id: u16,
    pub name: String,
    /// Unrendered template, see [`MagicalAttribute::render`].
    pub description: String,
    pub values: Vec<i64>,
    pub op: Option<OpValue>,
    pub visible: bool,
}

impl MagicalAttribute {
    pub fn new(def: &StatDefinition, values: Vec<i64>) -> Self {
        Self {
            id: def.id,
            name: def.name.to_string(),
            description: def.template.to_string(),
            values,
            op: None,
            visible: true,
        }
    }

    /// Recompute the level dependent value for `character_level`.
    pub fn refresh_op(&mut self, def: &StatDefinition, character_level: u32) {
        self.op = def.op.map(|op| OpValue {
            op: op.op,
            base: op.base.to_string(),
            value: op.apply(self.values.first().copied().unwrap_or(0), character_level as i64),
        });
    }

    /// Fill the description template from the values.
    pub fn render(&self, skills: &SkillTable) -> String {
        render_template(&self.description, &self.values, self.op.as_ref(), skills)
    }
}

fn value_at(values: &[i64], index: usize) -> Option<i64> {
    values.get(index).copied()
}

pub(crate) fn render_template(
    template: &str,
    values: &[i64],
    op: Option<&OpValue>,
    skills: &SkillTable,
) -> String {
    let mut out = String::with_capacity(template.len() + 8);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let Some(len) = rest[start..].find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };
        let token = &rest[start + 1..start + len];
        let (kind, digits) = match token.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => (Some(c), &token[1..]),
            _ => (None, token),
        };
        let index = digits.parse::<usize>().ok();
        let text = match (kind, index) {
            (Some('o'), _) => op
                .map(|op| op.value)
                .or_else(|| value_at(values, 0))
                .map(|v| v.to_string()),
            (None, Some(i)) => value_at(values, i).map(|v| v.to_string()),
            (Some('s'), Some(i)) => value_at(values, i).map(|v| skills.display_name(v)),
            (Some('c'), Some(i)) => value_at(values, i).map(|v| class_name(v).to_string()),
            (Some('t'), Some(i)) => value_at(values, i)
                .zip(value_at(values, i + 1))
                .map(|(tab, class)| skill_tab_name(class, tab).to_string()),
            _ => None,
        };
        match text {
            Some(text) => out.push_str(&text),
            None => out.push_str(&rest[start..=start + len]),
        }
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

const RESIST_GROUP: [u16; 4] = [39, 41, 43, 45];
const ATTRIBUTE_GROUP: [u16; 4] = [0, 1, 2, 3];

/// Collapse equal all-resistance and all-attribute bonuses for display.
///
/// Members stay in the list; the first one gets the combined description and
/// the others are hidden.
pub fn group_for_display(attributes: &mut [MagicalAttribute]) {
    group_members(attributes, &RESIST_GROUP, "All Resistances +{0}");
    group_members(attributes, &ATTRIBUTE_GROUP, "+{0} to all Attributes");
}

fn group_members(attributes: &mut [MagicalAttribute], group: &[u16], description: &str) {
    let mut members = Vec::with_capacity(group.len());
    for id in group {
        match attributes.iter().position(|a| a.id == *id) {
            Some(index) => members.push(index),
            None => return,
        }
    }
    let first_values = &attributes[members[0]].values;
    if members
        .iter()
        .any(|&index| attributes[index].values != *first_values)
    {
        return;
    }

    members.sort_unstable();
    let lead = members[0];
    attributes[lead].description = description.to_string();
    for &index in &members[1..] {
        attributes[index].visible = false;
    }
}

/// Reads and writes `(id, fields...)* 0x1FF` property lists.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCodec<'a> {
    stats: &'a StatTable,
    character_level: u32,
}

impl<'a> PropertyCodec<'a> {
    pub fn new(stats: &'a StatTable) -> Self {
        Self {
            stats,
            character_level: 1,
        }
    }

    pub fn with_character_level(mut self, character_level: u32) -> Self {
        self.character_level = character_level;
        self
    }

    pub fn character_level(&self) -> u32 {
        self.character_level
    }

    /// Build an attribute with its op value filled in.
    pub fn attribute(&self, def: &StatDefinition, values: Vec<i64>) -> MagicalAttribute {
        let mut attribute = MagicalAttribute::new(def, values);
        attribute.refresh_op(def, self.character_level);
        attribute
    }

    pub fn decode(&self, reader: &mut BitReader<'_>) -> Result<Vec<MagicalAttribute>, PropertyError> {
        let mut attributes: Vec<MagicalAttribute> = Vec::new();
        loop {
            let offset = reader.position();
            let id = read_or_truncate(reader, STAT_ID_BITS, &mut attributes)? as u16;
            if id == STAT_TERMINATOR {
                break;
            }

            let def = self.stats.get(id);
            if !def.is_saved() {
                log::warn!(
                    "unknown stat {} at bit {} after {} attributes",
                    id,
                    offset,
                    attributes.len()
                );
                return Err(PropertyError::UnknownStat {
                    id,
                    offset,
                    partial: attributes,
                });
            }

            let mut values = Vec::with_capacity(def.fields.len());
            for field in def.fields {
                let raw = read_or_truncate(reader, field.bits as u32, &mut attributes)?;
                values.push(raw as i64 - field.bias);
            }
            log::trace!("stat {} ({}) = {:?} at bit {}", id, def.name, values, offset);

            if let Some(previous) = attributes.last_mut() {
                let previous_def = self.stats.get(previous.id);
                if previous_def.next_in_chain == Some(id) && previous.values.len() == 1 {
                    previous.values.extend(values);
                    previous.description = previous_def.chain_template.to_string();
                    continue;
                }
            }
            attributes.push(self.attribute(def, values));
        }
        Ok(attributes)
    }

    /// Decode a list starting at `bit_offset`; also returns the bit offset
    /// just past the terminator.
    pub fn decode_at(
        &self,
        buf: &[u8],
        bit_offset: usize,
    ) -> Result<(Vec<MagicalAttribute>, usize), PropertyError> {
        let mut reader = BitReader::at(buf, bit_offset);
        let attributes = self.decode(&mut reader)?;
        Ok((attributes, reader.position()))
    }

    pub fn encode(
        &self,
        writer: &mut BitWriter,
        attributes: &[MagicalAttribute],
    ) -> Result<(), PropertyError> {
        for attribute in attributes {
            let def = self.stats.get(attribute.id);
            if !def.is_saved() {
                return Err(PropertyError::UnknownStat {
                    id: attribute.id,
                    offset: writer.position(),
                    partial: Vec::new(),
                });
            }
            match def.next_in_chain {
                Some(next) if attribute.values.len() == 2 => {
                    let tail = self.stats.get(next);
                    self.check(def, &attribute.values[..1])?;
                    self.check(tail, &attribute.values[1..])?;
                    write_record(writer, def, &attribute.values[..1])?;
                    write_record(writer, tail, &attribute.values[1..])?;
                }
                _ => {
                    self.check(def, &attribute.values)?;
                    write_record(writer, def, &attribute.values)?;
                }
            }
        }
        writer.write(STAT_ID_BITS, STAT_TERMINATOR as u32)?;
        Ok(())
    }

    pub fn encode_to_vec(&self, attributes: &[MagicalAttribute]) -> Result<Vec<u8>, PropertyError> {
        let mut writer = BitWriter::new();
        self.encode(&mut writer, attributes)?;
        Ok(writer.into_bytes())
    }

    fn check(&self, def: &StatDefinition, values: &[i64]) -> Result<(), PropertyError> {
        if values.len() != def.fields.len() {
            return Err(PropertyError::ValueCount {
                id: def.id,
                expected: def.fields.len(),
                got: values.len(),
            });
        }
        for (field, &value) in def.fields.iter().zip(values) {
            if value < field.min_value() || value > field.max_value() {
                return Err(PropertyError::ValueOutOfRange {
                    id: def.id,
                    field: field.name,
                    value,
                    min: field.min_value(),
                    max: field.max_value(),
                });
            }
        }
        Ok(())
    }
}

fn read_or_truncate(
    reader: &mut BitReader<'_>,
    bits: u32,
    attributes: &mut Vec<MagicalAttribute>,
) -> Result<u32, PropertyError> {
    match reader.read(bits) {
        Ok(value) => Ok(value),
        Err(BitError::OutOfRange { .. }) => {
            log::warn!(
                "property list truncated at bit {} after {} attributes",
                reader.position(),
                attributes.len()
            );
            Err(PropertyError::Truncated {
                partial: std::mem::take(attributes),
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn write_record(
    writer: &mut BitWriter,
    def: &StatDefinition,
    values: &[i64],
) -> Result<(), PropertyError> {
    writer.write(STAT_ID_BITS, def.id as u32)?;
    for (field, &value) in def.fields.iter().zip(values) {
        writer.write(field.bits as u32, (value + field.bias) as u32)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::write_bits;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn random_values(def: &StatDefinition, rng: &mut StdRng) -> Vec<i64> {
        def.fields
            .iter()
            .map(|f| rng.gen_range(f.min_value()..=f.max_value()))
            .collect()
    }

    #[test]
    fn every_saved_stat_round_trips() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats).with_character_level(30);
        let mut rng = StdRng::seed_from_u64(0x5EED ^ 0x1FF);

        for def in stats.saved() {
            for _ in 0..4 {
                let attribute = codec.attribute(def, random_values(def, &mut rng));
                let bytes = codec.encode_to_vec(std::slice::from_ref(&attribute)).unwrap();
                let (decoded, end) = codec.decode_at(&bytes, 0).unwrap();
                assert_eq!(decoded, vec![attribute], "{}", def.name);
                assert_eq!(end, STAT_ID_BITS as usize * 2 + def.total_bits() as usize);
            }
        }
    }

    #[test]
    fn full_stream_reencodes_identically() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let mut rng = StdRng::seed_from_u64(42);
        let attributes: Vec<MagicalAttribute> = stats
            .saved()
            .map(|def| codec.attribute(def, random_values(def, &mut rng)))
            .collect();

        let bytes = codec.encode_to_vec(&attributes).unwrap();
        let (decoded, _) = codec.decode_at(&bytes, 0).unwrap();
        // 21/22, 23/24 and 159/160 merge.
        assert_eq!(decoded.len(), attributes.len() - 3);
        assert_eq!(codec.encode_to_vec(&decoded).unwrap(), bytes);
    }

    #[test]
    fn chained_pair_merges() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let mut writer = BitWriter::new();
        writer.write(9, 21).unwrap();
        writer.write(6, 5).unwrap();
        writer.write(9, 22).unwrap();
        writer.write(7, 10).unwrap();
        writer.write(9, STAT_TERMINATOR as u32).unwrap();

        let (decoded, _) = codec.decode_at(writer.as_bytes(), 0).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, 21);
        assert_eq!(decoded[0].values, vec![5, 10]);
        assert_eq!(decoded[0].render(&SkillTable::builtin()), "Adds 5-10 Damage");
        assert_eq!(codec.encode_to_vec(&decoded).unwrap(), writer.into_bytes());
    }

    #[test]
    fn lone_chain_tail_stays_separate() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let attributes = vec![
            codec.attribute(stats.get(22), vec![9]),
            codec.attribute(stats.get(21), vec![3]),
        ];
        let bytes = codec.encode_to_vec(&attributes).unwrap();
        let (decoded, _) = codec.decode_at(&bytes, 0).unwrap();
        assert_eq!(decoded, attributes);
    }

    #[test]
    fn bias_is_applied() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let attribute = codec.attribute(stats.get(39), vec![-20]);
        let bytes = codec.encode_to_vec(&[attribute]).unwrap();
        let mut reader = BitReader::new(&bytes);
        assert_eq!(reader.read(9).unwrap(), 39);
        assert_eq!(reader.read(8).unwrap(), 30);
    }

    #[test]
    fn truncated_stream_keeps_partial_result() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let mut writer = BitWriter::new();
        writer.write(9, 7).unwrap();
        writer.write(9, 40 + 32).unwrap();

        match codec.decode_at(writer.as_bytes(), 0) {
            Err(PropertyError::Truncated { partial }) => {
                assert_eq!(partial.len(), 1);
                assert_eq!(partial[0].name, "maxhp");
                assert_eq!(partial[0].values, vec![40]);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_input() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);

        let mut writer = BitWriter::new();
        writer.write(9, 4).unwrap();
        writer.write(9, STAT_TERMINATOR as u32).unwrap();
        assert!(matches!(
            codec.decode_at(writer.as_bytes(), 0),
            Err(PropertyError::UnknownStat { id: 4, offset: 0, .. })
        ));

        let mut writer = BitWriter::new();
        codec.encode(&mut writer, &[codec.attribute(stats.get(39), vec![25])]).unwrap();
        let bad_at = writer.position() - 9;
        let mut bytes = writer.into_bytes();
        // Overwrite the terminator with unsaved stat 4.
        write_bits(&mut bytes, bad_at, 9, 4).unwrap();
        match codec.decode_at(&bytes, 0) {
            Err(PropertyError::UnknownStat { id: 4, offset, partial }) => {
                assert_eq!(offset, bad_at);
                assert_eq!(partial.len(), 1);
                assert_eq!(partial[0].values, vec![25]);
            }
            other => panic!("expected unknown stat, got {:?}", other),
        }

        let too_big = codec.attribute(stats.get(39), vec![300]);
        assert!(matches!(
            codec.encode_to_vec(&[too_big]),
            Err(PropertyError::ValueOutOfRange { id: 39, max: 205, .. })
        ));

        let short = codec.attribute(stats.get(17), vec![10]);
        assert!(matches!(
            codec.encode_to_vec(&[short]),
            Err(PropertyError::ValueCount { id: 17, expected: 2, got: 1 })
        ));
    }

    #[test]
    fn per_level_value_follows_character_level() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats).with_character_level(10);
        let mut attribute = codec.attribute(stats.get(216), vec![16]);
        let op = attribute.op.clone().unwrap();
        assert_eq!(op.value, 20);
        assert_eq!(op.base, "level");
        assert_eq!(
            attribute.render(&SkillTable::builtin()),
            "+20 to Life (Based on Character Level)"
        );

        attribute.refresh_op(stats.get(216), 99);
        assert_eq!(attribute.op.unwrap().value, 198);
    }

    #[test]
    fn renders_skill_placeholders() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let skills = SkillTable::builtin();

        let charged = codec.attribute(stats.get(204), vec![7, 54, 12, 20]);
        assert_eq!(charged.render(&skills), "Level 7 Teleport (12/20 Charges)");

        let tab = codec.attribute(stats.get(188), vec![2, 1, 3]);
        assert_eq!(tab.render(&skills), "+3 to Cold Skills");

        let class = codec.attribute(stats.get(83), vec![3, 2]);
        assert_eq!(class.render(&skills), "+2 to Paladin Skill Levels");

        let missing = render_template("{3} and {x}", &[1], None, &skills);
        assert_eq!(missing, "{3} and {x}");
    }

    #[test]
    fn groups_equal_resistances() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let mut attributes: Vec<MagicalAttribute> = [43, 39, 7, 41, 45]
            .iter()
            .map(|&id| codec.attribute(stats.get(id), vec![if id == 7 { 10 } else { 25 }]))
            .collect();

        group_for_display(&mut attributes);
        assert_eq!(attributes[0].description, "All Resistances +{0}");
        assert_eq!(attributes[0].render(&SkillTable::builtin()), "All Resistances +25");
        assert!(attributes[0].visible);
        assert!(attributes[2].visible);
        assert!(!attributes[1].visible && !attributes[3].visible && !attributes[4].visible);
    }

    #[test]
    fn unequal_group_is_left_alone() {
        let stats = StatTable::new();
        let codec = PropertyCodec::new(&stats);
        let mut attributes: Vec<MagicalAttribute> = (0..4)
            .map(|id| codec.attribute(stats.get(id), vec![5 + id as i64]))
            .collect();
        group_for_display(&mut attributes);
        assert!(attributes.iter().all(|a| a.visible));
        assert_eq!(attributes[0].description, "+{0} to Strength");
    }
}
