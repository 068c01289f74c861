use std::collections::HashMap;
use std::fmt;

use bitflags::bitflags;
use rand::Rng;
use thiserror::Error;

use crate::code::{ItemCode, LEGACY_CODES};
use crate::item_types::{ItemTypeDescriptor, ItemTypeRegistry};
use crate::legacy_data::{
    NORMAL_DRAW_TABLE, PREFIXES, SET_ITEMS, SUFFIXES, SUPERIOR_DRAW_TABLE, UNIQUE_ITEMS,
};
use crate::prng::Prng;
use crate::properties::{MagicalAttribute, PropertyCodec};
use crate::stats::StatTable;

/// Seeds tried before the set-item search gives up.
pub const SET_DWB_SEARCH_LIMIT: u32 = 20_000;

bitflags! {
    /// Item families an affix may roll on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MagicMask: u32 {
        const BODY_ARMOR = 1 << 0;
        const HELM = 1 << 1;
        const SHIELD = 1 << 2;
        const GLOVES = 1 << 3;
        const BOOTS = 1 << 4;
        const BELT = 1 << 5;
        const RING = 1 << 6;
        const AMULET = 1 << 7;
        const MELEE = 1 << 8;
        const MISSILE = 1 << 9;
        const STAFF = 1 << 10;
        const THROWN = 1 << 11;

        const ARMOR = Self::BODY_ARMOR.bits()
            | Self::HELM.bits()
            | Self::SHIELD.bits()
            | Self::GLOVES.bits()
            | Self::BOOTS.bits()
            | Self::BELT.bits();
        const WEAPON = Self::MELEE.bits()
            | Self::MISSILE.bits()
            | Self::STAFF.bits()
            | Self::THROWN.bits();
        const JEWELRY = Self::RING.bits() | Self::AMULET.bits();
    }
}

impl MagicMask {
    /// Mask for a base type, empty when the type never rolls affixes.
    pub fn for_descriptor(desc: &ItemTypeDescriptor) -> Self {
        if desc.is_quest_item() {
            return MagicMask::empty();
        }
        let tags: [(&str, MagicMask); 12] = [
            ("Armor", MagicMask::BODY_ARMOR),
            ("Helm", MagicMask::HELM),
            ("Any Shield", MagicMask::SHIELD),
            ("Gloves", MagicMask::GLOVES),
            ("Boots", MagicMask::BOOTS),
            ("Belt", MagicMask::BELT),
            ("Ring", MagicMask::RING),
            ("Amulet", MagicMask::AMULET),
            ("Melee Weapon", MagicMask::MELEE),
            ("Missile Weapon", MagicMask::MISSILE),
            ("Staves And Rods", MagicMask::STAFF),
            ("Combo Weapon", MagicMask::THROWN),
        ];
        tags.iter()
            .filter(|(tag, _)| desc.has_category(tag))
            .fold(MagicMask::empty(), |mask, (_, bit)| mask | *bit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyQuality {
    Normal,
    Exceptional,
    Elite,
    Superior,
    Set,
    Unique,
}

impl LegacyQuality {
    pub fn letter(self) -> char {
        match self {
            LegacyQuality::Normal => 'n',
            LegacyQuality::Exceptional => 'x',
            LegacyQuality::Elite => 'e',
            LegacyQuality::Superior => 's',
            LegacyQuality::Set => 't',
            LegacyQuality::Unique => 'u',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'n' => Some(LegacyQuality::Normal),
            'x' => Some(LegacyQuality::Exceptional),
            'e' => Some(LegacyQuality::Elite),
            's' => Some(LegacyQuality::Superior),
            't' => Some(LegacyQuality::Set),
            'u' => Some(LegacyQuality::Unique),
            _ => None,
        }
    }

    fn uses_superior_table(self) -> bool {
        self == LegacyQuality::Superior
    }
}

impl fmt::Display for LegacyQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Error)]
pub enum LegacyError {
    #[error("'{code}' has no legacy {quality} variant")]
    NoVariant { code: ItemCode, quality: LegacyQuality },

    #[error("'{code}' has no legacy variant for set item {set_id}")]
    NoSetVariant { code: ItemCode, set_id: u16 },
}

/// One achievable quality of a legacy base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyQualityVariant {
    pub quality: LegacyQuality,
    /// Set or unique id; zero for the other qualities.
    pub id: u16,
    pub name: Option<&'static str>,
    /// Offsets (bits 0..16) a set item's seed must land on; zero when any
    /// seed will do.
    pub dwb_code: u16,
    /// Affix pools the variant may roll from.
    pub magic_mask: MagicMask,
    /// Bases that take quality tiers; empty means the superior draw table
    /// never applies.
    pub quality_mask: MagicMask,
}

/// Every legacy variant of one base type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemV100Info {
    pub code: ItemCode,
    pub variants: Vec<LegacyQualityVariant>,
}

impl ItemV100Info {
    pub fn variant(&self, quality: LegacyQuality) -> Option<&LegacyQualityVariant> {
        self.variants.iter().find(|v| v.quality == quality)
    }

    pub fn set_variant(&self, set_id: u16) -> Option<&LegacyQualityVariant> {
        self.variants
            .iter()
            .find(|v| v.quality == LegacyQuality::Set && v.id == set_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyModifier {
    pub stat: u16,
    pub min: i64,
    pub max: i64,
    /// Fixed leading values, e.g. a class id.
    pub params: &'static [i64],
    pub chain: bool,
}

impl LegacyModifier {
    /// Roll the value; fixed ranges leave the generator untouched.
    pub fn roll(&self, prng: &mut Prng) -> i64 {
        if self.max > self.min {
            let span = (self.max - self.min) as u32;
            self.min + (prng.next() % span) as i64
        } else {
            self.min
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAffix {
    pub code: u16,
    pub name: &'static str,
    /// Minimum magic level.
    pub level: u8,
    pub mask: MagicMask,
    pub modifiers: &'static [LegacyModifier],
}

impl LegacyAffix {
    pub fn is_candidate(&self, magic_level: u8, mask: MagicMask) -> bool {
        self.level as u32 <= magic_level as u32 + 2 && self.mask.intersects(mask)
    }
}

/// Quality variants and affix pools of the legacy format.
#[derive(Debug, Clone)]
pub struct LegacyTables {
    items: HashMap<ItemCode, ItemV100Info>,
    prefixes: &'static [LegacyAffix],
    suffixes: &'static [LegacyAffix],
}

impl LegacyTables {
    pub fn new(registry: &ItemTypeRegistry) -> Self {
        let mut items = HashMap::with_capacity(LEGACY_CODES.len());
        for &(_, text) in LEGACY_CODES {
            let code = ItemCode::new(text);
            let desc = registry.lookup(&code);
            let mask = MagicMask::for_descriptor(desc);
            let quality_mask = mask & (MagicMask::ARMOR | MagicMask::WEAPON);

            let mut variants = vec![LegacyQualityVariant {
                quality: LegacyQuality::Normal,
                id: 0,
                name: None,
                dwb_code: 0,
                magic_mask: mask,
                quality_mask,
            }];
            if !quality_mask.is_empty() {
                for quality in [
                    LegacyQuality::Exceptional,
                    LegacyQuality::Elite,
                    LegacyQuality::Superior,
                ] {
                    variants.push(LegacyQualityVariant {
                        quality,
                        ..variants[0].clone()
                    });
                }
            }

            let sets: Vec<&(u16, &str, &str)> =
                SET_ITEMS.iter().filter(|(_, _, c)| *c == text).collect();
            for (index, &&(id, name, _)) in sets.iter().enumerate() {
                variants.push(LegacyQualityVariant {
                    quality: LegacyQuality::Set,
                    id,
                    name: Some(name),
                    dwb_code: set_dwb_code(index, sets.len()),
                    magic_mask: MagicMask::empty(),
                    quality_mask: MagicMask::empty(),
                });
            }
            for (id, &(name, _)) in UNIQUE_ITEMS
                .iter()
                .enumerate()
                .filter(|(_, (_, c))| *c == text)
            {
                variants.push(LegacyQualityVariant {
                    quality: LegacyQuality::Unique,
                    id: id as u16,
                    name: Some(name),
                    dwb_code: 0,
                    magic_mask: MagicMask::empty(),
                    quality_mask: MagicMask::empty(),
                });
            }

            items.insert(code, ItemV100Info { code, variants });
        }

        Self {
            items,
            prefixes: PREFIXES,
            suffixes: SUFFIXES,
        }
    }

    pub fn info(&self, code: &ItemCode) -> Option<&ItemV100Info> {
        self.items.get(code)
    }

    pub fn variant(
        &self,
        code: &ItemCode,
        quality: LegacyQuality,
    ) -> Result<&LegacyQualityVariant, LegacyError> {
        self.info(code)
            .and_then(|info| info.variant(quality))
            .ok_or(LegacyError::NoVariant {
                code: *code,
                quality,
            })
    }

    pub fn set_variant(
        &self,
        code: &ItemCode,
        set_id: u16,
    ) -> Result<&LegacyQualityVariant, LegacyError> {
        self.info(code)
            .and_then(|info| info.set_variant(set_id))
            .ok_or(LegacyError::NoSetVariant {
                code: *code,
                set_id,
            })
    }

    pub fn prefixes(&self) -> &'static [LegacyAffix] {
        self.prefixes
    }

    pub fn suffixes(&self) -> &'static [LegacyAffix] {
        self.suffixes
    }
}

// Several set pieces on one base type split the 16 offsets between them.
fn set_dwb_code(index: usize, count: usize) -> u16 {
    if count < 2 {
        return 0;
    }
    (0..16)
        .filter(|bit| bit % count == index)
        .fold(0u16, |code, bit| code | (1 << bit))
}

/// Result of one legacy generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyProperties {
    pub draw_count: u8,
    pub prefix: Option<&'static LegacyAffix>,
    pub suffix: Option<&'static LegacyAffix>,
    pub attributes: Vec<MagicalAttribute>,
}

impl LegacyProperties {
    /// Prefix and suffix names around the base name.
    pub fn display_name(&self, base: &str) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(prefix) = self.prefix {
            parts.push(prefix.name);
        }
        parts.push(base);
        if let Some(suffix) = self.suffix {
            parts.push(suffix.name);
        }
        parts.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DwbSearch {
    /// Not a set variant, or one whose seed is unconstrained.
    NotApplicable,
    Found { dwb: u32, attempts: u32 },
    /// No match within [`SET_DWB_SEARCH_LIMIT`]; `dwb` is the last seed tried.
    Exhausted { dwb: u32 },
}

/// Stage one: count draws until one divides evenly, at most six.
pub fn draw_count(prng: &mut Prng, magic_level: u8, superior: bool) -> u8 {
    let table = if superior {
        &SUPERIOR_DRAW_TABLE
    } else {
        &NORMAL_DRAW_TABLE
    };
    for (step, &(addend, divisor)) in table.iter().enumerate() {
        let modulus = (addend - magic_level as i32 / divisor).max(1) as u32;
        if prng.next() % modulus == 0 {
            return step as u8 + 1;
        }
    }
    table.len() as u8
}

/// Offset (0..16) a set item's seed selects.
pub fn dwb_offset(dwb: u32, magic_level: u8) -> u32 {
    let mut prng = Prng::new(dwb);
    draw_count(&mut prng, magic_level, false);
    prng.next() % 16
}

/// Replays the legacy item roll for a stored seed.
#[derive(Debug, Clone, Copy)]
pub struct LegacyGenerator<'a> {
    codec: PropertyCodec<'a>,
    stats: &'a StatTable,
    tables: &'a LegacyTables,
}

impl<'a> LegacyGenerator<'a> {
    pub fn new(stats: &'a StatTable, tables: &'a LegacyTables) -> Self {
        Self {
            codec: PropertyCodec::new(stats),
            stats,
            tables,
        }
    }

    pub fn generate(
        &self,
        code: &ItemCode,
        quality: LegacyQuality,
        dwb: u32,
        magic_level: u8,
    ) -> Result<LegacyProperties, LegacyError> {
        let variant = self.tables.variant(code, quality)?;
        Ok(self.generate_for_variant(variant, dwb, magic_level))
    }

    pub fn generate_for_variant(
        &self,
        variant: &LegacyQualityVariant,
        dwb: u32,
        magic_level: u8,
    ) -> LegacyProperties {
        let mut prng = Prng::new(dwb);
        let superior =
            variant.quality.uses_superior_table() && !variant.quality_mask.is_empty();
        let draws = draw_count(&mut prng, magic_level, superior);

        let mask = variant.magic_mask;
        let prefix = pick_affix(&mut prng, self.tables.prefixes, magic_level, mask, false);
        let suffix = pick_affix(
            &mut prng,
            self.tables.suffixes,
            magic_level,
            mask,
            prefix.is_none(),
        );

        let mut attributes = Vec::new();
        for affix in prefix.iter().chain(suffix.iter()) {
            self.materialize(&mut prng, affix, &mut attributes);
        }
        log::debug!(
            "dwb {:#010x} level {}: {} draws, prefix {:?}, suffix {:?}",
            dwb,
            magic_level,
            draws,
            prefix.map(|a| a.name),
            suffix.map(|a| a.name)
        );

        LegacyProperties {
            draw_count: draws,
            prefix,
            suffix,
            attributes,
        }
    }

    fn materialize(
        &self,
        prng: &mut Prng,
        affix: &LegacyAffix,
        attributes: &mut Vec<MagicalAttribute>,
    ) {
        for modifier in affix.modifiers {
            let value = modifier.roll(prng);
            if modifier.chain {
                if let Some(previous) = attributes.last_mut() {
                    let previous_def = self.stats.get(previous.id);
                    if previous_def.next_in_chain == Some(modifier.stat) {
                        previous.description = previous_def.chain_template.to_string();
                    }
                    previous.values.push(value);
                    continue;
                }
            }
            let mut values = modifier.params.to_vec();
            values.push(value);
            attributes.push(self.codec.attribute(self.stats.get(modifier.stat), values));
        }
    }

    /// Stage three: look for a fresh seed whose offset lands on the set
    /// variant's DWB code.
    pub fn search_set_dwb<R: Rng + ?Sized>(
        &self,
        variant: &LegacyQualityVariant,
        magic_level: u8,
        rng: &mut R,
    ) -> DwbSearch {
        if variant.quality != LegacyQuality::Set || variant.dwb_code == 0 {
            return DwbSearch::NotApplicable;
        }

        let mut dwb = 0;
        for attempt in 1..=SET_DWB_SEARCH_LIMIT {
            dwb = rng.next_u32();
            if variant.dwb_code & (1 << dwb_offset(dwb, magic_level)) != 0 {
                log::debug!("set {} matched dwb {:#010x} after {} tries", variant.id, dwb, attempt);
                return DwbSearch::Found {
                    dwb,
                    attempts: attempt,
                };
            }
        }
        log::warn!(
            "no seed for set {} (code {:#06x}) within {} tries; keeping {:#010x}",
            variant.id,
            variant.dwb_code,
            SET_DWB_SEARCH_LIMIT,
            dwb
        );
        DwbSearch::Exhausted { dwb }
    }
}

/// Stage two for one pool. A forced pick skips the presence coin.
fn pick_affix(
    prng: &mut Prng,
    pool: &'static [LegacyAffix],
    magic_level: u8,
    mask: MagicMask,
    forced: bool,
) -> Option<&'static LegacyAffix> {
    let candidates: Vec<&'static LegacyAffix> = pool
        .iter()
        .filter(|affix| affix.is_candidate(magic_level, mask))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    if !forced && prng.next() % 2 != 1 {
        return None;
    }
    let index = prng.next() % candidates.len() as u32;
    Some(candidates[index as usize])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    struct Fixture {
        stats: StatTable,
        tables: LegacyTables,
    }

    fn fixture() -> Fixture {
        Fixture {
            stats: StatTable::new(),
            tables: LegacyTables::new(&ItemTypeRegistry::new()),
        }
    }

    #[test]
    fn draw_count_is_bounded() {
        for seed in 0..2_000u32 {
            for level in [1u8, 30, 99] {
                let mut prng = Prng::new(seed.wrapping_mul(2_654_435_761));
                let n = draw_count(&mut prng, level, seed % 2 == 0);
                assert!((1..=6).contains(&n));
            }
        }
    }

    #[test]
    fn draw_count_matches_manual_replay() {
        let mut prng = Prng::new(0x1234_5678);
        let n = draw_count(&mut prng, 12, false);

        let mut replay = Prng::new(0x1234_5678);
        let mut expected = 6;
        for (step, (addend, divisor)) in NORMAL_DRAW_TABLE.iter().enumerate() {
            let modulus = (addend - 12 / divisor).max(1) as u32;
            if replay.next() % modulus == 0 {
                expected = step as u8 + 1;
                break;
            }
        }
        assert_eq!(n, expected);
        assert_eq!(prng, replay);
    }

    #[test]
    fn fixed_modifier_does_not_draw() {
        let mut prng = Prng::new(99);
        let before = prng;
        let fixed = LegacyModifier { stat: 34, min: 2, max: 2, params: &[], chain: false };
        assert_eq!(fixed.roll(&mut prng), 2);
        assert_eq!(prng, before);

        let ranged = LegacyModifier { stat: 16, min: 10, max: 20, params: &[], chain: false };
        let value = ranged.roll(&mut prng);
        assert!((10..20).contains(&value));
        assert_ne!(prng, before);
    }

    #[test]
    fn generation_is_deterministic() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let code = ItemCode::new("lsd");
        for dwb in [1u32, 0xDEAD_BEEF, 0x0BAD_F00D, 666] {
            let a = generator.generate(&code, LegacyQuality::Normal, dwb, 20).unwrap();
            let b = generator.generate(&code, LegacyQuality::Normal, dwb, 20).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn some_affix_is_always_chosen_for_magic_bases() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let codec = PropertyCodec::new(&f.stats);
        let mut rng = StdRng::seed_from_u64(0xD2 ^ 0x6AC6_90C5);
        for code in ["cap", "lsd", "amu", "rin", "hbt", "sbw"] {
            let code = ItemCode::new(code);
            for _ in 0..200 {
                let dwb: u32 = rng.gen();
                let level = rng.gen_range(1..=60);
                let props = generator
                    .generate(&code, LegacyQuality::Normal, dwb, level)
                    .unwrap();
                assert!(props.prefix.is_some() || props.suffix.is_some());
                assert!(!props.attributes.is_empty());
                // every roll must be storable
                codec.encode_to_vec(&props.attributes).unwrap();
            }
        }
    }

    #[test]
    fn candidates_respect_level_and_mask() {
        let f = fixture();
        let helm = f.tables.variant(&ItemCode::new("cap"), LegacyQuality::Normal).unwrap();
        assert_eq!(helm.magic_mask, MagicMask::HELM);
        for affix in f.tables.prefixes().iter().chain(f.tables.suffixes()) {
            let eligible = affix.is_candidate(4, helm.magic_mask);
            assert_eq!(
                eligible,
                affix.level <= 6 && affix.mask.contains(MagicMask::HELM),
                "{}",
                affix.name
            );
        }
    }

    #[test]
    fn chained_modifiers_merge() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let measure = SUFFIXES.iter().find(|a| a.name == "of Measure").unwrap();
        let mut attributes = Vec::new();
        generator.materialize(&mut Prng::new(5), measure, &mut attributes);
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes[0].id, 21);
        assert_eq!(attributes[0].values.len(), 2);
        assert_eq!(attributes[0].description, "Adds {0}-{1} Damage");

        let frost = SUFFIXES.iter().find(|a| a.name == "of Frost").unwrap();
        let mut attributes = Vec::new();
        generator.materialize(&mut Prng::new(5), frost, &mut attributes);
        assert_eq!(attributes.len(), 1);
        assert_eq!(attributes[0].values[0], 1);
        assert_eq!(attributes[0].values[2], 50);

        let monk = PREFIXES.iter().find(|a| a.name == "Monk's").unwrap();
        let mut attributes = Vec::new();
        generator.materialize(&mut Prng::new(5), monk, &mut attributes);
        assert_eq!(attributes[0].values, vec![3, 1]);
    }

    #[test]
    fn quest_items_and_uniques_roll_nothing() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let props = generator
            .generate(&ItemCode::new("hax"), LegacyQuality::Unique, 77, 30)
            .unwrap();
        assert!(props.prefix.is_none() && props.suffix.is_none());
        assert!(props.attributes.is_empty());

        let gnasher = f.tables.variant(&ItemCode::new("hax"), LegacyQuality::Unique).unwrap();
        assert_eq!(gnasher.name, Some("The Gnasher"));
        assert_eq!(gnasher.id, 0);

        assert!(matches!(
            generator.generate(&ItemCode::new("hst"), LegacyQuality::Superior, 1, 1),
            Err(LegacyError::NoVariant { .. })
        ));
    }

    #[test]
    fn set_variants_split_offsets() {
        let f = fixture();
        let amulet = f.tables.info(&ItemCode::new("amu")).unwrap();
        let sets: Vec<&LegacyQualityVariant> = amulet
            .variants
            .iter()
            .filter(|v| v.quality == LegacyQuality::Set)
            .collect();
        assert!(sets.len() > 1);
        let union = sets.iter().fold(0u16, |acc, v| {
            assert_eq!(acc & v.dwb_code, 0);
            acc | v.dwb_code
        });
        assert_eq!(union, 0xFFFF);

        let ward = f.tables.set_variant(&ItemCode::new("lrg"), 0).unwrap();
        assert_eq!(ward.name, Some("Civerb's Ward"));
        assert_eq!(ward.dwb_code, 0);
        assert_eq!(f.tables.set_variant(&ItemCode::new("ltp"), 61).unwrap().id, 61);
    }

    #[test]
    fn dwb_search_finds_matching_seed() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let tancred = f.tables.set_variant(&ItemCode::new("amu"), 33).unwrap();
        let mut rng = StdRng::seed_from_u64(0xA11CE);
        match generator.search_set_dwb(tancred, 25, &mut rng) {
            DwbSearch::Found { dwb, attempts } => {
                assert!(attempts >= 1 && attempts <= SET_DWB_SEARCH_LIMIT);
                assert_ne!(tancred.dwb_code & (1 << dwb_offset(dwb, 25)), 0);
            }
            other => panic!("expected a match, got {:?}", other),
        }

        let ward = f.tables.set_variant(&ItemCode::new("lrg"), 0).unwrap();
        assert_eq!(generator.search_set_dwb(ward, 25, &mut rng), DwbSearch::NotApplicable);
    }

    struct FixedSeed(u32);

    impl RngCore for FixedSeed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }

        fn next_u64(&mut self) -> u64 {
            self.0 as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            dest.fill(0);
            Ok(())
        }
    }

    #[test]
    fn dwb_search_is_bounded() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let seed = 0x0C0F_FEE0;
        let miss = 1u16 << dwb_offset(seed, 10);
        let variant = LegacyQualityVariant {
            quality: LegacyQuality::Set,
            id: 99,
            name: None,
            dwb_code: !miss,
            magic_mask: MagicMask::empty(),
            quality_mask: MagicMask::empty(),
        };
        assert_eq!(
            generator.search_set_dwb(&variant, 10, &mut FixedSeed(seed)),
            DwbSearch::Exhausted { dwb: seed }
        );

        let hit = LegacyQualityVariant {
            dwb_code: miss,
            ..variant.clone()
        };
        assert_eq!(
            generator.search_set_dwb(&hit, 10, &mut FixedSeed(seed)),
            DwbSearch::Found {
                dwb: seed,
                attempts: 1
            }
        );

        let unconstrained = LegacyQualityVariant {
            dwb_code: 0,
            ..variant
        };
        assert_eq!(
            generator.search_set_dwb(&unconstrained, 10, &mut FixedSeed(seed)),
            DwbSearch::NotApplicable
        );
    }

    #[test]
    fn quality_letters() {
        for quality in [
            LegacyQuality::Normal,
            LegacyQuality::Exceptional,
            LegacyQuality::Elite,
            LegacyQuality::Superior,
            LegacyQuality::Set,
            LegacyQuality::Unique,
        ] {
            assert_eq!(LegacyQuality::from_letter(quality.letter()), Some(quality));
        }
        assert_eq!(LegacyQuality::from_letter('q'), None);
    }

    #[test]
    fn quality_tiers_exist_for_weapons_and_armor() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        for code in ["hax", "cap"] {
            let code = ItemCode::new(code);
            let normal = generator.generate(&code, LegacyQuality::Normal, 0xC0DE, 25).unwrap();
            for tier in [LegacyQuality::Exceptional, LegacyQuality::Elite] {
                let variant = f.tables.variant(&code, tier).unwrap();
                assert!(!variant.quality_mask.is_empty());
                let rolled = generator.generate(&code, tier, 0xC0DE, 25).unwrap();
                assert_eq!(rolled, normal);
            }
            assert!(f.tables.variant(&code, LegacyQuality::Superior).is_ok());
        }

        let ring = ItemCode::new("rin");
        for tier in [
            LegacyQuality::Exceptional,
            LegacyQuality::Elite,
            LegacyQuality::Superior,
        ] {
            assert!(matches!(
                generator.generate(&ring, tier, 1, 10),
                Err(LegacyError::NoVariant { .. })
            ));
        }
    }

    #[test]
    fn quality_mask_gates_superior_table() {
        let f = fixture();
        let generator = LegacyGenerator::new(&f.stats, &f.tables);
        let superior = f
            .tables
            .variant(&ItemCode::new("lsd"), LegacyQuality::Superior)
            .unwrap()
            .clone();
        let ungated = LegacyQualityVariant {
            quality_mask: MagicMask::empty(),
            ..superior.clone()
        };
        for dwb in [3u32, 0xDEAD_BEEF, 0x0BAD_F00D, 666, 0x1234_5678] {
            let mut normal = Prng::new(dwb);
            let mut upgraded = Prng::new(dwb);
            assert_eq!(
                generator.generate_for_variant(&ungated, dwb, 1).draw_count,
                draw_count(&mut normal, 1, false)
            );
            assert_eq!(
                generator.generate_for_variant(&superior, dwb, 1).draw_count,
                draw_count(&mut upgraded, 1, true)
            );
        }
    }

    #[test]
    fn masks_follow_categories() {
        let registry = ItemTypeRegistry::new();
        let mask = |code: &str| MagicMask::for_descriptor(registry.lookup(&ItemCode::new(code)));
        assert_eq!(mask("lrg"), MagicMask::SHIELD);
        assert_eq!(mask("wnd"), MagicMask::MELEE | MagicMask::STAFF);
        assert_eq!(mask("jav"), MagicMask::MELEE | MagicMask::THROWN);
        assert_eq!(mask("lbw"), MagicMask::MISSILE);
        assert_eq!(mask("rin"), MagicMask::RING);
        assert!(mask("hst").is_empty());
        assert!(mask("gld").is_empty());
        assert!(MagicMask::ARMOR.contains(MagicMask::BELT));
    }
}
