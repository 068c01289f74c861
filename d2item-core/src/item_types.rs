use std::collections::HashMap;

use serde::Serialize;

use crate::code::ItemCode;
use crate::item_data;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueRange {
    pub min: u16,
    pub max: u16,
}

/// Static description of one item base type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemTypeDescriptor {
    pub code: ItemCode,
    pub name: &'static str,
    pub one_hand_damage: Option<ValueRange>,
    pub two_hand_damage: Option<ValueRange>,
    pub missile_damage: Option<ValueRange>,
    pub defense: Option<ValueRange>,
    pub width: u8,
    pub height: u8,
    pub stackable: bool,
    /// Socket limits for item levels 1-25, 26-40 and 41+; empty when the
    /// type cannot be socketed.
    pub max_sockets: &'static [u8],
    pub categories: &'static [&'static str],
}

impl ItemTypeDescriptor {
    /// Lookup-miss sentinel.
    pub const NOT_FOUND: ItemTypeDescriptor = ItemTypeDescriptor {
        code: ItemCode::INVALID,
        name: "",
        one_hand_damage: None,
        two_hand_damage: None,
        missile_damage: None,
        defense: None,
        width: 0,
        height: 0,
        stackable: false,
        max_sockets: &[],
        categories: &[],
    };

    pub(crate) const fn new(
        code: &[u8; 4],
        name: &'static str,
        categories: &'static [&'static str],
    ) -> Self {
        ItemTypeDescriptor {
            code: ItemCode::from_bytes(*code),
            name,
            one_hand_damage: None,
            two_hand_damage: None,
            missile_damage: None,
            defense: None,
            width: 1,
            height: 1,
            stackable: false,
            max_sockets: &[],
            categories,
        }
    }

    pub(crate) const fn one_hand(mut self, min: u16, max: u16) -> Self {
        self.one_hand_damage = Some(ValueRange { min, max });
        self
    }

    pub(crate) const fn two_hand(mut self, min: u16, max: u16) -> Self {
        self.two_hand_damage = Some(ValueRange { min, max });
        self
    }

    pub(crate) const fn missile(mut self, min: u16, max: u16) -> Self {
        self.missile_damage = Some(ValueRange { min, max });
        self
    }

    pub(crate) const fn defense(mut self, min: u16, max: u16) -> Self {
        self.defense = Some(ValueRange { min, max });
        self
    }

    pub(crate) const fn size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub(crate) const fn sockets(mut self, max_sockets: &'static [u8]) -> Self {
        self.max_sockets = max_sockets;
        self
    }

    pub(crate) const fn stackable(mut self) -> Self {
        self.stackable = true;
        self
    }

    pub fn is_found(&self) -> bool {
        self.code.is_valid()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| *c == category)
    }

    /// Socket limit for an item of `item_level`, zero when unsocketable.
    pub fn max_sockets_at(&self, item_level: u8) -> u8 {
        let band = match item_level {
            0..=25 => 0,
            26..=40 => 1,
            _ => 2,
        };
        self.max_sockets.get(band).copied().unwrap_or(0)
    }

    pub fn is_armor(&self) -> bool {
        self.has_category("Any Armor")
    }

    pub fn is_weapon(&self) -> bool {
        self.has_category("Weapon")
    }

    pub fn is_shield(&self) -> bool {
        self.has_category("Any Shield")
    }

    pub fn is_gem(&self) -> bool {
        self.has_category("Gem")
    }

    pub fn is_rune(&self) -> bool {
        self.has_category("Rune")
    }

    pub fn is_quest_item(&self) -> bool {
        self.has_category("Quest")
    }

    pub fn is_potion(&self) -> bool {
        self.has_category("Potion")
    }

    pub fn is_charm(&self) -> bool {
        self.has_category("Charm")
    }

    pub fn is_jewel(&self) -> bool {
        self.has_category("Jewel")
    }

    pub fn is_ring(&self) -> bool {
        self.has_category("Ring")
    }

    pub fn is_amulet(&self) -> bool {
        self.has_category("Amulet")
    }

    pub fn is_gold(&self) -> bool {
        self.has_category("Gold")
    }

    pub fn is_tome(&self) -> bool {
        self.has_category("Tome")
    }

    pub fn is_scroll(&self) -> bool {
        self.has_category("Scroll")
    }

    pub fn is_key(&self) -> bool {
        self.has_category("Key")
    }

    pub fn is_missile_weapon(&self) -> bool {
        self.has_category("Missile Weapon")
    }

    pub fn is_thrown_weapon(&self) -> bool {
        self.has_category("Thrown Weapon")
    }

    pub fn is_socketable(&self) -> bool {
        !self.max_sockets.is_empty()
    }
}

/// Which table answered a lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ItemSource {
    Stackable,
    Tome,
    Armor,
    Shield,
    Weapon,
    Gps,
    Misc,
    NotFound,
}

type Table = HashMap<ItemCode, &'static ItemTypeDescriptor>;

fn index(rows: &'static [ItemTypeDescriptor]) -> Table {
    rows.iter().map(|row| (row.code, row)).collect()
}

/// Every base item type, split into the tables the lookup chain walks.
#[derive(Debug, Clone)]
pub struct ItemTypeRegistry {
    stackable: Table,
    tome: Table,
    armor: Table,
    shield: Table,
    weapon: Table,
    gps: Table,
    misc: Table,
}

impl Default for ItemTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemTypeRegistry {
    pub fn new() -> Self {
        let mut stackable = index(item_data::STACKABLES);
        for row in item_data::WEAPONS.iter().filter(|row| row.stackable) {
            stackable.insert(row.code, row);
        }

        Self {
            stackable,
            tome: index(item_data::TOMES),
            armor: index(item_data::ARMOR),
            shield: index(item_data::SHIELDS),
            weapon: index(item_data::WEAPONS),
            gps: index(item_data::GPS),
            misc: index(item_data::MISC),
        }
    }

    pub fn len(&self) -> usize {
        [
            &self.stackable,
            &self.tome,
            &self.armor,
            &self.shield,
            &self.weapon,
            &self.gps,
            &self.misc,
        ]
        .iter()
        .map(|table| table.len())
        .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Descriptor for `code`, or [`ItemTypeDescriptor::NOT_FOUND`].
    pub fn lookup(&self, code: &ItemCode) -> &ItemTypeDescriptor {
        self.lookup_with_source(code).0
    }

    pub fn lookup_with_source(&self, code: &ItemCode) -> (&ItemTypeDescriptor, ItemSource) {
        // Stackables fall back to tomes, armor to shields. A thrown weapon
        // lives in both the stackable and weapon tables and answers from the
        // stackable one.
        let chain = [
            (&self.stackable, ItemSource::Stackable),
            (&self.tome, ItemSource::Tome),
            (&self.armor, ItemSource::Armor),
            (&self.shield, ItemSource::Shield),
            (&self.weapon, ItemSource::Weapon),
            (&self.gps, ItemSource::Gps),
            (&self.misc, ItemSource::Misc),
        ];
        for (table, source) in chain {
            if let Some(row) = table.get(code) {
                return (*row, source);
            }
        }
        log::debug!("item code {} is not a known base type", code);
        (&ItemTypeDescriptor::NOT_FOUND, ItemSource::NotFound)
    }

    pub fn is_armor(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_armor()
    }

    pub fn is_weapon(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_weapon()
    }

    pub fn is_shield(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_shield()
    }

    pub fn is_gem(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_gem()
    }

    pub fn is_rune(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_rune()
    }

    pub fn is_quest_item(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_quest_item()
    }

    pub fn is_potion(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_potion()
    }

    pub fn is_charm(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_charm()
    }

    pub fn is_jewel(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_jewel()
    }

    pub fn is_ring(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_ring()
    }

    pub fn is_amulet(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_amulet()
    }

    pub fn is_gold(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_gold()
    }

    pub fn is_tome(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_tome()
    }

    pub fn is_scroll(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_scroll()
    }

    pub fn is_key(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_key()
    }

    pub fn is_missile_weapon(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_missile_weapon()
    }

    pub fn is_thrown_weapon(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_thrown_weapon()
    }

    pub fn is_socketable(&self, code: &ItemCode) -> bool {
        self.lookup(code).is_socketable()
    }

    pub fn is_stackable(&self, code: &ItemCode) -> bool {
        self.lookup(code).stackable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ItemCodeCodec;

    #[test]
    fn gold_is_stackable() {
        let registry = ItemTypeRegistry::new();
        let (gold, source) = registry.lookup_with_source(&ItemCode::new("gld"));
        assert_eq!(source, ItemSource::Stackable);
        assert!(gold.is_gold());
        assert!(gold.stackable);
    }

    #[test]
    fn thrown_weapon_answers_from_stackables() {
        let registry = ItemTypeRegistry::new();
        let code = ItemCode::new("tkf");
        assert!(registry.weapon.contains_key(&code));
        let (knife, source) = registry.lookup_with_source(&code);
        assert_eq!(source, ItemSource::Stackable);
        assert!(knife.is_weapon());
        assert!(knife.is_thrown_weapon());
        assert!(!knife.is_socketable());
    }

    #[test]
    fn fallbacks() {
        let registry = ItemTypeRegistry::new();
        let (_, source) = registry.lookup_with_source(&ItemCode::new("lrg"));
        assert_eq!(source, ItemSource::Shield);
        assert!(registry.is_shield(&ItemCode::new("lrg")));
        assert!(registry.is_armor(&ItemCode::new("lrg")));

        let (_, source) = registry.lookup_with_source(&ItemCode::new("ibk"));
        assert_eq!(source, ItemSource::Tome);
        assert!(registry.is_tome(&ItemCode::new("ibk")));

        let (_, source) = registry.lookup_with_source(&ItemCode::new("r08"));
        assert_eq!(source, ItemSource::Gps);
        assert!(registry.is_rune(&ItemCode::new("r08")));
    }

    #[test]
    fn each_row_resolves_through_its_own_table() {
        let registry = ItemTypeRegistry::new();
        let tables: [(&[ItemTypeDescriptor], ItemSource); 7] = [
            (item_data::STACKABLES, ItemSource::Stackable),
            (item_data::TOMES, ItemSource::Tome),
            (item_data::ARMOR, ItemSource::Armor),
            (item_data::SHIELDS, ItemSource::Shield),
            (item_data::WEAPONS, ItemSource::Weapon),
            (item_data::GPS, ItemSource::Gps),
            (item_data::MISC, ItemSource::Misc),
        ];
        for (rows, expected) in tables {
            for row in rows {
                let (found, source) = registry.lookup_with_source(&row.code);
                assert_eq!(found, row);
                if row.stackable && expected == ItemSource::Weapon {
                    assert_eq!(source, ItemSource::Stackable, "{}", row.code);
                } else {
                    assert_eq!(source, expected, "{}", row.code);
                }
            }
        }
    }

    #[test]
    fn every_legacy_code_is_registered() {
        let registry = ItemTypeRegistry::new();
        let codec = ItemCodeCodec::new();
        for id in 0..0x200u16 {
            let code = codec.legacy_code(id);
            if code.is_valid() {
                assert!(registry.lookup(&code).is_found(), "{}", code);
            }
        }
    }

    #[test]
    fn miss_is_the_sentinel() {
        let registry = ItemTypeRegistry::new();
        let found = registry.lookup(&ItemCode::new("zzz"));
        assert_eq!(*found, ItemTypeDescriptor::NOT_FOUND);
        assert!(!found.is_found());
        assert!(!registry.is_weapon(&ItemCode::new("zzz")));
    }

    #[test]
    fn socket_bands() {
        let registry = ItemTypeRegistry::new();
        let gothic = registry.lookup(&ItemCode::new("gth"));
        assert_eq!(gothic.max_sockets_at(10), 3);
        assert_eq!(gothic.max_sockets_at(41), 4);
        assert!(gothic.is_socketable());
        assert_eq!(registry.lookup(&ItemCode::new("rin")).max_sockets_at(80), 0);
        assert!(registry.is_missile_weapon(&ItemCode::new("lbw")));
        assert!(registry.is_quest_item(&ItemCode::new("hst")));
        assert!(registry.is_gem(&ItemCode::new("skz")));
        assert!(registry.is_charm(&ItemCode::new("cm3")));
        assert!(registry.is_jewel(&ItemCode::new("jew")));
        assert!(registry.is_ring(&ItemCode::new("rin")));
        assert!(registry.is_amulet(&ItemCode::new("vip")));
        assert!(registry.is_potion(&ItemCode::new("hp5")));
        assert!(registry.is_scroll(&ItemCode::new("isc")));
        assert!(registry.is_key(&ItemCode::new("key")));
    }
}
