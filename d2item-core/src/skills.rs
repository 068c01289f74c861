use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExternalDataError {
    #[error("table has no header row")]
    Empty,

    #[error("required column '{column}' is missing")]
    MissingColumn { column: &'static str },

    #[error("line {line}: {reason}")]
    BadRow { line: usize, reason: String },
}

pub const CLASS_NAMES: [&str; 7] = [
    "Amazon",
    "Sorceress",
    "Necromancer",
    "Paladin",
    "Barbarian",
    "Druid",
    "Assassin",
];

pub const SKILL_TAB_NAMES: [[&str; 3]; 7] = [
    ["Bow and Crossbow Skills", "Passive and Magic Skills", "Javelin and Spear Skills"],
    ["Fire Skills", "Lightning Skills", "Cold Skills"],
    ["Curses", "Poison and Bone Skills", "Summoning Skills"],
    ["Combat Skills", "Offensive Auras", "Defensive Auras"],
    ["Combat Skills", "Masteries", "Warcries"],
    ["Summoning Skills", "Shape Shifting Skills", "Elemental Skills"],
    ["Traps", "Shadow Disciplines", "Martial Arts"],
];

const SKILL_NAMES: &[&str] = &[
    // generic
    "Attack", "Kick", "Throw", "Unsummon", "Left Hand Throw", "Left Hand Swing",
    // amazon
    "Magic Arrow", "Fire Arrow", "Inner Sight", "Critical Strike", "Jab", "Cold Arrow",
    "Multiple Shot", "Dodge", "Power Strike", "Poison Javelin", "Exploding Arrow",
    "Slow Missiles", "Avoid", "Impale", "Lightning Bolt", "Ice Arrow", "Guided Arrow",
    "Penetrate", "Charged Strike", "Plague Javelin", "Strafe", "Immolation Arrow", "Decoy",
    "Evade", "Fend", "Freezing Arrow", "Valkyrie", "Pierce", "Lightning Strike",
    "Lightning Fury",
    // sorceress
    "Fire Bolt", "Warmth", "Charged Bolt", "Ice Bolt", "Frozen Armor", "Inferno",
    "Static Field", "Telekinesis", "Frost Nova", "Ice Blast", "Blaze", "Fire Ball", "Nova",
    "Lightning", "Shiver Armor", "Fire Wall", "Enchant", "Chain Lightning", "Teleport",
    "Glacial Spike", "Meteor", "Thunder Storm", "Energy Shield", "Blizzard",
    "Chilling Armor", "Fire Mastery", "Hydra", "Lightning Mastery", "Frozen Orb",
    "Cold Mastery",
    // necromancer
    "Amplify Damage", "Teeth", "Bone Armor", "Skeleton Mastery", "Raise Skeleton",
    "Dim Vision", "Weaken", "Poison Dagger", "Corpse Explosion", "Clay Golem",
    "Iron Maiden", "Terror", "Bone Wall", "Golem Mastery", "Raise Skeletal Mage",
    "Confuse", "Life Tap", "Poison Explosion", "Bone Spear", "Blood Golem", "Attract",
    "Decrepify", "Bone Prison", "Summon Resist", "Iron Golem", "Lower Resist",
    "Poison Nova", "Bone Spirit", "Fire Golem", "Revive",
    // paladin
    "Sacrifice", "Smite", "Might", "Prayer", "Resist Fire", "Holy Bolt", "Holy Fire",
    "Thorns", "Defiance", "Resist Cold", "Zeal", "Charge", "Blessed Aim", "Cleansing",
    "Resist Lightning", "Vengeance", "Blessed Hammer", "Concentration", "Holy Freeze",
    "Vigor", "Conversion", "Holy Shield", "Holy Shock", "Sanctuary", "Meditation",
    "Fist of the Heavens", "Fanaticism", "Conviction", "Redemption", "Salvation",
    // barbarian
    "Bash", "Sword Mastery", "Axe Mastery", "Mace Mastery", "Howl", "Find Potion", "Leap",
    "Double Swing", "Pole Arm Mastery", "Throwing Mastery", "Spear Mastery", "Taunt",
    "Shout", "Stun", "Double Throw", "Increased Stamina", "Find Item", "Leap Attack",
    "Concentrate", "Iron Skin", "Battle Cry", "Frenzy", "Increased Speed",
    "Battle Orders", "Grim Ward", "Whirlwind", "Berserk", "Natural Resistance", "War Cry",
    "Battle Command",
];

fn bad_row(line: usize, err: csv::Error) -> ExternalDataError {
    ExternalDataError::BadRow {
        line,
        reason: err.to_string(),
    }
}

pub fn class_name(class: i64) -> &'static str {
    usize::try_from(class)
        .ok()
        .and_then(|i| CLASS_NAMES.get(i))
        .copied()
        .unwrap_or("Unknown Class")
}

pub fn skill_tab_name(class: i64, tab: i64) -> &'static str {
    let class = usize::try_from(class).ok();
    let tab = usize::try_from(tab).ok();
    class
        .zip(tab)
        .and_then(|(c, t)| SKILL_TAB_NAMES.get(c).and_then(|tabs| tabs.get(t)))
        .copied()
        .unwrap_or("Unknown Skill Tab")
}

/// Druid (221-250) and Assassin (251-280) skills.
const EXPANSION_SKILL_NAMES: &[&str] = &[
    // druid
    "Raven", "Poison Creeper", "Werewolf", "Lycanthropy", "Firestorm", "Oak Sage",
    "Summon Spirit Wolf", "Werebear", "Molten Boulder", "Arctic Blast", "Carrion Vine",
    "Feral Rage", "Maul", "Fissure", "Cyclone Armor", "Heart of Wolverine",
    "Summon Dire Wolf", "Rabies", "Fire Claws", "Twister", "Solar Creeper", "Hunger",
    "Shock Wave", "Volcano", "Tornado", "Spirit of Barbs", "Summon Grizzly", "Fury",
    "Armageddon", "Hurricane",
    // assassin
    "Fire Blast", "Claw Mastery", "Psychic Hammer", "Tiger Strike", "Dragon Talon",
    "Shock Web", "Blade Sentinel", "Burst of Speed", "Fists of Fire", "Dragon Claw",
    "Charged Bolt Sentry", "Wake of Fire", "Weapon Block", "Cloak of Shadows",
    "Cobra Strike", "Blade Fury", "Fade", "Shadow Warrior", "Claws of Thunder",
    "Dragon Tail", "Lightning Sentry", "Wake of Inferno", "Mind Blast", "Blades of Ice",
    "Dragon Flight", "Death Sentry", "Blade Shield", "Venom", "Shadow Master",
    "Phoenix Strike",
];

const FIRST_EXPANSION_SKILL: usize = 221;

/// Largest id accepted from an external skill table.
pub const MAX_SKILL_ID: usize = u16::MAX as usize;

/// Skill names indexed by skill id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTable {
    names: Vec<Option<String>>,
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SkillTable {
    /// Player skill names for all seven classes. Ids 156-220 are monster
    /// skills and have no name.
    pub fn builtin() -> Self {
        let mut names: Vec<Option<String>> =
            SKILL_NAMES.iter().map(|name| Some(name.to_string())).collect();
        names.resize(FIRST_EXPANSION_SKILL, None);
        names.extend(EXPANSION_SKILL_NAMES.iter().map(|name| Some(name.to_string())));
        Self { names }
    }

    /// Parse a tab separated skill table. Only the `Id` and `Skill` columns
    /// are used; rows with an empty name are skipped.
    pub fn from_tsv(text: &str) -> Result<Self, ExternalDataError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let headers = reader.headers().map_err(|e| bad_row(1, e))?.clone();
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ExternalDataError::Empty);
        }
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or(ExternalDataError::MissingColumn { column })
        };
        let id_col = find("Id")?;
        let name_col = find("Skill")?;

        let mut names: Vec<Option<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                let line = e.position().map_or(0, |p| p.line() as usize);
                bad_row(line, e)
            })?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            let name = record.get(name_col).map(str::trim).unwrap_or("");
            if name.is_empty() {
                continue;
            }
            let raw_id = record.get(id_col).map(str::trim).unwrap_or("");
            let id = raw_id
                .parse::<usize>()
                .ok()
                .filter(|id| *id <= MAX_SKILL_ID)
                .ok_or_else(|| ExternalDataError::BadRow {
                    line,
                    reason: format!(
                        "skill id '{}' is not a number up to {}",
                        raw_id, MAX_SKILL_ID
                    ),
                })?;
            if names.len() <= id {
                names.resize(id + 1, None);
            }
            names[id] = Some(name.to_string());
        }

        log::debug!("loaded {} skill names", names.iter().flatten().count());
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, id: i64) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|i| self.names.get(i))
            .and_then(|name| name.as_deref())
    }

    /// Name for display, with a placeholder for unknown ids.
    pub fn display_name(&self, id: i64) -> String {
        match self.name(id) {
            Some(name) => name.to_string(),
            None => format!("Skill {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_all_classes() {
        let table = SkillTable::builtin();
        assert_eq!(table.len(), 281);
        assert_eq!(table.name(0), Some("Attack"));
        assert_eq!(table.name(54), Some("Teleport"));
        assert_eq!(table.name(123), Some("Conviction"));
        assert_eq!(table.name(155), Some("Battle Command"));
        assert_eq!(table.name(156), None);
        assert_eq!(table.name(220), None);
        assert_eq!(table.name(221), Some("Raven"));
        assert_eq!(table.name(250), Some("Hurricane"));
        assert_eq!(table.name(251), Some("Fire Blast"));
        assert_eq!(table.name(280), Some("Phoenix Strike"));
        assert_eq!(table.name(281), None);
        assert_eq!(table.display_name(-1), "Skill -1");
    }

    #[test]
    fn class_and_tab_names() {
        assert_eq!(class_name(3), "Paladin");
        assert_eq!(class_name(9), "Unknown Class");
        assert_eq!(skill_tab_name(1, 2), "Cold Skills");
        assert_eq!(skill_tab_name(1, 3), "Unknown Skill Tab");
    }

    #[test]
    fn parses_tsv() {
        let text = "skill\tId\tcharclass\nFire Bolt\t36\tsor\n\t37\tsor\nTeleport\t54\tsor\n";
        let table = SkillTable::from_tsv(text).unwrap();
        assert_eq!(table.name(36), Some("Fire Bolt"));
        assert_eq!(table.name(37), None);
        assert_eq!(table.name(54), Some("Teleport"));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = SkillTable::from_tsv("Name\tId\nFoo\t1\n").unwrap_err();
        assert_eq!(err, ExternalDataError::MissingColumn { column: "Skill" });
        assert_eq!(SkillTable::from_tsv(""), Err(ExternalDataError::Empty));

        let err = SkillTable::from_tsv("Skill\tId\nFoo\tx\n").unwrap_err();
        assert!(matches!(err, ExternalDataError::BadRow { line: 2, .. }));
    }

    #[test]
    fn oversized_ids_are_rejected() {
        for id in ["18446744073709551615", "4000000000", "65536", "-1"] {
            let text = format!("Id\tSkill\n1\tKick\n{}\tBlink\n", id);
            let err = SkillTable::from_tsv(&text).unwrap_err();
            assert!(matches!(err, ExternalDataError::BadRow { line: 3, .. }), "{}", id);
        }
        let table = SkillTable::from_tsv("Id\tSkill\n65535\tLast\n").unwrap();
        assert_eq!(table.name(65535), Some("Last"));
    }
}
