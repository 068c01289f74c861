use std::collections::HashMap;

/// Reserved stat id that ends a property list.
pub const STAT_TERMINATOR: u16 = 0x1FF;

/// Width of a stat id on the wire.
pub const STAT_ID_BITS: u32 = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Read before the value fields: skill ids, class ids, tab indices.
    Param,
    Value,
}

/// One bit-packed field of a stat record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatField {
    pub name: &'static str,
    pub bits: u8,
    /// Added before writing, subtracted after reading.
    pub bias: i64,
    pub kind: FieldKind,
}

impl StatField {
    pub fn max_value(&self) -> i64 {
        ((1i64 << self.bits) - 1) - self.bias
    }

    pub fn min_value(&self) -> i64 {
        -self.bias
    }
}

/// Level dependent magnitude: `(value * base) >> shift`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatOp {
    pub op: u8,
    pub shift: u8,
    pub base: &'static str,
    /// Stat whose magnitude is being raised.
    pub target: &'static str,
}

impl StatOp {
    pub fn apply(&self, value: i64, base_value: i64) -> i64 {
        (value * base_value) >> self.shift
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatDefinition {
    pub id: u16,
    pub name: &'static str,
    /// Wire fields in read order. Empty for stats that never reach a save.
    pub fields: &'static [StatField],
    /// Stat whose record directly follows this one and completes it.
    pub next_in_chain: Option<u16>,
    pub op: Option<StatOp>,
    /// Placeholders: `{N}` value N, `{sN}` skill name, `{cN}` class name,
    /// `{tN}` skill tab (tab N, class N+1), `{o}` level adjusted value.
    pub template: &'static str,
    /// Template once a chained partner has been merged in.
    pub chain_template: &'static str,
}

impl StatDefinition {
    /// Lookup-miss sentinel.
    pub const INVALID: StatDefinition = StatDefinition {
        id: STAT_TERMINATOR,
        name: "",
        fields: &[],
        next_in_chain: None,
        op: None,
        template: "",
        chain_template: "",
    };

    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    /// Whether the stat can appear in a property list.
    pub fn is_saved(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn value_field_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.kind == FieldKind::Value)
            .count()
    }

    pub fn param_field_count(&self) -> usize {
        self.fields.len() - self.value_field_count()
    }

    pub fn total_bits(&self) -> u32 {
        self.fields.iter().map(|f| f.bits as u32).sum()
    }
}

macro_rules! val {
    ($bits:literal) => {
        StatField { name: "value", bits: $bits, bias: 0, kind: FieldKind::Value }
    };
    ($bits:literal, $bias:literal) => {
        StatField { name: "value", bits: $bits, bias: $bias, kind: FieldKind::Value }
    };
    ($name:literal, $bits:literal, $bias:literal) => {
        StatField { name: $name, bits: $bits, bias: $bias, kind: FieldKind::Value }
    };
}

macro_rules! param {
    ($name:literal, $bits:literal) => {
        StatField { name: $name, bits: $bits, bias: 0, kind: FieldKind::Param }
    };
}

macro_rules! stat {
    ($id:literal, $name:literal) => {
        StatDefinition {
            id: $id,
            name: $name,
            fields: &[],
            next_in_chain: None,
            op: None,
            template: "",
            chain_template: "",
        }
    };
    ($id:literal, $name:literal, [$($f:expr),+], $template:literal) => {
        StatDefinition {
            id: $id,
            name: $name,
            fields: &[$($f),+],
            next_in_chain: None,
            op: None,
            template: $template,
            chain_template: "",
        }
    };
    ($id:literal, $name:literal, [$($f:expr),+], $template:literal, chain $next:literal, $chained:literal) => {
        StatDefinition {
            id: $id,
            name: $name,
            fields: &[$($f),+],
            next_in_chain: Some($next),
            op: None,
            template: $template,
            chain_template: $chained,
        }
    };
    ($id:literal, $name:literal, [$($f:expr),+], $template:literal, per_level $target:literal) => {
        StatDefinition {
            id: $id,
            name: $name,
            fields: &[$($f),+],
            next_in_chain: None,
            op: Some(StatOp { op: 2, shift: 3, base: "level", target: $target }),
            template: $template,
            chain_template: "",
        }
    };
}

macro_rules! per_level {
    ($id:literal, $name:literal, $bits:literal, $template:literal, $target:literal) => {
        stat!($id, $name, [val!($bits)], $template, per_level $target)
    };
}

macro_rules! by_time {
    ($id:literal, $name:literal, $template:literal) => {
        stat!(
            $id,
            $name,
            [param!("period", 2), val!("start", 10, 0), val!("end", 10, 0)],
            $template
        )
    };
}

macro_rules! skill_event {
    ($id:literal, $name:literal, $template:literal) => {
        stat!(
            $id,
            $name,
            [param!("level", 6), param!("skill", 10), val!("chance", 7, 0)],
            $template
        )
    };
}

/// Dense stat table; the index of an entry is its id.
pub const STAT_DEFINITIONS: &[StatDefinition] = &[
    stat!(0, "strength", [val!(8, 32)], "+{0} to Strength"),
    stat!(1, "energy", [val!(7, 32)], "+{0} to Energy"),
    stat!(2, "dexterity", [val!(7, 32)], "+{0} to Dexterity"),
    stat!(3, "vitality", [val!(7, 32)], "+{0} to Vitality"),
    stat!(4, "statpts"),
    stat!(5, "newskills"),
    stat!(6, "hitpoints"),
    stat!(7, "maxhp", [val!(9, 32)], "+{0} to Life"),
    stat!(8, "mana"),
    stat!(9, "maxmana", [val!(8, 32)], "+{0} to Mana"),
    stat!(10, "stamina"),
    stat!(11, "maxstamina", [val!(8, 32)], "+{0} Maximum Stamina"),
    stat!(12, "level"),
    stat!(13, "experience"),
    stat!(14, "gold"),
    stat!(15, "goldbank"),
    stat!(16, "item_armor_percent", [val!(9)], "+{0}% Enhanced Defense"),
    stat!(
        17,
        "item_maxdamage_percent",
        [val!("max", 9, 0), val!("min", 9, 0)],
        "+{0}% Enhanced Damage"
    ),
    stat!(18, "item_mindamage_percent"),
    stat!(19, "tohit", [val!(10)], "+{0} to Attack Rating"),
    stat!(20, "toblock", [val!(6)], "{0}% Increased Chance of Blocking"),
    stat!(
        21,
        "mindamage",
        [val!(6)],
        "+{0} to Minimum Damage",
        chain 22,
        "Adds {0}-{1} Damage"
    ),
    stat!(22, "maxdamage", [val!(7)], "+{0} to Maximum Damage"),
    stat!(
        23,
        "secondary_mindamage",
        [val!(6)],
        "+{0} to Minimum Damage",
        chain 24,
        "Adds {0}-{1} Damage"
    ),
    stat!(24, "secondary_maxdamage", [val!(7)], "+{0} to Maximum Damage"),
    stat!(25, "damagepercent", [val!(8)], "+{0}% Damage"),
    stat!(26, "manarecovery", [val!(8)], "{0}% Mana Recovery"),
    stat!(27, "manarecoverybonus", [val!(8)], "Regenerate Mana {0}%"),
    stat!(28, "staminarecoverybonus", [val!(8)], "Heal Stamina Plus {0}%"),
    stat!(29, "lastexp"),
    stat!(30, "nextexp"),
    stat!(31, "armorclass", [val!(11, 10)], "+{0} Defense"),
    stat!(32, "armorclass_vs_missile", [val!(9)], "+{0} Defense vs. Missile"),
    stat!(33, "armorclass_vs_hth", [val!(8)], "+{0} Defense vs. Melee"),
    stat!(34, "normal_damage_reduction", [val!(6)], "Damage Reduced by {0}"),
    stat!(35, "magic_damage_reduction", [val!(6)], "Magic Damage Reduced by {0}"),
    stat!(36, "damageresist", [val!(8)], "Damage Reduced by {0}%"),
    stat!(37, "magicresist", [val!(8)], "Magic Resist +{0}%"),
    stat!(38, "maxmagicresist", [val!(5)], "+{0}% to Maximum Magic Resist"),
    stat!(39, "fireresist", [val!(8, 50)], "Fire Resist +{0}%"),
    stat!(40, "maxfireresist", [val!(5)], "+{0}% to Maximum Fire Resist"),
    stat!(41, "lightresist", [val!(8, 50)], "Lightning Resist +{0}%"),
    stat!(42, "maxlightresist", [val!(5)], "+{0}% to Maximum Lightning Resist"),
    stat!(43, "coldresist", [val!(8, 50)], "Cold Resist +{0}%"),
    stat!(44, "maxcoldresist", [val!(5)], "+{0}% to Maximum Cold Resist"),
    stat!(45, "poisonresist", [val!(8, 50)], "Poison Resist +{0}%"),
    stat!(46, "maxpoisonresist", [val!(5)], "+{0}% to Maximum Poison Resist"),
    stat!(47, "damageaura"),
    stat!(
        48,
        "firemindam",
        [val!("min", 8, 0), val!("max", 9, 0)],
        "Adds {0}-{1} Fire Damage"
    ),
    stat!(49, "firemaxdam"),
    stat!(
        50,
        "lightmindam",
        [val!("min", 6, 0), val!("max", 10, 0)],
        "Adds {0}-{1} Lightning Damage"
    ),
    stat!(51, "lightmaxdam"),
    stat!(
        52,
        "magicmindam",
        [val!("min", 8, 0), val!("max", 9, 0)],
        "Adds {0}-{1} Magic Damage"
    ),
    stat!(53, "magicmaxdam"),
    stat!(
        54,
        "coldmindam",
        [val!("min", 8, 0), val!("max", 9, 0), val!("length", 8, 0)],
        "Adds {0}-{1} Cold Damage"
    ),
    stat!(55, "coldmaxdam"),
    stat!(56, "coldlength"),
    stat!(
        57,
        "poisonmindam",
        [val!("min", 10, 0), val!("max", 10, 0), val!("length", 9, 0)],
        "Adds {0}-{1} Poison Damage Over {2} Frames"
    ),
    stat!(58, "poisonmaxdam"),
    stat!(59, "poisonlength"),
    stat!(60, "lifedrainmindam", [val!(7)], "{0}% Life Stolen per Hit"),
    stat!(61, "lifedrainmaxdam"),
    stat!(62, "manadrainmindam", [val!(7)], "{0}% Mana Stolen per Hit"),
    stat!(63, "manadrainmaxdam"),
    stat!(64, "stamdrainmindam"),
    stat!(65, "stamdrainmaxdam"),
    stat!(66, "stunlength"),
    stat!(67, "velocitypercent", [val!(7, 30)], "+{0}% Velocity"),
    stat!(68, "attackrate", [val!(7, 30)], "+{0}% Attack Rate"),
    stat!(69, "other_animrate"),
    stat!(70, "quantity"),
    stat!(71, "value", [val!(8, 100)], "+{0}% Vendor Value"),
    stat!(72, "durability", [val!(9)], "Durability: {0}"),
    stat!(73, "maxdurability", [val!(8)], "+{0} Maximum Durability"),
    stat!(74, "hpregen", [val!(6, 30)], "Replenish Life +{0}"),
    stat!(75, "item_maxdurability_percent", [val!(7, 20)], "Increase Maximum Durability {0}%"),
    stat!(76, "item_maxhp_percent", [val!(6, 10)], "Increase Maximum Life {0}%"),
    stat!(77, "item_maxmana_percent", [val!(6, 10)], "Increase Maximum Mana {0}%"),
    stat!(78, "item_attackertakesdamage", [val!(7)], "Attacker Takes Damage of {0}"),
    stat!(79, "item_goldbonus", [val!(9, 100)], "{0}% Extra Gold from Monsters"),
    stat!(80, "item_magicbonus", [val!(8, 100)], "{0}% Better Chance of Getting Magic Items"),
    stat!(81, "item_knockback", [val!(7)], "Knockback"),
    stat!(82, "item_timeduration", [val!(9, 20)], "+{0}% Duration"),
    stat!(
        83,
        "item_addclassskills",
        [param!("class", 3), val!(3)],
        "+{1} to {c0} Skill Levels"
    ),
    stat!(84, "unsentparam1"),
    stat!(85, "item_addexperience", [val!(9, 50)], "+{0}% to Experience Gained"),
    stat!(86, "item_healafterkill", [val!(7)], "+{0} Life after each Kill"),
    stat!(87, "item_reducedprices", [val!(7)], "Reduces all Vendor Prices {0}%"),
    stat!(88, "item_doubleherbduration", [val!(1)], "Double Herb Duration"),
    stat!(89, "item_lightradius", [val!(4, 4)], "+{0} to Light Radius"),
    stat!(90, "item_lightcolor", [val!(24)], "Light Color {0}"),
    stat!(91, "item_req_percent", [val!(8, 100)], "Requirements {0}%"),
    stat!(92, "item_levelreq", [val!(7)], "Required Level +{0}"),
    stat!(93, "item_fasterattackrate", [val!(7, 20)], "+{0}% Increased Attack Speed"),
    stat!(94, "item_levelreqpct", [val!(7, 64)], "Required Level {0}%"),
    stat!(95, "lastblockframe"),
    stat!(96, "item_fastermovevelocity", [val!(7, 20)], "+{0}% Faster Run/Walk"),
    stat!(
        97,
        "item_nonclassskill",
        [param!("skill", 9), val!(6)],
        "+{1} to {s0}"
    ),
    stat!(98, "state", [param!("state", 8), val!(1)], "State {0}"),
    stat!(99, "item_fastergethitrate", [val!(7, 20)], "+{0}% Faster Hit Recovery"),
    stat!(100, "monster_playercount"),
    stat!(101, "skill_poison_override_length"),
    stat!(102, "item_fasterblockrate", [val!(7, 20)], "+{0}% Faster Block Rate"),
    stat!(103, "skill_bypass_undead"),
    stat!(104, "skill_bypass_demons"),
    stat!(105, "item_fastercastrate", [val!(7, 20)], "+{0}% Faster Cast Rate"),
    stat!(106, "skill_bypass_beasts"),
    stat!(
        107,
        "item_singleskill",
        [param!("skill", 9), val!(3)],
        "+{1} to {s0}"
    ),
    stat!(108, "item_restinpeace", [val!(1)], "Slain Monsters Rest in Peace"),
    stat!(109, "curse_resistance", [val!(9)], "Curse Resistance {0}%"),
    stat!(110, "item_poisonlengthresist", [val!(8, 20)], "Poison Length Reduced by {0}%"),
    stat!(111, "item_normaldamage", [val!(8, 20)], "Damage +{0}"),
    stat!(112, "item_howl", [val!(7)], "Hit Causes Monster to Flee {0}%"),
    stat!(113, "item_stupidity", [val!(7)], "Hit Blinds Target +{0}"),
    stat!(114, "item_damagetomana", [val!(6)], "{0}% Damage Taken Goes To Mana"),
    stat!(115, "item_ignoretargetac", [val!(1)], "Ignore Target's Defense"),
    stat!(116, "item_fractionaltargetac", [val!(7)], "-{0}% Target Defense"),
    stat!(117, "item_preventheal", [val!(7)], "Prevent Monster Heal"),
    stat!(118, "item_halffreezeduration", [val!(1)], "Half Freeze Duration"),
    stat!(119, "item_tohit_percent", [val!(9, 20)], "{0}% Bonus to Attack Rating"),
    stat!(120, "item_damagetargetac", [val!(7, 128)], "{0} to Monster Defense Per Hit"),
    stat!(121, "item_demondamage_percent", [val!(9, 20)], "+{0}% Damage to Demons"),
    stat!(122, "item_undeaddamage_percent", [val!(9, 20)], "+{0}% Damage to Undead"),
    stat!(123, "item_demon_tohit", [val!(10, 128)], "+{0} to Attack Rating against Demons"),
    stat!(124, "item_undead_tohit", [val!(10, 128)], "+{0} to Attack Rating against Undead"),
    stat!(125, "item_throwable", [val!(1)], "Throwable"),
    stat!(
        126,
        "item_elemskill",
        [param!("element", 3), val!(3)],
        "+{1} to Fire Skills"
    ),
    stat!(127, "item_allskills", [val!(3)], "+{0} to All Skills"),
    stat!(128, "item_attackertakeslightdamage", [val!(5)], "Attacker Takes Lightning Damage of {0}"),
    stat!(129, "ironmaiden_level"),
    stat!(130, "lifetap_level"),
    stat!(131, "thorns_percent"),
    stat!(132, "bonearmor"),
    stat!(133, "bonearmormax"),
    stat!(134, "item_freeze", [val!(5)], "Freezes Target +{0}"),
    stat!(135, "item_openwounds", [val!(7)], "{0}% Chance of Open Wounds"),
    stat!(136, "item_crushingblow", [val!(7)], "{0}% Chance of Crushing Blow"),
    stat!(137, "item_kickdamage", [val!(7)], "+{0} Kick Damage"),
    stat!(138, "item_manaafterkill", [val!(7)], "+{0} to Mana after each Kill"),
    stat!(139, "item_healafterdemonkill", [val!(7)], "+{0} Life after each Demon Kill"),
    stat!(140, "item_extrablood", [val!(7)], "Extra Blood"),
    stat!(141, "item_deadlystrike", [val!(7)], "{0}% Deadly Strike"),
    stat!(142, "item_absorbfire_percent", [val!(7)], "+{0}% Fire Absorb"),
    stat!(143, "item_absorbfire", [val!(7)], "+{0} Fire Absorb"),
    stat!(144, "item_absorblight_percent", [val!(7)], "+{0}% Lightning Absorb"),
    stat!(145, "item_absorblight", [val!(7)], "+{0} Lightning Absorb"),
    stat!(146, "item_absorbmagic_percent", [val!(7)], "+{0}% Magic Absorb"),
    stat!(147, "item_absorbmagic", [val!(7)], "+{0} Magic Absorb"),
    stat!(148, "item_absorbcold_percent", [val!(7)], "+{0}% Cold Absorb"),
    stat!(149, "item_absorbcold", [val!(7)], "+{0} Cold Absorb"),
    stat!(150, "item_slow", [val!(7)], "Slows Target by {0}%"),
    stat!(
        151,
        "item_aura",
        [param!("skill", 9), val!(5)],
        "Level {1} {s0} Aura When Equipped"
    ),
    stat!(152, "item_indesctructible", [val!(1)], "Indestructible"),
    stat!(153, "item_cannotbefrozen", [val!(1)], "Cannot Be Frozen"),
    stat!(154, "item_staminadrainpct", [val!(7, 20)], "{0}% Slower Stamina Drain"),
    stat!(
        155,
        "item_reanimate",
        [param!("monster", 10), val!(7)],
        "{1}% Reanimate as: Monster {0}"
    ),
    stat!(156, "item_pierce", [val!(7)], "{0}% Chance to Pierce"),
    stat!(157, "item_magicarrow", [val!(7)], "Fires Magic Arrows"),
    stat!(158, "item_explosivearrow", [val!(7)], "Fires Explosive Arrows or Bolts"),
    stat!(
        159,
        "item_throw_mindamage",
        [val!(6)],
        "+{0} to Minimum Throw Damage",
        chain 160,
        "Adds {0}-{1} Throw Damage"
    ),
    stat!(160, "item_throw_maxdamage", [val!(7)], "+{0} to Maximum Throw Damage"),
    stat!(161, "skill_handofathena"),
    stat!(162, "skill_staminapercent"),
    stat!(163, "skill_passive_staminapercent"),
    stat!(164, "skill_concentration"),
    stat!(165, "skill_enchant"),
    stat!(166, "skill_pierce"),
    stat!(167, "skill_conviction"),
    stat!(168, "skill_chillingarmor"),
    stat!(169, "skill_frenzy"),
    stat!(170, "skill_decrepify"),
    stat!(171, "skill_armor_percent"),
    stat!(172, "alignment"),
    stat!(173, "target0"),
    stat!(174, "target1"),
    stat!(175, "goldlost"),
    stat!(176, "conversion_level"),
    stat!(177, "conversion_maxhp"),
    stat!(178, "unit_dooverlay"),
    stat!(
        179,
        "attack_vs_montype",
        [param!("monster", 10), val!(9)],
        "+{1}% to Attack Rating versus Monster {0}"
    ),
    stat!(
        180,
        "damage_vs_montype",
        [param!("monster", 10), val!(9)],
        "+{1}% to Damage versus Monster {0}"
    ),
    stat!(181, "fade", [val!(3)], "Fade"),
    stat!(182, "armor_override_percent"),
    stat!(183, "unused183"),
    stat!(184, "unused184"),
    stat!(185, "unused185"),
    stat!(186, "unused186"),
    stat!(187, "unused187"),
    stat!(
        188,
        "item_addskill_tab",
        [param!("tab", 3), param!("class", 13), val!(3)],
        "+{2} to {t0}"
    ),
    stat!(189, "unused189"),
    stat!(190, "unused190"),
    stat!(191, "unused191"),
    stat!(192, "unused192"),
    stat!(193, "unused193"),
    stat!(194, "item_numsockets", [val!(4)], "Socketed ({0})"),
    skill_event!(195, "item_skillonattack", "{2}% Chance to cast level {0} {s1} on attack"),
    skill_event!(196, "item_skillonkill", "{2}% Chance to cast level {0} {s1} when you Kill an Enemy"),
    skill_event!(197, "item_skillondeath", "{2}% Chance to cast level {0} {s1} when you Die"),
    skill_event!(198, "item_skillonhit", "{2}% Chance to cast level {0} {s1} on striking"),
    skill_event!(199, "item_skillonlevelup", "{2}% Chance to cast level {0} {s1} when you Level-Up"),
    stat!(200, "unused200"),
    skill_event!(201, "item_skillongethit", "{2}% Chance to cast level {0} {s1} when struck"),
    stat!(202, "unused202"),
    stat!(203, "unused203"),
    stat!(
        204,
        "item_charged_skill",
        [
            param!("level", 6),
            param!("skill", 10),
            val!("charges", 8, 0),
            val!("max_charges", 8, 0)
        ],
        "Level {0} {s1} ({2}/{3} Charges)"
    ),
    stat!(205, "unused205"),
    stat!(206, "unused206"),
    stat!(207, "unused207"),
    stat!(208, "unused208"),
    stat!(209, "unused209"),
    stat!(210, "unused210"),
    stat!(211, "unused211"),
    stat!(212, "unused212"),
    stat!(213, "unused213"),
    per_level!(214, "item_armor_perlevel", 6, "+{o} Defense (Based on Character Level)", "armorclass"),
    per_level!(215, "item_armorpercent_perlevel", 6, "+{o}% Enhanced Defense (Based on Character Level)", "item_armor_percent"),
    per_level!(216, "item_hp_perlevel", 6, "+{o} to Life (Based on Character Level)", "maxhp"),
    per_level!(217, "item_mana_perlevel", 6, "+{o} to Mana (Based on Character Level)", "maxmana"),
    per_level!(218, "item_maxdamage_perlevel", 6, "+{o} to Maximum Damage (Based on Character Level)", "maxdamage"),
    per_level!(219, "item_maxdamage_percent_perlevel", 6, "+{o}% Enhanced Maximum Damage (Based on Character Level)", "item_maxdamage_percent"),
    per_level!(220, "item_strength_perlevel", 6, "+{o} to Strength (Based on Character Level)", "strength"),
    per_level!(221, "item_dexterity_perlevel", 6, "+{o} to Dexterity (Based on Character Level)", "dexterity"),
    per_level!(222, "item_energy_perlevel", 6, "+{o} to Energy (Based on Character Level)", "energy"),
    per_level!(223, "item_vitality_perlevel", 6, "+{o} to Vitality (Based on Character Level)", "vitality"),
    per_level!(224, "item_tohit_perlevel", 6, "+{o} to Attack Rating (Based on Character Level)", "tohit"),
    per_level!(225, "item_tohitpercent_perlevel", 6, "{o}% Bonus to Attack Rating (Based on Character Level)", "item_tohit_percent"),
    per_level!(226, "item_cold_damagemax_perlevel", 6, "+{o} to Maximum Cold Damage (Based on Character Level)", "coldmaxdam"),
    per_level!(227, "item_fire_damagemax_perlevel", 6, "+{o} to Maximum Fire Damage (Based on Character Level)", "firemaxdam"),
    per_level!(228, "item_ltng_damagemax_perlevel", 6, "+{o} to Maximum Lightning Damage (Based on Character Level)", "lightmaxdam"),
    per_level!(229, "item_pois_damagemax_perlevel", 6, "+{o} to Maximum Poison Damage (Based on Character Level)", "poisonmaxdam"),
    per_level!(230, "item_resist_cold_perlevel", 6, "Cold Resist +{o}% (Based on Character Level)", "coldresist"),
    per_level!(231, "item_resist_fire_perlevel", 6, "Fire Resist +{o}% (Based on Character Level)", "fireresist"),
    per_level!(232, "item_resist_ltng_perlevel", 6, "Lightning Resist +{o}% (Based on Character Level)", "lightresist"),
    per_level!(233, "item_resist_pois_perlevel", 6, "Poison Resist +{o}% (Based on Character Level)", "poisonresist"),
    per_level!(234, "item_absorb_cold_perlevel", 6, "Absorbs Cold Damage {o} (Based on Character Level)", "item_absorbcold"),
    per_level!(235, "item_absorb_fire_perlevel", 6, "Absorbs Fire Damage {o} (Based on Character Level)", "item_absorbfire"),
    per_level!(236, "item_absorb_ltng_perlevel", 6, "Absorbs Lightning Damage {o} (Based on Character Level)", "item_absorblight"),
    per_level!(237, "item_absorb_pois_perlevel", 6, "Absorbs Poison Damage {o} (Based on Character Level)", "item_absorbpois"),
    per_level!(238, "item_thorns_perlevel", 5, "Attacker Takes Damage of {o} (Based on Character Level)", "item_attackertakesdamage"),
    per_level!(239, "item_find_gold_perlevel", 6, "{o}% Extra Gold from Monsters (Based on Character Level)", "item_goldbonus"),
    per_level!(240, "item_find_magic_perlevel", 6, "{o}% Better Chance of Getting Magic Items (Based on Character Level)", "item_magicbonus"),
    per_level!(241, "item_regenstamina_perlevel", 6, "Heal Stamina Plus {o}% (Based on Character Level)", "staminarecoverybonus"),
    per_level!(242, "item_stamina_perlevel", 6, "+{o} Maximum Stamina (Based on Character Level)", "maxstamina"),
    per_level!(243, "item_damage_demon_perlevel", 6, "+{o}% Damage to Demons (Based on Character Level)", "item_demondamage_percent"),
    per_level!(244, "item_damage_undead_perlevel", 6, "+{o}% Damage to Undead (Based on Character Level)", "item_undeaddamage_percent"),
    per_level!(245, "item_tohit_demon_perlevel", 6, "+{o} to Attack Rating against Demons (Based on Character Level)", "item_demon_tohit"),
    per_level!(246, "item_tohit_undead_perlevel", 6, "+{o} to Attack Rating against Undead (Based on Character Level)", "item_undead_tohit"),
    per_level!(247, "item_crushingblow_perlevel", 6, "{o}% Chance of Crushing Blow (Based on Character Level)", "item_crushingblow"),
    per_level!(248, "item_openwounds_perlevel", 6, "{o}% Chance of Open Wounds (Based on Character Level)", "item_openwounds"),
    per_level!(249, "item_kick_damage_perlevel", 6, "+{o} Kick Damage (Based on Character Level)", "item_kickdamage"),
    per_level!(250, "item_deadlystrike_perlevel", 6, "{o}% Deadly Strike (Based on Character Level)", "item_deadlystrike"),
    stat!(251, "item_find_gems_perlevel"),
    stat!(252, "item_replenish_durability", [val!(6)], "Repairs 1 Durability in {0} Seconds"),
    stat!(253, "item_replenish_quantity", [val!(6)], "Replenishes Quantity"),
    stat!(254, "item_extra_stack", [val!(8)], "Increased Stack Size"),
    stat!(255, "item_find_item"),
    stat!(256, "item_slash_damage"),
    stat!(257, "item_slash_damage_percent"),
    stat!(258, "item_crush_damage"),
    stat!(259, "item_crush_damage_percent"),
    stat!(260, "item_thrust_damage"),
    stat!(261, "item_thrust_damage_percent"),
    stat!(262, "item_absorb_slash"),
    stat!(263, "item_absorb_crush"),
    stat!(264, "item_absorb_thrust"),
    stat!(265, "item_absorb_slash_percent"),
    stat!(266, "item_absorb_crush_percent"),
    stat!(267, "item_absorb_thrust_percent"),
    by_time!(268, "item_armor_bytime", "+{1}-{2} Defense (varies by time of day)"),
    by_time!(269, "item_armorpercent_bytime", "+{1}-{2}% Enhanced Defense (varies by time of day)"),
    by_time!(270, "item_hp_bytime", "+{1}-{2} to Life (varies by time of day)"),
    by_time!(271, "item_mana_bytime", "+{1}-{2} to Mana (varies by time of day)"),
    by_time!(272, "item_maxdamage_bytime", "+{1}-{2} to Maximum Damage (varies by time of day)"),
    by_time!(273, "item_maxdamage_percent_bytime", "+{1}-{2}% Enhanced Maximum Damage (varies by time of day)"),
    by_time!(274, "item_strength_bytime", "+{1}-{2} to Strength (varies by time of day)"),
    by_time!(275, "item_dexterity_bytime", "+{1}-{2} to Dexterity (varies by time of day)"),
    by_time!(276, "item_energy_bytime", "+{1}-{2} to Energy (varies by time of day)"),
    by_time!(277, "item_vitality_bytime", "+{1}-{2} to Vitality (varies by time of day)"),
    by_time!(278, "item_tohit_bytime", "+{1}-{2} to Attack Rating (varies by time of day)"),
    by_time!(279, "item_tohitpercent_bytime", "{1}-{2}% Bonus to Attack Rating (varies by time of day)"),
    by_time!(280, "item_cold_damagemax_bytime", "+{1}-{2} to Maximum Cold Damage (varies by time of day)"),
    by_time!(281, "item_fire_damagemax_bytime", "+{1}-{2} to Maximum Fire Damage (varies by time of day)"),
    by_time!(282, "item_ltng_damagemax_bytime", "+{1}-{2} to Maximum Lightning Damage (varies by time of day)"),
    by_time!(283, "item_pois_damagemax_bytime", "+{1}-{2} to Maximum Poison Damage (varies by time of day)"),
    by_time!(284, "item_resist_cold_bytime", "Cold Resist +{1}-{2}% (varies by time of day)"),
    by_time!(285, "item_resist_fire_bytime", "Fire Resist +{1}-{2}% (varies by time of day)"),
    by_time!(286, "item_resist_ltng_bytime", "Lightning Resist +{1}-{2}% (varies by time of day)"),
    by_time!(287, "item_resist_pois_bytime", "Poison Resist +{1}-{2}% (varies by time of day)"),
    by_time!(288, "item_absorb_cold_bytime", "Absorbs Cold Damage {1}-{2} (varies by time of day)"),
    by_time!(289, "item_absorb_fire_bytime", "Absorbs Fire Damage {1}-{2} (varies by time of day)"),
    by_time!(290, "item_absorb_ltng_bytime", "Absorbs Lightning Damage {1}-{2} (varies by time of day)"),
    by_time!(291, "item_absorb_pois_bytime", "Absorbs Poison Damage {1}-{2} (varies by time of day)"),
    by_time!(292, "item_find_gold_bytime", "{1}-{2}% Extra Gold from Monsters (varies by time of day)"),
    by_time!(293, "item_find_magic_bytime", "{1}-{2}% Better Chance of Getting Magic Items (varies by time of day)"),
    by_time!(294, "item_regenstamina_bytime", "Heal Stamina Plus {1}-{2}% (varies by time of day)"),
    by_time!(295, "item_stamina_bytime", "+{1}-{2} Maximum Stamina (varies by time of day)"),
    by_time!(296, "item_damage_demon_bytime", "+{1}-{2}% Damage to Demons (varies by time of day)"),
    by_time!(297, "item_damage_undead_bytime", "+{1}-{2}% Damage to Undead (varies by time of day)"),
    by_time!(298, "item_tohit_demon_bytime", "+{1}-{2} to Attack Rating against Demons (varies by time of day)"),
    by_time!(299, "item_tohit_undead_bytime", "+{1}-{2} to Attack Rating against Undead (varies by time of day)"),
    by_time!(300, "item_crushingblow_bytime", "{1}-{2}% Chance of Crushing Blow (varies by time of day)"),
    by_time!(301, "item_openwounds_bytime", "{1}-{2}% Chance of Open Wounds (varies by time of day)"),
    by_time!(302, "item_kick_damage_bytime", "+{1}-{2} Kick Damage (varies by time of day)"),
    by_time!(303, "item_deadlystrike_bytime", "{1}-{2}% Deadly Strike (varies by time of day)"),
    stat!(304, "item_find_gems_bytime"),
    stat!(305, "item_pierce_cold", [val!(8, 50)], "-{0}% to Enemy Cold Resistance"),
    stat!(306, "item_pierce_fire", [val!(8, 50)], "-{0}% to Enemy Fire Resistance"),
    stat!(307, "item_pierce_ltng", [val!(8, 50)], "-{0}% to Enemy Lightning Resistance"),
    stat!(308, "item_pierce_pois", [val!(8, 50)], "-{0}% to Enemy Poison Resistance"),
    stat!(309, "item_damage_vs_monster"),
    stat!(310, "item_damage_percent_vs_monster"),
    stat!(311, "item_tohit_vs_monster"),
    stat!(312, "item_tohit_percent_vs_monster"),
    stat!(313, "item_ac_vs_monster"),
    stat!(314, "item_ac_percent_vs_monster"),
    stat!(315, "firelength"),
    stat!(316, "burningmin"),
    stat!(317, "burningmax"),
    stat!(318, "progressive_damage"),
    stat!(319, "progressive_steal"),
    stat!(320, "progressive_other"),
    stat!(321, "progressive_fire"),
    stat!(322, "progressive_cold"),
    stat!(323, "progressive_lightning"),
    stat!(324, "item_extra_charges", [val!(6)], "+{0} Extra Charges"),
    stat!(325, "progressive_tohit"),
    stat!(326, "poison_count"),
    stat!(327, "damage_framerate"),
    stat!(328, "pierce_idx"),
    stat!(329, "passive_fire_mastery", [val!(9, 50)], "+{0}% to Fire Skill Damage"),
    stat!(330, "passive_ltng_mastery", [val!(9, 50)], "+{0}% to Lightning Skill Damage"),
    stat!(331, "passive_cold_mastery", [val!(9, 50)], "+{0}% to Cold Skill Damage"),
    stat!(332, "passive_pois_mastery", [val!(9, 50)], "+{0}% to Poison Skill Damage"),
    stat!(333, "passive_fire_pierce", [val!(8)], "-{0}% to Enemy Fire Resistance"),
    stat!(334, "passive_ltng_pierce", [val!(8)], "-{0}% to Enemy Lightning Resistance"),
    stat!(335, "passive_cold_pierce", [val!(8)], "-{0}% to Enemy Cold Resistance"),
    stat!(336, "passive_pois_pierce", [val!(8)], "-{0}% to Enemy Poison Resistance"),
    stat!(337, "passive_critical_strike", [val!(8)], "{0}% Critical Strike"),
    stat!(338, "passive_dodge", [val!(7)], "{0}% Dodge"),
    stat!(339, "passive_avoid", [val!(7)], "{0}% Avoid"),
    stat!(340, "passive_evade", [val!(7)], "{0}% Evade"),
    stat!(341, "passive_warmth", [val!(8)], "+{0}% Warmth"),
    stat!(342, "passive_mastery_melee_th", [val!(8)], "+{0}% Melee Attack Rating"),
    stat!(343, "passive_mastery_melee_dmg", [val!(8)], "+{0}% Melee Damage"),
    stat!(344, "passive_mastery_melee_crit", [val!(8)], "+{0}% Melee Critical Strike"),
    stat!(345, "passive_mastery_throw_th", [val!(8)], "+{0}% Throwing Attack Rating"),
    stat!(346, "passive_mastery_throw_dmg", [val!(8)], "+{0}% Throwing Damage"),
    stat!(347, "passive_mastery_throw_crit", [val!(8)], "+{0}% Throwing Critical Strike"),
    stat!(348, "passive_weaponblock", [val!(8)], "{0}% Weapon Block"),
    stat!(349, "passive_summon_resist", [val!(8)], "Summoned Minions Resist +{0}%"),
    stat!(350, "modifierlist_skill"),
    stat!(351, "modifierlist_level"),
    stat!(352, "last_sent_hp_pct"),
    stat!(353, "source_unit_type"),
    stat!(354, "source_unit_id"),
    stat!(355, "shortparam1"),
    stat!(356, "questitemdifficulty", [val!(2)], "Quest Item Difficulty {0}"),
    stat!(357, "passive_mag_mastery", [val!(9, 50)], "+{0}% to Magic Skill Damage"),
    stat!(358, "passive_mag_pierce", [val!(8)], "-{0}% to Enemy Magic Resistance"),
];

/// Name and id indexed view over [`STAT_DEFINITIONS`].
#[derive(Debug, Clone)]
pub struct StatTable {
    defs: &'static [StatDefinition],
    by_name: HashMap<&'static str, u16>,
}

impl Default for StatTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StatTable {
    pub fn new() -> Self {
        let by_name = STAT_DEFINITIONS
            .iter()
            .map(|def| (def.name, def.id))
            .collect();
        Self {
            defs: STAT_DEFINITIONS,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definition for `id`, or [`StatDefinition::INVALID`].
    pub fn get(&self, id: u16) -> &StatDefinition {
        self.try_get(id).unwrap_or(&StatDefinition::INVALID)
    }

    pub fn try_get(&self, id: u16) -> Option<&StatDefinition> {
        self.defs.get(id as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&StatDefinition> {
        self.by_name.get(name).and_then(|&id| self.try_get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatDefinition> {
        self.defs.iter()
    }

    /// Stats that can appear in a property list.
    pub fn saved(&self) -> impl Iterator<Item = &StatDefinition> {
        self.defs.iter().filter(|def| def.is_saved())
    }

    /// The stat that `id` chains into, if the pair is merged on decode.
    pub fn chain_target(&self, id: u16) -> Option<u16> {
        self.try_get(id).and_then(|def| def.next_in_chain)
    }

    /// Whether `id` is the trailing half of a chained pair.
    pub fn is_chain_tail(&self, id: u16) -> bool {
        self.defs.iter().any(|def| def.next_in_chain == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense_indices() {
        for (index, def) in STAT_DEFINITIONS.iter().enumerate() {
            assert_eq!(def.id as usize, index, "{}", def.name);
        }
        assert_eq!(STAT_DEFINITIONS.len(), 359);
    }

    #[test]
    fn names_are_unique() {
        let table = StatTable::new();
        assert_eq!(table.by_name.len(), table.len());
        assert_eq!(table.by_name("fireresist").unwrap().id, 39);
    }

    #[test]
    fn chained_stats_are_single_field() {
        let table = StatTable::new();
        for def in table.iter().filter(|d| d.next_in_chain.is_some()) {
            assert_eq!(def.fields.len(), 1, "{}", def.name);
            let next = table.get(def.next_in_chain.unwrap());
            assert!(next.is_saved(), "{} chains into an unsaved stat", def.name);
            assert_eq!(next.fields.len(), 1);
            assert!(next.next_in_chain.is_none());
            assert!(!def.chain_template.is_empty());
        }
        assert_eq!(table.chain_target(21), Some(22));
        assert!(table.is_chain_tail(160));
        assert!(!table.is_chain_tail(21));
    }

    #[test]
    fn field_layout() {
        let table = StatTable::new();
        let skill_tab = table.get(188);
        assert_eq!(skill_tab.param_field_count(), 2);
        assert_eq!(skill_tab.value_field_count(), 1);
        assert_eq!(skill_tab.total_bits(), 19);
        assert_eq!(skill_tab.fields[0].kind, FieldKind::Param);

        let cold = table.get(54);
        assert_eq!(cold.value_field_count(), 3);
        assert_eq!(cold.total_bits(), 25);

        for def in table.saved() {
            let first_value = def
                .fields
                .iter()
                .position(|f| f.kind == FieldKind::Value)
                .unwrap();
            assert!(
                def.fields[first_value..]
                    .iter()
                    .all(|f| f.kind == FieldKind::Value),
                "{} reads a param after a value",
                def.name
            );
            assert!(def.fields.iter().all(|f| f.bits >= 1 && f.bits <= 32));
        }
    }

    #[test]
    fn misses_return_the_sentinel() {
        let table = StatTable::new();
        assert!(!table.get(400).is_valid());
        assert!(!table.get(STAT_TERMINATOR).is_saved());
        assert!(table.get(4).is_valid());
        assert!(!table.get(4).is_saved());
    }

    #[test]
    fn per_level_op() {
        let table = StatTable::new();
        let op = table.get(216).op.unwrap();
        assert_eq!(op.base, "level");
        assert_eq!(op.target, "maxhp");
        assert_eq!(op.apply(12, 40), 60);
        let bias = table.get(39).fields[0];
        assert_eq!(bias.min_value(), -50);
        assert_eq!(bias.max_value(), 205);
    }
}
