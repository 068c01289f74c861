use crate::legacy::{LegacyAffix, LegacyModifier, MagicMask};

/// (addend, divisor) steps of the draw-count stage.
pub(crate) const NORMAL_DRAW_TABLE: [(i32, i32); 6] =
    [(400, 1), (160, 2), (100, 2), (34, 3), (12, 8), (2, 2)];
pub(crate) const SUPERIOR_DRAW_TABLE: [(i32, i32); 6] =
    [(400, 1), (160, 2), (100, 1), (34, 3), (12, 8), (2, 2)];

macro_rules! roll {
    ($stat:literal, $min:literal, $max:literal) => {
        LegacyModifier { stat: $stat, min: $min, max: $max, params: &[], chain: false }
    };
    ($stat:literal, [$($param:literal),+], $min:literal, $max:literal) => {
        LegacyModifier { stat: $stat, min: $min, max: $max, params: &[$($param),+], chain: false }
    };
}

// Appends to the attribute made by the previous modifier.
macro_rules! chained {
    ($stat:literal, $min:literal, $max:literal) => {
        LegacyModifier { stat: $stat, min: $min, max: $max, params: &[], chain: true }
    };
}

macro_rules! affix {
    ($code:literal, $name:literal, $level:literal, $mask:expr, [$($m:expr),+ $(,)?]) => {
        LegacyAffix { code: $code, name: $name, level: $level, mask: $mask, modifiers: &[$($m),+] }
    };
}

const ARMOR: MagicMask = MagicMask::ARMOR;
const WEAPON: MagicMask = MagicMask::WEAPON;
const ARMOR_JEWELRY: MagicMask = MagicMask::ARMOR.union(MagicMask::JEWELRY);
const ANY: MagicMask = MagicMask::ARMOR
    .union(MagicMask::WEAPON)
    .union(MagicMask::JEWELRY);
const WEAPON_RING: MagicMask = MagicMask::WEAPON.union(MagicMask::RING);
const WEAPON_GLOVES: MagicMask = MagicMask::WEAPON.union(MagicMask::GLOVES);

pub(crate) const PREFIXES: &[LegacyAffix] = &[
    // defense
    affix!(1, "Sturdy", 1, ARMOR, [roll!(16, 10, 20)]),
    affix!(2, "Strong", 6, ARMOR, [roll!(16, 21, 30)]),
    affix!(3, "Glorious", 14, ARMOR, [roll!(16, 31, 40)]),
    affix!(4, "Blessed", 24, ARMOR, [roll!(16, 41, 50)]),
    affix!(5, "Saintly", 30, ARMOR, [roll!(16, 51, 65)]),
    affix!(6, "Holy", 38, ARMOR, [roll!(16, 66, 80)]),
    // enhanced damage, max% then min%
    affix!(7, "Jagged", 1, WEAPON, [roll!(17, 10, 20), chained!(17, 10, 20)]),
    affix!(8, "Deadly", 5, WEAPON, [roll!(17, 21, 30), chained!(17, 21, 30)]),
    affix!(9, "Vicious", 12, WEAPON, [roll!(17, 31, 40), chained!(17, 31, 40)]),
    affix!(10, "Brutal", 18, WEAPON, [roll!(17, 41, 50), chained!(17, 41, 50)]),
    affix!(11, "Massive", 26, WEAPON, [roll!(17, 51, 65), chained!(17, 51, 65)]),
    affix!(12, "Savage", 35, WEAPON, [roll!(17, 66, 80), chained!(17, 66, 80)]),
    // attack rating
    affix!(13, "Bronze", 1, WEAPON, [roll!(19, 10, 20)]),
    affix!(14, "Iron", 4, WEAPON, [roll!(19, 21, 40)]),
    affix!(15, "Steel", 8, WEAPON, [roll!(19, 41, 60)]),
    affix!(16, "Silver", 14, WEAPON, [roll!(19, 61, 80)]),
    affix!(17, "Gold", 22, WEAPON, [roll!(19, 81, 100)]),
    affix!(
        18,
        "Fine",
        1,
        WEAPON,
        [roll!(17, 15, 25), chained!(17, 15, 25), roll!(19, 5, 10)]
    ),
    affix!(
        19,
        "Warrior's",
        10,
        WEAPON,
        [roll!(17, 41, 50), chained!(17, 41, 50), roll!(19, 31, 50)]
    ),
    // mana
    affix!(20, "Lizard's", 1, ANY, [roll!(9, 1, 5)]),
    affix!(21, "Snake's", 7, ANY, [roll!(9, 6, 10)]),
    affix!(22, "Serpent's", 14, ANY, [roll!(9, 11, 15)]),
    // resistances
    affix!(23, "Azure", 3, ARMOR_JEWELRY, [roll!(43, 5, 10)]),
    affix!(24, "Lapis", 9, ARMOR_JEWELRY, [roll!(43, 11, 20)]),
    affix!(25, "Crimson", 3, ARMOR_JEWELRY, [roll!(39, 5, 10)]),
    affix!(26, "Garnet", 9, ARMOR_JEWELRY, [roll!(39, 11, 20)]),
    affix!(27, "Ocher", 3, ARMOR_JEWELRY, [roll!(41, 5, 10)]),
    affix!(28, "Tangerine", 9, ARMOR_JEWELRY, [roll!(41, 11, 20)]),
    affix!(29, "Beryl", 3, ARMOR_JEWELRY, [roll!(45, 5, 10)]),
    affix!(30, "Jade", 9, ARMOR_JEWELRY, [roll!(45, 11, 20)]),
    affix!(
        31,
        "Shimmering",
        5,
        ARMOR_JEWELRY,
        [roll!(39, 5, 10), roll!(41, 5, 10), roll!(43, 5, 10), roll!(45, 5, 10)]
    ),
    affix!(
        32,
        "Rainbow",
        12,
        ARMOR_JEWELRY,
        [roll!(39, 11, 15), roll!(41, 11, 15), roll!(43, 11, 15), roll!(45, 11, 15)]
    ),
    // class skills, fixed bonus
    affix!(33, "Fletcher's", 12, MagicMask::AMULET, [roll!(83, [0], 1, 1)]),
    affix!(34, "Sorcerer's", 12, MagicMask::AMULET, [roll!(83, [1], 1, 1)]),
    affix!(35, "Acolyte's", 12, MagicMask::AMULET, [roll!(83, [2], 1, 1)]),
    affix!(36, "Monk's", 12, MagicMask::AMULET, [roll!(83, [3], 1, 1)]),
    affix!(37, "Slayer's", 12, MagicMask::AMULET, [roll!(83, [4], 1, 1)]),
];

pub(crate) const SUFFIXES: &[LegacyAffix] = &[
    affix!(1, "of Health", 1, ARMOR, [roll!(34, 1, 1)]),
    affix!(2, "of Protection", 10, ARMOR, [roll!(34, 2, 2)]),
    affix!(3, "of Absorption", 18, ARMOR, [roll!(34, 3, 3)]),
    affix!(4, "of Warding", 5, ARMOR, [roll!(35, 1, 1)]),
    // life
    affix!(5, "of the Jackal", 1, ARMOR_JEWELRY, [roll!(7, 1, 5)]),
    affix!(6, "of the Fox", 6, ARMOR_JEWELRY, [roll!(7, 6, 10)]),
    affix!(7, "of the Wolf", 12, ARMOR_JEWELRY, [roll!(7, 11, 20)]),
    affix!(8, "of the Tiger", 20, ARMOR_JEWELRY, [roll!(7, 21, 30)]),
    affix!(9, "of the Mammoth", 30, ARMOR_JEWELRY, [roll!(7, 31, 40)]),
    // attributes
    affix!(10, "of Strength", 1, ANY, [roll!(0, 1, 2)]),
    affix!(11, "of Might", 7, ANY, [roll!(0, 3, 5)]),
    affix!(12, "of the Ox", 15, ANY, [roll!(0, 6, 9)]),
    affix!(13, "of Dexterity", 1, ANY, [roll!(2, 1, 2)]),
    affix!(14, "of Skill", 7, ANY, [roll!(2, 3, 5)]),
    affix!(15, "of Accuracy", 15, ANY, [roll!(2, 6, 9)]),
    affix!(16, "of Energy", 1, ANY, [roll!(1, 1, 2)]),
    affix!(17, "of the Mind", 7, ANY, [roll!(1, 3, 5)]),
    affix!(18, "of Brilliance", 15, ANY, [roll!(1, 6, 9)]),
    affix!(19, "of Life", 1, ANY, [roll!(3, 1, 2)]),
    affix!(20, "of Substinence", 7, ANY, [roll!(3, 3, 5)]),
    affix!(21, "of Vita", 15, ANY, [roll!(3, 6, 9)]),
    // elemental damage, min then max (then frames)
    affix!(22, "of Flame", 1, WEAPON, [roll!(48, 1, 1), chained!(48, 2, 6)]),
    affix!(23, "of Fire", 11, WEAPON, [roll!(48, 4, 7), chained!(48, 8, 15)]),
    affix!(
        24,
        "of Frost",
        1,
        WEAPON,
        [roll!(54, 1, 1), chained!(54, 2, 3), chained!(54, 50, 50)]
    ),
    affix!(
        25,
        "of Ice",
        13,
        WEAPON,
        [roll!(54, 2, 4), chained!(54, 5, 10), chained!(54, 75, 75)]
    ),
    affix!(26, "of Shock", 1, WEAPON, [roll!(50, 1, 1), chained!(50, 4, 8)]),
    affix!(27, "of Lightning", 12, WEAPON, [roll!(50, 1, 1), chained!(50, 10, 20)]),
    affix!(
        28,
        "of Blight",
        3,
        WEAPON,
        [roll!(57, 6, 6), chained!(57, 6, 6), chained!(57, 75, 75)]
    ),
    // physical damage, stored as a chained min/max pair
    affix!(29, "of Measure", 1, WEAPON, [roll!(21, 1, 2), chained!(22, 3, 6)]),
    affix!(30, "of Maiming", 8, WEAPON, [roll!(21, 3, 5), chained!(22, 6, 10)]),
    affix!(31, "of Light", 1, ANY, [roll!(89, 1, 1)]),
    affix!(32, "of the Sun", 10, ANY, [roll!(89, 2, 4)]),
    affix!(33, "of the Leech", 5, WEAPON_RING, [roll!(60, 3, 4)]),
    affix!(34, "of the Bat", 5, WEAPON_RING, [roll!(62, 3, 4)]),
    affix!(35, "of Quickness", 10, WEAPON_GLOVES, [roll!(93, 10, 20)]),
    affix!(36, "of Speed", 5, MagicMask::BOOTS, [roll!(96, 10, 20)]),
    affix!(37, "of Greed", 1, ARMOR_JEWELRY, [roll!(79, 25, 40)]),
    affix!(38, "of Fortune", 10, MagicMask::JEWELRY, [roll!(80, 5, 15)]),
    affix!(39, "of Regeneration", 7, ARMOR_JEWELRY, [roll!(74, 3, 5)]),
    affix!(40, "of Thorns", 1, ARMOR, [roll!(78, 1, 3)]),
    affix!(41, "of Blocking", 5, MagicMask::SHIELD, [roll!(20, 10, 20)]),
    affix!(42, "of Deflecting", 15, MagicMask::SHIELD, [roll!(20, 21, 30)]),
];

/// Classic set pieces, in set-id order.
pub(crate) const SET_ITEMS: &[(u16, &str, &str)] = &[
    (0, "Civerb's Ward", "lrg"),
    (1, "Civerb's Icon", "amu"),
    (2, "Civerb's Cudgel", "gsc"),
    (3, "Hsarus' Iron Heel", "mbt"),
    (4, "Hsarus' Iron Fist", "buc"),
    (5, "Hsarus' Iron Stay", "mbl"),
    (6, "Cleglaw's Tooth", "lsd"),
    (7, "Cleglaw's Claw", "sml"),
    (8, "Cleglaw's Pincers", "mgl"),
    (9, "Iratha's Collar", "amu"),
    (10, "Iratha's Cuff", "tgl"),
    (11, "Iratha's Coil", "crn"),
    (12, "Iratha's Cord", "tbl"),
    (13, "Isenhart's Lightbrand", "bsd"),
    (14, "Isenhart's Parry", "gts"),
    (15, "Isenhart's Case", "brs"),
    (16, "Isenhart's Horns", "fhl"),
    (17, "Vidala's Barb", "lbb"),
    (18, "Vidala's Fetlock", "tbt"),
    (19, "Vidala's Ambush", "lea"),
    (20, "Vidala's Snare", "amu"),
    (21, "Milabrega's Orb", "kit"),
    (22, "Milabrega's Rod", "wsp"),
    (23, "Milabrega's Diadem", "crn"),
    (24, "Milabrega's Robe", "aar"),
    (25, "Cathan's Rule", "bst"),
    (26, "Cathan's Mesh", "chn"),
    (27, "Cathan's Visage", "msk"),
    (28, "Cathan's Sigil", "amu"),
    (29, "Cathan's Seal", "rin"),
    (30, "Tancred's Crowbill", "mpi"),
    (31, "Tancred's Spine", "ful"),
    (32, "Tancred's Hobnails", "lbt"),
    (33, "Tancred's Weird", "amu"),
    (34, "Tancred's Skull", "bhm"),
    (35, "Sigon's Gage", "hgl"),
    (36, "Sigon's Visor", "ghm"),
    (37, "Sigon's Shelter", "gth"),
    (38, "Sigon's Sabot", "hbt"),
    (39, "Sigon's Wrap", "hbl"),
    (40, "Sigon's Guard", "tow"),
    (41, "Infernal Cranium", "cap"),
    (42, "Infernal Torch", "gwn"),
    (43, "Infernal Sign", "tbl"),
    (44, "Berserker's Headgear", "hlm"),
    (45, "Berserker's Hauberk", "spl"),
    (46, "Berserker's Hatchet", "2ax"),
    (47, "Death's Hand", "lgl"),
    (48, "Death's Guard", "lbl"),
    (49, "Death's Touch", "wsd"),
    (50, "Angelic Sickle", "sbr"),
    (51, "Angelic Mantle", "rng"),
    (52, "Angelic Halo", "rin"),
    (53, "Angelic Wings", "amu"),
    (54, "Arctic Horn", "swb"),
    (55, "Arctic Furs", "qui"),
    (56, "Arctic Binding", "vbl"),
    (57, "Arctic Mitts", "tgl"),
    (58, "Arcanna's Sign", "amu"),
    (59, "Arcanna's Deathwand", "wst"),
    (60, "Arcanna's Head", "skp"),
    (61, "Arcanna's Flesh", "ltp"),
];

/// Classic uniques; the unique id is the position in this list.
pub(crate) const UNIQUE_ITEMS: &[(&str, &str)] = &[
    ("The Gnasher", "hax"),
    ("Deathspade", "axe"),
    ("Bladebone", "2ax"),
    ("Mindrend", "mpi"),
    ("Rakescar", "wax"),
    ("Fechmar's Axe", "lax"),
    ("Goreshovel", "bax"),
    ("The Chieftain", "btx"),
    ("Brainhew", "gax"),
    ("Humongous", "gix"),
    ("Torch of Iro", "wnd"),
    ("Maelstrom", "ywn"),
    ("Gravenspine", "bwn"),
    ("Ume's Lament", "gwn"),
    ("Felloak", "clb"),
    ("Knell Striker", "scp"),
    ("Rusthandle", "gsc"),
    ("Stormeye", "wsp"),
    ("Stoutnail", "spc"),
    ("Crushflange", "mac"),
    ("Bloodrise", "mst"),
    ("The General's Tan Do Li Ga", "fla"),
    ("Ironstone", "whm"),
    ("Bonesnap", "mau"),
    ("Steeldriver", "gma"),
    ("Rixot's Keen", "ssd"),
    ("Blood Crescent", "scm"),
    ("Skewer of Krintiz", "sbr"),
    ("Gleamscythe", "flc"),
    ("Griswold's Edge", "bsd"),
    ("Hellplague", "lsd"),
    ("Culwen's Point", "wsd"),
    ("Shadowfang", "2hs"),
    ("Soulflay", "clm"),
    ("Kinemil's Awl", "gis"),
    ("Blacktongue", "bsw"),
    ("Ripsaw", "flb"),
    ("The Patriarch", "gsd"),
    ("Gull", "dgr"),
    ("The Diggler", "dir"),
    ("The Jade Tan Do", "kri"),
    ("Spectral Shard", "bld"),
    ("The Dragon Chang", "spr"),
    ("Razortine", "tri"),
    ("Bloodthief", "brn"),
    ("Lance of Yaggai", "spt"),
    ("The Tannr Gorerod", "pik"),
    ("Dimoak's Hew", "bar"),
    ("Steelgoad", "vou"),
    ("Soul Harvest", "scy"),
    ("The Battlebranch", "pax"),
    ("Woestave", "hal"),
    ("The Grim Reaper", "wsc"),
    ("Bane Ash", "sst"),
    ("Serpent Lord", "lst"),
    ("Lazarus Spire", "cst"),
    ("The Salamander", "bst"),
    ("The Iron Jang Bong", "wst"),
    ("Pluckeye", "sbw"),
    ("Witherstring", "hbw"),
    ("Raven Claw", "lbw"),
    ("Rogue's Bow", "cbw"),
    ("Stormstrike", "sbb"),
    ("Wizendraw", "lbb"),
    ("Hellclap", "swb"),
    ("Blastbark", "lwb"),
    ("Leadcrow", "lxb"),
    ("Ichorsting", "mxb"),
    ("Hellcast", "hxb"),
    ("Doomslinger", "rxb"),
    ("Biggin's Bonnet", "cap"),
    ("Tarnhelm", "skp"),
    ("Coif of Glory", "hlm"),
    ("Duskdeep", "fhl"),
    ("Wormskull", "bhm"),
    ("Howltusk", "ghm"),
    ("Undead Crown", "crn"),
    ("The Face of Horror", "msk"),
    ("Greyform", "qui"),
    ("Blinkbat's Form", "lea"),
    ("The Centurion", "hla"),
    ("Twitchthroe", "stu"),
    ("Darkglow", "rng"),
    ("Hawkmail", "scl"),
    ("Sparking Mail", "chn"),
    ("Venom Ward", "brs"),
    ("Iceblink", "spl"),
    ("Boneflesh", "plt"),
    ("Rockfleece", "fld"),
    ("Rattlecage", "gth"),
    ("Goldskin", "ful"),
    ("Victor's Silk", "aar"),
    ("Heavenly Garb", "ltp"),
    ("Pelta Lunata", "buc"),
    ("Umbral Disk", "sml"),
    ("Stormguild", "lrg"),
    ("Wall of the Eyeless", "bsh"),
    ("Swordback Hold", "spk"),
    ("Steelclash", "kit"),
    ("Bverrit Keep", "tow"),
    ("The Ward", "gts"),
    ("The Hand of Broc", "lgl"),
    ("Bloodfist", "vgl"),
    ("Chance Guards", "mgl"),
    ("Magefist", "tgl"),
    ("Frostburn", "hgl"),
    ("Hotspur", "lbt"),
    ("Gorefoot", "vbt"),
    ("Treads of Cthon", "mbt"),
    ("Goblin Toe", "tbt"),
    ("Tearhaunch", "hbt"),
    ("Lenymo", "lbl"),
    ("Snakecord", "vbl"),
    ("Nightsmoke", "mbl"),
    ("Goldwrap", "tbl"),
    ("Bladebuckle", "hbl"),
    ("Nokozan Relic", "amu"),
    ("The Eye of Etlich", "amu"),
    ("The Mahim-Oak Curio", "amu"),
    ("Nagelring", "rin"),
    ("Manald Heal", "rin"),
    ("The Stone of Jordan", "rin"),
];
