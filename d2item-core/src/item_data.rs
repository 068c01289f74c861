use crate::item_types::ItemTypeDescriptor;

// Category tags. The first tag is the most specific one.
const AXE: &[&str] = &["Axe", "Melee Weapon", "Weapon"];
const WAND: &[&str] = &["Wand", "Staves And Rods", "Blunt", "Melee Weapon", "Weapon"];
const CLUB: &[&str] = &["Club", "Blunt", "Melee Weapon", "Weapon"];
const SCEPTER: &[&str] = &["Scepter", "Staves And Rods", "Blunt", "Melee Weapon", "Weapon"];
const MACE: &[&str] = &["Mace", "Blunt", "Melee Weapon", "Weapon"];
const HAMMER: &[&str] = &["Hammer", "Blunt", "Melee Weapon", "Weapon"];
const SWORD: &[&str] = &["Sword", "Melee Weapon", "Weapon"];
const KNIFE: &[&str] = &["Knife", "Melee Weapon", "Weapon"];
const THROWING_KNIFE: &[&str] = &[
    "Throwing Knife",
    "Combo Weapon",
    "Thrown Weapon",
    "Knife",
    "Melee Weapon",
    "Weapon",
];
const THROWING_AXE: &[&str] = &[
    "Throwing Axe",
    "Combo Weapon",
    "Thrown Weapon",
    "Axe",
    "Melee Weapon",
    "Weapon",
];
const JAVELIN: &[&str] = &[
    "Javelin",
    "Combo Weapon",
    "Thrown Weapon",
    "Spear",
    "Melee Weapon",
    "Weapon",
];
const SPEAR: &[&str] = &["Spear", "Melee Weapon", "Weapon"];
const POLEARM: &[&str] = &["Polearm", "Melee Weapon", "Weapon"];
const STAFF: &[&str] = &["Staff", "Staves And Rods", "Melee Weapon", "Weapon"];
const BOW: &[&str] = &["Bow", "Missile Weapon", "Weapon"];
const CROSSBOW: &[&str] = &["Crossbow", "Missile Weapon", "Weapon"];
const THROWN_POTION: &[&str] = &["Missile Potion", "Thrown Weapon", "Weapon"];
const QUEST_KNIFE: &[&str] = &["Knife", "Melee Weapon", "Weapon", "Quest"];
const QUEST_CLUB: &[&str] = &["Club", "Blunt", "Melee Weapon", "Weapon", "Quest"];
const QUEST_HAMMER: &[&str] = &["Hammer", "Blunt", "Melee Weapon", "Weapon", "Quest"];
const QUEST_STAFF: &[&str] = &["Staff", "Staves And Rods", "Melee Weapon", "Weapon", "Quest"];

const HELM: &[&str] = &["Helm", "Any Armor"];
const BODY_ARMOR: &[&str] = &["Armor", "Any Armor"];
const SHIELD: &[&str] = &["Shield", "Any Shield", "Any Armor"];
const GLOVES: &[&str] = &["Gloves", "Any Armor"];
const BOOTS: &[&str] = &["Boots", "Any Armor"];
const BELT: &[&str] = &["Belt", "Any Armor"];

const ARROWS: &[&str] = &["Bow Quiver", "Missile", "Second Hand"];
const BOLTS: &[&str] = &["Crossbow Quiver", "Missile", "Second Hand"];
const KEY: &[&str] = &["Key", "Miscellaneous"];
const GOLD: &[&str] = &["Gold", "Miscellaneous"];
const TOME: &[&str] = &["Tome", "Book", "Miscellaneous"];
const POTION: &[&str] = &["Potion", "Miscellaneous"];
const SCROLL: &[&str] = &["Scroll", "Miscellaneous"];
const GEM: &[&str] = &["Gem", "Socket Filler", "Miscellaneous"];
const RUNE: &[&str] = &["Rune", "Socket Filler", "Miscellaneous"];
const AMULET: &[&str] = &["Amulet", "Miscellaneous"];
const RING: &[&str] = &["Ring", "Miscellaneous"];
const JEWEL: &[&str] = &["Jewel", "Socket Filler", "Miscellaneous"];
const CHARM: &[&str] = &["Charm", "Miscellaneous"];
const QUEST: &[&str] = &["Quest", "Miscellaneous"];
const QUEST_AMULET: &[&str] = &["Amulet", "Quest", "Miscellaneous"];

// Throwing weapons and throwing potions carry `.stackable()` and are also
// registered in the stackable table.
pub(crate) const WEAPONS: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"hax ", "Hand Axe", AXE).one_hand(3, 6).size(1, 3).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"axe ", "Axe", AXE).one_hand(4, 11).size(2, 3).sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"2ax ", "Double Axe", AXE)
        .one_hand(5, 13)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"mpi ", "Military Pick", AXE)
        .one_hand(7, 11)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"wax ", "War Axe", AXE)
        .one_hand(10, 18)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"lax ", "Large Axe", AXE)
        .two_hand(6, 13)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"bax ", "Broad Axe", AXE)
        .two_hand(10, 18)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"btx ", "Battle Axe", AXE)
        .two_hand(12, 32)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"gax ", "Great Axe", AXE)
        .two_hand(9, 30)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"gix ", "Giant Axe", AXE)
        .two_hand(22, 45)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"wnd ", "Wand", WAND).one_hand(2, 4).size(1, 2).sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"ywn ", "Yew Wand", WAND)
        .one_hand(2, 8)
        .size(1, 2)
        .sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"bwn ", "Bone Wand", WAND)
        .one_hand(3, 7)
        .size(1, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"gwn ", "Grim Wand", WAND)
        .one_hand(5, 11)
        .size(1, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"clb ", "Club", CLUB).one_hand(1, 6).size(1, 3).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"scp ", "Scepter", SCEPTER)
        .one_hand(6, 11)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"gsc ", "Grand Scepter", SCEPTER)
        .one_hand(8, 18)
        .size(1, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"wsp ", "War Scepter", SCEPTER)
        .one_hand(10, 17)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"spc ", "Spiked Club", CLUB)
        .one_hand(5, 8)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"mac ", "Mace", MACE).one_hand(3, 10).size(1, 3).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"mst ", "Morning Star", MACE)
        .one_hand(7, 16)
        .size(1, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"fla ", "Flail", MACE).one_hand(1, 24).size(2, 3).sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"whm ", "War Hammer", HAMMER)
        .one_hand(19, 29)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"mau ", "Maul", HAMMER)
        .two_hand(30, 43)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"gma ", "Great Maul", HAMMER)
        .two_hand(38, 58)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"ssd ", "Short Sword", SWORD)
        .one_hand(2, 7)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"scm ", "Scimitar", SWORD)
        .one_hand(2, 6)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"sbr ", "Sabre", SWORD).one_hand(3, 8).size(1, 3).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"flc ", "Falchion", SWORD)
        .one_hand(9, 17)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"crs ", "Crystal Sword", SWORD)
        .one_hand(5, 15)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"bsd ", "Broad Sword", SWORD)
        .one_hand(7, 14)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"lsd ", "Long Sword", SWORD)
        .one_hand(3, 19)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"wsd ", "War Sword", SWORD)
        .one_hand(8, 20)
        .size(1, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"2hs ", "Two-Handed Sword", SWORD)
        .one_hand(2, 9)
        .two_hand(8, 17)
        .size(1, 4)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"clm ", "Claymore", SWORD)
        .one_hand(5, 12)
        .two_hand(13, 30)
        .size(1, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"gis ", "Giant Sword", SWORD)
        .one_hand(3, 16)
        .two_hand(9, 28)
        .size(1, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"bsw ", "Bastard Sword", SWORD)
        .one_hand(7, 19)
        .two_hand(20, 28)
        .size(1, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"flb ", "Flamberge", SWORD)
        .one_hand(9, 15)
        .two_hand(13, 26)
        .size(2, 4)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"gsd ", "Great Sword", SWORD)
        .one_hand(12, 20)
        .two_hand(25, 42)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"dgr ", "Dagger", KNIFE).one_hand(1, 4).size(1, 2).sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"dir ", "Dirk", KNIFE).one_hand(3, 9).size(1, 2).sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"kri ", "Kris", KNIFE).one_hand(2, 11).size(1, 3).sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"bld ", "Blade", KNIFE).one_hand(4, 15).size(1, 3).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"tkf ", "Throwing Knife", THROWING_KNIFE)
        .one_hand(2, 3)
        .missile(4, 9)
        .size(1, 2)
        .stackable(),
    ItemTypeDescriptor::new(b"tax ", "Throwing Axe", THROWING_AXE)
        .one_hand(4, 7)
        .missile(8, 12)
        .size(1, 2)
        .stackable(),
    ItemTypeDescriptor::new(b"bkf ", "Balanced Knife", THROWING_KNIFE)
        .one_hand(1, 8)
        .missile(6, 11)
        .size(1, 2)
        .stackable(),
    ItemTypeDescriptor::new(b"bal ", "Balanced Axe", THROWING_AXE)
        .one_hand(5, 10)
        .missile(12, 15)
        .size(2, 3)
        .stackable(),
    ItemTypeDescriptor::new(b"jav ", "Javelin", JAVELIN)
        .one_hand(1, 5)
        .missile(6, 14)
        .size(1, 3)
        .stackable(),
    ItemTypeDescriptor::new(b"pil ", "Pilum", JAVELIN)
        .one_hand(4, 9)
        .missile(7, 20)
        .size(1, 3)
        .stackable(),
    ItemTypeDescriptor::new(b"ssp ", "Short Spear", JAVELIN)
        .one_hand(2, 13)
        .missile(10, 22)
        .size(1, 3)
        .stackable(),
    ItemTypeDescriptor::new(b"glv ", "Glaive", JAVELIN)
        .one_hand(5, 17)
        .missile(16, 22)
        .size(1, 4)
        .stackable(),
    ItemTypeDescriptor::new(b"tsp ", "Throwing Spear", JAVELIN)
        .one_hand(5, 15)
        .missile(12, 30)
        .size(1, 4)
        .stackable(),
    ItemTypeDescriptor::new(b"spr ", "Spear", SPEAR).two_hand(3, 15).size(2, 4).sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"tri ", "Trident", SPEAR)
        .two_hand(9, 15)
        .size(2, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"brn ", "Brandistock", SPEAR)
        .two_hand(7, 17)
        .size(2, 4)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"spt ", "Spetum", SPEAR)
        .two_hand(15, 23)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"pik ", "Pike", SPEAR).two_hand(14, 63).size(2, 4).sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"bar ", "Bardiche", POLEARM)
        .two_hand(1, 27)
        .size(2, 4)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"vou ", "Voulge", POLEARM)
        .two_hand(6, 21)
        .size(2, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"scy ", "Scythe", POLEARM)
        .two_hand(8, 20)
        .size(2, 4)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"pax ", "Poleaxe", POLEARM)
        .two_hand(18, 39)
        .size(2, 4)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"hal ", "Halberd", POLEARM)
        .two_hand(12, 45)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"wsc ", "War Scythe", POLEARM)
        .two_hand(15, 36)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"sst ", "Short Staff", STAFF)
        .two_hand(1, 5)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"lst ", "Long Staff", STAFF)
        .two_hand(2, 8)
        .size(1, 4)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"cst ", "Gnarled Staff", STAFF)
        .two_hand(4, 12)
        .size(1, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"bst ", "Battle Staff", STAFF)
        .two_hand(6, 13)
        .size(1, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"wst ", "War Staff", STAFF)
        .two_hand(12, 28)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"sbw ", "Short Bow", BOW)
        .two_hand(1, 4)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"hbw ", "Hunter's Bow", BOW)
        .two_hand(2, 6)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"lbw ", "Long Bow", BOW)
        .two_hand(3, 10)
        .size(2, 4)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"cbw ", "Composite Bow", BOW)
        .two_hand(4, 8)
        .size(2, 3)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"sbb ", "Short Battle Bow", BOW)
        .two_hand(5, 11)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"lbb ", "Long Battle Bow", BOW)
        .two_hand(3, 18)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"swb ", "Short War Bow", BOW)
        .two_hand(6, 14)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"lwb ", "Long War Bow", BOW)
        .two_hand(3, 23)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"lxb ", "Light Crossbow", CROSSBOW)
        .two_hand(6, 9)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"mxb ", "Crossbow", CROSSBOW)
        .two_hand(9, 16)
        .size(2, 4)
        .sockets(&[4, 4, 4]),
    ItemTypeDescriptor::new(b"hxb ", "Heavy Crossbow", CROSSBOW)
        .two_hand(14, 26)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"rxb ", "Repeating Crossbow", CROSSBOW)
        .two_hand(6, 12)
        .size(2, 3)
        .sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"gps ", "Rancid Gas Potion", THROWN_POTION)
        .missile(5, 5)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"ops ", "Oil Potion", THROWN_POTION)
        .missile(3, 6)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"gpm ", "Choking Gas Potion", THROWN_POTION)
        .missile(10, 10)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"opm ", "Exploding Potion", THROWN_POTION)
        .missile(8, 14)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"gpl ", "Strangling Gas Potion", THROWN_POTION)
        .missile(25, 25)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"opl ", "Fulminating Potion", THROWN_POTION)
        .missile(15, 32)
        .size(1, 1)
        .stackable(),
    ItemTypeDescriptor::new(b"d33 ", "Decoy Gidbinn", QUEST_KNIFE).one_hand(1, 2).size(1, 2),
    ItemTypeDescriptor::new(b"g33 ", "The Gidbinn", QUEST_KNIFE).one_hand(3, 7).size(1, 2),
    ItemTypeDescriptor::new(b"leg ", "Wirt's Leg", QUEST_CLUB).one_hand(2, 8).size(1, 3),
    ItemTypeDescriptor::new(b"hdm ", "Horadric Malus", QUEST_HAMMER).one_hand(6, 15).size(1, 2),
    ItemTypeDescriptor::new(b"hfh ", "Hell Forge Hammer", QUEST_HAMMER).two_hand(6, 15).size(2, 3),
    ItemTypeDescriptor::new(b"hst ", "Horadric Staff", QUEST_STAFF).two_hand(12, 28).size(1, 4),
    ItemTypeDescriptor::new(b"msf ", "Staff of Kings", QUEST_STAFF).two_hand(10, 15).size(1, 3),
    ItemTypeDescriptor::new(b"9ha ", "Hatchet", AXE)
        .one_hand(10, 21)
        .size(1, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"9fl ", "Knout", MACE).one_hand(13, 35).size(2, 3).sockets(&[5, 5, 5]),
    ItemTypeDescriptor::new(b"9cr ", "Dimensional Blade", SWORD)
        .one_hand(13, 35)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"9gd ", "Executioner Sword", SWORD)
        .one_hand(24, 40)
        .two_hand(47, 80)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"7cr ", "Phase Blade", SWORD)
        .one_hand(31, 35)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"7gd ", "Colossus Blade", SWORD)
        .one_hand(25, 65)
        .two_hand(58, 115)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"7wa ", "Berserker Axe", AXE)
        .one_hand(24, 71)
        .size(2, 3)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"7s8 ", "Thresher", POLEARM)
        .two_hand(12, 141)
        .size(2, 4)
        .sockets(&[3, 4, 5]),
    ItemTypeDescriptor::new(b"6lw ", "Hydra Bow", BOW)
        .two_hand(10, 68)
        .size(2, 4)
        .sockets(&[6, 6, 6]),
    ItemTypeDescriptor::new(b"7tk ", "Flying Knife", THROWING_KNIFE)
        .one_hand(23, 54)
        .missile(23, 54)
        .size(1, 2)
        .stackable(),
];

pub(crate) const ARMOR: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"cap ", "Cap", HELM).defense(3, 5).size(2, 2).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"skp ", "Skull Cap", HELM)
        .defense(8, 11)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"hlm ", "Helm", HELM).defense(15, 18).size(2, 2).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"fhl ", "Full Helm", HELM)
        .defense(23, 26)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"ghm ", "Great Helm", HELM)
        .defense(30, 35)
        .size(2, 2)
        .sockets(&[2, 3, 3]),
    ItemTypeDescriptor::new(b"crn ", "Crown", HELM).defense(25, 45).size(2, 2).sockets(&[2, 3, 3]),
    ItemTypeDescriptor::new(b"msk ", "Mask", HELM).defense(9, 27).size(2, 2).sockets(&[2, 3, 3]),
    ItemTypeDescriptor::new(b"bhm ", "Bone Helm", HELM)
        .defense(33, 36)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"xap ", "War Hat", HELM)
        .defense(45, 53)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"xkp ", "Sallet", HELM).defense(52, 62).size(2, 2).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"uap ", "Shako", HELM).defense(98, 141).size(2, 2).sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"uhm ", "Spired Helm", HELM)
        .defense(114, 159)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"qui ", "Quilted Armor", BODY_ARMOR)
        .defense(8, 11)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"lea ", "Leather Armor", BODY_ARMOR)
        .defense(14, 17)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"hla ", "Hard Leather Armor", BODY_ARMOR)
        .defense(21, 24)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"stu ", "Studded Leather", BODY_ARMOR)
        .defense(32, 35)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"rng ", "Ring Mail", BODY_ARMOR)
        .defense(45, 48)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"scl ", "Scale Mail", BODY_ARMOR)
        .defense(57, 60)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"chn ", "Chain Mail", BODY_ARMOR)
        .defense(72, 75)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"brs ", "Breast Plate", BODY_ARMOR)
        .defense(65, 68)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"spl ", "Splint Mail", BODY_ARMOR)
        .defense(90, 95)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"plt ", "Plate Mail", BODY_ARMOR)
        .defense(108, 116)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"fld ", "Field Plate", BODY_ARMOR)
        .defense(101, 105)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"gth ", "Gothic Plate", BODY_ARMOR)
        .defense(128, 135)
        .size(2, 3)
        .sockets(&[3, 4, 4]),
    ItemTypeDescriptor::new(b"ful ", "Full Plate Mail", BODY_ARMOR)
        .defense(150, 161)
        .size(2, 3)
        .sockets(&[3, 4, 4]),
    ItemTypeDescriptor::new(b"aar ", "Ancient Armor", BODY_ARMOR)
        .defense(218, 233)
        .size(2, 3)
        .sockets(&[3, 4, 4]),
    ItemTypeDescriptor::new(b"ltp ", "Light Plate", BODY_ARMOR)
        .defense(90, 107)
        .size(2, 3)
        .sockets(&[2, 3, 3]),
    ItemTypeDescriptor::new(b"xui ", "Ghost Armor", BODY_ARMOR)
        .defense(102, 117)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"xea ", "Serpentskin Armor", BODY_ARMOR)
        .defense(111, 126)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"uui ", "Dusk Shroud", BODY_ARMOR)
        .defense(361, 467)
        .size(2, 3)
        .sockets(&[3, 4, 4]),
    ItemTypeDescriptor::new(b"utp ", "Archon Plate", BODY_ARMOR)
        .defense(410, 524)
        .size(2, 3)
        .sockets(&[3, 4, 4]),
    ItemTypeDescriptor::new(b"lgl ", "Leather Gloves", GLOVES).defense(2, 3).size(2, 2),
    ItemTypeDescriptor::new(b"vgl ", "Heavy Gloves", GLOVES).defense(5, 6).size(2, 2),
    ItemTypeDescriptor::new(b"mgl ", "Chain Gloves", GLOVES).defense(8, 9).size(2, 2),
    ItemTypeDescriptor::new(b"tgl ", "Light Gauntlets", GLOVES).defense(9, 11).size(2, 2),
    ItemTypeDescriptor::new(b"hgl ", "Gauntlets", GLOVES).defense(12, 15).size(2, 2),
    ItemTypeDescriptor::new(b"xlg ", "Demonhide Gloves", GLOVES).defense(28, 35).size(2, 2),
    ItemTypeDescriptor::new(b"ulg ", "Bramble Mitts", GLOVES).defense(54, 62).size(2, 2),
    ItemTypeDescriptor::new(b"lbt ", "Boots", BOOTS).defense(2, 3).size(2, 2),
    ItemTypeDescriptor::new(b"vbt ", "Heavy Boots", BOOTS).defense(5, 6).size(2, 2),
    ItemTypeDescriptor::new(b"mbt ", "Chain Boots", BOOTS).defense(8, 9).size(2, 2),
    ItemTypeDescriptor::new(b"tbt ", "Light Plated Boots", BOOTS).defense(9, 11).size(2, 2),
    ItemTypeDescriptor::new(b"hbt ", "Greaves", BOOTS).defense(12, 15).size(2, 2),
    ItemTypeDescriptor::new(b"xlb ", "Demonhide Boots", BOOTS).defense(28, 35).size(2, 2),
    ItemTypeDescriptor::new(b"ulb ", "Wyrmhide Boots", BOOTS).defense(54, 62).size(2, 2),
    ItemTypeDescriptor::new(b"lbl ", "Sash", BELT).defense(2, 2).size(2, 1),
    ItemTypeDescriptor::new(b"vbl ", "Light Belt", BELT).defense(3, 3).size(2, 1),
    ItemTypeDescriptor::new(b"mbl ", "Belt", BELT).defense(5, 5).size(2, 1),
    ItemTypeDescriptor::new(b"tbl ", "Heavy Belt", BELT).defense(6, 6).size(2, 1),
    ItemTypeDescriptor::new(b"hbl ", "Plated Belt", BELT).defense(8, 11).size(2, 1),
    ItemTypeDescriptor::new(b"ulc ", "Spiderweb Sash", BELT).defense(55, 62).size(2, 1),
];

pub(crate) const SHIELDS: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"buc ", "Buckler", SHIELD)
        .defense(4, 6)
        .size(2, 2)
        .sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"sml ", "Small Shield", SHIELD)
        .defense(8, 10)
        .size(2, 2)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"lrg ", "Large Shield", SHIELD)
        .defense(12, 14)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"kit ", "Kite Shield", SHIELD)
        .defense(16, 18)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"tow ", "Tower Shield", SHIELD)
        .defense(22, 25)
        .size(2, 3)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"gts ", "Gothic Shield", SHIELD)
        .defense(30, 35)
        .size(2, 4)
        .sockets(&[3, 3, 3]),
    ItemTypeDescriptor::new(b"bsh ", "Bone Shield", SHIELD)
        .defense(10, 30)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"spk ", "Spiked Shield", SHIELD)
        .defense(15, 25)
        .size(2, 3)
        .sockets(&[2, 2, 2]),
    ItemTypeDescriptor::new(b"xuc ", "Defender", SHIELD)
        .defense(41, 49)
        .size(2, 2)
        .sockets(&[1, 1, 1]),
    ItemTypeDescriptor::new(b"uit ", "Monarch", SHIELD)
        .defense(133, 148)
        .size(2, 4)
        .sockets(&[3, 4, 4]),
];

pub(crate) const STACKABLES: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"aqv ", "Arrows", ARROWS).size(1, 3).stackable(),
    ItemTypeDescriptor::new(b"cqv ", "Bolts", BOLTS).size(1, 3).stackable(),
    ItemTypeDescriptor::new(b"key ", "Key", KEY).size(1, 1).stackable(),
    ItemTypeDescriptor::new(b"gld ", "Gold", GOLD).size(1, 1).stackable(),
];

pub(crate) const TOMES: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"tbk ", "Tome of Town Portal", TOME).size(1, 2).stackable(),
    ItemTypeDescriptor::new(b"ibk ", "Tome of Identify", TOME).size(1, 2).stackable(),
];

pub(crate) const GPS: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"hp1 ", "Minor Healing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"hp2 ", "Light Healing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"hp3 ", "Healing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"hp4 ", "Greater Healing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"hp5 ", "Super Healing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"mp1 ", "Minor Mana Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"mp2 ", "Light Mana Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"mp3 ", "Mana Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"mp4 ", "Greater Mana Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"mp5 ", "Super Mana Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"rvs ", "Rejuvenation Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"rvl ", "Full Rejuvenation Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"vps ", "Stamina Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"yps ", "Antidote Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"wms ", "Thawing Potion", POTION).size(1, 1),
    ItemTypeDescriptor::new(b"tsc ", "Scroll of Town Portal", SCROLL).size(1, 1),
    ItemTypeDescriptor::new(b"isc ", "Scroll of Identify", SCROLL).size(1, 1),
    ItemTypeDescriptor::new(b"gcv ", "Chipped Amethyst", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfv ", "Flawed Amethyst", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsv ", "Amethyst", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gzv ", "Flawless Amethyst", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpv ", "Perfect Amethyst", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gcy ", "Chipped Topaz", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfy ", "Flawed Topaz", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsy ", "Topaz", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gly ", "Flawless Topaz", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpy ", "Perfect Topaz", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gcb ", "Chipped Sapphire", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfb ", "Flawed Sapphire", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsb ", "Sapphire", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"glb ", "Flawless Sapphire", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpb ", "Perfect Sapphire", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gcg ", "Chipped Emerald", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfg ", "Flawed Emerald", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsg ", "Emerald", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"glg ", "Flawless Emerald", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpg ", "Perfect Emerald", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gcr ", "Chipped Ruby", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfr ", "Flawed Ruby", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsr ", "Ruby", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"glr ", "Flawless Ruby", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpr ", "Perfect Ruby", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gcw ", "Chipped Diamond", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gfw ", "Flawed Diamond", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gsw ", "Diamond", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"glw ", "Flawless Diamond", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"gpw ", "Perfect Diamond", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"skc ", "Chipped Skull", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"skf ", "Flawed Skull", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"sku ", "Skull", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"skl ", "Flawless Skull", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"skz ", "Perfect Skull", GEM).size(1, 1),
    ItemTypeDescriptor::new(b"r01 ", "El Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r02 ", "Eld Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r03 ", "Tir Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r04 ", "Nef Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r05 ", "Eth Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r06 ", "Ith Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r07 ", "Tal Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r08 ", "Ral Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r09 ", "Ort Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r10 ", "Thul Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r11 ", "Amn Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r12 ", "Sol Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r13 ", "Shael Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r14 ", "Dol Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r15 ", "Hel Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r16 ", "Io Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r17 ", "Lum Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r18 ", "Ko Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r19 ", "Fal Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r20 ", "Lem Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r21 ", "Pul Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r22 ", "Um Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r23 ", "Mal Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r24 ", "Ist Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r25 ", "Gul Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r26 ", "Vex Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r27 ", "Ohm Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r28 ", "Lo Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r29 ", "Sur Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r30 ", "Ber Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r31 ", "Jah Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r32 ", "Cham Rune", RUNE).size(1, 1),
    ItemTypeDescriptor::new(b"r33 ", "Zod Rune", RUNE).size(1, 1),
];

pub(crate) const MISC: &[ItemTypeDescriptor] = &[
    ItemTypeDescriptor::new(b"amu ", "Amulet", AMULET).size(1, 1),
    ItemTypeDescriptor::new(b"rin ", "Ring", RING).size(1, 1),
    ItemTypeDescriptor::new(b"jew ", "Jewel", JEWEL).size(1, 1),
    ItemTypeDescriptor::new(b"cm1 ", "Small Charm", CHARM).size(1, 1),
    ItemTypeDescriptor::new(b"cm2 ", "Large Charm", CHARM).size(1, 2),
    ItemTypeDescriptor::new(b"cm3 ", "Grand Charm", CHARM).size(1, 3),
    ItemTypeDescriptor::new(b"bks ", "Scroll of Inifuss", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"bkd ", "Scroll of Inifuss", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"ass ", "Book of Skill", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"box ", "Horadric Cube", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"tr1 ", "Horadric Scroll", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"vip ", "Amulet of the Viper", QUEST_AMULET).size(1, 1),
    ItemTypeDescriptor::new(b"xyz ", "Potion of Life", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"j34 ", "Jade Figurine", QUEST).size(1, 2),
    ItemTypeDescriptor::new(b"g34 ", "Golden Bird", QUEST).size(1, 2),
    ItemTypeDescriptor::new(b"bbb ", "Lam Esen's Tome", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"qey ", "Khalim's Eye", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"qhr ", "Khalim's Heart", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"qbr ", "Khalim's Brain", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"mss ", "Mephisto's Soulstone", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"ice ", "Malah's Potion", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"tr2 ", "Scroll of Resistance", QUEST).size(2, 2),
    ItemTypeDescriptor::new(b"pk1 ", "Key of Terror", QUEST).size(1, 2),
    ItemTypeDescriptor::new(b"pk2 ", "Key of Hate", QUEST).size(1, 2),
    ItemTypeDescriptor::new(b"pk3 ", "Key of Destruction", QUEST).size(1, 2),
    ItemTypeDescriptor::new(b"dhn ", "Diablo's Horn", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"bey ", "Baal's Eye", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"mbr ", "Mephisto's Brain", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"toa ", "Token of Absolution", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"tes ", "Twisted Essence of Suffering", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"ceh ", "Charged Essence of Hatred", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"bet ", "Burning Essence of Terror", QUEST).size(1, 1),
    ItemTypeDescriptor::new(b"fed ", "Festering Essence of Destruction", QUEST).size(1, 1),
];
