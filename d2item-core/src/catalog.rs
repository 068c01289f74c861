use std::sync::OnceLock;

use crate::code::ItemCodeCodec;
use crate::item_types::ItemTypeRegistry;
use crate::legacy::{LegacyGenerator, LegacyTables};
use crate::properties::PropertyCodec;
use crate::skills::{ExternalDataError, SkillTable};
use crate::stats::StatTable;

/// Every static table the codecs read, built once.
#[derive(Debug, Clone)]
pub struct Catalog {
    stats: StatTable,
    registry: ItemTypeRegistry,
    codes: ItemCodeCodec,
    legacy: LegacyTables,
    skills: SkillTable,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let stats = StatTable::new();
        let registry = ItemTypeRegistry::new();
        let legacy = LegacyTables::new(&registry);
        log::debug!(
            "catalog built: {} stats, {} item types",
            stats.len(),
            registry.len()
        );
        Self {
            stats,
            registry,
            codes: ItemCodeCodec::new(),
            legacy,
            skills: SkillTable::builtin(),
        }
    }

    /// Shared instance, built on first use.
    pub fn global() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::new)
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn registry(&self) -> &ItemTypeRegistry {
        &self.registry
    }

    pub fn codes(&self) -> &ItemCodeCodec {
        &self.codes
    }

    pub fn legacy(&self) -> &LegacyTables {
        &self.legacy
    }

    pub fn skills(&self) -> &SkillTable {
        &self.skills
    }

    pub fn property_codec(&self) -> PropertyCodec<'_> {
        PropertyCodec::new(&self.stats)
    }

    pub fn legacy_generator(&self) -> LegacyGenerator<'_> {
        LegacyGenerator::new(&self.stats, &self.legacy)
    }

    /// Replace the skill names with a tab separated table. On error the
    /// current names are kept.
    pub fn reload_skills(&mut self, tsv: &str) -> Result<(), ExternalDataError> {
        let skills = SkillTable::from_tsv(tsv)?;
        log::info!("skill table replaced ({} ids)", skills.len());
        self.skills = skills;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ItemCode;

    #[test]
    fn global_is_shared() {
        let a = Catalog::global() as *const Catalog;
        let b = Catalog::global() as *const Catalog;
        assert_eq!(a, b);
        assert_eq!(Catalog::global().stats().len(), 359);
    }

    #[test]
    fn tables_agree() {
        let catalog = Catalog::new();
        let hax = catalog.codes().legacy_code(0);
        assert_eq!(hax, ItemCode::new("hax"));
        assert_eq!(catalog.registry().lookup(&hax).name, "Hand Axe");
        assert!(catalog.legacy().info(&hax).is_some());
    }

    #[test]
    fn failed_reload_keeps_names() {
        let mut catalog = Catalog::new();
        let err = catalog.reload_skills("Name\tId\nFoo\t54\n").unwrap_err();
        assert_eq!(err, ExternalDataError::MissingColumn { column: "Skill" });
        assert_eq!(catalog.skills().name(54), Some("Teleport"));

        let err = catalog
            .reload_skills("Id\tSkill\n18446744073709551615\tBlink\n")
            .unwrap_err();
        assert!(matches!(err, ExternalDataError::BadRow { line: 2, .. }));
        assert_eq!(catalog.skills().name(54), Some("Teleport"));

        catalog.reload_skills("Id\tSkill\n54\tBlink\n").unwrap();
        assert_eq!(catalog.skills().name(54), Some("Blink"));
        assert_eq!(catalog.skills().name(0), None);
    }
}
