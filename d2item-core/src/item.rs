//! Ties the codecs together for one item record: type code, base type and
//! magical properties.

use crate::bits::BitReader;
use crate::catalog::Catalog;
use crate::code::{ItemCode, SaveVersion};
use crate::item_types::{ItemSource, ItemTypeDescriptor};
use crate::legacy::{LegacyProperties, LegacyQuality};
use crate::properties::{group_for_display, MagicalAttribute, PropertyError};
use crate::{DecoderSettings, Error, Result};

/// Where an item's properties come from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PropertySource {
    /// A stored property list starting at this bit offset.
    Stored { bit_offset: usize },
    /// Rolled again from a legacy seed.
    Legacy {
        quality: LegacyQuality,
        dwb: u32,
        magic_level: u8,
    },
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub code: ItemCode,
    pub descriptor: ItemTypeDescriptor,
    pub source: ItemSource,
    /// Base name with any legacy affix names around it.
    pub name: String,
    pub attributes: Vec<MagicalAttribute>,
}

pub struct ItemResolver<'a> {
    catalog: &'a Catalog,
    version: SaveVersion,
    character_level: u32,
    strict: bool,
}

impl<'a> ItemResolver<'a> {
    pub fn new(catalog: &'a Catalog, settings: &DecoderSettings) -> Self {
        Self {
            catalog,
            version: settings.version,
            character_level: settings.character_level,
            strict: settings.strict,
        }
    }

    pub fn version(&self) -> SaveVersion {
        self.version
    }

    /// Read the type code at `bit_offset`; also returns the offset after it.
    pub fn read_code(&self, buf: &[u8], bit_offset: usize) -> Result<(ItemCode, usize)> {
        let mut reader = BitReader::at(buf, bit_offset);
        let code = self.catalog.codes().read(&mut reader, self.version)?;
        Ok((code, reader.position()))
    }

    pub fn resolve(&self, code: &ItemCode) -> (&'a ItemTypeDescriptor, ItemSource) {
        self.catalog.registry().lookup_with_source(code)
    }

    /// Decode a stored property list. A list cut short or broken by an
    /// unknown stat is an error in strict mode; otherwise the attributes
    /// read so far are returned.
    pub fn read_properties(
        &self,
        buf: &[u8],
        bit_offset: usize,
    ) -> Result<(Vec<MagicalAttribute>, usize)> {
        if !self.version.stores_properties() {
            return Err(Error::NoStoredProperties(self.version.raw()));
        }
        let codec = self
            .catalog
            .property_codec()
            .with_character_level(self.character_level);
        match codec.decode_at(buf, bit_offset) {
            Ok(decoded) => Ok(decoded),
            Err(PropertyError::Truncated { partial }) if !self.strict => {
                log::warn!(
                    "keeping {} attributes from a truncated property list",
                    partial.len()
                );
                Ok((partial, buf.len() * 8))
            }
            Err(PropertyError::UnknownStat {
                id,
                offset,
                partial,
            }) if !self.strict => {
                log::warn!(
                    "keeping {} attributes read before unknown stat {}",
                    partial.len(),
                    id
                );
                Ok((partial, offset))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn regenerate(
        &self,
        code: &ItemCode,
        quality: LegacyQuality,
        dwb: u32,
        magic_level: u8,
    ) -> Result<LegacyProperties> {
        let generated = self
            .catalog
            .legacy_generator()
            .generate(code, quality, dwb, magic_level)?;
        Ok(generated)
    }

    pub fn read_item(
        &self,
        buf: &[u8],
        code_offset: usize,
        properties: PropertySource,
    ) -> Result<ResolvedItem> {
        let (code, _) = self.read_code(buf, code_offset)?;
        let (descriptor, source) = self.resolve(&code);
        if !descriptor.is_found() {
            log::debug!("{} resolved to no base type", code);
        }

        let (name, mut attributes) = match properties {
            PropertySource::Stored { bit_offset } => {
                let (attributes, _) = self.read_properties(buf, bit_offset)?;
                (descriptor.name.to_string(), attributes)
            }
            PropertySource::Legacy {
                quality,
                dwb,
                magic_level,
            } => {
                let generated = self.regenerate(&code, quality, dwb, magic_level)?;
                (generated.display_name(descriptor.name), generated.attributes)
            }
            PropertySource::None => (descriptor.name.to_string(), Vec::new()),
        };
        group_for_display(&mut attributes);

        Ok(ResolvedItem {
            code,
            descriptor: *descriptor,
            source,
            name,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::{write_bits, BitWriter};
    use crate::properties::MagicalAttribute;

    fn settings(version: SaveVersion, strict: bool) -> DecoderSettings {
        DecoderSettings {
            version,
            strict,
            character_level: 10,
            ..DecoderSettings::default()
        }
    }

    fn record(
        catalog: &Catalog,
        version: SaveVersion,
        code: &str,
        attrs: &[MagicalAttribute],
    ) -> (Vec<u8>, usize) {
        let mut writer = BitWriter::new();
        catalog
            .codes()
            .write(&mut writer, version, &ItemCode::new(code))
            .unwrap();
        let props_at = writer.position();
        catalog.property_codec().encode(&mut writer, attrs).unwrap();
        (writer.into_bytes(), props_at)
    }

    #[test]
    fn reads_stored_item() {
        let catalog = Catalog::new();
        let stats = catalog.stats();
        let codec = catalog.property_codec();
        let attrs = vec![
            codec.attribute(stats.get(39), vec![20]),
            codec.attribute(stats.get(41), vec![20]),
            codec.attribute(stats.get(43), vec![20]),
            codec.attribute(stats.get(45), vec![20]),
            codec.attribute(stats.get(7), vec![15]),
        ];

        for version in [SaveVersion::V110, SaveVersion::Resurrected] {
            let (buf, props_at) = record(&catalog, version, "rin", &attrs);
            let resolver = ItemResolver::new(&catalog, &settings(version, true));
            let item = resolver
                .read_item(&buf, 0, PropertySource::Stored { bit_offset: props_at })
                .unwrap();
            assert_eq!(item.code, ItemCode::new("rin"));
            assert_eq!(item.name, "Ring");
            assert_eq!(item.source, ItemSource::Misc);
            assert_eq!(item.attributes.len(), 5);
            assert_eq!(item.attributes[0].description, "All Resistances +{0}");
            assert!(!item.attributes[1].visible);
        }
    }

    #[test]
    fn truncation_depends_on_strictness() {
        let catalog = Catalog::new();
        let codec = catalog.property_codec();
        let attrs = vec![
            codec.attribute(catalog.stats().get(0), vec![10]),
            codec.attribute(catalog.stats().get(7), vec![25]),
        ];
        let (mut buf, props_at) = record(&catalog, SaveVersion::V110, "amu", &attrs);
        // Keep both records, drop the terminator.
        buf.truncate((props_at + 17 + 18 + 7) / 8);

        let strict = ItemResolver::new(&catalog, &settings(SaveVersion::V110, true));
        assert!(matches!(
            strict.read_properties(&buf, props_at),
            Err(Error::Property(PropertyError::Truncated { .. }))
        ));

        let lenient = ItemResolver::new(&catalog, &settings(SaveVersion::V110, false));
        let (partial, end) = lenient.read_properties(&buf, props_at).unwrap();
        assert_eq!(partial.len(), 2);
        assert_eq!(end, buf.len() * 8);
    }

    #[test]
    fn lenient_mode_keeps_attributes_before_unknown_stat() {
        let catalog = Catalog::new();
        let codec = catalog.property_codec();
        let attrs = vec![
            codec.attribute(catalog.stats().get(19), vec![40]),
            codec.attribute(catalog.stats().get(7), vec![12]),
        ];
        let (mut buf, props_at) = record(&catalog, SaveVersion::Resurrected, "cap", &attrs);
        let bad_at = props_at + (9 + 10) + (9 + 9);
        write_bits(&mut buf, bad_at, 9, 8).unwrap();

        let strict = ItemResolver::new(&catalog, &settings(SaveVersion::Resurrected, true));
        assert!(matches!(
            strict.read_properties(&buf, props_at),
            Err(Error::Property(PropertyError::UnknownStat { id: 8, .. }))
        ));

        let lenient = ItemResolver::new(&catalog, &settings(SaveVersion::Resurrected, false));
        let (partial, end) = lenient.read_properties(&buf, props_at).unwrap();
        assert_eq!(partial.len(), 2);
        assert_eq!(partial[1].values, vec![12]);
        assert_eq!(end, bad_at);
    }

    #[test]
    fn legacy_items_regenerate() {
        let catalog = Catalog::new();
        let mut writer = BitWriter::new();
        catalog
            .codes()
            .write(&mut writer, SaveVersion::V100, &ItemCode::new("rin"))
            .unwrap();
        let buf = writer.into_bytes();

        let resolver = ItemResolver::new(&catalog, &settings(SaveVersion::V100, true));
        let source = PropertySource::Legacy {
            quality: LegacyQuality::Normal,
            dwb: 0x1234_5678,
            magic_level: 30,
        };
        let first = resolver.read_item(&buf, 0, source).unwrap();
        let second = resolver.read_item(&buf, 0, source).unwrap();
        assert_eq!(first, second);
        assert!(!first.attributes.is_empty());
        assert!(first.name.contains("Ring"));

        assert!(matches!(
            resolver.read_properties(&buf, 10),
            Err(Error::NoStoredProperties(71))
        ));
    }

    #[test]
    fn unknown_code_resolves_to_sentinel() {
        let catalog = Catalog::new();
        let resolver = ItemResolver::new(&catalog, &DecoderSettings::default());
        let (descriptor, source) = resolver.resolve(&ItemCode::new("zzz"));
        assert!(!descriptor.is_found());
        assert_eq!(source, ItemSource::NotFound);

        let (thrown, source) = resolver.resolve(&ItemCode::new("tkf"));
        assert!(thrown.is_thrown_weapon());
        assert_eq!(source, ItemSource::Stackable);
    }
}
