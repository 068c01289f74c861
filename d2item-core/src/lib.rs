//! Item and magical property codec for classic and Resurrected save files.
//!
//! The static tables live in a [`Catalog`]; the codecs borrow from it. Start
//! from [`Catalog::global`] or build one with [`Catalog::new`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod bits;
pub mod catalog;
pub mod code;
pub mod export;
pub mod item;
mod item_data;
pub mod item_types;
pub mod legacy;
mod legacy_data;
pub mod prng;
pub mod properties;
pub mod skills;
pub mod stats;

pub use bits::{BitError, BitReader, BitWriter};
pub use catalog::Catalog;
pub use code::{CodeError, ItemCode, ItemCodeCodec, SaveVersion};
pub use export::{ExportError, JsonDialect};
pub use item::{ItemResolver, PropertySource, ResolvedItem};
pub use item_types::{ItemSource, ItemTypeDescriptor, ItemTypeRegistry};
pub use legacy::{DwbSearch, LegacyError, LegacyGenerator, LegacyProperties, LegacyQuality};
pub use prng::Prng;
pub use properties::{MagicalAttribute, OpValue, PropertyCodec, PropertyError};
pub use skills::{ExternalDataError, SkillTable};
pub use stats::{StatDefinition, StatTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderSettings {
    /// Save version the input was written by.
    pub version: SaveVersion,
    /// Base for level dependent values.
    pub character_level: u32,
    pub json_dialect: JsonDialect,
    /// Treat a property list without a terminator as an error instead of
    /// keeping what was read.
    pub strict: bool,
    pub log_level: String,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            version: SaveVersion::Resurrected,
            character_level: 1,
            json_dialect: JsonDialect::Simple,
            strict: true,
            log_level: "info".to_string(),
        }
    }
}

impl DecoderSettings {
    pub fn from_json(text: &str) -> Result<Self> {
        let settings: DecoderSettings = serde_json::from_str(text)?;
        if settings.character_level == 0 {
            return Err(Error::Config("character_level must be at least 1".into()));
        }
        Ok(settings)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Bits(#[from] BitError),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Property(#[from] PropertyError),
    #[error(transparent)]
    Legacy(#[from] LegacyError),
    #[error("external data: {0}")]
    ExternalData(#[from] ExternalDataError),
    #[error("JSON attribute: {0}")]
    Export(#[from] ExportError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("version {0} saves keep a seed, not a property list")]
    NoStoredProperties(u32),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_fill_defaults() {
        let settings = DecoderSettings::from_json(r#"{"version": 96, "strict": false}"#).unwrap();
        assert_eq!(settings.version, SaveVersion::V110);
        assert!(!settings.strict);
        assert_eq!(settings.character_level, 1);
        assert_eq!(settings.json_dialect, JsonDialect::Simple);

        let settings =
            DecoderSettings::from_json(r#"{"json_dialect": "serialized", "log_level": "trace"}"#)
                .unwrap();
        assert_eq!(settings.json_dialect, JsonDialect::Serialized);
        assert_eq!(settings.version, SaveVersion::Resurrected);
    }

    #[test]
    fn settings_reject_bad_values() {
        assert!(matches!(
            DecoderSettings::from_json(r#"{"version": 12}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            DecoderSettings::from_json(r#"{"character_level": 0}"#),
            Err(Error::Config(_))
        ));
    }
}
