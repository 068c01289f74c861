use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use serde_json::json;
use std::path::PathBuf;

use d2item_core::export::{from_serialized, to_json};
use d2item_core::{
    BitReader, BitWriter, Catalog, DecoderSettings, DwbSearch, Error, ItemCode, ItemResolver,
    JsonDialect, LegacyQuality, Result, SaveVersion,
};

#[derive(Debug, Parser)]
#[command(name = "d2item", version, about = "Item code and magical property decoder")]
struct Cli {
    /// JSON file with decoder settings; flags below override it.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Raw save version (71, 87, 89, 92, 96, 97, 98).
    #[arg(long = "save-version", global = true)]
    save_version: Option<u32>,

    #[arg(long, global = true)]
    level: Option<u32>,

    #[arg(long, global = true, value_enum)]
    dialect: Option<Dialect>,

    /// Keep the attributes read before a missing terminator or unknown stat.
    #[arg(long, global = true)]
    lenient: bool,

    /// -v for debug output, -vv for trace.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum Dialect {
    Simple,
    Serialized,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the base type behind an item code.
    Lookup { code: String },
    #[command(subcommand)]
    Code(CodeCommand),
    #[command(subcommand)]
    Props(PropsCommand),
    #[command(subcommand)]
    Legacy(LegacyCommand),
}

#[derive(Debug, Subcommand)]
enum CodeCommand {
    /// Read a type code from hex bytes.
    Decode(HexInput),
    /// Write a type code and print the bytes as hex.
    Encode { code: String },
}

#[derive(Debug, Subcommand)]
enum PropsCommand {
    /// Read a property list from hex bytes.
    Decode(HexInput),
    /// Write a serialized-dialect JSON array; `@path` reads it from a file.
    Encode { json: String },
}

#[derive(Debug, Args)]
struct HexInput {
    hex: String,
    /// Bit offset of the first field.
    #[arg(long, default_value_t = 0)]
    offset: usize,
}

#[derive(Debug, Subcommand)]
enum LegacyCommand {
    /// Replay the roll for a stored seed.
    Generate {
        code: String,
        /// n, x, e, s, t or u.
        quality: char,
        #[arg(value_parser = parse_u32)]
        dwb: u32,
        magic_level: u8,
    },
    /// Find a seed that lands on a set item's offset.
    DwbSearch {
        code: String,
        set_id: u16,
        magic_level: u8,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn parse_u32(text: &str) -> std::result::Result<u32, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("'{}': {}", text, e))
}

/// Hex bytes; whitespace between digits is ignored.
fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.split_whitespace().collect();
    hex::decode(&digits).map_err(|e| Error::Config(format!("bad hex input '{}': {}", text, e)))
}

fn load_settings(cli: &Cli) -> Result<DecoderSettings> {
    let mut settings = match &cli.config {
        Some(path) => DecoderSettings::from_json(&std::fs::read_to_string(path)?)?,
        None => DecoderSettings::default(),
    };
    if let Some(raw) = cli.save_version {
        settings.version = SaveVersion::try_from(raw)?;
    }
    if let Some(level) = cli.level {
        if level == 0 {
            return Err(Error::Config("--level must be at least 1".into()));
        }
        settings.character_level = level;
    }
    if let Some(dialect) = cli.dialect {
        settings.json_dialect = match dialect {
            Dialect::Simple => JsonDialect::Simple,
            Dialect::Serialized => JsonDialect::Serialized,
        };
    }
    if cli.lenient {
        settings.strict = false;
    }
    match cli.verbose {
        0 => {}
        1 => settings.log_level = "debug".into(),
        _ => settings.log_level = "trace".into(),
    }
    Ok(settings)
}

fn init_logging(level: log::LevelFilter) -> std::result::Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli)?;
    let level = settings
        .log_level
        .parse::<log::LevelFilter>()
        .map_err(|_| Error::Config(format!("unknown log level '{}'", settings.log_level)))?;
    if let Err(err) = init_logging(level) {
        eprintln!("Logging disabled: {err}");
    }
    log::debug!("settings: {:?}", settings);

    let catalog = Catalog::global();
    match cli.command {
        Command::Lookup { code } => {
            let resolver = ItemResolver::new(catalog, &settings);
            let (descriptor, source) = resolver.resolve(&ItemCode::new(&code));
            if !descriptor.is_found() {
                return Err(Error::Config(format!("'{}' is not a known item code", code)));
            }
            let out = json!({ "Source": format!("{:?}", source), "Type": descriptor });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Code(CodeCommand::Decode(input)) => {
            let buf = parse_hex(&input.hex)?;
            let mut reader = BitReader::at(&buf, input.offset);
            let code = catalog.codes().read(&mut reader, settings.version)?;
            println!("{}", code.trimmed());
        }
        Command::Code(CodeCommand::Encode { code }) => {
            let mut writer = BitWriter::new();
            catalog
                .codes()
                .write(&mut writer, settings.version, &ItemCode::new(&code))?;
            println!("{} ({} bits)", hex::encode(writer.as_bytes()), writer.position());
        }
        Command::Props(PropsCommand::Decode(input)) => {
            let buf = parse_hex(&input.hex)?;
            let resolver = ItemResolver::new(catalog, &settings);
            let (attributes, end) = resolver.read_properties(&buf, input.offset)?;
            log::info!("property list ends at bit {}", end);
            let out = to_json(&attributes, settings.json_dialect, catalog);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Props(PropsCommand::Encode { json }) => {
            let text = match json.strip_prefix('@') {
                Some(path) => std::fs::read_to_string(path)?,
                None => json,
            };
            let value: serde_json::Value = serde_json::from_str(&text)?;
            let items = value
                .as_array()
                .ok_or_else(|| Error::Config("expected a JSON array of attributes".into()))?;
            let attributes = items
                .iter()
                .map(|item| from_serialized(item, catalog.stats()))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            let bytes = catalog
                .property_codec()
                .with_character_level(settings.character_level)
                .encode_to_vec(&attributes)?;
            println!("{}", hex::encode(&bytes));
        }
        Command::Legacy(LegacyCommand::Generate {
            code,
            quality,
            dwb,
            magic_level,
        }) => {
            let quality = LegacyQuality::from_letter(quality)
                .ok_or_else(|| Error::Config(format!("unknown quality letter '{}'", quality)))?;
            let code = ItemCode::new(&code);
            let resolver = ItemResolver::new(catalog, &settings);
            let generated = resolver.regenerate(&code, quality, dwb, magic_level)?;
            let (descriptor, _) = resolver.resolve(&code);
            let out = json!({
                "Name": generated.display_name(descriptor.name),
                "Draws": generated.draw_count,
                "Attributes": to_json(&generated.attributes, settings.json_dialect, catalog),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Legacy(LegacyCommand::DwbSearch {
            code,
            set_id,
            magic_level,
            seed,
        }) => {
            let variant = catalog.legacy().set_variant(&ItemCode::new(&code), set_id)?;
            let mut rng = StdRng::seed_from_u64(seed);
            let search = catalog
                .legacy_generator()
                .search_set_dwb(variant, magic_level, &mut rng);
            match search {
                DwbSearch::NotApplicable => println!("{} needs no particular seed", code),
                DwbSearch::Found { dwb, attempts } => {
                    println!("{:#010x} after {} tries", dwb, attempts)
                }
                DwbSearch::Exhausted { dwb } => {
                    println!("no match; last seed tried {:#010x}", dwb)
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_input_ignores_spacing() {
        assert_eq!(parse_hex("de ad\nbe ef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
        assert!(matches!(parse_hex("abc"), Err(Error::Config(_))));
        assert!(matches!(parse_hex("zz"), Err(Error::Config(_))));
    }

    #[test]
    fn numbers_accept_hex_prefix() {
        assert_eq!(parse_u32("0x1F"), Ok(31));
        assert_eq!(parse_u32("666"), Ok(666));
        assert!(parse_u32("0xZZ").is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "d2item",
            "--save-version",
            "96",
            "--lenient",
            "-vv",
            "props",
            "decode",
            "ff01",
        ]);
        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.version, SaveVersion::V110);
        assert!(!settings.strict);
        assert_eq!(settings.log_level, "trace");

        let bad = Cli::parse_from(["d2item", "--save-version", "12", "lookup", "hax"]);
        assert!(matches!(load_settings(&bad), Err(Error::Code(_))));
    }
}
