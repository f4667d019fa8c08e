use clap::Parser;
use rgbamatch::io::load_rgba_png;
use rgbamatch::{
    apply_mask, build_mask, check_crop, check_masked_crop, find_crop, find_masked_crop,
    find_pillars, find_puddle_with, needle_hash, ColorRange, Connectivity, MatchResult, OwnedRgba,
    Pillar, Point,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "RgbaMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RangeConfig {
    min_red: u8,
    max_red: u8,
    min_green: u8,
    max_green: u8,
    min_blue: u8,
    max_blue: u8,
}

impl Default for RangeConfig {
    fn default() -> Self {
        let range = ColorRange::default();
        Self {
            min_red: range.min_red,
            max_red: range.max_red,
            min_green: range.min_green,
            max_green: range.max_green,
            min_blue: range.min_blue,
            max_blue: range.max_blue,
        }
    }
}

impl From<RangeConfig> for ColorRange {
    fn from(value: RangeConfig) -> Self {
        ColorRange::new(
            (value.min_red, value.max_red),
            (value.min_green, value.max_green),
            (value.min_blue, value.max_blue),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ConnectivityConfig {
    #[default]
    FourWay,
    EightWay,
}

impl From<ConnectivityConfig> for Connectivity {
    fn from(value: ConnectivityConfig) -> Self {
        match value {
            ConnectivityConfig::FourWay => Connectivity::FourWay,
            ConnectivityConfig::EightWay => Connectivity::EightWay,
        }
    }
}

fn default_max_pixels() -> usize {
    65536
}

fn default_pillar_count() -> usize {
    10
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Task {
    Find {
        needle_path: String,
        #[serde(default)]
        mask: Option<String>,
    },
    Check {
        needle_path: String,
        x: isize,
        y: isize,
        #[serde(default)]
        mask: Option<String>,
    },
    Puddle {
        #[serde(default)]
        range: RangeConfig,
        #[serde(default)]
        start_row: usize,
        #[serde(default = "default_max_pixels")]
        max_pixels: usize,
        #[serde(default)]
        connectivity: ConnectivityConfig,
    },
    Pillars {
        #[serde(default)]
        range: RangeConfig,
        #[serde(default = "default_pillar_count")]
        count: usize,
    },
}

#[derive(Debug, Deserialize)]
struct Config {
    haystack_path: String,
    #[serde(default)]
    output_path: Option<String>,
    task: Task,
}

#[derive(Debug, Serialize)]
struct FindRecord {
    count: usize,
    last: Option<[usize; 2]>,
}

impl From<MatchResult> for FindRecord {
    fn from(value: MatchResult) -> Self {
        Self {
            count: value.count,
            last: value.last_match().map(|(x, y)| [x, y]),
        }
    }
}

#[derive(Debug, Serialize)]
struct PillarRecord {
    height: i32,
    x: i32,
    top: i32,
    bottom: i32,
}

impl From<Pillar> for PillarRecord {
    fn from(value: Pillar) -> Self {
        Self {
            height: value.height,
            x: value.x,
            top: value.top,
            bottom: value.bottom,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Output {
    Find(FindRecord),
    Check { matched: bool },
    Puddle { size: usize, pixels: Vec<[i32; 2]> },
    Pillars { pillars: Vec<PillarRecord> },
}

fn parse_mask(text: &str) -> Result<u32, Box<dyn std::error::Error>> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    Ok(u32::from_str_radix(digits, 16)?)
}

/// Loads a needle, masking it when a mask is configured.
fn load_needle(
    path: &str,
    mask: Option<&str>,
) -> Result<(OwnedRgba, Option<u32>), Box<dyn std::error::Error>> {
    let needle = load_rgba_png(path)?;
    let Some(mask) = mask.map(parse_mask).transpose()? else {
        return Ok((needle, None));
    };
    let (width, height) = (needle.width(), needle.height());
    let mut data = needle.into_raw();
    apply_mask(&mut data, build_mask(mask));
    Ok((OwnedRgba::new(data, width, height)?, Some(mask)))
}

fn run(haystack: &mut OwnedRgba, task: Task) -> Result<Output, Box<dyn std::error::Error>> {
    match task {
        Task::Find { needle_path, mask } => {
            let (needle, mask) = load_needle(&needle_path, mask.as_deref())?;
            let hash = needle_hash(needle.view());
            let mut scratch = vec![0u32; haystack.width()];
            let result = match mask {
                Some(mask) => {
                    find_masked_crop(haystack.view(), needle.view(), mask, hash, &mut scratch)?
                }
                None => find_crop(haystack.view(), needle.view(), hash, &mut scratch)?,
            };
            Ok(Output::Find(result.into()))
        }
        Task::Check {
            needle_path,
            x,
            y,
            mask,
        } => {
            let (needle, mask) = load_needle(&needle_path, mask.as_deref())?;
            let matched = match mask {
                Some(mask) => check_masked_crop(haystack.view(), needle.view(), x, y, mask),
                None => check_crop(haystack.view(), needle.view(), x, y),
            };
            Ok(Output::Check { matched })
        }
        Task::Puddle {
            range,
            start_row,
            max_pixels,
            connectivity,
        } => {
            if max_pixels == 0 {
                return Err("max_pixels must be at least 1".into());
            }
            let mut out = vec![Point::default(); max_pixels];
            let size = find_puddle_with(
                &mut haystack.view_mut(),
                range.into(),
                start_row,
                connectivity.into(),
                &mut out,
            )?;
            let pixels = out[..size].iter().map(|p| [p.x, p.y]).collect();
            Ok(Output::Puddle { size, pixels })
        }
        Task::Pillars { range, count } => {
            if count == 0 {
                return Err("count must be at least 1".into());
            }
            let mut out = vec![Pillar::default(); count];
            let filled = find_pillars(haystack.view(), range.into(), &mut out)?;
            let pillars = out.into_iter().take(filled).map(PillarRecord::from).collect();
            Ok(Output::Pillars { pillars })
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("rgbamatch=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.haystack_path.is_empty() {
        return Err("haystack_path must be set in the config".into());
    }

    let mut haystack = load_rgba_png(&config.haystack_path)?;
    tracing::info!(
        width = haystack.width(),
        height = haystack.height(),
        "loaded haystack"
    );
    let output = run(&mut haystack, config.task)?;
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
