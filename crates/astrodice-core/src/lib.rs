pub mod catalog;
pub mod roll;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// --- Types ---

/// The energy/action die. Ten classical planets plus the two lunar nodes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(rename = "North Node")]
    NorthNode,
    #[serde(rename = "South Node")]
    SouthNode,
}

/// The style/approach die. The twelve zodiac signs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// The life-area die. A house number constrained to 1-12 at construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl Planet {
    /// Catalog order. Significant for UI cycling only, not for randomness.
    pub const ALL: [Planet; 12] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
        Planet::NorthNode,
        Planet::SouthNode,
    ];

    pub fn name(self) -> &'static str {
        catalog::planet_info(self).name
    }
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    pub fn name(self) -> &'static str {
        catalog::sign_info(self).name
    }
}

impl House {
    pub const ALL: [House; 12] = [
        House(1),
        House(2),
        House(3),
        House(4),
        House(5),
        House(6),
        House(7),
        House(8),
        House(9),
        House(10),
        House(11),
        House(12),
    ];

    pub fn new(number: u8) -> Result<House, String> {
        if (1..=12).contains(&number) {
            Ok(House(number))
        } else {
            Err(format!("house number out of range 1-12: {}", number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Planet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown planet: {}", s))
    }
}

impl FromStr for Sign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sign::ALL
            .iter()
            .copied()
            .find(|g| g.name() == s)
            .ok_or_else(|| format!("unknown sign: {}", s))
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        House::new(number)
    }
}

impl From<House> for u8 {
    fn from(house: House) -> u8 {
        house.0
    }
}

/// One immutable (planet, sign, house) triple. Never mutated after creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    pub planet: Planet,
    pub sign: Sign,
    #[schemars(with = "u8")]
    pub house: House,
}

/// A persisted reading. After creation, only `ai_reading`, `extended_reading`
/// and the mint fields are ever updated — the roll and question are frozen.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: u64,
    pub user_fid: u64,
    pub question: String,
    pub roll: Roll,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_reading: Option<String>,
    #[serde(default)]
    pub is_minted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    #[schemars(with = "String")]
    pub created_at: DateTime<Utc>,
}

// --- Storage ---

/// Resolve the global data directory (~/.astrodice/).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".astrodice")
}

fn reading_filename(id: u64) -> String {
    format!("reading-{}.json", id)
}

fn parse_reading_id(filename: &str) -> Option<u64> {
    filename
        .strip_prefix("reading-")?
        .strip_suffix(".json")?
        .parse()
        .ok()
}

/// List all readings in a directory, newest first.
fn list_readings_in(dir: &Path) -> Result<Vec<Reading>, String> {
    if !dir.exists() {
        return Ok(vec![]);
    }
    let mut readings: Vec<Reading> = fs::read_dir(dir)
        .map_err(|e| e.to_string())?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            parse_reading_id(&name)?;
            let raw = fs::read_to_string(entry.path()).ok()?;
            serde_json::from_str(&raw).ok()
        })
        .collect();
    readings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(readings)
}

fn read_reading_in(dir: &Path, id: u64) -> Result<Reading, String> {
    let path = dir.join(reading_filename(id));
    let raw = fs::read_to_string(&path).map_err(|e| format!("reading {}: {}", id, e))?;
    serde_json::from_str(&raw).map_err(|e| format!("reading {}: {}", id, e))
}

/// Atomic write (temp file + rename) so concurrent readers never observe a
/// half-written reading.
fn write_reading_in(dir: &Path, reading: &Reading) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(reading).map_err(|e| e.to_string())?;
    let tmp = dir.join(format!(".reading-{}.json.tmp", reading.id));
    let path = dir.join(reading_filename(reading.id));
    fs::write(&tmp, json).map_err(|e| e.to_string())?;
    fs::rename(&tmp, &path).map_err(|e| e.to_string())
}

fn delete_reading_in(dir: &Path, id: u64) -> Result<(), String> {
    let path = dir.join(reading_filename(id));
    if path.exists() {
        fs::remove_file(&path).map_err(|e| e.to_string())
    } else {
        Ok(())
    }
}

/// Generate the next reading ID by scanning existing files.
fn next_reading_id_in(dir: &Path) -> Result<u64, String> {
    if !dir.exists() {
        return Ok(1);
    }
    let max = fs::read_dir(dir)
        .map_err(|e| e.to_string())?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            parse_reading_id(&entry.file_name().to_string_lossy())
        })
        .max()
        .unwrap_or(0);
    Ok(max + 1)
}

/// List all stored readings, newest first.
pub fn list_readings() -> Result<Vec<Reading>, String> {
    list_readings_in(&data_dir())
}

pub fn read_reading(id: u64) -> Result<Reading, String> {
    read_reading_in(&data_dir(), id)
}

pub fn write_reading(reading: &Reading) -> Result<(), String> {
    write_reading_in(&data_dir(), reading)
}

pub fn delete_reading(id: u64) -> Result<(), String> {
    delete_reading_in(&data_dir(), id)
}

pub fn next_reading_id() -> Result<u64, String> {
    next_reading_id_in(&data_dir())
}

// --- Post-creation updates ---
//
// The three fields below are the only ones other subsystems may change on a
// stored reading. Everything else is immutable once written.

fn set_ai_reading_in(dir: &Path, id: u64, text: &str) -> Result<Reading, String> {
    let mut reading = read_reading_in(dir, id)?;
    reading.ai_reading = Some(text.to_string());
    write_reading_in(dir, &reading)?;
    Ok(reading)
}

fn set_extended_reading_in(dir: &Path, id: u64, text: &str) -> Result<Reading, String> {
    let mut reading = read_reading_in(dir, id)?;
    if reading.ai_reading.is_none() {
        return Err(format!(
            "reading {} has no base reading; extended readings build on one",
            id
        ));
    }
    reading.extended_reading = Some(text.to_string());
    write_reading_in(dir, &reading)?;
    Ok(reading)
}

fn mark_minted_in(dir: &Path, id: u64, token_id: u64, tx_hash: &str) -> Result<Reading, String> {
    let mut reading = read_reading_in(dir, id)?;
    if reading.is_minted {
        return Err(format!("reading {} is already minted", id));
    }
    reading.is_minted = true;
    reading.token_id = Some(token_id);
    reading.tx_hash = Some(tx_hash.to_string());
    write_reading_in(dir, &reading)?;
    Ok(reading)
}

/// Attach the purchased base interpretation to a stored reading.
pub fn set_ai_reading(id: u64, text: &str) -> Result<Reading, String> {
    set_ai_reading_in(&data_dir(), id, text)
}

/// Attach the extended interpretation. Requires a base reading to exist.
pub fn set_extended_reading(id: u64, text: &str) -> Result<Reading, String> {
    set_extended_reading_in(&data_dir(), id, text)
}

/// Record a successful mint. Rejects double-minting.
pub fn mark_minted(id: u64, token_id: u64, tx_hash: &str) -> Result<Reading, String> {
    mark_minted_in(&data_dir(), id, token_id, tx_hash)
}

// --- AI Settings ---

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AiSettings {
    pub provider: String,
    pub api_key: String,
    pub model: String,
}

fn settings_path() -> PathBuf {
    data_dir().join("settings.json")
}

pub fn read_settings() -> AiSettings {
    let path = settings_path();
    if !path.exists() {
        return AiSettings::default();
    }
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}

pub fn write_settings(settings: &AiSettings) -> Result<(), String> {
    let dir = data_dir();
    fs::create_dir_all(&dir).map_err(|e| e.to_string())?;
    let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
    fs::write(settings_path(), json).map_err(|e| e.to_string())
}

pub fn ai_configured(settings: &AiSettings) -> bool {
    !settings.provider.is_empty()
        && !settings.model.is_empty()
        && (settings.provider == "ollama" || !settings.api_key.is_empty())
}
