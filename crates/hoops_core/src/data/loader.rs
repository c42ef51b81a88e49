//! Custom player pools from JSON or CSV
//!
//! JSON files hold an array of `PlayerProfile` objects. CSV files use the same
//! column names, with `pos_secondary` written as `PF|C` (empty for none).

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{HoopsError, Result};
use crate::models::{Era, Player, PlayerProfile, Position};

pub fn parse_pool_json(json: &str) -> Result<Vec<Player>> {
    let profiles: Vec<PlayerProfile> = serde_json::from_str(json)?;
    build_pool(profiles)
}

pub fn load_pool_json(path: &Path) -> Result<Vec<Player>> {
    let content = fs::read_to_string(path)?;
    let pool = parse_pool_json(&content)?;
    log::info!("Loaded {} players from {}", pool.len(), path.display());
    Ok(pool)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    pos_primary: String,
    #[serde(default)]
    pos_secondary: String,
    era: String,
    ppg: f32,
    rpg: f32,
    apg: f32,
    ts: f32,
    three_pct: f32,
    ft_pct: f32,
    obpm: f32,
    dbpm: f32,
    ws48: f32,
    three_rate: f32,
    height_in: u8,
    weight_lb: u16,
}

impl CsvRow {
    fn into_profile(self) -> Result<PlayerProfile> {
        let invalid = |reason: String| HoopsError::InvalidPlayer { name: self.name.clone(), reason };

        let pos_primary =
            self.pos_primary.parse::<Position>().map_err(|e| invalid(e.to_string()))?;
        let pos_secondary = self
            .pos_secondary
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Position>().map_err(|e| invalid(e.to_string())))
            .collect::<Result<Vec<_>>>()?;
        let era = self.era.parse::<Era>().map_err(|_| invalid(format!("unknown era '{}'", self.era)))?;

        Ok(PlayerProfile {
            name: self.name,
            pos_primary,
            pos_secondary,
            era,
            ppg: self.ppg,
            rpg: self.rpg,
            apg: self.apg,
            ts: self.ts,
            three_pct: self.three_pct,
            ft_pct: self.ft_pct,
            obpm: self.obpm,
            dbpm: self.dbpm,
            ws48: self.ws48,
            three_rate: self.three_rate,
            height_in: self.height_in,
            weight_lb: self.weight_lb,
        })
    }
}

pub fn parse_pool_csv<R: std::io::Read>(reader: R) -> Result<Vec<Player>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut profiles = Vec::new();
    for record in rdr.deserialize::<CsvRow>() {
        profiles.push(record?.into_profile()?);
    }
    build_pool(profiles)
}

pub fn load_pool_csv(path: &Path) -> Result<Vec<Player>> {
    let file = fs::File::open(path)?;
    let pool = parse_pool_csv(file)?;
    log::info!("Loaded {} players from {}", pool.len(), path.display());
    Ok(pool)
}

/// Load by extension: `.csv` as CSV, anything else as JSON.
pub fn load_pool(path: &Path) -> Result<Vec<Player>> {
    let is_csv =
        path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        load_pool_csv(path)
    } else {
        load_pool_json(path)
    }
}

fn build_pool(profiles: Vec<PlayerProfile>) -> Result<Vec<Player>> {
    validate_profiles(&profiles)?;
    Ok(profiles.into_iter().map(Player::new).collect())
}

/// Reject the whole pool on the first bad row.
pub fn validate_profiles(profiles: &[PlayerProfile]) -> Result<()> {
    let mut seen = HashSet::new();
    for p in profiles {
        let invalid = |reason: &str| {
            log::warn!("Rejecting player pool: {} ({})", p.name, reason);
            HoopsError::InvalidPlayer { name: p.name.clone(), reason: reason.to_string() }
        };

        if p.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !seen.insert(p.name.to_lowercase()) {
            return Err(HoopsError::DuplicatePlayer(p.name.clone()));
        }
        for (label, value) in [
            ("ts", p.ts),
            ("three_pct", p.three_pct),
            ("ft_pct", p.ft_pct),
            ("three_rate", p.three_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(&format!("{label} must be within 0..=1, got {value}")));
            }
        }
        if p.ppg < 0.0 || p.rpg < 0.0 || p.apg < 0.0 {
            return Err(invalid("per-game averages must be non-negative"));
        }
        if p.height_in == 0 || p.weight_lb == 0 {
            return Err(invalid("height and weight must be positive"));
        }
    }
    Ok(())
}
