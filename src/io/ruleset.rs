//! Built-in rule presets and the line-based rule file format
//!
//! A rule file holds one rule per line:
//!
//! ```text
//! # tile  directions      : allowed tiles
//! H       left,right      : H C E EI T TI
//! ```
//!
//! Tiles are written with their short codes, directions by name. Blank lines
//! and `#` comments are ignored.

use crate::algorithm::constraints::AdjacencyRule;
use crate::io::error::{GenerationError, Result, rule_parse_error};
use crate::spatial::tiles::Direction::{Down, Left, Right, Up};
use crate::spatial::tiles::TileType::{
    Cross, Horizontal, TeeDown, TeeLeft, TeeRight, TeeUp, Vertical,
};
use crate::spatial::tiles::{Direction, TileType};
use clap::ValueEnum;
use std::path::Path;

/// Built-in rule tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulePreset {
    /// Corridor network with crossings and tee junctions
    Network,
    /// Endless horizontal corridor
    Corridor,
    /// Open plaza of crossings
    Plaza,
}

impl RulePreset {
    /// Rules making up the preset
    pub fn rules(self) -> Vec<AdjacencyRule> {
        match self {
            Self::Network => network_rules(),
            Self::Corridor => vec![AdjacencyRule::new(
                Horizontal,
                &[Left, Right],
                &[Horizontal],
            )],
            Self::Plaza => vec![AdjacencyRule::new(Cross, &Direction::ALL, &[Cross])],
        }
    }
}

/// The arena's corridor network
///
/// Straight pieces continue into anything that keeps the corridor open, and
/// crossings pin the tee that faces back into them.
pub fn network_rules() -> Vec<AdjacencyRule> {
    let junctions = [Cross, TeeRight, TeeLeft, TeeDown, TeeUp];
    let continuing = |straight: TileType| {
        let mut allowed = vec![straight];
        allowed.extend(junctions);
        allowed
    };
    vec![
        AdjacencyRule::new(Horizontal, &[Right, Left], &continuing(Horizontal)),
        AdjacencyRule::new(Vertical, &[Up, Down], &continuing(Vertical)),
        AdjacencyRule::new(Cross, &[Left, Right], &[Horizontal, TeeDown, TeeUp, Cross]),
        AdjacencyRule::new(Cross, &[Up, Down], &[Vertical, TeeRight, TeeLeft, Cross]),
        AdjacencyRule::new(Cross, &[Up], &[TeeDown]),
        AdjacencyRule::new(Cross, &[Down], &[TeeUp]),
        AdjacencyRule::new(Cross, &[Left], &[TeeRight]),
        AdjacencyRule::new(Cross, &[Right], &[TeeLeft]),
        AdjacencyRule::new(TeeRight, &[Right, Down, Up], &[Vertical, Cross, TeeDown, TeeUp]),
        AdjacencyRule::new(TeeLeft, &[Left, Down, Up], &[Vertical, Cross, TeeDown, TeeUp]),
        AdjacencyRule::new(
            TeeDown,
            &[Right, Left, Down],
            &[Horizontal, Cross, TeeRight, TeeLeft, Vertical, TeeUp],
        ),
        AdjacencyRule::new(
            TeeUp,
            &[Right, Left, Up],
            &[Horizontal, Cross, TeeRight, TeeLeft, Vertical, TeeDown],
        ),
    ]
}

/// Parse rules from rule file text
///
/// # Errors
///
/// Returns [`GenerationError::RuleParse`] naming the first malformed line.
pub fn parse_rules(text: &str) -> Result<Vec<AdjacencyRule>> {
    let mut rules = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        rules.push(parse_line(line, line_number)?);
    }

    Ok(rules)
}

fn parse_line(line: &str, line_number: usize) -> Result<AdjacencyRule> {
    let (head, tail) = line
        .split_once(':')
        .ok_or_else(|| rule_parse_error(line_number, &"expected ':' between directions and allowed tiles"))?;

    let mut head_fields = head.split_whitespace();
    let tile_code = head_fields
        .next()
        .ok_or_else(|| rule_parse_error(line_number, &"missing tile code"))?;
    let tile = parse_tile(tile_code, line_number)?;

    let directions = head_fields
        .flat_map(|field| field.split(','))
        .filter(|name| !name.is_empty())
        .map(|name| {
            Direction::from_name(name)
                .ok_or_else(|| rule_parse_error(line_number, &format!("unknown direction '{name}'")))
        })
        .collect::<Result<Vec<_>>>()?;
    if directions.is_empty() {
        return Err(rule_parse_error(line_number, &"no directions given"));
    }

    let allowed = tail
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|code| !code.is_empty())
        .map(|code| parse_tile(code, line_number))
        .collect::<Result<Vec<_>>>()?;
    if allowed.is_empty() {
        return Err(rule_parse_error(line_number, &"no allowed tiles given"));
    }

    Ok(AdjacencyRule {
        tile,
        directions,
        allowed,
    })
}

fn parse_tile(code: &str, line_number: usize) -> Result<TileType> {
    TileType::from_code(code)
        .ok_or_else(|| rule_parse_error(line_number, &format!("unknown tile code '{code}'")))
}

/// Read and parse a rule file
///
/// # Errors
///
/// Returns an error if the file cannot be read or a line is malformed.
pub fn load_rules(path: &Path) -> Result<Vec<AdjacencyRule>> {
    let text = std::fs::read_to_string(path).map_err(|source| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read rule file",
        source,
    })?;
    parse_rules(&text)
}

/// Render rules in the rule file format
pub fn format_rules(rules: &[AdjacencyRule]) -> String {
    rules
        .iter()
        .map(|rule| {
            let directions: Vec<&str> = rule.directions.iter().map(|d| d.name()).collect();
            let allowed: Vec<&str> = rule.allowed.iter().map(|t| t.code()).collect();
            format!(
                "{:<4} {:<16} : {}\n",
                rule.tile.code(),
                directions.join(","),
                allowed.join(" ")
            )
        })
        .collect()
}
