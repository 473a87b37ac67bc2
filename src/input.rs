//! Parsing of the map file format.
//!
//! Each line is a record `('NodeA', 'NodeB', cost, [x1, y1], [x2, y2])`:
//! two node labels, a non-negative edge cost, and the coordinates of
//! each endpoint. Node labels are uppercased on load.

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use anyhow::Context;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use pathsearch::{Graph, Point};

lazy_static! {
    static ref RECORD: Regex = Regex::new(
        r"^\('(?P<a>[^']+)',\s*'(?P<b>[^']+)',\s*(?P<w>\d+(?:\.\d+)?),\s*\[(?P<ax>-?\d+(?:\.\d+)?),\s*(?P<ay>-?\d+(?:\.\d+)?)\],\s*\[(?P<bx>-?\d+(?:\.\d+)?),\s*(?P<by>-?\d+(?:\.\d+)?)\]\)$"
    )
    .unwrap();
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Not a valid edge record: {0:?}")]
    InvalidRecord(String),
}

/// One parsed line of a map file.
#[derive(Debug, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub cost: f64,
    pub from_at: Point,
    pub to_at: Point,
}

impl FromStr for EdgeRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = RECORD
            .captures(s.trim())
            .ok_or_else(|| ParseError::InvalidRecord(s.to_string()))?;

        let number = |name: &str| -> Result<f64, ParseError> {
            caps[name]
                .parse()
                .map_err(|_| ParseError::InvalidRecord(s.to_string()))
        };

        Ok(EdgeRecord {
            from: caps["a"].to_uppercase(),
            to: caps["b"].to_uppercase(),
            cost: number("w")?,
            from_at: Point::new(number("ax")?, number("ay")?),
            to_at: Point::new(number("bx")?, number("by")?),
        })
    }
}

/// Read a map and build the graph. Blank lines are skipped; malformed
/// lines are reported with their line number.
pub fn load<R: Read>(input: R) -> Result<Graph, anyhow::Error> {
    let reader = BufReader::new(input);
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let record: EdgeRecord = line
            .parse()
            .with_context(|| format!("Map line {}", index + 1))?;
        graph.add_edge(
            &record.from,
            &record.to,
            record.cost,
            record.from_at,
            record.to_at,
        );
    }

    Ok(graph)
}
