//! Map text format.
//!
//! ```text
//! 0 0 0 Albany
//! 1 0 3 Boston
//! 2 4 3 New Haven
//! ##ROUTES##
//! 0 1 UNCLAIMED
//! 1 2 RED
//! ```
//!
//! Station lines are `INDEX ROW COL NAME`, where the name runs to the end
//! of the line. Route lines are `ORIGIN DESTINATION OWNER`, referring to
//! stations by their declared index. Blank lines are ignored.

use std::str::FromStr;

use rustc_hash::FxHashMap;

use super::railroad::{MapBuilder, RailroadMap};
use super::station::StationId;
use crate::core::{Baron, BaronsError};

/// Separates the station section from the route section.
pub const ROUTES_MARKER: &str = "##ROUTES##";

/// Owner code of a route nobody has claimed.
pub const UNCLAIMED: &str = "UNCLAIMED";

/// Parse a map from its text form.
pub fn parse_map(input: &str) -> Result<RailroadMap, BaronsError> {
    let mut builder = MapBuilder::new();
    let mut declared: FxHashMap<u32, StationId> = FxHashMap::default();
    let mut in_routes = false;

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == ROUTES_MARKER {
            in_routes = true;
            continue;
        }

        if !in_routes {
            let mut parts = line.splitn(4, ' ');
            let index: u32 = field(&mut parts, line_no, "station index")?;
            let row: usize = field(&mut parts, line_no, "row")?;
            let col: usize = field(&mut parts, line_no, "column")?;
            let name = parts
                .next()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| BaronsError::format(line_no, "missing station name"))?;

            if declared.contains_key(&index) {
                return Err(BaronsError::format(
                    line_no,
                    format!("station index {index} declared twice"),
                ));
            }
            declared.insert(index, builder.add_station(row, col, name));
        } else {
            let mut parts = line.split_whitespace();
            let origin: u32 = field(&mut parts, line_no, "origin index")?;
            let destination: u32 = field(&mut parts, line_no, "destination index")?;
            let owner_code = parts
                .next()
                .ok_or_else(|| BaronsError::format(line_no, "missing owner"))?;
            if parts.next().is_some() {
                return Err(BaronsError::format(line_no, "trailing data after owner"));
            }

            let owner = if owner_code == UNCLAIMED {
                None
            } else {
                Some(Baron::from_code(owner_code).ok_or_else(|| {
                    BaronsError::format(line_no, format!("unknown owner `{owner_code}`"))
                })?)
            };
            let resolve = |index: u32| {
                declared.get(&index).copied().ok_or_else(|| {
                    BaronsError::format(line_no, format!("unknown station index {index}"))
                })
            };
            builder.add_owned_route(resolve(origin)?, resolve(destination)?, owner);
        }
    }

    builder.build()
}

/// Write a map in the format `parse_map` reads.
///
/// Stations are written with their position in the map as index.
#[must_use]
pub fn write_map(map: &RailroadMap) -> String {
    let mut out = String::new();

    for station in map.stations() {
        out.push_str(&format!(
            "{} {} {} {}\n",
            station.id().raw(),
            station.row(),
            station.col(),
            station.name()
        ));
    }
    out.push_str(ROUTES_MARKER);
    out.push('\n');
    for route in map.routes() {
        let owner = route.owner().map_or(UNCLAIMED, Baron::code);
        out.push_str(&format!(
            "{} {} {}\n",
            route.origin().raw(),
            route.destination().raw(),
            owner
        ));
    }

    out
}

fn field<'a, T: FromStr>(
    parts: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<T, BaronsError> {
    let token = parts
        .next()
        .ok_or_else(|| BaronsError::format(line, format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| BaronsError::format(line, format!("bad {what} `{token}`")))
}
