use std::{error::Error, fmt};

use crate::{models::price::Price, network};

/// ₹10 per kilometre, i.e. one paisa per metre.
pub const RATE_PAISE_PER_METRE: u64 = 1;

/// Price for riding `line` between two named stations.
///
/// The fare is the absolute distance difference times the rate, so it is
/// symmetric in source and destination. A station missing from the chosen
/// line is a validation error, not a zero fare; riding to the station you
/// started from is a zero fare.
pub fn quote(line: &str, source: &str, destination: &str) -> Result<Price, FareError> {
    let line = network::find_line(line).ok_or_else(|| FareError::UnknownLine(line.to_string()))?;
    let source = line
        .station(source)
        .ok_or_else(|| FareError::UnknownStation {
            line: line.name.to_string(),
            station: source.to_string(),
        })?;
    let destination = line
        .station(destination)
        .ok_or_else(|| FareError::UnknownStation {
            line: line.name.to_string(),
            station: destination.to_string(),
        })?;

    let metres = source
        .distance_from_start
        .abs_diff(destination.distance_from_start);
    Ok(Price::from_paise(u64::from(metres) * RATE_PAISE_PER_METRE))
}

#[derive(Debug)]
pub enum FareError {
    UnknownLine(String),
    UnknownStation { line: String, station: String },
}

impl fmt::Display for FareError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownLine(line) => write!(f, "Unknown line {line}"),
            Self::UnknownStation { line, station } => {
                write!(f, "No station {station} on {line}")
            }
        }
    }
}

impl Error for FareError {}
