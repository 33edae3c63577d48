use serde::Serialize;
use thiserror::Error;

use super::DetailRecord;

/// Unit glyph used in play-count display strings, meaning 10^8.
pub const HUNDRED_MILLION_UNIT: char = '亿';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Play count \"{value}\" does not end with the {unit} unit")]
    MissingUnit { value: String, unit: char },

    #[error("Play count \"{value}\" is not a number")]
    NotNumeric { value: String },
}

/// A detail row together with its parsed play count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedPlayCount {
    pub record: DetailRecord,
    pub play_count_hundred_million: f64,
}

/// Parses a display string such as "63.5亿" into 63.5.
pub fn parse_play_count(display: &str) -> Result<f64, ParseError> {
    let number = display
        .strip_suffix(HUNDRED_MILLION_UNIT)
        .ok_or_else(|| ParseError::MissingUnit {
            value: display.to_owned(),
            unit: HUNDRED_MILLION_UNIT,
        })?;

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParseError::NotNumeric {
            value: display.to_owned(),
        }),
    }
}

/// Sorts the records by parsed play count, highest first, keeping the input
/// order for equal values. The first unparsable record aborts the ranking.
pub fn ranked_play_counts(records: &[DetailRecord]) -> Result<Vec<RankedPlayCount>, ParseError> {
    let mut ranked = records
        .iter()
        .map(|record| {
            Ok(RankedPlayCount {
                play_count_hundred_million: parse_play_count(&record.play_count_display)?,
                record: record.clone(),
            })
        })
        .collect::<Result<Vec<_>, ParseError>>()?;

    // sort_by is stable
    ranked.sort_by(|a, b| {
        b.play_count_hundred_million
            .total_cmp(&a.play_count_hundred_million)
    });
    Ok(ranked)
}

pub fn rank_by_play_count(records: &[DetailRecord]) -> Result<Vec<DetailRecord>, ParseError> {
    Ok(ranked_play_counts(records)?
        .into_iter()
        .map(|ranked| ranked.record)
        .collect())
}
