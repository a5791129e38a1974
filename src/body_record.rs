//! # IAU report reader
//!
//! Utilities to read the **IAU cartographic report** (a CSV table of body radii) and turn
//! each row into a [`BodyRecord`] usable by the CRS derivation pipeline.
//!
//! ## Overview
//! -----------------
//! This module provides:
//! - [`BodyRecord`], the read-only description of one body (name, NAIF id, axes, rotation,
//!   longitude origin).
//! - [`Axes`], the four radius measurements where `None` means *not provided*.
//! - [`read_iau_report`] / [`read_iau_report_from_reader`], which parse a whole report.
//! - [`detect_report_version`], which finds the report year encoded in the column names.
//!
//! ## Column layout
//! -----------------
//! The report uses fixed column names for the identification of a body (`Body`, `Naif_id`,
//! `rotation`, `origin_long_name`, `origin_lon_pos`) and **year-prefixed** column names for
//! the radii (`IAU2015_Mean`, `IAU2015_Semimajor`, `IAU2015_Axisb`, `IAU2015_Semiminor`).
//! The reader strips the `IAU<year>_` prefix from the header so that a single row type
//! serves every report year.
//!
//! ## Units & Conventions
//! -----------------
//! - Radii are in **meters**.
//! - The value `-1` ([`MISSING_VALUE`]) marks a measurement that is not provided; it is
//!   mapped to `None` at load time.
//! - Empty or `nan` text fields are mapped to `None`.
use std::{fmt, fs::File, io::Read, str::FromStr};

use camino::Utf8Path;
use csv::StringRecord;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    constants::{Meter, NaifId, MISSING_VALUE},
    wkt_errors::WktError,
};

const RADIUS_COLUMNS: [&str; 4] = ["Mean", "Semimajor", "Axisb", "Semiminor"];
const BODY_COLUMNS: [&str; 5] = [
    "Body",
    "Naif_id",
    "rotation",
    "origin_long_name",
    "origin_lon_pos",
];

/// Sense of rotation of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Direct,
    Retrograde,
}

impl FromStr for Rotation {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Rotation::Direct),
            "retrograde" => Ok(Rotation::Retrograde),
            _ => Err(WktError::InvalidRotation(s.to_string())),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Direct => write!(f, "Direct"),
            Rotation::Retrograde => write!(f, "Retrograde"),
        }
    }
}

/// Radius measurements of a body, in meters.
///
/// `None` stands for a measurement the report does not provide.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Axes {
    pub semi_major: Option<Meter>,
    pub semi_minor: Option<Meter>,
    pub axisb: Option<Meter>,
    pub mean: Option<Meter>,
}

/// Map the report sentinel to `None`.
fn provided(value: Meter) -> Option<Meter> {
    if value == MISSING_VALUE {
        None
    } else {
        Some(value)
    }
}

impl Axes {
    /// Build the axes from raw report values, `-1` meaning *not provided*.
    ///
    /// Arguments
    /// -----------------
    /// * `semi_major`: equatorial semi-major axis.
    /// * `semi_minor`: polar semi-minor axis.
    /// * `axisb`: equatorial semi-median axis.
    /// * `mean`: mean radius.
    pub fn new(semi_major: Meter, semi_minor: Meter, axisb: Meter, mean: Meter) -> Self {
        Axes {
            semi_major: provided(semi_major),
            semi_minor: provided(semi_minor),
            axisb: provided(axisb),
            mean: provided(mean),
        }
    }

    /// The three axes, when they are all provided.
    pub fn three_axes(&self) -> Option<(Meter, Meter, Meter)> {
        Some((self.semi_major?, self.semi_minor?, self.axisb?))
    }

    /// None of semi-major, semi-minor and axis b is provided.
    pub fn has_no_axis(&self) -> bool {
        self.semi_major.is_none() && self.semi_minor.is_none() && self.axisb.is_none()
    }

    /// Some, but not all, of semi-major, semi-minor and axis b are provided.
    pub fn is_partial(&self) -> bool {
        !self.has_no_axis() && self.three_axes().is_none()
    }

    /// The three axes are provided and equal.
    pub fn is_sphere(&self) -> bool {
        matches!(self.three_axes(), Some((a, c, b)) if a == c && a == b)
    }

    /// No two of the three axes are equal.
    pub fn are_pairwise_distinct(&self) -> bool {
        matches!(self.three_axes(), Some((a, c, b)) if a != c && a != b && c != b)
    }
}

/// One body of the IAU report.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRecord {
    pub name: String,
    pub naif_id: NaifId,
    pub axes: Axes,
    pub rotation: Option<Rotation>,
    pub origin_long_name: Option<String>,
    pub origin_lon_pos: Option<String>,
}

impl BodyRecord {
    pub fn new(name: &str, naif_id: NaifId, axes: Axes, rotation: Option<Rotation>) -> Self {
        BodyRecord {
            name: name.to_string(),
            naif_id,
            axes,
            rotation,
            origin_long_name: None,
            origin_lon_pos: None,
        }
    }

    pub fn with_origin(mut self, long_name: &str, lon_pos: &str) -> Self {
        self.origin_long_name = text_or_none(Some(long_name.to_string()));
        self.origin_lon_pos = text_or_none(Some(lon_pos.to_string()));
        self
    }

    /// Text of the longitude origin, `"<name> : <position>"`.
    ///
    /// Empty when the report gives neither the name nor the position; only the provided part
    /// otherwise.
    pub fn anchor_text(&self) -> String {
        match (&self.origin_long_name, &self.origin_lon_pos) {
            (Some(name), Some(pos)) => format!("{name} : {pos}"),
            (Some(part), None) | (None, Some(part)) => part.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn is_retrograde(&self) -> bool {
        self.rotation == Some(Rotation::Retrograde)
    }

    /// The body is exactly one of `Sun`, `Earth`, `Moon`, as named in the report.
    ///
    /// See also
    /// ------------
    /// * [`crate::frame::longitude_direction`] – tests the same names ignoring case.
    pub fn is_historic(&self) -> bool {
        crate::constants::HISTORICAL_BODIES.contains(&self.name.as_str())
    }
}

pub(crate) fn is_historic_name(name: &str) -> bool {
    crate::constants::HISTORICAL_BODIES
        .iter()
        .any(|body| body.eq_ignore_ascii_case(name.trim()))
}

fn text_or_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("nan"))
}

/// One CSV row once the `IAU<year>_` prefix has been removed from the header.
#[derive(Debug, Deserialize)]
struct ReportRow {
    #[serde(rename = "Body")]
    body: String,
    #[serde(rename = "Naif_id")]
    naif_id: NaifId,
    rotation: Option<String>,
    origin_long_name: Option<String>,
    origin_lon_pos: Option<String>,
    #[serde(rename = "Mean")]
    mean: Option<f64>,
    #[serde(rename = "Semimajor")]
    semi_major: Option<f64>,
    #[serde(rename = "Axisb")]
    axisb: Option<f64>,
    #[serde(rename = "Semiminor")]
    semi_minor: Option<f64>,
}

impl From<ReportRow> for BodyRecord {
    fn from(row: ReportRow) -> Self {
        let or_missing = |v: Option<f64>| v.unwrap_or(MISSING_VALUE);
        let name = row.body.trim().to_string();
        let rotation = text_or_none(row.rotation).and_then(|r| match r.parse::<Rotation>() {
            Ok(rotation) => Some(rotation),
            Err(err) => {
                warn!("{name} ({}): {err}, rotation ignored", row.naif_id);
                None
            }
        });
        BodyRecord {
            name,
            naif_id: row.naif_id,
            axes: Axes::new(
                or_missing(row.semi_major),
                or_missing(row.semi_minor),
                or_missing(row.axisb),
                or_missing(row.mean),
            ),
            rotation,
            origin_long_name: text_or_none(row.origin_long_name),
            origin_lon_pos: text_or_none(row.origin_lon_pos),
        }
    }
}

/// Header with the `IAU<version>_` prefix removed, after checking every column is present.
fn normalize_header(header: &StringRecord, version: &str) -> Result<StringRecord, WktError> {
    let prefix = format!("IAU{version}_");

    for column in BODY_COLUMNS {
        if !header.iter().any(|h| h.trim() == column) {
            return Err(WktError::MissingColumn(column.to_string()));
        }
    }
    for column in RADIUS_COLUMNS {
        let full_name = format!("{prefix}{column}");
        if !header.iter().any(|h| h.trim() == full_name) {
            return Err(WktError::MissingColumn(full_name));
        }
    }

    Ok(header
        .iter()
        .map(|h| {
            let h = h.trim();
            h.strip_prefix(prefix.as_str()).unwrap_or(h)
        })
        .collect())
}

/// Parse an IAU report from any reader.
///
/// Arguments
/// -----------------
/// * `reader`: CSV content with a header line.
/// * `version`: report year used in the radius column names (e.g. `"2015"`).
///
/// Return
/// ----------
/// * The bodies in file order, or a [`WktError`] on a missing column or a malformed row.
pub fn read_iau_report_from_reader<R: Read>(
    reader: R,
    version: &str,
) -> Result<Vec<BodyRecord>, WktError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let header = normalize_header(csv_reader.headers()?, version)?;
    csv_reader.set_headers(header);

    let records = csv_reader
        .deserialize::<ReportRow>()
        .map(|row| row.map(BodyRecord::from).map_err(WktError::from))
        .collect::<Result<Vec<_>, WktError>>()?;

    debug!("{} rows parsed from the IAU{version} columns", records.len());
    Ok(records)
}

/// Parse the IAU report stored at `path`.
///
/// See also
/// ------------
/// * [`read_iau_report_from_reader`] – parsing details.
/// * [`detect_report_version`] – find `version` when it is not known in advance.
pub fn read_iau_report(path: &Utf8Path, version: &str) -> Result<Vec<BodyRecord>, WktError> {
    let records = read_iau_report_from_reader(File::open(path)?, version)?;
    info!("Number of bodies in IAU report {}", records.len());
    Ok(records)
}

/// Find the report year from the `IAU<year>_Semimajor` column of a CSV header.
pub fn detect_version_from_header(header: &StringRecord) -> Result<String, WktError> {
    let re = Regex::new(r"^IAU(\d{4})_Semimajor$").map_err(|_| WktError::UnknownReportVersion)?;
    header
        .iter()
        .find_map(|h| re.captures(h.trim()).map(|c| c[1].to_string()))
        .ok_or(WktError::UnknownReportVersion)
}

/// Find the report year of the IAU report stored at `path`.
pub fn detect_report_version(path: &Utf8Path) -> Result<String, WktError> {
    let mut csv_reader = csv::Reader::from_path(path)?;
    detect_version_from_header(csv_reader.headers()?)
}

#[cfg(test)]
mod body_record_test {
    use super::*;

    const SAMPLE: &str = "\
Body,Naif_id,IAU2015_Mean,IAU2015_Semimajor,IAU2015_Axisb,IAU2015_Semiminor,rotation,origin_long_name,origin_lon_pos
Mars,499,3389500,3396190,3396190,3376200,Direct,Airy-0,0
Venus,299,6051800,6051800,6051800,6051800,Retrograde,Ariadne,0
Phobos,401,11080,13000,11400,9100,Direct,,
Unknown,2000001,-1,-1,-1,-1,,,
";

    #[test]
    fn test_read_sample_report() {
        let records = read_iau_report_from_reader(SAMPLE.as_bytes(), "2015").unwrap();
        assert_eq!(records.len(), 4);

        let mars = &records[0];
        assert_eq!(mars.name, "Mars");
        assert_eq!(mars.naif_id, 499);
        assert_eq!(mars.axes.semi_major, Some(3396190.0));
        assert_eq!(mars.axes.semi_minor, Some(3376200.0));
        assert_eq!(mars.rotation, Some(Rotation::Direct));
        assert_eq!(mars.anchor_text(), "Airy-0 : 0");

        let phobos = &records[2];
        assert_eq!(phobos.anchor_text(), "");
        assert!(phobos.axes.are_pairwise_distinct());

        let unknown = &records[3];
        assert!(unknown.axes.has_no_axis());
        assert_eq!(unknown.axes.mean, None);
        assert_eq!(unknown.rotation, None);
    }

    #[test]
    fn test_unknown_rotation_is_ignored() {
        let csv = "\
Body,Naif_id,IAU2015_Mean,IAU2015_Semimajor,IAU2015_Axisb,IAU2015_Semiminor,rotation,origin_long_name,origin_lon_pos
Oumuamua,3788040,-1,115,111,19,Tumbling,,
";
        let records = read_iau_report_from_reader(csv.as_bytes(), "2015").unwrap();
        assert_eq!(records[0].name, "Oumuamua");
        assert_eq!(records[0].rotation, None);
        assert_eq!(
            "Tumbling".parse::<Rotation>().unwrap_err(),
            WktError::InvalidRotation("Tumbling".into())
        );
    }

    #[test]
    fn test_missing_radius_column() {
        let err = read_iau_report_from_reader(SAMPLE.as_bytes(), "2009").unwrap_err();
        assert_eq!(err, WktError::MissingColumn("IAU2009_Mean".into()));
    }

    #[test]
    fn test_detect_version() {
        let header = StringRecord::from(vec!["Body", "Naif_id", "IAU2015_Semimajor"]);
        assert_eq!(detect_version_from_header(&header).unwrap(), "2015");

        let header = StringRecord::from(vec!["Body", "Naif_id"]);
        assert_eq!(
            detect_version_from_header(&header).unwrap_err(),
            WktError::UnknownReportVersion
        );
    }

    #[test]
    fn test_axes_classification() {
        let sphere = Axes::new(10.0, 10.0, 10.0, 10.0);
        assert!(sphere.is_sphere());
        assert!(!sphere.are_pairwise_distinct());

        let partial = Axes::new(10.0, -1.0, 10.0, 10.0);
        assert!(partial.is_partial());
        assert!(!partial.is_sphere());
        assert!(!partial.has_no_axis());

        assert!(Axes::new(-1.0, -1.0, -1.0, 5.0).has_no_axis());
    }

    #[test]
    fn test_rotation_and_history() {
        assert_eq!("Direct".parse::<Rotation>().unwrap(), Rotation::Direct);
        assert_eq!(" retrograde ".parse::<Rotation>().unwrap(), Rotation::Retrograde);
        assert!("Chaotic".parse::<Rotation>().is_err());

        let moon = BodyRecord::new("Moon", 301, Axes::default(), None);
        assert!(moon.is_historic());
        assert!(!moon.is_retrograde());

        let shouting = BodyRecord::new("MOON", 301, Axes::default(), None);
        assert!(!shouting.is_historic());
        assert!(is_historic_name(&shouting.name));
    }

    #[test]
    fn test_anchor_text_with_partial_origin() {
        let body = BodyRecord::new("Io", 501, Axes::default(), Some(Rotation::Direct))
            .with_origin("", "nan");
        assert_eq!(body.anchor_text(), "");

        let body = body.with_origin("Hun Kal", "");
        assert_eq!(body.anchor_text(), "Hun Kal");
    }
}
