//! # IAU report configuration
//!
//! This module defines [`crate::iau_report::IauReport`], the **configuration value** threaded
//! through the datum, frame and projection builders. It carries:
//!
//! - The **report version** label (the year of the IAU Working Group report, e.g. `"2015"`),
//!   used in every body, datum and ellipsoid name and in every `ID["IAU", …]` clause.
//! - The **DOI** of the report, cited in the `REMARK` of every frame.
//!
//! The value is immutable once built and shared behind an [`std::sync::Arc`] by all
//! frames and projections of a run. Changing it never changes numeric codes or the set of
//! emitted frames, only the text substituted in the WKT.
//!
//! ## Usage
//!
//! ```rust
//! use iau_wkt::iau_report::IauReport;
//!
//! let report = IauReport::new("2015", "doi://10.1007/s10569-017-9805-5");
//! assert_eq!(
//!     report.citation(),
//!     "Source of IAU Coordinate systems: doi://10.1007/s10569-017-9805-5"
//! );
//! ```

/// Version of the 2015 report of the IAU Working Group on Cartographic Coordinates
pub const DEFAULT_VERSION: &str = "2015";

/// DOI of the 2015 report of the IAU Working Group on Cartographic Coordinates
pub const DEFAULT_DOI: &str = "doi://10.1007/s10569-017-9805-5";

/// Identification of the IAU report the bodies are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IauReport {
    pub version: String,
    pub doi: String,
}

impl Default for IauReport {
    fn default() -> Self {
        IauReport::new(DEFAULT_VERSION, DEFAULT_DOI)
    }
}

impl IauReport {
    pub fn new(version: impl Into<String>, doi: impl Into<String>) -> Self {
        IauReport {
            version: version.into(),
            doi: doi.into(),
        }
    }

    /// Citation appended to the remark of every frame.
    pub fn citation(&self) -> String {
        format!("Source of IAU Coordinate systems: {}", self.doi)
    }
}
