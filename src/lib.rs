//! Derivation of the WKT coordinate reference systems of solar system bodies from the IAU
//! report of body radii.
pub mod body_record;
pub mod constants;
pub mod crs;
pub mod datum;
pub mod duplication;
pub mod frame;
pub mod iau_report;
pub mod processor;
pub mod projection;
pub mod shape;
pub mod wkt_errors;
pub mod wkt_writer;

pub use body_record::{read_iau_report, BodyRecord};
pub use crs::{Crs, CrsSet};
pub use iau_report::IauReport;
pub use processor::WktProcessor;
pub use wkt_errors::WktError;
