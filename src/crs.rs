//! Emitted coordinate reference systems, keyed by IAU code.
use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{constants::IauCode, frame::Frame, projection::Projection};

/// Ordered set of CRS. Inserting a code already present replaces the previous CRS.
pub type CrsSet = BTreeMap<IauCode, Crs>;

#[derive(Debug, Clone, PartialEq)]
pub enum Crs {
    Frame(Arc<Frame>),
    Projection(Projection),
}

impl Crs {
    pub fn iau_code(&self) -> IauCode {
        match self {
            Crs::Frame(frame) => frame.iau_code(),
            Crs::Projection(projection) => projection.iau_code(),
        }
    }

    /// Name of the body the CRS belongs to.
    pub fn body_name(&self) -> &str {
        match self {
            Crs::Frame(frame) => frame.name(),
            Crs::Projection(projection) => projection.frame().name(),
        }
    }

    pub fn is_projection(&self) -> bool {
        matches!(self, Crs::Projection(_))
    }

    pub fn wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Crs::Frame(frame) => frame.fmt(f),
            Crs::Projection(projection) => projection.fmt(f),
        }
    }
}

impl From<Arc<Frame>> for Crs {
    fn from(frame: Arc<Frame>) -> Self {
        Crs::Frame(frame)
    }
}

impl From<Projection> for Crs {
    fn from(projection: Projection) -> Self {
        Crs::Projection(projection)
    }
}
