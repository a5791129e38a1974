//! # Projected CRS
//!
//! Every frame is the base of the 16 map projections of the [`catalog`]. A projection code is
//! the frame code plus the catalog offset, so the projections of Mars' sphere (`49900`) are
//! `49910`, `49915`, ..., `49985`.
//!
//! ## Overview
//!
//! * [`Conversion`] resolves a catalog entry against the authority table once; rendering it
//!   afterwards cannot fail.
//! * [`Projection`] shares its base [`Frame`] through an [`Arc`], the same frame being the
//!   base of every projection built from it.
//! * [`iter_projections`] walks the catalog for one frame.
pub mod catalog;

use std::{fmt, sync::Arc};

use itertools::Itertools;

use crate::{
    constants::{IauCode, LENGTH_UNIT},
    frame::{Direction, Frame},
    shape::format_number,
    wkt_errors::WktError,
};

use self::catalog::{authority_of, Authority, ParameterDef, ProjectionDef, PROJECTIONS};

/// Parameter value with its resolved authority.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Parameter {
    def: &'static ParameterDef,
    authority: &'static Authority,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PARAMETER[\"{}\",{},",
            self.def.name,
            format_number(self.def.value)
        )?;
        if let Some(unit) = self.authority.unit {
            write!(f, "\n            {unit},")?;
        }
        write!(
            f,
            "\n            ID[\"{}\",{}]]",
            self.authority.authority, self.authority.code
        )
    }
}

/// Map projection method with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    def: &'static ProjectionDef,
    method: &'static Authority,
    parameters: Vec<Parameter>,
}

impl Conversion {
    /// Resolve the method and every parameter of a catalog entry.
    ///
    /// Return
    /// ----------
    /// * [`WktError::CatalogLookup`] naming the first method or parameter missing from the
    ///   authority table.
    pub fn new(def: &'static ProjectionDef) -> Result<Self, WktError> {
        let method = authority_of(def.method)?;
        let parameters = def
            .parameters
            .iter()
            .map(|p| authority_of(p.name).map(|authority| Parameter { def: p, authority }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Conversion {
            def,
            method,
            parameters,
        })
    }

    pub fn name(&self) -> &'static str {
        self.def.name
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CONVERSION[\"{}\",\n        METHOD[\"{}\",\n            ID[\"{}\",{}]],\n        {}],",
            self.def.name,
            self.def.method,
            self.method.authority,
            self.method.code,
            self.parameters.iter().join(",\n\t\t")
        )
    }
}

/// Projected CRS built on a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    frame: Arc<Frame>,
    conversion: Conversion,
    code: IauCode,
}

impl Projection {
    /// Build a projection of `frame` from a catalog entry.
    ///
    /// Arguments
    /// -----------------
    /// * `frame`: base frame, shared with the other projections.
    /// * `def`: catalog entry.
    ///
    /// Return
    /// ----------
    /// * The projection, coded `frame code + def.offset`, or [`WktError::CatalogLookup`].
    pub fn new(frame: Arc<Frame>, def: &'static ProjectionDef) -> Result<Self, WktError> {
        let conversion = Conversion::new(def)?;
        let code = frame.iau_code() + def.offset;
        Ok(Projection {
            frame,
            conversion,
            code,
        })
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn conversion(&self) -> &Conversion {
        &self.conversion
    }

    pub fn iau_code(&self) -> IauCode {
        self.code
    }

    /// Name of the base frame, e.g. `Mars (2015) / Ocentric`.
    fn base_name(&self) -> String {
        format!(
            "{} ({}) {}",
            self.frame.name(),
            self.frame.report().version,
            self.frame.reference().label()
        )
    }

    /// Name of the projected CRS, e.g. `Mars (2015) / Ocentric/ Sinusoidal, clon = 0`.
    pub fn name(&self) -> String {
        format!("{}/ {}", self.base_name(), self.conversion.name())
    }

    pub fn wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = &self.frame.report().version;
        let base = if self.frame.reference().is_geodetic() {
            "BASEGEODCRS"
        } else {
            "BASEGEOGCRS"
        };
        let easting = match self.frame.direction() {
            Direction::West => "westing(W)",
            Direction::East => "(E)",
        };

        writeln!(f, "PROJCRS[\"{}\",", self.name())?;
        writeln!(f, "    {base}[\"{}\",", self.base_name())?;
        writeln!(f, "        {},", self.frame.datum().wkt(version))?;
        writeln!(
            f,
            "        ID[\"IAU\",{},{version}]],",
            self.frame.iau_code()
        )?;
        writeln!(f, "    {}", self.conversion)?;
        writeln!(f, "    CS[Cartesian,2],")?;
        writeln!(f, "        AXIS[\"{easting}\",{},", self.frame.direction())?;
        writeln!(f, "            ORDER[1],")?;
        writeln!(f, "            {LENGTH_UNIT}],")?;
        writeln!(f, "        AXIS[\"(N)\",north,")?;
        writeln!(f, "            ORDER[2],")?;
        writeln!(f, "            {LENGTH_UNIT}],")?;
        write!(f, "    ID[\"IAU\",{},{version}]]", self.code)
    }
}

/// Projections of a frame, one per catalog entry, in offset order.
pub fn iter_projections(
    frame: Arc<Frame>,
) -> impl Iterator<Item = Result<Projection, WktError>> {
    PROJECTIONS
        .iter()
        .map(move |def| Projection::new(Arc::clone(&frame), def))
}
