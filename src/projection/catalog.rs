//! Static projection catalog and authority table.
//!
//! [`PROJECTIONS`] lists the 16 map projections derived for every frame, each with its IAU
//! code offset and the default values of its parameters. [`AUTHORITY_TABLE`] gives, for each
//! method and parameter name, the authority identifying it and the unit of its value.
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
    constants::{IauCode, ANGLE_UNIT, LENGTH_UNIT, SCALE_UNIT},
    shape::format_number,
    wkt_errors::WktError,
};

/// Parameter of a projection method with its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDef {
    pub name: &'static str,
    pub value: f64,
}

/// One entry of the projection catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionDef {
    /// Added to the frame code to get the projection code.
    pub offset: IauCode,
    pub name: &'static str,
    pub method: &'static str,
    pub parameters: &'static [ParameterDef],
}

/// Code of a method or parameter in its authority registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityCode {
    Number(u32),
    Name(&'static str),
}

impl fmt::Display for AuthorityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorityCode::Number(n) => write!(f, "{n}"),
            AuthorityCode::Name(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Identity of a method or parameter, and the unit of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Authority {
    pub authority: &'static str,
    pub code: AuthorityCode,
    pub unit: Option<&'static str>,
}

const fn param(name: &'static str, value: f64) -> ParameterDef {
    ParameterDef { name, value }
}

const fn epsg(code: u32, unit: Option<&'static str>) -> Authority {
    Authority {
        authority: "EPSG",
        code: AuthorityCode::Number(code),
        unit,
    }
}

const fn proj(name: &'static str) -> Authority {
    Authority {
        authority: "PROJ",
        code: AuthorityCode::Name(name),
        unit: None,
    }
}

pub static PROJECTIONS: [ProjectionDef; 16] = [
    ProjectionDef {
        offset: 10,
        name: "Equirectangular, clon = 0",
        method: "Equidistant Cylindrical",
        parameters: &[
            param("Latitude of 1st standard parallel", 0.0),
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 15,
        name: "Equirectangular, clon = 180",
        method: "Equidistant Cylindrical",
        parameters: &[
            param("Latitude of 1st standard parallel", 0.0),
            param("Longitude of natural origin", 180.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 20,
        name: "Sinusoidal, clon = 0",
        method: "Sinusoidal",
        parameters: &[
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 25,
        name: "Sinusoidal, clon = 180",
        method: "Sinusoidal",
        parameters: &[
            param("Longitude of natural origin", 180.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 30,
        name: "North Polar",
        method: "Polar Stereographic (variant A)",
        parameters: &[
            param("Latitude of natural origin", 90.0),
            param("Longitude of natural origin", 0.0),
            param("Scale factor at natural origin", 1.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 35,
        name: "South Polar",
        method: "Polar Stereographic (variant A)",
        parameters: &[
            param("Latitude of natural origin", -90.0),
            param("Longitude of natural origin", 0.0),
            param("Scale factor at natural origin", 1.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 40,
        name: "Mollweide, clon = 0",
        method: "Mollweide",
        parameters: &[
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 45,
        name: "Mollweide, clon = 180",
        method: "Mollweide",
        parameters: &[
            param("Longitude of natural origin", 180.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 50,
        name: "Robinson, clon = 0",
        method: "Robinson",
        parameters: &[
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 55,
        name: "Robinson, clon = 180",
        method: "Robinson",
        parameters: &[
            param("Longitude of natural origin", 180.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 60,
        name: "Transverse Mercator",
        method: "Transverse Mercator",
        parameters: &[
            param("Latitude of natural origin", 0.0),
            param("Longitude of natural origin", 0.0),
            param("Scale factor at natural origin", 1.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 65,
        name: "Orthographic, clon = 0",
        method: "Orthographic",
        parameters: &[
            param("Latitude of natural origin", 0.0),
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 70,
        name: "Orthographic, clon = 180",
        method: "Orthographic",
        parameters: &[
            param("Latitude of natural origin", 0.0),
            param("Longitude of natural origin", 180.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 75,
        name: "Lambert Conic Conformal",
        method: "Lambert Conic Conformal (2SP)",
        parameters: &[
            param("Latitude of false origin", 40.0),
            param("Longitude of false origin", 0.0),
            param("Latitude of 1st standard parallel", 20.0),
            param("Latitude of 2nd standard parallel", 60.0),
            param("Easting at false origin", 0.0),
            param("Northing at false origin", 0.0),
        ],
    },
    ProjectionDef {
        offset: 80,
        name: "Lambert Azimuthal Equal Area",
        method: "Lambert Azimuthal Equal Area",
        parameters: &[
            param("Latitude of natural origin", 40.0),
            param("Longitude of natural origin", 0.0),
            param("False easting", 0.0),
            param("False northing", 0.0),
        ],
    },
    ProjectionDef {
        offset: 85,
        name: "Albers Equal Area",
        method: "Albers Equal Area",
        parameters: &[
            param("Latitude of false origin", 40.0),
            param("Longitude of false origin", 0.0),
            param("Latitude of 1st standard parallel", 20.0),
            param("Latitude of 2nd standard parallel", 60.0),
            param("Easting at false origin", 0.0),
            param("Northing at false origin", 0.0),
        ],
    },
];

pub static AUTHORITY_TABLE: [(&str, Authority); 23] = [
    ("Lambert Azimuthal Equal Area (Spherical)", epsg(1027, None)),
    ("Equidistant Cylindrical", epsg(1028, None)),
    ("Equidistant Cylindrical (Spherical)", epsg(1029, None)),
    ("Scale factor at natural origin", epsg(8805, Some(SCALE_UNIT))),
    ("False easting", epsg(8806, Some(LENGTH_UNIT))),
    ("False northing", epsg(8807, Some(LENGTH_UNIT))),
    ("Latitude of natural origin", epsg(8801, Some(ANGLE_UNIT))),
    ("Longitude of natural origin", epsg(8802, Some(ANGLE_UNIT))),
    ("Latitude of false origin", epsg(8821, Some(ANGLE_UNIT))),
    ("Longitude of false origin", epsg(8822, Some(ANGLE_UNIT))),
    ("Latitude of 1st standard parallel", epsg(8823, Some(ANGLE_UNIT))),
    ("Latitude of 2nd standard parallel", epsg(8824, Some(ANGLE_UNIT))),
    ("Easting at false origin", epsg(8826, Some(LENGTH_UNIT))),
    ("Northing at false origin", epsg(8827, Some(LENGTH_UNIT))),
    ("Sinusoidal", proj("SINUSOIDAL")),
    ("Robinson", proj("ROBINSON")),
    ("Mollweide", proj("MOLLWEIDE")),
    ("Transverse Mercator", epsg(9807, None)),
    ("Lambert Conic Conformal (2SP)", epsg(9802, None)),
    ("Polar Stereographic (variant A)", epsg(9810, None)),
    ("Lambert Azimuthal Equal Area", epsg(9820, None)),
    ("Albers Equal Area", epsg(9822, None)),
    ("Orthographic", epsg(9840, None)),
];

/// Authority of a method or parameter name.
///
/// Return
/// ----------
/// * [`WktError::CatalogLookup`] when the name is not in [`AUTHORITY_TABLE`]; this means the
///   catalog itself is inconsistent.
pub fn authority_of(name: &str) -> Result<&'static Authority, WktError> {
    AUTHORITY_TABLE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, authority)| authority)
        .ok_or_else(|| WktError::CatalogLookup(name.to_string()))
}

/// Render the projection catalog as a table.
pub fn catalog_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Offset"),
        Cell::new("Projection"),
        Cell::new("Method"),
        Cell::new("Parameters"),
    ]);

    for def in PROJECTIONS.iter() {
        let parameters = def
            .parameters
            .iter()
            .map(|p| format!("{} = {}", p.name, format_number(p.value)))
            .join("\n");
        table.add_row(Row::from(vec![
            Cell::new(def.offset).set_alignment(CellAlignment::Right),
            Cell::new(def.name),
            Cell::new(def.method),
            Cell::new(parameters),
        ]));
    }
    table
}
