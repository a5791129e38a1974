//! # Datums
//!
//! A datum is the model of a body used in mapping: a reference shape
//! ([`ShapeDescriptor`]) tied to the body through an [`Anchor`], the remark locating the
//! origin of longitudes (e.g. `"Airy-0 : 0"` for Mars).
//!
//! The datum WKT has two wordings: the sphere built for interoperability is named
//! `"<body> (<version>) - Sphere"`, every other datum `"<body> (<version>)"`.
use crate::{
    constants::ANGLE_UNIT,
    shape::{ShapeDescriptor, ShapeKind},
};

/// Placeholder left by the report cleaning when both origin fields are missing.
const NO_ANCHOR_PLACEHOLDER: &str = "nan : nan";

/// Origin of longitudes of a body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Anchor {
    name: String,
}

impl Anchor {
    pub fn new(name: impl Into<String>) -> Self {
        Anchor { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// An empty anchor, or the `"nan : nan"` placeholder, is not written in the WKT.
    pub fn is_empty(&self) -> bool {
        let name = self.name.trim();
        name.is_empty() || name == NO_ANCHOR_PLACEHOLDER
    }

    /// `ANCHOR[...]` clause, preceded by its line break, or nothing for an empty anchor.
    pub fn wkt(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("\n\t\tANCHOR[\"{}\"]", self.name)
        }
    }
}

/// Wording of the datum name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatumTemplate {
    Sphere,
    General,
}

/// Geodetic datum of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    name: String,
    shape: ShapeDescriptor,
    anchor: Anchor,
    template: DatumTemplate,
}

impl Datum {
    /// Build a datum, picking the wording from the requested shape kind.
    ///
    /// Arguments
    /// -----------------
    /// * `kind`: shape kind the datum is built for.
    /// * `name`: datum name (the body name).
    /// * `shape`: reference shape, owned by the datum.
    /// * `anchor`: origin of longitudes, owned by the datum.
    pub fn new(kind: ShapeKind, name: &str, shape: ShapeDescriptor, anchor: Anchor) -> Self {
        let template = match kind {
            ShapeKind::Sphere => DatumTemplate::Sphere,
            ShapeKind::Ellipsoid | ShapeKind::Triaxial => DatumTemplate::General,
        };
        Datum {
            name: name.to_string(),
            shape,
            anchor,
            template,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shape(&self) -> &ShapeDescriptor {
        &self.shape
    }

    pub fn anchor(&self) -> &Anchor {
        &self.anchor
    }

    pub fn template(&self) -> DatumTemplate {
        self.template
    }

    /// `DATUM[...]` and `PRIMEM[...]` clauses of the datum.
    pub fn wkt(&self, version: &str) -> String {
        let suffix = match self.template {
            DatumTemplate::Sphere => " - Sphere",
            DatumTemplate::General => "",
        };
        let separator = if self.anchor.is_empty() { "" } else { "," };
        format!(
            "DATUM[\"{} ({version}){suffix}\",\n        {}{separator}{}],\n    \
             PRIMEM[\"Reference Meridian\", 0,\n        {ANGLE_UNIT}]",
            self.name,
            self.shape.wkt(version),
            self.anchor.wkt(),
        )
    }
}
