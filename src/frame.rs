//! # Body frames
//!
//! A [`Frame`] is the geographic or geodetic CRS of a body built on one of its datums. Five
//! kinds of frames exist, one per ([`ShapeKind`], latitude convention) pair, see
//! [`ReferenceKind`]. Each frame gets an IAU code `naif_id * 100 + offset`.
//!
//! ## Positive longitudes
//!
//! Planetographic longitudes are counted so that the sub-observer longitude increases with
//! time as seen by a distant observer. The rules, first match wins:
//!
//! ```text
//! naif_id >= 90000, or Sun / Earth / Moon   -> east
//! planetocentric frame                      -> east
//! direct rotation                           -> west
//! otherwise                                 -> east
//! ```
use std::{fmt, str::FromStr, sync::Arc};

use crate::{
    body_record::{is_historic_name, Rotation},
    constants::{IauCode, NaifId, ANGLE_UNIT, SMALL_BODY_NAIF_ID},
    datum::Datum,
    iau_report::IauReport,
    shape::ShapeKind,
    wkt_errors::WktError,
};

/// Reference surface and latitude convention of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReferenceKind {
    SphereOcentric,
    EllipseOgraphic,
    EllipseOcentric,
    TriaxialOgraphic,
    TriaxialOcentric,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 5] = [
        ReferenceKind::SphereOcentric,
        ReferenceKind::EllipseOgraphic,
        ReferenceKind::EllipseOcentric,
        ReferenceKind::TriaxialOgraphic,
        ReferenceKind::TriaxialOcentric,
    ];

    pub fn shape_kind(&self) -> ShapeKind {
        match self {
            ReferenceKind::SphereOcentric => ShapeKind::Sphere,
            ReferenceKind::EllipseOgraphic | ReferenceKind::EllipseOcentric => {
                ShapeKind::Ellipsoid
            }
            ReferenceKind::TriaxialOgraphic | ReferenceKind::TriaxialOcentric => {
                ShapeKind::Triaxial
            }
        }
    }

    pub fn is_ocentric(&self) -> bool {
        matches!(
            self,
            ReferenceKind::SphereOcentric
                | ReferenceKind::EllipseOcentric
                | ReferenceKind::TriaxialOcentric
        )
    }

    /// `"Ocentric"` or `"Ographic"`.
    pub fn latitude_name(&self) -> &'static str {
        if self.is_ocentric() {
            "Ocentric"
        } else {
            "Ographic"
        }
    }

    pub fn offset(&self) -> IauCode {
        match self {
            ReferenceKind::SphereOcentric => 0,
            ReferenceKind::EllipseOgraphic => 1,
            ReferenceKind::EllipseOcentric => 2,
            ReferenceKind::TriaxialOgraphic => 3,
            ReferenceKind::TriaxialOcentric => 4,
        }
    }

    /// IAU code of the frame of this kind for a body.
    pub fn code(&self, naif_id: NaifId) -> IauCode {
        naif_id * 100 + self.offset()
    }

    /// Planetocentric frames on a non spherical shape are geodetic CRS with spherical
    /// coordinates; the others are geographic CRS.
    pub fn is_geodetic(&self) -> bool {
        self.is_ocentric() && self.shape_kind() != ShapeKind::Sphere
    }

    /// Suffix of the CRS name: `"/ Ocentric"` on an ellipsoid, `"- Sphere / Ocentric"` or
    /// `"- Triaxial / Ographic"` on other shapes.
    pub fn label(&self) -> String {
        match self.shape_kind() {
            ShapeKind::Ellipsoid => format!("/ {}", self.latitude_name()),
            shape => format!("- {shape} / {}", self.latitude_name()),
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.shape_kind(), self.latitude_name())
    }
}

impl FromStr for ReferenceKind {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReferenceKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == s)
            .ok_or_else(|| WktError::UnsupportedShapeKind(s.to_string()))
    }
}

/// Direction of positive longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Direction of positive longitudes of a frame, see the module documentation.
pub fn longitude_direction(
    name: &str,
    naif_id: NaifId,
    rotation: Option<Rotation>,
    reference: ReferenceKind,
) -> Direction {
    if naif_id >= SMALL_BODY_NAIF_ID || is_historic_name(name) {
        Direction::East
    } else if reference.is_ocentric() {
        Direction::East
    } else if rotation == Some(Rotation::Direct) {
        Direction::West
    } else {
        Direction::East
    }
}

/// Geographic or geodetic CRS of a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    datum: Datum,
    naif_id: NaifId,
    rotation: Option<Rotation>,
    reference: ReferenceKind,
    code: IauCode,
    direction: Direction,
    report: Arc<IauReport>,
}

impl Frame {
    /// Build the frame of a body.
    ///
    /// Arguments
    /// -----------------
    /// * `datum`: datum of the body, owned by the frame.
    /// * `naif_id`: NAIF code of the body.
    /// * `rotation`: rotation sense of the body, if known.
    /// * `reference`: kind of frame to build.
    /// * `report`: IAU report the body comes from.
    ///
    /// Return
    /// ----------
    /// * The frame, or [`WktError::UnsupportedShapeKind`] when the datum shape does not match
    ///   the shape required by `reference`.
    pub fn new(
        datum: Datum,
        naif_id: NaifId,
        rotation: Option<Rotation>,
        reference: ReferenceKind,
        report: Arc<IauReport>,
    ) -> Result<Self, WktError> {
        let datum_kind = datum.shape().kind();
        if datum_kind != reference.shape_kind() {
            return Err(WktError::UnsupportedShapeKind(format!(
                "{reference} frame on a {datum_kind} datum"
            )));
        }

        let direction = longitude_direction(datum.name(), naif_id, rotation, reference);
        Ok(Frame {
            code: reference.code(naif_id),
            datum,
            naif_id,
            rotation,
            reference,
            direction,
            report,
        })
    }

    pub fn name(&self) -> &str {
        self.datum.name()
    }

    pub fn datum(&self) -> &Datum {
        &self.datum
    }

    pub fn naif_id(&self) -> NaifId {
        self.naif_id
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.rotation
    }

    pub fn reference(&self) -> ReferenceKind {
        self.reference
    }

    pub fn iau_code(&self) -> IauCode {
        self.code
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn report(&self) -> &IauReport {
        &self.report
    }

    /// Shape warning, if any, followed by the citation of the report.
    pub fn remark(&self) -> String {
        let citation = self.report.citation();
        match &self.datum.shape().warning {
            Some(warning) => format!("{warning}{citation}"),
            None => citation,
        }
    }

    pub fn wkt(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version = &self.report.version;
        let (crs, cs, latitude, longitude) = if self.reference.is_geodetic() {
            (
                "GEODCRS",
                "spherical",
                "planetocentric latitude (U)",
                "planetocentric longitude (V)",
            )
        } else {
            (
                "GEOGCRS",
                "ellipsoidal",
                "geodetic latitude (Lat)",
                "geodetic longitude (Lon)",
            )
        };

        writeln!(
            f,
            "{crs}[\"{} ({version}) {}\",",
            self.name(),
            self.reference.label()
        )?;
        writeln!(f, "\t{},", self.datum.wkt(version))?;
        writeln!(f, "\tCS[{cs}, 2],")?;
        writeln!(f, "\t    AXIS[\"{latitude}\", north,")?;
        writeln!(f, "\t        ORDER[1],")?;
        writeln!(f, "\t        {ANGLE_UNIT}],")?;
        writeln!(f, "\t    AXIS[\"{longitude}\", {},", self.direction)?;
        writeln!(f, "\t        ORDER[2],")?;
        writeln!(f, "\t        {ANGLE_UNIT}],")?;
        writeln!(f, "\tID[\"IAU\", {}, {version}],", self.code)?;
        write!(f, "\tREMARK[\"{}\"]]", self.remark())
    }
}

#[cfg(test)]
mod frame_test {
    use super::*;
    use crate::{
        body_record::Axes,
        datum::Anchor,
        shape::{derive_shape, ShapeKind},
    };

    fn mars_axes() -> Axes {
        Axes::new(3396190.0, 3376200.0, 3396190.0, 3389500.0)
    }

    fn frame(name: &str, naif_id: NaifId, reference: ReferenceKind) -> Frame {
        let kind = reference.shape_kind();
        let shape = derive_shape(kind, name, &mars_axes()).unwrap();
        let datum = Datum::new(kind, name, shape, Anchor::new("Airy-0 : 0"));
        Frame::new(
            datum,
            naif_id,
            Some(Rotation::Direct),
            reference,
            Arc::new(IauReport::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_codes() {
        assert_eq!(ReferenceKind::SphereOcentric.code(499), 49900);
        assert_eq!(ReferenceKind::EllipseOgraphic.code(499), 49901);
        assert_eq!(ReferenceKind::EllipseOcentric.code(499), 49902);
        assert_eq!(ReferenceKind::TriaxialOgraphic.code(401), 40103);
        assert_eq!(ReferenceKind::TriaxialOcentric.code(401), 40104);
        assert_eq!(
            frame("Mars", 499, ReferenceKind::EllipseOcentric).iau_code(),
            49902
        );
    }

    #[test]
    fn test_direction_rules() {
        for reference in ReferenceKind::ALL {
            for rotation in [Some(Rotation::Direct), Some(Rotation::Retrograde), None] {
                assert_eq!(
                    longitude_direction("Comet", 99999, rotation, reference),
                    Direction::East
                );
            }
        }
        assert_eq!(
            longitude_direction("Io", 501, Some(Rotation::Direct), ReferenceKind::EllipseOgraphic),
            Direction::West
        );
        assert_eq!(
            longitude_direction("Io", 501, Some(Rotation::Direct), ReferenceKind::EllipseOcentric),
            Direction::East
        );
        assert_eq!(
            longitude_direction(
                "Triton",
                801,
                Some(Rotation::Retrograde),
                ReferenceKind::EllipseOgraphic
            ),
            Direction::East
        );
        assert_eq!(
            longitude_direction("earth", 399, Some(Rotation::Direct), ReferenceKind::EllipseOgraphic),
            Direction::East
        );
    }

    #[test]
    fn test_reference_kind_tags() {
        for reference in ReferenceKind::ALL {
            assert_eq!(reference.to_string().parse::<ReferenceKind>().unwrap(), reference);
        }
        assert_eq!(ReferenceKind::EllipseOgraphic.to_string(), "Ellipse-Ographic");
        assert_eq!(
            "Sphere-Ographic".parse::<ReferenceKind>().unwrap_err(),
            WktError::UnsupportedShapeKind("Sphere-Ographic".into())
        );
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let shape = derive_shape(ShapeKind::Sphere, "Mars", &mars_axes()).unwrap();
        let datum = Datum::new(ShapeKind::Sphere, "Mars", shape, Anchor::default());
        let err = Frame::new(
            datum,
            499,
            Some(Rotation::Direct),
            ReferenceKind::EllipseOgraphic,
            Arc::new(IauReport::default()),
        )
        .unwrap_err();
        assert!(matches!(err, WktError::UnsupportedShapeKind(_)));
    }

    #[test]
    fn test_ographic_wkt() {
        let wkt = frame("Mars", 499, ReferenceKind::EllipseOgraphic).wkt();
        assert!(wkt.starts_with("GEOGCRS[\"Mars (2015) / Ographic\",\n\tDATUM[\"Mars (2015)\","));
        assert!(wkt.contains("\tCS[ellipsoidal, 2],\n"));
        assert!(wkt.contains("AXIS[\"geodetic longitude (Lon)\", west,"));
        assert!(wkt.contains("\tID[\"IAU\", 49901, 2015],\n"));
        assert!(wkt.ends_with(
            "\tREMARK[\"Source of IAU Coordinate systems: doi://10.1007/s10569-017-9805-5\"]]"
        ));
    }

    #[test]
    fn test_sphere_and_ocentric_wkt() {
        let sphere = frame("Mars", 499, ReferenceKind::SphereOcentric).wkt();
        assert!(sphere.starts_with("GEOGCRS[\"Mars (2015) - Sphere / Ocentric\","));
        assert!(sphere.contains("AXIS[\"geodetic longitude (Lon)\", east,"));
        assert!(sphere.contains(
            "REMARK[\"Use semi-major radius as sphere radius for interoperability. Source of IAU"
        ));

        let ocentric = frame("Mars", 499, ReferenceKind::EllipseOcentric).wkt();
        assert!(ocentric.starts_with("GEODCRS[\"Mars (2015) / Ocentric\","));
        assert!(ocentric.contains("\tCS[spherical, 2],\n"));
        assert!(ocentric.contains("AXIS[\"planetocentric longitude (V)\", east,"));
    }

    #[test]
    fn test_triaxial_wkt() {
        let shape = derive_shape(
            ShapeKind::Triaxial,
            "Phobos",
            &Axes::new(13000.0, 9100.0, 11400.0, 11080.0),
        )
        .unwrap();
        let datum = Datum::new(ShapeKind::Triaxial, "Phobos", shape, Anchor::default());
        let frame = Frame::new(
            datum,
            401,
            Some(Rotation::Direct),
            ReferenceKind::TriaxialOgraphic,
            Arc::new(IauReport::default()),
        )
        .unwrap();
        let wkt = frame.wkt();
        assert!(wkt.starts_with("GEOGCRS[\"Phobos (2015) - Triaxial / Ographic\","));
        assert!(wkt.contains("TRIAXIAL[\"Phobos (2015)\", 13000, 11400, 9100,"));
        assert!(wkt.contains("\", west,"));
        assert_eq!(wkt, frame.wkt());
    }
}
