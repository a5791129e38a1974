//! # Body shapes
//!
//! Representation of the reference surface of a body and the rules deriving it from the
//! raw measurements of the IAU report.
//!
//! ## Shapes
//!
//! - [`Shape::Sphere`]: one radius. Every body gets one, **for interoperability**, even when
//!   its real shape is an ellipsoid or a triaxial body.
//! - [`Shape::Ellipsoid`]: semi-major axis and inverse flattening.
//! - [`Shape::Triaxial`]: the three semi-axes, kept verbatim.
//!
//! ## Sphere radius
//!
//! The interoperability radius is chosen with the following rules, first match wins:
//!
//! | condition                                  | radius                | warning |
//! |--------------------------------------------|-----------------------|---------|
//! | mean radius not provided                   | `(a + b + c) / 3`     | yes     |
//! | semi-major or semi-minor not provided      | mean radius           | yes     |
//! | semi-major < semi-minor                    | mean radius           | yes     |
//! | axis b differs from semi-major and minor   | mean radius           | yes     |
//! | semi-major = semi-minor = axis b           | mean radius           | no      |
//! | otherwise (biaxial body)                   | semi-major            | yes     |
//!
//! The warning ends up in the `REMARK` of the frame built on the shape.
use std::{fmt, str::FromStr};

use crate::{
    body_record::Axes,
    constants::{Meter, INTEGER_TOLERANCE, LENGTH_UNIT},
    wkt_errors::WktError,
};

const WARNING_THREE_AXES_MEAN: &str =
    "Use R_m = (a+b+c)/3 as mean radius. Use mean radius as sphere radius for interoperability. ";
const WARNING_MEAN_RADIUS: &str = "Use mean radius as sphere radius for interoperability. ";
const WARNING_SEMI_MAJOR: &str = "Use semi-major radius as sphere radius for interoperability. ";

/// Kind of reference surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Ellipsoid,
    Triaxial,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Ellipsoid => "Ellipse",
            ShapeKind::Triaxial => "Triaxial",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ShapeKind {
    type Err = WktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sphere" => Ok(ShapeKind::Sphere),
            "Ellipse" | "Ellipsoid" => Ok(ShapeKind::Ellipsoid),
            "Triaxial" => Ok(ShapeKind::Triaxial),
            _ => Err(WktError::UnsupportedShapeKind(s.to_string())),
        }
    }
}

/// Geometry of a reference surface, lengths in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        radius: Meter,
    },
    Ellipsoid {
        semi_major: Meter,
        inverse_flattening: f64,
    },
    Triaxial {
        semi_major: Meter,
        semi_median: Meter,
        semi_minor: Meter,
    },
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere { .. } => ShapeKind::Sphere,
            Shape::Ellipsoid { .. } => ShapeKind::Ellipsoid,
            Shape::Triaxial { .. } => ShapeKind::Triaxial,
        }
    }
}

/// Shape of a named body, with the warning raised while deriving it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub name: String,
    pub shape: Shape,
    pub warning: Option<String>,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    /// `ELLIPSOID[...]` or `TRIAXIAL[...]` clause of the shape.
    ///
    /// Arguments
    /// -----------------
    /// * `version`: IAU report version inserted in the shape name.
    pub fn wkt(&self, version: &str) -> String {
        let name = &self.name;
        match self.shape {
            Shape::Sphere { radius } => format!(
                "ELLIPSOID[\"{name} ({version}) - Sphere\", {}, 0,\n\t\t{LENGTH_UNIT}]",
                format_number(radius)
            ),
            Shape::Ellipsoid {
                semi_major,
                inverse_flattening,
            } => format!(
                "ELLIPSOID[\"{name} ({version})\", {}, {},\n\t\t{LENGTH_UNIT}]",
                format_number(semi_major),
                format_number(inverse_flattening)
            ),
            Shape::Triaxial {
                semi_major,
                semi_median,
                semi_minor,
            } => format!(
                "TRIAXIAL[\"{name} ({version})\", {}, {}, {},\n\t\t{LENGTH_UNIT}]",
                format_number(semi_major),
                format_number(semi_median),
                format_number(semi_minor)
            ),
        }
    }
}

/// Render a number the way the WKT expects it.
///
/// Values within [`INTEGER_TOLERANCE`] of an integer are written without decimal point,
/// other values with the shortest representation that round-trips.
///
/// ```rust
/// use iau_wkt::shape::format_number;
///
/// assert_eq!(format_number(2440530.0), "2440530");
/// assert_eq!(format_number(1234.5), "1234.5");
/// ```
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() <= INTEGER_TOLERANCE {
        // -0 would otherwise print as "-0"
        format!("{}", rounded + 0.0)
    } else {
        format!("{value}")
    }
}

fn missing(kind: ShapeKind, name: &str) -> WktError {
    WktError::MissingMeasurement {
        body: name.to_string(),
        shape: kind.to_string(),
    }
}

/// Radius of the interoperability sphere and the warning explaining its choice.
fn sphere_radius(name: &str, axes: &Axes) -> Result<(Meter, Option<&'static str>), WktError> {
    let Some(mean) = axes.mean else {
        let (a, c, b) = axes
            .three_axes()
            .ok_or_else(|| missing(ShapeKind::Sphere, name))?;
        return Ok(((a + c + b) / 3.0, Some(WARNING_THREE_AXES_MEAN)));
    };

    let (Some(a), Some(c)) = (axes.semi_major, axes.semi_minor) else {
        return Ok((mean, Some(WARNING_MEAN_RADIUS)));
    };

    // inverted axes, as for Hartley 2
    if a < c {
        return Ok((mean, Some(WARNING_MEAN_RADIUS)));
    }

    match axes.axisb {
        Some(b) if b == a && b == c => Ok((mean, None)),
        Some(b) if b == a || b == c => Ok((a, Some(WARNING_SEMI_MAJOR))),
        _ => Ok((mean, Some(WARNING_MEAN_RADIUS))),
    }
}

/// Derive the shape of a body from its measurements.
///
/// Arguments
/// -----------------
/// * `kind`: requested shape.
/// * `name`: body name.
/// * `axes`: measurements from the IAU report.
///
/// Return
/// ----------
/// * The [`ShapeDescriptor`]; only the sphere may carry a warning.
/// * [`WktError::MissingMeasurement`] when an axis the shape needs is not provided.
pub fn derive_shape(kind: ShapeKind, name: &str, axes: &Axes) -> Result<ShapeDescriptor, WktError> {
    let (shape, warning) = match kind {
        ShapeKind::Sphere => {
            let (radius, warning) = sphere_radius(name, axes)?;
            (Shape::Sphere { radius }, warning)
        }
        ShapeKind::Ellipsoid => {
            let (Some(a), Some(c)) = (axes.semi_major, axes.semi_minor) else {
                return Err(missing(kind, name));
            };
            let inverse_flattening = if a == c { 0.0 } else { a / (a - c) };
            (
                Shape::Ellipsoid {
                    semi_major: a,
                    inverse_flattening,
                },
                None,
            )
        }
        ShapeKind::Triaxial => {
            let (a, c, b) = axes.three_axes().ok_or_else(|| missing(kind, name))?;
            (
                Shape::Triaxial {
                    semi_major: a,
                    semi_median: b,
                    semi_minor: c,
                },
                None,
            )
        }
    };

    Ok(ShapeDescriptor {
        name: name.to_string(),
        shape,
        warning: warning.map(str::to_string),
    })
}

#[cfg(test)]
mod shape_test {
    use super::*;
    use approx::assert_relative_eq;

    fn sphere(axes: Axes) -> ShapeDescriptor {
        derive_shape(ShapeKind::Sphere, "Body", &axes).unwrap()
    }

    fn radius(descriptor: &ShapeDescriptor) -> f64 {
        match descriptor.shape {
            Shape::Sphere { radius } => radius,
            _ => panic!("not a sphere"),
        }
    }

    #[test]
    fn test_sphere_from_three_axes() {
        let s = sphere(Axes::new(3396190.0, 3376200.0, 3396190.0, -1.0));
        assert_relative_eq!(radius(&s), (3396190.0 + 3376200.0 + 3396190.0) / 3.0);
        assert_eq!(s.warning.as_deref(), Some(WARNING_THREE_AXES_MEAN));
    }

    #[test]
    fn test_sphere_rules_order() {
        // semi-minor not provided
        let s = sphere(Axes::new(100.0, -1.0, 100.0, 90.0));
        assert_eq!(radius(&s), 90.0);
        assert_eq!(s.warning.as_deref(), Some(WARNING_MEAN_RADIUS));

        // inverted axes
        let s = sphere(Axes::new(80.0, 100.0, 80.0, 90.0));
        assert_eq!(radius(&s), 90.0);
        assert_eq!(s.warning.as_deref(), Some(WARNING_MEAN_RADIUS));

        // triaxial
        let s = sphere(Axes::new(13000.0, 9100.0, 11400.0, 11080.0));
        assert_eq!(radius(&s), 11080.0);
        assert_eq!(s.warning.as_deref(), Some(WARNING_MEAN_RADIUS));

        // already a sphere
        let s = sphere(Axes::new(6051800.0, 6051800.0, 6051800.0, 6051800.0));
        assert_eq!(radius(&s), 6051800.0);
        assert_eq!(s.warning, None);

        // biaxial
        let s = sphere(Axes::new(3396190.0, 3376200.0, 3396190.0, 3389500.0));
        assert_eq!(radius(&s), 3396190.0);
        assert_eq!(s.warning.as_deref(), Some(WARNING_SEMI_MAJOR));
    }

    #[test]
    fn test_sphere_without_any_radius() {
        let err = derive_shape(ShapeKind::Sphere, "Ghost", &Axes::new(10.0, -1.0, 10.0, -1.0))
            .unwrap_err();
        assert_eq!(
            err,
            WktError::MissingMeasurement {
                body: "Ghost".into(),
                shape: "Sphere".into()
            }
        );
    }

    #[test]
    fn test_ellipsoid_inverse_flattening() {
        let e = derive_shape(
            ShapeKind::Ellipsoid,
            "Mars",
            &Axes::new(3396190.0, 3376200.0, 3396190.0, 3389500.0),
        )
        .unwrap();
        match e.shape {
            Shape::Ellipsoid {
                semi_major,
                inverse_flattening,
            } => {
                assert_eq!(semi_major, 3396190.0);
                assert_relative_eq!(inverse_flattening, 3396190.0 / 19990.0);
            }
            _ => panic!("not an ellipsoid"),
        }
        assert_eq!(e.warning, None);

        let round = derive_shape(ShapeKind::Ellipsoid, "Venus", &Axes::new(5.0, 5.0, 5.0, 5.0))
            .unwrap();
        assert_eq!(
            round.shape,
            Shape::Ellipsoid {
                semi_major: 5.0,
                inverse_flattening: 0.0
            }
        );
    }

    #[test]
    fn test_triaxial_keeps_axes() {
        let t = derive_shape(
            ShapeKind::Triaxial,
            "Phobos",
            &Axes::new(13000.0, 9100.0, 11400.0, 11080.0),
        )
        .unwrap();
        assert_eq!(
            t.shape,
            Shape::Triaxial {
                semi_major: 13000.0,
                semi_median: 11400.0,
                semi_minor: 9100.0
            }
        );
        assert_eq!(t.warning, None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2440530.0), "2440530");
        assert_eq!(format_number(1234.5), "1234.5");
        assert_eq!(format_number(2440530.00000000001), "2440530");
        assert_eq!(format_number(-90.0), "-90");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(10168580.0 / 3.0), "3389526.6666666665");
    }

    #[test]
    fn test_shape_wkt() {
        let s = ShapeDescriptor {
            name: "Mercury".into(),
            shape: Shape::Sphere { radius: 2440530.0 },
            warning: None,
        };
        assert_eq!(
            s.wkt("2015"),
            "ELLIPSOID[\"Mercury (2015) - Sphere\", 2440530, 0,\n\t\tLENGTHUNIT[\"metre\",1,ID[\"EPSG\",9001]]]"
        );

        let t = ShapeDescriptor {
            name: "Phobos".into(),
            shape: Shape::Triaxial {
                semi_major: 13000.0,
                semi_median: 11400.0,
                semi_minor: 9100.0,
            },
            warning: None,
        };
        assert!(t.wkt("2015").starts_with("TRIAXIAL[\"Phobos (2015)\", 13000, 11400, 9100,"));
    }

    #[test]
    fn test_shape_kind_parsing() {
        assert_eq!("Ellipse".parse::<ShapeKind>().unwrap(), ShapeKind::Ellipsoid);
        assert_eq!(ShapeKind::Ellipsoid.to_string(), "Ellipse");
        assert_eq!(
            "Cube".parse::<ShapeKind>().unwrap_err(),
            WktError::UnsupportedShapeKind("Cube".into())
        );
    }
}
