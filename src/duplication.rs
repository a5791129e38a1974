//! # Frame selection
//!
//! Decides, per body, which frames are worth emitting. Several frames of a body can describe
//! the same thing: on a sphere the planetocentric and planetographic latitudes are equal, and
//! when longitudes are also counted eastward the planetographic frame is a copy of the
//! planetocentric one. Only non redundant frames are kept.
//!
//! ## Classification
//!
//! | axes                                              | class         |
//! |---------------------------------------------------|---------------|
//! | semi-major, semi-minor and axis b not provided    | `Unusable`    |
//! | some axes missing, mean radius provided           | `SphereOnly`  |
//! | some axes missing, no mean radius                 | `Unusable`    |
//! | no two axes equal                                 | `Triaxial`    |
//! | otherwise                                         | `Biaxial`     |
//!
//! ## Rules
//!
//! * every usable body gets the interoperability sphere (`Sphere-Ocentric`);
//! * a biaxial body gets `Ellipse-Ocentric` unless it is a sphere;
//! * a biaxial body gets `Ellipse-Ographic` unless it is a sphere **and** it rotates
//!   retrograde or is named exactly `Sun`, `Earth` or `Moon`;
//! * a triaxial body gets both `Triaxial-Ocentric` and `Triaxial-Ographic`.
use smallvec::{smallvec, SmallVec};

use crate::{body_record::BodyRecord, frame::ReferenceKind};

/// Frames selected for one body, in the order they are built.
pub type FrameSelection = SmallVec<[ReferenceKind; 3]>;

/// Shape class of a body record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyClass {
    Biaxial,
    Triaxial,
    SphereOnly,
    Unusable,
}

pub fn classify_body(body: &BodyRecord) -> BodyClass {
    let axes = &body.axes;
    if axes.has_no_axis() {
        BodyClass::Unusable
    } else if axes.is_partial() {
        if axes.mean.is_some() {
            BodyClass::SphereOnly
        } else {
            BodyClass::Unusable
        }
    } else if axes.are_pairwise_distinct() {
        BodyClass::Triaxial
    } else {
        BodyClass::Biaxial
    }
}

/// Frames to build for a body.
///
/// Return
/// ----------
/// * The reference kinds to build, empty for an unusable body.
pub fn select_frames(body: &BodyRecord) -> FrameSelection {
    match classify_body(body) {
        BodyClass::Unusable => SmallVec::new(),
        BodyClass::SphereOnly => smallvec![ReferenceKind::SphereOcentric],
        BodyClass::Triaxial => smallvec![
            ReferenceKind::SphereOcentric,
            ReferenceKind::TriaxialOcentric,
            ReferenceKind::TriaxialOgraphic,
        ],
        BodyClass::Biaxial => {
            let is_sphere = body.axes.is_sphere();
            let mut frames: FrameSelection = smallvec![ReferenceKind::SphereOcentric];
            if !is_sphere {
                frames.push(ReferenceKind::EllipseOcentric);
            }
            if !(is_sphere && (body.is_retrograde() || body.is_historic())) {
                frames.push(ReferenceKind::EllipseOgraphic);
            }
            frames
        }
    }
}
