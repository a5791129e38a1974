//! # Report processing
//!
//! [`WktProcessor`] turns the bodies of an IAU report into the full [`CrsSet`]: the frames
//! chosen for each body by [`select_frames`] and the 16 projections of every frame.
//!
//! ## Overview
//!
//! 1. Records without any axis, and records with partial axes and no mean radius, are
//!    skipped and counted.
//! 2. The remaining records are split into biaxial and triaxial bodies
//!    (see [`crate::duplication`]).
//! 3. The frames of the biaxial bodies are built and inserted by IAU code, then those of the
//!    triaxial bodies, replacing any frame stored under the same code.
//! 4. Every frame is expanded into its projections, inserted in the same set.
//!
//! The pass is deterministic and stops at the first error; no partial result is returned.
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    body_record::BodyRecord,
    crs::{Crs, CrsSet},
    datum::{Anchor, Datum},
    duplication::{classify_body, select_frames, BodyClass},
    frame::Frame,
    iau_report::IauReport,
    projection::iter_projections,
    shape::derive_shape,
    wkt_errors::WktError,
};

/// Number of records per class seen during a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub skipped: usize,
    pub biaxial: usize,
    pub triaxial: usize,
    pub sphere_only: usize,
}

/// Builds the CRS of an IAU report.
#[derive(Debug, Clone)]
pub struct WktProcessor {
    report: Arc<IauReport>,
}

impl WktProcessor {
    pub fn new(report: IauReport) -> Self {
        WktProcessor {
            report: Arc::new(report),
        }
    }

    pub fn report(&self) -> &IauReport {
        &self.report
    }

    /// Build the frames selected for one body.
    ///
    /// Arguments
    /// -----------------
    /// * `body`: the body record.
    ///
    /// Return
    /// ----------
    /// * The frames, in the order given by [`select_frames`]; empty for an unusable record.
    pub fn build_frames(&self, body: &BodyRecord) -> Result<Vec<Arc<Frame>>, WktError> {
        select_frames(body)
            .into_iter()
            .map(|reference| -> Result<Arc<Frame>, WktError> {
                let kind = reference.shape_kind();
                let shape = derive_shape(kind, &body.name, &body.axes)?;
                let datum = Datum::new(kind, &body.name, shape, Anchor::new(body.anchor_text()));
                let frame = Frame::new(
                    datum,
                    body.naif_id,
                    body.rotation,
                    reference,
                    Arc::clone(&self.report),
                )?;
                debug!("{} ({}) -> IAU:{}", body.name, reference, frame.iau_code());
                Ok(Arc::new(frame))
            })
            .collect()
    }

    /// Process every record of a report.
    ///
    /// See also
    /// ------------
    /// * [`WktProcessor::process_with_summary`] – same, also returning the record counts.
    pub fn process(&self, records: &[BodyRecord]) -> Result<CrsSet, WktError> {
        self.process_with_summary(records).map(|(crs_set, _)| crs_set)
    }

    /// Process every record of a report.
    ///
    /// Arguments
    /// -----------------
    /// * `records`: bodies of the report, in any order.
    ///
    /// Return
    /// ----------
    /// * The CRS sorted by IAU code and the number of records per class, or the first error.
    pub fn process_with_summary(
        &self,
        records: &[BodyRecord],
    ) -> Result<(CrsSet, ProcessSummary), WktError> {
        let mut summary = ProcessSummary::default();
        let mut biaxial_bodies = Vec::new();
        let mut triaxial_bodies = Vec::new();

        for body in records {
            match classify_body(body) {
                BodyClass::Unusable => {
                    if body.axes.is_partial() {
                        warn!(
                            "{} ({}): partial axes without mean radius, skipped",
                            body.name, body.naif_id
                        );
                    } else {
                        debug!("{} ({}): no axis provided, skipped", body.name, body.naif_id);
                    }
                    summary.skipped += 1;
                }
                BodyClass::SphereOnly => {
                    warn!(
                        "{} ({}): partial axes, only the sphere is emitted",
                        body.name, body.naif_id
                    );
                    summary.sphere_only += 1;
                    biaxial_bodies.push(body);
                }
                BodyClass::Biaxial => {
                    summary.biaxial += 1;
                    biaxial_bodies.push(body);
                }
                BodyClass::Triaxial => {
                    summary.triaxial += 1;
                    triaxial_bodies.push(body);
                }
            }
        }

        // triaxial frames are merged last and win a shared code
        let mut crs_set = CrsSet::new();
        let mut frames = Vec::new();
        for body in biaxial_bodies.into_iter().chain(triaxial_bodies) {
            for frame in self.build_frames(body)? {
                insert_crs(&mut crs_set, Crs::Frame(Arc::clone(&frame)));
                frames.push(frame);
            }
        }

        info!("Records skipped (no usable shape data): {}", summary.skipped);
        info!(
            "Biaxial bodies: {}, triaxial bodies: {}, sphere only: {}",
            summary.biaxial, summary.triaxial, summary.sphere_only
        );

        for frame in frames {
            for projection in iter_projections(frame) {
                insert_crs(&mut crs_set, Crs::Projection(projection?));
            }
        }

        info!("Number of CRS: {}", crs_set.len());
        Ok((crs_set, summary))
    }
}

/// Insert a CRS, replacing any CRS already stored under its code.
fn insert_crs(crs_set: &mut CrsSet, crs: Crs) {
    let code = crs.iau_code();
    if let Some(previous) = crs_set.insert(code, crs) {
        warn!(
            "IAU:{code} already used by {}, replaced",
            previous.body_name()
        );
    }
}
