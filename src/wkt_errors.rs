use thiserror::Error;

#[derive(Error, Debug)]
pub enum WktError {
    #[error("Unsupported shape kind: {0}")]
    UnsupportedShapeKind(String),

    #[error("No authority mapping for projection method or parameter: {0}")]
    CatalogLookup(String),

    #[error("Cannot derive a {shape} shape for {body}: a required measurement is not provided")]
    MissingMeasurement { body: String, shape: String },

    #[error("Invalid rotation: {0}")]
    InvalidRotation(String),

    #[error("Missing column in IAU report: {0}")]
    MissingColumn(String),

    #[error("Unable to detect the IAU report version from the CSV header")]
    UnknownReportVersion,

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for WktError {
    fn eq(&self, other: &Self) -> bool {
        use WktError::*;
        match (self, other) {
            (UnsupportedShapeKind(a), UnsupportedShapeKind(b)) => a == b,
            (CatalogLookup(a), CatalogLookup(b)) => a == b,
            (
                MissingMeasurement { body: b1, shape: s1 },
                MissingMeasurement { body: b2, shape: s2 },
            ) => b1 == b2 && s1 == s2,
            (InvalidRotation(a), InvalidRotation(b)) => a == b,
            (MissingColumn(a), MissingColumn(b)) => a == b,

            // not comparable: same variant is enough
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            (UnknownReportVersion, UnknownReportVersion) => true,

            _ => false,
        }
    }
}
