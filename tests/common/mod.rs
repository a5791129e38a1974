use camino::Utf8Path;
use iau_wkt::{
    body_record::read_iau_report, crs::CrsSet, iau_report::IauReport, processor::WktProcessor,
};

pub const SAMPLE_REPORT: &str = "tests/data/naifcodes_radii_m_sample_IAU2015.csv";

pub fn process_sample(report: IauReport) -> CrsSet {
    let records = read_iau_report(Utf8Path::new(SAMPLE_REPORT), &report.version).unwrap();
    WktProcessor::new(report).process(&records).unwrap()
}

/// Text of the first `ELLIPSOID[...]` or `TRIAXIAL[...]` value list of a WKT, split on commas.
pub fn shape_values(wkt: &str) -> Vec<String> {
    let start = wkt
        .find("ELLIPSOID[")
        .or_else(|| wkt.find("TRIAXIAL["))
        .expect("no shape clause");
    let clause = &wkt[start..];
    let end = clause.find(",\n").expect("unterminated shape clause");
    clause[..end]
        .split(", ")
        .skip(1)
        .map(str::to_string)
        .collect()
}
