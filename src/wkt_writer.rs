//! Writing a [`CrsSet`] as WKT text.
use std::{
    fs::File,
    io::{BufWriter, Write},
};

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

use crate::{constants::WKT_FILE_NAME, crs::CrsSet, wkt_errors::WktError};

/// Write every CRS in ascending code order, each followed by a blank line.
pub fn write_wkt<W: Write>(crs_set: &CrsSet, mut writer: W) -> Result<(), WktError> {
    for crs in crs_set.values() {
        write!(writer, "{crs}\n\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the CRS set to `<directory>/iau.wkt`.
///
/// Arguments
/// -----------------
/// * `crs_set`: the CRS to write.
/// * `directory`: an existing directory.
///
/// Return
/// ----------
/// * The path of the written file.
pub fn save_wkt(crs_set: &CrsSet, directory: &Utf8Path) -> Result<Utf8PathBuf, WktError> {
    let path = directory.join(WKT_FILE_NAME);
    write_wkt(crs_set, BufWriter::new(File::create(&path)?))?;
    info!("{} CRS written to {path}", crs_set.len());
    Ok(path)
}
