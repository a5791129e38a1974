//! # Constants and type definitions for iau_wkt
//!
//! This module centralizes the **sentinels**, **WKT unit clauses**, and **common type
//! definitions** used throughout the `iau_wkt` library.
//!
//! ## Overview
//!
//! - Sentinel used by the IAU report for "not provided" measurements
//! - Unit clauses (`LENGTHUNIT`, `ANGLEUNIT`, `SCALEUNIT`) with their EPSG identities
//! - Core type aliases used across the crate
//! - Bodies whose longitude conventions are kept for historical reasons

// -------------------------------------------------------------------------------------------------
// Sentinels and tolerances
// -------------------------------------------------------------------------------------------------

/// Value used by the IAU report when a radius or axis is not provided
pub const MISSING_VALUE: f64 = -1.0;

/// Distance to the nearest integer under which a value is rendered without decimal point
pub const INTEGER_TOLERANCE: f64 = 1e-10;

/// NAIF ids from this value on (comets, asteroids, dwarf planets) always count longitudes eastward
pub const SMALL_BODY_NAIF_ID: NaifId = 90_000;

/// Bodies keeping an east-positive longitude for historical reasons
pub const HISTORICAL_BODIES: [&str; 3] = ["Sun", "Earth", "Moon"];

// -------------------------------------------------------------------------------------------------
// WKT unit clauses
// -------------------------------------------------------------------------------------------------

/// Metre, EPSG:9001
pub const LENGTH_UNIT: &str = r#"LENGTHUNIT["metre",1,ID["EPSG",9001]]"#;

/// Degree, EPSG:9122
pub const ANGLE_UNIT: &str = r#"ANGLEUNIT["degree",0.0174532925199433,ID["EPSG",9122]]"#;

/// Unity scale, EPSG:9201
pub const SCALE_UNIT: &str = r#"SCALEUNIT["unity",1,ID["EPSG",9201]]"#;

// -------------------------------------------------------------------------------------------------
// Output
// -------------------------------------------------------------------------------------------------

/// Name of the file written in the output directory
pub const WKT_FILE_NAME: &str = "iau.wkt";

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Distance in meters
pub type Meter = f64;
/// NAIF body identifier
pub type NaifId = i64;
/// IAU code of a frame or projection (`naif_id * 100 + offset`)
pub type IauCode = i64;
