//! Mesh export formats.

pub mod obj;

pub use obj::export_obj;

use std::str::FromStr;

use crate::error::RipError;

/// Target export format for a conversion batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Wavefront OBJ plus MTL material library.
    Obj,
}

impl ExportFormat {
    /// File extension of the geometry document.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Obj => "obj",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = RipError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "obj" => Ok(ExportFormat::Obj),
            other => Err(RipError::UnsupportedExportFormat(other.to_string())),
        }
    }
}
