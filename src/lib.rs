//! # ripmesh
//!
//! A Rust library for converting NinjaRipper RIP mesh captures to
//! Wavefront OBJ.
//!
//! ## Overview
//!
//! RIP files carry a self-describing vertex layout: an attribute table
//! names each field group and gives its byte offset inside an interleaved
//! vertex record, so the per-vertex stride and field types are discovered
//! from the file itself. This library reads that table, decodes the typed
//! geometry it describes, and merges any number of captures into a single
//! OBJ/MTL document pair with globally renumbered 1-based face indices.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ripmesh::{convert_files, ExportFormat};
//!
//! // Convert a batch of captures into out/scene.obj + out/scene.mtl
//! let report = convert_files(&["scene.rip", "prop.rip"], "out", ExportFormat::Obj)?;
//! assert!(report.is_complete());
//! ```
//!
//! The individual stages are public too: [`decode_path`] produces a
//! [`Mesh`] per file, and [`export_obj`] merges decoded meshes into
//! document text without touching the filesystem.

pub mod convert;
pub mod decoder;
pub mod error;
pub mod export;
pub mod layout;
pub mod mesh;
pub mod reader;
pub mod types;

#[cfg(test)]
mod test_util;

// Re-export main types for convenience
pub use convert::{convert, convert_files, find_rip_files, ConversionReport, ConversionRequest};
pub use decoder::{decode_path, decode_stream};
pub use error::{Result, RipError};
pub use export::{export_obj, ExportFormat};
pub use layout::{AttributeDescriptor, FileHeader, VertexFieldLayout};
pub use mesh::Mesh;
pub use reader::StreamReader;
pub use types::{FieldType, Scalar};
