//! Conversion orchestration.
//!
//! Decodes a batch of RIP files one at a time and writes the merged export
//! documents once, after the whole batch has been read. Sources that fail
//! to decode are reported and skipped rather than aborting the batch.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::decoder;
use crate::error::{Result, RipError};
use crate::export::{self, ExportFormat};
use crate::mesh::Mesh;

/// One batch of files to convert. Consumed by [`convert`].
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Source RIP files, merged in the given order.
    pub sources: Vec<PathBuf>,
    /// Directory the output documents are written into.
    pub output_dir: PathBuf,
    /// Target export format.
    pub format: ExportFormat,
    /// Overwrite existing output files. Accepted for forward compatibility;
    /// output is currently always rewritten.
    pub overwrite: bool,
}

impl ConversionRequest {
    pub fn new(
        sources: Vec<PathBuf>,
        output_dir: impl Into<PathBuf>,
        format: ExportFormat,
    ) -> Self {
        Self {
            sources,
            output_dir: output_dir.into(),
            format,
            overwrite: true,
        }
    }
}

/// Outcome of one conversion batch.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// Sources that decoded successfully, in input order.
    pub converted: Vec<PathBuf>,
    /// Sources that failed to decode, with the error for each.
    pub failed: Vec<(PathBuf, RipError)>,
    /// Output documents written.
    pub outputs: Vec<PathBuf>,
}

impl ConversionReport {
    /// Whether every source converted.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert a batch of RIP files into one merged export document pair.
///
/// Each source is opened, decoded and closed before the next one. The
/// surviving meshes are merged and written as `<stem>.obj` / `<stem>.mtl`
/// inside the output directory, stem taken from the first source path. A
/// batch in which nothing decodes writes no output; the report carries the
/// per-file failures either way.
pub fn convert(request: ConversionRequest) -> Result<ConversionReport> {
    if request.sources.is_empty() {
        return Err(RipError::InvalidSelection(
            "no input files selected".to_string(),
        ));
    }
    if !request.output_dir.is_dir() {
        return Err(RipError::InvalidSelection(format!(
            "output directory {} does not exist",
            request.output_dir.display()
        )));
    }

    let mut report = ConversionReport::default();
    let mut meshes: Vec<Mesh> = Vec::new();

    for source in &request.sources {
        match decoder::decode_path(source) {
            Ok(mesh) => {
                report.converted.push(source.clone());
                meshes.push(mesh);
            }
            Err(err) => {
                warn!(source = %source.display(), error = %err, "skipping file");
                report.failed.push((source.clone(), err));
            }
        }
    }

    if meshes.is_empty() {
        return Ok(report);
    }

    let stem = request.sources[0]
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());

    match request.format {
        ExportFormat::Obj => {
            let (obj, mtl) = export::export_obj(&meshes, &stem)?;
            let obj_path = request
                .output_dir
                .join(format!("{}.{}", stem, request.format.extension()));
            let mtl_path = request.output_dir.join(format!("{}.mtl", stem));
            fs::write(&obj_path, obj)?;
            fs::write(&mtl_path, mtl)?;
            info!(obj = %obj_path.display(), mtl = %mtl_path.display(), "wrote export");
            report.outputs.push(obj_path);
            report.outputs.push(mtl_path);
        }
    }

    Ok(report)
}

/// Convert source files with default options. This is the entry point front
/// ends call.
pub fn convert_files<P: AsRef<Path>>(
    sources: &[P],
    output_dir: impl AsRef<Path>,
    format: ExportFormat,
) -> Result<ConversionReport> {
    let sources = sources.iter().map(|p| p.as_ref().to_path_buf()).collect();
    convert(ConversionRequest::new(sources, output_dir.as_ref(), format))
}

/// Find every `.rip` file directly inside `dir`, sorted by name. The
/// extension match is case-insensitive; an empty scan is an error.
pub fn find_rip_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RipError::InvalidSelection(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_rip = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("rip"))
            .unwrap_or(false);
        if is_rip && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(RipError::NoInputFiles(dir.to_path_buf()));
    }

    Ok(files)
}
