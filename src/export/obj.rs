//! Wavefront OBJ export.
//!
//! Merges any number of decoded meshes into one OBJ document plus one MTL
//! material library. OBJ indices are 1-based and global across the whole
//! document, so each mesh's local face indices are shifted by a running
//! offset while its faces are emitted.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::error::Result;
use crate::mesh::Mesh;

/// First line of both generated documents.
const HEADER: &str = "# Converted with ripmesh";

/// Placeholder material constants emitted for every referenced texture.
const DEFAULT_MATERIAL: &str = "Ka 0.000000 0.000000 0.000000\nKd 0.376320 0.376320 0.376320\nKs 0.000000 0.000000 0.000000";

/// Export meshes to OBJ format, in input order.
/// Returns (obj_content, mtl_content) as strings; `name` is the stem the
/// material library will be written under.
pub fn export_obj(meshes: &[Mesh], name: &str) -> Result<(String, String)> {
    let mut obj = String::new();
    let mut mtl = String::new();

    writeln!(obj, "{}", HEADER).unwrap();
    writeln!(mtl, "{}", HEADER).unwrap();

    // Unique texture names across the whole batch, in stable order.
    let textures: BTreeSet<&str> = meshes
        .iter()
        .flat_map(|m| m.texture_files.iter().map(String::as_str))
        .collect();

    if !textures.is_empty() {
        writeln!(obj, "mtllib {}.mtl", name).unwrap();

        for tex in &textures {
            writeln!(mtl, "newmtl {}", tex).unwrap();
            writeln!(mtl, "{}", DEFAULT_MATERIAL).unwrap();
            writeln!(mtl, "map_Kd {}", tex).unwrap();
            writeln!(mtl).unwrap();
        }
    }

    // Highest 1-based vertex index any emitted face has used so far. The
    // next mesh's local indices start right after it; a mesh without faces
    // leaves it untouched.
    let mut highest_index: u32 = 0;

    for (idx, mesh) in meshes.iter().enumerate() {
        writeln!(obj, "o Object{}", idx).unwrap();
        for tex in &mesh.texture_files {
            writeln!(obj, "usemtl {}", tex).unwrap();
        }

        for [x, y, z] in &mesh.positions {
            writeln!(obj, "v {} {} {}", x, y, z).unwrap();
        }
        for [x, y, z] in &mesh.normals {
            writeln!(obj, "vn {} {} {}", x, y, z).unwrap();
        }
        for [u, v] in &mesh.texcoords {
            writeln!(obj, "vt {} {}", u, v).unwrap();
        }

        let offset = highest_index + 1;
        for face in &mesh.faces {
            obj.push('f');
            for local in face {
                let global = local + offset;
                highest_index = highest_index.max(global);
                // One shared index per corner; positions, normals and
                // texcoords are vertex-count-aligned by construction.
                write!(obj, " {}/{}/{}", global, global, global).unwrap();
            }
            obj.push('\n');
        }
    }

    Ok((obj, mtl))
}
