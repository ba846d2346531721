//! RIP mesh decoding.
//!
//! The decode order mirrors the file: header, attribute table, texture
//! filenames, shader filenames, face index table, then the interleaved
//! vertex records. Each record is decoded field-by-field following the
//! file-wide type-code sequence, so the stream stays aligned even for
//! fields no output channel claims.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::layout::{self, VertexFieldLayout};
use crate::mesh::Mesh;
use crate::reader::StreamReader;
use crate::types::Scalar;

/// Decode one mesh from a RIP byte stream positioned at the start.
pub fn decode_stream<R: Read>(reader: &mut StreamReader<R>) -> Result<Mesh> {
    let header = layout::read_header(reader)?;
    let (field_layout, _attributes) = layout::read_layout(reader, header.attribute_count)?;

    debug!(
        faces = header.face_count,
        vertices = header.vertex_count,
        fields = field_layout.field_types.len(),
        "decoding mesh"
    );

    let mut mesh = Mesh::default();

    for _ in 0..header.texture_file_count {
        mesh.texture_files.push(reader.read_cstr()?);
    }
    for _ in 0..header.shader_file_count {
        mesh.shader_files.push(reader.read_cstr()?);
    }

    for _ in 0..header.face_count {
        let indices = reader.read_u32_array(3)?;
        mesh.faces.push([indices[0], indices[1], indices[2]]);
    }

    for _ in 0..header.vertex_count {
        let (position, normal, texcoord) = decode_vertex(reader, &field_layout)?;
        mesh.positions.push(position);
        mesh.normals.push(normal);
        mesh.texcoords.push(texcoord);
    }

    Ok(mesh)
}

/// Decode one mesh from a RIP file on disk.
///
/// The file handle is held only for the duration of the decode and released
/// on every exit path.
pub fn decode_path<P: AsRef<Path>>(path: P) -> Result<Mesh> {
    let file = File::open(path.as_ref())?;
    let mut reader = StreamReader::new(BufReader::new(file));
    decode_stream(&mut reader)
}

/// Decode one vertex record, routing role fields into their output slots.
/// Unclaimed fields are read and discarded; unclaimed roles stay zero.
fn decode_vertex<R: Read>(
    reader: &mut StreamReader<R>,
    layout: &VertexFieldLayout,
) -> Result<([Scalar; 3], [Scalar; 3], [Scalar; 2])> {
    let mut position = [Scalar::default(); 3];
    let mut normal = [Scalar::default(); 3];
    let mut texcoord = [Scalar::default(); 2];

    for (field, ty) in layout.field_types.iter().enumerate() {
        let value = reader.read_scalar(*ty)?;

        if let Some([x, y, z]) = layout.position {
            if field == x {
                position[0] = value;
            } else if field == y {
                position[1] = value;
            } else if field == z {
                position[2] = value;
            }
        }
        if let Some([x, y, z]) = layout.normal {
            if field == x {
                normal[0] = value;
            } else if field == y {
                normal[1] = value;
            } else if field == z {
                normal[2] = value;
            }
        }
        if let Some([u, v]) = layout.texcoord {
            if field == u {
                texcoord[0] = value;
            } else if field == v {
                // The format's V axis is flipped relative to OBJ.
                texcoord[1] = value.one_minus();
            }
        }
    }

    Ok((position, normal, texcoord))
}
