//! RIP file header and vertex layout parsing.
//!
//! A RIP file describes its own vertex format: an attribute table lists, per
//! attribute, the byte offset and element type codes of every 32-bit field
//! inside one interleaved vertex record. This module resolves that table
//! into a flat field-type sequence plus the field indices that feed the
//! position, normal and texture coordinate output channels.

use std::io::Read;

use tracing::warn;

use crate::error::{Result, RipError};
use crate::reader::StreamReader;
use crate::types::FieldType;

/// Magic signature of a RIP file.
pub const RIP_SIGNATURE: u32 = 0xDEAD_C0DE;

/// The RIP version this crate was written against. Other versions decode
/// with the same rules, after a warning.
pub const SUPPORTED_VERSION: u32 = 4;

/// Fixed file header, minus the signature (validated and discarded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub version: u32,
    pub face_count: u32,
    pub vertex_count: u32,
    /// Size in bytes of one interleaved vertex record.
    pub vertex_size: u32,
    pub texture_file_count: u32,
    pub shader_file_count: u32,
    pub attribute_count: u32,
}

/// One entry of the attribute table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Semantic type name, e.g. "POSITION" or "TEXCOORD".
    pub semantic: String,
    /// Which occurrence of the semantic this is (e.g. a second UV set).
    pub semantic_index: u32,
    /// Byte offset of the attribute inside one vertex record.
    pub byte_offset: u32,
    /// Size in bytes of one element.
    pub element_size: u32,
    /// Number of elements in the attribute.
    pub element_count: u32,
    /// Element type of every field in the attribute, in order.
    pub element_types: Vec<FieldType>,
}

/// Resolved vertex layout: the file-wide field-type sequence plus the field
/// indices feeding each output channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexFieldLayout {
    /// Element type of every 32-bit field of one vertex record, in decode
    /// order. Its length is the per-vertex field count.
    pub field_types: Vec<FieldType>,
    /// Field indices of position x, y, z.
    pub position: Option<[usize; 3]>,
    /// Field indices of normal x, y, z.
    pub normal: Option<[usize; 3]>,
    /// Field indices of texcoord u, v.
    pub texcoord: Option<[usize; 2]>,
}

/// Read and validate the 8-field file header.
///
/// A wrong signature is fatal for the file. A version other than
/// [`SUPPORTED_VERSION`] is logged and decoding proceeds with the same rules.
pub fn read_header<R: Read>(reader: &mut StreamReader<R>) -> Result<FileHeader> {
    let fields = reader.read_u32_array(8)?;

    let signature = fields[0];
    if signature != RIP_SIGNATURE {
        return Err(RipError::UnsupportedFormat {
            found: signature,
            expected: RIP_SIGNATURE,
        });
    }

    let header = FileHeader {
        version: fields[1],
        face_count: fields[2],
        vertex_count: fields[3],
        vertex_size: fields[4],
        texture_file_count: fields[5],
        shader_file_count: fields[6],
        attribute_count: fields[7],
    };

    if header.version != SUPPORTED_VERSION {
        warn!(
            version = header.version,
            supported = SUPPORTED_VERSION,
            "unexpected RIP version, decoding best-effort"
        );
    }

    Ok(header)
}

fn read_attribute<R: Read>(reader: &mut StreamReader<R>) -> Result<AttributeDescriptor> {
    let semantic = reader.read_cstr()?;
    let info = reader.read_u32_array(4)?;
    let element_count = info[3];

    let codes = reader.read_u32_array(element_count as usize)?;
    let element_types = codes
        .into_iter()
        .map(FieldType::from_code)
        .collect::<Result<Vec<_>>>()?;

    Ok(AttributeDescriptor {
        semantic,
        semantic_index: info[0],
        byte_offset: info[1],
        element_size: info[2],
        element_count,
        element_types,
    })
}

/// Read the attribute table and resolve it into a [`VertexFieldLayout`].
///
/// Only the first POSITION, NORMAL and TEXCOORD attribute claims its output
/// channel; later attributes with the same semantic are still read so the
/// stream stays in sync. Field indices derive from the attribute's byte
/// offset (each field is 4 bytes), not from where its type codes land in the
/// running sequence; the format requires the two to agree.
pub fn read_layout<R: Read>(
    reader: &mut StreamReader<R>,
    attribute_count: u32,
) -> Result<(VertexFieldLayout, Vec<AttributeDescriptor>)> {
    let mut layout = VertexFieldLayout::default();
    let mut attributes = Vec::with_capacity(attribute_count as usize);

    for _ in 0..attribute_count {
        let attribute = read_attribute(reader)?;
        layout.field_types.extend(&attribute.element_types);

        let first = (attribute.byte_offset / 4) as usize;
        match attribute.semantic.as_str() {
            "POSITION" if layout.position.is_none() => {
                layout.position = Some([first, first + 1, first + 2]);
            }
            "NORMAL" if layout.normal.is_none() => {
                layout.normal = Some([first, first + 1, first + 2]);
            }
            "TEXCOORD" if layout.texcoord.is_none() => {
                layout.texcoord = Some([first, first + 1]);
            }
            _ => {}
        }

        attributes.push(attribute);
    }

    Ok((layout, attributes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::RipFileBuilder;

    fn reader_over(bytes: Vec<u8>) -> StreamReader<std::io::Cursor<Vec<u8>>> {
        StreamReader::new(std::io::Cursor::new(bytes))
    }

    #[test]
    fn test_read_header() {
        let bytes = RipFileBuilder::new()
            .attribute("POSITION", 0, 0, &[0, 0, 0])
            .texture("grass.png")
            .face([0, 1, 2])
            .build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        assert_eq!(header.version, SUPPORTED_VERSION);
        assert_eq!(header.face_count, 1);
        assert_eq!(header.vertex_count, 0);
        assert_eq!(header.vertex_size, 12);
        assert_eq!(header.texture_file_count, 1);
        assert_eq!(header.shader_file_count, 0);
        assert_eq!(header.attribute_count, 1);
    }

    #[test]
    fn test_read_header_rejects_bad_signature() {
        let bytes = RipFileBuilder::new().signature(0xBADF00D).build();
        let mut reader = reader_over(bytes);

        let err = read_header(&mut reader).unwrap_err();
        assert!(matches!(
            err,
            RipError::UnsupportedFormat {
                found: 0xBADF00D,
                ..
            }
        ));
    }

    #[test]
    fn test_read_header_tolerates_other_versions() {
        let bytes = RipFileBuilder::new().version(9).build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        assert_eq!(header.version, 9);
    }

    #[test]
    fn test_role_mapping_from_byte_offsets() {
        let bytes = RipFileBuilder::new()
            .attribute("POSITION", 0, 0, &[0, 0, 0])
            .attribute("NORMAL", 0, 12, &[0, 0, 0])
            .attribute("TEXCOORD", 0, 24, &[0, 0])
            .build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        let (layout, attributes) = read_layout(&mut reader, header.attribute_count).unwrap();

        assert_eq!(layout.field_types.len(), 8);
        assert_eq!(layout.position, Some([0, 1, 2]));
        assert_eq!(layout.normal, Some([3, 4, 5]));
        assert_eq!(layout.texcoord, Some([6, 7]));

        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes[1].semantic, "NORMAL");
        assert_eq!(attributes[1].byte_offset, 12);
        assert_eq!(attributes[2].element_count, 2);
    }

    #[test]
    fn test_first_semantic_occurrence_wins() {
        let bytes = RipFileBuilder::new()
            .attribute("TEXCOORD", 0, 0, &[0, 0])
            .attribute("TEXCOORD", 1, 8, &[0, 0])
            .build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        let (layout, _) = read_layout(&mut reader, header.attribute_count).unwrap();

        // Second UV set is parsed (its codes land in the sequence) but
        // does not steal the role.
        assert_eq!(layout.field_types.len(), 4);
        assert_eq!(layout.texcoord, Some([0, 1]));
    }

    #[test]
    fn test_mixed_type_codes() {
        let bytes = RipFileBuilder::new()
            .attribute("BLENDINDICES", 0, 0, &[1, 2, 0])
            .build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        let (layout, _) = read_layout(&mut reader, header.attribute_count).unwrap();

        assert_eq!(
            layout.field_types,
            vec![FieldType::U32, FieldType::I32, FieldType::F32]
        );
        assert_eq!(layout.position, None);
    }

    #[test]
    fn test_unknown_type_code_fails() {
        let bytes = RipFileBuilder::new()
            .attribute("POSITION", 0, 0, &[0, 9, 0])
            .build();
        let mut reader = reader_over(bytes);

        let header = read_header(&mut reader).unwrap();
        let err = read_layout(&mut reader, header.attribute_count).unwrap_err();
        assert!(matches!(err, RipError::Decode(_)));
    }
}
