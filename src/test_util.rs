//! Test-only construction of well-formed RIP byte streams.

use crate::layout::{RIP_SIGNATURE, SUPPORTED_VERSION};

/// One raw vertex field value, serialized per its wire type.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue {
    F(f32),
    U(u32),
    I(i32),
}

impl FieldValue {
    fn to_le_bytes(self) -> [u8; 4] {
        match self {
            FieldValue::F(v) => v.to_le_bytes(),
            FieldValue::U(v) => v.to_le_bytes(),
            FieldValue::I(v) => v.to_le_bytes(),
        }
    }
}

struct AttributeSpec {
    name: String,
    semantic_index: u32,
    byte_offset: u32,
    element_size: u32,
    type_codes: Vec<u32>,
}

/// Builds RIP byte vectors for decoder and converter tests.
pub struct RipFileBuilder {
    signature: u32,
    version: u32,
    attributes: Vec<AttributeSpec>,
    textures: Vec<String>,
    shaders: Vec<String>,
    faces: Vec<[u32; 3]>,
    vertices: Vec<Vec<FieldValue>>,
}

impl RipFileBuilder {
    pub fn new() -> Self {
        Self {
            signature: RIP_SIGNATURE,
            version: SUPPORTED_VERSION,
            attributes: Vec::new(),
            textures: Vec::new(),
            shaders: Vec::new(),
            faces: Vec::new(),
            vertices: Vec::new(),
        }
    }

    pub fn signature(mut self, signature: u32) -> Self {
        self.signature = signature;
        self
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn attribute(
        mut self,
        name: &str,
        semantic_index: u32,
        byte_offset: u32,
        type_codes: &[u32],
    ) -> Self {
        self.attributes.push(AttributeSpec {
            name: name.to_string(),
            semantic_index,
            byte_offset,
            element_size: 4,
            type_codes: type_codes.to_vec(),
        });
        self
    }

    pub fn texture(mut self, name: &str) -> Self {
        self.textures.push(name.to_string());
        self
    }

    pub fn shader(mut self, name: &str) -> Self {
        self.shaders.push(name.to_string());
        self
    }

    pub fn face(mut self, indices: [u32; 3]) -> Self {
        self.faces.push(indices);
        self
    }

    pub fn vertex(mut self, fields: &[FieldValue]) -> Self {
        self.vertices.push(fields.to_vec());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let field_count: usize = self.attributes.iter().map(|a| a.type_codes.len()).sum();

        let mut bytes = Vec::new();
        for value in [
            self.signature,
            self.version,
            self.faces.len() as u32,
            self.vertices.len() as u32,
            (field_count * 4) as u32,
            self.textures.len() as u32,
            self.shaders.len() as u32,
            self.attributes.len() as u32,
        ] {
            bytes.extend_from_slice(&value.to_le_bytes());
        }

        for attr in &self.attributes {
            bytes.extend_from_slice(attr.name.as_bytes());
            bytes.push(0);
            for value in [
                attr.semantic_index,
                attr.byte_offset,
                attr.element_size,
                attr.type_codes.len() as u32,
            ] {
                bytes.extend_from_slice(&value.to_le_bytes());
            }
            for code in &attr.type_codes {
                bytes.extend_from_slice(&code.to_le_bytes());
            }
        }

        for name in self.textures.iter().chain(&self.shaders) {
            bytes.extend_from_slice(name.as_bytes());
            bytes.push(0);
        }

        for face in &self.faces {
            for index in face {
                bytes.extend_from_slice(&index.to_le_bytes());
            }
        }

        for vertex in &self.vertices {
            for field in vertex {
                bytes.extend_from_slice(&field.to_le_bytes());
            }
        }

        bytes
    }
}

/// A single-triangle capture with the standard position/normal/texcoord
/// layout.
pub fn triangle_capture() -> RipFileBuilder {
    use FieldValue::F;

    RipFileBuilder::new()
        .attribute("POSITION", 0, 0, &[0, 0, 0])
        .attribute("NORMAL", 0, 12, &[0, 0, 0])
        .attribute("TEXCOORD", 0, 24, &[0, 0])
        .face([0, 1, 2])
        .vertex(&[
            F(0.0),
            F(0.0),
            F(0.0),
            F(0.0),
            F(1.0),
            F(0.0),
            F(0.0),
            F(0.25),
        ])
        .vertex(&[
            F(1.0),
            F(0.0),
            F(0.0),
            F(0.0),
            F(1.0),
            F(0.0),
            F(1.0),
            F(0.25),
        ])
        .vertex(&[
            F(0.0),
            F(0.0),
            F(1.0),
            F(0.0),
            F(1.0),
            F(0.0),
            F(0.0),
            F(0.75),
        ])
}
