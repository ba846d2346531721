//! Sequential binary reading over a RIP byte stream.

use std::io::Read;

use crate::error::{Result, RipError};
use crate::types::{FieldType, Scalar};

/// Sequential little-endian cursor over a byte source.
///
/// The reader only ever advances; it never seeks. Strings are read one byte
/// at a time, so file handles should be wrapped in a `BufReader`.
pub struct StreamReader<R> {
    inner: R,
}

impl<R: Read> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    fn read_bytes(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        self.inner
            .read_exact(buf)
            .map_err(|e| RipError::Decode(format!("failed to read {}: {}", what, e)))
    }

    /// Read a NUL-terminated ASCII string. The NUL byte is consumed but not
    /// included in the result.
    pub fn read_cstr(&mut self) -> Result<String> {
        let mut out = String::new();
        loop {
            let mut byte = [0u8; 1];
            self.read_bytes(&mut byte, "string")?;
            if byte[0] == 0 {
                break;
            }
            if !byte[0].is_ascii() {
                return Err(RipError::Decode(format!(
                    "non-ASCII byte {:#04x} in string",
                    byte[0]
                )));
            }
            out.push(byte[0] as char);
        }
        Ok(out)
    }

    /// Read one little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.read_bytes(&mut bytes, "u32")?;
        Ok(u32::from_le_bytes(bytes))
    }

    /// Read `count` consecutive little-endian u32 values.
    pub fn read_u32_array(&mut self, count: usize) -> Result<Vec<u32>> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.read_u32()?);
        }
        Ok(values)
    }

    /// Read exactly 4 bytes and reinterpret them per the field type.
    pub fn read_scalar(&mut self, ty: FieldType) -> Result<Scalar> {
        let mut bytes = [0u8; 4];
        self.read_bytes(&mut bytes, "vertex field")?;
        Ok(match ty {
            FieldType::F32 => Scalar::Float(f32::from_le_bytes(bytes)),
            FieldType::U32 => Scalar::Int(u32::from_le_bytes(bytes) as i64),
            FieldType::I32 => Scalar::Int(i32::from_le_bytes(bytes) as i64),
        })
    }
}
