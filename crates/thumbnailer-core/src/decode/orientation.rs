//! EXIF orientation reading.
//!
//! The reader sits on top of a narrow [`ExifParser`] interface so the
//! "missing or broken metadata means upright" policy does not depend on
//! which EXIF library does the parsing.

use std::collections::HashMap;
use std::io::Cursor;

use exif::{Context, In, Reader};
use thiserror::Error;

use super::ContentType;

/// TIFF tag number of the orientation field.
pub const ORIENTATION_TAG: u16 = 0x0112;

/// Orientation code meaning "no transformation".
pub const IDENTITY_ORIENTATION: u32 = 1;

/// Errors from EXIF parsing. Never surfaced by [`read_orientation`].
#[derive(Debug, Error)]
pub enum ExifError {
    /// The buffer has no readable EXIF segment.
    #[error("EXIF parse error: {0}")]
    Parse(String),

    /// The EXIF segment parsed but lacks an integer value for the tag.
    #[error("EXIF tag {0:#06x} not found")]
    MissingTag(u16),
}

/// Integer-valued primary-IFD tags, keyed by tag number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    values: HashMap<u16, u32>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tag value. The first value recorded for a tag wins.
    pub fn insert(&mut self, tag: u16, value: u32) {
        self.values.entry(tag).or_insert(value);
    }

    pub fn get(&self, tag: u16) -> Option<u32> {
        self.values.get(&tag).copied()
    }

    /// The raw orientation value, unclamped.
    pub fn orientation(&self) -> Result<u32, ExifError> {
        self.get(ORIENTATION_TAG)
            .ok_or(ExifError::MissingTag(ORIENTATION_TAG))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(u16, u32)> for TagTable {
    fn from_iter<I: IntoIterator<Item = (u16, u32)>>(iter: I) -> Self {
        let mut table = TagTable::new();
        for (tag, value) in iter {
            table.insert(tag, value);
        }
        table
    }
}

/// Something that can pull EXIF tags out of an image container.
pub trait ExifParser {
    fn parse(&self, bytes: &[u8]) -> Result<TagTable, ExifError>;
}

/// [`ExifParser`] backed by the `kamadak-exif` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct KamadakExif;

impl ExifParser for KamadakExif {
    fn parse(&self, bytes: &[u8]) -> Result<TagTable, ExifError> {
        let mut cursor = Cursor::new(bytes);
        let exif = Reader::new()
            .read_from_container(&mut cursor)
            .map_err(|e| ExifError::Parse(e.to_string()))?;

        Ok(exif
            .fields()
            .filter(|field| field.ifd_num == In::PRIMARY && field.tag.context() == Context::Tiff)
            .filter_map(|field| {
                field
                    .value
                    .get_uint(0)
                    .map(|value| (field.tag.number(), value))
            })
            .collect())
    }
}

/// Read the EXIF orientation code from image bytes.
///
/// Returns 1 for anything that is not a JPEG, and for JPEGs without a
/// readable orientation tag. Values are returned verbatim, so a malformed
/// file may yield codes outside 1-8.
pub fn read_orientation(bytes: &[u8]) -> u32 {
    read_orientation_with(&KamadakExif, bytes)
}

/// [`read_orientation`] with a caller-supplied parser.
pub fn read_orientation_with<P>(parser: &P, bytes: &[u8]) -> u32
where
    P: ExifParser + ?Sized,
{
    if ContentType::sniff(bytes) != ContentType::Jpeg {
        return IDENTITY_ORIENTATION;
    }

    parser
        .parse(bytes)
        .and_then(|tags| tags.orientation())
        .unwrap_or(IDENTITY_ORIENTATION)
}
