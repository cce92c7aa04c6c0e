// Flat binary layout of a hyphenation data asset.
//
// Layout, in order, all offsets fixed:
//   [13  i8]  beginning table
//   [676 i8]  general matrix
//   [676 i8]  ending matrix
//   [676 i8]  context matrix
//   [676 i8]  fallback matrix
//   [26 u16]  suffix index, little-endian, 0 = no entries
//   [..]      suffix blob (length-prefixed records)

use hyphen_core::{ALPHABET_SIZE, Weight};

use crate::TableError;
use crate::digram::{BEGINNING_SIZE, DigramWeightTables, MATRIX_SIZE};
use crate::suffix::SuffixPatternTable;

/// Total size of the five weight tables in bytes.
pub const WEIGHTS_LEN: usize = BEGINNING_SIZE + 4 * MATRIX_SIZE;

/// Byte offset of the suffix index.
pub const INDEX_OFFSET: usize = WEIGHTS_LEN;

/// Size of the suffix index in bytes (26 little-endian u16 values).
pub const INDEX_LEN: usize = ALPHABET_SIZE * 2;

/// Byte offset of the suffix blob; also the minimum valid asset size.
pub const BLOB_OFFSET: usize = INDEX_OFFSET + INDEX_LEN;

/// Parse a complete data asset from raw bytes.
///
/// Both returned tables are validated: matrix sizes are guaranteed by the
/// fixed layout, and every non-zero suffix offset must land inside the
/// blob or the asset is rejected.
pub fn parse_asset(
    data: &[u8],
) -> Result<(DigramWeightTables, SuffixPatternTable), TableError> {
    if data.len() < BLOB_OFFSET {
        return Err(TableError::TooShort {
            expected: BLOB_OFFSET,
            actual: data.len(),
        });
    }

    let weights: &[Weight] = bytemuck::cast_slice(&data[..WEIGHTS_LEN]);
    let (beginning, rest) = weights.split_at(BEGINNING_SIZE);
    let (general, rest) = rest.split_at(MATRIX_SIZE);
    let (ending, rest) = rest.split_at(MATRIX_SIZE);
    let (context, fallback) = rest.split_at(MATRIX_SIZE);

    let digrams =
        DigramWeightTables::from_parts(beginning, general, ending, context, fallback)?;

    let mut index = [0u16; ALPHABET_SIZE];
    for (slot, pair) in index
        .iter_mut()
        .zip(data[INDEX_OFFSET..BLOB_OFFSET].chunks_exact(2))
    {
        *slot = u16::from_le_bytes([pair[0], pair[1]]);
    }

    let suffixes = SuffixPatternTable::new(index, &data[BLOB_OFFSET..])?;

    Ok((digrams, suffixes))
}

/// Serialize tables back into the flat asset layout.
///
/// `parse_asset(&encode_asset(d, s))` reproduces the same tables; this is
/// the authoring path for versioned data assets.
pub fn encode_asset(digrams: &DigramWeightTables, suffixes: &SuffixPatternTable) -> Vec<u8> {
    let (index, blob) = suffixes.raw_parts();
    let mut out = Vec::with_capacity(BLOB_OFFSET + blob.len());

    for table in digrams.raw_parts() {
        out.extend_from_slice(bytemuck::cast_slice::<Weight, u8>(table));
    }
    for &offset in index {
        out.extend_from_slice(&offset.to_le_bytes());
    }
    out.extend_from_slice(blob);
    out
}
