//! Compression envelope: gzip and zlib wrap plain NBT bytes on disk and
//! over the wire, but are not part of the tag format itself. This module
//! sniffs the envelope by magic bytes and strips or applies it, so callers
//! downstream of [`crate::de`]/[`crate::ser`] never see compressed bytes.

use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;

use crate::error::NBTResult;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// zlib's two-byte header always has `0x78` as the CMF byte for the
/// deflate window sizes NBT producers use; the FLG byte varies with the
/// compression level chosen.
const ZLIB_CMF: u8 = 0x78;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Envelope {
    None,
    Gzip,
    Zlib,
}

/// Identifies which envelope (if any) wraps `bytes`, by magic bytes alone.
/// Never consumes input; callers pass the same slice on to [`strip`].
pub fn detect(bytes: &[u8]) -> Envelope {
    if bytes.len() >= 2 && bytes[0..2] == GZIP_MAGIC {
        Envelope::Gzip
    } else if bytes.len() >= 2 && bytes[0] == ZLIB_CMF {
        Envelope::Zlib
    } else {
        Envelope::None
    }
}

/// Removes whichever envelope [`detect`] finds, returning plain NBT bytes.
/// Bytes with no recognized envelope are returned unchanged.
pub fn strip(bytes: &[u8]) -> NBTResult<Vec<u8>> {
    match detect(bytes) {
        Envelope::Gzip => {
            let mut out = Vec::new();
            GzDecoder::new(bytes).read_to_end(&mut out)?;
            Ok(out)
        }
        Envelope::Zlib => {
            let mut out = Vec::new();
            ZlibDecoder::new(bytes).read_to_end(&mut out)?;
            Ok(out)
        }
        Envelope::None => Ok(bytes.to_vec()),
    }
}

/// Wraps `bytes` in a gzip envelope at the default compression level.
pub fn wrap_gzip(bytes: &[u8]) -> NBTResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}

/// Wraps `bytes` in a zlib envelope at the default compression level.
pub fn wrap_zlib(bytes: &[u8]) -> NBTResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    Ok(encoder.finish()?)
}
