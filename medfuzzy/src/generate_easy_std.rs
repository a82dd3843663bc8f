// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

#![cfg(all(feature = "std", feature = "easy-functions"))]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use digest::Digest;
use sha2::Sha256;

use crate::hash::FuzzyHash;
use crate::macros::impl_error;
use crate::reduce::{Granularity, ReduceError, MAX_INPUT_SIZE};




/// The error type describing either a reduction error or an I/O error.
///
/// This type contains either:
/// *   A reduction error ([`ReduceError`]) or
/// *   An I/O error ([`std::io::Error`]).
#[derive(Debug)]
pub enum HashOrIOError {
    /// An error caused by the reduction (an invalid parameter).
    ReduceError(ReduceError),
    /// An error caused by an internal I/O operation.
    IOError(std::io::Error),
}

impl core::fmt::Display for HashOrIOError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HashOrIOError::ReduceError(err) => err.fmt(f),
            HashOrIOError::IOError(err) => err.fmt(f),
        }
    }
}

impl From<ReduceError> for HashOrIOError {
    // For wrapping with the '?' operator
    fn from(value: ReduceError) -> Self {
        HashOrIOError::ReduceError(value)
    }
}

impl From<std::io::Error> for HashOrIOError {
    // For wrapping with the '?' operator
    fn from(value: std::io::Error) -> Self {
        HashOrIOError::IOError(value)
    }
}

impl_error!(HashOrIOError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HashOrIOError::ReduceError(err) => Some(err),
            HashOrIOError::IOError(err) => Some(err),
        }
    }
});


/// Reads the whole stream and generates a fuzzy hash.
///
/// The reduction needs the whole input at once
/// (the padding byte is the rough median of all of it).
#[inline]
fn hash_stream_common<D: Digest, R: Read>(
    reader: &mut R,
    mut buffer: Vec<u8>,
    granularity: Granularity,
) -> Result<FuzzyHash, HashOrIOError>
{
    reader.read_to_end(&mut buffer)?; // grcov-excl-br-line:IO
    if buffer.len() > MAX_INPUT_SIZE {
        return Err(ReduceError::InputTooLarge.into()); // grcov-excl-line:TOO_LARGE
    }
    log::trace!("read {} bytes to hash", buffer.len());
    Ok(FuzzyHash::hash_with::<D>(&buffer, granularity)?)
}


/// Generates a fuzzy hash (with SHA-256) from a given reader stream.
///
/// # Example
///
/// ```
/// fn main() -> Result<(), medfuzzy::HashOrIOError> {
///     let mut stream: &[u8] = b"elephants are like horses";
///     let fuzzy_hash = medfuzzy::hash_stream(&mut stream, medfuzzy::Granularity::OutputCount(16))?;
///     assert_eq!(
///         fuzzy_hash.to_string(),
///         "045827d5d10a1300430e95683ed7b57b295aae163b789a24f246f33a446a57c6:16"
///     );
///     Ok(())
/// }
/// ```
pub fn hash_stream<R: Read>(reader: &mut R, granularity: Granularity)
    -> Result<FuzzyHash, HashOrIOError>
{
    hash_stream_with::<Sha256, R>(reader, granularity)
}

/// Generates a fuzzy hash with the hash function `D` from a given reader stream.
pub fn hash_stream_with<D: Digest, R: Read>(reader: &mut R, granularity: Granularity)
    -> Result<FuzzyHash, HashOrIOError>
{
    hash_stream_common::<D, R>(reader, Vec::new(), granularity)
}

/// Generates a fuzzy hash (with SHA-256) from a given file.
///
/// The file size is used to reserve the buffer and to reject too large files
/// before reading them.
pub fn hash_file<P: AsRef<Path>>(path: P, granularity: Granularity)
    -> Result<FuzzyHash, HashOrIOError>
{
    hash_file_with::<Sha256, P>(path, granularity)
}

/// Generates a fuzzy hash with the hash function `D` from a given file.
pub fn hash_file_with<D: Digest, P: AsRef<Path>>(path: P, granularity: Granularity)
    -> Result<FuzzyHash, HashOrIOError>
{
    let mut file = File::open(path)?;
    let size = file.metadata()?.len(); // grcov-excl-br-line:IO
    let buffer = buffer_for_file_size(size)?;
    hash_stream_common::<D, File>(&mut file, buffer, granularity)
}

/// Allocates the read buffer for a file of given size.
///
/// Files larger than [`MAX_INPUT_SIZE`] are rejected with
/// [`ReduceError::InputTooLarge`].  A failed allocation is returned as
/// an I/O error of the kind [`OutOfMemory`](std::io::ErrorKind::OutOfMemory).
fn buffer_for_file_size(size: u64) -> Result<Vec<u8>, HashOrIOError> {
    let size = match usize::try_from(size) {
        Ok(size) if size <= MAX_INPUT_SIZE => size,
        _ => return Err(ReduceError::InputTooLarge.into()),
    };
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(size)
        .map_err(|_| std::io::Error::from(std::io::ErrorKind::OutOfMemory))?;
    Ok(buffer)
}
