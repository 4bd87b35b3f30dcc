//! Parallel Execution Engine
//!
//! Splits a block buffer into `CHUNK_BLOCKS` work units and runs each one
//! through the single-threaded path: on the rayon pool if the `multithread`
//! feature is enabled, otherwise serially. Blocks are independent, so the
//! output does not depend on the split.

use crate::engine::dispatcher::CHUNK_BLOCKS;
use crate::types::{Block, CipherError};

// =============================================================================
// CHUNKING
// =============================================================================

/// Helper for feature-agnostic chunk processing.
trait ChunkProcessor {
    fn process_chunks<F>(self, chunk_blocks: usize, f: F) -> Result<(), CipherError>
    where
        F: Fn(&mut [Block]) -> Result<(), CipherError> + Sync + Send;
}

impl ChunkProcessor for &mut [Block] {
    fn process_chunks<F>(self, chunk_blocks: usize, f: F) -> Result<(), CipherError>
    where
        F: Fn(&mut [Block]) -> Result<(), CipherError> + Sync + Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_chunks_mut(chunk_blocks).try_for_each(f)
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.chunks_mut(chunk_blocks).try_for_each(f)
        }
    }
}

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Run `f` over `blocks` in `CHUNK_BLOCKS` units.
///
/// # Errors
/// The first error returned by any unit.
pub fn for_each_chunk<F>(blocks: &mut [Block], f: F) -> Result<(), CipherError>
where
    F: Fn(&mut [Block]) -> Result<(), CipherError> + Sync + Send,
{
    tracing::trace!(
        blocks = blocks.len(),
        units = blocks.len().div_ceil(CHUNK_BLOCKS),
        "parallel call"
    );
    blocks.process_chunks(CHUNK_BLOCKS, f)
}
