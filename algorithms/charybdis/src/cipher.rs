//! Public API Layer
//!
//! [`Charybdis`] owns one key's subkeys and, when the host supports it, the
//! AVX2 batch context built from them. Single-block calls always run the
//! scalar path; multi-block calls use the batch engine when present. Both
//! produce identical bytes, and a cleared instance rejects multi-block calls
//! on every host.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use crate::kernels::avx2::BatchContext;
use crate::engine::parallel;
use crate::kernels::constants::{BLOCK_SIZE, KEY_SIZE};
use crate::kernels::{portable, sponge};
use crate::types::{Backend, Block, CipherError, Direction, Key, KeyScheduleVariant, Subkeys};
use zeroize::Zeroize;

// =============================================================================
// KEY SCHEDULE
// =============================================================================

/// Expand a 256-bit key into 24 subkeys (hardened schedule).
///
/// # Example
/// ```rust
/// let subkeys = charybdis::key_schedule(&[0u8; 32]);
/// assert!(subkeys.subkey_bytes(23).is_some());
/// ```
#[must_use]
#[inline]
pub fn key_schedule(key: &Key) -> Subkeys {
    sponge::expand(key, KeyScheduleVariant::Hardened)
}

/// Expand a key with an explicit schedule variant.
#[must_use]
#[inline]
pub fn key_schedule_with(key: &Key, variant: KeyScheduleVariant) -> Subkeys {
    sponge::expand(key, variant)
}

// =============================================================================
// SINGLE BLOCK
// =============================================================================

/// Encrypt one block in place with the scalar engine.
#[inline]
pub fn encrypt_block(block: &mut Block, subkeys: &Subkeys) {
    portable::encrypt_block(block, subkeys);
}

/// Decrypt one block in place with the scalar engine.
#[inline]
pub fn decrypt_block(block: &mut Block, subkeys: &Subkeys) {
    portable::decrypt_block(block, subkeys);
}

// =============================================================================
// CIPHER CONTEXT
// =============================================================================

/// Keyed Charybdis instance.
///
/// # Example
/// ```rust
/// use charybdis::Charybdis;
///
/// let cipher = Charybdis::new(&[7u8; 32]);
/// let mut data = vec![0xAB_u8; 64 * 20];
/// cipher.encrypt_blocks(&mut data)?;
/// cipher.decrypt_blocks(&mut data)?;
/// assert!(data.iter().all(|&b| b == 0xAB));
/// # Ok::<(), charybdis::CipherError>(())
/// ```
#[derive(Debug)]
pub struct Charybdis {
    subkeys: Subkeys,
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    batch: Option<BatchContext>,
    live: bool,
}

impl Charybdis {
    /// Algorithm name.
    pub const NAME: &'static str = "Charybdis";
    /// Algorithm version.
    pub const VERSION: &'static str = "1.0";
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_SIZE;
    /// Key size in bytes.
    pub const KEY_SIZE: usize = KEY_SIZE;

    /// Key a new instance with the hardened schedule.
    #[must_use]
    pub fn new(key: &Key) -> Self {
        Self::from_subkeys(key_schedule(key))
    }

    /// Key a new instance with an explicit schedule variant.
    #[must_use]
    pub fn with_schedule(key: &Key, variant: KeyScheduleVariant) -> Self {
        Self::from_subkeys(key_schedule_with(key, variant))
    }

    /// Wrap already expanded subkeys.
    #[must_use]
    pub fn from_subkeys(subkeys: Subkeys) -> Self {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            let batch = match BatchContext::new(&subkeys) {
                Ok(ctx) => Some(ctx),
                Err(e) => {
                    tracing::debug!(error = %e, "falling back to scalar engine");
                    None
                }
            };
            Self { subkeys, batch, live: true }
        }
        #[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
        {
            Self { subkeys, live: true }
        }
    }

    /// Engine used by multi-block calls.
    #[must_use]
    pub const fn backend(&self) -> Backend {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if self.batch.is_some() {
            return Backend::Avx2;
        }
        Backend::Portable
    }

    /// Expanded subkeys.
    #[must_use]
    pub const fn subkeys(&self) -> &Subkeys {
        &self.subkeys
    }

    /// The AVX2 batch context, if this host has one.
    #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
    #[must_use]
    pub const fn batch(&self) -> Option<&BatchContext> {
        self.batch.as_ref()
    }

    /// Whether the instance still holds key material.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.live
    }

    const fn check(&self) -> Result<(), CipherError> {
        if self.live {
            Ok(())
        } else {
            Err(CipherError::InvalidContext)
        }
    }

    /// Wipe all key material. Multi-block calls fail with
    /// [`CipherError::InvalidContext`] afterwards, whatever the backend.
    /// Single-block calls cannot fail and run under all-zero subkeys.
    pub fn clear(&mut self) {
        self.live = false;
        self.subkeys.zeroize();
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(batch) = self.batch.as_mut() {
            batch.clear();
        }
    }

    // =========================================================================
    // SINGLE BLOCK
    // =========================================================================

    /// Encrypt one block in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut Block) {
        portable::encrypt_block(block, &self.subkeys);
    }

    /// Decrypt one block in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut Block) {
        portable::decrypt_block(block, &self.subkeys);
    }

    /// Encrypt `input` into `output`.
    #[inline]
    pub fn encrypt_block_b2b(&self, input: &Block, output: &mut Block) {
        portable::encrypt_block_b2b(input, output, &self.subkeys);
    }

    /// Decrypt `input` into `output`.
    #[inline]
    pub fn decrypt_block_b2b(&self, input: &Block, output: &mut Block) {
        portable::decrypt_block_b2b(input, output, &self.subkeys);
    }

    // =========================================================================
    // MULTI BLOCK
    // =========================================================================

    /// Encrypt a buffer of whole blocks in place.
    ///
    /// # Errors
    /// [`CipherError::InvalidContext`] after [`Charybdis::clear`],
    /// [`CipherError::InvalidLength`] unless `data.len()` is a positive
    /// multiple of 64. Nothing is written on error.
    pub fn encrypt_blocks(&self, data: &mut [u8]) -> Result<(), CipherError> {
        self.run(data, Direction::Encrypt)
    }

    /// Decrypt a buffer of whole blocks in place.
    ///
    /// # Errors
    /// As [`Charybdis::encrypt_blocks`].
    pub fn decrypt_blocks(&self, data: &mut [u8]) -> Result<(), CipherError> {
        self.run(data, Direction::Decrypt)
    }

    /// Encrypt `input` into `output`.
    ///
    /// # Errors
    /// As [`Charybdis::encrypt_blocks`], plus [`CipherError::LengthMismatch`].
    pub fn encrypt_blocks_b2b(&self, input: &[u8], output: &mut [u8]) -> Result<(), CipherError> {
        self.run_b2b(input, output, Direction::Encrypt)
    }

    /// Decrypt `input` into `output`.
    ///
    /// # Errors
    /// As [`Charybdis::encrypt_blocks_b2b`].
    pub fn decrypt_blocks_b2b(&self, input: &[u8], output: &mut [u8]) -> Result<(), CipherError> {
        self.run_b2b(input, output, Direction::Decrypt)
    }

    /// Encrypt in place, splitting large buffers across the rayon pool
    /// (`multithread` feature). Output equals [`Charybdis::encrypt_blocks`].
    ///
    /// # Errors
    /// As [`Charybdis::encrypt_blocks`].
    pub fn encrypt_blocks_parallel(&self, data: &mut [u8]) -> Result<(), CipherError> {
        self.run_parallel(data, Direction::Encrypt)
    }

    /// Decrypt in place, splitting large buffers across the rayon pool.
    ///
    /// # Errors
    /// As [`Charybdis::encrypt_blocks`].
    pub fn decrypt_blocks_parallel(&self, data: &mut [u8]) -> Result<(), CipherError> {
        self.run_parallel(data, Direction::Decrypt)
    }

    fn run(&self, data: &mut [u8], dir: Direction) -> Result<(), CipherError> {
        self.check()?;
        self.dispatch(as_blocks_mut(data)?, dir)
    }

    fn run_parallel(&self, data: &mut [u8], dir: Direction) -> Result<(), CipherError> {
        self.check()?;
        parallel::for_each_chunk(as_blocks_mut(data)?, |chunk| self.dispatch(chunk, dir))
    }

    fn dispatch(&self, blocks: &mut [Block], dir: Direction) -> Result<(), CipherError> {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(batch) = &self.batch {
            return match dir {
                Direction::Encrypt => batch.encrypt_blocks(blocks),
                Direction::Decrypt => batch.decrypt_blocks(blocks),
            };
        }
        match dir {
            Direction::Encrypt => portable::encrypt_blocks(blocks, &self.subkeys),
            Direction::Decrypt => portable::decrypt_blocks(blocks, &self.subkeys),
        }
        Ok(())
    }

    fn run_b2b(&self, input: &[u8], output: &mut [u8], dir: Direction) -> Result<(), CipherError> {
        self.check()?;
        let input = as_blocks(input)?;
        if output.len() != size_of_val(input) {
            return Err(CipherError::LengthMismatch {
                input: size_of_val(input),
                output: output.len(),
            });
        }
        let output = as_blocks_mut(output)?;

        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(batch) = &self.batch {
            return match dir {
                Direction::Encrypt => batch.encrypt_blocks_b2b(input, output),
                Direction::Decrypt => batch.decrypt_blocks_b2b(input, output),
            };
        }
        for (src, dst) in input.iter().zip(output) {
            match dir {
                Direction::Encrypt => portable::encrypt_block_b2b(src, dst, &self.subkeys),
                Direction::Decrypt => portable::decrypt_block_b2b(src, dst, &self.subkeys),
            }
        }
        Ok(())
    }
}

// =============================================================================
// BUFFER VALIDATION
// =============================================================================

fn as_blocks(data: &[u8]) -> Result<&[Block], CipherError> {
    let len = data.len();
    match data.as_chunks::<BLOCK_SIZE>() {
        (blocks, []) if !blocks.is_empty() => Ok(blocks),
        _ => Err(CipherError::InvalidLength { len }),
    }
}

fn as_blocks_mut(data: &mut [u8]) -> Result<&mut [Block], CipherError> {
    let len = data.len();
    match data.as_chunks_mut::<BLOCK_SIZE>() {
        (blocks, []) if !blocks.is_empty() => Ok(blocks),
        _ => Err(CipherError::InvalidLength { len }),
    }
}

// =============================================================================
// TESTS
// =============================================================================
