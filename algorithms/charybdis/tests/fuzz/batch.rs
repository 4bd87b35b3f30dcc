use bolero::check;
use charybdis::{Charybdis, CipherError};

#[test]
fn fuzz_batch_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let cipher = Charybdis::new(&[0x6Bu8; 32]);

        // =============================================================================
        // LENGTH VALIDATION
        // =============================================================================

        let mut buf = data.clone();
        if data.is_empty() || data.len() % 64 != 0 {
            assert_eq!(
                cipher.encrypt_blocks(&mut buf),
                Err(CipherError::InvalidLength { len: data.len() })
            );
            assert_eq!(&buf, data, "rejected buffer was modified");
            return;
        }

        // =============================================================================
        // BATCH VS SCALAR
        // =============================================================================

        let mut expected = data.clone();
        for block in expected.as_chunks_mut::<64>().0 {
            cipher.encrypt_block(block);
        }
        assert!(cipher.encrypt_blocks(&mut buf).is_ok());
        assert_eq!(buf, expected, "batch engine differs from scalar path");

        let mut parallel = data.clone();
        assert!(cipher.encrypt_blocks_parallel(&mut parallel).is_ok());
        assert_eq!(parallel, expected, "parallel path differs from scalar path");

        assert!(cipher.decrypt_blocks(&mut buf).is_ok());
        assert_eq!(&buf, data);
    });
}
