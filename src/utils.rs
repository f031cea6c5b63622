use sha2::{Digest, Sha256};

pub fn sha256<S: AsRef<[u8]>>(bytes: &[S]) -> [u8; 32] {
    //! Compute SHA-256 hash with 32-byte digest.
    //!
    //! Builds a hash iteratively by updating with every element
    //! of the input sequence.
    let mut hasher = Sha256::new();
    bytes.iter().for_each(|b| hasher.update(b));
    hasher.finalize().into()
}

pub(crate) fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}
