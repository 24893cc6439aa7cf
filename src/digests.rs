// Digests and checksums over the decimal text of the input
use crate::models::DigestReport;
use base64::{engine::general_purpose, Engine as _};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Compute MD5, SHA-1, SHA-256, CRC-32, and Base64 of the canonical
/// decimal text of n. The input bytes are the UTF-8 decimal rendering,
/// leading `-` included, never a binary integer encoding; this is what
/// makes the digests reproducible across hosts.
pub fn compute(n: i128) -> DigestReport {
    let text = n.to_string();
    let bytes = text.as_bytes();

    DigestReport {
        md5: hex_digest::<Md5>(bytes),
        sha1: hex_digest::<Sha1>(bytes),
        sha256: hex_digest::<Sha256>(bytes),
        crc32: format!("{:08X}", crc32fast::hash(bytes)),
        base64: general_purpose::STANDARD.encode(bytes),
    }
}

fn hex_digest<D: Digest>(bytes: &[u8]) -> String {
    let mut hasher = D::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
