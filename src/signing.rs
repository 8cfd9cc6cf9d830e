use data_encoding::HEXLOWER;
use sha1::{Digest, Sha1};

/// Cloudinary request signature: the signed parameters serialized in sorted
/// order (`folder=<f>&timestamp=<t>`), the API secret appended, SHA-1, hex.
/// The secret never leaves the server; clients receive only the digest.
pub fn sign_upload_request(folder: &str, timestamp: i64, api_secret: &str) -> String {
    sha1_hex(&format!("folder={folder}&timestamp={timestamp}{api_secret}"))
}

fn sha1_hex(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    HEXLOWER.encode(&hasher.finalize())
}
