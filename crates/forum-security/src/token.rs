//! Session token generation

use forum_shared::constants::SESSION_TOKEN_BYTES;
use rand::Rng;

/// Returns a fresh hex-encoded token drawn from the thread-local CSPRNG.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}
