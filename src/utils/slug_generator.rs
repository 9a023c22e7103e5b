//! Random slug generation.
//!
//! Slugs double as unguessable identifiers, so every character is drawn from
//! the operating system CSPRNG via `getrandom`.

/// Alphabet slugs are drawn from: lowercase letters, uppercase letters, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default slug length.
pub const DEFAULT_SLUG_LENGTH: usize = 6;

/// Largest multiple of the alphabet size that fits in a byte (62 * 4).
/// Bytes at or above this value are discarded to keep the draw uniform.
const REJECTION_THRESHOLD: u8 = 248;

/// Generates a random slug of exactly `length` characters.
///
/// Each character is chosen independently and uniformly from [`ALPHABET`]
/// using rejection sampling over OS-provided random bytes.
///
/// # Errors
///
/// Returns an error if the system random number generator fails.
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug(6)?;
/// assert_eq!(slug.len(), 6);
/// assert!(slug.bytes().all(|b| b.is_ascii_alphanumeric()));
/// ```
pub fn generate_slug(length: usize) -> Result<String, getrandom::Error> {
    let mut slug = String::with_capacity(length);
    // Rejection discards ~3% of bytes; a slightly larger buffer usually finishes in one draw.
    let mut buffer = vec![0u8; length + length / 4 + 1];

    while slug.len() < length {
        getrandom::fill(&mut buffer)?;

        for &byte in &buffer {
            if byte >= REJECTION_THRESHOLD {
                continue;
            }
            slug.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
            if slug.len() == length {
                break;
            }
        }
    }

    Ok(slug)
}
