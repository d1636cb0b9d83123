//! Provisional designations for scanned objects, e.g. `NEO-2026-K47`.

use chrono::{Datelike, Local};
use rand::Rng;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Generate a designation of the form `NEO-<year>-<letter><10..99>`.
///
/// # Examples
/// ```
/// use neo_guardian_lib::designation::{generate_designation, is_designation};
///
/// let mut rng = rand::thread_rng();
/// let id = generate_designation(&mut rng, 2026);
/// assert!(id.starts_with("NEO-2026-"));
/// assert!(is_designation(&id));
/// ```
pub fn generate_designation<R: Rng + ?Sized>(rng: &mut R, year: i32) -> String {
    let letter = LETTERS[rng.gen_range(0..LETTERS.len())] as char;
    let number = rng.gen_range(10..=99);
    format!("NEO-{year}-{letter}{number}")
}

/// Generate a designation for the current local year using the thread RNG.
pub fn new_designation() -> String {
    generate_designation(&mut rand::thread_rng(), Local::now().year())
}

/// Whether `candidate` follows the generated designation format.
pub fn is_designation(candidate: &str) -> bool {
    let mut parts = candidate.splitn(3, '-');
    let (Some(prefix), Some(year), Some(tail)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    let tail = tail.as_bytes();
    prefix == "NEO"
        && !year.is_empty()
        && year.bytes().all(|b| b.is_ascii_digit())
        && tail.len() == 3
        && tail[0].is_ascii_uppercase()
        && (b'1'..=b'9').contains(&tail[1])
        && tail[2].is_ascii_digit()
}
