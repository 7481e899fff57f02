//! Random element identifiers.

use rand::{Rng, distributions::Alphanumeric};

/// Length of the identifiers handed to error banners.
pub const BANNER_ID_LENGTH: usize = 20;

/// Generates `length` characters drawn uniformly from `[A-Za-z0-9]`.
#[must_use]
pub fn make_id(length: usize) -> String {
    make_id_with(&mut rand::thread_rng(), length)
}

/// Same as [`make_id`] but with a caller supplied random source.
pub fn make_id_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
