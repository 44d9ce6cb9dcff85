//! Bundled seed records.
//!
//! The store is seeded from a JSON asset compiled into the binary. A parse
//! failure means the bundled asset is broken, which is a programming error,
//! so loading fails fast rather than degrading.

use super::Member;

/// The embedded seed data.
const SEED_JSON: &str = include_str!("../../data/seed_members.json");

/// Deserialize the bundled member records.
///
/// # Panics
///
/// Panics if the embedded asset does not parse; the asset ships with the
/// binary, so this cannot be triggered by user input.
pub fn seed_members() -> Vec<Member> {
    serde_json::from_str(SEED_JSON).expect("bundled seed data must be valid")
}
