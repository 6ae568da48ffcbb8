//! Deterministic development keys and SS58 addresses.
//!
//! ```text
//! path ──► DerivationPath ──► SeedSource ──► 32-byte seed ──► curve deriver ──► KeyPair
//!                                                                                 │
//!                                                     address ◄── SS58 ◄── public key
//! ```
//!
//! Every function here is pure: same input, same key, no shared state.

pub mod ed25519;
pub mod error;
pub mod hashing;
pub mod keypair;
pub mod path;
pub mod secp256k1;
pub mod seed;
pub mod sr25519;
pub mod ss58;

pub use error::{KeyError, KeyResult};
pub use keypair::{derive, derive_ed25519, derive_secp256k1, derive_sr25519, Curve, KeyPair};
pub use path::{DerivationPath, Junction};
pub use seed::{SeedSource, DEV_ACCOUNTS, DEV_PHRASE, DEV_SEED};
pub use ss58::{decode_ss58, encode_ss58, is_valid_address, GENERIC_SUBSTRATE_PREFIX};
