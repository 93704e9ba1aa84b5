//! Community Dataset Generation Engine
//!
//! Deterministic synthesis of realistic-looking resident and household
//! records for the community administration console. Everything is driven
//! by seeded streams, so a fixed (config, seed) pair reproduces the exact
//! same dataset.

pub mod attributes;
pub mod community;
pub mod family;
pub mod names;
pub mod records;
pub mod resident;
pub mod rng;
pub mod sampler;

pub use community::{
    generate, generate_with_ambient_seed, CommunityConfig, CommunityData, GeneratorError,
};
pub use names::{gen_leader_name, gen_name};
pub use records::*;
pub use rng::SeededRng;
