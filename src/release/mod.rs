//! Release gating: version comparison, decision engine, result emission
//!
//! # Core Invariants
//!
//! 1. **A release is gated by the manifest, not by commit messages**
//!    - The declared `package.version` is the single source of truth
//!    - A bump or a first release sets the gate; anything else does not
//!
//! 2. **Absence is information, not an error**
//!    - Missing manifests, unparsable versions, and failed history lookups
//!      all resolve to absent values consumed by the classification rule
//!    - One artifact's failure never blocks another's decision
//!
//! 3. **Every decision has: name, release_needed, resolved version**
//!    - `name`: stable release identifier from gate.toml
//!    - `release_needed`: true iff first release or version bump
//!    - resolved version: present exactly when the working tree resolved one

pub mod detect;
pub mod output;
pub mod version;
