//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the two
//! high-level use cases: "scaffold a day" and "refresh a description".

pub mod scaffold_service;
pub mod substitution;

pub use scaffold_service::{Layout, ScaffoldService};
pub use substitution::TokenRewriter;
