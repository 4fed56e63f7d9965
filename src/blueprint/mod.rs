//! Blueprint output contract and its assembly.
//!
//! A [`Blueprint`] is the sole boundary with the rendering layer: grid
//! dimensions, every placed component with its 1-based position, and run
//! metadata. Two runs over identical input serialize identically apart from
//! `generatedAt`.

mod assembler;
mod component;
mod types;

pub use assembler::{AssemblyConfig, BlueprintAssembler, ComponentOrder};
pub use component::PlacedComponent;
pub use types::{Blueprint, BlueprintMetadata};
