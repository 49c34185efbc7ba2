//! Modelos neutrales (ArtifactId, ResolvedArtifact, VariantAttributes)

pub mod artifact;
pub mod variant;

pub use artifact::{ArtifactId, ResolvedArtifact};
pub use variant::VariantAttributes;
