//! Source hoja respaldado por artifacts ya resueltos en memoria.

use crate::model::{ResolvedArtifact, VariantAttributes};
use crate::source::ArtifactSource;
use crate::visitor::ArtifactVisitor;

/// Emite `prepare` + `visit` por cada artifact, en el orden dado.
///
/// Contra una capability directa esto ejecuta la preparación en línea (y
/// enruta su fallo vía `visit_failure` sin visitar el artifact); contra la
/// capability de grabación del engine, las mismas llamadas solo quedan
/// registradas para las fases posteriores.
pub struct ResolvedArtifactSource {
    artifacts: Vec<(VariantAttributes, ResolvedArtifact)>,
}

impl ResolvedArtifactSource {
    pub fn new(artifacts: Vec<(VariantAttributes, ResolvedArtifact)>) -> Self {
        Self { artifacts }
    }
}

impl ArtifactSource for ResolvedArtifactSource {
    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        for (variant, artifact) in &self.artifacts {
            match visitor.prepare(artifact) {
                Ok(()) => visitor.visit(variant, artifact),
                Err(failure) => visitor.visit_failure(failure),
            }
        }
    }
}
