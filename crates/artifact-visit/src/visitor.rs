//! Capability de visita: el contrato entre producers y consumers.

use std::path::Path;

use crate::errors::VisitError;
use crate::model::{ArtifactId, ResolvedArtifact, VariantAttributes};

/// Contrato que implementa un consumer para recibir artifacts, y contra el
/// que emiten los sources.
///
/// `prepare` toma `&self` porque el engine lo invoca desde worker threads;
/// un consumer que necesite mutar estado durante la preparación debe usar
/// mutabilidad interior. El resto de llamadas ocurren siempre en el thread
/// del caller.
///
/// Las llamadas `prepare`/`visit` que un producer emite a través de esta
/// capability son una petición, no una garantía de orden entre artifacts
/// distintos: el orden lo garantiza el `DeferredVisitSet`, no la
/// capability.
pub trait ArtifactVisitor {
    /// Materialización costosa (descarga/extracción/transformación).
    /// Puede bloquear y puede fallar.
    fn prepare(&self, artifact: &ResolvedArtifact) -> Result<(), VisitError>;

    /// Entrega final, barata y sensible al orden. Nunca se invoca para un
    /// artifact cuya preparación falló.
    fn visit(&mut self, variant: &VariantAttributes, artifact: &ResolvedArtifact);

    /// Sonda de capability: con `false` el producer puede omitir todo el
    /// trabajo a nivel de ficheros. No condiciona `prepare`/`visit`.
    fn include_files(&self) -> bool;

    /// Entrega directa de un fichero ya resuelto, sin pasar por el staging
    /// prepare/visit.
    fn visit_file(&mut self, id: &ArtifactId, variant: &VariantAttributes, path: &Path);

    /// Reporta un fallo a nivel de source, o relaya un fallo de
    /// preparación de un artifact concreto.
    fn visit_failure(&mut self, failure: VisitError);
}
