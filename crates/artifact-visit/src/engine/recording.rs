//! Capability de grabación usada durante la fase de collect.

use std::cell::RefCell;
use std::path::Path;

use indexmap::IndexMap;

use crate::errors::VisitError;
use crate::model::{ArtifactId, ResolvedArtifact, VariantAttributes};
use crate::visitor::ArtifactVisitor;

/// Observa cada llamada emitida por el árbol de sources sin ejecutar
/// todavía ningún side effect de prepare/visit.
///
/// `include_files` se responde en el acto con la respuesta del consumer
/// real (los producers la necesitan síncrona para decidir si emiten
/// trabajo de ficheros). `visit_file` y `visit_failure` también se
/// reenvían de inmediato: son finales, no tienen un "visit" posterior que
/// reordenar.
pub(super) struct RecordingVisitor<'a, V: ArtifactVisitor> {
    inner: &'a mut V,
    /// Único por identidad, orden de inserción estable.
    prepared: RefCell<IndexMap<ArtifactId, ResolvedArtifact>>,
    /// (variant, artifact) en orden de descubrimiento; gobierna el replay.
    visits: Vec<(VariantAttributes, ResolvedArtifact)>,
}

impl<'a, V: ArtifactVisitor> RecordingVisitor<'a, V> {
    pub(super) fn new(inner: &'a mut V) -> Self {
        Self { inner,
               prepared: RefCell::new(IndexMap::new()),
               visits: Vec::new() }
    }

    /// Consume la grabación: (prepared set, visit sequence).
    pub(super) fn into_record(
        self)
        -> (IndexMap<ArtifactId, ResolvedArtifact>, Vec<(VariantAttributes, ResolvedArtifact)>) {
        (self.prepared.into_inner(), self.visits)
    }
}

impl<V: ArtifactVisitor> ArtifactVisitor for RecordingVisitor<'_, V> {
    fn prepare(&self, artifact: &ResolvedArtifact) -> Result<(), VisitError> {
        self.prepared
            .borrow_mut()
            .entry(artifact.id.clone())
            .or_insert_with(|| artifact.clone());
        Ok(())
    }

    fn visit(&mut self, variant: &VariantAttributes, artifact: &ResolvedArtifact) {
        self.visits.push((variant.clone(), artifact.clone()));
    }

    fn include_files(&self) -> bool {
        self.inner.include_files()
    }

    fn visit_file(&mut self, id: &ArtifactId, variant: &VariantAttributes, path: &Path) {
        self.inner.visit_file(id, variant, path);
    }

    fn visit_failure(&mut self, failure: VisitError) {
        self.inner.visit_failure(failure);
    }
}
