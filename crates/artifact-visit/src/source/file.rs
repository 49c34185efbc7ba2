//! Source hoja respaldado por ficheros ya materializados.
//!
//! Los artifacts de fichero no necesitan paso de preparación: se entregan
//! directamente vía `visit_file`, y solo si el consumer los pidió
//! (`include_files`). El engine reenvía esas llamadas de inmediato, fuera
//! del staging prepare/visit.

use std::path::PathBuf;

use crate::model::{ArtifactId, VariantAttributes};
use crate::source::ArtifactSource;
use crate::visitor::ArtifactVisitor;

pub struct FileArtifactSource {
    entries: Vec<(ArtifactId, VariantAttributes, PathBuf)>,
}

impl FileArtifactSource {
    pub fn new(entries: Vec<(ArtifactId, VariantAttributes, PathBuf)>) -> Self {
        Self { entries }
    }
}

impl ArtifactSource for FileArtifactSource {
    fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        if !visitor.include_files() {
            return;
        }
        for (id, variant, path) in &self.entries {
            visitor.visit_file(id, variant, path);
        }
    }
}
