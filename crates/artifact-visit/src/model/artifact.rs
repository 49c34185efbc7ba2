//! Artifact resuelto del grafo de dependencias.
//!
//! Un `ResolvedArtifact` es la salida de una dependencia ya resuelta. Es
//! neutral respecto al origen que lo produjo:
//! - `id` es la identidad comparable/hashable; sirve para deduplicar la
//!   preparación y como membresía del conjunto de fallos.
//! - `file` es la ruta local si el artifact ya está materializado.
//! - `metadata` permite anotar información auxiliar que el engine no
//!   interpreta.
//!
//! El artifact pertenece al source que lo produce y es inmutable una vez
//! resuelto; el engine solo lo referencia (o lo clona para las unidades de
//! prepare), nunca lo muta.
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identidad estable de un artifact: componente de origen + nombre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactId {
    pub component: String,
    pub name: String,
}

impl ArtifactId {
    pub fn new(component: impl Into<String>, name: impl Into<String>) -> Self {
        Self { component: component.into(),
               name: name.into() }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.component, self.name)
    }
}

/// Artifact resuelto, inmutable una vez producido por su source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolvedArtifact {
    pub id: ArtifactId,
    pub file: Option<PathBuf>,
    pub metadata: Option<Value>,
}

impl ResolvedArtifact {
    pub fn new(id: ArtifactId) -> Self {
        Self { id,
               file: None,
               metadata: None }
    }

    pub fn with_file(id: ArtifactId, file: PathBuf) -> Self {
        Self { id,
               file: Some(file),
               metadata: None }
    }
}
