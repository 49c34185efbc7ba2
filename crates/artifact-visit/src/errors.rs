//! Errores del engine de visitas: por artifact, por source y de la queue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ArtifactId;

/// Fallos recuperables. Un fallo por artifact nunca aborta el batch
/// completo: el engine lo enruta vía `visit_failure` y excluye el artifact
/// del replay final.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitError {
    #[error("failed to prepare artifact {artifact}: {reason}")]
    PrepareFailed { artifact: ArtifactId, reason: String },
    #[error("artifact source failure: {0}")]
    Source(String),
    #[error("internal: {0}")]
    Internal(String),
}

/// Defectos de la work queue. Son errores de programación/entorno, no una
/// condición por artifact: se propagan al caller en vez de capturarse en
/// el límite de la unidad.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("work queue has no workers configured")]
    NoWorkers,
    #[error("worker thread terminated abnormally")]
    WorkerLost,
}
