//! `DeferredVisitSet`: el orquestador del protocolo en dos fases.

use std::collections::HashSet;

use crate::errors::{QueueError, VisitError};
use crate::model::{ArtifactId, ResolvedArtifact};
use crate::queue::{ParallelExecutor, WorkQueue, WorkUnit};
use crate::source::{ArtifactSet, CompositeArtifactSet};
use crate::visitor::ArtifactVisitor;

use super::recording::RecordingVisitor;

/// Unidad de prepare: invoca el `prepare` real del consumer para un
/// artifact concreto. La queue no la conoce más allá del contrato
/// `WorkUnit`.
struct PrepareUnit<'a, V> {
    artifact: ResolvedArtifact,
    visitor: &'a V,
}

impl<V: ArtifactVisitor + Sync> WorkUnit for PrepareUnit<'_, V> {
    fn description(&self) -> String {
        format!("Prepare artifact: {}", self.artifact.id)
    }

    fn run(&self) -> Result<(), VisitError> {
        self.visitor.prepare(&self.artifact)
    }
}

/// Wrapper de visita diferida sobre un `ArtifactSet`.
///
/// Solo un `Composite` tiene fan-out real que justifique el overhead del
/// pool: `of` sobre una hoja devuelve un passthrough transparente que
/// delega cada visita tal cual, sin despacho paralelo.
pub enum DeferredVisitSet<'p> {
    Parallel {
        delegate: CompositeArtifactSet,
        executor: &'p ParallelExecutor,
    },
    Direct(ArtifactSet),
}

impl<'p> DeferredVisitSet<'p> {
    /// Envuelve `set` solo si es un composite.
    pub fn of(set: ArtifactSet, executor: &'p ParallelExecutor) -> Self {
        match set {
            ArtifactSet::Composite(delegate) => DeferredVisitSet::Parallel { delegate, executor },
            leaf => DeferredVisitSet::Direct(leaf),
        }
    }

    /// Protocolo completo: collect -> prepare paralelo -> replay ordenado.
    ///
    /// Garantías: cada artifact del prepared set se intenta preparar
    /// exactamente una vez; cada artifact de la secuencia de visitas que
    /// no falló se entrega exactamente una vez, en orden de
    /// descubrimiento, sea cual sea el orden en que terminen los
    /// prepares.
    ///
    /// Los fallos por artifact se recuperan siempre localmente (se
    /// enrutan vía `visit_failure` y el artifact se excluye del replay);
    /// un `Err` de esta función es un defecto de la queue.
    pub fn visit<V>(&self, visitor: &mut V) -> Result<(), QueueError>
        where V: ArtifactVisitor + Sync
    {
        match self {
            DeferredVisitSet::Direct(set) => {
                set.visit(visitor);
                Ok(())
            }
            DeferredVisitSet::Parallel { delegate, executor } => {
                deferred_visit(delegate, visitor, executor)
            }
        }
    }
}

/// La visitation record (prepared / failed / visit sequence) vive solo
/// dentro de esta llamada; nunca se comparte entre invocaciones.
fn deferred_visit<V>(delegate: &CompositeArtifactSet,
                     visitor: &mut V,
                     executor: &ParallelExecutor)
                     -> Result<(), QueueError>
    where V: ArtifactVisitor + Sync
{
    // Fase de collect: grabar cada prepare/visit sin side effects.
    let mut recorder = RecordingVisitor::new(visitor);
    delegate.visit(&mut recorder);
    let (prepared, visits) = recorder.into_record();
    log::debug!("collected {} artifacts to prepare, {} queued for visit",
                prepared.len(),
                visits.len());

    // Fase paralela: una unidad por artifact del prepared set, fallo
    // capturado en el límite de cada unidad.
    let failures: Vec<(ArtifactId, VisitError)> = {
        let shared: &V = visitor;
        let mut queue = WorkQueue::new();
        for (_, artifact) in prepared {
            queue.submit(PrepareUnit { artifact, visitor: shared });
        }
        executor.run(queue)?
                .into_iter()
                .filter_map(|done| match done.result {
                    Err(failure) => Some((done.unit.artifact.id, failure)),
                    Ok(()) => None,
                })
                .collect()
    };

    // Merge del failed set en el thread del caller; un visit_failure por
    // cada prepare fallido, aunque el artifact nunca llegue al replay.
    let mut failed: HashSet<ArtifactId> = HashSet::with_capacity(failures.len());
    for (id, failure) in failures {
        failed.insert(id);
        visitor.visit_failure(failure);
    }

    // Replay en orden de descubrimiento, saltando los fallidos.
    for (variant, artifact) in &visits {
        if !failed.contains(&artifact.id) {
            visitor.visit(variant, artifact);
        }
    }
    Ok(())
}
