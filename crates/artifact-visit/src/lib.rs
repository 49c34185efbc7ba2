//! artifact-visit: engine de visita de artifacts resueltos.
//!
//! Dado un árbol (posiblemente compuesto, calculado perezosamente) de
//! sources de artifacts, el engine materializa cada artifact ("prepare")
//! en paralelo y después lo entrega al consumer ("visit") en el orden
//! determinista de descubrimiento, aislando los fallos por artifact para
//! que una dependencia rota no aborte la entrega del resto del build.
pub mod engine;
pub mod errors;
pub mod model;
pub mod queue;
pub mod source;
pub mod visitor;

pub use engine::DeferredVisitSet;
pub use errors::{QueueError, VisitError};
pub use model::{ArtifactId, ResolvedArtifact, VariantAttributes};
pub use queue::{CompletedUnit, ParallelExecutor, WorkQueue, WorkUnit};
pub use source::{ArtifactSet, ArtifactSource, CompositeArtifactSet, FileArtifactSource,
                 ResolvedArtifactSource};
pub use visitor::ArtifactVisitor;
