//! Engine de visita diferida.
//!
//! Implementa el protocolo en dos fases: collect sobre el árbol de
//! sources, prepare paralelo vía la work queue y replay de visitas en
//! orden de descubrimiento.

pub mod deferred;
mod recording;

pub use deferred::DeferredVisitSet;
