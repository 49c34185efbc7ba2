//! Acumulador de outcomes de visita.
//!
//! Propietario único y explícito: se pasa por referencia, nunca es estado
//! global compartido. `snapshot` devuelve una vista inmutable para
//! formatear o persistir.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resultado final de la visita de un artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisitOutcome {
    /// Preparado y entregado al consumer.
    Prepared,
    /// Su preparación falló; quedó excluido de la entrega.
    Failed,
    /// Entregado directamente como fichero, sin paso de preparación.
    UpToDate,
}

impl VisitOutcome {
    pub const ALL: [VisitOutcome; 3] =
        [VisitOutcome::Prepared, VisitOutcome::Failed, VisitOutcome::UpToDate];

    /// Etiqueta corta para el formatter de progreso.
    pub fn label(self) -> &'static str {
        match self {
            VisitOutcome::Prepared => "prepared",
            VisitOutcome::Failed => "failed",
            VisitOutcome::UpToDate => "up-to-date",
        }
    }
}

/// Snapshot inmutable de los contadores en un instante dado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStatistics {
    counts: IndexMap<VisitOutcome, u64>,
}

impl VisitStatistics {
    pub fn count(&self, outcome: VisitOutcome) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Acumulador mutable de outcomes.
#[derive(Debug, Clone)]
pub struct VisitStatisticsAggregator {
    counts: IndexMap<VisitOutcome, u64>,
}

impl VisitStatisticsAggregator {
    /// Arranca con todos los outcomes a cero, en orden estable.
    pub fn new() -> Self {
        Self { counts: VisitOutcome::ALL.iter().map(|outcome| (*outcome, 0)).collect() }
    }

    pub fn count(&mut self, outcome: VisitOutcome) {
        *self.counts.entry(outcome).or_insert(0) += 1;
    }

    pub fn snapshot(&self) -> VisitStatistics {
        VisitStatistics { counts: self.counts.clone() }
    }
}

impl Default for VisitStatisticsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
