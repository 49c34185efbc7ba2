//! artifact-stats: agregación y formato de outcomes de visita.
//!
//! Capa de estadísticas del build para la entrega de artifacts: cuenta el
//! outcome de cada artifact visitado y produce una línea de progreso
//! acumulada. Nunca es estado ambiente: el acumulador tiene un dueño único
//! explícito y expone snapshots inmutables.
pub mod aggregator;
pub mod formatter;

pub use aggregator::{VisitOutcome, VisitStatistics, VisitStatisticsAggregator};
pub use formatter::OutcomeFormatter;
