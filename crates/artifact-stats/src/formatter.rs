//! Formatter de progreso: ` [prepared 67%, failed 33%]`.
//!
//! Refleja el acumulado tras cada outcome; los outcomes sin ocurrencias no
//! se muestran y los porcentajes se redondean al entero más cercano.

use crate::aggregator::{VisitOutcome, VisitStatistics, VisitStatisticsAggregator};

pub struct OutcomeFormatter {
    stats: VisitStatisticsAggregator,
}

impl OutcomeFormatter {
    pub fn new() -> Self {
        Self { stats: VisitStatisticsAggregator::new() }
    }

    /// Cuenta el outcome y devuelve la línea de progreso acumulada.
    pub fn count_and_format(&mut self, outcome: VisitOutcome) -> String {
        self.stats.count(outcome);
        format_statistics(&self.stats.snapshot())
    }

    pub fn snapshot(&self) -> VisitStatistics {
        self.stats.snapshot()
    }
}

impl Default for OutcomeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_statistics(statistics: &VisitStatistics) -> String {
    let total = statistics.total();
    let mut rendered = Vec::with_capacity(VisitOutcome::ALL.len());
    for outcome in VisitOutcome::ALL {
        let count = statistics.count(outcome);
        if count > 0 {
            let percent = (count as f64 * 100.0 / total as f64).round() as u64;
            rendered.push(format!("{} {}%", outcome.label(), percent));
        }
    }
    format!(" [{}]", rendered.join(", "))
}
