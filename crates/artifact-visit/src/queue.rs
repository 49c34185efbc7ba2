//! Work queue concurrente genérica.
//!
//! Ejecuta un batch de unidades independientes con paralelismo acotado,
//! bloquea hasta que el batch completo termina y captura el éxito/fallo de
//! cada unidad por separado: el fallo de una unidad jamás cancela ni
//! bloquea a sus hermanas.
//!
//! La queue no sabe nada de artifacts. Es una primitiva reutilizable
//! "ejecuta estos jobs independientes, espera a todos, aísla fallos"; el
//! caller reconstruye el orden que necesite, aquí no hay garantía de orden
//! entre unidades.

use std::collections::VecDeque;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread;

use crate::errors::{QueueError, VisitError};

/// Unidad de trabajo con nombre para diagnóstico.
pub trait WorkUnit: Send {
    /// Descripción legible para logs.
    fn description(&self) -> String;

    /// Ejecuta la unidad. Puede bloquear (I/O); el fallo se devuelve como
    /// valor y se captura en el límite de la unidad.
    fn run(&self) -> Result<(), VisitError>;
}

/// Batch de unidades pendientes. `submit` puede llamarse cuantas veces
/// haga falta antes de entregar la queue al executor.
pub struct WorkQueue<U> {
    units: Vec<U>,
}

impl<U: WorkUnit> WorkQueue<U> {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    pub fn submit(&mut self, unit: U) {
        self.units.push(unit);
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<U: WorkUnit> Default for WorkQueue<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Unidad terminada: la unidad original más el resultado de su ejecución.
pub struct CompletedUnit<U> {
    pub unit: U,
    pub result: Result<(), VisitError>,
}

/// Executor de paralelismo acotado.
///
/// El tamaño del pool lo decide la infraestructura que lo crea (fuera de
/// este crate); el executor es barato de clonar y sobrevive a múltiples
/// `run`.
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    workers: usize,
}

impl ParallelExecutor {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Ejecuta todas las unidades del batch y bloquea hasta que cada una
    /// alcanza un estado terminal (completada o fallida).
    ///
    /// Devuelve las unidades en orden de submit, cada una emparejada con
    /// su propio `Result`. Un `Err` de esta función es un defecto de la
    /// queue (no una condición por unidad) y es fatal para el caller.
    pub fn run<U: WorkUnit>(&self, queue: WorkQueue<U>) -> Result<Vec<CompletedUnit<U>>, QueueError> {
        if self.workers == 0 {
            return Err(QueueError::NoWorkers);
        }
        let submitted = queue.units.len();
        if submitted == 0 {
            return Ok(Vec::new());
        }

        let pending: Mutex<VecDeque<(usize, U)>> =
            Mutex::new(queue.units.into_iter().enumerate().collect());
        let (tx, rx) = mpsc::channel();

        thread::scope(|scope| {
            for _ in 0..self.workers.min(submitted) {
                let tx = tx.clone();
                let pending = &pending;
                scope.spawn(move || loop {
                    let next = match pending.lock() {
                        Ok(mut guard) => guard.pop_front(),
                        Err(_) => None,
                    };
                    let Some((index, unit)) = next else { break };
                    log::debug!("running work unit: {}", unit.description());
                    let result = unit.run();
                    if let Err(failure) = &result {
                        log::debug!("work unit failed: {}: {}", unit.description(), failure);
                    }
                    if tx.send((index, unit, result)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(tx);

        let mut completed: Vec<(usize, U, Result<(), VisitError>)> = rx.into_iter().collect();
        if completed.len() != submitted {
            return Err(QueueError::WorkerLost);
        }
        completed.sort_by_key(|(index, _, _)| *index);
        Ok(completed.into_iter()
                    .map(|(_, unit, result)| CompletedUnit { unit, result })
                    .collect())
    }
}
