//! Binario de validación: compone los crates del workspace de punta a
//! punta y comprueba las invariantes principales del engine.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

use artifact_stats::{OutcomeFormatter, VisitOutcome};
use artifact_visit::{ArtifactId, ArtifactSet, ArtifactVisitor, DeferredVisitSet, ParallelExecutor,
                     ResolvedArtifact, ResolvedArtifactSource, VariantAttributes, VisitError};

/// Consumer de demostración: acumula entregas y reporta progreso por
/// outcome a través del formatter de estadísticas.
struct DemoConsumer {
    fail_prepare: HashSet<ArtifactId>,
    prepared: Mutex<Vec<ArtifactId>>,
    visited: Vec<ArtifactId>,
    failures: Vec<VisitError>,
    progress: OutcomeFormatter,
}

impl DemoConsumer {
    fn new(fail_prepare: HashSet<ArtifactId>) -> Self {
        Self { fail_prepare,
               prepared: Mutex::new(Vec::new()),
               visited: Vec::new(),
               failures: Vec::new(),
               progress: OutcomeFormatter::new() }
    }
}

impl ArtifactVisitor for DemoConsumer {
    fn prepare(&self, artifact: &ResolvedArtifact) -> Result<(), VisitError> {
        self.prepared.lock().unwrap().push(artifact.id.clone());
        if self.fail_prepare.contains(&artifact.id) {
            return Err(VisitError::PrepareFailed { artifact: artifact.id.clone(),
                                                   reason: "simulated download failure".to_string() });
        }
        Ok(())
    }

    fn visit(&mut self, variant: &VariantAttributes, artifact: &ResolvedArtifact) {
        self.visited.push(artifact.id.clone());
        let line = self.progress.count_and_format(VisitOutcome::Prepared);
        let usage = variant.get("usage").unwrap_or("-");
        println!("visit   {} (usage={}){}", artifact.id, usage, line);
    }

    fn include_files(&self) -> bool {
        true
    }

    fn visit_file(&mut self, id: &ArtifactId, _variant: &VariantAttributes, path: &Path) {
        let line = self.progress.count_and_format(VisitOutcome::UpToDate);
        println!("file    {} -> {}{}", id, path.display(), line);
    }

    fn visit_failure(&mut self, failure: VisitError) {
        let line = self.progress.count_and_format(VisitOutcome::Failed);
        println!("failure {failure}{line}");
        self.failures.push(failure);
    }
}

fn artifact(component: &str, usage: &str) -> (VariantAttributes, ResolvedArtifact) {
    (VariantAttributes::new().with("usage", usage),
     ResolvedArtifact::new(ArtifactId::new(component, format!("{component}.jar"))))
}

fn run_deferred_visit_validation(workers: usize) {
    let set = ArtifactSet::composite(vec![
        ArtifactSet::leaf(ResolvedArtifactSource::new(vec![
            artifact("org.example:core", "runtime"),
            artifact("org.example:broken", "runtime"),
        ])),
        ArtifactSet::leaf(ResolvedArtifactSource::new(vec![
            artifact("org.example:extra", "compile"),
        ])),
        ArtifactSet::leaf(artifact_visit::FileArtifactSource::new(vec![(
            ArtifactId::new("local", "classes"),
            VariantAttributes::new().with("type", "directory"),
            std::path::PathBuf::from("build/classes"),
        )])),
    ]);

    let executor = ParallelExecutor::new(workers);
    let deferred = DeferredVisitSet::of(set, &executor);

    let broken = ArtifactId::new("org.example:broken", "org.example:broken.jar");
    let mut consumer = DemoConsumer::new(HashSet::from([broken.clone()]));
    deferred.visit(&mut consumer).expect("queue must not fail");

    // Invariantes: 3 prepares, 2 visitas en orden de descubrimiento, 1
    // fallo aislado, y el artifact roto nunca se entrega.
    assert_eq!(consumer.prepared.lock().unwrap().len(), 3);
    assert_eq!(consumer.visited,
               vec![ArtifactId::new("org.example:core", "org.example:core.jar"),
                    ArtifactId::new("org.example:extra", "org.example:extra.jar")]);
    assert_eq!(consumer.failures.len(), 1);
    assert!(!consumer.visited.contains(&broken));

    let stats = consumer.progress.snapshot();
    println!("\nvisited {} artifacts ({} failed, {} up-to-date) with {} workers",
             stats.total(),
             stats.count(VisitOutcome::Failed),
             stats.count(VisitOutcome::UpToDate),
             workers);
}

fn main() {
    dotenvy::dotenv().ok();
    let workers = std::env::var("VISIT_WORKERS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(4);

    run_deferred_visit_validation(workers);
    println!("deferred visit validation OK");
}
