//! Sources de artifacts: hojas concretas y el composite recursivo.

pub mod file;
pub mod resolved;

pub use file::FileArtifactSource;
pub use resolved::ResolvedArtifactSource;

use crate::visitor::ArtifactVisitor;

/// Un producer hoja: al visitarse emite cero o más llamadas contra la
/// capability que reciba. Las implementaciones reales (repositorios
/// remotos, transformaciones) viven en la capa de resolución, fuera de
/// este crate.
pub trait ArtifactSource {
    fn visit(&self, visitor: &mut dyn ArtifactVisitor);
}

/// Árbol inmutable de sources.
///
/// La variante `Composite` agrega hijos en un orden fijo; ese orden es
/// estable y es el que luego gobierna el replay de visitas. El recorrido
/// nunca muta el árbol.
pub enum ArtifactSet {
    Leaf(Box<dyn ArtifactSource>),
    Composite(CompositeArtifactSet),
}

impl ArtifactSet {
    pub fn leaf(source: impl ArtifactSource + 'static) -> Self {
        ArtifactSet::Leaf(Box::new(source))
    }

    pub fn composite(children: Vec<ArtifactSet>) -> Self {
        ArtifactSet::Composite(CompositeArtifactSet::new(children))
    }

    /// Recorre el árbol reenviando la misma capability a cada nodo.
    pub fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        match self {
            ArtifactSet::Leaf(source) => source.visit(visitor),
            ArtifactSet::Composite(composite) => composite.visit(visitor),
        }
    }
}

/// Source compuesto: visita cada hijo en su orden fijo, con la misma
/// instancia de capability (o una que la envuelva) sin alterarla.
pub struct CompositeArtifactSet {
    children: Vec<ArtifactSet>,
}

impl CompositeArtifactSet {
    pub fn new(children: Vec<ArtifactSet>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn visit(&self, visitor: &mut dyn ArtifactVisitor) {
        for child in &self.children {
            child.visit(visitor);
        }
    }
}
