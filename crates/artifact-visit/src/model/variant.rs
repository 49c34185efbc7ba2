//! Atributos de variante (classifier, plataforma, usage...).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Descriptor inmutable clave/valor que se empareja con un artifact en el
/// momento de la visita final, no durante la preparación. El orden de
/// inserción de las claves es estable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAttributes {
    attributes: IndexMap<String, String>,
}

impl VariantAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estilo builder: `VariantAttributes::new().with("usage", "runtime")`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iteración en orden de inserción.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
