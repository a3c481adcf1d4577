//! Shape-type lookup.
//!
//! The table is filled once by [`ShapeRegistry::new`] and only read
//! afterwards, so a registry can be shared across threads and rendering can
//! fan out over shapes freely.

use std::collections::HashMap;

use crate::errors::RenderError;
use crate::types::ShapeDescriptor;

use super::context::{EngineConfig, ShapeContext};
use super::shapes;

/// A preset generator: a pure function of its context.
pub type GeneratorFn = fn(&ShapeContext<'_>) -> String;

/// Maps preset names to generators.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    generators: HashMap<&'static str, GeneratorFn>,
    config: EngineConfig,
}

impl ShapeRegistry {
    /// Registry with every built-in family and the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut registry = Self {
            generators: HashMap::new(),
            config,
        };
        shapes::register_all(&mut registry);
        registry
    }

    /// Add or replace a generator.
    pub fn register(&mut self, shape_type: &'static str, generator: GeneratorFn) {
        self.generators.insert(shape_type, generator);
    }

    pub fn get(&self, shape_type: &str) -> Option<GeneratorFn> {
        self.generators.get(shape_type).copied()
    }

    pub fn contains(&self, shape_type: &str) -> bool {
        self.generators.contains_key(shape_type)
    }

    /// Render a descriptor, or explain why it cannot be.
    pub fn try_render(&self, descriptor: &ShapeDescriptor) -> Result<String, RenderError> {
        let generate = self
            .get(&descriptor.shape_type)
            .ok_or_else(|| RenderError::UnknownShape {
                shape_type: descriptor.shape_type.clone(),
            })?;
        let ctx = ShapeContext::from_descriptor(descriptor, &self.config);
        Ok(generate(&ctx))
    }

    /// Render a descriptor; unknown shape types give an empty string.
    pub fn render(&self, descriptor: &ShapeDescriptor) -> String {
        match self.try_render(descriptor) {
            Ok(fragment) => fragment,
            Err(err) => {
                crate::log::warn!(%err, shape_id = %descriptor.shape_id, "shape skipped");
                String::new()
            }
        }
    }

    /// Registered names, sorted.
    pub fn shape_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.generators.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
