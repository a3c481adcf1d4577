//! Curved and compound presets: wedges, arcs, rings, gears, brackets and
//! braces.

mod arcs;
mod brackets;
mod gear;
mod rings;

use crate::render::registry::ShapeRegistry;

pub(super) fn register(registry: &mut ShapeRegistry) {
    arcs::register(registry);
    brackets::register(registry);
    gear::register(registry);
    rings::register(registry);
}
