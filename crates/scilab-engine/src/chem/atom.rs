use glam::Vec2;
use serde::Serialize;

use crate::api::types::AtomId;
use crate::chem::element::Element;

/// One atom placed in the sandbox.
#[derive(Debug, Clone, Serialize)]
pub struct PlacedAtom {
    pub id: AtomId,
    /// Catalog entry; shared, never copied per placement.
    pub element: &'static Element,
    /// Sandbox coordinates (pixels in the reference UI).
    pub position: Vec2,
}

impl PlacedAtom {
    pub fn new(id: AtomId, element: &'static Element, position: Vec2) -> Self {
        Self { id, element, position }
    }

    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }

    pub fn distance_to(&self, other: &PlacedAtom) -> f32 {
        self.position.distance(other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::element::periodic_table;

    #[test]
    fn distance_is_euclidean() {
        let h = periodic_table().lookup("H").unwrap();
        let a = PlacedAtom::new(AtomId(1), h, Vec2::new(0.0, 0.0));
        let b = PlacedAtom::new(AtomId(2), h, Vec2::new(30.0, 40.0));
        assert_eq!(a.distance_to(&b), 50.0);
        assert_eq!(b.distance_to(&a), 50.0);
    }
}
