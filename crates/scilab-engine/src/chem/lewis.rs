//! Lewis dot layout for a single atom.

use serde::Serialize;

use crate::chem::element::Element;

/// Dot slots around the symbol, in fill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotSlot {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

pub const DOT_SLOTS: [DotSlot; 8] = [
    DotSlot::Top,
    DotSlot::Right,
    DotSlot::Bottom,
    DotSlot::Left,
    DotSlot::TopRight,
    DotSlot::BottomRight,
    DotSlot::BottomLeft,
    DotSlot::TopLeft,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub slot: DotSlot,
    pub filled: bool,
}

/// Eight dots; the first `valence_electrons` are filled. Elements listed with
/// more than eight valence electrons fill every slot.
pub fn lewis_dots(element: &Element) -> [Dot; 8] {
    let ve = element.valence_electrons as usize;
    DOT_SLOTS.map(|slot| Dot {
        slot,
        filled: (slot as usize) < ve,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chem::element::periodic_table;

    fn filled(symbol: &str) -> Vec<DotSlot> {
        let element = periodic_table().lookup(symbol).unwrap();
        lewis_dots(element)
            .iter()
            .filter(|d| d.filled)
            .map(|d| d.slot)
            .collect()
    }

    #[test]
    fn hydrogen_has_one_dot() {
        assert_eq!(filled("H"), vec![DotSlot::Top]);
    }

    #[test]
    fn oxygen_fills_in_order() {
        assert_eq!(
            filled("O"),
            vec![
                DotSlot::Top,
                DotSlot::Right,
                DotSlot::Bottom,
                DotSlot::Left,
                DotSlot::TopRight,
                DotSlot::BottomRight,
            ]
        );
    }

    #[test]
    fn saturates_at_eight() {
        assert_eq!(filled("Ne").len(), 8);
        assert_eq!(filled("Cn").len(), 8);
    }
}
