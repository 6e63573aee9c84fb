use serde::{Deserialize, Serialize};

/// Drawing layers of one timeline paint pass, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Primary/secondary ticks and tick labels.
    Grid,
    /// Hint boxes for visible markers.
    MarkerHints,
    /// Hint boxes for the selection; drawn above marker hints.
    SelectionHints,
    /// Top border line and axis caption.
    Axis,
}

impl CanvasLayerKind {
    /// Canonical back-to-front order used by every frame.
    pub const CANONICAL_ORDER: [CanvasLayerKind; 4] = [
        CanvasLayerKind::Grid,
        CanvasLayerKind::MarkerHints,
        CanvasLayerKind::SelectionHints,
        CanvasLayerKind::Axis,
    ];
}

#[cfg(test)]
mod tests {
    use super::CanvasLayerKind;

    #[test]
    fn selection_layer_sits_above_marker_layer() {
        let order = CanvasLayerKind::CANONICAL_ORDER;
        let markers = order
            .iter()
            .position(|kind| *kind == CanvasLayerKind::MarkerHints);
        let selection = order
            .iter()
            .position(|kind| *kind == CanvasLayerKind::SelectionHints);
        assert!(markers < selection);
        assert_eq!(order.last(), Some(&CanvasLayerKind::Axis));
    }
}
