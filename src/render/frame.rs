use crate::core::Viewport;
use crate::error::{GridError, GridResult};
use crate::render::{CanvasLayerKind, LinePrimitive, RectPrimitive, TextPrimitive};

/// One primitive borrowed from a layer, yielded in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawItem<'a> {
    Rect(&'a RectPrimitive),
    Line(&'a LinePrimitive),
    Text(&'a TextPrimitive),
}

/// Primitives of one drawing layer.
///
/// Paint order inside a layer is backdrops, connectors, rects, lines, texts.
/// Backdrops clear an area, connectors run underneath the boxes they join,
/// and labels always land on top of their own fills.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: CanvasLayerKind,
    pub backdrops: Vec<RectPrimitive>,
    pub connectors: Vec<LinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: CanvasLayerKind) -> Self {
        Self {
            kind,
            backdrops: Vec::new(),
            connectors: Vec::new(),
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backdrops.is_empty()
            && self.connectors.is_empty()
            && self.lines.is_empty()
            && self.rects.is_empty()
            && self.texts.is_empty()
    }

    /// Every primitive of the layer in the order backends paint it.
    pub fn draw_items(&self) -> impl Iterator<Item = DrawItem<'_>> {
        self.backdrops
            .iter()
            .map(DrawItem::Rect)
            .chain(self.connectors.iter().map(DrawItem::Line))
            .chain(self.rects.iter().map(DrawItem::Rect))
            .chain(self.lines.iter().map(DrawItem::Line))
            .chain(self.texts.iter().map(DrawItem::Text))
    }
}

/// Backend-agnostic scene for one timeline paint pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: CanvasLayerKind::CANONICAL_ORDER
                .into_iter()
                .map(LayerPrimitives::new)
                .collect(),
        }
    }

    pub fn push_line(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_rect(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rects.push(rect);
        }
    }

    /// Fill painted before anything else in the layer.
    pub fn push_backdrop(&mut self, kind: CanvasLayerKind, rect: RectPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.backdrops.push(rect);
        }
    }

    /// Line painted beneath the layer's rects.
    pub fn push_connector(&mut self, kind: CanvasLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.connectors.push(line);
        }
    }

    pub fn push_text(&mut self, kind: CanvasLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    /// Every primitive of every layer in paint order.
    pub fn draw_items(&self) -> impl Iterator<Item = DrawItem<'_>> {
        self.layers.iter().flat_map(LayerPrimitives::draw_items)
    }

    /// All lines in draw order, connectors included.
    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.draw_items().filter_map(|item| match item {
            DrawItem::Line(line) => Some(line),
            _ => None,
        })
    }

    /// All rects in draw order, backdrops included.
    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.draw_items().filter_map(|item| match item {
            DrawItem::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    /// All texts in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.layers.iter().flat_map(|layer| layer.texts.iter())
    }

    pub fn validate(&self) -> GridResult<()> {
        if !self.viewport.is_valid() {
            return Err(GridError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for item in self.draw_items() {
            match item {
                DrawItem::Rect(rect) => rect.validate()?,
                DrawItem::Line(line) => line.validate()?,
                DrawItem::Text(text) => text.validate()?,
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }

    fn layer_mut(&mut self, kind: CanvasLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }
}
