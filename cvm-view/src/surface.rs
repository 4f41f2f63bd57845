//! Drawing surface abstraction.
//!
//! Views never touch the DOM. They describe what to draw through the
//! [`DrawingSurface`] trait; [`Scene`] records those calls as a retained
//! element tree that a front end renders (the web app turns it into SVG)
//! and that tests compare structurally.

use std::collections::BTreeMap;

/// Independently cleared drawing regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Map,
    XAxis,
    YAxis,
    Lines,
}

impl Layer {
    /// Id of the page element this layer renders into.
    pub const fn dom_id(self) -> &'static str {
        match self {
            Layer::Map => "map",
            Layer::XAxis => "x-axis",
            Layer::YAxis => "y-axis",
            Layer::Lines => "lines",
        }
    }
}

/// Outer size of a layer's svg and the offset of its inner group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub offset: (f64, f64),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathElement {
    /// Addressable key (the DOM id), used for selection marking.
    pub key: Option<String>,
    pub d: String,
    pub classes: Vec<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl PathElement {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Default::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.set_class(&class.into(), true);
        self
    }

    pub fn fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add or remove a class, keeping the others in order.
    pub fn set_class(&mut self, class: &str, on: bool) {
        let present = self.has_class(class);
        if on && !present {
            self.classes.push(class.to_string());
        } else if !on && present {
            self.classes.retain(|c| c != class);
        }
    }

    /// Space separated class list for the `class` attribute.
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    /// Value of the `id` attribute, if the path has a non-empty key.
    pub fn dom_id(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis, in layer coordinates.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisElement {
    pub orient: AxisOrient,
    /// Translation of the axis group inside the layer.
    pub translate: (f64, f64),
    /// Screen extent of the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Percent along the gradient, 0..=100.
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Horizontal gradient bar with text labels.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendElement {
    pub gradient_id: String,
    pub stops: Vec<GradientStop>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub labels: Vec<TextElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Path(PathElement),
    Axis(AxisElement),
    Legend(LegendElement),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visible: bool,
    pub text: String,
    /// Page coordinates of the tooltip's top-left corner.
    pub left: f64,
    pub top: f64,
}

/// Capabilities a rendering backend offers to the views.
pub trait DrawingSurface {
    /// Remove everything from a layer, including its frame.
    fn clear(&mut self, layer: Layer);
    fn set_frame(&mut self, layer: Layer, frame: Frame);
    fn draw_path(&mut self, layer: Layer, path: PathElement);
    fn draw_axis(&mut self, layer: Layer, axis: AxisElement);
    fn draw_legend(&mut self, layer: Layer, legend: LegendElement);
    /// Toggle the `selected` class on every path keyed `key`.
    fn set_selected(&mut self, layer: Layer, key: &str, selected: bool);
    fn show_tooltip(&mut self, text: &str);
    fn move_tooltip(&mut self, left: f64, top: f64);
    fn hide_tooltip(&mut self);
}

/// Class marking selected shapes.
pub const SELECTED_CLASS: &str = "selected";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerContent {
    pub frame: Option<Frame>,
    pub elements: Vec<Element>,
}

impl LayerContent {
    pub fn paths(&self) -> impl Iterator<Item = &PathElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Path(p) => Some(p),
            _ => None,
        })
    }

    pub fn axes(&self) -> impl Iterator<Item = &AxisElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Axis(a) => Some(a),
            _ => None,
        })
    }

    pub fn legends(&self) -> impl Iterator<Item = &LegendElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Legend(l) => Some(l),
            _ => None,
        })
    }
}

/// Retained drawing surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    layers: BTreeMap<Layer, LayerContent>,
    tooltip: Tooltip,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a layer; `None` when nothing was drawn since the last clear.
    pub fn layer(&self, layer: Layer) -> Option<&LayerContent> {
        self.layers.get(&layer)
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// First path in `layer` with the given key.
    pub fn path(&self, layer: Layer, key: &str) -> Option<&PathElement> {
        self.layer(layer)?
            .paths()
            .find(|p| p.key.as_deref() == Some(key))
    }

    /// Keys of the selected paths in `layer`, in draw order.
    pub fn selected_keys(&self, layer: Layer) -> Vec<&str> {
        self.layer(layer)
            .into_iter()
            .flat_map(|l| l.paths())
            .filter(|p| p.has_class(SELECTED_CLASS))
            .filter_map(|p| p.key.as_deref())
            .collect()
    }

    fn content(&mut self, layer: Layer) -> &mut LayerContent {
        self.layers.entry(layer).or_default()
    }
}

impl DrawingSurface for Scene {
    fn clear(&mut self, layer: Layer) {
        self.layers.remove(&layer);
    }

    fn set_frame(&mut self, layer: Layer, frame: Frame) {
        self.content(layer).frame = Some(frame);
    }

    fn draw_path(&mut self, layer: Layer, path: PathElement) {
        self.content(layer).elements.push(Element::Path(path));
    }

    fn draw_axis(&mut self, layer: Layer, axis: AxisElement) {
        self.content(layer).elements.push(Element::Axis(axis));
    }

    fn draw_legend(&mut self, layer: Layer, legend: LegendElement) {
        self.content(layer).elements.push(Element::Legend(legend));
    }

    fn set_selected(&mut self, layer: Layer, key: &str, selected: bool) {
        let Some(content) = self.layers.get_mut(&layer) else {
            return;
        };
        for element in content.elements.iter_mut() {
            if let Element::Path(p) = element {
                if p.key.as_deref() == Some(key) {
                    p.set_class(SELECTED_CLASS, selected);
                }
            }
        }
    }

    fn show_tooltip(&mut self, text: &str) {
        self.tooltip.visible = true;
        self.tooltip.text = text.to_string();
    }

    fn move_tooltip(&mut self, left: f64, top: f64) {
        self.tooltip.left = left;
        self.tooltip.top = top;
    }

    fn hide_tooltip(&mut self) {
        self.tooltip.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder_and_classes() {
        let mut p = PathElement::new("M0,0")
            .key("FRA")
            .class("countries")
            .class("boundary")
            .class("countries");
        assert_eq!(p.class_attr(), "countries boundary");
        p.set_class("selected", true);
        assert!(p.has_class("selected"));
        p.set_class("countries", false);
        assert_eq!(p.class_attr(), "boundary selected");
    }

    #[test]
    fn test_dom_id_only_for_keyed_paths() {
        assert_eq!(PathElement::new("M0,0").key("FRA").dom_id(), Some("FRA"));
        assert_eq!(PathElement::new("M0,0").dom_id(), None);
        assert_eq!(PathElement::new("M0,0").key("").dom_id(), None);
    }

    #[test]
    fn test_clear_removes_layer() {
        let mut scene = Scene::new();
        scene.draw_path(Layer::Lines, PathElement::new("M0,0"));
        scene.set_frame(
            Layer::Lines,
            Frame {
                width: 10.0,
                height: 10.0,
                offset: (0.0, 0.0),
            },
        );
        assert_eq!(scene.layer(Layer::Lines).map(|l| l.paths().count()), Some(1));
        scene.clear(Layer::Lines);
        assert!(scene.layer(Layer::Lines).is_none());
        assert_eq!(scene, Scene::new());
        // clearing twice is fine
        scene.clear(Layer::Lines);
    }

    #[test]
    fn test_set_selected_by_key() {
        let mut scene = Scene::new();
        scene.draw_path(Layer::Map, PathElement::new("M0,0").key("FRA"));
        scene.draw_path(Layer::Map, PathElement::new("M1,1").key("DEU"));
        scene.set_selected(Layer::Map, "DEU", true);
        assert_eq!(scene.selected_keys(Layer::Map), vec!["DEU"]);
        scene.set_selected(Layer::Map, "DEU", false);
        assert!(scene.selected_keys(Layer::Map).is_empty());
        // unknown layer is a no-op
        scene.set_selected(Layer::Lines, "DEU", true);
    }

    #[test]
    fn test_tooltip() {
        let mut scene = Scene::new();
        scene.show_tooltip("France");
        scene.move_tooltip(110.0, 40.0);
        assert!(scene.tooltip().visible);
        assert_eq!(scene.tooltip().text, "France");
        assert_eq!((scene.tooltip().left, scene.tooltip().top), (110.0, 40.0));
        scene.hide_tooltip();
        assert!(!scene.tooltip().visible);
    }

    #[test]
    fn test_dom_ids() {
        assert_eq!(Layer::Map.dom_id(), "map");
        assert_eq!(Layer::XAxis.dom_id(), "x-axis");
        assert_eq!(Layer::YAxis.dom_id(), "y-axis");
        assert_eq!(Layer::Lines.dom_id(), "lines");
    }
}
