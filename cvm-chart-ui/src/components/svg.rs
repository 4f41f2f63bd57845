//! SVG rendering of scene elements.
//!
//! Axes follow the usual d3 axis markup: a `domain` path plus one `tick`
//! group per tick holding a 6px line and its label.

use cvm_view::surface::{AxisElement, AxisOrient, Element as SceneElement, LayerContent, LegendElement, PathElement};
use dioxus::prelude::*;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Attribute values of a path, with SVG defaults filled in.
pub(crate) struct PathAttrs {
    pub d: String,
    pub class: String,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: String,
}

impl From<&PathElement> for PathAttrs {
    fn from(p: &PathElement) -> Self {
        Self {
            d: p.d.clone(),
            class: p.class_attr(),
            fill: p.fill.clone().unwrap_or_else(|| "none".to_string()),
            stroke: p.stroke.clone().unwrap_or_else(|| "none".to_string()),
            stroke_width: p.stroke_width.unwrap_or(1.0).to_string(),
        }
    }
}

fn path_node(p: &PathElement) -> Element {
    let attrs = PathAttrs::from(p);
    let id = p.dom_id().map(str::to_string);
    rsx! {
        path {
            id: id,
            class: "{attrs.class}",
            d: "{attrs.d}",
            fill: "{attrs.fill}",
            stroke: "{attrs.stroke}",
            stroke_width: "{attrs.stroke_width}",
        }
    }
}

fn axis_node(axis: &AxisElement) -> Element {
    let (tx, ty) = axis.translate;
    let (r0, r1) = axis.range;
    let ticks: Vec<(f64, String)> = axis
        .ticks
        .iter()
        .map(|t| (t.offset, t.label.clone()))
        .collect();
    let label_gap = TICK_SIZE + TICK_PADDING;

    match axis.orient {
        AxisOrient::Bottom => rsx! {
            g {
                class: "text",
                transform: "translate({tx},{ty})",
                fill: "none",
                font_size: "10",
                font_family: "sans-serif",
                text_anchor: "middle",
                path { class: "domain", stroke: "currentColor", d: "M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}" }
                for (offset, label) in ticks {
                    g {
                        class: "tick",
                        transform: "translate({offset},0)",
                        line { stroke: "currentColor", y2: "{TICK_SIZE}" }
                        text { fill: "currentColor", y: "{label_gap}", dy: "0.71em", "{label}" }
                    }
                }
            }
        },
        AxisOrient::Left => rsx! {
            g {
                transform: "translate({tx},{ty})",
                fill: "none",
                font_size: "10",
                font_family: "sans-serif",
                text_anchor: "end",
                path { class: "domain", stroke: "currentColor", d: "M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}" }
                for (offset, label) in ticks {
                    g {
                        class: "tick",
                        transform: "translate(0,{offset})",
                        line { stroke: "currentColor", x2: "-{TICK_SIZE}" }
                        text { fill: "currentColor", x: "-{label_gap}", dy: "0.32em", "{label}" }
                    }
                }
            }
        },
    }
}

fn legend_node(legend: &LegendElement) -> Element {
    let gradient_id = legend.gradient_id.clone();
    let stops: Vec<(f64, String)> = legend
        .stops
        .iter()
        .map(|s| (s.offset, s.color.clone()))
        .collect();
    let labels: Vec<(f64, f64, String)> = legend
        .labels
        .iter()
        .map(|l| (l.x, l.y, l.text.clone()))
        .collect();
    let (x, y, width, height) = (legend.x, legend.y, legend.width, legend.height);

    rsx! {
        defs {
            linearGradient {
                id: "{gradient_id}",
                x1: "0%",
                y1: "0%",
                x2: "100%",
                y2: "0%",
                for (offset, color) in stops {
                    stop {
                        offset: "{offset}%",
                        style: "stop-color: {color}; stop-opacity: 1",
                    }
                }
            }
        }
        rect {
            x: "{x}",
            y: "{y}",
            width: "{width}",
            height: "{height}",
            style: "fill: url(#{gradient_id})",
        }
        for (lx, ly, label) in labels {
            text { x: "{lx}", y: "{ly}", "{label}" }
        }
    }
}

/// A scene element without event handlers.
pub(crate) fn static_node(element: &SceneElement) -> Element {
    match element {
        SceneElement::Path(p) => path_node(p),
        SceneElement::Axis(a) => axis_node(a),
        SceneElement::Legend(l) => legend_node(l),
    }
}

/// A chart layer: an svg of the frame's size with the elements inside a
/// group offset by the margins. Empty when nothing is drawn.
pub(crate) fn layer_svg(content: Option<&LayerContent>) -> Element {
    let Some(content) = content else {
        return rsx! {};
    };
    let Some(frame) = content.frame else {
        return rsx! {};
    };
    let (ox, oy) = frame.offset;
    rsx! {
        svg {
            width: "{frame.width}",
            height: "{frame.height}",
            g {
                transform: "translate({ox},{oy})",
                {content.elements.iter().map(static_node)}
            }
        }
    }
}
