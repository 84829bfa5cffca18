// File: crates/chart-threshold/src/svg.rs
// Summary: Minimal SVG host model; materializes masks and band assignments as SVG elements and text.

use std::fmt::{self, Write as _};

use crate::classify::{BandAssignment, CopyOrigin};
use crate::mask::{Mask, MaskSet, REVEAL_FILL};

/// A single SVG element with ordered attributes and children.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgElement {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<SvgElement>,
}

impl SvgElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attrs: Vec::new(), children: Vec::new() }
    }

    /// Set (or overwrite) an attribute.
    pub fn attr(mut self, key: &str, value: impl ToString) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key.to_string(), value)),
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Append a class name unless already present.
    pub fn add_class(&mut self, class: &str) {
        let current = self.get_attr("class").unwrap_or("");
        if current.split_whitespace().any(|c| c == class) { return; }
        let joined = if current.is_empty() { class.to_string() } else { format!("{current} {class}") };
        self.set_attr("class", joined);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class").is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    /// Append `child` and return a handle to it.
    pub fn elem(&mut self, child: SvgElement) -> &mut SvgElement {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn find_child(&self, name: &str) -> Option<&SvgElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Materialize a band assignment under `self` (the shape's parent).
    /// Points are tagged in place by [`tag_point`]; copies are appended in band order.
    pub fn apply_assignment(&mut self, assignment: BandAssignment<SvgElement>) {
        if let BandAssignment::Copies(copies) = assignment {
            for copy in copies {
                let url = copy.mask_url();
                let mut el = copy.shape;
                el.set_attr("mask", url);
                el.add_class(&copy.class_name);
                if copy.origin == CopyOrigin::Original {
                    el.set_attr("data-original", "true");
                }
                self.children.push(el);
            }
        }
    }

    fn write_to(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{indent}<{}", self.name)?;
        for (k, v) in &self.attrs {
            write!(out, " {k}=\"{}\"", escape(v))?;
        }
        if self.children.is_empty() {
            return writeln!(out, "/>");
        }
        writeln!(out, ">")?;
        for child in &self.children {
            child.write_to(out, depth + 1)?;
        }
        writeln!(out, "{indent}</{}>", self.name)
    }
}

impl fmt::Display for SvgElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, 0)?;
        f.write_str(&out)
    }
}

/// Tag a drawn point with the class from its assignment.
pub fn tag_point(point: &mut SvgElement, assignment: &BandAssignment<SvgElement>) {
    if let BandAssignment::Point { class_name, .. } = assignment {
        point.add_class(class_name);
    }
}

/// `<mask>` node with its single white reveal rectangle.
pub fn mask_element(mask: &Mask) -> SvgElement {
    let mut node = SvgElement::new("mask")
        .attr("x", mask.bounds.x)
        .attr("y", mask.bounds.y)
        .attr("width", mask.bounds.width)
        .attr("height", mask.bounds.height)
        .attr("id", &mask.id);
    node.elem(
        SvgElement::new("rect")
            .attr("x", mask.reveal.x)
            .attr("y", mask.reveal.y)
            .attr("width", mask.reveal.width)
            .attr("height", mask.reveal.height)
            .attr("fill", REVEAL_FILL),
    );
    node
}

/// `M x y L x y ...` path data for a polyline in pixel space.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 { d.push(' '); }
        let _ = write!(d, "{cmd}{x},{y}");
    }
    d
}

/// Root `<svg>` of one chart render.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    pub root: SvgElement,
    /// Ids of the mask set registered last.
    mask_ids: Vec<String>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        let root = SvgElement::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height);
        Self { root, mask_ids: Vec::new() }
    }

    /// The document's `<defs>`, created on first use and reused afterwards.
    pub fn defs_mut(&mut self) -> &mut SvgElement {
        let idx = match self.root.children.iter().position(|c| c.name == "defs") {
            Some(i) => i,
            None => {
                self.root.children.insert(0, SvgElement::new("defs"));
                0
            }
        };
        &mut self.root.children[idx]
    }

    pub fn defs(&self) -> Option<&SvgElement> { self.root.find_child("defs") }

    /// Register masks in `<defs>`. The previously registered set is dropped
    /// as a whole, along with any other mask sharing an id with the new set.
    pub fn register_masks(&mut self, masks: &MaskSet) {
        let mut stale = std::mem::take(&mut self.mask_ids);
        stale.extend(masks.iter().map(|m| m.id.clone()));
        let defs = self.defs_mut();
        defs.children.retain(|c| {
            let is_stale = c.get_attr("id").is_some_and(|id| stale.iter().any(|s| s == id));
            !(c.name == "mask" && is_stale)
        });
        for mask in masks {
            defs.children.push(mask_element(mask));
        }
        self.mask_ids = masks.iter().map(|m| m.id.clone()).collect();
    }

    /// Append a group (e.g. one series) to the root and return it.
    pub fn group(&mut self, class: &str) -> &mut SvgElement {
        self.root.elem(SvgElement::new("g").attr("class", class))
    }

    pub fn to_svg_string(&self) -> String { self.root.to_string() }
}

fn escape(raw: &str) -> String {
    let mut s = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(ch),
        }
    }
    s
}
