//! Display fragment model produced by components.
//!
//! An `Element` is a small immutable tree: text leaves composed horizontally
//! (`hbox`) or vertically (`vbox`), each node carrying decoration flags,
//! optional colors and zero or more `Reflect` handles. Components build trees
//! without knowing any geometry; the rasterizer (`canvas`) resolves layout and
//! writes the final rectangle of every tagged node into its `Reflect` handle,
//! which is how hit-test regions become readable after a frame.

use bitflags::bitflags;
use crossterm::style::Color;
use std::cell::Cell;
use std::rc::Rc;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Decoration: u16 {
        const DIM              = 1 << 0;
        const BOLD             = 1 << 1;
        const INVERTED         = 1 << 2;
        const UNDERLINE        = 1 << 3;
        /// Marks the selected element without drawing a terminal cursor.
        const SELECT           = 1 << 4;
        /// Places an underline-shaped terminal cursor on the element.
        const CURSOR_UNDERLINE = 1 << 5;
        /// Element owns keyboard focus (scrolling frames keep it visible).
        const FOCUS            = 1 << 6;
        /// Expand to the available width.
        const XFLEX            = 1 << 7;
        /// Clip children to the allotted box.
        const FRAME            = 1 << 8;
    }
}

/// Screen rectangle in cells. `width == 0 || height == 0` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Half-open containment test.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && (column as u32) < self.x as u32 + self.width as u32
            && (row as u32) < self.y as u32 + self.height as u32
    }
}

/// Shared slot receiving the laid-out rectangle of the element it tags.
///
/// Cloning shares the slot. The owner keeps one clone and reads it after the
/// host has rasterized the frame.
#[derive(Debug, Clone, Default)]
pub struct Reflect(Rc<Cell<Rect>>);

impl Reflect {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> Rect {
        self.0.get()
    }
    pub fn set(&self, rect: Rect) {
        self.0.set(rect);
    }
    /// True when both handles share the same slot.
    pub fn same_slot(&self, other: &Reflect) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    HBox(Vec<Element>),
    VBox(Vec<Element>),
}

#[derive(Debug, Clone)]
pub struct Element {
    node: Node,
    decorations: Decoration,
    fg: Option<Color>,
    bg: Option<Color>,
    reflects: Vec<Reflect>,
}

pub fn text(s: impl Into<String>) -> Element {
    Element::from_node(Node::Text(s.into()))
}

pub fn hbox(children: Vec<Element>) -> Element {
    Element::from_node(Node::HBox(children))
}

pub fn vbox(children: Vec<Element>) -> Element {
    Element::from_node(Node::VBox(children))
}

impl Element {
    fn from_node(node: Node) -> Self {
        Self {
            node,
            decorations: Decoration::empty(),
            fg: None,
            bg: None,
            reflects: Vec::new(),
        }
    }

    pub fn decorate(mut self, flags: Decoration) -> Self {
        self.decorations |= flags;
        self
    }
    pub fn xflex(self) -> Self {
        self.decorate(Decoration::XFLEX)
    }
    pub fn frame(self) -> Self {
        self.decorate(Decoration::FRAME)
    }
    pub fn focus(self) -> Self {
        self.decorate(Decoration::FOCUS)
    }
    pub fn select(self) -> Self {
        self.decorate(Decoration::SELECT)
    }
    pub fn cursor_underline(self) -> Self {
        self.decorate(Decoration::CURSOR_UNDERLINE)
    }
    pub fn inverted(self) -> Self {
        self.decorate(Decoration::INVERTED)
    }
    pub fn dim(self) -> Self {
        self.decorate(Decoration::DIM)
    }
    pub fn color(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }
    pub fn bgcolor(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
    /// Tag this element with a hit-test slot.
    pub fn reflect(mut self, slot: &Reflect) -> Self {
        self.reflects.push(slot.clone());
        self
    }

    pub fn node(&self) -> &Node {
        &self.node
    }
    pub fn decorations(&self) -> Decoration {
        self.decorations
    }
    pub fn has(&self, flags: Decoration) -> bool {
        self.decorations.contains(flags)
    }
    pub fn fg(&self) -> Option<Color> {
        self.fg
    }
    pub fn bg(&self) -> Option<Color> {
        self.bg
    }
    pub fn reflects(&self) -> &[Reflect] {
        &self.reflects
    }
    pub fn is_tagged_with(&self, slot: &Reflect) -> bool {
        self.reflects.iter().any(|r| r.same_slot(slot))
    }

    pub fn children(&self) -> &[Element] {
        match &self.node {
            Node::Text(_) => &[],
            Node::HBox(c) | Node::VBox(c) => c.as_slice(),
        }
    }

    /// Depth-first search (pre-order) for the first element matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(pred))
    }

    /// Text content, rows separated by `\n` for vertical composition.
    pub fn plain_text(&self) -> String {
        match &self.node {
            Node::Text(s) => s.clone(),
            Node::HBox(c) => c.iter().map(Element::plain_text).collect(),
            Node::VBox(c) => c
                .iter()
                .map(Element::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
