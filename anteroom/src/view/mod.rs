//! View model.
//!
//! The concrete view layer lives outside this crate. What it receives is a
//! small element tree built by [`render`], a deterministic function of the
//! observable state. Styling is semantic (tones, bold, disabled), not
//! concrete colors or layout metrics; those belong to whoever draws the
//! tree.

mod render;

pub use render::render;

/// Semantic color tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Muted,
    Success,
    Danger,
}

/// Semantic text styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub tone: Option<Tone>,
}

impl Style {
    /// Create a default (plain) style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the color tone.
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }
}

/// Element content.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// Layout direction for container elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Column,
    Row,
}

/// A node in the rendered tree.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Optional stable id for lookups and focus binding
    pub id: Option<String>,
    pub content: Content,
    pub direction: Direction,
    /// Gap between children
    pub gap: u16,
    pub style: Style,
    /// Disabled elements don't receive input
    pub disabled: bool,
}

impl Element {
    /// Create a text element.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Default::default()
        }
    }

    /// Create an empty column container.
    pub fn column() -> Self {
        Self {
            content: Content::Children(Vec::new()),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    /// Create an empty row container.
    pub fn row() -> Self {
        Self {
            content: Content::Children(Vec::new()),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    /// Append a child element.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Set the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the gap between children.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Set the style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The text content, if this is a text element.
    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The child elements (empty for text and leaf elements).
    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}

/// Find an element by id in the tree.
pub fn find<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    for child in root.children() {
        if let Some(found) = find(child, id) {
            return Some(found);
        }
    }

    None
}
