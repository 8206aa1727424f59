use crate::content::{Content, TextElementBase};
use crate::element::{ElementBase, HtmlElement, TagElement};
use crate::elements::Div;
use crate::host::Document;
use crate::{Props, Result};

/// A `<div>` laid out as a CSS grid.
///
/// Built from the `div` class and its declared properties; `layout` and `gap` only go
/// to the inline style and are not declared properties themselves.
///
/// ```rust
/// use tagweave_html::{Grid, HtmlElement, Props, memory::MemoryDocument};
///
/// let document = MemoryDocument::new();
/// let grid = Grid::new(&document, "1fr 1fr", (), Some("10px"), Props::new()).unwrap();
/// assert_eq!(grid.style().get("display").as_deref(), Some("grid"));
/// ```
#[derive(Debug)]
pub struct Grid {
    inner: TextElementBase,
}

impl Grid {
    /// Neither `layout` nor `gap` is validated; they are CSS values passed through.
    pub fn new(
        document: &dyn Document,
        layout: &str,
        content: impl Into<Content>,
        gap: Option<&str>,
        props: Props,
    ) -> Result<Self> {
        let inner = TextElementBase::new(
            document,
            Div::TAG,
            Div::properties(),
            content.into(),
            &props,
        )?;

        let style = inner.style();
        style.set("display", "grid")?;
        style.set("grid-template-columns", layout)?;
        if let Some(gap) = gap {
            style.set("gap", gap)?;
        }

        Ok(Self { inner })
    }
}

impl HtmlElement for Grid {
    fn base(&self) -> &ElementBase {
        &self.inner
    }
}

impl From<Grid> for Content {
    fn from(grid: Grid) -> Self {
        Content::Node(grid.inner.clone_node())
    }
}

impl From<&Grid> for Content {
    fn from(grid: &Grid) -> Self {
        Content::Node(grid.inner.clone_node())
    }
}
