use std::ops::Deref;

use crate::element::{ElementBase, HtmlElement};
use crate::host::{Document, NativeElement};
use crate::property::PropertyTable;
use crate::{Props, Result};

/// What a text element is initialized with.
///
/// Conversions pick the variant: a wrapper becomes `Node`, a `Vec` of wrappers becomes
/// `Nodes`, `()`/`None` becomes `Empty`, and strings and scalars become `Html`.
///
/// `Html` is written verbatim as the element's markup, exactly like assigning
/// `innerHTML`. It is never escaped, so it must come from trusted code.
#[derive(Debug, Default)]
pub enum Content {
    #[default]
    Empty,
    Node(Box<dyn NativeElement>),
    Nodes(Vec<Box<dyn NativeElement>>),
    Html(String),
}

impl Content {
    /// Collects handles to several wrappers of possibly different types.
    pub fn children<'a>(children: impl IntoIterator<Item = &'a dyn HtmlElement>) -> Self {
        Content::Nodes(
            children
                .into_iter()
                .map(|child| child.node().clone_handle())
                .collect(),
        )
    }

    pub fn html(markup: impl Into<String>) -> Self {
        Content::Html(markup.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }

    /// Attaches the content to `base`.
    pub fn attach(self, base: &ElementBase) -> Result<()> {
        match self {
            Content::Node(child) => base.node().append(child.as_ref()),
            Content::Nodes(children) => {
                for child in &children {
                    base.node().append(child.as_ref())?;
                }
                Ok(())
            }
            Content::Empty => Ok(()),
            Content::Html(markup) => base.set_html(&markup),
        }
    }
}

impl From<()> for Content {
    fn from(_: ()) -> Self {
        Content::Empty
    }
}

impl<T: Into<Content>> From<Option<T>> for Content {
    fn from(value: Option<T>) -> Self {
        value.map_or(Content::Empty, Into::into)
    }
}

impl From<Box<dyn NativeElement>> for Content {
    fn from(node: Box<dyn NativeElement>) -> Self {
        Content::Node(node)
    }
}

impl<T: HtmlElement> From<Vec<T>> for Content {
    fn from(children: Vec<T>) -> Self {
        Content::Nodes(
            children
                .iter()
                .map(|child| child.node().clone_handle())
                .collect(),
        )
    }
}

impl<T: HtmlElement, const N: usize> From<[T; N]> for Content {
    fn from(children: [T; N]) -> Self {
        Content::Nodes(
            children
                .iter()
                .map(|child| child.node().clone_handle())
                .collect(),
        )
    }
}

macro_rules! html_content {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Content {
                fn from(value: $ty) -> Self {
                    Content::Html(value.to_string())
                }
            }
        )*
    };
}

html_content!(&str, String, &String, char, bool, i32, i64, u32, u64, usize, f32, f64);

/// An [`ElementBase`] whose constructor also takes [`Content`].
#[derive(Debug)]
pub struct TextElementBase {
    base: ElementBase,
}

impl TextElementBase {
    /// Builds the element as [`ElementBase::new`] does, then attaches `content`.
    pub fn new(
        document: &dyn Document,
        tag: &'static str,
        properties: &'static PropertyTable,
        content: Content,
        props: &Props,
    ) -> Result<Self> {
        let base = ElementBase::new(document, tag, properties, props)?;
        content.attach(&base)?;
        Ok(Self { base })
    }
}

impl Deref for TextElementBase {
    type Target = ElementBase;

    fn deref(&self) -> &ElementBase {
        &self.base
    }
}

impl AsRef<ElementBase> for TextElementBase {
    fn as_ref(&self) -> &ElementBase {
        &self.base
    }
}
