use std::sync::LazyLock;

use crate::content::{Content, TextElementBase};
use crate::element::{ElementBase, HtmlElement, TagElement};
use crate::host::Document;
use crate::property::PropertyTable;
use crate::{Props, Result};

/// One registered element class.
#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    /// The Rust type name.
    pub name: &'static str,
    /// The tag handed to the host.
    pub tag: &'static str,
    /// Whether the constructor accepts [`Content`].
    pub text: bool,
    pub properties: &'static PropertyTable,
}

macro_rules! base_type {
    (text) => {
        TextElementBase
    };
    (void) => {
        ElementBase
    };
}

macro_rules! is_text {
    (text) => {
        true
    };
    (void) => {
        false
    };
}

macro_rules! constructor {
    (text, $name:ident) => {
        impl $name {
            /// Creates the element, applies `props`, then attaches `content`.
            pub fn new(
                document: &dyn Document,
                content: impl Into<Content>,
                props: Props,
            ) -> Result<Self> {
                let inner = TextElementBase::new(
                    document,
                    Self::TAG,
                    Self::properties(),
                    content.into(),
                    &props,
                )?;
                Ok(Self { inner })
            }
        }
    };
    (void, $name:ident) => {
        impl $name {
            /// Creates the element and applies `props`.
            pub fn new(document: &dyn Document, props: Props) -> Result<Self> {
                let inner = ElementBase::new(document, Self::TAG, Self::properties(), &props)?;
                Ok(Self { inner })
            }
        }
    };
}

macro_rules! builder_constructors {
    (
        $(
            $(#[$attr:meta])*
            $name:ident($tag:literal, $base:ident) {
                $(
                    $get:ident, $set:ident: $kind:ident $prop:literal $(=> $backing:literal)?;
                )*
            };
        )*
    ) => {
        $(
            $(#[$attr])*
            #[derive(Debug)]
            pub struct $name {
                inner: base_type!($base),
            }

            constructor!($base, $name);

            #[rustfmt::skip]
            impl $name {
                $(
                    accessor!(pub $kind $get, $set, $prop);
                )*
            }

            impl HtmlElement for $name {
                fn base(&self) -> &ElementBase {
                    self.inner.as_ref()
                }
            }

            impl TagElement for $name {
                const TAG: &'static str = $tag;
                const NAME: &'static str = stringify!($name);

                fn properties() -> &'static PropertyTable {
                    static PROPERTIES: LazyLock<PropertyTable> = LazyLock::new(|| {
                        PropertyTable::register(&[
                            $( descriptor!($kind $prop $(=> $backing)?), )*
                        ])
                    });
                    &PROPERTIES
                }
            }

            impl From<$name> for Content {
                fn from(element: $name) -> Self {
                    Content::Node(element.inner.clone_node())
                }
            }

            impl From<&$name> for Content {
                fn from(element: &$name) -> Self {
                    Content::Node(element.inner.clone_node())
                }
            }
        )*

        static REGISTRY: LazyLock<Vec<TagInfo>> = LazyLock::new(|| {
            vec![
                $(
                    TagInfo {
                        name: stringify!($name),
                        tag: $tag,
                        text: is_text!($base),
                        properties: <$name as TagElement>::properties(),
                    },
                )*
            ]
        });
    };
}

/// Every element class, in declaration order.
///
/// The first call builds every property table; afterwards they are read-only.
pub fn registry() -> &'static [TagInfo] {
    &REGISTRY
}

/// Looks up a class by the tag it renders.
///
/// Only the first class registered for a tag is returned.
pub fn lookup(tag: &str) -> Option<&'static TagInfo> {
    registry().iter().find(|info| info.tag == tag)
}

// For all the elements below only a curated set of attributes is mapped, on top of
// the global ones. The lists follow
// https://developer.mozilla.org/en-US/docs/Web/HTML/Element
builder_constructors! {
    /// Build an
    /// [`<a>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/a#attributes)
    /// element.
    A("a", text) {
        download, set_download: attr "download";
        href, set_href: attr "href";
        referrerpolicy, set_referrerpolicy: attr "referrerpolicy";
        rel, set_rel: attr "rel";
        target, set_target: attr "target";
        r#type, set_type: attr "type";
    };

    /// Build a
    /// [`<br>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/br)
    /// element. Only the global attributes apply, the others are deprecated.
    Br("br", void) {};

    /// Build a
    /// [`<button>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/button#attributes)
    /// element.
    Button("button", text) {
        autofocus, set_autofocus: flag "autofocus";
        disabled, set_disabled: flag "disabled";
        form, set_form: attr "form";
        formaction, set_formaction: attr "formaction";
        formenctype, set_formenctype: attr "formenctype";
        formmethod, set_formmethod: attr "formmethod";
        formnovalidate, set_formnovalidate: flag "formnovalidate";
        formtarget, set_formtarget: attr "formtarget";
        name, set_name: attr "name";
        r#type, set_type: attr "type";
        value, set_value: live "value";
    };

    /// Build a
    /// [`<code>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/code)
    /// element.
    Code("code", text) {};

    /// Build a
    /// [`<div>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/div)
    /// element. Only the global attributes apply, the others are deprecated.
    Div("div", text) {};

    /// Build an
    /// [`<img>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/img#attributes)
    /// element.
    Img("img", void) {
        alt, set_alt: attr "alt";
        crossorigin, set_crossorigin: attr "crossorigin";
        decoding, set_decoding: attr "decoding";
        fetchpriority, set_fetchpriority: attr "fetchpriority";
        height, set_height: attr "height";
        ismap, set_ismap: flag "ismap";
        loading, set_loading: attr "loading";
        referrerpolicy, set_referrerpolicy: attr "referrerpolicy";
        sizes, set_sizes: attr "sizes";
        src, set_src: attr "src";
        width, set_width: attr "width";
    };

    /// Build an
    /// [`<input>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input#attributes)
    /// element.
    ///
    /// `value` and `checked` are live properties: they reflect what the user typed or
    /// toggled, not the initial attribute.
    Input("input", void) {
        accept, set_accept: attr "accept";
        alt, set_alt: attr "alt";
        autofocus, set_autofocus: flag "autofocus";
        capture, set_capture: attr "capture";
        checked, set_checked: live_flag "checked";
        dirname, set_dirname: attr "dirname";
        disabled, set_disabled: flag "disabled";
        form, set_form: attr "form";
        formaction, set_formaction: attr "formaction";
        formenctype, set_formenctype: attr "formenctype";
        formmethod, set_formmethod: attr "formmethod";
        formnovalidate, set_formnovalidate: flag "formnovalidate";
        formtarget, set_formtarget: attr "formtarget";
        height, set_height: attr "height";
        list, set_list: attr "list";
        max, set_max: attr "max";
        maxlength, set_maxlength: attr "maxlength";
        min, set_min: attr "min";
        minlength, set_minlength: attr "minlength";
        multiple, set_multiple: flag "multiple";
        name, set_name: attr "name";
        pattern, set_pattern: attr "pattern";
        placeholder, set_placeholder: attr "placeholder";
        popovertarget, set_popovertarget: attr "popovertarget";
        popovertargetaction, set_popovertargetaction: attr "popovertargetaction";
        readonly, set_readonly: flag "readonly";
        required, set_required: flag "required";
        size, set_size: attr "size";
        src, set_src: attr "src";
        step, set_step: attr "step";
        r#type, set_type: attr "type";
        value, set_value: live "value";
        width, set_width: attr "width";
    };

    /// Build a
    /// [`<h1>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements#attributes)
    /// element. Headings only have the global attributes.
    H1("h1", text) {};

    /// Build a
    /// [`<h2>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    /// element.
    H2("h2", text) {};

    /// Build a
    /// [`<h3>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    /// element.
    H3("h3", text) {};

    /// Build a
    /// [`<h4>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    /// element.
    H4("h4", text) {};

    /// Build a
    /// [`<h5>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    /// element.
    H5("h5", text) {};

    /// Build a
    /// [`<h6>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements)
    /// element.
    H6("h6", text) {};

    /// Build a
    /// [`<link>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/link#attributes)
    /// element.
    Link("link", text) {
        r#as, set_as: attr "as";
        crossorigin, set_crossorigin: attr "crossorigin";
        disabled, set_disabled: flag "disabled";
        fetchpriority, set_fetchpriority: attr "fetchpriority";
        href, set_href: attr "href";
        imagesizes, set_imagesizes: attr "imagesizes";
        imagesrcset, set_imagesrcset: attr "imagesrcset";
        integrity, set_integrity: attr "integrity";
        media, set_media: attr "media";
        rel, set_rel: attr "rel";
        referrerpolicy, set_referrerpolicy: attr "referrerpolicy";
        sizes, set_sizes: attr "sizes";
        title, set_title: attr "title";
        r#type, set_type: attr "type";
    };

    /// Build a
    /// [`<p>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/p)
    /// element.
    P("p", text) {};

    /// Build a
    /// [`<pre>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/pre)
    /// element. Only the global attributes apply, the others are deprecated.
    Pre("pre", text) {};

    /// Build a
    /// [`<style>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/style#attributes)
    /// element.
    Style("style", text) {
        blocking, set_blocking: attr "blocking";
        media, set_media: attr "media";
        nonce, set_nonce: attr "nonce";
        title, set_title: attr "title";
    };

    /// Build a
    /// [`<script>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/script#attributes)
    /// element.
    ///
    /// `async` is a Rust keyword, so the property is bound as `async_`.
    Script("script", text) {
        async_, set_async: flag "async_" => "async";
        blocking, set_blocking: attr "blocking";
        crossorigin, set_crossorigin: attr "crossorigin";
        defer, set_defer: flag "defer";
        fetchpriority, set_fetchpriority: attr "fetchpriority";
        integrity, set_integrity: attr "integrity";
        nomodule, set_nomodule: flag "nomodule";
        nonce, set_nonce: attr "nonce";
        referrerpolicy, set_referrerpolicy: attr "referrerpolicy";
        src, set_src: attr "src";
        r#type, set_type: attr "type";
    };

    /// Build a
    /// [`<small>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/small)
    /// element.
    Small("small", text) {};

    /// Build a
    /// [`<strong>`](https://developer.mozilla.org/en-US/docs/Web/HTML/Element/strong)
    /// element.
    Strong("strong", text) {};
}

/// The `<input>` class under its keyword-free alias.
#[allow(non_camel_case_types)]
pub type input_ = Input;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::global_attributes::GLOBAL_ATTRIBUTES;

    #[test]
    fn every_class_is_registered_once() {
        let names: Vec<_> = registry().iter().map(|info| info.name).collect();
        assert_eq!(names.len(), 20);
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[test]
    fn global_only_classes_have_exactly_the_globals() {
        for tag in ["br", "code", "div", "h1", "h2", "h3", "h4", "h5", "h6", "p", "pre", "small", "strong"] {
            let info = lookup(tag).unwrap();
            assert!(
                info.properties.names().eq(GLOBAL_ATTRIBUTES.iter().map(|d| d.name)),
                "{tag} should only declare the global attributes"
            );
        }
    }

    #[test]
    fn void_classes_take_no_content() {
        let void: Vec<_> = registry()
            .iter()
            .filter(|info| !info.text)
            .map(|info| info.tag)
            .collect();
        assert_eq!(void, ["br", "img", "input"]);
    }

    #[test]
    fn input_alias_renders_input() {
        assert_eq!(<input_ as TagElement>::TAG, "input");
        assert_eq!(<input_ as TagElement>::NAME, "Input");
    }

    #[test]
    fn script_async_is_aliased() {
        let async_ = Script::properties().get("async_").unwrap();
        assert_eq!(async_.backing, "async");
        assert!(Script::properties().get("async").is_none());
    }
}
