use pretty_assertions::assert_eq;
use tagweave_html::memory::{MemoryDocument, MemoryElement};
use tagweave_html::prelude::*;
use tagweave_html::{
    AttributeValue, ElementBase, Error, GLOBAL_ATTRIBUTES, NativeElement, PropertyKind,
    PropertyTable, registry,
};

fn memory(element: &impl HtmlElement) -> &MemoryElement {
    MemoryElement::downcast(element.node()).unwrap()
}

#[test]
fn declared_properties_are_globals_plus_specifics() {
    for info in registry() {
        let names: Vec<_> = info.properties.names().collect();
        for global in GLOBAL_ATTRIBUTES {
            assert!(
                names.contains(&global.name),
                "{} is missing global `{}`",
                info.name,
                global.name
            );
        }
        for descriptor in info.properties.iter() {
            if descriptor.name == "async_" {
                assert_eq!(descriptor.backing, "async");
            } else {
                assert_eq!(descriptor.name, descriptor.backing);
            }
        }
    }
}

#[test]
fn specific_attributes_per_tag() {
    let specific = |tag: &str| -> Vec<&'static str> {
        let info = tagweave_html::lookup(tag).unwrap();
        info.properties
            .names()
            .filter(|name| !GLOBAL_ATTRIBUTES.iter().any(|global| global.name == *name))
            .collect()
    };

    assert_eq!(
        specific("a"),
        ["download", "href", "referrerpolicy", "rel", "target", "type"]
    );
    assert_eq!(specific("style"), ["blocking", "media"]);
    assert_eq!(
        specific("script"),
        [
            "async_",
            "blocking",
            "crossorigin",
            "defer",
            "fetchpriority",
            "integrity",
            "nomodule",
            "referrerpolicy",
            "src",
            "type"
        ]
    );
    assert_eq!(specific("input").len(), 32);
    assert!(specific("p").is_empty());
}

#[test]
fn div_with_id_and_style() {
    let document = MemoryDocument::new();
    let div = Div::new(
        &document,
        (),
        Props::new().with("id", "x").style("color", "red"),
    )
    .unwrap();

    assert_eq!(div.tag(), "div");
    assert_eq!(div.node().tag_name(), "div");
    assert_eq!(div.id().as_deref(), Some("x"));
    assert_eq!(div.style().get("color").as_deref(), Some("red"));
    assert_eq!(memory(&div).outer_html(), r#"<div id="x" style="color: red;"></div>"#);
}

#[test]
fn style_is_applied_in_order() {
    let document = MemoryDocument::new();
    let div = Div::new(
        &document,
        (),
        Props::new()
            .style("margin", "0")
            .style("color", "blue")
            .style("margin", "4px"),
    )
    .unwrap();

    assert_eq!(div.style().get("margin").as_deref(), Some("4px"));
    assert_eq!(
        memory(&div).outer_html(),
        r#"<div style="margin: 4px; color: blue;"></div>"#
    );
}

#[test]
fn unrecognized_options_are_ignored() {
    let document = MemoryDocument::new();
    let div = Div::new(&document, (), Props::new().with("unrecognized", "value")).unwrap();

    assert_eq!(div.base().get("unrecognized"), None);
    assert!(memory(&div).attributes().is_empty());
    assert_eq!(
        div.base().set("unrecognized", "value"),
        Err(Error::UnknownProperty {
            tag: "div",
            name: "unrecognized".to_string()
        })
    );
}

#[test]
fn string_property_round_trips() {
    let document = MemoryDocument::new();
    let img = Img::new(&document, Props::new().with("alt", "a cat")).unwrap();
    assert_eq!(img.alt().as_deref(), Some("a cat"));

    img.set_src("/cat.png").unwrap();
    assert_eq!(img.src().as_deref(), Some("/cat.png"));
    assert_eq!(
        img.base().get("src"),
        Some(AttributeValue::Text("/cat.png".to_string()))
    );

    img.set_width(AttributeValue::None).unwrap();
    assert_eq!(img.width(), None);
}

#[test]
fn checked_round_trips_as_a_live_property() {
    let document = MemoryDocument::new();
    let input = Input::new(
        &document,
        Props::new().with("type", "checkbox").with("checked", true),
    )
    .unwrap();

    assert!(input.checked());
    assert_eq!(input.base().get("checked"), Some(AttributeValue::Bool(true)));
    assert_eq!(memory(&input).get_attribute("checked"), None);

    input.set_checked(false).unwrap();
    assert!(!input.checked());
    assert_eq!(input.r#type().as_deref(), Some("checkbox"));
}

#[test]
fn value_is_live_on_inputs() {
    let document = MemoryDocument::new();
    let input = Input::new(&document, Props::new().with("value", 42)).unwrap();
    assert_eq!(input.value().as_deref(), Some("42"));
    assert_eq!(memory(&input).outer_html(), "<input>");
}

#[test]
fn flags_toggle_the_attribute() {
    let document = MemoryDocument::new();
    let button = Button::new(&document, "Save", Props::new().with("disabled", true)).unwrap();
    assert!(button.disabled());
    assert_eq!(
        memory(&button).outer_html(),
        "<button disabled>Save</button>"
    );

    button.set_disabled(false).unwrap();
    assert!(!button.disabled());
    assert_eq!(memory(&button).outer_html(), "<button>Save</button>");
}

#[test]
fn script_async_alias_writes_async() {
    let document = MemoryDocument::new();
    let script = Script::new(
        &document,
        (),
        Props::new().with("async_", true).with("src", "/app.js"),
    )
    .unwrap();

    assert!(script.async_());
    assert_eq!(memory(&script).get_attribute("async").as_deref(), Some(""));
    assert_eq!(memory(&script).get_attribute("async_"), None);
    assert_eq!(
        memory(&script).outer_html(),
        r#"<script async src="/app.js"></script>"#
    );
}

#[test]
fn input_alias_is_the_same_class() {
    let document = MemoryDocument::new();
    let input = tagweave_html::input_::new(&document, Props::new()).unwrap();
    assert_eq!(input.tag(), "input");
}

#[test]
fn class_name_goes_through_the_class_attribute() {
    let document = MemoryDocument::new();
    let p = P::new(&document, "hi", Props::new().with("className", "lead")).unwrap();
    assert_eq!(p.class_name().as_deref(), Some("lead"));
    assert_eq!(memory(&p).outer_html(), r#"<p class="lead">hi</p>"#);
}

#[test]
fn specific_declarations_shadow_globals() {
    let document = MemoryDocument::new();
    let link = Link::new(&document, (), Props::new().with("title", "Print")).unwrap();
    assert_eq!(link.title().as_deref(), Some("Print"));
    assert_eq!(
        Link::properties().get("title").map(|d| d.kind),
        Some(PropertyKind::Attribute)
    );
}

#[test]
fn values_are_stringified_without_validation() {
    let document = MemoryDocument::new();
    let div = Div::new(&document, (), Props::new().with("tabindex", 2).with("lang", false)).unwrap();
    assert_eq!(div.tabindex().as_deref(), Some("2"));
    assert_eq!(div.lang().as_deref(), Some("false"));
}

#[test]
fn host_creation_failures_propagate() {
    static TABLE: std::sync::LazyLock<PropertyTable> =
        std::sync::LazyLock::new(|| PropertyTable::register(&[]));

    let document = MemoryDocument::new();
    let error = ElementBase::new(&document, "not a tag", &TABLE, &Props::new()).unwrap_err();
    assert!(matches!(error, Error::CreateElement { ref tag, .. } if tag == "not a tag"));
}

#[test]
fn usage_note_mentions_the_properties() {
    let usage = Img::properties().usage();
    assert!(usage.contains("src"));
    assert!(usage.contains("className"));
}
