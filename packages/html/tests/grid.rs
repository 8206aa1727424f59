use pretty_assertions::assert_eq;
use tagweave_html::memory::{MemoryDocument, MemoryElement};
use tagweave_html::prelude::*;

fn memory(element: &impl HtmlElement) -> &MemoryElement {
    MemoryElement::downcast(element.node()).unwrap()
}

#[test]
fn grid_with_gap() {
    let document = MemoryDocument::new();
    let grid = Grid::new(&document, "1fr 1fr", (), Some("10px"), Props::new()).unwrap();

    assert_eq!(grid.tag(), "div");
    assert_eq!(grid.style().get("display").as_deref(), Some("grid"));
    assert_eq!(
        grid.style().get("grid-template-columns").as_deref(),
        Some("1fr 1fr")
    );
    assert_eq!(grid.style().get("gap").as_deref(), Some("10px"));
}

#[test]
fn grid_without_gap_leaves_it_unset() {
    let document = MemoryDocument::new();
    let grid = Grid::new(&document, "repeat(3, 1fr)", (), None, Props::new()).unwrap();
    assert_eq!(grid.style().get("gap"), None);
    assert_eq!(
        memory(&grid).outer_html(),
        r#"<div style="display: grid; grid-template-columns: repeat(3, 1fr);"></div>"#
    );
}

#[test]
fn grid_takes_div_properties_and_content() {
    let document = MemoryDocument::new();
    let left = Div::new(&document, "left", Props::new()).unwrap();
    let right = Div::new(&document, "right", Props::new()).unwrap();
    let grid = Grid::new(
        &document,
        "200px auto",
        vec![left, right],
        None,
        Props::new().with("id", "layout").style("padding", "1em"),
    )
    .unwrap();

    assert_eq!(grid.id().as_deref(), Some("layout"));
    assert_eq!(
        memory(&grid).outer_html(),
        r#"<div id="layout" style="padding: 1em; display: grid; grid-template-columns: 200px auto;"><div>left</div><div>right</div></div>"#
    );
}

#[test]
fn grids_nest() {
    let document = MemoryDocument::new();
    let inner = Grid::new(&document, "1fr", "cell", None, Props::new()).unwrap();
    let outer = Grid::new(&document, "1fr 1fr", &inner, Some("2px"), Props::new()).unwrap();
    assert_eq!(memory(&outer).children(), [memory(&inner).clone()]);
}
