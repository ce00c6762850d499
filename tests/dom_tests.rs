// Host-side build checks for the DOM helpers.
// web-sys type-checks on any target, so including dom.rs here catches
// signature mistakes the wasm-only crate root would hide from `cargo test`.
// Nothing below calls into the browser.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod pointer {
    include!("../src/pointer.rs");
}
mod dom {
    include!("../src/dom.rs");
}

use web_sys as web;

// Views build their trees by appending freshly created elements inline.
fn append_nested(document: &web::Document, parent: &web::HtmlElement) -> anyhow::Result<()> {
    dom::append(parent, &dom::text_element(document, "span", "label", "x")?)?;
    dom::append(parent, &dom::element(document, "div", "divider")?)?;
    dom::append(parent, dom::element(document, "div", "")?)?;
    Ok(())
}

// Mounting appends a view root into a plain Node.
fn append_into_node(parent: &web::Node, child: &web::HtmlElement) -> anyhow::Result<()> {
    dom::append(parent, child)?;
    dom::append(parent, child.clone())
}

#[test]
fn append_accepts_any_node_like_child() {
    let nested: fn(&web::Document, &web::HtmlElement) -> anyhow::Result<()> = append_nested;
    let into_node: fn(&web::Node, &web::HtmlElement) -> anyhow::Result<()> = append_into_node;
    // Only the signatures matter; the bodies would need a browser.
    let _ = (nested, into_node);
}
