//! Server-side HTML rendering through `dioxus-ssr`.
//!
//! Output is compact: the renderer inserts no whitespace between nodes, so
//! the HTML of a component is a pure function of the component.

use dioxus::prelude::*;
use wixbuddy_common::config::DocumentOptions;

use crate::root::RootView;

/// Renders a props-less component to an HTML fragment.
#[must_use]
pub fn render_component(component: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(component);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Renders [`RootView`] to an HTML fragment.
#[must_use]
pub fn render_fragment() -> String {
    render_component(RootView)
}

/// Renders [`RootView`] as a complete HTML document.
///
/// The page is mounted inside `<div id="{mount_id}">` in the body, and
/// every configured stylesheet is linked from the head in order. The output
/// ends with a newline.
#[must_use]
pub fn render_document(options: &DocumentOptions) -> String {
    tracing::debug!(
        title = %options.title,
        stylesheets = options.stylesheets.len(),
        "rendering html document"
    );

    let mut dom = VirtualDom::new_with_props(
        DocumentShell,
        DocumentShellProps {
            options: options.clone(),
        },
    );
    dom.rebuild_in_place();
    format!("<!DOCTYPE html>\n{}\n", dioxus_ssr::render(&dom))
}

#[component]
fn DocumentShell(options: DocumentOptions) -> Element {
    let DocumentOptions {
        title,
        lang,
        mount_id,
        stylesheets,
    } = options;

    rsx! {
        html { lang: "{lang}",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
                title { "{title}" }
                for (index, href) in stylesheets.into_iter().enumerate() {
                    link { key: "{index}", rel: "stylesheet", href: "{href}" }
                }
            }
            body {
                div { id: "{mount_id}", RootView {} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[component]
    fn Unsafe() -> Element {
        let text = "<script>alert('x')</script> & more";
        rsx! {
            p { "{text}" }
        }
    }

    #[test]
    fn fragment_starts_with_page_container() {
        let html = render_fragment();
        assert!(html.starts_with("<div class=\"min-h-screen bg-gray-900 text-white\">"));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn fragment_has_no_whitespace_between_tags() {
        assert!(!render_fragment().contains(">\n"));
    }

    #[test]
    fn dynamic_text_is_escaped() {
        let html = render_component(Unsafe);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn document_wraps_page_in_mount_point() {
        let options = DocumentOptions {
            title: "T & C".into(),
            lang: "fr".into(),
            mount_id: "app".into(),
            stylesheets: vec!["/a.css".into(), "/b.css".into()],
        };
        let doc = render_document(&options);

        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
        assert!(doc.contains("T &amp; C</title>"));
        assert!(doc.contains("<div id=\"app\"><div class=\"min-h-screen"));
        let first = doc.find("/a.css").unwrap();
        let second = doc.find("/b.css").unwrap();
        assert!(first < second);
        assert!(doc.ends_with("</html>\n"));
    }

    #[test]
    fn document_without_stylesheets_has_no_link() {
        let doc = render_document(&DocumentOptions::default());
        assert!(!doc.contains("<link"));
        assert!(doc.contains("<title>WixBuddy Frontend</title>"));
        assert!(doc.contains(&format!("<div id=\"root\">{}</div>", render_fragment())));
    }
}
