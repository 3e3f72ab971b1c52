use leptos::prelude::*;

use crate::util::markdown::render_markdown_html;

/// Render compiled-in Markdown. Raw HTML in the source is dropped.
#[component]
pub fn Markdown(source: &'static str, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = if class.is_empty() { "markdown".to_owned() } else { format!("markdown {class}") };
    view! { <div class=class inner_html=render_markdown_html(source)></div> }
}
