use maud::{html, Markup};

/// One result field with its copy-to-clipboard control. The content div
/// starts empty; the page script fills it from the analyze response using
/// the `data-field` key.
pub fn copy_field(label: &str, field: &str) -> Markup {
    html! {
        div class="copy-field" data-field=(field) {
            div class="head" {
                span { (label) }
                button type="button" class="copy-btn" { "Copy" }
            }
            div class="content" {}
        }
    }
}
