use maud::{html, Markup, PreEscaped, DOCTYPE};

const APP_CSS: &str = r##"
* { box-sizing: border-box; }
body {
  font-family: system-ui, sans-serif;
  margin: 0;
  color: #333;
  background: #faf9f7;
  display: flex;
  flex-direction: column;
  align-items: center;
  min-height: 100vh;
  padding-bottom: 5rem;
}
header.site { text-align: center; padding: 3rem 1rem 1.5rem; }
header.site h1 { color: #f1641e; font-size: 3rem; margin: 0 0 0.5rem; }
header.site p {
  color: #888;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  font-size: 0.9rem;
  margin: 0;
}
main { width: 100%; max-width: 56rem; padding: 0 1rem; }
.dropzone {
  border: 4px dashed #ddd;
  border-radius: 1.5rem;
  padding: 5rem 2rem;
  text-align: center;
  cursor: pointer;
  transition: border-color 0.15s, background 0.15s;
}
.dropzone:hover, .dropzone.dragging { border-color: #f1641e; background: #fff4ee; }
.dropzone p.lead { font-size: 1.25rem; font-weight: 600; color: #555; margin: 0; }
.dropzone p.hint { color: #aaa; margin: 0.5rem 0 0; }
.preview-wrap { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; }
.preview-wrap img {
  max-width: 28rem;
  width: 100%;
  border-radius: 1rem;
  border: 8px solid #fff;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
}
button.primary {
  background: #f1641e;
  color: #fff;
  border: none;
  border-radius: 999px;
  padding: 0.9rem 2.5rem;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
}
button.primary:disabled { opacity: 0.6; cursor: wait; }
button.outline {
  background: none;
  border: 1px solid #ccc;
  border-radius: 999px;
  padding: 0.5rem 1.25rem;
  cursor: pointer;
  color: #555;
}
.error-text { color: #d0342c; font-weight: 500; }
.results-head {
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  border-bottom: 1px solid #eee;
  padding-bottom: 1rem;
  margin-bottom: 1.5rem;
}
.results-head h2 { margin: 0; }
.fields { display: grid; gap: 1.25rem; }
.field-pair { display: grid; grid-template-columns: 1fr 1fr; gap: 1.25rem; }
.copy-field {
  background: #fff;
  border: 1px solid #eee;
  border-radius: 0.75rem;
  overflow: hidden;
}
.copy-field .head {
  display: flex;
  justify-content: space-between;
  align-items: center;
  background: #f7f6f4;
  border-bottom: 1px solid #eee;
  padding: 0.4rem 1rem;
}
.copy-field .head span {
  font-size: 0.7rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: #888;
}
.copy-field .head button {
  font-size: 0.75rem;
  border: none;
  background: none;
  cursor: pointer;
  color: #555;
  padding: 0.25rem 0.5rem;
  border-radius: 0.4rem;
}
.copy-field .head button.copied { background: #e3f6e8; color: #1d7a35; }
.copy-field .content { padding: 1rem; white-space: pre-wrap; }
.sources { background: #fff4ee; border: 1px solid #fde0d0; border-radius: 0.75rem; padding: 1.25rem; }
.sources h3 {
  margin: 0 0 0.75rem;
  font-size: 0.7rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: #c4501a;
}
.sources a {
  display: inline-block;
  background: #fff;
  border: 1px solid #fbd0b9;
  border-radius: 0.5rem;
  padding: 0.4rem 0.7rem;
  margin: 0 0.5rem 0.5rem 0;
  font-size: 0.8rem;
  color: #555;
  text-decoration: none;
}
.hidden { display: none; }
footer.site {
  position: fixed;
  bottom: 0;
  left: 0;
  right: 0;
  background: rgba(255, 255, 255, 0.9);
  border-top: 1px solid #eee;
  padding: 0.75rem;
  text-align: center;
  font-size: 0.7rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
  color: #aaa;
}
"##;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(APP_CSS)) }
            }
            body {
                header class="site" {
                    h1 { "Etsy Mode" }
                    p { "Digital Download Listing Optimizer" }
                }
                (content)
                footer class="site" {
                    p { "AI-powered listing fields from a single image" }
                }
            }
        }
    }
}
