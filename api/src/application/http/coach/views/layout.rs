use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0 auto; max-width: 1200px; padding: 1.5rem; color: #1f2933; }
h1 { font-size: 1.8rem; }
section { margin: 2rem 0; }
hr { border: none; border-top: 1px solid #d9e2ec; margin: 2rem 0; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.field { display: flex; flex-direction: column; margin-bottom: 0.8rem; }
.field label { font-weight: 600; margin-bottom: 0.3rem; }
.field input, .field select, .field textarea { padding: 0.4rem; font-size: 1rem; }
.field textarea { min-height: 5rem; }
button { padding: 0.6rem 1.2rem; font-size: 1rem; cursor: pointer; }
button:disabled { cursor: progress; opacity: 0.6; }
.pending { display: none; font-style: italic; }
.pending.active { display: block; }
.info { background: #e6f0ff; padding: 0.8rem; border-radius: 4px; }
.error { background: #ffe3e3; color: #8a1c1c; padding: 0.8rem; border-radius: 4px; }
.metric { font-size: 2rem; font-weight: 700; }
details { border: 1px solid #d9e2ec; border-radius: 4px; margin: 0.4rem 0; padding: 0.4rem 0.8rem; }
details summary { cursor: pointer; font-weight: 600; }
.details-body { white-space: pre-wrap; }
.caption { color: #627d98; font-size: 0.9rem; }
.tabs { display: flex; flex-wrap: wrap; }
.tabs > input { display: none; }
.tabs > label { order: 0; padding: 0.5rem 1rem; cursor: pointer; border-bottom: 2px solid transparent; }
.tabs > .tab-panel { order: 1; width: 100%; display: none; padding: 1rem 0; }
.tabs > input:checked + label { border-bottom-color: #e12d39; font-weight: 600; }
.tabs > input:checked + label + .tab-panel { display: block; }
"#;

const SUBMIT_SCRIPT: &str = r#"
document.addEventListener('submit', function (event) {
    var form = event.target;
    var button = form.querySelector('button[type=submit]');
    if (button) { button.disabled = true; }
    var pending = document.getElementById('pending');
    if (pending) { pending.classList.add('active'); }
});
"#;

/// Base layout, wide page with inline styles
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLES)) }
            }
            body {
                (content)
                script { (PreEscaped(SUBMIT_SCRIPT)) }
            }
        }
    }
}
