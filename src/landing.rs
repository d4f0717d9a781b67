use tera::{Context, Tera};

const INDEX: &str = include_str!("../templates/index.html");

/// Renders the landing page for `host`. Values are HTML-escaped by tera.
pub fn render(host: &str, site_key: &str) -> tera::Result<String> {
    let initial = host.chars().next().map(String::from).unwrap_or_default();

    let mut context = Context::new();
    context.insert("host", host);
    context.insert("initial", &initial);
    context.insert("site_key", site_key);

    Tera::one_off(INDEX, &context, true)
}
