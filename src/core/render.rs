use crate::domain::model::RenderVariables;
use crate::utils::error::Result;
use handlebars::Handlebars;
use serde_json::json;

/// Compile `source` as a Handlebars template and evaluate it with `random2`
/// and `random3` bound under exactly those names.
///
/// There is deliberately no compiled-template cache: the source comes from a
/// live URL and can change between calls, so every render starts from the
/// freshly fetched text. Compile errors and render-time errors both surface
/// as `RelayError::RenderError`.
pub fn render_template(source: &str, variables: &RenderVariables) -> Result<String> {
    let handlebars = Handlebars::new();
    let context = json!({
        "random2": variables.random2,
        "random3": variables.random3,
    });

    let html = handlebars.render_template(source, &context)?;
    Ok(html)
}
