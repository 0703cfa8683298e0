//! MiniJinja-based renderer.

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use tracing::instrument;

use platform_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::RenderContext,
    error::PlatformResult,
};

/// Single-pass Jinja renderer.
///
/// Undefined variables are errors rather than empty strings. No loader is
/// installed, so `include`, `import` and `extends` cannot reach other
/// templates: each body is rendered on its own.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip(self, body, context))]
    fn render(&self, name: &str, body: &str, context: &RenderContext) -> PlatformResult<String> {
        self.env
            .render_str(body, context)
            .map_err(|e| map_error(name, e))
    }
}

fn map_error(template: &str, e: minijinja::Error) -> platform_core::error::PlatformError {
    let template = template.to_string();
    let reason = match e.detail() {
        Some(detail) => format!("{} (line {})", detail, e.line().unwrap_or(0)),
        None => e.to_string(),
    };

    match e.kind() {
        ErrorKind::SyntaxError => ApplicationError::TemplateSyntax { template, reason },
        ErrorKind::UndefinedError => ApplicationError::MissingField { template, reason },
        _ => ApplicationError::RenderFailure { template, reason },
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_core::{domain::ScaffoldConfig, error::PlatformError};

    fn context() -> RenderContext {
        RenderContext::from_config(
            &ScaffoldConfig::new("acme")
                .with_workflow_type("node")
                .with_docker(true),
        )
        .unwrap()
    }

    fn render(body: &str) -> PlatformResult<String> {
        MiniJinjaRenderer::new().render("test.tmpl", body, &context())
    }

    #[test]
    fn substitutes_context_fields() {
        // Booleans print Python-style; templates branch on them instead.
        assert_eq!(
            render("{{ project_name }}/{{ workflow_type }}/{{ with_docker }}\n").unwrap(),
            "acme/typescript/True\n"
        );
    }

    #[test]
    fn substituted_values_are_not_rendered_again() {
        let ctx = RenderContext {
            project_name: "{{ workflow_type }}".into(),
            ..context()
        };
        let out = MiniJinjaRenderer::new()
            .render("t", "{{ project_name }}", &ctx)
            .unwrap();
        assert_eq!(out, "{{ workflow_type }}");
    }

    #[test]
    fn conditionals_see_toggles() {
        assert_eq!(
            render("{% if with_flux %}flux{% else %}no flux{% endif %}").unwrap(),
            "no flux"
        );
    }

    #[test]
    fn bad_syntax_is_a_syntax_error() {
        let err = render("{{ project_name ").unwrap_err();
        assert!(matches!(
            err,
            PlatformError::Application(ApplicationError::TemplateSyntax { ref template, .. })
                if template == "test.tmpl"
        ));
    }

    #[test]
    fn unknown_field_is_missing_field() {
        let err = render("{{ registry }}").unwrap_err();
        assert!(matches!(
            err,
            PlatformError::Application(ApplicationError::MissingField { .. })
        ));
    }

    #[test]
    fn include_has_no_loader() {
        let err = render("{% include 'other.tmpl' %}").unwrap_err();
        assert!(matches!(
            err,
            PlatformError::Application(ApplicationError::RenderFailure { .. })
        ));
    }
}
