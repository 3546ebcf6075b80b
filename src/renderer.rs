//! Template renderer for generated plugin sources.
//! Expands a template definition against resolved answers using MiniJinja.
use std::path::{Component, Path, PathBuf};

use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

use crate::answers::ResolvedAnswers;
use crate::error::{Error, Result};
use crate::template::TemplateDefinition;

/// A rendered output file, relative to the plugin directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given answers.
    ///
    /// # Arguments
    /// * `name` - Name used to identify the template in error messages
    /// * `template` - Template string to render
    /// * `answers` - Fully resolved answers
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render_str(&self, name: &str, template: &str, answers: &ResolvedAnswers) -> Result<String>;

    /// Renders both halves of a template definition.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the rendered filename is not a plain relative path
    /// * `Error::MinijinjaError` if either template fails to parse or render
    fn render(&self, def: &TemplateDefinition, answers: &ResolvedAnswers) -> Result<RenderedFile> {
        let filename = self.render_str(def.name, def.filename, answers)?;
        if !is_rendered_path_valid(&filename) {
            return Err(Error::TemplateError(format!(
                "'{}' rendered an invalid filename: '{filename}'",
                def.name
            )));
        }
        debug!("Rendering {} into {}", def.name, filename);

        let content = self.render_str(&filename, def.contents, answers)?;
        Ok(RenderedFile { path: PathBuf::from(filename), content: content.into_bytes() })
    }
}

/// Checks that a rendered filename is a non-empty relative path that stays
/// inside the output directory.
pub fn is_rendered_path_valid(path: &str) -> bool {
    if path.is_empty() || path.split('/').any(str::is_empty) {
        return false;
    }
    Path::new(path).components().all(|c| matches!(c, Component::Normal(_)))
}

/// Escapes a value for use inside a Go double-quoted string literal.
fn gostr(value: String) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("gostr", gostr);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render_str(&self, name: &str, template: &str, answers: &ResolvedAnswers) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())?;

        let tmpl = env.get_template(name)?;

        Ok(tmpl.render(answers)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{resolve, RawAnswers};
    use crate::template::{CREDENTIAL_TEMPLATE, EXECUTABLE_TEMPLATE, PLUGIN_TEMPLATE};

    fn answers(example_credential: &str) -> ResolvedAnswers {
        resolve(&RawAnswers {
            name: "acme".to_string(),
            platform_name: "Acme Cloud".to_string(),
            executable: "acme".to_string(),
            credential_name: "Access Token".to_string(),
            example_credential: example_credential.to_string(),
        })
    }

    fn render(def: &TemplateDefinition, answers: &ResolvedAnswers) -> (PathBuf, String) {
        let file = MiniJinjaRenderer::new().render(def, answers).unwrap();
        (file.path, String::from_utf8(file.content).unwrap())
    }

    #[test]
    fn test_plugin_references_selected_features() {
        let (path, content) = render(&PLUGIN_TEMPLATE, &answers(""));
        assert_eq!(path, PathBuf::from("plugin.go"));
        assert!(content.starts_with("package acme\n"));
        assert!(content.contains("Name:     \"Acme Cloud\","));
        assert!(content.contains("\t\t\tAccessToken(),\n"));
        assert!(content.contains("\t\t\tExecutable_acme(),\n"));
        assert!(content.ends_with("}\n"));
    }

    #[test]
    fn test_plugin_without_optional_features() {
        let resolved = resolve(&RawAnswers {
            name: "acme".to_string(),
            platform_name: "Acme".to_string(),
            ..RawAnswers::default()
        });
        let (_, content) = render(&PLUGIN_TEMPLATE, &resolved);
        assert!(!content.contains("Credentials"));
        assert!(!content.contains("Executables"));
        assert!(content.contains("// TODO: Check if this is correct\n\t\t},\n\t}\n}\n"));
    }

    #[test]
    fn test_credential_filename_and_identifiers() {
        let (path, content) = render(&CREDENTIAL_TEMPLATE, &answers(""));
        assert_eq!(path, PathBuf::from("access_token.go"));
        assert!(content.contains("func AccessToken() schema.CredentialType {"));
        assert!(content.contains("fieldname.Token: \"ACME_ACCESS_TOKEN\","));
        assert!(content.contains("func TryAcmeCloudConfigFile() sdk.Importer {"));
        assert!(!content.contains("Composition"));
    }

    #[test]
    fn test_composition_block() {
        let (_, content) = render(&CREDENTIAL_TEMPLATE, &answers("ghp_1234567890abcdef1234"));
        assert!(content.contains("Length: 24,"));
        assert!(content.contains("Prefix: \"ghp_\","));
        assert!(content.contains("Lowercase: true,"));
        assert!(content.contains("Digits:    true,"));
        assert!(!content.contains("Uppercase: true"));
        assert!(!content.contains("Symbols"));
    }

    #[test]
    fn test_composition_without_prefix() {
        let (_, content) = render(&CREDENTIAL_TEMPLATE, &answers("ABCDEFGHIJ"));
        assert!(content.contains("Length: 10,"));
        assert!(!content.contains("Prefix"));
        assert!(content.contains("Uppercase: true,"));
        assert!(!content.contains("Lowercase: true"));
    }

    #[test]
    fn test_executable_template() {
        let (path, content) = render(&EXECUTABLE_TEMPLATE, &answers(""));
        assert_eq!(path, PathBuf::from("acme.go"));
        assert!(content.contains("func Executable_acme() schema.Executable {"));
        assert!(content.contains("Runs:      []string{\"acme\"},"));
        assert!(content.contains("\t\t\tAccessToken(),\n"));
    }

    #[test]
    fn test_string_literals_are_escaped() {
        let resolved = resolve(&RawAnswers {
            name: "acme".to_string(),
            platform_name: "Acme \"Cloud\"".to_string(),
            ..RawAnswers::default()
        });
        let (_, content) = render(&PLUGIN_TEMPLATE, &resolved);
        assert!(content.contains(r#"Name:     "Acme \"Cloud\"","#));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let resolved = answers("ghp_1234567890abcdef1234");
        let renderer = MiniJinjaRenderer::new();
        assert_eq!(
            renderer.render(&CREDENTIAL_TEMPLATE, &resolved).unwrap(),
            renderer.render(&CREDENTIAL_TEMPLATE, &resolved).unwrap()
        );
    }

    #[test]
    fn test_unresolved_reference_fails() {
        let resolved = resolve(&RawAnswers {
            name: "acme".to_string(),
            platform_name: "Acme".to_string(),
            ..RawAnswers::default()
        });
        // No credential name, so the credential identifiers were never computed.
        let result = MiniJinjaRenderer::new().render(&CREDENTIAL_TEMPLATE, &resolved);
        assert!(matches!(result, Err(Error::MinijinjaError(_))));

        let result = MiniJinjaRenderer::new().render_str("t", "{{ missing }}", &resolved);
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn test_malformed_template_fails() {
        let def = TemplateDefinition {
            name: "broken",
            filename: "broken.go",
            contents: "{% if name %}",
        };
        let result = MiniJinjaRenderer::new().render(&def, &answers(""));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }

    #[test]
    fn test_invalid_filename_fails() {
        let def = TemplateDefinition { name: "escape", filename: "../{{ name }}.go", contents: "" };
        let result = MiniJinjaRenderer::new().render(&def, &answers(""));
        assert!(matches!(result, Err(Error::TemplateError(_))));
    }

    #[test]
    fn test_is_rendered_path_valid() {
        assert!(!is_rendered_path_valid(""));
        assert!(!is_rendered_path_valid("output//filename.go"));
        assert!(!is_rendered_path_valid("/filename.go"));
        assert!(!is_rendered_path_valid("../filename.go"));
        assert!(!is_rendered_path_valid("./filename.go"));
        assert!(is_rendered_path_valid("filename.go"));
        assert!(is_rendered_path_valid("nested/filename.go"));
    }
}
