//! Template definitions for generated plugin sources and the rules deciding
//! which of them apply to a given set of answers.

use log::debug;

use crate::answers::RawAnswers;

/// A pair of templates producing one output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDefinition {
    /// Name the definition is registered under in the rendering engine
    pub name: &'static str,
    /// Template rendering the output filename
    pub filename: &'static str,
    /// Template rendering the file contents
    pub contents: &'static str,
}

/// Plugin definition, always generated.
pub const PLUGIN_TEMPLATE: TemplateDefinition = TemplateDefinition {
    name: "plugin.go.j2",
    filename: "plugin.go",
    contents: include_str!("templates/plugin.go.j2"),
};

/// Credential type, generated when a credential name was given.
pub const CREDENTIAL_TEMPLATE: TemplateDefinition = TemplateDefinition {
    name: "credential.go.j2",
    filename: "{{ credential.snake_case }}.go",
    contents: include_str!("templates/credential.go.j2"),
};

/// Executable, generated when an executable name was given.
pub const EXECUTABLE_TEMPLATE: TemplateDefinition = TemplateDefinition {
    name: "executable.go.j2",
    filename: "{{ executable }}.go",
    contents: include_str!("templates/executable.go.j2"),
};

/// Selects the templates to render, in output order.
///
/// The plugin template comes first and is always present. Credential and
/// executable templates follow when their answers are non-empty.
pub fn select_templates(raw: &RawAnswers) -> Vec<TemplateDefinition> {
    let mut templates = vec![PLUGIN_TEMPLATE];
    if !raw.credential_name.is_empty() {
        templates.push(CREDENTIAL_TEMPLATE);
    }
    if !raw.executable.is_empty() {
        templates.push(EXECUTABLE_TEMPLATE);
    }
    debug!("Selected templates: {:?}", templates.iter().map(|t| t.name).collect::<Vec<_>>());
    templates
}
