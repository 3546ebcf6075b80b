//! Answer model for plugin generation.
//! Holds the raw facts collected from the user and derives every secondary
//! identifier the templates need from them.

use std::path::{Component, Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::composition::{analyze, is_uppercase_letter, ValueComposition};
use crate::error::{Error, Result};

/// User-supplied facts describing a new plugin.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawAnswers {
    /// Machine-style plugin name, e.g. `aws` or `github`
    pub name: String,
    /// Human readable platform name, e.g. `AWS` or `GitHub`
    pub platform_name: String,
    /// Executable name, e.g. `aws` or `gh`
    pub executable: String,
    /// Credential type name, e.g. `Access Key` or `Personal Access Token`
    pub credential_name: String,
    /// Example credential value used to infer its composition
    pub example_credential: String,
}

/// Identifiers derived from the credential type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialIdentifiers {
    /// Credential name as entered, e.g. `Access Token`
    pub name: String,
    /// e.g. `AccessToken`
    pub upper_camel_case: String,
    /// e.g. `access_token`
    pub snake_case: String,
    /// e.g. `ACME_ACCESS_TOKEN`
    pub env_var_name: String,
    /// Best-effort guess at the secret field name, e.g. `Token`.
    /// Generated code flags it for review.
    pub field_name: String,
}

/// Raw answers plus every derived field.
///
/// Optional features are `None` when the corresponding answer was left
/// empty, so templates never reference an identifier that was not computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAnswers {
    pub name: String,
    pub platform_name: String,
    /// Platform name with spaces removed, e.g. `Digital Ocean` -> `DigitalOcean`
    pub platform_name_upper_camel_case: String,
    pub executable: Option<String>,
    pub credential: Option<CredentialIdentifiers>,
    /// Present only when an example credential was supplied
    pub composition: Option<ValueComposition>,
}

/// Fails when a required answer is empty.
pub fn validate_required(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

/// Fails unless the plugin name is a single directory name.
///
/// The name becomes the output directory below the plugins directory, so
/// separators, `..` and absolute paths are rejected.
pub fn validate_plugin_name(value: &str) -> Result<()> {
    validate_required("plugin name", value)?;
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !value.contains(['/', '\\']) => Ok(()),
        _ => Err(Error::ValidationError(format!(
            "plugin name must be a plain directory name, got '{value}'"
        ))),
    }
}

/// Fails when a non-empty credential name contains no uppercase letter.
pub fn validate_credential_name(value: &str) -> Result<()> {
    if value.is_empty() || value.chars().any(is_uppercase_letter) {
        return Ok(());
    }
    Err(Error::ValidationError(
        r#"credential name must be titlecased, e.g. "Access Key" or "Personal Access Token""#
            .to_string(),
    ))
}

impl RawAnswers {
    /// Applies the per-field constraints enforced while prompting.
    pub fn validate(&self) -> Result<()> {
        validate_plugin_name(&self.name)?;
        validate_required("platform name", &self.platform_name)?;
        validate_credential_name(&self.credential_name)
    }
}

/// Removes every space from the platform name.
pub fn platform_identifier(platform_name: &str) -> String {
    platform_name.replace(' ', "")
}

/// Splits a credential name into its words.
pub fn credential_tokens(credential_name: &str) -> Vec<&str> {
    credential_name.split_whitespace().collect()
}

/// Builds the environment variable name, e.g. `acme` + `access_token` -> `ACME_ACCESS_TOKEN`.
pub fn env_var_name(plugin_name: &str, snake_case: &str) -> String {
    format!("{plugin_name}_{snake_case}").to_uppercase()
}

/// Derives every secondary field from the raw answers.
///
/// Resolution is pure: identical raw answers always resolve to identical output.
pub fn resolve(raw: &RawAnswers) -> ResolvedAnswers {
    let composition = if raw.example_credential.is_empty() {
        None
    } else {
        Some(analyze(&raw.example_credential))
    };

    let platform_name_upper_camel_case = platform_identifier(&raw.platform_name);

    let tokens = credential_tokens(&raw.credential_name);
    let credential = tokens.last().map(|last| {
        let snake_case = tokens.join("_").to_lowercase();
        CredentialIdentifiers {
            name: raw.credential_name.clone(),
            upper_camel_case: tokens.concat(),
            env_var_name: env_var_name(&raw.name, &snake_case),
            snake_case,
            // Placeholder: assume the field is the last word, e.g. "Token".
            field_name: last.to_string(),
        }
    });

    let resolved = ResolvedAnswers {
        name: raw.name.clone(),
        platform_name: raw.platform_name.clone(),
        platform_name_upper_camel_case,
        executable: Some(raw.executable.clone()).filter(|e| !e.is_empty()),
        credential,
        composition,
    };
    debug!("Resolved answers: {:?}", resolved);
    resolved
}
