//! Template store: the render capability behind the dispatcher.
//!
//! Every file in the template directory is loaded once at startup into a
//! cached minijinja [`Environment`]; the store is read-only afterwards, so it
//! is safe to share across serving coroutines without synchronization.
//! Template names follow the `{template_id}.{format_id}` convention
//! (`hug.html`, `grouphug.text`); substitution itself is entirely minijinja's
//! job.

use crate::error::RenderError;
use minijinja::Environment;
use serde::Serialize;
use std::path::Path;

/// Compose the template resource name for an action template family and a
/// format id.
#[must_use]
pub fn template_name(template_id: &str, format_id: &str) -> String {
    format!("{template_id}.{format_id}")
}

/// Read-only, pre-loaded template environment.
pub struct TemplateStore {
    env: Environment<'static>,
}

impl TemplateStore {
    /// Load every regular file of `dir` as a template, keyed by file name.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            let source = std::fs::read_to_string(entry.path())?;
            env.add_template_owned(name, source)?;
        }
        Ok(Self { env })
    }

    /// Build a store from in-memory sources. Test seam, also useful for
    /// embedding defaults.
    pub fn from_sources<I>(sources: I) -> Result<Self, RenderError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut env = Environment::new();
        for (name, source) in sources {
            env.add_template_owned(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render the named template with the given view data.
    pub fn render<V: Serialize>(&self, name: &str, view: &V) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .get_template(name)
            .map_err(|_| RenderError::MissingTemplate(name.to_string()))?;
        Ok(tmpl.render(view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_name_composition() {
        assert_eq!(template_name("hug", "html"), "hug.html");
        assert_eq!(template_name("grouphug", "text"), "grouphug.text");
    }

    #[test]
    fn test_render_from_sources() {
        let store = TemplateStore::from_sources([(
            "hug.text".to_string(),
            "{{ from }} hugs {{ to }}".to_string(),
        )])
        .unwrap();
        let out = store
            .render("hug.text", &json!({ "to": "Alice", "from": "Bob" }))
            .unwrap();
        assert_eq!(out, "Bob hugs Alice");
    }

    #[test]
    fn test_missing_template() {
        let store = TemplateStore::from_sources(Vec::<(String, String)>::new()).unwrap();
        let err = store.render("nope.html", &json!({})).unwrap_err();
        assert!(matches!(err, RenderError::MissingTemplate(name) if name == "nope.html"));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hug.html"), "<p>{{ to }}</p>").unwrap();
        let store = TemplateStore::load(dir.path()).unwrap();
        let out = store.render("hug.html", &json!({ "to": "Ada" })).unwrap();
        assert_eq!(out, "<p>Ada</p>");
    }
}
