//! Basic smoke tests over a small fixture project.

use crate::common::{render, smoke_helpers, smoke_project, transform};
use anyhow::Result;
use serde_json::{Value, json};

#[test]
fn test_supports_includes() -> Result<()> {
    twig_bundle::test_utils::init_test_logging(None);

    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let markup = render(&bundler, "fixtures/mockup.twig", &Value::Null);

    assert!(markup.contains("Nested include"), "{markup}");
    assert!(markup.contains("Relative include"), "{markup}");
    assert!(markup.contains("<strong>Jabba</strong>"), "{markup}");
    assert!(markup.contains("<h1>Default title</h1>"), "{markup}");
    Ok(())
}

#[test]
fn test_supports_variables() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let markup = render(&bundler, "fixtures/mockup.twig", &json!({ "title": "Pickle Fixie" }));

    assert!(markup.contains("<h1>Pickle Fixie</h1>"), "{markup}");
    assert!(markup.contains("<footer>poodles</footer>"), "{markup}");
    Ok(())
}

#[test]
fn test_recovers_from_errors() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let markup = render(&bundler, "fixtures/error.twig", &Value::Null);

    assert!(markup.contains("An error occurred"), "{markup}");
    assert!(markup.contains("fixtures/error.twig"), "{markup}");
    Ok(())
}

#[test]
fn test_recovers_from_include_errors() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "fixtures/error-include.twig");

    assert!(!output.module.is_fallback());
    let broken = output.module.units().iter().find(|u| u.reference == "@tests/error.twig").unwrap();
    assert!(broken.is_absent());

    let markup = bundler.instantiate(&output.module).render(&Value::Null).into_html();
    assert_eq!(markup, "<p>Before</p><p>After</p>");
    Ok(())
}

#[test]
fn test_supports_macros() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let markup = render(&bundler, "fixtures/menu.twig", &Value::Null);

    assert!(markup.contains(r#"<a href="/contact">Contact</a>"#), "{markup}");
    assert!(markup.starts_with("<ul><li>"), "{markup}");
    Ok(())
}

#[test]
fn test_supports_drupal_functions_and_helpers() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler_with_helpers(smoke_helpers())?;
    let output = transform(&bundler, "fixtures/drupal-functions.twig");

    assert_eq!(output.module.helpers(), ["testFunction".to_string()]);
    let markup = bundler.instantiate(&output.module).render(&Value::Null).into_html();
    assert_eq!(markup, r#"<div class="primary-menu" id="edit-field">IT WORKS! Hello Jabba</div>"#);
    Ok(())
}

#[test]
fn test_declared_helper_missing_at_runtime() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler_with_helpers(smoke_helpers())?;
    let output = transform(&bundler, "fixtures/drupal-functions.twig");

    let entry = output.module.instantiate(&twig_bundle::templating::HelperRegistry::new());
    let markup = entry.render(&Value::Null).into_html();
    assert!(markup.starts_with("An error occurred whilst rendering fixtures/drupal-functions.twig"));
    assert!(markup.contains("testFunction"));
    Ok(())
}
