//! Render context handling: globals, `attributes` and `defaultAttributes`.

use crate::common::transform;
use anyhow::Result;
use serde_json::{Value, json};
use twig_bundle::bundler::Bundler;
use twig_bundle::test_utils::{TemplateProject, TemplateProjectBuilder};

fn card_project() -> Result<TemplateProject> {
    TemplateProjectBuilder::new()?
        .with_template("card.twig", "<div{{ attributes }}>{{ label | default(value=active_theme) }}</div>")
        .with_global("active_theme", "poodles")
        .build()
}

fn render_card(bundler: &Bundler, context: Value) -> String {
    let output = transform(bundler, "card.twig");
    bundler.instantiate(&output.module).render(&context).into_html()
}

#[test]
fn test_default_attributes_mapping_and_pairs_match() -> Result<()> {
    let project = card_project()?;
    let bundler = project.bundler()?;

    let from_map = render_card(&bundler, json!({ "defaultAttributes": { "class": ["x"] } }));
    let from_pairs = render_card(&bundler, json!({ "defaultAttributes": [["class", ["x"]]] }));

    assert_eq!(from_map, from_pairs);
    assert_eq!(from_map, r#"<div class="x">poodles</div>"#);
    Ok(())
}

#[test]
fn test_default_attributes_values() -> Result<()> {
    let project = card_project()?;
    let bundler = project.bundler()?;

    let markup = render_card(
        &bundler,
        json!({ "defaultAttributes": [
            ["class", ["card", "card--wide"]],
            ["hidden", true],
            ["draggable", false],
            ["title", "Tom & \"Jerry\""]
        ] }),
    );

    assert_eq!(markup, r#"<div class="card card--wide" hidden title="Tom &amp; &quot;Jerry&quot;">poodles</div>"#);
    Ok(())
}

#[test]
fn test_caller_overrides_global_context() -> Result<()> {
    let project = card_project()?;
    let bundler = project.bundler()?;

    assert_eq!(render_card(&bundler, json!({ "active_theme": "olivero" })), "<div>olivero</div>");
    assert_eq!(render_card(&bundler, json!({ "label": "Hi" })), "<div>Hi</div>");
    Ok(())
}

#[test]
fn test_globals_travel_with_module_code() -> Result<()> {
    let project = card_project()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "card.twig");

    let reloaded = twig_bundle::module::TemplateModule::from_code(&output.code)?;
    let markup = reloaded.instantiate(bundler.helpers()).render(&Value::Null).into_html();
    assert_eq!(markup, "<div>poodles</div>");
    Ok(())
}

#[test]
fn test_create_attribute_in_template() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("link.twig", r#"<a{{ create_attribute(attributes=link_attributes) }}>x</a>"#)
        .build()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "link.twig");

    let markup = bundler
        .instantiate(&output.module)
        .render(&json!({ "link_attributes": { "href": "#top", "rel": ["nofollow", "noopener"] } }))
        .into_html();
    assert_eq!(markup, r##"<a href="#top" rel="nofollow noopener">x</a>"##);
    Ok(())
}
