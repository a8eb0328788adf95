//! Reference resolution through the whole pipeline.

use crate::common::{render, transform};
use anyhow::Result;
use serde_json::Value;
use twig_bundle::test_utils::TemplateProjectBuilder;

#[test]
fn test_component_reference_conventional_location() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("pages/home.twig", r#"{% include "ui:button" %}"#)
        .with_template("components/button/button.twig", "<button>conventional</button>")
        .with_template("components/deep/button.twig", "<button>deep</button>")
        .with_namespace("ui", "components")
        .build()?;
    let bundler = project.bundler()?;

    let output = transform(&bundler, "pages/home.twig");
    assert_eq!(output.dependencies, vec![project.path("components/button/button.twig")]);
    assert_eq!(
        bundler.instantiate(&output.module).render(&Value::Null).into_html(),
        "<button>conventional</button>"
    );
    Ok(())
}

#[test]
fn test_component_reference_recursive_search() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("pages/home.twig", r#"{% include "ui:button" %}"#)
        .with_template("components/deep/button.twig", "<button>deep</button>")
        .with_namespace("ui", "components")
        .build()?;
    let bundler = project.bundler()?;

    let output = transform(&bundler, "pages/home.twig");
    assert_eq!(output.dependencies, vec![project.path("components/deep/button.twig")]);
    assert_eq!(render(&bundler, "pages/home.twig", &Value::Null), "<button>deep</button>");
    Ok(())
}

#[test]
fn test_namespace_spellings() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template(
            "pages/home.twig",
            r#"{% include "@ui/card.twig" %}|{% include "ui::badge.twig" %}|{% include "@ui/banner" %}"#,
        )
        .with_template("components/card.twig", "card")
        .with_template("components/badge.twig", "badge")
        .with_template("components/banner.html.twig", "banner")
        .with_namespace("ui", "components")
        .build()?;
    let bundler = project.bundler()?;

    let output = transform(&bundler, "pages/home.twig");
    assert_eq!(
        output.dependencies,
        vec![
            project.path("components/card.twig"),
            project.path("components/badge.twig"),
            project.path("components/banner.html.twig"),
        ]
    );
    assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "card|badge|banner");
    Ok(())
}

#[test]
fn test_root_relative_before_directory_relative() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("pages/home.twig", r#"{% include "shared/card.twig" %}"#)
        .with_template("shared/card.twig", "root-relative")
        .with_template("pages/shared/card.twig", "directory-relative")
        .build()?;
    let bundler = project.bundler()?;

    assert_eq!(render(&bundler, "pages/home.twig", &Value::Null), "root-relative");
    Ok(())
}

#[test]
fn test_absolute_root_id() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("pages/home.twig", r#"{% include "part.twig" %}"#)
        .with_template("pages/part.twig", "part")
        .build()?;
    let bundler = project.bundler()?;

    let id = project.path("pages/home.twig").display().to_string();
    let output = transform(&bundler, &id);

    assert_eq!(output.module.id, id);
    assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "part");
    Ok(())
}

#[test]
fn test_two_spellings_compile_twice() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("pages/home.twig", r#"{% include "@ui/card.twig" %}{% include "ui::card.twig" %}"#)
        .with_template("components/card.twig", "C")
        .with_namespace("ui", "components")
        .build()?;
    let bundler = project.bundler()?;

    let output = transform(&bundler, "pages/home.twig");
    assert_eq!(output.module.units().len(), 2);
    assert_eq!(output.dependencies, vec![project.path("components/card.twig")]);
    assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "CC");
    Ok(())
}

#[test]
fn test_same_reference_from_two_directories_compiles_first_only() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_template("page.twig", r#"{% include "a/x.twig" %}{% include "b/x.twig" %}"#)
        .with_template("a/x.twig", r#"A:{% include "card.twig" %}"#)
        .with_template("b/x.twig", r#"B:{% include "card.twig" %}"#)
        .with_template("a/card.twig", "acard")
        .with_template("b/card.twig", "bcard")
        .build()?;
    let bundler = project.bundler()?;

    let output = transform(&bundler, "page.twig");
    let references: Vec<&str> = output.module.units().iter().map(|u| u.reference.as_str()).collect();
    assert_eq!(references, vec!["card.twig", "a/x.twig", "b/x.twig"]);
    assert_eq!(output.module.units()[0].path, project.path("a/card.twig"));
    assert_eq!(
        output.dependencies,
        vec![project.path("a/x.twig"), project.path("a/card.twig"), project.path("b/x.twig")]
    );
    assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "A:acardB:acard");
    Ok(())
}
