//! Tests for emitted code determinism and reloading

use crate::common::{fixtures, smoke_project, transform};
use anyhow::Result;
use serde_json::json;
use twig_bundle::module::TemplateModule;
use twig_bundle::test_utils::TemplateProjectBuilder;

/// Emitting twice from unchanged input must give byte-identical code.
#[test]
fn test_repeated_runs_are_byte_identical() -> Result<()> {
    let project = TemplateProjectBuilder::new()?
        .with_templates(fixtures::DIAMOND.to_vec())
        .with_templates(fixtures::LAYOUT.to_vec())
        .with_global("b", 2)
        .with_global("a", 1)
        .build()?;

    for id in ["diamond/a.twig", "layout/page.twig"] {
        let first = transform(&project.bundler()?, id);
        for _ in 0..4 {
            let again = transform(&project.bundler()?, id);
            assert_eq!(first.code, again.code, "{id} changed between runs");
            assert_eq!(first.dependencies, again.dependencies);
        }
    }
    Ok(())
}

#[test]
fn test_fallback_code_is_deterministic() -> Result<()> {
    let project = smoke_project()?;
    let first = transform(&project.bundler()?, "fixtures/error.twig");
    let second = transform(&project.bundler()?, "fixtures/error.twig");

    assert!(first.module.is_fallback());
    assert_eq!(first.code, second.code);
    Ok(())
}

#[test]
fn test_reloaded_module_renders_identically() -> Result<()> {
    let project = smoke_project()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "fixtures/mockup.twig");

    let reloaded = TemplateModule::from_code(&output.code)?;
    assert_eq!(reloaded, output.module);

    let context = json!({ "title": "Reloaded" });
    assert_eq!(
        bundler.instantiate(&reloaded).render(&context),
        bundler.instantiate(&output.module).render(&context)
    );
    Ok(())
}

#[test]
fn test_cache_flag_does_not_change_output() -> Result<()> {
    let project = smoke_project()?;
    let uncached = transform(&project.bundler()?, "fixtures/mockup.twig");

    let mut config = project.config().clone();
    config.cache = true;
    let bundler = twig_bundle::bundler::Bundler::new(config)?;
    let first = transform(&bundler, "fixtures/mockup.twig");
    let cached_files = bundler.engine().cached_len();
    let second = transform(&bundler, "fixtures/mockup.twig");

    assert!(cached_files > 0);
    assert_eq!(bundler.engine().cached_len(), cached_files);
    assert_eq!(first.code, uncached.code);
    assert_eq!(second.code, uncached.code);
    Ok(())
}
