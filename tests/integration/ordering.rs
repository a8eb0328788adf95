//! Dependency-first ordering, diamonds and cycles.

use crate::common::{RecordingEngine, fixtures, render, transform, unit_offset};
use anyhow::Result;
use serde_json::{Value, json};
use twig_bundle::bundler::Bundler;
use twig_bundle::test_utils::TemplateProjectBuilder;

#[test]
fn test_diamond_compiles_shared_dependency_once() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::DIAMOND.to_vec()).build()?;
    let bundler = Bundler::with_engine(project.config().clone(), RecordingEngine::new())?;

    let output = bundler.transform("diamond/a.twig").unwrap();

    assert_eq!(bundler.engine().count("d.twig"), 1);
    assert_eq!(bundler.engine().calls(), vec!["diamond/a.twig", "b.twig", "d.twig", "c.twig"]);
    assert_eq!(output.module.units().len(), 3);
    assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "ABDCD");
    Ok(())
}

#[test]
fn test_every_dependency_defined_before_use() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::DIAMOND.to_vec()).build()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "diamond/a.twig");

    let edges = [("b.twig", "d.twig"), ("c.twig", "d.twig")];
    for (dependent, dependency) in edges {
        assert!(
            unit_offset(&output.code, dependency) < unit_offset(&output.code, dependent),
            "{dependency} must precede {dependent}"
        );
    }

    let root_offset = output.code.find("\"root\":").unwrap();
    for reference in ["b.twig", "c.twig", "d.twig"] {
        assert!(unit_offset(&output.code, reference) < root_offset);
    }
    Ok(())
}

#[test]
fn test_extends_chain_ordering() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::LAYOUT.to_vec()).build()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "layout/page.twig");

    let order: Vec<&str> = output.module.units().iter().map(|u| u.reference.as_str()).collect();
    assert_eq!(order, vec!["footer.twig", "base.twig", "card.twig"]);

    let markup = render(&bundler, "layout/page.twig", &json!({ "title": "Card" }));
    assert_eq!(markup, "<html><body><main><article>Card</article></main><footer>fin</footer></body></html>");
    Ok(())
}

#[test]
fn test_cycle_terminates() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::CYCLE.to_vec()).build()?;
    let bundler = Bundler::with_engine(project.config().clone(), RecordingEngine::new())?;

    let output = bundler.transform("cycle/root.twig").unwrap();

    assert_eq!(bundler.engine().count("ping.twig"), 1);
    assert_eq!(bundler.engine().count("pong.twig"), 1);
    let order: Vec<&str> = output.module.units().iter().map(|u| u.reference.as_str()).collect();
    assert_eq!(order, vec!["pong.twig", "ping.twig"]);

    let markup = bundler.instantiate(&output.module).render(&Value::Null).into_html();
    assert_eq!(markup, "ping ");
    Ok(())
}

#[test]
fn test_dependencies_reported_in_discovery_order() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::DIAMOND.to_vec()).build()?;
    let bundler = project.bundler()?;
    let output = transform(&bundler, "diamond/a.twig");

    assert_eq!(
        output.dependencies,
        vec![project.path("diamond/b.twig"), project.path("diamond/d.twig"), project.path("diamond/c.twig")]
    );
    Ok(())
}
