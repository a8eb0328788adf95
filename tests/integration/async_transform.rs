//! The Tokio entry point.

use crate::common::{fixtures, smoke_project};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;
use twig_bundle::test_utils::TemplateProjectBuilder;

#[tokio::test]
async fn test_transform_async_matches_sync() -> Result<()> {
    twig_bundle::test_utils::init_test_logging(None);

    let project = smoke_project()?;
    let bundler = Arc::new(project.bundler()?);

    let sync = bundler.transform("fixtures/mockup.twig").unwrap();
    let async_output = Arc::clone(&bundler).transform_async("fixtures/mockup.twig").await.unwrap();

    assert_eq!(sync, async_output);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_transforms_share_nothing() -> Result<()> {
    let project = TemplateProjectBuilder::new()?.with_templates(fixtures::DIAMOND.to_vec()).build()?;
    let bundler = Arc::new(project.bundler()?);
    let expected = bundler.transform("diamond/a.twig").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| tokio::spawn(Arc::clone(&bundler).transform_async("diamond/a.twig")))
        .collect();

    for handle in handles {
        let output = handle.await?.unwrap();
        assert_eq!(output.code, expected.code);
        assert_eq!(bundler.instantiate(&output.module).render(&Value::Null).into_html(), "ABDCD");
    }
    Ok(())
}

#[tokio::test]
async fn test_transform_async_skips_other_files() -> Result<()> {
    let project = smoke_project()?;
    let bundler = Arc::new(project.bundler()?);

    assert!(bundler.transform_async("main.ts").await.is_none());
    Ok(())
}
