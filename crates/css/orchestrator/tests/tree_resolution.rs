#![cfg(test)]

use anyhow::Result;
use css_orchestrator::{
    CascadeInput, DeclarationBlock, ElementTree, NodeKey, StyleConfig, StyleEngine, StyleMap,
    ValuePhase, computed_value, parse_features,
};
use css_properties::{ExposureContext, PropertyId, RuntimeFeatures};

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

fn author() -> ExposureContext {
    ExposureContext::author(RuntimeFeatures::empty())
}

fn input(text: &str) -> CascadeInput {
    CascadeInput::new(DeclarationBlock::parse(text, &author()))
}

fn engine(threads: usize) -> Result<StyleEngine> {
    StyleEngine::new(StyleConfig::new(
        Some(threads),
        RuntimeFeatures::empty(),
        16.0,
        None,
    ))
}

/// A small document: root, two children in different writing modes, grandchildren.
fn sample_tree() -> ElementTree {
    let mut tree = ElementTree::new();
    // Children listed before parents on purpose.
    tree.push(
        NodeKey(4),
        Some(NodeKey(2)),
        input("margin-inline-start: 1em; padding-block-end: 2px"),
    );
    tree.push(
        NodeKey(1),
        None,
        input("font-size: 20px; color: navy; direction: rtl"),
    );
    tree.push(
        NodeKey(2),
        Some(NodeKey(1)),
        input("writing-mode: vertical-rl; font-size: 150%"),
    );
    tree.push(NodeKey(3), Some(NodeKey(1)), input("inset-inline-end: 5px"));
    tree.push(NodeKey(5), Some(NodeKey(3)), input("font-weight: bolder"));
    tree
}

fn value(styles: &StyleMap, key: u64, name: &str) -> Option<String> {
    styles
        .get(&NodeKey(key))
        .and_then(|style| computed_value(style, name, None, false, ValuePhase::Computed))
}

/// # Errors
/// Returns an error if the engine cannot be built or the tree does not resolve.
///
/// # Panics
/// Panics if inherited values or logical mappings are wrong.
#[test]
fn resolves_inheritance_and_logical_properties() -> Result<()> {
    init_logging();
    let styles = engine(4)?.resolve_tree(&sample_tree())?;
    assert_eq!(styles.len(), 5);

    // Inherited from the root.
    assert_eq!(value(&styles, 4, "color").as_deref(), Some("rgb(0, 0, 128)"));
    assert_eq!(value(&styles, 4, "direction").as_deref(), Some("rtl"));
    assert_eq!(value(&styles, 4, "writing-mode").as_deref(), Some("vertical-rl"));

    // 150% of 20px, then 1em of that on a vertical-rl rtl element lands at the bottom.
    assert_eq!(value(&styles, 2, "font-size").as_deref(), Some("30px"));
    assert_eq!(value(&styles, 4, "margin-bottom").as_deref(), Some("30px"));
    assert_eq!(value(&styles, 4, "margin-inline-start").as_deref(), Some("30px"));
    assert_eq!(value(&styles, 4, "padding-left").as_deref(), Some("2px"));

    // Horizontal rtl: inline-end is the left edge.
    assert_eq!(value(&styles, 3, "left").as_deref(), Some("5px"));
    assert_eq!(value(&styles, 3, "right").as_deref(), Some("auto"));

    // Non-inherited properties start over.
    assert_eq!(value(&styles, 5, "left").as_deref(), Some("auto"));
    assert_eq!(value(&styles, 5, "font-weight").as_deref(), Some("700"));
    Ok(())
}

/// # Errors
/// Returns an error if either engine fails.
///
/// # Panics
/// Panics if parallel and serial resolution disagree.
#[test]
fn parallel_matches_serial() -> Result<()> {
    init_logging();
    let tree = sample_tree();
    let parallel = engine(4)?.resolve_tree(&tree)?;
    let serial = engine(1)?.resolve_tree_serial(&tree)?;
    assert_eq!(parallel, serial);
    Ok(())
}

/// # Errors
/// Returns an error if the engine fails.
///
/// # Panics
/// Panics if `:visited` declarations leak into unvisited values or non-links.
#[test]
fn visited_declarations_apply_to_links_only() -> Result<()> {
    init_logging();
    let visited =
        DeclarationBlock::parse("color: purple; border-inline-start-color: lime", &author());
    let mut link = input("color: blue; border-left-style: solid");
    link.visited_declarations = visited.clone();
    link.is_link = true;
    let mut plain = input("color: blue");
    plain.visited_declarations = visited;

    let mut tree = ElementTree::new();
    tree.push(NodeKey(1), None, link);
    tree.push(NodeKey(2), None, plain);
    let styles = engine(2)?.resolve_tree(&tree)?;

    let read = |key: u64, name: &str, visited: bool| {
        styles
            .get(&NodeKey(key))
            .and_then(|style| computed_value(style, name, None, visited, ValuePhase::Computed))
    };
    assert_eq!(read(1, "color", false).as_deref(), Some("rgb(0, 0, 255)"));
    assert_eq!(read(1, "color", true).as_deref(), Some("rgb(128, 0, 128)"));
    assert_eq!(
        read(1, "border-left-color", true).as_deref(),
        Some("rgb(0, 255, 0)")
    );
    assert_eq!(read(1, "border-left-color", false).as_deref(), Some("currentcolor"));
    // Visited rules never reach a non-link; both reads follow its regular color.
    assert_eq!(read(2, "color", true).as_deref(), Some("rgb(0, 0, 255)"));
    Ok(())
}

/// # Errors
/// Returns an error if the engine fails.
///
/// # Panics
/// Panics if `rem` ignores the root element's computed font size.
#[test]
fn rem_follows_root_font_size() -> Result<()> {
    init_logging();
    let mut tree = ElementTree::new();
    tree.push(NodeKey(1), None, input("font-size: 20px; padding-top: 1rem"));
    tree.push(NodeKey(2), Some(NodeKey(1)), input("margin-top: 1rem; font-size: 2rem"));
    tree.push(NodeKey(3), Some(NodeKey(2)), input("margin-left: 1.5rem"));
    tree.push(NodeKey(4), None, input("margin-top: 1rem"));

    for styles in [
        engine(4)?.resolve_tree(&tree)?,
        engine(1)?.resolve_tree_serial(&tree)?,
    ] {
        // The root's own rem and font-size see the configured 16px.
        assert_eq!(value(&styles, 1, "padding-top").as_deref(), Some("16px"));
        assert_eq!(value(&styles, 2, "margin-top").as_deref(), Some("20px"));
        assert_eq!(value(&styles, 2, "font-size").as_deref(), Some("40px"));
        assert_eq!(value(&styles, 3, "margin-left").as_deref(), Some("30px"));
        // A separate root keeps its own base.
        assert_eq!(value(&styles, 4, "margin-top").as_deref(), Some("16px"));
    }
    Ok(())
}

/// # Errors
/// Returns an error if the engine fails.
///
/// # Panics
/// Panics if visited and unvisited reads differ on a link with no `:visited` rules.
#[test]
fn visited_reads_match_without_visited_rules() -> Result<()> {
    init_logging();
    let mut link = input("color: currentcolor");
    link.is_link = true;
    let mut tree = ElementTree::new();
    tree.push(NodeKey(1), None, input("color: red"));
    tree.push(NodeKey(2), Some(NodeKey(1)), link);
    let styles = engine(2)?.resolve_tree(&tree)?;

    let read = |name: &str, visited: bool| {
        styles
            .get(&NodeKey(2))
            .and_then(|style| computed_value(style, name, None, visited, ValuePhase::Resolved))
    };
    for name in ["color", "border-top-color"] {
        assert_eq!(read(name, false).as_deref(), Some("rgb(255, 0, 0)"));
        assert_eq!(read(name, true), read(name, false));
    }
    Ok(())
}

/// # Panics
/// Panics if gated and internal properties are exposed to the wrong parsers.
#[test]
fn exposure_follows_config_and_parser_mode() {
    init_logging();
    let text = "anchor-name: --tip; -internal-visited-color: red";
    let plain = DeclarationBlock::parse(text, &author());
    assert!(plain.is_empty());

    let config = StyleConfig::new(None, parse_features("anchor-positioning"), 16.0, None);
    let gated = DeclarationBlock::parse(text, &config.exposure());
    assert!(gated.get(PropertyId::AnchorName).is_some());
    assert!(gated.get(PropertyId::InternalVisitedColor).is_none());

    let user_agent = DeclarationBlock::parse(text, &ExposureContext::user_agent(config.features));
    assert_eq!(user_agent.len(), 2);
}
