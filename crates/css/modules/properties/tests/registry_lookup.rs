#![cfg(test)]

use css_properties::{
    AtRule, ExposureContext, PropertyDescriptor, PropertyId, PropertyRegistry, RuleContext,
    RuntimeFeatures, is_exposed,
};

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

/// # Panics
/// Panics if `by_id` and `by_name` disagree for any web-exposed property.
#[test]
fn lookup_is_consistent() {
    init_logging();
    let registry = PropertyRegistry::global();
    for descriptor in registry.iter() {
        let found = registry.by_name(descriptor.name()).map(PropertyDescriptor::id);
        if descriptor.is_internal() {
            assert_eq!(found, None, "{} leaked by name", descriptor.name());
        } else {
            assert_eq!(found, Some(descriptor.id()), "{}", descriptor.name());
            assert_eq!(registry.by_id(descriptor.id()).name(), descriptor.name());
        }
    }
}

/// # Panics
/// Panics if name lookup is case-sensitive or accepts unknown names.
#[test]
fn names_are_case_insensitive() {
    let registry = PropertyRegistry::global();
    assert_eq!(
        registry.by_name("Inset-Block-START").map(PropertyDescriptor::id),
        Some(PropertyId::InsetBlockStart)
    );
    assert!(registry.by_name("not-a-property").is_none());
    assert!(registry.by_name("").is_none());
}

/// # Panics
/// Panics if internal properties are exposed by name or hidden by id.
#[test]
fn internal_properties_only_by_id() {
    let registry = PropertyRegistry::global();
    let visited = registry.by_id(PropertyId::InternalVisitedColor);
    assert!(visited.is_internal());
    assert!(visited.is_visited());
    assert!(registry.by_name("-internal-visited-color").is_none());
    assert!(!is_exposed(visited, &ExposureContext::default()));
    assert!(is_exposed(
        visited,
        &ExposureContext::user_agent(RuntimeFeatures::empty())
    ));
}

/// # Panics
/// Panics if iteration is not finite, ordered and restartable.
#[test]
fn iteration_is_restartable() {
    let registry = PropertyRegistry::global();
    let first_pass = registry.iter();
    let second_pass = first_pass.clone();
    let ids: Vec<PropertyId> = first_pass.map(PropertyDescriptor::id).collect();
    assert_eq!(ids.as_slice(), PropertyId::ALL);
    assert_eq!(second_pass.count(), PropertyId::COUNT);
}

/// # Panics
/// Panics if a flag invariant is violated anywhere in the table.
#[test]
fn capability_invariants_hold() {
    for descriptor in PropertyRegistry::global().iter() {
        assert!(!(descriptor.is_descriptor_only() && descriptor.is_surrogate()));
        if descriptor.is_surrogate() {
            assert!(descriptor.is_in_logical_property_group());
        }
        if descriptor.is_descriptor_only() {
            assert!(!descriptor.is_computable());
            assert!(!descriptor.is_valid_in(RuleContext::Style));
        }
    }
}

/// # Panics
/// Panics if runtime feature gating does not follow the enabled set.
#[test]
fn gated_properties_follow_features() {
    let registry = PropertyRegistry::global();
    let disabled = ExposureContext::author(RuntimeFeatures::empty());
    let enabled = ExposureContext::author(RuntimeFeatures::ANCHOR_POSITIONING);
    assert!(registry.lookup("anchor-name", &disabled).is_none());
    assert_eq!(
        registry.lookup("anchor-name", &enabled).map(PropertyDescriptor::id),
        Some(PropertyId::AnchorName)
    );
    assert!(registry.lookup("view-transition-name", &enabled).is_none());
    // Gating affects exposure only, never id or name lookup.
    assert!(registry.by_name("anchor-name").is_some());
}

/// # Panics
/// Panics if rule-context validity disagrees with the flags.
#[test]
fn rule_contexts() {
    let registry = PropertyRegistry::global();
    let color = registry.by_id(PropertyId::Color);
    assert!(color.is_valid_in(RuleContext::FirstLine));
    assert!(color.is_valid_in(RuleContext::Highlight));
    let width = registry.by_id(PropertyId::Width);
    assert!(width.is_valid_in(RuleContext::PositionTry));
    assert!(!width.is_valid_in(RuleContext::FirstLine));
    let duration = registry.by_id(PropertyId::TransitionDuration);
    assert!(!duration.is_valid_in(RuleContext::Keyframe));
    let font_display = registry.by_id(PropertyId::FontDisplay);
    assert!(font_display.is_valid_in(RuleContext::AtRule(AtRule::FontFace)));
    assert!(!font_display.is_valid_in(RuleContext::AtRule(AtRule::Page)));
    let margin = registry.by_id(PropertyId::MarginTop);
    assert!(margin.is_valid_in(RuleContext::AtRule(AtRule::Page)));
}

/// # Panics
/// Panics if the `all` shorthand reaches the wrong properties.
#[test]
fn affected_by_all() {
    let registry = PropertyRegistry::global();
    assert!(registry.by_id(PropertyId::Color).is_affected_by_all());
    assert!(!registry.by_id(PropertyId::Direction).is_affected_by_all());
    assert!(!registry.by_id(PropertyId::InsetBlockStart).is_affected_by_all());
    assert!(!registry.by_id(PropertyId::InternalVisitedColor).is_affected_by_all());
    assert!(!registry.by_id(PropertyId::Size).is_affected_by_all());
}

/// # Panics
/// Panics if list separators are missing from repeated properties.
#[test]
fn list_separators() {
    let registry = PropertyRegistry::global();
    assert_eq!(registry.by_id(PropertyId::FontFamily).list_separator(), Some(','));
    assert_eq!(registry.by_id(PropertyId::Size).list_separator(), Some(' '));
    assert_eq!(registry.by_id(PropertyId::Width).list_separator(), None);
}

/// # Panics
/// Panics if feature names are not recognized.
#[test]
fn feature_names() {
    assert_eq!(
        RuntimeFeatures::from_feature_name(" Anchor-Positioning "),
        Some(RuntimeFeatures::ANCHOR_POSITIONING)
    );
    assert_eq!(RuntimeFeatures::from_feature_name("teleportation"), None);
}

/// # Panics
/// Panics if font and idempotence flags are attached to the wrong properties.
#[test]
fn font_and_idempotent_flags() {
    let registry = PropertyRegistry::global();
    assert!(registry.by_id(PropertyId::FontSize).affects_font());
    assert!(registry.by_id(PropertyId::FontFamily).affects_font());
    assert!(!registry.by_id(PropertyId::LineHeight).affects_font());
    assert!(registry.by_id(PropertyId::Opacity).is_idempotent());
    assert!(!registry.by_id(PropertyId::Display).is_idempotent());
}
