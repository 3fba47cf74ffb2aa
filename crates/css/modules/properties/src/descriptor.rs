//! Immutable per-property metadata and the `const` builder used by the property table.

use crate::flags::CapabilityFlags;
use crate::group::{LogicalGroup, LogicalMember, LogicalRole, MappingLogic};
use crate::{PropertyId, RuntimeFeatures};
use css_values_units::{InitialValue, ValueGrammar};

/// Cascade application order. Lower values are applied first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ApplyPriority {
    /// `direction` and `writing-mode`: needed to resolve logical properties.
    High,
    /// Font properties: needed to resolve font-relative lengths.
    Font,
    Normal,
}

/// At-rules that own descriptors.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AtRule {
    FontFace,
    Page,
}

/// Where a declaration appears.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RuleContext {
    Style,
    Keyframe,
    FirstLetter,
    FirstLine,
    Highlight,
    PositionTry,
    PermissionElement,
    AtRule(AtRule),
}

/// Metadata of one property or descriptor. Built once, never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDescriptor {
    id: PropertyId,
    name: &'static str,
    flags: CapabilityFlags,
    grammar: ValueGrammar,
    initial: InitialValue,
    list_separator: Option<char>,
    logical: Option<LogicalMember>,
    visited: Option<PropertyId>,
    unvisited: Option<PropertyId>,
    feature: Option<RuntimeFeatures>,
    priority: ApplyPriority,
    at_rule: Option<AtRule>,
}

impl PropertyDescriptor {
    #[inline]
    pub const fn id(&self) -> PropertyId {
        self.id
    }

    /// Canonical lowercase name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn grammar(&self) -> ValueGrammar {
        self.grammar
    }

    #[inline]
    pub const fn initial_value(&self) -> InitialValue {
        self.initial
    }

    /// Separator of repeated values, e.g. `,` for `font-family`.
    #[inline]
    pub const fn list_separator(&self) -> Option<char> {
        self.list_separator
    }

    #[inline]
    pub const fn logical_member(&self) -> Option<LogicalMember> {
        self.logical
    }

    #[inline]
    pub fn logical_group(&self) -> Option<LogicalGroup> {
        self.logical.map(|member| member.group)
    }

    /// The `:visited` counterpart, if this property has one.
    #[inline]
    pub const fn visited_property(&self) -> Option<PropertyId> {
        self.visited
    }

    /// The regular counterpart of a visited property.
    #[inline]
    pub const fn unvisited_property(&self) -> Option<PropertyId> {
        self.unvisited
    }

    #[inline]
    pub const fn runtime_feature(&self) -> Option<RuntimeFeatures> {
        self.feature
    }

    #[inline]
    pub const fn priority(&self) -> ApplyPriority {
        self.priority
    }

    #[inline]
    pub const fn at_rule(&self) -> Option<AtRule> {
        self.at_rule
    }

    #[inline]
    pub const fn is_inherited(&self) -> bool {
        self.flags.contains(CapabilityFlags::INHERITED)
    }

    #[inline]
    pub const fn is_interpolable(&self) -> bool {
        self.flags.contains(CapabilityFlags::INTERPOLABLE)
    }

    #[inline]
    pub const fn is_animatable(&self) -> bool {
        self.flags.contains(CapabilityFlags::ANIMATABLE)
    }

    #[inline]
    pub const fn is_idempotent(&self) -> bool {
        self.flags.contains(CapabilityFlags::IDEMPOTENT)
    }

    #[inline]
    pub const fn is_internal(&self) -> bool {
        self.flags.contains(CapabilityFlags::INTERNAL)
    }

    #[inline]
    pub const fn is_visited(&self) -> bool {
        self.flags.contains(CapabilityFlags::VISITED)
    }

    #[inline]
    pub const fn is_surrogate(&self) -> bool {
        self.flags.contains(CapabilityFlags::SURROGATE)
    }

    #[inline]
    pub const fn is_in_logical_property_group(&self) -> bool {
        self.flags.contains(CapabilityFlags::IN_LOGICAL_PROPERTY_GROUP)
    }

    #[inline]
    pub const fn is_descriptor_only(&self) -> bool {
        self.flags.contains(CapabilityFlags::DESCRIPTOR_ONLY)
    }

    #[inline]
    pub const fn is_animation_property(&self) -> bool {
        self.flags.contains(CapabilityFlags::ANIMATION)
    }

    #[inline]
    pub const fn affects_font(&self) -> bool {
        self.flags.contains(CapabilityFlags::AFFECTS_FONT)
    }

    #[inline]
    pub const fn is_layout_dependent(&self) -> bool {
        self.flags.contains(CapabilityFlags::LAYOUT_DEPENDENT)
    }

    #[inline]
    pub const fn is_valid_for_keyframe(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_KEYFRAME)
    }

    #[inline]
    pub const fn is_valid_for_first_letter(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_FIRST_LETTER)
    }

    #[inline]
    pub const fn is_valid_for_first_line(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_FIRST_LINE)
    }

    #[inline]
    pub const fn is_valid_for_highlight(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_HIGHLIGHT)
    }

    #[inline]
    pub const fn is_valid_for_page_context(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_PAGE_CONTEXT)
    }

    #[inline]
    pub const fn is_valid_for_position_try(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_POSITION_TRY)
    }

    #[inline]
    pub const fn is_valid_for_permission_element(&self) -> bool {
        self.flags.contains(CapabilityFlags::VALID_FOR_PERMISSION_ELEMENT)
    }

    /// Whether a value can be reconstructed for `getComputedStyle`.
    #[inline]
    pub const fn is_computable(&self) -> bool {
        !self.is_internal() && !self.is_descriptor_only()
    }

    /// Whether the `all` shorthand sets this property.
    ///
    /// Covers web-exposed style longhands except `direction`; logical surrogates are
    /// reached through their physical targets.
    pub fn is_affected_by_all(&self) -> bool {
        !self.is_internal()
            && !self.is_descriptor_only()
            && !self.is_surrogate()
            && self.id != PropertyId::Direction
    }

    /// Whether a declaration of this property is accepted in `context`.
    pub fn is_valid_in(&self, context: RuleContext) -> bool {
        if let RuleContext::AtRule(rule) = context {
            return self.at_rule == Some(rule)
                || (rule == AtRule::Page && self.is_valid_for_page_context());
        }
        if self.is_descriptor_only() {
            return false;
        }
        match context {
            RuleContext::Style | RuleContext::AtRule(_) => true,
            RuleContext::Keyframe => self.is_valid_for_keyframe(),
            RuleContext::FirstLetter => self.is_valid_for_first_letter(),
            RuleContext::FirstLine => self.is_valid_for_first_line(),
            RuleContext::Highlight => self.is_valid_for_highlight(),
            RuleContext::PositionTry => self.is_valid_for_position_try(),
            RuleContext::PermissionElement => self.is_valid_for_permission_element(),
        }
    }
}

/// `const` builder for table entries. The table macro supplies id and name.
#[derive(Copy, Clone, Debug)]
pub struct PropertyDef {
    flags: CapabilityFlags,
    grammar: ValueGrammar,
    initial: InitialValue,
    list_separator: Option<char>,
    logical: Option<LogicalMember>,
    visited: Option<PropertyId>,
    unvisited: Option<PropertyId>,
    feature: Option<RuntimeFeatures>,
    priority: ApplyPriority,
    at_rule: Option<AtRule>,
}

impl PropertyDef {
    /// A style longhand.
    pub const fn longhand(grammar: ValueGrammar, initial: InitialValue) -> Self {
        Self {
            flags: CapabilityFlags::empty(),
            grammar,
            initial,
            list_separator: None,
            logical: None,
            visited: None,
            unvisited: None,
            feature: None,
            priority: ApplyPriority::Normal,
            at_rule: None,
        }
    }

    /// A descriptor that only exists inside `at_rule`.
    pub const fn descriptor(
        at_rule: AtRule,
        grammar: ValueGrammar,
        initial: InitialValue,
    ) -> Self {
        let mut def = Self::longhand(grammar, initial);
        def.flags = CapabilityFlags::DESCRIPTOR_ONLY;
        def.at_rule = Some(at_rule);
        def
    }

    pub const fn with(mut self, flags: CapabilityFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    pub const fn separated_by(mut self, separator: char) -> Self {
        self.list_separator = Some(separator);
        self
    }

    /// A physical (or canonical) member of a logical group.
    pub const fn member(
        mut self,
        group: LogicalGroup,
        role: LogicalRole,
        logic: MappingLogic,
    ) -> Self {
        self.logical = Some(LogicalMember { group, role, logic });
        self.flags = self
            .flags
            .union(CapabilityFlags::IN_LOGICAL_PROPERTY_GROUP);
        self
    }

    /// A logical member, resolved to a physical one before application.
    pub const fn surrogate(
        self,
        group: LogicalGroup,
        role: LogicalRole,
        logic: MappingLogic,
    ) -> Self {
        self.member(group, role, logic)
            .with(CapabilityFlags::SURROGATE)
    }

    pub const fn visited(mut self, visited: PropertyId) -> Self {
        self.visited = Some(visited);
        self
    }

    pub const fn unvisited(mut self, unvisited: PropertyId) -> Self {
        self.unvisited = Some(unvisited);
        self
    }

    pub const fn gated(mut self, feature: RuntimeFeatures) -> Self {
        self.feature = Some(feature);
        self
    }

    pub const fn priority(mut self, priority: ApplyPriority) -> Self {
        self.priority = priority;
        self
    }

    pub const fn build(self, id: PropertyId, name: &'static str) -> PropertyDescriptor {
        PropertyDescriptor {
            id,
            name,
            flags: self.flags,
            grammar: self.grammar,
            initial: self.initial,
            list_separator: self.list_separator,
            logical: self.logical,
            visited: self.visited,
            unvisited: self.unvisited,
            feature: self.feature,
            priority: self.priority,
            at_rule: self.at_rule,
        }
    }
}
