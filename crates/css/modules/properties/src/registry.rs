//! The global property registry: dense id lookup, case-insensitive name lookup and the
//! physical slot table of every logical property group.

use crate::exposure::{ExposureContext, ParserMode, is_exposed};
use crate::group::{LogicalGroup, LogicalMember, LogicalRole};
use crate::table::DESCRIPTORS;
use crate::{PropertyDescriptor, PropertyId};
use css_writing_modes::{PhysicalAxis, PhysicalCorner, PhysicalSide, WritingDirection};
use log::{debug, trace};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static REGISTRY: Lazy<PropertyRegistry> = Lazy::new(PropertyRegistry::build);

/// Number of physical slots a group can hold.
const SLOT_COUNT: usize = 4;

/// Physical members of one group, indexed by slot.
type SlotTable = [Option<PropertyId>; SLOT_COUNT];

/// Read-only after construction; shared freely across threads.
#[derive(Debug)]
pub struct PropertyRegistry {
    /// Lowercase name to id, internal properties included.
    names: HashMap<&'static str, PropertyId>,
    physical_slots: [SlotTable; LogicalGroup::COUNT],
}

impl PropertyRegistry {
    /// The process-wide registry, built on first use.
    #[inline]
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    /// Descriptor of `id`. Total: every id has exactly one descriptor.
    #[inline]
    pub fn by_id(&self, id: PropertyId) -> &'static PropertyDescriptor {
        &DESCRIPTORS[id.index()]
    }

    /// Case-insensitive lookup of a web-exposable name. Internal properties are never
    /// returned.
    pub fn by_name(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.find(name)
            .filter(|descriptor| !descriptor.is_internal())
    }

    /// Lookup for a parser: internal names are visible in user-agent sheets, and the
    /// exposure gate applies.
    pub fn lookup(
        &self,
        name: &str,
        context: &ExposureContext,
    ) -> Option<&'static PropertyDescriptor> {
        let descriptor = match context.mode {
            ParserMode::UserAgent => self.find(name),
            ParserMode::Author => self.by_name(name),
        }?;
        if is_exposed(descriptor, context) {
            Some(descriptor)
        } else {
            trace!("property {} not exposed in {context:?}", descriptor.name());
            None
        }
    }

    /// Every descriptor in id order. Restartable: clone the iterator to walk again.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &'static PropertyDescriptor> + Clone {
        DESCRIPTORS.iter()
    }

    /// Every member of `group`, logical and physical.
    pub fn group_members(
        &self,
        group: LogicalGroup,
    ) -> impl Iterator<Item = &'static PropertyDescriptor> {
        self.iter()
            .filter(move |descriptor| descriptor.logical_group() == Some(group))
    }

    /// The physical member a group member lands on under `writing_direction`.
    ///
    /// Physical members land on themselves.
    pub fn physical_member(
        &self,
        member: LogicalMember,
        writing_direction: WritingDirection,
    ) -> Option<&'static PropertyDescriptor> {
        self.physical_slots
            .get(member.group.index())
            .and_then(|slots| slots.get(slot_for(member.role, writing_direction)))
            .copied()
            .flatten()
            .map(|id| self.by_id(id))
    }

    fn find(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        let lowered = name.to_ascii_lowercase();
        self.names
            .get(lowered.as_str())
            .map(|id| self.by_id(*id))
    }

    /// Build and validate the registry. Any violated invariant is a programming error in
    /// the property table and panics.
    fn build() -> Self {
        let mut names = HashMap::with_capacity(PropertyId::COUNT);
        let mut physical_slots = [[None; SLOT_COUNT]; LogicalGroup::COUNT];

        for (position, descriptor) in DESCRIPTORS.iter().enumerate() {
            assert_eq!(
                descriptor.id().index(),
                position,
                "property table out of order at {}",
                descriptor.name()
            );
            assert_eq!(
                descriptor.name(),
                descriptor.id().name(),
                "descriptor name mismatch"
            );
            let previous = names.insert(descriptor.name(), descriptor.id());
            assert!(previous.is_none(), "duplicate property {}", descriptor.name());
            check_flags(descriptor);

            if let Some(member) = descriptor.logical_member()
                && let Some(slot) = physical_slot(member.role)
                && let Some(group_slots) = physical_slots.get_mut(member.group.index())
                && let Some(entry) = group_slots.get_mut(slot)
            {
                assert!(
                    entry.is_none(),
                    "two physical members share a slot in {:?}",
                    member.group
                );
                *entry = Some(descriptor.id());
            }
        }

        let registry = Self {
            names,
            physical_slots,
        };
        registry.check_links();
        registry.check_surrogates_resolve();
        debug!(
            "property registry built: {} properties, {} logical groups",
            PropertyId::COUNT,
            LogicalGroup::COUNT
        );
        registry
    }

    fn check_links(&self) {
        for descriptor in self.iter() {
            if let Some(visited) = descriptor.visited_property() {
                let counterpart = self.by_id(visited);
                assert!(counterpart.is_visited(), "{} is not a visited property", counterpart.name());
                assert_eq!(
                    counterpart.unvisited_property(),
                    Some(descriptor.id()),
                    "visited link of {} is not symmetric",
                    descriptor.name()
                );
            }
            if let Some(unvisited) = descriptor.unvisited_property() {
                assert_eq!(
                    self.by_id(unvisited).visited_property(),
                    Some(descriptor.id()),
                    "unvisited link of {} is not symmetric",
                    descriptor.name()
                );
            }
        }
    }

    /// Every surrogate must land on a physical member for every writing direction.
    fn check_surrogates_resolve(&self) {
        for descriptor in self.iter().filter(|descriptor| descriptor.is_surrogate()) {
            let Some(member) = descriptor.logical_member() else {
                continue;
            };
            for writing_direction in WritingDirection::all() {
                let target = self.physical_member(member, writing_direction);
                assert!(
                    target.is_some_and(|physical| !physical.is_surrogate()),
                    "{} has no physical target for {writing_direction:?}",
                    descriptor.name()
                );
            }
        }
    }
}

const fn side_slot(side: PhysicalSide) -> usize {
    match side {
        PhysicalSide::Top => 0,
        PhysicalSide::Right => 1,
        PhysicalSide::Bottom => 2,
        PhysicalSide::Left => 3,
    }
}

const fn axis_slot(axis: PhysicalAxis) -> usize {
    match axis {
        PhysicalAxis::Horizontal => 0,
        PhysicalAxis::Vertical => 1,
    }
}

const fn corner_slot(corner: PhysicalCorner) -> usize {
    match corner {
        PhysicalCorner::TopLeft => 0,
        PhysicalCorner::TopRight => 1,
        PhysicalCorner::BottomRight => 2,
        PhysicalCorner::BottomLeft => 3,
    }
}

/// Slot of a physical role; `None` for logical roles.
const fn physical_slot(role: LogicalRole) -> Option<usize> {
    match role {
        LogicalRole::PhysicalSide(side) => Some(side_slot(side)),
        LogicalRole::PhysicalAxis(axis) => Some(axis_slot(axis)),
        LogicalRole::PhysicalCorner(corner) => Some(corner_slot(corner)),
        LogicalRole::Canonical => Some(0),
        LogicalRole::Side(_) | LogicalRole::Axis(_) | LogicalRole::Corner(_) | LogicalRole::Alias => {
            None
        }
    }
}

/// Slot a role lands in for a writing direction.
const fn slot_for(role: LogicalRole, writing_direction: WritingDirection) -> usize {
    match role {
        LogicalRole::Side(side) => side_slot(writing_direction.physical_side(side)),
        LogicalRole::Axis(axis) => axis_slot(writing_direction.physical_axis(axis)),
        LogicalRole::Corner(corner) => corner_slot(writing_direction.physical_corner(corner)),
        LogicalRole::Alias | LogicalRole::Canonical => 0,
        LogicalRole::PhysicalSide(side) => side_slot(side),
        LogicalRole::PhysicalAxis(axis) => axis_slot(axis),
        LogicalRole::PhysicalCorner(corner) => corner_slot(corner),
    }
}

/// Per-descriptor capability invariants.
fn check_flags(descriptor: &PropertyDescriptor) {
    let name = descriptor.name();
    assert!(
        !(descriptor.is_descriptor_only() && descriptor.is_surrogate()),
        "{name}: descriptor-only and surrogate are exclusive"
    );
    assert!(
        !descriptor.is_surrogate() || descriptor.is_in_logical_property_group(),
        "{name}: surrogate outside a logical property group"
    );
    assert_eq!(
        descriptor.is_in_logical_property_group(),
        descriptor.logical_member().is_some(),
        "{name}: group flag disagrees with group membership"
    );
    if let Some(member) = descriptor.logical_member() {
        assert_eq!(
            member.role.is_logical(),
            descriptor.is_surrogate(),
            "{name}: logical roles are exactly the surrogates"
        );
    }
    assert!(
        !descriptor.is_visited() || descriptor.is_internal(),
        "{name}: visited properties are internal"
    );
    assert!(
        !descriptor.is_interpolable() || !descriptor.is_descriptor_only(),
        "{name}: descriptors cannot interpolate"
    );
    assert!(
        !descriptor.is_animatable() || !descriptor.is_animation_property(),
        "{name}: animation longhands are not animatable"
    );
    assert_eq!(
        descriptor.is_descriptor_only(),
        descriptor.at_rule().is_some(),
        "{name}: descriptor-only entries belong to exactly one at-rule"
    );
}
