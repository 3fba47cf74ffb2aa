//! The property table. Order here is `PropertyId` order and registry iteration order.

use crate::descriptor::{ApplyPriority, AtRule, PropertyDef, PropertyDescriptor};
use crate::exposure::RuntimeFeatures;
use crate::flags::CapabilityFlags;
use crate::group::{LogicalGroup as Group, LogicalRole as Role, MappingLogic as Logic};
use css_values_units::{Color, InitialValue as Initial, ValueAtom as Atom, ValueGrammar};
use css_writing_modes::{
    LogicalAxis, LogicalCorner, LogicalSide, PhysicalAxis, PhysicalCorner, PhysicalSide,
};

// Union of named flags in a `const` context.
macro_rules! flags {
    ($($flag:ident),* $(,)?) => {
        CapabilityFlags::empty()$(.union(CapabilityFlags::$flag))*
    };
}

// Generates `PropertyId` and the descriptor table from one list.
macro_rules! properties {
    ($($variant:ident = $name:literal => $definition:expr;)*) => {
        /// Dense identifier of every known property and descriptor.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u16)]
        pub enum PropertyId {
            $($variant,)*
        }

        impl PropertyId {
            /// Every id, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];
            pub const COUNT: usize = Self::ALL.len();

            /// Dense index into the descriptor table.
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Canonical property name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        pub static DESCRIPTORS: [PropertyDescriptor; PropertyId::COUNT] = [
            $($definition.build(PropertyId::$variant, $name),)*
        ];
    };
}

const DIRECTION: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&["ltr", "rtl"])]);
const WRITING_MODE: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "horizontal-tb",
    "vertical-rl",
    "vertical-lr",
    "sideways-rl",
    "sideways-lr",
])]);
const FONT_SIZE: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&[
        "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
        "larger", "smaller",
    ]),
    Atom::Length,
    Atom::Percentage,
]);
const FONT_FAMILY: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&[
        "serif",
        "sans-serif",
        "monospace",
        "cursive",
        "fantasy",
        "system-ui",
    ]),
    Atom::CustomIdent,
    Atom::String,
]);
const FONT_WEIGHT: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["normal", "bold", "bolder", "lighter"]),
    Atom::Number,
]);
const COLOR: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&["currentcolor"]), Atom::Color]);
const LINE_HEIGHT: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["normal"]),
    Atom::Number,
    Atom::Length,
    Atom::Percentage,
]);
const DISPLAY: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "inline",
    "block",
    "inline-block",
    "flow-root",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "list-item",
    "contents",
    "none",
])]);
const POSITION: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "static", "relative", "absolute", "fixed", "sticky",
])]);
const Z_INDEX: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&["auto"]), Atom::Integer]);
const OPACITY: ValueGrammar = ValueGrammar::new(&[Atom::Number, Atom::Percentage]);
const LENGTH_PERCENTAGE_OR_AUTO: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["auto"]),
    Atom::Length,
    Atom::Percentage,
]);
const LENGTH_PERCENTAGE: ValueGrammar = ValueGrammar::new(&[Atom::Length, Atom::Percentage]);
const BORDER_WIDTH: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["thin", "medium", "thick"]),
    Atom::Length,
]);
const BORDER_STYLE: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset",
    "outset",
])]);
const SIZE: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["auto", "min-content", "max-content", "fit-content"]),
    Atom::Length,
    Atom::Percentage,
]);
const MAX_SIZE: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["none", "min-content", "max-content", "fit-content"]),
    Atom::Length,
    Atom::Percentage,
]);
const OVERFLOW: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "visible", "hidden", "clip", "scroll", "auto",
])]);
const OVERSCROLL: ValueGrammar =
    ValueGrammar::new(&[Atom::Keywords(&["auto", "contain", "none"])]);
const CONTAIN_INTRINSIC: ValueGrammar =
    ValueGrammar::new(&[Atom::Keywords(&["none"]), Atom::Length]);
const SCROLL_START: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&[
        "auto", "start", "center", "end", "top", "bottom", "left", "right",
    ]),
    Atom::Length,
    Atom::Percentage,
]);
const TIME: ValueGrammar = ValueGrammar::new(&[Atom::Time]);
const ANIMATION_NAME: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["none"]),
    Atom::CustomIdent,
    Atom::String,
]);
const AUTO_OR_IDENT: ValueGrammar =
    ValueGrammar::new(&[Atom::Keywords(&["auto"]), Atom::CustomIdent]);
const NONE_OR_IDENT: ValueGrammar =
    ValueGrammar::new(&[Atom::Keywords(&["none"]), Atom::CustomIdent]);
const FONT_DISPLAY: ValueGrammar = ValueGrammar::new(&[Atom::Keywords(&[
    "auto", "block", "swap", "fallback", "optional",
])]);
const METRIC_OVERRIDE: ValueGrammar =
    ValueGrammar::new(&[Atom::Keywords(&["normal"]), Atom::Percentage]);
const PAGE_SIZE: ValueGrammar = ValueGrammar::new(&[
    Atom::Keywords(&["auto", "portrait", "landscape", "a5", "a4", "a3", "letter", "legal"]),
    Atom::Length,
]);

const AUTO: Initial = Initial::Keyword("auto");
const NONE: Initial = Initial::Keyword("none");
const ZERO: Initial = Initial::Px(0.0);
const CURRENT_COLOR: Initial = Initial::Keyword("currentcolor");

const TEXT: CapabilityFlags = flags![
    INHERITED,
    IDEMPOTENT,
    VALID_FOR_KEYFRAME,
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_FIRST_LINE,
    VALID_FOR_PERMISSION_ELEMENT,
    VALID_FOR_PAGE_CONTEXT,
];
const FONT: CapabilityFlags = TEXT.union(flags![AFFECTS_FONT]);
const ANIMATED: CapabilityFlags = flags![INTERPOLABLE, ANIMATABLE, IDEMPOTENT, VALID_FOR_KEYFRAME];
const COLOR_FLAGS: CapabilityFlags = ANIMATED.union(flags![
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_FIRST_LINE,
    VALID_FOR_HIGHLIGHT,
    VALID_FOR_PERMISSION_ELEMENT,
    VALID_FOR_PAGE_CONTEXT,
]);
const VISITED_COLOR: CapabilityFlags = flags![
    INTERNAL,
    VISITED,
    INTERPOLABLE,
    ANIMATABLE,
    IDEMPOTENT,
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_FIRST_LINE,
    VALID_FOR_HIGHLIGHT,
];
const INSET: CapabilityFlags = ANIMATED.union(flags![VALID_FOR_POSITION_TRY, LAYOUT_DEPENDENT]);
const MARGIN: CapabilityFlags = ANIMATED.union(flags![
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_PAGE_CONTEXT,
    VALID_FOR_POSITION_TRY,
    VALID_FOR_PERMISSION_ELEMENT,
    LAYOUT_DEPENDENT,
]);
const PADDING: CapabilityFlags = ANIMATED.union(flags![
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_PAGE_CONTEXT,
    VALID_FOR_PERMISSION_ELEMENT,
    LAYOUT_DEPENDENT,
]);
const BORDER: CapabilityFlags = ANIMATED.union(flags![
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_PAGE_CONTEXT,
    VALID_FOR_PERMISSION_ELEMENT,
]);
const BORDER_STYLE_FLAGS: CapabilityFlags = flags![
    IDEMPOTENT,
    VALID_FOR_KEYFRAME,
    VALID_FOR_FIRST_LETTER,
    VALID_FOR_PAGE_CONTEXT,
];
const VISITED_BORDER_COLOR: CapabilityFlags = flags![
    INTERNAL,
    VISITED,
    INTERPOLABLE,
    ANIMATABLE,
    IDEMPOTENT,
    VALID_FOR_FIRST_LETTER,
];
const RADIUS: CapabilityFlags =
    ANIMATED.union(flags![VALID_FOR_FIRST_LETTER, VALID_FOR_PERMISSION_ELEMENT]);
const SIZING: CapabilityFlags =
    ANIMATED.union(flags![VALID_FOR_POSITION_TRY, VALID_FOR_PERMISSION_ELEMENT]);
const BOX_SIZE: CapabilityFlags = SIZING.union(flags![LAYOUT_DEPENDENT]);
const DISCRETE: CapabilityFlags = flags![IDEMPOTENT, VALID_FOR_KEYFRAME];

const fn side(side: LogicalSide) -> Role {
    Role::Side(side)
}

const fn physical_side(side: PhysicalSide) -> Role {
    Role::PhysicalSide(side)
}

const fn axis(axis: LogicalAxis) -> Role {
    Role::Axis(axis)
}

const fn physical_axis(axis: PhysicalAxis) -> Role {
    Role::PhysicalAxis(axis)
}

/// Visited color companion of a physical border color.
const fn visited_border(side_role: PhysicalSide, unvisited: PropertyId) -> PropertyDef {
    PropertyDef::longhand(COLOR, CURRENT_COLOR)
        .with(VISITED_BORDER_COLOR)
        .member(Group::VisitedBorderColor, physical_side(side_role), Logic::Axis)
        .unvisited(unvisited)
}

/// Visited color companion of a logical border color.
const fn visited_logical_border(side_role: LogicalSide, unvisited: PropertyId) -> PropertyDef {
    PropertyDef::longhand(COLOR, CURRENT_COLOR)
        .with(VISITED_BORDER_COLOR)
        .surrogate(Group::VisitedBorderColor, side(side_role), Logic::Axis)
        .unvisited(unvisited)
}

/// Four physical sides plus four logical sides of a box-edge group.
macro_rules! box_edges {
    (logical $grammar:expr, $initial:expr, $flags:expr, $group:expr, $side_role:expr, $logic:expr) => {
        PropertyDef::longhand($grammar, $initial)
            .with($flags)
            .surrogate($group, side($side_role), $logic)
    };
    ($grammar:expr, $initial:expr, $flags:expr, $group:expr, $side_role:expr, $logic:expr) => {
        PropertyDef::longhand($grammar, $initial)
            .with($flags)
            .member($group, physical_side($side_role), $logic)
    };
}

use LogicalSide::{BlockEnd, BlockStart, InlineEnd, InlineStart};
use PhysicalSide::{Bottom, Left, Right, Top};

properties! {
    // High priority: resolving logical properties depends on these.
    Direction = "direction" => PropertyDef::longhand(DIRECTION, Initial::Keyword("ltr"))
        .with(flags![INHERITED, IDEMPOTENT])
        .priority(ApplyPriority::High);
    WritingMode = "writing-mode" => PropertyDef::longhand(WRITING_MODE, Initial::Keyword("horizontal-tb"))
        .with(flags![INHERITED, IDEMPOTENT])
        .member(Group::WritingMode, Role::Canonical, Logic::Identity)
        .priority(ApplyPriority::High);
    WebkitWritingMode = "-webkit-writing-mode" => PropertyDef::longhand(WRITING_MODE, Initial::Keyword("horizontal-tb"))
        .with(flags![INHERITED, IDEMPOTENT])
        .surrogate(Group::WritingMode, Role::Alias, Logic::Identity)
        .priority(ApplyPriority::High);

    // Fonts: font-relative lengths depend on these.
    FontSize = "font-size" => PropertyDef::longhand(FONT_SIZE, Initial::Px(16.0))
        .with(FONT.union(flags![INTERPOLABLE, ANIMATABLE]))
        .priority(ApplyPriority::Font);
    FontFamily = "font-family" => PropertyDef::longhand(FONT_FAMILY, Initial::Keyword("sans-serif"))
        .with(FONT)
        .separated_by(',')
        .priority(ApplyPriority::Font);
    FontWeight = "font-weight" => PropertyDef::longhand(FONT_WEIGHT, Initial::Number(400.0))
        .with(FONT.union(flags![INTERPOLABLE, ANIMATABLE]))
        .priority(ApplyPriority::Font);

    Color = "color" => PropertyDef::longhand(COLOR, Initial::Color(Color::BLACK))
        .with(COLOR_FLAGS.union(flags![INHERITED]))
        .visited(PropertyId::InternalVisitedColor);
    InternalVisitedColor = "-internal-visited-color" => PropertyDef::longhand(COLOR, Initial::Color(Color::BLACK))
        .with(VISITED_COLOR.union(flags![INHERITED]))
        .unvisited(PropertyId::Color);
    BackgroundColor = "background-color" => PropertyDef::longhand(COLOR, Initial::Color(Color::TRANSPARENT))
        .with(COLOR_FLAGS)
        .visited(PropertyId::InternalVisitedBackgroundColor);
    InternalVisitedBackgroundColor = "-internal-visited-background-color" => PropertyDef::longhand(COLOR, Initial::Color(Color::TRANSPARENT))
        .with(VISITED_COLOR)
        .unvisited(PropertyId::BackgroundColor);
    LineHeight = "line-height" => PropertyDef::longhand(LINE_HEIGHT, Initial::Keyword("normal"))
        .with(TEXT.union(flags![INTERPOLABLE, ANIMATABLE]));
    Display = "display" => PropertyDef::longhand(DISPLAY, Initial::Keyword("inline"));
    Position = "position" => PropertyDef::longhand(POSITION, Initial::Keyword("static"))
        .with(flags![IDEMPOTENT]);
    ZIndex = "z-index" => PropertyDef::longhand(Z_INDEX, AUTO).with(ANIMATED);
    Opacity = "opacity" => PropertyDef::longhand(OPACITY, Initial::Number(1.0))
        .with(ANIMATED.union(flags![VALID_FOR_PERMISSION_ELEMENT]));

    // Inset.
    Top = "top" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, Top, Logic::Axis);
    Right = "right" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, Right, Logic::Axis);
    Bottom = "bottom" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, Bottom, Logic::Axis);
    Left = "left" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, Left, Logic::Axis);
    InsetBlockStart = "inset-block-start" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, BlockStart, Logic::Axis);
    InsetBlockEnd = "inset-block-end" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, BlockEnd, Logic::Axis);
    InsetInlineStart = "inset-inline-start" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, InlineStart, Logic::Axis);
    InsetInlineEnd = "inset-inline-end" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, AUTO, INSET, Group::Inset, InlineEnd, Logic::Axis);

    // Margin.
    MarginTop = "margin-top" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, Top, Logic::Axis);
    MarginRight = "margin-right" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, Right, Logic::Axis);
    MarginBottom = "margin-bottom" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, Bottom, Logic::Axis);
    MarginLeft = "margin-left" => box_edges!(LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, Left, Logic::Axis);
    MarginBlockStart = "margin-block-start" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, BlockStart, Logic::Axis);
    MarginBlockEnd = "margin-block-end" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, BlockEnd, Logic::Axis);
    MarginInlineStart = "margin-inline-start" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, InlineStart, Logic::Axis);
    MarginInlineEnd = "margin-inline-end" => box_edges!(logical LENGTH_PERCENTAGE_OR_AUTO, ZERO, MARGIN, Group::Margin, InlineEnd, Logic::Axis);

    // Padding.
    PaddingTop = "padding-top" => box_edges!(LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, Top, Logic::Axis);
    PaddingRight = "padding-right" => box_edges!(LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, Right, Logic::Axis);
    PaddingBottom = "padding-bottom" => box_edges!(LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, Bottom, Logic::Axis);
    PaddingLeft = "padding-left" => box_edges!(LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, Left, Logic::Axis);
    PaddingBlockStart = "padding-block-start" => box_edges!(logical LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, BlockStart, Logic::Axis);
    PaddingBlockEnd = "padding-block-end" => box_edges!(logical LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, BlockEnd, Logic::Axis);
    PaddingInlineStart = "padding-inline-start" => box_edges!(logical LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, InlineStart, Logic::Axis);
    PaddingInlineEnd = "padding-inline-end" => box_edges!(logical LENGTH_PERCENTAGE, ZERO, PADDING, Group::Padding, InlineEnd, Logic::Axis);

    // Border widths (`medium` is 3px).
    BorderTopWidth = "border-top-width" => box_edges!(BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, Top, Logic::Axis);
    BorderRightWidth = "border-right-width" => box_edges!(BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, Right, Logic::Axis);
    BorderBottomWidth = "border-bottom-width" => box_edges!(BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, Bottom, Logic::Axis);
    BorderLeftWidth = "border-left-width" => box_edges!(BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, Left, Logic::Axis);
    BorderBlockStartWidth = "border-block-start-width" => box_edges!(logical BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, BlockStart, Logic::Axis);
    BorderBlockEndWidth = "border-block-end-width" => box_edges!(logical BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, BlockEnd, Logic::Axis);
    BorderInlineStartWidth = "border-inline-start-width" => box_edges!(logical BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, InlineStart, Logic::Axis);
    BorderInlineEndWidth = "border-inline-end-width" => box_edges!(logical BORDER_WIDTH, Initial::Px(3.0), BORDER, Group::BorderWidth, InlineEnd, Logic::Axis);

    // Border styles.
    BorderTopStyle = "border-top-style" => box_edges!(BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, Top, Logic::Axis);
    BorderRightStyle = "border-right-style" => box_edges!(BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, Right, Logic::Axis);
    BorderBottomStyle = "border-bottom-style" => box_edges!(BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, Bottom, Logic::Axis);
    BorderLeftStyle = "border-left-style" => box_edges!(BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, Left, Logic::Axis);
    BorderBlockStartStyle = "border-block-start-style" => box_edges!(logical BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, BlockStart, Logic::Axis);
    BorderBlockEndStyle = "border-block-end-style" => box_edges!(logical BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, BlockEnd, Logic::Axis);
    BorderInlineStartStyle = "border-inline-start-style" => box_edges!(logical BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, InlineStart, Logic::Axis);
    BorderInlineEndStyle = "border-inline-end-style" => box_edges!(logical BORDER_STYLE, NONE, BORDER_STYLE_FLAGS, Group::BorderStyle, InlineEnd, Logic::Axis);

    // Border colors and their `:visited` companions.
    BorderTopColor = "border-top-color" => box_edges!(COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, Top, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderTopColor);
    BorderRightColor = "border-right-color" => box_edges!(COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, Right, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderRightColor);
    BorderBottomColor = "border-bottom-color" => box_edges!(COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, Bottom, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderBottomColor);
    BorderLeftColor = "border-left-color" => box_edges!(COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, Left, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderLeftColor);
    BorderBlockStartColor = "border-block-start-color" => box_edges!(logical COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, BlockStart, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderBlockStartColor);
    BorderBlockEndColor = "border-block-end-color" => box_edges!(logical COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, BlockEnd, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderBlockEndColor);
    BorderInlineStartColor = "border-inline-start-color" => box_edges!(logical COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, InlineStart, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderInlineStartColor);
    BorderInlineEndColor = "border-inline-end-color" => box_edges!(logical COLOR, CURRENT_COLOR, BORDER, Group::BorderColor, InlineEnd, Logic::Axis)
        .visited(PropertyId::InternalVisitedBorderInlineEndColor);
    InternalVisitedBorderTopColor = "-internal-visited-border-top-color" => visited_border(Top, PropertyId::BorderTopColor);
    InternalVisitedBorderRightColor = "-internal-visited-border-right-color" => visited_border(Right, PropertyId::BorderRightColor);
    InternalVisitedBorderBottomColor = "-internal-visited-border-bottom-color" => visited_border(Bottom, PropertyId::BorderBottomColor);
    InternalVisitedBorderLeftColor = "-internal-visited-border-left-color" => visited_border(Left, PropertyId::BorderLeftColor);
    InternalVisitedBorderBlockStartColor = "-internal-visited-border-block-start-color" => visited_logical_border(BlockStart, PropertyId::BorderBlockStartColor);
    InternalVisitedBorderBlockEndColor = "-internal-visited-border-block-end-color" => visited_logical_border(BlockEnd, PropertyId::BorderBlockEndColor);
    InternalVisitedBorderInlineStartColor = "-internal-visited-border-inline-start-color" => visited_logical_border(InlineStart, PropertyId::BorderInlineStartColor);
    InternalVisitedBorderInlineEndColor = "-internal-visited-border-inline-end-color" => visited_logical_border(InlineEnd, PropertyId::BorderInlineEndColor);

    // Border radius: physical corners are identity members, logical corners rotate.
    BorderTopLeftRadius = "border-top-left-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .member(Group::BorderRadius, Role::PhysicalCorner(PhysicalCorner::TopLeft), Logic::Identity);
    BorderTopRightRadius = "border-top-right-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .member(Group::BorderRadius, Role::PhysicalCorner(PhysicalCorner::TopRight), Logic::Identity);
    BorderBottomRightRadius = "border-bottom-right-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .member(Group::BorderRadius, Role::PhysicalCorner(PhysicalCorner::BottomRight), Logic::Identity);
    BorderBottomLeftRadius = "border-bottom-left-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .member(Group::BorderRadius, Role::PhysicalCorner(PhysicalCorner::BottomLeft), Logic::Identity);
    BorderStartStartRadius = "border-start-start-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .surrogate(Group::BorderRadius, Role::Corner(LogicalCorner::StartStart), Logic::Corner);
    BorderStartEndRadius = "border-start-end-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .surrogate(Group::BorderRadius, Role::Corner(LogicalCorner::StartEnd), Logic::Corner);
    BorderEndStartRadius = "border-end-start-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .surrogate(Group::BorderRadius, Role::Corner(LogicalCorner::EndStart), Logic::Corner);
    BorderEndEndRadius = "border-end-end-radius" => PropertyDef::longhand(LENGTH_PERCENTAGE, ZERO)
        .with(RADIUS)
        .surrogate(Group::BorderRadius, Role::Corner(LogicalCorner::EndEnd), Logic::Corner);

    // Sizing.
    Width = "width" => PropertyDef::longhand(SIZE, AUTO)
        .with(BOX_SIZE)
        .member(Group::Size, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    Height = "height" => PropertyDef::longhand(SIZE, AUTO)
        .with(BOX_SIZE)
        .member(Group::Size, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    InlineSize = "inline-size" => PropertyDef::longhand(SIZE, AUTO)
        .with(BOX_SIZE)
        .surrogate(Group::Size, axis(LogicalAxis::Inline), Logic::Axis);
    BlockSize = "block-size" => PropertyDef::longhand(SIZE, AUTO)
        .with(BOX_SIZE)
        .surrogate(Group::Size, axis(LogicalAxis::Block), Logic::Axis);
    MinWidth = "min-width" => PropertyDef::longhand(SIZE, AUTO)
        .with(SIZING)
        .member(Group::MinSize, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    MinHeight = "min-height" => PropertyDef::longhand(SIZE, AUTO)
        .with(SIZING)
        .member(Group::MinSize, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    MinInlineSize = "min-inline-size" => PropertyDef::longhand(SIZE, AUTO)
        .with(SIZING)
        .surrogate(Group::MinSize, axis(LogicalAxis::Inline), Logic::Axis);
    MinBlockSize = "min-block-size" => PropertyDef::longhand(SIZE, AUTO)
        .with(SIZING)
        .surrogate(Group::MinSize, axis(LogicalAxis::Block), Logic::Axis);
    MaxWidth = "max-width" => PropertyDef::longhand(MAX_SIZE, NONE)
        .with(SIZING)
        .member(Group::MaxSize, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    MaxHeight = "max-height" => PropertyDef::longhand(MAX_SIZE, NONE)
        .with(SIZING)
        .member(Group::MaxSize, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    MaxInlineSize = "max-inline-size" => PropertyDef::longhand(MAX_SIZE, NONE)
        .with(SIZING)
        .surrogate(Group::MaxSize, axis(LogicalAxis::Inline), Logic::Axis);
    MaxBlockSize = "max-block-size" => PropertyDef::longhand(MAX_SIZE, NONE)
        .with(SIZING)
        .surrogate(Group::MaxSize, axis(LogicalAxis::Block), Logic::Axis);

    // Overflow and scrolling.
    OverflowX = "overflow-x" => PropertyDef::longhand(OVERFLOW, Initial::Keyword("visible"))
        .with(DISCRETE)
        .member(Group::Overflow, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    OverflowY = "overflow-y" => PropertyDef::longhand(OVERFLOW, Initial::Keyword("visible"))
        .with(DISCRETE)
        .member(Group::Overflow, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    OverflowInline = "overflow-inline" => PropertyDef::longhand(OVERFLOW, Initial::Keyword("visible"))
        .with(DISCRETE)
        .surrogate(Group::Overflow, axis(LogicalAxis::Inline), Logic::Axis);
    OverflowBlock = "overflow-block" => PropertyDef::longhand(OVERFLOW, Initial::Keyword("visible"))
        .with(DISCRETE)
        .surrogate(Group::Overflow, axis(LogicalAxis::Block), Logic::Axis);
    OverscrollBehaviorX = "overscroll-behavior-x" => PropertyDef::longhand(OVERSCROLL, AUTO)
        .with(DISCRETE)
        .member(Group::OverscrollBehavior, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    OverscrollBehaviorY = "overscroll-behavior-y" => PropertyDef::longhand(OVERSCROLL, AUTO)
        .with(DISCRETE)
        .member(Group::OverscrollBehavior, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    OverscrollBehaviorInline = "overscroll-behavior-inline" => PropertyDef::longhand(OVERSCROLL, AUTO)
        .with(DISCRETE)
        .surrogate(Group::OverscrollBehavior, axis(LogicalAxis::Inline), Logic::Axis);
    OverscrollBehaviorBlock = "overscroll-behavior-block" => PropertyDef::longhand(OVERSCROLL, AUTO)
        .with(DISCRETE)
        .surrogate(Group::OverscrollBehavior, axis(LogicalAxis::Block), Logic::Axis);
    ContainIntrinsicWidth = "contain-intrinsic-width" => PropertyDef::longhand(CONTAIN_INTRINSIC, NONE)
        .with(ANIMATED)
        .member(Group::ContainIntrinsicSize, physical_axis(PhysicalAxis::Horizontal), Logic::Axis);
    ContainIntrinsicHeight = "contain-intrinsic-height" => PropertyDef::longhand(CONTAIN_INTRINSIC, NONE)
        .with(ANIMATED)
        .member(Group::ContainIntrinsicSize, physical_axis(PhysicalAxis::Vertical), Logic::Axis);
    ContainIntrinsicInlineSize = "contain-intrinsic-inline-size" => PropertyDef::longhand(CONTAIN_INTRINSIC, NONE)
        .with(ANIMATED)
        .surrogate(Group::ContainIntrinsicSize, axis(LogicalAxis::Inline), Logic::Axis);
    ContainIntrinsicBlockSize = "contain-intrinsic-block-size" => PropertyDef::longhand(CONTAIN_INTRINSIC, NONE)
        .with(ANIMATED)
        .surrogate(Group::ContainIntrinsicSize, axis(LogicalAxis::Block), Logic::Axis);
    ScrollStartX = "scroll-start-x" => PropertyDef::longhand(SCROLL_START, AUTO)
        .with(flags![IDEMPOTENT])
        .member(Group::ScrollStart, physical_axis(PhysicalAxis::Horizontal), Logic::Axis)
        .gated(RuntimeFeatures::SCROLL_START);
    ScrollStartY = "scroll-start-y" => PropertyDef::longhand(SCROLL_START, AUTO)
        .with(flags![IDEMPOTENT])
        .member(Group::ScrollStart, physical_axis(PhysicalAxis::Vertical), Logic::Axis)
        .gated(RuntimeFeatures::SCROLL_START);
    ScrollStartInline = "scroll-start-inline" => PropertyDef::longhand(SCROLL_START, AUTO)
        .with(flags![IDEMPOTENT])
        .surrogate(Group::ScrollStart, axis(LogicalAxis::Inline), Logic::Axis)
        .gated(RuntimeFeatures::SCROLL_START);
    ScrollStartBlock = "scroll-start-block" => PropertyDef::longhand(SCROLL_START, AUTO)
        .with(flags![IDEMPOTENT])
        .surrogate(Group::ScrollStart, axis(LogicalAxis::Block), Logic::Axis)
        .gated(RuntimeFeatures::SCROLL_START);

    // Animation longhands.
    TransitionDuration = "transition-duration" => PropertyDef::longhand(TIME, Initial::Seconds(0.0))
        .with(flags![ANIMATION])
        .separated_by(',');
    AnimationName = "animation-name" => PropertyDef::longhand(ANIMATION_NAME, NONE)
        .with(flags![ANIMATION])
        .separated_by(',');

    // Runtime-gated properties.
    PositionAnchor = "position-anchor" => PropertyDef::longhand(AUTO_OR_IDENT, AUTO)
        .with(flags![IDEMPOTENT, VALID_FOR_POSITION_TRY])
        .gated(RuntimeFeatures::ANCHOR_POSITIONING);
    AnchorName = "anchor-name" => PropertyDef::longhand(NONE_OR_IDENT, NONE)
        .with(flags![IDEMPOTENT])
        .separated_by(',')
        .gated(RuntimeFeatures::ANCHOR_POSITIONING);
    ViewTransitionName = "view-transition-name" => PropertyDef::longhand(NONE_OR_IDENT, NONE)
        .with(flags![IDEMPOTENT])
        .gated(RuntimeFeatures::VIEW_TRANSITIONS);

    // At-rule descriptors.
    FontDisplay = "font-display" => PropertyDef::descriptor(AtRule::FontFace, FONT_DISPLAY, AUTO);
    AscentOverride = "ascent-override" => PropertyDef::descriptor(AtRule::FontFace, METRIC_OVERRIDE, Initial::Keyword("normal"));
    Size = "size" => PropertyDef::descriptor(AtRule::Page, PAGE_SIZE, AUTO)
        .separated_by(' ');
}
