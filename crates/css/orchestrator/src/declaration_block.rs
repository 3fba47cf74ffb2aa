//! Declaration blocks: ordered `name: value` lists as parsed from style text.
//! Spec: <https://www.w3.org/TR/css-syntax-3/#consume-declaration>

use css_cascade::DeclaredValue;
use css_properties::{
    ExposureContext, PropertyDescriptor, PropertyId, PropertyRegistry, RuleContext,
    is_exposed, same_group_different_logic,
};
use css_values_units::{CssWideKeyword, parse_css_wide_keyword};
use cssparser::{Delimiter, ParseError as SyntaxError, Parser, ParserInput, parse_important};
use log::trace;
use smallvec::SmallVec;

/// Inline capacity; most blocks are short.
const INLINE_DECLARATIONS: usize = 8;

/// One parsed declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: PropertyId,
    pub value: DeclaredValue,
    pub important: bool,
}

/// Why a declaration was dropped.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum DeclarationError {
    UnknownProperty,
    NotAllowedHere,
    InvalidValue,
}

/// What one `name: value` produced.
enum Parsed {
    Single(Declaration),
    /// `all: <css-wide-keyword>`.
    All(CssWideKeyword, bool),
}

/// An ordered list of declarations, at most one per property.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeclarationBlock {
    declarations: SmallVec<Declaration, INLINE_DECLARATIONS>,
}

impl DeclarationBlock {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the body of a style rule or a `style` attribute.
    ///
    /// Unknown, unexposed and invalid declarations are dropped; parsing continues with
    /// the next declaration.
    pub fn parse(text: &str, exposure: &ExposureContext) -> Self {
        Self::parse_in(text, exposure, RuleContext::Style)
    }

    /// Parse a declaration list for a specific rule context, e.g. `@font-face`.
    pub fn parse_in(text: &str, exposure: &ExposureContext, context: RuleContext) -> Self {
        let mut block = Self::new();
        let mut input = ParserInput::new(text);
        let mut parser = Parser::new(&mut input);
        while !parser.is_exhausted() {
            let parsed = parser.parse_until_after(Delimiter::Semicolon, |input| {
                parse_declaration(input, exposure, context)
            });
            match parsed {
                Ok(Parsed::Single(declaration)) => {
                    block.set_property(declaration);
                }
                Ok(Parsed::All(keyword, important)) => block.set_all(keyword, important, exposure),
                Err(error) => trace!(
                    "dropping declaration at {}:{}: {:?}",
                    error.location.line, error.location.column, error.kind
                ),
            }
        }
        block
    }

    /// Insert or replace the declaration for `declaration.property`.
    ///
    /// An existing declaration is replaced in place, unless a later declaration of the
    /// same logical group maps differently; then the old one is removed and the new one
    /// appended so it still wins over that sibling. A normal declaration never replaces
    /// an important one. Returns whether the block changed.
    pub fn set_property(&mut self, declaration: Declaration) -> bool {
        let Some(position) = self.position(declaration.property) else {
            self.declarations.push(declaration);
            return true;
        };
        if self.declarations[position].important && !declaration.important {
            return false;
        }
        let descriptor = PropertyRegistry::global().by_id(declaration.property);
        let shadowed = self.declarations[position + 1..].iter().any(|later| {
            maps_differently(descriptor, PropertyRegistry::global().by_id(later.property))
        });
        if shadowed {
            self.declarations.remove(position);
            self.declarations.push(declaration);
        } else {
            self.declarations[position] = declaration;
        }
        true
    }

    /// Remove the declaration for `property`; returns it if present.
    pub fn remove_property(&mut self, property: PropertyId) -> Option<Declaration> {
        let position = self.position(property)?;
        Some(self.declarations.remove(position))
    }

    pub fn get(&self, property: PropertyId) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|declaration| declaration.property == property)
    }

    /// Declarations in block order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    fn position(&self, property: PropertyId) -> Option<usize> {
        self.declarations
            .iter()
            .position(|declaration| declaration.property == property)
    }

    /// Expand `all` over every exposed property it covers.
    fn set_all(&mut self, keyword: CssWideKeyword, important: bool, exposure: &ExposureContext) {
        for descriptor in PropertyRegistry::global()
            .iter()
            .filter(|descriptor| descriptor.is_affected_by_all() && is_exposed(descriptor, exposure))
        {
            self.set_property(Declaration {
                property: descriptor.id(),
                value: DeclaredValue::CssWide(keyword),
                important,
            });
        }
    }
}

/// Two members of one group that cannot stand in for each other: a logical and a
/// physical member, or members with different mapping logic.
fn maps_differently(first: &PropertyDescriptor, second: &PropertyDescriptor) -> bool {
    match (first.logical_member(), second.logical_member()) {
        (Some(first_member), Some(second_member)) if first_member.group == second_member.group => {
            first_member.role.is_logical() != second_member.role.is_logical()
                || same_group_different_logic(first, second)
        }
        _ => false,
    }
}

fn parse_declaration<'i>(
    input: &mut Parser<'i, '_>,
    exposure: &ExposureContext,
    context: RuleContext,
) -> Result<Parsed, SyntaxError<'i, DeclarationError>> {
    let name = input.expect_ident_cloned()?;
    input.expect_colon()?;

    if name.eq_ignore_ascii_case("all") && context == RuleContext::Style {
        let keyword = parse_css_wide_keyword(input)
            .map_err(|_| input.new_custom_error(DeclarationError::InvalidValue))?;
        let important = input.try_parse(parse_important).is_ok();
        input.expect_exhausted()?;
        return Ok(Parsed::All(keyword, important));
    }

    let descriptor = PropertyRegistry::global()
        .lookup(&name, exposure)
        .ok_or_else(|| input.new_custom_error(DeclarationError::UnknownProperty))?;
    if !descriptor.is_valid_in(context) {
        return Err(input.new_custom_error(DeclarationError::NotAllowedHere));
    }

    let value = match input.try_parse(parse_css_wide_keyword) {
        Ok(keyword) => DeclaredValue::CssWide(keyword),
        Err(_) => DeclaredValue::Value(
            descriptor
                .grammar()
                .parse_value(input, descriptor.list_separator())
                .map_err(|_| input.new_custom_error(DeclarationError::InvalidValue))?,
        ),
    };
    let important = input.try_parse(parse_important).is_ok();
    input.expect_exhausted()?;
    Ok(Parsed::Single(Declaration {
        property: descriptor.id(),
        value,
        important,
    }))
}
