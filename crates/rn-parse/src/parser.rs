//! Parsers for the `R(A,B,C)` relation notation and the `A->B,AB->C`
//! dependency notation.

use crate::error::{ParseError, ParseResult};
use rn_core::{Attribute, AttributeSet, FunctionalDependency, Relation};

/// Parse `Name(A,B,C,...)` into a [`Relation`].
///
/// The name is everything before the opening parenthesis; attributes are
/// comma-separated and whitespace-trimmed. Multi-character attribute names
/// are accepted here even though the dependency notation cannot reference
/// them.
pub fn parse_relation(input: &str) -> ParseResult<Relation> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let open = input
        .find('(')
        .ok_or_else(|| ParseError::MissingOpenParen {
            input: input.to_string(),
        })?;
    if !input.ends_with(')') {
        return Err(ParseError::UnbalancedParens {
            input: input.to_string(),
        });
    }

    let name = input[..open].trim();
    if name.is_empty() {
        return Err(ParseError::MissingRelationName {
            input: input.to_string(),
        });
    }

    let list = input[open + 1..input.len() - 1].trim();
    if list.is_empty() {
        return Err(ParseError::EmptyAttributeList {
            name: name.to_string(),
        });
    }

    let attributes = parse_attributes(list)?;
    Ok(Relation::try_new(name, attributes)?)
}

/// Parse a comma-separated attribute list (`A,B,C`) into an
/// [`AttributeSet`]. Duplicates collapse silently, as in any set literal.
pub fn parse_attributes(input: &str) -> ParseResult<AttributeSet> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut attributes = AttributeSet::new();
    for token in input.split(',') {
        let token = token.trim();
        let attr = Attribute::try_new(token).ok_or_else(|| ParseError::EmptyAttribute {
            input: input.to_string(),
        })?;
        attributes.insert(attr);
    }
    Ok(attributes)
}

/// Parse a comma-separated dependency list (`A->B,AB->CD`) into
/// [`FunctionalDependency`] values, in input order.
///
/// Each side of an item is a run of single-character attribute tokens, so
/// `AB->CD` reads as `{A,B} -> {C,D}`. Whitespace is ignored everywhere.
/// An empty or blank input yields an empty list: a schema may simply have
/// no dependencies.
pub fn parse_fds(input: &str) -> ParseResult<Vec<FunctionalDependency>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut fds = Vec::new();
    for item in input.split(',') {
        let item = item.trim();
        let (left, right) = item.split_once("->").ok_or_else(|| ParseError::MissingArrow {
            item: item.to_string(),
        })?;

        let determinant = parse_attribute_run(left);
        if determinant.is_empty() {
            return Err(ParseError::MissingDeterminant {
                item: item.to_string(),
            });
        }
        let dependent = parse_attribute_run(right);
        if dependent.is_empty() {
            return Err(ParseError::MissingDependent {
                item: item.to_string(),
            });
        }

        fds.push(FunctionalDependency::try_new(determinant, dependent)?);
    }
    Ok(fds)
}

/// Parse both notations and check that every dependency stays inside the
/// relation's schema.
pub fn parse_schema(
    relation: &str,
    fds: &str,
) -> ParseResult<(Relation, Vec<FunctionalDependency>)> {
    let relation = parse_relation(relation)?;
    let fds = parse_fds(fds)?;

    for fd in &fds {
        for attr in fd.determinant().iter().chain(fd.dependent().iter()) {
            if !relation.attributes().contains(attr) {
                return Err(ParseError::UnknownAttribute {
                    attribute: attr.to_string(),
                    relation: relation.name().to_string(),
                });
            }
        }
    }

    Ok((relation, fds))
}

fn parse_attribute_run(side: &str) -> AttributeSet {
    side.chars()
        .filter(|c| !c.is_whitespace())
        .map(Attribute::from)
        .collect()
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
