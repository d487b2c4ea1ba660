//! Enums stored by member name.

use super::value::Value;
use crate::error::{Error, Result};
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// An enum whose members are stored as their declared names.
///
/// # Example
///
/// ```
/// use sqltypes::SqlEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Green,
///     Blue,
/// }
///
/// impl SqlEnum for Color {
///     fn members() -> &'static [Self] {
///         &[Color::Red, Color::Green, Color::Blue]
///     }
///
///     fn name(&self) -> &'static str {
///         match self {
///             Color::Red => "RED",
///             Color::Green => "GREEN",
///             Color::Blue => "BLUE",
///         }
///     }
/// }
/// ```
pub trait SqlEnum: Copy + Send + Sync + 'static {
    /// All members in declaration order.
    fn members() -> &'static [Self];

    /// Declared name of this member.
    fn name(&self) -> &'static str;

    /// Name of the enum type, used in error messages.
    ///
    /// Defaults to the type's path without module prefix or generic
    /// arguments.
    fn type_name() -> &'static str {
        short_type_name(std::any::type_name::<Self>())
    }
}

/// Strip the module path and generic arguments from a type path.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A resolved enum member: its declared name and position, tagged with the
/// enum type it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumMember {
    /// Declared member name.
    pub name: &'static str,
    /// Position in declaration order.
    pub ordinal: usize,
    enum_type: &'static str,
    type_id: TypeId,
}

impl EnumMember {
    /// Describe `member` of enum `E`.
    pub fn of<E: SqlEnum>(member: &E) -> Self {
        let name = member.name();
        let ordinal = E::members()
            .iter()
            .position(|m| m.name() == name)
            .unwrap_or_default();
        Self {
            name,
            ordinal,
            enum_type: E::type_name(),
            type_id: TypeId::of::<E>(),
        }
    }

    /// Name of the enum type this member belongs to.
    pub fn enum_type(&self) -> &'static str {
        self.enum_type
    }

    /// Check if this member belongs to enum `E`.
    pub fn is_member_of<E: SqlEnum>(&self) -> bool {
        self.type_id == TypeId::of::<E>()
    }
}

/// Name → member table for one enum type, built once.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    type_name: &'static str,
    type_id: TypeId,
    members: Arc<HashMap<&'static str, usize>>,
}

impl EnumType {
    /// Build the lookup table for `E`.
    ///
    /// Fails with `DuplicateEnumMember` if two members share a name.
    pub fn of<E: SqlEnum>() -> Result<Self> {
        let mut members = HashMap::with_capacity(E::members().len());
        for (ordinal, member) in E::members().iter().enumerate() {
            if members.insert(member.name(), ordinal).is_some() {
                return Err(Error::DuplicateEnumMember {
                    enum_type: E::type_name(),
                    name: member.name().to_string(),
                });
            }
        }
        Ok(Self {
            type_name: E::type_name(),
            type_id: TypeId::of::<E>(),
            members: Arc::new(members),
        })
    }

    /// Name of the enum type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of declared members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the enum declares no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if `name` is a declared member name.
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    /// Check if `member` was taken from this enum type.
    pub fn owns(&self, member: &EnumMember) -> bool {
        member.type_id == self.type_id
    }

    /// Resolve a stored name back to its member.
    pub fn resolve(&self, name: &str) -> Result<EnumMember> {
        self.members
            .get_key_value(name)
            .map(|(name, ordinal)| EnumMember {
                name: *name,
                ordinal: *ordinal,
                enum_type: self.type_name,
                type_id: self.type_id,
            })
            .ok_or_else(|| Error::Lookup {
                enum_type: self.type_name,
                name: name.to_string(),
            })
    }
}

/// Convert an enum member into a catalog value.
pub fn enum_to_value<E: SqlEnum>(member: &E) -> Value {
    Value::Enum(EnumMember::of(member))
}

/// Convert a catalog value back into an enum member.
pub fn enum_from_value<E: SqlEnum>(value: Value) -> Result<E> {
    match value {
        Value::Enum(member) if !member.is_member_of::<E>() => Err(Error::Cast {
            expected: E::type_name(),
            actual: member.enum_type,
        }),
        Value::Enum(member) => E::members()
            .get(member.ordinal)
            .filter(|m| m.name() == member.name)
            .copied()
            .ok_or_else(|| Error::Lookup {
                enum_type: E::type_name(),
                name: member.name.to_string(),
            }),
        other => Err(Error::Cast {
            expected: E::type_name(),
            actual: other.type_name(),
        }),
    }
}
