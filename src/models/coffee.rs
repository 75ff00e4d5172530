// Coffee record and drink size - the domain vocabulary of the catalog
//
// ## Domain Overview
//
// The catalog manages exactly one kind of entity: a **coffee record**. A
// record is a flat value with three fields:
//
// - `id`: unique integer, assigned sequentially by the service on create
// - `name`: free-text label, mutable via update
// - `size`: one of a fixed, closed set of drink sizes
//
// There is deliberately no inheritance hierarchy, no embedded references and
// no timestamps - the record is the whole story.
//
// ### Implementation Notes:
//
// - `Coffee` is a plain data struct; all invariants (id uniqueness, id
//   assignment) live in the service layer, not here
// - `Size` is a small closed enum; the serialized spelling is the upper-case
//   variant name (`SHORT`, `TALL`, `GRANDE`, `VENTI`) to match the GraphQL
//   schema's enum values

use serde::{Deserialize, Serialize};

/// **Drink size** - a fixed, closed set of named values
///
/// The set is closed by design: clients select a size, they never define one.
/// There are no ordering semantics beyond declaration order, and equality is
/// by variant identity.
///
/// ## Rust Learning Notes:
///
/// ### Field-less Enums
/// An enum with no payload data is Rust's equivalent of a classic C-style
/// enumeration. Deriving `Copy` is free here because the enum is just a
/// discriminant - passing a `Size` by value costs one byte.
///
/// ### Serde Renaming
/// `#[serde(rename_all = "UPPERCASE")]` makes the JSON spelling `"GRANDE"`
/// rather than `"Grande"`, so the wire format matches the GraphQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Short,
    Tall,
    Grande,
    Venti,
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Size::Short => "SHORT",
            Size::Tall => "TALL",
            Size::Grande => "GRANDE",
            Size::Venti => "VENTI",
        };
        write!(f, "{}", name)
    }
}

/// **Coffee record** - a single entry in the catalog
///
/// Records are created by the service (which assigns the id), mutated in
/// place by update, and removed by delete. The struct itself carries no
/// behavior beyond construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coffee {
    /// Unique integer identifier, assigned sequentially starting at 1
    pub id: i32,
    /// Display name of the drink, mutable via update
    pub name: String,
    /// Drink size from the closed `Size` set
    pub size: Size,
}

impl Coffee {
    /// Create a new record with all fields supplied
    ///
    /// Id assignment policy lives in the service; this constructor just
    /// assembles the value.
    pub fn new<S: Into<String>>(id: i32, name: S, size: Size) -> Self {
        Coffee {
            id,
            name: name.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coffee_new_assembles_all_fields() {
        let coffee = Coffee::new(1, "Caffè Americano", Size::Grande);
        assert_eq!(coffee.id, 1);
        assert_eq!(coffee.name, "Caffè Americano");
        assert_eq!(coffee.size, Size::Grande);
    }

    #[test]
    fn size_serializes_as_upper_case_name() {
        assert_eq!(serde_json::to_value(Size::Short).unwrap(), json!("SHORT"));
        assert_eq!(serde_json::to_value(Size::Venti).unwrap(), json!("VENTI"));
    }

    #[test]
    fn size_deserializes_from_upper_case_name() {
        let size: Size = serde_json::from_value(json!("GRANDE")).unwrap();
        assert_eq!(size, Size::Grande);
    }

    #[test]
    fn size_rejects_values_outside_the_closed_set() {
        let result: serde_json::Result<Size> = serde_json::from_value(json!("DECAF"));
        assert!(result.is_err());
    }

    #[test]
    fn coffee_round_trips_through_json() {
        let coffee = Coffee::new(2, "Caffè Latte", Size::Venti);
        let value = serde_json::to_value(&coffee).unwrap();
        assert_eq!(value, json!({"id": 2, "name": "Caffè Latte", "size": "VENTI"}));
        let back: Coffee = serde_json::from_value(value).unwrap();
        assert_eq!(back, coffee);
    }
}
