//! Cafe Model
//!
//! [`CafeField`] is the one field list for the cafe table: the repository
//! builds its column lists from it, the form layer derives its rules from
//! [`CafeField::kind`] and the templates render inputs in its order.

use serde::{Deserialize, Serialize};

/// Column width of every text field
pub const MAX_TEXT_LEN: usize = 250;

/// How a field is entered and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required free text
    Text,
    /// Required text that must parse as a URL
    Url,
    /// Boolean checkbox
    Checkbox,
}

/// Mutable columns of the `cafe` table, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CafeField {
    Name,
    MapUrl,
    ImgUrl,
    Location,
    HasSockets,
    HasToilet,
    HasWifi,
    CanTakeCalls,
    Seats,
    CoffeePrice,
}

impl CafeField {
    pub const ALL: [CafeField; 10] = [
        CafeField::Name,
        CafeField::MapUrl,
        CafeField::ImgUrl,
        CafeField::Location,
        CafeField::HasSockets,
        CafeField::HasToilet,
        CafeField::HasWifi,
        CafeField::CanTakeCalls,
        CafeField::Seats,
        CafeField::CoffeePrice,
    ];

    /// Column name, also used as the form input name
    pub const fn column(self) -> &'static str {
        match self {
            CafeField::Name => "name",
            CafeField::MapUrl => "map_url",
            CafeField::ImgUrl => "img_url",
            CafeField::Location => "location",
            CafeField::HasSockets => "has_sockets",
            CafeField::HasToilet => "has_toilet",
            CafeField::HasWifi => "has_wifi",
            CafeField::CanTakeCalls => "can_take_calls",
            CafeField::Seats => "seats",
            CafeField::CoffeePrice => "coffee_price",
        }
    }

    /// Form label
    pub const fn label(self) -> &'static str {
        match self {
            CafeField::Name => "Name of Cafe",
            CafeField::MapUrl => "Maps of Cafe",
            CafeField::ImgUrl => "Image of Cafe",
            CafeField::Location => "Location of Cafe",
            CafeField::HasSockets => "Has Sockets",
            CafeField::HasToilet => "Has Toilets",
            CafeField::HasWifi => "Has Wi-fi",
            CafeField::CanTakeCalls => "Can Take Calls",
            CafeField::Seats => "Seats in Cafe",
            CafeField::CoffeePrice => "Price of Coffee",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            CafeField::MapUrl | CafeField::ImgUrl => FieldKind::Url,
            CafeField::HasSockets
            | CafeField::HasToilet
            | CafeField::HasWifi
            | CafeField::CanTakeCalls => FieldKind::Checkbox,
            CafeField::Name | CafeField::Location | CafeField::Seats | CafeField::CoffeePrice => {
                FieldKind::Text
            }
        }
    }

    /// Fields backed by a UNIQUE constraint
    pub const fn is_unique(self) -> bool {
        matches!(self, CafeField::Name | CafeField::MapUrl)
    }

    /// Reverse lookup of [`CafeField::column`]
    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.column() == column)
    }
}

/// A single field value, borrowed from [`CafeFields`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Flag(bool),
}

/// Every mutable attribute of a cafe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CafeFields {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    #[serde(default)]
    pub has_sockets: bool,
    #[serde(default)]
    pub has_toilet: bool,
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub can_take_calls: bool,
    pub seats: String,
    pub coffee_price: String,
}

impl CafeFields {
    pub fn value(&self, field: CafeField) -> FieldValue<'_> {
        match field {
            CafeField::Name => FieldValue::Text(&self.name),
            CafeField::MapUrl => FieldValue::Text(&self.map_url),
            CafeField::ImgUrl => FieldValue::Text(&self.img_url),
            CafeField::Location => FieldValue::Text(&self.location),
            CafeField::HasSockets => FieldValue::Flag(self.has_sockets),
            CafeField::HasToilet => FieldValue::Flag(self.has_toilet),
            CafeField::HasWifi => FieldValue::Flag(self.has_wifi),
            CafeField::CanTakeCalls => FieldValue::Flag(self.can_take_calls),
            CafeField::Seats => FieldValue::Text(&self.seats),
            CafeField::CoffeePrice => FieldValue::Text(&self.coffee_price),
        }
    }
}

/// Cafe entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Cafe {
    pub id: i64,
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub fields: CafeFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_unique_and_round_trip() {
        for field in CafeField::ALL {
            assert_eq!(CafeField::from_column(field.column()), Some(field));
        }
        assert_eq!(CafeField::from_column("id"), None);
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(CafeField::MapUrl.kind(), FieldKind::Url);
        assert_eq!(CafeField::ImgUrl.kind(), FieldKind::Url);
        assert_eq!(CafeField::HasWifi.kind(), FieldKind::Checkbox);
        assert_eq!(CafeField::Seats.kind(), FieldKind::Text);

        let unique: Vec<_> = CafeField::ALL
            .into_iter()
            .filter(|f| f.is_unique())
            .collect();
        assert_eq!(unique, vec![CafeField::Name, CafeField::MapUrl]);
    }

    #[test]
    fn test_value_follows_field() {
        let fields = CafeFields {
            name: "Joe's".into(),
            has_wifi: true,
            ..Default::default()
        };
        assert_eq!(fields.value(CafeField::Name), FieldValue::Text("Joe's"));
        assert_eq!(fields.value(CafeField::HasWifi), FieldValue::Flag(true));
        assert_eq!(fields.value(CafeField::HasToilet), FieldValue::Flag(false));
    }

    #[test]
    fn test_cafe_serializes_flat() {
        let cafe = Cafe {
            id: 7,
            fields: CafeFields {
                name: "Joe's".into(),
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&cafe).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Joe's");
        assert_eq!(json["has_sockets"], false);
    }
}
