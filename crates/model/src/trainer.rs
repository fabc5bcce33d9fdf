use bson::{ser, to_document, Document};
use serde::{Deserialize, Serialize};

/// A trainer record. Field order is the wire order.
///
/// Trainers carry no surrogate id; a record is identified by the full
/// field set, so two field-identical trainers cannot be told apart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Trainer {
    pub name: String,
    pub age: u32,
    pub city: String,
}

impl Trainer {
    pub fn new(name: impl Into<String>, age: u32, city: impl Into<String>) -> Trainer {
        Trainer {
            name: name.into(),
            age,
            city: city.into(),
        }
    }

    /// The lookup document matching exactly this record.
    pub fn filter(&self) -> Result<Document, ser::Error> {
        to_document(self)
    }
}
