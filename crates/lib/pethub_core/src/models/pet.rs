//! Pet domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A pet record as stored and served.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub species: String,
    pub breed: String,
}

/// The replaceable fields of a pet document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetFields {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub species: String,
    pub breed: String,
}

/// Sparse equality filter over pet fields. Absent fields impose no
/// constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetFilter {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub species: Option<String>,
    pub breed: Option<String>,
}

impl PetFilter {
    /// Build the containment filter document. Only present fields
    /// constrain the match; values compare by exact equality, not
    /// substring.
    pub fn to_doc(&self) -> Value {
        let mut doc = Map::new();
        if let Some(id) = self.id {
            doc.insert("id".into(), json!(id));
        }
        if let Some(name) = &self.name {
            doc.insert("name".into(), json!(name));
        }
        if let Some(age) = self.age {
            doc.insert("age".into(), json!(age));
        }
        if let Some(gender) = &self.gender {
            doc.insert("gender".into(), json!(gender));
        }
        if let Some(species) = &self.species {
            doc.insert("species".into(), json!(species));
        }
        if let Some(breed) = &self.breed {
            doc.insert("breed".into(), json!(breed));
        }
        Value::Object(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_builds_empty_doc() {
        assert_eq!(PetFilter::default().to_doc(), json!({}));
    }

    #[test]
    fn present_fields_constrain_the_match() {
        let filter = PetFilter {
            species: Some("cat".into()),
            age: Some(3),
            ..Default::default()
        };
        assert_eq!(filter.to_doc(), json!({"species": "cat", "age": 3}));
    }

    #[test]
    fn pet_serializes_with_wire_field_names() {
        let pet = Pet {
            id: 7,
            name: "Murka".into(),
            age: 2,
            gender: "female".into(),
            species: "cat".into(),
            breed: "siberian".into(),
        };
        let doc = serde_json::to_value(&pet).expect("serialize");
        assert_eq!(
            doc,
            json!({
                "id": 7,
                "name": "Murka",
                "age": 2,
                "gender": "female",
                "species": "cat",
                "breed": "siberian",
            })
        );
    }

    #[test]
    fn fields_doc_never_touches_the_pet_id() {
        let fields = PetFields {
            name: "Rex".into(),
            age: 4,
            gender: "male".into(),
            species: "dog".into(),
            breed: "labrador".into(),
        };
        let doc = serde_json::to_value(&fields).expect("serialize");
        assert!(doc.get("id").is_none());
    }
}
