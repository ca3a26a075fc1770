use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldErrors, ValidatedInput};

/// A collection record as served by the backend.
///
/// The timestamps come along on the wire but the admin table does not display
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    pub rack_id: i64,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// The editable fields of the add/update forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionField {
    Name,
    RackId,
    Description,
}

/// Input buffer for creating or updating a collection.
///
/// All fields are kept as raw strings: this is exactly what the form inputs
/// hold, and the backend casts on its side.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CollectionDto {
    pub name: String,
    pub rack_id: String,
    pub description: String,
}

impl CollectionDto {
    pub fn set_field(&mut self, field: CollectionField, value: String) {
        match field {
            CollectionField::Name => self.name = value,
            CollectionField::RackId => self.rack_id = value,
            CollectionField::Description => self.description = value,
        }
    }
}

impl From<&Collection> for CollectionDto {
    fn from(c: &Collection) -> Self {
        Self {
            name: c.name.clone(),
            rack_id: c.rack_id.to_string(),
            description: c.description.clone(),
        }
    }
}

/// One message per form field; an empty string means the field is valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionFieldErrors {
    pub name: String,
    pub rack_id: String,
    pub description: String,
}

impl FieldErrors for CollectionFieldErrors {
    fn is_clean(&self) -> bool {
        self.name.is_empty() && self.rack_id.is_empty() && self.description.is_empty()
    }
}

impl ValidatedInput for CollectionDto {
    type Errors = CollectionFieldErrors;

    fn validate(&self) -> CollectionFieldErrors {
        let mut errors = CollectionFieldErrors::default();

        if self.name.is_empty() {
            errors.name = "name is required".to_string();
        } else if self.name.chars().count() < 4 {
            errors.name = "The name must be at least 4 characters".to_string();
        }

        if self.rack_id.is_empty() {
            errors.rack_id = "racks id is required".to_string();
        }

        if self.description.is_empty() {
            errors.description = "description is required".to_string();
        } else if self.description.chars().count() < 4 {
            errors.description = "The description must be at least 4 characters".to_string();
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CollectionDto {
        CollectionDto {
            name: "Ammonites".to_string(),
            rack_id: "2".to_string(),
            description: "Jurassic ammonites, drawer set A".to_string(),
        }
    }

    #[test]
    fn test_valid_input_is_clean() {
        assert!(filled().validate().is_clean());
    }

    #[test]
    fn test_name_rules() {
        let mut dto = filled();
        dto.name = String::new();
        assert_eq!(dto.validate().name, "name is required");

        dto.name = "abc".to_string();
        assert_eq!(dto.validate().name, "The name must be at least 4 characters");

        dto.name = "abcd".to_string();
        assert_eq!(dto.validate().name, "");
    }

    #[test]
    fn test_rack_id_required() {
        let mut dto = filled();
        dto.rack_id = String::new();
        let errors = dto.validate();
        assert_eq!(errors.rack_id, "racks id is required");
        assert!(!errors.is_clean());
    }

    #[test]
    fn test_description_rules() {
        let mut dto = filled();
        dto.description = String::new();
        assert_eq!(dto.validate().description, "description is required");

        dto.description = "abc".to_string();
        assert_eq!(
            dto.validate().description,
            "The description must be at least 4 characters"
        );
    }

    #[test]
    fn test_set_field() {
        let mut dto = CollectionDto::default();
        dto.set_field(CollectionField::Name, "Trilobites".to_string());
        dto.set_field(CollectionField::RackId, "7".to_string());
        dto.set_field(CollectionField::Description, "Cambrian finds".to_string());
        assert_eq!(dto.name, "Trilobites");
        assert_eq!(dto.rack_id, "7");
        assert_eq!(dto.description, "Cambrian finds");
    }

    #[test]
    fn test_dto_from_record() {
        let record = Collection {
            id: 3,
            name: "Corals".to_string(),
            rack_id: 5,
            description: "Devonian corals".to_string(),
            created_at: None,
            updated_at: None,
        };
        let dto = CollectionDto::from(&record);
        assert_eq!(dto.name, "Corals");
        assert_eq!(dto.rack_id, "5");
        assert_eq!(dto.description, "Devonian corals");
    }
}
