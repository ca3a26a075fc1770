/// Field-level validation for form input DTOs.
///
/// Every form input produces an error buffer with one human-readable message
/// per field; an empty string means the field is valid. The confirmation gate
/// of a form session only opens when the whole buffer is clean.
pub trait FieldErrors {
    /// True when every field message is empty.
    fn is_clean(&self) -> bool;
}

/// Implemented by input DTOs that can recompute their error buffer.
pub trait ValidatedInput: Clone + Default {
    type Errors: FieldErrors + Clone + Default + std::fmt::Debug;

    fn validate(&self) -> Self::Errors;
}
