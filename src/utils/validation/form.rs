//! Form aggregation: a form is valid iff every one of its fields is.

use serde::{Deserialize, Serialize};

use crate::utils::validation::field::Field;
use crate::utils::validation::verdict::Verdict;

/// An ordered collection of fields checked together on submit.
/// Nothing here outlives a single check; the report is recomputed from
/// scratch every time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates every field and reports one verdict per field.
    pub fn validate(&self) -> FormReport {
        validate_form(&self.fields)
    }
}

impl FromIterator<Field> for Form {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Per-field verdicts for one submission, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormReport {
    verdicts: Vec<Verdict>,
}

impl FormReport {
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// True iff no field came back invalid.
    pub fn is_valid(&self) -> bool {
        !self.verdicts.iter().any(Verdict::is_invalid)
    }
}

/// Validates every field without short-circuiting, so the caller gets a
/// verdict for each field even when an earlier one has already failed.
pub fn validate_form(fields: &[Field]) -> FormReport {
    FormReport {
        verdicts: fields.iter().map(Field::validate).collect(),
    }
}
