use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Column holding the class a student belongs to.
pub const CLASS_COLUMN: &str = "student_class";
/// Column holding the student's age.
pub const AGE_COLUMN: &str = "student_age";
/// Column holding the student's name.
pub const NAME_COLUMN: &str = "student_name";

/// The fixed column layout shared by the backing file and the export.
pub const COLUMNS: [&str; 3] = [CLASS_COLUMN, AGE_COLUMN, NAME_COLUMN];

/// A single row of the student table.
///
/// The name acts as the identifier for edits and deletions, but nothing
/// prevents two records from sharing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "student_class")]
    pub class: String,
    /// Not range-checked here; whole-number floats such as `12.0` are
    /// accepted when reading.
    #[serde(rename = "student_age", deserialize_with = "deserialize_age")]
    pub age: i64,
    #[serde(rename = "student_name")]
    pub name: String,
}

impl StudentRecord {
    /// Builds a record from its three fields.
    pub fn new(class: impl Into<String>, age: i64, name: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            age,
            name: name.into(),
        }
    }

    /// Returns `true` when the lowercased keyword occurs in the name or class.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.name.to_lowercase().contains(&keyword) || self.class.to_lowercase().contains(&keyword)
    }
}

fn deserialize_age<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AgeCell {
        Whole(i64),
        Float(f64),
    }

    match AgeCell::deserialize(deserializer)? {
        AgeCell::Whole(age) => Ok(age),
        AgeCell::Float(age) if age.is_finite() && age.fract() == 0.0 => Ok(age as i64),
        AgeCell::Float(age) => Err(D::Error::custom(format!(
            "age {age} is not a whole number"
        ))),
    }
}
