use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::utils::validation::not_blank;

pub const PINCODE_MAX_LEN: usize = 10;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub e_no: Uuid,
    pub e_name: String,
    pub salary: f64,
    pub d_no: Uuid,
    pub mgr_no: Option<Uuid>,
    pub date_of_join: NaiveDate,
    pub designation: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub pincode: Option<String>,
}

/// Full employee body accepted by POST and PUT.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct EmployeeInput {
    #[validate(length(max = 100), custom = "not_blank")]
    pub e_name: String,
    #[validate(range(min = 0.0))]
    pub salary: f64,
    pub d_no: Uuid,
    #[serde(default)]
    pub mgr_no: Option<Uuid>,
    pub date_of_join: NaiveDate,
    #[validate(length(max = 100), custom = "not_blank")]
    pub designation: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(max = 10))]
    pub pincode: Option<String>,
}

/// Partial employee body accepted by PATCH.
///
/// Nullable columns use `Option<Option<_>>`: an absent key keeps the stored
/// value, an explicit `null` clears it.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
#[validate(schema(function = "validate_patch_pincode"))]
pub struct EmployeePatch {
    #[validate(length(max = 100), custom = "not_blank")]
    pub e_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub salary: Option<f64>,
    pub d_no: Option<Uuid>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub mgr_no: Option<Option<Uuid>>,
    pub date_of_join: Option<NaiveDate>,
    #[validate(length(max = 100), custom = "not_blank")]
    pub designation: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub city: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub pincode: Option<Option<String>>,
}

fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

fn validate_patch_pincode(patch: &EmployeePatch) -> Result<(), ValidationError> {
    match &patch.pincode {
        Some(Some(pincode)) if pincode.chars().count() > PINCODE_MAX_LEN => {
            Err(ValidationError::new("pincode is too long"))
        }
        _ => Ok(()),
    }
}

impl EmployeeInput {
    pub fn into_employee(self, e_no: Uuid) -> Employee {
        Employee {
            e_no,
            e_name: self.e_name,
            salary: self.salary,
            d_no: self.d_no,
            mgr_no: self.mgr_no,
            date_of_join: self.date_of_join,
            designation: self.designation,
            address: self.address,
            city: self.city,
            pincode: self.pincode,
        }
    }
}

impl From<EmployeeInput> for EmployeePatch {
    fn from(input: EmployeeInput) -> Self {
        EmployeePatch {
            e_name: Some(input.e_name),
            salary: Some(input.salary),
            d_no: Some(input.d_no),
            mgr_no: Some(input.mgr_no),
            date_of_join: Some(input.date_of_join),
            designation: Some(input.designation),
            address: Some(input.address),
            city: Some(input.city),
            pincode: Some(input.pincode),
        }
    }
}

impl Employee {
    /// Overlays the supplied fields; `e_no` never changes.
    pub fn merge(self, patch: EmployeePatch) -> Employee {
        Employee {
            e_no: self.e_no,
            e_name: patch.e_name.unwrap_or(self.e_name),
            salary: patch.salary.unwrap_or(self.salary),
            d_no: patch.d_no.unwrap_or(self.d_no),
            mgr_no: patch.mgr_no.unwrap_or(self.mgr_no),
            date_of_join: patch.date_of_join.unwrap_or(self.date_of_join),
            designation: patch.designation.unwrap_or(self.designation),
            address: patch.address.unwrap_or(self.address),
            city: patch.city.unwrap_or(self.city),
            pincode: patch.pincode.unwrap_or(self.pincode),
        }
    }
}
