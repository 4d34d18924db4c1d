use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::not_blank;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub d_no: Uuid,
    pub d_name: String,
    pub dept_hod: String,
}

/// Full department body accepted by POST and PUT.
#[derive(Deserialize, Validate, Debug, Clone)]
pub struct DepartmentInput {
    #[validate(length(max = 100), custom = "not_blank")]
    pub d_name: String,
    #[validate(length(max = 100), custom = "not_blank")]
    pub dept_hod: String,
}

/// Partial department body accepted by PATCH.
#[derive(Deserialize, Validate, Debug, Clone, Default)]
pub struct DepartmentPatch {
    #[validate(length(max = 100), custom = "not_blank")]
    pub d_name: Option<String>,
    #[validate(length(max = 100), custom = "not_blank")]
    pub dept_hod: Option<String>,
}

impl DepartmentInput {
    pub fn into_department(self, d_no: Uuid) -> Department {
        Department {
            d_no,
            d_name: self.d_name,
            dept_hod: self.dept_hod,
        }
    }
}

impl From<DepartmentInput> for DepartmentPatch {
    fn from(input: DepartmentInput) -> Self {
        DepartmentPatch {
            d_name: Some(input.d_name),
            dept_hod: Some(input.dept_hod),
        }
    }
}

impl Department {
    /// Overlays the supplied fields; `d_no` never changes.
    pub fn merge(self, patch: DepartmentPatch) -> Department {
        Department {
            d_no: self.d_no,
            d_name: patch.d_name.unwrap_or(self.d_name),
            dept_hod: patch.dept_hod.unwrap_or(self.dept_hod),
        }
    }
}
