use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::center::{CenterInfoUpdate, NewCenterInfo};
use crate::domain::types::{
    Address, CenterId, CenterName, ManagerName, Notes, PhoneNumber, PostalCode, Region,
    StorageCapacity, TypeConstraintError, Version, contains_forbidden_character,
};
use crate::repository::CenterListQuery;

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Search filters accepted by the center list endpoints.
#[derive(Debug, Deserialize, Validate)]
pub struct CenterSearchForm {
    #[validate(length(max = 20))]
    pub center_name: Option<String>,
    pub region: Option<String>,
    pub capacity_from: Option<i32>,
    pub capacity_to: Option<i32>,
}

/// Validated search filters.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterSearchPayload {
    pub name: Option<String>,
    pub region: Option<String>,
    pub capacity_from: Option<i32>,
    pub capacity_to: Option<i32>,
}

impl CenterSearchPayload {
    pub fn into_list_query(self) -> CenterListQuery {
        CenterListQuery {
            name: self.name,
            region: self.region,
            capacity_from: self.capacity_from,
            capacity_to: self.capacity_to,
        }
    }
}

#[derive(Debug, Error)]
pub enum CenterSearchFormError {
    #[error("search form validation failed: {0}")]
    Validation(String),
    #[error("search form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CenterSearchFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CenterSearchFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CenterSearchForm> for CenterSearchPayload {
    type Error = CenterSearchFormError;

    fn try_from(value: CenterSearchForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let name = normalize_optional(value.center_name);
        let region = normalize_optional(value.region);

        if name.is_none()
            && region.is_none()
            && value.capacity_from.is_none()
            && value.capacity_to.is_none()
        {
            return Err(TypeConstraintError::InvalidValue(
                "at least one search filter must be provided".to_string(),
            )
            .into());
        }

        if let Some(name) = &name {
            if contains_forbidden_character(name) {
                return Err(TypeConstraintError::ForbiddenCharacter("center name").into());
            }
        }

        if let Some(region) = &region {
            if !Region::is_known(region) {
                return Err(TypeConstraintError::UnknownRegion(region.clone()).into());
            }
        }

        if let (Some(from), Some(to)) = (value.capacity_from, value.capacity_to) {
            if from > to {
                return Err(TypeConstraintError::InvalidValue(
                    "capacity range start must not exceed capacity range end".to_string(),
                )
                .into());
            }
        }

        Ok(Self {
            name,
            region,
            capacity_from: value.capacity_from,
            capacity_to: value.capacity_to,
        })
    }
}

/// Fields accepted when registering a new center.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCenterForm {
    #[validate(length(min = 1, max = 20))]
    pub center_name: String,
    #[validate(length(min = 1))]
    pub post_code: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 10, max = 13))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 40))]
    pub manager_name: String,
    #[validate(range(min = 0))]
    pub max_storage_capacity: i32,
    #[validate(range(min = 0))]
    pub current_storage_capacity: i32,
    #[validate(length(max = 200))]
    pub notes: Option<String>,
}

/// Validated input for creating a center.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCenterPayload {
    pub name: CenterName,
    pub postal_code: PostalCode,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub manager_name: ManagerName,
    pub max_storage_capacity: StorageCapacity,
    pub current_storage_capacity: StorageCapacity,
    pub notes: Option<Notes>,
}

impl CreateCenterPayload {
    pub fn into_new_center_info(self) -> NewCenterInfo {
        let now = Utc::now().naive_utc();
        NewCenterInfo {
            name: self.name,
            postal_code: self.postal_code,
            address: self.address,
            phone_number: self.phone_number,
            manager_name: self.manager_name,
            max_storage_capacity: self.max_storage_capacity,
            current_storage_capacity: self.current_storage_capacity,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum CreateCenterFormError {
    #[error("create center form validation failed: {0}")]
    Validation(String),
    #[error("create center form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateCenterFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CreateCenterFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateCenterForm> for CreateCenterPayload {
    type Error = CreateCenterFormError;

    fn try_from(value: CreateCenterForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: CenterName::new(value.center_name)?,
            postal_code: PostalCode::new(value.post_code)?,
            address: Address::new(value.address)?,
            phone_number: PhoneNumber::new(value.phone_number)?,
            manager_name: ManagerName::new(value.manager_name)?,
            max_storage_capacity: StorageCapacity::new(value.max_storage_capacity)?,
            current_storage_capacity: StorageCapacity::new(value.current_storage_capacity)?,
            notes: normalize_optional(value.notes).map(Notes::new).transpose()?,
        })
    }
}

/// Fields accepted when updating an existing center.
///
/// Carries the id and the version the caller last saw; the version drives
/// the optimistic-lock comparison.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCenterForm {
    #[validate(range(min = 1))]
    pub center_id: i32,
    #[validate(range(min = 0))]
    pub version: i64,
    #[validate(length(min = 1, max = 20))]
    pub center_name: String,
    #[validate(length(min = 1))]
    pub post_code: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 10, max = 13))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 40))]
    pub manager_name: String,
    #[validate(range(min = 0))]
    pub max_storage_capacity: i32,
    #[validate(range(min = 0))]
    pub current_storage_capacity: i32,
    #[validate(length(max = 200))]
    pub notes: Option<String>,
}

/// Validated input for updating a center.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCenterPayload {
    pub center_id: CenterId,
    pub version: Version,
    pub name: CenterName,
    pub postal_code: PostalCode,
    pub address: Address,
    pub phone_number: PhoneNumber,
    pub manager_name: ManagerName,
    pub max_storage_capacity: StorageCapacity,
    pub current_storage_capacity: StorageCapacity,
    pub notes: Option<Notes>,
}

impl UpdateCenterPayload {
    pub fn into_center_update(self) -> CenterInfoUpdate {
        CenterInfoUpdate {
            name: self.name,
            postal_code: self.postal_code,
            address: self.address,
            phone_number: self.phone_number,
            manager_name: self.manager_name,
            max_storage_capacity: self.max_storage_capacity,
            current_storage_capacity: self.current_storage_capacity,
            notes: self.notes,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateCenterFormError {
    #[error("update center form validation failed: {0}")]
    Validation(String),
    #[error("update center form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateCenterFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateCenterFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateCenterForm> for UpdateCenterPayload {
    type Error = UpdateCenterFormError;

    fn try_from(value: UpdateCenterForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            center_id: CenterId::new(value.center_id)?,
            version: Version::new(value.version)?,
            name: CenterName::new(value.center_name)?,
            postal_code: PostalCode::new(value.post_code)?,
            address: Address::new(value.address)?,
            phone_number: PhoneNumber::new(value.phone_number)?,
            manager_name: ManagerName::new(value.manager_name)?,
            max_storage_capacity: StorageCapacity::new(value.max_storage_capacity)?,
            current_storage_capacity: StorageCapacity::new(value.current_storage_capacity)?,
            notes: normalize_optional(value.notes).map(Notes::new).transpose()?,
        })
    }
}

/// Query parameters accompanying a delete request.
#[derive(Debug, Deserialize, Validate)]
pub struct DeleteCenterForm {
    #[validate(range(min = 0))]
    pub version: i64,
}

/// Validated input for deleting a center.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCenterPayload {
    pub center_id: CenterId,
    pub version: Version,
}

#[derive(Debug, Error)]
pub enum DeleteCenterFormError {
    #[error("delete center form validation failed: {0}")]
    Validation(String),
    #[error("delete center form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for DeleteCenterFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for DeleteCenterFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl DeleteCenterPayload {
    /// Combines the path id with the validated query form.
    pub fn from_parts(
        center_id: i32,
        form: DeleteCenterForm,
    ) -> Result<Self, DeleteCenterFormError> {
        form.validate()?;
        Ok(Self {
            center_id: CenterId::new(center_id)?,
            version: Version::new(form.version)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_search_form() -> CenterSearchForm {
        CenterSearchForm {
            center_name: None,
            region: None,
            capacity_from: None,
            capacity_to: None,
        }
    }

    #[test]
    fn search_rejects_all_empty_filters() {
        let payload: Result<CenterSearchPayload, _> = empty_search_form().try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn search_treats_blank_strings_as_absent() {
        let form = CenterSearchForm {
            center_name: Some("   ".to_string()),
            region: Some(String::new()),
            ..empty_search_form()
        };
        let payload: Result<CenterSearchPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn search_rejects_forbidden_characters_in_name() {
        let form = CenterSearchForm {
            center_name: Some("North%".to_string()),
            ..empty_search_form()
        };
        let payload: Result<CenterSearchPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn search_rejects_unknown_regions() {
        let form = CenterSearchForm {
            region: Some("Atlantis".to_string()),
            ..empty_search_form()
        };
        let payload: Result<CenterSearchPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn search_rejects_inverted_capacity_range() {
        let form = CenterSearchForm {
            capacity_from: Some(500),
            capacity_to: Some(100),
            ..empty_search_form()
        };
        let payload: Result<CenterSearchPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn search_accepts_a_single_filter() {
        let form = CenterSearchForm {
            center_name: Some(" North ".to_string()),
            ..empty_search_form()
        };
        let payload: CenterSearchPayload = form.try_into().unwrap();
        assert_eq!(payload.name.as_deref(), Some("North"));
        assert_eq!(payload.region, None);
    }

    fn sample_create_form() -> CreateCenterForm {
        CreateCenterForm {
            center_name: "North Hub".to_string(),
            post_code: "123-4567".to_string(),
            address: "1-2-3 Chiyoda, Tokyo".to_string(),
            phone_number: "03-1234-5678".to_string(),
            manager_name: "Aoi Tanaka".to_string(),
            max_storage_capacity: 500,
            current_storage_capacity: 120,
            notes: None,
        }
    }

    #[test]
    fn create_form_converts_to_typed_payload() {
        let payload: CreateCenterPayload = sample_create_form().try_into().unwrap();
        assert_eq!(payload.name.as_str(), "North Hub");
        assert_eq!(payload.max_storage_capacity.get(), 500);

        let new_center = payload.into_new_center_info();
        assert_eq!(new_center.created_at, new_center.updated_at);
    }

    #[test]
    fn create_form_rejects_bad_phone_numbers() {
        let form = CreateCenterForm {
            phone_number: "03-12x4-5678".to_string(),
            ..sample_create_form()
        };
        let payload: Result<CreateCenterPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn create_form_drops_blank_notes() {
        let form = CreateCenterForm {
            notes: Some("  ".to_string()),
            ..sample_create_form()
        };
        let payload: CreateCenterPayload = form.try_into().unwrap();
        assert_eq!(payload.notes, None);
    }

    #[test]
    fn delete_payload_validates_both_parts() {
        assert!(DeleteCenterPayload::from_parts(1, DeleteCenterForm { version: 0 }).is_ok());
        assert!(DeleteCenterPayload::from_parts(0, DeleteCenterForm { version: 0 }).is_err());
        assert!(DeleteCenterPayload::from_parts(1, DeleteCenterForm { version: -1 }).is_err());
    }
}
