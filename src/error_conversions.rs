//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so
//! the cross-layer `From` impls live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::centers::{
    CenterSearchFormError, CreateCenterFormError, DeleteCenterFormError, UpdateCenterFormError,
};
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Validation(val.to_string())
    }
}

impl From<CenterSearchFormError> for ServiceError {
    fn from(val: CenterSearchFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<CreateCenterFormError> for ServiceError {
    fn from(val: CreateCenterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<UpdateCenterFormError> for ServiceError {
    fn from(val: UpdateCenterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<DeleteCenterFormError> for ServiceError {
    fn from(val: DeleteCenterFormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}
