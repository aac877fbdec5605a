use chrono::Utc;

use crate::domain::center::CenterInfo;
use crate::domain::stock::Stock;
use crate::domain::types::CenterId;
use crate::forms::centers::{
    CenterSearchPayload, CreateCenterPayload, DeleteCenterPayload, UpdateCenterPayload,
};
use crate::repository::{CenterInfoReader, CenterInfoWriter, CenterListQuery, StockReader};

use super::{ServiceError, ServiceResult};

/// Core business logic for the center list page.
///
/// Returns every live, operational center. Repository errors are translated
/// into `ServiceError` so that the HTTP route can remain a thin wrapper.
pub fn list_centers<R>(repo: &R) -> ServiceResult<Vec<CenterInfo>>
where
    R: CenterInfoReader,
{
    match repo.search_centers(CenterListQuery::default()) {
        Ok(centers) => Ok(centers),
        Err(e) => {
            log::error!("Failed to list centers: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Conditional search over live, operational centers.
///
/// An inverted capacity range is a business error and never reaches the
/// repository. An empty result set is a success.
pub fn search_centers<R>(payload: CenterSearchPayload, repo: &R) -> ServiceResult<Vec<CenterInfo>>
where
    R: CenterInfoReader,
{
    let from = payload.capacity_from.unwrap_or(i32::MIN);
    let to = payload.capacity_to.unwrap_or(i32::MAX);
    if from > to {
        return Err(ServiceError::Business(
            "capacity range start must not exceed capacity range end".to_string(),
        ));
    }

    match repo.search_centers(payload.into_list_query()) {
        Ok(centers) => Ok(centers),
        Err(e) => {
            log::error!("Failed to search centers: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Registers a new center.
///
/// Enforces the capacity ordering invariant, stamps timestamps and returns
/// the stored record including its generated id and initial version.
pub fn create_center<R>(payload: CreateCenterPayload, repo: &R) -> ServiceResult<CenterInfo>
where
    R: CenterInfoWriter,
{
    if payload.current_storage_capacity > payload.max_storage_capacity {
        return Err(ServiceError::Business(
            "current storage capacity must not exceed maximum storage capacity".to_string(),
        ));
    }

    match repo.create_center(&payload.into_new_center_info()) {
        Ok(stored) => {
            log::info!("Created center {} (version {})", stored.id, stored.version);
            Ok(stored)
        }
        Err(e) => {
            log::error!("Failed to create center: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrites the mutable fields of an existing center.
///
/// A stale submitted version is a conflict, distinct from validation and
/// not-found errors; the version increments exactly once on success.
pub fn update_center<R>(payload: UpdateCenterPayload, repo: &R) -> ServiceResult<CenterInfo>
where
    R: CenterInfoReader + CenterInfoWriter,
{
    let stored = match repo.get_center_by_id(payload.center_id) {
        Ok(Some(center)) => center,
        Ok(None) => {
            return Err(ServiceError::NotFound(format!(
                "center {} does not exist",
                payload.center_id
            )));
        }
        Err(e) => {
            log::error!("Failed to get center: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if stored.version != payload.version {
        return Err(ServiceError::Conflict(format!(
            "center {} was modified by another user; re-fetch and retry",
            payload.center_id
        )));
    }

    if payload.current_storage_capacity > payload.max_storage_capacity {
        return Err(ServiceError::Business(
            "current storage capacity must not exceed maximum storage capacity".to_string(),
        ));
    }

    let center_id = payload.center_id;
    let expected_version = payload.version;
    match repo.update_center(center_id, expected_version, &payload.into_center_update()) {
        Ok(Some(updated)) => {
            log::info!("Updated center {center_id} (version {})", updated.version);
            Ok(updated)
        }
        // The row moved between the read above and the write.
        Ok(None) => Err(ServiceError::Conflict(format!(
            "center {center_id} was modified by another user; re-fetch and retry"
        ))),
        Err(e) => {
            log::error!("Failed to update center: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Soft-deletes a center.
///
/// Refused while dependent stock rows exist, even when the version matches.
pub fn delete_center<R>(payload: DeleteCenterPayload, repo: &R) -> ServiceResult<()>
where
    R: CenterInfoReader + CenterInfoWriter + StockReader,
{
    let dependents = match repo.count_stocks_by_center(payload.center_id) {
        Ok(count) => count,
        Err(e) => {
            log::error!("Failed to count stocks: {e}");
            return Err(ServiceError::Internal);
        }
    };
    if dependents > 0 {
        return Err(ServiceError::Business(format!(
            "center {} still owns {dependents} stock records",
            payload.center_id
        )));
    }

    let stored = match repo.get_center_by_id(payload.center_id) {
        Ok(Some(center)) => center,
        Ok(None) => {
            return Err(ServiceError::NotFound(format!(
                "center {} does not exist",
                payload.center_id
            )));
        }
        Err(e) => {
            log::error!("Failed to get center: {e}");
            return Err(ServiceError::Internal);
        }
    };

    if stored.version != payload.version {
        return Err(ServiceError::Conflict(format!(
            "center {} was modified by another user; re-fetch and retry",
            payload.center_id
        )));
    }

    match repo.soft_delete_center(payload.center_id, payload.version, Utc::now().naive_utc()) {
        Ok(0) => Err(ServiceError::Conflict(format!(
            "center {} was modified by another user; re-fetch and retry",
            payload.center_id
        ))),
        Ok(_) => {
            log::info!("Deleted center {}", payload.center_id);
            Ok(())
        }
        Err(e) => {
            log::error!("Failed to delete center: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Lists the stock rows owned by a center.
pub fn list_center_stocks<R>(center_id: i32, repo: &R) -> ServiceResult<Vec<Stock>>
where
    R: CenterInfoReader + StockReader,
{
    let center_id = match CenterId::new(center_id) {
        Ok(center_id) => center_id,
        Err(_) => return Err(ServiceError::NotFound(format!(
            "center {center_id} does not exist"
        ))),
    };

    match repo.get_center_by_id(center_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(ServiceError::NotFound(format!(
                "center {center_id} does not exist"
            )));
        }
        Err(e) => {
            log::error!("Failed to get center: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.list_stocks_by_center(center_id) {
        Ok(stocks) => Ok(stocks),
        Err(e) => {
            log::error!("Failed to list stocks: {e}");
            Err(ServiceError::Internal)
        }
    }
}
