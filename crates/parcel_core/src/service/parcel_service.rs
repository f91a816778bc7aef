//! Parcel tracking use cases.
//!
//! # Responsibility
//! - Register parcels, list them per client, and walk their status.
//! - Delegate persistence to a `ParcelStore`.
//!
//! # Invariants
//! - Newly registered parcels start as `registered` with a fresh timestamp.
//! - Status only advances along `ParcelStatus::next`.
//! - Address change and delete keep the store's silent no-op semantics.

use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use crate::repo::parcel_repo::{ParcelStore, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for parcel use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Address input is empty after trimming.
    InvalidAddress,
    /// Target parcel does not exist.
    NotFound(ParcelNumber),
    /// Parcel is already delivered and cannot advance.
    FinalStatus(ParcelNumber),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAddress => write!(f, "address cannot be empty"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::FinalStatus(number) => {
                write!(f, "parcel {number} is already delivered")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(number) => Self::NotFound(number),
            other => Self::Repo(other),
        }
    }
}

/// Use-case service wrapper around a parcel store.
pub struct ParcelService<S: ParcelStore> {
    store: S,
}

impl<S: ParcelStore> ParcelService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new parcel for `client` and returns it with its number.
    pub fn register(&self, client: ClientId, address: &str) -> ServiceResult<Parcel> {
        let address = normalize_address(address)?;
        let mut parcel = Parcel::new(client, address);
        parcel.number = self.store.add(&parcel)?;

        info!(
            "event=parcel_register module=service status=ok number={} client={}",
            parcel.number, parcel.client
        );
        Ok(parcel)
    }

    /// Gets one parcel by number.
    pub fn parcel(&self, number: ParcelNumber) -> ServiceResult<Parcel> {
        Ok(self.store.get(number)?)
    }

    /// Lists parcels owned by `client`, in no particular order.
    pub fn client_parcels(&self, client: ClientId) -> ServiceResult<Vec<Parcel>> {
        let parcels = self.store.get_by_client(client)?;
        debug!(
            "event=parcel_list module=service status=ok client={} count={}",
            client,
            parcels.len()
        );
        Ok(parcels)
    }

    /// Advances a parcel to its next status and returns that status.
    ///
    /// # Errors
    /// - `NotFound` when the parcel does not exist.
    /// - `FinalStatus` when the parcel is already delivered.
    pub fn next_status(&self, number: ParcelNumber) -> ServiceResult<ParcelStatus> {
        let parcel = self.store.get(number)?;
        let next = parcel
            .status
            .next()
            .ok_or(ServiceError::FinalStatus(number))?;
        self.store.set_status(number, next)?;

        info!(
            "event=parcel_status module=service status=ok number={} from={} to={}",
            number, parcel.status, next
        );
        Ok(next)
    }

    /// Changes the address of a parcel that is still `registered`.
    ///
    /// A parcel in any other status, or a missing one, is left untouched
    /// without error.
    pub fn change_address(&self, number: ParcelNumber, address: &str) -> ServiceResult<()> {
        let address = normalize_address(address)?;
        self.store.set_address(number, address)?;
        debug!("event=parcel_address module=service status=ok number={number}");
        Ok(())
    }

    /// Deletes a parcel that is still `registered`.
    ///
    /// Same silent no-op semantics as `change_address`.
    pub fn delete(&self, number: ParcelNumber) -> ServiceResult<()> {
        self.store.delete(number)?;
        debug!("event=parcel_delete module=service status=ok number={number}");
        Ok(())
    }
}

fn normalize_address(address: &str) -> ServiceResult<&str> {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidAddress);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::normalize_address;

    #[test]
    fn normalize_address_trims_and_rejects_blank() {
        assert_eq!(normalize_address("  Main St 1 ").unwrap(), "Main St 1");
        assert!(normalize_address(" \t ").is_err());
    }
}
