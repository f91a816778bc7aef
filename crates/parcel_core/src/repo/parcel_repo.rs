//! Parcel store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide add/get/list/update/delete over the `parcel` table.
//! - Map rows back into `Parcel` values.
//!
//! # Invariants
//! - Each operation issues exactly one SQL statement.
//! - `set_address` and `delete` only touch rows whose status is `registered`.
//! - Mutations matching zero rows succeed silently.
//! - Driver errors are carried unchanged inside `RepoError::Db`.

use crate::db::DbError;
use crate::model::parcel::{ClientId, Parcel, ParcelNumber, ParcelStatus};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARCEL_SELECT_SQL: &str = "SELECT
    number,
    client,
    status,
    address,
    created_at
FROM parcel";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error returned by parcel store operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(ParcelNumber),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(number) => write!(f, "parcel not found: {number}"),
            Self::InvalidData(message) => write!(f, "invalid persisted parcel data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data access contract for parcels.
pub trait ParcelStore {
    /// Inserts a parcel and returns the storage-assigned number.
    ///
    /// `parcel.number` is ignored.
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber>;

    /// Loads one parcel, failing with `RepoError::NotFound` when absent.
    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel>;

    /// Loads every parcel owned by `client`, in no particular order.
    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>>;

    /// Overwrites the status regardless of its current value.
    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()>;

    /// Changes the address of a `registered` parcel; other parcels are left as is.
    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()>;

    /// Removes a `registered` parcel; other parcels are left as is.
    fn delete(&self, number: ParcelNumber) -> RepoResult<()>;
}

/// SQLite-backed parcel store over a caller-owned connection.
pub struct SqliteParcelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteParcelStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ParcelStore for SqliteParcelStore<'_> {
    fn add(&self, parcel: &Parcel) -> RepoResult<ParcelNumber> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                parcel.client,
                parcel.status.as_str(),
                parcel.address.as_str(),
                parcel.created_at.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn get(&self, number: ParcelNumber) -> RepoResult<Parcel> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE number = ?1;"))?;

        let parcel = stmt.query_row([number], read_parcel_row).optional()?;

        match parcel {
            Some(parcel) => parse_parcel_row(parcel),
            None => Err(RepoError::NotFound(number)),
        }
    }

    fn get_by_client(&self, client: ClientId) -> RepoResult<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PARCEL_SELECT_SQL} WHERE client = ?1;"))?;
        let mut rows = stmt.query([client])?;
        let mut parcels = Vec::new();

        while let Some(row) = rows.next()? {
            parcels.push(parse_parcel_row(read_parcel_row(row)?)?);
        }

        Ok(parcels)
    }

    fn set_status(&self, number: ParcelNumber, status: ParcelStatus) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2;",
            params![status.as_str(), number],
        )?;

        Ok(())
    }

    fn set_address(&self, number: ParcelNumber, address: &str) -> RepoResult<()> {
        self.conn.execute(
            "UPDATE parcel
             SET address = ?1
             WHERE number = ?2 AND status = ?3;",
            params![address, number, ParcelStatus::Registered.as_str()],
        )?;

        Ok(())
    }

    fn delete(&self, number: ParcelNumber) -> RepoResult<()> {
        self.conn.execute(
            "DELETE FROM parcel WHERE number = ?1 AND status = ?2;",
            params![number, ParcelStatus::Registered.as_str()],
        )?;

        Ok(())
    }
}

/// Raw column values before status text is validated.
struct ParcelRow {
    number: ParcelNumber,
    client: ClientId,
    status: String,
    address: String,
    created_at: String,
}

fn read_parcel_row(row: &Row<'_>) -> rusqlite::Result<ParcelRow> {
    Ok(ParcelRow {
        number: row.get("number")?,
        client: row.get("client")?,
        status: row.get("status")?,
        address: row.get("address")?,
        created_at: row.get("created_at")?,
    })
}

fn parse_parcel_row(row: ParcelRow) -> RepoResult<Parcel> {
    let status = ParcelStatus::parse(&row.status).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid status `{}` in parcel.status for number {}",
            row.status, row.number
        ))
    })?;

    Ok(Parcel {
        number: row.number,
        client: row.client,
        status,
        address: row.address,
        created_at: row.created_at,
    })
}
