use parcel_core::db::open_db_in_memory;
use parcel_core::{ParcelService, ParcelStatus, ParcelStore, ServiceError, SqliteParcelStore};

#[test]
fn register_stores_registered_parcel_with_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let parcel = service.register(1000, "  Main St 1 ").unwrap();
    assert!(parcel.number > 0);
    assert_eq!(parcel.status, ParcelStatus::Registered);
    assert_eq!(parcel.address, "Main St 1");
    assert!(chrono::DateTime::parse_from_rfc3339(&parcel.created_at).is_ok());

    let stored = SqliteParcelStore::new(&conn).get(parcel.number).unwrap();
    assert_eq!(stored, parcel);
}

#[test]
fn register_rejects_blank_address() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let err = service.register(1, "   ").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidAddress));
    assert!(service.client_parcels(1).unwrap().is_empty());
}

#[test]
fn next_status_walks_lifecycle_then_stops() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));
    let parcel = service.register(5, "Depot road").unwrap();

    assert_eq!(service.next_status(parcel.number).unwrap(), ParcelStatus::Sent);
    assert_eq!(
        service.next_status(parcel.number).unwrap(),
        ParcelStatus::Delivered
    );

    let err = service.next_status(parcel.number).unwrap_err();
    assert!(matches!(err, ServiceError::FinalStatus(number) if number == parcel.number));
    assert_eq!(
        service.parcel(parcel.number).unwrap().status,
        ParcelStatus::Delivered
    );
}

#[test]
fn next_status_on_missing_parcel_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let err = service.next_status(77).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(77)));
}

#[test]
fn change_address_and_delete_only_apply_while_registered() {
    let conn = open_db_in_memory().unwrap();
    let service = ParcelService::new(SqliteParcelStore::new(&conn));

    let editable = service.register(9, "Old street").unwrap();
    service.change_address(editable.number, "New street").unwrap();
    assert_eq!(
        service.parcel(editable.number).unwrap().address,
        "New street"
    );
    service.delete(editable.number).unwrap();
    assert!(matches!(
        service.parcel(editable.number),
        Err(ServiceError::NotFound(_))
    ));

    let shipped = service.register(9, "Fixed street").unwrap();
    service.next_status(shipped.number).unwrap();
    service.change_address(shipped.number, "Ignored street").unwrap();
    service.delete(shipped.number).unwrap();

    let kept = service.parcel(shipped.number).unwrap();
    assert_eq!(kept.address, "Fixed street");
    assert_eq!(kept.status, ParcelStatus::Sent);
    assert_eq!(service.client_parcels(9).unwrap(), vec![kept]);
}
