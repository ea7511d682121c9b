pub mod sqlite_reservation_repo;
