use crate::domain::models::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Inserts the reservation only if no non-rejected reservation on the
    /// same date overlaps its time window. The check and the insert run in
    /// one transaction so two concurrent submissions cannot both pass.
    async fn create_if_free(&self, nueva: &NewReservation) -> Result<Reservation, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError>;
    /// Non-rejected reservations for the public calendar, newest date first,
    /// earliest start time first within a date.
    async fn list_public(&self) -> Result<Vec<Reservation>, AppError>;
    async fn list_pending(&self) -> Result<Vec<Reservation>, AppError>;
    /// Every row regardless of estado, for the CSV report.
    async fn list_all(&self) -> Result<Vec<Reservation>, AppError>;
    /// Applies the director's decision. Only a row still in `Pendiente` is
    /// updated; returns whether anything changed.
    async fn decide(&self, id: i64, estado: ReservationStatus) -> Result<bool, AppError>;
}
