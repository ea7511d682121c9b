use crate::domain::models::reservation::{NewReservation, Reservation, ReservationStatus};
use crate::domain::ports::ReservationRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create_if_free(&self, nueva: &NewReservation) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Two intervals on one date overlap when each starts before the other
        // ends. Rejected rows never block a slot.
        let ocupado: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservas_laboratorio
             WHERE fecha = ? AND hora_inicio < ? AND hora_fin > ? AND estado != 'Rechazada'",
        )
        .bind(&nueva.fecha)
        .bind(&nueva.hora_fin)
        .bind(&nueva.hora_inicio)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        if ocupado > 0 {
            return Err(AppError::Conflict(
                "El horario solicitado ya está ocupado.".to_string(),
            ));
        }

        let creada = sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservas_laboratorio
                 (nombre, registro, ci, celular, email, responsable_actividad,
                  tipo_actividad, objetivo, fecha, hora_inicio, hora_fin, participantes, estado)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&nueva.nombre)
        .bind(&nueva.registro)
        .bind(&nueva.ci)
        .bind(&nueva.celular)
        .bind(&nueva.email)
        .bind(&nueva.responsable_actividad)
        .bind(&nueva.tipo_actividad)
        .bind(&nueva.objetivo)
        .bind(&nueva.fecha)
        .bind(&nueva.hora_inicio)
        .bind(&nueva.hora_fin)
        .bind(nueva.participantes)
        .bind(ReservationStatus::Pendiente)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(creada)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservas_laboratorio WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_public(&self) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservas_laboratorio WHERE estado != 'Rechazada'
             ORDER BY fecha DESC, hora_inicio ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_pending(&self) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservas_laboratorio WHERE estado = 'Pendiente'
             ORDER BY fecha ASC, hora_inicio ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_all(&self) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservas_laboratorio ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn decide(&self, id: i64, estado: ReservationStatus) -> Result<bool, AppError> {
        // A reservation is decided exactly once. Re-processing an already
        // decided row is a no-op.
        let result = sqlx::query(
            "UPDATE reservas_laboratorio SET estado = ? WHERE id = ? AND estado = 'Pendiente'",
        )
        .bind(estado)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }
}
