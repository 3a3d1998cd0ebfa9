use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::contact::model::{
    Appointment, ContactMessage, CreateAppointmentDto, CreateContactMessageDto,
};
use crate::utils::errors::AppError;

const CONTACT_COLUMNS: &str = "id, name, email, phone, subject, message, created_at";
const APPOINTMENT_COLUMNS: &str =
    "id, name, email, phone, preferred_date, preferred_time, purpose, created_at";

pub struct ContactService;

impl ContactService {
    #[instrument(skip(db, dto))]
    pub async fn create_message(
        db: &PgPool,
        dto: CreateContactMessageDto,
    ) -> Result<ContactMessage, AppError> {
        let message = sqlx::query_as::<_, ContactMessage>(&format!(
            "INSERT INTO contact_messages (name, email, phone, subject, message)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.subject)
        .bind(&dto.message)
        .fetch_one(db)
        .await
        .context("Failed to save contact message")
        .map_err(AppError::database)?;

        Ok(message)
    }

    #[instrument(skip(db))]
    pub async fn list_messages(db: &PgPool) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_messages ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch contact messages")
        .map_err(AppError::database)?;

        Ok(messages)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_appointment(
        db: &PgPool,
        dto: CreateAppointmentDto,
    ) -> Result<Appointment, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            "INSERT INTO appointments
                 (name, email, phone, preferred_date, preferred_time, purpose)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.preferred_date)
        .bind(&dto.preferred_time)
        .bind(&dto.purpose)
        .fetch_one(db)
        .await
        .context("Failed to save appointment")
        .map_err(AppError::database)?;

        Ok(appointment)
    }

    #[instrument(skip(db))]
    pub async fn list_appointments(db: &PgPool) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY preferred_date"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch appointments")
        .map_err(AppError::database)?;

        Ok(appointments)
    }
}
