use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::assignments::model::{
    Assignment, AssignmentFilterParams, AssignmentSubmission, CreateAssignmentDto,
    GradeSubmissionDto, SubmitAssignmentDto, UpdateAssignmentDto,
};
use crate::utils::errors::AppError;

const ASSIGNMENT_COLUMNS: &str = "id, course_id, faculty_id, title, description, due_date, \
                                  max_marks, attachments, created_at";
const SUBMISSION_COLUMNS: &str = "id, assignment_id, student_id, submission_text, attachments, \
                                  submitted_at, marks, feedback, graded_at";

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreateAssignmentDto,
        faculty_id: Uuid,
    ) -> Result<Assignment, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(&format!(
            "INSERT INTO assignments
                 (course_id, faculty_id, title, description, due_date, max_marks, attachments)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ASSIGNMENT_COLUMNS}"
        ))
        .bind(dto.course_id)
        .bind(faculty_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.due_date)
        .bind(dto.max_marks)
        .bind(&dto.attachments)
        .fetch_one(db)
        .await
        .context("Failed to create assignment")
        .map_err(AppError::database)?;

        Ok(assignment)
    }

    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        params: &AssignmentFilterParams,
    ) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(&format!(
            "SELECT {ASSIGNMENT_COLUMNS}
             FROM assignments
             WHERE ($1::UUID IS NULL OR course_id = $1)
             ORDER BY due_date DESC"
        ))
        .bind(params.course_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch assignments")
        .map_err(AppError::database)?;

        Ok(assignments)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Uuid) -> Result<Assignment, AppError> {
        sqlx::query_as::<_, Assignment>(&format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM assignments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch assignment")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Assignment not found")))
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        dto: UpdateAssignmentDto,
    ) -> Result<Assignment, AppError> {
        let existing = Self::get(db, id).await?;

        let assignment = sqlx::query_as::<_, Assignment>(&format!(
            "UPDATE assignments
             SET title = $1, description = $2, due_date = $3, max_marks = $4, attachments = $5
             WHERE id = $6
             RETURNING {ASSIGNMENT_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.description.or(existing.description))
        .bind(dto.due_date.unwrap_or(existing.due_date))
        .bind(dto.max_marks.unwrap_or(existing.max_marks))
        .bind(dto.attachments.unwrap_or(existing.attachments))
        .bind(id)
        .fetch_one(db)
        .await
        .context("Failed to update assignment")
        .map_err(AppError::database)?;

        Ok(assignment)
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete assignment")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Assignment not found")));
        }

        Ok(())
    }

    /// Idempotent per (assignment, student): resubmission overwrites the
    /// text and attachments and refreshes the submission time. Any earlier
    /// grade stands until the faculty grades again.
    #[instrument(skip(db, dto))]
    pub async fn submit(
        db: &PgPool,
        assignment_id: Uuid,
        student_id: Uuid,
        dto: SubmitAssignmentDto,
    ) -> Result<AssignmentSubmission, AppError> {
        // Resolve the assignment first so a bad id is a 404, not an FK error.
        Self::get(db, assignment_id).await?;

        let submission = sqlx::query_as::<_, AssignmentSubmission>(&format!(
            "INSERT INTO assignment_submissions
                 (assignment_id, student_id, submission_text, attachments)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (assignment_id, student_id)
             DO UPDATE SET submission_text = EXCLUDED.submission_text,
                           attachments = EXCLUDED.attachments,
                           submitted_at = NOW()
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(assignment_id)
        .bind(student_id)
        .bind(&dto.submission_text)
        .bind(&dto.attachments)
        .fetch_one(db)
        .await
        .context("Failed to submit assignment")
        .map_err(AppError::database)?;

        Ok(submission)
    }

    #[instrument(skip(db))]
    pub async fn list_submissions(
        db: &PgPool,
        assignment_id: Uuid,
    ) -> Result<Vec<AssignmentSubmission>, AppError> {
        let submissions = sqlx::query_as::<_, AssignmentSubmission>(&format!(
            "SELECT {SUBMISSION_COLUMNS}
             FROM assignment_submissions
             WHERE assignment_id = $1
             ORDER BY submitted_at DESC"
        ))
        .bind(assignment_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch submissions")
        .map_err(AppError::database)?;

        Ok(submissions)
    }

    /// Second phase of the lifecycle. Grading an id with no submission
    /// yields NotFound; there is nothing to grade before a submission
    /// exists.
    #[instrument(skip(db, dto))]
    pub async fn grade_submission(
        db: &PgPool,
        submission_id: Uuid,
        dto: GradeSubmissionDto,
    ) -> Result<AssignmentSubmission, AppError> {
        sqlx::query_as::<_, AssignmentSubmission>(&format!(
            "UPDATE assignment_submissions
             SET marks = $1, feedback = $2, graded_at = NOW()
             WHERE id = $3
             RETURNING {SUBMISSION_COLUMNS}"
        ))
        .bind(dto.marks)
        .bind(&dto.feedback)
        .bind(submission_id)
        .fetch_optional(db)
        .await
        .context("Failed to grade submission")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Submission not found")))
    }
}
