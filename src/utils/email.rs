use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::instrument;

use crate::config::email::EmailConfig;
use crate::modules::contact::model::{Appointment, ContactMessage};
use crate::modules::enrollments::model::Enrollment;
use crate::utils::errors::AppError;

/// Sends transactional mail for the public forms: a confirmation to the
/// submitter and a copy to the operations mailbox. Dispatch failures are the
/// caller's to log; form submissions must never fail because SMTP did.
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    #[instrument(skip(self, enrollment))]
    pub async fn send_enrollment_emails(&self, enrollment: &Enrollment) -> Result<(), AppError> {
        let confirmation_html = self.layout(
            "Enrollment Received",
            &format!(
                "<p>Dear <strong>{}</strong>,</p>\
                 <p>Thank you for enrolling <strong>{}</strong> (class {}, {} medium) \
                 in <strong>{}</strong>. Our team will review the application and \
                 contact you on {} shortly.</p>",
                enrollment.parent_name,
                enrollment.student_name,
                enrollment.class,
                enrollment.medium,
                enrollment.course,
                enrollment.phone,
            ),
        );
        let confirmation_text = format!(
            "Dear {},\n\nThank you for enrolling {} (class {}, {} medium) in {}.\n\
             Our team will review the application and contact you shortly.\n\n\
             Sarthak Group Tuition",
            enrollment.parent_name,
            enrollment.student_name,
            enrollment.class,
            enrollment.medium,
            enrollment.course,
        );

        self.send_email(
            &enrollment.email,
            "Enrollment Received - Sarthak Group Tuition",
            &confirmation_text,
            &confirmation_html,
        )
        .await?;

        let admin_html = self.layout(
            "New Enrollment Application",
            &format!(
                "<p>A new enrollment application was submitted:</p>\
                 <ul>\
                 <li>Student: {}</li>\
                 <li>Parent: {}</li>\
                 <li>Class: {} ({} medium)</li>\
                 <li>Course: {}</li>\
                 <li>Email: {}</li>\
                 <li>Phone: {}</li>\
                 </ul>",
                enrollment.student_name,
                enrollment.parent_name,
                enrollment.class,
                enrollment.medium,
                enrollment.course,
                enrollment.email,
                enrollment.phone,
            ),
        );
        let admin_text = format!(
            "New enrollment application.\n\nStudent: {}\nParent: {}\nClass: {} ({} medium)\n\
             Course: {}\nEmail: {}\nPhone: {}",
            enrollment.student_name,
            enrollment.parent_name,
            enrollment.class,
            enrollment.medium,
            enrollment.course,
            enrollment.email,
            enrollment.phone,
        );

        self.send_email(
            &self.config.admin_email,
            "New Enrollment Application",
            &admin_text,
            &admin_html,
        )
        .await
    }

    #[instrument(skip(self, message))]
    pub async fn send_contact_emails(&self, message: &ContactMessage) -> Result<(), AppError> {
        let subject = message.subject.as_deref().unwrap_or("General Inquiry");

        let confirmation_html = self.layout(
            "We Received Your Message",
            &format!(
                "<p>Dear <strong>{}</strong>,</p>\
                 <p>Thank you for reaching out about <em>{}</em>. We will get back \
                 to you within one working day.</p>",
                message.name, subject,
            ),
        );
        let confirmation_text = format!(
            "Dear {},\n\nThank you for reaching out about \"{}\". We will get back to \
             you within one working day.\n\nSarthak Group Tuition",
            message.name, subject,
        );

        self.send_email(
            &message.email,
            "We Received Your Message - Sarthak Group Tuition",
            &confirmation_text,
            &confirmation_html,
        )
        .await?;

        let admin_html = self.layout(
            "New Contact Message",
            &format!(
                "<p><strong>{}</strong> ({}) wrote:</p><blockquote>{}</blockquote>",
                message.name, message.email, message.message,
            ),
        );
        let admin_text = format!(
            "New contact message.\n\nFrom: {} ({})\nSubject: {}\n\n{}",
            message.name, message.email, subject, message.message,
        );

        self.send_email(
            &self.config.admin_email,
            &format!("Contact Form: {}", subject),
            &admin_text,
            &admin_html,
        )
        .await
    }

    #[instrument(skip(self, appointment))]
    pub async fn send_appointment_emails(&self, appointment: &Appointment) -> Result<(), AppError> {
        let confirmation_html = self.layout(
            "Appointment Request Received",
            &format!(
                "<p>Dear <strong>{}</strong>,</p>\
                 <p>Your appointment request for <strong>{}</strong> at \
                 <strong>{}</strong> has been received. We will confirm the slot \
                 over phone or email.</p>",
                appointment.name, appointment.preferred_date, appointment.preferred_time,
            ),
        );
        let confirmation_text = format!(
            "Dear {},\n\nYour appointment request for {} at {} has been received.\n\
             We will confirm the slot over phone or email.\n\nSarthak Group Tuition",
            appointment.name, appointment.preferred_date, appointment.preferred_time,
        );

        self.send_email(
            &appointment.email,
            "Appointment Request Received - Sarthak Group Tuition",
            &confirmation_text,
            &confirmation_html,
        )
        .await?;

        let admin_html = self.layout(
            "New Appointment Request",
            &format!(
                "<p>New appointment request:</p>\
                 <ul>\
                 <li>Name: {}</li>\
                 <li>Email: {}</li>\
                 <li>Phone: {}</li>\
                 <li>Preferred: {} at {}</li>\
                 <li>Purpose: {}</li>\
                 </ul>",
                appointment.name,
                appointment.email,
                appointment.phone,
                appointment.preferred_date,
                appointment.preferred_time,
                appointment.purpose.as_deref().unwrap_or("-"),
            ),
        );
        let admin_text = format!(
            "New appointment request.\n\nName: {}\nEmail: {}\nPhone: {}\n\
             Preferred: {} at {}\nPurpose: {}",
            appointment.name,
            appointment.email,
            appointment.phone,
            appointment.preferred_date,
            appointment.preferred_time,
            appointment.purpose.as_deref().unwrap_or("-"),
        );

        self.send_email(
            &self.config.admin_email,
            "New Appointment Request",
            &admin_text,
            &admin_html,
        )
        .await
    }

    #[instrument(skip(self, text_body, html_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            tracing::debug!(to = to_email, subject, "SMTP disabled, skipping dispatch");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal(anyhow::anyhow!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal(anyhow::anyhow!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal(anyhow::anyhow!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn layout(&self, heading: &str, body_html: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{heading}</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #1E3A8A; padding: 24px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 26px;">Sarthak Group Tuition</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 32px 28px; color: #333333; font-size: 15px; line-height: 1.6;">
                            <h2 style="margin: 0 0 16px 0; font-size: 21px;">{heading}</h2>
                            {body_html}
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 16px 28px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Sarthak Group Tuition. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#
        )
    }
}
