use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::announcements::model::{
    Announcement, CreateAnnouncementDto, UpdateAnnouncementDto,
};
use crate::modules::assignments::model::{
    Assignment, AssignmentSubmission, CreateAssignmentDto, GradeSubmissionDto,
    SubmitAssignmentDto, UpdateAssignmentDto,
};
use crate::modules::attendance::model::{Attendance, AttendanceStatus, MarkAttendanceDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequest};
use crate::modules::contact::model::{
    Appointment, ContactMessage, CreateAppointmentDto, CreateContactMessageDto,
};
use crate::modules::course_enrollments::model::{
    CourseEnrollment, CreateCourseEnrollmentDto, EnrollmentStatus,
    UpdateCourseEnrollmentStatusDto,
};
use crate::modules::courses::model::{Course, CreateCourseDto, UpdateCourseDto};
use crate::modules::enrollments::model::{
    ApplicationStatus, CreateEnrollmentDto, Enrollment, PaginatedEnrollmentsResponse,
    UpdateEnrollmentStatusDto,
};
use crate::modules::gallery::model::{CreateGalleryImageDto, GalleryImage};
use crate::modules::grades::model::{CreateGradeDto, Grade};
use crate::modules::materials::model::{CourseMaterial, CreateCourseMaterialDto};
use crate::modules::schedule::model::{
    CreateScheduleSlotDto, ScheduleSlot, UpdateScheduleSlotDto,
};
use crate::modules::sessions::model::{
    CreateLiveSessionDto, LiveSession, SessionStatus, UpdateLiveSessionDto,
};
use crate::modules::testimonials::model::{CreateTestimonialDto, Testimonial};
use crate::modules::users::model::{
    FacultyProfile, PaginatedUsersResponse, ParentProfile, StudentProfile, User, UserRole,
    UserWithProfile,
};
use crate::modules::videos::model::{
    CreateVideoLectureDto, UpdateVideoLectureDto, VideoLecture,
};
use crate::utils::pagination::{PaginationMeta, PaginationParams};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::enrollments::controller::create_enrollment,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::update_enrollment_status,
        crate::modules::course_enrollments::controller::create_course_enrollment,
        crate::modules::course_enrollments::controller::get_course_enrollments,
        crate::modules::course_enrollments::controller::update_course_enrollment_status,
        crate::modules::attendance::controller::mark_attendance,
        crate::modules::attendance::controller::get_attendance,
        crate::modules::grades::controller::create_grade,
        crate::modules::grades::controller::get_grades,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::update_assignment,
        crate::modules::assignments::controller::delete_assignment,
        crate::modules::assignments::controller::submit_assignment,
        crate::modules::assignments::controller::get_submissions,
        crate::modules::assignments::controller::grade_submission,
        crate::modules::schedule::controller::create_schedule_slot,
        crate::modules::schedule::controller::get_schedule,
        crate::modules::schedule::controller::update_schedule_slot,
        crate::modules::schedule::controller::delete_schedule_slot,
        crate::modules::sessions::controller::create_session,
        crate::modules::sessions::controller::get_sessions,
        crate::modules::sessions::controller::update_session,
        crate::modules::sessions::controller::delete_session,
        crate::modules::videos::controller::get_published_videos,
        crate::modules::videos::controller::get_all_videos,
        crate::modules::videos::controller::create_video,
        crate::modules::videos::controller::update_video,
        crate::modules::videos::controller::delete_video,
        crate::modules::materials::controller::create_material,
        crate::modules::materials::controller::get_materials,
        crate::modules::materials::controller::delete_material,
        crate::modules::gallery::controller::get_gallery,
        crate::modules::gallery::controller::create_gallery_image,
        crate::modules::gallery::controller::delete_gallery_image,
        crate::modules::testimonials::controller::get_testimonials,
        crate::modules::testimonials::controller::get_all_testimonials,
        crate::modules::testimonials::controller::create_testimonial,
        crate::modules::testimonials::controller::approve_testimonial,
        crate::modules::testimonials::controller::delete_testimonial,
        crate::modules::announcements::controller::create_announcement,
        crate::modules::announcements::controller::get_announcements,
        crate::modules::announcements::controller::update_announcement,
        crate::modules::announcements::controller::delete_announcement,
        crate::modules::contact::controller::create_contact_message,
        crate::modules::contact::controller::get_contact_messages,
        crate::modules::contact::controller::create_appointment,
        crate::modules::contact::controller::get_appointments,
    ),
    components(
        schemas(
            ErrorResponse,
            User,
            UserRole,
            StudentProfile,
            ParentProfile,
            FacultyProfile,
            UserWithProfile,
            PaginatedUsersResponse,
            PaginationMeta,
            PaginationParams,
            LoginRequest,
            LoginResponse,
            RegisterRequest,
            Course,
            CreateCourseDto,
            UpdateCourseDto,
            Enrollment,
            ApplicationStatus,
            CreateEnrollmentDto,
            UpdateEnrollmentStatusDto,
            PaginatedEnrollmentsResponse,
            CourseEnrollment,
            EnrollmentStatus,
            CreateCourseEnrollmentDto,
            UpdateCourseEnrollmentStatusDto,
            Attendance,
            AttendanceStatus,
            MarkAttendanceDto,
            Grade,
            CreateGradeDto,
            Assignment,
            AssignmentSubmission,
            CreateAssignmentDto,
            UpdateAssignmentDto,
            SubmitAssignmentDto,
            GradeSubmissionDto,
            ScheduleSlot,
            CreateScheduleSlotDto,
            UpdateScheduleSlotDto,
            LiveSession,
            SessionStatus,
            CreateLiveSessionDto,
            UpdateLiveSessionDto,
            VideoLecture,
            CreateVideoLectureDto,
            UpdateVideoLectureDto,
            CourseMaterial,
            CreateCourseMaterialDto,
            GalleryImage,
            CreateGalleryImageDto,
            Testimonial,
            CreateTestimonialDto,
            Announcement,
            CreateAnnouncementDto,
            UpdateAnnouncementDto,
            ContactMessage,
            CreateContactMessageDto,
            Appointment,
            CreateAppointmentDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and registration"),
        (name = "Users", description = "User administration"),
        (name = "Courses", description = "Course catalog"),
        (name = "Enrollments", description = "Public enrollment applications"),
        (name = "Course Enrollments", description = "Student-course links"),
        (name = "Attendance", description = "Daily attendance records"),
        (name = "Grades", description = "Exam results"),
        (name = "Assignments", description = "Assignments and submissions"),
        (name = "Schedule", description = "Weekly class schedule"),
        (name = "Live Sessions", description = "Online live classes"),
        (name = "Videos", description = "Recorded lectures"),
        (name = "Materials", description = "Course materials"),
        (name = "Gallery", description = "Photo gallery"),
        (name = "Testimonials", description = "Student and parent testimonials"),
        (name = "Announcements", description = "Portal announcements"),
        (name = "Contact", description = "Contact and appointment forms")
    ),
    info(
        title = "Sarthak Tuition API",
        version = "0.1.0",
        description = "REST API for the Sarthak Group Tuition website and role-gated portals.",
        contact(
            name = "API Support",
            email = "support@sarthaktuition.com"
        ),
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
