//! Feature modules. Each follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic and queries
//! - `model.rs`: entities, DTOs, filter params
//! - `router.rs`: route wiring

pub mod announcements;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod contact;
pub mod course_enrollments;
pub mod courses;
pub mod enrollments;
pub mod gallery;
pub mod grades;
pub mod materials;
pub mod schedule;
pub mod sessions;
pub mod testimonials;
pub mod users;
pub mod videos;
