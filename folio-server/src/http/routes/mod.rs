//! Route handlers organized by resource
//!
//! Each module exposes `router()` for public reads and/or `admin_router()`
//! for the authenticated management endpoints.

pub mod health;
pub mod profile;
pub mod skills;
pub mod projects;
pub mod experience;
pub mod posts;
pub mod socials;
pub mod testimonials;
pub mod resume;
pub mod contact;
pub mod users;
pub mod ai;
