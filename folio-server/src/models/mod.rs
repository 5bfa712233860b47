//! Domain models with validation at construction
//!
//! Each `*Form` is the JSON body an endpoint accepts; converting it into the
//! matching `*Input` trims, bounds and normalizes every field. Repositories
//! only ever see `*Input` values.

pub mod validation;
pub mod pagination;
pub mod skill;
pub mod project;
pub mod experience;
pub mod post;
pub mod social;
pub mod testimonial;
pub mod profile;
pub mod contact;
pub mod user;
pub mod resume;

pub use validation::ValidationError;
pub use pagination::{Paginated, Pagination, PaginationParams};
pub use skill::{Proficiency, SkillForm, SkillInput};
pub use project::{ProjectForm, ProjectInput};
pub use experience::{ExperienceForm, ExperienceInput};
pub use post::{PostForm, PostInput};
pub use social::{SocialForm, SocialInput};
pub use testimonial::{TestimonialForm, TestimonialInput};
pub use profile::{ProfileForm, ProfileInput};
pub use contact::{ContactForm, ContactInput};
pub use user::{Role, UserForm, UserInput};
pub use resume::{sanitize_filename, ResumeKind};
