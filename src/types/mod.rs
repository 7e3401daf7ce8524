mod id;
mod models;

pub use id::RecordId;
pub use models::{
    BlogPost, Course, CourseDraft, GalleryImage, ImageSource, Instructor, PostDraft, Session,
    SiteConfig,
};
