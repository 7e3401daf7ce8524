mod http;
mod offline;

pub use http::HttpStore;
pub use offline::OfflineStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BlogPost, Course, GalleryImage, ImageSource, Session, SiteConfig};

/// Blob buckets on the hosted backend, one per upload surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    SiteAssets,
    GalleryUploads,
    BlogUploads,
    CourseUploads,
}

impl Bucket {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Bucket::SiteAssets => "site_assets",
            Bucket::GalleryUploads => "gallery_uploads",
            Bucket::BlogUploads => "blog_uploads",
            Bucket::CourseUploads => "course_uploads",
        }
    }
}

/// RemoteStore defines the hosted-backend interface: four record collections,
/// blob storage, and password auth. List fetches return newest-first.
///
/// Inserts ignore the record's id (the backend assigns the canonical one);
/// the `fetch_*_image` verbs recover a stored image URL so the blob behind a
/// deleted record can be removed.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    // Site config (singleton)
    async fn fetch_site_config(&self) -> Result<Option<SiteConfig>>;
    async fn upsert_site_config(&self, config: &SiteConfig) -> Result<()>;

    // Gallery (keyed by src)
    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>>;
    async fn insert_gallery_image(&self, image: &GalleryImage) -> Result<()>;
    async fn delete_gallery_image(&self, src: &str) -> Result<()>;

    // Blog posts
    async fn fetch_posts(&self) -> Result<Vec<BlogPost>>;
    async fn insert_post(&self, post: &BlogPost) -> Result<()>;
    async fn update_post(&self, post: &BlogPost) -> Result<()>;
    async fn delete_post(&self, id: i64) -> Result<()>;
    async fn fetch_post_image(&self, id: i64) -> Result<Option<ImageSource>>;

    // Courses
    async fn fetch_courses(&self) -> Result<Vec<Course>>;
    async fn insert_course(&self, course: &Course) -> Result<()>;
    async fn update_course(&self, course: &Course) -> Result<()>;
    async fn delete_course(&self, id: i64) -> Result<()>;
    async fn fetch_course_image(&self, id: i64) -> Result<Option<ImageSource>>;

    // Blob storage
    async fn upload_blob(
        &self,
        bucket: Bucket,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String>;
    async fn remove_blob(&self, bucket: Bucket, name: &str) -> Result<()>;

    // Auth
    async fn get_session(&self) -> Result<Option<Session>>;
    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session>;
    async fn sign_out(&self) -> Result<()>;
}
