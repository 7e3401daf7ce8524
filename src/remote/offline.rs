use async_trait::async_trait;

use super::{Bucket, RemoteStore};
use crate::error::{Error, Result};
use crate::types::{BlogPost, Course, GalleryImage, ImageSource, Session, SiteConfig};

/// Stand-in store for a site with no backend configured. Every call fails
/// with `NotConfigured`, which the layers above convert into bundled-content
/// mode; nothing ever persists.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineStore;

impl OfflineStore {
    fn unavailable<T>() -> Result<T> {
        Err(Error::NotConfigured("no backend configured".into()))
    }
}

#[async_trait]
impl RemoteStore for OfflineStore {
    async fn fetch_site_config(&self) -> Result<Option<SiteConfig>> {
        Self::unavailable()
    }

    async fn upsert_site_config(&self, _config: &SiteConfig) -> Result<()> {
        Self::unavailable()
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>> {
        Self::unavailable()
    }

    async fn insert_gallery_image(&self, _image: &GalleryImage) -> Result<()> {
        Self::unavailable()
    }

    async fn delete_gallery_image(&self, _src: &str) -> Result<()> {
        Self::unavailable()
    }

    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        Self::unavailable()
    }

    async fn insert_post(&self, _post: &BlogPost) -> Result<()> {
        Self::unavailable()
    }

    async fn update_post(&self, _post: &BlogPost) -> Result<()> {
        Self::unavailable()
    }

    async fn delete_post(&self, _id: i64) -> Result<()> {
        Self::unavailable()
    }

    async fn fetch_post_image(&self, _id: i64) -> Result<Option<ImageSource>> {
        Self::unavailable()
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        Self::unavailable()
    }

    async fn insert_course(&self, _course: &Course) -> Result<()> {
        Self::unavailable()
    }

    async fn update_course(&self, _course: &Course) -> Result<()> {
        Self::unavailable()
    }

    async fn delete_course(&self, _id: i64) -> Result<()> {
        Self::unavailable()
    }

    async fn fetch_course_image(&self, _id: i64) -> Result<Option<ImageSource>> {
        Self::unavailable()
    }

    async fn upload_blob(
        &self,
        _bucket: Bucket,
        _name: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String> {
        Self::unavailable()
    }

    async fn remove_blob(&self, _bucket: Bucket, _name: &str) -> Result<()> {
        Self::unavailable()
    }

    async fn get_session(&self) -> Result<Option<Session>> {
        Self::unavailable()
    }

    async fn sign_in_with_password(&self, _email: &str, _password: &str) -> Result<Session> {
        Self::unavailable()
    }

    async fn sign_out(&self) -> Result<()> {
        Self::unavailable()
    }
}
