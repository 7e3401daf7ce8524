pub mod defaults;
mod notify;

pub use notify::{NOTICE_TIMEOUT, Notice, Severity};

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::Error;
use crate::remote::{Bucket, RemoteStore};
use crate::types::{
    BlogPost, Course, CourseDraft, GalleryImage, ImageSource, PostDraft, RecordId, SiteConfig,
};

/// Posts published through the admin area carry this byline.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Excerpts are the first this-many characters of the content.
pub const EXCERPT_LEN: usize = 150;

// The backend needs a beat before a read-after-write reflects the mutation,
// so the canonical refetch waits briefly.
const INSERT_SETTLE: Duration = Duration::from_millis(500);
const UPDATE_SETTLE: Duration = Duration::from_millis(300);

type StoreResult<T> = crate::error::Result<T>;

/// Derives a post excerpt: the leading characters of the content, with an
/// ellipsis only when something was cut.
#[must_use]
pub fn excerpt_of(content: &str) -> String {
    let mut excerpt: String = content.chars().take(EXCERPT_LEN).collect();
    if content.chars().count() > EXCERPT_LEN {
        excerpt.push_str("...");
    }
    excerpt
}

/// Display date for freshly published posts, e.g. "June 10, 2024".
#[must_use]
pub fn display_date() -> String {
    Utc::now().format("%B %-d, %Y").to_string()
}

fn upload_name(prefix: &str, content_type: &str) -> String {
    format!(
        "{prefix}-{}.{}",
        Uuid::new_v4(),
        ImageSource::extension_for(content_type)
    )
}

/// In-memory owner of the four content collections.
///
/// Collections load once at startup, independently falling back to bundled
/// defaults, and change only through the optimistic CRUD operations here:
/// local state first, then persistence, then a canonical refetch. Only delete
/// rolls back on failure. One interactive admin session is assumed, so
/// nothing is queued or locked; the last refetch to land wins.
pub struct ContentCache {
    store: Arc<dyn RemoteStore>,
    pub gallery: Vec<GalleryImage>,
    pub posts: Vec<BlogPost>,
    pub courses: Vec<Course>,
    pub site_config: SiteConfig,
    pub notice: Option<Notice>,
}

impl ContentCache {
    #[must_use]
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            gallery: Vec::new(),
            posts: Vec::new(),
            courses: Vec::new(),
            site_config: defaults::site_config(),
            notice: None,
        }
    }

    /// Fetches all four collections concurrently. Each empty or failed
    /// result substitutes that collection's bundled default, independently
    /// of the others. Load failures are silent: no notice, the fallback
    /// content IS the degraded-mode signal.
    pub async fn load(&mut self) {
        let (gallery, posts, courses, site_config) = tokio::join!(
            self.store.fetch_gallery(),
            self.store.fetch_posts(),
            self.store.fetch_courses(),
            self.store.fetch_site_config(),
        );

        self.gallery = match gallery {
            Ok(images) if !images.is_empty() => images,
            Ok(_) => defaults::gallery(),
            Err(e) => {
                log_soft("load gallery", &e);
                defaults::gallery()
            }
        };
        self.posts = match posts {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => defaults::posts(),
            Err(e) => {
                log_soft("load posts", &e);
                defaults::posts()
            }
        };
        self.courses = match courses {
            Ok(courses) if !courses.is_empty() => courses,
            Ok(_) => defaults::courses(),
            Err(e) => {
                log_soft("load courses", &e);
                defaults::courses()
            }
        };
        self.site_config = match site_config {
            Ok(Some(config)) => config,
            Ok(None) => defaults::site_config(),
            Err(e) => {
                log_soft("load site config", &e);
                defaults::site_config()
            }
        };
    }

    // --- Site config ---

    pub async fn update_site_config(&mut self, config: SiteConfig) {
        self.site_config = config.clone();
        match self.persist_site_config(config).await {
            Ok(persisted) => {
                self.site_config = persisted;
                self.succeed("Site settings updated.");
            }
            Err(e) => self.fail("Failed to save settings.", &e),
        }
    }

    async fn persist_site_config(&self, mut config: SiteConfig) -> StoreResult<SiteConfig> {
        config.logo = self
            .upload_if_inline(Bucket::SiteAssets, "logo", config.logo)
            .await?;
        self.store.upsert_site_config(&config).await?;
        Ok(config)
    }

    // --- Gallery ---

    pub async fn add_gallery_image(&mut self, image: GalleryImage) {
        self.gallery.insert(0, image.clone());
        match self.persist_gallery_image(image).await {
            Ok(images) => {
                self.gallery = images;
                self.succeed("Image uploaded.");
            }
            Err(e) => self.fail("Upload failed.", &e),
        }
    }

    async fn persist_gallery_image(&self, mut image: GalleryImage) -> StoreResult<Vec<GalleryImage>> {
        image.src = self
            .upload_if_inline(Bucket::GalleryUploads, "gallery", image.src)
            .await?;
        self.store.insert_gallery_image(&image).await?;
        tokio::time::sleep(INSERT_SETTLE).await;
        self.store.fetch_gallery().await
    }

    /// Deletes by src, the collection's identity. The only operation with a
    /// rollback: on failure the pre-delete snapshot is restored verbatim.
    pub async fn delete_gallery_image(&mut self, src: &str) {
        let previous = self.gallery.clone();
        self.gallery.retain(|img| img.src.as_str() != src);
        match self.remove_gallery_image(src).await {
            Ok(images) => {
                self.gallery = images;
                self.succeed("Image deleted.");
            }
            Err(e) => {
                self.gallery = previous;
                self.fail("Delete failed.", &e);
            }
        }
    }

    async fn remove_gallery_image(&self, src: &str) -> StoreResult<Vec<GalleryImage>> {
        let source = ImageSource::new(src);
        // An inline src only ever existed locally (its upload never landed);
        // there is no row or blob behind it to remove.
        if !source.is_inline() {
            self.discard_blob(Bucket::GalleryUploads, &source).await;
            self.store.delete_gallery_image(src).await?;
        }
        tokio::time::sleep(UPDATE_SETTLE).await;
        self.store.fetch_gallery().await
    }

    // --- Blog posts ---

    pub async fn add_post(&mut self, draft: PostDraft) {
        let record = post_from_draft(draft);
        self.posts.insert(0, record.clone());
        match self.persist_new_post(record).await {
            Ok(posts) => {
                self.posts = posts;
                self.succeed("Blog post published.");
            }
            // The optimistic record stays; only the notice reports failure.
            Err(e) => self.fail("Publish failed.", &e),
        }
    }

    async fn persist_new_post(&self, mut post: BlogPost) -> StoreResult<Vec<BlogPost>> {
        post.image = self
            .upload_if_inline(Bucket::BlogUploads, "blog", post.image)
            .await?;
        self.store.insert_post(&post).await?;
        tokio::time::sleep(INSERT_SETTLE).await;
        self.store.fetch_posts().await
    }

    pub async fn update_post(&mut self, post: BlogPost) {
        if let Some(existing) = self.posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post.clone();
        }
        match self.persist_post_update(post).await {
            Ok(posts) => {
                self.posts = posts;
                self.succeed("Blog post updated.");
            }
            Err(e) => self.fail("Update failed.", &e),
        }
    }

    async fn persist_post_update(&self, mut post: BlogPost) -> StoreResult<Vec<BlogPost>> {
        post.image = self
            .upload_if_inline(Bucket::BlogUploads, "blog", post.image)
            .await?;
        self.store.update_post(&post).await?;
        tokio::time::sleep(UPDATE_SETTLE).await;
        self.store.fetch_posts().await
    }

    pub async fn delete_post(&mut self, id: RecordId) {
        let previous = self.posts.clone();
        self.posts.retain(|p| p.id != id);
        match self.remove_post(id).await {
            Ok(posts) => {
                self.posts = posts;
                self.succeed("Blog post deleted.");
            }
            Err(e) => {
                self.posts = previous;
                self.fail("Delete failed.", &e);
            }
        }
    }

    async fn remove_post(&self, id: RecordId) -> StoreResult<Vec<BlogPost>> {
        let image = self
            .store
            .fetch_post_image(id.value())
            .await
            .unwrap_or_default();
        self.store.delete_post(id.value()).await?;
        if let Some(image) = image {
            self.discard_blob(Bucket::BlogUploads, &image).await;
        }
        tokio::time::sleep(UPDATE_SETTLE).await;
        self.store.fetch_posts().await
    }

    // --- Courses ---

    pub async fn add_course(&mut self, draft: CourseDraft) {
        let record = draft.into_provisional();
        self.courses.insert(0, record.clone());
        match self.persist_new_course(record).await {
            Ok(courses) => {
                self.courses = courses;
                self.succeed("Course added.");
            }
            Err(e) => self.fail("Save failed.", &e),
        }
    }

    async fn persist_new_course(&self, mut course: Course) -> StoreResult<Vec<Course>> {
        course.image = self
            .upload_if_inline(Bucket::CourseUploads, "course", course.image)
            .await?;
        self.store.insert_course(&course).await?;
        tokio::time::sleep(INSERT_SETTLE).await;
        self.store.fetch_courses().await
    }

    pub async fn update_course(&mut self, course: Course) {
        if let Some(existing) = self.courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course.clone();
        }
        match self.persist_course_update(course).await {
            Ok(courses) => {
                self.courses = courses;
                self.succeed("Course updated.");
            }
            Err(e) => self.fail("Update failed.", &e),
        }
    }

    async fn persist_course_update(&self, mut course: Course) -> StoreResult<Vec<Course>> {
        course.image = self
            .upload_if_inline(Bucket::CourseUploads, "course", course.image)
            .await?;
        self.store.update_course(&course).await?;
        tokio::time::sleep(UPDATE_SETTLE).await;
        self.store.fetch_courses().await
    }

    pub async fn delete_course(&mut self, id: RecordId) {
        let previous = self.courses.clone();
        self.courses.retain(|c| c.id != id);
        match self.remove_course(id).await {
            Ok(courses) => {
                self.courses = courses;
                self.succeed("Course deleted.");
            }
            Err(e) => {
                self.courses = previous;
                self.fail("Delete failed.", &e);
            }
        }
    }

    async fn remove_course(&self, id: RecordId) -> StoreResult<Vec<Course>> {
        let image = self
            .store
            .fetch_course_image(id.value())
            .await
            .unwrap_or_default();
        self.store.delete_course(id.value()).await?;
        if let Some(image) = image {
            self.discard_blob(Bucket::CourseUploads, &image).await;
        }
        tokio::time::sleep(UPDATE_SETTLE).await;
        self.store.fetch_courses().await
    }

    // --- Notices ---

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Sweeps a notice older than [`NOTICE_TIMEOUT`]; the consumer calls this
    /// on its own cadence.
    pub fn clear_expired_notice(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::expired) {
            self.notice = None;
        }
    }

    // --- Internals ---

    /// Inline payloads get uploaded and swapped for the returned public URL;
    /// hosted URLs pass through untouched.
    async fn upload_if_inline(
        &self,
        bucket: Bucket,
        prefix: &str,
        image: ImageSource,
    ) -> StoreResult<ImageSource> {
        let Some((content_type, bytes)) = image.decode_inline() else {
            return Ok(image);
        };
        let name = upload_name(prefix, &content_type);
        let url = self
            .store
            .upload_blob(bucket, &name, bytes, &content_type)
            .await?;
        Ok(ImageSource::new(url))
    }

    /// Removes the blob behind a hosted image. Failure leaves an orphaned
    /// blob, which is preferable to blocking the record mutation.
    async fn discard_blob(&self, bucket: Bucket, image: &ImageSource) {
        if image.is_inline() {
            return;
        }
        if let Some(name) = image.object_name() {
            if let Err(e) = self.store.remove_blob(bucket, name).await {
                warn!("orphaned blob {name} left in {}: {e}", bucket.name());
            }
        }
    }

    fn succeed(&mut self, message: &str) {
        self.notice = Some(Notice::success(message));
    }

    fn fail(&mut self, message: &str, err: &Error) {
        log_soft(message, err);
        self.notice = Some(Notice::error(message));
    }
}

fn post_from_draft(draft: PostDraft) -> BlogPost {
    BlogPost {
        id: RecordId::provisional(),
        excerpt: excerpt_of(&draft.content),
        date: display_date(),
        author: DEFAULT_AUTHOR.into(),
        comments: 0,
        image: draft.image,
        category: draft.category,
        title: draft.title,
        content: draft.content,
    }
}

/// Suppressed-failure logging. Unprovisioned/unreachable backends are an
/// expected deployment state and stay at debug; anything else the backend
/// actively rejected is kept visible to telemetry.
fn log_soft(context: &str, err: &Error) {
    match err {
        Error::Backend { status, message } => {
            warn!("[{context}] backend rejected request ({status}): {message}");
        }
        _ => debug!("[{context}] continuing with local content: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_shorter_than_limit_is_untouched() {
        let content = "A short announcement.";
        assert_eq!(excerpt_of(content), content);
    }

    #[test]
    fn test_excerpt_at_limit_is_untouched() {
        let content: String = "x".repeat(EXCERPT_LEN);
        assert_eq!(excerpt_of(&content), content);
    }

    #[test]
    fn test_excerpt_truncates_with_ellipsis() {
        let content: String = "y".repeat(EXCERPT_LEN + 40);
        let excerpt = excerpt_of(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
        assert_eq!(&excerpt[..EXCERPT_LEN], &content[..EXCERPT_LEN]);
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let content: String = "é".repeat(EXCERPT_LEN + 1);
        let excerpt = excerpt_of(&content);
        assert_eq!(excerpt.chars().count(), EXCERPT_LEN + 3);
    }

    #[test]
    fn test_post_from_draft_derivations() {
        let draft = PostDraft {
            image: ImageSource::new("https://cdn.example.com/p.jpg"),
            category: "Technology".into(),
            title: "Title".into(),
            content: "z".repeat(200),
        };
        let post = post_from_draft(draft);
        assert!(post.id.is_provisional());
        assert_eq!(post.author, DEFAULT_AUTHOR);
        assert_eq!(post.comments, 0);
        assert!(post.excerpt.ends_with("..."));
        assert!(!post.date.is_empty());
    }

    #[test]
    fn test_upload_name_carries_prefix_and_extension() {
        let name = upload_name("gallery", "image/png");
        assert!(name.starts_with("gallery-"));
        assert!(name.ends_with(".png"));
    }
}
