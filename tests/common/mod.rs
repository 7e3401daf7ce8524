#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};

use async_trait::async_trait;

use chalkboard::error::{Error, Result};
use chalkboard::remote::{Bucket, RemoteStore};
use chalkboard::types::{
    BlogPost, Course, GalleryImage, ImageSource, Instructor, Session, SiteConfig,
};

/// Scripted in-memory stand-in for the hosted backend. Failure flags can be
/// flipped mid-test; collections behave like real tables (inserts get
/// backend-assigned ids, list fetches return newest first).
#[derive(Default)]
pub struct MockStore {
    /// Every method fails with a backend rejection.
    pub fail_all: AtomicBool,
    /// Row inserts fail; everything else succeeds.
    pub fail_inserts: AtomicBool,
    /// Row updates fail.
    pub fail_updates: AtomicBool,
    /// Row deletes fail.
    pub fail_deletes: AtomicBool,
    /// Row inserts never resolve, for observing optimistic state mid-flight.
    pub hang_inserts: AtomicBool,
    /// Password sign-in fails with a backend rejection.
    pub fail_sign_in: AtomicBool,

    pub gallery: Mutex<Vec<GalleryImage>>,
    pub posts: Mutex<Vec<BlogPost>>,
    pub courses: Mutex<Vec<Course>>,
    pub site_config: Mutex<Option<SiteConfig>>,
    pub session: Mutex<Option<Session>>,

    pub uploads: Mutex<Vec<String>>,
    pub removed_blobs: Mutex<Vec<String>>,
    pub delete_calls: AtomicUsize,
    pub sign_out_calls: AtomicUsize,
    next_id: AtomicI64,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn hosted_image(name: &str, category: &str, caption: &str) -> GalleryImage {
    GalleryImage {
        src: ImageSource::new(format!("https://blobs.test/gallery_uploads/{name}")),
        category: category.into(),
        caption: caption.into(),
    }
}

pub fn hosted_post(id: i64, title: &str) -> BlogPost {
    BlogPost {
        id: id.into(),
        image: ImageSource::new(format!("https://blobs.test/blog_uploads/post-{id}.jpg")),
        category: "Technology".into(),
        date: "June 10, 2024".into(),
        author: "Jane Smith".into(),
        comments: 3,
        title: title.into(),
        excerpt: "An excerpt.".into(),
        content: "Some content.".into(),
    }
}

pub fn hosted_course(id: i64, title: &str) -> Course {
    Course {
        id: id.into(),
        image: ImageSource::new(format!("https://blobs.test/course_uploads/course-{id}.jpg")),
        category: "Robotics & Coding".into(),
        price: "$79.99".into(),
        title: title.into(),
        description: "A description.".into(),
        explanation: "An explanation.".into(),
        uniqueness: vec!["Hands-on projects".into()],
        lessons: 25,
        students: 180,
        rating: 4.7,
        instructor: Instructor {
            name: "Dr. Anita Chen".into(),
        },
    }
}

impl MockStore {
    pub fn failing() -> Self {
        Self {
            fail_all: AtomicBool::new(true),
            ..Self::default()
        }
    }

    fn reject<T>() -> Result<T> {
        Err(Error::Backend {
            status: 503,
            message: "mock backend rejected the request".into(),
        })
    }

    fn gate<T>(&self, flag: &AtomicBool) -> Option<Result<T>> {
        if self.fail_all.load(Ordering::SeqCst) || flag.load(Ordering::SeqCst) {
            return Some(Self::reject());
        }
        None
    }

    fn check_fail_all<T>(&self) -> Option<Result<T>> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Some(Self::reject());
        }
        None
    }

    async fn before_insert(&self) -> Result<()> {
        if self.hang_inserts.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if let Some(result) = self.gate(&self.fail_inserts) {
            return result;
        }
        Ok(())
    }

    fn assign_id(&self) -> i64 {
        100 + self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn fetch_site_config(&self) -> Result<Option<SiteConfig>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self.site_config.lock().unwrap().clone())
    }

    async fn upsert_site_config(&self, config: &SiteConfig) -> Result<()> {
        if let Some(result) = self.gate(&self.fail_updates) {
            return result;
        }
        *self.site_config.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self.gallery.lock().unwrap().clone())
    }

    async fn insert_gallery_image(&self, image: &GalleryImage) -> Result<()> {
        self.before_insert().await?;
        self.gallery.lock().unwrap().insert(0, image.clone());
        Ok(())
    }

    async fn delete_gallery_image(&self, src: &str) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.gate(&self.fail_deletes) {
            return result;
        }
        self.gallery
            .lock()
            .unwrap()
            .retain(|img| img.src.as_str() != src);
        Ok(())
    }

    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn insert_post(&self, post: &BlogPost) -> Result<()> {
        self.before_insert().await?;
        let mut stored = post.clone();
        stored.id = self.assign_id().into();
        self.posts.lock().unwrap().insert(0, stored);
        Ok(())
    }

    async fn update_post(&self, post: &BlogPost) -> Result<()> {
        if let Some(result) = self.gate(&self.fail_updates) {
            return result;
        }
        let mut posts = self.posts.lock().unwrap();
        if let Some(existing) = posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post.clone();
        }
        Ok(())
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.gate(&self.fail_deletes) {
            return result;
        }
        self.posts.lock().unwrap().retain(|p| p.id.value() != id);
        Ok(())
    }

    async fn fetch_post_image(&self, id: i64) -> Result<Option<ImageSource>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id.value() == id)
            .map(|p| p.image.clone()))
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self.courses.lock().unwrap().clone())
    }

    async fn insert_course(&self, course: &Course) -> Result<()> {
        self.before_insert().await?;
        let mut stored = course.clone();
        stored.id = self.assign_id().into();
        self.courses.lock().unwrap().insert(0, stored);
        Ok(())
    }

    async fn update_course(&self, course: &Course) -> Result<()> {
        if let Some(result) = self.gate(&self.fail_updates) {
            return result;
        }
        let mut courses = self.courses.lock().unwrap();
        if let Some(existing) = courses.iter_mut().find(|c| c.id == course.id) {
            *existing = course.clone();
        }
        Ok(())
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.gate(&self.fail_deletes) {
            return result;
        }
        self.courses.lock().unwrap().retain(|c| c.id.value() != id);
        Ok(())
    }

    async fn fetch_course_image(&self, id: i64) -> Result<Option<ImageSource>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id.value() == id)
            .map(|c| c.image.clone()))
    }

    async fn upload_blob(
        &self,
        bucket: Bucket,
        name: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        self.uploads.lock().unwrap().push(name.to_string());
        Ok(format!("https://blobs.test/{}/{}", bucket.name(), name))
    }

    async fn remove_blob(&self, _bucket: Bucket, name: &str) -> Result<()> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        self.removed_blobs.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>> {
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        Ok(self.session.lock().unwrap().clone())
    }

    async fn sign_in_with_password(&self, email: &str, _password: &str) -> Result<Session> {
        if let Some(result) = self.gate(&self.fail_sign_in) {
            return result;
        }
        let session = Session {
            access_token: "backend-token".into(),
            user_id: "backend-user-1".into(),
            email: email.to_string(),
        };
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(result) = self.check_fail_all() {
            return result;
        }
        self.session.lock().unwrap().take();
        Ok(())
    }
}
