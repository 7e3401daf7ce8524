use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use super::{Bucket, RemoteStore};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::types::{BlogPost, Course, GalleryImage, ImageSource, Instructor, Session, SiteConfig};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ORDER_NEWEST: &str = "order=created_at.desc";

const SITE_CONFIG_TABLE: &str = "site_config";
const GALLERY_TABLE: &str = "gallery_images";
const POSTS_TABLE: &str = "blog_posts";
const COURSES_TABLE: &str = "courses";

/// Fixed key of the singleton site_config row.
const SITE_CONFIG_ID: i64 = 1;

/// `RemoteStore` over a hosted REST backend: record collections under
/// `rest/v1`, blobs under `storage/v1`, password sessions under `auth/v1`.
///
/// The anon key rides along as `apikey` and `Authorization` default headers;
/// per-request headers (the session bearer token) take precedence when set.
pub struct HttpStore {
    client: Client,
    base_url: String,
    session: Mutex<Option<Session>>,
}

impl HttpStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        config.validate()?;

        let key = HeaderValue::from_str(&config.anon_key).map_err(|_| {
            Error::NotConfigured("backend API key is not a valid header value".into())
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key)).map_err(|_| {
            Error::NotConfigured("backend API key is not a valid header value".into())
        })?;
        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("failed to build http client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            session: Mutex::new(None),
        })
    }

    fn rest_url(&self, table: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/rest/v1/{}", self.base_url, table)
        } else {
            format!("{}/rest/v1/{}?{}", self.base_url, table, query)
        }
    }

    fn object_url(&self, bucket: Bucket, name: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            bucket.name(),
            urlencoding::encode(name)
        )
    }

    /// Publicly resolvable URL of an uploaded blob.
    #[must_use]
    pub fn public_url(&self, bucket: Bucket, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            bucket.name(),
            urlencoding::encode(name)
        )
    }

    async fn select<T: DeserializeOwned>(&self, table: &str, query: &str) -> Result<Vec<T>> {
        let resp = self.client.get(self.rest_url(table, query)).send().await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::rejection(table, resp).await)
        }
    }

    async fn insert(&self, table: &str, row: &(impl Serialize + Sync)) -> Result<()> {
        let resp = self
            .client
            .post(self.rest_url(table, ""))
            .json(row)
            .send()
            .await?;
        Self::check(table, resp).await
    }

    async fn upsert(&self, table: &str, row: &(impl Serialize + Sync)) -> Result<()> {
        let resp = self
            .client
            .post(self.rest_url(table, ""))
            .header("Prefer", "resolution=merge-duplicates")
            .json(row)
            .send()
            .await?;
        Self::check(table, resp).await
    }

    async fn update(&self, table: &str, filter: &str, row: &(impl Serialize + Sync)) -> Result<()> {
        let resp = self
            .client
            .patch(self.rest_url(table, filter))
            .json(row)
            .send()
            .await?;
        Self::check(table, resp).await
    }

    async fn delete(&self, table: &str, filter: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.rest_url(table, filter))
            .send()
            .await?;
        Self::check(table, resp).await
    }

    async fn check(table: &str, resp: Response) -> Result<()> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::rejection(table, resp).await)
        }
    }

    async fn rejection(table: &str, resp: Response) -> Error {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        Self::classify_rejection(table, status, message)
    }

    /// A missing table surfaces as SQLSTATE 42P01; everything else stays a
    /// generic backend rejection.
    fn classify_rejection(table: &str, status: u16, message: String) -> Error {
        if message.contains("42P01")
            || (message.contains("relation") && message.contains("does not exist"))
        {
            Error::SchemaMissing {
                table: table.to_string(),
            }
        } else {
            Error::Backend { status, message }
        }
    }

    fn remembered_session(&self) -> Option<Session> {
        self.session.lock().expect("session lock poisoned").clone()
    }

    fn remember_session(&self, session: Option<Session>) {
        *self.session.lock().expect("session lock poisoned") = session;
    }
}

#[derive(Serialize)]
struct SiteConfigRow<'a> {
    id: i64,
    logo: &'a str,
    #[serde(rename = "schoolName")]
    school_name: &'a str,
    #[serde(rename = "schoolNameSuffix")]
    school_name_suffix: &'a str,
}

#[derive(Serialize)]
struct GalleryRow<'a> {
    src: &'a str,
    category: &'a str,
    caption: &'a str,
}

/// Post row as written; the backend assigns the id.
#[derive(Serialize)]
struct PostRow<'a> {
    image: &'a str,
    category: &'a str,
    date: &'a str,
    author: &'a str,
    comments: u32,
    title: &'a str,
    excerpt: &'a str,
    content: &'a str,
}

impl<'a> PostRow<'a> {
    fn from_post(post: &'a BlogPost) -> Self {
        Self {
            image: post.image.as_str(),
            category: &post.category,
            date: &post.date,
            author: &post.author,
            comments: post.comments,
            title: &post.title,
            excerpt: &post.excerpt,
            content: &post.content,
        }
    }
}

/// Course row as stored: the instructor is a flat `instructor_name` column
/// and `uniqueness` may come back as a scalar on old rows.
#[derive(Deserialize)]
struct CourseRow {
    id: i64,
    image: String,
    category: String,
    price: String,
    title: String,
    description: String,
    explanation: String,
    #[serde(default, deserialize_with = "scalar_or_list")]
    uniqueness: Vec<String>,
    lessons: u32,
    students: u32,
    rating: f32,
    #[serde(default)]
    instructor_name: Option<String>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Course {
            id: row.id.into(),
            image: ImageSource::new(row.image),
            category: row.category,
            price: row.price,
            title: row.title,
            description: row.description,
            explanation: row.explanation,
            uniqueness: row.uniqueness,
            lessons: row.lessons,
            students: row.students,
            rating: row.rating,
            instructor: Instructor {
                name: row.instructor_name.unwrap_or_else(|| "Instructor".into()),
            },
        }
    }
}

#[derive(Serialize)]
struct CourseWriteRow<'a> {
    image: &'a str,
    category: &'a str,
    price: &'a str,
    title: &'a str,
    description: &'a str,
    explanation: &'a str,
    uniqueness: &'a [String],
    lessons: u32,
    students: u32,
    rating: f32,
    instructor_name: &'a str,
}

impl<'a> CourseWriteRow<'a> {
    fn from_course(course: &'a Course) -> Self {
        Self {
            image: course.image.as_str(),
            category: &course.category,
            price: &course.price,
            title: &course.title,
            description: &course.description,
            explanation: &course.explanation,
            uniqueness: &course.uniqueness,
            lessons: course.lessons,
            students: course.students,
            rating: course.rating,
            instructor_name: &course.instructor.name,
        }
    }
}

fn scalar_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<String>),
        One(String),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(list)) => list,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
struct ImageColumn {
    image: ImageSource,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch_site_config(&self) -> Result<Option<SiteConfig>> {
        let mut rows: Vec<SiteConfig> = self
            .select(SITE_CONFIG_TABLE, &format!("select=*&id=eq.{SITE_CONFIG_ID}"))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0))
        })
    }

    async fn upsert_site_config(&self, config: &SiteConfig) -> Result<()> {
        let row = SiteConfigRow {
            id: SITE_CONFIG_ID,
            logo: config.logo.as_str(),
            school_name: &config.school_name,
            school_name_suffix: &config.school_name_suffix,
        };
        self.upsert(SITE_CONFIG_TABLE, &row).await
    }

    async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>> {
        self.select(GALLERY_TABLE, &format!("select=*&{ORDER_NEWEST}"))
            .await
    }

    async fn insert_gallery_image(&self, image: &GalleryImage) -> Result<()> {
        let row = GalleryRow {
            src: image.src.as_str(),
            category: &image.category,
            caption: &image.caption,
        };
        self.insert(GALLERY_TABLE, &row).await
    }

    async fn delete_gallery_image(&self, src: &str) -> Result<()> {
        self.delete(GALLERY_TABLE, &format!("src=eq.{}", urlencoding::encode(src)))
            .await
    }

    async fn fetch_posts(&self) -> Result<Vec<BlogPost>> {
        self.select(POSTS_TABLE, &format!("select=*&{ORDER_NEWEST}"))
            .await
    }

    async fn insert_post(&self, post: &BlogPost) -> Result<()> {
        self.insert(POSTS_TABLE, &PostRow::from_post(post)).await
    }

    async fn update_post(&self, post: &BlogPost) -> Result<()> {
        self.update(
            POSTS_TABLE,
            &format!("id=eq.{}", post.id.value()),
            &PostRow::from_post(post),
        )
        .await
    }

    async fn delete_post(&self, id: i64) -> Result<()> {
        self.delete(POSTS_TABLE, &format!("id=eq.{id}")).await
    }

    async fn fetch_post_image(&self, id: i64) -> Result<Option<ImageSource>> {
        let mut rows: Vec<ImageColumn> = self
            .select(POSTS_TABLE, &format!("select=image&id=eq.{id}"))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0).image)
        })
    }

    async fn fetch_courses(&self) -> Result<Vec<Course>> {
        let rows: Vec<CourseRow> = self
            .select(COURSES_TABLE, &format!("select=*&{ORDER_NEWEST}"))
            .await?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn insert_course(&self, course: &Course) -> Result<()> {
        self.insert(COURSES_TABLE, &CourseWriteRow::from_course(course))
            .await
    }

    async fn update_course(&self, course: &Course) -> Result<()> {
        self.update(
            COURSES_TABLE,
            &format!("id=eq.{}", course.id.value()),
            &CourseWriteRow::from_course(course),
        )
        .await
    }

    async fn delete_course(&self, id: i64) -> Result<()> {
        self.delete(COURSES_TABLE, &format!("id=eq.{id}")).await
    }

    async fn fetch_course_image(&self, id: i64) -> Result<Option<ImageSource>> {
        let mut rows: Vec<ImageColumn> = self
            .select(COURSES_TABLE, &format!("select=image&id=eq.{id}"))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.swap_remove(0).image)
        })
    }

    async fn upload_blob(
        &self,
        bucket: Bucket,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String> {
        let resp = self
            .client
            .post(self.object_url(bucket, name))
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;
        Self::check(bucket.name(), resp).await?;
        Ok(self.public_url(bucket, name))
    }

    async fn remove_blob(&self, bucket: Bucket, name: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.object_url(bucket, name))
            .send()
            .await?;
        Self::check(bucket.name(), resp).await
    }

    async fn get_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.remembered_session() else {
            return Ok(None);
        };
        let resp = self
            .client
            .get(format!("{}/auth/v1/user", self.base_url))
            .header(
                AUTHORIZATION,
                format!("Bearer {}", session.access_token),
            )
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(Some(session))
        } else {
            // Token no longer valid; forget it.
            self.remember_session(None);
            Ok(None)
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let resp = self
            .client
            .post(format!(
                "{}/auth/v1/token?grant_type=password",
                self.base_url
            ))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        if resp.status().is_success() {
            let token: TokenResponse = resp.json().await?;
            let session = Session {
                access_token: token.access_token,
                user_id: token.user.id,
                email: token.user.email.unwrap_or_else(|| email.to_string()),
            };
            self.remember_session(Some(session.clone()));
            Ok(session)
        } else if resp.status().is_client_error() {
            Err(Error::InvalidCredentials)
        } else {
            Err(Self::rejection("auth", resp).await)
        }
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.session.lock().expect("session lock poisoned").take() else {
            return Ok(());
        };
        let resp = self
            .client
            .post(format!("{}/auth/v1/logout", self.base_url))
            .header(
                AUTHORIZATION,
                format!("Bearer {}", session.access_token),
            )
            .send()
            .await?;
        Self::check("auth", resp).await
    }
}
