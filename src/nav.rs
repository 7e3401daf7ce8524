use crate::types::{BlogPost, Course};

/// The named page views of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Courses,
    CourseDetail,
    Blog,
    BlogPost,
    Contact,
    Admin,
}

/// Deferred scroll side effect. The renderer performs it only after the new
/// page's content has been committed, never against stale layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scroll {
    Top,
    Anchor(String),
}

#[derive(Debug, Clone, Default)]
pub struct NavOptions {
    pub post: Option<BlogPost>,
    pub course: Option<Course>,
    pub anchor: Option<String>,
}

impl NavOptions {
    #[must_use]
    pub fn anchor(anchor: impl Into<String>) -> Self {
        Self {
            anchor: Some(anchor.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn post(post: BlogPost) -> Self {
        Self {
            post: Some(post),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn course(course: Course) -> Self {
        Self {
            course: Some(course),
            ..Self::default()
        }
    }
}

/// Page navigation state: the current view plus the selected detail entities.
///
/// A selection is sticky only while its own detail page is in view; any
/// transition elsewhere clears it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current_page: Page,
    selected_post: Option<BlogPost>,
    selected_course: Option<Course>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_page: Page::Home,
            selected_post: None,
            selected_course: None,
        }
    }

    #[must_use]
    pub fn current_page(&self) -> Page {
        self.current_page
    }

    #[must_use]
    pub fn selected_post(&self) -> Option<&BlogPost> {
        self.selected_post.as_ref()
    }

    #[must_use]
    pub fn selected_course(&self) -> Option<&Course> {
        self.selected_course.as_ref()
    }

    /// Performs a transition and returns the scroll effect to run after the
    /// target page has been committed.
    pub fn navigate(&mut self, page: Page, options: NavOptions) -> Scroll {
        let NavOptions {
            post,
            course,
            anchor,
        } = options;

        // Re-anchoring within the current page is not a transition: no state
        // changes, only the scroll.
        if let Some(anchor) = &anchor {
            if page == self.current_page && post.is_none() && course.is_none() {
                return Scroll::Anchor(anchor.clone());
            }
        }

        self.current_page = page;

        if let Some(post) = post {
            self.selected_post = Some(post);
        } else if page != Page::BlogPost {
            self.selected_post = None;
        }

        if let Some(course) = course {
            self.selected_course = Some(course);
        } else if page != Page::CourseDetail {
            self.selected_course = None;
        }

        match anchor {
            Some(anchor) => Scroll::Anchor(anchor),
            None => Scroll::Top,
        }
    }
}
