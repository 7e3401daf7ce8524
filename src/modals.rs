/// Visibility of the two overlay dialogs. The flags are independent; both
/// may be open at the same time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modals {
    admission_form_open: bool,
    login_page_open: bool,
}

impl Modals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_admission_form_open(&self) -> bool {
        self.admission_form_open
    }

    #[must_use]
    pub fn is_login_page_open(&self) -> bool {
        self.login_page_open
    }

    pub fn open_admission_form(&mut self) {
        self.admission_form_open = true;
    }

    pub fn close_admission_form(&mut self) {
        self.admission_form_open = false;
    }

    pub fn open_login_page(&mut self) {
        self.login_page_open = true;
    }

    pub fn close_login_page(&mut self) {
        self.login_page_open = false;
    }
}
