use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::file_store::{Bucket, FileStore};
use crate::io::store::KeyValueStore;
use crate::model::{Catalogue, PortalConfig, Resolved};
use crate::ops::add_file::{PendingAdd, validate_new_file};
use crate::ops::navigation::Navigation;
use crate::ops::session::{PendingLogin, SessionGate};

use super::input;
use super::render;
use super::theme::Theme;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    StudyFiles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login form contents
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Message from the last failed attempt
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Username,
    Email,
    Password,
}

/// Signup form contents. Submitting does not create an account.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub focus: SignupField,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddField {
    #[default]
    Name,
    Url,
}

/// The add-file popup
#[derive(Debug, Clone, Default)]
pub struct AddFileForm {
    pub name: String,
    pub url: String,
    pub focus: AddField,
    pub error: Option<String>,
}

/// An operation waiting out its simulated delay
#[derive(Debug, Clone)]
pub enum Pending {
    Login(PendingLogin),
    AddFile(PendingAdd),
}

pub const SIGNUP_UNAVAILABLE: &str = "Account creation is not available yet.";

/// Main application state
pub struct App {
    pub theme: Theme,
    pub catalogue: Catalogue,
    pub session: SessionGate,
    pub files: FileStore<Box<dyn KeyValueStore>>,
    pub add_file_delay: Duration,
    pub screen: Screen,
    pub login: LoginForm,
    pub signup: SignupForm,
    pub nav: Navigation,
    /// Cursor into the current folder's children or the bucket's files
    pub cursor: usize,
    /// The open subject bucket, when the path resolves to one
    pub bucket: Option<Bucket>,
    pub add_form: Option<AddFileForm>,
    pub pending: Option<Pending>,
    /// One-line message for the status row
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &PortalConfig, store: Box<dyn KeyValueStore>) -> Self {
        App {
            theme: Theme::from_config(&config.ui),
            catalogue: Catalogue::builtin(),
            session: SessionGate::new(
                config.credentials.clone(),
                Duration::from_millis(config.delays.login_ms),
            ),
            files: FileStore::new(store),
            add_file_delay: Duration::from_millis(config.delays.add_file_ms),
            screen: Screen::Login,
            login: LoginForm::default(),
            signup: SignupForm::default(),
            nav: Navigation::new(),
            cursor: 0,
            bucket: None,
            add_form: None,
            pending: None,
            status: None,
            should_quit: false,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.user().map(|u| u.username.as_str())
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Start logging in with the form contents.
    pub fn submit_login(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }
        self.login.error = None;
        let pending = self
            .session
            .begin_login(&self.login.username, &self.login.password, now);
        self.pending = Some(Pending::Login(pending));
    }

    pub fn submit_signup(&mut self) {
        self.signup.notice = Some(SIGNUP_UNAVAILABLE.to_string());
    }

    pub fn logout(&mut self) {
        self.session.logout();
        if self.pending.take().is_some() {
            tracing::debug!("dropping pending operation on logout");
        }
        self.screen = Screen::Login;
        self.login = LoginForm::default();
        self.nav = Navigation::new();
        self.cursor = 0;
        self.bucket = None;
        self.add_form = None;
        self.status = None;
    }

    // -----------------------------------------------------------------------
    // Pending operations
    // -----------------------------------------------------------------------

    /// Complete the pending operation if its delay has passed.
    pub fn tick(&mut self, now: Instant) {
        let due = match &self.pending {
            Some(Pending::Login(p)) => p.is_due(now),
            Some(Pending::AddFile(p)) => p.is_due(now),
            None => false,
        };
        if !due {
            return;
        }
        match self.pending.take() {
            Some(Pending::Login(p)) => self.finish_login(p),
            Some(Pending::AddFile(p)) => self.finish_add(p),
            None => {}
        }
    }

    fn finish_login(&mut self, pending: PendingLogin) {
        if self.screen != Screen::Login {
            tracing::debug!(username = %pending.username, "login finished after its screen closed");
            return;
        }
        match self.session.complete(pending) {
            Ok(_) => {
                self.login = LoginForm::default();
                self.screen = Screen::Dashboard;
            }
            Err(e) => self.login.error = Some(e.to_string()),
        }
    }

    fn finish_add(&mut self, pending: PendingAdd) {
        let still_open = self.screen == Screen::StudyFiles
            && self.add_form.is_some()
            && self.bucket.as_ref().is_some_and(|b| b.key == pending.bucket);
        if !still_open {
            tracing::debug!(bucket = %pending.bucket, "add finished after its view closed");
            return;
        }
        let Some(bucket) = self.bucket.as_mut() else {
            return;
        };
        let record = self.files.append(bucket, pending.file);
        self.add_form = None;
        self.cursor = bucket.files.len().saturating_sub(1);
        self.status = Some(if bucket.unsaved {
            format!("Added \"{}\" for this session only: could not save", record.name)
        } else {
            format!("Added \"{}\"", record.name)
        });
    }

    // -----------------------------------------------------------------------
    // Study files navigation
    // -----------------------------------------------------------------------

    pub fn open_study_files(&mut self) {
        self.screen = Screen::StudyFiles;
        self.nav = Navigation::new();
        self.cursor = 0;
        self.status = None;
        self.refresh_bucket();
    }

    /// Reload the bucket for the current path (or clear it outside a subject).
    fn refresh_bucket(&mut self) {
        self.bucket = self
            .nav
            .subject_key(&self.catalogue)
            .map(|key| self.files.open(key));
    }

    pub fn current(&self) -> Resolved<'_> {
        self.nav.resolve(&self.catalogue)
    }

    /// Labels of the current folder's children, in display order
    pub fn folder_labels(&self) -> Vec<String> {
        match self.current() {
            Resolved::Folder(children) => children.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Number of rows the cursor can move over
    pub fn item_count(&self) -> usize {
        match &self.bucket {
            Some(bucket) => bucket.files.len(),
            None => self.folder_labels().len(),
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.item_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let next = self.cursor as isize + delta;
        self.cursor = next.clamp(0, count as isize - 1) as usize;
    }

    /// Open the folder under the cursor, or show the link of the file under it.
    pub fn enter_selected(&mut self) {
        if let Some(bucket) = &self.bucket {
            if let Some(file) = bucket.files.get(self.cursor) {
                self.status = Some(format!("{}: {}", file.name, file.url));
            }
            return;
        }
        let labels = self.folder_labels();
        if let Some(label) = labels.get(self.cursor) {
            self.nav.enter(label);
            self.cursor = 0;
            self.status = None;
            self.refresh_bucket();
        }
    }

    /// Up one level; from the catalogue root, back to the dashboard.
    pub fn go_back(&mut self) {
        self.add_form = None;
        self.status = None;
        if self.nav.back() {
            self.cursor = 0;
            self.refresh_bucket();
        } else {
            self.screen = Screen::Dashboard;
            self.bucket = None;
        }
    }

    /// Breadcrumb jump. Depth 0 is the catalogue root.
    pub fn jump_to(&mut self, depth: usize) {
        if depth >= self.nav.depth() {
            return;
        }
        self.nav.truncate(depth);
        self.add_form = None;
        self.cursor = 0;
        self.status = None;
        self.refresh_bucket();
    }

    pub fn open_add_form(&mut self) {
        if self.bucket.is_some() {
            self.add_form = Some(AddFileForm::default());
        }
    }

    pub fn cancel_add_form(&mut self) {
        if !self.is_busy() {
            self.add_form = None;
        }
    }

    /// Validate the popup contents and start the delayed add.
    pub fn submit_add_file(&mut self, now: Instant) {
        if self.is_busy() {
            return;
        }
        let Some(key) = self.bucket.as_ref().map(|b| b.key.clone()) else {
            return;
        };
        let Some(form) = self.add_form.as_mut() else {
            return;
        };
        match validate_new_file(&form.name, &form.url) {
            Ok(file) => {
                form.error = None;
                self.pending = Some(Pending::AddFile(PendingAdd::new(
                    &key,
                    file,
                    now,
                    self.add_file_delay,
                )));
            }
            Err(e) => form.error = Some(e.to_string()),
        }
    }
}

/// Run the TUI application
pub fn run(
    config: &PortalConfig,
    store: Box<dyn KeyValueStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so pending logins/adds complete close to their due time
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use crate::model::catalogue::MINISTERIAL_FOLDER;
    use crate::ops::session::LOGIN_FAILED_MESSAGE;

    fn app() -> App {
        App::new(&PortalConfig::default(), Box::new(MemoryStore::new()))
    }

    fn logged_in() -> App {
        let mut app = app();
        app.login.username = "troy".into();
        app.login.password = "20".into();
        let now = Instant::now();
        app.submit_login(now);
        app.tick(now + Duration::from_secs(1));
        app
    }

    fn in_subject() -> App {
        let mut app = logged_in();
        app.open_study_files();
        app.enter_selected(); // ministerial folder
        app.enter_selected(); // intensive care
        app
    }

    #[test]
    fn login_waits_for_delay() {
        let mut app = app();
        app.login.username = "TROY".into();
        app.login.password = "20".into();
        let now = Instant::now();
        app.submit_login(now);
        assert!(app.is_busy());

        app.tick(now + Duration::from_millis(100));
        assert_eq!(app.screen, Screen::Login);

        app.tick(now + Duration::from_millis(700));
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.username(), Some("troy"));
        assert!(!app.is_busy());
    }

    #[test]
    fn failed_login_shows_generic_error() {
        let mut app = app();
        app.login.username = "troy".into();
        app.login.password = "wrong".into();
        let now = Instant::now();
        app.submit_login(now);
        app.tick(now + Duration::from_secs(1));
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.login.error.as_deref(), Some(LOGIN_FAILED_MESSAGE));
    }

    #[test]
    fn signup_is_a_no_op() {
        let mut app = app();
        app.screen = Screen::Signup;
        app.signup.username = "new".into();
        app.submit_signup();
        assert_eq!(app.signup.notice.as_deref(), Some(SIGNUP_UNAVAILABLE));
        assert!(!app.session.is_authenticated());
    }

    #[test]
    fn logout_returns_to_login() {
        let mut app = in_subject();
        app.logout();
        assert_eq!(app.screen, Screen::Login);
        assert!(app.session.user().is_none());
        assert!(app.bucket.is_none());
        assert!(app.nav.is_root());
    }

    #[test]
    fn browse_into_subject_opens_bucket() {
        let app = in_subject();
        assert_eq!(
            app.nav.breadcrumbs(),
            &[MINISTERIAL_FOLDER.to_string(), "العناية المركزة".to_string()]
        );
        let bucket = app.bucket.as_ref().unwrap();
        assert_eq!(bucket.key, "ministerial-intensive-care");
        assert!(bucket.files.is_empty());
    }

    #[test]
    fn back_from_root_goes_to_dashboard() {
        let mut app = in_subject();
        app.go_back();
        assert!(app.bucket.is_none());
        assert_eq!(app.folder_labels().len(), 2);
        app.go_back();
        assert_eq!(app.screen, Screen::StudyFiles);
        app.go_back();
        assert_eq!(app.screen, Screen::Dashboard);
    }

    #[test]
    fn breadcrumb_jump() {
        let mut app = in_subject();
        app.jump_to(0);
        assert!(app.nav.is_root());
        assert!(app.bucket.is_none());
    }

    #[test]
    fn add_file_after_delay() {
        let mut app = in_subject();
        app.open_add_form();
        let form = app.add_form.as_mut().unwrap();
        form.name = "Lecture 1".into();
        form.url = "https://example.com/l1.pdf".into();

        let now = Instant::now();
        app.submit_add_file(now);
        assert!(app.is_busy());
        app.tick(now + Duration::from_millis(500));

        assert!(app.add_form.is_none());
        let bucket = app.bucket.as_ref().unwrap();
        assert_eq!(bucket.files.len(), 1);
        assert_eq!(app.files.load("ministerial-intensive-care").len(), 1);
    }

    #[test]
    fn invalid_url_never_reaches_store() {
        let mut app = in_subject();
        app.open_add_form();
        let form = app.add_form.as_mut().unwrap();
        form.name = "bad".into();
        form.url = "not-a-url".into();

        app.submit_add_file(Instant::now());
        assert!(!app.is_busy());
        assert!(app.add_form.as_ref().unwrap().error.is_some());
        assert!(app.files.load("ministerial-intensive-care").is_empty());
    }

    #[test]
    fn add_abandoned_when_view_closes() {
        let mut app = in_subject();
        app.open_add_form();
        let form = app.add_form.as_mut().unwrap();
        form.name = "late".into();
        form.url = "https://example.com/late".into();
        let now = Instant::now();
        app.submit_add_file(now);

        app.logout();
        app.tick(now + Duration::from_secs(1));
        assert!(app.files.load("ministerial-intensive-care").is_empty());
    }

    #[test]
    fn add_form_only_in_subjects() {
        let mut app = logged_in();
        app.open_study_files();
        app.open_add_form();
        assert!(app.add_form.is_none());
    }

    #[test]
    fn cursor_clamps_to_items() {
        let mut app = logged_in();
        app.open_study_files();
        app.move_cursor(5);
        assert_eq!(app.cursor, 1);
        app.move_cursor(-9);
        assert_eq!(app.cursor, 0);
    }
}
