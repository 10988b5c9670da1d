//! Application state and core logic

use crate::config::TuiConfig;
use crate::sink::{LogSink, SupportSink};
use crate::state::{AppState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for submitted support requests
    sink: Box<dyn SupportSink>,
    /// How long the event loop waits for input before redrawing
    pub poll_interval: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the logging sink
    pub fn new(config: &TuiConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    /// Create a new App instance with a custom support sink
    #[allow(clippy::field_reassign_with_default)]
    pub fn with_sink(config: &TuiConfig, sink: Box<dyn SupportSink>) -> Self {
        let mut state = AppState::default();
        state.current_view = config.initial_view();

        Self {
            state,
            sink,
            poll_interval: config.poll_interval(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance time-based state
    pub fn tick(&mut self, now: Instant) {
        if self.state.support_form.tick(now) {
            tracing::debug!("support form reset after confirmation");
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Home => self.handle_home_key(key)?,
            View::Support => self.handle_support_key(key).await?,
        }
        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        // Leaving the support page discards any draft or pending confirmation
        if self.state.current_view == View::Support {
            self.state.support_form.reset();
        }
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if self.state.current_view == View::Support {
            self.state.support_form.reset();
        }
        self.state.current_view = self.state.view_history.pop().unwrap_or(View::Home);
    }

    /// Handle keys in the dashboard view
    fn handle_home_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('s') | KeyCode::Enter => self.navigate(View::Support),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the support view
    async fn handle_support_key(&mut self, key: KeyEvent) -> Result<()> {
        // While the confirmation is showing, only Esc is routed
        if self.state.support_form.is_submitted() {
            if key.code == KeyCode::Esc {
                self.go_back();
            }
            return Ok(());
        }

        let on_actions_row = self.state.support_form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => self.state.support_form.next_field(),
            KeyCode::BackTab => self.state.support_form.prev_field(),
            // Left/Right for action row navigation
            KeyCode::Left if on_actions_row => self.state.support_form.prev_button(),
            KeyCode::Right if on_actions_row => self.state.support_form.next_button(),
            // Enter on the actions row triggers the selected button
            // Button order: 0=Clear, 1=Submit Request
            KeyCode::Enter if on_actions_row => match self.state.support_form.selected_button {
                0 => self.state.support_form.clear(),
                1 => self.submit_support_request().await,
                _ => {}
            },
            // Keyboard shortcut (works from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_support_request().await;
            }
            KeyCode::Esc => self.go_back(),
            // Form field input (only when not on the actions row)
            KeyCode::Char(c) if !on_actions_row => self.state.support_form.insert_char(c),
            KeyCode::Backspace if !on_actions_row => self.state.support_form.backspace(),
            KeyCode::Enter if !on_actions_row => {
                // Enter in the problem field adds newline
                if self
                    .state
                    .support_form
                    .active_field()
                    .is_some_and(|field| field.is_multiline)
                {
                    self.state.support_form.insert_char('\n');
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Submit the support form, forwarding the snapshot when the form accepts it
    async fn submit_support_request(&mut self) {
        if let Some(request) = self.state.support_form.submit(Instant::now()) {
            self.sink.submit(&request).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockSupportSink;
    use crate::state::SupportRequest;
    use mockall::predicate;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn test_app() -> App {
        App::with_sink(&TuiConfig::default(), Box::new(MockSupportSink::new()))
    }

    async fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_starts_on_home_by_default() {
            let app = test_app();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_start_view_from_config() {
            let config = TuiConfig {
                start_view: Some("support".to_string()),
                ..Default::default()
            };
            let app = App::with_sink(&config, Box::new(MockSupportSink::new()));
            assert_eq!(app.state.current_view, View::Support);
        }

        #[tokio::test]
        async fn test_s_opens_support() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Support);
        }

        #[tokio::test]
        async fn test_enter_opens_support() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.current_view, View::Support);
        }

        #[tokio::test]
        async fn test_esc_returns_home() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[test]
        fn test_go_back_defaults_to_home_with_empty_history() {
            let mut app = App::with_sink(
                &TuiConfig {
                    start_view: Some("support".to_string()),
                    ..Default::default()
                },
                Box::new(MockSupportSink::new()),
            );
            app.go_back();
            assert_eq!(app.state.current_view, View::Home);
        }

        #[tokio::test]
        async fn test_leaving_support_resets_draft() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            type_str(&mut app, "Jo").await;
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            assert!(app.state.support_form.draft().is_empty());
        }

        #[tokio::test]
        async fn test_q_quits_on_home() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_q_types_into_field_on_support() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            assert_eq!(app.state.support_form.draft().name.as_text(), "q");
        }
    }

    mod submission {
        use super::*;

        fn expecting_sink(request: SupportRequest) -> MockSupportSink {
            let mut mock = MockSupportSink::new();
            mock.expect_submit()
                .with(predicate::eq(request))
                .times(1)
                .returning(|_| ());
            mock
        }

        async fn fill_form(app: &mut App) {
            type_str(app, "Jo").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(app, "jo@x.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_str(app, "help").await;
        }

        #[tokio::test]
        async fn test_submit_button_forwards_snapshot_once() {
            let mock = expecting_sink(SupportRequest {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                problem: "help".to_string(),
            });
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(mock));
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();

            fill_form(&mut app).await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.support_form.is_submitted());
        }

        #[tokio::test]
        async fn test_ctrl_s_submits_from_any_field() {
            let mock = expecting_sink(SupportRequest {
                name: "Jo".to_string(),
                email: String::new(),
                problem: String::new(),
            });
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(mock));
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();

            type_str(&mut app, "Jo").await;
            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.state.support_form.is_submitted());
        }

        #[tokio::test]
        async fn test_keys_ignored_while_submitted() {
            let mock = expecting_sink(SupportRequest {
                name: "Jo".to_string(),
                email: String::new(),
                problem: String::new(),
            });
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(mock));
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            type_str(&mut app, "Jo").await;
            app.handle_key(ctrl('s')).await.unwrap();

            // Typing, shortcuts and button presses are all swallowed
            type_str(&mut app, "ignored").await;
            app.handle_key(ctrl('s')).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.support_form.is_submitted());
            assert_eq!(app.state.support_form.draft().name.as_text(), "Jo");
        }

        #[tokio::test]
        async fn test_clear_button_empties_fields() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            fill_form(&mut app).await;

            // Move to the actions row and select Clear
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.support_form.is_submitted());
            assert!(app.state.support_form.draft().is_empty());
        }

        #[tokio::test]
        async fn test_enter_adds_newline_in_problem_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();

            type_str(&mut app, "line one").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_str(&mut app, "line two").await;

            assert_eq!(
                app.state.support_form.draft().problem.as_text(),
                "line one\nline two"
            );
        }

        #[tokio::test]
        async fn test_enter_in_single_line_field_does_nothing() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            type_str(&mut app, "Jo").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(!app.state.support_form.is_submitted());
            assert_eq!(app.state.support_form.draft().name.as_text(), "Jo");
        }
    }

    mod ticking {
        use super::*;

        #[tokio::test]
        async fn test_tick_resets_form_after_confirmation() {
            let mock = expecting_any_sink();
            let mut app = App::with_sink(&TuiConfig::default(), Box::new(mock));
            app.handle_key(key(KeyCode::Char('s'))).await.unwrap();
            type_str(&mut app, "Jo").await;
            app.handle_key(ctrl('s')).await.unwrap();
            assert!(app.state.support_form.is_submitted());

            app.tick(Instant::now() + Duration::from_secs(4));

            assert!(!app.state.support_form.is_submitted());
            assert!(app.state.support_form.draft().is_empty());
        }

        fn expecting_any_sink() -> MockSupportSink {
            let mut mock = MockSupportSink::new();
            mock.expect_submit().times(1).returning(|_| ());
            mock
        }
    }
}
