#[cfg(test)]
mod ui_render_tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::path::Path;

    use crate::app::App;
    use crate::config::Config;
    use crate::db::Database;
    use crate::links::LinkOpener;
    use crate::models::{Notice, Screen};
    use crate::ui;

    struct NullOpener;

    impl LinkOpener for NullOpener {
        fn open_url(&self, _url: &str) {}
    }

    fn create_test_app() -> App {
        let config = Config::from_dir(Path::new("/tmp/starlens-ui-tests")).unwrap();
        let db = Database::open_in_memory().unwrap();
        App::new(config, db, Box::new(NullOpener)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Registers and logs in "ada", leaving the app on the main menu.
    fn logged_in_app() -> App {
        let mut app = create_test_app();
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_screen(), Screen::MainMenu);
        app
    }

    fn render(app: &App) -> Buffer {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn screen_text(app: &App) -> String {
        buffer_text(&render(app))
    }

    #[test]
    fn test_login_screen_masks_password() {
        let mut app = create_test_app();
        type_text(&mut app, "ada");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "secret");

        let text = screen_text(&app);
        assert!(text.contains("Astronomy Explorer"));
        assert!(text.contains("ada"));
        assert!(text.contains("******"));
        assert!(!text.contains("secret"), "Password must never be drawn");
    }

    #[test]
    fn test_main_menu_lists_all_entries() {
        let app = logged_in_app();
        let text = screen_text(&app);

        assert!(text.contains("Welcome, ada"));
        for label in ["[1] Profile", "[2] Schedule", "[3] Quiz", "[4] Learning Section", "[5] Logout"] {
            assert!(text.contains(label), "Missing menu entry {label}");
        }
    }

    #[test]
    fn test_failed_login_shows_error_notice() {
        let mut app = create_test_app();
        type_text(&mut app, "nobody");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Enter);

        let text = screen_text(&app);
        assert!(text.contains("Invalid username or password"));
        assert!(text.contains("Press Enter to continue"));
    }

    #[test]
    fn test_profile_without_history() {
        let mut app = logged_in_app();
        type_text(&mut app, "1");

        let text = screen_text(&app);
        assert!(text.contains("ada's Profile"));
        assert!(text.contains("Total Quizzes: 0"));
        assert!(text.contains("Average Score: 0.0%"));
        assert!(text.contains("No quizzes taken yet"));
    }

    #[test]
    fn test_quiz_flow_renders_question_then_profile() {
        let mut app = logged_in_app();
        type_text(&mut app, "3");
        assert!(screen_text(&app).contains("Enter your age"));

        type_text(&mut app, "9");
        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Question 1/10 (Easy)"));
        assert!(text.contains("Which planet is known as the Red Planet?"));
        assert!(text.contains("2. Mars"));

        for _ in 0..10 {
            type_text(&mut app, "1");
        }
        let text = screen_text(&app);
        assert!(text.contains("Quiz Completed"));
        assert!(text.contains("ada's Profile"));
        assert!(text.contains("Total Quizzes: 1"));
    }

    #[test]
    fn test_learning_marks_completed_topics() {
        let mut app = logged_in_app();
        type_text(&mut app, "4");
        assert!(screen_text(&app).contains("[ ] Planets"));

        type_text(&mut app, "c");
        press(&mut app, KeyCode::Enter);
        assert!(screen_text(&app).contains("[✓] Planets"));
    }

    #[test]
    fn test_schedule_shows_defaults_then_editor() {
        let mut app = logged_in_app();
        type_text(&mut app, "2");

        let text = screen_text(&app);
        assert!(text.contains("Observation Schedule"));
        assert!(text.contains("Midnight (12 AM): Orion Nebula"));
        assert!(text.contains("Suggested events"));

        type_text(&mut app, "a");
        assert!(screen_text(&app).contains("Add Event"));
    }

    #[test]
    fn test_error_notice_is_drawn_over_screen() {
        let mut app = logged_in_app();
        app.notice = Some(Notice::error("Storage Error", "disk I/O error"));

        let text = screen_text(&app);
        assert!(text.contains("Storage Error"));
        assert!(text.contains("disk I/O error"));
        assert!(text.contains("Welcome, ada"));
    }

    #[test]
    fn test_very_wide_terminal_draws_notice() {
        let mut app = logged_in_app();
        app.notice = Some(Notice::info("Completed", "Marked as completed!"));

        let backend = TestBackend::new(1200, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Marked as completed!"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = logged_in_app();
        app.notice = Some(Notice::info("Title", "a fairly long message ".repeat(10)));

        let backend = TestBackend::new(20, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw(f, &app)).unwrap();
    }
}
