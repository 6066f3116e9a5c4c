// Integration tests for user-admin-tui

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::json;
use user_admin_tui::api::{Company, User, UsersClient};
use user_admin_tui::app::tasks::Dispatcher;
use user_admin_tui::app::update::{CREATE_FAILURE, CREATE_SUCCESS, apply_event, handle_key};
use user_admin_tui::app::{ApiEvent, AppState, Command, InputMode, LoadState};
use user_admin_tui::error::{FetchError, Operation};
use user_admin_tui::ui;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mk_user(id: u64, name: &str, email: &str, company: &str) -> User {
    User { id, name: name.into(), email: email.into(), company: Company::new(company) }
}

fn seeded(n: u64) -> AppState {
    let mut app = AppState::default();
    let users = (1..=n)
        .map(|i| mk_user(i, &format!("Person {i}"), &format!("p{i}@example.com"), "Acme"))
        .collect();
    apply_event(&mut app, ApiEvent::UsersLoaded(Ok(users)));
    app
}

fn screen(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

// 1) Creating "Ada" without a company ends up visible with the default company
#[test]
fn create_flow_appends_user_with_default_company() {
    let mut app = seeded(3);
    handle_key(&mut app, key(KeyCode::Char('n')));
    for c in "Ada".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    handle_key(&mut app, key(KeyCode::Tab));
    for c in "ada@x.com".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    let cmd = handle_key(&mut app, key(KeyCode::Enter));
    let Some(Command::CreateUser(new)) = cmd else { panic!("expected a create command") };
    assert!(new.company.is_none());

    // What the server echoes back for that request.
    let company = new.company.clone().unwrap_or_default();
    let echoed = mk_user(1_700_000_000_000, &new.name, &new.email, &company.name);
    apply_event(&mut app, ApiEvent::UserCreated(Ok(echoed)));

    let last = app.users.last().unwrap();
    assert_eq!(last.name, "Ada");
    assert_eq!(last.company.name, "New Company");
    assert_eq!(app.toast.message, CREATE_SUCCESS);
}

// 2) Search resets the page and only keeps matching users
#[test]
fn search_narrows_list_and_resets_page() {
    let mut app = seeded(20);
    let mut users = app.users_all.clone();
    users[13].company = Company::new("Globex");
    apply_event(&mut app, ApiEvent::UsersLoaded(Ok(users)));
    handle_key(&mut app, key(KeyCode::End));
    assert_eq!(app.paging.page, 4);

    handle_key(&mut app, key(KeyCode::Char('/')));
    for c in "GLOB".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    assert_eq!(app.input_mode, InputMode::Search);
    assert_eq!(app.paging.page, 1);
    assert_eq!(app.users.len(), 1);
    assert_eq!(app.users[0].id, 14);
}

// 3) Rendering: stats, table rows and pagination footer
#[test]
fn renders_stats_table_and_footer() {
    let app = seeded(12);
    let out = screen(&app, 120, 30);
    assert!(out.contains("Total Users"));
    assert!(out.contains("Filtered Results"));
    assert!(out.contains("1 / 3"));
    assert!(out.contains("Person 1"));
    assert!(out.contains("p5@example.com"));
    assert!(!out.contains("Person 6 "));
    assert!(out.contains("Showing 1 to 5 of 12 results"));
}

#[test]
fn footer_hidden_when_everything_fits() {
    let app = seeded(5);
    let out = screen(&app, 120, 30);
    assert!(!out.contains("Showing"));
    assert!(out.contains("1 / 1"));
}

#[test]
fn renders_empty_states() {
    let mut app = seeded(0);
    assert!(screen(&app, 100, 24).contains("No users available"));

    app = seeded(3);
    handle_key(&mut app, key(KeyCode::Char('/')));
    for c in "zzz".chars() {
        handle_key(&mut app, key(KeyCode::Char(c)));
    }
    let out = screen(&app, 100, 24);
    assert!(out.contains("No users found"));
    assert!(out.contains("Try adjusting your search terms."));
    assert!(out.contains("1 / 1"));
}

#[test]
fn renders_loading_then_error_panel() {
    let mut app = AppState::default();
    assert!(screen(&app, 100, 24).contains("Loading users..."));

    let err = FetchError::Status { op: Operation::ListUsers, status: 500 };
    apply_event(&mut app, ApiEvent::UsersLoaded(Err(err)));
    let out = screen(&app, 100, 24);
    assert!(out.contains("Error Loading Data"));
    assert!(out.contains("Failed to fetch users"));
}

#[test]
fn renders_form_and_toast() {
    let mut app = seeded(2);
    handle_key(&mut app, key(KeyCode::Char('n')));
    let out = screen(&app, 100, 30);
    assert!(out.contains("Add New User"));
    assert!(out.contains("Company:"));

    handle_key(&mut app, key(KeyCode::Esc));
    app.toast.error(CREATE_FAILURE);
    let out = screen(&app, 100, 30);
    assert!(out.contains(CREATE_FAILURE));
}

#[test]
fn toast_width_counts_characters_not_bytes() {
    let mut app = seeded(2);
    app.toast.error("é".repeat(40));
    let out = screen(&app, 100, 30);
    let top = out.lines().nth(26).unwrap_or_default();
    // 40 columns of text plus borders and padding, one column from the right edge
    assert_eq!(top.chars().nth(55), Some('┌'));
    assert!(out.contains(&"é".repeat(40)));
}

#[test]
fn renders_in_a_tiny_terminal_without_panicking() {
    let mut app = seeded(8);
    app.toast.success(CREATE_SUCCESS);
    let _ = screen(&app, 20, 8);
    handle_key(&mut app, key(KeyCode::Char('?')));
    let _ = screen(&app, 20, 8);
}

// 4) End to end: a failed create is followed by a refetch that restores server state
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failed_create_resyncs_with_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Leanne Graham", "email": "Sincere@april.biz", "company": { "name": "Romaguera-Crona" } },
            { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "company": { "name": "Deckow-Crist" } }
        ])))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = UsersClient::new(&server.uri()).unwrap();
    let (dispatcher, mut events) = Dispatcher::new(client, tokio::runtime::Handle::current());
    let mut app = AppState::default();

    dispatcher.dispatch(Command::FetchUsers);
    let ev = events.recv().await.unwrap();
    assert_eq!(apply_event(&mut app, ev), None);
    assert_eq!(app.load, LoadState::Ready);
    let canonical = app.users_all.clone();

    app.pending_creates = 1;
    dispatcher.dispatch(Command::CreateUser(user_admin_tui::api::NewUser::new("Ada", "ada@x.com")));
    let ev = events.recv().await.unwrap();
    let follow_up = apply_event(&mut app, ev);
    assert_eq!(follow_up, Some(Command::FetchUsers));
    assert_eq!(app.toast.message, CREATE_FAILURE);

    dispatcher.dispatch(Command::FetchUsers);
    let ev = events.recv().await.unwrap();
    apply_event(&mut app, ev);
    assert_eq!(app.users_all, canonical);
    assert!(app.users_all.iter().all(|u| u.name != "Ada"));
    assert_eq!(app.pending_creates, 0);
}
