//! Rendering smoke tests using ratatui's `TestBackend`.

use ratatui::{Terminal, backend::TestBackend, style::Modifier};
use termtodo::app::App;
use termtodo::ui;
use termtodo_core::{Filter, TodoStore};

fn draw(app: &App) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal
}

fn lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

#[test]
fn demo_screen_shows_everything() {
    let app = App::default();
    let terminal = draw(&app);
    let lines = lines(&terminal);

    for needle in [
        "Todo App",
        "Total",
        "Active",
        "Completed",
        "Create a new todo...",
        "Complete online JavaScript course",
        "3 hours left",
        "Complete Todo App on Frontend Mentor",
        "Drag and drop to reorder list",
        "Clear Completed (1)",
        "TermTodo v",
    ] {
        assert!(screen_contains(&lines, needle), "missing {needle:?}");
    }
}

#[test]
fn completed_task_is_struck_through() {
    let app = App::default();
    let terminal = draw(&app);
    let buffer = terminal.backend().buffer();

    // First row: text cell starts after the 3-column toggle cell.
    let cell = &buffer[(4, 11)];
    assert_eq!(cell.symbol(), "C");
    assert!(cell.modifier.contains(Modifier::CROSSED_OUT));

    let open = &buffer[(4, 12)];
    assert!(!open.modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn empty_states_depend_on_filter() {
    let mut app = App::new(TodoStore::new());
    let all = lines(&draw(&app));
    assert!(screen_contains(&all, "No todos yet! Add one above."));
    assert!(!screen_contains(&all, "Clear Completed"));

    app.set_filter(Filter::Active);
    let active = lines(&draw(&app));
    assert!(screen_contains(&active, "No active todos."));
}

#[test]
fn notice_popup_is_drawn() {
    let mut app = App::new(TodoStore::new());
    app.submit_input();
    let lines = lines(&draw(&app));
    assert!(screen_contains(&lines, "Please enter a todo!"));
    assert!(screen_contains(&lines, "Press Enter to continue"));
}
