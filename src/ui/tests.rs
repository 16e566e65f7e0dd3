use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::config::Config;
use crate::system::process::ProcessSample;
use crate::ui;

fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = buf.cell((x, y)).unwrap();
            out.push_str(cell.symbol());
        }
        if y + 1 < area.height {
            out.push('\n');
        }
    }
    out
}

fn render_app(width: u16, height: u16, app: &App) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn make_sample(pid: u32, name: &str, cpu: f32) -> ProcessSample {
    ProcessSample {
        pid,
        name: name.to_string(),
        cpu_percent: cpu,
        mem_percent: 1.0,
        threads: 4,
        status: "Run".to_string(),
        start_time: 1_700_000_000,
        user: Some("user".to_string()),
    }
}

#[test]
fn frame_has_exact_dimensions() {
    let mut app = App::new(Config::default());
    app.on_batch(vec![
        make_sample(1, "alpha", 50.0),
        make_sample(2, "beta", 50.0),
        make_sample(3, "gamma", 10.0),
    ]);

    let out = render_app(40, 20, &app);
    let rows: Vec<&str> = out.split('\n').collect();
    assert_eq!(rows.len(), 20);
    for row in rows {
        assert_eq!(row.chars().count(), 40);
    }
}

#[test]
fn empty_batch_renders_blank_canvas_with_chrome() {
    let app = App::new(Config::default());
    let out = render_app(80, 24, &app);
    let rows: Vec<&str> = out.split('\n').collect();

    assert!(rows[0].contains("Sorted by CPU% | Showing: 20"));
    assert!(rows[23].contains("Total: 0"));
    assert!(rows[23].contains("[q]uit"));
    for row in &rows[1..23] {
        assert!(row.chars().all(|c| c == ' '), "canvas row not blank: {row:?}");
    }
}

#[test]
fn bubbles_and_labels_are_drawn() {
    let mut app = App::new(Config::default());
    app.on_batch(vec![
        make_sample(1, "alpha", 50.0),
        make_sample(2, "beta", 50.0),
        make_sample(3, "gamma", 10.0),
    ]);

    let out = render_app(40, 20, &app);
    assert!(out.contains('\u{25CB}'), "expected circle outlines");
    // Top-ranked bubble sits at the canvas center, label included.
    assert!(out.contains("alpha 50.0%"));
}

#[test]
fn long_names_are_truncated_in_labels() {
    let mut app = App::new(Config::default());
    app.on_batch(vec![make_sample(1, "a_very_long_process_name", 50.0)]);

    let out = render_app(60, 20, &app);
    assert!(out.contains("a_very_lo..."));
    assert!(!out.contains("a_very_long_process_name"));
}

#[test]
fn thread_mode_labels_use_counts() {
    let mut app = App::new(Config::default());
    app.on_batch(vec![make_sample(1, "alpha", 50.0)]);
    let action = app.map_key(crossterm::event::KeyEvent::new(
        crossterm::event::KeyCode::Char('t'),
        crossterm::event::KeyModifiers::NONE,
    ));
    app.dispatch(action);

    let out = render_app(60, 20, &app);
    assert!(out.contains("alpha 4"));
    assert!(!out.contains("alpha 4%"));
    assert!(out.lines().next().unwrap().contains("Threads"));
}

#[test]
fn fetch_failure_short_circuits_to_error_view() {
    let mut app = App::new(Config::default());
    app.on_batch(vec![make_sample(1, "alpha", 50.0)]);
    app.on_batch_failed("failed to enumerate processes".to_string());

    let out = render_app(40, 20, &app);
    assert!(out.contains("Error: failed to enumerate processes"));
    assert!(out.contains("Press q to quit."));
    assert!(!out.contains('\u{25CB}'), "no bubbles while error is sticky");
}

#[test]
fn successful_batch_replaces_error_view() {
    let mut app = App::new(Config::default());
    app.on_batch_failed("boom".to_string());
    app.on_batch(vec![make_sample(1, "alpha", 50.0)]);

    let out = render_app(40, 20, &app);
    assert!(!out.contains("Error:"));
    assert!(out.contains('\u{25CB}'));
}
