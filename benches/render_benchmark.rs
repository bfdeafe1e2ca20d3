//! Performance benchmarks for frame rendering
//!
//! Measures full-frame render time per screen and per terminal size.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use folio::app::{App, Screen};
use folio::ui;

fn app_on(screen: Screen) -> App {
    let mut app = App::new();
    app.navigate_to(screen);
    // Settle the entry animations so frames are steady-state
    for _ in 0..200 {
        app.tick();
    }
    app
}

/// Benchmark a full frame for each screen at a typical terminal size
fn bench_render_screens(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_screen");

    for screen in Screen::ALL {
        let mut app = app_on(screen);
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(screen.title()),
            &screen,
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|frame| ui::render(frame, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the projects view across terminal sizes, since it does the
/// most per-frame work (card stagger, hit-area recording, scrolling)
fn bench_render_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_projects_sized");

    for (width, height) in [(80u16, 24u16), (120, 40), (200, 60)] {
        let mut app = app_on(Screen::Projects);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    terminal
                        .draw(|frame| ui::render(frame, black_box(&mut app)))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a tick plus redraw, the steady-state cost of the animated
/// backgrounds
fn bench_tick_and_render(c: &mut Criterion) {
    let mut app = app_on(Screen::Home);
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();

    c.bench_function("tick_and_render_home", |b| {
        b.iter(|| {
            app.tick();
            terminal
                .draw(|frame| ui::render(frame, black_box(&mut app)))
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_render_screens,
    bench_render_sizes,
    bench_tick_and_render
);
criterion_main!(benches);
