use std::hint::black_box;

use bubbletop::bubbles::pack::pack;
use bubbletop::system::process::{ProcessSample, SortMode};
use bubbletop::ui::bubble_widget::BubbleWidget;
use bubbletop::ui::theme::Theme;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn make_batch(n: usize) -> Vec<ProcessSample> {
    (0..n)
        .map(|i| ProcessSample {
            pid: i as u32 + 1,
            name: format!("proc_{i}"),
            cpu_percent: (n - i) as f32,
            mem_percent: ((n - i) as f32) / 10.0,
            threads: (i % 64) as u32 + 1,
            status: "Run".to_string(),
            start_time: 0,
            user: None,
        })
        .collect()
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    for n in [20, 100, 250] {
        let batch = make_batch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| black_box(pack(batch, SortMode::Cpu, 40, 160, 50)));
        });
    }
    group.finish();
}

fn bench_rasterize(c: &mut Criterion) {
    let batch = make_batch(100);
    let bubbles = pack(&batch, SortMode::Cpu, 40, 160, 50);
    let theme = Theme::default();

    c.bench_function("rasterize_40_bubbles", |b| {
        let backend = TestBackend::new(160, 50);
        let mut terminal = Terminal::new(backend).unwrap();
        b.iter(|| {
            terminal
                .draw(|frame| {
                    frame.render_widget(
                        BubbleWidget::new(&bubbles, SortMode::Cpu, &theme),
                        frame.area(),
                    );
                })
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_pack, bench_rasterize);
criterion_main!(benches);
