use criterion::{Criterion, criterion_group, criterion_main};
use dualmark_engine::{BlockKind, Document, Mark, Node, compute_overlay};

fn generate_document(sections: usize) -> Document {
    let mut children = Vec::new();
    for i in 0..sections {
        children.push(Node::block(
            BlockKind::Heading { level: 2 },
            vec![Node::text(&format!("Section {i}"))],
        ));
        children.push(Node::block(
            BlockKind::Paragraph,
            vec![
                Node::text("plain "),
                Node::marked_text("bold", vec![Mark::Strong]),
                Node::marked_text(
                    " nested",
                    vec![Mark::Strong, Mark::Emphasis],
                ),
                Node::marked_text(
                    " linked",
                    vec![Mark::Link {
                        href: format!("https://example.com/{i}"),
                    }],
                ),
            ],
        ));
        children.push(Node::block(
            BlockKind::OrderedList { start: 1 },
            (0..5)
                .map(|j| {
                    Node::block(
                        BlockKind::ListItem,
                        vec![Node::block(
                            BlockKind::Paragraph,
                            vec![Node::text(&format!("item {j}"))],
                        )],
                    )
                })
                .collect(),
        ));
    }
    Document::new(children).unwrap()
}

fn bench_overlay_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");
    group.sample_size(10);

    let doc = generate_document(100);

    group.bench_function("compute_source_mode", |b| {
        b.iter(|| {
            let overlay = compute_overlay(&doc, true);
            std::hint::black_box(overlay);
        });
    });

    group.bench_function("compute_mode_off", |b| {
        b.iter(|| {
            let overlay = compute_overlay(&doc, false);
            std::hint::black_box(overlay);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_overlay_computation);
criterion_main!(benches);
