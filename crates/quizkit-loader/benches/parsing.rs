use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizkit_loader::parser::parse_definition_str;
use quizkit_loader::RecordFormat;

fn bench_definition_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("definition_parsing");

    let small = generate_quiz_toml(5);
    let medium = generate_quiz_toml(50);
    let large = generate_quiz_toml(200);

    group.bench_function("5_questions", |b| {
        b.iter(|| {
            parse_definition_str(
                black_box(&small),
                RecordFormat::Toml,
                black_box("bench.toml"),
            )
        })
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| {
            parse_definition_str(
                black_box(&medium),
                RecordFormat::Toml,
                black_box("bench.toml"),
            )
        })
    });

    group.bench_function("200_questions", |b| {
        b.iter(|| {
            parse_definition_str(
                black_box(&large),
                RecordFormat::Toml,
                black_box("bench.toml"),
            )
        })
    });

    group.finish();
}

fn generate_quiz_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[quiz]
id = "bench"
title = "Benchmark"
category = "bench"
icon = "cpu"

[quiz.metadata]
estimated_time = "1 min"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
id = "q{i}"
title = "Question {i}"
situation = "What is the answer to question {i}?"
options = ["first", "second", "third", "fourth"]
correct_answer = 2
explanation = "It was the third option all along."
difficulty = "intermediate"
points = 10
"#
        ));
    }
    s
}

criterion_group!(benches, bench_definition_parsing);
criterion_main!(benches);
