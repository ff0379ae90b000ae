use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use common::{CharacterRig, CharacterTuning, ClipBindings, InputState};

const FRAME: f32 = 1.0 / 60.0;

fn mounted_rig() -> CharacterRig {
    let mut rig = CharacterRig::new(ClipBindings::all(1.1), &CharacterTuning::default());
    rig.mount();
    rig
}

fn bench_rig_tick(c: &mut Criterion) {
    let idle = InputState::default();
    let walking = InputState {
        forward: true,
        right: true,
        ..Default::default()
    };

    let mut group = c.benchmark_group("rig_tick");
    for (label, input) in [("idle", idle), ("walking", walking)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, input| {
            let mut rig = mounted_rig();
            b.iter(|| black_box(rig.tick(black_box(FRAME), input)));
        });
    }
    group.finish();

    c.bench_function("rig_tick/alternating", |b| {
        let mut rig = mounted_rig();
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            let input = if frame % 30 < 15 { &walking } else { &idle };
            black_box(rig.tick(FRAME, input))
        });
    });
}

criterion_group!(benches, bench_rig_tick);
criterion_main!(benches);
