//! Benchmarks for the per-frame cursor pipeline

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hand_gesture_control::constants::{
    INDEX_FINGER_DIP, INDEX_FINGER_TIP, MIDDLE_FINGER_DIP, MIDDLE_FINGER_TIP, NUM_HAND_LANDMARKS,
};
use hand_gesture_control::gesture::Action;
use hand_gesture_control::hand_detection::Landmark;
use hand_gesture_control::mapping::ScreenMapper;
use hand_gesture_control::posture::Posture;
use hand_gesture_control::smoothing::CursorSmoother;

fn noisy_fingertip_track(length: usize) -> Vec<(f64, f64)> {
    (0..length)
        .map(|i| {
            let t = i as f64 * 0.1;
            let x = 0.5 + 0.3 * t.sin() + 0.02 * rand::random::<f64>();
            let y = 0.5 + 0.3 * t.cos() + 0.02 * rand::random::<f64>();
            (x, y)
        })
        .collect()
}

fn random_hand() -> Vec<Landmark> {
    (0..NUM_HAND_LANDMARKS)
        .map(|_| Landmark {
            x: rand::random::<f32>(),
            y: rand::random::<f32>(),
            z: rand::random::<f32>() * 0.1,
        })
        .collect()
}

fn benchmark_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");

    let track = noisy_fingertip_track(100);
    let mapper = ScreenMapper::new(1.0);

    group.bench_function("single_map", |b| {
        b.iter(|| black_box(mapper.map(black_box(0.42), black_box(0.73), 1920, 1080)));
    });

    group.bench_with_input(BenchmarkId::new("sequence", 100), &track, |b, track| {
        b.iter(|| {
            for &(x, y) in track {
                black_box(mapper.map(black_box(x), black_box(y), 1920, 1080));
            }
        });
    });

    group.finish();
}

fn benchmark_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");

    let mapper = ScreenMapper::new(1.0);
    let track: Vec<_> = noisy_fingertip_track(100)
        .into_iter()
        .map(|(x, y)| mapper.map(x, y, 1920, 1080))
        .collect();

    for alpha in [0.2, 0.5, 0.8] {
        let mut smoother = CursorSmoother::new(alpha);

        group.bench_with_input(BenchmarkId::new("single_apply", alpha), &track[0], |b, &point| {
            b.iter(|| black_box(smoother.apply(black_box(point))));
        });

        group.bench_with_input(BenchmarkId::new("sequence_100", alpha), &track, |b, track| {
            b.iter(|| {
                smoother.reset();
                for &point in track {
                    black_box(smoother.apply(black_box(point)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_posture_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("posture");

    let hands: Vec<Vec<Landmark>> = (0..100).map(|_| random_hand()).collect();

    group.bench_function("classify_single_hand", |b| {
        let landmarks = &hands[0];
        b.iter(|| {
            let posture = Posture::from_landmarks(black_box(landmarks));
            black_box(Action::classify(posture))
        });
    });

    group.bench_with_input(BenchmarkId::new("classify_sequence", 100), &hands, |b, hands| {
        b.iter(|| {
            for landmarks in hands {
                let posture = Posture::from_landmarks(black_box(landmarks));
                black_box(Action::classify(posture));
            }
        });
    });

    group.finish();
}

fn benchmark_full_frame_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_path");

    let mapper = ScreenMapper::new(1.0);
    let mut smoother = CursorSmoother::new(0.5);
    let mut landmarks = random_hand();
    // Force a MOVE posture so the mapping and smoothing stages run
    landmarks[INDEX_FINGER_TIP].y = 0.3;
    landmarks[INDEX_FINGER_DIP].y = 0.5;
    landmarks[MIDDLE_FINGER_TIP].y = 0.7;
    landmarks[MIDDLE_FINGER_DIP].y = 0.5;

    group.bench_function("classify_map_smooth", |b| {
        b.iter(|| {
            let posture = Posture::from_landmarks(black_box(&landmarks));
            let action = Action::classify(posture);
            if action == Action::Move {
                let tip = &landmarks[INDEX_FINGER_TIP];
                let raw = mapper.map(f64::from(tip.x), f64::from(tip.y), 1920, 1080);
                black_box(smoother.apply(raw));
            }
            black_box(action)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mapping,
    benchmark_smoothing,
    benchmark_posture_classification,
    benchmark_full_frame_path
);
criterion_main!(benches);
