use common::{
    AnimationController, AnimationState, AnimationTuning, CharacterRig, CharacterTransform,
    CharacterTuning, ClipBinding, ClipBindings, ClipId, ClipSet, InputState, KeyBindings,
    KeyEvent, KeyEventHub, SharedInputState, bind_input_state,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn idle_states_over(splits: &[f32], rounds: usize) -> Vec<AnimationState> {
    let mut controller =
        AnimationController::new(ClipBindings::all(1.2), AnimationTuning::default());
    let mut states = Vec::new();
    for _ in 0..rounds {
        for &delta in splits {
            if controller.tick(delta, false).is_some() {
                states.push(controller.state());
            }
        }
    }
    states
}

#[test]
fn idle_swaps_once_per_five_seconds_however_time_is_split() {
    let expected = vec![
        AnimationState::IdleB,
        AnimationState::IdleA,
        AnimationState::IdleB,
        AnimationState::IdleA,
    ];

    // Every split sums to exactly 5s per round.
    assert_eq!(idle_states_over(&[5.0], 4), expected);
    assert_eq!(idle_states_over(&[2.5, 2.5], 4), expected);
    assert_eq!(idle_states_over(&[1.25, 0.25, 3.5], 4), expected);
    assert_eq!(idle_states_over(&[0.25; 20], 4), expected);
}

#[test]
fn moving_resets_the_idle_timer_from_any_value() {
    for elapsed in [0.0, 0.5, 2.0, 4.75] {
        for start_in_b in [false, true] {
            let mut controller =
                AnimationController::new(ClipBindings::all(1.0), AnimationTuning::default());
            if start_in_b {
                controller.tick(5.0, false);
                assert_eq!(controller.state(), AnimationState::IdleB);
            }
            controller.tick(elapsed, false);

            let crossfade = controller.tick(0.016, true).expect("walk transition");
            assert_eq!(crossfade.to, ClipId::Walk);
            assert_eq!(controller.state(), AnimationState::Walking);
            assert_eq!(controller.idle_timer(), 0.0);
        }
    }
}

#[test]
fn stopping_always_lands_in_idle_a() {
    let mut controller =
        AnimationController::new(ClipBindings::all(1.0), AnimationTuning::default());
    controller.tick(5.0, false);
    assert_eq!(controller.state(), AnimationState::IdleB);

    controller.tick(0.1, true);
    controller.tick(3.0, true);
    controller.tick(0.1, false);
    assert_eq!(controller.state(), AnimationState::IdleA);

    // The swap timer starts fresh after walking.
    assert_eq!(controller.tick(4.9, false), None);
    assert_eq!(controller.state(), AnimationState::IdleA);
}

#[test]
fn random_input_never_breaks_transition_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let bindings = ClipSet::new(
        Some(ClipBinding::new(1.0)),
        None,
        Some(ClipBinding::new(0.8)),
    );
    let mut controller = AnimationController::new(bindings, AnimationTuning::default());

    for _ in 0..5_000 {
        let before = controller.state();
        let delta = rng.gen_range(0.0..0.5);
        let moving = rng.gen_bool(0.3);

        let crossfade = controller.tick(delta, moving);
        let after = controller.state();

        match crossfade {
            Some(crossfade) => {
                assert_eq!(crossfade.from, before.clip());
                assert_eq!(crossfade.to, after.clip());
                assert_ne!(before, after);
            }
            None => assert_eq!(before, after),
        }

        assert_eq!(after.is_idle(), !moving);
        if after == AnimationState::Walking {
            assert_eq!(controller.idle_timer(), 0.0);
        }
        assert_eq!(controller.weights().idle_b, None);

        let total: f32 = controller.weights().iter().filter_map(|(_, w)| *w).sum();
        assert!(total <= 2.0 + 1e-4, "total weight {total}");
    }
}

#[test]
fn zero_delta_is_idempotent() {
    let mut rig = CharacterRig::new(ClipBindings::all(1.0), &CharacterTuning::default())
        .with_transform(CharacterTransform::new(1.0, 2.0, 0.5));
    rig.mount();

    let walking = InputState {
        forward: true,
        left: true,
        ..Default::default()
    };
    rig.tick(0.2, &walking);
    let before = rig.clone();

    let output = rig.tick(0.0, &walking).unwrap();
    assert_eq!(output.crossfade, None);
    assert_eq!(rig, before);
}

#[test]
fn keyboard_events_drive_the_rig() {
    let shared = SharedInputState::new();
    let mut hub = KeyEventHub::new();
    let subscription = bind_input_state(&mut hub, shared.clone(), KeyBindings::default());

    let mut rig = CharacterRig::new(ClipBindings::all(1.0), &CharacterTuning::default());
    rig.mount();

    hub.dispatch(&KeyEvent::down("ArrowUp"));
    let output = rig.tick(1.0, &shared.snapshot()).unwrap();
    assert_eq!(rig.animation().state(), AnimationState::Walking);
    assert!((output.transform.z - 2.0).abs() < 1e-6);

    hub.dispatch(&KeyEvent::up("ArrowUp"));
    rig.tick(0.1, &shared.snapshot());
    assert_eq!(rig.animation().state(), AnimationState::IdleA);

    // Unmount releases the subscription; later events are not observed.
    rig.unmount();
    assert!(hub.unsubscribe(subscription));
    shared.update(InputState::clear);
    hub.dispatch(&KeyEvent::down("ArrowUp"));
    assert!(!shared.snapshot().forward);
}
