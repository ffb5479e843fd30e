use zzpet::*;

fn engine(config: PetConfig) -> ActionEngine<RecordingView> {
    ActionEngine::with_view(config.into_state().unwrap(), RecordingView::new())
}

/// Test one treat from the default starting state.
#[test]
fn test_single_treat_from_start() {
    let mut engine = ActionEngine::default();
    engine.treat();

    let expected = PetConfig {
        weight: 11,
        happiness: 6,
        hunger: 60,
        energy: 68,
        level: 1,
        exp: 5,
        ..Default::default()
    }
    .into_state()
    .unwrap();
    assert_eq!(engine.snapshot(), expected);
}

/// Test that five treats accumulate experience without leveling.
#[test]
fn test_five_treats_accumulate_exp() {
    let mut engine = ActionEngine::default();
    for _ in 0..5 {
        engine.treat();
    }

    assert_eq!(engine.state().exp(), 25);
    assert_eq!(engine.state().level(), 1);
}

/// Test that the tenth treat levels up exactly once.
#[test]
fn test_tenth_treat_levels_up() {
    let mut engine = ActionEngine::default();
    for _ in 0..9 {
        let outcome = engine.treat();
        assert_eq!(outcome.leveled_up(), None);
    }
    assert_eq!(engine.state().exp(), 45);

    let outcome = engine.treat();
    assert_eq!(outcome.leveled_up(), Some(2));
    assert_eq!(engine.state().exp(), 0);
    assert_eq!(engine.state().level(), 2);
    assert_eq!(
        outcome.displayed_message(),
        Some("LEVEL UP! New level: 2".to_string())
    );

    // Hunger saturated at 100 along the way.
    assert_eq!(engine.state().hunger(), 100);
    assert_eq!(engine.state().energy(), 50);
}

/// Test exhausting a level 1 pet: it is too tired, but keeps its level.
#[test]
fn test_energy_zero_at_level_one() {
    let mut engine = engine(PetConfig {
        hunger: 100,
        energy: 45,
        ..Default::default()
    });

    engine.exercise();
    engine.exercise();
    let outcome = engine.exercise();

    assert_eq!(engine.state().energy(), 0);
    assert_eq!(engine.state().level(), 1);
    assert_eq!(outcome.danger_events(), vec![DangerEvent::TooTired]);
    assert_eq!(
        engine.view().current_message(),
        Some("Your pet is too tired to continue!")
    );
}

/// Test exhausting a level 2 pet: it drops to level 1.
#[test]
fn test_energy_zero_at_level_two() {
    let mut engine = engine(PetConfig {
        hunger: 100,
        energy: 45,
        level: 2,
        ..Default::default()
    });

    engine.exercise();
    engine.exercise();
    let outcome = engine.exercise();

    assert_eq!(engine.state().level(), 1);
    assert_eq!(outcome.danger_events(), vec![DangerEvent::Exhausted { level: 1 }]);
    assert_eq!(
        outcome.displayed_message(),
        Some("Your pet is exhausted! Level decreased.".to_string())
    );
}

/// Test that the penalty repeats while energy stays at zero.
#[test]
fn test_exhaustion_repeats_each_pass() {
    let mut engine = engine(PetConfig {
        energy: 0,
        level: 4,
        ..Default::default()
    });

    engine.play();
    assert_eq!(engine.state().level(), 3);
    engine.play();
    assert_eq!(engine.state().level(), 2);
    engine.play();
    assert_eq!(engine.state().level(), 1);
    engine.play();
    assert_eq!(engine.state().level(), 1);
}

/// Test starvation forces level 0 regardless of prior level.
#[test]
fn test_hunger_zero_resets_level() {
    let mut engine = engine(PetConfig {
        hunger: 30,
        level: 5,
        ..Default::default()
    });

    engine.exercise();
    engine.exercise();
    let outcome = engine.exercise();

    assert_eq!(engine.state().hunger(), 0);
    assert_eq!(engine.state().level(), 0);
    assert_eq!(
        outcome.danger_events(),
        vec![DangerEvent::Starved { previous_level: 5 }]
    );
}

/// Test both danger checks in one pass: energy first, starvation last.
#[test]
fn test_energy_and_hunger_zero_same_pass() {
    let mut engine = engine(PetConfig {
        hunger: 30,
        energy: 45,
        level: 3,
        ..Default::default()
    });

    engine.exercise();
    engine.exercise();
    let outcome = engine.exercise();

    assert_eq!(
        outcome.danger_events(),
        vec![
            DangerEvent::Exhausted { level: 2 },
            DangerEvent::Starved { previous_level: 2 },
        ]
    );
    assert_eq!(engine.state().level(), 0);
    assert_eq!(
        engine.view().current_message(),
        Some("Your pet has starved... Level reset to 0.")
    );
}

/// Test five exercises from the default start, where everything fires at once.
#[test]
fn test_five_exercises_from_start() {
    let mut engine = ActionEngine::default();
    for _ in 0..4 {
        engine.exercise();
    }
    let outcome = engine.exercise();

    // Energy and hunger both reach 0 on the fifth exercise, and the
    // experience hits 50 in the same pass.
    assert_eq!(
        outcome.events,
        vec![
            PetEvent::Action(Action::Exercise),
            PetEvent::Danger(DangerEvent::TooTired),
            PetEvent::Danger(DangerEvent::Starved { previous_level: 1 }),
            PetEvent::LevelUp { level: 1 },
        ]
    );
    let state = engine.state();
    assert_eq!(state.energy(), 0);
    assert_eq!(state.hunger(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.exp(), 0);
    assert_eq!(state.weight(), 0);
    assert_eq!(state.happiness(), 0);
}

/// Test that a starved pet recovers with treats; level 0 is not game over.
#[test]
fn test_recovery_from_level_zero() {
    let mut engine = engine(PetConfig {
        hunger: 0,
        level: 3,
        ..Default::default()
    });
    engine.refresh();
    assert_eq!(engine.state().level(), 0);

    for _ in 0..10 {
        engine.treat();
    }
    assert_eq!(engine.state().level(), 1);
    assert!(engine.state().hunger() > 0);
}

/// Test that naps restore energy up to the cap.
#[test]
fn test_nap_caps_energy() {
    let mut engine = ActionEngine::default();
    engine.nap();
    let outcome = engine.nap();

    assert_eq!(engine.state().energy(), 100);
    assert!(outcome.clamped);
}

/// Test clamp idempotence through the public state.
#[test]
fn test_clamp_idempotent() {
    let mut engine = ActionEngine::default();
    for _ in 0..8 {
        engine.exercise();
    }
    let mut state = engine.snapshot();
    let before = state.clone();

    assert!(!state.clamp());
    assert!(!state.clamp());
    assert_eq!(state, before);
}

/// Test the startup sequence against a recording view.
#[test]
fn test_startup_sequence() {
    let mut engine = engine(PetConfig::default());
    engine.start();

    let view = engine.view();
    assert_eq!(view.frames.len(), 2);
    assert_eq!(view.frames[0], PetState::default());
    assert_eq!(view.frames[1].hunger(), 60);
    assert_eq!(view.messages, vec!["Yum! That was tasty!".to_string()]);
    assert_eq!(view.animations, 1);
}

/// Test that independent engines do not share state.
#[test]
fn test_independent_engines() {
    let mut first = ActionEngine::new(PetState::new("First"));
    let mut second = ActionEngine::new(PetState::new("Second"));

    first.treat();
    second.exercise();

    assert_eq!(first.state().name(), "First");
    assert_eq!(first.state().hunger(), 60);
    assert_eq!(second.state().hunger(), 40);
}

/// Test dispatching a UI trigger sequence.
#[test]
fn test_dispatch_sequence() {
    let mut engine = ActionEngine::default();
    for name in ["treat", "play", "exercise", "nap"] {
        engine.dispatch(name).unwrap();
    }
    // 5 + 8 + 10 + 2
    assert_eq!(engine.state().exp(), 25);
    assert!(engine.dispatch("").is_err());
}

/// Test that outcomes serialize for hand-off to external views.
#[test]
fn test_outcome_serializes() {
    let mut engine = ActionEngine::default();
    let outcome = engine.play();

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["action"], "play");
    assert_eq!(json["after"]["happiness"], 8);
    assert_eq!(json["events"][0]["action"], "play");

    let back: ActionOutcome = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcome);
}

/// Test that a saved snapshot resumes in a new engine, and a tampered one is refused.
#[test]
fn test_snapshot_reload_is_validated() {
    let mut engine = ActionEngine::default();
    engine.treat();
    let saved = serde_json::to_string(engine.state()).unwrap();

    let restored: PetState = serde_json::from_str(&saved).unwrap();
    let mut resumed = ActionEngine::new(restored);
    assert_eq!(resumed.state(), engine.state());
    assert_eq!(resumed.treat().after.exp(), 10);

    let mut tampered: serde_json::Value = serde_json::from_str(&saved).unwrap();
    tampered["level"] = serde_json::json!(-3);
    tampered["exp"] = serde_json::json!(-40);
    assert!(serde_json::from_value::<PetState>(tampered).is_err());
}
