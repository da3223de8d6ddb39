//! Integration tests for program tree reconciliation.
//!
//! Exercises the repository layer against a real database:
//! - Create a program with its whole tree
//! - Create from a read-back tree (ids ignored)
//! - Update sets in place and append new ones
//! - Drop a workout and everything beneath it
//! - Replaying a read-back tree is a pure update (no inserts/deletes)
//! - Rollback on a bad catalog reference mid-tree
//! - Ownership guard against ids from another parent
//! - Cascading program delete

use assert_matches::assert_matches;
use serde_json::{json, Value};
use sqlx::PgPool;
use wrkt_core::types::DbId;
use wrkt_db::models::program::{CreateProgram, ProgramTree, UpdateProgram};
use wrkt_db::reconcile::ReconcileError;
use wrkt_db::repositories::ProgramRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn insert_user(pool: &PgPool, email: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO users (email) VALUES ($1) RETURNING id")
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

fn program_payload(user_id: DbId, workouts: Value) -> CreateProgram {
    serde_json::from_value(json!({
        "user_id": user_id,
        "name": "Push Pull",
        "program_duration": 8,
        "duration_unit": "weeks",
        "days_per_week": 4,
        "main_goal": "strength",
        "workouts": workouts,
    }))
    .unwrap()
}

fn update_payload(workouts: Value) -> UpdateProgram {
    serde_json::from_value(json!({
        "name": "Push Pull",
        "program_duration": 8,
        "duration_unit": "weeks",
        "days_per_week": 4,
        "main_goal": "strength",
        "workouts": workouts,
    }))
    .unwrap()
}

/// Program P with W1 (E1 with s1{10x100}).
async fn seed_single_set_program(pool: &PgPool) -> ProgramTree {
    let user_id = insert_user(pool, "single@example.com").await;
    let input = program_payload(
        user_id,
        json!([{
            "name": "Push",
            "order": 1,
            "exercises": [{
                "catalog_exercise_id": 1,
                "order": 1,
                "sets": [{ "reps": 10, "weight": 100, "order": 1 }]
            }]
        }]),
    );
    let program = ProgramRepo::create_tree(pool, &input).await.unwrap();
    ProgramRepo::find_tree(pool, program.id).await.unwrap().unwrap()
}

/// Program with two workouts, each with two exercises of two sets.
async fn seed_two_workout_program(pool: &PgPool) -> ProgramTree {
    let user_id = insert_user(pool, "double@example.com").await;
    let exercises = |first: i64, second: i64| {
        json!([
            {
                "catalog_exercise_id": first,
                "order": 1,
                "sets": [
                    { "reps": 5, "weight": 100, "order": 1 },
                    { "reps": 5, "weight": 105, "order": 2 }
                ]
            },
            {
                "catalog_exercise_id": second,
                "order": 2,
                "sets": [
                    { "reps": 8, "weight": 40, "order": 1 },
                    { "reps": 8, "weight": 45, "order": 2 }
                ]
            }
        ])
    };
    let input = program_payload(
        user_id,
        json!([
            { "name": "Upper", "order": 1, "exercises": exercises(1, 4) },
            { "name": "Lower", "order": 2, "exercises": exercises(5, 3) }
        ]),
    );
    let program = ProgramRepo::create_tree(pool, &input).await.unwrap();
    ProgramRepo::find_tree(pool, program.id).await.unwrap().unwrap()
}

/// Turn a read-back tree into an update payload, ids included.
fn replay(tree: &ProgramTree) -> UpdateProgram {
    serde_json::from_value(serde_json::to_value(tree).unwrap()).unwrap()
}

async fn count(pool: &PgPool, sql: &str, id: DbId) -> i64 {
    sqlx::query_scalar(sql).bind(id).fetch_one(pool).await.unwrap()
}

// ---------------------------------------------------------------------------
// Test: create inserts the whole tree
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_tree_inserts_everything(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;

    assert_eq!(tree.program.name, "Push Pull");
    assert_eq!(tree.workouts.len(), 2);
    assert_eq!(tree.workouts[0].workout.name, "Upper");
    assert_eq!(tree.workouts[1].workout.name, "Lower");

    let upper = &tree.workouts[0];
    assert_eq!(upper.exercises.len(), 2);
    assert_eq!(upper.exercises[0].exercise.name, "Bench Press");
    assert_eq!(upper.exercises[0].exercise.equipment, "Barbell");
    assert_eq!(upper.exercises[0].exercise.muscle_group, "Chest");
    assert_eq!(upper.exercises[0].sets.len(), 2);
    assert_eq!(upper.exercises[0].sets[1].weight, 105);
}

// ---------------------------------------------------------------------------
// Test: creating from a read-back tree copies it instead of claiming its ids
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_from_read_back_tree_ignores_ids(pool: PgPool) {
    let original = seed_two_workout_program(&pool).await;

    let mut payload = serde_json::to_value(&original).unwrap();
    payload["name"] = json!("Push Pull (copy)");
    let input: CreateProgram = serde_json::from_value(payload).unwrap();

    let copy = ProgramRepo::create_tree(&pool, &input).await.unwrap();
    assert_ne!(copy.id, original.program.id);
    assert_eq!(copy.user_id, original.program.user_id);

    let copy = ProgramRepo::find_tree(&pool, copy.id).await.unwrap().unwrap();
    assert_eq!(copy.workouts.len(), 2);
    for (copied, source) in copy.workouts.iter().zip(&original.workouts) {
        assert_ne!(copied.workout.id, source.workout.id);
        assert_eq!(copied.workout.name, source.workout.name);
        assert_eq!(copied.exercises.len(), source.exercises.len());
        for (ce, se) in copied.exercises.iter().zip(&source.exercises) {
            assert_ne!(ce.exercise.id, se.exercise.id);
            assert_eq!(ce.exercise.catalog_exercise_id, se.exercise.catalog_exercise_id);
            let weights: Vec<i32> = ce.sets.iter().map(|s| s.weight).collect();
            let source_weights: Vec<i32> = se.sets.iter().map(|s| s.weight).collect();
            assert_eq!(weights, source_weights);
            assert!(ce.sets.iter().zip(&se.sets).all(|(a, b)| a.id != b.id));
        }
    }

    let untouched = ProgramRepo::find_tree(&pool, original.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&untouched).unwrap(),
        serde_json::to_value(&original).unwrap()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_unknown_ids_inserts_new_rows(pool: PgPool) {
    let user_id = insert_user(&pool, "stale@example.com").await;
    let input = program_payload(
        user_id,
        json!([{
            "id": 17,
            "name": "Push",
            "exercises": [{
                "id": 40,
                "catalog_exercise_id": 1,
                "sets": [{ "id": 91, "reps": 5, "weight": 80 }]
            }]
        }]),
    );

    let program = ProgramRepo::create_tree(&pool, &input).await.unwrap();
    let tree = ProgramRepo::find_tree(&pool, program.id).await.unwrap().unwrap();
    assert_eq!(tree.workouts.len(), 1);
    assert_eq!(tree.workouts[0].exercises[0].sets[0].weight, 80);
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM programs WHERE user_id = $1", user_id).await,
        1
    );
}

// ---------------------------------------------------------------------------
// Test: update one set and append another (no workouts/exercises deleted)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_set_and_append_new_set(pool: PgPool) {
    let tree = seed_single_set_program(&pool).await;
    let w1 = tree.workouts[0].workout.id;
    let e1 = tree.workouts[0].exercises[0].exercise.id;
    let s1 = tree.workouts[0].exercises[0].sets[0].id;

    let input = update_payload(json!([{
        "id": w1,
        "name": "Push",
        "order": 1,
        "exercises": [{
            "id": e1,
            "catalog_exercise_id": 5,
            "order": 1,
            "sets": [
                { "id": s1, "reps": 12, "weight": 105, "order": 1 },
                { "reps": 8, "weight": 120, "order": 2 }
            ]
        }]
    }]));

    let stats = ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap();
    assert_eq!(stats.inserted, 1);
    assert_eq!(stats.deleted, 0);

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.workouts.len(), 1);
    assert_eq!(after.workouts[0].workout.id, w1);

    let exercise = &after.workouts[0].exercises[0];
    assert_eq!(exercise.exercise.id, e1);
    assert_eq!(exercise.exercise.catalog_exercise_id, 5);
    assert_eq!(exercise.sets.len(), 2);

    assert_eq!(exercise.sets[0].id, s1);
    assert_eq!(exercise.sets[0].reps, 12);
    assert_eq!(exercise.sets[0].weight, 105);

    assert_ne!(exercise.sets[1].id, s1);
    assert_eq!(exercise.sets[1].reps, 8);
    assert_eq!(exercise.sets[1].weight, 120);
    assert_eq!(exercise.sets[1].sort_order, 2);
}

// ---------------------------------------------------------------------------
// Test: omitting a workout deletes it with all its exercises and sets
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_omitted_workout_is_deleted_with_descendants(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let w1 = &tree.workouts[0];
    let w2_id = tree.workouts[1].workout.id;
    let w2_exercise_ids: Vec<DbId> = tree.workouts[1]
        .exercises
        .iter()
        .map(|e| e.exercise.id)
        .collect();

    let mut input = replay(&tree);
    input.workouts.truncate(1);
    input.workouts[0].name = "Upper A".to_string();

    let stats = ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap();
    // W2: 4 sets + 2 exercises + the workout row.
    assert_eq!(stats.deleted, 7);
    assert_eq!(stats.inserted, 0);

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.workouts.len(), 1);
    assert_eq!(after.workouts[0].workout.id, w1.workout.id);
    assert_eq!(after.workouts[0].workout.name, "Upper A");
    assert_eq!(after.workouts[0].exercises.len(), w1.exercises.len());

    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM workouts WHERE id = $1", w2_id).await,
        0
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM exercises WHERE workout_id = $1", w2_id).await,
        0
    );
    for exercise_id in w2_exercise_ids {
        assert_eq!(
            count(
                &pool,
                "SELECT COUNT(*) FROM sets WHERE exercise_id = $1",
                exercise_id
            )
            .await,
            0,
            "no orphan sets may remain"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: dropping an exercise removes its sets first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_omitted_exercise_is_deleted_with_sets(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let dropped = tree.workouts[0].exercises[1].exercise.id;

    let mut input = replay(&tree);
    input.workouts[0].exercises.truncate(1);

    let stats = ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap();
    assert_eq!(stats.deleted, 3, "two sets and the exercise");

    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM exercises WHERE id = $1", dropped).await,
        0
    );
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM sets WHERE exercise_id = $1", dropped).await,
        0
    );
}

// ---------------------------------------------------------------------------
// Test: replaying the read-back tree is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_replaying_tree_is_idempotent(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let program_id = tree.program.id;

    // First pass: append a workout without an id.
    let mut input = replay(&tree);
    let mut extra = input.workouts[0].clone();
    extra.id = wrkt_core::entity_ref::EntityRef::New;
    for exercise in &mut extra.exercises {
        exercise.id = wrkt_core::entity_ref::EntityRef::New;
        for set in &mut exercise.sets {
            set.id = wrkt_core::entity_ref::EntityRef::New;
        }
    }
    extra.name = "Arms".to_string();
    input.workouts.push(extra);

    let first = ProgramRepo::update_tree(&pool, program_id, &input)
        .await
        .unwrap();
    assert_eq!(first.inserted, 1 + 2 + 4);

    // Second pass: replay what was read back.
    let read_back = ProgramRepo::find_tree(&pool, program_id)
        .await
        .unwrap()
        .unwrap();
    let second = ProgramRepo::update_tree(&pool, program_id, &replay(&read_back))
        .await
        .unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.deleted, 0);

    let final_tree = ProgramRepo::find_tree(&pool, program_id)
        .await
        .unwrap()
        .unwrap();
    let mut before = serde_json::to_value(&read_back.workouts).unwrap();
    let mut after = serde_json::to_value(&final_tree.workouts).unwrap();
    before.as_array_mut().unwrap().sort_by_key(|w| w["id"].as_i64());
    after.as_array_mut().unwrap().sort_by_key(|w| w["id"].as_i64());
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// Test: surviving ids are exactly the incoming Existing ids plus new rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_persisted_ids_match_incoming(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let upper = &tree.workouts[0];
    let kept_set = upper.exercises[0].sets[1].id;

    let input = update_payload(json!([{
        "id": upper.workout.id,
        "name": "Upper",
        "order": 1,
        "exercises": [
            {
                "id": upper.exercises[0].exercise.id,
                "catalog_exercise_id": 1,
                "order": 1,
                "sets": [
                    { "id": kept_set, "reps": 3, "weight": 120, "order": 1 },
                    { "id": "draft-1", "reps": 3, "weight": 125, "order": 2 }
                ]
            },
            {
                "id": null,
                "catalog_exercise_id": 6,
                "order": 2,
                "sets": [{ "reps": 10, "weight": 30, "order": 1 }]
            }
        ]
    }]));

    ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap();

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.workouts.len(), 1);
    let exercises = &after.workouts[0].exercises;
    assert_eq!(exercises.len(), 2);
    assert_eq!(exercises[0].exercise.id, upper.exercises[0].exercise.id);
    assert_ne!(exercises[1].exercise.id, upper.exercises[1].exercise.id);
    assert_eq!(exercises[1].exercise.name, "Overhead Press");

    let set_ids: Vec<DbId> = exercises[0].sets.iter().map(|s| s.id).collect();
    assert_eq!(set_ids.len(), 2);
    assert_eq!(set_ids[0], kept_set);
    assert!(!tree.workouts[0].exercises[0]
        .sets
        .iter()
        .any(|s| s.id == set_ids[1]));
    assert_eq!(exercises[1].sets.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: a bad catalog reference mid-tree rolls everything back
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failure_rolls_back_whole_tree(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let program_id = tree.program.id;
    let before = serde_json::to_value(&tree).unwrap();

    let upper = &tree.workouts[0];
    let new_exercise = |catalog_id: i64, order: i32| {
        json!({
            "catalog_exercise_id": catalog_id,
            "order": order,
            "sets": [{ "reps": 10, "weight": 20, "order": 1 }]
        })
    };
    let input = serde_json::from_value::<UpdateProgram>(json!({
        "name": "Renamed",
        "program_duration": 12,
        "duration_unit": "weeks",
        "days_per_week": 5,
        "main_goal": "endurance",
        "workouts": [{
            "id": upper.workout.id,
            "name": "Upper",
            "order": 1,
            "exercises": [
                new_exercise(2, 1),
                new_exercise(7, 2),
                new_exercise(9999, 3),
                new_exercise(8, 4)
            ]
        }]
    }))
    .unwrap();

    let err = ProgramRepo::update_tree(&pool, program_id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ReferenceViolation(_));

    let after = ProgramRepo::find_tree(&pool, program_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(serde_json::to_value(&after).unwrap(), before);
}

// ---------------------------------------------------------------------------
// Test: ids owned by another parent are rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_set_id_is_rejected(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let before = serde_json::to_value(&tree).unwrap();

    // Claim a set of the Lower workout under an Upper exercise.
    let stolen = tree.workouts[1].exercises[0].sets[0].id;
    let mut input = replay(&tree);
    input.workouts[0].exercises[0].sets[0].id = wrkt_core::entity_ref::EntityRef::Existing(stolen);

    let err = ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ReferenceViolation(ref msg) if msg.contains("Set"));

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(serde_json::to_value(&after).unwrap(), before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_workout_of_other_program_is_rejected(pool: PgPool) {
    let first = seed_single_set_program(&pool).await;
    let second = seed_two_workout_program(&pool).await;

    let mut input = replay(&first);
    input.workouts[0].id =
        wrkt_core::entity_ref::EntityRef::Existing(second.workouts[0].workout.id);

    let err = ProgramRepo::update_tree(&pool, first.program.id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ReferenceViolation(_));

    let untouched = ProgramRepo::find_tree(&pool, second.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&untouched).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}

// ---------------------------------------------------------------------------
// Test: error taxonomy for missing program and invalid payload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_program(pool: PgPool) {
    let err = ProgramRepo::update_tree(&pool, 424242, &update_payload(json!([])))
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ProgramNotFound(424242));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_payload_is_rejected_before_writing(pool: PgPool) {
    let tree = seed_single_set_program(&pool).await;
    let mut input = replay(&tree);
    input.duration_unit = "fortnights".to_string();
    input.workouts.clear();

    let err = ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ValidationRejected(_));

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(after.workouts.len(), 1, "nothing may be deleted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_for_unknown_user_is_reference_violation(pool: PgPool) {
    let err = ProgramRepo::create_tree(&pool, &program_payload(999_999, json!([])))
        .await
        .unwrap_err();
    assert_matches!(err, ReconcileError::ReferenceViolation(_));
}

// ---------------------------------------------------------------------------
// Test: lenient reps/weight coercion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unreadable_reps_and_weight_become_zero(pool: PgPool) {
    let tree = seed_single_set_program(&pool).await;
    let w1 = tree.workouts[0].workout.id;
    let e1 = tree.workouts[0].exercises[0].exercise.id;
    let s1 = tree.workouts[0].exercises[0].sets[0].id;

    let input = update_payload(json!([{
        "id": w1,
        "name": "Push",
        "exercises": [{
            "id": e1,
            "catalog_exercise_id": 1,
            "sets": [
                { "id": s1, "reps": "lots", "weight": "", "order": 1 },
                { "reps": "6", "weight": 82.5, "order": 2 }
            ]
        }]
    }]));
    ProgramRepo::update_tree(&pool, tree.program.id, &input)
        .await
        .unwrap();

    let after = ProgramRepo::find_tree(&pool, tree.program.id)
        .await
        .unwrap()
        .unwrap();
    let sets = &after.workouts[0].exercises[0].sets;
    assert_eq!((sets[0].reps, sets[0].weight), (0, 0));
    assert_eq!((sets[1].reps, sets[1].weight), (6, 82));
}

// ---------------------------------------------------------------------------
// Test: cascading delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_tree_removes_everything(pool: PgPool) {
    let tree = seed_two_workout_program(&pool).await;
    let program_id = tree.program.id;

    sqlx::query(
        "INSERT INTO active_programs (user_id, program_id, start_date, end_date) \
         VALUES ($1, $2, NOW(), NOW() + INTERVAL '8 weeks')",
    )
    .bind(tree.program.user_id)
    .bind(program_id)
    .execute(&pool)
    .await
    .unwrap();

    assert!(ProgramRepo::delete_tree(&pool, program_id).await.unwrap());

    assert!(ProgramRepo::find_by_id(&pool, program_id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(
        count(&pool, "SELECT COUNT(*) FROM workouts WHERE program_id = $1", program_id).await,
        0
    );
    assert_eq!(
        count(
            &pool,
            "SELECT COUNT(*) FROM active_programs WHERE program_id = $1",
            program_id
        )
        .await,
        0
    );
    let remaining_sets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining_sets, 0);

    assert!(
        !ProgramRepo::delete_tree(&pool, program_id).await.unwrap(),
        "deleting again reports not found"
    );
}

// ---------------------------------------------------------------------------
// Test: list trees for a user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_trees_for_user(pool: PgPool) {
    let user_id = insert_user(&pool, "lister@example.com").await;
    for name in ["A", "B"] {
        let mut input = program_payload(
            user_id,
            json!([{ "name": "Day 1", "exercises": [{ "catalog_exercise_id": 3 }] }]),
        );
        input.name = name.to_string();
        ProgramRepo::create_tree(&pool, &input).await.unwrap();
    }

    let trees = ProgramRepo::list_trees_for_user(&pool, user_id)
        .await
        .unwrap();
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0].program.name, "A");
    assert_eq!(trees[1].program.name, "B");
    assert_eq!(trees[0].workouts[0].exercises[0].exercise.name, "Pull Up");
    assert!(trees[0].workouts[0].exercises[0].sets.is_empty());

    let other = insert_user(&pool, "nobody@example.com").await;
    assert!(ProgramRepo::list_trees_for_user(&pool, other)
        .await
        .unwrap()
        .is_empty());
}
