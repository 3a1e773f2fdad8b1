//! Integration test: a scheduler driven by a configuration file.
//!
//! Writes TOML and RON config files to a temp directory, loads them through
//! `hatchery-data`, and checks that the queue bound, requester marker, name
//! prefix and body plan all take effect.

use hatchery_core::body::PartType;
use hatchery_core::context::TickContext;
use hatchery_core::dispatch::{DispatchOutcome, ResupplyOutcome};
use hatchery_core::result::ResultCode;
use hatchery_core::scheduler::SpawnScheduler;
use hatchery_core::test_utils::*;
use hatchery_data::{DataLoadError, load_scheduler_config};
use std::fs;
use std::path::{Path, PathBuf};

fn make_test_dir(suffix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "hatchery_integration_{suffix}_{}",
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn cleanup(dir: &Path) {
    let _ = fs::remove_dir_all(dir);
}

const SCHEDULER_TOML: &str = r#"
max_queue = 2
marker = "hatchery"
name_prefix = "worker"

[body]
fill_factor = 1.0
priority = [
    { part = "work" },
    { part = "move" },
]
"#;

#[test]
fn toml_config_drives_scheduler() {
    let dir = make_test_dir("toml");
    let path = dir.join("scheduler.toml");
    fs::write(&path, SCHEDULER_TOML).unwrap();

    let config = load_scheduler_config(&path).unwrap();
    let mut scheduler = SpawnScheduler::new(config);
    let mut spawner = MockSpawner::new("spawn1", 0, 300).with_extensions(0, 250);
    let mut room = stocked_room();
    let mut ctx = TickContext::new(77, &mut spawner, &mut room);

    // 550 capacity, full budget of 350 spent on work/move rounds.
    let body = scheduler.best_body(&ctx).unwrap();
    assert_eq!(body.cost(), 500);
    assert_eq!(body.count(PartType::Work), 3);
    assert_eq!(body.count(PartType::Move), 3);

    let name = scheduler.generate_name(&ctx);
    assert_eq!(name, "worker77");

    assert_eq!(scheduler.request(&mut ctx, body.clone(), name, None).unwrap(), ResultCode::Ok);
    assert_eq!(scheduler.request(&mut ctx, body.clone(), "w2", None).unwrap(), ResultCode::Ok);
    assert_eq!(scheduler.request(&mut ctx, body, "w3", None).unwrap(), ResultCode::QueueFull);

    let report = scheduler.tick(&mut ctx).unwrap();
    match report.outcome {
        DispatchOutcome::Starved {
            resupply: ResupplyOutcome::Submitted(order),
            ..
        } => assert_eq!(order.requester, "hatchery"),
        other => panic!("expected a resupply order, got {other:?}"),
    }
    assert_eq!(ctx.logistics.outstanding_orders("hatchery"), 1);
    assert_eq!(ctx.logistics.outstanding_orders("spawn-scheduler"), 0);

    cleanup(&dir);
}

#[test]
fn ron_config_with_defaults() {
    let dir = make_test_dir("ron");
    let path = dir.join("scheduler.ron");
    fs::write(&path, "(name_prefix: \"drone\")").unwrap();

    let config = load_scheduler_config(&path).unwrap();
    assert_eq!(config.max_queue(), 100);
    assert_eq!(config.marker(), "spawn-scheduler");
    assert_eq!(config.name_prefix(), "drone");

    cleanup(&dir);
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = make_test_dir("invalid");
    let path = dir.join("scheduler.json");
    fs::write(&path, r#"{ "max_queue": 0 }"#).unwrap();

    let result = load_scheduler_config(&path);
    assert!(matches!(result, Err(DataLoadError::Config(_))));

    cleanup(&dir);
}
