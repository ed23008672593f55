//! Forward-pipeline integration tests: descriptor in, C boilerplate out.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use fsmgen::descriptor;
use fsmgen::error::FsmError;
use fsmgen::render::template::{generate_sources, TemplateSet, TEMPLATE_SUFFIXES};

const DOOR_DESCRIPTOR: &str = "Idle,Start,Running\nRunning,Stop,Idle\n";

fn door_sources(dir: &Path) -> Vec<std::path::PathBuf> {
    let table =
        descriptor::parse(DOOR_DESCRIPTOR, "door", Path::new("door.fsm")).unwrap();
    generate_sources(&table, &TemplateSet::embedded(), dir).unwrap()
}

#[test]
fn forward_writes_one_file_per_template() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("door");
    let written = door_sources(&out);

    assert_eq!(written.len(), TEMPLATE_SUFFIXES.len());
    for suffix in TEMPLATE_SUFFIXES {
        let path = out.join(format!("door{suffix}"));
        assert!(path.is_file(), "missing {}", path.display());
    }
}

#[test]
fn generated_task_source_carries_table_and_start_state() {
    let dir = TempDir::new().unwrap();
    door_sources(dir.path());

    let tsk_c = fs::read_to_string(dir.path().join("door_tsk.c")).unwrap();
    assert!(tsk_c.contains("static fsm_state_t door_stateTable[] = {"));
    assert!(tsk_c.contains("{ (void*)door_Idle, door_Start, (void*)door_Running },"));
    assert!(tsk_c.contains("{ (void*)door_Running, door_Stop, (void*)door_Idle },"));
    // Sentinel row from the template survives untouched.
    assert!(tsk_c.contains("{ NULL, door_EV_LIMIT, NULL, }"));
    // Start state is the first transition's state.
    assert!(tsk_c.contains("(void*)door_Idle, \"door\""));
    assert!(!tsk_c.contains('$'));
}

#[test]
fn generated_api_header_lists_events_and_prototypes() {
    let dir = TempDir::new().unwrap();
    door_sources(dir.path());

    let api_h = fs::read_to_string(dir.path().join("door_api.h")).unwrap();
    assert!(api_h.contains("door_Start,\n  door_Stop,\n  door_EV_LIMIT"));
    assert!(api_h.contains("door_evHandler door_Idle(fsm_handler_t* this);"));
    assert!(api_h.contains("door_evHandler door_Running(fsm_handler_t* this);"));
}

#[test]
fn generated_api_source_stubs_every_symbol() {
    let dir = TempDir::new().unwrap();
    door_sources(dir.path());

    let api_c = fs::read_to_string(dir.path().join("door_api.c")).unwrap();
    assert!(api_c.contains("door_evHandler door_Idle(fsm_handler_t* this)\n{"));
    assert!(api_c.contains("door_evHandler door_Running(fsm_handler_t* this)\n{"));
    assert!(api_c.contains("if(0)\n    return door_Start;"));
    assert!(api_c.contains("if(0)\n    return door_Stop;"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();
    door_sources(dir_a.path());
    door_sources(dir_b.path());

    for suffix in TEMPLATE_SUFFIXES {
        let a = fs::read(dir_a.path().join(format!("door{suffix}"))).unwrap();
        let b = fs::read(dir_b.path().join(format!("door{suffix}"))).unwrap();
        assert_eq!(a, b, "non-deterministic render of door{suffix}");
    }
}

#[test]
fn incomplete_template_override_is_reported() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("_tsk.c"), "$FSM_NAME$").unwrap();

    let err = TemplateSet::load(&templates).unwrap_err();
    match err {
        FsmError::MissingTemplateFile(path) => {
            assert!(path.ends_with("_tsk.h"), "unexpected path {}", path.display());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn complete_template_override_is_used() {
    let dir = TempDir::new().unwrap();
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    for suffix in TEMPLATE_SUFFIXES {
        fs::write(templates.join(suffix), format!("// {suffix} for $FSM_NAME$\n")).unwrap();
    }

    let table =
        descriptor::parse(DOOR_DESCRIPTOR, "door", Path::new("door.fsm")).unwrap();
    let set = TemplateSet::load(&templates).unwrap();
    let out = dir.path().join("door");
    generate_sources(&table, &set, &out).unwrap();

    let tsk_c = fs::read_to_string(out.join("door_tsk.c")).unwrap();
    assert_eq!(tsk_c, "// _tsk.c for door\n");
}
