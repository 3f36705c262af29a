/// Integration tests for the `run` demo: load a config, carve a wall, split
/// the chunk and drop the emptied shell.
use std::path::Path;

use voxel_carve::*;

#[test]
fn test_run_with_default_config() {
    init_logging();
    assert!(run(None).is_ok());
}

#[test]
fn test_run_with_demo_configs() {
    for name in ["demos/solid_chunk.json", "demos/random_chunk.json"] {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(name);
        assert!(run(Some(&path)).is_ok(), "{name} should run");
    }
}

#[test]
fn test_run_reports_missing_config() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/does_not_exist.json");
    assert!(matches!(run(Some(&path)), Err(VoxelError::Io(_))));
}

#[test]
fn test_run_rejects_oversized_config() {
    let path = std::env::temp_dir().join("voxel_carve_oversized_chunk.json");
    std::fs::write(&path, r#"{ "dimensions": [2147483647, 2147483647, 2147483647] }"#).unwrap();
    let result = run(Some(&path));
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(VoxelError::InvalidDimensions { .. })));
}

/// Same steps as the demo, checked through the public API.
#[test]
fn test_wall_split_through_world_leaves_two_chunks() {
    let mut world = World::new();
    let id = world.add_chunk(Chunk::solid(6, 3, 3).unwrap());
    for y in 0..3 {
        for z in 0..3 {
            assert!(world.carve(id, (3, y, z)));
        }
    }

    let pieces = world.split_chunk(id).unwrap();
    assert_eq!(pieces.len(), 2);
    let removed = world.remove_empty();
    assert_eq!(removed, vec![id]);
    assert_eq!(world.len(), 2);

    let counts: Vec<usize> = pieces
        .iter()
        .map(|piece| world.get_chunk(*piece).unwrap().active_count())
        .collect();
    assert_eq!(counts, vec![27, 18]);
}
