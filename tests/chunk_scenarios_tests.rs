/// Integration tests for carving and splitting through the public chunk API.
/// Covers the three reference scenarios plus carve and split invariants.
use voxel_carve::*;

fn line_chunk() -> Chunk {
    Chunk::solid(3, 1, 1).expect("3x1x1 is a valid size")
}

#[test]
fn test_scenario_a_connected_line_does_not_split() {
    let mut chunk = line_chunk();

    let components = chunk.find_connected_components();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].len(), 3);

    let before = chunk.grid().clone();
    let pieces = chunk.split_into_objects().unwrap();
    assert!(pieces.is_empty(), "a single body must not split");
    assert_eq!(chunk.grid(), &before, "no-op split must not mutate the grid");
}

#[test]
fn test_scenario_b_carving_middle_splits_in_two() {
    let mut chunk = line_chunk();
    assert!(chunk.carve((1, 0, 0)));

    let components = chunk.find_connected_components();
    assert_eq!(components, vec![vec![(0, 0, 0)], vec![(2, 0, 0)]]);

    let pieces = chunk.split_into_objects().unwrap();
    assert_eq!(pieces.len(), 2);

    // pieces keep their original grid coordinates
    assert_eq!(pieces[0].grid().active_positions(), vec![(0, 0, 0)]);
    assert_eq!(pieces[1].grid().active_positions(), vec![(2, 0, 0)]);
    for piece in &pieces {
        assert_eq!(piece.grid().dimensions(), chunk.grid().dimensions());
        assert_eq!(piece.vertices().len(), 8);
        assert_eq!(piece.indices().len(), 36);
    }

    assert_eq!(chunk.active_count(), 0);
    assert!(chunk.mesh().is_empty());
}

#[test]
fn test_scenario_c_solid_cube_mesh_sizes() {
    let chunk = Chunk::solid(2, 2, 2).unwrap();
    assert_eq!(chunk.mesh().vertex_count(), 64);
    assert_eq!(chunk.mesh().triangle_count(), 96);
    assert_eq!(chunk.indices().len(), 288);
    assert_eq!(chunk.find_connected_components().len(), 1);
}

#[test]
fn test_carving_inactive_cell_leaves_mesh_identical() {
    let mut chunk = Chunk::solid(3, 3, 3).unwrap();
    chunk.carve((1, 1, 1));
    let before = chunk.mesh().clone();

    assert!(chunk.carve((1, 1, 1)));
    assert_eq!(chunk.mesh(), &before);
}

#[test]
fn test_out_of_bounds_carves_never_mutate() {
    let mut chunk = Chunk::solid(2, 2, 2).unwrap();
    let grid_before = chunk.grid().clone();
    let mesh_before = chunk.mesh().clone();

    for position in [
        (-1, 0, 0),
        (0, -1, 0),
        (0, 0, -1),
        (2, 0, 0),
        (0, 2, 0),
        (0, 0, 2),
        (i32::MAX, i32::MIN, 0),
    ] {
        assert!(!chunk.carve(position), "{position:?} should be ignored");
    }

    assert_eq!(chunk.grid(), &grid_before);
    assert_eq!(chunk.mesh(), &mesh_before);
}

#[test]
fn test_wall_through_cube_splits_into_two_halves() {
    let mut chunk = Chunk::solid(5, 4, 4).unwrap();
    for y in 0..4 {
        for z in 0..4 {
            chunk.carve((2, y, z));
        }
    }

    let pieces = chunk.split_into_objects().unwrap();
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].active_count(), 32);
    assert_eq!(pieces[1].active_count(), 32);
    assert!(pieces[0].grid().iter_active().all(|voxel| voxel.position.0 < 2));
    assert!(pieces[1].grid().iter_active().all(|voxel| voxel.position.0 > 2));
    assert!(chunk.is_empty());
}

#[test]
fn test_split_pieces_are_single_bodies() {
    let mut chunk = Chunk::solid(7, 1, 1).unwrap();
    chunk.carve((1, 0, 0));
    chunk.carve((4, 0, 0));

    let pieces = chunk.split_into_objects().unwrap();
    let sizes: Vec<usize> = pieces.iter().map(Chunk::active_count).collect();
    assert_eq!(sizes, vec![1, 2, 2]);

    for mut piece in pieces {
        assert_eq!(piece.find_connected_components().len(), 1);
        assert!(piece.split_into_objects().unwrap().is_empty());
    }
}

#[test]
fn test_chunk_from_config() {
    let config = ChunkConfig::from_json_str(
        r#"{ "dimensions": [4, 4, 4], "fill": { "kind": "checkerboard" }, "placement": [8.0, 0.0, 0.0] }"#,
    )
    .unwrap();
    let mut chunk = Chunk::from_config(&config).unwrap();
    assert_eq!(chunk.active_count(), 32);
    assert_eq!(chunk.placement(), cgmath::Vector3::new(8.0, 0.0, 0.0));

    let pieces = chunk.split_into_objects().unwrap();
    assert_eq!(pieces.len(), 32);
    assert!(pieces
        .iter()
        .all(|piece| piece.placement() == cgmath::Vector3::new(8.0, 0.0, 0.0)));
}
