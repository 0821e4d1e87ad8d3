//! Layout Tests - Save/Load Round Trip
//!
//! Persisting a layout to disk and restoring it into a workspace.

use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use glam::{Quat, Vec3};
use modular_builder_engine::game::{
    BuildingLayout, Catalog, InMemoryScene, LayoutError, LayoutStore, ModuleCatalog,
    PlacedModule, PlacementSession, Scene,
};

fn build_sample(catalog: &ModuleCatalog, scene: &mut dyn Scene) -> BuildingLayout {
    let mut layout = BuildingLayout::new();
    let modules = [
        ("Floor", Vec3::new(0.0, 0.0, 0.0), 0),
        ("Floor", Vec3::new(2.0, 0.0, 0.0), 0),
        ("Wall", Vec3::new(0.0, 0.0, 4.0), 1),
        ("WallCorner", Vec3::new(-1.1, 0.0, 4.9), 0),
        ("Roof", Vec3::new(0.0, 2.0001, 0.0), 3),
    ];
    for (id, position, turns) in modules {
        let rotation = Quat::from_rotation_y(turns as f32 * FRAC_PI_2);
        layout.commit(PlacedModule::new(catalog.get(id).unwrap(), position, rotation), scene);
    }
    layout
}

#[test]
fn test_round_trip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = LayoutStore::new(dir.path().join("house.json"));
    let catalog = ModuleCatalog::standard();
    let mut scene = InMemoryScene::new();
    let original = build_sample(&catalog, &mut scene);

    assert_eq!(store.save(&original).unwrap(), 5);

    let mut fresh_scene = InMemoryScene::new();
    let mut restored = BuildingLayout::new();
    let count = store.restore(&catalog, &mut fresh_scene, &mut restored).unwrap();

    assert_eq!(count, original.len());
    assert_eq!(fresh_scene.placed_count(), original.len());
    for (a, b) in original.iter().zip(restored.iter()) {
        assert_eq!(a.prototype_id(), b.prototype_id());
        assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-6);
        assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-6);
        assert_relative_eq!(a.position.z, b.position.z, epsilon = 1e-6);
        assert!(a.rotation.angle_between(b.rotation) < 1e-5);
    }
}

#[test]
fn test_save_nothing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let store = LayoutStore::new(dir.path().join("empty.json"));
    assert!(matches!(store.save(&BuildingLayout::new()), Err(LayoutError::EmptyLayout)));
    assert!(!store.path().exists());
}

#[test]
fn test_load_missing_file_keeps_workspace() {
    let dir = tempfile::tempdir().unwrap();
    let store = LayoutStore::new(dir.path().join("missing.json"));
    let catalog = ModuleCatalog::standard();
    let mut scene = InMemoryScene::new();
    let mut layout = build_sample(&catalog, &mut scene);

    let err = store.restore(&catalog, &mut scene, &mut layout).unwrap_err();
    assert!(matches!(err, LayoutError::LoadTargetMissing(_)));
    assert_eq!(layout.len(), 5);
    assert_eq!(scene.placed_count(), 5);
}

#[test]
fn test_load_does_not_touch_active_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = LayoutStore::new(dir.path().join("house.json"));
    let catalog = ModuleCatalog::standard();
    let mut scene = InMemoryScene::new();
    let mut layout = build_sample(&catalog, &mut scene);
    store.save(&layout).unwrap();

    let mut session = PlacementSession::default();
    session.start_placing(catalog.get("Wall").unwrap(), &mut scene);

    store.restore(&catalog, &mut scene, &mut layout).unwrap();

    assert!(session.is_active());
    assert_eq!(scene.preview_count(), 1);
    // Old placed objects are replaced, not duplicated
    assert_eq!(scene.placed_count(), 5);
    assert_eq!(layout.len(), 5);
}

#[test]
fn test_corrupt_file_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"modules\": [ { \"prototype\": 3 } ] }").unwrap();

    let store = LayoutStore::new(&path);
    assert!(matches!(store.read(), Err(LayoutError::Json(_))));
}
