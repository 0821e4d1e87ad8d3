//! Modular Builder - Headless Layout Tool
//!
//! Drives a placement session with a scripted sequence of key presses and
//! pointer positions, saves the resulting layout and loads it back into a
//! fresh workspace.
//!
//! Run with: `cargo run --bin modular_builder -- [layout.json] [config.json]`
//!
//! Without arguments the layout goes to `layouts/building.json` and the
//! default builder constants are used.

use std::path::{Path, PathBuf};

use glam::Vec3;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use modular_builder_engine::camera::Ray;
use modular_builder_engine::game::{
    BuilderConfig, BuildingLayout, Catalog, InMemoryScene, InputConfig, LayoutStore,
    ModuleCatalog, PlacementSession, Scene, TickOutcome,
};
use modular_builder_engine::input::PlacementInput;

/// One scripted step
enum Step {
    Select(&'static str),
    Key(KeyCode),
    Click(f32, f32),
}

const CAMERA_POS: Vec3 = Vec3::new(0.0, 12.0, 14.0);

/// Ray from the camera through the ground point (x, z).
fn pointer_at(x: f32, z: f32) -> Ray {
    Ray::new(CAMERA_POS, Vec3::new(x, 0.0, z) - CAMERA_POS)
}

fn script() -> Vec<Step> {
    use Step::*;
    vec![
        Select("Wall"),
        Click(0.3, -0.9),
        Click(2.2, -1.0),
        Key(KeyCode::KeyX),
        Click(3.0, 0.0),
        // Same spot again: rejected
        Click(3.0, 0.0),
        Select("Roof"),
        // Ground floor: rejected
        Click(1.0, 1.0),
        Key(KeyCode::PageUp),
        Click(1.0, 1.0),
        Key(KeyCode::Escape),
    ]
}

fn main() {
    let mut args = std::env::args().skip(1);
    let layout_path = args.next().map(PathBuf::from);
    let config = match args.next() {
        Some(path) => match BuilderConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => BuilderConfig::default(),
    };

    let store = layout_path.map(LayoutStore::new).unwrap_or_default();
    let catalog = ModuleCatalog::standard();
    let input = InputConfig::default();

    println!("=== Modular Builder ===");
    println!("Catalog: {}", catalog.ids().collect::<Vec<_>>().join(", "));
    println!("{}", input.help_text());
    println!();

    let mut scene = InMemoryScene::new();
    let mut layout = BuildingLayout::new();
    let mut session = PlacementSession::new(config);

    for step in script() {
        match step {
            Step::Select(id) => {
                let Some(prototype) = catalog.get(id) else {
                    eprintln!("Unknown module '{}'", id);
                    continue;
                };
                println!("> select {}", id);
                session.start_placing(prototype, &mut scene);
                continue;
            }
            Step::Key(key) => {
                println!("> key {:?}", key);
                if let Some(action) = input.map_key(key) {
                    session.queue_input(action);
                }
            }
            Step::Click(x, z) => {
                println!("> click ({:.1}, {:.1})", x, z);
                session.queue_input(PlacementInput::PointerMoved(pointer_at(x, z)));
                if let Some(action) = input.map_mouse_button(MouseButton::Left) {
                    session.queue_input(action);
                }
            }
        }

        match session.tick(&catalog, &mut scene, &mut layout) {
            TickOutcome::Committed(module) => {
                let p = module.position;
                println!(
                    "  placed {} at ({:.2}, {:.2}, {:.2})",
                    module.prototype_id(),
                    p.x,
                    p.y,
                    p.z
                );
            }
            TickOutcome::Rejected(err) => println!("  rejected: {}", err),
            TickOutcome::Cancelled(reason) => println!("  cancelled ({:?})", reason),
            TickOutcome::Previewing { valid } => println!("  preview valid={}", valid),
            TickOutcome::NoPointerHit => println!("  pointer missed the ground"),
            TickOutcome::Idle => {}
        }
    }

    println!();
    println!("Layout: {} modules, {} in scene", layout.len(), scene.placed_count());

    match store.save(&layout) {
        Ok(count) => println!("Saved {} modules to {}", count, store.path().display()),
        Err(e) => {
            eprintln!("Save failed: {}", e);
            std::process::exit(1);
        }
    }

    let mut fresh_scene = InMemoryScene::new();
    let mut fresh_layout = BuildingLayout::new();
    match store.restore(&catalog, &mut fresh_scene, &mut fresh_layout) {
        Ok(count) => {
            println!("Reloaded {} modules", count);
            for (i, module) in fresh_layout.iter().enumerate() {
                let floor = module.floor_index(session.config().floor_height);
                println!("  [{}] {} floor {} at {:?}", i, module.prototype_id(), floor, module.position);
            }
        }
        Err(e) => {
            eprintln!("Load failed: {}", e);
            std::process::exit(1);
        }
    }
}
