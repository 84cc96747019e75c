//! Collider gizmo demo
//!
//! Headless walkthrough of an editing session: builds a small scene, drives
//! the editor with synthetic clicks and drag gestures the way a scene view
//! would, and prints the undo history and resulting shapes.

use collider_gizmo::prelude::*;

struct DemoApp {
    scene: SceneRegistry,
    editor: ColliderEditor,
    undo: UndoStack,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            scene: SceneRegistry::new(),
            editor: ColliderEditor::new(EditorConfig::default()),
            undo: UndoStack::new(),
        }
    }

    /// Run one editing session against `key`, feeding the given frames
    fn run_session(&mut self, key: ObjectKey, frames: &[FrameInput]) -> Result<(), GizmoError> {
        let mut session = EditSession::new(key);
        for input in frames {
            let output = self
                .editor
                .frame(&mut session, &mut self.scene, input, &mut self.undo)?;
            log::info!(
                "frame: {} draw commands, selected handle {}, mutated: {}",
                output.draws.len(),
                session.selected_handle(),
                output.mutated
            );
        }
        Ok(())
    }

    fn print_shape(&self, name: &str, key: ObjectKey) {
        if let Some(object) = self.scene.get(key) {
            println!("{name}: {:?}", object.shape);
        }
    }
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        log::error!("demo failed: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GizmoError> {
    let mut app = DemoApp::new();

    let crate_box = app.scene.insert(SceneObject::new(
        Transform::from_position(Vec3::new(0.0, 0.5, 0.0)),
        ShapeDescriptor::cuboid(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)),
    ));
    let pillar = app.scene.insert(SceneObject::new(
        Transform::from_position(Vec3::new(3.0, 1.0, 0.0)),
        ShapeDescriptor::capsule(Vec3::zeros(), 0.5, 2.0, CapsuleAxis::Y),
    ));
    let boulder = app.scene.insert(SceneObject::new(
        Transform::from_parts(
            Vec3::new(-2.0, 0.0, 1.0),
            Quat::identity(),
            Vec3::new(2.0, 2.0, 2.0),
        ),
        ShapeDescriptor::sphere(Vec3::zeros(), 1.0),
    ));

    // Stretch the box: select the +X face, pull it out, then scale +Z
    // symmetrically around the center.
    log::info!("editing the box");
    app.run_session(
        crate_box,
        &[
            FrameInput::click(1),
            FrameInput::drag(DragGesture::pull(1, Vec3::new(0.5, 0.0, 0.0))),
            FrameInput::drag(DragGesture::scale(5, Vec3::new(0.0, 0.0, 0.25))),
        ],
    )?;

    // Raise the capsule's top cap, then fatten it from a side handle.
    log::info!("editing the capsule");
    app.run_session(
        pillar,
        &[
            FrameInput::drag(DragGesture::pull(1, Vec3::new(0.0, 1.0, 0.0))),
            FrameInput::drag(DragGesture::scale(3, Vec3::new(0.6, 0.0, 0.0))),
        ],
    )?;

    // Grow the sphere from the -X handle; the parent is scaled 2x, so one
    // world unit is half a local unit.
    log::info!("editing the sphere");
    app.run_session(
        boulder,
        &[FrameInput::drag(DragGesture::scale(
            2,
            Vec3::new(-1.0, 0.0, 0.0),
        ))],
    )?;

    println!("undo history:");
    for label in app.undo.labels() {
        println!("  {label}");
    }

    app.print_shape("box", crate_box);
    app.print_shape("capsule", pillar);
    app.print_shape("sphere", boulder);

    // Roll back the sphere edit.
    if app.undo.undo(&mut app.scene).is_some() {
        app.print_shape("sphere after undo", boulder);
    }

    Ok(())
}
