use crate::state::{ActiveDemo, AppState};
use cglab_scene::DemoKind;
use cglab_scene::animal::AnimalDemo;
use cglab_scene::lit_scene::LitSceneDemo;
use cglab_scene::vectors::{VectorDemo, VectorOp};
use cglab_scene::world::WorldDemo;
use egui::Context as EguiContext;

pub fn draw_ui(state: &mut AppState, ctx: &EguiContext, annotations: &[String]) {
    if !state.show_panel {
        return;
    }

    let mut next = state.kind();
    egui::SidePanel::left("controls")
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading(state.kind().title());
            egui::ComboBox::from_label("Demo")
                .selected_text(next.name())
                .show_ui(ui, |ui| {
                    for kind in DemoKind::ALL {
                        ui.selectable_value(&mut next, kind, kind.title());
                    }
                });
            match state.clock.fps() {
                Some(fps) => ui.label(format!("fps: {fps:.2}")),
                None => ui.label("fps: -"),
            };
            ui.separator();

            match &mut state.active {
                ActiveDemo::Vectors(demo) => vectors_panel(ui, demo),
                ActiveDemo::Fruit(_) => {
                    ui.label("A watermelon slice drawn from flat triangles.");
                }
                ActiveDemo::Animal(demo) => animal_panel(ui, demo),
                ActiveDemo::World(demo) => world_panel(ui, demo),
                ActiveDemo::Lighting(demo) => lighting_panel(ui, demo),
                ActiveDemo::Showcase(demo) => {
                    ui.label(format!("Props: {}", demo.props().len()));
                    if demo.is_basic() {
                        ui.label("Fixed camera.");
                    } else {
                        ui.label("Drag to orbit, scroll to zoom.");
                    }
                }
            }

            if !annotations.is_empty() {
                ui.separator();
                for note in annotations {
                    ui.monospace(note);
                }
            }

            ui.separator();
            ui.small("F1: Toggle Controls");
        });

    if next != state.kind() {
        state.switch(next);
    }
}

fn vectors_panel(ui: &mut egui::Ui, demo: &mut VectorDemo) {
    let mut v1 = demo.v1.truncate();
    let mut v2 = demo.v2.truncate();
    let mut edited = false;
    for (label, v) in [("v1", &mut v1), ("v2", &mut v2)] {
        ui.horizontal(|ui| {
            ui.label(label);
            edited |= ui.add(egui::DragValue::new(&mut v.x).prefix("x: ").speed(0.05)).changed();
            edited |= ui.add(egui::DragValue::new(&mut v.y).prefix("y: ").speed(0.05)).changed();
        });
    }
    if edited {
        demo.set_inputs(v1, v2);
    }
    if ui.button("Draw").clicked() {
        demo.draw();
    }

    ui.separator();
    egui::ComboBox::from_label("Operation")
        .selected_text(demo.op.name())
        .show_ui(ui, |ui| {
            for op in VectorOp::ALL {
                ui.selectable_value(&mut demo.op, op, op.name());
            }
        });
    ui.add_enabled(
        demo.op.takes_scalar(),
        egui::DragValue::new(&mut demo.scalar).prefix("scalar: ").speed(0.1),
    );
    if ui.button("Draw Operation").clicked() {
        demo.draw_operation();
    }
    if let Some(Err(e)) = demo.outcome() {
        ui.colored_label(egui::Color32::RED, e.to_string());
    }
}

fn animation_buttons(ui: &mut egui::Ui, animating: bool) -> Option<bool> {
    let mut choice = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(!animating, egui::Button::new("Animation On")).clicked() {
            choice = Some(true);
        }
        if ui.add_enabled(animating, egui::Button::new("Animation Off")).clicked() {
            choice = Some(false);
        }
    });
    choice
}

fn animal_panel(ui: &mut egui::Ui, demo: &mut AnimalDemo) {
    let (mut x, mut y) = demo.sliders();
    let mut turned = ui.add(egui::Slider::new(&mut x, -180.0..=180.0).text("X angle")).changed();
    turned |= ui.add(egui::Slider::new(&mut y, -180.0..=180.0).text("Y angle")).changed();
    if turned {
        demo.set_angles_from_sliders(x, y);
    }

    ui.separator();
    let pose = &mut demo.pose;
    ui.add(egui::Slider::new(&mut pose.left_wing, 0.0..=90.0).text("Left wing"));
    ui.add(egui::Slider::new(&mut pose.right_wing, 0.0..=90.0).text("Right wing"));
    ui.add(egui::Slider::new(&mut pose.left_leg, -45.0..=45.0).text("Left leg"));
    ui.add(egui::Slider::new(&mut pose.right_leg, -45.0..=45.0).text("Right leg"));

    if let Some(on) = animation_buttons(ui, demo.animating()) {
        demo.set_animating(on);
    }
    ui.small("Drag to rotate, Shift+click to poke, Space toggles animation.");
}

fn world_panel(ui: &mut egui::Ui, demo: &mut WorldDemo) {
    ui.add(egui::Slider::new(&mut demo.global_angle, -180.0..=180.0).text("Global angle"));
    match demo.target_cell() {
        Some((x, z)) => ui.label(format!("Target cell: ({x}, {z})")),
        None => ui.label("Target cell: out of range"),
    };
    ui.horizontal(|ui| {
        if ui.button("Add Block (F)").clicked() {
            demo.place_block();
        }
        if ui.button("Remove Block (R)").clicked() {
            demo.remove_block();
        }
    });
    ui.small("WASD: Move | Q/E: Turn | Drag: Look");
}

fn lighting_panel(ui: &mut egui::Ui, demo: &mut LitSceneDemo) {
    let mut angle = -demo.global_angle;
    if ui.add(egui::Slider::new(&mut angle, -180.0..=180.0).text("Global angle")).changed() {
        demo.set_angle_from_slider(angle);
    }

    ui.separator();
    ui.checkbox(&mut demo.light_on, "Light (L)");
    ui.checkbox(&mut demo.spotlight_on, "Spotlight (K)");
    ui.checkbox(&mut demo.show_normals, "Normals (N)");
    ui.checkbox(&mut demo.light_animating, "Move light");

    let mut p = demo.light_position * 100.0;
    let mut moved = false;
    for (axis, value) in [("Light X", &mut p.x), ("Light Y", &mut p.y), ("Light Z", &mut p.z)] {
        moved |= ui.add(egui::Slider::new(value, -250.0..=250.0).text(axis)).changed();
    }
    if moved {
        demo.light_animating = false;
        demo.set_light_position_slider(p.x, p.y, p.z);
    }

    let c = demo.light_color;
    let mut rgb = [c.r, c.g, c.b].map(|v| (v * 255.0).round() as u8);
    let mut tinted = false;
    for (channel, value) in ["Red", "Green", "Blue"].into_iter().zip(rgb.iter_mut()) {
        tinted |= ui.add(egui::Slider::new(value, 0..=255).text(channel)).changed();
    }
    if tinted {
        demo.set_light_color_bytes(rgb[0], rgb[1], rgb[2]);
    }

    ui.separator();
    let (mut left, mut right) = (demo.left_wing, demo.right_wing);
    let mut posed = ui.add(egui::Slider::new(&mut left, 0.0..=90.0).text("Left wing")).changed();
    posed |= ui.add(egui::Slider::new(&mut right, 0.0..=90.0).text("Right wing")).changed();
    if posed {
        demo.set_wings(left, right);
    }
    if let Some(on) = animation_buttons(ui, demo.animating()) {
        demo.set_animating(on);
    }
    ui.small("WASD: Move | Q/E: Turn | Space: Wings");
}
