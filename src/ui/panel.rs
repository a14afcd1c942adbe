use super::controls::{JointControls, JOINT_NAMES};

/// Draw the joint angle window: per joint a numeric entry field committed
/// on blur or Enter, a −1°/+1° button pair, and a free-drag slider.
pub fn joint_panel(ctx: &egui::Context, controls: &mut JointControls, show_axes: &mut bool) {
    egui::Window::new("Joint Angles")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Reset").clicked() {
                    controls.reset();
                }
                ui.checkbox(show_axes, "Joint axes");
            });
            ui.separator();

            for (i, name) in JOINT_NAMES.iter().enumerate() {
                let range = controls.ranges()[i];

                ui.horizontal(|ui| {
                    ui.label(format!("{name}:"));
                    let response = ui.add(
                        egui::TextEdit::singleline(controls.input_mut(i)).desired_width(64.0),
                    );
                    if response.lost_focus() {
                        controls.commit_input(i);
                    }
                    ui.label("deg");
                });

                ui.horizontal(|ui| {
                    if ui.button("\u{2212}").clicked() {
                        controls.nudge(i, -1.0);
                    }
                    let mut value = controls.angle(i);
                    if ui
                        .add(
                            egui::Slider::new(&mut value, range.min..=range.max)
                                .show_value(false),
                        )
                        .changed()
                    {
                        controls.set_angle(i, value);
                    }
                    if ui.button("+").clicked() {
                        controls.nudge(i, 1.0);
                    }
                });
            }

            ui.separator();
            ui.label("Camera:");
            ui.small("Left drag: Orbit");
            ui.small("Right drag: Pan");
            ui.small("Scroll / pinch: Zoom");
        });
}
