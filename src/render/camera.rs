use glam::{Mat4, Vec3};

pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(3.0, 2.5, 6.0),
            target: Vec3::new(0.0, 1.5, 0.0),
            up: Vec3::Y,
            fov: 50.0_f32.to_radians(),
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }
}

pub struct OrbitController {
    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_phi: f32,
    pub max_phi: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_speed: f32,
    pub damping: f32,
    velocity_theta: f32,
    velocity_phi: f32,
    velocity_radius: f32,
    velocity_pan: Vec3,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self {
            center: Vec3::new(0.0, 1.5, 0.0),
            radius: 6.0,
            theta: 0.4,
            phi: std::f32::consts::FRAC_PI_3,
            min_radius: 2.0,
            max_radius: 15.0,
            min_phi: 0.05,
            max_phi: std::f32::consts::PI - 0.05,
            rotate_speed: 0.005,
            pan_speed: 0.005,
            zoom_speed: 0.1,
            damping: 0.85,
            velocity_theta: 0.0,
            velocity_phi: 0.0,
            velocity_radius: 0.0,
            velocity_pan: Vec3::ZERO,
        }
    }
}

impl OrbitController {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            ..Default::default()
        }
    }

    pub fn rotate(&mut self, delta_x: f32, delta_y: f32) {
        self.velocity_theta -= delta_x * self.rotate_speed;
        self.velocity_phi -= delta_y * self.rotate_speed;
    }

    pub fn zoom(&mut self, delta: f32) {
        self.velocity_radius -= delta * self.zoom_speed * self.radius;
    }

    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let right = Vec3::new(self.theta.cos(), 0.0, -self.theta.sin());
        let up_dir = Vec3::new(
            -self.phi.cos() * self.theta.sin(),
            self.phi.sin(),
            -self.phi.cos() * self.theta.cos(),
        )
        .normalize();

        let pan_factor = self.pan_speed * self.radius;
        self.velocity_pan += right * delta_x * pan_factor + up_dir * delta_y * pan_factor;
    }

    pub fn reset(&mut self) {
        *self = Self {
            damping: self.damping,
            ..Default::default()
        };
    }

    pub fn update(&mut self) {
        self.theta += self.velocity_theta;
        self.phi = (self.phi + self.velocity_phi).clamp(self.min_phi, self.max_phi);
        self.radius = (self.radius + self.velocity_radius).clamp(self.min_radius, self.max_radius);
        self.center += self.velocity_pan;

        self.velocity_theta *= self.damping;
        self.velocity_phi *= self.damping;
        self.velocity_radius *= self.damping;
        self.velocity_pan *= self.damping;

        if self.velocity_theta.abs() < 0.0001 {
            self.velocity_theta = 0.0;
        }
        if self.velocity_phi.abs() < 0.0001 {
            self.velocity_phi = 0.0;
        }
        if self.velocity_radius.abs() < 0.0001 {
            self.velocity_radius = 0.0;
        }
        if self.velocity_pan.length_squared() < 0.000001 {
            self.velocity_pan = Vec3::ZERO;
        }
    }

    pub fn camera_position(&self) -> Vec3 {
        let x = self.radius * self.phi.sin() * self.theta.cos();
        let y = self.radius * self.phi.cos();
        let z = self.radius * self.phi.sin() * self.theta.sin();
        self.center + Vec3::new(x, y, z)
    }

    pub fn update_camera(&self, camera: &mut Camera) {
        camera.position = self.camera_position();
        camera.target = self.center;
    }
}

pub struct CameraController {
    pub orbit: OrbitController,
    pub left_mouse_action: MouseAction,
    pub right_mouse_action: MouseAction,
    pub middle_mouse_action: MouseAction,
    left_pressed: bool,
    right_pressed: bool,
    middle_pressed: bool,
    last_mouse_pos: (f32, f32),
}

#[derive(Clone, Copy, PartialEq)]
pub enum MouseAction {
    None,
    Orbit,
    Pan,
    Zoom,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            orbit: OrbitController::default(),
            left_mouse_action: MouseAction::Orbit,
            right_mouse_action: MouseAction::Pan,
            middle_mouse_action: MouseAction::Zoom,
            left_pressed: false,
            right_pressed: false,
            middle_pressed: false,
            last_mouse_pos: (0.0, 0.0),
        }
    }
}

impl CameraController {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            orbit: OrbitController::new(center, radius),
            ..Default::default()
        }
    }

    pub fn on_mouse_button(&mut self, button: u8, pressed: bool) {
        match button {
            0 => self.left_pressed = pressed,
            1 => self.right_pressed = pressed,
            2 => self.middle_pressed = pressed,
            _ => {}
        }
    }

    pub fn on_mouse_move(&mut self, x: f32, y: f32) {
        let dx = x - self.last_mouse_pos.0;
        let dy = y - self.last_mouse_pos.1;
        self.last_mouse_pos = (x, y);

        let action = if self.left_pressed {
            self.left_mouse_action
        } else if self.right_pressed {
            self.right_mouse_action
        } else if self.middle_pressed {
            self.middle_mouse_action
        } else {
            MouseAction::None
        };

        match action {
            MouseAction::Orbit => self.orbit.rotate(dx, dy),
            MouseAction::Pan => self.orbit.pan(-dx, dy),
            MouseAction::Zoom => self.orbit.zoom(dy * 0.1),
            MouseAction::None => {}
        }
    }

    pub fn on_scroll(&mut self, delta: f32) {
        self.orbit.zoom(delta);
    }

    pub fn update(&mut self, camera: &mut Camera) {
        self.orbit.update();
        self.orbit.update_camera(camera);
    }

    pub fn reset(&mut self) {
        self.orbit.reset();
    }
}
