//! A stick-figure walker: eleven point masses joined by ten bones.
//!
//! Each tick the biped reads its own posture into eight sensor values, lets its
//! network turn them into four horizontal actuator forces, then integrates and
//! relaxes its skeleton. Along the way it accumulates the signals the
//! generation's fitness is built from.

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use super::brain::NeuralNetwork;
use super::params::Params;
use super::physics::{Constraint, PointMass, Vec2};
use super::skeleton::{BONE_COUNT, BONE_LENGTH, BONES, JOINT_COUNT, Joint, rest_pose};

/// Number of sensor values fed to the network.
pub const SENSOR_COUNT: usize = 8;

/// Number of network outputs consumed as actuator forces.
pub const ACTUATOR_COUNT: usize = 4;

/// Joints pushed horizontally by the network, in output order.
pub const ACTUATED_JOINTS: [Joint; ACTUATOR_COUNT] = [
    Joint::LeftAnkle,
    Joint::RightAnkle,
    Joint::LeftHand,
    Joint::RightHand,
];

/// Mass of every skeleton point.
const POINT_MASS: f32 = 1.0;

/// A walker body and its per-generation fitness accumulators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biped {
    points: [PointMass; JOINT_COUNT],
    bones: [Constraint; BONE_COUNT],
    start: Vec2,
    /// Seconds spent with both ankles off the ground this generation.
    air_time: f32,
    /// Time integral of the chest-below-pelvis offset this generation.
    upright_bonus: f32,
}

impl Biped {
    /// Creates a biped in its rest pose with the chest at `start`.
    pub fn new(start: Vec2) -> Self {
        Self {
            points: rest_pose(start).map(|position| PointMass::new(position, POINT_MASS)),
            bones: BONES.map(|bone| {
                Constraint::new(bone.from.index(), bone.to.index(), BONE_LENGTH)
            }),
            start,
            air_time: 0.0,
            upright_bonus: 0.0,
        }
    }

    /// Returns the point of a joint.
    #[inline]
    pub fn point(&self, joint: Joint) -> &PointMass {
        &self.points[joint.index()]
    }

    /// Returns the point of a joint mutably.
    #[inline]
    pub fn point_mut(&mut self, joint: Joint) -> &mut PointMass {
        &mut self.points[joint.index()]
    }

    /// All points in joint order.
    pub fn points(&self) -> &[PointMass] {
        &self.points
    }

    /// All bones in relaxation order.
    pub fn bones(&self) -> &[Constraint] {
        &self.bones
    }

    /// Chest position the biped starts each generation from.
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Seconds spent airborne this generation.
    pub fn air_time(&self) -> f32 {
        self.air_time
    }

    /// Upright bonus accumulated this generation.
    pub fn upright_bonus(&self) -> f32 {
        self.upright_bonus
    }

    /// Head position.
    pub fn head(&self) -> Vec2 {
        self.point(Joint::Head).position
    }

    /// Bone endpoints in relaxation order, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.bones
            .iter()
            .map(|bone| (self.points[bone.a].position, self.points[bone.b].position))
    }

    /// True when both ankles are strictly more than the clearance above ground.
    pub fn is_airborne(&self, params: &Params) -> bool {
        let threshold = params.ground_y - params.airborne_clearance;
        self.point(Joint::LeftAnkle).position.y < threshold
            && self.point(Joint::RightAnkle).position.y < threshold
    }

    /// Reads the posture into the network inputs.
    ///
    /// In order: pelvis height above ground, torso lean, left/right ankle
    /// height offsets, left/right ankle horizontal offsets, left/right hand
    /// height offsets. Offsets are relative to the pelvis and divided by
    /// `sensor_scale`. The lean is `atan2(dx, dy)` of the chest relative to
    /// the pelvis, so an upright torso reads as ±π.
    pub fn sense(&self, params: &Params) -> Array1<f32> {
        let scale = params.sensor_scale;
        let chest = self.point(Joint::Chest).position;
        let pelvis = self.point(Joint::Pelvis).position;
        let left_ankle = self.point(Joint::LeftAnkle).position;
        let right_ankle = self.point(Joint::RightAnkle).position;
        let left_hand = self.point(Joint::LeftHand).position;
        let right_hand = self.point(Joint::RightHand).position;

        Array1::from_vec(vec![
            (params.ground_y - pelvis.y) / scale,
            (chest.x - pelvis.x).atan2(chest.y - pelvis.y),
            (left_ankle.y - pelvis.y) / scale,
            (right_ankle.y - pelvis.y) / scale,
            (left_ankle.x - pelvis.x) / scale,
            (right_ankle.x - pelvis.x) / scale,
            (left_hand.y - pelvis.y) / scale,
            (right_hand.y - pelvis.y) / scale,
        ])
    }

    /// Applies the first four network outputs as horizontal forces.
    pub fn actuate(&mut self, outputs: ArrayView1<f32>, params: &Params) {
        for (slot, joint) in ACTUATED_JOINTS.iter().enumerate() {
            let scale = match joint {
                Joint::LeftAnkle | Joint::RightAnkle => params.ankle_force,
                _ => params.hand_force,
            };
            self.point_mut(*joint)
                .apply_force(Vec2::new(outputs[slot] * scale, 0.0));
        }
    }

    /// Adds this tick's share of the upright bonus and air time.
    pub fn accumulate_fitness(&mut self, dt: f32, params: &Params) {
        let chest = self.point(Joint::Chest).position;
        let pelvis = self.point(Joint::Pelvis).position;
        self.upright_bonus += dt * (chest.y - pelvis.y).max(0.0);

        if self.is_airborne(params) {
            self.air_time += dt;
        }
    }

    /// Applies gravity, integrates every point and clamps points onto the ground.
    ///
    /// The ground only corrects height; horizontal motion is unaffected.
    pub fn integrate(&mut self, dt: f32, params: &Params) {
        let gravity = Vec2::new(0.0, params.gravity);
        for point in &mut self.points {
            point.apply_force(gravity);
            point.integrate(dt);
            if point.position.y > params.ground_y {
                point.position.y = params.ground_y;
            }
        }
    }

    /// Relaxes every bone `passes` times in table order.
    pub fn relax(&mut self, passes: usize) {
        for _ in 0..passes {
            for bone in &self.bones {
                bone.relax(&mut self.points);
            }
        }
    }

    /// Runs one full tick with `brain` as the controller.
    pub fn step(&mut self, brain: &mut NeuralNetwork, dt: f32, params: &Params) {
        let inputs = self.sense(params);
        let outputs = brain.forward(inputs.view());
        self.actuate(outputs.view(), params);
        self.accumulate_fitness(dt, params);
        self.integrate(dt, params);
        self.relax(params.relaxation_passes);
    }

    /// Fitness earned so far this generation, never negative.
    ///
    /// Pelvis distance travelled from the start, plus the weighted upright
    /// bonus, minus the weighted air time.
    pub fn fitness(&self, params: &Params) -> f32 {
        let distance = self.point(Joint::Pelvis).position.x - self.start.x;
        let fitness = distance + params.upright_weight * self.upright_bonus
            - params.air_penalty * self.air_time;
        fitness.max(0.0)
    }

    /// Returns to the rest pose at the start position and clears the accumulators.
    pub fn reset(&mut self) {
        for (point, position) in self.points.iter_mut().zip(rest_pose(self.start)) {
            point.teleport(position);
        }
        self.air_time = 0.0;
        self.upright_bonus = 0.0;
    }
}
