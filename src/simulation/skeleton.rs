//! Declarative biped topology.
//!
//! Joints are listed with their rest offset from the biped's start position
//! (the chest), bones with the joints they connect. Physics construction, reset
//! and the render queries all read these tables.

use super::physics::Vec2;

/// Rest length shared by every bone.
pub const BONE_LENGTH: f32 = 30.0;

/// A named point of the skeleton. The discriminant is the point's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Head.
    Head = 0,
    /// Chest, the biped's reference point.
    Chest = 1,
    /// Pelvis.
    Pelvis = 2,
    /// Left knee.
    LeftKnee = 3,
    /// Left ankle.
    LeftAnkle = 4,
    /// Right knee.
    RightKnee = 5,
    /// Right ankle.
    RightAnkle = 6,
    /// Left elbow.
    LeftElbow = 7,
    /// Left hand.
    LeftHand = 8,
    /// Right elbow.
    RightElbow = 9,
    /// Right hand.
    RightHand = 10,
}

impl Joint {
    /// Index of the joint in a biped's point array.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A joint together with its rest offset from the start position.
#[derive(Debug, Clone, Copy)]
pub struct JointSpec {
    /// Which joint.
    pub joint: Joint,
    /// Offset from the start position at rest.
    pub offset: Vec2,
}

/// A bone connecting two joints.
#[derive(Debug, Clone, Copy)]
pub struct BoneSpec {
    /// Human-readable bone name.
    pub name: &'static str,
    /// First endpoint.
    pub from: Joint,
    /// Second endpoint.
    pub to: Joint,
}

/// Number of joints in a biped.
pub const JOINT_COUNT: usize = JOINTS.len();

/// Number of bones in a biped.
pub const BONE_COUNT: usize = BONES.len();

/// Joints in point-array order.
pub const JOINTS: [JointSpec; 11] = [
    joint(Joint::Head, 0.0, -30.0),
    joint(Joint::Chest, 0.0, 0.0),
    joint(Joint::Pelvis, 0.0, 30.0),
    joint(Joint::LeftKnee, -15.0, 60.0),
    joint(Joint::LeftAnkle, -15.0, 90.0),
    joint(Joint::RightKnee, 15.0, 60.0),
    joint(Joint::RightAnkle, 15.0, 90.0),
    joint(Joint::LeftElbow, -20.0, 30.0),
    joint(Joint::LeftHand, -20.0, 60.0),
    joint(Joint::RightElbow, 20.0, 30.0),
    joint(Joint::RightHand, 20.0, 60.0),
];

/// Bones in relaxation order.
pub const BONES: [BoneSpec; 10] = [
    bone("neck", Joint::Head, Joint::Chest),
    bone("spine", Joint::Chest, Joint::Pelvis),
    bone("left upper arm", Joint::Chest, Joint::LeftElbow),
    bone("left forearm", Joint::LeftElbow, Joint::LeftHand),
    bone("right upper arm", Joint::Chest, Joint::RightElbow),
    bone("right forearm", Joint::RightElbow, Joint::RightHand),
    bone("left thigh", Joint::Pelvis, Joint::LeftKnee),
    bone("left shin", Joint::LeftKnee, Joint::LeftAnkle),
    bone("right thigh", Joint::Pelvis, Joint::RightKnee),
    bone("right shin", Joint::RightKnee, Joint::RightAnkle),
];

const fn joint(joint: Joint, x: f32, y: f32) -> JointSpec {
    JointSpec {
        joint,
        offset: Vec2::new(x, y),
    }
}

const fn bone(name: &'static str, from: Joint, to: Joint) -> BoneSpec {
    BoneSpec { name, from, to }
}

/// Rest position of every joint for a biped starting at `start`.
pub fn rest_pose(start: Vec2) -> [Vec2; JOINT_COUNT] {
    JOINTS.map(|spec| start + spec.offset)
}
