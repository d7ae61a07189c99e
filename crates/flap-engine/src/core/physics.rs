use glam::Vec2;
use rapier2d::na;
use rapier2d::prelude::*;
use std::sync::Mutex;

use crate::api::types::EntityId;

// ---------------------------------------------------------------------------
// glam <-> nalgebra conversions
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> na::Vector2<f32> {
    na::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &na::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_rot(iso: &na::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let rot = iso.rotation.angle();
    (pos, rot)
}

fn group(bits: u32) -> Group {
    Group::from_bits_truncate(bits)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
    KinematicPositionBased,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
            BodyType::KinematicPositionBased => RigidBodyType::KinematicPositionBased,
        }
    }
}

/// Shape description for a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderDesc {
    Cuboid { half_width: f32, half_height: f32 },
}

impl ColliderDesc {
    /// Axis-aligned box of the given full size.
    pub fn rect(size: Vec2) -> Self {
        ColliderDesc::Cuboid {
            half_width: size.x / 2.0,
            half_height: size.y / 2.0,
        }
    }

    fn build_collider(&self) -> ColliderBuilder {
        match *self {
            ColliderDesc::Cuboid { half_width, half_height } => {
                ColliderBuilder::cuboid(half_width, half_height)
            }
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.0,
            friction: 0.2,
            density: 1.0,
        }
    }
}

/// Category / contact / collision bit masks of a body.
///
/// * `category`: which groups this body belongs to.
/// * `contact`: categories whose touch produces a contact event.
/// * `collision`: categories this body is physically pushed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyMasks {
    pub category: u32,
    pub contact: u32,
    pub collision: u32,
}

impl BodyMasks {
    /// A body in `category` that reports no contacts and collides with everything.
    pub const fn category(category: u32) -> Self {
        Self {
            category,
            contact: 0,
            collision: u32::MAX,
        }
    }

    pub const fn with_contact(mut self, contact: u32) -> Self {
        self.contact = contact;
        self
    }

    pub const fn with_collision(mut self, collision: u32) -> Self {
        self.collision = collision;
        self
    }

    /// Whether a touch between `self` and `other` should be reported.
    pub fn notifies(&self, other: &BodyMasks) -> bool {
        self.contact & other.category != 0 || other.contact & self.category != 0
    }

    fn interaction_groups(&self) -> InteractionGroups {
        InteractionGroups::new(group(self.category), group(self.contact | self.collision))
    }

    fn solver_groups(&self) -> InteractionGroups {
        InteractionGroups::new(group(self.category), group(self.collision))
    }

    fn pack(&self) -> u128 {
        (self.category as u128) | ((self.contact as u128) << 32) | ((self.collision as u128) << 64)
    }

    fn unpack(data: u128) -> Self {
        Self {
            category: data as u32,
            contact: (data >> 32) as u32,
            collision: (data >> 64) as u32,
        }
    }
}

impl Default for BodyMasks {
    fn default() -> Self {
        Self::category(0)
    }
}

/// Builder for describing a rigid body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub rotation: f32,
    pub gravity_scale: f32,
    pub fixed_rotation: bool,
    pub collider: ColliderDesc,
    /// Sensors report contacts but never push anything.
    pub sensor: bool,
    pub masks: BodyMasks,
}

impl BodyDesc {
    /// Create a dynamic body description with the given collider shape.
    pub fn dynamic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            rotation: 0.0,
            gravity_scale: 1.0,
            fixed_rotation: false,
            collider,
            sensor: false,
            masks: BodyMasks::default(),
        }
    }

    /// Create a fixed (static) body description with the given collider shape.
    pub fn fixed(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::Fixed,
            gravity_scale: 0.0,
            fixed_rotation: true,
            ..Self::dynamic(collider)
        }
    }

    /// A body moved only by explicit position changes; ignores gravity.
    pub fn kinematic(collider: ColliderDesc) -> Self {
        Self {
            body_type: BodyType::KinematicPositionBased,
            gravity_scale: 0.0,
            ..Self::dynamic(collider)
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fixed_rotation(mut self, fixed: bool) -> Self {
        self.fixed_rotation = fixed;
        self
    }

    pub fn as_sensor(mut self) -> Self {
        self.sensor = true;
        self
    }

    pub fn with_masks(mut self, masks: BodyMasks) -> Self {
        self.masks = masks;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
    pub masks: BodyMasks,
}

/// A contact event between two entities, with each side's category bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub entity_a: EntityId,
    pub entity_b: EntityId,
    pub category_a: u32,
    pub category_b: u32,
    /// `true` when the contact just began, `false` when it ended.
    pub started: bool,
}

impl CollisionPair {
    /// A contact-begin event.
    pub fn began(a: (EntityId, u32), b: (EntityId, u32)) -> Self {
        Self {
            entity_a: a.0,
            entity_b: b.0,
            category_a: a.1,
            category_b: b.1,
            started: true,
        }
    }
}

// ---------------------------------------------------------------------------
// WASM-safe event collector (no crossbeam)
// ---------------------------------------------------------------------------

struct DirectEventCollector {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl DirectEventCollector {
    fn new() -> Self {
        Self {
            collisions: Mutex::new(Vec::new()),
        }
    }

    fn drain_collisions(&self) -> Vec<CollisionEvent> {
        match self.collisions.lock() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl EventHandler for DirectEventCollector {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let Ok(mut guard) = self.collisions.lock() {
            guard.push(event);
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: f32,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: f32,
    ) {
    }
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single struct.
/// Y-up: use negative Y gravity to pull bodies down.
pub struct PhysicsWorld {
    gravity: na::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
    event_collector: DirectEventCollector,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity: vec2_to_na(gravity),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            event_collector: DirectEventCollector::new(),
        }
    }

    /// Set the integration timestep.
    pub fn set_dt(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
    }

    pub fn dt(&self) -> f32 {
        self.integration_parameters.dt
    }

    pub fn gravity(&self) -> Vec2 {
        na_to_vec2(&self.gravity)
    }

    /// Create a rigid body + collider and return handles.
    /// The EntityId is stored in the body's `user_data`, the masks in the collider's.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .rotation(desc.rotation)
            .gravity_scale(desc.gravity_scale)
            .locked_axes(if desc.fixed_rotation {
                LockedAxes::ROTATION_LOCKED
            } else {
                LockedAxes::empty()
            })
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = desc
            .collider
            .build_collider()
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .sensor(desc.sensor)
            .collision_groups(desc.masks.interaction_groups())
            .solver_groups(desc.masks.solver_groups())
            .active_events(ActiveEvents::COLLISION_EVENTS)
            .user_data(desc.masks.pack())
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        PhysicsBody {
            body_handle,
            collider_handle,
            masks: desc.masks,
        }
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Step the simulation and collect reportable contact events into `out`.
    /// Only pairs whose contact masks ask for notification are reported.
    pub fn step_into(&mut self, out: &mut Vec<CollisionPair>) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &self.event_collector,
        );

        for event in self.event_collector.drain_collisions() {
            let (h1, h2, started) = match event {
                CollisionEvent::Started(h1, h2, _) => (h1, h2, true),
                CollisionEvent::Stopped(h1, h2, _) => (h1, h2, false),
            };

            let (Some((a, masks_a)), Some((b, masks_b))) =
                (self.collider_info(h1), self.collider_info(h2))
            else {
                continue;
            };

            if masks_a.notifies(&masks_b) {
                out.push(CollisionPair {
                    entity_a: a,
                    entity_b: b,
                    category_a: masks_a.category,
                    category_b: masks_b.category,
                    started,
                });
            }
        }
    }

    /// Change a body's type, e.g. to release a kinematic body to gravity.
    pub fn set_body_type(&mut self, body: &PhysicsBody, body_type: BodyType) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_body_type(body_type.to_rapier(), true);
        }
    }

    pub fn set_gravity_scale(&mut self, body: &PhysicsBody, scale: f32) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_gravity_scale(scale, true);
        }
    }

    pub fn is_dynamic(&self, body: &PhysicsBody) -> bool {
        self.bodies
            .get(body.body_handle)
            .map(|rb| rb.is_dynamic())
            .unwrap_or(false)
    }

    /// Mass derived from the collider's shape and density.
    pub fn mass(&self, body: &PhysicsBody) -> f32 {
        self.colliders
            .get(body.collider_handle)
            .map(|c| c.mass())
            .unwrap_or(0.0)
    }

    /// Apply an instantaneous impulse to a dynamic body.
    /// The velocity change is `impulse / mass`, effective immediately, so it
    /// does not depend on whether the body has been stepped yet.
    pub fn apply_impulse(&mut self, body: &PhysicsBody, impulse: Vec2) {
        let mass = self.mass(body);
        if mass <= 0.0 {
            return;
        }
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            if rb.is_dynamic() {
                let linvel = *rb.linvel() + vec2_to_na(impulse / mass);
                rb.set_linvel(linvel, true);
            }
        }
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Teleport a body, keeping its rotation.
    pub fn set_position(&mut self, body: &PhysicsBody, pos: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_translation(vec2_to_na(pos), true);
        }
    }

    /// Get the current position and rotation of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> Option<(Vec2, f32)> {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_rot(rb.position()))
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // -- private helpers --

    fn collider_info(&self, collider_handle: ColliderHandle) -> Option<(EntityId, BodyMasks)> {
        let collider = self.colliders.get(collider_handle)?;
        let body = self.bodies.get(collider.parent()?)?;
        Some((EntityId(body.user_data as u32), BodyMasks::unpack(collider.user_data)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
