//! Voxel ray traversal, line of sight, and look-at orientation.

use crate::config::LivingConfig;
use crate::living::LivingEntity;
use crate::math::{BlockPos, Vec3, direction_vector};
use crate::world::{Block, BlockId, WorldHandle};

/// Walks the blocks a ray passes through, starting at the containing block.
///
/// Standard integer DDA: at each step the ray advances across the nearest
/// voxel boundary. The direction vector must be non-zero; it is treated as
/// the ray's unit of distance, so callers pass a normalized direction.
pub struct VoxelRay {
    current: BlockPos,
    step_x: i32,
    step_y: i32,
    step_z: i32,
    t_max_x: f64,
    t_max_y: f64,
    t_max_z: f64,
    t_delta_x: f64,
    t_delta_y: f64,
    t_delta_z: f64,
    travelled: f64,
    max_distance: f64,
    started: bool,
}

impl VoxelRay {
    pub fn new(start: Vec3, direction: Vec3, max_distance: f64) -> Self {
        let current = start.floor();
        let (step_x, t_max_x, t_delta_x) = axis_setup(start.x, direction.x);
        let (step_y, t_max_y, t_delta_y) = axis_setup(start.y, direction.y);
        let (step_z, t_max_z, t_delta_z) = axis_setup(start.z, direction.z);
        Self {
            current,
            step_x,
            step_y,
            step_z,
            t_max_x,
            t_max_y,
            t_max_z,
            t_delta_x,
            t_delta_y,
            t_delta_z,
            travelled: 0.0,
            max_distance,
            started: false,
        }
    }
}

/// Step direction, distance to the first boundary, and distance per voxel
/// along one axis.
fn axis_setup(origin: f64, component: f64) -> (i32, f64, f64) {
    if component > 0.0 {
        let boundary = origin.floor() + 1.0;
        (1, (boundary - origin) / component, 1.0 / component)
    } else if component < 0.0 {
        let boundary = origin.floor();
        (-1, (boundary - origin) / component, -1.0 / component)
    } else {
        (0, f64::INFINITY, f64::INFINITY)
    }
}

impl Iterator for VoxelRay {
    type Item = BlockPos;

    fn next(&mut self) -> Option<BlockPos> {
        if !self.started {
            self.started = true;
            return Some(self.current);
        }

        if self.t_max_x <= self.t_max_y && self.t_max_x <= self.t_max_z {
            self.travelled = self.t_max_x;
            self.current.x += self.step_x;
            self.t_max_x += self.t_delta_x;
        } else if self.t_max_y <= self.t_max_z {
            self.travelled = self.t_max_y;
            self.current.y += self.step_y;
            self.t_max_y += self.t_delta_y;
        } else {
            self.travelled = self.t_max_z;
            self.current.z += self.step_z;
            self.t_max_z += self.t_delta_z;
        }

        if self.travelled > self.max_distance {
            return None;
        }
        Some(self.current)
    }
}

impl LivingEntity {
    /// Collects the blocks along the entity's line of sight.
    ///
    /// The ray starts at eye height along the facing direction, hard-capped
    /// at 120 blocks. With `max_length > 0` the returned list is a sliding
    /// window: the oldest block is evicted once the bound is exceeded. The
    /// walk stops at the first block that is not air (with an empty
    /// `transparent` set) or not in the set.
    pub fn line_of_sight(
        &self,
        world: &(impl WorldHandle + ?Sized),
        max_distance: u32,
        max_length: usize,
        transparent: &[BlockId],
    ) -> Vec<(BlockPos, Block)> {
        let max_distance = max_distance.min(LivingConfig::MAX_SIGHT_DISTANCE);
        let direction = direction_vector(self.core().yaw(), self.core().pitch());
        let ray = VoxelRay::new(self.core().eye_position(), direction, f64::from(max_distance));

        let mut blocks: Vec<(BlockPos, Block)> = Vec::new();
        for pos in ray {
            let block = world.block_at(pos);
            blocks.push((pos, block));

            if max_length != 0 && blocks.len() > max_length {
                blocks.remove(0);
            }

            let stop = if transparent.is_empty() {
                !block.id.is_air()
            } else {
                !transparent.contains(&block.id)
            };
            if stop {
                break;
            }
        }
        blocks
    }

    /// The first block the entity is looking at, if any within range.
    ///
    /// Yields nothing (rather than failing) if the ray hits no stopping
    /// block within range.
    pub fn target_block(
        &self,
        world: &(impl WorldHandle + ?Sized),
        max_distance: u32,
        transparent: &[BlockId],
    ) -> Option<(BlockPos, Block)> {
        let blocks = self.line_of_sight(world, max_distance, 1, transparent);
        let (pos, block) = blocks.into_iter().next()?;
        let hit = if transparent.is_empty() {
            !block.id.is_air()
        } else {
            !transparent.contains(&block.id)
        };
        hit.then_some((pos, block))
    }

    /// Turns the entity's head toward the target point.
    ///
    /// Positive pitch looks down; yaw is normalized into `[0, 360)`.
    pub fn look_at(&mut self, target: Vec3) {
        let position = self.core().position();
        let horizontal =
            ((target.x - position.x).powi(2) + (target.z - position.z).powi(2)).sqrt();
        let vertical = target.y - position.y;
        let pitch = -vertical.atan2(horizontal).to_degrees();

        let mut yaw = (target.z - position.z).atan2(target.x - position.x).to_degrees() - 90.0;
        if yaw < 0.0 {
            yaw += 360.0;
        }
        self.core_mut().set_rotation(yaw, pitch);
    }
}
