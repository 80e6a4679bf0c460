//! Simulation constants and tuning parameters.
//!
//! Distances are in screen units, speeds in units per second, times in seconds.

/// Largest step `advance` will integrate in one tick.
pub const MAX_DT: f32 = 1.0 / 30.0;

// --- Arena ---

pub const ARENA_WIDTH: f32 = 800.0;
pub const ARENA_HEIGHT: f32 = 600.0;

/// Distance beyond the play rectangle at which entities are removed.
pub const DESPAWN_MARGIN: f32 = 50.0;

/// Soft cap on simultaneously live projectiles.
pub const DEFAULT_PROJECTILE_CAP: usize = 200;

// --- Player ---

pub const PLAYER_MAX_HP: f32 = 100.0;
pub const PLAYER_SPEED: f32 = 300.0;
pub const PLAYER_SIZE: f32 = 32.0;
/// Invulnerability granted after taking damage.
pub const PLAYER_HIT_INVULNERABILITY: f32 = 1.0;
pub const PLAYER_FIRE_INTERVAL: f32 = 0.15;
pub const PLAYER_MISSILE_INTERVAL: f32 = 1.0;
pub const PLAYER_MAX_WEAPON_LEVEL: u8 = 4;
/// Half-angle of the level-2+ spread volley (radians).
pub const PLAYER_SPREAD_ANGLE: f32 = 0.17;
pub const MAX_WINGMEN: usize = 2;
pub const WINGMAN_FIRE_INTERVAL: f32 = 0.4;
pub const WINGMAN_OFFSET_X: f32 = 50.0;
pub const WINGMAN_OFFSET_Y: f32 = 20.0;

// --- Adversary behavior ---

/// Interval between behavior state re-evaluations.
pub const BEHAVIOR_EVAL_INTERVAL: f32 = 1.0;
/// Health ratio below which a unit retreats.
pub const RETREAT_HEALTH_RATIO: f32 = 0.3;
pub const RETREAT_SPEED_FACTOR: f32 = 1.5;
pub const RETREAT_SWEEP_FREQ: f32 = 4.0;
pub const RETREAT_SWEEP_FACTOR: f32 = 0.8;

/// Engage-state cooldown multiplier and floor.
pub const ENGAGE_COOLDOWN_FACTOR: f32 = 0.7;
pub const ENGAGE_COOLDOWN_FLOOR: f32 = 1.0;
/// Height an engaging unit tries to hold above the player.
pub const ENGAGE_STANDOFF: f32 = 200.0;
pub const ENGAGE_LATERAL_GAIN: f32 = 2.0;
pub const ENGAGE_VERTICAL_GAIN: f32 = 1.5;

pub const FORMATION_GAIN: f32 = 3.0;

pub const ALERT_RISE_RATE: f32 = 0.5;
pub const ALERT_DECAY_RATE: f32 = 0.25;
/// Alert level above which units react to incoming fire.
pub const EVASION_ALERT_THRESHOLD: f32 = 0.5;
pub const EVASION_SCAN_RADIUS: f32 = 120.0;
pub const EVASION_IMPULSE: f32 = 180.0;
pub const EVASION_COOLDOWN: f32 = 1.0;
/// Exponential decay rate of the evasion velocity (1/s).
pub const EVASION_DECAY: f32 = 4.0;

/// Accuracy above which shots lead the target.
pub const AIM_LEAD_ACCURACY: f32 = 0.5;
/// Maximum angular aim error at zero accuracy (radians, 30°).
pub const AIM_MAX_ERROR: f32 = std::f32::consts::PI / 6.0;

// --- Movement patterns ---

pub const ZIGZAG_FREQ: f32 = 1.2;
pub const ZIGZAG_AMPLITUDE: f32 = 0.9;
pub const SINE_FREQ: f32 = 2.0;
pub const SINE_AMPLITUDE: f32 = 120.0;
pub const SPIRAL_ANGULAR_SPEED: f32 = 3.0;
pub const SPIRAL_RADIUS_FACTOR: f32 = 0.9;
pub const SPIRAL_DESCENT_FACTOR: f32 = 0.6;
pub const PURSUIT_PATTERN_GAIN: f32 = 1.5;
pub const PURSUIT_PATTERN_DESCENT: f32 = 0.8;

// --- Projectiles ---

pub const HOMING_RADIUS: f32 = 200.0;
pub const HOMING_MAX_SPEED: f32 = 400.0;
/// Steering acceleration per unit of homing strength.
pub const HOMING_ACCEL: f32 = 200.0;

pub const PURSUIT_LAUNCH_SECS: f32 = 0.1;
pub const PURSUIT_SPEED: f32 = 500.0;
/// Weight kept from the previous heading when blending toward the target.
pub const PURSUIT_BLEND_KEEP: f32 = 0.7;
pub const PURSUIT_STRIKE_RADIUS: f32 = 25.0;
pub const PURSUIT_TIMEOUT_SECS: f32 = 5.0;
/// Straight-flight speed used when a pursuit missile finds nothing to chase.
pub const PURSUIT_FALLBACK_SPEED: f32 = 600.0;

pub const BEAM_WIDTH: f32 = 30.0;
pub const BEAM_DURATION: f32 = 1.2;

// --- Boss ---

pub const BOSS_WARNING_SECS: f32 = 5.0;
pub const BOSS_ENTRANCE_SPEED: f32 = 180.0;
pub const BOSS_RESTING_Y: f32 = 130.0;
pub const BOSS_FIRST_ATTACK_DELAY: f32 = 1.0;
pub const BOSS_PATROL_SECS: f32 = 6.0;
pub const BOSS_CHARGE_SECS: f32 = 1.5;
pub const BOSS_CHARGE_SPEED_FACTOR: f32 = 2.5;
pub const BOSS_CHARGE_DEPTH: f32 = 160.0;
pub const BOSS_SIDE_MARGIN: f32 = 20.0;

pub const BOSS_PHASE_INVULNERABILITY: f32 = 2.0;
pub const BOSS_PHASE_POWER_FACTOR: f32 = 1.15;
pub const BOSS_PHASE_COOLDOWN_FACTOR: f32 = 0.8;
pub const BOSS_NORMAL_COOLDOWN_FLOOR: f32 = 0.5;
pub const BOSS_SPECIAL_COOLDOWN_FLOOR: f32 = 3.0;

pub const LASER_CHARGE_SECS: f32 = 2.0;
pub const LASER_FIRST_WARNING_SECS: f32 = 1.0;
pub const LASER_FINAL_WARNING_SECS: f32 = 1.8;
/// Horizontal offsets of the discharged beams from the boss centre.
pub const LASER_BEAM_OFFSETS: [f32; 3] = [-60.0, 0.0, 60.0];

pub const BARRAGE_MISSILES: u32 = 8;
pub const BARRAGE_INTERVAL: f32 = 0.2;
pub const SHOCKWAVE_PROJECTILES: u32 = 16;
pub const CIRCULAR_SHOT_PROJECTILES: u32 = 12;
pub const SPREAD_SHOT_PROJECTILES: u32 = 5;
/// Half-angle of the boss spread fan (radians, 30°).
pub const SPREAD_SHOT_HALF_ANGLE: f32 = std::f32::consts::PI / 6.0;

pub const BOSS_DEATH_SECS: f32 = 3.0;
/// Minimum simulation time between boss-contact messages.
pub const BOSS_CONTACT_MESSAGE_INTERVAL: f32 = 1.0;

// --- Pickups ---

pub const PICKUP_SIZE: f32 = 20.0;
pub const PICKUP_FALL_SPEED: f32 = 60.0;
pub const REPAIR_AMOUNT: f32 = 25.0;
pub const SHIELD_SECS: f32 = 5.0;

// --- Spawner ---

pub const SPAWN_BASE_INTERVAL: f32 = 1.5;
pub const SPAWN_MIN_INTERVAL: f32 = 0.4;
/// Seconds of wave time over which the spawn interval halves.
pub const SPAWN_RAMP_SECS: f32 = 60.0;
pub const FORMATION_INTERVAL: f32 = 12.0;
pub const BOSS_SPAWN_SECS: f32 = 90.0;
pub const SPAWN_EDGE_INSET: f32 = 40.0;

/// Message durations (milliseconds).
pub const MESSAGE_SHORT_MS: u32 = 1500;
pub const MESSAGE_LONG_MS: u32 = 3000;
