//! Smooth interpolation of visual positions toward logical cells.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Motion, Mover, Position, VisualPosition};
use crate::constants::ARRIVAL_EPSILON_SQ;
use crate::events::{EventQueue, GameEvent};

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + delta / distance * max_delta
    }
}

/// Advance every in-flight move by `dt` seconds.
///
/// Each mover covers `inverse_move_time * dt` cells per tick, so a move
/// takes `move_time` regardless of tick size. Once the squared remaining
/// distance drops below epsilon the visual position snaps onto the target
/// and the `Motion` is removed.
pub fn advance_motions(world: &mut World, dt: f32, events: &mut EventQueue) {
    let mut arrived = Vec::new();
    for (id, (vis, motion, mover, pos)) in
        world.query_mut::<(&mut VisualPosition, &Motion, &Mover, &Position)>()
    {
        vis.pos = move_towards(vis.pos, motion.target, mover.inverse_move_time * dt);
        if vis.pos.distance_squared(motion.target) < ARRIVAL_EPSILON_SQ {
            vis.pos = motion.target;
            arrived.push((id, *pos));
        }
    }

    for (id, at) in arrived {
        let _ = world.remove_one::<Motion>(id);
        events.push(GameEvent::MoveFinished { entity: id, at });
    }
}

/// Finish an in-flight move immediately, landing exactly on its target.
pub fn snap_to_target(world: &mut World, entity: Entity, events: &mut EventQueue) {
    let Ok(motion) = world.remove_one::<Motion>(entity) else {
        return;
    };
    if let Ok(mut vis) = world.get::<&mut VisualPosition>(entity) {
        vis.pos = motion.target;
    }
    if let Ok(at) = world.get::<&Position>(entity).map(|p| *p) {
        events.push(GameEvent::MoveFinished { entity, at });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Direction, LayerMask, MoverKind};

    fn moving_entity(world: &mut World, move_time: f32) -> Entity {
        let from = Position::new(0, 0);
        let to = from.offset(Direction::Right);
        world.spawn((
            to,
            VisualPosition::from_position(&from),
            Mover::new(move_time, LayerMask::BLOCKING, MoverKind::Controlled { wall_damage: 1 }),
            Motion {
                target: to.as_vec2(),
            },
        ))
    }

    #[test]
    fn test_move_towards_never_overshoots() {
        let target = Vec2::new(1.0, 0.0);
        assert_eq!(move_towards(Vec2::ZERO, target, 0.25), Vec2::new(0.25, 0.0));
        assert_eq!(move_towards(Vec2::new(0.9, 0.0), target, 0.25), target);
    }

    #[test]
    fn test_arrival_time_independent_of_tick_size() {
        for ticks in [1usize, 2, 4, 10] {
            let mut world = World::new();
            let mut events = EventQueue::new();
            let entity = moving_entity(&mut world, 0.1);
            let dt = 0.1 / ticks as f32;
            for tick in 0..ticks {
                assert!(world.get::<&Motion>(entity).is_ok(), "arrived early at tick {tick}");
                advance_motions(&mut world, dt * 1.0001, &mut events);
            }
            assert!(world.get::<&Motion>(entity).is_err());
            assert_eq!(world.get::<&VisualPosition>(entity).unwrap().pos, Vec2::new(1.0, 0.0));
            assert_eq!(events.iter().count(), 1);
        }
    }

    #[test]
    fn test_interpolation_stays_on_straight_line() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let entity = moving_entity(&mut world, 0.5);
        advance_motions(&mut world, 0.1, &mut events);
        let pos = world.get::<&VisualPosition>(entity).unwrap().pos;
        assert!((pos.x - 0.2).abs() < 1e-5);
        assert_eq!(pos.y, 0.0);
        assert!(world.get::<&Motion>(entity).is_ok());
    }

    #[test]
    fn test_snap_lands_on_target() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let entity = moving_entity(&mut world, 1.0);
        snap_to_target(&mut world, entity, &mut events);
        assert_eq!(world.get::<&VisualPosition>(entity).unwrap().pos, Vec2::new(1.0, 0.0));
        assert!(world.get::<&Motion>(entity).is_err());
        assert!(matches!(events.iter().next(), Some(GameEvent::MoveFinished { .. })));
    }
}
