#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{EncounterConfig, FormationDescriptor, WaveDescriptor};
    use crate::contacts::ContactEvent;
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::snapshot::EncounterSnapshot;
    use crate::types::{FieldSize, SimTime};

    /// Verify all progression enums round-trip through serde_json.
    #[test]
    fn test_encounter_state_serde() {
        let variants = vec![
            EncounterState::SpawningWaves,
            EncounterState::AwaitingClear,
            EncounterState::BossWarning,
            EncounterState::BossFight,
            EncounterState::Complete,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EncounterState = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_formation_pattern_serde() {
        let variants = vec![
            FormationPattern::VShape,
            FormationPattern::Line,
            FormationPattern::Arc,
            FormationPattern::Arrow,
            FormationPattern::Diamond,
            FormationPattern::Box,
            FormationPattern::Circle,
            FormationPattern::Cross,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: FormationPattern = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_move_state_serde_tagged() {
        let states = vec![
            MoveState::Descend,
            MoveState::Zigzag { dir: -1.0 },
            MoveState::Dock { fired: true },
            MoveState::MineDrift { armed: false },
            MoveState::Orbit {
                center: Vec2::new(200.0, 480.0),
                phase: 1.5,
            },
        ];
        for s in &states {
            let json = serde_json::to_string(s).unwrap();
            assert!(
                json.contains("\"program\""),
                "MoveState should serialize with a program tag: {json}"
            );
            let back: MoveState = serde_json::from_str(&json).unwrap();
            assert_eq!(*s, back);
        }
    }

    /// Verify ContactEvent round-trips through serde (tagged union).
    #[test]
    fn test_contact_event_serde() {
        let events = vec![
            ContactEvent::ShotHitEnemy { enemy_id: 7 },
            ContactEvent::ShotHitBoss { boss_id: 1 },
            ContactEvent::PlayerTouchedEnemy { enemy_id: 3 },
            ContactEvent::HazardHitPlayer { hazard_id: 99 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            assert!(json.contains("\"type\""));
            let back: ContactEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemySpawned {
                id: 12,
                archetype: EnemyArchetype::Wasp,
            },
            GameEvent::EnemyDestroyed {
                id: 12,
                archetype: EnemyArchetype::Wasp,
                points: 150,
            },
            GameEvent::BossDefeatPulse {
                position: Vec2::new(200.0, 490.0),
            },
            GameEvent::PlayerHit { lives_remaining: 2 },
            GameEvent::StateChanged {
                state: EncounterState::BossFight,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// Verify wave descriptors survive a config round-trip, so hosts can
    /// supply level tables as data.
    #[test]
    fn test_wave_descriptor_serde() {
        let wave = WaveDescriptor {
            members: vec![EnemyArchetype::Dart, EnemyArchetype::Striker],
            spawn_delay: 1.5,
            spawn_interval: 0.4,
            formation: Some(FormationDescriptor {
                pattern: FormationPattern::VShape,
                count: 5,
                spacing: 50.0,
                attack_delay: 2.0,
            }),
        };
        let json = serde_json::to_string(&wave).unwrap();
        let back: WaveDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back.members.len(), 2);
        let formation = back.formation.expect("formation should survive");
        assert_eq!(formation.pattern, FormationPattern::VShape);
        assert_eq!(formation.count, 5);
    }

    /// Verify EncounterSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = EncounterSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: EncounterSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.state, back.state);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_default_config() {
        let config = EncounterConfig::default();
        assert_eq!(config.level, 1);
        assert!((config.time_scale - 1.0).abs() < 1e-10);
        assert!(config.field.width > 0.0 && config.field.height > 0.0);
    }

    #[test]
    fn test_field_contains() {
        let field = FieldSize::new(400.0, 600.0);
        assert!(field.contains(Vec2::new(200.0, 300.0)));
        assert!(field.contains(Vec2::new(0.0, 0.0)));
        assert!(!field.contains(Vec2::new(-1.0, 300.0)));
        assert!(!field.contains(Vec2::new(200.0, 601.0)));
        assert!((field.center_x() - 200.0).abs() < 1e-6);
    }

    /// Verify SimTime advancement with variable dt.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..30 {
            time.advance(1.0 / 30.0);
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }
}
