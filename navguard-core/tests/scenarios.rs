//! Full flight episodes replayed through the periodic check

use navguard_core::check::{VarianceSample, Vector3};
use navguard_core::config::{parse_config, StoredConfig, MAX_STORED_SIZE};
use navguard_core::testing::{MockEstimator, MockVehicle, RecordingReporter};
use navguard_core::traits::{ErrorEvent, FlightMode, ModeReason, Severity};
use navguard_core::{EkfCheck, MonitorConfig};

const TICK_MS: u32 = 100;

struct Flight {
    check: EkfCheck,
    estimator: MockEstimator,
    vehicle: MockVehicle,
    reporter: RecordingReporter,
    now_ms: u32,
}

impl Flight {
    fn new(config: MonitorConfig) -> Self {
        Self {
            check: EkfCheck::new(config).unwrap(),
            estimator: MockEstimator::new(),
            vehicle: MockVehicle::armed(),
            reporter: RecordingReporter::new(),
            now_ms: 0,
        }
    }

    fn fly(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.now_ms = self.now_ms.wrapping_add(TICK_MS);
            self.check.tick(
                self.now_ms,
                &mut self.estimator,
                &mut self.vehicle,
                &mut self.reporter,
            );
        }
    }

    fn set_variances(&mut self, velocity: f32, position: f32, mag: f32) {
        self.estimator.sample = VarianceSample::new(velocity, position, Vector3::new(mag, 0.0, 0.0));
    }
}

#[test]
fn test_compass_and_gps_glitch_during_vtol_hover() {
    let mut flight = Flight::new(MonitorConfig::default());
    flight.vehicle.position_control = true;

    // Healthy cruise
    flight.set_variances(0.2, 0.2, 0.1);
    flight.fly(50);
    assert_eq!(flight.reporter.nav_bad, Some(false));
    assert!(flight.reporter.events.is_empty());

    // Compass interference plus GPS glitch
    flight.set_variances(1.7, 0.3, 1.2);
    flight.fly(9);
    assert_eq!(flight.estimator.yaw_resets, 1);
    assert_eq!(flight.estimator.lane_switches, 1);
    assert!(!flight.check.is_failsafe_active());

    flight.fly(1);
    assert!(flight.check.is_failsafe_active());
    assert_eq!(flight.reporter.nav_bad, Some(true));
    assert_eq!(
        flight.vehicle.mode_requests.as_slice(),
        &[(FlightMode::VtolHover, ModeReason::EkfFailsafe)]
    );
    assert_eq!(flight.reporter.texts.len(), 1);
    assert_eq!(flight.reporter.texts[0].0, Severity::Critical);
    assert_eq!(flight.reporter.texts[0].1.as_str(), "EKF variance");

    // Stays latched while bad
    flight.fly(100);
    assert!(flight.check.is_failsafe_active());
    assert_eq!(flight.vehicle.mode_requests.len(), 1);
    assert_eq!(flight.reporter.count(ErrorEvent::BAD_VARIANCE), 1);

    // Estimator recovers, latch drains over a full second
    flight.set_variances(0.2, 0.2, 0.1);
    flight.fly(9);
    assert!(flight.check.is_failsafe_active());
    flight.fly(1);
    assert!(!flight.check.is_failsafe_active());
    assert_eq!(flight.reporter.nav_bad, Some(false));

    assert_eq!(
        flight.reporter.events.as_slice(),
        &[
            ErrorEvent::BAD_VARIANCE,
            ErrorEvent::FAILSAFE_OCCURRED,
            ErrorEvent::VARIANCE_CLEARED,
            ErrorEvent::FAILSAFE_RESOLVED,
        ]
    );
}

#[test]
fn test_repeat_episodes_share_warning_cooldown() {
    let mut flight = Flight::new(MonitorConfig::default());
    flight.now_ms = 60_000;

    for _ in 0..3 {
        flight.set_variances(0.0, 1.0, 1.0);
        flight.fly(10);
        assert!(flight.check.is_failsafe_active());

        flight.set_variances(0.0, 0.0, 0.0);
        flight.fly(10);
        assert!(!flight.check.is_failsafe_active());
    }

    // Three latches inside 30 s, one warning
    assert_eq!(flight.reporter.count(ErrorEvent::BAD_VARIANCE), 3);
    assert_eq!(flight.reporter.texts.len(), 1);

    flight.fly(300);
    flight.set_variances(0.0, 1.0, 1.0);
    flight.fly(10);
    assert_eq!(flight.reporter.texts.len(), 2);
}

#[test]
fn test_auto_mission_lands() {
    let mut flight = Flight::new(MonitorConfig::default());
    flight.vehicle.position_control = true;
    flight.vehicle.auto = true;

    flight.set_variances(2.0, 2.0, 2.0);
    flight.fly(10);

    assert_eq!(
        flight.vehicle.mode_requests.as_slice(),
        &[(FlightMode::VtolLand, ModeReason::EkfFailsafe)]
    );
}

#[test]
fn test_fixed_wing_flight_keeps_mode() {
    let mut flight = Flight::new(MonitorConfig::default());

    flight.set_variances(2.0, 2.0, 2.0);
    flight.fly(10);

    assert!(flight.check.is_failsafe_active());
    assert!(flight.vehicle.mode_requests.is_empty());
    assert_eq!(flight.reporter.count(ErrorEvent::FAILSAFE_OCCURRED), 1);
}

#[test]
fn test_landing_and_disarm_clears_latch() {
    let mut flight = Flight::new(MonitorConfig::default());

    flight.set_variances(0.0, 1.0, 1.0);
    flight.fly(15);
    assert!(flight.check.is_failsafe_active());

    flight.vehicle.armed = false;
    flight.fly(1);
    assert!(!flight.check.is_failsafe_active());
    assert_eq!(flight.check.fail_count(), 0);
    assert_eq!(flight.reporter.count(ErrorEvent::FAILSAFE_RESOLVED), 1);
    assert_eq!(flight.reporter.count(ErrorEvent::VARIANCE_CLEARED), 0);

    // Disarmed on the ground with bad variances does nothing
    flight.fly(50);
    assert_eq!(flight.check.fail_count(), 0);
    assert_eq!(flight.reporter.count(ErrorEvent::BAD_VARIANCE), 1);
}

#[test]
fn test_waiting_for_origin() {
    let mut flight = Flight::new(MonitorConfig::default());
    flight.estimator.origin = false;
    flight.set_variances(5.0, 5.0, 5.0);

    flight.fly(100);
    assert_eq!(flight.check.fail_count(), 0);
    assert_eq!(flight.reporter.nav_bad, None);
    assert!(flight.reporter.events.is_empty());

    flight.estimator.origin = true;
    flight.fly(10);
    assert!(flight.check.is_failsafe_active());
}

#[test]
fn test_toml_config_drives_check() {
    let config = parse_config(
        r#"
[ekf_check]
threshold = 0.5
iterations = 7
"#,
    )
    .unwrap();
    let mut flight = Flight::new(config);

    // Above the configured threshold, below the default
    flight.set_variances(0.0, 0.6, 0.6);
    flight.fly(6);
    assert_eq!(flight.estimator.yaw_resets, 1);
    assert!(!flight.check.is_failsafe_active());
    flight.fly(1);
    assert!(flight.check.is_failsafe_active());
}

#[test]
fn test_stored_config_drives_check() {
    let config = MonitorConfig {
        threshold: 0.0,
        ..MonitorConfig::default()
    };
    let mut buf = [0u8; MAX_STORED_SIZE];
    let len = StoredConfig::new(config).encode(&mut buf).unwrap();
    let loaded = StoredConfig::decode(&buf[..len]).unwrap();

    // Stored config has the check disabled
    let mut flight = Flight::new(loaded);
    flight.set_variances(5.0, 5.0, 5.0);
    flight.fly(50);
    assert_eq!(flight.check.fail_count(), 0);
    assert!(!flight.check.is_failsafe_active());
    assert!(flight.reporter.events.is_empty());
}

#[test]
fn test_status_snapshot_through_episode() {
    let mut flight = Flight::new(MonitorConfig::default());

    flight.set_variances(0.0, 1.0, 1.0);
    flight.fly(4);
    let status = flight.check.status();
    assert_eq!(status.fail_count, 4);
    assert!(status.is_degrading());
    assert!(status.is_healthy());

    flight.fly(6);
    let status = flight.check.status();
    assert!(status.bad_variance);
    assert!(status.failsafe_active);
    assert!(!status.is_healthy());
    assert!(!status.is_degrading());
}
