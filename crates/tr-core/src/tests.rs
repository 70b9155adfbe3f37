//! Unit tests for tr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BusId, EdgeId, StopId, VertexId};

    #[test]
    fn index_cast() {
        assert_eq!(StopId(42).index(), 42);
        assert_eq!(EdgeId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(VertexId(100) > VertexId(99));
        assert!(BusId(3) == BusId(3));
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
        assert_eq!(VertexId(15).to_string(), "VertexId(15)");
    }
}

#[cfg(test)]
mod config {
    use crate::{ride_minutes, RoutingConfig};

    #[test]
    fn wait_minutes_is_exact() {
        let cfg = RoutingConfig { wait_time_min: 6, bus_velocity_kmh: 40.0 };
        assert_eq!(cfg.wait_minutes(), 6.0);
    }

    #[test]
    fn ride_conversion() {
        // 3000 m at 40 km/h: 3 km / 40 km/h = 0.075 h = 4.5 min.
        assert!((ride_minutes(3000.0, 40.0) - 4.5).abs() < 1e-9);
        // 4200 m at 40 km/h = 6.3 min.
        assert!((ride_minutes(4200.0, 40.0) - 6.3).abs() < 1e-9);
    }

    #[test]
    fn ride_scales_linearly() {
        let one = ride_minutes(1000.0, 30.0);
        let five = ride_minutes(5000.0, 30.0);
        assert!((five - 5.0 * one).abs() < 1e-9);
    }
}
