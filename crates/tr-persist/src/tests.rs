//! Unit tests for tr-persist.

#[cfg(test)]
mod helpers {
    use tr_catalogue::TransitCatalogue;
    use tr_core::RoutingConfig;
    use tr_engine::TransitRouter;

    use crate::Snapshot;

    pub fn config() -> RoutingConfig {
        RoutingConfig { wait_time_min: 6, bus_velocity_kmh: 40.0 }
    }

    /// Two lines meeting at B, plus an unserved stop D.
    pub fn network() -> TransitCatalogue {
        let mut c = TransitCatalogue::new();
        c.add_bus("1", &["A", "B", "C"], false).unwrap();
        c.add_bus("7", &["B", "E"], true).unwrap();
        c.add_stop("D");
        c.set_distance_m("A", "B", 3000.0).unwrap();
        c.set_distance_m("B", "C", 4200.0).unwrap();
        c.set_distance_m("B", "E", 1500.0).unwrap();
        c
    }

    pub fn snapshot() -> Snapshot {
        let catalogue = network();
        let router = TransitRouter::build(&catalogue, config()).unwrap();
        Snapshot::capture(catalogue, &router)
    }

    pub const STOPS: [&str; 6] = ["A", "B", "C", "D", "E", "Narnia"];
}

#[cfg(test)]
mod codec {
    use crate::{PersistError, Snapshot, MAGIC, VERSION};

    use super::helpers::snapshot;

    #[test]
    fn header_layout() {
        let bytes = snapshot().encode().unwrap();
        assert_eq!(bytes[..8], MAGIC);
        assert_eq!(u32::from_le_bytes(bytes[8..12].try_into().unwrap()), VERSION);
        assert!(bytes.len() > 12);
    }

    #[test]
    fn encode_is_deterministic() {
        let snap = snapshot();
        assert_eq!(snap.encode().unwrap(), snap.encode().unwrap());
    }

    #[test]
    fn empty_input_is_truncated() {
        assert!(matches!(Snapshot::decode(&[]), Err(PersistError::Truncated)));
        assert!(matches!(
            Snapshot::decode(&MAGIC[..5]),
            Err(PersistError::Truncated)
        ));
    }

    #[test]
    fn wrong_magic_rejected() {
        let mut bytes = snapshot().encode().unwrap();
        bytes[0] ^= 0xff;
        assert!(matches!(
            Snapshot::decode(&bytes),
            Err(PersistError::BadMagic)
        ));
    }

    #[test]
    fn unknown_version_rejected() {
        let mut bytes = snapshot().encode().unwrap();
        bytes[8..12].copy_from_slice(&99u32.to_le_bytes());
        assert!(matches!(
            Snapshot::decode(&bytes),
            Err(PersistError::UnsupportedVersion(99))
        ));
    }

    #[test]
    fn truncated_payload_rejected() {
        let bytes = snapshot().encode().unwrap();
        let cut = &bytes[..bytes.len() - 7];
        assert!(matches!(
            Snapshot::decode(cut),
            Err(PersistError::Decode(_))
        ));
    }

    #[test]
    fn garbled_payload_rejected() {
        let mut bytes = snapshot().encode().unwrap();
        let len = bytes.len();
        // Stomp the tail of the payload with noise.
        for b in &mut bytes[len - 16..] {
            *b = 0xAB;
        }
        assert!(Snapshot::decode(&bytes).is_err());
    }
}

#[cfg(test)]
mod round_trip {
    use tr_engine::TransitRouter;

    use crate::Snapshot;

    use super::helpers::{config, network, snapshot, STOPS};

    #[test]
    fn loaded_engine_answers_identically() {
        let catalogue = network();
        let original = TransitRouter::build(&catalogue, config()).unwrap();
        let bytes = Snapshot::capture(catalogue, &original).encode().unwrap();

        let (_, loaded) = Snapshot::decode(&bytes).unwrap().into_router();
        for from in STOPS {
            for to in STOPS {
                assert_eq!(
                    original.route(from, to),
                    loaded.route(from, to),
                    "disagreement on {from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn loaded_engine_keeps_config() {
        let (_, loaded) = Snapshot::decode(&snapshot().encode().unwrap())
            .unwrap()
            .into_router();
        assert_eq!(loaded.config().wait_time_min, 6);
        assert_eq!(loaded.config().bus_velocity_kmh, 40.0);
    }

    #[test]
    fn catalogue_section_survives() {
        let decoded = Snapshot::decode(&snapshot().encode().unwrap()).unwrap();
        assert_eq!(decoded.catalogue.bus_count(), 2);
        assert!(decoded.catalogue.stop_id("D").is_ok());
    }
}

#[cfg(test)]
mod files {
    use crate::{load_from_file, save_to_file, PersistError};

    use super::helpers::snapshot;

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "tr-persist-save-then-load-{}.bin",
            std::process::id()
        ));
        let snap = snapshot();
        save_to_file(&path, &snap).unwrap();
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.encode().unwrap(), snap.encode().unwrap());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("tr-persist-does-not-exist.bin");
        assert!(matches!(
            load_from_file(&path),
            Err(PersistError::Io(_))
        ));
    }
}
