//! The snapshot codec.
//!
//! # Why persist at all
//!
//! Solving the routing table is `O(V³)`; answering queries from it is
//! O(path length).  The snapshot lets one process build and solve once,
//! write the blob, and any number of later processes answer queries with
//! zero re-solving.
//!
//! # Wire format
//!
//! ```text
//! bytes 0..8   magic  b"TRSNAP\0\0"
//! bytes 8..12  format version, u32 little-endian (currently 1)
//! bytes 12..   bincode-encoded `Snapshot`
//! ```
//!
//! The payload has two sections: the catalogue (stops, buses, distances)
//! and the router (config, name tables, edge labels, graph, routing
//! table).  Readers reject unknown magic and versions before touching the
//! payload.
//!
//! Save and load are whole-blob operations; there is no append or
//! partial-write recovery.  A crash mid-save leaves an unusable file — an
//! accepted risk of this design.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use tr_catalogue::TransitCatalogue;
use tr_engine::{EngineParts, TransitRouter};

use crate::{PersistError, PersistResult};

/// First 8 bytes of every snapshot.
pub const MAGIC: [u8; 8] = *b"TRSNAP\0\0";

/// Current format version.  Bump on any layout change; readers refuse
/// versions they do not know.
pub const VERSION: u32 = 1;

const HEADER_LEN: usize = MAGIC.len() + 4;

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Everything one build process hands to later query processes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Catalogue section: the network the router was built from.
    pub catalogue: TransitCatalogue,
    /// Router section: the complete solved engine state.
    pub router: EngineParts,
}

impl Snapshot {
    /// Capture a solved engine together with its source catalogue.
    pub fn capture(catalogue: TransitCatalogue, router: &TransitRouter) -> Self {
        Self { catalogue, router: router.to_parts() }
    }

    /// Reassemble the query-ready engine.  No solving happens here.
    pub fn into_router(self) -> (TransitCatalogue, TransitRouter) {
        (self.catalogue, TransitRouter::from_parts(self.router))
    }

    // ── Codec ─────────────────────────────────────────────────────────────

    /// Serialize to the wire format.
    pub fn encode(&self) -> PersistResult<Vec<u8>> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + 1024);
        bytes.extend_from_slice(&MAGIC);
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bincode::serialize_into(&mut bytes, self)
            .map_err(|e| PersistError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    /// Parse the wire format.  Malformed or truncated input is a hard
    /// failure; no partial snapshot is ever returned.
    pub fn decode(bytes: &[u8]) -> PersistResult<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(PersistError::Truncated);
        }
        if bytes[..MAGIC.len()] != MAGIC {
            return Err(PersistError::BadMagic);
        }
        let mut version_bytes = [0u8; 4];
        version_bytes.copy_from_slice(&bytes[MAGIC.len()..HEADER_LEN]);
        let version = u32::from_le_bytes(version_bytes);
        if version != VERSION {
            return Err(PersistError::UnsupportedVersion(version));
        }
        bincode::deserialize(&bytes[HEADER_LEN..])
            .map_err(|e| PersistError::Decode(e.to_string()))
    }
}

// ── File helpers ──────────────────────────────────────────────────────────────

/// Encode and write a snapshot as one blob.
pub fn save_to_file(path: &Path, snapshot: &Snapshot) -> PersistResult<()> {
    let bytes = snapshot.encode()?;
    std::fs::write(path, &bytes)?;
    info!("snapshot saved: {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Read and decode a snapshot written by [`save_to_file`].
pub fn load_from_file(path: &Path) -> PersistResult<Snapshot> {
    let bytes = std::fs::read(path)?;
    let snapshot = Snapshot::decode(&bytes)?;
    info!("snapshot loaded: {} bytes from {}", bytes.len(), path.display());
    Ok(snapshot)
}
