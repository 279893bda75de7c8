//! Section copy for both pages: feature grids, architecture layers,
//! technical tiers and the language sections.

/// One card of a feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const PLATFORM_FEATURES: &[Feature] = &[
    Feature {
        title: "DHT-Based Discovery",
        description: "Nodes, code and data are located through a Kademlia-style \
                      distributed hash table. No coordinators, no registries, no \
                      single point of failure.",
        icon: "network",
    },
    Feature {
        title: "WebAssembly Runtime",
        description: "Workloads run as sandboxed WebAssembly modules with \
                      deterministic metering, so untrusted code executes safely \
                      on any node in the overlay.",
        icon: "cpu",
    },
    Feature {
        title: "Location Transparency",
        description: "Actors are addressed by identity, not by host. The platform \
                      routes messages to wherever an actor currently lives, \
                      including across migrations.",
        icon: "globe",
    },
    Feature {
        title: "Fault Tolerance",
        description: "Actor state is replicated across neighboring nodes and \
                      supervision restarts failed actors from their last \
                      consistent snapshot.",
        icon: "shield",
    },
    Feature {
        title: "Elastic Scaling",
        description: "Joining the overlay is a single handshake. Capacity grows \
                      and shrinks with the node population while the DHT rebalances \
                      placement automatically.",
        icon: "layers",
    },
    Feature {
        title: "Content-Addressed Storage",
        description: "Module code and actor snapshots are stored by content hash, \
                      giving the whole network integrity checks and deduplication \
                      for free.",
        icon: "database",
    },
];

/// One layer of the architecture section, top of the stack first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchitectureLayer {
    pub name: &'static str,
    pub summary: &'static str,
}

pub const ARCHITECTURE_LAYERS: &[ArchitectureLayer] = &[
    ArchitectureLayer {
        name: "Application Layer",
        summary: "Replica programs compiled to WebAssembly modules, deployed by \
                  publishing their content hash to the overlay.",
    },
    ArchitectureLayer {
        name: "Runtime Layer",
        summary: "Per-node WebAssembly sandboxes hosting actor mailboxes, \
                  cooperative scheduling and snapshotting.",
    },
    ArchitectureLayer {
        name: "Overlay Layer",
        summary: "DHT routing, membership and replica placement across the node \
                  population.",
    },
    ArchitectureLayer {
        name: "Transport Layer",
        summary: "Encrypted peer-to-peer connections with NAT traversal between \
                  overlay nodes.",
    },
];

/// One column of the technical details tier grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechTier {
    pub name: &'static str,
    pub tagline: &'static str,
    pub points: &'static [&'static str],
}

pub const TECH_TIERS: &[TechTier] = &[
    TechTier {
        name: "Compute",
        tagline: "Safe execution anywhere",
        points: &[
            "WebAssembly isolation per actor",
            "Deterministic fuel metering",
            "Snapshot and migrate running actors",
        ],
    },
    TechTier {
        name: "Network",
        tagline: "A self-organizing overlay",
        points: &[
            "Kademlia routing with iterative lookups",
            "Gossip-based membership and failure detection",
            "End-to-end encrypted transport",
        ],
    },
    TechTier {
        name: "Storage",
        tagline: "Durable by neighborhood",
        points: &[
            "Content-addressed module and snapshot store",
            "Configurable replication factor",
            "Convergent repair after partitions",
        ],
    },
];

pub const LANGUAGE_FEATURES: &[Feature] = &[
    Feature {
        title: "Actor-First Design",
        description: "All objects are actors by default, making distributed \
                      computing natural and intuitive.",
        icon: "actor",
    },
    Feature {
        title: "Swift/Java-like Syntax",
        description: "Familiar object-oriented syntax making it easy for \
                      developers to get started.",
        icon: "code",
    },
    Feature {
        title: "Built for Distribution",
        description: "First-class support for distributed actors and async \
                      operations.",
        icon: "globe",
    },
];

pub const TYPE_SYSTEM_POINTS: &[Feature] = &[
    Feature {
        title: "Static with Inference",
        description: "Every binding has a compile-time type, but annotations are \
                      only needed at actor boundaries.",
        icon: "check",
    },
    Feature {
        title: "Sendable by Construction",
        description: "Only value types and actor references cross actor \
                      boundaries, so data races are unrepresentable.",
        icon: "shield",
    },
    Feature {
        title: "Optionals over Nulls",
        description: "Absence is an explicit Optional type; there is no null and \
                      no null pointer error.",
        icon: "help",
    },
];

pub const ACTOR_MODEL_INTRO: &str =
    "Replica programs are built out of actors. An actor bundles state with \
     the only code allowed to touch it, which is what lets the ComputeDHT \
     runtime move, replicate and restart actors across the overlay without \
     changing program meaning.";

/// Bullet points of the actor model section on the language page.
pub const ACTOR_MODEL_POINTS: &[&str] = &[
    "Each actor owns its state; the only way in is an asynchronous message.",
    "Messages to a mailbox are processed one at a time, in arrival order.",
    "A distributed actor behaves like a local one; the runtime handles \
     placement, routing and retries.",
    "Supervision trees restart failed actors without taking the program down.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grids_are_populated() {
        assert_eq!(PLATFORM_FEATURES.len(), 6);
        assert_eq!(LANGUAGE_FEATURES.len(), 3);
        assert_eq!(ARCHITECTURE_LAYERS.len(), 4);
        assert_eq!(TECH_TIERS.len(), 3);
        assert!(!TYPE_SYSTEM_POINTS.is_empty());
        assert!(!ACTOR_MODEL_POINTS.is_empty());
    }

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<&str> = PLATFORM_FEATURES.iter().map(|f| f.title).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), PLATFORM_FEATURES.len());
    }

    #[test]
    fn tiers_carry_points() {
        for tier in TECH_TIERS {
            assert!(!tier.points.is_empty(), "tier {} has no points", tier.name);
        }
    }
}
