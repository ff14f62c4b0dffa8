//! Pod/station registry: the single source of truth for plant structure.
//!
//! Pods own stations; stations carry a stable slug id. The registry is built
//! once from configuration data and is immutable afterwards. When no pod
//! list has been configured, callers fall back to the flat plant unit list.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Shift keys the plant runs, in rotation order.
pub const SHIFT_KEYS: [&str; 3] = ["A", "B", "C"];

/// Flat unit list used while no pod registry is configured.
pub const FALLBACK_UNIT_NAMES: [&str; 41] = [
    "WINDSHIELD",
    "DT FRT",
    "DT RR",
    "DT TRX",
    "CIUL SPOILER",
    "CIUL DP",
    "CIUL WF",
    "CIVIC LPG",
    "COWL",
    "BT1XX RH WF",
    "BT1XX 2 RH",
    "BT1XX 2 LH",
    "BT1XX COVER",
    "C1YX DP",
    "C1YX SPOILER",
    "C1YX RKR LH",
    "C1YX RH RKRS",
    "C1YX MIC",
    "C1YX PAINTED",
    "C1YX PTD WOM",
    "C1YX BSM",
    "C1YX LDM",
    "A2LL RKRS",
    "END CAPS 1",
    "END CAPS 2",
    "END CAP LH",
    "WS FRT",
    "WS QUARTERS",
    "WL75",
    "ACCORD",
    "CANARD",
    "ABRACKETS",
    "GRILL PHEV",
    "GRILL REG",
    "TLX BUMPER",
    "HEAD LAMP",
    "EMBLEM",
    "MDX SKID G",
    "CIUG",
    "FLOADER",
    "23 SPOILER 1",
];

/// Trim and collapse internal whitespace runs to a single space.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Stable slug: normalized, lowercased, non-alphanumeric runs become `-`.
#[must_use]
pub fn slugify_id(name: &str) -> String {
    let normalized = normalize_name(name).to_lowercase();
    let mut slug = String::with_capacity(normalized.len());
    let mut in_run = false;
    for ch in normalized.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            in_run = false;
        } else if !in_run {
            slug.push('-');
            in_run = true;
        }
    }
    slug
}

/// Area classification derived from a station or unit name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Area {
    Dt,
    Ws,
    Bt1xx,
    C1yx,
    Ciul,
    Grill,
    General,
}

impl Area {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Area::Dt => "DT",
            Area::Ws => "WS",
            Area::Bt1xx => "BT1XX",
            Area::C1yx => "C1YX",
            Area::Ciul => "CIUL",
            Area::Grill => "GRILL",
            Area::General => "GENERAL",
        }
    }

    /// Classify by name prefix; unknown prefixes land in `General`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let n = normalize_name(name).to_uppercase();
        if n.starts_with("DT ") {
            Area::Dt
        } else if n.starts_with("WS ") {
            Area::Ws
        } else if n.starts_with("BT1XX") {
            Area::Bt1xx
        } else if n.starts_with("C1YX") {
            Area::C1yx
        } else if n.starts_with("CIUL") {
            Area::Ciul
        } else if n.starts_with("GRILL") {
            Area::Grill
        } else {
            Area::General
        }
    }

    /// Parse an explicit area key from configuration, e.g. `"DT"`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        const ALL: [Area; 7] = [
            Area::Dt,
            Area::Ws,
            Area::Bt1xx,
            Area::C1yx,
            Area::Ciul,
            Area::Grill,
            Area::General,
        ];
        let key = key.trim();
        ALL.into_iter().find(|a| a.as_str() == key)
    }
}

/// Raw station entry as it appears in configuration data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationSpec {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub line: String,
}

/// Raw pod entry as it appears in configuration data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub pod_key: String,
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub stations: Vec<StationSpec>,
}

/// Indexed station with normalized identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub area: Area,
    pub line: String,
    pub pod_key: String,
    pub pod_name: String,
}

/// Pod with its station ids in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pod {
    pub key: String,
    pub name: String,
    pub station_ids: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid pod registry JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable pod/station registry with uniqueness guardrails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    pods: Vec<Pod>,
    station_by_id: BTreeMap<String, Station>,
    station_pod: BTreeMap<String, String>,
}

impl Registry {
    /// Build from configured pods. Duplicate pod keys and station ids are
    /// reported via `log::warn!`; on duplicate station ids the last entry
    /// wins.
    #[must_use]
    pub fn from_pods(specs: &[PodSpec]) -> Self {
        let mut pods = Vec::new();
        let mut station_by_id = BTreeMap::new();
        let mut station_pod = BTreeMap::new();

        for spec in specs {
            let pod_key = normalize_name(&spec.pod_key);
            if pod_key.is_empty() {
                continue;
            }
            let pod_name = {
                let n = normalize_name(&spec.pod_name);
                if n.is_empty() { pod_key.clone() } else { n }
            };

            if pods.iter().any(|p: &Pod| p.key == pod_key) {
                log::warn!("duplicate pod key detected: {pod_key:?}");
            }

            let mut station_ids = Vec::with_capacity(spec.stations.len());
            for raw in &spec.stations {
                let st_name = {
                    let n = normalize_name(&raw.name);
                    if n.is_empty() { normalize_name(&raw.id) } else { n }
                };
                let st_id = {
                    let id = normalize_name(&raw.id);
                    if id.is_empty() { slugify_id(&st_name) } else { id }
                };
                if st_id.is_empty() {
                    continue;
                }
                if station_by_id.contains_key(&st_id) {
                    log::warn!("duplicate station id detected: {st_id:?}");
                }

                let station = Station {
                    id: st_id.clone(),
                    name: if st_name.is_empty() {
                        st_id.clone()
                    } else {
                        st_name.clone()
                    },
                    kind: if raw.kind.trim().is_empty() {
                        "station".to_string()
                    } else {
                        raw.kind.trim().to_string()
                    },
                    area: Area::from_key(&raw.area).unwrap_or_else(|| {
                        Area::from_name(if st_name.is_empty() { &st_id } else { &st_name })
                    }),
                    line: raw.line.trim().to_string(),
                    pod_key: pod_key.clone(),
                    pod_name: pod_name.clone(),
                };

                station_ids.push(st_id.clone());
                station_pod.insert(st_id.clone(), pod_key.clone());
                station_by_id.insert(st_id, station);
            }

            pods.push(Pod {
                key: pod_key,
                name: pod_name,
                station_ids,
            });
        }

        if !pods.is_empty() && station_by_id.is_empty() {
            log::warn!("pod list is present but no stations were indexed");
        }

        Self {
            pods,
            station_by_id,
            station_pod,
        }
    }

    /// Load a pod list from JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a pod list.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let specs: Vec<PodSpec> = serde_json::from_str(json)?;
        Ok(Self::from_pods(&specs))
    }

    #[must_use]
    pub fn has_pods(&self) -> bool {
        !self.pods.is_empty()
    }

    #[must_use]
    pub fn pods(&self) -> &[Pod] {
        &self.pods
    }

    /// Stations of one pod, in the pod's declared order.
    #[must_use]
    pub fn pod_stations(&self, pod_key: &str) -> Vec<&Station> {
        let key = normalize_name(pod_key);
        self.pods
            .iter()
            .find(|p| p.key == key)
            .map(|p| {
                p.station_ids
                    .iter()
                    .filter_map(|id| self.station_by_id.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn all_stations(&self) -> impl Iterator<Item = &Station> {
        self.station_by_id.values()
    }

    #[must_use]
    pub fn station_by_id(&self, station_id: &str) -> Option<&Station> {
        self.station_by_id.get(&normalize_name(station_id))
    }

    #[must_use]
    pub fn pod_key_for_station(&self, station_id: &str) -> Option<&str> {
        self.station_pod
            .get(&normalize_name(station_id))
            .map(String::as_str)
    }
}
