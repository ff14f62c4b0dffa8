//! Deterministic mock telemetry.
//!
//! Every value is derived from a seeded stream keyed by the unit or station
//! identity, so repeated reads agree across components and reloads. The
//! contract is determinism, not realism: same identity, same output.
//!
//! Draw order is part of the contract. Station KPIs draw status, part model,
//! counters, messages, then shift totals; unit snapshots draw status,
//! counters, messages, shift totals, then the part model.

use crate::layout::{Tile, tile_for_index};
use crate::registry::{Area, Registry, normalize_name, slugify_id};
use crate::seed::SeededStream;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

pub const NOMINAL_MESSAGES: [&str; 5] = [
    "System nominal.",
    "Safety interlocks OK.",
    "Network heartbeat stable.",
    "Operator panel ready.",
    "Recipe loaded.",
];

pub const WARNING_MESSAGES: [&str; 4] = [
    "Attention: check fixture alignment.",
    "Reminder: verify label position.",
    "Sensor threshold near limit.",
    "Material low warning.",
];

pub const DOWN_MESSAGES: [&str; 3] = [
    "DOWN: awaiting reset acknowledgement.",
    "DOWN: fault active \u{2014} verify station.",
    "DOWN: maintenance required.",
];

/// Operational status. Thresholds are policy constants: ~72% running,
/// ~18% attention, ~10% down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Running,
    Attn,
    Down,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Running => "RUNNING",
            Status::Attn => "ATTN",
            Status::Down => "DOWN",
        }
    }

    fn draw(stream: &mut SeededStream) -> Self {
        let x = stream.next_f64();
        if x < 0.72 {
            Status::Running
        } else if x < 0.9 {
            Status::Attn
        } else {
            Status::Down
        }
    }
}

/// Production shift. Unknown shift keys degrade to `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    A,
    B,
    C,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::A, Shift::B, Shift::C];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Shift::A => "A",
            Shift::B => "B",
            Shift::C => "C",
        }
    }

    /// Total parse; anything unrecognized is shift `A`.
    #[must_use]
    pub fn resolve(raw: &str) -> Shift {
        match raw.trim() {
            "B" => Shift::B,
            "C" => Shift::C,
            _ => Shift::A,
        }
    }
}

/// Live piece counters for one unit or station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub ok: u32,
    pub ng: u32,
    pub suspect: u32,
    pub containers: u32,
    pub pack: u32,
}

impl Counters {
    /// Five fresh draws in fixed field order.
    fn draw(stream: &mut SeededStream) -> Self {
        Self {
            ok: stream.int_in(20, 200),
            ng: stream.int_below(14),
            suspect: stream.int_below(9),
            containers: stream.int_in(1, 8),
            pack: stream.int_in(1, 25),
        }
    }
}

/// Aggregated totals for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTotals {
    pub ok: u32,
    pub ng: u32,
    pub suspect: u32,
    pub downtime_min: u32,
}

impl ShiftTotals {
    fn draw(stream: &mut SeededStream) -> Self {
        Self {
            ok: stream.int_in(50, 950),
            ng: stream.int_below(50),
            suspect: stream.int_below(35),
            downtime_min: stream.int_below(120),
        }
    }
}

/// Ordered message list: one nominal message, plus at most one status
/// message when not running.
pub type Messages = SmallVec<[String; 2]>;

fn draw_messages(status: Status, stream: &mut SeededStream) -> Messages {
    let mut messages = Messages::new();
    messages.push(NOMINAL_MESSAGES[stream.index_below(NOMINAL_MESSAGES.len())].to_string());
    match status {
        Status::Running => {}
        Status::Attn => {
            messages.push(WARNING_MESSAGES[stream.index_below(WARNING_MESSAGES.len())].to_string());
        }
        Status::Down => {
            messages.push(DOWN_MESSAGES[stream.index_below(DOWN_MESSAGES.len())].to_string());
        }
    }
    messages
}

/// Totals for all three shifts, drawn in fixed shift order.
fn draw_shift_totals(stream: &mut SeededStream) -> BTreeMap<Shift, ShiftTotals> {
    let mut totals = BTreeMap::new();
    for shift in Shift::ALL {
        totals.insert(shift, ShiftTotals::draw(stream));
    }
    totals
}

/// Mock KPI snapshot for one station and shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationKpis {
    pub station_id: String,
    pub status: Status,
    pub part_model: String,
    pub counters: Counters,
    pub messages: Messages,
    pub shift_totals: BTreeMap<Shift, ShiftTotals>,
}

/// Deterministic KPIs keyed by station id and shift.
///
/// Total over all inputs: unknown stations still produce a snapshot (seeded
/// by the id itself), and the empty id degrades to the default seed.
#[must_use]
pub fn mock_kpis_for_station(registry: &Registry, station_id: &str, shift: Shift) -> StationKpis {
    let id = normalize_name(station_id);
    let mut stream = SeededStream::for_identity(&format!("{id}::{}", shift.as_str()));

    let status = Status::draw(&mut stream);
    let area = registry
        .station_by_id(&id)
        .map_or_else(|| Area::from_name(&id), |st| Area::from_name(&st.name));
    let part_model = format!("{}-{}", area.as_str(), stream.int_in(100, 1000));
    let counters = Counters::draw(&mut stream);
    let messages = draw_messages(status, &mut stream);
    let shift_totals = draw_shift_totals(&mut stream);

    StationKpis {
        station_id: id,
        status,
        part_model,
        counters,
        messages,
        shift_totals,
    }
}

/// Dashboard tile for one plant unit, with its assigned grid position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSnapshot {
    pub id: String,
    pub name: String,
    /// Area key, or `POD` for pod-backed units.
    pub group: String,
    pub status: Status,
    pub part_model: String,
    pub counters: Counters,
    pub messages: Messages,
    pub shift_totals: BTreeMap<Shift, ShiftTotals>,
    /// Station ids attached to this unit; empty for flat fallback units.
    pub station_ids: Vec<String>,
    pub tile: Tile,
}

/// One snapshot seeded by the normalized unit name. The id slugifies
/// `id_key`, which is the pod key for pod-backed units and the name itself
/// for flat fallback units.
fn unit_snapshot(
    name: &str,
    id_key: &str,
    group: &str,
    station_ids: Vec<String>,
    index: usize,
) -> UnitSnapshot {
    let name = normalize_name(name);
    let mut stream = SeededStream::for_identity(&name);

    let status = Status::draw(&mut stream);
    let counters = Counters::draw(&mut stream);
    let messages = draw_messages(status, &mut stream);
    let shift_totals = draw_shift_totals(&mut stream);
    let part_model = format!("{group}-{}", stream.int_in(100, 1000));

    UnitSnapshot {
        id: slugify_id(id_key),
        name,
        group: group.to_string(),
        status,
        part_model,
        counters,
        messages,
        shift_totals,
        station_ids,
        tile: tile_for_index(index),
    }
}

/// All plant units with computed layout and mock telemetry.
///
/// Pod-backed units when a pod registry is configured; otherwise the flat
/// fallback unit list keeps the dashboard populated.
#[must_use]
pub fn plant_units(registry: &Registry) -> Vec<UnitSnapshot> {
    if registry.has_pods() {
        registry
            .pods()
            .iter()
            .enumerate()
            .map(|(index, pod)| {
                unit_snapshot(&pod.name, &pod.key, "POD", pod.station_ids.clone(), index)
            })
            .collect()
    } else {
        crate::registry::FALLBACK_UNIT_NAMES
            .iter()
            .enumerate()
            .map(|(index, name)| {
                unit_snapshot(name, name, Area::from_name(name).as_str(), Vec::new(), index)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_for(identity: &str) -> SeededStream {
        SeededStream::for_identity(identity)
    }

    #[test]
    fn status_thresholds_partition_the_unit_interval() {
        // Sweep a bunch of seeds; every draw must land in exactly one bucket.
        for seed in 0..500 {
            let mut stream = SeededStream::new(seed);
            let status = Status::draw(&mut stream);
            assert!(matches!(
                status,
                Status::Running | Status::Attn | Status::Down
            ));
        }
    }

    #[test]
    fn counters_stay_in_documented_ranges() {
        for seed in 0..200 {
            let mut stream = SeededStream::new(seed);
            let c = Counters::draw(&mut stream);
            assert!((20..200).contains(&c.ok));
            assert!(c.ng < 14);
            assert!(c.suspect < 9);
            assert!((1..8).contains(&c.containers));
            assert!((1..25).contains(&c.pack));
        }
    }

    #[test]
    fn running_units_get_exactly_one_nominal_message() {
        let mut stream = stream_for("messages-running");
        let messages = draw_messages(Status::Running, &mut stream);
        assert_eq!(messages.len(), 1);
        assert!(NOMINAL_MESSAGES.contains(&messages[0].as_str()));
    }

    #[test]
    fn degraded_units_get_a_second_status_message() {
        let mut stream = stream_for("messages-attn");
        let messages = draw_messages(Status::Attn, &mut stream);
        assert_eq!(messages.len(), 2);
        assert!(NOMINAL_MESSAGES.contains(&messages[0].as_str()));
        assert!(WARNING_MESSAGES.contains(&messages[1].as_str()));

        let mut stream = stream_for("messages-down");
        let messages = draw_messages(Status::Down, &mut stream);
        assert_eq!(messages.len(), 2);
        assert!(DOWN_MESSAGES.contains(&messages[1].as_str()));
    }

    #[test]
    fn shift_totals_cover_all_shifts_in_range() {
        let mut stream = stream_for("totals");
        let totals = draw_shift_totals(&mut stream);
        assert_eq!(totals.len(), 3);
        for shift in Shift::ALL {
            let t = totals[&shift];
            assert!((50..950).contains(&t.ok));
            assert!(t.ng < 50);
            assert!(t.suspect < 35);
            assert!(t.downtime_min < 120);
        }
    }

    #[test]
    fn shift_resolution_defaults_to_a() {
        assert_eq!(Shift::resolve("B"), Shift::B);
        assert_eq!(Shift::resolve(" C "), Shift::C);
        assert_eq!(Shift::resolve("D"), Shift::A);
        assert_eq!(Shift::resolve(""), Shift::A);
    }

    #[test]
    fn station_kpis_are_reproducible() {
        let registry = Registry::default();
        let a = mock_kpis_for_station(&registry, "ST-101", Shift::A);
        let b = mock_kpis_for_station(&registry, "ST-101", Shift::A);
        assert_eq!(a, b);
    }

    #[test]
    fn different_shifts_use_different_seeds() {
        let registry = Registry::default();
        let a = mock_kpis_for_station(&registry, "ST-101", Shift::A);
        let b = mock_kpis_for_station(&registry, "ST-101", Shift::B);
        assert_ne!(a, b);
    }

    #[test]
    fn station_id_is_normalized_into_the_snapshot() {
        let registry = Registry::default();
        let kpis = mock_kpis_for_station(&registry, "  ST-101  ", Shift::A);
        assert_eq!(kpis.station_id, "ST-101");
        assert_eq!(
            kpis,
            mock_kpis_for_station(&registry, "ST-101", Shift::A)
        );
    }

    #[test]
    fn fallback_units_fill_the_dashboard() {
        let registry = Registry::default();
        let units = plant_units(&registry);
        assert_eq!(units.len(), 41);
        assert_eq!(units[0].name, "WINDSHIELD");
        assert_eq!(units[0].id, "windshield");
        assert!(units.iter().all(|u| u.station_ids.is_empty()));
        // part model prefix follows the unit's area group
        assert!(units[1].part_model.starts_with("DT-"));
    }

    #[test]
    fn pod_units_replace_the_fallback_list() {
        let json = r#"[
            { "pod_key": "POD-01", "pod_name": "POD 01",
              "stations": [ { "id": "DT-FRT-01", "name": "DT FRT 01" } ] },
            { "pod_key": "POD-02", "pod_name": "POD 02", "stations": [] }
        ]"#;
        let registry = Registry::from_json(json).unwrap();
        let units = plant_units(&registry);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].group, "POD");
        // unit id comes from the pod key, not the display name
        assert_eq!(units[0].id, "pod-01");
        assert_eq!(units[0].name, "POD 01");
        assert_eq!(units[0].station_ids, vec!["DT-FRT-01".to_string()]);
        assert!(units[0].part_model.starts_with("POD-"));
    }
}
