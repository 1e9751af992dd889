use std::collections::HashMap;

use proptest::prelude::*;
use u_tolling::distance::{
    calculate_distance_matrix, unroll_distance_matrix, ClosureMode, DistanceMatrixBuilder,
};
use u_tolling::models::{DistanceRow, VehicleClass, VehicleRates};
use u_tolling::proximity::find_ids_within_ten_percentage_threshold;

fn edges() -> impl Strategy<Value = Vec<DistanceRow>> {
    prop::collection::vec(
        (0u64..8, 0u64..8, 0.0f64..100.0).prop_map(|(a, b, d)| DistanceRow::new(a, b, d)),
        0..20,
    )
}

proptest! {
    #[test]
    fn prop_symmetric_with_zero_diagonal(edges in edges()) {
        for mode in [ClosureMode::SinglePass, ClosureMode::ShortestPath] {
            let dm = DistanceMatrixBuilder::new().with_closure(mode).build(&edges).unwrap();
            prop_assert!(dm.is_symmetric(1e-9));
            for i in 0..dm.size() {
                prop_assert_eq!(dm.known(i, i), Some(0.0));
            }
        }
    }

    #[test]
    fn prop_unroll_row_count(edges in edges()) {
        let dm = calculate_distance_matrix(&edges).unwrap();
        let n = dm.size();
        let rows = unroll_distance_matrix(&dm);
        prop_assert_eq!(rows.len(), n * n.saturating_sub(1));
        prop_assert!(rows.iter().all(|r| r.id_start != r.id_end));
    }

    #[test]
    fn prop_seeded_edges_preserved(edges in edges()) {
        let mut last = HashMap::new();
        for e in edges.iter().filter(|e| e.id_start != e.id_end) {
            last.insert((e.id_start.min(e.id_end), e.id_start.max(e.id_end)), e.distance);
        }
        let dm = calculate_distance_matrix(&edges).unwrap();
        let rows = unroll_distance_matrix(&dm);
        for (&(a, b), &d) in &last {
            prop_assert_eq!(dm.distance(a, b), Some(d));
            prop_assert_eq!(dm.distance(b, a), Some(d));
            prop_assert!(rows.contains(&DistanceRow::new(a, b, d)));
            prop_assert!(rows.contains(&DistanceRow::new(b, a, d)));
        }
    }

    #[test]
    fn prop_shortest_path_never_longer(edges in edges()) {
        let single = calculate_distance_matrix(&edges).unwrap();
        let shortest = DistanceMatrixBuilder::new()
            .with_closure(ClosureMode::ShortestPath)
            .build(&edges)
            .unwrap();
        prop_assert_eq!(single.ids(), shortest.ids());
        for i in 0..single.size() {
            for j in 0..single.size() {
                match (single.known(i, j), shortest.known(i, j)) {
                    (Some(s), Some(p)) => prop_assert!(p <= s + 1e-9),
                    (None, None) => {}
                    other => prop_assert!(false, "reachability differs: {:?}", other),
                }
            }
        }
    }

    #[test]
    fn prop_toll_linear(d in 0.0f64..1.0e6) {
        let rates = VehicleRates::from_distance(d);
        prop_assert!((rates.car - 1.2 * d).abs() <= 1e-9 * d.max(1.0));
        for class in VehicleClass::ALL {
            prop_assert!((rates.get(class) - class.coefficient() * d).abs() <= 1e-9 * d.max(1.0));
        }
    }

    #[test]
    fn prop_proximity_sorted_distinct(edges in edges(), reference in 0u64..8) {
        let rows = unroll_distance_matrix(&calculate_distance_matrix(&edges).unwrap());
        match find_ids_within_ten_percentage_threshold(&rows, reference) {
            Ok(ids) => prop_assert!(ids.windows(2).all(|w| w[0] < w[1])),
            Err(_) => prop_assert!(rows.iter().all(|r| r.id_start != reference)),
        }
    }
}
