//! Property tests for stack invariants and aggregation

use proptest::prelude::*;

use tactical_overlay::core::types::GridPosition;
use tactical_overlay::tactical::*;

const KINDS: [&str; 4] = ["Abrams", "BWP", "Soldier", "Krab"];

/// (kind index, count, units lost, ammo spent)
fn stack_spec() -> impl Strategy<Value = (usize, u32, u32, u64)> {
    (0..KINDS.len(), 0u32..50, 0u32..60, 0u64..30_000)
}

fn build_stacks(specs: &[(usize, u32, u32, u64)]) -> Vec<UnitStack> {
    let catalog = UnitCatalog::with_defaults();
    specs
        .iter()
        .map(|&(kind, count, lost, spent)| {
            let template = catalog.lookup(KINDS[kind]).unwrap();
            let mut stack = UnitStack::new(template, count, RangeProfile::default());
            stack.apply_losses(lost, spent);
            stack
        })
        .collect()
}

proptest! {
    #[test]
    fn stack_counters_never_exceed_initial(specs in prop::collection::vec(stack_spec(), 0..12)) {
        for stack in build_stacks(&specs) {
            prop_assert!(stack.active_unit_count() <= stack.initial_unit_count());
            prop_assert!(stack.current_ammunition() <= stack.initial_ammunition());
        }
    }

    #[test]
    fn summaries_respect_invariants(specs in prop::collection::vec(stack_spec(), 0..12)) {
        for summary in summarize_types(&build_stacks(&specs)) {
            prop_assert!(summary.active_units <= summary.initial_units);
            prop_assert!(summary.total_current_ammo <= summary.total_initial_ammo);
        }
    }

    #[test]
    fn aggregation_is_order_independent(
        (specs, shuffled) in prop::collection::vec(stack_spec(), 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        prop_assert_eq!(
            summarize_types(&build_stacks(&specs)),
            summarize_types(&build_stacks(&shuffled))
        );
    }

    #[test]
    fn one_summary_per_kind(specs in prop::collection::vec(stack_spec(), 0..12)) {
        let stacks = build_stacks(&specs);
        let summaries = summarize_types(&stacks);

        let mut kinds: Vec<&str> = stacks.iter().map(|s| s.name()).collect();
        kinds.sort_unstable();
        kinds.dedup();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        prop_assert_eq!(names, kinds);

        for summary in &summaries {
            let initial: u64 = stacks
                .iter()
                .filter(|s| s.name() == summary.name)
                .map(|s| s.initial_unit_count() as u64)
                .sum();
            prop_assert_eq!(summary.initial_units, initial);
        }
    }

    #[test]
    fn positions_inside_grid_accepted(
        rows in 1usize..30,
        cols in 1usize..30,
        x in -5i32..35,
        y in -5i32..35,
    ) {
        let grid = TerrainGrid::filled(rows, cols, 0);
        let inside = x >= 0 && y >= 0 && (x as usize) < rows && (y as usize) < cols;
        let result = ForceGroup::new("G", ForceType::Red, GridPosition::new(x, y), vec![], &grid);
        prop_assert_eq!(result.is_ok(), inside);
    }
}
