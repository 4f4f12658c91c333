//! Tactical view integration tests

use glam::Vec2;

use tactical_overlay::core::error::TacticalError;
use tactical_overlay::core::types::GridPosition;
use tactical_overlay::tactical::*;

fn abrams_ranges() -> RangeProfile {
    RangeProfile::new(4.0, 3.0, 4, 3)
}

#[test]
fn test_full_scene_setup() {
    let catalog = UnitCatalog::with_defaults();
    let grid = TerrainGrid::filled(10, 10, 0);
    let cell = grid.cell_size(500.0, 500.0).unwrap();
    assert_eq!(cell, CellSize::new(50.0, 50.0).unwrap());

    // Red armour with attrition applied from outside
    let mut abrams = UnitStack::new(catalog.lookup("Abrams").unwrap(), 10, abrams_ranges());
    assert_eq!(abrams.initial_ammunition(), 5000);
    abrams.set_strength(6, 2600).unwrap();

    let red = ForceGroup::new(
        "Alpha",
        ForceType::Red,
        GridPosition::new(3, 4),
        vec![abrams],
        &grid,
    )
    .unwrap();

    let blue = ForceGroup::new(
        "Bravo",
        ForceType::Blue,
        GridPosition::new(7, 5),
        vec![
            UnitStack::new(catalog.lookup("Soldier").unwrap(), 20, RangeProfile::default()),
            UnitStack::new(catalog.lookup("BWP").unwrap(), 4, RangeProfile::new(3.5, 2.0, 3, 2)),
        ],
        &grid,
    )
    .unwrap();

    let views = compute_scene(&[red, blue], &grid, 500.0, 500.0).unwrap();
    assert_eq!(views.len(), 2);

    let red_view = &views[0];
    assert_eq!(red_view.summaries.len(), 1);
    assert_eq!(red_view.summaries[0].to_string(), "Abrams [6/10] Ammo: [2600/5000]");
    assert_eq!(red_view.stacks[0].visibility_radius, 200.0);
    assert_eq!(red_view.stacks[0].shooting_radius, 150.0);
    assert_eq!(red_view.overlay.shot_radius, 60.0);
    assert_eq!(red_view.overlay.view_radius, 80.0);

    let blue_view = &views[1];
    let names: Vec<&str> = blue_view.summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["BWP", "Soldier"]);
    assert_eq!(blue_view.summaries[0].total_initial_ammo, 1200);
    assert_eq!(blue_view.summaries[1].total_initial_ammo, 2000);
    assert_eq!(blue_view.overlay.max_shot_range, 2);
    assert_eq!(blue_view.overlay.max_view_range, 3);
}

#[test]
fn test_group_placement_bounds() {
    let grid = TerrainGrid::filled(10, 10, 0);
    let place = |x, y| ForceGroup::new("G", ForceType::Red, GridPosition::new(x, y), vec![], &grid);

    assert!(place(3, 4).is_ok());
    assert!(matches!(place(10, 4), Err(TacticalError::InvalidPosition { .. })));
    assert!(matches!(place(-1, 4), Err(TacticalError::InvalidPosition { .. })));
}

#[test]
fn test_annihilated_group_still_has_view() {
    let catalog = UnitCatalog::with_defaults();
    let grid = TerrainGrid::filled(10, 10, 0);
    let mut group = ForceGroup::new(
        "Remnant",
        ForceType::Blue,
        GridPosition::new(0, 0),
        vec![UnitStack::new(catalog.lookup("Krab").unwrap(), 2, RangeProfile::default())],
        &grid,
    )
    .unwrap();

    for stack in group.stacks_mut() {
        stack.apply_losses(2, 80);
    }
    assert!(group.is_annihilated());

    let view = compute_view(&group, CellSize::new(50.0, 50.0).unwrap()).unwrap();
    assert_eq!(view.summaries[0].active_units, 0);
    assert_eq!(view.summaries[0].total_current_ammo, 0);
    assert_eq!(view.summaries[0].initial_units, 2);
}

#[test]
fn test_view_serializes_for_renderer() {
    let scenario = Scenario::default_scenario().unwrap();
    let (grid, groups) = scenario
        .build(&UnitCatalog::with_defaults(), &TacticalConfig::default())
        .unwrap();
    let views = compute_scene(&groups, &grid, 800.0, 800.0).unwrap();

    let json = serde_json::to_value(&views).unwrap();
    assert_eq!(json[0]["force_type"], "RED");
    assert_eq!(json[0]["summaries"][0]["name"], "Abrams");
    assert_eq!(json[0]["summaries"][0]["active_units"], 6);
    assert_eq!(json[1]["force_type"], "BLUE");
}

#[test]
fn test_scenario_with_extended_catalog() {
    let mut catalog = UnitCatalog::with_defaults();
    catalog
        .extend_from_toml(include_str!("../data/extra_units.toml"))
        .unwrap();
    let config = TacticalConfig::parse_toml(include_str!("../data/tactical.toml")).unwrap();

    let scenario = Scenario::parse_toml(
        r#"
        [grid]
        rows = 4
        cols = 6

        [[groups]]
        name = "Panzer"
        force = "BLUE"
        x = 3
        y = 5
        stacks = [{ kind = "Leopard", count = 3 }, { kind = "Krab", count = 1 }]
        "#,
    )
    .unwrap();

    let (grid, groups) = scenario.build(&catalog, &config).unwrap();
    let view = compute_view_with(&groups[0], grid.cell_size(400.0, 600.0).unwrap(), &config).unwrap();

    assert_eq!(view.summaries[0].name, "Krab");
    assert_eq!(view.summaries[1].name, "Leopard");
    assert_eq!(view.summaries[1].total_initial_ammo, 1260);
    // Krab's shot range from data/tactical.toml dominates the overlay
    assert_eq!(view.overlay.max_shot_range, 8);
}

#[test]
fn test_scene_uses_given_marker_scale() {
    let config = TacticalConfig::parse_toml("marker_scale = 0.5").unwrap();
    let scenario = Scenario::default_scenario().unwrap();
    let (grid, groups) = scenario.build(&UnitCatalog::with_defaults(), &config).unwrap();

    // 10x10 grid on 500x500 gives 50px cells; half of that, not the 0.8 default
    let views = compute_scene_with(&groups, &grid, 500.0, 500.0, &config).unwrap();
    assert_eq!(views.len(), 2);
    for view in &views {
        assert_eq!(view.marker.width, 25.0);
        assert_eq!(view.marker.height, 25.0);
    }
    assert_eq!(views[0].marker.center(), Vec2::new(162.5, 212.5));
}

#[test]
fn test_installed_catalog_builds_scenario() {
    // Only test in this binary that touches the process-wide catalog
    let mut extended = UnitCatalog::with_defaults();
    extended
        .extend_from_toml(include_str!("../data/extra_units.toml"))
        .unwrap();
    assert!(set_catalog(extended).is_ok());

    let scenario = Scenario::parse_toml(
        r#"
        [grid]
        rows = 5
        cols = 5

        [[groups]]
        name = "Panzer"
        force = "BLUE"
        x = 1
        y = 1
        stacks = [{ kind = "Leopard", count = 2 }]
        "#,
    )
    .unwrap();

    let (_, groups) = scenario.build(catalog(), &TacticalConfig::default()).unwrap();
    assert_eq!(groups[0].stacks()[0].name(), "Leopard");
    assert_eq!(groups[0].stacks()[0].initial_ammunition(), 840);
}

#[test]
fn test_invalid_canvas_rejected() {
    let grid = TerrainGrid::filled(10, 10, 0);
    let result = compute_scene(&[], &grid, -100.0, 500.0);
    assert!(matches!(result, Err(TacticalError::InvalidScale { .. })));
}
