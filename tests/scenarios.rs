//! End-to-end scenarios: edge list text in, report text out.

use approx::assert_relative_eq;
use kirchhoff::circuit::ConnectedCircuit;
use kirchhoff::{dsl, report, Circuit, CircuitError, EdgeId, NodeId, SolverConfig};

const BRIDGE: &str = "\
# four-node bridge driven by a 12 V source
1 -- 2, 4;
1 -- 3, 10;
1 -- 4, 2; -12V
2 -- 3, 60;
2 -- 4, 22;
3 -- 4, 5;
";

fn solve_text(input: &str, precision: Option<usize>) -> kirchhoff::Result<String> {
    let circuit: Circuit = input.parse()?;
    let solution = circuit.solve()?;
    Ok(report::format_solution(&solution, precision))
}

#[test]
fn bridge_report() {
    let out = solve_text(BRIDGE, Some(4)).unwrap();
    assert_eq!(
        out,
        "1 -- 2: 0.4430 A\n\
         1 -- 3: 0.6315 A\n\
         1 -- 4: -1.0745 A\n\
         2 -- 3: 0.0757 A\n\
         2 -- 4: 0.3672 A\n\
         3 -- 4: 0.7072 A\n"
    );
}

#[test]
fn bridge_potentials_relative_to_first_node() {
    let solution = BRIDGE.parse::<Circuit>().unwrap().solve().unwrap();
    assert_relative_eq!(solution.potential(NodeId(0)).unwrap(), 0.0, epsilon = 1e-12);
    assert_relative_eq!(solution.potential(NodeId(1)).unwrap(), -1.7718324078748104, epsilon = 1e-9);
    assert_relative_eq!(solution.potential(NodeId(3)).unwrap(), -9.851085310449267, epsilon = 1e-9);
}

#[test]
fn two_triangles_solve_independently() {
    let input = "1 -- 2, 1\n1 -- 3, 1\n2 -- 3, 1; 3V\n4 -- 5, 1\n4 -- 6, 1\n5 -- 6, 1; 3V\n";
    let circuit: Circuit = input.parse().unwrap();
    assert_eq!(circuit.number_of_components(), 2);

    let currents = circuit.solve().unwrap().currents();
    for (got, want) in currents.iter().zip([1.0, -1.0, 1.0, 1.0, -1.0, 1.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn single_resistor_without_source_carries_nothing() {
    assert_eq!(solve_text("1 -- 2, 2;\n", None).unwrap(), "1 -- 2: 0 A\n");
}

#[test]
fn loop_with_si_suffixes_and_units() {
    let solution = "1 -> 2: 4.7k Ohm\n2 -> 1: 300 Ohm; 5 V\n"
        .parse::<Circuit>()
        .unwrap()
        .solve()
        .unwrap();
    assert_relative_eq!(solution.current(EdgeId(0)).unwrap(), 1e-3, max_relative = 1e-9);
    assert_relative_eq!(solution.current(EdgeId(1)).unwrap(), 1e-3, max_relative = 1e-9);
}

#[test]
fn gigaohm_and_nanoohm_loops_solve() {
    let giga = "1 -- 2, 1G; 1V\n2 -- 1, 1G\n".parse::<Circuit>().unwrap().solve().unwrap();
    assert_relative_eq!(giga.current(EdgeId(0)).unwrap(), 5e-10, max_relative = 1e-9);

    let nano = "1 -- 2, 1n; 1V\n2 -- 3, 1n\n3 -- 1, 1n\n"
        .parse::<Circuit>()
        .unwrap()
        .solve()
        .unwrap();
    for current in nano.currents() {
        assert_relative_eq!(current, 1.0 / 3e-9, max_relative = 1e-9);
    }
}

#[test]
fn glued_dash_between_nodes() {
    let solution = "1-2, 4; 8V\n2->1, 4\n".parse::<Circuit>().unwrap().solve().unwrap();
    assert_eq!(solution[EdgeId(0)].edge.node2, NodeId(1));
    assert_relative_eq!(solution.current(EdgeId(0)).unwrap(), 1.0, epsilon = 1e-9);
}

#[test]
fn zero_resistance_edges_in_a_loop() {
    let currents = "1 2 1 1\n1 3 0\n2 3 0\n"
        .parse::<Circuit>()
        .unwrap()
        .solve()
        .unwrap()
        .currents();
    for (got, want) in currents.iter().zip([1.0, -1.0, 1.0]) {
        assert_relative_eq!(*got, want, epsilon = 1e-9);
    }
}

#[test]
fn parallel_ideal_sources_are_singular() {
    let err = solve_text("1 -- 2, 0; 1V\n1 -- 2, 0; 2V\n", None).unwrap_err();
    assert!(err.is_singular());
    assert!(matches!(err, CircuitError::SingularComponent { component: 0, edges: 2 }));
}

#[test]
fn singular_component_blocks_healthy_one() {
    let input = "1 -- 2, 2; 4V\n2 -- 1, 2\n3 -- 4, 0; 1V\n3 -- 4, 0; 2V\n";
    let err = solve_text(input, None).unwrap_err();
    assert!(matches!(err, CircuitError::SingularComponent { component: 1, .. }));
}

#[test]
fn invalid_input_reports_line() {
    let err = solve_text("1 -- 2, 4;\n3 -- 3, 1;\n", None).unwrap_err();
    assert!(matches!(err, CircuitError::InvalidEdge { line: 2, .. }));

    let err = solve_text("1 -- 2, 4;\n1 -- 2\n", None).unwrap_err();
    assert!(matches!(err, CircuitError::ParseError { line: 2, .. }));
}

#[test]
fn empty_input_gives_empty_report() {
    assert_eq!(solve_text("# nothing here\n\n", None).unwrap(), "");
}

#[test]
fn tighter_tolerance_still_solves_bridge() {
    let circuit: Circuit = BRIDGE.parse().unwrap();
    let config = SolverConfig::new().with_epsilon(1e-14);
    assert_eq!(circuit.solve_with(&config).unwrap().len(), 6);
}

#[test]
fn component_solver_matches_composite() {
    let edges = dsl::parse(BRIDGE).unwrap();
    let component = ConnectedCircuit::new(edges).unwrap();
    let direct = component.solve(SolverConfig::default().tolerance()).unwrap();
    let composite = BRIDGE.parse::<Circuit>().unwrap().solve().unwrap();
    for (a, b) in direct.branches.iter().zip(&composite) {
        assert_eq!(a.edge, b.edge);
        assert_relative_eq!(a.current, b.current, epsilon = 1e-12);
    }
}
