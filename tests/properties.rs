//! Property-based tests for the circuit solver.
//!
//! Random networks are built so that they always have a unique solution: a
//! spanning chain of resistive edges plus chords, where zero-resistance
//! chords never close a loop among themselves. Each network draws its own
//! resistance unit between 1 nOhm and 1 GOhm. The tests check that the
//! solved currents and potentials obey both of Kirchhoff's laws and come
//! back in edge order.

use kirchhoff::{Circuit, EdgeId, NodeId, Solution};
use proptest::prelude::*;

type RawEdge = (usize, usize, f64, f64);

fn root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// A connected network on `nodes` nodes: a spanning chain plus extra chords.
fn connected_network(max_nodes: usize) -> impl Strategy<Value = Vec<RawEdge>> {
    (2..=max_nodes, -9.0f64..9.0).prop_flat_map(|(nodes, exponent)| {
        let unit = 10f64.powf(exponent);
        let chain = prop::collection::vec((1.0f64..1000.0, -20.0f64..20.0), nodes - 1);
        let chords = prop::collection::vec(
            (0..nodes, 1..nodes, 1.0f64..1000.0, -20.0f64..20.0, prop::bool::weighted(0.3)),
            0..nodes * 2,
        );
        (chain, chords).prop_map(move |(chain, chords)| {
            let mut edges: Vec<RawEdge> = chain
                .into_iter()
                .enumerate()
                .map(|(i, (r, emf))| (i + 1, i + 2, r * unit, emf))
                .collect();

            // Zero-resistance chords form a forest
            let mut parent: Vec<usize> = (0..nodes).collect();
            for (a, offset, r, emf, ideal) in chords {
                let b = (a + offset) % nodes;
                let resistance = if ideal && root(&mut parent, a) != root(&mut parent, b) {
                    let ra = root(&mut parent, a);
                    let rb = root(&mut parent, b);
                    parent[ra] = rb;
                    0.0
                } else {
                    r * unit
                };
                edges.push((a + 1, b + 1, resistance, emf));
            }
            edges
        })
    })
}

/// Two independent networks with disjoint node numbers, edges interleaved.
fn split_network() -> impl Strategy<Value = Vec<RawEdge>> {
    (connected_network(5), connected_network(5)).prop_map(|(left, right)| {
        let shift = left.iter().map(|e| e.0.max(e.1)).max().unwrap_or(0);
        let mut right = right
            .into_iter()
            .map(|(a, b, r, emf)| (a + shift, b + shift, r, emf));
        let mut left = left.into_iter();
        let mut edges = Vec::new();
        loop {
            match (left.next(), right.next()) {
                (None, None) => break,
                (l, r) => edges.extend(l.into_iter().chain(r)),
            }
        }
        edges
    })
}

fn scale(values: &[f64]) -> f64 {
    1.0 + values.iter().map(|v| v.abs()).fold(0.0, f64::max)
}

/// Magnitude of the currents a network can carry, with no absolute floor.
///
/// A loop-free network carries no current at all, so the largest EMF over
/// the smallest resistance stands in for the solved currents.
fn current_scale(circuit: &Circuit, currents: &[f64]) -> f64 {
    let edges = circuit.edges();
    let max_emf = edges.iter().map(|e| e.emf.abs()).fold(0.0, f64::max);
    let min_resistance = edges
        .iter()
        .map(|e| e.resistance)
        .filter(|&r| r > 0.0)
        .fold(f64::INFINITY, f64::min);
    let max_current = currents.iter().map(|i| i.abs()).fold(0.0, f64::max);
    max_current.max(max_emf / min_resistance)
}

fn check_current_law(circuit: &Circuit, solution: &Solution) -> Result<(), TestCaseError> {
    let max_node = circuit
        .edges()
        .iter()
        .map(|e| e.node1.0.max(e.node2.0))
        .max()
        .unwrap_or(0);
    let tolerance = 1e-9 * current_scale(circuit, &solution.currents());

    for node in (0..=max_node).map(NodeId) {
        let net: f64 = solution
            .iter()
            .map(|b| b.edge.connection(node).value::<f64>() * b.current)
            .sum();
        prop_assert!(
            net.abs() <= tolerance,
            "net current {} at node {}",
            net,
            node
        );
    }
    Ok(())
}

fn check_voltage_law(solution: &Solution) -> Result<(), TestCaseError> {
    for branch in solution {
        let edge = branch.edge;
        let phi1 = solution.potential(edge.node1).unwrap();
        let phi2 = solution.potential(edge.node2).unwrap();
        let lhs = branch.resistor_voltage();
        let rhs = edge.emf + phi1 - phi2;
        let tolerance = 1e-8 * scale(&[lhs, edge.emf, phi1, phi2]);
        prop_assert!(
            (lhs - rhs).abs() <= tolerance,
            "edge {} ({}): R*I = {} but emf + drop = {}",
            edge.id,
            edge,
            lhs,
            rhs
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Net current into every node is zero.
    #[test]
    fn current_law_holds(raw in connected_network(8)) {
        let circuit = Circuit::from_numbered(raw).unwrap();
        let solution = circuit.solve().unwrap();
        check_current_law(&circuit, &solution)?;
    }

    /// Around every edge, the resistor drop equals EMF plus the potential
    /// difference between its ends.
    #[test]
    fn voltage_law_holds(raw in connected_network(8)) {
        let circuit = Circuit::from_numbered(raw).unwrap();
        let solution = circuit.solve().unwrap();
        check_voltage_law(&solution)?;
    }

    /// The reference node of a connected network sits at 0 V.
    #[test]
    fn reference_node_is_grounded(raw in connected_network(8)) {
        let circuit = Circuit::from_numbered(raw).unwrap();
        let solution = circuit.solve().unwrap();
        let potentials: Vec<f64> = solution.potentials().values().copied().collect();
        let reference = solution.potential(NodeId(0)).unwrap();
        prop_assert!(reference.abs() <= 1e-9 * scale(&potentials), "reference at {} V", reference);
    }

    /// Output has one entry per input edge, ordered by stable index, and
    /// each entry carries the edge it was given.
    #[test]
    fn output_preserves_edge_order(raw in split_network()) {
        let circuit = Circuit::from_numbered(raw.clone()).unwrap();
        prop_assert_eq!(circuit.number_of_components(), 2);

        let solution = circuit.solve().unwrap();
        prop_assert_eq!(solution.len(), raw.len());
        for (i, (branch, (n1, n2, r, emf))) in solution.iter().zip(&raw).enumerate() {
            prop_assert_eq!(branch.edge.id, EdgeId(i));
            prop_assert_eq!(branch.edge.node1.external(), *n1);
            prop_assert_eq!(branch.edge.node2.external(), *n2);
            prop_assert_eq!(branch.edge.resistance, *r);
            prop_assert_eq!(branch.edge.emf, *emf);
        }
        check_current_law(&circuit, &solution)?;
        check_voltage_law(&solution)?;
    }

    /// Solving twice gives identical results.
    #[test]
    fn solve_is_idempotent(raw in split_network()) {
        let circuit = Circuit::from_numbered(raw).unwrap();
        prop_assert_eq!(circuit.solve().unwrap(), circuit.solve().unwrap());
    }

    /// Reversing an edge and its EMF negates its current and nothing else.
    #[test]
    fn reversed_edge_negates_current(raw in connected_network(6), pick in any::<prop::sample::Index>()) {
        let i = pick.index(raw.len());
        let mut flipped = raw.clone();
        let (a, b, r, emf) = flipped[i];
        flipped[i] = (b, a, r, -emf);

        let circuit = Circuit::from_numbered(raw).unwrap();
        let original = circuit.solve().unwrap().currents();
        let reversed = Circuit::from_numbered(flipped).unwrap().solve().unwrap().currents();
        let tolerance = 1e-8 * current_scale(&circuit, &original);
        for (j, (x, y)) in original.iter().zip(&reversed).enumerate() {
            let want = if j == i { -x } else { *x };
            prop_assert!((want - y).abs() <= tolerance, "edge {}: {} vs {}", j, want, y);
        }
    }
}
