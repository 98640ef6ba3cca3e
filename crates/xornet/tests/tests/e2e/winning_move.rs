//! End-to-end test: a hand-built network that always selects one cell
//! commits exactly when that cell is the only empty one.

use rand::rngs::StdRng;
use rand::SeedableRng;
use xornet_fitness::{Environment, FitnessVariant, Scorer, CLAIMED, EMPTY, OCCUPIED};
use xornet_network::{Edge, InferredLayer, InputRegister, Layer, Network, Node};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Output is `1` at `cell` and `0` elsewhere, whatever the input.
fn selector(register: &InputRegister, cell: usize) -> Network {
    let width = register.width();
    let nodes = (0..width)
        .map(|i| {
            let xor = u8::from(i == cell);
            Node::new(vec![Edge::new(i, 0x00, xor)])
        })
        .collect();
    let layer = InferredLayer::from_nodes(Layer::Static(register.clone()), nodes).unwrap();
    Network::from_layer(layer)
}

fn board_with_only_empty(cell: usize) -> Environment {
    let mut cells = vec![OCCUPIED; 9];
    cells[cell] = EMPTY;
    Environment::from_cells(cells)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn selector_commits_on_its_empty_cell() {
    let register = InputRegister::new(9);
    let net = selector(&register, 4);
    let mut env = board_with_only_empty(4);
    register.load(env.cells());

    let scorer = Scorer::new(FitnessVariant::Discrete);
    let board = register.snapshot();
    let outcome = scorer
        .step(&board, &net.values(), env.cells_mut(), &mut StdRng::seed_from_u64(1))
        .unwrap();

    assert_eq!(outcome.committed, Some(4));
    assert_eq!(env.cells()[4], CLAIMED);
    assert!(outcome.score >= scorer.weights.commit_bonus);
}

#[test]
fn selector_does_not_commit_on_occupied_cell() {
    let register = InputRegister::new(9);
    let net = selector(&register, 0);
    let mut env = board_with_only_empty(8);
    register.load(env.cells());

    let scorer = Scorer::new(FitnessVariant::Continuous);
    let before = env.clone();
    let outcome = scorer
        .step(&register.snapshot(), &net.values(), env.cells_mut(), &mut StdRng::seed_from_u64(2))
        .unwrap();

    assert_eq!(outcome.committed, None);
    assert_eq!(env, before);
}

#[test]
fn worked_example_identity_masks() {
    let register = InputRegister::from_bytes(vec![2, 0, 0, 0, 0, 0, 0, 0, 0]);
    let net = Network::uniform(&register, &[9], 0xFF, 0x00).unwrap();
    assert_eq!(net.values(), vec![2; 9]);
}
