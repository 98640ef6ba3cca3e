#[path = "e2e/evolution_run.rs"]
mod evolution_run;

#[path = "e2e/winning_move.rs"]
mod winning_move;

#[path = "e2e/copy_independence.rs"]
mod copy_independence;

#[path = "e2e/stop_and_observe.rs"]
mod stop_and_observe;
