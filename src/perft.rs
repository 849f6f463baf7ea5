use crate::board::Position;

// Variant move-tree count using push/pop (no cloning at the call site)
pub fn perft(position: &mut Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for mv in position.legal_moves() {
        if position.push(mv).is_err() { continue; }
        nodes += perft(position, depth - 1);
        position.pop();
    }
    nodes
}
