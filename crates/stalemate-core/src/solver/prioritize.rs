use crate::PieceKind;

/// Search rank: lower goes first
fn priority(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::King => 0,
        PieceKind::Queen => 1,
        PieceKind::Rook => 2,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 4,
    }
}

/// Reorder pieces so the king leads, followed by queens, rooks, knights and
/// bishops. A queen's candidate squares include a rook's, so queens go
/// before rooks.
pub fn prioritize(pieces: &mut [PieceKind]) {
    pieces.sort_by_key(|&kind| priority(kind));
}
