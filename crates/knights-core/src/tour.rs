use crate::{PathError, Position};
use std::collections::HashSet;

/// Check that `path` is a legal knight's path on a `size`×`size` board:
/// every square on the board, no square twice, each step a knight move.
pub fn validate_path(size: usize, path: &[Position]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    let mut seen = HashSet::with_capacity(path.len());
    for (i, &position) in path.iter().enumerate() {
        if !position.in_bounds(size) {
            return Err(PathError::OutOfBounds { position, size });
        }
        if !seen.insert(position) {
            return Err(PathError::Revisited(position));
        }
        if i > 0 {
            let from = path[i - 1];
            if !from.is_knight_move_to(position) {
                return Err(PathError::NotAKnightMove { from, to: position });
            }
        }
    }
    Ok(())
}

/// Like [`validate_path`], but also require every square to be covered.
pub fn validate_tour(size: usize, path: &[Position]) -> Result<(), PathError> {
    validate_path(size, path)?;
    let expected = size * size;
    if path.len() != expected {
        return Err(PathError::Incomplete {
            len: path.len(),
            expected,
        });
    }
    Ok(())
}
