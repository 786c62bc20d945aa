use std::path::{Component, Path};

/// Number of directories a file must pass through to get from `a`'s location
/// to `b`'s, where differing file names cost one extra step.
///
/// Both paths are expected to be absolute. Identical paths are 0 apart. When
/// one path is an ancestor of the other the distance is the number of extra
/// segments.
pub fn path_distance(a: &Path, b: &Path) -> usize {
    let a_parts: Vec<Component<'_>> = a.components().collect();
    let b_parts: Vec<Component<'_>> = b.components().collect();

    let shared = a_parts
        .iter()
        .zip(&b_parts)
        .take_while(|(x, y)| x == y)
        .count();

    let a_rest = a_parts.len() - shared;
    let b_rest = b_parts.len() - shared;

    if a_rest == 0 || b_rest == 0 {
        // identical, or one contains the other
        return a_rest + b_rest;
    }

    // the trailing file name segment is only one move, not two
    a_rest + b_rest - 1
}
