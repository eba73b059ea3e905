/// Index of the greatest score. Ties resolve to the lowest index; comparisons
/// are strict, so a NaN entry never displaces an already-chosen maximum.
pub(crate) fn max_index(scores: &[f32]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) if score > scores[b] => best = Some(i),
            _ => {}
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_maximum() {
        assert_eq!(max_index(&[]), None);
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        assert_eq!(max_index(&[0.5, 0.5]), Some(0));
        assert_eq!(max_index(&[0.1, 0.4, 0.4, 0.1]), Some(1));
    }

    #[test]
    fn finds_the_maximum() {
        assert_eq!(max_index(&[0.05, 0.02, 0.01, 0.85, 0.05, 0.02]), Some(3));
    }
}
