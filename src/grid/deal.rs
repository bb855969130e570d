//! Dealing a level: building the shuffled, row-major card sequence.

use rustc_hash::FxHashMap;
use tracing::debug;

use super::layout::GridSize;
use crate::cards::{Card, PairKey};
use crate::core::rng::GameRng;
use crate::error::LayoutError;

/// Deal a full grid of `size`: keys `1..=pairs`, each twice, shuffled.
///
/// `size` must have an even cell count; every size produced by
/// [`GridSize::for_level`] does.
#[must_use]
pub fn deal(size: GridSize, rng: &mut GameRng) -> Vec<Card> {
    let pairs = size.pairs() as u32;
    let mut values: Vec<PairKey> = (1..=pairs)
        .chain(1..=pairs)
        .map(PairKey::new)
        .collect();
    rng.shuffle(&mut values);

    debug!(%size, pairs, "dealt level grid");
    place(size, values)
}

/// Build a grid from a caller-supplied row-major layout.
///
/// The layout must fill `size` exactly and hold every key exactly twice.
pub fn deal_layout(size: GridSize, values: &[PairKey]) -> Result<Vec<Card>, LayoutError> {
    if size.is_empty() {
        return Err(LayoutError::EmptyGrid(size));
    }
    if values.len() != size.cells() {
        return Err(LayoutError::WrongCellCount {
            size,
            expected: size.cells(),
            actual: values.len(),
        });
    }

    let mut counts: FxHashMap<PairKey, usize> = FxHashMap::default();
    for &value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    // Report the smallest offending key so errors are stable.
    if let Some((&key, &count)) = counts
        .iter()
        .filter(|&(_, &count)| count != 2)
        .min_by_key(|&(&key, _)| key)
    {
        return Err(LayoutError::UnpairedKey { key, count });
    }

    Ok(place(size, values.to_vec()))
}

/// Assign values to cells in row-major order.
fn place(size: GridSize, values: Vec<PairKey>) -> Vec<Card> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| Card::new(value, size.position_of(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    fn keys(raw: &[u32]) -> Vec<PairKey> {
        raw.iter().copied().map(PairKey::new).collect()
    }

    #[test]
    fn test_deal_pairs_every_key() {
        let mut rng = GameRng::new(42);
        let size = GridSize::new(3, 4);
        let cards = deal(size, &mut rng);

        assert_eq!(cards.len(), 12);

        let mut values: Vec<u32> = cards.iter().map(|c| c.value().raw()).collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn test_deal_row_major_positions() {
        let mut rng = GameRng::new(7);
        let size = GridSize::new(2, 3);
        let cards = deal(size, &mut rng);

        let positions: Vec<Position> = cards.iter().map(Card::position).collect();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
        assert!(cards.iter().all(Card::is_hidden));
    }

    #[test]
    fn test_deal_deterministic() {
        let size = GridSize::new(4, 6);
        let a = deal(size, &mut GameRng::new(99));
        let b = deal(size, &mut GameRng::new(99));

        assert_eq!(a, b);
    }

    #[test]
    fn test_deal_layout_accepts_pairs() {
        let cards = deal_layout(GridSize::new(2, 2), &keys(&[1, 2, 1, 2])).unwrap();

        assert_eq!(cards[0].value(), PairKey::new(1));
        assert_eq!(cards[2].position(), Position::new(1, 0));
        assert_eq!(cards[2].value(), PairKey::new(1));
    }

    #[test]
    fn test_deal_layout_wrong_count() {
        let err = deal_layout(GridSize::new(2, 2), &keys(&[1, 1])).unwrap_err();

        assert_eq!(
            err,
            LayoutError::WrongCellCount {
                size: GridSize::new(2, 2),
                expected: 4,
                actual: 2,
            }
        );
    }

    #[test]
    fn test_deal_layout_unpaired() {
        let err = deal_layout(GridSize::new(2, 2), &keys(&[1, 1, 1, 2])).unwrap_err();
        assert_eq!(err, LayoutError::UnpairedKey { key: PairKey::new(1), count: 3 });

        let err = deal_layout(GridSize::new(1, 3), &keys(&[4, 4, 5])).unwrap_err();
        assert_eq!(err, LayoutError::UnpairedKey { key: PairKey::new(5), count: 1 });
    }

    #[test]
    fn test_deal_layout_empty_grid() {
        let err = deal_layout(GridSize::new(0, 4), &[]).unwrap_err();
        assert_eq!(err, LayoutError::EmptyGrid(GridSize::new(0, 4)));
    }
}
