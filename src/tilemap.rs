use serde::{Serialize, Serializer};

/// A fixed-size 2D tile grid stored row-major. Unlike a world map it does not
/// wrap at the edges: the grid is fully materialized and addressed directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(width: usize, height: usize) -> Self {
        Self::new_with(width, height, T::default())
    }
}

impl<T: Clone> Tilemap<T> {
    /// Create a grid filled with `value`. A zero dimension collapses the grid
    /// to 0x0 so that empty maps have no rows at all.
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            (0, 0)
        } else {
            (width, height)
        };
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let width = self.width;
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }
}

/// Grids serialize as an array of rows (`grid[y][x]`), the shape a tile
/// renderer consumes.
impl<T: Serialize> Serialize for Tilemap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data.chunks(self.width.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut map: Tilemap<u16> = Tilemap::new(4, 3);
        map.set(3, 2, 7);
        assert_eq!(*map.get(3, 2), 7);
        assert_eq!(*map.get(0, 0), 0);
    }

    #[test]
    fn test_iter_is_row_major() {
        let map = Tilemap::new_with(3, 2, 1u8);
        let coords: Vec<(usize, usize)> = map.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        let map: Tilemap<u16> = Tilemap::new(0, 15);
        assert!(map.is_empty());
        assert_eq!(map.height, 0);
        assert_eq!(map.iter().count(), 0);
    }

    #[test]
    fn test_serializes_as_rows() {
        let mut map: Tilemap<u16> = Tilemap::new(2, 2);
        map.set(1, 0, 40);
        map.set(0, 1, 70);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, "[[0,40],[70,0]]");
    }
}
