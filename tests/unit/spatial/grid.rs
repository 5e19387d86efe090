//! Tests for tile grid layout, clipping and scan order

#[cfg(test)]
mod tests {
    use quiltcut::spatial::TileGrid;

    // Tests the grid has ceil(dim / step) cells per axis
    // Verified by using floor division for the tile count
    #[test]
    fn test_grid_dimensions() {
        let grid = TileGrid::new(10, 10, 4, 2);
        assert_eq!(grid.step(), 2);
        assert_eq!((grid.rows(), grid.cols()), (5, 5));
        assert_eq!(grid.len(), 25);

        let uneven = TileGrid::new(23, 11, 8, 3);
        assert_eq!(uneven.step(), 5);
        assert_eq!((uneven.rows(), uneven.cols()), (3, 5));
        assert_eq!(uneven.canvas_size(), (23, 11));
    }

    // Tests consecutive tiles share exactly `overlap` pixels
    // Verified by spacing tiles by the full tile size
    #[test]
    fn test_neighbors_share_overlap() {
        let grid = TileGrid::new(40, 40, 10, 4);
        let first = grid.placement(0, 0);
        let second = grid.placement(0, 1);

        match (first, second) {
            (Some(a), Some(b)) => {
                assert_eq!(a.x + a.width - b.x, 4);
                assert_eq!(b.left_overlap, 4);
                assert_eq!(b.top_overlap, 0);
            }
            _ => unreachable!("both tiles exist"),
        }
    }

    // Tests the first row and column have no overlap on the missing side
    // Verified by giving every tile a left overlap
    #[test]
    fn test_edge_tiles_have_no_missing_neighbor() {
        let grid = TileGrid::new(20, 20, 6, 2);
        for placement in grid.iter() {
            assert_eq!(placement.left_overlap == 0, placement.col == 0);
            assert_eq!(placement.top_overlap == 0, placement.row == 0);
        }
        assert!(grid.placement(0, 0).is_some_and(|p| !p.has_overlap()));
        assert!(grid.placement(1, 1).is_some_and(|p| p.has_corner()));
    }

    // Tests the last row and column are clipped to the canvas
    // Verified by letting footprints extend past the canvas edge
    #[test]
    fn test_last_tiles_are_clipped() {
        let grid = TileGrid::new(11, 9, 4, 2);
        let last = grid.placement(grid.rows() - 1, grid.cols() - 1);

        match last {
            Some(p) => {
                assert_eq!(p.x, 10);
                assert_eq!(p.y, 8);
                assert_eq!((p.width, p.height), (1, 1));
                assert_eq!((p.left_overlap, p.top_overlap), (1, 1));
            }
            None => unreachable!("last tile exists"),
        }

        for p in grid.iter() {
            assert!(p.x + p.width <= 11);
            assert!(p.y + p.height <= 9);
            assert!(p.left_overlap <= p.width && p.top_overlap <= p.height);
        }
    }

    // Tests iteration is row-major and covers every cell once
    // Verified by iterating column-major
    #[test]
    fn test_row_major_iteration() {
        let grid = TileGrid::new(12, 8, 4, 1);
        let order: Vec<(usize, usize)> = grid.iter().map(|p| (p.row, p.col)).collect();

        assert_eq!(order.len(), grid.len());
        assert_eq!(order.first(), Some(&(0, 0)));
        assert_eq!(order.get(1), Some(&(0, 1)));
        assert_eq!(order.get(grid.cols()), Some(&(1, 0)));
        assert_eq!(grid.placement_at(grid.len()), None);
    }

    // Tests the union of footprints covers the canvas
    // Verified by dropping the final partial column
    #[test]
    fn test_footprints_cover_canvas() {
        for (width, height, tile, overlap) in [(10, 10, 4, 2), (17, 13, 5, 2), (7, 30, 6, 1)] {
            let grid = TileGrid::new(width, height, tile, overlap);
            let mut covered = vec![false; width * height];
            for p in grid.iter() {
                for y in p.y..p.y + p.height {
                    for x in p.x..p.x + p.width {
                        if let Some(cell) = covered.get_mut(y * width + x) {
                            *cell = true;
                        }
                    }
                }
            }
            assert!(covered.iter().all(|&c| c), "hole in {width}x{height}");
        }
    }

    // Tests zero-sized canvases produce an empty grid
    // Verified by rounding the tile count up from zero
    #[test]
    fn test_empty_canvas() {
        let grid = TileGrid::new(0, 10, 4, 2);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
    }
}
