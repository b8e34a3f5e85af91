//! Centroid and distance helpers used for motion checks.

use ndarray::{Array2, ArrayView1};

use crate::geometry::rect::Rect;

/// Compute the center of every box.
///
/// Returns a matrix of shape (N, 2) where row `i` holds the (x, y) center of
/// `boxes[i]`.
pub fn centroids(boxes: &[Rect]) -> Array2<f32> {
    let mut points = Array2::zeros((boxes.len(), 2));
    for (i, rect) in boxes.iter().enumerate() {
        let (cx, cy) = rect.center();
        points[[i, 0]] = cx;
        points[[i, 1]] = cy;
    }
    points
}

/// Euclidean distance between two points.
pub fn distance(p: ArrayView1<f32>, q: ArrayView1<f32>) -> f32 {
    p.iter()
        .zip(q.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f32>()
        .sqrt()
}

/// Whether two boxes overlap. See [`Rect::intersects`].
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_centroids() {
        let boxes = [Rect::new(0.0, 0.0, 10.0, 20.0), Rect::new(1.0, 1.0, 5.0, 5.0)];
        let points = centroids(&boxes);
        assert_eq!(points.dim(), (2, 2));
        assert_eq!(points.row(0).to_vec(), vec![5.0, 10.0]);
        assert_eq!(points.row(1).to_vec(), vec![3.0, 3.0]);
    }

    #[test]
    fn test_centroids_empty() {
        let points = centroids(&[]);
        assert_eq!(points.dim(), (0, 2));
    }

    #[test]
    fn test_distance() {
        let p = arr1(&[0.0_f32, 0.0]);
        let q = arr1(&[3.0_f32, 4.0]);
        assert!((distance(p.view(), q.view()) - 5.0).abs() < 1e-6);
        assert_eq!(distance(p.view(), q.view()), distance(q.view(), p.view()));
        assert_eq!(distance(p.view(), p.view()), 0.0);
    }

    #[test]
    fn test_intersects_matches_rect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(9.0, 9.0, 12.0, 12.0);
        assert!(intersects(&a, &b));
        assert!(!intersects(&a, &Rect::new(10.0, 10.0, 12.0, 12.0)));
    }
}
